/* 3rd party libraries */
use clap::Parser;
use crossbeam_channel as cbc;
use env_logger::Env;
use log::{error, info, warn};
use std::io::BufRead;
use std::thread::Builder;

/* Custom libraries */
use elevator_engine::config;
use elevator_engine::console::{self, ConsoleCommand};
use elevator_engine::elevator::{DriverCommand, Elevator, ElevatorDriver};
use elevator_engine::shared::{ElevatorData, OutOfRangeError, StateChange};
use elevator_engine::unwrap_or_exit;

/* Arguments */
#[derive(Parser, Debug)]
#[clap(about = "Single car elevator dispatch simulator")]
struct Args {
    /// Path to the configuration file
    #[clap(long, short, default_value = "config.toml")]
    config: String,

    /// Number of floors, overrides the configuration file
    #[clap(long, short)]
    floors: Option<u8>,

    /// Milliseconds between automatic steps, overrides the configuration file
    #[clap(long, short)]
    interval: Option<u64>,

    /// Only step on the `step` command
    #[clap(long)]
    manual: bool,
}

/* Main */
fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config(&args.config));
    if let Some(n_floors) = args.floors {
        config.elevator.n_floors = n_floors;
    }
    if let Some(step_interval) = args.interval {
        config.driver.step_interval = step_interval;
    }
    if args.manual {
        config.driver.auto_step = false;
    }

    // Initialize channels
    let (command_tx, command_rx) = cbc::unbounded::<DriverCommand>();
    let (state_tx, state_rx) = cbc::unbounded::<StateChange>();
    let (error_tx, error_rx) = cbc::unbounded::<OutOfRangeError>();
    let (show_tx, show_rx) = cbc::unbounded::<()>();
    let (terminate_tx, terminate_rx) = cbc::unbounded::<()>();

    let initial_state = Elevator::new(config.elevator.n_floors).full_state();

    // Start the elevator driver
    let elevator_driver = ElevatorDriver::new(
        &config.elevator,
        &config.driver,
        command_rx,
        state_tx,
        error_tx,
        terminate_rx,
    );
    let elevator_driver_thread = unwrap_or_exit!(Builder::new()
        .name("elevator_driver".into())
        .spawn(move || elevator_driver.run()));

    // Start the printer
    let printer_thread = unwrap_or_exit!(Builder::new()
        .name("printer".into())
        .spawn(move || run_printer(initial_state, state_rx, error_rx, show_rx)));

    println!("{}", console::HELP);

    // Read commands until quit or end of input
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Error reading input: {}", e);
                break;
            }
        };

        match console::parse_command(&line) {
            Ok(ConsoleCommand::Driver(command)) => {
                if command_tx.send(command).is_err() {
                    error!("Elevator driver stopped");
                    break;
                }
            }
            Ok(ConsoleCommand::State) => {
                let _ = show_tx.send(());
            }
            Ok(ConsoleCommand::Help) => println!("{}", console::HELP),
            Ok(ConsoleCommand::Quit) => break,
            Ok(ConsoleCommand::Empty) => (),
            Err(e) => warn!("{}", e),
        }
    }

    // Cleanup
    info!("Shutting down");
    let _ = terminate_tx.send(());
    if elevator_driver_thread.join().is_err() {
        error!("Elevator driver thread panicked");
    }
    drop(show_tx);
    if printer_thread.join().is_err() {
        error!("Printer thread panicked");
    }
}

/// Prints every state change as a JSON line followed by the floor table.
fn run_printer(
    initial_state: ElevatorData,
    state_rx: cbc::Receiver<StateChange>,
    error_rx: cbc::Receiver<OutOfRangeError>,
    show_rx: cbc::Receiver<()>,
) {
    let mut current = initial_state;

    loop {
        cbc::select! {
            recv(state_rx) -> change => {
                match change {
                    Ok(change) => {
                        match serde_json::to_string(&change) {
                            Ok(json) => println!("{}", json),
                            Err(e) => warn!("Error serializing state change: {}", e),
                        }
                        current = change.new_state;
                        println!("{}", console::render_state(&current));
                    }
                    Err(_) => break,
                }
            }
            recv(error_rx) -> rejected => {
                match rejected {
                    Ok(e) => warn!("Request rejected: {}", e),
                    Err(_) => break,
                }
            }
            recv(show_rx) -> show => {
                match show {
                    Ok(()) => println!("{}", console::render_state(&current)),
                    Err(_) => break,
                }
            }
        }
    }
}
