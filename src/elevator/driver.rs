use crate::config::{DriverConfig, ElevatorConfig};
use crate::elevator::Elevator;
use crate::shared::{ElevatorCommand, OutOfRangeError, StateChange};
use crossbeam_channel as cbc;
use log::{debug, info, warn};
use std::time::Duration;

/**
 * Serialises every access to the elevator engine on one thread.
 *
 * The `ElevatorDriver` owns the `Elevator` and is the only caller of its mutating
 * operations. Requests and manual steps arrive on a channel, automatic steps come from a
 * ticker, and every resulting state change is broadcast to the subscribers.
 *
 * # Fields
 * - `elevator`:        The engine, owned by the driver thread.
 * - `command_rx`:      Receives requests and manual step triggers.
 * - `state_tx`:        Broadcasts state changes (previous and new state).
 * - `error_tx`:        Reports rejected requests.
 * - `terminate_rx`:    Stops the run loop.
 * - `step_interval`:   Time between automatic steps.
 * - `auto_step`:       Whether the ticker drives the elevator.
 */

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCommand {
    Request(ElevatorCommand),
    Step,
}

pub struct ElevatorDriver {
    elevator: Elevator,
    command_rx: cbc::Receiver<DriverCommand>,
    state_tx: cbc::Sender<StateChange>,
    error_tx: cbc::Sender<OutOfRangeError>,
    terminate_rx: cbc::Receiver<()>,
    step_interval: Duration,
    auto_step: bool,
}

impl ElevatorDriver {
    pub fn new(
        elevator_config: &ElevatorConfig,
        driver_config: &DriverConfig,
        command_rx: cbc::Receiver<DriverCommand>,
        state_tx: cbc::Sender<StateChange>,
        error_tx: cbc::Sender<OutOfRangeError>,
        terminate_rx: cbc::Receiver<()>,
    ) -> ElevatorDriver {
        ElevatorDriver {
            elevator: Elevator::new(elevator_config.n_floors),
            command_rx,
            state_tx,
            error_tx,
            terminate_rx,
            step_interval: Duration::from_millis(driver_config.step_interval),
            auto_step: driver_config.auto_step,
        }
    }

    pub fn run(mut self) {
        info!(
            "Elevator driver started with {} floors, auto step {}",
            self.elevator.n_floors(),
            if self.auto_step {
                format!("every {} ms", self.step_interval.as_millis())
            } else {
                "disabled".to_string()
            }
        );

        let ticker = if self.auto_step && !self.step_interval.is_zero() {
            cbc::tick(self.step_interval)
        } else {
            cbc::never()
        };

        // Main loop
        loop {
            cbc::select! {
                recv(self.command_rx) -> command => {
                    match command {
                        Ok(command) => self.handle_command(command),
                        Err(_) => {
                            info!("Command channel closed, stopping elevator driver");
                            break;
                        }
                    }
                }
                recv(ticker) -> _ => {
                    let change = self.elevator.step();
                    // Quiet while idle
                    if !change.is_noop() {
                        self.broadcast(change);
                    }
                }
                recv(self.terminate_rx) -> _ => {
                    info!("Elevator driver terminated");
                    break;
                }
            }
        }
    }

    fn handle_command(&mut self, command: DriverCommand) {
        match command {
            DriverCommand::Request(request) => {
                match self.elevator.add_request(request.floor, request.kind) {
                    Ok(change) => self.broadcast(change),
                    Err(e) => {
                        if self.error_tx.send(e).is_err() {
                            debug!("No receiver for rejected request");
                        }
                    }
                }
            }
            DriverCommand::Step => {
                let change = self.elevator.step();
                self.broadcast(change);
            }
        }
    }

    fn broadcast(&self, change: StateChange) {
        if let Err(e) = self.state_tx.send(change) {
            warn!("Error sending state change: {}", e);
        }
    }
}
