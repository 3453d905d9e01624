/*
 * Unit tests for the elevator driver
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_driver_request_broadcasts_change
 * - test_driver_manual_step
 * - test_driver_rejects_out_of_range
 * - test_driver_auto_step
 * - test_driver_stops_when_commands_disconnect
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod driver_tests {
    use crate::config::{DriverConfig, ElevatorConfig};
    use crate::elevator::{DriverCommand, ElevatorDriver};
    use crate::shared::Direction::{Idle, Up};
    use crate::shared::RequestKind::{GoToFloor, GoUp};
    use crate::shared::{ElevatorCommand, OutOfRangeError, StateChange};
    use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender};
    use std::thread::{spawn, JoinHandle};
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(3);

    fn setup_driver(
        auto_step: bool,
        step_interval: u64,
    ) -> (
        JoinHandle<()>,
        Sender<DriverCommand>,      // command_tx
        Receiver<StateChange>,      // state_rx
        Receiver<OutOfRangeError>,  // error_rx
        Sender<()>,                 // terminate_tx
    ) {
        // Arrange mock channels
        let (command_tx, command_rx) = unbounded::<DriverCommand>();
        let (state_tx, state_rx) = unbounded::<StateChange>();
        let (error_tx, error_rx) = unbounded::<OutOfRangeError>();
        let (terminate_tx, terminate_rx) = unbounded::<()>();

        // Default configuration
        let elevator_config = ElevatorConfig { n_floors: 4 };
        let driver_config = DriverConfig {
            step_interval,
            auto_step,
        };

        let driver = ElevatorDriver::new(
            &elevator_config,
            &driver_config,
            command_rx,
            state_tx,
            error_tx,
            terminate_rx,
        );
        let driver_thread = spawn(move || driver.run());

        (driver_thread, command_tx, state_rx, error_rx, terminate_tx)
    }

    fn recv_change(state_rx: &Receiver<StateChange>) -> StateChange {
        match state_rx.recv_timeout(TIMEOUT) {
            Ok(change) => change,
            Err(RecvTimeoutError::Timeout) => panic!("Timed out waiting for state_rx"),
            Err(e) => panic!("Error receiving from state_rx: {:?}", e),
        }
    }

    #[test]
    fn test_driver_request_broadcasts_change() {
        // Purpose: Verify a request is applied and its state change is broadcast

        // Arrange
        let (driver_thread, command_tx, state_rx, _error_rx, terminate_tx) = setup_driver(false, 0);

        // Act
        command_tx
            .send(DriverCommand::Request(ElevatorCommand::new(2, GoUp)))
            .unwrap();

        // Assert
        let change = recv_change(&state_rx);
        assert!(!change.previous_state.requests[2].go_up);
        assert!(change.new_state.requests[2].go_up);
        assert_eq!(change.new_state.direction, Up);

        // Cleanup
        terminate_tx.send(()).unwrap();
        driver_thread.join().unwrap();
    }

    #[test]
    fn test_driver_manual_step() {
        // Arrange
        let (driver_thread, command_tx, state_rx, _error_rx, terminate_tx) = setup_driver(false, 0);

        // Act
        command_tx
            .send(DriverCommand::Request(ElevatorCommand::new(3, GoToFloor)))
            .unwrap();
        command_tx.send(DriverCommand::Step).unwrap();
        command_tx.send(DriverCommand::Step).unwrap();

        // Assert
        let _request = recv_change(&state_rx);
        let first_step = recv_change(&state_rx);
        let idle_step = recv_change(&state_rx);
        assert_eq!(first_step.new_state.floor, 3);
        assert_eq!(first_step.new_state.direction, Idle);
        assert!(!first_step.new_state.requests[3].drop);
        assert!(idle_step.is_noop());

        // Cleanup
        terminate_tx.send(()).unwrap();
        driver_thread.join().unwrap();
    }

    #[test]
    fn test_driver_rejects_out_of_range() {
        // Arrange
        let (driver_thread, command_tx, state_rx, error_rx, terminate_tx) = setup_driver(false, 0);

        // Act
        command_tx
            .send(DriverCommand::Request(ElevatorCommand::new(4, GoUp)))
            .unwrap();

        // Assert
        let error = error_rx.recv_timeout(TIMEOUT).unwrap();
        assert_eq!(error, OutOfRangeError { floor: 4, n_floors: 4 });
        assert!(state_rx.try_recv().is_err());

        // Cleanup
        terminate_tx.send(()).unwrap();
        driver_thread.join().unwrap();
    }

    #[test]
    fn test_driver_auto_step() {
        // Purpose: The ticker moves the car without any explicit step command

        // Arrange
        let (driver_thread, command_tx, state_rx, _error_rx, terminate_tx) = setup_driver(true, 20);

        // Act
        command_tx
            .send(DriverCommand::Request(ElevatorCommand::new(3, GoUp)))
            .unwrap();

        // Assert
        let _request = recv_change(&state_rx);
        let step = recv_change(&state_rx);
        assert_eq!(step.new_state.floor, 3);
        assert_eq!(step.new_state.direction, Idle);

        // Idle ticks are not broadcast
        assert_eq!(
            state_rx.recv_timeout(Duration::from_millis(200)),
            Err(RecvTimeoutError::Timeout)
        );

        // Cleanup
        terminate_tx.send(()).unwrap();
        driver_thread.join().unwrap();
    }

    #[test]
    fn test_driver_stops_when_commands_disconnect() {
        // Arrange
        let (driver_thread, command_tx, _state_rx, _error_rx, _terminate_tx) = setup_driver(false, 0);

        // Act
        drop(command_tx);

        // Assert
        driver_thread.join().unwrap();
    }
}
