pub mod driver;
pub mod driver_tests;
pub mod engine;
pub mod requests;

pub use driver::DriverCommand;
pub use driver::ElevatorDriver;
pub use engine::Elevator;
pub use engine::ListenerId;
pub use engine::ListenerResult;
