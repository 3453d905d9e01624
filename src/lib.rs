pub mod config;
pub mod console;
pub mod elevator;
pub mod shared;

pub use elevator::Elevator;
pub use elevator::ElevatorDriver;
pub use shared::ElevatorData;
pub use shared::ElevatorState;
pub use shared::StateChange;
