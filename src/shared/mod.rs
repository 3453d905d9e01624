pub mod error;
pub mod macros;
pub mod structs;

pub use error::ConfigError;
pub use error::OutOfRangeError;
pub use error::ParseError;
pub use structs::Direction;
pub use structs::ElevatorCommand;
pub use structs::ElevatorData;
pub use structs::ElevatorState;
pub use structs::FloorRequest;
pub use structs::RequestKind;
pub use structs::StateChange;
