/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Public errors             */
/***************************************/

/// Raised when a request names a floor outside `0..n_floors`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Floor must be 0 - {}", top_floor(.n_floors))]
pub struct OutOfRangeError {
    pub floor: i64,
    pub n_floors: u8,
}

fn top_floor(n_floors: &u8) -> i64 {
    i64::from(*n_floors) - 1
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown command '{0}', type 'help' for a list of commands")]
    UnknownCommand(String),
    #[error("command '{0}' expects a floor number")]
    MissingFloor(String),
    #[error("'{0}' is not a floor number")]
    InvalidFloor(String),
    #[error("too many arguments for '{0}'")]
    TrailingInput(String),
}
