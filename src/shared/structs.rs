/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up,
    Down,
    /// No motion decided. Scans treat it as "check both directions".
    Idle,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestKind {
    GoUp,
    GoDown,
    GoToFloor,
}

/// A request for a single floor, as issued by a hall button or a cab button.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorCommand {
    pub floor: i64,
    pub kind: RequestKind,
}

impl ElevatorCommand {
    pub fn new(floor: i64, kind: RequestKind) -> ElevatorCommand {
        ElevatorCommand { floor, kind }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FloorRequest {
    pub go_up: bool,
    pub go_down: bool,
    pub drop: bool,
}

impl FloorRequest {
    pub fn is_pending(&self) -> bool {
        self.go_up || self.go_down || self.drop
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElevatorState {
    pub direction: Direction,
    pub floor: u8,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ElevatorData {
    pub direction: Direction,
    pub floor: u8,
    pub requests: Vec<FloorRequest>,
}

impl ElevatorData {
    pub fn state(&self) -> ElevatorState {
        ElevatorState {
            direction: self.direction,
            floor: self.floor,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StateChange {
    pub previous_state: ElevatorData,
    pub new_state: ElevatorData,
}

impl StateChange {
    pub fn is_noop(&self) -> bool {
        self.previous_state == self.new_state
    }
}
