/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, warn};
use std::cmp::Ordering;
use std::error::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::requests::RequestTable;
use crate::shared::{
    Direction, ElevatorData, ElevatorState, FloorRequest, OutOfRangeError, RequestKind,
    StateChange,
};

pub type ListenerResult = Result<(), Box<dyn Error + Send + Sync>>;
pub type Listener = Box<dyn FnMut(&StateChange) -> ListenerResult + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/**
 * Dispatch engine for a single elevator car.
 *
 * The `Elevator` owns the car position, the direction used to seed the next scan and the
 * per-floor request table. It is advanced one stop at a time by an external driver through
 * `step`, and edited through `add_request`. Every accepted mutation returns the
 * `(previous_state, new_state)` pair and delivers it synchronously to the registered
 * listeners, in registration order, after the new state has been committed.
 *
 * # Fields
 * - `n_floors`:            Number of floors, fixed at construction.
 * - `floor`:               Last floor stopped at. The car starts at floor 0.
 * - `direction`:           Direction the next scan starts with. Seeded with `Up`.
 * - `requests`:            Per-floor hall calls and drop requests.
 * - `listeners`:           State change subscribers.
 *
 * The engine is not synchronised. Callers on several threads must serialise access,
 * see `ElevatorDriver`.
 */
pub struct Elevator {
    n_floors: u8,
    floor: u8,
    direction: Direction,
    requests: RequestTable,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl Elevator {
    pub fn new(n_floors: u8) -> Elevator {
        Elevator {
            n_floors,
            floor: 0,
            direction: Direction::Up,
            requests: RequestTable::new(n_floors),
            listeners: Vec::new(),
            next_listener_id: 0,
        }
    }

    pub fn n_floors(&self) -> u8 {
        self.n_floors
    }

    /// Registers a request. Out of range floors are rejected before anything changes.
    pub fn add_request(
        &mut self,
        floor: i64,
        kind: RequestKind,
    ) -> Result<StateChange, OutOfRangeError> {
        let floor = self.validate_floor(floor)?;
        let previous_state = self.full_state();

        match kind {
            RequestKind::GoUp | RequestKind::GoDown => self.requests.set(floor, kind),
            RequestKind::GoToFloor => match self.command_direction(floor) {
                // The car is already there
                Direction::Idle => (),
                Direction::Up | Direction::Down => self.requests.set(floor, kind),
            },
        }
        debug!("Request {:?} at floor {} registered", kind, floor);

        let change = StateChange {
            previous_state,
            new_state: self.full_state(),
        };
        self.notify(&change);
        Ok(change)
    }

    /// Computes where the car stops next without moving it.
    pub fn next_stop(&self) -> ElevatorState {
        self.requests
            .next_stop(self.direction, self.floor)
            .unwrap_or(ElevatorState {
                direction: Direction::Idle,
                floor: self.floor,
            })
    }

    /// Moves the car to the next stop and clears the requests it serves there.
    pub fn step(&mut self) -> StateChange {
        let next = self.next_stop();
        let previous_state = self.full_state();

        self.floor = next.floor;
        self.direction = next.direction;
        self.requests.clear_served(self.floor, self.direction);

        // Direction for the following decision, Idle if nothing is left
        self.direction = self.next_stop().direction;

        let new_state = self.full_state();
        if previous_state != new_state {
            debug!(
                "Stepped from floor {} to floor {}, heading {:?}",
                previous_state.floor, new_state.floor, new_state.direction
            );
        }

        let change = StateChange {
            previous_state,
            new_state,
        };
        self.notify(&change);
        change
    }

    pub fn snapshot(&self) -> ElevatorState {
        ElevatorState {
            direction: self.reported_direction(),
            floor: self.floor,
        }
    }

    pub fn full_state(&self) -> ElevatorData {
        ElevatorData {
            direction: self.reported_direction(),
            floor: self.floor,
            requests: self.requests.snapshot(),
        }
    }

    pub fn requests(&self) -> Vec<FloorRequest> {
        self.requests.snapshot()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&StateChange) -> ListenerResult + Send + 'static,
    {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    fn validate_floor(&self, floor: i64) -> Result<u8, OutOfRangeError> {
        u8::try_from(floor)
            .ok()
            .filter(|f| *f < self.n_floors)
            .ok_or_else(|| {
                warn!("Rejected request for floor {}", floor);
                OutOfRangeError {
                    floor,
                    n_floors: self.n_floors,
                }
            })
    }

    fn command_direction(&self, floor: u8) -> Direction {
        match floor.cmp(&self.floor) {
            Ordering::Less => Direction::Down,
            Ordering::Greater => Direction::Up,
            Ordering::Equal => Direction::Idle,
        }
    }

    // Idle exactly when nothing is pending. A stored Idle with pending requests reports the
    // heading of the next stop instead.
    fn reported_direction(&self) -> Direction {
        match self.direction {
            _ if !self.requests.has_pending() => Direction::Idle,
            Direction::Idle => self.next_stop().direction,
            direction => direction,
        }
    }

    fn notify(&mut self, change: &StateChange) {
        for (id, listener) in self.listeners.iter_mut() {
            if let Err(e) = listener(change) {
                warn!("State change listener {:?} failed: {}", id, e);
            }
        }
    }
}
