/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, ElevatorState, FloorRequest, RequestKind};

/**
 * Per-floor request table owned by the elevator engine.
 *
 * Each floor carries three flags: a hall call upwards (`go_up`), a hall call downwards
 * (`go_down`) and a destination registered from inside the car (`drop`). The table never
 * hands out references to its storage, callers only ever receive copies.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTable {
    requests: Vec<FloorRequest>,
}

impl RequestTable {
    pub fn new(n_floors: u8) -> RequestTable {
        RequestTable {
            requests: vec![FloorRequest::default(); n_floors as usize],
        }
    }

    pub fn n_floors(&self) -> usize {
        self.requests.len()
    }

    pub fn get(&self, floor: u8) -> Option<FloorRequest> {
        self.requests.get(floor as usize).copied()
    }

    /// Sets the flag for `kind`. `floor` must already be validated.
    pub fn set(&mut self, floor: u8, kind: RequestKind) {
        let request = &mut self.requests[floor as usize];
        match kind {
            RequestKind::GoUp => request.go_up = true,
            RequestKind::GoDown => request.go_down = true,
            RequestKind::GoToFloor => request.drop = true,
        }
    }

    /// Clears what a stop at `floor` serves when arriving in `direction`.
    pub fn clear_served(&mut self, floor: u8, direction: Direction) {
        let Some(request) = self.requests.get_mut(floor as usize) else {
            return;
        };
        match direction {
            Direction::Up => {
                request.go_up = false;
                request.drop = false;
            }
            Direction::Down => {
                request.go_down = false;
                request.drop = false;
            }
            Direction::Idle => (),
        }
    }

    pub fn has_pending(&self) -> bool {
        self.requests.iter().any(FloorRequest::is_pending)
    }

    pub fn snapshot(&self) -> Vec<FloorRequest> {
        self.requests.clone()
    }

    /**
     * Finds the next stop from `from_floor` while heading in `direction`.
     *
     * Two passes cover every floor. The down pass looks below the car for `go_down`/`drop`,
     * then wraps from the bottom for `go_up`/`drop`. The up pass looks above the car for
     * `go_up`/`drop`, then wraps from the top for `go_down`/`drop`. Heading `Up` runs the up
     * pass first, `Down` and `Idle` run the down pass first. The first match wins.
     *
     * Returns `None` only if no flag is set on any floor.
     */
    pub fn next_stop(&self, direction: Direction, from_floor: u8) -> Option<ElevatorState> {
        match direction {
            Direction::Up => self
                .scan_up_pass(from_floor)
                .or_else(|| self.scan_down_pass(from_floor)),
            Direction::Down | Direction::Idle => self
                .scan_down_pass(from_floor)
                .or_else(|| self.scan_up_pass(from_floor)),
        }
    }

    fn scan_down_pass(&self, from_floor: u8) -> Option<ElevatorState> {
        let below = (0..from_floor as usize).rev();
        if let Some(floor) = self.first_match(below, |r| r.go_down || r.drop) {
            return Some(stop(Direction::Down, floor));
        }

        let wrap = 0..self.n_floors();
        self.first_match(wrap, |r| r.go_up || r.drop)
            .map(|floor| stop(Direction::Up, floor))
    }

    fn scan_up_pass(&self, from_floor: u8) -> Option<ElevatorState> {
        let above = (from_floor as usize + 1)..self.n_floors();
        if let Some(floor) = self.first_match(above, |r| r.go_up || r.drop) {
            return Some(stop(Direction::Up, floor));
        }

        let wrap = (0..self.n_floors()).rev();
        self.first_match(wrap, |r| r.go_down || r.drop)
            .map(|floor| stop(Direction::Down, floor))
    }

    fn first_match<I, F>(&self, floors: I, wanted: F) -> Option<usize>
    where
        I: Iterator<Item = usize>,
        F: Fn(&FloorRequest) -> bool,
    {
        floors
            .into_iter()
            .find(|&floor| self.requests.get(floor).map_or(false, &wanted))
    }
}

// Floor indices come from a table of at most u8::MAX entries.
fn stop(direction: Direction, floor: usize) -> ElevatorState {
    ElevatorState {
        direction,
        floor: floor as u8,
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
