/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::DriverCommand;
use crate::shared::{Direction, ElevatorCommand, ElevatorData, ParseError, RequestKind};

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    Driver(DriverCommand),
    State,
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "\
Commands:
  up <floor>     call the elevator to go up from <floor>
  down <floor>   call the elevator to go down from <floor>
  go <floor>     request <floor> from inside the car
  step           advance to the next stop
  state          print the current state
  help           print this message
  quit           exit";

/***************************************/
/*             Public API              */
/***************************************/
pub fn parse_command(line: &str) -> Result<ConsoleCommand, ParseError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(ConsoleCommand::Empty);
    };
    let name = word.to_lowercase();

    let command = match name.as_str() {
        "up" => request(&name, words.next(), RequestKind::GoUp)?,
        "down" => request(&name, words.next(), RequestKind::GoDown)?,
        "go" | "goto" => request(&name, words.next(), RequestKind::GoToFloor)?,
        "step" | "next" => ConsoleCommand::Driver(DriverCommand::Step),
        "state" => ConsoleCommand::State,
        "help" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };

    if words.next().is_some() {
        return Err(ParseError::TrailingInput(name));
    }
    Ok(command)
}

/// Renders the floor table with the top floor first.
pub fn render_state(data: &ElevatorData) -> String {
    let arrow = match data.direction {
        Direction::Up => "^",
        Direction::Down => "v",
        Direction::Idle => "-",
    };

    let mut lines = vec!["floor  up  down  drop  car".to_string()];
    for (floor, request) in data.requests.iter().enumerate().rev() {
        let car = if floor == data.floor as usize { arrow } else { "" };
        lines.push(format!(
            "{:>5}  {:^2}  {:^4}  {:^4}  {}",
            floor,
            mark(request.go_up),
            mark(request.go_down),
            mark(request.drop),
            car
        ));
    }
    lines.join("\n")
}

fn request(name: &str, floor: Option<&str>, kind: RequestKind) -> Result<ConsoleCommand, ParseError> {
    let floor = floor.ok_or_else(|| ParseError::MissingFloor(name.to_string()))?;
    let floor = floor
        .parse::<i64>()
        .map_err(|_| ParseError::InvalidFloor(floor.to_string()))?;
    Ok(ConsoleCommand::Driver(DriverCommand::Request(ElevatorCommand::new(floor, kind))))
}

fn mark(set: bool) -> &'static str {
    if set {
        "*"
    } else {
        "."
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod console_tests {
    use super::*;
    use crate::shared::FloorRequest;

    fn request_command(floor: i64, kind: RequestKind) -> ConsoleCommand {
        ConsoleCommand::Driver(DriverCommand::Request(ElevatorCommand::new(floor, kind)))
    }

    #[test]
    fn test_parse_requests() {
        assert_eq!(parse_command("up 3"), Ok(request_command(3, RequestKind::GoUp)));
        assert_eq!(parse_command("DOWN 0"), Ok(request_command(0, RequestKind::GoDown)));
        assert_eq!(parse_command("  go   7 "), Ok(request_command(7, RequestKind::GoToFloor)));
        assert_eq!(parse_command("goto -2"), Ok(request_command(-2, RequestKind::GoToFloor)));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("step"), Ok(ConsoleCommand::Driver(DriverCommand::Step)));
        assert_eq!(parse_command("next"), Ok(ConsoleCommand::Driver(DriverCommand::Step)));
        assert_eq!(parse_command("State"), Ok(ConsoleCommand::State));
        assert_eq!(parse_command("help"), Ok(ConsoleCommand::Help));
        assert_eq!(parse_command("exit"), Ok(ConsoleCommand::Quit));
        assert_eq!(parse_command("   "), Ok(ConsoleCommand::Empty));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_command("fly 3"), Err(ParseError::UnknownCommand("fly".to_string())));
        assert_eq!(parse_command("up"), Err(ParseError::MissingFloor("up".to_string())));
        assert_eq!(parse_command("down two"), Err(ParseError::InvalidFloor("two".to_string())));
        assert_eq!(parse_command("step 2"), Err(ParseError::TrailingInput("step".to_string())));
    }

    #[test]
    fn test_render_state() {
        // Arrange
        let data = ElevatorData {
            direction: Direction::Up,
            floor: 1,
            requests: vec![
                FloorRequest::default(),
                FloorRequest::default(),
                FloorRequest { go_up: true, go_down: false, drop: true },
            ],
        };

        // Act
        let rendered = render_state(&data);
        let lines: Vec<&str> = rendered.lines().collect();

        // Assert
        assert_eq!(lines.len(), 4);
        assert!(lines[1].trim_start().starts_with('2'));
        assert_eq!(lines[1].matches('*').count(), 2);
        assert!(lines[2].trim_end().ends_with('^'));
        assert!(lines[3].trim_start().starts_with('0'));
        assert!(!lines[3].contains('*'));
    }
}
