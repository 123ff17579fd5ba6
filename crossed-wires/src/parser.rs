use miette::Diagnostic;
use nom::{
    branch::alt,
    character::complete::{char, digit1, line_ending},
    combinator::{all_consuming, map, map_res, value},
    multi::{many1, separated_list1},
    sequence::{pair, terminated},
    IResult,
};
use thiserror::Error;

/// Compass direction of a single routing step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit vector for one move in this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
            Self::Up => (0, 1),
            Self::Down => (0, -1),
        }
    }
}

/// One routing instruction: a direction and how many grid units to cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub direction: Direction,
    pub length: u32,
}

/// The ordered step sequence of one wire, one input line each.
/// Order is significant: reversing it routes a different path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wire(pub Vec<Step>);

#[derive(Debug, Error, Diagnostic)]
pub enum ParseError {
    #[error("input must end with a newline")]
    #[diagnostic(code(parser::unterminated_line))]
    UnterminatedLine,

    #[error("malformed step sequence: {0}")]
    #[diagnostic(code(parser::malformed_steps))]
    MalformedSteps(String),

    #[error("expected exactly 2 wires, found {found}")]
    #[diagnostic(code(parser::wire_count))]
    WireCount { found: usize },
}

fn direction(input: &str) -> IResult<&str, Direction> {
    alt((
        value(Direction::Left, char('L')),
        value(Direction::Right, char('R')),
        value(Direction::Up, char('U')),
        value(Direction::Down, char('D')),
    ))(input)
}

fn step(input: &str) -> IResult<&str, Step> {
    map_res(pair(direction, digit1), |(direction, length): (_, &str)| {
        length
            .parse::<u32>()
            .map(|length| Step { direction, length })
    })(input)
}

fn wire(input: &str) -> IResult<&str, Wire> {
    map(separated_list1(char(','), step), Wire)(input)
}

/// Parses the whole puzzle input: one comma-separated step line per wire,
/// every line newline-terminated, the last one included.
#[tracing::instrument]
pub fn parse_wires(input: &str) -> Result<[Wire; 2], ParseError> {
    if !input.ends_with('\n') {
        return Err(ParseError::UnterminatedLine);
    }

    let (_, wires) = all_consuming(many1(terminated(wire, line_ending)))(input)
        .map_err(|e| ParseError::MalformedSteps(e.to_string()))?;

    let found = wires.len();
    <[Wire; 2]>::try_from(wires).map_err(|_| ParseError::WireCount { found })
}
