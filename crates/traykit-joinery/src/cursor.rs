//! Layout cursor: where the next panel goes on the output canvas.

use std::fmt;
use std::str::FromStr;

use traykit_core::Point;

use crate::error::ParameterError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    fn as_str(&self) -> &'static str {
        match self {
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Down => "down",
        }
    }
}

/// Cursor movement requested by a panel.
///
/// `left` and `down` shift the cursor before the panel is placed, `right`
/// and `up` after it. With `only` the cursor moves but nothing is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Move {
    pub direction: Option<Direction>,
    pub only: bool,
}

impl Move {
    pub const STAY: Move = Move {
        direction: None,
        only: false,
    };

    pub fn to(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            only: false,
        }
    }

    pub fn only(direction: Direction) -> Self {
        Self {
            direction: Some(direction),
            only: true,
        }
    }
}

impl FromStr for Move {
    type Err = ParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut result = Move::default();
        for word in s.split_whitespace() {
            let direction = match word {
                "right" => Direction::Right,
                "up" => Direction::Up,
                "left" => Direction::Left,
                "down" => Direction::Down,
                "only" => {
                    result.only = true;
                    continue;
                }
                other => {
                    return Err(ParameterError::InvalidValue {
                        name: "move".to_string(),
                        reason: format!("unknown word '{}' in '{}'", other, s),
                    })
                }
            };
            if result.direction.replace(direction).is_some() {
                return Err(ParameterError::InvalidValue {
                    name: "move".to_string(),
                    reason: format!("more than one direction in '{}'", s),
                });
            }
        }
        Ok(result)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.direction, self.only) {
            (Some(d), true) => write!(f, "{} only", d.as_str()),
            (Some(d), false) => write!(f, "{}", d.as_str()),
            (None, true) => write!(f, "only"),
            (None, false) => Ok(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayoutCursor {
    x: f64,
    y: f64,
    spacing: f64,
}

impl LayoutCursor {
    pub fn new(spacing: f64) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            spacing,
        }
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Places a `width` by `height` box and moves the cursor. Returns the
    /// lower-left corner of the box, or `None` for an `only` move.
    pub fn place(&mut self, movement: Move, width: f64, height: f64) -> Option<Point> {
        let dx = width + self.spacing;
        let dy = height + self.spacing;

        match movement.direction {
            Some(Direction::Left) => self.x -= dx,
            Some(Direction::Down) => self.y -= dy,
            _ => {}
        }

        let position = self.position();

        match movement.direction {
            Some(Direction::Right) => self.x += dx,
            Some(Direction::Up) => self.y += dy,
            _ => {}
        }

        if movement.only {
            None
        } else {
            Some(position)
        }
    }
}
