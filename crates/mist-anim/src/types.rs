//! Core animation types.
//!
//! - `Direction`: which way a slot's progress moves
//! - `Point` / `Rect`: integer geometry carried as opaque metadata
//! - `AnimationSlot`: the state of one running animation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AnimationError;

/// Lower bound of slot progress.
pub const MIN_PROGRESS: f64 = 0.0;
/// Upper bound of slot progress.
pub const MAX_PROGRESS: f64 = 1.0;

/// Direction an animation slot moves in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Progress runs 0 -> 1 and stays there.
    #[default]
    In,
    /// Progress runs 1 -> 0 and stays there.
    Out,
    /// Progress runs 0 -> 1, then the slot switches to `InOutOut`.
    InOutIn,
    /// Progress runs 1 -> 0 using the secondary increment.
    InOutOut,
}

impl Direction {
    /// All directions, in tag order.
    pub const ALL: [Direction; 4] = [
        Direction::In,
        Direction::Out,
        Direction::InOutIn,
        Direction::InOutOut,
    ];

    /// Progress a freshly started slot begins at.
    pub fn initial_progress(self) -> f64 {
        match self {
            Self::In | Self::InOutIn => MIN_PROGRESS,
            Self::Out | Self::InOutOut => MAX_PROGRESS,
        }
    }

    /// True when each tick adds to progress.
    pub fn is_increasing(self) -> bool {
        matches!(self, Self::In | Self::InOutIn)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOutIn => "in_out_in",
            Self::InOutOut => "in_out_out",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            "in_out_in" | "inoutin" => Ok(Self::InOutIn),
            "in_out_out" | "inoutout" => Ok(Self::InOutOut),
            _ => Err(AnimationError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = AnimationError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(tag as usize)
            .copied()
            .ok_or_else(|| AnimationError::InvalidDirection(format!("tag {}", tag)))
    }
}

/// Integer point in control coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Integer rectangle; `right`/`bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// State of one animation tracked by the manager.
///
/// `source` and `data` are never interpreted by the manager; they are handed
/// back to the consumer verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSlot<D> {
    /// Raw linear progress, kept in `[0, 1]` by the tick loop.
    pub progress: f64,
    pub direction: Direction,
    pub source: Point,
    pub data: Vec<D>,
}

impl<D> AnimationSlot<D> {
    /// Create a slot positioned at the start of `direction`.
    pub fn new(direction: Direction, source: Point, data: Vec<D>) -> Self {
        Self {
            progress: direction.initial_progress(),
            direction,
            source,
            data,
        }
    }

    /// True once progress has reached the bound `direction` is heading for.
    pub fn at_terminal_bound(&self) -> bool {
        match self.direction {
            Direction::In | Direction::InOutIn => self.progress == MAX_PROGRESS,
            Direction::Out | Direction::InOutOut => self.progress == MIN_PROGRESS,
        }
    }
}

static_assertions::assert_impl_all!(Direction: Send, Sync, Copy);
static_assertions::assert_impl_all!(AnimationSlot<()>: Send, Sync);
