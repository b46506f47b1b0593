//! Captured drawing primitives.

use serde::{Deserialize, Serialize};

/// The kind of drawing primitive a record captures.
///
/// Numeric codes are part of the host contract; see the crate docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandKind {
    /// Move the pen without drawing.
    Move,
    /// Draw a line to (x, y); (x2, y2) is the start point.
    Vector,
    /// Draw a string at (x, y).
    Text,
    /// Change the current drawing color.
    Color,
    /// Change the line width (in `value`).
    LineWidth,
    /// Draw a point marker at (x, y); style index in `value`.
    Point,
    /// Change the text angle (degrees, in `value`).
    TextAngle,
    /// Fill the rectangle spanned by (x, y) and (x2, y2).
    FillBox,
}

impl CommandKind {
    /// The fixed numeric code for this kind.
    pub fn code(self) -> i32 {
        match self {
            CommandKind::Move => 0,
            CommandKind::Vector => 1,
            CommandKind::Text => 2,
            CommandKind::Color => 3,
            CommandKind::LineWidth => 4,
            CommandKind::Point => 5,
            CommandKind::TextAngle => 6,
            CommandKind::FillBox => 7,
        }
    }

    /// Look up a kind from its numeric code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(CommandKind::Move),
            1 => Some(CommandKind::Vector),
            2 => Some(CommandKind::Text),
            3 => Some(CommandKind::Color),
            4 => Some(CommandKind::LineWidth),
            5 => Some(CommandKind::Point),
            6 => Some(CommandKind::TextAngle),
            7 => Some(CommandKind::FillBox),
            _ => None,
        }
    }

    /// Whether records of this kind carry a meaningful secondary
    /// coordinate pair.
    pub fn has_secondary(self) -> bool {
        matches!(self, CommandKind::Vector | CommandKind::FillBox)
    }
}

/// One captured drawing call.
///
/// `x2`/`y2` are meaningful only when [`CommandKind::has_secondary`] holds;
/// `color` is a packed `0xRRGGBB` value; `value` is a generic payload (line
/// width, point style, angle) depending on the kind. Cloning a record deep
/// copies its text payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandRecord {
    pub kind: CommandKind,
    pub x: i32,
    pub y: i32,
    pub x2: i32,
    pub y2: i32,
    pub text: Option<String>,
    pub color: u32,
    pub value: f64,
}

impl CommandRecord {
    /// A record with only a kind and primary coordinates set.
    pub fn at(kind: CommandKind, x: i32, y: i32) -> Self {
        Self {
            kind,
            x,
            y,
            x2: 0,
            y2: 0,
            text: None,
            color: 0,
            value: 0.0,
        }
    }

    /// A vector from (x2, y2) to (x, y).
    pub fn vector(x: i32, y: i32, x2: i32, y2: i32) -> Self {
        Self {
            x2,
            y2,
            ..Self::at(CommandKind::Vector, x, y)
        }
    }

    /// A text draw at (x, y).
    pub fn text(x: i32, y: i32, text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::at(CommandKind::Text, x, y)
        }
    }

    /// A color change to a packed `0xRRGGBB` value.
    pub fn color(rgb: u32) -> Self {
        Self {
            color: rgb,
            ..Self::at(CommandKind::Color, 0, 0)
        }
    }

    /// A filled box spanning (x, y) and (x2, y2).
    pub fn fill_box(x: i32, y: i32, x2: i32, y2: i32) -> Self {
        Self {
            x2,
            y2,
            ..Self::at(CommandKind::FillBox, x, y)
        }
    }
}
