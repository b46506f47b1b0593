//! # plotcap-capture - Drawing-command capture
//!
//! When the engine renders through the capture backend, every low-level
//! drawing primitive (move, vector, text, color change, filled box) is
//! appended to a [`CommandBuffer`] instead of producing device output. The
//! buffer holds one frame at a time: `begin_frame` clears it, appends
//! accumulate in issuance order, and [`CommandBuffer::snapshot`] hands the
//! host an owned deep copy it can keep across later frames.
//!
//! ## Command codes
//!
//! Each [`CommandKind`] carries a fixed numeric code so host bindings can
//! expose records without depending on Rust enum layout:
//!
//! | Kind      | Code | Extra fields      |
//! |-----------|------|-------------------|
//! | Move      | 0    |                   |
//! | Vector    | 1    | x2, y2            |
//! | Text      | 2    | text              |
//! | Color     | 3    | color             |
//! | LineWidth | 4    | value             |
//! | Point     | 5    | value (style)     |
//! | TextAngle | 6    | value             |
//! | FillBox   | 7    | x2, y2            |

mod buffer;
mod command;

pub use buffer::{CommandBuffer, FrameSnapshot};
pub use command::{CommandKind, CommandRecord};
