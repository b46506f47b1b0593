//! The per-frame command buffer and its snapshots.

use serde::{Deserialize, Serialize};

use crate::command::CommandRecord;

/// Initial record capacity; growth beyond this doubles.
const MIN_CAPACITY: usize = 1024;

/// Append-only buffer holding the drawing commands of one frame.
///
/// `begin_frame` clears the previous frame's records and stamps the canvas
/// dimensions; appends accumulate in the exact order the engine issues
/// them. The buffer owns every text payload outright, so clearing a frame
/// releases them without touching any snapshot handed out earlier.
#[derive(Debug)]
pub struct CommandBuffer {
    records: Vec<CommandRecord>,
    width: u32,
    height: u32,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::with_capacity(MIN_CAPACITY)
    }

    /// A buffer with a custom initial record capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
            width: 0,
            height: 0,
        }
    }

    /// Start a new frame: record the canvas size and drop prior commands.
    pub fn begin_frame(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.clear();
    }

    /// Mark the frame complete. Advisory only; the records stay available
    /// until the next `begin_frame` or `clear`.
    pub fn end_frame(&mut self) {}

    /// Append one captured drawing call.
    pub fn append(&mut self, record: CommandRecord) {
        self.records.push(record);
    }

    /// Drop all records without shrinking capacity.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Deep-copy the current frame for the caller to keep.
    ///
    /// Returns `None` when no commands have been captured; a snapshot is
    /// never aliased to the live buffer, so later appends or clears leave
    /// it untouched.
    pub fn snapshot(&self) -> Option<FrameSnapshot> {
        if self.records.is_empty() {
            return None;
        }
        Some(FrameSnapshot {
            records: self.records.clone(),
            width: self.width,
            height: self.height,
        })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Canvas dimensions recorded by the last `begin_frame`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The live records, in issuance order.
    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }
}

impl Default for CommandBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// An owned copy of one captured frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub records: Vec<CommandRecord>,
    pub width: u32,
    pub height: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{CommandKind, CommandRecord};

    #[test]
    fn test_begin_frame_records_dimensions_and_clears() {
        let mut buffer = CommandBuffer::new();
        buffer.begin_frame(800, 600);
        buffer.append(CommandRecord::at(CommandKind::Move, 1, 2));
        assert_eq!(buffer.len(), 1);

        buffer.begin_frame(640, 480);
        assert!(buffer.is_empty());
        assert_eq!(buffer.dimensions(), (640, 480));
    }

    #[test]
    fn test_append_preserves_order() {
        let mut buffer = CommandBuffer::new();
        buffer.begin_frame(100, 100);
        for i in 0..10 {
            buffer.append(CommandRecord::at(CommandKind::Move, i, i));
        }
        let snapshot = buffer.snapshot().unwrap();
        assert_eq!(snapshot.records.len(), 10);
        for (i, record) in snapshot.records.iter().enumerate() {
            assert_eq!(record.x, i as i32);
        }
    }

    #[test]
    fn test_snapshot_empty_is_none() {
        let mut buffer = CommandBuffer::new();
        assert!(buffer.snapshot().is_none());
        buffer.begin_frame(100, 100);
        assert!(buffer.snapshot().is_none());
    }

    #[test]
    fn test_snapshot_isolated_from_clear() {
        let mut buffer = CommandBuffer::new();
        buffer.begin_frame(100, 100);
        buffer.append(CommandRecord::text(3, 4, "axis label"));
        let snapshot = buffer.snapshot().unwrap();

        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(snapshot.records.len(), 1);
        assert_eq!(snapshot.records[0].text.as_deref(), Some("axis label"));
    }

    #[test]
    fn test_snapshot_isolated_from_later_appends() {
        let mut buffer = CommandBuffer::new();
        buffer.begin_frame(100, 100);
        buffer.append(CommandRecord::at(CommandKind::Move, 0, 0));
        let snapshot = buffer.snapshot().unwrap();

        for i in 0..2000 {
            buffer.append(CommandRecord::vector(i, i, 0, 0));
        }
        assert_eq!(snapshot.records.len(), 1);
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buffer = CommandBuffer::with_capacity(4);
        buffer.begin_frame(10, 10);
        for _ in 0..100 {
            buffer.append(CommandRecord::at(CommandKind::Move, 0, 0));
        }
        let grown = 100;
        buffer.clear();
        assert!(buffer.is_empty());
        // Vec::clear keeps the backing storage.
        assert!(buffer.records.capacity() >= grown);
    }

    #[test]
    fn test_end_frame_changes_nothing() {
        let mut buffer = CommandBuffer::new();
        buffer.begin_frame(10, 10);
        buffer.append(CommandRecord::color(0xFF0000));
        buffer.end_frame();
        assert_eq!(buffer.len(), 1);
        assert_eq!(buffer.dimensions(), (10, 10));
    }
}
