//! Capture-side device state handed to every engine call.

use log::debug;
use plotcap_capture::CommandBuffer;
use plotcap_raster::PlaneRaster;

/// The non-interactive backend selected when nothing else is configured.
pub const DEFAULT_TERMINAL: &str = "dumb";

/// Everything the engine's device callbacks write into.
///
/// The session owns one `Device` for its lifetime and passes it to every
/// engine call. The engine's capture backend appends drawing commands to
/// `commands` and deposits finished planar frames into `raster`; the mode
/// flags mirror the switches the original engine consults during startup
/// and command execution.
#[derive(Debug)]
pub struct Device {
    /// Drawing commands of the frame being rendered.
    pub commands: CommandBuffer,
    /// The most recent planar framebuffer, if the raster backend ran.
    /// Overwritten per frame, never merged.
    pub raster: Option<PlaneRaster>,
    /// Selected rendering backend name.
    pub term: String,
    /// Interactive mode; forced off in library use.
    pub interactive: bool,
    /// "No input files" mode; forced off in library use.
    pub no_input_files: bool,
    /// Dangerous-operation guard (pipes, shell escapes). Off during
    /// bootstrap, on once initialization succeeds.
    pub shell_ok: bool,
}

impl Device {
    pub fn new() -> Self {
        Self::with_capacity(1024)
    }

    /// A device whose command buffer starts at the given record capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: CommandBuffer::with_capacity(capacity),
            raster: None,
            term: DEFAULT_TERMINAL.to_string(),
            interactive: true,
            no_input_files: true,
            shell_ok: false,
        }
    }

    /// Select a rendering backend by name.
    pub fn select_terminal(&mut self, name: &str) {
        debug!("selecting terminal backend {name:?}");
        self.term = name.to_string();
    }

    /// Deposit a finished planar frame, replacing any previous one.
    pub fn deposit_raster(&mut self, raster: PlaneRaster) {
        self.raster = Some(raster);
    }

    /// Take the deposited frame, leaving the slot empty.
    pub fn take_raster(&mut self) -> Option<PlaneRaster> {
        self.raster.take()
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new()
    }
}
