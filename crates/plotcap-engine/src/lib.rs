//! # plotcap-engine - The engine call surface
//!
//! The plotting engine itself is a large external collaborator: its parser,
//! expression evaluator and device drivers are not part of this workspace.
//! This crate defines the narrow seam the capture layer reaches it through:
//!
//! - [`Engine`], the trait an engine integration implements;
//! - [`Device`], the capture-side state (command buffer, raster slot, mode
//!   flags) handed to every engine call;
//! - [`VariableTable`], the engine-owned named-value store that datablocks
//!   live in;
//! - [`EngineFault`], the engine's fault channel. Faults never unwind past
//!   the session that issued the call; they are converted into local error
//!   values at that boundary.

mod device;
mod fault;
mod variables;

pub use device::{Device, DEFAULT_TERMINAL};
pub use fault::EngineFault;
pub use variables::{VarValue, VariableTable};

/// Engine version identification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineVersion {
    pub version: String,
    pub patchlevel: String,
}

/// The interpreter entry points the capture layer calls into.
///
/// Implementations are not expected to be thread-safe; the session that
/// owns an engine serializes all access to it.
pub trait Engine {
    /// One-time engine startup: locale, load paths, terminal
    /// initialization. Called once per successful session initialize, with
    /// `device.shell_ok` cleared for the duration of the call.
    fn bootstrap(&mut self, device: &mut Device) -> Result<(), EngineFault>;

    /// Submit one command line to the engine's interpreter. Drawing
    /// callbacks issued while interpreting land in `device`.
    fn interpret(&mut self, command: &str, device: &mut Device) -> Result<(), EngineFault>;

    /// Release the rendering backend's resources.
    fn reset_terminal(&mut self, device: &mut Device);

    /// Engine version and patchlevel.
    fn version(&self) -> EngineVersion;

    /// The engine-owned variable table.
    fn variables_mut(&mut self) -> &mut VariableTable;
}
