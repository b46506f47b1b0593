//! Error types for session operations.

use plotcap_engine::EngineFault;
use thiserror::Error;

/// Errors from [`Session::initialize`](crate::Session::initialize).
#[derive(Debug, Error)]
pub enum InitError {
    /// The engine faulted while bootstrapping; the session remains
    /// uninitialized and initialize may be retried.
    #[error("engine bootstrap failed: {0}")]
    Bootstrap(EngineFault),
}

/// Errors from [`Session::execute`](crate::Session::execute) and
/// [`Session::execute_batch`](crate::Session::execute_batch).
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("session is not initialized")]
    NotInitialized,

    #[error("empty or blank command")]
    InvalidInput,

    /// The command faulted inside the engine. The fault is local to this
    /// one command; the session stays initialized and usable.
    #[error("command failed: {0}")]
    Failed(EngineFault),
}

/// Errors from [`Session::set_datablock`](crate::Session::set_datablock).
#[derive(Debug, Error)]
pub enum DatablockError {
    #[error("session is not initialized")]
    NotInitialized,

    #[error("empty datablock name")]
    InvalidInput,
}
