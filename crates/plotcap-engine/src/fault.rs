//! The engine's fault channel.

use thiserror::Error;

/// A fault raised inside the engine while executing on the capture layer's
/// behalf.
///
/// All three variants are recoverable from the session's point of view: the
/// command that triggered the fault fails, the session stays usable. A
/// `Fatal` fault corresponds to conditions the standalone engine would have
/// died on (arithmetic signals, internal invariant breaks); in library mode
/// it is downgraded to a per-call failure like the rest.
#[derive(Debug, Clone, Error)]
pub enum EngineFault {
    #[error("parse error: {0}")]
    Parse(String),

    #[error("evaluation error: {0}")]
    Eval(String),

    #[error("fatal engine condition: {0}")]
    Fatal(String),
}
