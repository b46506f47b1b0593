//! # plotcap-session - The library session
//!
//! [`Session`] wraps the plotting engine's interpreter loop so a host
//! process can call into it many times without restarting it. It owns the
//! capture-side [`Device`], the single-slot decoded-bitmap cache, and the
//! fault boundary that keeps engine failures local to the call that caused
//! them.
//!
//! # Quick start
//!
//! ```no_run
//! use plotcap_session::Session;
//! # use plotcap_engine::{Device, Engine, EngineFault, EngineVersion, VariableTable};
//! # struct MyEngine;
//! # impl Engine for MyEngine {
//! #     fn bootstrap(&mut self, _: &mut Device) -> Result<(), EngineFault> { Ok(()) }
//! #     fn interpret(&mut self, _: &str, _: &mut Device) -> Result<(), EngineFault> { Ok(()) }
//! #     fn reset_terminal(&mut self, _: &mut Device) {}
//! #     fn version(&self) -> EngineVersion { unimplemented!() }
//! #     fn variables_mut(&mut self) -> &mut VariableTable { unimplemented!() }
//! # }
//! # let engine = MyEngine;
//!
//! let mut session = Session::new(engine);
//! session.initialize()?;
//! session.execute("plot sin(x)")?;
//! if let Some(frame) = session.retrieve_commands() {
//!     println!("captured {} drawing commands", frame.records.len());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Concurrency
//!
//! The underlying engine is not reentrant across threads. A `Session` runs
//! everything synchronously on the caller's thread; hosts with multiple
//! threads must hold a mutual-exclusion lock around all session calls (one
//! logical session per process).

mod error;

use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};
use plotcap_capture::FrameSnapshot;
use plotcap_engine::{Device, Engine, EngineFault, VarValue, DEFAULT_TERMINAL};
use plotcap_raster::{decode_planes, DecodeError, RgbImage};

pub use error::{DatablockError, ExecError, InitError};
pub use plotcap_engine as engine;

/// Built-in names pre-registered before the engine bootstraps. User
/// variables begin immediately after the last of these.
const BUILTIN_VARS: [&str; 4] = ["GNUTERM", "I", "Inf", "NaN"];

/// Environment variable consulted for the rendering backend when the
/// config carries no override.
const TERM_ENV_VAR: &str = "GNUTERM";

/// Session configuration options.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Rendering backend to select at initialize time. When `None`, the
    /// `GNUTERM` environment variable is consulted, and failing that the
    /// non-interactive default backend is used.
    pub term_override: Option<String>,
    /// Initial record capacity of the command buffer.
    pub initial_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            term_override: None,
            initial_capacity: 1024,
        }
    }
}

/// Reentrant initialize/execute/shutdown state machine around the engine.
///
/// The session is a host-owned context object: no module statics anywhere.
/// Its state machine has exactly two states — `initialize` (on success)
/// moves Uninitialized to Initialized, `close` moves back, and every
/// failure is a self-loop. All other operations are no-ops or fail fast
/// while uninitialized.
pub struct Session<E: Engine> {
    engine: E,
    device: Device,
    bitmap: Option<RgbImage>,
    initialized: bool,
    config: SessionConfig,
}

impl<E: Engine> Session<E> {
    /// Create a session with default configuration. The engine stays
    /// untouched until [`initialize`](Self::initialize).
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, SessionConfig::default())
    }

    /// Create a session with custom configuration.
    pub fn with_config(engine: E, config: SessionConfig) -> Self {
        Self {
            engine,
            device: Device::with_capacity(config.initial_capacity),
            bitmap: None,
            initialized: false,
            config,
        }
    }

    /// Initialize the engine for library use.
    ///
    /// Idempotent: returns success immediately when already initialized.
    /// The first call forces non-interactive mode, pre-registers the
    /// built-in names (`GNUTERM`, `I`, `Inf`, `NaN`) and marks the user
    /// variable region, selects the rendering backend, bootstraps the
    /// engine with the dangerous-operation guard held off, re-enables the
    /// guard, and executes an implicit `reset`.
    ///
    /// A fault raised anywhere in that sequence leaves the session
    /// uninitialized; the call may be retried.
    pub fn initialize(&mut self) -> Result<(), InitError> {
        if self.initialized {
            return Ok(());
        }

        self.device.interactive = false;
        self.device.no_input_files = false;
        // Guard stays off until bootstrap has succeeded.
        self.device.shell_ok = false;

        let vars = self.engine.variables_mut();
        for name in BUILTIN_VARS {
            vars.add(name);
        }
        vars.mark_user_start();

        let term = self
            .config
            .term_override
            .clone()
            .or_else(|| std::env::var(TERM_ENV_VAR).ok())
            .unwrap_or_else(|| DEFAULT_TERMINAL.to_string());
        self.device.select_terminal(&term);

        guarded(|| self.engine.bootstrap(&mut self.device)).map_err(|fault| {
            warn!("engine bootstrap failed: {fault}");
            InitError::Bootstrap(fault)
        })?;

        self.device.shell_ok = true;

        // Implicit reset into the known-default plotting state.
        guarded(|| self.engine.interpret("reset", &mut self.device)).map_err(|fault| {
            warn!("post-bootstrap reset failed: {fault}");
            InitError::Bootstrap(fault)
        })?;

        self.initialized = true;
        debug!("session initialized with terminal {:?}", self.device.term);
        Ok(())
    }

    /// Submit one command line to the engine's interpreter.
    ///
    /// A fault raised while interpreting — parse error, evaluation error,
    /// or a fatal condition the engine downgrades in library mode — comes
    /// back as [`ExecError::Failed`] and never unwinds into the host. A
    /// failed execute leaves the session initialized and usable.
    pub fn execute(&mut self, command: &str) -> Result<(), ExecError> {
        if !self.initialized {
            return Err(ExecError::NotInitialized);
        }
        if command.trim().is_empty() {
            return Err(ExecError::InvalidInput);
        }

        debug!("execute: {command}");
        guarded(|| self.engine.interpret(command, &mut self.device)).map_err(|fault| {
            warn!("command failed: {fault}");
            ExecError::Failed(fault)
        })
    }

    /// Execute a newline-delimited batch of commands.
    ///
    /// Leading whitespace is trimmed per line; blank lines and `#` comment
    /// lines are skipped. Stops at the first failing line — lines before
    /// it have already taken effect, there is no rollback.
    pub fn execute_batch(&mut self, commands: &str) -> Result<(), ExecError> {
        if !self.initialized {
            return Err(ExecError::NotInitialized);
        }
        if commands.trim().is_empty() {
            return Err(ExecError::InvalidInput);
        }

        for line in commands.lines() {
            let line = line.trim_start();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.execute(line)?;
        }
        Ok(())
    }

    /// Restore the default plotting state. No-op while uninitialized; the
    /// session survives either way.
    pub fn reset(&mut self) {
        if !self.initialized {
            return;
        }
        if let Err(err) = self.execute("reset") {
            warn!("reset failed: {err}");
        }
    }

    /// Release the rendering backend and mark the session uninitialized.
    /// Safe to call repeatedly; `initialize` may be called again after.
    pub fn close(&mut self) {
        if !self.initialized {
            return;
        }
        self.engine.reset_terminal(&mut self.device);
        self.initialized = false;
        debug!("session closed");
    }

    /// `"<version> patchlevel <patchlevel>"`. Available in any state.
    pub fn version(&self) -> String {
        let v = self.engine.version();
        format!("{} patchlevel {}", v.version, v.patchlevel)
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Create or overwrite a named datablock with newline-delimited rows.
    ///
    /// The name receives the `$` sigil when absent. Whatever value the
    /// name previously held is dropped and replaced by a datablock holding
    /// exactly the given lines.
    pub fn set_datablock(&mut self, name: &str, data: &str) -> Result<(), DatablockError> {
        if !self.initialized {
            return Err(DatablockError::NotInitialized);
        }
        if name.trim().is_empty() {
            return Err(DatablockError::InvalidInput);
        }

        let name = if name.starts_with('$') {
            name.to_string()
        } else {
            format!("${name}")
        };

        let value = self.engine.variables_mut().add(&name);
        // Force empty-datablock state, releasing any prior contents.
        *value = VarValue::Datablock(Vec::new());
        if let VarValue::Datablock(rows) = value {
            rows.extend(data.lines().map(str::to_string));
        }
        Ok(())
    }

    /// Decode the engine's latest planar frame into the bitmap cache.
    ///
    /// On success the cache is fully overwritten and a view of the new
    /// image is returned. Invalid input (no frame, zero dimensions, too
    /// few planes) leaves any previously cached image untouched.
    pub fn capture_bitmap(&mut self) -> Result<&RgbImage, DecodeError> {
        let raster = self.device.raster.as_ref().ok_or(DecodeError::NoSource)?;
        let image = decode_planes(raster)?;
        debug!("decoded {}x{} bitmap", image.width(), image.height());
        Ok(self.bitmap.insert(image))
    }

    /// Peek at the cached decode from the last successful
    /// [`capture_bitmap`](Self::capture_bitmap).
    pub fn last_bitmap(&self) -> Option<&RgbImage> {
        self.bitmap.as_ref()
    }

    /// Drop the cached bitmap.
    pub fn release_bitmap(&mut self) {
        self.bitmap = None;
    }

    /// Deep-copy the captured drawing commands of the current frame.
    /// `None` when the buffer is empty.
    pub fn retrieve_commands(&self) -> Option<FrameSnapshot> {
        self.device.commands.snapshot()
    }

    /// The engine-facing capture surface.
    pub fn device(&self) -> &Device {
        &self.device
    }

    /// Mutable capture surface, for embedders wiring custom backends.
    pub fn device_mut(&mut self) -> &mut Device {
        &mut self.device
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}

/// Fault boundary around every engine call.
///
/// Engine faults come back as values; a panic raised inside the engine is
/// caught here and downgraded to [`EngineFault::Fatal`], the library-mode
/// equivalent of the standalone engine's fatal-signal path. Nothing
/// engine-raised unwinds past the session's public surface.
fn guarded<T, F>(call: F) -> Result<T, EngineFault>
where
    F: FnOnce() -> Result<T, EngineFault>,
{
    match panic::catch_unwind(AssertUnwindSafe(call)) {
        Ok(result) => result,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "engine panicked".to_string());
            Err(EngineFault::Fatal(message))
        }
    }
}
