//! # plotcap-host - Host scripting binding
//!
//! [`HostBinding`] maps every session operation 1:1 onto the call shapes a
//! scripting host expects: status booleans for actions, [`HostValue`]
//! tables for queries. Outgoing buffers are always copied, so the session's
//! internal storage can be reused the moment a call returns, and nothing
//! host-owned is retained past the call it arrived in.
//!
//! ## Query shapes
//!
//! - `rgb_data()` → `{ width, height, data: <bytes> }` or absent.
//! - `commands()` → `{ width, height, commands: [record, ...] }` or
//!   absent. Each record carries `type`, `x`, `y`, plus `x2`/`y2` only for
//!   Vector and FillBox kinds, `text` when present, `color` for Color
//!   records or any nonzero color, and `value` when nonzero.

mod value;

use plotcap_capture::{CommandKind, CommandRecord};
use plotcap_engine::Engine;
use plotcap_session::{Session, SessionConfig};

pub use value::HostValue;

/// The host-callable surface over a [`Session`].
pub struct HostBinding<E: Engine> {
    session: Session<E>,
}

impl<E: Engine> HostBinding<E> {
    pub fn new(engine: E) -> Self {
        Self {
            session: Session::new(engine),
        }
    }

    pub fn with_config(engine: E, config: SessionConfig) -> Self {
        Self {
            session: Session::with_config(engine, config),
        }
    }

    /// The wrapped session, for hosts needing the typed API.
    pub fn session(&self) -> &Session<E> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session<E> {
        &mut self.session
    }

    // ========================================================================
    // Actions (status booleans; true = success)
    // ========================================================================

    pub fn init(&mut self) -> bool {
        self.session.initialize().is_ok()
    }

    pub fn cmd(&mut self, command: &str) -> bool {
        self.session.execute(command).is_ok()
    }

    pub fn cmd_multi(&mut self, commands: &str) -> bool {
        self.session.execute_batch(commands).is_ok()
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn close(&mut self) {
        self.session.close();
    }

    pub fn version(&self) -> String {
        self.session.version()
    }

    pub fn is_initialized(&self) -> bool {
        self.session.is_initialized()
    }

    pub fn set_datablock(&mut self, name: &str, data: &str) -> bool {
        self.session.set_datablock(name, data).is_ok()
    }

    /// `plot <expr> <options>`.
    pub fn plot(&mut self, expr: &str, options: &str) -> bool {
        self.cmd(&format!("plot {expr} {options}"))
    }

    /// `splot <expr> <options>`.
    pub fn splot(&mut self, expr: &str, options: &str) -> bool {
        self.cmd(&format!("splot {expr} {options}"))
    }

    /// `set <option>`.
    pub fn set_option(&mut self, option: &str) -> bool {
        self.cmd(&format!("set {option}"))
    }

    /// `unset <option>`.
    pub fn unset_option(&mut self, option: &str) -> bool {
        self.cmd(&format!("unset {option}"))
    }

    // ========================================================================
    // Queries (owned tables; None = nothing available)
    // ========================================================================

    /// The decoded RGB frame as `{ width, height, data }`.
    ///
    /// Decodes the engine's latest raster when one is present; otherwise
    /// falls back to the session's cached decode so repeated calls keep
    /// working after the frame slot is consumed.
    pub fn rgb_data(&mut self) -> Option<HostValue> {
        // Refresh the cache when a decodable frame is available; an
        // invalid or missing frame leaves the previous decode in place.
        let _ = self.session.capture_bitmap();
        let image = self.session.last_bitmap()?;

        Some(HostValue::table([
            ("width", HostValue::Int(image.width() as i64)),
            ("height", HostValue::Int(image.height() as i64)),
            ("data", HostValue::Bytes(image.pixels().to_vec())),
        ]))
    }

    /// The captured drawing commands as `{ width, height, commands }`.
    pub fn commands(&mut self) -> Option<HostValue> {
        let frame = self.session.retrieve_commands()?;

        let records = frame
            .records
            .iter()
            .map(record_to_value)
            .collect::<Vec<_>>();

        Some(HostValue::table([
            ("width", HostValue::Int(frame.width as i64)),
            ("height", HostValue::Int(frame.height as i64)),
            ("commands", HostValue::Array(records)),
        ]))
    }
}

/// Shape one captured record into its host table.
fn record_to_value(record: &CommandRecord) -> HostValue {
    let mut fields = vec![
        ("type", HostValue::Int(record.kind.code() as i64)),
        ("x", HostValue::Int(record.x as i64)),
        ("y", HostValue::Int(record.y as i64)),
    ];

    if record.kind.has_secondary() {
        fields.push(("x2", HostValue::Int(record.x2 as i64)));
        fields.push(("y2", HostValue::Int(record.y2 as i64)));
    }
    if let Some(text) = &record.text {
        fields.push(("text", HostValue::Str(text.clone())));
    }
    if record.kind == CommandKind::Color || record.color != 0 {
        fields.push(("color", HostValue::Int(record.color as i64)));
    }
    if record.value != 0.0 {
        fields.push(("value", HostValue::Num(record.value)));
    }

    HostValue::table(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plotcap_engine::{Device, EngineFault, EngineVersion, VariableTable};
    use plotcap_raster::PlaneRaster;

    /// Engine whose `plot` command emits a small captured frame and a
    /// raster, mirroring what the capture backends do.
    #[derive(Default)]
    struct DrawingEngine {
        vars: VariableTable,
    }

    impl Engine for DrawingEngine {
        fn bootstrap(&mut self, _device: &mut Device) -> Result<(), EngineFault> {
            Ok(())
        }

        fn interpret(&mut self, command: &str, device: &mut Device) -> Result<(), EngineFault> {
            if command.starts_with("bad") {
                return Err(EngineFault::Parse(command.to_string()));
            }
            if command.starts_with("plot") {
                device.commands.begin_frame(800, 600);
                device.commands.append(CommandRecord::color(0x0000FF));
                device.commands.append(CommandRecord::at(CommandKind::Move, 10, 20));
                device.commands.append(CommandRecord::vector(30, 40, 10, 20));
                device.commands.append(CommandRecord::text(50, 60, "sin(x)"));
                device.commands.append({
                    let mut r = CommandRecord::at(CommandKind::LineWidth, 0, 0);
                    r.value = 2.0;
                    r
                });
                device.commands.end_frame();
                device.deposit_raster(PlaneRaster::new(2, 8, 4, vec![0u8; 8]));
            }
            Ok(())
        }

        fn reset_terminal(&mut self, _device: &mut Device) {}

        fn version(&self) -> EngineVersion {
            EngineVersion {
                version: "6.0".into(),
                patchlevel: "2".into(),
            }
        }

        fn variables_mut(&mut self) -> &mut VariableTable {
            &mut self.vars
        }
    }

    fn ready_binding() -> HostBinding<DrawingEngine> {
        let mut binding = HostBinding::with_config(
            DrawingEngine::default(),
            SessionConfig {
                term_override: Some("dumb".into()),
                ..SessionConfig::default()
            },
        );
        assert!(binding.init());
        binding
    }

    #[test]
    fn test_status_booleans() {
        let mut binding = ready_binding();
        assert!(binding.cmd("set grid"));
        assert!(!binding.cmd("bad command"));
        assert!(binding.is_initialized());
        assert!(binding.set_datablock("DATA", "1 2"));
        binding.close();
        assert!(!binding.is_initialized());
        assert!(!binding.cmd("set grid"));
    }

    #[test]
    fn test_convenience_wrappers_format_commands() {
        let mut binding = ready_binding();
        assert!(binding.plot("sin(x)", "with lines"));
        assert!(binding.splot("x*y", ""));
        assert!(binding.set_option("grid"));
        assert!(binding.unset_option("grid"));
    }

    #[test]
    fn test_commands_empty_is_none() {
        let mut binding = ready_binding();
        assert!(binding.commands().is_none());
    }

    #[test]
    fn test_commands_field_shaping() {
        let mut binding = ready_binding();
        assert!(binding.plot("sin(x)", ""));

        let table = binding.commands().unwrap();
        assert_eq!(table.get("width"), Some(&HostValue::Int(800)));
        assert_eq!(table.get("height"), Some(&HostValue::Int(600)));

        let records = match table.get("commands") {
            Some(HostValue::Array(items)) => items,
            other => panic!("expected array, got {other:?}"),
        };
        assert_eq!(records.len(), 5);

        // Color record: carries color, no secondary pair.
        assert_eq!(records[0].get("type"), Some(&HostValue::Int(3)));
        assert_eq!(records[0].get("color"), Some(&HostValue::Int(0x0000FF)));
        assert_eq!(records[0].get("x2"), None);

        // Move record: primary coordinates only.
        assert_eq!(records[1].get("type"), Some(&HostValue::Int(0)));
        assert_eq!(records[1].get("x"), Some(&HostValue::Int(10)));
        assert_eq!(records[1].get("x2"), None);
        assert_eq!(records[1].get("color"), None);
        assert_eq!(records[1].get("value"), None);

        // Vector record: carries the secondary pair.
        assert_eq!(records[2].get("x2"), Some(&HostValue::Int(10)));
        assert_eq!(records[2].get("y2"), Some(&HostValue::Int(20)));

        // Text record.
        assert_eq!(
            records[3].get("text"),
            Some(&HostValue::Str("sin(x)".into()))
        );

        // LineWidth record: nonzero value present.
        assert_eq!(records[4].get("value"), Some(&HostValue::Num(2.0)));
    }

    #[test]
    fn test_rgb_data_shape_and_repeatability() {
        let mut binding = ready_binding();
        assert!(binding.rgb_data().is_none());

        assert!(binding.plot("sin(x)", ""));
        let table = binding.rgb_data().unwrap();
        assert_eq!(table.get("width"), Some(&HostValue::Int(8)));
        assert_eq!(table.get("height"), Some(&HostValue::Int(2)));
        match table.get("data") {
            Some(HostValue::Bytes(bytes)) => assert_eq!(bytes.len(), 8 * 2 * 3),
            other => panic!("expected bytes, got {other:?}"),
        }

        // The saved decode stays readable on subsequent calls.
        let again = binding.rgb_data().unwrap();
        assert_eq!(again, table);
    }

    #[test]
    fn test_commands_snapshot_is_a_copy() {
        let mut binding = ready_binding();
        assert!(binding.plot("sin(x)", ""));
        let first = binding.commands().unwrap();

        // A later frame overwrites the live buffer, not the copy.
        assert!(binding.plot("cos(x)", ""));
        let second = binding.commands().unwrap();
        assert_eq!(first, second); // same drawing either way
    }
}
