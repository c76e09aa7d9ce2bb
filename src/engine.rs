//! Analysis-engine collaborator contract.
//!
//! The coordinator treats the engine as a synchronous request/response
//! collaborator: each mirror operation issues a command or config write and
//! expects it to have taken effect before the next call. Implementations wrap
//! the real engine session; tests use the recording double in `testsupport`.

use crate::error::EngineError;
use crate::values::Value;

/// Live analysis-engine session.
///
/// Command strings used by this core: `ecd` resets the engine color theme,
/// `eco <name>` switches it, and `e-` drops every local config override.
pub trait AnalysisEngine {
    /// Execute a raw engine command.
    fn cmd(&mut self, command: &str) -> Result<(), EngineError>;

    /// Read a config key as a string.
    fn config(&self, key: &str) -> String;

    /// Read a config key as a boolean.
    fn config_bool(&self, key: &str) -> bool;

    /// Read a config key as an integer.
    fn config_int(&self, key: &str) -> i64;

    /// Write a config key into the engine's live namespace.
    fn set_config(&mut self, key: &str, value: &Value) -> Result<(), EngineError>;

    /// Resolved color theme as reported by the engine: an object mapping
    /// color names to 4-element numeric (0–255) arrays. Consumed read-only.
    fn color_theme(&self, name: &str) -> serde_json::Value;

    /// True when `name` is a user-authored theme rather than a bundled one.
    ///
    /// Bundled themes are partial, so the coordinator re-applies the interface
    /// theme to fill in colors the engine theme does not define.
    fn is_custom_theme(&self, name: &str) -> bool;
}
