//! Shared test fixtures for the configuration test modules.
//!
//! The collaborators are `Rc`-backed so a test can hand a clone to the facade
//! and keep its own handle for inspection. Everything here is std-only.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::engine::AnalysisEngine;
use crate::error::{EngineError, ToolkitError};
use crate::store::SettingsStore;
use crate::toolkit::{Stylesheet, Toolkit};
use crate::values::{Rgba, Value};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

// ---------------------------------------------------------------------------
// TestTempDir
// ---------------------------------------------------------------------------

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("binview-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Build a child path under the fixture root.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path, creating parent directories.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("failed to create fixture parents");
        }
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

// ---------------------------------------------------------------------------
// MemorySettingsStore
// ---------------------------------------------------------------------------

/// In-memory settings store. Clones share one map, so a test can keep a
/// handle to the map it passed into the facade.
#[derive(Debug, Clone)]
pub struct MemorySettingsStore {
    entries: Rc<RefCell<BTreeMap<String, Value>>>,
    writable: bool,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(BTreeMap::new())),
            writable: true,
        }
    }

    /// Store that reports itself non-writable (for the construction alert).
    pub fn read_only() -> Self {
        Self {
            writable: false,
            ..Self::new()
        }
    }

    /// Snapshot of every entry.
    pub fn entries(&self) -> BTreeMap<String, Value> {
        self.entries.borrow().clone()
    }
}

impl Default for MemorySettingsStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }

    fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    fn clear(&mut self) {
        self.entries.borrow_mut().clear();
    }

    fn file_name(&self) -> String {
        "memory".to_string()
    }

    fn is_writable(&self) -> bool {
        self.writable
    }
}

// ---------------------------------------------------------------------------
// RecordingEngine
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
struct EngineState {
    commands: Vec<String>,
    config: BTreeMap<String, Value>,
    themes: BTreeMap<String, serde_json::Value>,
    custom_themes: BTreeSet<String>,
    fail_commands: bool,
}

/// Analysis-engine double that records commands and config writes.
#[derive(Debug, Clone, Default)]
pub struct RecordingEngine {
    inner: Rc<RefCell<EngineState>>,
}

impl RecordingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `payload` as the resolved color theme for `name`.
    pub fn set_theme_payload(&self, name: &str, payload: serde_json::Value) {
        self.inner
            .borrow_mut()
            .themes
            .insert(name.to_string(), payload);
    }

    /// Treat `name` as a user-authored theme.
    pub fn mark_custom(&self, name: &str) {
        self.inner
            .borrow_mut()
            .custom_themes
            .insert(name.to_string());
    }

    /// Pre-populate a live config key (e.g. `dir.projects`).
    pub fn seed_config(&self, key: &str, value: Value) {
        self.inner.borrow_mut().config.insert(key.to_string(), value);
    }

    /// Make every subsequent `cmd` call fail.
    pub fn fail_commands(&self, fail: bool) {
        self.inner.borrow_mut().fail_commands = fail;
    }

    /// Commands executed so far, in order.
    pub fn commands(&self) -> Vec<String> {
        self.inner.borrow().commands.clone()
    }

    /// Current live-config value for `key`.
    pub fn config_value(&self, key: &str) -> Option<Value> {
        self.inner.borrow().config.get(key).cloned()
    }
}

impl AnalysisEngine for RecordingEngine {
    fn cmd(&mut self, command: &str) -> Result<(), EngineError> {
        let mut state = self.inner.borrow_mut();
        if state.fail_commands {
            return Err(EngineError::Command(command.to_string()));
        }
        state.commands.push(command.to_string());
        Ok(())
    }

    fn config(&self, key: &str) -> String {
        self.inner
            .borrow()
            .config
            .get(key)
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    fn config_bool(&self, key: &str) -> bool {
        self.inner
            .borrow()
            .config
            .get(key)
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }

    fn config_int(&self, key: &str) -> i64 {
        self.inner
            .borrow()
            .config
            .get(key)
            .and_then(Value::as_int)
            .unwrap_or(0)
    }

    fn set_config(&mut self, key: &str, value: &Value) -> Result<(), EngineError> {
        self.inner
            .borrow_mut()
            .config
            .insert(key.to_string(), value.clone());
        Ok(())
    }

    fn color_theme(&self, name: &str) -> serde_json::Value {
        self.inner
            .borrow()
            .themes
            .get(name)
            .cloned()
            .unwrap_or_else(|| serde_json::json!({}))
    }

    fn is_custom_theme(&self, name: &str) -> bool {
        self.inner.borrow().custom_themes.contains(name)
    }
}

// ---------------------------------------------------------------------------
// HeadlessToolkit
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct ToolkitState {
    window_background: Rgba,
    missing: BTreeSet<&'static str>,
    applied: Vec<Stylesheet>,
    text_colors: Vec<Rgba>,
    palette_resets: u32,
    repaints: u32,
    alerts: Vec<(String, String)>,
}

impl Default for ToolkitState {
    fn default() -> Self {
        Self {
            // Light host window unless a test overrides it.
            window_background: Rgba::rgb(239, 239, 239),
            missing: BTreeSet::new(),
            applied: Vec::new(),
            text_colors: Vec::new(),
            palette_resets: 0,
            repaints: 0,
            alerts: Vec::new(),
        }
    }
}

/// Toolkit double with a scriptable window background and resource set.
#[derive(Debug, Clone, Default)]
pub struct HeadlessToolkit {
    inner: Rc<RefCell<ToolkitState>>,
}

impl HeadlessToolkit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_window_background(&self, color: Rgba) {
        self.inner.borrow_mut().window_background = color;
    }

    /// Make `sheet` report as a missing resource.
    pub fn mark_missing(&self, sheet: Stylesheet) {
        self.inner.borrow_mut().missing.insert(sheet.resource_name());
    }

    pub fn applied_stylesheets(&self) -> Vec<Stylesheet> {
        self.inner.borrow().applied.clone()
    }

    pub fn text_colors(&self) -> Vec<Rgba> {
        self.inner.borrow().text_colors.clone()
    }

    pub fn palette_resets(&self) -> u32 {
        self.inner.borrow().palette_resets
    }

    pub fn repaints(&self) -> u32 {
        self.inner.borrow().repaints
    }

    pub fn alerts(&self) -> Vec<(String, String)> {
        self.inner.borrow().alerts.clone()
    }
}

impl Toolkit for HeadlessToolkit {
    fn apply_stylesheet(&mut self, sheet: Stylesheet) -> Result<(), ToolkitError> {
        let mut state = self.inner.borrow_mut();
        if state.missing.contains(sheet.resource_name()) {
            return Err(ToolkitError::MissingStylesheet(
                sheet.resource_name().to_string(),
            ));
        }
        state.applied.push(sheet);
        Ok(())
    }

    fn set_palette_text_color(&mut self, color: Rgba) {
        self.inner.borrow_mut().text_colors.push(color);
    }

    fn reset_palette(&mut self) {
        self.inner.borrow_mut().palette_resets += 1;
    }

    fn window_background(&self) -> Rgba {
        self.inner.borrow().window_background
    }

    fn repaint_all(&mut self) {
        self.inner.borrow_mut().repaints += 1;
    }

    fn critical_alert(&mut self, title: &str, message: &str) {
        self.inner
            .borrow_mut()
            .alerts
            .push((title.to_string(), message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_dir_fixture_writes_and_resolves_paths() {
        let fixture = TestTempDir::new("fixture");
        let file = fixture.write_text("nested/file.txt", "hello");
        assert_eq!(fs::read_to_string(file).unwrap(), "hello");
    }

    #[test]
    fn memory_store_clones_share_state() {
        let store = MemorySettingsStore::new();
        let mut handle = store.clone();
        handle.set("theme", Value::from("zenburn"));
        assert!(store.contains("theme"));
        handle.clear();
        assert!(!store.contains("theme"));
    }

    #[test]
    fn recording_engine_tracks_commands_and_config() {
        let engine = RecordingEngine::new();
        let mut handle = engine.clone();
        handle.cmd("ecd").expect("cmd");
        handle
            .set_config("asm.bytes", &Value::Bool(true))
            .expect("set_config");
        assert_eq!(engine.commands(), vec!["ecd".to_string()]);
        assert!(engine.config_bool("asm.bytes"));
    }

    #[test]
    fn headless_toolkit_reports_missing_resources() {
        let toolkit = HeadlessToolkit::new();
        toolkit.mark_missing(Stylesheet::Light);
        let mut handle = toolkit.clone();
        assert!(handle.apply_stylesheet(Stylesheet::Light).is_err());
        assert!(handle.apply_stylesheet(Stylesheet::Dark).is_ok());
        assert_eq!(toolkit.applied_stylesheets(), vec![Stylesheet::Dark]);
    }
}
