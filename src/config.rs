//! Process-wide configuration facade.
//!
//! [`Configuration`] is the single access point for user-visible appearance
//! (interface theme, semantic color table, font) and for the persisted engine
//! display options. It owns the sequencing: mutations persist first, then
//! apply to the collaborators, then notify observers.
//!
//! Construct it once at process start from a settings store, an engine
//! session, and a toolkit handle; tests build fresh instances per case. All
//! operations run synchronously on the calling thread.

use tracing::{debug, warn};

use crate::engine::AnalysisEngine;
use crate::notify::{Notification, ObserverRegistry, SubscriberId};
use crate::options::{self, OptionDefault, ENGINE_OPTIONS};
use crate::store::SettingsStore;
use crate::theme::{self, ColorMode, InterfaceTheme, INTERFACE_THEMES};
use crate::toolkit::{Stylesheet, Toolkit};
use crate::values::{FontSpec, LocaleSpec, Rgba, Value};

/// Configuration and theming coordinator.
///
/// The store and the engine are independent long-lived collaborators whose
/// state this facade keeps mirrored; the color table and the active theme
/// selection are owned here.
pub struct Configuration {
    store: Box<dyn SettingsStore>,
    engine: Box<dyn AnalysisEngine>,
    toolkit: Box<dyn Toolkit>,
    observers: ObserverRegistry,
}

impl Configuration {
    /// Build the facade and run the one-time writability check.
    ///
    /// A non-writable store raises a blocking alert naming the backing file,
    /// but construction proceeds: the warning is cosmetic, not fatal.
    pub fn new(
        store: Box<dyn SettingsStore>,
        engine: Box<dyn AnalysisEngine>,
        mut toolkit: Box<dyn Toolkit>,
    ) -> Self {
        if !store.is_writable() {
            toolkit.critical_alert(
                "Critical!",
                &format!(
                    "Settings are not writable! Make sure you have write access to \"{}\"",
                    store.file_name()
                ),
            );
        }
        Self {
            store,
            engine,
            toolkit,
            observers: ObserverRegistry::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Apply everything persisted: interface theme, then color theme, then
    /// engine options.
    ///
    /// The order matters — the color theme overwrites colors the interface
    /// theme set, and the options push is independent of both.
    pub fn load_initial(&mut self) {
        self.set_interface_theme(self.interface_theme());
        let color_theme = self.color_theme();
        self.set_color_theme(&color_theme);
        self.apply_saved_asm_options();
    }

    /// Drop every engine override and persisted entry, then reload defaults.
    pub fn reset_all(&mut self) {
        if let Err(err) = self.engine.cmd("e-") {
            warn!(%err, "engine override reset failed");
        }
        self.store.clear();
        self.load_initial();
        self.observers.emit(Notification::FontsUpdated);
    }

    // -----------------------------------------------------------------------
    // Interface theme (palette resolver)
    // -----------------------------------------------------------------------

    /// Active interface-theme index, clamped to the catalog.
    pub fn interface_theme(&self) -> i32 {
        let stored = self
            .store
            .get("ColorPalette")
            .and_then(|value| value.as_int())
            .unwrap_or(0);
        if stored < 0 || stored as usize >= INTERFACE_THEMES.len() {
            0
        } else {
            stored as i32
        }
    }

    /// Catalog entry for the active interface theme.
    pub fn current_theme(&self) -> &'static InterfaceTheme {
        &INTERFACE_THEMES[self.interface_theme() as usize]
    }

    /// Switch the interface theme and rebuild the semantic color table.
    ///
    /// Out-of-range indices fall back to entry 0 (the adaptive Native theme);
    /// this never errors. Emits `InterfaceThemeChanged` then `ColorsUpdated`,
    /// always both, even when the net color values did not change.
    pub fn set_interface_theme(&mut self, index: i32) {
        let index = if index < 0 || index as usize >= INTERFACE_THEMES.len() {
            0
        } else {
            index as usize
        };
        self.store.set("ColorPalette", Value::from(index as i64));

        let name = INTERFACE_THEMES[index].name;
        debug!(theme = name, "applying interface theme");
        match name {
            "Dark" => self.load_dark_theme(),
            "Light" => self.load_light_theme(),
            _ => self.load_native_theme(),
        }

        self.observers.emit(Notification::InterfaceThemeChanged);
        self.observers.emit(Notification::ColorsUpdated);
    }

    /// Whether the effective chrome is dark.
    ///
    /// Pinned themes answer from their mode flag; the adaptive theme probes
    /// the live window background so Native tracks the host OS setting.
    pub fn window_color_is_dark(&self) -> bool {
        match self.current_theme().mode {
            ColorMode::Light => false,
            ColorMode::Dark => true,
            ColorMode::Any => theme::is_dark_background(self.toolkit.window_background()),
        }
    }

    /// Logo asset matching the effective chrome brightness.
    pub fn logo_file(&self) -> &'static str {
        if self.window_color_is_dark() {
            "img/binview_white_plain.svg"
        } else {
            "img/binview_plain.svg"
        }
    }

    fn load_base_theme_native(&mut self) {
        if let Err(err) = self.toolkit.apply_stylesheet(Stylesheet::Native) {
            warn!(%err, "keeping current chrome");
        }
        self.toolkit.reset_palette();
        self.toolkit.repaint_all();
        self.set_colors(theme::NATIVE_BASE_COLORS);
    }

    fn load_native_theme(&mut self) {
        self.load_base_theme_native();
        if self.window_color_is_dark() {
            self.set_colors(theme::NATIVE_DARK_COLORS);
        } else {
            self.set_colors(theme::NATIVE_LIGHT_COLORS);
        }
    }

    fn load_base_theme_dark(&mut self) {
        match self.toolkit.apply_stylesheet(Stylesheet::Dark) {
            Ok(()) => self.toolkit.set_palette_text_color(Rgba::rgb(255, 255, 255)),
            Err(err) => warn!(%err, "keeping current chrome"),
        }
        self.set_colors(theme::DARK_BASE_COLORS);
    }

    fn load_dark_theme(&mut self) {
        self.load_base_theme_dark();
        self.set_colors(theme::DARK_COLORS);
    }

    fn load_light_theme(&mut self) {
        match self.toolkit.apply_stylesheet(Stylesheet::Light) {
            Ok(()) => self.toolkit.set_palette_text_color(Rgba::rgb(0, 0, 0)),
            Err(err) => warn!(%err, "keeping current chrome"),
        }
        self.set_colors(theme::LIGHT_COLORS);
    }

    fn set_colors(&mut self, table: &[(&str, Rgba)]) {
        for (name, color) in table {
            self.set_color(name, *color);
        }
    }

    // -----------------------------------------------------------------------
    // Named colors
    // -----------------------------------------------------------------------

    /// Set one semantic color.
    pub fn set_color(&mut self, name: &str, color: Rgba) {
        self.store.set(&format!("colors.{name}"), Value::from(color));
    }

    /// Resolve one semantic color.
    ///
    /// Unrecognized names fall back to the `other` entry; lookup never fails.
    pub fn color(&self, name: &str) -> Rgba {
        if let Some(color) = self
            .store
            .get(&format!("colors.{name}"))
            .and_then(|value| value.as_color())
        {
            return color;
        }
        self.store
            .get("colors.other")
            .and_then(|value| value.as_color())
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Engine color theme (mirror)
    // -----------------------------------------------------------------------

    /// Active engine color-theme name.
    pub fn color_theme(&self) -> String {
        self.store
            .get("theme")
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_else(|| "default".to_string())
    }

    /// Switch the engine's color theme and mirror its colors locally.
    ///
    /// Every 4-element entry of the engine's reported theme overrides the
    /// corresponding semantic color; entries with any other arity are skipped.
    /// Bundled (non-custom) themes are partial, so the interface theme is
    /// re-applied to fill in the names the engine leaves undefined.
    pub fn set_color_theme(&mut self, name: &str) {
        let command = if name == "default" {
            "ecd".to_string()
        } else {
            format!("eco {name}")
        };
        if let Err(err) = self.engine.cmd(&command) {
            warn!(%err, theme = name, "engine color-theme switch failed");
        }
        self.store.set("theme", Value::from(name));

        // Bundled themes are partial: rebuild the interface-theme defaults
        // first so the engine's colors land on top and win on overlap.
        if !self.engine.is_custom_theme(name) {
            self.set_interface_theme(self.interface_theme());
        }

        let payload = self.engine.color_theme(name);
        if let Some(entries) = payload.as_object() {
            for (color_name, components) in entries {
                let Some(color) = rgba_from_components(components) else {
                    continue;
                };
                self.set_color(color_name, color);
            }
        }

        self.observers.emit(Notification::ColorsUpdated);
    }

    /// Last engine color theme chosen while `interface_theme` was active.
    pub fn last_theme_of(&self, interface_theme: &InterfaceTheme) -> String {
        self.store
            .get(&format!("lastThemeOf.{}", interface_theme.name))
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_else(|| self.color_theme())
    }

    /// Remember the engine color theme paired with `interface_theme`.
    pub fn set_last_theme_of(&mut self, interface_theme: &InterfaceTheme, theme_name: &str) {
        self.store.set(
            &format!("lastThemeOf.{}", interface_theme.name),
            Value::from(theme_name),
        );
    }

    // -----------------------------------------------------------------------
    // Engine options (mirror)
    // -----------------------------------------------------------------------

    /// Push every catalog option into the engine: the persisted override when
    /// present, the catalog default otherwise. Read-only on the store side.
    pub fn apply_saved_asm_options(&mut self) {
        for option in ENGINE_OPTIONS {
            let value = self
                .store
                .get(option.key)
                .unwrap_or_else(|| option.default.to_value());
            if let Err(err) = self.engine.set_config(option.key, &value) {
                warn!(%err, key = option.key, "engine option push failed");
            }
        }
    }

    /// Restore every catalog option to its default, in the store and engine.
    pub fn reset_to_default_asm_options(&mut self) {
        for option in ENGINE_OPTIONS {
            self.set_config(option.key, option.default.to_value());
        }
    }

    /// Write one engine config value.
    ///
    /// Catalog membership gates persistence only: unknown keys still reach
    /// the engine (it is the broader authority) but are forgotten on restart.
    pub fn set_config(&mut self, key: &str, value: impl Into<Value>) {
        let value = value.into();
        if options::lookup(key).is_some() {
            self.store.set(key, value.clone());
        }
        if let Err(err) = self.engine.set_config(key, &value) {
            warn!(%err, key, "engine config write failed");
        }
    }

    /// Typed engine read for a catalog key; `None` for non-catalog keys.
    ///
    /// The catalog default's type decides which engine getter answers.
    fn config_var(&self, key: &str) -> Option<Value> {
        let option = options::lookup(key)?;
        Some(match option.default {
            OptionDefault::Bool(_) => Value::Bool(self.engine.config_bool(key)),
            OptionDefault::Int(_) => Value::Int(self.engine.config_int(key)),
            OptionDefault::Str(_) => Value::Str(self.engine.config(key)),
        })
    }

    pub fn config_bool(&self, key: &str) -> bool {
        self.config_var(key)
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    pub fn config_int(&self, key: &str) -> i64 {
        self.config_var(key)
            .and_then(|value| value.as_int())
            .unwrap_or(0)
    }

    pub fn config_string(&self, key: &str) -> String {
        self.config_var(key)
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    // -----------------------------------------------------------------------
    // Fonts, locale, misc settings
    // -----------------------------------------------------------------------

    /// Stored font, defaulting to Inconsolata 11.
    pub fn font(&self) -> FontSpec {
        self.store
            .get("font")
            .and_then(|value| value.as_font().cloned())
            .unwrap_or_default()
    }

    pub fn set_font(&mut self, font: FontSpec) {
        self.store.set("font", Value::from(font));
        self.observers.emit(Notification::FontsUpdated);
    }

    pub fn locale(&self) -> LocaleSpec {
        self.store
            .get("locale")
            .and_then(|value| value.as_locale().cloned())
            .unwrap_or_else(LocaleSpec::system)
    }

    pub fn set_locale(&mut self, locale: LocaleSpec) {
        self.store.set("locale", Value::from(locale));
    }

    pub fn auto_update_enabled(&self) -> bool {
        self.store
            .get("autoUpdateEnabled")
            .and_then(|value| value.as_bool())
            .unwrap_or(false)
    }

    pub fn set_auto_update_enabled(&mut self, enabled: bool) {
        self.store.set("autoUpdateEnabled", Value::from(enabled));
    }

    /// Projects directory, seeded from the engine's own setting on first read.
    pub fn dir_projects(&mut self) -> String {
        let stored = self
            .store
            .get("dir.projects")
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default();
        if !stored.is_empty() {
            return stored;
        }
        let from_engine = self.engine.config("dir.projects");
        self.set_dir_projects(&from_engine);
        from_engine
    }

    pub fn set_dir_projects(&mut self, dir: &str) {
        self.store.set("dir.projects", Value::from(dir));
    }

    pub fn recent_folder(&self) -> String {
        self.store
            .get("dir.recentFolder")
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|home| home.display().to_string())
                    .unwrap_or_else(|| ".".to_string())
            })
    }

    pub fn set_recent_folder(&mut self, dir: &str) {
        self.store.set("dir.recentFolder", Value::from(dir));
    }

    /// Last clicked tab of the new-file dialog.
    pub fn new_file_last_clicked(&self) -> i64 {
        self.store
            .get("newFileLastClicked")
            .and_then(|value| value.as_int())
            .unwrap_or(0)
    }

    pub fn set_new_file_last_clicked(&mut self, last_clicked: i64) {
        self.store
            .set("newFileLastClicked", Value::from(last_clicked));
    }

    /// One-shot first-run check: true exactly once per fresh store.
    pub fn is_first_execution(&mut self) -> bool {
        if self.store.contains("firstExecution") {
            false
        } else {
            self.store.set("firstExecution", Value::from(false));
            true
        }
    }

    // -----------------------------------------------------------------------
    // Observers
    // -----------------------------------------------------------------------

    /// Register a callback for every change notification.
    pub fn subscribe(&mut self, callback: impl Fn(Notification) + 'static) -> SubscriberId {
        self.observers.subscribe(callback)
    }

    /// Remove a previously registered callback.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        self.observers.unsubscribe(id)
    }
}

impl std::fmt::Debug for Configuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Configuration")
            .field("store", &self.store.file_name())
            .field("interface_theme", &self.current_theme().name)
            .finish()
    }
}

/// Parse one engine theme entry: exactly 4 numeric components, 0–255 each.
///
/// Any other arity means the entry is skipped, not an error. Non-numeric
/// components coerce to 0, matching the engine's own JSON conventions.
fn rgba_from_components(value: &serde_json::Value) -> Option<Rgba> {
    let components = value.as_array()?;
    if components.len() != 4 {
        return None;
    }
    let mut channels = [0u8; 4];
    for (slot, component) in channels.iter_mut().zip(components) {
        *slot = component.as_i64().unwrap_or(0).clamp(0, 255) as u8;
    }
    Some(Rgba::rgba(channels[0], channels[1], channels[2], channels[3]))
}
