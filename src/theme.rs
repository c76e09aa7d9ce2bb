//! Interface-theme catalog and palette color tables.
//!
//! An interface theme picks the base chrome (native/dark/light) and the set of
//! semantic GUI colors layered under whatever engine color theme is active.
//! The tables here are the defaults the palette resolver installs; the engine
//! color theme then overrides the names it defines.

use crate::values::Rgba;

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Which appearance modes an interface theme supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Pinned light chrome.
    Light,
    /// Pinned dark chrome.
    Dark,
    /// Adaptive: tracks the host window brightness at apply time.
    Any,
}

/// Immutable catalog entry. Identity is the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceTheme {
    pub name: &'static str,
    pub mode: ColorMode,
}

/// The fixed interface-theme catalog. Index 0 is the defensive default.
pub const INTERFACE_THEMES: &[InterfaceTheme] = &[
    InterfaceTheme {
        name: "Native",
        mode: ColorMode::Any,
    },
    InterfaceTheme {
        name: "Dark",
        mode: ColorMode::Dark,
    },
    InterfaceTheme {
        name: "Light",
        mode: ColorMode::Light,
    },
];

/// Channel-sum threshold below which a window background counts as dark.
pub const DARK_CHANNEL_SUM_THRESHOLD: u16 = 382;

/// Brightness test used by the adaptive (Native) theme.
pub fn is_dark_background(color: Rgba) -> bool {
    color.channel_sum() < DARK_CHANNEL_SUM_THRESHOLD
}

// ---------------------------------------------------------------------------
// Palette tables
// ---------------------------------------------------------------------------

/// Colors shared by both flavors of the Native chrome: code-flow arrows,
/// navigation-bar segments, breakpoint highlighting, tooltips, graph overview.
pub(crate) const NATIVE_BASE_COLORS: &[(&str, Rgba)] = &[
    ("gui.cflow", Rgba::rgb(0, 0, 0)),
    ("gui.imports", Rgba::rgb(50, 140, 255)),
    ("gui.main", Rgba::rgb(0, 128, 0)),
    ("gui.navbar.seek", Rgba::rgb(255, 0, 0)),
    ("gui.navbar.pc", Rgba::rgb(66, 238, 244)),
    ("gui.navbar.code", Rgba::rgb(104, 229, 69)),
    ("gui.navbar.str", Rgba::rgb(69, 104, 229)),
    ("gui.navbar.sym", Rgba::rgb(229, 150, 69)),
    ("gui.navbar.empty", Rgba::rgb(100, 100, 100)),
    ("gui.breakpoint_background", Rgba::rgb(233, 143, 143)),
    ("gui.item_invalid", Rgba::rgb(155, 155, 155)),
    ("gui.item_unsafe", Rgba::rgb(255, 129, 123)),
    ("gui.overview.node", Rgba::rgb(200, 200, 200)),
    ("gui.tooltip.background", Rgba::rgb(250, 252, 254)),
    ("gui.tooltip.foreground", Rgba::rgb(42, 44, 46)),
];

/// Native chrome on a dark host window.
pub(crate) const NATIVE_DARK_COLORS: &[(&str, Rgba)] = &[
    ("gui.border", Rgba::rgb(0, 0, 0)),
    ("gui.background", Rgba::rgb(30, 30, 30)),
    ("gui.alt_background", Rgba::rgb(42, 42, 42)),
    ("gui.disass_selected", Rgba::rgb(35, 35, 35)),
    ("lineHighlight", Rgba::rgba(255, 255, 255, 15)),
    ("wordHighlight", Rgba::rgba(20, 20, 20, 255)),
    ("highlightPC", Rgba::rgb(87, 26, 7)),
    ("gui.tooltip.background", Rgba::rgb(42, 44, 46)),
    ("gui.tooltip.foreground", Rgba::rgb(250, 252, 254)),
    ("gui.dataoffset", Rgba::rgb(255, 255, 255)),
    ("gui.overview.fill", Rgba::rgba(255, 255, 255, 40)),
    ("gui.overview.border", Rgba::rgba(99, 218, 232, 50)),
];

/// Native chrome on a light host window.
pub(crate) const NATIVE_LIGHT_COLORS: &[(&str, Rgba)] = &[
    ("gui.border", Rgba::rgb(0, 0, 0)),
    ("gui.background", Rgba::rgb(255, 255, 255)),
    ("gui.alt_background", Rgba::rgb(245, 250, 255)),
    ("gui.disass_selected", Rgba::rgb(255, 255, 255)),
    ("lineHighlight", Rgba::rgba(210, 210, 255, 150)),
    ("wordHighlight", Rgba::rgba(179, 119, 214, 60)),
    ("highlightPC", Rgba::rgb(214, 255, 210)),
    ("gui.dataoffset", Rgba::rgb(0, 0, 0)),
    ("gui.overview.fill", Rgba::rgba(175, 217, 234, 65)),
    ("gui.overview.border", Rgba::rgba(99, 218, 232, 50)),
];

/// Base colors for the bundled Dark chrome.
pub(crate) const DARK_BASE_COLORS: &[(&str, Rgba)] = &[
    ("gui.cflow", Rgba::rgb(255, 255, 255)),
    ("gui.dataoffset", Rgba::rgb(255, 255, 255)),
    ("gui.imports", Rgba::rgb(50, 140, 255)),
    ("gui.item_invalid", Rgba::rgb(155, 155, 155)),
    ("gui.item_unsafe", Rgba::rgb(255, 129, 123)),
    ("gui.main", Rgba::rgb(0, 128, 0)),
    ("gui.navbar.seek", Rgba::rgb(233, 86, 86)),
    ("gui.navbar.pc", Rgba::rgb(66, 238, 244)),
    ("gui.navbar.code", Rgba::rgb(130, 200, 111)),
    ("gui.navbar.str", Rgba::rgb(111, 134, 216)),
    ("gui.navbar.sym", Rgba::rgb(221, 163, 104)),
    ("gui.navbar.empty", Rgba::rgb(100, 100, 100)),
    ("highlightPC", Rgba::rgb(87, 26, 7)),
    ("gui.breakpoint_background", Rgba::rgb(140, 76, 76)),
    ("gui.overview.node", Rgba::rgb(100, 100, 100)),
    ("gui.overview.fill", Rgba::rgba(255, 255, 255, 40)),
    ("gui.overview.border", Rgba::rgba(99, 218, 232, 50)),
];

/// Window/selection colors layered over [`DARK_BASE_COLORS`].
pub(crate) const DARK_COLORS: &[(&str, Rgba)] = &[
    ("gui.border", Rgba::rgb(100, 100, 100)),
    ("gui.background", Rgba::rgb(37, 40, 43)),
    ("gui.alt_background", Rgba::rgb(28, 31, 36)),
    ("gui.disass_selected", Rgba::rgb(31, 34, 40)),
    ("gui.tooltip.background", Rgba::rgb(42, 44, 46)),
    ("gui.tooltip.foreground", Rgba::rgb(250, 252, 254)),
    ("lineHighlight", Rgba::rgba(21, 29, 29, 150)),
    ("wordHighlight", Rgba::rgba(52, 58, 71, 255)),
];

/// Colors for the bundled Light chrome.
pub(crate) const LIGHT_COLORS: &[(&str, Rgba)] = &[
    ("gui.border", Rgba::rgb(145, 200, 250)),
    ("gui.background", Rgba::rgb(255, 255, 255)),
    ("gui.alt_background", Rgba::rgb(245, 250, 255)),
    ("gui.disass_selected", Rgba::rgb(255, 255, 255)),
    ("lineHighlight", Rgba::rgba(210, 210, 255, 150)),
    ("wordHighlight", Rgba::rgba(179, 119, 214, 60)),
    ("highlightPC", Rgba::rgb(214, 255, 210)),
    ("gui.navbar.empty", Rgba::rgb(220, 236, 245)),
    ("gui.navbar.err", Rgba::rgb(3, 170, 245)),
    ("gui.tooltip.background", Rgba::rgb(250, 252, 254)),
    ("gui.tooltip.foreground", Rgba::rgb(42, 44, 46)),
    ("gui.overview.node", Rgba::rgb(245, 250, 255)),
    ("gui.overview.fill", Rgba::rgba(175, 217, 234, 65)),
    ("gui.overview.border", Rgba::rgba(99, 218, 232, 50)),
];
