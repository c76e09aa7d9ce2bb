//! Hosting GUI-toolkit collaborator contract.

use crate::error::ToolkitError;
use crate::values::Rgba;

/// Named built-in stylesheet resources, one per base chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stylesheet {
    Native,
    Dark,
    Light,
}

impl Stylesheet {
    /// Resource name used in diagnostics.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Windowing-toolkit surface the palette resolver drives.
///
/// All of this is simple pass-through I/O: apply a stylesheet and base
/// palette, probe the live window background for the adaptive theme, and
/// force-repaint widgets after a palette swap.
pub trait Toolkit {
    /// Apply a named built-in stylesheet plus its base palette.
    ///
    /// A missing resource is reported as an error; callers log it and carry on
    /// populating the color table.
    fn apply_stylesheet(&mut self, sheet: Stylesheet) -> Result<(), ToolkitError>;

    /// Override the palette's base text color (used by the Light/Dark chrome).
    fn set_palette_text_color(&mut self, color: Rgba);

    /// Restore the platform default palette captured at startup.
    ///
    /// Widgets created before the swap don't pick up an application-level
    /// palette change on their own, so implementations must also push the
    /// palette to every live widget.
    fn reset_palette(&mut self);

    /// Current window background color, for the adaptive brightness check.
    fn window_background(&self) -> Rgba;

    /// Force-repaint all live widgets with the current palette.
    fn repaint_all(&mut self);

    /// Blocking user-facing alert (used once, for a non-writable store).
    fn critical_alert(&mut self, title: &str, message: &str);
}
