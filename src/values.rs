//! Settings data model.
//!
//! Every value that crosses the persisted-store boundary is a [`Value`]: a
//! closed, explicitly-tagged union rather than an open dynamic type, so the
//! typed dispatch in the option mirror is a match over a finite enumeration.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// Concrete RGBA color, 8 bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channel sum used by the adaptive-theme brightness check.
    ///
    /// Range 0..=765; the coordinator treats anything below 382 as dark.
    pub fn channel_sum(&self) -> u16 {
        u16::from(self.r) + u16::from(self.g) + u16::from(self.b)
    }
}

// ---------------------------------------------------------------------------
// FontSpec
// ---------------------------------------------------------------------------

/// Opaque font descriptor stored alongside the theme settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub point_size: u32,
}

impl FontSpec {
    pub fn new(family: impl Into<String>, point_size: u32) -> Self {
        Self {
            family: family.into(),
            point_size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Inconsolata", 11)
    }
}

// ---------------------------------------------------------------------------
// LocaleSpec
// ---------------------------------------------------------------------------

/// Opaque locale tag (e.g. `en_US`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleSpec(pub String);

impl LocaleSpec {
    /// Locale reported by the host environment, falling back to `en_US`.
    pub fn system() -> Self {
        let tag = std::env::var("LC_ALL")
            .or_else(|_| std::env::var("LANG"))
            .ok()
            .and_then(|raw| {
                // Strip encoding suffixes like `.UTF-8`.
                let tag = raw.split('.').next().unwrap_or("").trim().to_string();
                if tag.is_empty() || tag == "C" || tag == "POSIX" {
                    None
                } else {
                    Some(tag)
                }
            })
            .unwrap_or_else(|| "en_US".to_string());
        Self(tag)
    }
}

// ---------------------------------------------------------------------------
// Value
// ---------------------------------------------------------------------------

/// Tagged union for everything the persisted store can hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Value {
    Bool(bool),
    Int(i64),
    Str(String),
    Color(Rgba),
    Font(FontSpec),
    Locale(LocaleSpec),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<Rgba> {
        match self {
            Self::Color(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_font(&self) -> Option<&FontSpec> {
        match self {
            Self::Font(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_locale(&self) -> Option<&LocaleSpec> {
        match self {
            Self::Locale(v) => Some(v),
            _ => None,
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Rgba> for Value {
    fn from(v: Rgba) -> Self {
        Self::Color(v)
    }
}

impl From<FontSpec> for Value {
    fn from(v: FontSpec) -> Self {
        Self::Font(v)
    }
}

impl From<LocaleSpec> for Value {
    fn from(v: LocaleSpec) -> Self {
        Self::Locale(v)
    }
}
