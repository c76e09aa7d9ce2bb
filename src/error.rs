//! Unified error types for the configuration coordinator.
//!
//! Collaborator failures here are deliberately mild: the facade logs them and
//! keeps going, because the observed contract of the appearance system is that
//! nothing in it is fatal to the hosting process.

use std::fmt;

// ---------------------------------------------------------------------------
// EngineError
// ---------------------------------------------------------------------------

/// Errors reported by the analysis-engine collaborator.
#[derive(Debug)]
pub enum EngineError {
    /// A raw engine command (`ecd`, `eco <name>`, `e-`) failed.
    Command(String),
    /// A live config write was rejected by the engine.
    Config(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Command(msg) => write!(f, "engine command failed: {msg}"),
            Self::Config(msg) => write!(f, "engine config write failed: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}

// ---------------------------------------------------------------------------
// ToolkitError
// ---------------------------------------------------------------------------

/// Errors reported by the hosting GUI toolkit.
#[derive(Debug)]
pub enum ToolkitError {
    /// A named built-in stylesheet resource could not be found.
    ///
    /// Callers skip the chrome swap but still populate the color table, so the
    /// UI degrades to correct colors with default chrome.
    MissingStylesheet(String),
}

impl fmt::Display for ToolkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStylesheet(name) => {
                write!(f, "can't find stylesheet resource for theme `{name}`")
            }
        }
    }
}

impl std::error::Error for ToolkitError {}
