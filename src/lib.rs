//! binview configuration — theming and settings coordination for the binview
//! analysis front-end.
//!
//! This crate owns the single source of truth for user-visible appearance
//! (interface theme, semantic color table, font) and for the persisted engine
//! display options, keeps the durable settings store and the live
//! analysis-engine session mirrored, and notifies observers when either
//! changes.
//!
//! The entry point is [`config::Configuration`]: construct it once at process
//! start from a [`store::SettingsStore`], an [`engine::AnalysisEngine`]
//! session, and a [`toolkit::Toolkit`] handle, then call
//! [`config::Configuration::load_initial`]. All operations are synchronous
//! and single-threaded; collaborators are expected to answer in-line.

pub mod config;
pub mod engine;
pub mod error;
pub mod notify;
pub mod options;
pub mod store;
pub mod theme;
pub mod toolkit;
pub mod values;

#[cfg(test)]
pub mod testsupport;
