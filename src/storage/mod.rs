//! Preference persistence.
//!
//! Two backends share the same key registry:
//! - [`json`]: portable JSON settings file, used everywhere and in tests.
//! - [`user_defaults`]: NSUserDefaults, the native store on macOS where
//!   settings written by earlier releases of the application live.

pub mod json;

#[cfg(target_os = "macos")]
pub mod user_defaults;
