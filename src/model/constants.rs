//! Configuration constants and default values.
//!
//! This module contains the settings-store key registry, default colors for
//! each coverage line classification and the raw integer values persisted
//! for the filter-string-type preference.
//!
//! The string literals are load-bearing: they are the lookup keys in the
//! user-settings store, and settings written by earlier releases are only
//! found again if these stay byte-identical.

// === Settings-Store Keys ===

/// Key for the "filter out system sources" preference (boolean).
pub const PREF_HIDE_SYSTEM_SOURCES: &str = "hideSystemSources";

/// Key for the "show complexity instead of coverage" preference (boolean).
pub const PREF_SHOW_COMPLEXITY: &str = "showComplexity";

/// Key for the filter-string interpretation preference (integer enum).
pub const PREF_FILTER_STRING_TYPE: &str = "filterStringType";

/// Key for the color used to render missed lines.
pub const PREF_MISSED_LINE_COLOR: &str = "missedLineColor";

/// Key for the color used to render unexecutable lines.
pub const PREF_UNEXECUTABLE_LINE_COLOR: &str = "unexecutableLineColor";

/// Key for the color used to render non-feasible lines.
pub const PREF_NON_FEASIBLE_LINE_COLOR: &str = "nonFeasibleLineColor";

/// Key for the color used to render executed lines.
pub const PREF_EXECUTED_LINE_COLOR: &str = "executedLineColor";

// === Filter String Types ===

/// Raw value persisted for wildcard-pattern filtering.
pub const FILTER_TYPE_WILDCARD: i32 = 0;

/// Raw value persisted for regular-expression filtering.
pub const FILTER_TYPE_REGEX: i32 = 1;

// === Preference Defaults ===

/// System sources are hidden unless the user opts in.
pub const DEFAULT_HIDE_SYSTEM_SOURCES: bool = true;

/// Coverage, not complexity, is shown by default.
pub const DEFAULT_SHOW_COMPLEXITY: bool = false;

/// Default color for missed lines (R, G, B, A) - red.
pub const DEFAULT_MISSED_COLOR: (f64, f64, f64, f64) = (0.8, 0.0, 0.0, 1.0);

/// Default color for unexecutable lines - gray.
pub const DEFAULT_UNEXECUTABLE_COLOR: (f64, f64, f64, f64) = (0.5, 0.5, 0.5, 1.0);

/// Default color for non-feasible lines - slate.
pub const DEFAULT_NON_FEASIBLE_COLOR: (f64, f64, f64, f64) = (0.4, 0.4, 0.7, 1.0);

/// Default color for executed lines - black.
pub const DEFAULT_EXECUTED_COLOR: (f64, f64, f64, f64) = (0.0, 0.0, 0.0, 1.0);

// === JSON Backend Location ===

/// Directory under the platform config root holding the settings file.
pub const SETTINGS_DIR: &str = "CoverStory";

/// File name of the JSON settings file.
pub const SETTINGS_FILE: &str = "prefs.json";
