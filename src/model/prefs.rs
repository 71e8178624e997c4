//! Typed preference state.
//!
//! `CoveragePrefs` is the in-memory form of everything the application keeps
//! in the user-settings store: the two display booleans, the filter-string
//! interpretation mode and the four line-classification colors.

use serde::{Deserialize, Serialize};

use super::color::LineColor;
use super::constants::*;

/// How a user-supplied filter string is interpreted.
///
/// The raw values are persisted in the settings store and must stay stable:
/// 0 = wildcard, 1 = regular expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(i32)]
pub enum FilterStringType {
    /// Shell-style pattern: `*` matches any run, `?` a single character.
    #[default]
    WildcardPattern = FILTER_TYPE_WILDCARD,
    /// The filter string is a regular expression.
    RegularExpression = FILTER_TYPE_REGEX,
}

impl FilterStringType {
    /// The integer value stored in the settings store.
    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Decodes a stored value. Unknown values (hand-edited settings files,
    /// future versions) fall back to the wildcard default.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            FILTER_TYPE_REGEX => FilterStringType::RegularExpression,
            _ => FilterStringType::WildcardPattern,
        }
    }
}

// Persisted as the raw integer so the JSON file matches what the
// NSUserDefaults backend stores.
impl Serialize for FilterStringType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_raw())
    }
}

impl<'de> Deserialize<'de> for FilterStringType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(FilterStringType::from_raw(i32::deserialize(deserializer)?))
    }
}

/// Coverage classification of a single source line.
///
/// Each classification is rendered in its own user-configurable color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClassification {
    /// Executable but never hit.
    Missed,
    /// Not executable (comments, declarations, blank lines).
    Unexecutable,
    /// Executable but marked non-feasible by the user.
    NonFeasible,
    /// Executed at least once.
    Executed,
}

impl LineClassification {
    pub const ALL: [LineClassification; 4] = [
        LineClassification::Missed,
        LineClassification::Unexecutable,
        LineClassification::NonFeasible,
        LineClassification::Executed,
    ];

    /// The settings-store key holding this classification's color.
    pub fn pref_key(self) -> &'static str {
        match self {
            LineClassification::Missed => PREF_MISSED_LINE_COLOR,
            LineClassification::Unexecutable => PREF_UNEXECUTABLE_LINE_COLOR,
            LineClassification::NonFeasible => PREF_NON_FEASIBLE_LINE_COLOR,
            LineClassification::Executed => PREF_EXECUTED_LINE_COLOR,
        }
    }

    /// The built-in color used before the user customizes anything.
    pub fn default_color(self) -> LineColor {
        match self {
            LineClassification::Missed => DEFAULT_MISSED_COLOR.into(),
            LineClassification::Unexecutable => DEFAULT_UNEXECUTABLE_COLOR.into(),
            LineClassification::NonFeasible => DEFAULT_NON_FEASIBLE_COLOR.into(),
            LineClassification::Executed => DEFAULT_EXECUTED_COLOR.into(),
        }
    }
}

/// Complete preference state, serializable to/from the settings store.
///
/// Fields absent from a stored file fall back to their defaults, so older
/// settings files keep loading as preferences are added.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CoveragePrefs {
    /// Filter out system/SDK sources from the file list?
    pub hide_system_sources: bool,
    /// Show complexity figures instead of coverage?
    pub show_complexity: bool,
    /// How the filter string is interpreted.
    pub filter_string_type: FilterStringType,
    /// Color for missed lines.
    pub missed_line_color: LineColor,
    /// Color for unexecutable lines.
    pub unexecutable_line_color: LineColor,
    /// Color for non-feasible lines.
    pub non_feasible_line_color: LineColor,
    /// Color for executed lines.
    pub executed_line_color: LineColor,
}

impl Default for CoveragePrefs {
    fn default() -> Self {
        Self {
            hide_system_sources: DEFAULT_HIDE_SYSTEM_SOURCES,
            show_complexity: DEFAULT_SHOW_COMPLEXITY,
            filter_string_type: FilterStringType::default(),
            missed_line_color: DEFAULT_MISSED_COLOR.into(),
            unexecutable_line_color: DEFAULT_UNEXECUTABLE_COLOR.into(),
            non_feasible_line_color: DEFAULT_NON_FEASIBLE_COLOR.into(),
            executed_line_color: DEFAULT_EXECUTED_COLOR.into(),
        }
    }
}

impl CoveragePrefs {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.missed_line_color.validate();
        self.unexecutable_line_color.validate();
        self.non_feasible_line_color.validate();
        self.executed_line_color.validate();
    }

    /// The color configured for a line classification.
    pub fn color_for(&self, class: LineClassification) -> LineColor {
        match class {
            LineClassification::Missed => self.missed_line_color,
            LineClassification::Unexecutable => self.unexecutable_line_color,
            LineClassification::NonFeasible => self.non_feasible_line_color,
            LineClassification::Executed => self.executed_line_color,
        }
    }

    /// Replaces the color for a line classification.
    pub fn set_color_for(&mut self, class: LineClassification, color: LineColor) {
        let slot = match class {
            LineClassification::Missed => &mut self.missed_line_color,
            LineClassification::Unexecutable => &mut self.unexecutable_line_color,
            LineClassification::NonFeasible => &mut self.non_feasible_line_color,
            LineClassification::Executed => &mut self.executed_line_color,
        };
        *slot = color;
    }
}
