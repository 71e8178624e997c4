//! Preference change events.
//!
//! One event per preference write, carrying the new value where consumers
//! need it to react without re-reading the store.

use crate::model::{FilterStringType, LineClassification};

/// A preference changed in the settings store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefsEvent {
    /// The "hide system sources" toggle changed.
    HideSystemSourcesChanged(bool),

    /// The coverage/complexity display toggle changed.
    ShowComplexityChanged(bool),

    /// The filter-string interpretation mode changed.
    FilterStringTypeChanged(FilterStringType),

    /// One of the four line colors changed.
    LineColorChanged(LineClassification),

    /// The whole preference state was reloaded from disk.
    PrefsReloaded,
}

impl PrefsEvent {
    /// Does this event invalidate the current file-list filtering?
    ///
    /// Color changes only affect rendering; everything else changes which
    /// files or figures are visible.
    pub fn requires_refilter(&self) -> bool {
        !matches!(self, PrefsEvent::LineColorChanged(_))
    }

    /// Does this event require source views to redraw?
    pub fn requires_redraw(&self) -> bool {
        matches!(
            self,
            PrefsEvent::LineColorChanged(_)
                | PrefsEvent::ShowComplexityChanged(_)
                | PrefsEvent::PrefsReloaded
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            PrefsEvent::HideSystemSourcesChanged(_) => "Hide-system-sources toggle changed",
            PrefsEvent::ShowComplexityChanged(_) => "Coverage/complexity display changed",
            PrefsEvent::FilterStringTypeChanged(_) => "Filter string interpretation changed",
            PrefsEvent::LineColorChanged(_) => "Line classification color changed",
            PrefsEvent::PrefsReloaded => "Preferences reloaded from store",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_changes_do_not_refilter() {
        assert!(!PrefsEvent::LineColorChanged(LineClassification::Missed).requires_refilter());
        assert!(PrefsEvent::HideSystemSourcesChanged(true).requires_refilter());
        assert!(
            PrefsEvent::FilterStringTypeChanged(FilterStringType::RegularExpression)
                .requires_refilter()
        );
    }

    #[test]
    fn color_and_complexity_changes_redraw() {
        assert!(PrefsEvent::LineColorChanged(LineClassification::Executed).requires_redraw());
        assert!(PrefsEvent::ShowComplexityChanged(true).requires_redraw());
        assert!(!PrefsEvent::HideSystemSourcesChanged(false).requires_redraw());
    }

    #[test]
    fn reload_invalidates_everything() {
        assert!(PrefsEvent::PrefsReloaded.requires_refilter());
        assert!(PrefsEvent::PrefsReloaded.requires_redraw());
    }

    #[test]
    fn all_events_have_descriptions() {
        let events = [
            PrefsEvent::HideSystemSourcesChanged(true),
            PrefsEvent::ShowComplexityChanged(false),
            PrefsEvent::FilterStringTypeChanged(FilterStringType::WildcardPattern),
            PrefsEvent::LineColorChanged(LineClassification::NonFeasible),
            PrefsEvent::PrefsReloaded,
        ];
        for event in events {
            assert!(!event.description().is_empty());
        }
    }
}
