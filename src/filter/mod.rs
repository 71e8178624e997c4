//! Source-path filtering.
//!
//! Two user-facing filters act on the file list: the filter string typed in
//! the search field (interpreted per [`FilterStringType`]) and the
//! "hide system sources" toggle. Both operate on full source paths.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::FilterError;
use crate::model::FilterStringType;

/// Path prefixes treated as system sources.
const SYSTEM_PATH_PREFIXES: [&str; 4] = ["/usr/", "/System/", "/Developer/", "/Applications/Xcode"];

/// A compiled filter string.
///
/// Wildcard patterns are lowered to an anchored regex; regular expressions
/// compile verbatim and match anywhere in the path.
#[derive(Debug, Clone)]
pub struct SourceFilter {
    regex: Option<Regex>,
    filter_type: FilterStringType,
}

impl SourceFilter {
    /// Compiles `pattern` according to `filter_type`.
    ///
    /// An empty or whitespace-only pattern matches every path. Wildcard
    /// compilation cannot fail; regex compilation reports the underlying
    /// syntax error.
    pub fn compile(pattern: &str, filter_type: FilterStringType) -> Result<Self, FilterError> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Ok(Self {
                regex: None,
                filter_type,
            });
        }

        let regex = match filter_type {
            FilterStringType::WildcardPattern => {
                let lowered = wildcard_to_regex(pattern);
                debug!(pattern, lowered = %lowered, "compiled wildcard filter");
                RegexBuilder::new(&lowered)
                    .case_insensitive(true)
                    .build()?
            }
            FilterStringType::RegularExpression => Regex::new(pattern)?,
        };

        Ok(Self {
            regex: Some(regex),
            filter_type,
        })
    }

    /// A filter that matches everything.
    pub fn match_all(filter_type: FilterStringType) -> Self {
        Self {
            regex: None,
            filter_type,
        }
    }

    pub fn filter_type(&self) -> FilterStringType {
        self.filter_type
    }

    /// Does `path` pass the filter?
    pub fn matches(&self, path: &str) -> bool {
        match &self.regex {
            Some(re) => re.is_match(path),
            None => true,
        }
    }
}

/// Translates a wildcard pattern into an anchored regex.
///
/// `*` becomes `.*`, `?` becomes `.`, everything else is escaped.
fn wildcard_to_regex(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() + 8);
    out.push('^');
    for c in pattern.chars() {
        match c {
            '*' => out.push_str(".*"),
            '?' => out.push('.'),
            _ => out.push_str(&regex::escape(&c.to_string())),
        }
    }
    out.push('$');
    out
}

/// Is `path` a system/SDK source?
///
/// Used by the `hideSystemSources` preference to drop platform headers and
/// SDK sources from the file list.
pub fn is_system_source(path: &str) -> bool {
    if SYSTEM_PATH_PREFIXES.iter().any(|p| path.starts_with(p)) {
        return true;
    }
    // Anything inside an SDK bundle counts, wherever the SDK lives.
    path.split('/').any(|component| component.ends_with(".sdk"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_translation_escapes_regex_metachars() {
        assert_eq!(wildcard_to_regex("a+b"), r"^a\+b$");
        assert_eq!(wildcard_to_regex("*.c"), r"^.*\.c$");
        assert_eq!(wildcard_to_regex("file?.m"), r"^file.\.m$");
    }

    #[test]
    fn empty_pattern_matches_everything() {
        let f = SourceFilter::compile("   ", FilterStringType::WildcardPattern).unwrap();
        assert!(f.matches("/anything/at/all.c"));
    }

    #[test]
    fn invalid_regex_reports_error() {
        let err = SourceFilter::compile("(unclosed", FilterStringType::RegularExpression);
        assert!(matches!(err, Err(FilterError::InvalidPattern(_))));
    }

    #[test]
    fn invalid_regex_chars_are_fine_in_wildcard_mode() {
        let f = SourceFilter::compile("(unclosed*", FilterStringType::WildcardPattern).unwrap();
        assert!(f.matches("(unclosed paren.c"));
    }
}
