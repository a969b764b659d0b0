//! Route pattern parsing and matching.
//!
//! A pattern is a path template whose `:`-prefixed segments capture the
//! corresponding path segment by name; every other segment must match
//! literally. Patterns are parsed once at registration time, so matching
//! never re-inspects the template syntax. There is no wildcard or optional
//! segment form, and query strings are outside this module entirely.

use std::collections::HashMap;

use crate::path::{normalize_path, path_segments};

/// Parameters captured from a matched path, keyed by segment name.
pub type Params = HashMap<String, String>;

/// A single parsed pattern segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text that must be byte-equal to the path segment.
    Static(String),
    /// `:name` capture; matches any single segment and records its value.
    Param(String),
}

/// Classifies one raw pattern segment (pure function).
///
/// # Examples
///
/// ```
/// use folio_router::pattern::{classify_segment, Segment};
///
/// assert_eq!(classify_segment("writing"), Segment::Static("writing".into()));
/// assert_eq!(classify_segment(":postId"), Segment::Param("postId".into()));
/// ```
pub fn classify_segment(segment: &str) -> Segment {
    match segment.strip_prefix(':') {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Static(segment.to_string()),
    }
}

/// A parsed route pattern.
///
/// # Examples
///
/// ```
/// use folio_router::Pattern;
///
/// let pattern = Pattern::parse("/writing/:postId");
/// let params = pattern.matches("/writing/abc-123").unwrap();
/// assert_eq!(params.get("postId"), Some(&"abc-123".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Parses a pattern string, normalizing it first.
    ///
    /// Root `/` parses to zero segments and can never capture anything.
    pub fn parse(pattern: &str) -> Self {
        let raw = normalize_path(pattern).into_owned();
        let segments = path_segments(&raw).map(classify_segment).collect();
        Self { raw, segments }
    }

    /// The normalized pattern text, e.g. `/writing/:postId`.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Names of the capture segments, in pattern order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|seg| match seg {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Static(_) => None,
            })
            .collect()
    }

    /// Matches a concrete path against this pattern.
    ///
    /// Segment counts must be equal; literal segments must be byte-equal;
    /// each `:name` segment captures its path segment verbatim. A failed
    /// match is `None`, never an error.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let path = normalize_path(path);
        let path_segs: Vec<&str> = path_segments(&path).collect();

        if path_segs.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (pattern_seg, path_seg) in self.segments.iter().zip(&path_segs) {
            match pattern_seg {
                Segment::Static(literal) => {
                    if literal != path_seg {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert(name.clone(), (*path_seg).to_string());
                }
            }
        }

        Some(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_static() {
        assert_eq!(classify_segment("focus"), Segment::Static("focus".to_string()));
    }

    #[test]
    fn test_classify_param() {
        assert_eq!(classify_segment(":postId"), Segment::Param("postId".to_string()));
    }

    #[test]
    fn test_parse_normalizes() {
        let pattern = Pattern::parse("/writing/:postId/");
        assert_eq!(pattern.as_str(), "/writing/:postId");
        assert_eq!(pattern.param_names(), vec!["postId"]);
    }

    #[test]
    fn test_root_has_no_segments() {
        let pattern = Pattern::parse("/");
        assert!(pattern.param_names().is_empty());
        assert_eq!(pattern.matches("/"), Some(Params::new()));
        assert_eq!(pattern.matches("/focus"), None);
    }

    #[test]
    fn test_matches_literal() {
        let pattern = Pattern::parse("/focus");
        assert!(pattern.matches("/focus").is_some());
        assert!(pattern.matches("/focus/").is_some());
        assert!(pattern.matches("/contact").is_none());
    }

    #[test]
    fn test_matches_captures_verbatim() {
        let pattern = Pattern::parse("/writing/:postId");
        let params = pattern.matches("/writing/abc-123").unwrap();
        assert_eq!(params.get("postId"), Some(&"abc-123".to_string()));
    }

    #[test]
    fn test_segment_count_mismatch() {
        let pattern = Pattern::parse("/writing/:postId");
        assert!(pattern.matches("/writing").is_none());
        assert!(pattern.matches("/writing/a/b").is_none());
    }

    #[test]
    fn test_no_query_string_handling() {
        // The matcher is path-only; a query string is just a weird segment.
        let pattern = Pattern::parse("/focus");
        assert!(pattern.matches("/focus?tab=2").is_none());
    }
}
