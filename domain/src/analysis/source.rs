//! Citation sources and their aggregation across workers.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A web citation attached to a worker's output. Identity is `uri`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    #[serde(default)]
    pub title: String,
}

impl Source {
    pub fn new(uri: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            title: title.into(),
        }
    }
}

/// Flatten per-worker citation lists into one deduplicated list.
///
/// Iterates worker-then-citation order and keeps the first entry seen for
/// each `uri`; later duplicates are dropped even when their title differs.
/// Entries with an empty `uri` are skipped.
///
/// # Example
///
/// ```
/// use council_domain::analysis::source::{aggregate_sources, Source};
///
/// let social = vec![Source::new("https://a.example", "First title")];
/// let news = vec![
///     Source::new("https://a.example", "Other title"),
///     Source::new("https://b.example", "B"),
/// ];
///
/// let all = aggregate_sources([social.as_slice(), news.as_slice()]);
/// assert_eq!(all.len(), 2);
/// assert_eq!(all[0].title, "First title");
/// ```
pub fn aggregate_sources<'a, I>(per_worker: I) -> Vec<Source>
where
    I: IntoIterator<Item = &'a [Source]>,
{
    let mut seen = HashSet::new();
    let mut all = Vec::new();

    for source in per_worker.into_iter().flatten() {
        if source.uri.is_empty() {
            continue;
        }
        if seen.insert(source.uri.as_str()) {
            all.push(source.clone());
        }
    }

    all
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lists() -> Vec<Vec<Source>> {
        vec![
            vec![
                Source::new("https://reuters.com/a", "Reuters A"),
                Source::new("https://x.com/post", "Post"),
            ],
            vec![],
            vec![
                Source::new("https://x.com/post", "Post (renamed)"),
                Source::new("https://ft.com/b", "FT B"),
                Source::new("", "No uri"),
            ],
        ]
    }

    fn aggregate(lists: &[Vec<Source>]) -> Vec<Source> {
        aggregate_sources(lists.iter().map(Vec::as_slice))
    }

    #[test]
    fn test_first_seen_title_wins() {
        let all = aggregate(&lists());
        let uris: Vec<_> = all.iter().map(|s| s.uri.as_str()).collect();
        assert_eq!(
            uris,
            vec!["https://reuters.com/a", "https://x.com/post", "https://ft.com/b"]
        );
        assert_eq!(all[1].title, "Post");
    }

    #[test]
    fn test_idempotent() {
        let first = aggregate(&lists());
        let second = aggregate(&lists());
        assert_eq!(first, second);

        // Feeding the output back in changes nothing either
        let again = aggregate(&[first.clone()]);
        assert_eq!(first, again);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[]).is_empty());
        assert!(aggregate(&[vec![], vec![]]).is_empty());
    }

    #[test]
    fn test_skips_empty_uri() {
        let all = aggregate(&[vec![Source::new("", "blank")]]);
        assert!(all.is_empty());
    }
}
