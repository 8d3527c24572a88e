//! Page selector parsing for split operations.
//!
//! A selector is a comma-separated list of entries. In `pages` form each
//! entry is a single 1-based page number; in `ranges` form an entry may also
//! be an inclusive `start-end` span. Resolution preserves listed order and
//! duplicates (overlapping ranges repeat pages).

use crate::error::PdfError;

/// How to treat selector entries that do not resolve to a real page.
///
/// `Lenient` silently drops malformed and out-of-range entries, matching the
/// historical behavior users depend on. `Strict` rejects the whole request
/// instead of masking typos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorPolicy {
    Lenient,
    Strict,
}

/// Which pages of a source document a split should extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitSelection {
    /// Every page, one output document per page.
    All,
    /// Comma-separated single page numbers, e.g. `"2,4,7"`.
    Pages(String),
    /// Comma-separated pages or inclusive spans, e.g. `"1-3,5"`.
    Ranges(String),
}

impl SplitSelection {
    /// Resolve the selection against a document with `page_count` pages.
    ///
    /// Returns the 1-based page numbers to extract, in listed order with
    /// duplicates preserved. Fails when strict policy hits a bad entry, or
    /// when nothing usable remains (an empty output document is never
    /// produced silently).
    pub fn resolve(&self, page_count: u32, policy: SelectorPolicy) -> Result<Vec<u32>, PdfError> {
        let pages = match self {
            SplitSelection::All => (1..=page_count).collect(),
            SplitSelection::Pages(input) => resolve_pages(input, page_count, policy)?,
            SplitSelection::Ranges(input) => resolve_ranges(input, page_count, policy)?,
        };

        if pages.is_empty() {
            return Err(PdfError::InvalidSelection(
                "no valid page numbers in selection".into(),
            ));
        }

        Ok(pages)
    }
}

fn resolve_pages(
    input: &str,
    page_count: u32,
    policy: SelectorPolicy,
) -> Result<Vec<u32>, PdfError> {
    let mut pages = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        match part.parse::<u32>() {
            Ok(page) if in_range(page, page_count) => pages.push(page),
            Ok(page) => reject_or_skip(policy, || {
                format!("page {} is out of range (document has {} pages)", page, page_count)
            })?,
            Err(_) => reject_or_skip(policy, || format!("invalid page number: {:?}", part))?,
        }
    }

    Ok(pages)
}

fn resolve_ranges(
    input: &str,
    page_count: u32,
    policy: SelectorPolicy,
) -> Result<Vec<u32>, PdfError> {
    let mut pages = Vec::new();

    for part in input.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        if let Some((start, end)) = part.split_once('-') {
            let bounds = (start.trim().parse::<u32>(), end.trim().parse::<u32>());
            match bounds {
                (Ok(start), Ok(end)) if start <= end => {
                    // Only the in-range portion of the span is walked; a span
                    // reaching past the document is clipped, never iterated,
                    // so `1-4294967295` costs the same as `1-page_count`.
                    if start < 1 {
                        reject_or_skip(policy, || {
                            format!("page 0 is out of range (document has {} pages)", page_count)
                        })?;
                    }
                    if end > page_count {
                        reject_or_skip(policy, || {
                            format!(
                                "page {} is out of range (document has {} pages)",
                                end, page_count
                            )
                        })?;
                    }
                    for page in start.max(1)..=end.min(page_count) {
                        pages.push(page);
                    }
                }
                (Ok(start), Ok(end)) => reject_or_skip(policy, || {
                    format!("range start {} is greater than end {}", start, end)
                })?,
                _ => reject_or_skip(policy, || format!("invalid range entry: {:?}", part))?,
            }
        } else {
            match part.parse::<u32>() {
                Ok(page) if in_range(page, page_count) => pages.push(page),
                Ok(page) => reject_or_skip(policy, || {
                    format!("page {} is out of range (document has {} pages)", page, page_count)
                })?,
                Err(_) => reject_or_skip(policy, || format!("invalid range entry: {:?}", part))?,
            }
        }
    }

    Ok(pages)
}

fn in_range(page: u32, page_count: u32) -> bool {
    page >= 1 && page <= page_count
}

fn reject_or_skip(policy: SelectorPolicy, message: impl FnOnce() -> String) -> Result<(), PdfError> {
    match policy {
        SelectorPolicy::Lenient => Ok(()),
        SelectorPolicy::Strict => Err(PdfError::InvalidSelection(message())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_all_selects_every_page() {
        let pages = SplitSelection::All.resolve(4, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pages_preserves_listed_order() {
        let sel = SplitSelection::Pages("4, 1, 3".into());
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![4, 1, 3]);
    }

    #[test]
    fn test_pages_drops_out_of_range_when_lenient() {
        let sel = SplitSelection::Pages("2,4,99".into());
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![2, 4]);
    }

    #[test]
    fn test_pages_rejects_out_of_range_when_strict() {
        let sel = SplitSelection::Pages("2,4,99".into());
        let result = sel.resolve(5, SelectorPolicy::Strict);
        assert!(matches!(result, Err(PdfError::InvalidSelection(_))));
    }

    #[test]
    fn test_pages_drops_garbage_entries_when_lenient() {
        let sel = SplitSelection::Pages("1, x, -3, 2".into());
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![1, 2]);
    }

    #[test]
    fn test_pages_all_invalid_is_an_error() {
        let sel = SplitSelection::Pages("0, 99, nope".into());
        let result = sel.resolve(5, SelectorPolicy::Lenient);
        assert!(matches!(result, Err(PdfError::InvalidSelection(_))));
    }

    #[test]
    fn test_empty_selector_is_an_error() {
        let sel = SplitSelection::Pages("".into());
        assert!(sel.resolve(5, SelectorPolicy::Lenient).is_err());
    }

    #[test]
    fn test_ranges_expand_inclusive() {
        let sel = SplitSelection::Ranges("1-2,4".into());
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![1, 2, 4]);
    }

    #[test]
    fn test_ranges_preserve_duplicates_and_order() {
        let sel = SplitSelection::Ranges("2-4, 3, 1-2".into());
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![2, 3, 4, 3, 1, 2]);
    }

    #[test]
    fn test_ranges_clip_out_of_range_when_lenient() {
        let sel = SplitSelection::Ranges("4-9".into());
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![4, 5]);
    }

    #[test]
    fn test_ranges_huge_span_is_clipped_without_walking_it() {
        // A span reaching far past the document must clip to the page count,
        // not iterate billions of entries.
        let sel = SplitSelection::Ranges("1-4294967295".into());
        let start = std::time::Instant::now();
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![1, 2, 3, 4, 5]);
        assert!(start.elapsed() < std::time::Duration::from_millis(200));
    }

    #[test]
    fn test_ranges_huge_span_strict_fails_fast() {
        let sel = SplitSelection::Ranges("1-4294967295".into());
        let start = std::time::Instant::now();
        assert!(sel.resolve(5, SelectorPolicy::Strict).is_err());
        assert!(start.elapsed() < std::time::Duration::from_millis(200));
    }

    #[test]
    fn test_ranges_span_starting_at_zero_is_clipped() {
        let sel = SplitSelection::Ranges("0-2".into());
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![1, 2]);
        assert!(sel.resolve(5, SelectorPolicy::Strict).is_err());
    }

    #[test]
    fn test_ranges_reversed_span_strict_fails() {
        let sel = SplitSelection::Ranges("5-2".into());
        assert!(sel.resolve(5, SelectorPolicy::Strict).is_err());
    }

    #[test]
    fn test_ranges_page_zero_is_never_selected() {
        let sel = SplitSelection::Ranges("0, 1".into());
        let pages = sel.resolve(5, SelectorPolicy::Lenient).unwrap();
        assert_eq!(pages, vec![1]);
    }

    proptest! {
        #[test]
        fn resolved_pages_are_always_in_range(
            entries in proptest::collection::vec(1u32..200, 1..20),
            page_count in 1u32..50,
        ) {
            let input = entries
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let sel = SplitSelection::Pages(input);
            if let Ok(pages) = sel.resolve(page_count, SelectorPolicy::Lenient) {
                prop_assert!(pages.iter().all(|&p| p >= 1 && p <= page_count));
            }
        }

        #[test]
        fn lenient_keeps_in_range_entries_in_order(
            entries in proptest::collection::vec(1u32..30, 1..20),
        ) {
            let page_count = 10u32;
            let input = entries
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(",");
            let expected: Vec<u32> =
                entries.iter().copied().filter(|&p| p <= page_count).collect();
            let sel = SplitSelection::Pages(input);
            match sel.resolve(page_count, SelectorPolicy::Lenient) {
                Ok(pages) => prop_assert_eq!(pages, expected),
                Err(_) => prop_assert!(expected.is_empty()),
            }
        }
    }
}
