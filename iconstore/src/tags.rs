use std::collections::HashSet;

/// Turns the catalog's raw comma-delimited tag string into a clean tag
/// list, optionally folding the entry's category in as one more tag.
///
/// Pieces are trimmed, empties dropped, and duplicates removed while
/// keeping first-occurrence order. Matching is exact and
/// case-sensitive. The category, when present, is appended after the
/// split tags.
pub fn normalize_tags(raw_tags: &str, category: Option<&str>) -> Vec<String> {
    let mut tags: Vec<String> = raw_tags
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(category) = category {
        let category = category.trim();
        if !category.is_empty() {
            tags.push(category.to_string());
        }
    }

    let mut seen = HashSet::new();
    tags.retain(|tag| seen.insert(tag.clone()));
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_drops_empty_pieces() {
        assert_eq!(
            normalize_tags(" parenthesis ,  bracket ,, ", None),
            vec!["parenthesis", "bracket"]
        );
    }

    #[test]
    fn category_is_appended_after_split_tags() {
        assert_eq!(
            normalize_tags("direction, arrow", Some("navigation")),
            vec!["direction", "arrow", "navigation"]
        );
    }

    #[test]
    fn dedup_preserves_first_occurrence_order() {
        assert_eq!(normalize_tags("b, a, b", Some("a")), vec!["b", "a"]);
    }

    #[test]
    fn dedup_is_case_sensitive() {
        assert_eq!(
            normalize_tags("Arrow, arrow", None),
            vec!["Arrow", "arrow"]
        );
    }

    #[test]
    fn category_alone_yields_single_tag() {
        assert_eq!(normalize_tags("", Some("Shapes")), vec!["Shapes"]);
    }

    #[test]
    fn blank_category_is_ignored() {
        assert_eq!(normalize_tags("arrow", Some("  ")), vec!["arrow"]);
    }

    #[test]
    fn both_empty_yields_empty_list() {
        assert!(normalize_tags("", None).is_empty());
    }
}
