//! Search filtering over the tag list.

use crate::model::Tag;

/// Filter tags to those whose name contains `query`, case-insensitively.
/// An empty query returns every tag; original order is preserved either way.
pub fn visible(tags: &[Tag], query: &str) -> Vec<Tag> {
    if query.is_empty() {
        return tags.to_vec();
    }
    let needle = query.to_lowercase();
    tags.iter()
        .filter(|tag| tag.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<Tag> {
        names.iter().map(|n| Tag::new(n, "#CC543A")).collect()
    }

    #[test]
    fn test_empty_query_returns_all_in_order() {
        let all = tags(&["Car", "Person", "Bicycle"]);
        let result = visible(&all, "");
        assert_eq!(result, all);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let all = tags(&["Car", "Person", "Bicycle", "Cargo ship"]);
        let result = visible(&all, "car");
        let names: Vec<_> = result.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Car", "Cargo ship"]);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let all = tags(&["Car", "Person"]);
        assert!(visible(&all, "zebra").is_empty());
    }
}
