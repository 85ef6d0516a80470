//! Tag color palette and allocation.
//!
//! The palette is injected, immutable configuration: tests pass small
//! deterministic palettes, hosts usually use [`DEFAULT_PALETTE`].

use rand::Rng;

use crate::constants::DEFAULT_PALETTE;
use crate::model::Tag;

/// A fixed, ordered list of allowed tag colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(DEFAULT_PALETTE)
    }
}

impl Palette {
    /// Create a palette from a list of colors, kept in the given order.
    pub fn new(colors: &[&str]) -> Self {
        Self {
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }

    /// The palette entries in allocation order.
    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    /// Pick a color for a new tag.
    ///
    /// Returns the first palette entry not used by any existing tag
    /// (case-insensitive comparison). Once every entry is in use, returns a
    /// uniformly random entry; palette exhaustion is rare and a visual
    /// near-duplicate beats failing the add.
    pub fn next_color(&self, existing: &[Tag]) -> String {
        if self.colors.is_empty() {
            return String::new();
        }
        for color in &self.colors {
            let used = existing
                .iter()
                .any(|tag| tag.color.eq_ignore_ascii_case(color));
            if !used {
                return color.clone();
            }
        }
        let idx = rand::thread_rng().gen_range(0..self.colors.len());
        self.colors[idx].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(name: &str, color: &str) -> Tag {
        Tag::new(name, color)
    }

    #[test]
    fn test_next_color_skips_used_colors() {
        let palette = Palette::new(&["#111111", "#222222", "#333333"]);
        let tags = vec![tag("a", "#111111")];
        assert_eq!(palette.next_color(&tags), "#222222");
    }

    #[test]
    fn test_next_color_compares_case_insensitively() {
        let palette = Palette::new(&["#AABBCC", "#222222"]);
        let tags = vec![tag("a", "#aabbcc")];
        assert_eq!(palette.next_color(&tags), "#222222");
    }

    #[test]
    fn test_next_color_on_empty_collection_returns_first_entry() {
        let palette = Palette::default();
        assert_eq!(palette.next_color(&[]), DEFAULT_PALETTE[0]);
    }

    #[test]
    fn test_exhausted_palette_falls_back_to_some_member() {
        let palette = Palette::new(&["#111111", "#222222"]);
        let tags = vec![tag("a", "#111111"), tag("b", "#222222")];
        for _ in 0..16 {
            let color = palette.next_color(&tags);
            assert!(palette.colors().contains(&color));
        }
    }
}
