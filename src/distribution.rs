// 🎲 Draw Distributions - how many items to draw per tag
// Sentinel strings ("random", "others") are modeled as explicit variants

use serde::{Deserialize, Serialize};

// ============================================================================
// DRAW KEY
// ============================================================================

/// What a single distribution entry draws from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrawKey {
    /// Draw from one tag's index
    ByTag(String),

    /// Draw from the full set of entry names, ignoring tags
    AllRandom,

    /// Per draw: pick a tag at random from all tags except the listed
    /// ones, then draw one value from that tag
    OthersExcluding(Vec<String>),
}

impl DrawKey {
    pub fn by_tag(tag: impl Into<String>) -> Self {
        DrawKey::ByTag(tag.into())
    }
}

// ============================================================================
// DISTRIBUTION
// ============================================================================

/// Distribution - ordered (key, count) pairs controlling a round of draws
///
/// Order matters: draws happen in entry order, which keeps seeded output
/// reproducible and makes results group predictably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Distribution {
    entries: Vec<(DrawKey, usize)>,
}

/// Characteristic tags that get their own dedicated draw and are therefore
/// excluded from the "others" bucket
pub const DEDICATED_CHARACTERISTIC_TAGS: [&str; 3] = ["eye colour", "skin colour", "body type"];

impl Distribution {
    /// Create an empty distribution
    pub fn new() -> Self {
        Distribution { entries: Vec::new() }
    }

    /// Default trait distribution: one positive, one negative, one
    /// neutral, one fully random
    pub fn default_traits() -> Self {
        Distribution::new()
            .with_tag("positive", 1)
            .with_tag("negative", 1)
            .with_tag("neutral", 1)
            .with_random(1)
    }

    /// Default characteristic distribution: one each of the dedicated
    /// tags, plus three from the remaining tags
    pub fn default_characteristics() -> Self {
        Distribution::new()
            .with_tag("eye colour", 1)
            .with_tag("skin colour", 1)
            .with_tag("body type", 1)
            .with_others_excluding(&DEDICATED_CHARACTERISTIC_TAGS, 3)
    }

    /// Builder: draw `count` items from `tag`
    pub fn with_tag(mut self, tag: impl Into<String>, count: usize) -> Self {
        self.entries.push((DrawKey::by_tag(tag), count));
        self
    }

    /// Builder: draw `count` items from the full entry set
    pub fn with_random(mut self, count: usize) -> Self {
        self.entries.push((DrawKey::AllRandom, count));
        self
    }

    /// Builder: draw `count` items from randomly-picked tags outside
    /// `excluded`
    pub fn with_others_excluding(mut self, excluded: &[&str], count: usize) -> Self {
        let excluded = excluded.iter().map(|s| s.to_string()).collect();
        self.entries.push((DrawKey::OthersExcluding(excluded), count));
        self
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[(DrawKey, usize)] {
        &self.entries
    }

    /// Total number of items this distribution draws
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, count)| count).sum()
    }
}

impl Default for Distribution {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_traits_shape() {
        let dist = Distribution::default_traits();
        assert_eq!(dist.total(), 4);
        assert_eq!(dist.entries().len(), 4);
        assert_eq!(dist.entries()[0], (DrawKey::by_tag("positive"), 1));
        assert_eq!(dist.entries()[3], (DrawKey::AllRandom, 1));
    }

    #[test]
    fn test_default_characteristics_shape() {
        let dist = Distribution::default_characteristics();
        assert_eq!(dist.total(), 6);

        let (last_key, last_count) = &dist.entries()[3];
        assert_eq!(*last_count, 3);
        match last_key {
            DrawKey::OthersExcluding(excluded) => {
                assert_eq!(excluded, &["eye colour", "skin colour", "body type"]);
            }
            other => panic!("expected OthersExcluding, got {:?}", other),
        }
    }

    #[test]
    fn test_builder_preserves_order() {
        let dist = Distribution::new()
            .with_tag("neutral", 2)
            .with_random(1)
            .with_tag("positive", 1);

        let keys: Vec<&DrawKey> = dist.entries().iter().map(|(k, _)| k).collect();
        assert_eq!(
            keys,
            vec![
                &DrawKey::by_tag("neutral"),
                &DrawKey::AllRandom,
                &DrawKey::by_tag("positive"),
            ]
        );
        assert_eq!(dist.total(), 4);
    }

    #[test]
    fn test_zero_counts_allowed() {
        let dist = Distribution::new().with_tag("positive", 0);
        assert_eq!(dist.total(), 0);
    }
}
