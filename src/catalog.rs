// 🏷️ Tagged Catalog - traits and physical characteristics
// Entries indexed by tag for weighted sampling

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

// ============================================================================
// TAGGED CATALOG
// ============================================================================

/// TaggedCatalog - insertion-ordered collection of named entries with tags
///
/// Backs both the trait list and the physical-characteristic list. Each
/// entry carries an accumulated tag list, and a reverse index maps every
/// tag to the entries that carry it. Entry order and tag order are both
/// first-seen order, so draws against a seeded rng are reproducible.
#[derive(Debug, Clone, Default)]
pub struct TaggedCatalog {
    /// Entry names in first-seen order
    names: Vec<String>,

    /// Entry name -> accumulated tags (duplicates kept, see `add`)
    tags_of: HashMap<String, Vec<String>>,

    /// Tag -> entry names carrying that tag, in insertion order
    index: HashMap<String, Vec<String>>,

    /// Tags in first-seen order
    tag_order: Vec<String>,
}

impl TaggedCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        TaggedCatalog::default()
    }

    /// Load a catalog from a delimited text file
    ///
    /// Format: `name,tag1,tag2,...` - one entry per line, no header.
    /// Trailing tags are optional; a bare name yields a tagless entry.
    pub fn from_csv_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(path)
            .with_context(|| format!("Failed to open catalog file: {:?}", path))?;

        let mut catalog = TaggedCatalog::new();

        for (line_no, record) in rdr.records().enumerate() {
            let record = record
                .with_context(|| format!("Failed to parse {:?} line {}", path, line_no + 1))?;

            let mut fields = record.iter();
            let name = match fields.next() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => continue, // blank line
            };
            let tags: Vec<String> = fields.map(|tag| tag.to_string()).collect();

            catalog.add(name, tags);
        }

        Ok(catalog)
    }

    /// Add or update an entry
    ///
    /// A new name is recorded with the given tags; an existing name gets
    /// the tags appended to its list. Tags are NOT deduplicated - adding
    /// the same name under the same tag twice doubles its weight in that
    /// tag's index.
    pub fn add(&mut self, name: impl Into<String>, tags: Vec<String>) {
        let name = name.into();

        match self.tags_of.get_mut(&name) {
            Some(existing) => existing.extend(tags.iter().cloned()),
            None => {
                self.names.push(name.clone());
                self.tags_of.insert(name.clone(), tags.clone());
            }
        }

        for tag in tags {
            match self.index.get_mut(&tag) {
                Some(entries) => entries.push(name.clone()),
                None => {
                    self.tag_order.push(tag.clone());
                    self.index.insert(tag, vec![name.clone()]);
                }
            }
        }
    }

    /// All entry names, in first-seen order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// All tags, in first-seen order
    pub fn tags(&self) -> &[String] {
        &self.tag_order
    }

    /// Entries carrying the given tag, in insertion order
    pub fn names_for(&self, tag: &str) -> Option<&[String]> {
        self.index.get(tag).map(|v| v.as_slice())
    }

    /// Accumulated tag list for an entry
    pub fn tags_of(&self, name: &str) -> Option<&[String]> {
        self.tags_of.get(name).map(|v| v.as_slice())
    }

    /// Check whether an entry exists
    pub fn contains(&self, name: &str) -> bool {
        self.tags_of.contains_key(name)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True when the catalog has no entries
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_add_new_entry() {
        let mut catalog = TaggedCatalog::new();
        catalog.add("Brave", tags(&["positive"]));

        assert!(catalog.contains("Brave"));
        assert_eq!(catalog.tags_of("Brave").unwrap(), &["positive"]);
        assert_eq!(catalog.names_for("positive").unwrap(), &["Brave"]);
    }

    #[test]
    fn test_add_existing_entry_appends_tags() {
        let mut catalog = TaggedCatalog::new();
        catalog.add("Stubborn", tags(&["negative"]));
        catalog.add("Stubborn", tags(&["neutral"]));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.tags_of("Stubborn").unwrap(), &["negative", "neutral"]);
        assert_eq!(catalog.names_for("negative").unwrap(), &["Stubborn"]);
        assert_eq!(catalog.names_for("neutral").unwrap(), &["Stubborn"]);
    }

    // Known quirk carried over from the product: re-adding a name under a
    // tag it already has doubles its weight in that tag's index.
    #[test]
    fn test_duplicate_tag_not_deduplicated() {
        let mut catalog = TaggedCatalog::new();
        catalog.add("Loud", tags(&["negative"]));
        catalog.add("Loud", tags(&["negative"]));

        assert_eq!(catalog.tags_of("Loud").unwrap(), &["negative", "negative"]);
        assert_eq!(catalog.names_for("negative").unwrap(), &["Loud", "Loud"]);
    }

    #[test]
    fn test_tagless_entry() {
        let mut catalog = TaggedCatalog::new();
        catalog.add("Plain", vec![]);

        assert!(catalog.contains("Plain"));
        assert_eq!(catalog.tags_of("Plain").unwrap(), &[] as &[String]);
        assert!(catalog.tags().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut catalog = TaggedCatalog::new();
        catalog.add("Brave", tags(&["positive"]));
        catalog.add("Cowardly", tags(&["negative"]));
        catalog.add("Curious", tags(&["neutral", "positive"]));

        assert_eq!(catalog.names(), &["Brave", "Cowardly", "Curious"]);
        assert_eq!(catalog.tags(), &["positive", "negative", "neutral"]);
        assert_eq!(catalog.names_for("positive").unwrap(), &["Brave", "Curious"]);
    }

    #[test]
    fn test_from_csv_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Brave,positive").unwrap();
        writeln!(file, "Cowardly,negative").unwrap();
        writeln!(file, "Curious,neutral").unwrap();
        writeln!(file, "Quiet").unwrap();
        file.flush().unwrap();

        let catalog = TaggedCatalog::from_csv_file(file.path()).unwrap();

        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.names_for("positive").unwrap(), &["Brave"]);
        assert_eq!(catalog.tags_of("Quiet").unwrap(), &[] as &[String]);
    }

    #[test]
    fn test_from_csv_file_missing() {
        let result = TaggedCatalog::from_csv_file("/nonexistent/traits.csv");
        assert!(result.is_err());
    }
}
