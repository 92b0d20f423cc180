// 🎲 Bystander Generator - the one real component
// Draws names, traits, and characteristics from the loaded catalogs

use anyhow::{bail, Result};
use rand::Rng;
use std::collections::BTreeMap;
use std::path::Path;

use crate::archetype::Archetype;
use crate::catalog::TaggedCatalog;
use crate::character::Character;
use crate::distribution::{Distribution, DrawKey};
use crate::names::{NamePool, YearRange};

// ============================================================================
// GENERATOR
// ============================================================================

/// BystanderGenerator - samples random bystanders from tagged catalogs
///
/// Constructed once at startup; every generation call is a pure read over
/// the loaded state, parameterized by an explicit rng so that seeded runs
/// are reproducible and concurrent callers only have to share the rng.
#[derive(Debug, Clone, Default)]
pub struct BystanderGenerator {
    traits: TaggedCatalog,
    characteristics: TaggedCatalog,
    names: NamePool,
}

impl BystanderGenerator {
    /// Create a generator with empty catalogs
    pub fn new() -> Self {
        BystanderGenerator::default()
    }

    /// Load a generator from the three data sources
    ///
    /// Any omitted source leaves that category empty. Names are filtered
    /// to the default year range (1920-2020 inclusive).
    pub fn from_files(
        traits_csv: Option<&Path>,
        first_names_csv: Option<&Path>,
        characteristics_csv: Option<&Path>,
    ) -> Result<Self> {
        Self::from_files_with_year_range(
            traits_csv,
            first_names_csv,
            characteristics_csv,
            YearRange::default(),
        )
    }

    /// Load a generator, filtering names to an explicit year range
    pub fn from_files_with_year_range(
        traits_csv: Option<&Path>,
        first_names_csv: Option<&Path>,
        characteristics_csv: Option<&Path>,
        year_range: YearRange,
    ) -> Result<Self> {
        let traits = match traits_csv {
            Some(path) => TaggedCatalog::from_csv_file(path)?,
            None => TaggedCatalog::new(),
        };
        let names = match first_names_csv {
            Some(path) => NamePool::from_csv_file(path, year_range)?,
            None => NamePool::new(),
        };
        let characteristics = match characteristics_csv {
            Some(path) => TaggedCatalog::from_csv_file(path)?,
            None => TaggedCatalog::new(),
        };

        Ok(BystanderGenerator { traits, characteristics, names })
    }

    /// Add or update a trait
    pub fn add_trait(&mut self, name: impl Into<String>, tags: Vec<String>) {
        self.traits.add(name, tags);
    }

    /// Add or update a physical characteristic
    pub fn add_characteristic(&mut self, name: impl Into<String>, tags: Vec<String>) {
        self.characteristics.add(name, tags);
    }

    /// Add a first name directly (bypasses the year filter)
    pub fn add_name(&mut self, name: impl Into<String>) {
        self.names.add(name);
    }

    /// The trait catalog
    pub fn traits(&self) -> &TaggedCatalog {
        &self.traits
    }

    /// The characteristic catalog
    pub fn characteristics(&self) -> &TaggedCatalog {
        &self.characteristics
    }

    /// The name pool
    pub fn names(&self) -> &NamePool {
        &self.names
    }

    // ========================================================================
    // DRAWS
    // ========================================================================

    /// Draw trait names according to a distribution
    ///
    /// Output length equals `distribution.total()`; draws are with
    /// replacement, so duplicates are possible. A `ByTag` entry whose tag
    /// has no index is an error, even at count 0.
    pub fn get_traits(
        &self,
        rng: &mut impl Rng,
        distribution: &Distribution,
    ) -> Result<Vec<String>> {
        let mut drawn = Vec::with_capacity(distribution.total());

        for (key, count) in distribution.entries() {
            match key {
                DrawKey::ByTag(tag) => {
                    let Some(pool) = self.traits.names_for(tag) else {
                        bail!("No traits tagged '{}'", tag);
                    };
                    for _ in 0..*count {
                        drawn.push(choose(rng, pool, "traits")?.to_string());
                    }
                }
                DrawKey::AllRandom => {
                    for _ in 0..*count {
                        drawn.push(choose(rng, self.traits.names(), "traits")?.to_string());
                    }
                }
                DrawKey::OthersExcluding(_) => {
                    bail!("'others' draws are not supported for traits");
                }
            }
        }

        Ok(drawn)
    }

    /// Draw characteristics according to a distribution
    ///
    /// Returns tag -> drawn values joined with ", " in draw order. An
    /// `OthersExcluding` entry picks a fresh tag per draw from the
    /// non-excluded tags, so its output keys vary between calls.
    pub fn get_characteristics(
        &self,
        rng: &mut impl Rng,
        distribution: &Distribution,
    ) -> Result<BTreeMap<String, String>> {
        // (value, tag) pairs in draw order
        let mut recorded: Vec<(String, String)> = Vec::with_capacity(distribution.total());

        for (key, count) in distribution.entries() {
            match key {
                DrawKey::ByTag(tag) => {
                    let Some(pool) = self.characteristics.names_for(tag) else {
                        bail!("No characteristics tagged '{}'", tag);
                    };
                    for _ in 0..*count {
                        let value = choose(rng, pool, "characteristics")?;
                        recorded.push((value.to_string(), tag.clone()));
                    }
                }
                DrawKey::OthersExcluding(excluded) => {
                    let others: Vec<&String> = self
                        .characteristics
                        .tags()
                        .iter()
                        .filter(|tag| !excluded.contains(*tag))
                        .collect();

                    for _ in 0..*count {
                        if others.is_empty() {
                            bail!("No characteristic tags outside {:?}", excluded);
                        }
                        let tag = others[rng.random_range(0..others.len())];
                        let pool = self
                            .characteristics
                            .names_for(tag)
                            .expect("indexed tag has entries");
                        let value = choose(rng, pool, "characteristics")?;
                        recorded.push((value.to_string(), tag.clone()));
                    }
                }
                DrawKey::AllRandom => {
                    bail!("Fully random draws are not supported for characteristics");
                }
            }
        }

        // Group by tag, preserving draw order within each tag
        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (value, tag) in recorded {
            grouped.entry(tag).or_default().push(value);
        }

        Ok(grouped
            .into_iter()
            .map(|(tag, values)| (tag, values.join(", ")))
            .collect())
    }

    /// Build one random bystander
    ///
    /// `None` distributions fall back to the defaults. Fails when the name
    /// pool is empty or a requested tag is missing from its index.
    pub fn build_character(
        &self,
        rng: &mut impl Rng,
        trait_distribution: Option<&Distribution>,
        characteristic_distribution: Option<&Distribution>,
    ) -> Result<Character> {
        let default_traits = Distribution::default_traits();
        let default_characteristics = Distribution::default_characteristics();

        let archetype = Archetype::pick(rng);
        let name = self.names.pick(rng)?.to_string();
        let traits = self.get_traits(rng, trait_distribution.unwrap_or(&default_traits))?;
        let characteristics = self.get_characteristics(
            rng,
            characteristic_distribution.unwrap_or(&default_characteristics),
        )?;

        Ok(Character {
            name,
            archetype: archetype.label.to_string(),
            motivation: archetype.motivation.to_string(),
            traits,
            characteristics,
        })
    }

    /// Endless stream of bystanders with default distributions
    ///
    /// The iterator never yields `None`; take as many as needed.
    pub fn iter_with<R: Rng>(&self, rng: R) -> Characters<'_, R> {
        Characters { generator: self, rng }
    }
}

/// Uniform draw with replacement from a slice
fn choose<'a>(rng: &mut impl Rng, pool: &'a [String], what: &str) -> Result<&'a str> {
    if pool.is_empty() {
        bail!("Cannot draw from empty {} pool", what);
    }
    Ok(&pool[rng.random_range(0..pool.len())])
}

// ============================================================================
// INFINITE SEQUENCE VIEW
// ============================================================================

/// Infinite iterator of independently generated characters
pub struct Characters<'a, R: Rng> {
    generator: &'a BystanderGenerator,
    rng: R,
}

impl<R: Rng> Iterator for Characters<'_, R> {
    type Item = Result<Character>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generator.build_character(&mut self.rng, None, None))
    }
}

// ============================================================================
// TESTS
// ============================================================================
