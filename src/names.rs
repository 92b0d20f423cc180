// 👤 Name Pool - first names filtered by year
// Loaded once from the year-stamped baby-name dataset

use anyhow::{bail, Context, Result};
use rand::Rng;
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// YEAR RANGE
// ============================================================================

/// Inclusive year range used to filter the name dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
}

impl YearRange {
    pub fn new(min: i32, max: i32) -> Self {
        YearRange { min, max }
    }

    /// Both boundary years are included
    pub fn contains(&self, year: i32) -> bool {
        self.min <= year && year <= self.max
    }
}

impl Default for YearRange {
    fn default() -> Self {
        YearRange { min: 1920, max: 2020 }
    }
}

// ============================================================================
// NAME POOL
// ============================================================================

/// NamePool - unique first names in first-seen order
///
/// Built from a `year,name,...` dataset; order is kept so that draws from
/// a seeded rng are reproducible across identically-loaded pools.
#[derive(Debug, Clone, Default)]
pub struct NamePool {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl NamePool {
    /// Create an empty pool
    pub fn new() -> Self {
        NamePool::default()
    }

    /// Load names from a csv file, keeping only years within `range`
    ///
    /// Format: header line, then `year,name,<2 more fields>` per record.
    /// Quote characters around the name are handled by the csv reader.
    /// A record with the wrong field count or a non-numeric year is a
    /// hard parse error.
    pub fn from_csv_file<P: AsRef<Path>>(path: P, range: YearRange) -> Result<Self> {
        let path = path.as_ref();
        let mut rdr = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open name file: {:?}", path))?;

        let mut pool = NamePool::new();

        for (line_no, record) in rdr.records().enumerate() {
            let record = record
                .with_context(|| format!("Failed to parse {:?} line {}", path, line_no + 2))?;

            if record.len() != 4 {
                bail!(
                    "Malformed name record in {:?} line {}: expected 4 fields, got {}",
                    path,
                    line_no + 2,
                    record.len()
                );
            }

            let year: i32 = record[0].parse().with_context(|| {
                format!("Invalid year {:?} in {:?} line {}", &record[0], path, line_no + 2)
            })?;
            let name = record[1].replace('"', "");

            if range.contains(year) {
                pool.add(name);
            }
        }

        Ok(pool)
    }

    /// Add a name; duplicates (case-sensitive) are ignored
    pub fn add(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.seen.insert(name.clone()) {
            self.names.push(name);
        }
    }

    /// Draw one name uniformly at random
    pub fn pick(&self, rng: &mut impl Rng) -> Result<&str> {
        if self.names.is_empty() {
            bail!("Name pool is empty - no names loaded within the year range");
        }
        let idx = rng.random_range(0..self.names.len());
        Ok(&self.names[idx])
    }

    /// All names in first-seen order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

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
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Write;

    fn write_names(lines: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "year,name,percent,sex").unwrap();
        for line in lines {
            writeln!(file, "{}", line).unwrap();
        }
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_year_range_inclusive_boundaries() {
        let range = YearRange::new(1980, 2000);
        assert!(range.contains(1980));
        assert!(range.contains(2000));
        assert!(!range.contains(1979));
        assert!(!range.contains(2001));
    }

    #[test]
    fn test_load_within_range() {
        let file = write_names(&["1990,\"Alex\",M,100"]);
        let pool = NamePool::from_csv_file(file.path(), YearRange::new(1980, 2000)).unwrap();
        assert_eq!(pool.names(), &["Alex"]);
    }

    #[test]
    fn test_load_outside_range_yields_empty_pool() {
        let file = write_names(&["1990,\"Alex\",M,100"]);
        let pool = NamePool::from_csv_file(file.path(), YearRange::new(2000, 2010)).unwrap();
        assert!(pool.is_empty());

        let mut rng = StdRng::seed_from_u64(7);
        assert!(pool.pick(&mut rng).is_err());
    }

    #[test]
    fn test_duplicate_name_kept_once() {
        let file = write_names(&["1950,\"Morgan\",F,80", "1995,\"Morgan\",F,120"]);
        let pool = NamePool::from_csv_file(file.path(), YearRange::default()).unwrap();
        assert_eq!(pool.names(), &["Morgan"]);
    }

    #[test]
    fn test_boundary_years_included() {
        let file = write_names(&[
            "1920,\"Edith\",F,50",
            "2020,\"Kai\",M,90",
            "1919,\"Mabel\",F,40",
            "2021,\"Nova\",F,60",
        ]);
        let pool = NamePool::from_csv_file(file.path(), YearRange::default()).unwrap();
        assert_eq!(pool.names(), &["Edith", "Kai"]);
    }

    #[test]
    fn test_malformed_record_is_error() {
        let file = write_names(&["1990,\"Alex\",M"]);
        let result = NamePool::from_csv_file(file.path(), YearRange::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_year_is_error() {
        let file = write_names(&["ninety,\"Alex\",M,100"]);
        let result = NamePool::from_csv_file(file.path(), YearRange::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_pick_returns_loaded_name() {
        let file = write_names(&["1990,\"Alex\",M,100", "1991,\"Sam\",F,90"]);
        let pool = NamePool::from_csv_file(file.path(), YearRange::default()).unwrap();

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let name = pool.pick(&mut rng).unwrap();
            assert!(name == "Alex" || name == "Sam");
        }
    }
}
