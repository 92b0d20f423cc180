// Bystander Generator - Core Library
// Exposes all modules for use in CLI, web server, and tests

pub mod archetype;
pub mod catalog;
pub mod character;
pub mod distribution;
pub mod generator;
pub mod names;

// Re-export commonly used types
pub use archetype::{Archetype, ARCHETYPES};
pub use catalog::TaggedCatalog;
pub use character::Character;
pub use distribution::{Distribution, DrawKey, DEDICATED_CHARACTERISTIC_TAGS};
pub use generator::{BystanderGenerator, Characters};
pub use names::{NamePool, YearRange};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
