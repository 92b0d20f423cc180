// 🎭 Bystander Archetypes - fixed catalog from Monster of the Week
// 9 built-in (type, motivation) pairs, chosen uniformly per character

use rand::Rng;
use serde::Serialize;

/// A bystander archetype: a type label plus the motivation that drives it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Archetype {
    pub label: &'static str,
    pub motivation: &'static str,
}

/// The built-in bystander catalog - immutable, always exactly these 9
pub const ARCHETYPES: [Archetype; 9] = [
    Archetype { label: "Busybody", motivation: "interfere in other people's plans" },
    Archetype { label: "Detective", motivation: "rule out explanations" },
    Archetype { label: "Gossip", motivation: "pass on rumours" },
    Archetype { label: "Helper", motivation: "join the hunt" },
    Archetype { label: "Innocent", motivation: "do the right thing" },
    Archetype { label: "Official", motivation: "be suspicious" },
    Archetype { label: "Skeptic", motivation: "deny supernatural explanations" },
    Archetype { label: "Victim", motivation: "put themselves in danger" },
    Archetype { label: "Witness", motivation: "reveal information" },
];

impl Archetype {
    /// Draw one archetype uniformly at random from the catalog
    pub fn pick(rng: &mut impl Rng) -> Archetype {
        ARCHETYPES[rng.random_range(0..ARCHETYPES.len())]
    }
}
