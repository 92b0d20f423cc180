// 📇 Character Record - the generated bystander
// Consumed as-is by the CLI and the web presentation layer

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A generated bystander
///
/// `characteristics` maps a tag (e.g. "eye colour") to the drawn values
/// joined with ", " in draw order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub name: String,

    /// Archetype label ("Gossip", "Witness", ...)
    #[serde(rename = "type")]
    pub archetype: String,

    pub motivation: String,

    /// Drawn trait names, in draw order (duplicates possible)
    pub traits: Vec<String>,

    pub characteristics: BTreeMap<String, String>,
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} the {}", self.name, self.archetype)?;
        writeln!(f, "  motivation: {}", self.motivation)?;
        writeln!(f, "  traits: {}", self.traits.join(", "))?;
        for (tag, values) in &self.characteristics {
            writeln!(f, "  {}: {}", tag, values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Character {
        let mut characteristics = BTreeMap::new();
        characteristics.insert("eye colour".to_string(), "green".to_string());
        characteristics.insert("scars".to_string(), "left cheek, brow".to_string());

        Character {
            name: "Alex".to_string(),
            archetype: "Witness".to_string(),
            motivation: "reveal information".to_string(),
            traits: vec!["Brave".to_string(), "Curious".to_string()],
            characteristics,
        }
    }

    #[test]
    fn test_serializes_archetype_as_type() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["type"], "Witness");
        assert_eq!(json["motivation"], "reveal information");
        assert!(json.get("archetype").is_none());
    }

    #[test]
    fn test_json_round_trip() {
        let character = sample();
        let json = serde_json::to_string(&character).unwrap();
        let back: Character = serde_json::from_str(&json).unwrap();
        assert_eq!(back, character);
    }

    #[test]
    fn test_display_includes_fields() {
        let text = sample().to_string();
        assert!(text.contains("Alex the Witness"));
        assert!(text.contains("traits: Brave, Curious"));
        assert!(text.contains("eye colour: green"));
    }
}
