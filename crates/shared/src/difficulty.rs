use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumString};

/// Perceived difficulty of a logged exercise.
#[derive(EnumString, Display, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Difficult,
}

/// Reads an optional difficulty where an empty string means none was picked.
pub fn optional_difficulty<'de, D>(deserializer: D) -> Result<Option<Difficulty>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => Difficulty::from_str(value)
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("unknown difficulty '{value}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Entry {
        #[serde(default, deserialize_with = "optional_difficulty")]
        difficulty: Option<Difficulty>,
    }

    fn entry(json: &str) -> Result<Option<Difficulty>, serde_json::Error> {
        serde_json::from_str::<Entry>(json).map(|e| e.difficulty)
    }

    #[test]
    fn test_difficulty_text() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::from_str("Difficult").ok(), Some(Difficulty::Difficult));
        assert!(Difficulty::from_str("Brutal").is_err());
    }

    #[test]
    fn test_empty_difficulty_is_absent() {
        assert_eq!(entry(r#"{"difficulty": ""}"#).unwrap(), None);
        assert_eq!(entry(r#"{"difficulty": null}"#).unwrap(), None);
        assert_eq!(entry("{}").unwrap(), None);
        assert_eq!(
            entry(r#"{"difficulty": "Easy"}"#).unwrap(),
            Some(Difficulty::Easy)
        );

        let err = entry(r#"{"difficulty": "Brutal"}"#).unwrap_err();
        assert!(err.to_string().contains("unknown difficulty 'Brutal'"));
    }
}
