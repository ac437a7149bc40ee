use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::games;

/// Opaque key naming one target asset. Doubles as the storage file stem and
/// the seed for the catalog search title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSlug(String);

impl GameSlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The title used to query the catalog. The override table wins;
    /// otherwise separators become spaces and each word is title-cased.
    /// The default transform is lossy for acronyms and numeric prefixes,
    /// which is exactly what the override table is for.
    pub fn search_title(&self) -> String {
        if let Some(title) = games::title_override(&self.0) {
            return title.to_string();
        }
        self.0
            .split(['-', '_'])
            .filter(|word| !word.is_empty())
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for GameSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GameSlug {
    type Err = FetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        let is_valid = !normalized.is_empty()
            && normalized
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_');
        if !is_valid {
            return Err(FetchError::InvalidSlug(value.to_string()));
        }
        Ok(Self(normalized))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Per-slug result of one orchestrator pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Retrieved,
    AlreadyPresent,
    Unresolved,
}
