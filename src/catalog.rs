use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full set of course records, keyed by course name. The name is the
/// unit of uniqueness: renaming a course moves its record to a new key.
pub type Catalog = BTreeMap<String, Course>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub area: Area,
    pub link: String,
}

/// The five fixed subject areas a course is classified under. Persisted as
/// the lowercase labels users type in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "humanas")]
    Humanas,
    #[serde(rename = "matematica")]
    Matematica,
    #[serde(rename = "ciencias da natureza")]
    CienciasDaNatureza,
    #[serde(rename = "redacao")]
    Redacao,
    #[serde(rename = "linguagens")]
    Linguagens,
}

impl Area {
    /// Parse user input, case-insensitively and ignoring surrounding spaces.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "humanas" => Some(Self::Humanas),
            "matematica" => Some(Self::Matematica),
            "ciencias da natureza" => Some(Self::CienciasDaNatureza),
            "redacao" => Some(Self::Redacao),
            "linguagens" => Some(Self::Linguagens),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Humanas => "humanas",
            Self::Matematica => "matematica",
            Self::CienciasDaNatureza => "ciencias da natureza",
            Self::Redacao => "redacao",
            Self::Linguagens => "linguagens",
        }
    }

    /// Display label with the first letter capitalized.
    pub fn label(&self) -> String {
        let s = self.as_str();
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }
}

/// Which field of a course the edit form is changing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Nome,
    Link,
}

impl Field {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "nome" => Some(Self::Nome),
            "link" => Some(Self::Link),
            _ => None,
        }
    }
}

/// A course name must be non-empty after trimming.
pub fn normalize_name(input: &str) -> Option<String> {
    let name = input.trim();
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
