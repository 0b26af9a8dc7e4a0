use serde::{Deserialize, Serialize};

/// Positive/negative value vocabulary.
///
/// Loaded once per run from a JSON document with two keys:
///
/// ```json
/// { "negative": ["отр.", "negative"], "positive": ["пол.", "positive"] }
/// ```
///
/// Membership checks are case-sensitive; the lists are small enough that a
/// linear scan is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    #[serde(default)]
    pub negative: Vec<String>,
    #[serde(default)]
    pub positive: Vec<String>,
}

impl Vocabulary {
    pub fn is_negative(&self, raw: &str) -> bool {
        self.negative.iter().any(|term| term == raw)
    }

    pub fn is_positive(&self, raw: &str) -> bool {
        self.positive.iter().any(|term| term == raw)
    }
}
