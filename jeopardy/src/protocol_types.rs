use serde::{Deserialize, Deserializer, Serialize};

/// Identifies a category on the remote trivia service.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub u64);

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the candidate pool, as listed by `GET categories?count=N`.
///
/// Only the id is needed to pick categories; the rest is informational.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: CategoryId,
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "clueCount")]
    pub clues_count: usize,
}

impl CategoryRef {
    pub fn new(id: CategoryId) -> Self {
        Self {
            id,
            title: String::new(),
            clues_count: 0,
        }
    }
}

/// The payload of `GET category?id=<id>`.
///
/// `title` and `clues` are optional here so that a response missing them can
/// be reported as malformed instead of as an opaque decoding error.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDetails {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub clues: Option<Vec<RawClue>>,
}

/// A clue as sent by the service. Any other fields are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawClue {
    #[serde(deserialize_with = "text_or_number")]
    pub question: String,
    #[serde(deserialize_with = "text_or_number")]
    pub answer: String,
}

// Some answers are plain numbers, e.g. `{"question": "2+2", "answer": 4}`.
fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match TextOrNumber::deserialize(deserializer)? {
        TextOrNumber::Text(text) => text,
        TextOrNumber::Integer(num) => num.to_string(),
        TextOrNumber::Float(num) => num.to_string(),
    })
}
