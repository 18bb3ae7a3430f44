use serde::Serialize;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A vault visible to the service account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vault {
    pub id: String,
    pub title: String,
}

impl Vault {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Lightweight item record returned by item listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemOverview {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub tags: Vec<String>,
}

impl ItemOverview {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            tags: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

/// A full item with its fields, fetched on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub fields: Vec<Field>,
}

impl Item {
    /// First field whose title matches `name`, ignoring case.
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| titles_match(&f.title, name))
    }
}

/// A named value on an item. Secret and plain values are treated alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Zeroize, ZeroizeOnDrop)]
pub struct Field {
    pub title: String,
    pub value: String,
}

impl Field {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Case-insensitive title comparison used for both items and fields.
///
/// Folds one character at a time, so the result does not depend on a
/// character's position in the word (a final `Σ` still equals `σ`).
pub fn titles_match(a: &str, b: &str) -> bool {
    a == b
        || a
            .chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}
