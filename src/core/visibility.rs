use serde::{Deserialize, Serialize};

/// Labels containing one of these terms start visible.
pub const DEFAULT_PRIORITY_KEYWORDS: [&str; 3] = ["Engine Speed", "rpm", "Boost"];

/// Default-visibility rule: case-sensitive substring match against keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordVisibility {
    pub keywords: Vec<String>,
}

impl Default for KeywordVisibility {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY_KEYWORDS)
    }
}

impl KeywordVisibility {
    #[must_use]
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    #[must_use]
    pub fn is_visible(&self, label: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| label.contains(keyword.as_str()))
    }

    /// Boxes the rule as a plain predicate.
    #[must_use]
    pub fn into_predicate(self) -> Box<dyn Fn(&str) -> bool> {
        Box::new(move |label| self.is_visible(label))
    }
}

/// Case-insensitive label search with a trimmed needle.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LabelFilter {
    text: String,
    needle: String,
}

impl LabelFilter {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let needle = text.trim().to_lowercase();
        Self { text, needle }
    }

    /// Filter text exactly as entered.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.needle.is_empty()
    }

    #[must_use]
    pub fn matches(&self, label: &str) -> bool {
        !self.is_active() || label.to_lowercase().contains(&self.needle)
    }
}
