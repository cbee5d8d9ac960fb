use serde::{Deserialize, Serialize};

/// Stored form of a news item. Records held by a store always carry a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsRecord {
    pub number: Option<i32>,
    pub title: String,
    pub author: String,
    pub text: String,
}

/// Wire form of a news item, used for request and response bodies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<i32>,
    pub title: String,
    pub author: String,
    pub text: String,
}

impl NewsRecord {
    pub fn new(title: &str, author: &str, text: &str) -> Self {
        Self {
            number: None,
            title: title.to_string(),
            author: author.to_string(),
            text: text.to_string(),
        }
    }

    pub fn with_number(mut self, number: i32) -> Self {
        self.number = Some(number);
        self
    }
}
