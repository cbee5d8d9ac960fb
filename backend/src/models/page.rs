use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub count_pages: i32,
    pub current_page: i32,
    pub max_page_size: i32,
    pub size: i32,
}
