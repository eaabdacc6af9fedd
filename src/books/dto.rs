use serde::{Deserialize, Serialize};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct BookDto {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub authors: Option<Vec<String>>,
    #[serde(default)]
    pub press: String,
}

impl BookDto {
    pub fn new(id: &str, name: &str, authors: &[&str], press: &str) -> BookDto {
        BookDto {
            id: id.to_string(),
            name: name.to_string(),
            authors: Some(authors.iter().map(|a| a.to_string()).collect()),
            press: press.to_string(),
        }
    }
}
