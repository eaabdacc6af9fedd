// BookEntity is the record held by store backends. Backends keep their own clone of
// every entity so callers never share state with the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct BookEntity {
    pub id: String,
    pub name: String,
    pub authors: Option<Vec<String>>,
    pub press: String,
}

impl BookEntity {
    pub fn new(id: &str, name: &str, authors: &[&str], press: &str) -> Self {
        BookEntity {
            id: id.to_string(),
            name: name.to_string(),
            authors: Some(authors.iter().map(|a| a.to_string()).collect()),
            press: press.to_string(),
        }
    }

    // an entity carrying only the id, used as the base of partial updates
    pub fn with_id(id: &str) -> Self {
        BookEntity {
            id: id.to_string(),
            ..Default::default()
        }
    }

    /// Returns a new entity built from `self` with every specified field of `patch`
    /// applied. Empty strings and absent authors count as unspecified, so a patch
    /// can never clear a field. The id of `self` is kept.
    pub fn merge(&self, patch: &BookEntity) -> BookEntity {
        let mut merged = self.clone();
        if !patch.name.is_empty() {
            merged.name = patch.name.clone();
        }
        if let Some(authors) = &patch.authors {
            merged.authors = Some(authors.clone());
        }
        if !patch.press.is_empty() {
            merged.press = patch.press.clone();
        }
        merged
    }
}
