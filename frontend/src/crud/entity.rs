use super::field::{Assign, FieldError, FieldValue};
use crate::utils::{id::next_id, time::today_string};

/// Identity handed to a record when it is first created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    /// Creation date, `YYYY-MM-DD`.
    pub created_on: String,
}

impl Identity {
    pub fn new(id: impl Into<String>, created_on: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_on: created_on.into(),
        }
    }

    pub fn fresh() -> Self {
        Self::new(next_id(), today_string())
    }
}

/// A record kept in a [`Collection`](super::Collection) and edited through a
/// draft. `Default` is the blank draft shown by the create form.
pub trait Entity: Assign + Clone + Default + PartialEq + 'static {
    /// Used in log lines.
    const KIND: &'static str;

    fn id(&self) -> &str;

    /// Writes id and creation stamp into a newly created record.
    fn stamp(&mut self, identity: &Identity);

    /// Carries id and creation stamp over from the stored record when an
    /// edit replaces it.
    fn keep_identity(&mut self, stored: &Self);

    /// Fills fields that fall back to today when left blank. Runs on every
    /// submit, create or edit.
    fn fill_blanks(&mut self, _today: &str) {}

    /// Text the search box is matched against.
    fn search_text(&self) -> Vec<String>;

    fn matches(&self, term: &str) -> bool {
        let needle = term.to_lowercase();
        needle.is_empty()
            || self
                .search_text()
                .iter()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
    }

    /// Returns a copy of the record with one leaf replaced.
    fn with_field(&self, field: &Self::Field, value: FieldValue) -> Result<Self, FieldError> {
        let mut next = self.clone();
        next.assign(field, value)?;
        Ok(next)
    }

    fn with_path(&self, path: &str, value: FieldValue) -> Result<Self, FieldError> {
        let field = path.parse::<Self::Field>()?;
        self.with_field(&field, value)
    }
}
