//! Generic in-memory entity store shared by every panel that edits a list.
//!
//! A panel instantiates [`CrudStore`] once per entity type. The store keeps
//! the list, a draft for the modal form, the search term and the panel state
//! machine. Drafts are edited through typed field paths ([`Assign`]) that
//! delegate into nested records.

mod collection;
mod entity;
mod field;
mod store;

pub use collection::Collection;
pub use entity::{Entity, Identity};
pub(crate) use field::leaf_fields;
pub use field::{parse_nested, split_path, Assign, FieldError, FieldPath, FieldValue};
pub use store::{CrudStore, ModalMode, PanelState};
