pub mod document_table;
pub mod overview;
pub mod transaction_form;
pub mod transaction_table;
