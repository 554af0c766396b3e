pub mod product_form;
pub mod product_table;
