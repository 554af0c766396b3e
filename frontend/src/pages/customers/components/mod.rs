pub mod customer_form;
pub mod customer_table;
pub mod group_form;
pub mod group_grid;
