pub mod order_table;
