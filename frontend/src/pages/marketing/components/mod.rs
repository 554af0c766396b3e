pub mod product_list;
pub mod suggestions;
