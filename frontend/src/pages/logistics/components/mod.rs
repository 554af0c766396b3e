pub mod delivery_list;
pub mod overview;
pub mod truck_form;
pub mod truck_table;
