pub mod name_map;
pub mod operation_filter;
pub mod page_object;
pub mod suite;
