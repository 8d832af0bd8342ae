pub mod page_object_gen;
pub mod source_builder;
pub mod suite_gen;
pub mod testdata_gen;
