pub mod screen_def;
pub mod sequence_builder;
pub mod source_model;
