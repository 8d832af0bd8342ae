pub mod combination;
pub mod repository;
