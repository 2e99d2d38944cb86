pub mod catalog;
pub mod factory;
pub mod repositories;
