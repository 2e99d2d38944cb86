pub mod cart;
pub mod catalog;
pub mod event;
pub mod product;
pub mod theme;
