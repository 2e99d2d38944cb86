pub mod admin;
pub mod cart;
pub mod collections;
pub mod events;
pub mod health;
pub mod products;
pub mod storefront;
