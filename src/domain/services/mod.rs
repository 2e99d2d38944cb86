pub mod admin_auth;
pub mod catalog;
pub mod checkout;
pub mod discount;
pub mod engine;
pub mod resolver;
pub mod theme;
pub mod validation;
