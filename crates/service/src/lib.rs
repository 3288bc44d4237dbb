//! Service layer for the shopping list.
//! - `ShoppingRepository` abstracts the store; SeaORM and in-memory implementations.
//! - `ShoppingService` holds the presence/trim rules and converts rows to `ShoppingItem`.

pub mod errors;
pub mod shopping;
#[cfg(test)]
pub mod test_support;

pub use shopping::{ShoppingItem, ShoppingService};
