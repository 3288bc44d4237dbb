//! Shopping list: domain, repository and service layers.

pub mod domain;
pub mod repo;
pub mod repository;
pub mod service;

pub use domain::ShoppingItem;
pub use repository::ShoppingRepository;
pub use service::ShoppingService;
