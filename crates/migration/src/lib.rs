//! `shopping` table fixture for database-backed tests.
//!
//! The service assumes the table exists; it never migrates at runtime.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_shopping;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_shopping::Migration)]
    }
}
