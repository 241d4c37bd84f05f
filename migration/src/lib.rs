pub use sea_orm_migration::prelude::*;

mod m20260612_093011_create_users_table;
mod m20260612_093545_create_posts_table;
mod m20260612_094102_create_follows_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260612_093011_create_users_table::Migration),
            Box::new(m20260612_093545_create_posts_table::Migration),
            Box::new(m20260612_094102_create_follows_table::Migration),
        ]
    }
}
