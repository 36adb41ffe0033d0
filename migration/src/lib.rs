pub use sea_orm_migration::prelude::*;

mod m20240901_120000_create_cadets_tables;
mod m20240901_130000_create_users_tables;
mod m20240902_090000_create_achievements_tables;
mod m20240903_100000_create_news_tables;
mod m20240904_110000_create_tasks_tables;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_120000_create_cadets_tables::Migration),
            Box::new(m20240901_130000_create_users_tables::Migration),
            Box::new(m20240902_090000_create_achievements_tables::Migration),
            Box::new(m20240903_100000_create_news_tables::Migration),
            Box::new(m20240904_110000_create_tasks_tables::Migration),
        ]
    }
}
