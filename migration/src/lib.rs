pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_artworks;
mod m20260301_000002_create_orders;
mod m20260301_000003_create_testimonials;
mod m20260301_000004_create_contact_requests;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_artworks::Migration),
            Box::new(m20260301_000002_create_orders::Migration),
            Box::new(m20260301_000003_create_testimonials::Migration),
            Box::new(m20260301_000004_create_contact_requests::Migration),
        ]
    }
}
