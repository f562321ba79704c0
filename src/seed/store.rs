use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use model::entities::{comment, consumer, consumer_product, product, ticket, ticket_comment, user};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, DbErr, Set};
use tracing::{debug, info, trace};

use crate::error::SeedError;

/// The data-store operations the seeding workflow performs.
///
/// Generators and the linker receive the store explicitly; the orchestrator
/// owns it for the duration of a run and closes it at the end.
#[async_trait]
pub trait SeedStore: Send + Sync {
    /// Destroys all existing data and recreates the schema.
    async fn reset(&self) -> Result<(), DbErr>;

    async fn insert_user(&self, user: user::ActiveModel) -> Result<i32, DbErr>;

    async fn insert_product(&self, product: product::ActiveModel) -> Result<i32, DbErr>;

    async fn insert_consumer(
        &self,
        consumer: consumer::ActiveModel,
    ) -> Result<i32, DbErr>;

    async fn insert_ticket(&self, ticket: ticket::ActiveModel) -> Result<i32, DbErr>;

    async fn insert_comment(&self, comment: comment::ActiveModel) -> Result<i32, DbErr>;

    /// Appends a product to the end of a consumer's product collection.
    async fn append_consumer_product(
        &self,
        consumer_id: i32,
        product_id: i32,
    ) -> Result<(), DbErr>;

    /// Appends a comment to the end of a ticket's comment collection.
    async fn append_ticket_comment(
        &self,
        ticket_id: i32,
        comment_id: i32,
    ) -> Result<(), DbErr>;

    /// Releases the underlying connection.
    async fn close(&self) -> Result<(), DbErr>;
}

/// [`SeedStore`] backed by a SeaORM connection.
#[derive(Clone, Debug)]
pub struct DbSeedStore {
    db: DatabaseConnection,
}

impl DbSeedStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a connection to `database_url`.
    pub async fn connect(database_url: &str) -> crate::error::Result<Self> {
        trace!("Attempting to connect to database");
        let db = Database::connect(database_url)
            .await
            .map_err(SeedError::Connection)?;
        info!("Successfully connected to database");
        Ok(Self::new(db))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl SeedStore for DbSeedStore {
    async fn reset(&self) -> Result<(), DbErr> {
        debug!("Dropping all tables and reapplying migrations");
        Migrator::fresh(&self.db).await
    }

    async fn insert_user(&self, user: user::ActiveModel) -> Result<i32, DbErr> {
        Ok(user.insert(&self.db).await?.id)
    }

    async fn insert_product(
        &self,
        product: product::ActiveModel,
    ) -> Result<i32, DbErr> {
        Ok(product.insert(&self.db).await?.id)
    }

    async fn insert_consumer(
        &self,
        consumer: consumer::ActiveModel,
    ) -> Result<i32, DbErr> {
        Ok(consumer.insert(&self.db).await?.id)
    }

    async fn insert_ticket(&self, ticket: ticket::ActiveModel) -> Result<i32, DbErr> {
        Ok(ticket.insert(&self.db).await?.id)
    }

    async fn insert_comment(
        &self,
        comment: comment::ActiveModel,
    ) -> Result<i32, DbErr> {
        Ok(comment.insert(&self.db).await?.id)
    }

    async fn append_consumer_product(
        &self,
        consumer_id: i32,
        product_id: i32,
    ) -> Result<(), DbErr> {
        consumer_product::ActiveModel {
            consumer_id: Set(consumer_id),
            product_id: Set(product_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(())
    }

    async fn append_ticket_comment(
        &self,
        ticket_id: i32,
        comment_id: i32,
    ) -> Result<(), DbErr> {
        ticket_comment::ActiveModel {
            ticket_id: Set(ticket_id),
            comment_id: Set(comment_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;
        Ok(())
    }

    async fn close(&self) -> Result<(), DbErr> {
        self.db.clone().close().await
    }
}
