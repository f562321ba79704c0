use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create users table
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(pk_auto(Users::Id))
                    .col(string(Users::Username))
                    .col(string(Users::Password))
                    .col(string(Users::Fullname))
                    .to_owned(),
            )
            .await?;

        // Create products table
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_auto(Products::Id))
                    .col(string(Products::Name))
                    .to_owned(),
            )
            .await?;

        // Create consumers table
        manager
            .create_table(
                Table::create()
                    .table(Consumers::Table)
                    .if_not_exists()
                    .col(pk_auto(Consumers::Id))
                    .col(string(Consumers::Name))
                    .to_owned(),
            )
            .await?;

        // Create consumers_products table (ordered join table)
        manager
            .create_table(
                Table::create()
                    .table(ConsumersProducts::Table)
                    .if_not_exists()
                    .col(pk_auto(ConsumersProducts::Id))
                    .col(integer(ConsumersProducts::ConsumerId))
                    .col(integer(ConsumersProducts::ProductId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_consumers_products_consumer")
                            .from(ConsumersProducts::Table, ConsumersProducts::ConsumerId)
                            .to(Consumers::Table, Consumers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_consumers_products_product")
                            .from(ConsumersProducts::Table, ConsumersProducts::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_consumers_products_pair")
                    .table(ConsumersProducts::Table)
                    .col(ConsumersProducts::ConsumerId)
                    .col(ConsumersProducts::ProductId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Create tickets table
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(pk_auto(Tickets::Id))
                    .col(string(Tickets::Description))
                    .col(integer(Tickets::ProductId))
                    .col(integer(Tickets::ConsumerId))
                    .col(integer(Tickets::OwnerId))
                    .col(timestamp_with_time_zone(Tickets::Created))
                    .col(timestamp_with_time_zone_null(Tickets::Closed))
                    .col(integer(Tickets::Priority).check(Expr::col(Tickets::Priority).between(1, 5)))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_product")
                            .from(Tickets::Table, Tickets::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_consumer")
                            .from(Tickets::Table, Tickets::ConsumerId)
                            .to(Consumers::Table, Consumers::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_owner")
                            .from(Tickets::Table, Tickets::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create comments table
        manager
            .create_table(
                Table::create()
                    .table(Comments::Table)
                    .if_not_exists()
                    .col(pk_auto(Comments::Id))
                    .col(integer(Comments::OwnerId))
                    .col(timestamp_with_time_zone(Comments::Created))
                    .col(string(Comments::Description))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comments_owner")
                            .from(Comments::Table, Comments::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Create tickets_comments table (ordered join table)
        manager
            .create_table(
                Table::create()
                    .table(TicketsComments::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketsComments::Id))
                    .col(integer(TicketsComments::TicketId))
                    .col(integer(TicketsComments::CommentId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_comments_ticket")
                            .from(TicketsComments::Table, TicketsComments::TicketId)
                            .to(Tickets::Table, Tickets::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_comments_comment")
                            .from(TicketsComments::Table, TicketsComments::CommentId)
                            .to(Comments::Table, Comments::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order to avoid foreign key constraints
        manager
            .drop_table(Table::drop().table(TicketsComments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(ConsumersProducts::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Consumers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;

        Ok(())
    }
}

// Define identifiers for all tables

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
    Username,
    Password,
    Fullname,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum Consumers {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum ConsumersProducts {
    Table,
    Id,
    ConsumerId,
    ProductId,
}

#[derive(DeriveIden)]
enum Tickets {
    Table,
    Id,
    Description,
    ProductId,
    ConsumerId,
    OwnerId,
    Created,
    Closed,
    Priority,
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    OwnerId,
    Created,
    Description,
}

#[derive(DeriveIden)]
enum TicketsComments {
    Table,
    Id,
    TicketId,
    CommentId,
}
