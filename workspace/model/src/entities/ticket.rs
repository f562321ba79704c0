use sea_orm::entity::prelude::*;

use super::{comment, consumer, product, ticket_comment, user};

/// A support request raised by a consumer about one of their products.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub description: String,
    pub product_id: i32,
    pub consumer_id: i32,
    /// The agent handling the ticket.
    pub owner_id: i32,
    pub created: DateTimeUtc,
    /// Set once the ticket is resolved. Never earlier than `created`.
    pub closed: Option<DateTimeUtc>,
    /// 1 (lowest) to 5 (highest).
    pub priority: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "product::Entity",
        from = "Column::ProductId",
        to = "product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
    #[sea_orm(
        belongs_to = "consumer::Entity",
        from = "Column::ConsumerId",
        to = "consumer::Column::Id",
        on_delete = "Cascade"
    )]
    Consumer,
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::OwnerId",
        to = "user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    /// The ticket's ordered comment collection.
    #[sea_orm(has_many = "super::ticket_comment::Entity")]
    TicketComment,
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl Related<consumer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consumer.def()
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<ticket_comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TicketComment.def()
    }
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef {
        ticket_comment::Relation::Comment.def()
    }
    fn via() -> Option<RelationDef> {
        Some(ticket_comment::Relation::Ticket.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
