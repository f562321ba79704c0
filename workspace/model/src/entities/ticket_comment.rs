use super::{comment, ticket};
use sea_orm::entity::prelude::*;

/// One entry of a ticket's comment collection.
/// A comment is attached to at most one ticket (`comment_id` is unique).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "tickets_comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub ticket_id: i32,
    #[sea_orm(unique)]
    pub comment_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "ticket::Entity",
        from = "Column::TicketId",
        to = "ticket::Column::Id",
        on_delete = "Cascade"
    )]
    Ticket,
    #[sea_orm(
        belongs_to = "comment::Entity",
        from = "Column::CommentId",
        to = "comment::Column::Id",
        on_delete = "Cascade"
    )]
    Comment,
}

impl Related<ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<comment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
