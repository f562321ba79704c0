use sea_orm::entity::prelude::*;

use super::{ticket, ticket_comment, user};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub created: DateTimeUtc,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "user::Entity",
        from = "Column::OwnerId",
        to = "user::Column::Id",
        on_delete = "Cascade"
    )]
    Owner,
    #[sea_orm(has_one = "super::ticket_comment::Entity")]
    TicketComment,
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

impl Related<ticket::Entity> for Entity {
    fn to() -> RelationDef {
        ticket_comment::Relation::Ticket.def()
    }
    fn via() -> Option<RelationDef> {
        Some(ticket_comment::Relation::Comment.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
