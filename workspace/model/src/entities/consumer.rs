use sea_orm::entity::prelude::*;

use super::{consumer_product, product, ticket};

/// An end customer who files tickets about the products they own.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "consumers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
    /// The consumer's ordered product collection.
    #[sea_orm(has_many = "super::consumer_product::Entity")]
    ConsumerProduct,
}

impl Related<ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ticket.def()
    }
}

impl Related<consumer_product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ConsumerProduct.def()
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef {
        consumer_product::Relation::Product.def()
    }
    fn via() -> Option<RelationDef> {
        Some(consumer_product::Relation::Consumer.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
