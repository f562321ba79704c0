use sea_orm::entity::prelude::*;

use super::{consumer, consumer_product, ticket};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::ticket::Entity")]
    Ticket,
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

// Consumers that own this product, through the consumers_products join table.
impl Related<consumer::Entity> for Entity {
    fn to() -> RelationDef {
        consumer_product::Relation::Consumer.def()
    }
    fn via() -> Option<RelationDef> {
        Some(consumer_product::Relation::Product.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
