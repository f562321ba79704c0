use super::{consumer, product};
use sea_orm::entity::prelude::*;

/// One entry of a consumer's product collection.
/// The auto-increment `id` preserves the order entries were appended in.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "consumers_products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub consumer_id: i32,
    pub product_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "consumer::Entity",
        from = "Column::ConsumerId",
        to = "consumer::Column::Id",
        on_delete = "Cascade"
    )]
    Consumer,
    #[sea_orm(
        belongs_to = "product::Entity",
        from = "Column::ProductId",
        to = "product::Column::Id",
        on_delete = "Cascade"
    )]
    Product,
}

impl Related<consumer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Consumer.def()
    }
}

impl Related<product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
