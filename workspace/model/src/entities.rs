//! SeaORM entities for the helpdesk data store.
//! Reference collections (a consumer's products, a ticket's comments) are
//! stored as join tables whose auto-increment key keeps them ordered.

pub mod comment;
pub mod consumer;
pub mod consumer_product;
pub mod product;
pub mod ticket;
pub mod ticket_comment;
pub mod user;

pub mod prelude {
    //! A prelude module for easy importing of all entities.
    pub use super::comment::Entity as Comment;
    pub use super::consumer::Entity as Consumer;
    pub use super::consumer_product::Entity as ConsumerProduct;
    pub use super::product::Entity as Product;
    pub use super::ticket::Entity as Ticket;
    pub use super::ticket_comment::Entity as TicketComment;
    pub use super::user::Entity as User;
}
