pub mod initdb;
pub mod seed;

pub use initdb::init_database;
pub use seed::seed;
