//! The seeding workflow: wipe the helpdesk store, generate related demo
//! records, then register the demo account.

pub mod confirm;
pub mod generators;
pub mod linker;
pub mod orchestrator;
pub mod pools;
pub mod signup;
pub mod store;

pub use confirm::confirm;
pub use orchestrator::{SeedReport, Seeder};
pub use signup::SignupClient;
pub use store::{DbSeedStore, SeedStore};
