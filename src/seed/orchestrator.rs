use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info, instrument, trace, warn};

use super::generators::{
    create_comments, create_tickets, generate_consumers, generate_products, generate_users,
};
use super::linker::link_products_to_consumers;
use super::signup::SignupClient;
use super::store::SeedStore;
use crate::config::SeedCounts;
use crate::error::Result;

/// What a completed run wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub users: Vec<i32>,
    pub products: Vec<i32>,
    pub consumers: Vec<i32>,
    pub tickets: Vec<i32>,
    pub comments: Vec<i32>,
    /// Number of (product, consumer) links written.
    pub links: usize,
    /// Whether the demo account request reached the API.
    pub demo_account_created: bool,
}

/// Runs the seeding stages in order:
/// drop, users, products, consumers, link, tickets, comments, demo account.
///
/// Each stage starts only after the previous one fully succeeded. The store is
/// closed once the data stages are over, whatever their outcome.
pub struct Seeder<S> {
    store: S,
    signup: SignupClient,
    counts: SeedCounts,
    rng: StdRng,
}

impl<S: SeedStore> Seeder<S> {
    pub fn new(store: S, signup: SignupClient, counts: SeedCounts) -> Self {
        Self {
            store,
            signup,
            counts,
            rng: StdRng::from_entropy(),
        }
    }

    /// Replaces the random source, e.g. with a seeded one for reproducible data.
    #[cfg(test)]
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    /// Seeds the store and then creates the demo account.
    ///
    /// A failed data stage aborts the run and is returned as the error. A
    /// failed demo account request is only logged.
    #[instrument(skip(self), fields(counts = ?self.counts))]
    pub async fn run(mut self) -> Result<SeedReport> {
        let seeded = self.seed_data().await;

        trace!("Closing database connection");
        if let Err(err) = self.store.close().await {
            warn!(error = %err, "Failed to close database connection");
        }

        let mut report = match seeded {
            Ok(report) => report,
            Err(err) => {
                error!(error = %err, "Seeding failed");
                return Err(err);
            }
        };

        report.demo_account_created = match self.signup.create_demo_account().await {
            Ok(_) => {
                info!("Demo user created. All done.");
                true
            }
            Err(err) => {
                error!(error = %err, "Error creating demo user.");
                false
            }
        };

        Ok(report)
    }

    async fn seed_data(&mut self) -> Result<SeedReport> {
        let store = &self.store;
        let rng = &mut self.rng;
        let counts = self.counts;

        store.reset().await?;
        info!("db dropped");

        let users = generate_users(store, rng, counts.users).await?;
        info!("users created");

        let products = generate_products(store, rng, counts.products).await?;
        info!("products created");

        let consumers = generate_consumers(store, rng, counts.consumers).await?;
        info!("consumers created");

        let links = link_products_to_consumers(store, &products, &consumers).await?;
        info!("products added to consumers");

        let tickets =
            create_tickets(store, rng, &users, &products, &consumers, counts.tickets).await?;
        info!("tickets created");

        let comments = create_comments(store, rng, &users, &tickets, counts.comments).await?;
        info!("New data seeded in database.");

        Ok(SeedReport {
            users,
            products,
            consumers,
            tickets,
            comments,
            links,
            demo_account_created: false,
        })
    }
}
