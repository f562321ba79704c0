use std::future::Future;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, error, info, trace};

use crate::config::{SeedConfig, SeedCounts};
use crate::error;
use crate::seed::{DbSeedStore, SeedReport, SeedStore, Seeder, SignupClient, confirm};

/// How an interactive seeding run ended.
#[derive(Debug)]
pub enum SeedOutcome {
    /// The operator did not confirm; nothing was touched.
    Declined,
    Seeded(SeedReport),
}

/// Entry point of the `seed` command.
///
/// Exit status is 0 when seeding succeeded or the operator declined, and 1
/// when connecting or any data stage failed.
pub async fn seed(config: &SeedConfig) -> Result<ExitCode> {
    trace!("Entering seed function");
    debug!("Database URL: {}", config.database_url);
    debug!("API URL: {}", config.api_url);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let outcome = seed_interactive(
        stdin.lock(),
        &mut stdout,
        DbSeedStore::connect(&config.database_url),
        SignupClient::new(config.api_url.as_str()),
        config.counts,
    )
    .await;

    Ok(match outcome {
        Ok(SeedOutcome::Declined) => ExitCode::SUCCESS,
        Ok(SeedOutcome::Seeded(report)) => {
            info!(
                users = report.users.len(),
                products = report.products.len(),
                consumers = report.consumers.len(),
                tickets = report.tickets.len(),
                comments = report.comments.len(),
                demo_account = report.demo_account_created,
                "Seeding finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeding aborted: {}", e);
            ExitCode::FAILURE
        }
    })
}

/// Asks for confirmation on `input`, then seeds the store produced by `connect`.
///
/// `connect` is only awaited after the operator confirmed, so a declined run
/// never opens a connection.
pub async fn seed_interactive<R, W, S, C>(
    input: R,
    output: &mut W,
    connect: C,
    signup: SignupClient,
    counts: SeedCounts,
) -> error::Result<SeedOutcome>
where
    R: BufRead,
    W: Write,
    S: SeedStore,
    C: Future<Output = error::Result<S>>,
{
    if !confirm(input, output)? {
        writeln!(output, "Aborting.")?;
        return Ok(SeedOutcome::Declined);
    }

    let store = connect.await?;
    let report = Seeder::new(store, signup, counts).run().await?;
    Ok(SeedOutcome::Seeded(report))
}
