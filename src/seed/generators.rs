use chrono::{DateTime, Duration, Utc};
use fake::Fake;
use fake::faker::name::en::{FirstName, Name};
use futures::future::try_join_all;
use model::entities::{comment, consumer, product, ticket, user};
use rand::Rng;
use rand::seq::SliceRandom;
use sea_orm::Set;
use tracing::{debug, instrument};

use super::pools::{COMMENTS, DESCRIPTIONS, pick_random, product_name};
use super::store::SeedStore;
use crate::error::{Result, SeedError};

/// Password given to every generated user.
pub const PLACEHOLDER_PASSWORD: &str = "test";

/// How far in the past generated tickets are opened, in seconds.
const TICKET_AGE_SECS: i64 = 100;

/// Picks one id from a pool of already persisted records.
fn pick_id<R: Rng>(rng: &mut R, pool: &[i32], name: &'static str) -> Result<i32> {
    pool.choose(rng).copied().ok_or(SeedError::EmptyPool(name))
}

/// Inserts `count` users concurrently and returns their ids.
#[instrument(skip(store, rng))]
pub async fn generate_users<S, R>(store: &S, rng: &mut R, count: usize) -> Result<Vec<i32>>
where
    S: SeedStore + ?Sized,
    R: Rng,
{
    let users: Vec<user::ActiveModel> = (0..count)
        .map(|_| user::ActiveModel {
            username: Set(FirstName().fake_with_rng(rng)),
            password: Set(PLACEHOLDER_PASSWORD.to_string()),
            fullname: Set(Name().fake_with_rng(rng)),
            ..Default::default()
        })
        .collect();

    let ids = try_join_all(users.into_iter().map(|user| store.insert_user(user))).await?;
    debug!(count = ids.len(), "Inserted users");
    Ok(ids)
}

/// Inserts `count` products concurrently and returns their ids.
#[instrument(skip(store, rng))]
pub async fn generate_products<S, R>(store: &S, rng: &mut R, count: usize) -> Result<Vec<i32>>
where
    S: SeedStore + ?Sized,
    R: Rng,
{
    let products: Vec<product::ActiveModel> = (0..count)
        .map(|_| product::ActiveModel {
            name: Set(product_name(rng)),
            ..Default::default()
        })
        .collect();

    let ids =
        try_join_all(products.into_iter().map(|product| store.insert_product(product))).await?;
    debug!(count = ids.len(), "Inserted products");
    Ok(ids)
}

/// Inserts `count` consumers with empty product collections and returns their ids.
#[instrument(skip(store, rng))]
pub async fn generate_consumers<S, R>(store: &S, rng: &mut R, count: usize) -> Result<Vec<i32>>
where
    S: SeedStore + ?Sized,
    R: Rng,
{
    let consumers: Vec<consumer::ActiveModel> = (0..count)
        .map(|_| consumer::ActiveModel {
            name: Set(Name().fake_with_rng(rng)),
            ..Default::default()
        })
        .collect();

    let ids =
        try_join_all(consumers.into_iter().map(|consumer| store.insert_consumer(consumer))).await?;
    debug!(count = ids.len(), "Inserted consumers");
    Ok(ids)
}

/// Builds an unsaved ticket with a random description and priority.
///
/// The ticket is opened a little before `now` and, half of the time, already
/// closed at `now`.
pub fn draft_ticket<R: Rng>(
    rng: &mut R,
    owner: i32,
    consumer: i32,
    product: i32,
    now: DateTime<Utc>,
) -> ticket::ActiveModel {
    ticket::ActiveModel {
        description: Set(pick_random(rng, DESCRIPTIONS).to_string()),
        product_id: Set(product),
        consumer_id: Set(consumer),
        owner_id: Set(owner),
        created: Set(now - Duration::seconds(TICKET_AGE_SECS)),
        closed: Set(rng.gen_bool(0.5).then_some(now)),
        priority: Set(rng.gen_range(1..=5)),
        ..Default::default()
    }
}

/// Persists a single ticket.
pub async fn generate_ticket<S: SeedStore + ?Sized>(
    store: &S,
    ticket: ticket::ActiveModel,
) -> Result<i32> {
    Ok(store.insert_ticket(ticket).await?)
}

/// Inserts `count` tickets, each referencing a random user, product and
/// consumer from the given pools.
#[instrument(skip(store, rng, users, products, consumers))]
pub async fn create_tickets<S, R>(
    store: &S,
    rng: &mut R,
    users: &[i32],
    products: &[i32],
    consumers: &[i32],
    count: usize,
) -> Result<Vec<i32>>
where
    S: SeedStore + ?Sized,
    R: Rng,
{
    let now = Utc::now();
    let tickets = (0..count)
        .map(|_| -> Result<ticket::ActiveModel> {
            let owner = pick_id(rng, users, "user")?;
            let product = pick_id(rng, products, "product")?;
            let consumer = pick_id(rng, consumers, "consumer")?;
            Ok(draft_ticket(rng, owner, consumer, product, now))
        })
        .collect::<Result<Vec<_>>>()?;

    let ids = try_join_all(tickets.into_iter().map(|ticket| generate_ticket(store, ticket))).await?;
    debug!(count = ids.len(), "Inserted tickets");
    Ok(ids)
}

/// Builds an unsaved comment with a random canned reply.
pub fn draft_comment<R: Rng>(
    rng: &mut R,
    owner: i32,
    now: DateTime<Utc>,
) -> comment::ActiveModel {
    comment::ActiveModel {
        owner_id: Set(owner),
        created: Set(now),
        description: Set(pick_random(rng, COMMENTS).to_string()),
        ..Default::default()
    }
}

/// Persists a single comment and appends it to `ticket_id`'s comment collection.
///
/// Resolves only after both writes have finished.
pub async fn generate_comment<S: SeedStore + ?Sized>(
    store: &S,
    comment: comment::ActiveModel,
    ticket_id: i32,
) -> Result<i32> {
    let comment_id = store.insert_comment(comment).await?;
    store.append_ticket_comment(ticket_id, comment_id).await?;
    Ok(comment_id)
}

/// Inserts `count` comments by random users on random tickets.
#[instrument(skip(store, rng, users, tickets))]
pub async fn create_comments<S, R>(
    store: &S,
    rng: &mut R,
    users: &[i32],
    tickets: &[i32],
    count: usize,
) -> Result<Vec<i32>>
where
    S: SeedStore + ?Sized,
    R: Rng,
{
    let now = Utc::now();
    let comments = (0..count)
        .map(|_| -> Result<(comment::ActiveModel, i32)> {
            let owner = pick_id(rng, users, "user")?;
            let ticket = pick_id(rng, tickets, "ticket")?;
            Ok((draft_comment(rng, owner, now), ticket))
        })
        .collect::<Result<Vec<_>>>()?;

    let ids = try_join_all(
        comments
            .into_iter()
            .map(|(comment, ticket)| generate_comment(store, comment, ticket)),
    )
    .await?;
    debug!(count = ids.len(), "Inserted comments");
    Ok(ids)
}
