#[cfg(test)]
pub mod test_utils {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::extract::State;
    use axum::http::header::{ACCEPT, CONTENT_TYPE};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use model::entities::{comment, consumer, product, ticket, user};
    use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr};
    use tokio::net::TcpListener;

    use crate::seed::{DbSeedStore, SeedStore};

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .expect("Failed to enable foreign keys");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Store operations, as seen by [`TestStore`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Operation {
        Reset,
        InsertUser,
        InsertProduct,
        InsertConsumer,
        InsertTicket,
        InsertComment,
        AppendConsumerProduct,
        AppendTicketComment,
    }

    /// A [`SeedStore`] over a real database that records every call, can be
    /// told to fail one kind of operation, and keeps the connection open on
    /// `close` so tests can inspect the data afterwards.
    #[derive(Clone)]
    pub struct TestStore {
        inner: DbSeedStore,
        fail_on: Option<Operation>,
        calls: Arc<Mutex<Vec<Operation>>>,
        closed: Arc<AtomicBool>,
    }

    impl TestStore {
        pub fn new(db: DatabaseConnection) -> Self {
            Self {
                inner: DbSeedStore::new(db),
                fail_on: None,
                calls: Arc::new(Mutex::new(Vec::new())),
                closed: Arc::new(AtomicBool::new(false)),
            }
        }

        pub fn failing_on(db: DatabaseConnection, operation: Operation) -> Self {
            Self {
                fail_on: Some(operation),
                ..Self::new(db)
            }
        }

        pub fn connection(&self) -> &DatabaseConnection {
            self.inner.connection()
        }

        pub fn calls(&self, operation: Operation) -> usize {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|&&call| call == operation)
                .count()
        }

        pub fn total_calls(&self) -> usize {
            self.calls.lock().unwrap().len()
        }

        pub fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }

        fn record(&self, operation: Operation) -> Result<(), DbErr> {
            self.calls.lock().unwrap().push(operation);
            if self.fail_on == Some(operation) {
                return Err(DbErr::Custom(format!("simulated {:?} failure", operation)));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl SeedStore for TestStore {
        async fn reset(&self) -> Result<(), DbErr> {
            self.record(Operation::Reset)?;
            self.inner.reset().await
        }

        async fn insert_user(&self, user: user::ActiveModel) -> Result<i32, DbErr> {
            self.record(Operation::InsertUser)?;
            self.inner.insert_user(user).await
        }

        async fn insert_product(&self, product: product::ActiveModel) -> Result<i32, DbErr> {
            self.record(Operation::InsertProduct)?;
            self.inner.insert_product(product).await
        }

        async fn insert_consumer(&self, consumer: consumer::ActiveModel) -> Result<i32, DbErr> {
            self.record(Operation::InsertConsumer)?;
            self.inner.insert_consumer(consumer).await
        }

        async fn insert_ticket(&self, ticket: ticket::ActiveModel) -> Result<i32, DbErr> {
            self.record(Operation::InsertTicket)?;
            self.inner.insert_ticket(ticket).await
        }

        async fn insert_comment(&self, comment: comment::ActiveModel) -> Result<i32, DbErr> {
            self.record(Operation::InsertComment)?;
            self.inner.insert_comment(comment).await
        }

        async fn append_consumer_product(&self, consumer_id: i32, product_id: i32) -> Result<(), DbErr> {
            self.record(Operation::AppendConsumerProduct)?;
            self.inner.append_consumer_product(consumer_id, product_id).await
        }

        async fn append_ticket_comment(&self, ticket_id: i32, comment_id: i32) -> Result<(), DbErr> {
            self.record(Operation::AppendTicketComment)?;
            self.inner.append_ticket_comment(ticket_id, comment_id).await
        }

        async fn close(&self) -> Result<(), DbErr> {
            self.closed.store(true, Ordering::SeqCst);
            Ok(())
        }
    }

    /// A signup request as received by [`spawn_signup_server`].
    #[derive(Clone, Debug)]
    pub struct CapturedRequest {
        pub accept: Option<String>,
        pub content_type: Option<String>,
        pub body: serde_json::Value,
    }

    #[derive(Clone)]
    struct SignupState {
        status: StatusCode,
        requests: Arc<Mutex<Vec<CapturedRequest>>>,
    }

    /// A local stand-in for the helpdesk API's signup endpoint.
    pub struct SignupServer {
        pub base_url: String,
        requests: Arc<Mutex<Vec<CapturedRequest>>>,
    }

    impl SignupServer {
        pub fn requests(&self) -> Vec<CapturedRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    async fn capture_signup(
        State(state): State<SignupState>,
        headers: HeaderMap,
        body: String,
    ) -> StatusCode {
        let header = |name: axum::http::HeaderName| {
            headers
                .get(name)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string)
        };

        state.requests.lock().unwrap().push(CapturedRequest {
            accept: header(ACCEPT),
            content_type: header(CONTENT_TYPE),
            body: serde_json::from_str(&body).unwrap_or(serde_json::Value::Null),
        });

        state.status
    }

    /// Serve `POST /signup` on a random local port, answering with `status`.
    pub async fn spawn_signup_server(status: StatusCode) -> SignupServer {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = SignupState {
            status,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/signup", post(capture_signup))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind signup server");
        let addr = listener.local_addr().expect("Failed to read local address");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Signup server failed");
        });

        SignupServer {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// A base URL nothing is listening on.
    pub fn unreachable_api_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
        let addr = listener.local_addr().expect("Failed to read local address");
        drop(listener);
        format!("http://{}", addr)
    }
}
