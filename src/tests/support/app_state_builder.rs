use crate::modules::admin::application::console::AdminConsole;
use crate::modules::admin::application::upload_policy::UploadPolicy;
use crate::modules::content::adapter::outgoing::InMemoryContentStore;
use crate::modules::content::application::ports::outgoing::{ObjectStorage, TableClient};
use crate::modules::content::application::query::QueryClient;
use crate::modules::gate::adapter::outgoing::InMemorySessionStore;
use crate::modules::gate::application::AccessGate;
use crate::modules::gate::domain::AdminCredentials;
use crate::tests::support::fixtures::{TEST_ADMIN_PASSWORD, TEST_ADMIN_USERNAME};
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Wires a full `AppState` over an in-memory backend. Each piece can be
/// swapped for a stub.
pub struct TestAppStateBuilder {
    remote: Arc<dyn TableClient>,
    storage: Arc<dyn ObjectStorage>,
    credentials: Option<AdminCredentials>,
    sessions: Arc<InMemorySessionStore>,
    policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let store = Arc::new(InMemoryContentStore::new("http://localhost"));
        Self {
            remote: store.clone(),
            storage: store,
            credentials: AdminCredentials::from_parts(
                Some(TEST_ADMIN_USERNAME.to_string()),
                Some(TEST_ADMIN_PASSWORD.to_string()),
            ),
            sessions: Arc::new(InMemorySessionStore::new()),
            policy: UploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    /// Uses `store` for both tables and object storage.
    pub fn with_store(mut self, store: Arc<InMemoryContentStore>) -> Self {
        self.remote = store.clone();
        self.storage = store;
        self
    }

    pub fn with_remote(mut self, remote: Arc<dyn TableClient>) -> Self {
        self.remote = remote;
        self
    }

    pub fn with_storage(mut self, storage: Arc<dyn ObjectStorage>) -> Self {
        self.storage = storage;
        self
    }

    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_session_store(mut self, sessions: Arc<InMemorySessionStore>) -> Self {
        self.sessions = sessions;
        self
    }

    pub fn without_admin_credentials(mut self) -> Self {
        self.credentials = None;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let query = Arc::new(QueryClient::new(self.remote.clone()));
        let console = AdminConsole::new(
            self.remote.clone(),
            self.storage,
            query.clone(),
            self.policy,
        );
        let gate = AccessGate::new(self.credentials, self.sessions);

        web::Data::new(AppState {
            remote: self.remote,
            query,
            console: Arc::new(console),
            gate: Arc::new(gate),
        })
    }
}
