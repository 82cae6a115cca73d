mod query_client;
mod revalidation;

pub use query_client::{Intent, QueryClient, QueryError, QueryKey};
pub use revalidation::spawn_revalidation;
