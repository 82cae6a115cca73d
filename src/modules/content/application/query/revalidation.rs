use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::query_client::{QueryClient, QueryKey};
use crate::modules::content::domain::entities::Table;

/// Subscribes to every table and refetches its public collection after each
/// invalidation, so visitors are not the ones paying for the reload.
pub fn spawn_revalidation(query: Arc<QueryClient>) -> Vec<JoinHandle<()>> {
    Table::ALL
        .into_iter()
        .map(|table| {
            let query = Arc::clone(&query);
            let mut rx = query.subscribe(table);

            tokio::spawn(async move {
                while rx.changed().await.is_ok() {
                    let generation = *rx.borrow_and_update();

                    match query.fetch_rows(QueryKey::public(table)).await {
                        Ok(rows) => {
                            debug!(%table, generation, rows = rows.len(), "revalidated collection")
                        }
                        Err(e) => warn!(%table, generation, error = %e, "revalidation failed"),
                    }
                }
            })
        })
        .collect()
}
