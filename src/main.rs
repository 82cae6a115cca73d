pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

use crate::api::openapi::ApiDoc;
use crate::modules::admin::application::console::AdminConsole;
use crate::modules::admin::application::upload_policy::UploadPolicy;
use crate::modules::content::adapter::outgoing::{InMemoryContentStore, SupabaseClient};
use crate::modules::content::application::ports::outgoing::{ObjectStorage, TableClient};
use crate::modules::content::application::query::{spawn_revalidation, QueryClient};
use crate::modules::gate::adapter::outgoing::InMemorySessionStore;
use crate::modules::gate::application::AccessGate;
use crate::shared::config::{AppConfig, ContentBackend};

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    /// Raw backend handle, used by readiness checks.
    pub remote: Arc<dyn TableClient>,
    pub query: Arc<QueryClient>,
    pub console: Arc<AdminConsole>,
    pub gate: Arc<AccessGate>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let (remote, storage): (Arc<dyn TableClient>, Arc<dyn ObjectStorage>) = match &config.backend {
        ContentBackend::Supabase { url, anon_key } => {
            info!(%url, "Using hosted content backend");
            let client = Arc::new(SupabaseClient::new(url, anon_key));
            (client.clone(), client)
        }
        ContentBackend::Memory => {
            warn!("Using in-memory content backend; data is lost on restart");
            let store = Arc::new(InMemoryContentStore::new(&config.local_base_url()));
            (store.clone(), store)
        }
    };

    if config.admin.is_none() {
        warn!("ADMIN_USERNAME / ADMIN_PASSWORD not set; admin console is disabled");
    }

    let query = Arc::new(QueryClient::new(remote.clone()));
    let console = AdminConsole::new(
        remote.clone(),
        storage,
        query.clone(),
        UploadPolicy::new(config.certificate_bucket.clone()),
    );
    let gate = AccessGate::new(config.admin.clone(), Arc::new(InMemorySessionStore::new()));

    let _revalidation = spawn_revalidation(query.clone());

    let state = AppState {
        remote,
        query,
        console: Arc::new(console),
        gate: Arc::new(gate),
    };

    let server_url = config.bind_address();
    info!("Server run on: {}", server_url);

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(crate::shared::api::custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {}", server_url))?
    .run()
    .await?;

    Ok(())
}

/// Literal admin paths are registered ahead of `/api/admin/{table}`.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Portfolio
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_portfolio_handler);
    cfg.service(crate::modules::content::adapter::incoming::web::routes::get_section_handler);
    // Gate
    cfg.service(crate::modules::gate::adapter::incoming::web::routes::get_session_handler);
    cfg.service(crate::modules::gate::adapter::incoming::web::routes::login_handler);
    cfg.service(crate::modules::gate::adapter::incoming::web::routes::logout_handler);
    // Admin
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::get_stats_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::list_entries_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::create_entry_handler);
    cfg.service(crate::modules::admin::adapter::incoming::web::routes::delete_entry_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
