//! # TaskDesk Demo Binary
//!
//! A minimal composition-root demo: wires the state layer over file-backed
//! storage, signs in with the demo admin account when no session is
//! persisted, and logs a dashboard summary.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskdesk-client
//! ```

use std::sync::Arc;

use taskdesk_client::app::App;
use taskdesk_client::config::ClientConfig;
use taskdesk_client::notify::LogNotifier;
use taskdesk_client::storage::FileStorage;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskdesk_client=debug,taskdesk_shared=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("TaskDesk v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = ClientConfig::from_env()?;
    let storage = Arc::new(FileStorage::open(&config.data_dir)?);
    let app = App::new(storage, Arc::new(LogNotifier), config.latency())?;

    if let Some(user) = app.session.current_user() {
        tracing::info!(name = %user.name, "resumed persisted session");
    } else {
        tracing::info!("no persisted session, signing in with the demo admin account");
        app.session.login("admin@example.com", "password123").await?;
    }

    let summary = app.tasks.status_summary();
    tracing::info!(
        total = summary.total(),
        todo = summary.todo,
        in_progress = summary.in_progress,
        review = summary.review,
        completed = summary.completed,
        "dashboard summary"
    );

    if let Some(user) = app.session.current_user() {
        for task in app.tasks.get_user_tasks(&user.id) {
            tracing::info!(id = %task.id, status = ?task.status, "{}", task.title);
        }
    }

    Ok(())
}
