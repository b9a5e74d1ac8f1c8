use std::{net::SocketAddr, sync::Arc};

use back::{
    app,
    service::TaskService,
    store::{self, TaskStore},
    AppState,
};
use clap::Parser;

#[derive(Parser, Debug)]
struct Args {
    /// Port for the HTTP listener.
    #[arg(long, env = "SERVER_PORT", default_value_t = 2022)]
    port: u16,

    /// Connection string for the task store.
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://tasks.db?mode=rwc")]
    database_url: String,
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let pool = store::connect(&args.database_url).await?;
    let state = Arc::new(AppState {
        tasks: TaskService::new(TaskStore::new(pool)),
    });

    let addr = SocketAddr::from(([0; 4], args.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "listening");

    axum::serve(listener, app(state)).await?;

    Ok(())
}
