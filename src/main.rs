//! Taskboard server binary: configuration, logging, storage selection, and
//! the HTTP serve loop.

use anyhow::Context;
use clap::Parser;
use diesel::r2d2::ConnectionManager;
use std::net::SocketAddr;
use std::sync::Arc;
use taskboard::http;
use taskboard::task::adapters::memory::InMemoryTaskRepository;
use taskboard::task::adapters::postgres::{PostgresTaskRepository, TaskPgPool};
use taskboard::task::services::TaskService;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "taskboard-server", about = "REST service for to-do tasks", version)]
struct Args {
    /// Address to bind the HTTP listener on.
    #[arg(long, env = "TASKBOARD_LISTEN", default_value = "127.0.0.1:8080")]
    listen: SocketAddr,

    /// PostgreSQL connection URL; tasks are kept in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Log filter in tracing env-filter syntax.
    #[arg(long, env = "TASKBOARD_LOG", default_value = "info")]
    log: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log).context("invalid log filter")?)
        .compact()
        .init();

    let app = match args.database_url {
        Some(url) => {
            let pool = TaskPgPool::builder()
                .build(ConnectionManager::new(url))
                .context("connect to PostgreSQL failed")?;
            info!("using PostgreSQL task storage");
            http::router(Arc::new(TaskService::new(Arc::new(
                PostgresTaskRepository::new(pool),
            ))))
        }
        None => {
            info!("using in-memory task storage");
            http::router(Arc::new(TaskService::new(Arc::new(
                InMemoryTaskRepository::new(),
            ))))
        }
    };

    let listener = tokio::net::TcpListener::bind(args.listen)
        .await
        .context("bind server listener failed")?;
    info!(listen = %args.listen, "taskboard-server listening");
    axum::serve(listener, app)
        .await
        .context("server terminated with error")
}
