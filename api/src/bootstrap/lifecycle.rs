use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::bootstrap::app_context::{AppContext, AppServices};
use crate::bootstrap::config::Config;
use crate::infrastructure::db::{self, DbPool};
use crate::infrastructure::db::repositories::post_repository_sqlx::SqlxPostRepository;
use crate::infrastructure::db::repositories::user_repository_sqlx::SqlxUserRepository;
use crate::presentation::cli::CliTask;

pub enum RunMode {
    Server,
    Cli(CliTask),
}

/// Wired application: one pool, one set of repositories.
pub struct Application {
    pub cfg: Config,
    pub pool: DbPool,
    pub ctx: AppContext,
}

impl Application {
    pub async fn build(cfg: Config) -> anyhow::Result<Self> {
        let pool = db::connect_pool(&cfg.database_url).await?;
        Self::from_pool(cfg, pool).await
    }

    /// Applies pending migrations, then wires the repositories. Runs for
    /// every mode so CLI commands see the same schema as the server.
    pub async fn from_pool(cfg: Config, pool: DbPool) -> anyhow::Result<Self> {
        db::migrate(&pool).await?;
        info!("migrations_applied");
        let services = AppServices::new(
            Arc::new(SqlxPostRepository::new(pool.clone())),
            Arc::new(SqlxUserRepository::new(pool.clone())),
        );
        let ctx = AppContext::new(cfg.clone(), services);
        Ok(Self { cfg, pool, ctx })
    }

    /// Runs the start hook for `mode`, then the stop hook regardless of outcome.
    pub async fn run(self, mode: RunMode) -> anyhow::Result<()> {
        let result = match mode {
            RunMode::Server => self.start_server().await,
            RunMode::Cli(task) => {
                info!("Starting CLI Application");
                crate::presentation::cli::execute(&self.ctx, task).await
            }
        };
        self.stop().await;
        result
    }

    async fn start_server(&self) -> anyhow::Result<()> {
        info!("Starting Application");
        info!("-------------------------------------");
        info!("------- clean-architecture -------");
        info!("-------------------------------------");

        let app = crate::presentation::http::router(self.ctx.clone(), self.pool.clone());
        let addr = SocketAddr::from(([0, 0, 0, 0], self.cfg.server_port));
        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!(%addr, "HTTP API listening");

        let api_handle: JoinHandle<anyhow::Result<()>> = tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            Ok(())
        });

        match api_handle.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => {
                error!(?e, "API server task failed");
                Err(e)
            }
            Err(e) => {
                error!(?e, "API server task panicked");
                Err(e.into())
            }
        }
    }

    async fn stop(self) {
        info!("Stopping Application");
        self.pool.close().await;
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = ?e, "ctrl_c_handler_failed");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!(error = ?e, "sigterm_handler_failed");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown_signal_received");
}
