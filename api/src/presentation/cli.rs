use clap::{Parser, Subcommand};
use tracing::info;

use crate::application::use_cases::posts::delete_post::DeletePost;
use crate::application::use_cases::posts::list_posts::ListPosts;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::lifecycle::RunMode;

#[derive(Debug, Parser)]
#[command(name = "api", about = "Posts and users CRUD service", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending database migrations and exit
    ///
    /// Every command migrates on startup, so this only connects and reports.
    Migrate,
    /// Inspect or modify posts
    Posts {
        #[command(subcommand)]
        action: PostsCommand,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum PostsCommand {
    /// Print every post as one JSON object per line
    List,
    /// Delete a post by id
    Delete { id: String },
}

/// One-shot commands that run instead of the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliTask {
    Migrate,
    ListPosts,
    DeletePost(String),
}

impl Cli {
    pub fn run_mode(&self) -> RunMode {
        match self.command.clone() {
            None | Some(Command::Serve) => RunMode::Server,
            Some(Command::Migrate) => RunMode::Cli(CliTask::Migrate),
            Some(Command::Posts { action }) => RunMode::Cli(match action {
                PostsCommand::List => CliTask::ListPosts,
                PostsCommand::Delete { id } => CliTask::DeletePost(id),
            }),
        }
    }
}

pub async fn execute(ctx: &AppContext, task: CliTask) -> anyhow::Result<()> {
    match task {
        CliTask::Migrate => {
            info!("database_up_to_date");
        }
        CliTask::ListPosts => {
            let repo = ctx.post_repo();
            let uc = ListPosts {
                repo: repo.as_ref(),
            };
            for post in uc.execute().await? {
                println!(
                    "{}",
                    serde_json::json!({"id": post.id, "title": post.title, "text": post.text})
                );
            }
        }
        CliTask::DeletePost(id) => {
            let repo = ctx.post_repo();
            let uc = DeletePost {
                repo: repo.as_ref(),
            };
            uc.execute(&id).await?;
            info!(post_id = %id, "post_deleted");
        }
    }
    Ok(())
}
