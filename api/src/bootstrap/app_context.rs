use std::sync::Arc;

use crate::application::ports::post_repository::PostRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

/// Router state. Cloning shares the same service instances.
#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    post_repo: Arc<dyn PostRepository>,
    user_repo: Arc<dyn UserRepository>,
}

impl AppServices {
    pub fn new(post_repo: Arc<dyn PostRepository>, user_repo: Arc<dyn UserRepository>) -> Self {
        Self {
            post_repo,
            user_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn post_repo(&self) -> Arc<dyn PostRepository> {
        self.services.post_repo.clone()
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }
}

#[cfg(test)]
pub(crate) fn test_context(
    post_repo: Arc<dyn PostRepository>,
    user_repo: Arc<dyn UserRepository>,
) -> AppContext {
    let cfg = Config::from_lookup(|_| None).expect("default config");
    test_context_with_config(cfg, post_repo, user_repo)
}

#[cfg(test)]
pub(crate) fn test_context_with_config(
    cfg: Config,
    post_repo: Arc<dyn PostRepository>,
    user_repo: Arc<dyn UserRepository>,
) -> AppContext {
    AppContext::new(cfg, AppServices::new(post_repo, user_repo))
}
