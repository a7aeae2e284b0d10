use std::env;

#[derive(Clone)]
pub struct Config {
    pub server_port: u16,
    pub frontend_url: Option<String>,
    pub database_url: String,
    pub body_limit_bytes: usize,
    pub is_production: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("server_port", &self.server_port)
            .field("frontend_url", &self.frontend_url)
            .field("database_url", &redact_password(&self.database_url))
            .field("body_limit_bytes", &self.body_limit_bytes)
            .field("is_production", &self.is_production)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(get: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_port = get("SERVER_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);
        let frontend_url = get("FRONTEND_URL").filter(|v| !v.trim().is_empty());
        let explicit_url = get("DATABASE_URL").filter(|v| !v.trim().is_empty());
        let db_pass = get("DB_PASS").filter(|v| !v.is_empty());
        let has_db_secret = explicit_url.is_some() || db_pass.is_some();
        let database_url = match explicit_url {
            Some(url) => url,
            None => {
                let user = get("DB_USER").unwrap_or_else(|| "root".into());
                let name = get("DB_NAME").unwrap_or_else(|| "app".into());
                // userinfo and path segments must be percent-encoded
                format!(
                    "mysql://{}:{}@{}:{}/{}",
                    urlencoding::encode(&user),
                    urlencoding::encode(db_pass.as_deref().unwrap_or_default()),
                    get("DB_HOST").unwrap_or_else(|| "localhost".into()),
                    get("DB_PORT").unwrap_or_else(|| "3306".into()),
                    urlencoding::encode(&name),
                )
            }
        };
        let body_limit_bytes = get("UPLOAD_MAX_BYTES")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1024 * 1024);
        let is_production = matches!(
            get("ENVIRONMENT").or_else(|| get("RUST_ENV")).as_deref(),
            Some("production") | Some("prod")
        );

        if is_production {
            if !frontend_url
                .as_deref()
                .map(|u| u.starts_with("http://") || u.starts_with("https://"))
                .unwrap_or(false)
            {
                anyhow::bail!(
                    "FRONTEND_URL must be set to a full origin in production (e.g., https://app.example.com)"
                );
            }
            if !has_db_secret {
                anyhow::bail!("DB_PASS or DATABASE_URL must be set in production");
            }
        }

        Ok(Self {
            server_port,
            frontend_url,
            database_url,
            body_limit_bytes,
            is_production,
        })
    }
}

fn redact_password(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((creds, host)) = rest.rsplit_once('@') else {
        return url.to_string();
    };
    let user = creds.split(':').next().unwrap_or_default();
    format!("{scheme}://{user}:***@{host}")
}
