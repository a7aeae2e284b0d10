use sqlx::{MySql, Pool};

pub type DbPool = Pool<MySql>;

pub async fn connect_pool(database_url: &str) -> anyhow::Result<DbPool> {
    let pool = sqlx::mysql::MySqlPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn migrate(pool: &DbPool) -> anyhow::Result<()> {
    // Uses compile-time embedded migrations under ./migrations
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Round-trips a trivial query through the pool.
pub async fn ping(pool: &DbPool) -> anyhow::Result<()> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

pub mod repositories;
