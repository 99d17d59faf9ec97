//! PostgreSQL schema migrations for waitlist storage.

use anyhow::Result;
use sqlx::PgPool;

/// Run all PostgreSQL migrations. Idempotent.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS signups (
            id TEXT PRIMARY KEY,
            email TEXT NOT NULL,
            project_name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
            CONSTRAINT signups_email_lowercase CHECK (email = LOWER(email))
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Uniqueness lives here, not in the pre-insert lookup: concurrent submits
    // of one address can both pass the lookup, only one insert survives this.
    sqlx::query("CREATE UNIQUE INDEX IF NOT EXISTS idx_signups_email ON signups (email)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_signups_created ON signups (created_at DESC)")
        .execute(pool)
        .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS visitors (
            id TEXT PRIMARY KEY,
            page_url TEXT NOT NULL,
            user_agent TEXT NOT NULL DEFAULT '',
            project_name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_visitors_created ON visitors (created_at DESC)")
        .execute(pool)
        .await?;

    tracing::info!("PostgreSQL migrations applied");
    Ok(())
}
