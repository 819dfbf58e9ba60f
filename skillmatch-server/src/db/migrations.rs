//! Schema migrations
//!
//! Idempotent `CREATE ... IF NOT EXISTS` statements, safe to run on every
//! startup. `user_profile` belongs to the account subsystem; it is created
//! here only so the service can run against an empty database.

use sqlx::PgPool;

use super::DbError;

/// Run all migrations
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    tracing::info!("Running skillmatch migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_profile (
            id SERIAL PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            zip TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS skill (
            id SERIAL PRIMARY KEY,
            skill_description TEXT NOT NULL,
            skill_img_url TEXT,
            skill_type TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user_skill (
            id SERIAL PRIMARY KEY,
            fk_user_id INTEGER NOT NULL,
            fk_skill_id INTEGER NOT NULL REFERENCES skill(id) ON DELETE CASCADE,
            user_skill_type TEXT,
            primary_description TEXT,
            primary_img_url TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Links are not tied to profile rows; older schemas carried this key.
    sqlx::query("ALTER TABLE user_skill DROP CONSTRAINT IF EXISTS user_skill_fk_user_id_fkey")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_user_skill_user ON user_skill(fk_user_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_user_skill_skill ON user_skill(fk_skill_id)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete");
    Ok(())
}
