//! Schema bootstrap
//!
//! Creates the tables on startup when they do not exist yet. Statements are
//! idempotent and run in dependency order.

use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

const STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        number TEXT NOT NULL DEFAULT '',
        address TEXT NOT NULL DEFAULT '',
        balance BIGINT NOT NULL DEFAULT 0,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS categories (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        display_order INTEGER NOT NULL DEFAULT 0
    )"#,
    r#"CREATE TABLE IF NOT EXISTS products (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL,
        price BIGINT NOT NULL,
        sku TEXT NOT NULL,
        amount BIGINT NOT NULL DEFAULT 0,
        category_id UUID REFERENCES categories(id) ON DELETE SET NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS orders (
        id UUID PRIMARY KEY,
        user_id UUID NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL,
        status TEXT NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS suppliers (
        id UUID PRIMARY KEY,
        name TEXT NOT NULL
    )"#,
];

/// Create any missing tables
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    for statement in STATEMENTS {
        db.execute_unprepared(statement).await?;
    }

    tracing::debug!(tables = STATEMENTS.len(), "Schema ensured");
    Ok(())
}
