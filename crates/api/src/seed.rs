//! Development data seeding.
//!
//! Runs at startup when `SEED_DEMO_DATA=true`. Idempotent: each section
//! is guarded by a count check so restarting the server never duplicates
//! rows.

use catalog_core::product::{ProductInput, ProductStatus};
use catalog_core::roles::{ROLE_ADMIN, ROLE_USER};
use catalog_db::models::user::CreateUser;
use catalog_db::repositories::{ProductRepo, UserRepo};
use catalog_db::DbPool;

use crate::auth::password::hash_password;

/// Seed demo users and a sample catalog if the database is empty.
pub async fn seed_demo_data(pool: &DbPool) -> anyhow::Result<()> {
    seed_users(pool).await?;
    seed_products(pool).await?;
    Ok(())
}

async fn seed_users(pool: &DbPool) -> anyhow::Result<()> {
    if UserRepo::count(pool).await? > 0 {
        tracing::debug!("Users already present, skipping user seed");
        return Ok(());
    }

    let demo_users = [
        ("admin", "admin123", ROLE_ADMIN),
        ("user", "user123", ROLE_USER),
    ];

    for (username, password, role) in demo_users {
        let hash = hash_password(password).map_err(|e| anyhow::anyhow!(e))?;
        UserRepo::create(
            pool,
            &CreateUser {
                username: username.to_string(),
                password_hash: hash,
                role: role.to_string(),
            },
        )
        .await?;
        tracing::info!(username, role, "Seeded demo user");
    }

    Ok(())
}

async fn seed_products(pool: &DbPool) -> anyhow::Result<()> {
    if ProductRepo::count(pool).await? > 0 {
        tracing::debug!("Products already present, skipping product seed");
        return Ok(());
    }

    let samples = [
        ("Laptop Pro 15", 1499.99, 12, ProductStatus::Active),
        ("Wireless Mouse", 24.50, 140, ProductStatus::Active),
        ("Mechanical Keyboard", 89.00, 45, ProductStatus::Active),
        ("USB-C Hub", 39.95, 80, ProductStatus::Active),
        ("27\" Monitor", 279.00, 23, ProductStatus::Active),
        ("Webcam HD", 59.99, 0, ProductStatus::Discontinued),
        ("Desk Lamp", 18.75, 64, ProductStatus::Active),
        ("Laptop Stand", 32.00, 51, ProductStatus::Active),
        ("Noise-Cancelling Headphones", 199.99, 17, ProductStatus::Active),
        ("Ergonomic Chair", 349.00, 6, ProductStatus::Discontinued),
    ];

    for (name, price, stock, status) in samples {
        ProductRepo::create(
            pool,
            &ProductInput {
                name: name.to_string(),
                price,
                stock,
                status,
            },
        )
        .await?;
    }
    tracing::info!(count = samples.len(), "Seeded sample products");

    Ok(())
}
