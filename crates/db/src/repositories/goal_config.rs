use crate::models::DbOccupancyGoalConfig;
use chrono::Utc;
use eyre::{eyre, Result};
use fitdesk_core::models::goal::{OccupancyGoalConfig, UpdateOccupancyGoalConfig};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_or_create_goal_config(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<OccupancyGoalConfig> {
    let defaults = OccupancyGoalConfig::default_for(user_id, Utc::now());

    // Concurrent first reads race on the insert; only one row survives.
    let inserted = sqlx::query(
        r#"
        INSERT INTO occupancy_goal_configs
            (user_id, weekly_target, monthly_target, average_session_price,
             active, created_at, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        ON CONFLICT (user_id) DO NOTHING
        "#,
    )
    .bind(user_id)
    .bind(defaults.weekly_target)
    .bind(defaults.monthly_target)
    .bind(defaults.average_session_price)
    .bind(defaults.active)
    .bind(defaults.created_at)
    .execute(pool)
    .await?;

    if inserted.rows_affected() > 0 {
        tracing::info!("Created default occupancy goal config for user: {}", user_id);
    }

    let config = sqlx::query_as::<_, DbOccupancyGoalConfig>(
        r#"
        SELECT user_id, weekly_target, monthly_target, average_session_price,
               active, created_at, updated_at
        FROM occupancy_goal_configs
        WHERE user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| eyre!("Occupancy goal config for {} vanished after insert", user_id))?;

    Ok(config.into())
}

/// Applies a partial update in a single statement so concurrent writers never
/// interleave field by field; the last statement to commit wins.
pub async fn update_goal_config(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    update: &UpdateOccupancyGoalConfig,
) -> Result<OccupancyGoalConfig> {
    get_or_create_goal_config(pool, user_id).await?;

    let config = sqlx::query_as::<_, DbOccupancyGoalConfig>(
        r#"
        UPDATE occupancy_goal_configs
        SET weekly_target = COALESCE($2, weekly_target),
            monthly_target = COALESCE($3, monthly_target),
            average_session_price = COALESCE($4, average_session_price),
            active = COALESCE($5, active),
            updated_at = GREATEST($6, updated_at)
        WHERE user_id = $1
        RETURNING user_id, weekly_target, monthly_target, average_session_price,
                  active, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(update.weekly_target)
    .bind(update.monthly_target)
    .bind(update.average_session_price)
    .bind(update.active)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    tracing::info!("Updated occupancy goal config for user: {}", user_id);
    Ok(config.into())
}
