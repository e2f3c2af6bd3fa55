use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // One row per user and weekday (0 = Sunday)
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS working_hours (
            user_id UUID NOT NULL,
            weekday SMALLINT NOT NULL CHECK (weekday BETWEEN 0 AND 6),
            available BOOLEAN NOT NULL DEFAULT TRUE,
            ranges JSONB NOT NULL DEFAULT '[]'::jsonb,
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            PRIMARY KEY (user_id, weekday)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
            trainer_id UUID NOT NULL,
            gym_id UUID NULL,
            start_time TIMESTAMP WITH TIME ZONE NOT NULL,
            end_time TIMESTAMP WITH TIME ZONE NOT NULL,
            status VARCHAR(32) NOT NULL,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            CONSTRAINT valid_appointment_range CHECK (end_time > start_time),
            CONSTRAINT valid_appointment_status CHECK (status IN (
                'pending', 'confirmed', 'in_progress', 'completed', 'cancelled', 'no_show'
            ))
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS occupancy_goal_configs (
            user_id UUID PRIMARY KEY,
            weekly_target DOUBLE PRECISION NOT NULL,
            monthly_target DOUBLE PRECISION NOT NULL,
            average_session_price DOUBLE PRECISION NOT NULL,
            active BOOLEAN NOT NULL DEFAULT TRUE,
            created_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW(),
            updated_at TIMESTAMP WITH TIME ZONE NOT NULL DEFAULT NOW()
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    for statement in [
        "CREATE INDEX IF NOT EXISTS idx_appointments_trainer_time ON appointments (trainer_id, start_time, end_time)",
        "CREATE INDEX IF NOT EXISTS idx_appointments_gym_time ON appointments (gym_id, start_time, end_time)",
    ] {
        sqlx::query(statement).execute(pool).await?;
    }

    info!("Database schema initialized successfully");
    Ok(())
}
