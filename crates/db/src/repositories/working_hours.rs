use crate::models::DbWorkingHoursDay;
use eyre::Result;
use fitdesk_core::models::schedule::{DaySchedule, WeeklySchedule};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

pub async fn get_working_hours(
    pool: &Pool<Postgres>,
    user_id: Uuid,
) -> Result<Option<WeeklySchedule>> {
    tracing::debug!("Getting working hours for user: {}", user_id);

    let rows = sqlx::query_as::<_, DbWorkingHoursDay>(
        r#"
        SELECT user_id, weekday, available, ranges, updated_at
        FROM working_hours
        WHERE user_id = $1
        ORDER BY weekday ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    if rows.is_empty() {
        tracing::debug!("No working hours declared for user: {}", user_id);
        return Ok(None);
    }

    let updated_at = rows.iter().map(|row| row.updated_at).max();
    let days = rows.into_iter().map(DaySchedule::from).collect();

    Ok(Some(WeeklySchedule {
        user_id: Some(user_id),
        days,
        updated_at,
    }))
}
