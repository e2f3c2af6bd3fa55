use crate::models::DbAppointment;
use chrono::{DateTime, Utc};
use eyre::Result;
use fitdesk_core::models::appointment::{Appointment, UserRole};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

/// Appointments intersecting `[range_start, range_end)`.
///
/// Trainers see their own sessions; gyms see every session booked under them.
pub async fn get_appointments_in_range(
    pool: &Pool<Postgres>,
    user_id: Uuid,
    range_start: DateTime<Utc>,
    range_end: DateTime<Utc>,
    role: UserRole,
) -> Result<Vec<Appointment>> {
    let owner_column = match role {
        UserRole::Trainer => "trainer_id",
        UserRole::Gym => "gym_id",
    };

    tracing::debug!(
        "Getting appointments: user={}, role={:?}, from={}, to={}",
        user_id, role, range_start, range_end
    );

    let query = format!(
        r#"
        SELECT id, trainer_id, gym_id, start_time, end_time, status, created_at
        FROM appointments
        WHERE {owner_column} = $1
          AND start_time < $3
          AND end_time > $2
        ORDER BY start_time ASC
        "#
    );

    let rows = sqlx::query_as::<_, DbAppointment>(&query)
        .bind(user_id)
        .bind(range_start)
        .bind(range_end)
        .fetch_all(pool)
        .await?;

    let appointments = rows
        .into_iter()
        .filter_map(|row| {
            let id = row.id;
            let status = row.status.clone();
            let appointment = row.into_appointment();
            if appointment.is_none() {
                tracing::warn!("Skipping appointment {} with unknown status '{}'", id, status);
            }
            appointment
        })
        .collect();

    Ok(appointments)
}
