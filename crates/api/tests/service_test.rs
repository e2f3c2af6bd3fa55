
use chrono::{Duration, Utc};
use fitdesk_core::errors::AgendaError;
use fitdesk_core::models::{
    analytics::Trend,
    appointment::UserRole,
    goal::{OccupancyGoalConfig, UpdateOccupancyGoalConfig},
};
use mockall::predicate::{always, eq};
use pretty_assertions::assert_eq;
use uuid::Uuid;

use crate::test_utils::{TestContext, at, completed, date, office_hours};

fn with_default_goal(ctx: &mut TestContext) {
    ctx.goal_repo
        .expect_get_occupancy_goal_config()
        .returning(|user_id| Ok(OccupancyGoalConfig::default_for(user_id, Utc::now())));
}

#[test_log::test(tokio::test)]
async fn test_failed_lookups_yield_zeroed_snapshot() {
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_get_working_hours()
        .returning(|_| Err(AgendaError::DataUnavailable("timeout".to_string())));
    ctx.appointment_repo
        .expect_get_appointments()
        .returning(|_, _, _, _| Err(AgendaError::DataUnavailable("timeout".to_string())));
    with_default_goal(&mut ctx);
    let service = ctx.into_service();

    let snapshot = service
        .get_utilization_snapshot(
            date(2026, 10, 12),
            date(2026, 10, 18),
            Uuid::new_v4(),
            UserRole::Trainer,
        )
        .await
        .expect("lookup failures must not fail the snapshot");

    assert_eq!(snapshot.available_hours, 0.0);
    assert_eq!(snapshot.worked_hours, 0.0);
    assert_eq!(snapshot.occupancy_percent, 0);
    assert_eq!(snapshot.total_count, 0);
    assert_eq!(snapshot.daily.len(), 7);
}

#[test_log::test(tokio::test)]
async fn test_missing_schedule_counts_as_no_availability() {
    let user_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.schedule_repo.expect_get_working_hours().returning(|_| Ok(None));
    ctx.appointment_repo
        .expect_get_appointments()
        .returning(move |_, _, _, _| Ok(vec![completed(user_id, at(2026, 10, 12, 9))]));
    with_default_goal(&mut ctx);
    let service = ctx.into_service();

    let snapshot = service
        .get_utilization_snapshot(
            date(2026, 10, 12),
            date(2026, 10, 18),
            user_id,
            UserRole::Trainer,
        )
        .await
        .unwrap();

    assert_eq!(snapshot.available_hours, 0.0);
    assert_eq!(snapshot.worked_hours, 1.0);
    assert_eq!(snapshot.occupancy_percent, 0);
}

#[tokio::test]
async fn test_inverted_range_fails_fast() {
    // No expectations: any lookup would panic.
    let service = TestContext::new().into_service();

    let result = service
        .get_utilization_snapshot(
            date(2026, 10, 18),
            date(2026, 10, 12),
            Uuid::new_v4(),
            UserRole::Trainer,
        )
        .await;

    assert!(matches!(result, Err(AgendaError::InvalidRange { .. })));

    let result = service
        .get_period_comparison(
            date(2026, 10, 18),
            date(2026, 10, 12),
            Uuid::new_v4(),
            UserRole::Trainer,
        )
        .await;

    assert!(matches!(result, Err(AgendaError::InvalidRange { .. })));
}

#[tokio::test]
async fn test_snapshot_queries_the_whole_range_with_role() {
    let user_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_get_working_hours()
        .with(eq(user_id))
        .returning(move |_| Ok(Some(office_hours(user_id))));
    ctx.appointment_repo
        .expect_get_appointments()
        .with(eq(user_id), eq(at(2026, 10, 12, 0)), eq(at(2026, 10, 19, 0)), eq(UserRole::Gym))
        .times(1)
        .returning(move |_, _, _, _| {
            Ok((12..=16)
                .flat_map(|day| {
                    [
                        completed(user_id, at(2026, 10, day, 9)),
                        completed(user_id, at(2026, 10, day, 10)),
                    ]
                })
                .collect())
        });
    with_default_goal(&mut ctx);
    let service = ctx.into_service();

    let snapshot = service
        .get_utilization_snapshot(date(2026, 10, 12), date(2026, 10, 18), user_id, UserRole::Gym)
        .await
        .unwrap();

    assert_eq!(snapshot.available_hours, 40.0);
    assert_eq!(snapshot.worked_hours, 10.0);
    assert_eq!(snapshot.occupancy_percent, 25);
    assert_eq!(snapshot.estimated_revenue, 500.0);
}

#[tokio::test]
async fn test_comparison_fetches_the_preceding_period() {
    let user_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_get_working_hours()
        .returning(move |_| Ok(Some(office_hours(user_id))));
    ctx.appointment_repo
        .expect_get_appointments()
        .with(always(), eq(at(2026, 10, 12, 0)), eq(at(2026, 10, 19, 0)), always())
        .times(1)
        .returning(move |_, _, _, _| {
            Ok((9..17).map(|hour| completed(user_id, at(2026, 10, 13, hour))).collect())
        });
    ctx.appointment_repo
        .expect_get_appointments()
        .with(always(), eq(at(2026, 10, 5, 0)), eq(at(2026, 10, 12, 0)), always())
        .times(1)
        .returning(move |_, _, _, _| {
            Ok((9..13).map(|hour| completed(user_id, at(2026, 10, 6, hour))).collect())
        });
    with_default_goal(&mut ctx);
    let service = ctx.into_service();

    let comparison = service
        .get_period_comparison(date(2026, 10, 12), date(2026, 10, 18), user_id, UserRole::Trainer)
        .await
        .unwrap();

    assert_eq!(comparison.current.occupancy_percent, 20);
    assert_eq!(comparison.previous.occupancy_percent, 10);
    assert_eq!(comparison.occupancy_delta, 10);
    assert_eq!(comparison.occupancy_delta_percent, 100.0);
    assert_eq!(comparison.worked_hours_delta, 4.0);
    assert_eq!(comparison.trend, Trend::Rising);
}

#[tokio::test]
async fn test_projection_falls_back_to_default_goal() {
    let user_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_get_working_hours()
        .returning(move |_| Ok(Some(office_hours(user_id))));
    ctx.appointment_repo
        .expect_get_appointments()
        .returning(|_, _, _, _| Ok(Vec::new()));
    ctx.goal_repo
        .expect_get_occupancy_goal_config()
        .returning(|_| Err(AgendaError::Database(eyre::eyre!("connection refused"))));
    let service = ctx.into_service();

    let projection = service
        .get_revenue_projection(date(2026, 10, 12), date(2026, 10, 18), user_id, UserRole::Trainer)
        .await
        .unwrap();

    assert_eq!(projection.goal_occupancy, 80.0);
    assert_eq!(projection.hours_needed, 32.0);
    assert_eq!(projection.sessions_needed, 32);
    assert_eq!(projection.projected_revenue, 1600.0);
}

#[tokio::test]
async fn test_weekly_series_fetches_each_window_in_order() {
    let user_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_get_working_hours()
        .times(1)
        .returning(move |_| Ok(Some(office_hours(user_id))));
    ctx.appointment_repo
        .expect_get_appointments()
        .times(4)
        .returning(move |_, start, end, _| {
            assert_eq!(end - start, Duration::days(7));
            Ok(vec![completed(user_id, start + Duration::hours(9))])
        });
    with_default_goal(&mut ctx);
    let service = ctx.into_service().with_fetch_concurrency(2);

    let series = service
        .get_weekly_series(date(2026, 10, 19), 4, user_id, UserRole::Trainer)
        .await
        .unwrap();

    assert_eq!(series.len(), 4);
    assert_eq!(series[0].range.start, date(2026, 9, 22));
    assert_eq!(series[3].range.end, date(2026, 10, 19));
    assert!(series.windows(2).all(|pair| pair[0].range.end < pair[1].range.start));
    assert!(series.iter().all(|week| week.worked_hours == 1.0));
}

#[tokio::test]
async fn test_monthly_series_tolerates_a_failing_window() {
    let user_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_get_working_hours()
        .returning(move |_| Ok(Some(office_hours(user_id))));
    ctx.appointment_repo
        .expect_get_appointments()
        .returning(move |_, start, _, _| {
            if start == at(2026, 9, 1, 0) {
                Err(AgendaError::DataUnavailable("shard offline".to_string()))
            } else {
                Ok(vec![completed(user_id, start + Duration::hours(9))])
            }
        });
    with_default_goal(&mut ctx);
    let service = ctx.into_service();

    let series = service
        .get_monthly_series(date(2026, 10, 19), 3, user_id, UserRole::Trainer)
        .await
        .unwrap();

    let worked: Vec<f64> = series.iter().map(|month| month.worked_hours).collect();
    assert_eq!(worked, vec![1.0, 0.0, 1.0]);
    assert_eq!(series[1].period_label, "September 2026");
}

#[tokio::test]
async fn test_oversized_series_is_rejected() {
    let service = TestContext::new().into_service();

    let result = service
        .get_weekly_series(date(2026, 10, 19), 1_000, Uuid::new_v4(), UserRole::Trainer)
        .await;

    assert!(matches!(result, Err(AgendaError::Validation(_))));
}

#[tokio::test]
async fn test_invalid_goal_update_never_reaches_the_store() {
    let service = TestContext::new().into_service();

    let result = service
        .update_occupancy_goal_config(
            Uuid::new_v4(),
            UpdateOccupancyGoalConfig {
                monthly_target: Some(120.0),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AgendaError::Validation(_))));
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let user_id = Uuid::new_v4();
    let mut ctx = TestContext::new();
    ctx.schedule_repo
        .expect_get_working_hours()
        .returning(move |_| Ok(Some(office_hours(user_id))));
    ctx.appointment_repo
        .expect_get_appointments()
        .returning(move |_, _, _, _| Ok(vec![completed(user_id, at(2026, 10, 14, 11))]));
    let fixed = OccupancyGoalConfig::default_for(user_id, at(2026, 1, 1, 0));
    ctx.goal_repo
        .expect_get_occupancy_goal_config()
        .returning(move |_| Ok(fixed.clone()));
    let service = ctx.into_service();

    let first = service
        .get_period_comparison(date(2026, 10, 12), date(2026, 10, 18), user_id, UserRole::Trainer)
        .await
        .unwrap();
    let second = service
        .get_period_comparison(date(2026, 10, 12), date(2026, 10, 18), user_id, UserRole::Trainer)
        .await
        .unwrap();

    assert_eq!(first, second);
}
