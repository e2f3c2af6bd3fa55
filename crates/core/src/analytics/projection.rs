use crate::models::{
    analytics::{PeriodKind, RevenueProjection, UtilizationSnapshot},
    goal::OccupancyGoalConfig,
};

/// Every missing hour is assumed to be one session. Real session templates
/// run 30 to 90 minutes, so sessions needed is an approximation.
pub const NOMINAL_SESSION_HOURS: f64 = 1.0;

/// Projects hours, sessions and revenue needed to reach the period's goal.
///
/// Weekly periods use the weekly target and longer periods the monthly one.
/// Each hour at goal is billed as one session at the average price.
pub fn project(snapshot: &UtilizationSnapshot, goal: &OccupancyGoalConfig) -> RevenueProjection {
    let goal_occupancy = match snapshot.kind {
        PeriodKind::Weekly => goal.weekly_target,
        PeriodKind::Monthly => goal.monthly_target,
    };

    let hours_for_goal = snapshot.available_hours * goal_occupancy / 100.0;
    // Reported occupancy is rounded, so compare against it before the raw hours.
    let hours_needed = if goal_occupancy <= snapshot.occupancy_percent as f64 {
        0.0
    } else {
        (hours_for_goal - snapshot.worked_hours).max(0.0)
    };
    let sessions_needed = (hours_needed / NOMINAL_SESSION_HOURS).ceil() as u32;

    let projected_revenue = hours_for_goal * goal.average_session_price;

    RevenueProjection {
        period_label: snapshot.period_label.clone(),
        current_occupancy: snapshot.occupancy_percent,
        goal_occupancy,
        projected_occupancy: goal_occupancy.max(snapshot.occupancy_percent as f64),
        goal_active: goal.active,
        current_revenue: snapshot.estimated_revenue,
        projected_revenue,
        revenue_gap: projected_revenue - snapshot.estimated_revenue,
        hours_needed,
        sessions_needed,
    }
}
