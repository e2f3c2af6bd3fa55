/// Occupancy goal configuration endpoints
pub mod goals;
/// Utilization, comparison, projection and series endpoints
pub mod occupancy;
