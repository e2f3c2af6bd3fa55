pub mod analytics;
pub mod appointment;
pub mod goal;
pub mod schedule;
