//! # FitDesk Core
//!
//! Domain types and the occupancy analytics engine for the trainer calendar.
//!
//! Everything under [`analytics`] is a pure function over data that has already
//! been fetched: a [`models::schedule::WeeklySchedule`], a slice of
//! [`models::appointment::Appointment`]s and an
//! [`models::goal::OccupancyGoalConfig`]. Fetching lives behind the traits in
//! [`lookup`], implemented by the `fitdesk-db` crate.

pub mod analytics;
pub mod errors;
pub mod lookup;
pub mod models;
