//! Scheduling core for a shared study-room reservation system.
//!
//! The crate owns the reservation logic only: week-window calculation for
//! the calendar view, slot expansion for display, half-open-interval
//! conflict checking, the per-user daily quota, and per-room load
//! aggregation. Rendering, authentication, and email flows live in the
//! surrounding application, which calls in with plain data and gets plain
//! data back.

pub mod engine;
pub mod limits;
pub mod model;
pub mod observability;

pub use engine::{Scheduler, SchedulerConfig, SchedulerError};
pub use model::{Booking, DayState, Hours, Room, TimeRange, WeekWindow};
