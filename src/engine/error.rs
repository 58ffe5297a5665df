use ulid::Ulid;

#[derive(Debug)]
pub enum SchedulerError {
    /// Malformed submitted times: non-numeric, reversed, or outside
    /// bookable hours.
    InvalidTimes(&'static str),
    /// The owner already holds the daily maximum for that date.
    QuotaExceeded(u32),
    /// The requested range intersects an existing booking on that room/date.
    Conflict(Ulid),
    NotFound(Ulid),
    NotOwner(Ulid),
    UnknownRoom(String),
}

impl SchedulerError {
    /// Rule rejections are expected outcomes the caller renders as a
    /// message; the remaining variants indicate a bad request.
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            SchedulerError::QuotaExceeded(_) | SchedulerError::Conflict(_)
        )
    }
}

impl std::fmt::Display for SchedulerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchedulerError::InvalidTimes(msg) => write!(f, "invalid times: {msg}"),
            SchedulerError::QuotaExceeded(cap) => {
                write!(f, "daily quota of {cap} bookings already reached")
            }
            SchedulerError::Conflict(id) => {
                write!(f, "time already reserved by booking: {id}")
            }
            SchedulerError::NotFound(id) => write!(f, "booking not found: {id}"),
            SchedulerError::NotOwner(id) => {
                write!(f, "booking {id} belongs to another user")
            }
            SchedulerError::UnknownRoom(s) => write!(f, "unknown room: {s}"),
        }
    }
}

impl std::error::Error for SchedulerError {}
