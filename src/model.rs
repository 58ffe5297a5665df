use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// Hour-of-day on a 24-hour scale with fractional hours (`9.5` = 09:30) —
/// the only time-of-day type.
pub type Hours = f64;

/// Half-open interval `[start, end)` within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: Hours,
    pub end: Hours,
}

impl TimeRange {
    pub fn new(start: Hours, end: Hours) -> Self {
        debug_assert!(start < end, "TimeRange start must be before end");
        Self { start, end }
    }

    pub fn duration_hours(&self) -> Hours {
        self.end - self.start
    }

    pub fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// The fixed set of reservable rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    #[serde(rename = "1A")]
    OneA,
    #[serde(rename = "1B")]
    OneB,
    #[serde(rename = "3A")]
    ThreeA,
}

impl Room {
    /// Canonical dashboard order.
    pub const ALL: [Room; 3] = [Room::OneA, Room::OneB, Room::ThreeA];

    pub fn as_str(&self) -> &'static str {
        match self {
            Room::OneA => "1A",
            Room::OneB => "1B",
            Room::ThreeA => "3A",
        }
    }

    /// Parse the wire form (`"1A"`, `"1B"`, `"3A"`).
    pub fn parse(s: &str) -> Option<Room> {
        match s {
            "1A" => Some(Room::OneA),
            "1B" => Some(Room::OneB),
            "3A" => Some(Room::ThreeA),
            _ => None,
        }
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A confirmed reservation of one room for one time range on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Ulid,
    pub owner: String,
    pub room: Room,
    pub date: NaiveDate,
    pub times: TimeRange,
}

/// The Monday-anchored 5-day span the calendar view displays, plus the
/// offsets the calling UI needs to position "today" and bound its date picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekWindow {
    /// Date of the Monday anchoring the displayed week.
    pub start_day: NaiveDate,
    /// Signed day-count from today to `start_day`.
    pub start_day_offset: i64,
    /// 0 on a weekday, otherwise days until the next Monday.
    pub weekday_mark: i64,
    /// End-of-week offset bounding the caller's date picker.
    pub date_diff: i64,
}

/// All bookings for one calendar date, across every room, sorted by
/// `times.start`.
#[derive(Debug, Clone)]
pub struct DayState {
    pub date: NaiveDate,
    pub bookings: Vec<Booking>,
}

impl DayState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            bookings: Vec::new(),
        }
    }

    /// Insert a booking maintaining sort order by start time.
    pub fn insert_booking(&mut self, booking: Booking) {
        let pos = self
            .bookings
            .partition_point(|b| b.times.start < booking.times.start);
        self.bookings.insert(pos, booking);
    }

    /// Remove a booking by id.
    pub fn remove_booking(&mut self, id: Ulid) -> Option<Booking> {
        let pos = self.bookings.iter().position(|b| b.id == id)?;
        Some(self.bookings.remove(pos))
    }

    pub fn booking(&self, id: Ulid) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Bookings (any room) whose time range intersects `query`.
    /// Sort order lets a partition_point cut off everything starting at or
    /// after `query.end`.
    pub fn overlapping(&self, query: &TimeRange) -> impl Iterator<Item = &Booking> {
        let (qstart, qend) = (query.start, query.end);
        let right_bound = self.bookings.partition_point(|b| b.times.start < qend);
        self.bookings[..right_bound]
            .iter()
            .filter(move |b| b.times.end > qstart)
    }
}
