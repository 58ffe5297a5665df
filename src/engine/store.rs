use chrono::NaiveDate;

use crate::model::{Booking, Hours, Room};

/// One comparison against a field value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cmp<T> {
    Eq(T),
    Lt(T),
    Le(T),
    Gt(T),
    Ge(T),
}

impl<T: PartialOrd> Cmp<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Cmp::Eq(v) => value == v,
            Cmp::Lt(v) => value < v,
            Cmp::Le(v) => value <= v,
            Cmp::Gt(v) => value > v,
            Cmp::Ge(v) => value >= v,
        }
    }
}

/// Filter over the booking table — equality on room and owner, comparisons
/// on date and on the interval endpoints. Unset fields match everything.
#[derive(Debug, Clone, Default)]
pub struct BookingFilter {
    pub room: Option<Room>,
    pub owner: Option<String>,
    pub date: Option<Cmp<NaiveDate>>,
    pub start: Option<Cmp<Hours>>,
    pub finish: Option<Cmp<Hours>>,
}

impl BookingFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn room(mut self, room: Room) -> Self {
        self.room = Some(room);
        self
    }

    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn date(mut self, cmp: Cmp<NaiveDate>) -> Self {
        self.date = Some(cmp);
        self
    }

    pub fn start(mut self, cmp: Cmp<Hours>) -> Self {
        self.start = Some(cmp);
        self
    }

    pub fn finish(mut self, cmp: Cmp<Hours>) -> Self {
        self.finish = Some(cmp);
        self
    }

    pub fn matches(&self, b: &Booking) -> bool {
        if self.room.is_some_and(|room| b.room != room) {
            return false;
        }
        if self.owner.as_deref().is_some_and(|owner| b.owner != owner) {
            return false;
        }
        if self.date.is_some_and(|cmp| !cmp.matches(&b.date)) {
            return false;
        }
        if self.start.is_some_and(|cmp| !cmp.matches(&b.times.start)) {
            return false;
        }
        if self.finish.is_some_and(|cmp| !cmp.matches(&b.times.end)) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TimeRange;
    use ulid::Ulid;

    fn booking(owner: &str, room: Room, date: NaiveDate, start: Hours, end: Hours) -> Booking {
        Booking {
            id: Ulid::new(),
            owner: owner.into(),
            room,
            date,
            times: TimeRange::new(start, end),
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
        let b = booking("mina", Room::OneA, d, 9.0, 10.0);
        assert!(BookingFilter::new().matches(&b));
    }

    #[test]
    fn equality_filters() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
        let b = booking("mina", Room::OneA, d, 9.0, 10.0);
        assert!(BookingFilter::new().room(Room::OneA).owner("mina").matches(&b));
        assert!(!BookingFilter::new().room(Room::OneB).matches(&b));
        assert!(!BookingFilter::new().owner("juno").matches(&b));
    }

    #[test]
    fn date_comparisons() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
        let later = NaiveDate::from_ymd_opt(2020, 1, 7).unwrap();
        let b = booking("mina", Room::OneA, later, 9.0, 10.0);
        assert!(BookingFilter::new().date(Cmp::Gt(d)).matches(&b));
        assert!(!BookingFilter::new().date(Cmp::Eq(d)).matches(&b));
        assert!(!BookingFilter::new().date(Cmp::Le(d)).matches(&b));
    }

    #[test]
    fn finish_time_comparison() {
        let d = NaiveDate::from_ymd_opt(2020, 1, 6).unwrap();
        let b = booking("mina", Room::OneA, d, 9.0, 10.0);
        assert!(BookingFilter::new().finish(Cmp::Ge(10.0)).matches(&b));
        assert!(!BookingFilter::new().finish(Cmp::Ge(10.5)).matches(&b));
        assert!(BookingFilter::new().start(Cmp::Lt(9.5)).matches(&b));
    }
}
