use chrono::{Duration, NaiveDate};
use ulid::Ulid;

use crate::model::{Booking, Hours, Room};

use super::occupancy::{day_occupancy, day_room_load};
use super::store::{BookingFilter, Cmp};
use super::Scheduler;

impl Scheduler {
    /// Occupied slot start times for one (room, owner), per weekday of the
    /// displayed week — Monday..Friday from `start_day`.
    pub fn week_occupancy(
        &self,
        room: Room,
        owner: &str,
        start_day: NaiveDate,
    ) -> [Vec<Hours>; 5] {
        std::array::from_fn(|i| {
            let date = start_day + Duration::days(i as i64);
            match self.day(date) {
                Some(day) => day_occupancy(&day.read(), room, owner, self.config.slot_step),
                None => Vec::new(),
            }
        })
    }

    /// Total booked hours per room on `date`, in the order of `rooms`.
    /// Dashboard callers pass `Room::ALL`.
    pub fn room_load(&self, date: NaiveDate, rooms: &[Room]) -> Vec<Hours> {
        match self.day(date) {
            Some(day) => day_room_load(&day.read(), rooms),
            None => vec![0.0; rooms.len()],
        }
    }

    pub fn get_booking(&self, id: Ulid) -> Option<Booking> {
        let (_, day) = self.resolve_booking(id).ok()?;
        let guard = day.read();
        guard.booking(id).cloned()
    }

    /// Run a filter over the whole table, sorted by date then start time.
    /// A date-equality filter only touches its shard.
    pub fn query(&self, filter: &BookingFilter) -> Vec<Booking> {
        let mut out = Vec::new();
        if let Some(Cmp::Eq(date)) = filter.date {
            if let Some(day) = self.day(date) {
                let guard = day.read();
                out.extend(guard.bookings.iter().filter(|b| filter.matches(b)).cloned());
            }
        } else {
            for entry in self.days.iter() {
                let guard = entry.value().read();
                out.extend(guard.bookings.iter().filter(|b| filter.matches(b)).cloned());
            }
        }
        sort_bookings(&mut out);
        out
    }

    /// A user's still-relevant bookings: future dates, plus today's whose
    /// finish time hasn't passed yet. Sorted by date then start time.
    pub fn my_bookings(&self, owner: &str, today: NaiveDate, now: Hours) -> Vec<Booking> {
        let future = BookingFilter::new().owner(owner).date(Cmp::Gt(today));
        let today_live = BookingFilter::new()
            .owner(owner)
            .date(Cmp::Eq(today))
            .finish(Cmp::Ge(now));
        let mut out = self.query(&future);
        out.extend(self.query(&today_live));
        sort_bookings(&mut out);
        out
    }
}

fn sort_bookings(bookings: &mut [Booking]) {
    bookings.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then(a.times.start.total_cmp(&b.times.start))
    });
}
