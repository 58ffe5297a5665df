use crate::model::{DayState, Hours, Room};

use super::slots::expand_slots;

/// Flattened occupied slot start times for one (room, owner) on one date.
///
/// Bookings come out in start-time order and each expands into its slots in
/// sequence. Display-only, so no deduplication: overlapping bookings (which
/// validation forbids anyway) would simply repeat slots.
pub fn day_occupancy(day: &DayState, room: Room, owner: &str, step: Hours) -> Vec<Hours> {
    let mut slots = Vec::new();
    for b in day
        .bookings
        .iter()
        .filter(|b| b.room == room && b.owner == owner)
    {
        slots.extend(expand_slots(b.times.start, b.times.end, step));
    }
    slots
}

/// Total booked duration per room on one date, in the order given.
/// Pure aggregate for the dashboard's proportional display.
pub fn day_room_load(day: &DayState, rooms: &[Room]) -> Vec<Hours> {
    rooms
        .iter()
        .map(|room| {
            day.bookings
                .iter()
                .filter(|b| b.room == *room)
                .map(|b| b.times.duration_hours())
                .sum()
        })
        .collect()
}
