use std::sync::Arc;

use chrono::NaiveDate;

use studyroom::engine::{booking_date_window, week_window};
use studyroom::{Room, Scheduler, SchedulerConfig, SchedulerError, TimeRange};

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn full_reservation_flow() {
    init_tracing();
    let sched = Scheduler::new();

    // Wednesday 2020-01-08: the calendar shows the week of Monday the 6th.
    let today = d(2020, 1, 8);
    let window = week_window(today);
    assert_eq!(window.start_day, d(2020, 1, 6));
    assert_eq!(window.start_day_offset, -2);

    let (min_date, max_date) = booking_date_window(today);
    assert_eq!(min_date, today);
    assert_eq!(max_date, d(2020, 1, 22));

    // The pre-check passes, then the booking lands.
    sched
        .check("mina", Room::OneA, today, 9.0, 10.0)
        .expect("slot should be free");
    let id = sched.reserve("mina", Room::OneA, today, 9.0, 10.0).unwrap();

    // The calendar view for mina now shows the morning slots on Wednesday.
    let days = sched.week_occupancy(Room::OneA, "mina", window.start_day);
    assert_eq!(days[2], vec![9.0, 9.5]);
    assert!(days[0].is_empty() && days[1].is_empty());

    // Another user sees the conflict when pre-checking the same slot.
    let taken = sched.check("juno", Room::OneA, today, 9.5, 10.5);
    assert!(matches!(taken, Err(SchedulerError::Conflict(_))));

    // The dashboard aggregates one booked hour for room 1A.
    assert_eq!(sched.room_load(today, &Room::ALL), vec![1.0, 0.0, 0.0]);

    // Moving the booking to Thursday afternoon frees Wednesday morning.
    sched
        .update(id, Room::OneA, d(2020, 1, 9), 14.0, 15.5)
        .unwrap();
    assert_eq!(sched.room_load(today, &Room::ALL), vec![0.0, 0.0, 0.0]);
    let moved = sched.get_booking(id).unwrap();
    assert_eq!(moved.times, TimeRange::new(14.0, 15.5));

    // "My bookings" lists the moved reservation until it ends.
    let mine = sched.my_bookings("mina", today, 10.0);
    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].id, id);

    // Only the owner can cancel.
    assert!(matches!(
        sched.cancel(id, "juno"),
        Err(SchedulerError::NotOwner(_))
    ));
    sched.cancel(id, "mina").unwrap();
    assert!(sched.my_bookings("mina", today, 10.0).is_empty());
}

#[test]
fn custom_quota_is_enforced() {
    init_tracing();
    let sched = Scheduler::with_config(SchedulerConfig {
        daily_quota: 1,
        ..SchedulerConfig::default()
    });
    let date = d(2020, 1, 6);
    sched.reserve("mina", Room::OneA, date, 9.0, 10.0).unwrap();
    let second = sched.reserve("mina", Room::OneB, date, 11.0, 12.0);
    assert!(matches!(second, Err(SchedulerError::QuotaExceeded(1))));
}

#[test]
fn concurrent_reserves_serialize_per_date() {
    init_tracing();
    let sched = Arc::new(Scheduler::new());
    let date = d(2020, 1, 6);

    let mut handles = Vec::new();
    for i in 0..16 {
        let sched = sched.clone();
        handles.push(std::thread::spawn(move || {
            let owner = format!("user{i}");
            // Everyone wants the same Monday morning slot in 1A.
            sched.reserve(&owner, Room::OneA, date, 9.0, 10.0)
        }));
    }
    let outcomes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);

    // The surviving booking is intact and the room shows one booked hour.
    assert_eq!(sched.room_load(date, &Room::ALL), vec![1.0, 0.0, 0.0]);
}
