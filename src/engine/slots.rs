use crate::model::Hours;

/// Restartable iterator over the slot start times covering `[start, finish)`.
///
/// Slot `k` starts at `start + k * step`, computed by index so long
/// expansions don't accumulate float drift. Cheap to clone; calendar views
/// re-derive it once per booking.
#[derive(Debug, Clone)]
pub struct Slots {
    start: Hours,
    finish: Hours,
    step: Hours,
    next: u32,
}

/// Expand a half-open interval into its slot start times.
///
/// Empty when `start >= finish`. A non-positive (or NaN) step also yields
/// nothing rather than looping forever.
pub fn expand_slots(start: Hours, finish: Hours, step: Hours) -> Slots {
    let finish = if step > 0.0 { finish } else { start };
    Slots {
        start,
        finish,
        step,
        next: 0,
    }
}

impl Iterator for Slots {
    type Item = Hours;

    fn next(&mut self) -> Option<Hours> {
        let slot = self.start + f64::from(self.next) * self.step;
        if slot < self.finish {
            self.next += 1;
            Some(slot)
        } else {
            None
        }
    }
}
