use crate::data::Period;
use crate::hash::stable_hash;

/// Whether a candidate seeded with `seed_hash` occupies its slot.
///
/// `threshold` is out of 10: a threshold of 4 schedules roughly 40% of candidates.
pub fn is_scheduled(seed_hash: u32, threshold: u32) -> bool {
    seed_hash % 10 < threshold
}

/// Cosmetic room label for a course taught in `period`.
///
/// Labels are not a booking system: two views may hand out the same room for
/// the same slot. Oversized bases saturate at `u32::MAX`.
pub fn assign_room(course_id: &str, period: Period, base_offset: u32) -> String {
    let room = base_offset
        .saturating_add((stable_hash(course_id) % 10) * 10)
        .saturating_add(period);
    format!("Room {}", room)
}
