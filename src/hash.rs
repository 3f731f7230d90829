/// Deterministic string hash used to seed every slot decision.
///
/// Runs the `h = h * 31 + c` recurrence over the UTF-16 code units of
/// `input`, wrapping to a signed 32-bit value at every step, and returns the
/// magnitude of the result. The output is stable across runs and platforms.
pub fn stable_hash(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0i32, |h, c| h.wrapping_mul(31).wrapping_add(i32::from(c)))
        .unsigned_abs()
}
