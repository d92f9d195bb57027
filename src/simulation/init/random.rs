/// Xorshift32 step. A zero state would stick at zero, so it is bumped first.
#[inline]
pub(crate) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    if x == 0 {
        x = 0x9E37_79B9;
    }
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform float in `[min, max]`.
#[inline]
pub(crate) fn rand_range(state: &mut u32, min: f32, max: f32) -> f32 {
    let unit = xorshift32(state) as f32 / u32::MAX as f32;
    min + unit * (max - min)
}
