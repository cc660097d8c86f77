/// Mathematical modulo: the result is always in `[0, n)` for positive `n`, including for
/// negative dividends (`mod_int(-1, 3) == 2`).
///
/// # Panics
///
/// Panics if `n == 0`, like the `%` operator.
pub fn mod_int(a: i64, n: i64) -> i64 {
    a.rem_euclid(n)
}

pub(crate) fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Least common multiple, `None` on overflow. `lcm(0, x) == 0`.
pub(crate) fn lcm_u64(a: u64, b: u64) -> Option<u64> {
    if a == 0 || b == 0 {
        return Some(0);
    }
    (a / gcd_u64(a, b)).checked_mul(b)
}

pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
