//! Multi-scalar multiplication by bucket accumulation (Pippenger).
//!
//! Scalars are split into `c`-bit windows. Within a window every point is
//! added to the bucket indexed by its digit, the buckets are folded with a
//! running sum, and the partial result is shifted by `c` doublings shared
//! across all terms.

use crate::Curve;
use elliptic_curve::{ff::PrimeField, group::Group};
use tracing::{debug, debug_span};

/// Window width used below [`LARGE_INPUT`] terms.
const SMALL_WINDOW: usize = 3;

/// Term count from which the window grows with `ln n`.
const LARGE_INPUT: usize = 32;

/// Window width for `n` terms.
pub(crate) fn window_size(n: usize) -> usize {
    if n < LARGE_INPUT {
        SMALL_WINDOW
    } else {
        (n as f64).ln() as usize + 2
    }
}

/// Digit of `width` bits starting at bit `start` of a big-endian encoding.
fn digit(be_bytes: &[u8], start: usize, width: usize) -> usize {
    let bits = be_bytes.len() * 8;
    (0..width)
        .map(|i| start + i)
        .take_while(|&bit| bit < bits)
        .enumerate()
        .fold(0, |acc, (i, bit)| {
            let byte = be_bytes[be_bytes.len() - 1 - bit / 8];
            acc | ((((byte >> (bit % 8)) & 1) as usize) << i)
        })
}

/// `Σ scalars[i] · points[i]`. Both slices must have the same length.
pub(crate) fn pippenger<C: Curve>(points: &[C::Point], scalars: &[C::Scalar]) -> C::Point {
    debug_assert_eq!(points.len(), scalars.len());

    let n = points.len();
    let _span = debug_span!("msm", curve = C::NAME, terms = n).entered();
    if n == 0 {
        return C::Point::identity();
    }

    let reprs: Vec<_> = scalars.iter().map(PrimeField::to_repr).collect();
    let bits = C::SCALAR_SIZE * 8;
    let c = window_size(n);
    let windows = bits.div_ceil(c);
    debug!(window = c, windows, "pippenger");

    let mut buckets = vec![C::Point::identity(); (1 << c) - 1];
    let mut acc = C::Point::identity();

    for w in (0..windows).rev() {
        for _ in 0..c {
            acc = acc.double();
        }

        buckets.fill(C::Point::identity());
        for (point, repr) in points.iter().zip(&reprs) {
            let d = digit(repr.as_ref(), w * c, c);
            if d != 0 {
                buckets[d - 1] += point;
            }
        }

        let mut running = C::Point::identity();
        let mut window_sum = C::Point::identity();
        for bucket in buckets.iter().rev() {
            running += bucket;
            window_sum += running;
        }

        acc += window_sum;
    }

    acc
}

#[cfg(test)]
mod tests {
    use super::{digit, window_size};

    #[test]
    fn digits_are_read_little_endian() {
        let bytes = [0x00, 0x00, 0b1010_0000, 0b0000_0110];
        assert_eq!(digit(&bytes, 0, 3), 0b110);
        assert_eq!(digit(&bytes, 1, 2), 0b11);
        assert_eq!(digit(&bytes, 13, 3), 0b101);
        // Windows past the top bit are truncated.
        assert_eq!(digit(&bytes, 30, 4), 0);
    }

    #[test]
    fn window_grows_with_input() {
        assert_eq!(window_size(1), 3);
        assert_eq!(window_size(31), 3);
        assert_eq!(window_size(32), 5);
        assert_eq!(window_size(1 << 10), 8);
    }
}
