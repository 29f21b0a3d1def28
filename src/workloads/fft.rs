//! Radix-2 Cooley-Tukey FFT, iterative and in place.

use anyhow::{ensure, Result};
use num_complex::Complex64;
use std::f64::consts::PI;

const CHECKSUM_MODULUS: u64 = 1_000_000;

/// Reorder `x` so element `i` lands at the bit-reversed index of `i`.
///
/// The reversed counter `j` is advanced incrementally: clear the leading set
/// bits from the top down, then set the first clear one.
fn bit_reverse_permute(x: &mut [Complex64]) {
    let n = x.len();
    let mut j = 0;
    for i in 0..n {
        if i < j {
            x.swap(i, j);
        }
        let mut m = n / 2;
        while m >= 1 && j >= m {
            j -= m;
            m /= 2;
        }
        j += m;
    }
}

/// Forward transform of `x` in place.
///
/// Fails when the length is not a power of two; the stage count and the
/// permutation both assume it.
pub fn fft_in_place(x: &mut [Complex64]) -> Result<()> {
    let n = x.len();
    ensure!(
        n.is_power_of_two(),
        "FFT length must be a power of two, got {}",
        n
    );

    bit_reverse_permute(x);

    for s in 1..=n.trailing_zeros() {
        let m = 1usize << s;
        let half = m / 2;
        let wm = Complex64::from_polar(1.0, -2.0 * PI / m as f64);
        for k in (0..n).step_by(m) {
            let mut w = Complex64::new(1.0, 0.0);
            for j in 0..half {
                let t = w * x[k + j + half];
                let u = x[k + j];
                x[k + j] = u + t;
                x[k + j + half] = u - t;
                w *= wm;
            }
        }
    }
    Ok(())
}

/// Inverse transform in place, scaled by `1/n`.
pub fn ifft_in_place(x: &mut [Complex64]) -> Result<()> {
    for v in x.iter_mut() {
        *v = v.conj();
    }
    fft_in_place(x)?;
    let scale = 1.0 / x.len() as f64;
    for v in x.iter_mut() {
        *v = v.conj() * scale;
    }
    Ok(())
}

/// Sawtooth input: sample `i` is `(i mod 256, 0)`.
pub fn sawtooth(n: usize) -> Vec<Complex64> {
    (0..n)
        .map(|i| Complex64::new((i % 256) as f64, 0.0))
        .collect()
}

/// Transform a sawtooth of length `n` and return the truncated sum of
/// magnitudes modulo 1,000,000.
pub fn fft_checksum(n: usize) -> Result<u64> {
    let mut x = sawtooth(n);
    fft_in_place(&mut x)?;
    let magnitude: f64 = x.iter().map(|v| v.norm()).sum();
    Ok((magnitude as u64) % CHECKSUM_MODULUS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: &[Complex64], b: &[Complex64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b) {
            assert!((x - y).norm() < 1e-9, "{} != {}", x, y);
        }
    }

    #[test]
    fn should_leave_input_unchanged_when_length_is_one() {
        let mut x = vec![Complex64::new(3.5, -1.0)];
        fft_in_place(&mut x).unwrap();
        assert_eq!(x, vec![Complex64::new(3.5, -1.0)]);
    }

    #[test]
    fn should_reject_length_when_not_power_of_two() {
        let err = fft_checksum(6).unwrap_err();
        assert!(err.to_string().contains("power of two"));
        assert!(fft_checksum(0).is_err());
    }

    #[test]
    fn should_permute_into_bit_reversed_order() {
        let mut x: Vec<_> = (0..8).map(|i| Complex64::new(i as f64, 0.0)).collect();
        bit_reverse_permute(&mut x);
        let order: Vec<_> = x.iter().map(|v| v.re as usize).collect();
        assert_eq!(order, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn should_spread_impulse_into_flat_spectrum() {
        let mut x = vec![Complex64::new(0.0, 0.0); 8];
        x[0] = Complex64::new(1.0, 0.0);
        fft_in_place(&mut x).unwrap();
        assert_close(&x, &[Complex64::new(1.0, 0.0); 8]);
    }

    #[test]
    fn should_match_direct_dft_when_length_is_four() {
        let mut x = sawtooth(4);
        fft_in_place(&mut x).unwrap();
        let expected = [
            Complex64::new(6.0, 0.0),
            Complex64::new(-2.0, 2.0),
            Complex64::new(-2.0, 0.0),
            Complex64::new(-2.0, -2.0),
        ];
        assert_close(&x, &expected);
        // 6 + 2√2 + 2 + 2√2 = 13.65...
        assert_eq!(fft_checksum(4).unwrap(), 13);
    }

    #[test]
    fn should_reproduce_input_after_round_trip() {
        let original: Vec<_> = (0..64)
            .map(|i| Complex64::new((i * 7 % 13) as f64, (i % 5) as f64 - 2.0))
            .collect();
        let mut x = original.clone();
        fft_in_place(&mut x).unwrap();
        ifft_in_place(&mut x).unwrap();
        assert_close(&x, &original);
    }

    #[test]
    fn should_produce_checksum_below_modulus_at_reference_size() {
        assert!(fft_checksum(2048).unwrap() < CHECKSUM_MODULUS);
    }
}
