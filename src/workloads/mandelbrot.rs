//! Escape-time fractal evaluation.

use num_complex::Complex64;

/// Iteration stops once `|z|` reaches this radius.
const ESCAPE_RADIUS: f64 = 2.0;

/// Count applications of `z ← z² + c`, starting from `z = 0`, before `|z|`
/// reaches the escape radius or `max_iter` is hit.
pub fn escape_time(c: Complex64, max_iter: u32) -> u32 {
    let mut z = Complex64::new(0.0, 0.0);
    let mut iter = 0;
    while z.norm() < ESCAPE_RADIUS && iter < max_iter {
        z = z * z + c;
        iter += 1;
    }
    iter
}

/// Map a pixel onto the viewing window `[-2, 2)` centred on the origin.
///
/// Both axes are scaled by `width`, so a non-square grid keeps square pixels.
pub fn pixel_to_point(x: usize, y: usize, width: usize, height: usize) -> Complex64 {
    let w = width as f64;
    let h = height as f64;
    Complex64::new(
        (x as f64 - w / 2.0) * 4.0 / w,
        (y as f64 - h / 2.0) * 4.0 / w,
    )
}

/// Sum of escape-time counts over a `width × height` grid.
pub fn mandelbrot(width: usize, height: usize, max_iter: u32) -> u64 {
    let mut sum = 0u64;
    for y in 0..height {
        for x in 0..width {
            let c = pixel_to_point(x, y, width, height);
            sum += u64::from(escape_time(c, max_iter));
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_never_escape_when_point_is_origin() {
        assert_eq!(escape_time(Complex64::new(0.0, 0.0), 1000), 1000);
        assert_eq!(escape_time(Complex64::new(-1.0, 0.0), 250), 250);
    }

    #[test]
    fn should_escape_after_one_step_when_point_is_far_outside() {
        assert_eq!(escape_time(Complex64::new(2.0, 2.0), 1000), 1);
    }

    #[test]
    fn should_map_centre_pixel_to_origin_when_width_is_even() {
        let c = pixel_to_point(400, 400, 800, 800);
        assert_eq!(c, Complex64::new(0.0, 0.0));
        assert_eq!(escape_time(c, 1000), 1000);
    }

    #[test]
    fn should_scale_both_axes_by_width() {
        let c = pixel_to_point(0, 0, 4, 2);
        assert_eq!(c, Complex64::new(-2.0, -1.0));
    }

    #[test]
    fn should_sum_escape_counts_over_grid() {
        // (0,0) -> -2-2i, (1,0) -> -2i, (0,1) -> -2: each escapes after one step.
        // (1,1) -> origin, never escapes.
        assert_eq!(mandelbrot(2, 2, 10), 1 + 1 + 1 + 10);
    }

    #[test]
    fn should_return_zero_when_grid_is_empty() {
        assert_eq!(mandelbrot(0, 0, 1000), 0);
    }
}
