//! Naive dense matrix multiplication.

/// Fill value of the left operand.
pub const A_FILL: f64 = 1.1;
/// Fill value of the right operand.
pub const B_FILL: f64 = 2.2;

const CHECKSUM_MODULUS: u64 = 1_000_000;

/// Square row-major matrix of `f64`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    n: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// An `n × n` matrix with every entry set to `value`.
    pub fn filled(n: usize, value: f64) -> Self {
        Self {
            n,
            data: vec![value; n * n],
        }
    }

    pub fn dim(&self) -> usize {
        self.n
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.n + col]
    }

    /// `self · rhs` with the textbook i-j-k loop, accumulating straight into
    /// the output cell. No blocking or transposition.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        assert_eq!(self.n, rhs.n, "matrix dimensions must match");
        let n = self.n;
        let mut out = Matrix::filled(n, 0.0);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    out.data[i * n + j] += self.data[i * n + k] * rhs.data[k * n + j];
                }
            }
        }
        out
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Multiply two constant-filled `n × n` matrices and return the truncated sum
/// of the product modulo 1,000,000.
pub fn matmul(n: usize) -> u64 {
    let a = Matrix::filled(n, A_FILL);
    let b = Matrix::filled(n, B_FILL);
    let c = a.multiply(&b);
    (c.sum() as u64) % CHECKSUM_MODULUS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fill_every_entry_when_built() {
        let m = Matrix::filled(3, 1.5);
        assert_eq!(m.dim(), 3);
        assert_eq!(m.get(2, 1), 1.5);
        assert_eq!(m.sum(), 13.5);
    }

    #[test]
    fn should_compute_each_entry_as_row_dot_column() {
        let c = Matrix::filled(2, A_FILL).multiply(&Matrix::filled(2, B_FILL));
        for i in 0..2 {
            for j in 0..2 {
                assert!((c.get(i, j) - 4.84).abs() < 1e-9);
            }
        }
        assert!((c.sum() - 19.36).abs() < 1e-9);
    }

    #[test]
    fn should_truncate_checksum_when_n_is_two() {
        assert_eq!(matmul(2), 19);
    }

    #[test]
    fn should_wrap_checksum_at_modulus() {
        // 256 * 256 entries of 256 * 2.42 sum to a little over 40 million.
        let checksum = matmul(256);
        assert!(checksum < CHECKSUM_MODULUS);
    }

    #[test]
    #[should_panic(expected = "dimensions must match")]
    fn should_panic_when_dimensions_differ() {
        Matrix::filled(2, 1.0).multiply(&Matrix::filled(3, 1.0));
    }
}
