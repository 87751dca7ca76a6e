//! Dense linear algebra for the small normal-equation systems of the models

/// Row-major square matrix
#[derive(Debug, Clone)]
pub(crate) struct SquareMatrix {
    size: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    pub(crate) fn zeros(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    pub(crate) fn add(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.size + col] += value;
    }
}

/// Solve `a * x = b` for symmetric positive definite `a` by Cholesky factorization
///
/// Returns `None` when `a` is not positive definite or `b` has the wrong length.
pub(crate) fn solve_spd(a: &SquareMatrix, b: &[f64]) -> Option<Vec<f64>> {
    let n = a.size();
    if b.len() != n {
        return None;
    }

    // Lower-triangular factor, row-major
    let mut l = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..=i {
            let mut sum = a.get(i, j);
            for k in 0..j {
                sum -= l[i * n + k] * l[j * n + k];
            }
            if i == j {
                if sum <= 0.0 || !sum.is_finite() {
                    return None;
                }
                l[i * n + i] = sum.sqrt();
            } else {
                l[i * n + j] = sum / l[j * n + j];
            }
        }
    }

    // Forward substitution: L y = b
    let mut y = vec![0.0; n];
    for i in 0..n {
        let mut sum = b[i];
        for k in 0..i {
            sum -= l[i * n + k] * y[k];
        }
        y[i] = sum / l[i * n + i];
    }

    // Back substitution: L^T x = y
    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let mut sum = y[i];
        for k in (i + 1)..n {
            sum -= l[k * n + i] * x[k];
        }
        x[i] = sum / l[i * n + i];
    }
    Some(x)
}
