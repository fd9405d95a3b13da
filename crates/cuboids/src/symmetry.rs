//! Net equivalence under the eight symmetries of a rectangle.
//!
//! Two nets are the same net when their occupancy patterns (occupied vs.
//! empty; ids and rotations ignored) agree under a rotation by 0°, 90°,
//! 180° or 270°, optionally mirrored.
//!
//! Model
//! - Equal shapes (`rows × cols`): test identity, 180°, and the two mirrors
//!   in one pass, one accumulator per candidate.
//! - Transposed shapes: test 90°, 270°, and the two transposing mirrors in
//!   one pass.
//! - Square shapes are both equal and transposed, so both passes may run.
//! - Any other shape pair is unequal.
//! - The pass stops as soon as every candidate has failed.
//!
//! There is no hash or canonical key. Uniqueness checks elsewhere compare
//! against every stored net with `equivalent`.

use crate::net::{Layout, Net};

/// `true` if `a` and `b` are the same net up to rotation and mirroring.
pub fn equivalent(a: &Net, b: &Net) -> bool {
    equivalent_layouts(a.layout(), b.layout())
}

/// Layout-level form of [`equivalent`].
pub fn equivalent_layouts(a: &Layout, b: &Layout) -> bool {
    let (a_rows, a_cols) = a.shape();
    let (b_rows, b_cols) = b.shape();
    let aligned = (a_rows, a_cols) == (b_rows, b_cols);
    let transposed = (a_rows, a_cols) == (b_cols, b_rows);
    // Square layouts match both shape tests and need all eight candidates.
    (aligned && check_aligned(a, b)) || (transposed && check_transposed(a, b))
}

#[inline]
fn same(a: &Layout, ai: (usize, usize), b: &Layout, bi: (usize, usize)) -> bool {
    a[ai].occupied() == b[bi].occupied()
}

/// Candidates: identity, 180°, horizontal mirror, vertical mirror.
fn check_aligned(a: &Layout, b: &Layout) -> bool {
    let (rows, cols) = a.shape();
    let mut candidates = [true; 4];
    for i in 0..rows {
        for j in 0..cols {
            let (mi, mj) = (rows - i - 1, cols - j - 1);
            candidates[0] &= same(a, (i, j), b, (i, j));
            candidates[1] &= same(a, (i, j), b, (mi, mj));
            candidates[2] &= same(a, (i, j), b, (i, mj));
            candidates[3] &= same(a, (i, j), b, (mi, j));
            if !candidates.iter().any(|&c| c) {
                return false;
            }
        }
    }
    true
}

/// Candidates: 90°, 270°, and the two diagonal mirrors. `b` is `cols × rows`.
fn check_transposed(a: &Layout, b: &Layout) -> bool {
    let (rows, cols) = a.shape();
    let mut candidates = [true; 4];
    for i in 0..rows {
        for j in 0..cols {
            let (mi, mj) = (rows - i - 1, cols - j - 1);
            candidates[0] &= same(a, (i, j), b, (mj, i));
            candidates[1] &= same(a, (i, j), b, (j, mi));
            candidates[2] &= same(a, (i, j), b, (mj, mi));
            candidates[3] &= same(a, (i, j), b, (j, i));
            if !candidates.iter().any(|&c| c) {
                return false;
            }
        }
    }
    true
}
