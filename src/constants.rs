//! Sizes and move sets shared across the coordinate, move-table, pruning-table
//! and solver modules.

use crate::moves::Move;
use crate::moves::Move::*;

/// Number of elementary moves (6 faces x {quarter, half, counter-quarter}).
pub const N_MOVE: usize = 18;

/// 3^7: corner orientations with a fixed sum (last corner's twist is implied).
pub const N_TWIST: usize = 2187;
/// 2^11: edge orientations with a fixed sum (last edge's flip is implied).
pub const N_FLIP: usize = 2048;
/// C(12,4): ways to pick the four UD-slice edge slots among twelve.
pub const N_SLICE: usize = 495;
/// 8!: corner permutations.
pub const N_CORNERS: usize = 40320;
/// 4!: permutations of the four UD-slice edges among themselves.
pub const N_EDGE4: usize = 24;
/// 8!: permutations of the eight non-slice edges among themselves.
pub const N_EDGE8: usize = 40320;

/// Phase 1 search ceiling (moves to reduce into `<U,D,R2,L2,F2,B2>`).
pub const D0: usize = 12;
/// Phase 2 search ceiling (moves to finish inside the subgroup).
pub const D1: usize = 18;
/// Overall search ceiling.
pub const DS: usize = D0 + D1;

/// All eighteen moves, phase 1's generator set.
#[rustfmt::skip]
pub const EM0: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

/// The ten moves that fix the UD-slice, phase 2's generator set:
/// quarter and half turns of U/D, half turns of R/F/L/B.
#[rustfmt::skip]
pub const EM1: [Move; 10] = [
    U, U2, U3, R2, F2, D, D2, D3, L2, B2,
];
