//! Coordinate encodings of the cubie model: six small integers that
//! together determine a cube state, chosen so each is cheap to look up in a
//! move/pruning table.
//!
//! `twist`/`flip` encode corner/edge orientation, `slice` encodes which four
//! of the twelve edge slots hold the UD-slice edges (FR/FL/BL/BR), `corner`
//! encodes the corner permutation, and `edge4`/`edge8` encode the slice-edge
//! and non-slice-edge permutations respectively -- the latter two are only
//! meaningful once `slice` is zero, i.e. in phase 2.

use crate::algebra::{comb_rank, comb_unrank, CArray, Perm};
use crate::cubie::CubieCube;

/// The six coordinates of a cube state. `corner`/`edge4`/`edge8` are only
/// meaningful once `slice == 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coord {
    pub twist: u16,
    pub flip: u16,
    pub slice: u16,
    pub corner: u16,
    pub edge4: u16,
    pub edge8: u16,
}

impl Coord {
    pub fn solved() -> Coord {
        Coord::default()
    }

    pub fn from_cubie(cc: &CubieCube) -> Coord {
        Coord {
            twist: co2twist(&cc.co),
            flip: eo2flip(&cc.eo),
            slice: ep2slice(&cc.ep),
            corner: cp2corner(&cc.cp),
            edge4: ep2edge4(&cc.ep),
            edge8: ep2edge8(&cc.ep),
        }
    }

    /// Whether phase 1 has reduced the cube into `<U,D,R2,L2,F2,B2>`.
    pub fn is_phase1_done(&self) -> bool {
        self.twist == 0 && self.flip == 0 && self.slice == 0
    }

    /// Whether the cube is fully solved.
    pub fn is_solved(&self) -> bool {
        self.is_phase1_done() && self.corner == 0 && self.edge4 == 0 && self.edge8 == 0
    }
}

/// `co -> twist`: the first seven twists read as a big-endian base-3 number
/// (the eighth is implied by the sum-to-zero-mod-3 invariant).
pub fn co2twist(co: &CArray<3, 8>) -> u16 {
    let mut twist: u32 = 0;
    for &digit in co.0.iter().take(7) {
        twist = twist * 3 + digit as u32;
    }
    twist as u16
}

/// Inverse of [`co2twist`]; the eighth entry is reconstructed to zero the sum.
pub fn twist2co(twist: u16) -> CArray<3, 8> {
    let mut x = [0u8; 8];
    let mut t = twist as u32;
    let mut sum = 0u32;
    for i in (0..7).rev() {
        x[i] = (t % 3) as u8;
        t /= 3;
        sum += x[i] as u32;
    }
    x[7] = ((3 - sum % 3) % 3) as u8;
    CArray(x)
}

/// `eo -> flip`: same scheme as [`co2twist`], mod 2 over eleven free digits.
pub fn eo2flip(eo: &CArray<2, 12>) -> u16 {
    let mut flip: u32 = 0;
    for &digit in eo.0.iter().take(11) {
        flip = flip * 2 + digit as u32;
    }
    flip as u16
}

/// Inverse of [`eo2flip`].
pub fn flip2eo(flip: u16) -> CArray<2, 12> {
    let mut x = [0u8; 12];
    let mut t = flip as u32;
    let mut sum = 0u32;
    for i in (0..11).rev() {
        x[i] = (t % 2) as u8;
        t /= 2;
        sum += x[i] as u32;
    }
    x[11] = (sum % 2) as u8;
    CArray(x)
}

/// `cp -> corner`: Lehmer rank of the corner permutation, `[0, 40320)`.
pub fn cp2corner(cp: &Perm<8>) -> u16 {
    cp.rank() as u16
}

/// Inverse of [`cp2corner`].
pub fn corner2cp(corner: u16) -> Perm<8> {
    Perm::from_rank(corner as usize)
}

/// `ep -> slice`: combinatorial rank of the four slots (of twelve) that
/// currently hold a UD-slice edge (edge index 8..=11, i.e. FR/FL/BL/BR).
pub fn ep2slice(ep: &Perm<12>) -> u16 {
    let mut positions = [0u8; 4];
    let mut k = 0;
    for (i, &v) in ep.0.iter().enumerate() {
        if v >= 8 {
            positions[k] = i as u8;
            k += 1;
        }
    }
    debug_assert_eq!(k, 4);
    comb_rank(&positions) as u16
}

/// Partial inverse of [`ep2slice`]: places the slice edges (FR/FL/BL/BR, in
/// that canonical order) into their slots and the non-slice edges (in
/// UR..DB order) into the rest. This alone does not recover the *identity*
/// of which slice/non-slice edge is where -- only [`see2ep`], combining
/// `slice`, `edge4` and `edge8`, reconstructs the true permutation.
pub fn slice2ep(slice: u16) -> Perm<12> {
    let positions: [u8; 4] = comb_unrank::<12, 4>(slice as usize);
    let mut x = [0u8; 12];
    let mut is_slice_slot = [false; 12];
    for &p in &positions {
        is_slice_slot[p as usize] = true;
    }
    let mut slice_edge = 8u8;
    let mut other_edge = 0u8;
    for i in 0..12 {
        if is_slice_slot[i] {
            x[i] = slice_edge;
            slice_edge += 1;
        } else {
            x[i] = other_edge;
            other_edge += 1;
        }
    }
    Perm(x)
}

/// `ep -> edge4`: Lehmer rank of the permutation of the four UD-slice edges
/// among slots 8..=11. Only meaningful once `slice == 0`.
pub fn ep2edge4(ep: &Perm<12>) -> u16 {
    let mut sub = [0u8; 4];
    for i in 0..4 {
        sub[i] = ep.0[8 + i] - 8;
    }
    Perm(sub).rank() as u16
}

/// Partial inverse of [`ep2edge4`]: fixes slots 0..=7 to identity.
pub fn edge42ep(edge4: u16) -> Perm<12> {
    let sub = Perm::<4>::from_rank(edge4 as usize);
    let mut x = [0u8; 12];
    for i in 0..8 {
        x[i] = i as u8;
    }
    for i in 0..4 {
        x[8 + i] = 8 + sub.0[i];
    }
    Perm(x)
}

/// `ep -> edge8`: Lehmer rank of the permutation of the eight non-slice
/// edges among slots 0..=7. Only meaningful once `slice == 0`.
pub fn ep2edge8(ep: &Perm<12>) -> u16 {
    let mut sub = [0u8; 8];
    sub.copy_from_slice(&ep.0[0..8]);
    Perm(sub).rank() as u16
}

/// Partial inverse of [`ep2edge8`]: fixes slots 8..=11 to identity.
pub fn edge82ep(edge8: u16) -> Perm<12> {
    let sub = Perm::<8>::from_rank(edge8 as usize);
    let mut x = [0u8; 12];
    x[0..8].copy_from_slice(&sub.0);
    for i in 0..4 {
        x[8 + i] = 8 + i as u8;
    }
    Perm(x)
}

/// Total reconstruction of `ep` from all three edge coordinates: unlike
/// [`slice2ep`]/[`edge42ep`]/[`edge82ep`] alone, this recovers the true
/// edge permutation.
pub fn see2ep(slice: u16, edge4: u16, edge8: u16) -> Perm<12> {
    let positions: [u8; 4] = comb_unrank::<12, 4>(slice as usize);
    let slice_perm = Perm::<4>::from_rank(edge4 as usize);
    let other_perm = Perm::<8>::from_rank(edge8 as usize);

    let mut is_slice_slot = [false; 12];
    for &p in &positions {
        is_slice_slot[p as usize] = true;
    }

    let mut x = [0u8; 12];
    let mut si = 0usize;
    let mut oi = 0usize;
    for i in 0..12 {
        if is_slice_slot[i] {
            x[i] = 8 + slice_perm.0[si];
            si += 1;
        } else {
            x[i] = other_perm.0[oi];
            oi += 1;
        }
    }
    Perm(x)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;

    #[test]
    fn solved_cube_has_all_zero_coordinates() {
        let c = Coord::from_cubie(&SOLVED_CUBIE_CUBE);
        assert_eq!(c, Coord::solved());
        assert!(c.is_solved());
    }

    #[test]
    fn twist_roundtrips_over_full_range() {
        for t in 0..crate::constants::N_TWIST as u16 {
            let co = twist2co(t);
            assert_eq!(co.sum_mod(), 0);
            assert_eq!(co2twist(&co), t);
        }
    }

    #[test]
    fn flip_roundtrips_over_full_range() {
        for f in 0..crate::constants::N_FLIP as u16 {
            let eo = flip2eo(f);
            assert_eq!(eo.sum_mod(), 0);
            assert_eq!(eo2flip(&eo), f);
        }
    }

    #[test]
    fn corner_roundtrips_over_full_range() {
        for c in [0u16, 1, 40319, 12345] {
            assert_eq!(cp2corner(&corner2cp(c)), c);
        }
    }

    #[test]
    fn see2ep_is_total_and_consistent_with_ep2slice_edge4_edge8() {
        for slice in [0u16, 1, 100, 494] {
            for edge4 in [0u16, 5, 23] {
                for edge8 in [0u16, 1000, 40319] {
                    let ep = see2ep(slice, edge4, edge8);
                    assert_eq!(ep2slice(&ep), slice);
                    assert_eq!(ep2edge4(&ep), edge4);
                    assert_eq!(ep2edge8(&ep), edge8);
                }
            }
        }
    }

    #[test]
    fn slice2ep_membership_matches_ep2slice() {
        for slice in 0..crate::constants::N_SLICE as u16 {
            let ep = slice2ep(slice);
            assert_eq!(ep2slice(&ep), slice);
        }
    }
}
