//! The cubie-level cube model: corner/edge permutations and orientations,
//! composed under the group law a real Rubik's cube obeys.

use std::fmt;

use crate::algebra::{CArray, Perm};

/// Corner positions/pieces, in the order the facelet and move tables share.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Corner {
    URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB,
}

/// Edge positions/pieces, in the order the facelet and move tables share.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Edge {
    UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR,
}

/// A cube state as a pair of permutations (which piece sits where) and a
/// pair of orientation vectors (how each piece is twisted/flipped there).
///
/// The group product `a * b` reads "the cube you get by first performing
/// the moves behind `b`, then the moves behind `a`": `cp = a.cp*b.cp`,
/// `co = a.co.act(b.cp) + b.co`, and symmetrically for `ep`/`eo`. This is
/// exactly the algebra `Perm`/`CArray` implement, so the group law here is a
/// one-line composition of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubieCube {
    pub cp: Perm<8>,
    pub co: CArray<3, 8>,
    pub ep: Perm<12>,
    pub eo: CArray<2, 12>,
}

pub const SOLVED_CUBIE_CUBE: CubieCube = CubieCube {
    cp: Perm([0, 1, 2, 3, 4, 5, 6, 7]),
    co: CArray([0, 0, 0, 0, 0, 0, 0, 0]),
    ep: Perm([0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]),
    eo: CArray([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
};

impl Default for CubieCube {
    fn default() -> Self {
        SOLVED_CUBIE_CUBE
    }
}

impl CubieCube {
    pub fn identity() -> Self {
        SOLVED_CUBIE_CUBE
    }

    /// Group product: apply `other` first, then `self`.
    pub fn mul(&self, other: &CubieCube) -> CubieCube {
        CubieCube {
            cp: self.cp * other.cp,
            co: self.co.act(&other.cp) + other.co,
            ep: self.ep * other.ep,
            eo: self.eo.act(&other.ep) + other.eo,
        }
    }

    pub fn inverse(&self) -> CubieCube {
        let cp_inv = self.cp.inverse();
        let ep_inv = self.ep.inverse();
        CubieCube {
            cp: cp_inv,
            co: -self.co.act(&cp_inv),
            ep: ep_inv,
            eo: -self.eo.act(&ep_inv),
        }
    }

    /// Whether this state is physically assemblable: corner and edge
    /// permutations share parity, and both orientation sums vanish.
    pub fn is_solvable(&self) -> bool {
        self.cp.parity() == self.ep.parity() && self.co.sum_mod() == 0 && self.eo.sum_mod() == 0
    }

    /// A uniformly random solvable cube, for scrambles and fuzz tests.
    pub fn randomize<R: rand::Rng + ?Sized>(rng: &mut R) -> CubieCube {
        loop {
            let cp = random_perm::<8, _>(rng);
            let ep = random_perm::<12, _>(rng);
            if cp.parity() != ep.parity() {
                continue;
            }
            let co = random_oriented::<3, 8, _>(rng);
            let eo = random_oriented::<2, 12, _>(rng);
            let cube = CubieCube { cp, co, ep, eo };
            debug_assert!(cube.is_solvable());
            return cube;
        }
    }
}

fn random_perm<const N: usize, R: rand::Rng + ?Sized>(rng: &mut R) -> Perm<N> {
    Perm::from_rank(rng.gen_range(0..crate::algebra::factorial(N)))
}

fn random_oriented<const M: usize, const L: usize, R: rand::Rng + ?Sized>(
    rng: &mut R,
) -> CArray<M, L> {
    let mut x = [0u8; L];
    let mut sum = 0u32;
    for slot in x.iter_mut().take(L - 1) {
        *slot = rng.gen_range(0..M as u8);
        sum += *slot as u32;
    }
    x[L - 1] = ((M as u32 - sum % M as u32) % M as u32) as u8;
    CArray(x)
}

impl fmt::Display for Corner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::U_MOVE;

    #[test]
    fn solved_cube_is_solvable() {
        assert!(SOLVED_CUBIE_CUBE.is_solvable());
    }

    #[test]
    fn identity_is_neutral() {
        let id = CubieCube::identity();
        assert_eq!(id.mul(&U_MOVE), U_MOVE);
        assert_eq!(U_MOVE.mul(&id), U_MOVE);
    }

    #[test]
    fn four_quarter_turns_restore_identity() {
        let mut c = CubieCube::identity();
        for _ in 0..4 {
            c = c.mul(&U_MOVE);
        }
        assert_eq!(c, CubieCube::identity());
    }

    #[test]
    fn inverse_undoes_a_move() {
        let inv = U_MOVE.inverse();
        assert_eq!(U_MOVE.mul(&inv), CubieCube::identity());
        assert_eq!(inv.mul(&U_MOVE), CubieCube::identity());
        assert!(inv.is_solvable());
    }

    #[test]
    fn move_cubes_are_solvable() {
        use crate::moves::{B_MOVE, D_MOVE, F_MOVE, L_MOVE, R_MOVE};
        for m in [U_MOVE, R_MOVE, F_MOVE, D_MOVE, L_MOVE, B_MOVE] {
            assert!(m.is_solvable());
        }
    }

    #[test]
    fn randomize_always_yields_solvable_cube() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            assert!(CubieCube::randomize(&mut rng).is_solvable());
        }
    }
}
