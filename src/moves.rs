//! Elementary moves and the six dense move tables that drive the search
//! without ever touching the cubie model again once built.

use std::{fmt, str::FromStr};

use self::Move::*;
use crate::algebra::{CArray, Perm};
use crate::constants::{EM1, N_CORNERS, N_EDGE4, N_EDGE8, N_FLIP, N_MOVE, N_SLICE, N_TWIST};
use crate::coord::{
    co2twist, corner2cp, cp2corner, edge42ep, edge82ep, eo2flip, ep2edge4, ep2edge8, ep2slice,
    flip2eo, see2ep, slice2ep, twist2co,
};
use crate::cubie::CubieCube;
use crate::error::Error;

/// One of the eighteen elementary face turns: six faces, each as a quarter
/// turn, a half turn, or a counter-quarter turn.
#[rustfmt::skip]
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Move {
    U, U2, U3,
    R, R2, R3,
    F, F2, F3,
    D, D2, D3,
    L, L2, L3,
    B, B2, B3,
}

impl Default for Move {
    fn default() -> Self {
        U
    }
}

impl Move {
    /// The face axis this move turns: `U,R,F,D,L,B -> 0..6`.
    pub fn face(self) -> u8 {
        self as u8 / 3
    }

    /// The turn's power: 1 for a quarter turn, 2 for a half turn, 3 for a
    /// counter-quarter turn.
    pub fn power(self) -> u8 {
        self as u8 % 3 + 1
    }

    /// The move on `face` (`0..6`, `U,R,F,D,L,B`) with the given `power`
    /// (`1..=3`). Used by the solver's phase-boundary move merge.
    pub fn from_face_power(face: u8, power: u8) -> Option<Move> {
        if !(1..=3).contains(&power) || face > 5 {
            return None;
        }
        Some(EM0[(face as usize) * 3 + (power as usize - 1)])
    }

    pub fn get_inverse(self) -> Self {
        Move::from_face_power(self.face(), 4 - self.power()).expect("power is in 1..=3")
    }
}

/// All eighteen moves, in phase 1's generator order; also indexes
/// [`Move::from_face_power`].
#[rustfmt::skip]
pub const EM0: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            U3 => write!(f, "U'"),
            D3 => write!(f, "D'"),
            R3 => write!(f, "R'"),
            L3 => write!(f, "L'"),
            F3 => write!(f, "F'"),
            B3 => write!(f, "B'"),
            _ => write!(f, "{self:?}"),
        }
    }
}

impl FromStr for Move {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(U),
            "U2" => Ok(U2),
            "U'" | "U3" => Ok(U3),
            "R" => Ok(R),
            "R2" => Ok(R2),
            "R'" | "R3" => Ok(R3),
            "F" => Ok(F),
            "F2" => Ok(F2),
            "F'" | "F3" => Ok(F3),
            "D" => Ok(D),
            "D2" => Ok(D2),
            "D'" | "D3" => Ok(D3),
            "L" => Ok(L),
            "L2" => Ok(L2),
            "L'" | "L3" => Ok(L3),
            "B" => Ok(B),
            "B2" => Ok(B2),
            "B'" | "B3" => Ok(B3),
            _ => Err(Error::InvalidScramble),
        }
    }
}

/// The six elementary quarter-turn cubies, copied from the well-known
/// Kociemba move table (corner/edge permutation and orientation per face).
#[rustfmt::skip]
pub const U_MOVE: CubieCube = CubieCube {
    cp: Perm([3, 0, 1, 2, 4, 5, 6, 7]),
    co: CArray([0, 0, 0, 0, 0, 0, 0, 0]),
    ep: Perm([3, 0, 1, 2, 4, 5, 6, 7, 8, 9, 10, 11]),
    eo: CArray([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
};
#[rustfmt::skip]
pub const R_MOVE: CubieCube = CubieCube {
    cp: Perm([4, 1, 2, 0, 7, 5, 6, 3]),
    co: CArray([2, 0, 0, 1, 1, 0, 0, 2]),
    ep: Perm([8, 1, 2, 3, 11, 5, 6, 7, 4, 9, 10, 0]),
    eo: CArray([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
};
#[rustfmt::skip]
pub const F_MOVE: CubieCube = CubieCube {
    cp: Perm([1, 5, 2, 3, 0, 4, 6, 7]),
    co: CArray([1, 2, 0, 0, 2, 1, 0, 0]),
    ep: Perm([0, 9, 2, 3, 4, 8, 6, 7, 1, 5, 10, 11]),
    eo: CArray([0, 1, 0, 0, 0, 1, 0, 0, 1, 1, 0, 0]),
};
#[rustfmt::skip]
pub const D_MOVE: CubieCube = CubieCube {
    cp: Perm([0, 1, 2, 3, 5, 6, 7, 4]),
    co: CArray([0, 0, 0, 0, 0, 0, 0, 0]),
    ep: Perm([0, 1, 2, 3, 5, 6, 7, 4, 8, 9, 10, 11]),
    eo: CArray([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
};
#[rustfmt::skip]
pub const L_MOVE: CubieCube = CubieCube {
    cp: Perm([0, 2, 6, 3, 4, 1, 5, 7]),
    co: CArray([0, 1, 2, 0, 0, 2, 1, 0]),
    ep: Perm([0, 1, 10, 3, 4, 5, 9, 7, 8, 2, 6, 11]),
    eo: CArray([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]),
};
#[rustfmt::skip]
pub const B_MOVE: CubieCube = CubieCube {
    cp: Perm([0, 1, 3, 7, 4, 5, 2, 6]),
    co: CArray([0, 0, 1, 2, 0, 0, 2, 1]),
    ep: Perm([0, 1, 2, 11, 4, 5, 6, 10, 8, 9, 3, 7]),
    eo: CArray([0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 1]),
};

/// The cubie reached by applying `m` to the solved cube.
pub fn move_cube(m: Move) -> CubieCube {
    let quarter = match m.face() {
        0 => U_MOVE,
        1 => R_MOVE,
        2 => F_MOVE,
        3 => D_MOVE,
        4 => L_MOVE,
        5 => B_MOVE,
        _ => unreachable!("face() is in 0..6"),
    };
    let mut c = CubieCube::identity();
    for _ in 0..m.power() {
        c = c.mul(&quarter);
    }
    c
}

lazy_static::lazy_static! {
    /// The 18 elementary-move cubies, indexed like [`EM0`], built once and
    /// shared thereafter.
    pub static ref MOVE_CUBES: [CubieCube; 18] = {
        let mut cubes = [CubieCube::identity(); 18];
        for (i, &m) in EM0.iter().enumerate() {
            cubes[i] = move_cube(m);
        }
        cubes
    };
}

impl CubieCube {
    /// The state reached by first being `self`, then turning `m`.
    pub fn apply_move(&self, m: Move) -> CubieCube {
        self.mul(&MOVE_CUBES[m as usize])
    }
}

/// The six dense move tables of §4.4: `table(m, k)` is the coordinate
/// reached by applying move `m` to a cube whose coordinate is `k`.
///
/// `edge4`/`edge8` are only populated for phase 2's ten moves ([`EM1`]);
/// entries for the other eight moves are left at zero and must not be
/// queried (`slice != 0` during phase 1 makes them meaningless anyway).
pub struct MoveTables {
    twist: Vec<u16>,
    flip: Vec<u16>,
    slice: Vec<u16>,
    corner: Vec<u16>,
    edge4: Vec<u16>,
    edge8: Vec<u16>,
}

impl MoveTables {
    pub fn new() -> Self {
        let mut twist = vec![0u16; N_MOVE * N_TWIST];
        for k in 0..N_TWIST {
            let base = CubieCube {
                co: twist2co(k as u16),
                ..CubieCube::identity()
            };
            for &m in EM0.iter() {
                let moved = base.apply_move(m);
                twist[m as usize * N_TWIST + k] = co2twist(&moved.co);
            }
        }

        let mut flip = vec![0u16; N_MOVE * N_FLIP];
        for k in 0..N_FLIP {
            let base = CubieCube {
                eo: flip2eo(k as u16),
                ..CubieCube::identity()
            };
            for &m in EM0.iter() {
                let moved = base.apply_move(m);
                flip[m as usize * N_FLIP + k] = eo2flip(&moved.eo);
            }
        }

        let mut slice = vec![0u16; N_MOVE * N_SLICE];
        for k in 0..N_SLICE {
            let base = CubieCube {
                ep: slice2ep(k as u16),
                ..CubieCube::identity()
            };
            for &m in EM0.iter() {
                let moved = base.apply_move(m);
                slice[m as usize * N_SLICE + k] = ep2slice(&moved.ep);
            }
        }

        let mut corner = vec![0u16; N_MOVE * N_CORNERS];
        for k in 0..N_CORNERS {
            let base = CubieCube {
                cp: corner2cp(k as u16),
                ..CubieCube::identity()
            };
            for &m in EM0.iter() {
                let moved = base.apply_move(m);
                corner[m as usize * N_CORNERS + k] = cp2corner(&moved.cp);
            }
        }

        let mut edge4 = vec![0u16; N_MOVE * N_EDGE4];
        for k in 0..N_EDGE4 {
            let base = CubieCube {
                ep: edge42ep(k as u16),
                ..CubieCube::identity()
            };
            for &m in EM1.iter() {
                let moved = base.apply_move(m);
                edge4[m as usize * N_EDGE4 + k] = ep2edge4(&moved.ep);
            }
        }

        let mut edge8 = vec![0u16; N_MOVE * N_EDGE8];
        for k in 0..N_EDGE8 {
            let base = CubieCube {
                ep: edge82ep(k as u16),
                ..CubieCube::identity()
            };
            for &m in EM1.iter() {
                let moved = base.apply_move(m);
                edge8[m as usize * N_EDGE8 + k] = ep2edge8(&moved.ep);
            }
        }

        MoveTables {
            twist,
            flip,
            slice,
            corner,
            edge4,
            edge8,
        }
    }

    pub fn twist(&self, m: Move, k: u16) -> u16 {
        self.twist[m as usize * N_TWIST + k as usize]
    }

    pub fn flip(&self, m: Move, k: u16) -> u16 {
        self.flip[m as usize * N_FLIP + k as usize]
    }

    pub fn slice(&self, m: Move, k: u16) -> u16 {
        self.slice[m as usize * N_SLICE + k as usize]
    }

    pub fn corner(&self, m: Move, k: u16) -> u16 {
        self.corner[m as usize * N_CORNERS + k as usize]
    }

    pub fn edge4(&self, m: Move, k: u16) -> u16 {
        self.edge4[m as usize * N_EDGE4 + k as usize]
    }

    pub fn edge8(&self, m: Move, k: u16) -> u16 {
        self.edge8[m as usize * N_EDGE8 + k as usize]
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static::lazy_static! {
    /// The shared move tables, built once on first use.
    pub static ref MOVE_TABLES: MoveTables = MoveTables::new();
}

/// Reconstructs the true edge permutation from the three edge coordinates;
/// used by the solver to recover phase 2's starting cubie cube.
pub fn reconstruct_ep(slice: u16, edge4: u16, edge8: u16) -> Perm<12> {
    see2ep(slice, edge4, edge8)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::{Corner::*, Edge::*, SOLVED_CUBIE_CUBE};

    #[test]
    fn quarter_turn_applied_four_times_is_identity() {
        for m in [U, R, F, D, L, B] {
            let mut c = SOLVED_CUBIE_CUBE;
            for _ in 0..4 {
                c = c.apply_move(m);
            }
            assert_eq!(c, SOLVED_CUBIE_CUBE);
        }
    }

    #[test]
    fn half_turn_is_quarter_turn_squared() {
        let twice = SOLVED_CUBIE_CUBE.apply_move(U).apply_move(U);
        let half = SOLVED_CUBIE_CUBE.apply_move(U2);
        assert_eq!(twice, half);
    }

    #[test]
    fn counter_quarter_is_the_inverse() {
        let c = SOLVED_CUBIE_CUBE.apply_move(R).apply_move(R3);
        assert_eq!(c, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn face_and_power_round_trip_through_from_face_power() {
        for &m in EM0.iter() {
            assert_eq!(Move::from_face_power(m.face(), m.power()), Some(m));
        }
    }

    #[test]
    fn get_inverse_undoes_the_move() {
        for &m in EM0.iter() {
            let c = move_cube(m).mul(&move_cube(m.get_inverse()));
            assert_eq!(c, CubieCube::identity());
        }
    }

    #[test]
    fn r_decomposes_into_the_documented_four_cycles() {
        // cp[i] names the piece that ends up at position i, so the listed
        // cycle (DFR, DRB, UBR, URF) reads as cp[DFR]=DRB, cp[DRB]=UBR, ...
        assert_eq!(R_MOVE.cp[URF as usize], DFR as u8);
        assert_eq!(R_MOVE.cp[DFR as usize], DRB as u8);
        assert_eq!(R_MOVE.cp[DRB as usize], UBR as u8);
        assert_eq!(R_MOVE.cp[UBR as usize], URF as u8);
        assert_eq!(R_MOVE.ep[UR as usize], FR as u8);
        assert_eq!(R_MOVE.ep[FR as usize], DR as u8);
        assert_eq!(R_MOVE.ep[DR as usize], BR as u8);
        assert_eq!(R_MOVE.ep[BR as usize], UR as u8);
    }

    #[test]
    fn fu2l2d2bd2l2u2_decomposes_into_the_documented_edge_three_cycle() {
        let mut c = SOLVED_CUBIE_CUBE;
        for m in [F, U2, L2, D2, B, D2, L2, U2] {
            c = c.apply_move(m);
        }
        // The maneuver is a pure edge 3-cycle (BR, FR, UF); every corner and
        // every other edge returns to its solved position and orientation.
        assert_eq!(c.cp, Perm::identity());
        assert_eq!(c.co, CArray::zero());
        assert_eq!(c.ep[BR as usize], FR as u8);
        assert_eq!(c.ep[FR as usize], UF as u8);
        assert_eq!(c.ep[UF as usize], BR as u8);
        for e in [UR, UL, UB, DR, DF, DL, DB, FL, BL] {
            assert_eq!(c.ep[e as usize], e as u8);
        }
    }

    #[test]
    fn move_tables_agree_with_direct_cubie_composition() {
        let mv = MoveTables::new();
        for &m in EM0.iter() {
            let moved = SOLVED_CUBIE_CUBE.apply_move(m);
            assert_eq!(mv.twist(m, 0), co2twist(&moved.co));
            assert_eq!(mv.flip(m, 0), eo2flip(&moved.eo));
            assert_eq!(mv.slice(m, 0), ep2slice(&moved.ep));
            assert_eq!(mv.corner(m, 0), cp2corner(&moved.cp));
        }
    }

    #[test]
    fn phase2_move_tables_agree_with_direct_cubie_composition() {
        let mv = MoveTables::new();
        for &m in EM1.iter() {
            let moved = SOLVED_CUBIE_CUBE.apply_move(m);
            assert_eq!(mv.edge4(m, 0), ep2edge4(&moved.ep));
            assert_eq!(mv.edge8(m, 0), ep2edge8(&moved.ep));
        }
    }
}
