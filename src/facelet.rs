//! The facelet-level cube model: a 54-character colored-sticker string and
//! its bijection with the cubie model (§6 of the external interface).
//!
//! The facelet string follows the `URFDLB` face order, nine characters per
//! face, row-major. Centers (indices 4, 13, 22, 31, 40, 49) are fixed and
//! name each face; a conforming string always shows the face's own letter
//! at its center, matching the `UUU...BBB` identity configuration.

use std::fmt;

use crate::algebra::{CArray, Perm};
use crate::cubie::CubieCube;
use crate::error::Error;

/// One of the six face colors, named after the face it belongs to.
#[rustfmt::skip]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    U, R, F, D, L, B,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

impl TryFrom<char> for Color {
    type Error = Error;

    fn try_from(value: char) -> Result<Self, Error> {
        match value {
            'U' => Ok(Color::U),
            'R' => Ok(Color::R),
            'F' => Ok(Color::F),
            'D' => Ok(Color::D),
            'L' => Ok(Color::L),
            'B' => Ok(Color::B),
            _ => Err(Error::InvalidColor),
        }
    }
}

/// A cube state as 54 facelet colors, `U` then `R` then `F` then `D` then
/// `L` then `B`, nine per face in row-major order.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct FaceCube {
    pub f: [Color; 54],
}

#[rustfmt::skip]
pub const SOLVED_FACE_CUBE: FaceCube = FaceCube {
    f: [
        Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U, Color::U,
        Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R, Color::R,
        Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F, Color::F,
        Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D, Color::D,
        Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L, Color::L,
        Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B, Color::B,
    ],
};

impl Default for FaceCube {
    fn default() -> Self {
        SOLVED_FACE_CUBE
    }
}

/// Facelet indices fixing each face's identity; must hold that face's own
/// color in a conforming string.
const CENTER: [usize; 6] = [4, 13, 22, 31, 40, 49];
const CENTER_COLOR: [Color; 6] = [Color::U, Color::R, Color::F, Color::D, Color::L, Color::B];

/// Maps each corner position to its three facelets, in `URF, UFL, ULB, UBR,
/// DFR, DLF, DBL, DRB` order (matching [`crate::cubie::Corner`]).
#[rustfmt::skip]
const CORNER_FACELET: [[usize; 3]; 8] = [
    [8, 9, 20],    // URF: U9 R1 F3
    [6, 18, 38],   // UFL: U7 F1 L3
    [0, 36, 47],   // ULB: U1 L1 B3
    [2, 45, 11],   // UBR: U3 B1 R3
    [29, 26, 15],  // DFR: D3 F9 R7
    [27, 44, 24],  // DLF: D1 L9 F7
    [33, 53, 42],  // DBL: D7 B9 L7
    [35, 17, 51],  // DRB: D9 R9 B7
];

/// Maps each corner position to its canonical color triple (same order as
/// `CORNER_FACELET`'s within-corner axis order).
#[rustfmt::skip]
const CORNER_COLOR: [[Color; 3]; 8] = [
    [Color::U, Color::R, Color::F],
    [Color::U, Color::F, Color::L],
    [Color::U, Color::L, Color::B],
    [Color::U, Color::B, Color::R],
    [Color::D, Color::F, Color::R],
    [Color::D, Color::L, Color::F],
    [Color::D, Color::B, Color::L],
    [Color::D, Color::R, Color::B],
];

/// Maps each edge position to its two facelets, in `UR, UF, UL, UB, DR, DF,
/// DL, DB, FR, FL, BL, BR` order (matching [`crate::cubie::Edge`]).
#[rustfmt::skip]
const EDGE_FACELET: [[usize; 2]; 12] = [
    [5, 10],   // UR: U6 R2
    [7, 19],   // UF: U8 F2
    [3, 37],   // UL: U4 L2
    [1, 46],   // UB: U2 B2
    [32, 16],  // DR: D6 R8
    [28, 25],  // DF: D2 F8
    [30, 43],  // DL: D4 L8
    [34, 52],  // DB: D8 B8
    [23, 12],  // FR: F6 R4
    [21, 41],  // FL: F4 L6
    [50, 39],  // BL: B6 L4
    [48, 14],  // BR: B4 R6
];

#[rustfmt::skip]
const EDGE_COLOR: [[Color; 2]; 12] = [
    [Color::U, Color::R],
    [Color::U, Color::F],
    [Color::U, Color::L],
    [Color::U, Color::B],
    [Color::D, Color::R],
    [Color::D, Color::F],
    [Color::D, Color::L],
    [Color::D, Color::B],
    [Color::F, Color::R],
    [Color::F, Color::L],
    [Color::B, Color::L],
    [Color::B, Color::R],
];

impl TryFrom<&str> for FaceCube {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Error> {
        if s.len() != 54 {
            return Err(Error::InvalidFaceletString);
        }
        let mut f = [Color::U; 54];
        for (i, c) in s.chars().enumerate() {
            f[i] = Color::try_from(c)?;
        }
        for (face, &idx) in CENTER.iter().enumerate() {
            if f[idx] != CENTER_COLOR[face] {
                return Err(Error::InvalidFaceletValue);
            }
        }
        Ok(FaceCube { f })
    }
}

impl fmt::Display for FaceCube {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.f {
            write!(fmt, "{c}")?;
        }
        Ok(())
    }
}

impl TryFrom<&CubieCube> for FaceCube {
    type Error = Error;

    fn try_from(cc: &CubieCube) -> Result<Self, Error> {
        let mut f = SOLVED_FACE_CUBE;
        for (i, &pos) in CORNER_FACELET.iter().enumerate() {
            let piece = cc.cp[i] as usize;
            let twist = cc.co.0[i] as usize;
            for j in 0..3 {
                f.f[pos[j]] = CORNER_COLOR[piece][(j + 3 - twist) % 3];
            }
        }
        for (i, &pos) in EDGE_FACELET.iter().enumerate() {
            let piece = cc.ep[i] as usize;
            let flip = cc.eo.0[i] as usize;
            for j in 0..2 {
                f.f[pos[j]] = EDGE_COLOR[piece][(j + flip) % 2];
            }
        }
        Ok(f)
    }
}

/// Finds the corner piece/orientation whose canonical color triple is a
/// rotation of `colors`, starting at `colors[0]` on the corner's first axis.
fn match_corner(colors: [Color; 3]) -> Option<(u8, u8)> {
    for (piece, canonical) in CORNER_COLOR.iter().enumerate() {
        for twist in 0..3u8 {
            if (0..3).all(|j| colors[j] == canonical[(j + twist as usize) % 3]) {
                return Some((piece as u8, (3 - twist) % 3));
            }
        }
    }
    None
}

fn match_edge(colors: [Color; 2]) -> Option<(u8, u8)> {
    for (piece, canonical) in EDGE_COLOR.iter().enumerate() {
        for flip in 0..2u8 {
            if (0..2).all(|j| colors[j] == canonical[(j + flip as usize) % 2]) {
                return Some((piece as u8, flip));
            }
        }
    }
    None
}

impl TryFrom<&FaceCube> for CubieCube {
    type Error = Error;

    fn try_from(fc: &FaceCube) -> Result<Self, Error> {
        let mut cp = [0u8; 8];
        let mut co = [0u8; 8];
        let mut cp_seen = [false; 8];
        for (i, &pos) in CORNER_FACELET.iter().enumerate() {
            let colors = [fc.f[pos[0]], fc.f[pos[1]], fc.f[pos[2]]];
            let (piece, twist) = match_corner(colors).ok_or(Error::InvalidFaceletValue)?;
            if cp_seen[piece as usize] {
                return Err(Error::InvalidFaceletValue);
            }
            cp_seen[piece as usize] = true;
            cp[i] = piece;
            co[i] = twist;
        }

        let mut ep = [0u8; 12];
        let mut eo = [0u8; 12];
        let mut ep_seen = [false; 12];
        for (i, &pos) in EDGE_FACELET.iter().enumerate() {
            let colors = [fc.f[pos[0]], fc.f[pos[1]]];
            let (piece, flip) = match_edge(colors).ok_or(Error::InvalidFaceletValue)?;
            if ep_seen[piece as usize] {
                return Err(Error::InvalidFaceletValue);
            }
            ep_seen[piece as usize] = true;
            ep[i] = piece;
            eo[i] = flip;
        }

        Ok(CubieCube {
            cp: Perm::new(cp),
            co: CArray::new(co),
            ep: Perm::new(ep),
            eo: CArray::new(eo),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;
    use crate::moves::U_MOVE;

    #[test]
    fn solved_cubie_round_trips_through_facelets() {
        let fc = FaceCube::try_from(&SOLVED_CUBIE_CUBE).unwrap();
        assert_eq!(fc, SOLVED_FACE_CUBE);
        let cc = CubieCube::try_from(&fc).unwrap();
        assert_eq!(cc, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn a_single_move_round_trips_through_facelets() {
        let fc = FaceCube::try_from(&U_MOVE).unwrap();
        let cc = CubieCube::try_from(&fc).unwrap();
        assert_eq!(cc, U_MOVE);
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            FaceCube::try_from("UUU").unwrap_err(),
            Error::InvalidFaceletString
        );
    }

    #[test]
    fn bad_character_is_rejected() {
        let mut s = SOLVED_FACE_CUBE.to_string();
        s.replace_range(0..1, "X");
        assert_eq!(FaceCube::try_from(s.as_str()).unwrap_err(), Error::InvalidColor);
    }

    #[test]
    fn mismatched_center_is_rejected() {
        let mut s = SOLVED_FACE_CUBE.to_string();
        s.replace_range(4..5, "R");
        assert_eq!(
            FaceCube::try_from(s.as_str()).unwrap_err(),
            Error::InvalidFaceletValue
        );
    }

    #[test]
    fn a_facelet_string_with_a_duplicated_corner_is_rejected() {
        // Swap two U-face facelets so the URF and UBR corner-color triples
        // can no longer both resolve to distinct corner pieces.
        let mut s = SOLVED_FACE_CUBE.to_string();
        s.replace_range(2..3, "D");
        assert_eq!(
            FaceCube::try_from(s.as_str()).unwrap_err(),
            Error::InvalidFaceletValue
        );
    }
}
