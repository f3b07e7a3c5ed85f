//! The two-phase solver: phase 1 iterative-deepening search reduces a cube
//! into `<U,D,R2,L2,F2,B2>`, phase 2 iterative-deepening search finishes it
//! from there, run in series with an outer loop trading phase-1 depth for a
//! shorter total (§4.6).

use std::fmt;

use serde::Serialize;

use crate::constants::{D0, D1, DS, EM0, EM1};
use crate::coord::Coord;
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::facelet::FaceCube;
use crate::moves::{Move, MOVE_CUBES, MOVE_TABLES};
use crate::pruning::PRUNING_TABLES;

/// The driver-level outcome of [`solve`], mirroring the status codes of the
/// external interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum SolveStatus {
    Ok = 0,
    Unsolvable = 1,
    NotFound = 2,
    BadSrc = 3,
    BadTgt = 4,
    UnknownError = 5,
}

impl fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// The outcome of a [`solve`] call: a status code and, on `Ok`, the move
/// sequence that takes `src` to `tgt`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveResult {
    pub status: SolveStatus,
    pub moves: Vec<Move>,
}

/// Per-solve mutable DFS scratch: the partial move sequences found so far in
/// each phase. Owned per `Solver` instance so concurrent solves never share
/// mutable state (§5); the move/pruning tables themselves are read-only and
/// shared via `lazy_static`.
#[derive(Default)]
pub struct Solver {
    sofar1: Vec<Move>,
    sofar2: Vec<Move>,
}

impl Solver {
    pub fn new() -> Self {
        Solver::default()
    }

    /// Searches for a move sequence taking `cube` to the identity, in at
    /// most `max_steps` (capped at [`DS`]) moves. `best` keeps trying
    /// shorter totals at the current phase-1 depth before giving up on it.
    pub fn solve_cube(
        &mut self,
        cube: &CubieCube,
        max_steps: usize,
        best: bool,
    ) -> Option<(Vec<Move>, Vec<Move>)> {
        let max_steps = max_steps.min(DS);
        let c0 = Coord::from_cubie(cube);
        let h1_0 = PRUNING_TABLES.phase1_estimate(c0.slice, c0.twist, c0.flip) as usize;

        let mut solution: Option<(Vec<Move>, Vec<Move>)> = None;
        let mut cur_best_len = max_steps + 1;

        for d1 in h1_0..=D0.min(max_steps) {
            self.sofar1.clear();
            self.sofar2.clear();
            let start = Coord {
                twist: c0.twist,
                flip: c0.flip,
                slice: c0.slice,
                ..Coord::default()
            };
            if !self.search_phase1(start, d1) {
                continue;
            }

            let c2 = self.phase2_origin(cube, c0.corner);
            let togo = cur_best_len.saturating_sub(1).saturating_sub(d1).min(D1);
            let h2_0 = PRUNING_TABLES.phase2_estimate(c2.edge4, c2.corner, c2.edge8) as usize;

            let mut found_d2 = None;
            for d2 in h2_0..=togo {
                self.sofar2.clear();
                if self.search_phase2(c2, d2) {
                    found_d2 = Some(d2);
                    solution = Some((self.sofar1.clone(), self.sofar2.clone()));
                    cur_best_len = d1 + d2;
                    break;
                }
            }

            match found_d2 {
                None => continue,
                Some(_) if !best => return solution,
                Some(0) => return solution,
                Some(_) => continue,
            }
        }
        solution
    }

    fn search_phase1(&mut self, c: Coord, togo: usize) -> bool {
        let h = PRUNING_TABLES.phase1_estimate(c.slice, c.twist, c.flip);
        if togo == 0 {
            return h == 0;
        }
        if (togo as u8) < h {
            return false;
        }
        for &m in EM0.iter() {
            if dull_triple(recent_history(&self.sofar1), m) {
                continue;
            }
            let next = Coord {
                twist: MOVE_TABLES.twist(m, c.twist),
                flip: MOVE_TABLES.flip(m, c.flip),
                slice: MOVE_TABLES.slice(m, c.slice),
                ..c
            };
            self.sofar1.push(m);
            if self.search_phase1(next, togo - 1) {
                return true;
            }
            self.sofar1.pop();
        }
        false
    }

    fn search_phase2(&mut self, c: Coord, togo: usize) -> bool {
        let h = PRUNING_TABLES.phase2_estimate(c.edge4, c.corner, c.edge8);
        if togo == 0 {
            return h == 0;
        }
        if (togo as u8) < h {
            return false;
        }
        for &m in EM1.iter() {
            if dull_triple(recent_history(&self.sofar2), m) {
                continue;
            }
            let next = Coord {
                corner: MOVE_TABLES.corner(m, c.corner),
                edge4: MOVE_TABLES.edge4(m, c.edge4),
                edge8: MOVE_TABLES.edge8(m, c.edge8),
                ..c
            };
            self.sofar2.push(m);
            if self.search_phase2(next, togo - 1) {
                return true;
            }
            self.sofar2.pop();
        }
        false
    }

    /// Recovers the cube's coordinate once `self.sofar1` has been applied:
    /// corner by walking the corner move table, edge4/edge8 by composing
    /// the true edge permutation (the move tables alone are invalid here,
    /// since slice is not yet zero partway through phase 1).
    fn phase2_origin(&self, original: &CubieCube, original_corner: u16) -> Coord {
        let mut corner = original_corner;
        for &m in &self.sofar1 {
            corner = MOVE_TABLES.corner(m, corner);
        }
        let mut ep = original.ep;
        for &m in &self.sofar1 {
            ep = ep * MOVE_CUBES[m as usize].ep;
        }
        Coord {
            twist: 0,
            flip: 0,
            slice: crate::coord::ep2slice(&ep),
            corner,
            edge4: crate::coord::ep2edge4(&ep),
            edge8: crate::coord::ep2edge8(&ep),
        }
    }
}

/// The last two moves performed so far within the current phase: `[two-back,
/// previous]`. Pruning history never crosses the phase-1/phase-2 boundary
/// (each phase searches its own buffer), so the boundary move pair stays
/// free for [`merge_solution`] to combine per §4.6. Either slot is `None`
/// near the start of a phase's search.
fn recent_history(sofar: &[Move]) -> [Option<Move>; 2] {
    let mut out = [None, None];
    let mut tail = sofar.iter().rev();
    out[1] = tail.next().copied();
    out[0] = tail.next().copied();
    out
}

/// The "dull triple" move-pair pruning predicate (§4.6): skip a candidate
/// move `m` if it repeats the previous move's face, or if it repeats the
/// face from two moves back while the intervening move sits on the
/// opposite face (a commuting pair that only permutes an already-explored
/// equivalent sequence).
fn dull_triple(history: [Option<Move>; 2], m: Move) -> bool {
    let Some(b) = history[1] else { return false };
    if b.face() == m.face() {
        return true;
    }
    let Some(c) = history[0] else { return false };
    c.face() == m.face() && (3 + m.face() as i32 - b.face() as i32).rem_euclid(3) == 0
}

/// Combines the last phase-1 move and first phase-2 move into one when they
/// share a face, per §4.6's solution merging rule.
fn merge_solution(sofar1: &[Move], sofar2: &[Move]) -> Vec<Move> {
    let mut result = sofar1.to_vec();
    let mut rest = sofar2.to_vec();
    if let (Some(&last1), Some(&first2)) = (result.last(), rest.first()) {
        if last1.face() == first2.face() {
            let merged_power = (last1.power() + first2.power()) % 4;
            result.pop();
            rest.remove(0);
            if merged_power != 0 {
                result.push(
                    Move::from_face_power(last1.face(), merged_power)
                        .expect("merged power is in 1..=3"),
                );
            }
        }
    }
    result.extend(rest);
    result
}

/// Validates `src`/`tgt`, reduces to `solve(tgt⁻¹·src, id)`, searches, and
/// merges the phase-boundary move if one exists.
pub fn solve(src: &str, tgt: &str, max_steps: usize, best: bool) -> SolveResult {
    let src_cube = match parse_cube(src) {
        Ok(c) => c,
        Err(_) => {
            return SolveResult {
                status: SolveStatus::BadSrc,
                moves: Vec::new(),
            }
        }
    };
    let tgt_cube = match parse_cube(tgt) {
        Ok(c) => c,
        Err(_) => {
            return SolveResult {
                status: SolveStatus::BadTgt,
                moves: Vec::new(),
            }
        }
    };
    if !src_cube.is_solvable() || !tgt_cube.is_solvable() {
        return SolveResult {
            status: SolveStatus::Unsolvable,
            moves: Vec::new(),
        };
    }

    let reduced = tgt_cube.inverse().mul(&src_cube);
    if reduced == CubieCube::identity() {
        return SolveResult {
            status: SolveStatus::Ok,
            moves: Vec::new(),
        };
    }

    let mut solver = Solver::new();
    match solver.solve_cube(&reduced, max_steps, best) {
        Some((p1, p2)) => SolveResult {
            status: SolveStatus::Ok,
            moves: merge_solution(&p1, &p2),
        },
        None => SolveResult {
            status: SolveStatus::NotFound,
            moves: Vec::new(),
        },
    }
}

fn parse_cube(s: &str) -> Result<CubieCube, Error> {
    let fc = FaceCube::try_from(s)?;
    CubieCube::try_from(&fc)
}

/// Whether `cube` is a legally assemblable facelet string.
pub fn is_solvable(cube: &str) -> bool {
    parse_cube(cube).map(|c| c.is_solvable()).unwrap_or(false)
}

/// Applies `maneuver` to `cube`, returning the resulting facelet string.
pub fn apply(cube: &str, maneuver: &[Move]) -> Result<String, Error> {
    let mut cc = parse_cube(cube)?;
    for &m in maneuver {
        cc = cc.apply_move(m);
    }
    FaceCube::try_from(&cc).map(|fc| fc.to_string())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::facelet::SOLVED_FACE_CUBE;
    use crate::moves::Move::*;

    const SOLVED: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

    #[test]
    fn solving_identity_against_itself_is_trivially_ok() {
        let result = solve(SOLVED, SOLVED, 25, false);
        assert_eq!(result.status, SolveStatus::Ok);
        assert!(result.moves.is_empty());
    }

    #[test]
    fn solving_a_single_move_scramble_inverts_it() {
        let scrambled = apply(SOLVED, &[R]).unwrap();
        let result = solve(&scrambled, SOLVED, 25, false);
        assert_eq!(result.status, SolveStatus::Ok);
        let replayed = apply(&scrambled, &result.moves).unwrap();
        assert_eq!(replayed, SOLVED_FACE_CUBE.to_string());
    }

    #[test]
    fn solving_a_three_move_scramble_round_trips() {
        let scrambled = apply(SOLVED, &[U, R, F]).unwrap();
        let result = solve(&scrambled, SOLVED, 25, false);
        assert_eq!(result.status, SolveStatus::Ok);
        let replayed = apply(&scrambled, &result.moves).unwrap();
        assert_eq!(replayed, SOLVED);
    }

    #[test]
    fn an_odd_single_edge_flip_is_unsolvable() {
        let mut s: Vec<char> = SOLVED.chars().collect();
        s.swap(7, 19); // swap two facelets of the UF edge, flipping it alone
        let bad: String = s.into_iter().collect();
        let result = solve(&bad, SOLVED, 25, false);
        assert_eq!(result.status, SolveStatus::Unsolvable);
    }

    #[test]
    fn too_short_a_string_is_bad_src() {
        let result = solve("UUU", SOLVED, 25, false);
        assert_eq!(result.status, SolveStatus::BadSrc);
    }

    #[test]
    fn a_tiny_step_budget_yields_not_found() {
        let scrambled = apply(SOLVED, &[U, R, F, L, B, D]).unwrap();
        let result = solve(&scrambled, SOLVED, 1, false);
        assert_eq!(result.status, SolveStatus::NotFound);
    }

    #[test]
    fn solution_never_exceeds_the_step_budget() {
        let scrambled = apply(SOLVED, &[U, R2, F3, D2, L, B2, U3, R]).unwrap();
        let result = solve(&scrambled, SOLVED, 25, false);
        assert_eq!(result.status, SolveStatus::Ok);
        assert!(result.moves.len() <= 25);
    }

    #[test]
    fn dull_triple_rejects_same_face_repeats_and_opposite_sandwiches() {
        assert!(dull_triple([None, Some(U)], U2));
        assert!(dull_triple([Some(D), Some(R)], D2));
        assert!(!dull_triple([Some(U), Some(R)], F));
        assert!(!dull_triple([None, None], U));
    }

    #[test]
    fn merge_solution_combines_shared_face_moves() {
        let merged = merge_solution(&[U, R], &[R, F]);
        assert_eq!(merged, vec![U, R2, F]);
    }

    #[test]
    fn merge_solution_drops_a_move_that_cancels_out() {
        let merged = merge_solution(&[U, R], &[R3, F]);
        assert_eq!(merged, vec![U, F]);
    }
}
