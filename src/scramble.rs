//! The maneuver grammar: parsing/printing move sequences like `R U R' U'`,
//! and random scramble generation. Kept out of the solver core (§1) but
//! used by the CLI, server and benchmarks.
//!
//! `parse_maneuver` additionally understands the grouped/repeated form
//! `(RU){3}F'`: a parenthesized run of atoms followed by `{N}` expands to
//! that run repeated N times, same as the bare atoms would if typed out by
//! hand. Nesting groups is not supported, matching the source grammar.

use std::str::FromStr;

use rand::Rng;

use crate::error::Error;
use crate::moves::Move;

pub fn scramble_from_str(s: &str) -> Result<Vec<Move>, Error> {
    s.split_whitespace()
        .map(|word| Move::from_str(word.trim()))
        .collect()
}

/// Parses a run of atoms (`face power?`) with no separators required between
/// them, e.g. `"UR2F'"` -> `[U, R2, F3]`. Used both for bare maneuver text
/// and for the inside of a `(...)` group.
fn parse_atoms(s: &str) -> Result<Vec<Move>, Error> {
    let mut moves = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }
        if !matches!(chars[i], 'U' | 'D' | 'L' | 'R' | 'F' | 'B') {
            return Err(Error::InvalidScramble);
        }
        let mut end = i + 1;
        if end < chars.len() && matches!(chars[end], '2' | '3' | '\'') {
            end += 1;
        }
        let atom: String = chars[i..end].iter().collect();
        moves.push(Move::from_str(&atom)?);
        i = end;
    }
    Ok(moves)
}

/// Parses the full external maneuver grammar (§6):
/// `maneuver := term (space? term)*`, `term := atom | '(' atom+ ')' ('{' N '}')?`.
/// A bare `term` with no group is just a [`parse_atoms`] atom; `(atom
/// atom...)` expands once, `(atom atom...){N}` expands N times.
pub fn parse_maneuver(s: &str) -> Result<Vec<Move>, Error> {
    let mut moves = Vec::new();
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b' ' | b'\t' | b'\n' | b'\r' => {
                i += 1;
            }
            b'(' => {
                let close = s[i..]
                    .find(')')
                    .map(|off| i + off)
                    .ok_or(Error::InvalidScramble)?;
                let group = parse_atoms(&s[i + 1..close])?;
                if group.is_empty() {
                    return Err(Error::InvalidScramble);
                }
                i = close + 1;

                let repeat = if bytes.get(i) == Some(&b'{') {
                    let brace_close = s[i..]
                        .find('}')
                        .map(|off| i + off)
                        .ok_or(Error::InvalidScramble)?;
                    let n: usize = s[i + 1..brace_close]
                        .parse()
                        .map_err(|_| Error::InvalidScramble)?;
                    i = brace_close + 1;
                    n
                } else {
                    1
                };
                for _ in 0..repeat {
                    moves.extend_from_slice(&group);
                }
            }
            _ => {
                let end = s[i..]
                    .find([' ', '\t', '\n', '\r', '('])
                    .map(|off| i + off)
                    .unwrap_or(s.len());
                moves.extend(parse_atoms(&s[i..end])?);
                i = end;
            }
        }
    }
    Ok(moves)
}

pub fn scramble_to_str(s: &[Move]) -> String {
    s.iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// A random scramble of `length` moves, never repeating a face on
/// consecutive moves (a repeat would just combine into a single turn).
pub fn gen_scramble(length: usize) -> Vec<Move> {
    let mut rng = rand::thread_rng();
    let mut result = Vec::with_capacity(length);
    let mut last_face: Option<u8> = None;
    while result.len() < length {
        let face = rng.gen_range(0..6u8);
        if Some(face) == last_face {
            continue;
        }
        let power = rng.gen_range(1..=3u8);
        result.push(Move::from_face_power(face, power).expect("face in 0..6, power in 1..=3"));
        last_face = Some(face);
    }
    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::moves::Move::*;

    #[test]
    fn scramble_from_str_parses_quotes_and_doubles() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_from_str("R U R' U' F L' D' B2 R' U'").unwrap(), m);
    }

    #[test]
    fn scramble_to_str_round_trips_scramble_from_str() {
        let m = vec![R, U, R3, U3, F, L3, D3, B2, R3, U3];
        assert_eq!(scramble_to_str(&m), "R U R' U' F L' D' B2 R' U'");
    }

    #[test]
    fn scramble_from_str_rejects_unknown_tokens() {
        assert!(scramble_from_str("X").is_err());
    }

    #[test]
    fn gen_scramble_never_repeats_a_face_consecutively() {
        let s = gen_scramble(50);
        assert_eq!(s.len(), 50);
        for pair in s.windows(2) {
            assert_ne!(pair[0].face(), pair[1].face());
        }
    }

    #[test]
    fn parse_maneuver_expands_a_repeated_group() {
        let m = parse_maneuver("(RU){3}F'").unwrap();
        assert_eq!(m, vec![R, U, R, U, R, U, F3]);
    }

    #[test]
    fn parse_maneuver_handles_an_unrepeated_group() {
        let m = parse_maneuver("(UR) F").unwrap();
        assert_eq!(m, vec![U, R, F]);
    }

    #[test]
    fn parse_maneuver_agrees_with_scramble_from_str_on_flat_input() {
        let flat = "R U R' U' F L' D' B2 R' U'";
        assert_eq!(parse_maneuver(flat).unwrap(), scramble_from_str(flat).unwrap());
    }

    #[test]
    fn parse_maneuver_rejects_an_unclosed_group() {
        assert!(parse_maneuver("(RU F").is_err());
    }
}
