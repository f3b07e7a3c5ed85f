use thiserror::Error;

/// Failure modes surfaced by the core solver and its facelet/scramble
/// collaborators.
///
/// `BadSrc`/`BadTgt`/`Unsolvable`/`NotFound` mirror the status codes of the
/// `solve` entry point (see [`crate::solver::SolveStatus`]); the remaining variants
/// cover malformed user input at the facelet/scramble parsing boundary.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("source cube is not a solvable configuration")]
    BadSrc,
    #[error("target cube is not a solvable configuration")]
    BadTgt,
    #[error("cube is not solvable from the given target")]
    Unsolvable,
    #[error("no solution found within the given step budget")]
    NotFound,
    #[error("facelet string must contain exactly 54 characters")]
    InvalidFaceletString,
    #[error("facelet string contains a character that is not one of URFDLB")]
    InvalidColor,
    #[error("facelet string does not describe a physically assemblable cube")]
    InvalidFaceletValue,
    #[error("cubie values are out of range for a 3x3x3 cube")]
    InvalidCubieValue,
    #[error("move token is not a recognized quarter/half turn")]
    InvalidScramble,
    #[error("unknown error")]
    UnknownError,
}
