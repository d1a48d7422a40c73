//! External solver seam
//!
//! Solving is not this crate's concern: the assembled 54-character state is
//! handed to an external solver, which returns whitespace-separated move
//! tokens (a face letter, optionally followed by `'` for counterclockwise
//! or `2` for a double turn). Solver output is tokenized but deliberately
//! not validated.

use crate::error::Result;

/// One move token as produced by the solver, e.g. `R`, `U'`, `F2`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move(String);

impl Move {
    /// Split a solver's output string into move tokens
    pub fn split(solution: &str) -> Vec<Move> {
        solution
            .split_whitespace()
            .map(|t| Move(t.to_string()))
            .collect()
    }

    /// Raw token text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Face letter of the move, if the token is non-empty
    pub fn face_letter(&self) -> Option<char> {
        self.0.chars().next()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// External cube solver: 54-character state in, move sequence out
pub trait Solver {
    fn solve(&self, state: &str) -> Result<Vec<Move>>;
}

impl<F> Solver for F
where
    F: Fn(&str) -> Result<String>,
{
    fn solve(&self, state: &str) -> Result<Vec<Move>> {
        Ok(Move::split(&self(state)?))
    }
}
