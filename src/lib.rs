//! Convert finite-state acceptors into equivalent regular expressions.
//!
//! The conversion runs the classical state-elimination algorithm on a
//! generalized NFA: an automaton whose edges carry whole regular expressions
//! instead of single symbols. Internal states are removed one at a time, each
//! removal folding the state's incoming, self-loop and outgoing labels into
//! the surviving edges, until only the start and accept sentinels remain and
//! the single surviving label is the answer.

pub mod gnfa;
pub mod nfa;
pub mod regex;

pub use crate::gnfa::{Gnfa, Source, Target};
pub use crate::nfa::Nfa;
pub use crate::regex::Regex;
