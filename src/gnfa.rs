use std::rc::Rc;

use crate::regex::Regex;

/// Where an edge may come from: the start sentinel or an internal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source {
    Start,
    State(usize),
}

/// Where an edge may go: an internal state or the accept sentinel.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Accept,
    State(usize),
}

/// A generalized NFA: `states` internal states plus the start and accept
/// sentinels, with a regex label on every (source, target) pair.
///
/// The table is total. An absent edge is the `zero` regex, never a missing
/// entry, so lookups have no failure mode. Splitting the endpoint types into
/// [`Source`] and [`Target`] makes the remaining shape restrictions (start is
/// never entered, accept is never left) hold by construction.
///
/// A `Gnfa` is built once and never mutated; each elimination round
/// materializes a fresh table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gnfa<S> {
    states: usize,
    // (states + 1) x (states + 1), row = source, column = target
    table: Vec<Rc<Regex<S>>>,
}

impl<S> Gnfa<S> {
    /// Builds the automaton from a total labeling function, called once per
    /// (source, target) pair in row-major order.
    pub fn from_fn<F>(states: usize, mut label: F) -> Self
    where
        F: FnMut(Source, Target) -> Rc<Regex<S>>,
    {
        let width = states + 1;
        let mut table = Vec::with_capacity(width * width);
        for row in 0..width {
            let from = if row == 0 {
                Source::Start
            } else {
                Source::State(row - 1)
            };
            for col in 0..width {
                let to = if col == 0 {
                    Target::Accept
                } else {
                    Target::State(col - 1)
                };
                table.push(label(from, to));
            }
        }
        Gnfa { states, table }
    }

    /// Number of internal states, not counting the two sentinels.
    pub fn state_count(&self) -> usize {
        self.states
    }

    fn row(&self, from: Source) -> usize {
        match from {
            Source::Start => 0,
            Source::State(i) => {
                assert!(i < self.states);
                i + 1
            }
        }
    }

    fn col(&self, to: Target) -> usize {
        match to {
            Target::Accept => 0,
            Target::State(i) => {
                assert!(i < self.states);
                i + 1
            }
        }
    }

    /// The label on the edge `from -> to`.
    pub fn step(&self, from: Source, to: Target) -> &Rc<Regex<S>> {
        &self.table[self.row(from) * (self.states + 1) + self.col(to)]
    }

    /// Eliminates the highest internal state, preserving the accepted
    /// language.
    ///
    /// With `L` the removed state, each surviving edge `p -> q` becomes
    /// `old(p,q) | old(p,L) old(L,L)* old(L,q)`: a path either avoids `L`
    /// entirely, or enters it once, self-loops some number of times, and
    /// leaves. Surviving indices keep their identity; nothing is renumbered.
    pub fn rip(&self) -> Gnfa<S> {
        assert!(self.states > 0, "no internal state left to eliminate");
        let last = self.states - 1;
        let looped = Regex::star(self.step(Source::State(last), Target::State(last)).clone());
        Gnfa::from_fn(last, |from, to| {
            let direct = self.step(from, to).clone();
            let enter = self.step(from, Target::State(last)).clone();
            let leave = self.step(Source::State(last), to).clone();
            Regex::union(direct, Regex::concat(enter, Regex::concat(looped.clone(), leave)))
        })
    }

    /// Eliminates every internal state and returns the start-to-accept label.
    ///
    /// For an automaton with no internal states this returns the stored label
    /// exactly as constructed. The loop counts down rather than recursing so
    /// stack depth stays flat regardless of state count.
    pub fn to_regex(&self) -> Rc<Regex<S>> {
        if self.states == 0 {
            return self.step(Source::Start, Target::Accept).clone();
        }
        let mut g = self.rip();
        while g.states > 0 {
            g = g.rip();
        }
        g.step(Source::Start, Target::Accept).clone()
    }
}

impl<S: Clone> Gnfa<S> {
    /// Builds the initial table from a symbol-labeled NFA given as
    /// predicates: `states` numbered `0..states`, a transition relation, and
    /// start/accept membership tests.
    ///
    /// `alphabet` is the explicit list of symbols scanned when labeling
    /// internal edges. Symbols the transition relation uses but the list
    /// omits are silently dropped, so the resulting regex then describes a
    /// strict sublanguage of the NFA; completeness of the list is the
    /// caller's responsibility, not a checked error. An empty list is
    /// accepted and yields at most the empty-string language.
    pub fn from_nfa<T, P, Q>(
        states: usize,
        alphabet: &[S],
        transition: T,
        is_start: P,
        is_accept: Q,
    ) -> Self
    where
        T: Fn(usize, &S, usize) -> bool,
        P: Fn(usize) -> bool,
        Q: Fn(usize) -> bool,
    {
        Gnfa::from_fn(states, |from, to| match (from, to) {
            (Source::Start, Target::Accept) => Regex::zero(),
            (Source::Start, Target::State(q)) => {
                if is_start(q) {
                    Regex::one()
                } else {
                    Regex::zero()
                }
            }
            (Source::State(p), Target::Accept) => {
                if is_accept(p) {
                    Regex::one()
                } else {
                    Regex::zero()
                }
            }
            (Source::State(p), Target::State(q)) => {
                let mut label: Option<Rc<Regex<S>>> = None;
                for sym in alphabet {
                    if transition(p, sym, q) {
                        let lit = Regex::literal(sym.clone());
                        label = Some(match label {
                            None => lit,
                            Some(r) => Regex::union(r, lit),
                        });
                    }
                }
                label.unwrap_or_else(Regex::zero)
            }
        })
    }
}
