use std::collections::{HashMap, HashSet};
use std::hash::Hash;
use std::mem;
use std::rc::Rc;

use bit_set::BitSet;
use bit_vec::BitVec;

use crate::gnfa::Gnfa;
use crate::regex::Regex;

#[derive(Clone)]
struct NfaState<S> {
    transitions: HashMap<S, HashSet<usize>>,
}

/// A symbol-labeled NFA with explicit start and accept state sets, plus the
/// alphabet enumeration the regex conversion scans.
///
/// The alphabet list is taken at construction and never inferred: when the
/// conversion builds edge labels it only asks about the listed symbols.
/// Transitions added on symbols outside the list still take part in
/// [`accepts`](Nfa::accepts) but are invisible to [`to_regex`](Nfa::to_regex),
/// which then describes a strict sublanguage.
#[derive(Clone)]
pub struct Nfa<S> {
    alphabet: Vec<S>,
    states: Vec<NfaState<S>>,
    starts: BitVec,
    finals: BitVec,
}

impl<S: Eq + Hash + Clone> Nfa<S> {
    pub fn new(state_count: usize, alphabet: Vec<S>) -> Self {
        Nfa {
            alphabet,
            states: vec![
                NfaState {
                    transitions: HashMap::new(),
                };
                state_count
            ],
            starts: BitVec::from_elem(state_count, false),
            finals: BitVec::from_elem(state_count, false),
        }
    }

    /// An NFA accepting exactly the given word list: a shared start state
    /// with one chain of fresh states per word. The alphabet is collected
    /// from the words themselves, so it is complete by construction.
    pub fn from_dictionary<W: AsRef<[S]>>(words: &[W]) -> Self {
        let mut alphabet = Vec::new();
        for word in words {
            for sym in word.as_ref() {
                if !alphabet.contains(sym) {
                    alphabet.push(sym.clone());
                }
            }
        }
        let state_count = 1 + words.iter().map(|w| w.as_ref().len()).sum::<usize>();
        let mut nfa = Nfa::new(state_count, alphabet);
        nfa.mark_start(0);
        let mut next = 1;
        for word in words {
            let mut cur = 0;
            for sym in word.as_ref() {
                nfa.add_transition(cur, sym.clone(), next);
                cur = next;
                next += 1;
            }
            nfa.mark_accept(cur);
        }
        nfa
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn alphabet(&self) -> &[S] {
        &self.alphabet
    }

    pub fn mark_start(&mut self, state: usize) -> &mut Self {
        assert!(state < self.states.len());
        self.starts.set(state, true);
        self
    }

    pub fn mark_accept(&mut self, state: usize) -> &mut Self {
        assert!(state < self.states.len());
        self.finals.set(state, true);
        self
    }

    pub fn add_transition(&mut self, from: usize, on: S, to: usize) -> &mut Self {
        assert!(from < self.states.len());
        assert!(to < self.states.len());
        self.states[from]
            .transitions
            .entry(on)
            .or_insert_with(HashSet::new)
            .insert(to);
        self
    }

    /// Subset simulation over the input, reusing the two frontier sets via
    /// clear-and-swap. Bails out as soon as the frontier goes empty.
    pub fn accepts(&self, input: &[S]) -> bool {
        let mut cur = BitSet::with_capacity(self.states.len());
        let mut nxt = BitSet::with_capacity(self.states.len());
        for state in 0..self.states.len() {
            if self.starts[state] {
                cur.insert(state);
            }
        }
        for sym in input {
            for state in cur.iter() {
                if let Some(to_states) = self.states[state].transitions.get(sym) {
                    for &to in to_states {
                        nxt.insert(to);
                    }
                }
            }
            cur.clear();
            mem::swap(&mut cur, &mut nxt);
            if cur.is_empty() {
                return false;
            }
        }
        cur.iter().any(|state| self.finals[state])
    }

    /// The generalized automaton this NFA's predicates describe. Only the
    /// stored alphabet is scanned; see the type-level caveat.
    pub fn to_gnfa(&self) -> Gnfa<S> {
        Gnfa::from_nfa(
            self.states.len(),
            &self.alphabet,
            |p, sym, q| {
                self.states[p]
                    .transitions
                    .get(sym)
                    .map_or(false, |to| to.contains(&q))
            },
            |q| self.starts[q],
            |p| self.finals[p],
        )
    }

    /// The whole pipeline: build the generalized automaton, eliminate every
    /// internal state, return the surviving label.
    pub fn to_regex(&self) -> Rc<Regex<S>> {
        self.to_gnfa().to_regex()
    }
}
