#[macro_use]
extern crate lazy_static;

use gnfa::Nfa;

fn strings_up_to(alphabet: &[u8], max_len: usize) -> Vec<Vec<u8>> {
    let mut all = vec![Vec::new()];
    let mut last = vec![Vec::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for s in &last {
            for &a in alphabet {
                let mut t = s.clone();
                t.push(a);
                next.push(t);
            }
        }
        all.extend(next.iter().cloned());
        last = next;
    }
    all
}

lazy_static! {
    // Every string over {a, b} up to length 4.
    static ref AB_STRINGS: Vec<Vec<u8>> = strings_up_to(b"ab", 4);
    static ref DICTIONARY: Vec<&'static [u8]> =
        vec![b"a", b"ab", b"bab", b"bc", b"bca", b"c", b"caa"];
}

/// Every 2-state NFA over {a, b}: 8 possible transition triples, any subset
/// of states as starts and as accepts. For each, the converted regex must
/// agree with subset simulation on every string up to length 4.
#[test]
fn round_trip_every_two_state_nfa() {
    let alphabet = [b'a', b'b'];
    for transition_mask in 0u32..256 {
        for start_mask in 0u32..4 {
            for accept_mask in 0u32..4 {
                let mut nfa = Nfa::new(2, alphabet.to_vec());
                for p in 0..2 {
                    for (si, &sym) in alphabet.iter().enumerate() {
                        for q in 0..2 {
                            let bit = p * 4 + si * 2 + q;
                            if transition_mask & (1 << bit) != 0 {
                                nfa.add_transition(p, sym, q);
                            }
                        }
                    }
                }
                for state in 0..2 {
                    if start_mask & (1 << state) != 0 {
                        nfa.mark_start(state);
                    }
                    if accept_mask & (1 << state) != 0 {
                        nfa.mark_accept(state);
                    }
                }
                let regex = nfa.to_regex();
                for s in AB_STRINGS.iter() {
                    assert_eq!(
                        nfa.accepts(s),
                        regex.matches(s),
                        "transitions {:#010b}, starts {:#04b}, accepts {:#04b}, input {:?}",
                        transition_mask,
                        start_mask,
                        accept_mask,
                        s
                    );
                }
            }
        }
    }
}

#[test]
fn round_trip_dictionary() {
    let nfa = Nfa::from_dictionary(&DICTIONARY);
    let regex = nfa.to_regex();
    for word in DICTIONARY.iter() {
        assert!(regex.matches(word), "{:?} should match", word);
    }
    for non_word in [&b""[..], b"aa", b"aab", b"abb", b"ba", b"cab"].iter() {
        assert!(!nfa.accepts(non_word));
        assert!(!regex.matches(non_word), "{:?} should not match", non_word);
    }
}

#[test]
fn conversion_is_reproducible() {
    let nfa = Nfa::from_dictionary(&DICTIONARY);
    assert_eq!(nfa.to_regex(), nfa.to_regex());
}
