use std::fmt;
use std::rc::Rc;

/// A regular expression over an arbitrary symbol type.
///
/// Subterms are reference-counted: the elimination step copies the same three
/// table cells into every cell of the reduced table, and sharing keeps that a
/// pointer copy instead of a deep clone. The expression tree is still
/// worst-case exponential in the number of eliminated states when walked or
/// printed; that is a property of the algorithm, not of this representation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Regex<S> {
    /// Matches nothing.
    Zero,
    /// Matches only the empty sequence.
    One,
    /// Matches the one-symbol sequence holding exactly this symbol.
    Literal(S),
    /// Matches whatever either operand matches.
    Union(Rc<Regex<S>>, Rc<Regex<S>>),
    /// Matches a sequence splittable so the left operand matches the prefix
    /// and the right operand the suffix.
    Concat(Rc<Regex<S>>, Rc<Regex<S>>),
    /// Matches zero or more adjacent repetitions of the operand.
    Star(Rc<Regex<S>>),
}

impl<S> Regex<S> {
    pub fn zero() -> Rc<Self> {
        Rc::new(Regex::Zero)
    }

    pub fn one() -> Rc<Self> {
        Rc::new(Regex::One)
    }

    pub fn literal(sym: S) -> Rc<Self> {
        Rc::new(Regex::Literal(sym))
    }

    pub fn union(a: Rc<Self>, b: Rc<Self>) -> Rc<Self> {
        Rc::new(Regex::Union(a, b))
    }

    pub fn concat(a: Rc<Self>, b: Rc<Self>) -> Rc<Self> {
        Rc::new(Regex::Concat(a, b))
    }

    pub fn star(a: Rc<Self>) -> Rc<Self> {
        Rc::new(Regex::Star(a))
    }
}

impl<S: Eq> Regex<S> {
    /// Membership test via Brzozowski derivatives: peel one symbol at a time,
    /// then check nullability of what is left.
    pub fn matches(&self, input: &[S]) -> bool {
        match input.split_first() {
            None => self.nullable(),
            Some((sym, rest)) => self.derivative(sym).matches(rest),
        }
    }

    /// Whether the empty sequence is matched.
    fn nullable(&self) -> bool {
        match self {
            Regex::Zero | Regex::Literal(_) => false,
            Regex::One | Regex::Star(_) => true,
            Regex::Union(a, b) => a.nullable() || b.nullable(),
            Regex::Concat(a, b) => a.nullable() && b.nullable(),
        }
    }

    /// The language left over after consuming `sym`.
    fn derivative(&self, sym: &S) -> Rc<Regex<S>> {
        match self {
            Regex::Zero | Regex::One => Regex::zero(),
            Regex::Literal(a) => {
                if a == sym {
                    Regex::one()
                } else {
                    Regex::zero()
                }
            }
            Regex::Union(a, b) => union_norm(a.derivative(sym), b.derivative(sym)),
            Regex::Concat(a, b) => {
                let left = concat_norm(a.derivative(sym), b.clone());
                if a.nullable() {
                    union_norm(left, b.derivative(sym))
                } else {
                    left
                }
            }
            Regex::Star(a) => concat_norm(a.derivative(sym), Regex::star(a.clone())),
        }
    }
}

// Zero/one collapsing for derivative intermediates only. The public
// constructors build exactly what they are asked for.

fn union_norm<S>(a: Rc<Regex<S>>, b: Rc<Regex<S>>) -> Rc<Regex<S>> {
    match (&*a, &*b) {
        (Regex::Zero, _) => b,
        (_, Regex::Zero) => a,
        _ => Regex::union(a, b),
    }
}

fn concat_norm<S>(a: Rc<Regex<S>>, b: Rc<Regex<S>>) -> Rc<Regex<S>> {
    match (&*a, &*b) {
        (Regex::Zero, _) | (_, Regex::Zero) => Regex::zero(),
        (Regex::One, _) => b,
        (_, Regex::One) => a,
        _ => Regex::concat(a, b),
    }
}

impl<S: fmt::Display> Regex<S> {
    // prec: 0 = union context, 1 = concat context, 2 = star operand
    fn fmt_prec(&self, f: &mut fmt::Formatter<'_>, prec: u8) -> fmt::Result {
        match self {
            Regex::Zero => write!(f, "∅"),
            Regex::One => write!(f, "ε"),
            Regex::Literal(a) => write!(f, "{}", a),
            Regex::Union(a, b) => {
                if prec > 0 {
                    write!(f, "(")?;
                }
                a.fmt_prec(f, 0)?;
                write!(f, "|")?;
                b.fmt_prec(f, 0)?;
                if prec > 0 {
                    write!(f, ")")?;
                }
                Ok(())
            }
            Regex::Concat(a, b) => {
                if prec > 1 {
                    write!(f, "(")?;
                }
                a.fmt_prec(f, 1)?;
                b.fmt_prec(f, 1)?;
                if prec > 1 {
                    write!(f, ")")?;
                }
                Ok(())
            }
            Regex::Star(a) => {
                a.fmt_prec(f, 2)?;
                write!(f, "*")
            }
        }
    }
}

impl<S: fmt::Display> fmt::Display for Regex<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_prec(f, 0)
    }
}
