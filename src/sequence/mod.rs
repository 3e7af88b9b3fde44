//! Lazy candidate sequences.
//!
//! A [`CandidateSequence`] is a pull-based, finite, single-pass stream. The
//! combinators here build new sequences out of existing ones without pulling
//! from their inputs until the consumer asks for an element, so a caller can
//! take the first few names of a deep expression without expanding the whole
//! candidate space.
//!
//! ## Combinators
//!
//! - [`from_fixed`]: a fixed, ordered list of items
//! - [`map`], [`filter`], [`filter_map`]: element-wise transforms
//! - [`concat`]: priority ordering, all of the first input before the second
//! - [`defer`]: builds its sequence on the first pull
//! - [`combine`], [`combine_pair`]: Cartesian products, first input outermost
//! - [`materialize`]: collect what is left into a `Vec`
//!
//! Sequences are not restartable. To walk the same candidates twice, ask the
//! producing rule for a fresh sequence.

mod product;

pub use product::{Combine, CombinePair};

/// A lazy, finite, forward-only stream of candidates.
pub type CandidateSequence<'a, T = String> = Box<dyn Iterator<Item = T> + 'a>;

/// Yields `items` in order, then ends.
pub fn from_fixed<'a, T, I>(items: I) -> CandidateSequence<'a, T>
where
    T: 'a,
    I: IntoIterator<Item = T>,
    I::IntoIter: 'a,
{
    Box::new(items.into_iter())
}

/// The sequence that yields nothing.
pub fn empty<'a, T: 'a>() -> CandidateSequence<'a, T> {
    Box::new(std::iter::empty())
}

/// Yields `f(x)` for every `x` in `seq`.
pub fn map<'a, T, U, F>(seq: CandidateSequence<'a, T>, f: F) -> CandidateSequence<'a, U>
where
    T: 'a,
    U: 'a,
    F: FnMut(T) -> U + 'a,
{
    Box::new(seq.map(f))
}

/// Yields the elements of `seq` that satisfy `pred`.
pub fn filter<'a, T, P>(seq: CandidateSequence<'a, T>, pred: P) -> CandidateSequence<'a, T>
where
    T: 'a,
    P: FnMut(&T) -> bool + 'a,
{
    Box::new(seq.filter(pred))
}

/// Yields `f(x)` for every `x` in `seq` unless `f` returns `None`, which skips
/// that element.
pub fn filter_map<'a, T, U, F>(seq: CandidateSequence<'a, T>, f: F) -> CandidateSequence<'a, U>
where
    T: 'a,
    U: 'a,
    F: FnMut(T) -> Option<U> + 'a,
{
    Box::new(seq.filter_map(f))
}

/// Yields every element of `seqs[0]`, then of `seqs[1]`, and so on.
pub fn concat<'a, T: 'a>(seqs: Vec<CandidateSequence<'a, T>>) -> CandidateSequence<'a, T> {
    Box::new(seqs.into_iter().flatten())
}

/// A sequence whose construction waits until the first element is pulled.
///
/// Lower-priority tiers of a [`concat`] are wrapped in this so that their
/// subtrees are never walked when the consumer stops early.
pub fn defer<'a, T, F>(build: F) -> CandidateSequence<'a, T>
where
    T: 'a,
    F: FnOnce() -> CandidateSequence<'a, T> + 'a,
{
    Box::new(std::iter::once_with(build).flatten())
}

/// Cartesian product of `seqs`, one `Vec` per combination with elements in
/// input order.
///
/// Enumerates like nested loops with `seqs[0]` as the outermost loop. Empty
/// if any input is empty, or if there are no inputs.
pub fn combine<'a, T: Clone + 'a>(seqs: Vec<CandidateSequence<'a, T>>) -> CandidateSequence<'a, Vec<T>> {
    Box::new(Combine::new(seqs))
}

/// Cartesian product of two sequences with different element types, `a`
/// outermost. Same ordering and emptiness rules as [`combine`].
pub fn combine_pair<'a, A, B>(
    a: CandidateSequence<'a, A>,
    b: CandidateSequence<'a, B>,
) -> CandidateSequence<'a, (A, B)>
where
    A: Clone + 'a,
    B: Clone + 'a,
{
    Box::new(CombinePair::new(a, b))
}

/// Pulls every remaining element into an ordered list.
pub fn materialize<T>(seq: CandidateSequence<'_, T>) -> Vec<T> {
    seq.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn strings(items: &[&str]) -> CandidateSequence<'static> {
        from_fixed(items.iter().map(|s| s.to_string()).collect::<Vec<_>>())
    }

    #[test]
    fn concat_preserves_grouping() {
        let joined = materialize(concat(vec![strings(&["a", "b"]), strings(&[]), strings(&["c"])]));
        assert_eq!(joined, vec!["a", "b", "c"]);
    }

    #[test]
    fn filter_map_skips_none() {
        let kept = materialize(filter_map(strings(&["keep", "drop", "also"]), |s| {
            (s != "drop").then(|| s.to_uppercase())
        }));
        assert_eq!(kept, vec!["KEEP", "ALSO"]);
    }

    #[test]
    fn filter_preserves_relative_order() {
        let kept = materialize(filter(strings(&["a1", "b", "c2", "d"]), |s| s.len() == 1));
        assert_eq!(kept, vec!["b", "d"]);
    }

    #[test]
    fn map_is_lazy() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let mut seq = map(strings(&["a", "b", "c"]), move |s| {
            counter.set(counter.get() + 1);
            s
        });
        assert_eq!(calls.get(), 0);
        assert_eq!(seq.next().as_deref(), Some("a"));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn defer_builds_on_first_pull_only() {
        let built = Rc::new(Cell::new(false));
        let flag = Rc::clone(&built);
        let mut seq = concat(vec![
            strings(&["first"]),
            defer(move || {
                flag.set(true);
                strings(&["second"])
            }),
        ]);
        assert_eq!(seq.next().as_deref(), Some("first"));
        assert!(!built.get());
        assert_eq!(seq.next().as_deref(), Some("second"));
        assert!(built.get());
        assert_eq!(seq.next(), None);
    }

    #[test]
    fn combine_with_no_inputs_is_empty() {
        assert!(materialize(combine::<String>(vec![])).is_empty());
    }
}
