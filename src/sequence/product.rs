//! Lazy Cartesian products over non-restartable sequences.
//!
//! Every axis except the outermost has to be walked once per element of the
//! axes outside it, but the inputs can only be pulled once. Each axis is
//! therefore wrapped in a [`Replay`] buffer that pulls on demand and keeps
//! what it has seen.

use super::CandidateSequence;

/// On-demand buffer over a single-pass sequence.
struct Replay<'a, T> {
    source: Option<CandidateSequence<'a, T>>,
    seen: Vec<T>,
}

impl<'a, T: Clone> Replay<'a, T> {
    fn new(source: CandidateSequence<'a, T>) -> Self {
        Self {
            source: Some(source),
            seen: Vec::new(),
        }
    }

    /// Pulls until `index` is buffered. False once the source ran dry first.
    fn fill(&mut self, index: usize) -> bool {
        while self.seen.len() <= index {
            let Some(source) = self.source.as_mut() else {
                return false;
            };
            match source.next() {
                Some(item) => self.seen.push(item),
                None => {
                    self.source = None;
                    return false;
                }
            }
        }
        true
    }

    fn get(&mut self, index: usize) -> Option<T> {
        if self.fill(index) {
            Some(self.seen[index].clone())
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Fresh,
    Running,
    Done,
}

/// N-ary product of same-typed sequences; see [`super::combine`].
pub struct Combine<'a, T> {
    axes: Vec<Replay<'a, T>>,
    cursor: Vec<usize>,
    state: State,
}

impl<'a, T: Clone> Combine<'a, T> {
    pub fn new(seqs: Vec<CandidateSequence<'a, T>>) -> Self {
        let cursor = vec![0; seqs.len()];
        Self {
            axes: seqs.into_iter().map(Replay::new).collect(),
            cursor,
            state: State::Fresh,
        }
    }

    /// Odometer step: bump the innermost axis that still has an element at
    /// its next position and reset every axis inside it.
    fn advance(&mut self) -> bool {
        for axis in (0..self.axes.len()).rev() {
            let next = self.cursor[axis] + 1;
            if self.axes[axis].fill(next) {
                self.cursor[axis] = next;
                for inner in &mut self.cursor[axis + 1..] {
                    *inner = 0;
                }
                return true;
            }
        }
        false
    }

    fn current(&mut self) -> Option<Vec<T>> {
        self.axes
            .iter_mut()
            .zip(&self.cursor)
            .map(|(axis, &index)| axis.get(index))
            .collect()
    }
}

impl<T: Clone> Iterator for Combine<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        match self.state {
            State::Done => return None,
            State::Fresh if self.axes.is_empty() => {
                self.state = State::Done;
                return None;
            }
            State::Fresh => self.state = State::Running,
            State::Running => {
                if !self.advance() {
                    self.state = State::Done;
                    return None;
                }
            }
        }

        let tuple = self.current();
        if tuple.is_none() {
            // Only reachable on the first pull, when some axis is empty.
            self.state = State::Done;
        }
        tuple
    }
}

/// Two-axis product with independent element types; see [`super::combine_pair`].
pub struct CombinePair<'a, A, B> {
    outer: CandidateSequence<'a, A>,
    current: Option<A>,
    inner: Replay<'a, B>,
    position: usize,
    done: bool,
}

impl<'a, A: Clone, B: Clone> CombinePair<'a, A, B> {
    pub fn new(outer: CandidateSequence<'a, A>, inner: CandidateSequence<'a, B>) -> Self {
        Self {
            outer,
            current: None,
            inner: Replay::new(inner),
            position: 0,
            done: false,
        }
    }
}

impl<A: Clone, B: Clone> Iterator for CombinePair<'_, A, B> {
    type Item = (A, B);

    fn next(&mut self) -> Option<(A, B)> {
        while !self.done {
            if let Some(a) = &self.current {
                if let Some(b) = self.inner.get(self.position) {
                    self.position += 1;
                    return Some((a.clone(), b));
                }
                if self.position == 0 {
                    // inner axis is empty
                    self.done = true;
                    return None;
                }
                self.current = None;
                continue;
            }

            match self.outer.next() {
                Some(a) => {
                    self.current = Some(a);
                    self.position = 0;
                }
                None => self.done = true,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::super::{combine, combine_pair, from_fixed, materialize, CandidateSequence};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counted<'a>(items: &[&'static str], pulls: &Rc<Cell<usize>>) -> CandidateSequence<'a, &'static str> {
        let pulls = Rc::clone(pulls);
        from_fixed(items.to_vec().into_iter().inspect(move |_| pulls.set(pulls.get() + 1)))
    }

    #[test]
    fn combine_enumerates_first_input_outermost() {
        let tuples = materialize(combine(vec![
            from_fixed(vec!["a", "b"]),
            from_fixed(vec!["1", "2", "3"]),
        ]));
        assert_eq!(
            tuples,
            vec![
                vec!["a", "1"],
                vec!["a", "2"],
                vec!["a", "3"],
                vec!["b", "1"],
                vec!["b", "2"],
                vec!["b", "3"],
            ]
        );
    }

    #[test]
    fn combine_yields_m_times_n_times_k() {
        let tuples = materialize(combine(vec![
            from_fixed(vec![1, 2]),
            from_fixed(vec![3, 4, 5]),
            from_fixed(vec![6, 7]),
        ]));
        assert_eq!(tuples.len(), 12);
        assert_eq!(tuples[0], vec![1, 3, 6]);
        assert_eq!(tuples[1], vec![1, 3, 7]);
        assert_eq!(tuples[2], vec![1, 4, 6]);
        assert_eq!(tuples[11], vec![2, 5, 7]);
    }

    #[test]
    fn combine_with_an_empty_input_is_empty() {
        for position in 0..3 {
            let mut seqs: Vec<CandidateSequence<'_, i32>> =
                vec![from_fixed(vec![1, 2]), from_fixed(vec![3]), from_fixed(vec![4, 5])];
            seqs[position] = from_fixed(vec![]);
            assert!(materialize(combine(seqs)).is_empty(), "empty axis {position}");
        }
    }

    #[test]
    fn combine_pulls_nothing_until_asked() {
        let pulls = Rc::new(Cell::new(0));
        let mut product = combine(vec![counted(&["a", "b"], &pulls), counted(&["x", "y"], &pulls)]);
        assert_eq!(pulls.get(), 0);
        assert_eq!(product.next(), Some(vec!["a", "x"]));
        assert_eq!(pulls.get(), 2);
    }

    #[test]
    fn combine_pair_matches_combine_order() {
        let pairs = materialize(combine_pair(
            from_fixed(vec![1, 2]),
            from_fixed(vec!["x".to_string(), "y".to_string()]),
        ));
        assert_eq!(
            pairs,
            vec![
                (1, "x".to_string()),
                (1, "y".to_string()),
                (2, "x".to_string()),
                (2, "y".to_string()),
            ]
        );
    }

    #[test]
    fn combine_pair_stops_on_empty_inner_without_draining_outer() {
        let pulls = Rc::new(Cell::new(0));
        let pairs = materialize(combine_pair(counted(&["a", "b", "c"], &pulls), from_fixed(Vec::<i32>::new())));
        assert!(pairs.is_empty());
        assert_eq!(pulls.get(), 1);
    }

    #[test]
    fn combine_pair_with_empty_outer_never_touches_inner() {
        let pulls = Rc::new(Cell::new(0));
        let pairs = materialize(combine_pair(from_fixed(Vec::<i32>::new()), counted(&["a"], &pulls)));
        assert!(pairs.is_empty());
        assert_eq!(pulls.get(), 0);
    }
}
