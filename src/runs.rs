/// Adjacent-run collapsing
///
/// Collapses a key sequence into the lengths of its maximal runs of adjacent
/// equal values. Only run lengths survive; the values themselves are dropped.
/// Equal values separated by a different value form separate runs.
pub struct RunLengths<I: Iterator, F> {
    iter: I,
    eq: F,
    // First element of the next run, pulled while scanning past the end of
    // the current one.
    lookahead: Option<I::Item>,
}

/// Collapse `keys` into run lengths using `PartialEq` on adjacent elements.
pub fn run_lengths<I>(keys: I) -> RunLengths<I::IntoIter, impl FnMut(&I::Item, &I::Item) -> bool>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    run_lengths_by(keys, |a, b| a == b)
}

/// Collapse `keys` into run lengths using a caller-supplied equality
/// predicate. The predicate is called on each pair of adjacent elements, in
/// order, with the earlier element first.
pub fn run_lengths_by<I, F>(keys: I, eq: F) -> RunLengths<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    RunLengths {
        iter: keys.into_iter(),
        eq,
        lookahead: None,
    }
}

impl<I, F> Iterator for RunLengths<I, F>
where
    I: Iterator,
    F: FnMut(&I::Item, &I::Item) -> bool,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let mut prev = self.lookahead.take().or_else(|| self.iter.next())?;
        let mut len = 1;
        while let Some(item) = self.iter.next() {
            if (self.eq)(&prev, &item) {
                len += 1;
                prev = item;
            } else {
                self.lookahead = Some(item);
                return Some(len);
            }
        }
        Some(len)
    }
}
