//! Batch boundary planning over run lengths.
//!
//! Turns a stream of run lengths into half-open index ranges, each at least
//! `chunk_size` long, without ever splitting a run. Only the final range may
//! exceed the minimum (it absorbs the trailing remainder), and only a single
//! whole-input range may fall short of it.

use crate::runs::run_lengths;

/// One output batch, as a half-open index range `[start, end)` over the
/// original sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    pub start: usize,
    pub end: usize,
}

impl Boundary {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Single-pass planner over run lengths.
///
/// A candidate batch closes as soon as the accumulated length since
/// `segment_start` reaches `chunk_size`, but its emission is deferred until
/// the *next* candidate closes. Whatever is left when the input ends is
/// therefore always folded into the last closed candidate, so no trailing
/// short batch can escape.
pub struct BatchBoundaries<I> {
    runs: I,
    chunk_size: usize,
    segment_start: usize,
    cursor: usize,
    // Closed but not yet emitted. None / Some is the whole state machine.
    pending: Option<(usize, usize)>,
    drained: bool,
}

impl<I> BatchBoundaries<I>
where
    I: Iterator<Item = usize>,
{
    /// `chunk_size` must be positive; callers validate before constructing.
    pub fn new(runs: I, chunk_size: usize) -> Self {
        debug_assert!(chunk_size >= 1, "chunk_size must be positive");
        Self {
            runs,
            chunk_size,
            segment_start: 0,
            cursor: 0,
            pending: None,
            drained: false,
        }
    }
}

impl<I> Iterator for BatchBoundaries<I>
where
    I: Iterator<Item = usize>,
{
    type Item = Boundary;

    fn next(&mut self) -> Option<Boundary> {
        if self.drained {
            return None;
        }
        while let Some(len) = self.runs.next() {
            self.cursor += len;
            if self.cursor - self.segment_start >= self.chunk_size {
                let closed = (self.segment_start, self.cursor);
                self.segment_start = self.cursor;
                if let Some((start, end)) = self.pending.replace(closed) {
                    return Some(Boundary { start, end });
                }
            }
        }
        self.drained = true;
        match self.pending.take() {
            // Extend the last closed candidate over the remainder.
            Some((start, _)) => Some(Boundary {
                start,
                end: self.cursor,
            }),
            // Threshold never reached: the whole input is one short batch.
            None if self.cursor != 0 => Some(Boundary {
                start: 0,
                end: self.cursor,
            }),
            None => None,
        }
    }
}

/// Compute batch boundaries directly from a sorted key sequence.
///
/// `keys` must already be grouped so that equal values are adjacent (sorted
/// input satisfies this). `chunk_size` must be positive; this is an unchecked
/// precondition, validated by the caller.
pub fn batch_boundaries<I>(keys: I, chunk_size: usize) -> impl Iterator<Item = Boundary>
where
    I: IntoIterator,
    I::Item: PartialEq,
{
    BatchBoundaries::new(run_lengths(keys), chunk_size)
}
