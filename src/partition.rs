//! Table-level partitioning over arrow record batches.
//!
//! Sorts a batch by a key column and slices it into sub-batches of at least
//! `chunk_size` rows, never splitting rows that share a key value. The
//! boundary math lives in [`crate::runs`] and [`crate::boundary`]; this
//! module only validates, sorts, and slices.

use std::time::Instant;

use arrow::array::{Array, ArrayRef};
use arrow::compute::kernels::cmp::distinct;
use arrow::compute::{sort_to_indices, take};
use arrow::record_batch::RecordBatch;

use crate::PartitionStats;
use crate::boundary::{BatchBoundaries, Boundary};
use crate::error::PartitionError;
use crate::runs::run_lengths_by;

/// Splits record batches by a key column. Cheap to construct and reusable
/// across batches.
pub struct TablePartitioner {
    chunk_size: usize,
    key_column: String,
}

impl TablePartitioner {
    pub fn new(chunk_size: usize, key_column: impl Into<String>) -> Self {
        Self {
            chunk_size,
            key_column: key_column.into(),
        }
    }

    /// Partition `batch` into sub-batches of at least `chunk_size` rows each,
    /// sorted by the key column, with no key value split across two batches.
    ///
    /// A batch of at most `chunk_size` rows is passed through unchanged as a
    /// single output batch, without sorting. This includes the empty batch.
    pub fn partition(&self, batch: &RecordBatch) -> Result<PartitionOutput, PartitionError> {
        if self.chunk_size == 0 {
            return Err(PartitionError::InvalidChunkSize);
        }
        let key_idx = batch
            .schema()
            .index_of(&self.key_column)
            .map_err(|_| PartitionError::MissingColumn(self.key_column.clone()))?;

        let n = batch.num_rows();
        if n <= self.chunk_size {
            return Ok(PartitionOutput {
                sorted: batch.clone(),
                boundaries: vec![Boundary { start: 0, end: n }],
                stats: PartitionStats {
                    num_rows: n,
                    num_runs: 0,
                    num_batches: 1,
                    min_batch_rows: n,
                    max_batch_rows: n,
                    sort_time_ms: 0,
                    plan_time_ms: 0,
                    short_circuit: true,
                },
            });
        }

        let sort_start = Instant::now();
        let indices = sort_to_indices(batch.column(key_idx).as_ref(), None, None)?;
        let columns = batch
            .columns()
            .iter()
            .map(|c| take(c.as_ref(), &indices, None))
            .collect::<Result<Vec<ArrayRef>, _>>()?;
        let sorted = RecordBatch::try_new(batch.schema(), columns)?;
        let sort_time_ms = sort_start.elapsed().as_millis();

        let plan_start = Instant::now();
        let keys = sorted.column(key_idx);
        // neighbor_distinct[i] is true when sorted rows i and i+1 hold
        // differing keys. distinct is null-aware, so a run of nulls stays a
        // single run instead of degenerating into singletons.
        let left = keys.slice(0, n - 1);
        let right = keys.slice(1, n - 1);
        let neighbor_distinct = distinct(&left, &right)?;
        let num_runs = neighbor_distinct.true_count() + 1;

        let runs = run_lengths_by(0..n, |&i, _| !neighbor_distinct.value(i));
        let boundaries: Vec<Boundary> = BatchBoundaries::new(runs, self.chunk_size).collect();
        let plan_time_ms = plan_start.elapsed().as_millis();

        let min_batch_rows = boundaries.iter().map(|b| b.len()).min().unwrap_or(0);
        let max_batch_rows = boundaries.iter().map(|b| b.len()).max().unwrap_or(0);
        let stats = PartitionStats {
            num_rows: n,
            num_runs,
            num_batches: boundaries.len(),
            min_batch_rows,
            max_batch_rows,
            sort_time_ms,
            plan_time_ms,
            short_circuit: false,
        };

        Ok(PartitionOutput {
            sorted,
            boundaries,
            stats,
        })
    }
}

/// Result of one partition operation: the sorted batch plus the computed
/// boundaries. Slices are produced lazily and zero-copy on iteration.
#[derive(Debug)]
pub struct PartitionOutput {
    sorted: RecordBatch,
    boundaries: Vec<Boundary>,
    stats: PartitionStats,
}

impl PartitionOutput {
    /// Yield the sub-batches in boundary order.
    pub fn iter(&self) -> impl Iterator<Item = RecordBatch> + '_ {
        self.boundaries
            .iter()
            .map(|b| self.sorted.slice(b.start, b.len()))
    }

    pub fn num_batches(&self) -> usize {
        self.boundaries.len()
    }

    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    pub fn stats(&self) -> &PartitionStats {
        &self.stats
    }
}
