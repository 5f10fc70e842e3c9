// Run-preserving table batching library
//
// Splits a table sorted by a key column (typically a timestamp) into
// contiguous batches of at least a minimum row count, never dividing rows
// that share a key value between two batches.

/// Statistics about one partition operation
#[derive(Clone, Debug)]
pub struct PartitionStats {
    pub num_rows: usize,
    /// Maximal runs of equal key values in the sorted input. Zero when the
    /// short-circuit path skipped run detection.
    pub num_runs: usize,
    pub num_batches: usize,
    pub min_batch_rows: usize,
    pub max_batch_rows: usize,
    pub sort_time_ms: u128,
    pub plan_time_ms: u128,
    /// True when the input fit in a single batch and was passed through
    /// unsorted.
    pub short_circuit: bool,
}

impl std::fmt::Display for PartitionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "PartitionStats:")?;
        writeln!(f, "  Rows: {}", self.num_rows)?;
        if self.short_circuit {
            writeln!(f, "  Short-circuit: input returned as a single batch")?;
            return Ok(());
        }
        writeln!(f, "  Key runs: {}", self.num_runs)?;
        writeln!(f, "  Batches: {}", self.num_batches)?;
        writeln!(
            f,
            "  Batch rows: min={}, max={}",
            self.min_batch_rows, self.max_batch_rows
        )?;
        writeln!(f, "  Sort time: {} ms", self.sort_time_ms)?;
        writeln!(f, "  Plan time: {} ms", self.plan_time_ms)?;
        Ok(())
    }
}

// Implementations
pub mod boundary;
pub mod error;
pub mod partition;
pub mod runs;

// Export the main types
pub use boundary::{BatchBoundaries, Boundary, batch_boundaries};
pub use error::PartitionError;
pub use partition::{PartitionOutput, TablePartitioner};
pub use runs::{RunLengths, run_lengths, run_lengths_by};
