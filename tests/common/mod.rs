#![allow(dead_code)]

use std::sync::Arc;

use arrow::array::{Array, Int64Array, TimestampSecondArray};
use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
use arrow::record_batch::RecordBatch;

pub fn timestamp_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("dt", DataType::Timestamp(TimeUnit::Second, None), false),
        Field::new("other", DataType::Int64, false),
    ]))
}

/// Two-column batch: a timestamp key column "dt" and an i64 payload column
/// "other". Payloads default to the row index when not supplied.
pub fn timestamp_batch(dts: &[i64]) -> RecordBatch {
    let others: Vec<i64> = (0..dts.len() as i64).collect();
    timestamp_batch_with_payload(dts, &others)
}

pub fn timestamp_batch_with_payload(dts: &[i64], others: &[i64]) -> RecordBatch {
    assert_eq!(dts.len(), others.len());
    RecordBatch::try_new(
        timestamp_schema(),
        vec![
            Arc::new(TimestampSecondArray::from(dts.to_vec())),
            Arc::new(Int64Array::from(others.to_vec())),
        ],
    )
    .expect("failed to build test batch")
}

pub fn dt_values(batch: &RecordBatch) -> Vec<i64> {
    batch
        .column_by_name("dt")
        .expect("dt column")
        .as_any()
        .downcast_ref::<TimestampSecondArray>()
        .expect("timestamp column")
        .values()
        .to_vec()
}

pub fn other_values(batch: &RecordBatch) -> Vec<i64> {
    batch
        .column_by_name("other")
        .expect("other column")
        .as_any()
        .downcast_ref::<Int64Array>()
        .expect("i64 column")
        .values()
        .to_vec()
}

/// (dt, other) rows of a batch, for multiset comparisons.
pub fn rows(batch: &RecordBatch) -> Vec<(i64, i64)> {
    dt_values(batch)
        .into_iter()
        .zip(other_values(batch))
        .collect()
}
