use crate::RangeError;
use crate::trace::{TraceEvent, TraceSink};

use super::common;

/// Lomuto partition of `data[low..=high]` around `data[high]`.
///
/// Returns the final index of the pivot. Everything before it in the range is
/// `<=` the pivot, everything after it is `>`.
///
/// # Panics
///
/// If `low > high` or `high` is out of bounds.
pub fn partition<S>(data: &mut [i64], low: usize, high: usize, sink: &mut S) -> usize
where
    S: TraceSink + ?Sized,
{
    if let Err(err) = common::check_partition_range(data.len(), low, high) {
        panic!("partition: {err}");
    }
    lomuto(data, low, high, sink)
}

pub fn try_partition<S>(
    data: &mut [i64],
    low: usize,
    high: usize,
    sink: &mut S,
) -> Result<usize, RangeError>
where
    S: TraceSink + ?Sized,
{
    common::check_partition_range(data.len(), low, high)?;
    Ok(lomuto(data, low, high, sink))
}

pub fn quick_sort<S>(data: &mut [i64], sink: &mut S)
where
    S: TraceSink + ?Sized,
{
    if let Some(high) = data.len().checked_sub(1) {
        sort_recursive(data, 0, high, sink);
    }
    debug_assert!(common::is_sorted_non_decreasing(data));
}

/// Sorts `data[low..=high]`. A range with `low >= high` is left alone.
///
/// # Panics
///
/// If the range is non-empty and `high` is out of bounds.
pub fn quick_sort_range<S>(data: &mut [i64], low: usize, high: usize, sink: &mut S)
where
    S: TraceSink + ?Sized,
{
    if let Err(err) = common::check_sort_range(data.len(), low, high) {
        panic!("quick_sort_range: {err}");
    }
    sort_recursive(data, low, high, sink);
}

pub fn try_quick_sort_range<S>(
    data: &mut [i64],
    low: usize,
    high: usize,
    sink: &mut S,
) -> Result<(), RangeError>
where
    S: TraceSink + ?Sized,
{
    common::check_sort_range(data.len(), low, high)?;
    sort_recursive(data, low, high, sink);
    Ok(())
}

pub fn quick_sort_worklist<S>(data: &mut [i64], sink: &mut S)
where
    S: TraceSink + ?Sized,
{
    if let Some(high) = data.len().checked_sub(1) {
        sort_worklist(data, 0, high, sink);
    }
    debug_assert!(common::is_sorted_non_decreasing(data));
}

/// Same partitions in the same order as [`quick_sort_range`], without recursion.
///
/// # Panics
///
/// If the range is non-empty and `high` is out of bounds.
pub fn quick_sort_worklist_range<S>(data: &mut [i64], low: usize, high: usize, sink: &mut S)
where
    S: TraceSink + ?Sized,
{
    if let Err(err) = common::check_sort_range(data.len(), low, high) {
        panic!("quick_sort_worklist_range: {err}");
    }
    sort_worklist(data, low, high, sink);
}

fn lomuto<S>(data: &mut [i64], low: usize, high: usize, sink: &mut S) -> usize
where
    S: TraceSink + ?Sized,
{
    sink.record(data, TraceEvent::Partition { low, high });

    let pivot = data[high];
    // First index past the `<= pivot` region.
    let mut store = low;
    for j in low..high {
        let value = data[j];
        sink.record(
            data,
            TraceEvent::Compare {
                boundary: store as isize - 1,
                index: j,
                value,
                pivot,
            },
        );
        if value <= pivot {
            sink.record(
                data,
                TraceEvent::Swap {
                    left: store,
                    right: j,
                    left_value: data[store],
                    right_value: value,
                },
            );
            data.swap(store, j);
            store += 1;
        }
    }

    data.swap(store, high);
    sink.record(data, TraceEvent::PivotPlaced { index: store });
    store
}

fn sort_recursive<S>(data: &mut [i64], low: usize, high: usize, sink: &mut S)
where
    S: TraceSink + ?Sized,
{
    if low < high {
        sink.record(data, TraceEvent::Range { low, high });
        let p = lomuto(data, low, high, sink);
        if p > low {
            sort_recursive(data, low, p - 1, sink);
        }
        sort_recursive(data, p + 1, high, sink);
    } else if low == high {
        sink.record(data, TraceEvent::Leaf { index: low });
    }
}

fn sort_worklist<S>(data: &mut [i64], low: usize, high: usize, sink: &mut S)
where
    S: TraceSink + ?Sized,
{
    let mut pending = vec![(low, high)];
    while let Some((low, high)) = pending.pop() {
        if low < high {
            sink.record(data, TraceEvent::Range { low, high });
            let p = lomuto(data, low, high, sink);
            // Right goes in first so the left range is popped next.
            pending.push((p + 1, high));
            if p > low {
                pending.push((low, p - 1));
            }
        } else if low == high {
            sink.record(data, TraceEvent::Leaf { index: low });
        }
    }
}
