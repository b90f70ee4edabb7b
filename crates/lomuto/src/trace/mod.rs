//! Structured trace of a partition-exchange sort.
//!
//! The sort reports every decision as a [`TraceEvent`] to a [`TraceSink`].
//! Sinks decide what to do with them: render the classic text trace
//! ([`TextSink`]), forward to the `log` facade ([`LogSink`]), collect them for
//! assertions ([`EventLog`]) or drop them ([`NullSink`]).

mod logger;
mod text;

pub use logger::LogSink;
pub use text::{PARTITION_SEPARATOR, TextSink, render_line};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TraceEvent {
    /// The driver is about to partition `[low, high]`.
    Range { low: usize, high: usize },
    /// The driver reached a single-element range.
    Leaf { index: usize },
    /// Partition header for `[low, high]`.
    Partition { low: usize, high: usize },
    /// `value` at `index` is compared against `pivot`.
    ///
    /// `boundary` is the end of the `<= pivot` region before this comparison,
    /// `low - 1` at the start of a partition.
    Compare {
        boundary: isize,
        index: usize,
        value: i64,
        pivot: i64,
    },
    /// Values at `left` and `right`, reported before the exchange.
    Swap {
        left: usize,
        right: usize,
        left_value: i64,
        right_value: i64,
    },
    /// The pivot now rests at `index`.
    PivotPlaced { index: usize },
}

impl TraceEvent {
    /// Events emitted by the drivers rather than by the partitioner.
    #[inline]
    pub fn is_driver_event(&self) -> bool {
        matches!(self, Self::Range { .. } | Self::Leaf { .. })
    }
}

pub trait TraceSink {
    /// `data` is the whole sequence as it is when the event is emitted, before
    /// any mutation the event announces.
    fn record(&mut self, data: &[i64], event: TraceEvent);
}

impl<S: TraceSink + ?Sized> TraceSink for &mut S {
    #[inline]
    fn record(&mut self, data: &[i64], event: TraceEvent) {
        (**self).record(data, event);
    }
}

impl<A: TraceSink, B: TraceSink> TraceSink for (A, B) {
    #[inline]
    fn record(&mut self, data: &[i64], event: TraceEvent) {
        self.0.record(data, event);
        self.1.record(data, event);
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl TraceSink for NullSink {
    #[inline(always)]
    fn record(&mut self, _data: &[i64], _event: TraceEvent) {}
}

#[derive(Clone, Debug, Default)]
pub struct EventLog {
    events: Vec<TraceEvent>,
}

impl EventLog {
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    pub fn partition_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, TraceEvent::Partition { .. }))
            .count()
    }
}

impl TraceSink for EventLog {
    #[inline]
    fn record(&mut self, _data: &[i64], event: TraceEvent) {
        self.events.push(event);
    }
}
