use log::{Level, log, log_enabled};

use super::{TraceEvent, TraceSink, render_line};

/// Forwards the trace to the `log` facade.
///
/// Partitioner events go out at `debug`, driver events and pivot placement at
/// `trace`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl LogSink {
    fn level(event: &TraceEvent) -> Level {
        if event.is_driver_event() || matches!(event, TraceEvent::PivotPlaced { .. }) {
            Level::Trace
        } else {
            Level::Debug
        }
    }
}

impl TraceSink for LogSink {
    fn record(&mut self, data: &[i64], event: TraceEvent) {
        let level = Self::level(&event);
        if !log_enabled!(level) {
            return;
        }
        match event {
            TraceEvent::Range { low, high } => log!(level, "sorting range [{low}, {high}]"),
            TraceEvent::Leaf { index } => log!(level, "index {index} is final (single element)"),
            TraceEvent::PivotPlaced { index } => {
                log!(level, "pivot {} placed at index {index}", data[index])
            }
            _ => {
                if let Some(text) = render_line(data, &event) {
                    for line in text.lines() {
                        log!(level, "{line}");
                    }
                }
            }
        }
    }
}
