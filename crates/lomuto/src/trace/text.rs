use std::io::{self, Write};

use super::{TraceEvent, TraceSink};

pub const PARTITION_SEPARATOR: &str = "============== PARTITIONING ==============";

/// Renders `event` as trace text without a trailing newline.
///
/// Only partitioner events produce text; driver events and pivot placement
/// return `None`.
pub fn render_line(data: &[i64], event: &TraceEvent) -> Option<String> {
    match *event {
        TraceEvent::Partition { low, high } => Some(format!(
            "{PARTITION_SEPARATOR}\n{:?} low: {low} high: {high}",
            &data[low..=high]
        )),
        TraceEvent::Compare {
            boundary,
            index,
            value,
            pivot,
        } => {
            // Single-digit values get an extra space so the columns line up.
            let pad = if value <= 9 { " " } else { "" };
            Some(format!("i={boundary}, j={index}, {value}{pad} <= {pivot}"))
        }
        TraceEvent::Swap {
            left_value,
            right_value,
            ..
        } => Some(format!("Swapping: {left_value} and {right_value}")),
        TraceEvent::Range { .. } | TraceEvent::Leaf { .. } | TraceEvent::PivotPlaced { .. } => {
            None
        }
    }
}

/// Writes the text trace to `W`.
///
/// The first write error is kept and reported by [`TextSink::finish`]; nothing
/// is written after it.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> TraceSink for TextSink<W> {
    fn record(&mut self, data: &[i64], event: TraceEvent) {
        if self.error.is_some() {
            return;
        }
        if let Some(line) = render_line(data, &event) {
            if let Err(err) = writeln!(self.out, "{line}") {
                self.error = Some(err);
            }
        }
    }
}
