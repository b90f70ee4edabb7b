//! Step-by-step history of a quick sort run, one snapshot per decision.

use crate::quick_sort;
use crate::trace::{TraceEvent, TraceSink};

/// Number of messages returned by [`StepHistory::recent_messages`].
pub const RECENT_MESSAGES: usize = 5;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Step {
    pub array: Vec<i64>,
    pub low: Option<usize>,
    pub high: Option<usize>,
    /// Element under inspection.
    pub current: Option<usize>,
    /// Last index of the `<= pivot` region, once it is non-empty.
    pub boundary: Option<usize>,
    pub pivot: Option<usize>,
    /// Percentage of positions known to be final.
    pub progress: u8,
    pub message: String,
}

impl Step {
    fn snapshot(array: &[i64], progress: u8, message: String) -> Self {
        Self {
            array: array.to_vec(),
            low: None,
            high: None,
            current: None,
            boundary: None,
            pivot: None,
            progress,
            message,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct StepRecorder {
    steps: Vec<Step>,
    range: Option<(usize, usize)>,
    placed: usize,
    len: usize,
}

impl StepRecorder {
    fn progress(&self) -> u8 {
        if self.len == 0 {
            return 0;
        }
        ((self.placed * 200 + self.len) / (self.len * 2)) as u8
    }

    fn in_range(&self, mut step: Step) -> Step {
        if let Some((low, high)) = self.range {
            step.low = Some(low);
            step.high = Some(high);
            step.pivot = Some(high);
        }
        step
    }

    pub fn finish(mut self, data: &[i64]) -> StepHistory {
        self.steps.push(Step::snapshot(data, 100, String::from("Done")));
        StepHistory { steps: self.steps }
    }
}

impl TraceSink for StepRecorder {
    fn record(&mut self, data: &[i64], event: TraceEvent) {
        self.len = data.len();
        match event {
            TraceEvent::Range { low, high } => {
                self.range = Some((low, high));
                let mut step = Step::snapshot(
                    data,
                    self.progress(),
                    format!("Sorting index {low} - index {high}"),
                );
                step.low = Some(low);
                step.high = Some(high);
                self.steps.push(step);
            }
            TraceEvent::Partition { low, high } => self.range = Some((low, high)),
            TraceEvent::Compare {
                boundary,
                index,
                value,
                pivot,
            } => {
                let low = self.range.map_or(0, |(low, _)| low);
                let mut step = self.in_range(Step::snapshot(
                    data,
                    self.progress(),
                    format!(
                        "Compare current to pivot ({value} <= {pivot}) ({})",
                        value <= pivot
                    ),
                ));
                step.current = Some(index);
                step.boundary = usize::try_from(boundary).ok().filter(|&i| i >= low);
                self.steps.push(step);
            }
            TraceEvent::Swap { left, right, .. } => {
                let mut step = self.in_range(Step::snapshot(
                    data,
                    self.progress(),
                    String::from("Incrementing boundary"),
                ));
                step.current = Some(right);
                step.boundary = Some(left);
                self.steps.push(step);

                let mut array = data.to_vec();
                array.swap(left, right);
                let mut step = self.in_range(Step::snapshot(
                    &array,
                    self.progress(),
                    String::from("Swap current with boundary"),
                ));
                step.current = Some(right);
                step.boundary = Some(left);
                self.steps.push(step);
            }
            TraceEvent::PivotPlaced { index } => {
                let mut step = self.in_range(Step::snapshot(
                    data,
                    self.progress(),
                    String::from("Placing pivot at final position"),
                ));
                step.boundary = Some(index);
                self.steps.push(step);
                self.placed += 1;
            }
            TraceEvent::Leaf { index } => {
                self.placed += 1;
                let mut step = Step::snapshot(
                    data,
                    self.progress(),
                    String::from("End of tree (sorted)"),
                );
                step.low = Some(index);
                step.high = Some(index);
                step.current = Some(index);
                step.pivot = Some(index);
                self.steps.push(step);
            }
        }
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct StepHistory {
    steps: Vec<Step>,
}

impl StepHistory {
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Up to [`RECENT_MESSAGES`] messages ending at step `index`.
    pub fn recent_messages(&self, index: usize) -> Vec<&str> {
        if self.steps.is_empty() {
            return Vec::new();
        }
        let end = index.min(self.steps.len() - 1) + 1;
        let start = end.saturating_sub(RECENT_MESSAGES);
        self.steps[start..end]
            .iter()
            .map(|step| step.message.as_str())
            .collect()
    }
}

/// Sorts a copy of `data` and returns every step of the run.
pub fn record_quick_sort(data: &[i64]) -> StepHistory {
    let mut array = data.to_vec();
    let mut recorder = StepRecorder::default();
    quick_sort(&mut array, &mut recorder);
    recorder.finish(&array)
}
