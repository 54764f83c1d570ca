use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of decision a [`TraceEvent`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Start,
    Check,
    Take,
    Skip,
    Fail,
    Success,
}

impl TraceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TraceKind::Start => "start",
            TraceKind::Check => "check",
            TraceKind::Take => "take",
            TraceKind::Skip => "skip",
            TraceKind::Fail => "fail",
            TraceKind::Success => "success",
        }
    }

    /// Returns true for the events that close a trace.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TraceKind::Fail | TraceKind::Success)
    }
}

impl fmt::Display for TraceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One recorded step of a solver run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceEvent {
    pub kind: TraceKind,
    pub desc: String,
    /// Amount still to be formed after this step.
    pub remaining: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin: Option<usize>,
    /// Number of coins taken in one greedy step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

/// Append-only event log filled in while a solver runs.
///
/// Solvers own a `Trace` for the duration of a call and hand the finished
/// events to the [`SolveResult`](super::SolveResult), which only exposes
/// them as a slice.
#[derive(Debug, Default)]
pub(crate) struct Trace {
    events: Vec<TraceEvent>,
}

impl Trace {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn push(
        &mut self,
        kind: TraceKind,
        desc: String,
        remaining: usize,
        coin: Option<usize>,
        count: Option<usize>,
    ) {
        self.events.push(TraceEvent {
            kind,
            desc,
            remaining,
            coin,
            count,
        });
    }

    pub(crate) fn start(&mut self, desc: String, remaining: usize) {
        self.push(TraceKind::Start, desc, remaining, None, None);
    }

    pub(crate) fn check(&mut self, desc: String, remaining: usize, coin: usize) {
        self.push(TraceKind::Check, desc, remaining, Some(coin), None);
    }

    pub(crate) fn take(
        &mut self,
        desc: String,
        remaining: usize,
        coin: usize,
        count: Option<usize>,
    ) {
        self.push(TraceKind::Take, desc, remaining, Some(coin), count);
    }

    pub(crate) fn skip(&mut self, desc: String, remaining: usize, coin: usize) {
        self.push(TraceKind::Skip, desc, remaining, Some(coin), None);
    }

    pub(crate) fn fail(&mut self, desc: String, remaining: usize) {
        self.push(TraceKind::Fail, desc, remaining, None, None);
    }

    pub(crate) fn success(&mut self, desc: String, remaining: usize) {
        self.push(TraceKind::Success, desc, remaining, None, None);
    }

    pub(crate) fn into_events(self) -> Vec<TraceEvent> {
        self.events
    }
}
