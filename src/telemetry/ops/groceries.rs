use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Groceries;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Fetch, Resolve, Aggregate, Write }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Fetch => "fetch",
        Phase::Resolve => "resolve",
        Phase::Aggregate => "aggregate",
        Phase::Write => "write",
    }}
    fn span(&self) -> Span { match self {
        Phase::Fetch => info_span!("fetch"),
        Phase::Resolve => info_span!("resolve"),
        Phase::Aggregate => info_span!("aggregate"),
        Phase::Write => info_span!("write"),
    }}
}

impl OpMarker for Groceries {
    const NAME: &'static str = "groceries";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("groceries") }
}
