use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Dishes;

#[derive(Copy, Clone, Debug)]
pub enum Phase { Plan, Fetch, List, Submit }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::Plan => "plan",
        Phase::Fetch => "fetch",
        Phase::List => "list",
        Phase::Submit => "submit",
    }}
    fn span(&self) -> Span { match self {
        Phase::Plan => info_span!("plan"),
        Phase::Fetch => info_span!("fetch"),
        Phase::List => info_span!("list"),
        Phase::Submit => info_span!("submit"),
    }}
}

impl OpMarker for Dishes {
    const NAME: &'static str = "dishes";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("dishes") }
}
