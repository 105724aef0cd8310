use tracing::Span;
use tracing::info_span;

use crate::telemetry::ctx::{OpMarker, PhaseSpan};

#[derive(Copy, Clone, Debug)]
pub struct Plan;

#[derive(Copy, Clone, Debug)]
pub enum Phase { LoadCatalog, Session, Submit }

impl PhaseSpan for Phase {
    fn name(&self) -> &'static str { match self {
        Phase::LoadCatalog => "load_catalog",
        Phase::Session => "session",
        Phase::Submit => "submit",
    }}
    fn span(&self) -> Span { match self {
        Phase::LoadCatalog => info_span!("load_catalog"),
        Phase::Session => info_span!("session"),
        Phase::Submit => info_span!("submit"),
    }}
}

impl OpMarker for Plan {
    const NAME: &'static str = "plan";
    type Phase = Phase;
    fn root_span() -> Span { info_span!("plan") }
}
