pub mod config;
pub mod ctx;
pub mod ops;

use ctx::LogCtx;

// Factory helpers, one per command
pub fn dishes() -> LogCtx<ops::dishes::Dishes> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn plan() -> LogCtx<ops::plan::Plan> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
pub fn groceries() -> LogCtx<ops::groceries::Groceries> { LogCtx { json: config::logs_are_json(), _marker: std::marker::PhantomData } }
