pub mod dishes;
pub mod groceries;
pub mod plan;
