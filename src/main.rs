use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::env;

mod api;
mod dishes;
mod groceries;
mod menu;
mod output;
mod plan;
mod telemetry;
mod util;

#[derive(Parser)]
#[command(name = "mealplan", about = "Weekly meal planning CLI")]
struct Cli {
    /// Dish API endpoint; falls back to MEALPLAN_API_URL
    #[arg(global = true, short, long)]
    api_url: Option<String>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Dishes(dishes::DishesCmd),
    Plan(plan::PlanCmd),
    Groceries(groceries::GroceriesCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    telemetry::config::set_json_mode(cli.json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and MEALPLAN_LOG_FORMAT
    telemetry::config::init_tracing();

    let api_url = cli
        .api_url
        .or_else(|| env::var("MEALPLAN_API_URL").ok())
        .expect("Please provide --api-url or set MEALPLAN_API_URL in .env");

    let api = api::Api::connect(&api_url)?;

    match cli.command {
        Commands::Dishes(args) => dishes::run(&api, args).await?,
        Commands::Plan(args) => plan::run(&api, args).await?,
        Commands::Groceries(args) => groceries::run(&api, args).await?,
    }

    Ok(())
}
