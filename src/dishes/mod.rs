use anyhow::{bail, Result};
use clap::{Args, Subcommand};

use crate::api::Api;
use crate::telemetry::{self};
use crate::telemetry::ops::dishes::Phase as DishesPhase;
use crate::util::text;

pub mod cache;
pub mod fetch;
pub mod types;

use cache::DishCatalog;
use types::{Category, DishAddPlan, DishAddResult, DishList, DishRow, NewDish};

/// mealplan dishes ls/add
#[derive(Args)]
pub struct DishesCmd {
    #[command(subcommand)]
    pub cmd: DishesSub,
}

#[derive(Subcommand)]
pub enum DishesSub {
    // list the catalog
    Ls {
        /// Filter by category: main, side or snacks. Omit to show all.
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive substring match on the title
        #[arg(long, default_value = "")]
        search: String,
    },
    // submit a new dish (plan-only by default; use --apply to POST)
    Add {
        title: String,
        /// Comma-separated ingredient list
        #[arg(long)]
        ingredients: String,
        #[arg(long, default_value_t = false)]
        apply: bool,
    },
}

pub async fn run(api: &Api, args: DishesCmd) -> Result<()> {
    let log = telemetry::dishes();
    let _g = log.root_span().entered();
    match args.cmd {
        DishesSub::Ls { category, search } => ls_dishes(api, category, search).await?,
        DishesSub::Add { title, ingredients, apply } => add_dish(api, title, ingredients, apply).await?,
    }
    Ok(())
}

/// Fetch the remote records and build a sorted catalog from them.
pub async fn load(api: &Api) -> Result<(DishCatalog, usize)> {
    let raw = fetch::fetch_dishes(api).await?;
    Ok(DishCatalog::from_raw(raw))
}

async fn ls_dishes(api: &Api, category: Option<String>, search: String) -> Result<()> {
    let log = telemetry::dishes();
    let _g = log
        .root_span_kv([
            ("category", format!("{:?}", category)),
            ("search", search.clone()),
        ])
        .entered();

    // category validation (friendly error before network I/O)
    let category = match category.as_deref() {
        Some(s) => match Category::parse(s) {
            Some(c) => Some(c),
            None => bail!("Unknown category: {} (expected main, side or snacks)", s),
        },
        None => None,
    };

    let _fetch = log.span(&DishesPhase::Fetch).entered();
    let catalog = match load(api).await {
        Ok((catalog, skipped)) => {
            if skipped > 0 {
                log.warn(format!("Skipped {} rows without a title", skipped));
            }
            catalog
        }
        Err(e) => {
            // best-effort single attempt, no retry
            log.error(format!("Could not load dishes: {}. Check the API URL.", e));
            return Ok(());
        }
    };
    drop(_fetch);

    let _s = log.span(&DishesPhase::List).entered();
    let hits = catalog.filter(category, &search);
    log.info("🍽️ Dishes:");
    for (i, d) in hits.iter().enumerate() {
        log.info(format!(
            "  {:>3}. [{}] {} ({})",
            i + 1,
            d.category,
            d.title,
            d.ingredients.join(", ")
        ));
    }
    log.info(format!("   {} of {} dishes", hits.len(), catalog.len()));

    if telemetry::config::json_mode() {
        let list = DishList {
            total: hits.len(),
            dishes: hits.iter().map(|d| DishRow::from(*d)).collect(),
        };
        log.result(&list)?;
    }
    Ok(())
}

async fn add_dish(api: &Api, title: String, ingredients: String, apply: bool) -> Result<()> {
    let log = telemetry::dishes();
    let _g = log
        .root_span_kv([
            ("mode", if apply { "apply".to_string() } else { "plan".to_string() }),
            ("title", title.clone()),
        ])
        .entered();

    // validation (user-visible message, before any network call)
    let title = title.trim().to_string();
    let ingredients = text::split_ingredients(&ingredients);
    if title.is_empty() || ingredients.is_empty() {
        bail!("Please enter a dish title and at least one ingredient.");
    }

    if !apply {
        let _s = log.span(&DishesPhase::Plan).entered();
        log.info(format!(
            "📝 Dish plan — submit title={} ingredients={}",
            title,
            ingredients.join(", ")
        ));
        log.info("   Use --apply to submit.");
        if telemetry::config::json_mode() {
            let plan = DishAddPlan { action: "submit", title: title.clone(), ingredients: ingredients.clone() };
            log.plan(&plan)?;
        }
        return Ok(());
    }

    let _s = log.span(&DishesPhase::Submit).entered();
    let dish = NewDish { title: title.clone(), ingredients };
    match fetch::post_dish(api, &dish).await {
        Ok(()) => {
            log.info("➕ Dish submitted");
            // the sheet applies rows asynchronously; re-fetch for the new count
            match load(api).await {
                Ok((catalog, _)) => log.info(format!("   Catalog now lists {} dishes", catalog.len())),
                Err(e) => log.warn(format!("Could not reload dishes: {}", e)),
            }
            if telemetry::config::json_mode() {
                log.result(&DishAddResult { submitted: true, title })?;
            }
        }
        Err(e) => {
            log.error(format!("Could not save dish: {}. Check the API URL.", e));
            if telemetry::config::json_mode() {
                log.result(&DishAddResult { submitted: false, title })?;
            }
        }
    }
    Ok(())
}
