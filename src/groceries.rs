use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use crate::api::Api;
use crate::dishes::{self, cache::DishCatalog};
use crate::menu::WeeklyMenu;
use crate::telemetry::{self};
use crate::telemetry::ops::groceries::Phase as GroceriesPhase;

/// mealplan groceries: derive a shopping list for a one-shot menu
#[derive(Args)]
pub struct GroceriesCmd {
    /// Menu entry as "TITLE" or "TITLE=QTY"; repeat for more dishes
    #[arg(long = "dish", value_name = "TITLE[=QTY]", required = true)]
    pub dishes: Vec<String>,

    /// Write the list to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
struct EntrySpec {
    title: String,
    quantity: u32,
}

// "Pasta=3" -> three servings of Pasta; a bare title means one.
fn parse_spec(s: &str) -> Result<EntrySpec> {
    let (title, qty) = match s.rsplit_once('=') {
        Some((t, q)) => (t, Some(q)),
        None => (s, None),
    };
    let title = title.trim();
    if title.is_empty() {
        bail!("Empty dish title in --dish {:?}", s);
    }
    let quantity = match qty {
        Some(q) => match q.trim().parse::<u32>() {
            Ok(n) if n >= 1 => n,
            _ => bail!("Invalid quantity in --dish {:?} (expected a number >= 1)", s),
        },
        None => 1,
    };
    Ok(EntrySpec { title: title.to_string(), quantity })
}

#[derive(Serialize)]
struct GroceryResult {
    entries: usize,
    unknown: usize,
    items: Vec<String>,
    text: String,
}

pub async fn run(api: &Api, args: GroceriesCmd) -> Result<()> {
    let log = telemetry::groceries();
    let _g = log
        .root_span_kv([
            ("dishes", args.dishes.len().to_string()),
            ("out", format!("{:?}", args.out)),
        ])
        .entered();

    // entry validation (friendly errors before network I/O)
    let specs = args
        .dishes
        .iter()
        .map(|s| parse_spec(s))
        .collect::<Result<Vec<_>>>()?;

    let _fetch = log.span(&GroceriesPhase::Fetch).entered();
    let catalog = match dishes::load(api).await {
        Ok((catalog, skipped)) => {
            if skipped > 0 {
                log.warn(format!("Skipped {} rows without a title", skipped));
            }
            catalog
        }
        Err(e) => {
            log.error(format!("Could not load dishes: {}. Check the API URL.", e));
            DishCatalog::default()
        }
    };
    drop(_fetch);

    let _resolve = log
        .span_kv(&GroceriesPhase::Resolve, [("specs", specs.len().to_string())])
        .entered();
    let mut menu = WeeklyMenu::default();
    let mut unknown = 0usize;
    for spec in &specs {
        match catalog.find(&spec.title) {
            Some(dish) => {
                for _ in 0..spec.quantity {
                    menu.add_or_increment(dish);
                }
            }
            None => {
                unknown += 1;
                log.warn(format!("Unknown dish: {}", spec.title));
            }
        }
    }
    drop(_resolve);

    let _agg = log.span(&GroceriesPhase::Aggregate).entered();
    let list = menu.grocery_list();
    drop(_agg);

    let _w = log.span(&GroceriesPhase::Write).entered();
    match &args.out {
        Some(path) => {
            std::fs::write(path, list.to_text())?;
            log.info(format!("🛒 Grocery list written to {}", path.display()));
        }
        None => {
            // the list itself is the output artifact; print it raw on stdout
            if !telemetry::config::json_mode() && !list.is_empty() {
                println!("{}", list.to_text());
            }
        }
    }
    log.info(format!(
        "🛒 Groceries — entries={} items={} unknown={}",
        menu.len(),
        list.items.len(),
        unknown
    ));
    if telemetry::config::json_mode() {
        let result = GroceryResult {
            entries: menu.len(),
            unknown,
            items: list.items.clone(),
            text: list.to_text(),
        };
        log.result(&result)?;
    }
    Ok(())
}
