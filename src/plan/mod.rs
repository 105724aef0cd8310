use anyhow::{bail, Result};
use clap::Args;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::api::Api;
use crate::dishes::{self, cache::DishCatalog, fetch, types::{Category, Dish, NewDish}};
use crate::menu::WeeklyMenu;
use crate::telemetry::ctx::LogCtx;
use crate::telemetry::ops::plan::{Phase as PlanPhase, Plan as PlanOp};
use crate::telemetry::{self};

mod command;

use command::{AddTarget, SessionCommand};

/// mealplan plan: interactive weekly planning session
#[derive(Args)]
pub struct PlanCmd {
    /// Start with this category filter: main, side or snacks
    #[arg(long)]
    pub category: Option<String>,
}

pub async fn run(api: &Api, args: PlanCmd) -> Result<()> {
    let log = telemetry::plan();
    let _g = log
        .root_span_kv([("category", format!("{:?}", args.category))])
        .entered();

    let filter = match args.category.as_deref() {
        Some(s) => match Category::parse(s) {
            Some(c) => Some(c),
            None => bail!("Unknown category: {} (expected main, side or snacks)", s),
        },
        None => None,
    };

    let mut session = Session {
        catalog: DishCatalog::default(),
        menu: WeeklyMenu::default(),
        filter,
        query: String::new(),
    };

    {
        let _s = log.span(&PlanPhase::LoadCatalog).entered();
        session.reload(api, &log).await;
    }

    println!("Weekly planning session. Type `help` for commands, `quit` to leave.");
    let mut rl = DefaultEditor::new()?;
    let _s = log.span(&PlanPhase::Session).entered();
    loop {
        match rl.readline("plan> ") {
            Ok(line) => {
                let line = line.trim().to_string();
                if line.is_empty() {
                    continue;
                }
                let _ = rl.add_history_entry(&line);
                match command::parse(&line) {
                    Ok(SessionCommand::Quit) => break,
                    Ok(cmd) => session.execute(api, &log, cmd).await,
                    Err(msg) => println!("{}", msg),
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

/// All session state: the catalog view (filter + search) and the menu
/// being assembled. Nothing survives the session.
struct Session {
    catalog: DishCatalog,
    menu: WeeklyMenu,
    filter: Option<Category>,
    query: String,
}

impl Session {
    /// Re-fetch the catalog. A failed fetch is logged and leaves the
    /// current contents (possibly empty) unchanged.
    async fn reload(&mut self, api: &Api, log: &LogCtx<PlanOp>) {
        match dishes::load(api).await {
            Ok((catalog, skipped)) => {
                if skipped > 0 {
                    log.warn(format!("Skipped {} rows without a title", skipped));
                }
                log.info(format!("📡 Catalog loaded: {} dishes", catalog.len()));
                self.catalog.replace(catalog);
            }
            Err(e) => {
                log.error(format!("Could not load dishes: {}. Check the API URL.", e));
            }
        }
    }

    /// The dishes currently visible under the session filter and search.
    fn view(&self) -> Vec<&Dish> {
        self.catalog.filter(self.filter, &self.query)
    }

    async fn execute(&mut self, api: &Api, log: &LogCtx<PlanOp>, cmd: SessionCommand) {
        match cmd {
            SessionCommand::Ls => self.render_view(),
            SessionCommand::Find(q) => {
                self.query = q;
                self.render_view();
            }
            SessionCommand::Cat(c) => {
                self.filter = c;
                self.render_view();
            }
            SessionCommand::Add(target) => {
                let dish = match &target {
                    AddTarget::Index(n) => self.view().get(n - 1).copied().cloned(),
                    AddTarget::Title(t) => self.catalog.find(t).cloned(),
                };
                match dish {
                    Some(d) => {
                        self.menu.add_or_increment(&d);
                        self.render_menu();
                    }
                    None => match target {
                        AddTarget::Index(n) => println!("Nothing listed at {}", n),
                        AddTarget::Title(t) => println!("Unknown dish: {}", t),
                    },
                }
            }
            SessionCommand::Inc(n) => {
                self.menu.adjust_quantity(n - 1, 1);
                self.render_menu();
            }
            SessionCommand::Dec(n) => {
                self.menu.adjust_quantity(n - 1, -1);
                self.render_menu();
            }
            SessionCommand::Rm(n) => {
                self.menu.remove(n - 1);
                self.render_menu();
            }
            SessionCommand::Menu => self.render_menu(),
            SessionCommand::Groceries => {
                let list = self.menu.grocery_list();
                if list.is_empty() {
                    println!("(the menu is empty)");
                } else {
                    println!("{}", list.to_text());
                }
            }
            SessionCommand::New { title, ingredients } => {
                if title.is_empty() || ingredients.is_empty() {
                    println!("Please enter a dish title and at least one ingredient.");
                    return;
                }
                let _s = log.span(&PlanPhase::Submit).entered();
                let dish = NewDish { title: title.clone(), ingredients };
                match fetch::post_dish(api, &dish).await {
                    Ok(()) => {
                        println!("Submitted: {}", title);
                        self.reload(api, log).await;
                    }
                    Err(e) => {
                        log.error(format!("Could not save dish: {}. Check the API URL.", e));
                        println!("Could not save dish: {}", title);
                    }
                }
            }
            SessionCommand::Reload => self.reload(api, log).await,
            SessionCommand::Help => print_help(),
            // handled by the caller
            SessionCommand::Quit => {}
        }
    }

    fn render_view(&self) {
        let hits = self.view();
        match (self.filter, self.query.trim()) {
            (None, "") => println!("Dishes:"),
            (Some(c), "") => println!("Dishes [{}]:", c),
            (None, q) => println!("Dishes matching {:?}:", q),
            (Some(c), q) => println!("Dishes [{}] matching {:?}:", c, q),
        }
        for (i, d) in hits.iter().enumerate() {
            println!("  {:>3}. [{}] {} ({})", i + 1, d.category, d.title, d.ingredients.join(", "));
        }
        if hits.is_empty() {
            println!("  (none)");
        }
    }

    fn render_menu(&self) {
        println!("Weekly menu:");
        for (i, e) in self.menu.entries().iter().enumerate() {
            println!("  {:>3}. {}  x{}", i + 1, e.dish.title, e.quantity);
        }
        if self.menu.is_empty() {
            println!("  (empty)");
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  ls                      list dishes under the current filter");
    println!("  find TEXT               search titles (empty to clear)");
    println!("  cat main|side|snacks|all  set the category filter");
    println!("  add NUMBER|TITLE        add a dish to the weekly menu");
    println!("  inc N / dec N           adjust a menu entry's quantity");
    println!("  rm N                    remove a menu entry");
    println!("  menu                    show the weekly menu");
    println!("  groceries               print the grocery list");
    println!("  new TITLE: a, b, c      submit a new dish to the sheet");
    println!("  reload                  re-fetch the catalog");
    println!("  quit                    leave the session");
}
