use crate::dishes::types::Category;
use crate::util::text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddTarget {
    /// 1-based number from the last listing
    Index(usize),
    Title(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Ls,
    Find(String),
    Cat(Option<Category>),
    Add(AddTarget),
    Inc(usize),
    Dec(usize),
    Rm(usize),
    Menu,
    Groceries,
    New { title: String, ingredients: Vec<String> },
    Reload,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<SessionCommand, String> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((w, r)) => (w, r.trim()),
        None => (line, ""),
    };

    match word {
        "ls" => Ok(SessionCommand::Ls),
        // `find` with no text clears the search
        "find" => Ok(SessionCommand::Find(rest.to_string())),
        "cat" => match rest {
            "" | "all" => Ok(SessionCommand::Cat(None)),
            s => Category::parse(s)
                .map(|c| SessionCommand::Cat(Some(c)))
                .ok_or_else(|| format!("Unknown category: {} (main, side, snacks or all)", s)),
        },
        "add" => {
            if rest.is_empty() {
                return Err("Usage: add NUMBER|TITLE".to_string());
            }
            match rest.parse::<usize>() {
                Ok(n) if n >= 1 => Ok(SessionCommand::Add(AddTarget::Index(n))),
                Ok(_) => Err("Listing numbers start at 1".to_string()),
                Err(_) => Ok(SessionCommand::Add(AddTarget::Title(rest.to_string()))),
            }
        }
        "inc" | "dec" | "rm" => {
            let n = match rest.parse::<usize>() {
                Ok(n) if n >= 1 => n,
                _ => return Err(format!("Usage: {} NUMBER (1-based menu position)", word)),
            };
            Ok(match word {
                "inc" => SessionCommand::Inc(n),
                "dec" => SessionCommand::Dec(n),
                _ => SessionCommand::Rm(n),
            })
        }
        "menu" => Ok(SessionCommand::Menu),
        "groceries" => Ok(SessionCommand::Groceries),
        "new" => match rest.split_once(':') {
            Some((title, ingredients)) => Ok(SessionCommand::New {
                title: title.trim().to_string(),
                ingredients: text::split_ingredients(ingredients),
            }),
            None => Err("Usage: new TITLE: ingredient, ingredient, ...".to_string()),
        },
        "reload" => Ok(SessionCommand::Reload),
        "help" | "?" => Ok(SessionCommand::Help),
        "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
        other => Err(format!("Unknown command: {} (try `help`)", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_words() {
        assert_eq!(parse("ls"), Ok(SessionCommand::Ls));
        assert_eq!(parse("menu"), Ok(SessionCommand::Menu));
        assert_eq!(parse("groceries"), Ok(SessionCommand::Groceries));
        assert_eq!(parse("reload"), Ok(SessionCommand::Reload));
        assert_eq!(parse("quit"), Ok(SessionCommand::Quit));
        assert_eq!(parse("exit"), Ok(SessionCommand::Quit));
    }

    #[test]
    fn find_keeps_the_raw_query() {
        assert_eq!(parse("find apple pie"), Ok(SessionCommand::Find("apple pie".into())));
        assert_eq!(parse("find"), Ok(SessionCommand::Find(String::new())));
    }

    #[test]
    fn cat_accepts_known_categories_and_all() {
        assert_eq!(parse("cat side"), Ok(SessionCommand::Cat(Some(Category::Side))));
        assert_eq!(parse("cat all"), Ok(SessionCommand::Cat(None)));
        assert!(parse("cat dessert").is_err());
    }

    #[test]
    fn add_prefers_listing_numbers_over_titles() {
        assert_eq!(parse("add 3"), Ok(SessionCommand::Add(AddTarget::Index(3))));
        assert_eq!(
            parse("add Apple pie"),
            Ok(SessionCommand::Add(AddTarget::Title("Apple pie".into())))
        );
        assert!(parse("add 0").is_err());
        assert!(parse("add").is_err());
    }

    #[test]
    fn quantity_commands_need_a_one_based_index() {
        assert_eq!(parse("inc 2"), Ok(SessionCommand::Inc(2)));
        assert_eq!(parse("dec 1"), Ok(SessionCommand::Dec(1)));
        assert_eq!(parse("rm 4"), Ok(SessionCommand::Rm(4)));
        assert!(parse("inc").is_err());
        assert!(parse("rm zero").is_err());
        assert!(parse("dec 0").is_err());
    }

    #[test]
    fn new_splits_title_and_ingredients() {
        assert_eq!(
            parse("new Apple pie: apple, flour , butter"),
            Ok(SessionCommand::New {
                title: "Apple pie".into(),
                ingredients: vec!["apple".into(), "flour".into(), "butter".into()],
            })
        );
        assert!(parse("new Apple pie").is_err());
    }
}
