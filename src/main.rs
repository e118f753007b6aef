use std::collections::HashSet;
use std::error::Error;

use chemref::bundle;
use chemref::config::Config;
use chemref::error::SelectionError;
use chemref::filter::{search_with, Combine, ElementFilter, Selection};
use chemref::render::{element_card, table};
use chemref::PeriodicGrid;
use tracing::debug;

const USAGE: &str = "usage: chemref [category=..] [block=..] [period=N] [group=N] [state=..] \
[level=..] [mode=all|any] [words to search..]";

struct Args {
    filter: ElementFilter,
    combine: Combine,
    query: String,
}

fn parse_args<I>(args: I) -> Result<Args, SelectionError>
where
    I: IntoIterator<Item = String>,
{
    let mut filter = ElementFilter::default();
    let mut combine = Combine::All;
    let mut words = Vec::new();

    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            words.push(arg);
            continue;
        };
        let value = Some(value);
        match key.to_lowercase().as_str() {
            "category" => filter.category = Selection::from_query(value)?,
            "block" => filter.block = Selection::from_query(value)?,
            "period" => filter.period = Selection::<u8>::number_from_query("period", value)?,
            "group" => filter.group = Selection::<u8>::number_from_query("group", value)?,
            "state" => filter.state = Selection::from_query(value)?,
            "level" => filter.level = Selection::from_query(value)?,
            "mode" => combine = Combine::from_query(value),
            _ => return Err(SelectionError::new("option", key)),
        }
    }

    Ok(Args {
        filter,
        combine,
        query: words.join(" "),
    })
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };
    let config = Config::from_env()?;
    let catalog = bundle::load(&config.catalog, &config.cache_dir).await?;
    debug!(query = %args.query, filter = ?args.filter, "searching elements");

    let matches = search_with(&catalog.elements, &args.query, &args.filter, args.combine);
    let highlight: HashSet<u8> = matches.iter().map(|e| e.atomic_number).collect();
    let grid = PeriodicGrid::build(&catalog.elements);

    print!("{}", table(&grid, Some(&highlight)));
    println!();
    match matches.as_slice() {
        [] => println!("no elements match"),
        [only] => print!("{}", element_card(only)),
        many => {
            println!("{} elements match", many.len());
            for e in many {
                println!("{:>4} {:<3} {}", e.atomic_number, e.symbol, e.name);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chemref::catalog::{Category, Level};

    fn args(list: &[&str]) -> Result<Args, SelectionError> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_filters_and_words() {
        let parsed = args(&["category=noble-gas", "level=jee", "inert", "gas"]).unwrap();
        assert_eq!(parsed.filter.category, Selection::Only(Category::NobleGas));
        assert_eq!(parsed.filter.level, Selection::Only(Level::Jee));
        assert_eq!(parsed.query, "inert gas");
        assert_eq!(parsed.combine, Combine::All);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            args(&["colour=red"]).err(),
            Some(SelectionError::new("option", "colour"))
        );
        assert!(args(&["period=eight"]).is_err());
        assert_eq!(args(&["mode=any"]).unwrap().combine, Combine::Any);
    }
}
