use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::trip_io;
use crate::model::{Category, Trip};
use crate::ops::itinerary_ops::next_item;
use crate::ops::{check, search};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let trip_path = cli.trip_file.as_deref();

    let Some(cmd) = cli.command else {
        return Err("no subcommand given (try `trip --help`)".into());
    };

    // check reports invalid data instead of refusing to load it
    if let Commands::Check = cmd {
        let trip = trip_io::load_trip_unchecked(trip_path)?;
        return cmd_check(&trip, json);
    }

    let trip = trip_io::load_trip(trip_path)?;
    match cmd {
        Commands::Days => cmd_days(&trip, json),
        Commands::Show(args) => cmd_show(&trip, args, json),
        Commands::Item(args) => cmd_item(&trip, args, json),
        Commands::Reference => cmd_reference(&trip, json),
        Commands::Search(args) => cmd_search(&trip, args, json),
        Commands::Check => cmd_check(&trip, json),
    }
}

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_days(trip: &Trip, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        let days: Vec<_> = trip
            .days
            .iter()
            .enumerate()
            .map(|(i, d)| day_summary_to_json(i, d))
            .collect();
        println!("{}", serde_json::to_string_pretty(&days)?);
        return Ok(());
    }

    if !trip.info.name.is_empty() {
        println!("{} {}", trip.info.name, trip.info.year);
        println!();
    }
    for day in &trip.days {
        println!("{}", format_day_line(day));
    }
    Ok(())
}

fn cmd_show(trip: &Trip, args: ShowArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let index = trip
        .resolve_day(&args.day)
        .ok_or_else(|| format!("day not found: {}", args.day))?;
    let day = &trip.days[index];

    if json {
        println!("{}", serde_json::to_string_pretty(&day_to_json(index, day))?);
    } else {
        print_lines(&format_day_schedule(day));
    }
    Ok(())
}

fn cmd_item(trip: &Trip, args: ItemArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (day_index, item) = trip
        .find_item(&args.id)
        .ok_or_else(|| format!("item not found: {}", args.id))?;
    let day = &trip.days[day_index];
    let next = next_item(day, &item.id);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&item_to_json(day, item, next))?
        );
    } else {
        print_lines(&format_item_detail(day, item, next));
    }
    Ok(())
}

fn cmd_reference(trip: &Trip, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&reference_to_json(trip))?);
    } else {
        print_lines(&format_reference(trip));
    }
    Ok(())
}

fn cmd_search(trip: &Trip, args: SearchArgs, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let category = match args.category.as_deref() {
        Some(c) => Some(Category::parse(c).ok_or_else(|| {
            format!(
                "unknown category '{}' (expected: transport, food, activity, hotel, shopping, other)",
                c
            )
        })?),
        None => None,
    };
    let filter = search::SearchFilter {
        category,
        tag: args.tag,
    };
    let re = search::build_regex(&args.pattern)
        .ok_or_else(|| format!("invalid search pattern: {}", args.pattern))?;
    let hits = search::search_items(trip, Some(&re), &filter);
    tracing::debug!(pattern = %args.pattern, hits = hits.len(), "search");

    if json {
        let out: Vec<_> = hits.iter().map(|h| search_hit_to_json(trip, h)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for hit in &hits {
            println!("{}", format_search_hit(trip, hit));
        }
    }
    Ok(())
}

fn cmd_check(trip: &Trip, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let result = check::check_trip(trip);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_lines(&format_check_result(&result));
    }

    if result.valid {
        Ok(())
    } else {
        Err(format!("{} error(s) in trip data", result.errors.len()).into())
    }
}
