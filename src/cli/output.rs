//! Output formatting for CLI commands.

use crate::analysis::intent::QueryIntent;
use crate::catalog::record::CatalogRecord;
use crate::cli::args::{BrickseekArgs, OutputFormat};
use crate::error::Result;

/// Print an analyzed intent in the requested format.
pub fn print_intent(intent: &QueryIntent, args: &BrickseekArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(intent)?);
        }
        OutputFormat::Human => {
            println!("query:      {}", intent.original_query);
            println!("theme:      {}", option_or_dash(intent.theme.as_deref()));
            println!(
                "recency:    {}",
                option_or_dash(intent.recency.map(|r| r.to_string()).as_deref())
            );
            println!(
                "size:       {}",
                option_or_dash(intent.size.map(|s| s.to_string()).as_deref())
            );
            println!(
                "price:      {}",
                option_or_dash(intent.price.map(|p| p.to_string()).as_deref())
            );
            println!(
                "year:       {}",
                option_or_dash(intent.year.map(|y| y.to_string()).as_deref())
            );
            println!(
                "set number: {}",
                option_or_dash(intent.set_number.as_deref())
            );
            println!("keywords:   {}", intent.keywords.join(", "));
        }
    }
    Ok(())
}

/// Print a candidate query list in the requested format.
pub fn print_candidates(candidates: &[String], args: &BrickseekArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(candidates)?);
        }
        OutputFormat::Human => {
            if candidates.is_empty() {
                println!("(no candidates - blank query)");
            }
            for (index, candidate) in candidates.iter().enumerate() {
                println!("{:>2}. {candidate}", index + 1);
            }
        }
    }
    Ok(())
}

/// Print ranked records in the requested format.
pub fn print_records(records: &[CatalogRecord], args: &BrickseekArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(records)?);
        }
        OutputFormat::Human => {
            if records.is_empty() {
                println!("No results.");
                return Ok(());
            }
            for (index, record) in records.iter().enumerate() {
                println!(
                    "{:>2}. {} ({}) - {} - {} pieces{}{}",
                    index + 1,
                    record.name(),
                    record.set_id(),
                    record.theme(),
                    record.piece_count(),
                    record
                        .price()
                        .map(|p| format!(" - ${p:.2}"))
                        .unwrap_or_default(),
                    record
                        .release_year()
                        .map(|y| format!(" - {y}"))
                        .unwrap_or_default(),
                );
            }
        }
    }
    Ok(())
}

fn option_or_dash(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}
