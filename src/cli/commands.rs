//! Command implementations for the brickseek CLI.

use crate::analysis::QueryAnalyzer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::expand::expand;
use crate::pipeline::SearchPipeline;
use crate::pipeline::local::LocalCatalog;

/// Execute a CLI command.
pub fn execute_command(args: BrickseekArgs) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze_query(analyze_args.clone(), &args),
        Command::Expand(expand_args) => expand_query(expand_args.clone(), &args),
        Command::Search(search_args) => search_catalog(search_args.clone(), &args),
    }
}

/// Analyze a query and print the extracted intent.
fn analyze_query(args: AnalyzeArgs, cli_args: &BrickseekArgs) -> Result<()> {
    let analyzer = QueryAnalyzer::new();
    let intent = analyzer.analyze(&args.query);
    print_intent(&intent, cli_args)
}

/// Print the candidate queries generated for a query.
fn expand_query(args: ExpandArgs, cli_args: &BrickseekArgs) -> Result<()> {
    let analyzer = QueryAnalyzer::new();
    let intent = analyzer.analyze(&args.query);
    let candidates = expand(&intent);
    print_candidates(&candidates, cli_args)
}

/// Run the full pipeline against a local JSONL catalog.
fn search_catalog(args: SearchArgs, cli_args: &BrickseekArgs) -> Result<()> {
    let catalog = LocalCatalog::load_jsonl(&args.catalog_file)?;

    if cli_args.verbosity() > 1 {
        println!(
            "Loaded {} records from {}",
            catalog.len(),
            args.catalog_file.display()
        );
    }

    let pipeline = SearchPipeline::new(QueryAnalyzer::new())
        .with_source(Box::new(catalog))
        .parallel(args.parallel);

    let mut ranked = pipeline.process_and_rank(&args.query);
    ranked.truncate(args.limit);

    print_records(&ranked, cli_args)
}
