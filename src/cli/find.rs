use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::catalog::store::LayoutCatalog;
use crate::cli::OutputFormat;
use crate::core::filter::{AreaBounds, AreaRange};
use crate::core::types::{EntryPosition, Shape, StoragePosition};
use crate::matching::engine::{MatchOutcome, MatchSource};
use crate::matching::naming::CodeAlphabet;
use crate::matching::ranking::SortMode;
use crate::session::configurator::{Configurator, SessionConfig};
use crate::session::view::LayoutCard;
use crate::session::wizard::WizardEvent;

/// Message shown when neither exact nor similar layouts exist
pub const NO_MATCHES_MESSAGE: &str = "No matching layouts, try adjusting parameters.";

#[derive(Args)]
pub struct FindArgs {
    /// Smallest acceptable area in m²
    #[arg(long)]
    pub min_area: Option<f64>,

    /// Largest acceptable area in m²
    #[arg(long)]
    pub max_area: Option<f64>,

    /// Room shape (square, horizontal, vertical)
    #[arg(long)]
    pub shape: Option<Shape>,

    /// Client door position on the facade (left, center, right)
    #[arg(long)]
    pub entry: Option<EntryPosition>,

    /// Storage door position (e.g. top-left, left-center, right-bottom)
    #[arg(long)]
    pub storage: Option<StoragePosition>,

    /// Result order (relevance, area-asc, area-desc)
    #[arg(long, default_value = "relevance")]
    pub sort: SortMode,

    /// Maximum number of layouts to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Print layout codes with Latin letters
    #[arg(long)]
    pub latin: bool,
}

/// Execute find subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded or the area range is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FindArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let catalog = if let Some(path) = &args.catalog {
        LayoutCatalog::load_from_file(path)?
    } else {
        LayoutCatalog::load_embedded()?
    };

    if verbose {
        eprintln!(
            "Loaded catalog with {} layouts ({} authored)",
            catalog.len(),
            catalog.records().len()
        );
    }

    if catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, no layouts to match against.");
        return Ok(());
    }

    let bounds = AreaBounds::default();
    let range = AreaRange::new(
        args.min_area.unwrap_or(bounds.min),
        args.max_area.unwrap_or(bounds.max),
        &bounds,
    )?;

    let config = SessionConfig {
        alphabet: if args.latin {
            CodeAlphabet::Latin
        } else {
            CodeAlphabet::Cyrillic
        },
        ..SessionConfig::default()
    };
    let mut session = Configurator::new(Arc::new(catalog), config);

    // Same path as the guided flow: area, shape, doors, then results
    session.set_area_range(range.low(), range.high());
    session.apply(WizardEvent::Next);
    if let Some(shape) = args.shape {
        session.choose_shape(shape);
    }
    session.apply(WizardEvent::Next);
    if let Some(entry) = args.entry {
        session.choose_entry(entry);
    }
    if let Some(storage) = args.storage {
        session.choose_storage(storage);
    }
    session.set_sort(args.sort);
    session.finish_sorting();
    session.settle();
    session.apply(WizardEvent::ShowResults);

    if verbose {
        eprintln!("Filters: {}", describe_filters(&session));
    }

    let outcome = session.outcome();
    if outcome.source() == MatchSource::Empty {
        eprintln!("{NO_MATCHES_MESSAGE}");
        return Ok(());
    }

    let mut cards = session.cards();
    if let Some(limit) = args.limit {
        cards.truncate(limit);
    }

    match format {
        OutputFormat::Text => print_text_results(&cards, outcome, verbose),
        OutputFormat::Json => print_json_results(&cards, outcome)?,
        OutputFormat::Tsv => print_tsv_results(&cards),
    }

    Ok(())
}

fn describe_filters(session: &Configurator) -> String {
    let filters = session.applied_filters();
    let or_any = |value: Option<String>| value.unwrap_or_else(|| "any".to_string());
    format!(
        "area {}, shape {}, entry {}, storage {}, sort {}",
        filters.area_range,
        or_any(filters.shape.map(|s| s.to_string())),
        or_any(filters.entry.map(|e| e.to_string())),
        or_any(filters.storage.map(|s| s.to_string())),
        session.sort_mode(),
    )
}

fn print_text_results(cards: &[LayoutCard], outcome: &MatchOutcome, verbose: bool) {
    match outcome.source() {
        MatchSource::Exact => {
            println!("Found {} matching layouts\n", outcome.exact.len());
        }
        MatchSource::Similar => {
            println!("No exact matches. Similar layouts:");
            if let Some(tier) = outcome.similar_tier {
                println!("  ({tier})");
            }
            println!();
        }
        MatchSource::Empty => {}
    }

    println!(
        "{:<14} {:>6} {:>8} {:<10} {:<7} {:<13} {:>9}",
        "Code", "ID", "Area", "Shape", "Entry", "Storage", "Size"
    );
    println!("{}", "-".repeat(74));

    for card in cards {
        let l = &card.layout;
        println!(
            "{:<14} {:>6} {:>6} m² {:<10} {:<7} {:<13} {:>4}x{:<4}{}",
            card.code,
            l.id.to_string(),
            l.area,
            l.shape.to_string(),
            l.entry.to_string(),
            l.storage.to_string(),
            format!("{:.1}", l.width),
            format!("{:.1}", l.depth),
            if card.is_best_match { "  ★ best match" } else { "" },
        );
        if verbose && l.is_mirrored {
            println!("  └─ mirrored from layout {}", l.original_id);
        }
    }
}

fn print_json_results(cards: &[LayoutCard], outcome: &MatchOutcome) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "source": outcome.source(),
        "similar_tier": outcome.similar_tier,
        "exact_count": outcome.exact.len(),
        "similar_count": outcome.similar.len(),
        "best_match_id": outcome.highlighted_best_match(),
        "layouts": cards,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(cards: &[LayoutCard]) {
    println!("code\tid\toriginal_id\tarea\tshape\tentry\tstorage\twidth\tdepth\tmirrored\tbest_match");
    for card in cards {
        let l = &card.layout;
        println!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            card.code,
            l.id,
            l.original_id,
            l.area,
            l.shape,
            l.entry,
            l.storage,
            l.width,
            l.depth,
            l.is_mirrored,
            card.is_best_match
        );
    }
}
