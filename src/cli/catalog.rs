use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};

use crate::catalog::store::LayoutCatalog;
use crate::cli::OutputFormat;
use crate::core::layout::Layout;
use crate::core::types::{LayoutId, Shape};
use crate::matching::naming::layout_code;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all layouts in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by shape (square, horizontal, vertical)
        #[arg(long)]
        shape: Option<Shape>,

        /// Hide mirrored twins
        #[arg(long)]
        originals_only: bool,
    },

    /// Show details of a specific layout
    Show {
        /// Layout ID (mirrored twins are offset by 1000)
        #[arg(required = true)]
        id: LayoutId,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, the layout is not found,
/// or the export cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List {
            catalog,
            shape,
            originals_only,
        } => run_list(catalog.as_deref(), shape, originals_only, format, verbose),
        CatalogCommands::Show { id, catalog } => run_show(id, catalog.as_deref(), format),
        CatalogCommands::Export { output, catalog } => run_export(&output, catalog.as_deref()),
    }
}

fn load_catalog(path: Option<&Path>) -> anyhow::Result<LayoutCatalog> {
    let catalog = if let Some(path) = path {
        LayoutCatalog::load_from_file(path)?
    } else {
        LayoutCatalog::load_embedded()?
    };
    Ok(catalog)
}

fn run_list(
    catalog_path: Option<&Path>,
    shape_filter: Option<Shape>,
    originals_only: bool,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    if verbose {
        eprintln!(
            "Loaded catalog with {} layouts ({} authored)",
            catalog.len(),
            catalog.records().len()
        );
    }

    let filtered: Vec<&Layout> = catalog
        .layouts()
        .iter()
        .filter(|l| shape_filter.map_or(true, |shape| l.shape == shape))
        .filter(|l| !originals_only || !l.is_mirrored)
        .collect();

    match format {
        OutputFormat::Text => {
            let codes: Vec<String> = filtered.iter().map(|l| layout_code(l)).collect();

            // Calculate column widths dynamically
            let code_width = codes
                .iter()
                .map(|c| c.chars().count())
                .max()
                .unwrap_or(4)
                .max(4);
            let storage_width = filtered
                .iter()
                .map(|l| l.storage.as_str().len())
                .max()
                .unwrap_or(7)
                .max(7);

            let total_width = code_width + storage_width + 6 + 8 + 10 + 7 + 9 + 6;

            println!("Layout Catalog ({} layouts)\n", filtered.len());
            println!(
                "{:<code_w$} {:>6} {:>8} {:<10} {:<7} {:<st_w$} {:>9}",
                "Code",
                "ID",
                "Area",
                "Shape",
                "Entry",
                "Storage",
                "Size",
                code_w = code_width,
                st_w = storage_width
            );
            println!("{}", "-".repeat(total_width));

            for (l, code) in filtered.iter().zip(&codes) {
                println!(
                    "{:<code_w$} {:>6} {:>6} m² {:<10} {:<7} {:<st_w$} {:>9}",
                    code,
                    l.id.to_string(),
                    l.area,
                    l.shape.to_string(),
                    l.entry.to_string(),
                    l.storage.as_str(),
                    format!("{:.1}x{:.1}", l.width, l.depth),
                    code_w = code_width,
                    st_w = storage_width
                );
                if verbose && l.is_mirrored {
                    println!("  └─ mirrored from layout {}", l.original_id);
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|l| {
                    serde_json::json!({
                        "id": l.id,
                        "original_id": l.original_id,
                        "code": layout_code(l),
                        "area": l.area,
                        "shape": l.shape,
                        "entry": l.entry,
                        "storage": l.storage,
                        "width": l.width,
                        "depth": l.depth,
                        "is_mirrored": l.is_mirrored,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("id\tcode\tarea\tshape\tentry\tstorage\twidth\tdepth\tmirrored");
            for l in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
                    l.id,
                    layout_code(l),
                    l.area,
                    l.shape,
                    l.entry,
                    l.storage,
                    l.width,
                    l.depth,
                    l.is_mirrored
                );
            }
        }
    }

    Ok(())
}

fn run_show(id: LayoutId, catalog_path: Option<&Path>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let layout = catalog
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("Layout '{}' not found", id))?;
    let twin = catalog.twin(id);

    match format {
        OutputFormat::Text => {
            println!("Layout: {}\n", layout_code(layout));
            println!("ID:       {}", layout.id);
            println!("Area:     {} m²", layout.area);
            println!("Shape:    {}", layout.shape);
            println!("Size:     {:.1} x {:.1} m", layout.width, layout.depth);
            println!("Entry:    {}", layout.entry);
            println!("Storage:  {}", layout.storage);
            if layout.is_mirrored {
                println!("Mirror of: {}", layout.original_id);
            }
            if let Some(twin) = twin {
                println!("Twin:     {} ({})", twin.id, layout_code(twin));
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "layout": layout,
                "code": layout_code(layout),
                "twin_id": twin.map(|t| t.id),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("field\tvalue");
            println!("id\t{}", layout.id);
            println!("code\t{}", layout_code(layout));
            println!("area\t{}", layout.area);
            println!("shape\t{}", layout.shape);
            println!("width\t{}", layout.width);
            println!("depth\t{}", layout.depth);
            println!("entry\t{}", layout.entry);
            println!("storage\t{}", layout.storage);
            println!("original_id\t{}", layout.original_id);
            println!("mirrored\t{}", layout.is_mirrored);
        }
    }

    Ok(())
}

fn run_export(output: &Path, catalog_path: Option<&Path>) -> anyhow::Result<()> {
    let catalog = load_catalog(catalog_path)?;

    let json = catalog.to_json()?;
    std::fs::write(output, json)?;

    println!(
        "Exported {} layouts to {}",
        catalog.records().len(),
        output.display()
    );

    Ok(())
}
