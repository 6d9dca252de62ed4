use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use log::{LevelFilter, error, info};
use std::path::{Path, PathBuf};

mod logger;

use photobook_layout::{
    BookSize, CatalogLoad, Gutters, LayoutCatalog, Margins, PageKind, TemplateOptions,
};

#[derive(Parser)]
#[command(
    name = "pbgen",
    about = "Generate photo book page layout templates",
    version
)]
struct Cli {
    /// Logging level
    #[arg(short, long, global = true, default_value = "info", value_enum)]
    log: LogArg,

    /// Prefix log lines with a timestamp
    #[arg(long, global = true)]
    timestamps: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate layout templates for a book
    Generate {
        /// Book to generate layout templates for
        #[arg(value_enum)]
        book: BookArg,

        /// Output directory (must exist)
        #[arg(short, long, default_value = ".")]
        outdir: PathBuf,

        /// Name for the generated set of layout templates
        #[arg(short, long)]
        name: Option<String>,

        /// Page margins: 1 value for all sides, 2 for vertical and horizontal,
        /// 3 for top, horizontal, bottom, or 4 for top, right, bottom, left
        #[arg(short, long, num_args = 1..=4, default_values_t = [0.0])]
        margin: Vec<f64>,

        /// Gutter between images: 1 value, or 2 for vertical and horizontal
        #[arg(short, long, num_args = 1..=2, default_values_t = [0.0])]
        gutter: Vec<f64>,

        /// Desired ratio between width and height of the content on a page
        #[arg(short, long)]
        ratio: Option<f64>,

        #[command(flatten)]
        catalog: CatalogArgs,

        /// Also write the resolved options as JSON
        #[arg(long)]
        save_config: Option<PathBuf>,
    },

    /// Generate layout templates from a saved JSON options file
    FromConfig {
        /// Options file written by `generate --save-config`
        config: PathBuf,

        /// Output directory (must exist)
        #[arg(short, long, default_value = ".")]
        outdir: PathBuf,

        #[command(flatten)]
        catalog: CatalogArgs,
    },

    /// List the layouts in the catalog
    List {
        #[command(flatten)]
        catalog: CatalogArgs,
    },
}

#[derive(Args)]
struct CatalogArgs {
    /// JSON layout catalog to use instead of the builtin one
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum BookArg {
    SmallSquare,
    StandardPortrait,
    StandardLandscape,
    LargeLandscape,
    LargeSquare,
    Magazine,
    #[value(name = "trade-book-8x10")]
    TradeBook8x10,
    #[value(name = "trade-book-6x9")]
    TradeBook6x9,
    #[value(name = "trade-book-5x8")]
    TradeBook5x8,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<BookArg> for BookSize {
    fn from(arg: BookArg) -> Self {
        match arg {
            BookArg::SmallSquare => Self::SmallSquare,
            BookArg::StandardPortrait => Self::StandardPortrait,
            BookArg::StandardLandscape => Self::StandardLandscape,
            BookArg::LargeLandscape => Self::LargeLandscape,
            BookArg::LargeSquare => Self::LargeSquare,
            BookArg::Magazine => Self::Magazine,
            BookArg::TradeBook8x10 => Self::TradeBook8x10,
            BookArg::TradeBook6x9 => Self::TradeBook6x9,
            BookArg::TradeBook5x8 => Self::TradeBook5x8,
        }
    }
}

impl From<LogArg> for LevelFilter {
    fn from(arg: LogArg) -> Self {
        match arg {
            LogArg::Error => Self::Error,
            LogArg::Warn => Self::Warn,
            LogArg::Info => Self::Info,
            LogArg::Debug => Self::Debug,
            LogArg::Trace => Self::Trace,
        }
    }
}

async fn load_catalog(args: &CatalogArgs) -> Result<CatalogLoad> {
    let load = match &args.catalog {
        Some(path) => LayoutCatalog::load(path).await?,
        None => LayoutCatalog::builtin(),
    };
    Ok(load)
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.is_dir() {
        bail!("output directory {} does not exist", path.display());
    }
    Ok(())
}

async fn run_generation(outdir: &Path, options: &TemplateOptions, load: CatalogLoad) -> Result<()> {
    let report = photobook_layout::generate(outdir, options, load).await?;

    println!("Style: {}", report.style_name);
    println!("  Pages written: {}", report.pages.len());
    println!("  Layout file: {}", report.paths.layout_style.display());
    println!("  Templates: {}", report.paths.template_pages.display());
    if !report.degenerate.is_empty() {
        println!(
            "  Pages with negative-size slots: {}",
            report.degenerate.join(", ")
        );
    }

    if !report.is_success() {
        for failure in &report.failures {
            error!("{}", failure);
        }
        bail!("{} layout(s) failed", report.failures.len());
    }

    Ok(())
}

fn list_catalog(load: &CatalogLoad) -> Result<()> {
    for (kind, entry) in load.catalog.iter() {
        let kind = match kind {
            PageKind::Single => "single",
            PageKind::Spread => "spread",
        };
        let conflicts = entry.grid.covered_conflicts();
        println!(
            "{}  {:<6}  {}x{}  {} slot(s){}",
            entry.id,
            kind,
            entry.grid.row_count(),
            entry.grid.column_count(),
            entry.grid.slot_count(),
            if conflicts.is_empty() {
                String::new()
            } else {
                format!("  ({} covered cell conflict(s))", conflicts.len())
            }
        );
    }

    if !load.failures.is_empty() {
        for failure in &load.failures {
            error!("{}", failure);
        }
        bail!("{} layout(s) failed", load.failures.len());
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.log.into(), cli.timestamps).init()?;

    match cli.command {
        Commands::Generate {
            book,
            outdir,
            name,
            margin,
            gutter,
            ratio,
            catalog,
            save_config,
        } => {
            ensure_dir(&outdir)?;

            let options = TemplateOptions {
                book: book.into(),
                name,
                margins: Margins::from_values(&margin)?,
                gutters: Gutters::from_values(&gutter)?,
                ratio,
            };
            options.validate()?;

            if let Some(path) = save_config {
                options.save(&path).await?;
                info!("Saved options to {}", path.display());
            }

            let load = load_catalog(&catalog).await?;
            run_generation(&outdir, &options, load).await?;
        }

        Commands::FromConfig {
            config,
            outdir,
            catalog,
        } => {
            ensure_dir(&outdir)?;

            let options = TemplateOptions::load(&config).await?;
            let load = load_catalog(&catalog).await?;
            run_generation(&outdir, &options, load).await?;
        }

        Commands::List { catalog } => {
            let load = load_catalog(&catalog).await?;
            list_catalog(&load)?;
        }
    }

    Ok(())
}
