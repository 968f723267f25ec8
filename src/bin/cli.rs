//! Vizboard CLI
//!
//! Terminal front end over the dashboard pipeline:
//! - List report cards (with title search or filters)
//! - Print the dashboard charts as text
//! - List filter options
//! - Export CSV
//! - Generate a config file

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use vizboard::config::{generate_default_config, Config};
use vizboard::export;
use vizboard::pipeline::{ChartData, ChartSpec, DashboardView, FilterSelection, GroupedCount};
use vizboard::record::{Field, Record};
use vizboard::store::{LoadOutcome, RecordStore};

/// Width of the longest bar in text charts
const BAR_WIDTH: usize = 40;

/// Width of the label column in text charts
const LABEL_WIDTH: usize = 32;

#[derive(Parser)]
#[command(name = "vizboard-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Filter and chart the report dataset from the terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset URL (overrides config)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Read the dataset from a local JSON file (overrides config)
    #[arg(long, global = true, conflicts_with = "url")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Exact-match filters, one per select of the dashboard
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Only records from this country
    #[arg(long)]
    pub country: Option<String>,
    /// Only records in this sector
    #[arg(long)]
    pub sector: Option<String>,
    /// Only records in this region
    #[arg(long)]
    pub region: Option<String>,
    /// Only records on this topic
    #[arg(long)]
    pub topic: Option<String>,
}

impl FilterArgs {
    fn selection(&self) -> FilterSelection {
        let mut selection = FilterSelection::new();
        selection.set(Field::Country, self.country.clone());
        selection.set(Field::Sector, self.sector.clone());
        selection.set(Field::Region, self.region.clone());
        selection.set(Field::Topic, self.topic.clone());
        selection
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportKind {
    /// Filtered records
    Records,
    /// Grouped counts of one field (requires --field)
    Counts,
    /// Likelihood series
    Likelihood,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List report cards
    Records {
        #[command(flatten)]
        filters: FilterArgs,
        /// Case-insensitive title search over the whole dataset
        #[arg(short, long, conflicts_with_all = ["country", "sector", "region", "topic"])]
        search: Option<String>,
        /// Show at most this many records
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Print the dashboard charts for the filtered subset
    Charts {
        #[command(flatten)]
        filters: FilterArgs,
    },

    /// List the options of the filter selects
    Facets {
        /// Only this field (default: all four filterable fields)
        #[arg(long)]
        field: Option<Field>,
    },

    /// Export the filtered subset as CSV
    Export {
        #[command(flatten)]
        filters: FilterArgs,
        /// What to export
        #[arg(short, long, value_enum, default_value = "records")]
        kind: ExportKind,
        /// Field to group by for `--kind counts`
        #[arg(long, required_if_eq("kind", "counts"))]
        field: Option<Field>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(&cli)?;
    vizboard::logging::init(&config.logging);

    match &cli.command {
        Commands::Records {
            filters,
            search,
            limit,
        } => {
            let store = load_store(&config).await?;
            let records = match search {
                Some(query) => store.search(query),
                None => store.filtered(&filters.selection()),
            };
            let shown: Vec<&Record> = records
                .iter()
                .copied()
                .take(limit.unwrap_or(usize::MAX))
                .collect();

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
                OutputFormat::Csv => {
                    export::write_records(std::io::stdout().lock(), shown.iter().copied())?;
                }
                OutputFormat::Table => print_cards(&shown, records.len(), store.len()),
            }
        }

        Commands::Charts { filters } => {
            let store = load_store(&config).await?;
            let view = store.view(&filters.selection());

            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&view)?),
                OutputFormat::Csv => {
                    for chart in &view.charts {
                        println!("# {}", chart.title);
                        write_chart_csv(std::io::stdout().lock(), chart)?;
                        println!();
                    }
                }
                OutputFormat::Table => print_dashboard(&view),
            }
        }

        Commands::Facets { field } => {
            let store = load_store(&config).await?;
            let options = store.options();
            let fields: Vec<Field> = match field {
                Some(f) => vec![*f],
                None => Field::FILTERABLE.to_vec(),
            };

            match cli.format {
                OutputFormat::Json => {
                    let map: serde_json::Map<String, serde_json::Value> = fields
                        .iter()
                        .map(|f| (f.to_string(), serde_json::json!(options.get(*f))))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&map)?);
                }
                OutputFormat::Csv => {
                    let facets: Vec<(Field, &[String])> =
                        fields.iter().map(|f| (*f, options.get(*f))).collect();
                    export::write_facets(std::io::stdout().lock(), &facets)?;
                }
                OutputFormat::Table => {
                    for f in &fields {
                        let values = options.get(*f);
                        println!("{} ({} options)", f.label(), values.len());
                        for value in values {
                            println!("  {}", value);
                        }
                        println!();
                    }
                }
            }
        }

        Commands::Export {
            filters,
            kind,
            field,
            output,
        } => {
            let store = load_store(&config).await?;
            let selection = filters.selection();
            let subset = store.filtered(&selection);

            let mut sink: Box<dyn Write> = match output {
                Some(path) => Box::new(std::fs::File::create(path)?),
                None => Box::new(std::io::stdout().lock()),
            };

            match kind {
                ExportKind::Records => {
                    let rows = export::write_records(&mut sink, subset.iter().copied())?;
                    tracing::info!(rows, selection = %selection, "Exported records");
                }
                ExportKind::Counts => {
                    let field = field.ok_or_else(|| anyhow::anyhow!("--field is required for counts"))?;
                    let counts = vizboard::pipeline::group_count(subset.iter().copied(), field);
                    export::write_counts(&mut sink, field.as_str(), &counts)?;
                }
                ExportKind::Likelihood => {
                    let series = vizboard::pipeline::likelihood_series(subset.iter().copied());
                    export::write_series(&mut sink, &series)?;
                }
            }

            if let Some(path) = output {
                eprintln!("Wrote {}", path.display());
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(path, content)?;
                    println!("Config written to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Config from `--config` or the default locations, with `--url`/`--file` applied
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    if let Some(url) = &cli.url {
        config.source.url = url.clone();
        config.source.file = None;
    }
    if let Some(file) = &cli.file {
        config.source.file = Some(file.clone());
    }

    Ok(config)
}

/// Fetch the dataset once. A failed fetch yields an empty store.
async fn load_store(config: &Config) -> anyhow::Result<RecordStore> {
    let source = config.source.build()?;
    let store = RecordStore::load(source.as_ref()).await;

    match store.outcome() {
        LoadOutcome::Failed { reason } => {
            eprintln!("Dataset unavailable ({}), showing empty results", reason);
        }
        LoadOutcome::Loaded { count } => {
            tracing::debug!(count, loaded_at = %store.loaded_at(), "Dataset ready");
        }
    }

    Ok(store)
}

fn print_cards(records: &[&Record], matched: usize, total: usize) {
    if records.is_empty() {
        println!("No matching records.");
        return;
    }

    for record in records {
        println!("{}", record.title.as_deref().unwrap_or("(untitled)"));
        println!("  Sector:  {}", record.sector.as_deref().unwrap_or(""));
        println!("  Topic:   {}", record.topic.as_deref().unwrap_or(""));
        println!("  Region:  {}", record.region.as_deref().unwrap_or(""));
        println!("  Country: {}", record.country.as_deref().unwrap_or(""));
        if let Some(url) = &record.url {
            println!("  Report:  {}", url);
        }
        println!();
    }

    println!("{} shown, {} matched, {} total", records.len(), matched, total);
}

fn print_dashboard(view: &DashboardView) {
    println!("Data Visualization Dashboard");
    println!("Filters: {}", view.selection);
    println!("{} of {} records", view.matched, view.total);

    for chart in &view.charts {
        println!();
        println!("{} ({:?})", chart.title, chart.kind);
        println!("{}", "-".repeat(LABEL_WIDTH + BAR_WIDTH + 10));

        if chart.data.is_empty() {
            println!("  No data");
            continue;
        }

        match &chart.data {
            ChartData::Grouped(groups) => print_groups(groups),
            ChartData::Series(_) => {
                for (label, value) in chart.data.pairs() {
                    println!("  {:<width$} {:>6.1}", truncate(label, LABEL_WIDTH), value, width = LABEL_WIDTH);
                }
            }
        }
    }
}

fn print_groups(groups: &[GroupedCount]) {
    let max = groups.iter().map(|g| g.count).max().unwrap_or(0).max(1);
    let total: usize = groups.iter().map(|g| g.count).sum();

    for group in groups {
        let label = if group.key.is_empty() { "(none)" } else { group.key.as_str() };
        let bar = "#".repeat((group.count * BAR_WIDTH).div_ceil(max));
        let share = group.count as f64 * 100.0 / total.max(1) as f64;
        println!(
            "  {:<lw$} {:<bw$} {:>5} {:>5.1}%",
            truncate(label, LABEL_WIDTH),
            bar,
            group.count,
            share,
            lw = LABEL_WIDTH,
            bw = BAR_WIDTH
        );
    }
}

fn write_chart_csv(writer: impl Write, chart: &ChartSpec) -> anyhow::Result<()> {
    match &chart.data {
        ChartData::Grouped(groups) => export::write_counts(writer, &chart.id, groups)?,
        ChartData::Series(points) => export::write_series(writer, points)?,
    }
    Ok(())
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(width.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}
