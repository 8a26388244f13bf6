//! DistVis-RS - Medical Device Distribution Analyzer
//!
//! Command-line front end: loads a data set, applies the filter slots given on
//! the command line and prints one dashboard view.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use distvis_rs::analytics::{ChartKind, ACTIVITY_PAGE_SIZE};
use distvis_rs::config::{self, AppConfig, DisplaySettings};
use distvis_rs::filter::{FilterCriteria, FilterSlot};
use distvis_rs::hierarchy::GroupNode;
use distvis_rs::i18n::{self, Language};
use distvis_rs::Dashboard;
use std::io::Read;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Dashboard view to print
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum View {
    Overview,
    Charts,
    Tree,
    Graph,
    Records,
    Activity,
    Prompt,
}

#[derive(Debug, Parser)]
#[command(name = "distvis", version, about = "Medical device distribution analyzer")]
struct Cli {
    /// CSV/TSV or JSON data set; `-` reads from stdin
    input: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = View::Overview)]
    view: View,

    #[arg(long, default_value = "")]
    supplier_id: String,
    #[arg(long, default_value = "")]
    category: String,
    #[arg(long, default_value = "")]
    license_no: String,
    #[arg(long, default_value = "")]
    model: String,
    #[arg(long, default_value = "")]
    customer_id: String,
    #[arg(long, default_value = "")]
    lot_no: String,
    #[arg(long, default_value = "")]
    sn: String,
    /// Accepted for compatibility; matches no record field
    #[arg(long, default_value = "")]
    timezone: String,

    /// Rows for the records view, entries for the activity view, sample size
    /// for the prompt view
    #[arg(long)]
    limit: Option<usize>,

    /// Output language (en, zh-TW)
    #[arg(long)]
    lang: Option<Language>,

    /// Summary instruction for the prompt view
    #[arg(long, default_value = "")]
    instruction: String,

    /// Print the view as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn criteria(&self) -> FilterCriteria {
        let mut criteria = FilterCriteria::new();
        for slot in FilterSlot::ALL {
            let pattern = match slot {
                FilterSlot::Timezone => &self.timezone,
                FilterSlot::SupplierId => &self.supplier_id,
                FilterSlot::Category => &self.category,
                FilterSlot::LicenseNo => &self.license_no,
                FilterSlot::Model => &self.model,
                FilterSlot::CustomerId => &self.customer_id,
                FilterSlot::LotNo => &self.lot_no,
                FilterSlot::SerialNo => &self.sn,
            };
            criteria.set(slot, pattern.as_str());
        }
        criteria
    }
}

fn init_logging(app_config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.logging.filter));

    let (file_layer, guard) = if app_config.logging.log_to_file {
        match config::ensure_app_data_dir() {
            Ok(dir) => {
                let appender =
                    tracing_appender::rolling::daily(dir.join(config::LOG_DIR), "distvis.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("File logging disabled: {}", e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .init();

    guard
}

fn load_dataset(
    dashboard: &mut Dashboard,
    cli: &Cli,
    app_config: &AppConfig,
) -> anyhow::Result<()> {
    let input = cli
        .input
        .clone()
        .or_else(|| app_config.dataset.default_path.clone());

    let result = match input {
        Some(path) if path.as_os_str() == "-" => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            dashboard.load_text(&text)
        }
        Some(path) => dashboard.load_file(&path),
        None => bail!("No input given and no default data set configured"),
    };

    if let Err(e) = result {
        eprintln!("{}", e.user_message());
        return Err(e.into());
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_tree(node: &GroupNode, depth: usize, labels: &(String, String)) {
    println!(
        "{}{}  [{} {}, {} {}]",
        "  ".repeat(depth),
        node.display_label(),
        labels.0,
        node.level().depth(),
        labels.1,
        node.record_count()
    );
    for child in node.children() {
        print_tree(child, depth + 1, labels);
    }
}

fn render(dashboard: &Dashboard, cli: &Cli, app_config: &AppConfig) -> anyhow::Result<()> {
    match cli.view {
        View::Overview => {
            let overview = dashboard.overview();
            if cli.json {
                return print_json(&overview);
            }
            println!("{} - {}", i18n::tr("app_title"), i18n::tr("app_subtitle"));
            if !dashboard.criteria().is_empty() {
                println!("{}", i18n::tr("filter_dataset"));
            }
            for (slot, pattern) in dashboard.criteria().active_slots() {
                println!("  {}: {}", slot.label(), pattern);
            }
            for (label, value) in overview.labeled() {
                println!("{:<24} {}", label, value);
            }
        }
        View::Charts => {
            let charts = dashboard.charts();
            if cli.json {
                return print_json(&charts);
            }
            for kind in ChartKind::ALL {
                let Some(series) = charts.get(kind) else { continue };
                println!("{}", kind.title());
                for point in &series.points {
                    println!("  {:<24} {}", point.name, point.value);
                }
            }
        }
        View::Tree => {
            let root = dashboard.hierarchy();
            if cli.json {
                return print_json(&root);
            }
            let labels = (i18n::tr("node_level"), i18n::tr("node_count"));
            print_tree(&root, 0, &labels);
        }
        View::Graph => {
            let graph = dashboard.network_graph();
            if cli.json {
                return print_json(&graph);
            }
            println!("{}", i18n::tr("network_graph"));
            println!("{}", i18n::tr("network_graph_desc"));
            for link in &graph.links {
                let source = graph.node(link.source);
                let target = graph.node(link.target);
                if let (Some(source), Some(target)) = (source, target) {
                    println!("  {} -> {}", source.label, target.label);
                }
            }
        }
        View::Records => {
            let limit = cli.limit.unwrap_or(app_config.dataset.preview_rows);
            let preview = dashboard.preview(limit);
            if cli.json {
                return print_json(&preview);
            }
            println!(
                "{} ({} {})",
                i18n::tr("data_preview"),
                preview.total,
                i18n::tr("total_records_suffix")
            );
            println!("{}", preview.columns.join("\t"));
            for row in &preview.rows {
                println!("{}", row.join("\t"));
            }
        }
        View::Activity => {
            let feed = dashboard.activity(cli.limit.unwrap_or(ACTIVITY_PAGE_SIZE));
            if cli.json {
                return print_json(&feed);
            }
            println!("{}", i18n::tr("activity_title"));
            for entry in &feed.entries {
                println!("{}  {}", entry.supplier, entry.delivered);
                println!("  {}", entry.description());
                println!("  {}", entry.license_line());
            }
            if feed.has_more() {
                println!("{} (--limit {})", i18n::tr("activity_load_more"), feed.next_limit());
            }
        }
        View::Prompt => {
            let mut summary = app_config.summary.clone();
            if let Some(limit) = cli.limit {
                summary.sample_limit = limit;
            }
            let Some(request) = dashboard.summary_request(&cli.instruction, &summary) else {
                bail!("No records match the current filters");
            };
            if cli.json {
                return print_json(&request);
            }
            println!("{}", request.prompt()?);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (app_config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let _guard = init_logging(&app_config);
    if let Some(e) = config_error {
        tracing::warn!("Failed to load app config, using defaults: {}", e);
    }

    let mut display = DisplaySettings::load_or_default();
    if let Some(lang) = cli.lang {
        display.language = lang;
    }
    display.apply();

    let mut dashboard = Dashboard::new();
    load_dataset(&mut dashboard, &cli, &app_config)?;
    dashboard.set_criteria(cli.criteria());
    tracing::debug!(
        "{} of {} record(s) match",
        dashboard.filtered().len(),
        dashboard.records().len()
    );

    render(&dashboard, &cli, &app_config)
}
