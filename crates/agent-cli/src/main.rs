//! Command-line interface for the commodity tools
//!
//! ```bash
//! export QUANDL_API_KEY="your-key"
//! commodity-cli trend Brent WTI Gold
//! commodity-cli call market_analysis '{"commodity": "Silver"}'
//! ```

use agent_commodity::{
    CacheReadTool, CommoditySymbolMap, FileReadTool, KeywordGeneratorTool, MarketAnalysisTool,
    ResearchCache, SentimentAnalysisTool, TrendAnalyzer, TrendConfig, TrendReport,
};
use agent_tools::ToolRegistry;
use agent_utils::LogFormat;
use anyhow::Context as _;
use clap::{Parser, Subcommand};
use comfy_table::{Table, presets::UTF8_FULL};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(name = "commodity-cli")]
#[command(about = "Commodity market tools for agent orchestration", long_about = None)]
struct Args {
    /// JSON file with `[{"name": .., "code": ..}]` entries replacing the built-in symbols
    #[arg(long, global = true)]
    symbols_file: Option<PathBuf>,

    /// JSON array of keywords served by the keyword tool
    #[arg(long, global = true)]
    keywords_file: Option<PathBuf>,

    /// JSON array of prior research results served by the cache tool
    #[arg(long, global = true)]
    research_file: Option<PathBuf>,

    /// File exposed through the file read tool
    #[arg(long, global = true)]
    report_file: Option<PathBuf>,

    /// News file (articles separated by blank lines) scored by the sentiment tool
    #[arg(long, global = true)]
    articles_file: Option<PathBuf>,

    /// Market data API base URL
    #[arg(long, global = true, env = "QUANDL_API_BASE")]
    api_base: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 10)]
    timeout_secs: u64,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze the trend of one or more commodities
    Trend {
        /// Commodity names, matched exactly
        #[arg(required = true)]
        commodities: Vec<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List configured commodities
    Symbols,
    /// List available tools
    Tools,
    /// Invoke a tool by name with JSON parameters
    Call {
        tool: String,
        #[arg(default_value = "{}")]
        params: String,
    },
}

fn load_symbols(args: &Args) -> anyhow::Result<CommoditySymbolMap> {
    match &args.symbols_file {
        Some(path) => CommoditySymbolMap::from_json_file(path)
            .with_context(|| format!("failed to load symbols from {}", path.display())),
        None => Ok(CommoditySymbolMap::builtin()),
    }
}

fn load_config(args: &Args) -> anyhow::Result<TrendConfig> {
    let mut builder = TrendConfig::builder().timeout_secs(args.timeout_secs);
    if let Some(base) = &args.api_base {
        builder = builder.endpoint(base.clone());
    }
    Ok(builder.with_env().build()?)
}

/// Register every tool the configuration allows
fn build_registry(args: &Args, analyzer: Option<TrendAnalyzer>) -> anyhow::Result<ToolRegistry> {
    let registry = ToolRegistry::new();

    if let Some(analyzer) = analyzer {
        registry.register(Arc::new(MarketAnalysisTool::new(analyzer)));
    }

    let keywords = match &args.keywords_file {
        Some(path) => KeywordGeneratorTool::from_json_file(path)
            .with_context(|| format!("failed to load keywords from {}", path.display()))?,
        None => KeywordGeneratorTool::from_symbols(&load_symbols(args)?),
    };
    registry.register(Arc::new(keywords));

    let cache = match &args.research_file {
        Some(path) => ResearchCache::from_json_file(path)
            .with_context(|| format!("failed to load research from {}", path.display()))?,
        None => ResearchCache::new(),
    };
    registry.register(Arc::new(CacheReadTool::new(cache)));

    if let Some(path) = &args.report_file {
        registry.register(Arc::new(FileReadTool::new(path)));
    }

    if let Some(path) = &args.articles_file {
        registry.register(Arc::new(SentimentAnalysisTool::new(path)));
    }

    Ok(registry)
}

fn render_reports(outcomes: &[(String, agent_commodity::Result<TrendReport>)]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Commodity",
        "Price",
        "Moving average",
        "Trend",
    ]);

    for (name, outcome) in outcomes {
        match outcome {
            Ok(report) => table.add_row(vec![
                report.commodity.clone(),
                format!("{:.2}", report.current_price),
                format!("{:.2}", report.moving_average),
                report.trend.to_string(),
            ]),
            Err(err) => table.add_row(vec![
                name.clone(),
                "-".to_string(),
                "-".to_string(),
                err.to_string(),
            ]),
        };
    }

    table
}

fn outcomes_to_json(
    outcomes: &[(String, agent_commodity::Result<TrendReport>)],
) -> serde_json::Result<serde_json::Value> {
    let rows = outcomes
        .iter()
        .map(|(name, outcome)| match outcome {
            Ok(report) => serde_json::to_value(report),
            Err(err) => Ok(serde_json::json!({
                "commodity": name,
                "error": err.kind(),
                "message": err.to_string(),
            })),
        })
        .collect::<serde_json::Result<Vec<_>>>()?;

    Ok(serde_json::Value::Array(rows))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let format = if args.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    agent_utils::init_tracing_with(format, "warn,agent_commodity=info");

    debug!(?args, "Parsed arguments");

    match &args.command {
        Command::Trend { commodities, json } => {
            let symbols = Arc::new(load_symbols(&args)?);
            let config = Arc::new(load_config(&args)?);
            let analyzer = TrendAnalyzer::with_quandl(symbols, config)?;

            info!(count = commodities.len(), "Analyzing commodities");
            let outcomes = analyzer.analyze_many(commodities.as_slice()).await;

            if *json {
                println!("{}", serde_json::to_string_pretty(&outcomes_to_json(&outcomes)?)?);
            } else {
                println!("{}", render_reports(&outcomes));
            }
        }
        Command::Symbols => {
            let symbols = load_symbols(&args)?;
            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(vec!["Commodity", "Dataset"]);
            for (name, code) in symbols.entries() {
                table.add_row(vec![name, code]);
            }
            println!("{table}");
        }
        Command::Tools => {
            // Listing does not need credentials
            let analyzer = match load_config(&args) {
                Ok(config) => Some(TrendAnalyzer::with_quandl(
                    Arc::new(load_symbols(&args)?),
                    Arc::new(config),
                )?),
                Err(err) => {
                    debug!(error = %err, "Market analysis tool unavailable");
                    None
                }
            };
            let registry = build_registry(&args, analyzer)?;

            let mut table = Table::new();
            table.load_preset(UTF8_FULL).set_header(vec!["Tool", "Description"]);
            for tool in registry.list_tools() {
                table.add_row(vec![tool.name(), tool.description()]);
            }
            println!("{table}");
        }
        Command::Call { tool, params } => {
            let params: serde_json::Value =
                serde_json::from_str(params).context("tool parameters must be valid JSON")?;

            let analyzer = if tool == "market_analysis" {
                Some(TrendAnalyzer::with_quandl(
                    Arc::new(load_symbols(&args)?),
                    Arc::new(load_config(&args)?),
                )?)
            } else {
                None
            };
            let registry = build_registry(&args, analyzer)?;

            let output = registry.execute(tool, params).await?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
