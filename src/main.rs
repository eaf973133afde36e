//! Transfer Engine - Entry Point

use clap::Parser;
use std::convert::Infallible;
use std::io::Write;
use std::path::PathBuf;
use tracing::info;
use transfer_engine::engine::{Transfer, TransferOptions};
use transfer_engine::model::{AppError, ItemKey, KeySet};
use transfer_engine::source::ScriptSource;

/// Transfer Engine - replay dual-list transfer interactions
#[derive(Parser, Debug)]
#[command(name = "transfer-engine")]
#[command(version)]
#[command(about = "Replay a script of transfer intents against an item catalogue and print the result as JSON")]
pub struct Args {
    /// Path to the JSON item catalogue
    pub items: PathBuf,

    /// Path to a JSON intent script ("-" reads stdin)
    #[arg(short, long)]
    pub script: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Paginate both lists with this page size (must be positive)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Show every item on one page
    #[arg(long)]
    pub no_pagination: bool,

    /// Key initially in the target list (repeatable)
    #[arg(long = "default-target", value_parser = parse_key)]
    pub default_target: Vec<ItemKey>,

    /// Key initially selected (repeatable)
    #[arg(long = "default-selected", value_parser = parse_key)]
    pub default_selected: Vec<ItemKey>,

    /// Treat target keys as host-controlled: moves are only reported, and
    /// `syncTargetKeys` intents apply the host's value
    #[arg(long)]
    pub controlled_target: bool,

    /// Treat selected keys as host-controlled (see --controlled-target)
    #[arg(long)]
    pub controlled_selected: bool,

    /// Display-only target list: no selecting there, no moving back
    #[arg(long)]
    pub one_way: bool,
}

/// Integers become numeric keys, anything else a string key.
fn parse_key(raw: &str) -> Result<ItemKey, Infallible> {
    Ok(raw
        .parse::<i64>()
        .map_or_else(|_| ItemKey::from(raw), ItemKey::from))
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = transfer_engine::config::load_config_with_precedence(args.config.clone())?;
        let merged = transfer_engine::config::merge_config(config_file);
        let with_env = transfer_engine::config::apply_env_overrides(merged);
        transfer_engine::config::apply_cli_overrides(
            with_env,
            args.page_size.map(|n| n as usize),
            args.no_pagination,
        )
    };

    transfer_engine::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let store = transfer_engine::source::read_catalogue(&args.items)?;
    let intents = ScriptSource::from_arg(args.script.clone()).load()?;

    let default_target_keys = KeySet::from(args.default_target.clone());
    let default_selected_keys = KeySet::from(args.default_selected.clone());
    let options = TransferOptions {
        target_keys: args.controlled_target.then(|| default_target_keys.clone()),
        selected_keys: args.controlled_selected.then(|| default_selected_keys.clone()),
        default_target_keys,
        default_selected_keys,
        one_way: args.one_way,
        ..config.transfer_options()
    };
    let mut transfer = Transfer::new(options, Vec::new());

    let report = transfer_engine::integration::replay(&mut transfer, &store, intents);
    info!(events = report.events.len(), "replay complete");

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &report)
        .map_err(|e| AppError::Output(e.into()))?;
    writeln!(stdout).map_err(AppError::Output)?;

    Ok(())
}
