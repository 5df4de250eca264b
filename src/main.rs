//! listport - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Config section holding the menu's list settings.
const MENU_LIST: &str = "menu";

/// listport - pick an item from a menu in the terminal
#[derive(Parser, Debug)]
#[command(name = "listport")]
#[command(version)]
#[command(about = "Pick an item from a sectioned menu; prints the chosen label")]
pub struct Args {
    /// Path to the menu file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Rows kept between the cursor and the viewport edge
    #[arg(short, long)]
    pub margin: Option<usize>,

    /// Mark the selected row and re-render the visible rows on every move
    #[arg(long)]
    pub live_highlight: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = listport::config::load_config_with_precedence(args.config.clone())?;
        let merged = listport::config::merge_config(config_file);
        let with_env = listport::config::apply_env_overrides(merged);

        // Flags only override when given
        let live_highlight_override = args.live_highlight.then_some(true);
        listport::config::apply_cli_overrides(with_env, args.margin, live_highlight_override)
    };

    listport::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let input_source = listport::source::detect_input_source(args.file.clone())?;

    let chosen = listport::view::run_with_source(input_source, config.list_config(MENU_LIST))?;

    match chosen {
        Some(label) => {
            info!(label = %label, "Menu closed with a choice");
            println!("{}", label);
        }
        None => info!("Menu closed without a choice"),
    }

    Ok(())
}
