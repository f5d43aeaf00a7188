#![forbid(unsafe_code)]

mod cmd;
mod output;
mod tui;

use clap::{CommandFactory, Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use stall_core::catalog::{Catalog, CatalogError};
use stall_core::config::{self, StallConfig};
use stall_core::error::ErrorCode;
use stall_core::store::CartStore;
use stall_core::storefront::Storefront;
use std::env;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "stall: a terminal storefront with a persistent cart",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,

    /// Output format (defaults to pretty on a TTY, text when piped).
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output instead of human-readable text.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Load the catalog from a TOML file instead of the built-in demo set.
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Shop",
        about = "Browse the storefront interactively",
        long_about = "Open the full-screen storefront: searchable product grid, cart panel, and contact form.",
        after_help = "EXAMPLES:\n    # Browse the demo catalog\n    stall browse\n\n    # Browse a custom catalog\n    stall --catalog shop.toml browse"
    )]
    Browse,

    #[command(
        next_help_heading = "Read",
        about = "List catalog products",
        long_about = "List catalog products, optionally narrowed by category and title search.",
        after_help = "EXAMPLES:\n    # Everything\n    stall list\n\n    # Audio gear matching \"speaker\"\n    stall list --category Audio --query speaker\n\n    # Emit machine-readable output\n    stall list --json"
    )]
    List(cmd::list::ListArgs),

    #[command(
        next_help_heading = "Read",
        about = "Show one product",
        long_about = "Show details (title, category, price, image) for a single product by id.",
        after_help = "EXAMPLES:\n    # Show a product\n    stall show p3\n\n    # Emit machine-readable output\n    stall show p3 --json"
    )]
    Show(cmd::show::ShowArgs),

    #[command(
        next_help_heading = "Read",
        about = "List category filter options",
        long_about = "List the derived category options, the `all` sentinel first."
    )]
    Categories,

    #[command(
        next_help_heading = "Cart",
        about = "Add a product to the cart",
        long_about = "Add one unit of a product to the cart, inserting the entry if absent.",
        after_help = "EXAMPLES:\n    # Add one gaming mouse\n    stall add p3\n\n    # Emit machine-readable output\n    stall add p3 --json"
    )]
    Add(cmd::add::AddArgs),

    #[command(
        next_help_heading = "Cart",
        about = "Increment a cart entry",
        long_about = "Increment an existing cart entry by one. Absent entries are left alone."
    )]
    Inc(cmd::inc::IncArgs),

    #[command(
        next_help_heading = "Cart",
        about = "Decrement a cart entry",
        long_about = "Decrement a cart entry by one, removing it when the quantity reaches zero."
    )]
    Dec(cmd::dec::DecArgs),

    #[command(
        next_help_heading = "Cart",
        about = "Show the cart",
        long_about = "Show cart line rows, the aggregate total, and the item count.",
        after_help = "EXAMPLES:\n    # Human-readable cart\n    stall cart\n\n    # Emit machine-readable output\n    stall cart --json"
    )]
    Cart,

    #[command(
        next_help_heading = "Contact",
        about = "Send a (simulated) contact message",
        long_about = "Validate a contact message locally and report the status. Nothing is actually delivered.",
        after_help = "EXAMPLES:\n    stall contact --name Ada --email ada@example.com --message \"Hi\""
    )]
    Contact(cmd::contact::ContactArgs),

    #[command(
        next_help_heading = "Maintenance",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    stall completions bash"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("STALL_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "stall=debug,info"
        } else {
            "stall=info,warn"
        })
    });

    let format = env::var("STALL_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact().with_writer(std::io::stderr)).init();
        }
    }
}

/// Load config + catalog and open the cart store.
///
/// The only fatal paths in the whole program live here, and both require
/// the user to have pointed at a broken file: an unparsable user config
/// or an unreadable/unparsable catalog file.
fn open_storefront(catalog_flag: Option<&Path>, output: OutputMode) -> anyhow::Result<Storefront> {
    let config = match config::load_user_config() {
        Ok(config) => config,
        Err(err) => {
            render_error(
                output,
                &CliError::from_code(ErrorCode::ConfigParseError, format!("{err:#}")),
            )?;
            anyhow::bail!("config unreadable");
        }
    };

    let catalog = load_catalog(catalog_flag, &config, output)?;
    let cart = CartStore::open(config::cart_file_path(&config), &catalog);
    Ok(Storefront::new(
        catalog,
        cart,
        config.ui.lazy_margin_rows,
    ))
}

fn load_catalog(
    flag: Option<&Path>,
    config: &StallConfig,
    output: OutputMode,
) -> anyhow::Result<Catalog> {
    let path = flag.map(Path::to_path_buf).or_else(|| config.catalog.path.clone());
    let Some(path) = path else {
        return Ok(Catalog::demo());
    };

    match Catalog::load(&path) {
        Ok(catalog) => Ok(catalog),
        Err(err) => {
            let code = match &err {
                CatalogError::Read { .. } => ErrorCode::CatalogUnreadable,
                _ => ErrorCode::CatalogParseError,
            };
            render_error(output, &CliError::from_code(code, format!("{err}")))?;
            anyhow::bail!("catalog unusable: {err}");
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let output = resolve_output_mode(cli.format, cli.json);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let catalog_flag = cli.catalog.clone();

    match cli.command {
        Commands::Completions(args) => {
            cmd::completions::run_completions(args.shell, &mut Cli::command())
        }
        Commands::Browse => {
            let front = open_storefront(catalog_flag.as_deref(), output)?;
            tui::run(front)
        }
        Commands::List(ref args) => {
            let mut front = open_storefront(catalog_flag.as_deref(), output)?;
            cmd::list::run_list(args, output, &mut front)
        }
        Commands::Show(ref args) => {
            let mut front = open_storefront(catalog_flag.as_deref(), output)?;
            cmd::show::run_show(args, output, &mut front)
        }
        Commands::Categories => {
            let front = open_storefront(catalog_flag.as_deref(), output)?;
            cmd::categories::run_categories(output, &front)
        }
        Commands::Add(ref args) => {
            let mut front = open_storefront(catalog_flag.as_deref(), output)?;
            cmd::add::run_add(args, output, &mut front)
        }
        Commands::Inc(ref args) => {
            let mut front = open_storefront(catalog_flag.as_deref(), output)?;
            cmd::inc::run_inc(args, output, &mut front)
        }
        Commands::Dec(ref args) => {
            let mut front = open_storefront(catalog_flag.as_deref(), output)?;
            cmd::dec::run_dec(args, output, &mut front)
        }
        Commands::Cart => {
            let front = open_storefront(catalog_flag.as_deref(), output)?;
            cmd::cart::run_cart(output, &front)
        }
        Commands::Contact(ref args) => cmd::contact::run_contact(args, output),
    }
}
