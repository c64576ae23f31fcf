//! Command-line interface for the law API client.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::client::LawApiClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::types::{ArticlesQuery, LawType, StructuredNode};

/// Fetch Japanese legislation from the e-Gov law API as JSON.
#[derive(Parser)]
#[command(name = "elaws")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// API base URL (default: $ELAWS_BASE_URL or the public API)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List law names.
    Lawlists {
        /// Category of laws to list
        #[arg(short = 't', long = "type", value_enum, default_value_t = LawType::All)]
        law_type: LawType,
    },

    /// Fetch the full text of a law.
    Law {
        /// Law ID (e.g., 415AC0000000057) or law number
        law_id_or_num: String,
    },

    /// Fetch an article, paragraph or appendix table.
    Articles {
        /// Law ID
        #[arg(long)]
        law_id: Option<String>,

        /// Law number
        #[arg(long)]
        law_num: Option<String>,

        /// Article (e.g., 第十一条)
        #[arg(long)]
        article: Option<String>,

        /// Paragraph (e.g., 1)
        #[arg(long)]
        paragraph: Option<String>,

        /// Appendix table (e.g., 別表第一)
        #[arg(long)]
        appdx_table: Option<String>,
    },

    /// List laws updated on a date.
    Updates {
        /// Date in YYYY-MM-DD format (2020-11-24 or later)
        date: String,
    },
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    execute(Cli::parse()).await
}

/// Execute parsed arguments.
pub async fn execute(cli: Cli) -> Result<()> {
    let mut config = ClientConfig::from_env();
    if let Some(base_url) = cli.base_url {
        config = config.with_base_url(base_url);
    }
    let client = LawApiClient::with_config(config)?;

    let (pb, result) = match cli.command {
        Commands::Lawlists { law_type } => {
            let pb = spinner("Fetching law list...");
            (pb, client.get_law_list(law_type).await)
        }
        Commands::Law { law_id_or_num } => {
            let pb = spinner(&format!("Fetching law {}...", style(&law_id_or_num).cyan()));
            (pb, client.get_law(&law_id_or_num).await)
        }
        Commands::Articles {
            law_id,
            law_num,
            article,
            paragraph,
            appdx_table,
        } => {
            let query = ArticlesQuery {
                law_id,
                law_num,
                article,
                paragraph,
                appdx_table,
            };
            let pb = spinner("Fetching articles...");
            (pb, client.get_articles(&query).await)
        }
        Commands::Updates { date } => {
            let pb = spinner(&format!("Fetching laws updated on {}...", style(&date).green()));
            (pb, client.get_update_law_list(&date).await)
        }
    };

    pb.finish_and_clear();
    print_node(&result?, cli.compact);

    Ok(())
}

/// Create a steady-ticking spinner on stderr.
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn print_node(node: &StructuredNode, compact: bool) {
    let json = if compact {
        serde_json::to_string(node)
    } else {
        serde_json::to_string_pretty(node)
    };
    match json {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("{} {e}", style("Failed to render JSON:").red()),
    }
}
