//! vidyamitra CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use vidyamitra_client::{load_config, ApiClient};
use vidyamitra_core::model::Difficulty;
use vidyamitra_core::CareerApi;

mod commands;

#[derive(Parser)]
#[command(
    name = "vidyamitra",
    version,
    about = "Career assessment client for the Vidyamitra API"
)]
struct Cli {
    /// API root URL (overrides config and VIDYAMITRA_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a resume for analysis
    Resume {
        /// Resume file to upload
        #[arg(long)]
        file: PathBuf,
    },

    /// Evaluate current skills against a target role
    Evaluate {
        /// Target role
        #[arg(long)]
        role: String,

        /// Current skills (comma-separated)
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        /// Years of experience
        #[arg(long, default_value = "0")]
        years: f64,
    },

    /// Generate a week-by-week training plan
    Plan {
        /// Target role
        #[arg(long)]
        role: String,

        /// Skill gaps to cover (comma-separated)
        #[arg(long, value_delimiter = ',')]
        gaps: Vec<String>,

        /// Weeks available
        #[arg(long, default_value = "4")]
        weeks: u32,
    },

    /// Take a quiz
    Quiz {
        /// Quiz domain (e.g. "algorithms")
        #[arg(long)]
        domain: String,

        /// Difficulty: easy, medium, hard
        #[arg(long, default_value = "medium")]
        difficulty: Difficulty,

        /// Number of questions (1-10)
        #[arg(long, default_value = "5")]
        count: usize,

        /// Chosen option numbers, comma-separated and 1-based
        /// (0 skips a question); answered interactively when omitted
        #[arg(long, value_delimiter = ',')]
        answers: Option<Vec<usize>>,
    },

    /// Run a mock interview
    Interview {
        /// Target role
        #[arg(long)]
        role: String,

        /// Years of experience
        #[arg(long, default_value = "0")]
        years: f64,

        /// Answer for the next question, in order (repeatable);
        /// answered interactively when omitted
        #[arg(long = "answer")]
        answers: Vec<String>,
    },

    /// Fetch job recommendations
    Jobs {
        /// Target role
        #[arg(long)]
        role: String,

        /// Preferred location
        #[arg(long)]
        location: Option<String>,
    },

    /// Show learning progress
    Progress,

    /// Check that the service is reachable
    Health,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("vidyamitra=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = run(cli).await;

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api_url = url;
    }
    let api: Arc<dyn CareerApi> = Arc::new(ApiClient::new(&config));

    match cli.command {
        Commands::Resume { file } => commands::resume::execute(api.as_ref(), file).await,
        Commands::Evaluate {
            role,
            skills,
            years,
        } => commands::evaluate::execute(api.as_ref(), role, skills, years).await,
        Commands::Plan { role, gaps, weeks } => {
            commands::plan::execute(api.as_ref(), role, gaps, weeks).await
        }
        Commands::Quiz {
            domain,
            difficulty,
            count,
            answers,
        } => commands::quiz::execute(api, domain, difficulty, count, answers).await,
        Commands::Interview {
            role,
            years,
            answers,
        } => commands::interview::execute(api, role, years, answers).await,
        Commands::Jobs { role, location } => {
            commands::jobs::execute(api.as_ref(), role, location).await
        }
        Commands::Progress => commands::progress::execute(api.as_ref()).await,
        Commands::Health => commands::health::execute(api.as_ref()).await,
    }
}
