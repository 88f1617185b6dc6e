//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use taskmatrix::config::Config;
use taskmatrix::output::OutputMode;

/// taskmatrix - Eisenhower-matrix prioritization for your energy budget
#[derive(Parser, Debug)]
#[command(
    name = "taskmatrix",
    version,
    about = "Eisenhower-matrix prioritization for your energy budget",
    long_about = "Sort tasks into Do, Decide, Delegate and Delete.\n\n\
                  Within each quadrant, tasks are ordered by how much energy you have:\n\
                  quick wins first when you are low, big tasks first when you are high."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file to use instead of ~/.taskmatrix/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify an importance/urgency pair into a quadrant
    Classify {
        /// Importance: high or low
        importance: String,

        /// Urgency: high or low
        urgency: String,
    },

    /// Rank tasks from a JSON file (or - for stdin) for an energy budget
    Rank {
        /// JSON array of tasks, or - to read stdin
        file: PathBuf,

        /// Energy level (0-10) or spoon count
        #[arg(short, long)]
        budget: u32,
    },

    /// Rank tasks and show them grouped by quadrant
    Matrix {
        /// JSON array of tasks, or - to read stdin
        file: PathBuf,

        /// Energy level (0-10) or spoon count
        #[arg(short, long)]
        budget: u32,
    },

    /// Suggest tasks that fit the remaining budget
    Recommend {
        /// JSON array of tasks, or - to read stdin
        file: PathBuf,

        /// Remaining energy or spoons
        #[arg(short, long)]
        remaining: u32,
    },

    /// Compute a single score
    Score {
        #[command(subcommand)]
        action: ScoreAction,
    },

    /// Break a goal into subtasks with a language model and rank them
    Breakdown {
        /// The goal to break down
        task: String,

        /// Current energy level (0-10), also the ranking budget
        #[arg(short, long)]
        energy: u32,

        /// Use a saved model reply instead of calling the model
        #[arg(long, value_name = "FILE")]
        response: Option<PathBuf>,

        /// Existing tasks to rank alongside the new subtasks
        #[arg(long, value_name = "FILE")]
        tasks: Option<PathBuf>,
    },

    /// Serve the HTTP API
    #[cfg(feature = "server")]
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        init: bool,

        /// Overwrite an existing config file
        #[arg(short, long, requires = "init")]
        force: bool,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ScoreAction {
    /// How comfortably an available amount covers a required one (0-10)
    Match {
        /// Resource the task requires
        required: u32,

        /// Resource available
        available: u32,
    },

    /// Log-scaled score for a free-form duration (1-10, shorter is higher)
    Duration {
        /// Duration text, e.g. "2 days and 4 hours"; a bare number is minutes
        text: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    match cli.command {
        Some(Command::Classify {
            importance,
            urgency,
        }) => commands::classify(&importance, &urgency, output_mode),
        Some(Command::Rank { file, budget }) => {
            commands::rank(&file, budget, &config, output_mode)
        },
        Some(Command::Matrix { file, budget }) => {
            commands::matrix(&file, budget, &config, output_mode)
        },
        Some(Command::Recommend { file, remaining }) => {
            commands::recommend(&file, remaining, output_mode)
        },
        Some(Command::Score { action }) => commands::score(&action, output_mode),
        Some(Command::Breakdown {
            task,
            energy,
            response,
            tasks,
        }) => commands::breakdown(
            &task,
            energy,
            response.as_deref(),
            tasks.as_deref(),
            &config,
            output_mode,
        ),
        #[cfg(feature = "server")]
        Some(Command::Serve { port }) => commands::serve(&config, port),
        Some(Command::Config { init, force }) => {
            commands::config_cmd(&config_path, &config, init, force, output_mode)
        },
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("taskmatrix v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("taskmatrix v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'taskmatrix --help' for usage");
                println!("Run 'taskmatrix rank tasks.json --budget 5' to get started");
            }
            Ok(())
        },
    }
}
