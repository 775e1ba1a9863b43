// Rust guideline compliant 2026-08-29

//! Slate CLI Application
//!
//! Command-line interface for the Slate task tracking system.

use clap::Parser;

pub mod commands;
pub mod output;
pub mod output_mode;
pub mod terminal;

pub use output::{create_formatter, OutputFormatter};
pub use terminal::{get_terminal_width, should_use_color, wrap_text};

#[derive(Parser, Debug)]
#[command(
    name = "slate",
    version,
    about = "Slate: dependency-aware task tracking",
    long_about = "Slate is a personal task tracker with a dependency-aware task graph. It stores tasks in a single JSON document and can generate and expand tasks with an AI backend.",
    after_help = "Examples:\n  slate init\n  slate add \"Build the parser\" --priority high --depends-on 1,2.1\n  slate list --status pending --sort priority\n  slate status 3.2 done\n  slate next\n  slate expand 3\n  slate report --output progress.md\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Slate repository
    Init,

    /// Add a task or subtask
    Add {
        /// Title of the task
        title: String,

        /// Description of the task
        #[arg(long)]
        description: Option<String>,

        /// Priority (low, medium, high)
        #[arg(long)]
        priority: Option<String>,

        /// Dependencies (task ids or "parent.sub" references)
        #[arg(long, value_delimiter = ',')]
        depends_on: Vec<String>,

        /// Add as a subtask of this task id
        #[arg(long)]
        parent: Option<u32>,
    },

    /// Show details of a task or subtask
    Show {
        /// Task id ("3") or subtask id ("3.2")
        id: String,
    },

    /// List tasks
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,

        /// Sort by field (id, title, status, priority)
        #[arg(long)]
        sort: Option<String>,
    },

    /// Set the status of a task or subtask
    Status {
        /// Task or subtask id
        id: String,

        /// New status (pending, in-progress, done, blocked, deferred, review)
        status: String,
    },

    /// Show the next task to work on
    Next,

    /// Remove a task or subtask
    Remove {
        /// Task or subtask id
        id: String,
    },

    /// Generate a markdown progress report
    Report {
        /// Write the report to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Check the dependency graph for cycles
    Check,

    /// Expand a task into AI-generated subtasks
    Expand {
        /// Task id to expand
        id: String,
    },

    /// Generate tasks from a requirements document
    ParsePrd {
        /// Path to the PRD file
        path: String,
    },

    /// Generate a placeholder file from a task
    Generate {
        /// Task id
        id: String,

        /// Output directory
        #[arg(long)]
        output_dir: Option<String>,
    },

    /// Run the MCP server over stdio
    Mcp {
        /// Refuse mutating tools
        #[arg(long)]
        read_only: bool,

        /// Log file path (defaults to stderr)
        #[arg(long)]
        log_file: Option<String>,

        /// Log level (error, warn, info, debug)
        #[arg(long, default_value = "info")]
        log_level: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let use_color = !cli.no_color && should_use_color();
    let format = match cli.format {
        Some(OutputFormat::Json) => "json",
        Some(OutputFormat::Table) => "table",
        Some(OutputFormat::Plain) => "plain",
        None => {
            if cli.json {
                "json"
            } else {
                "table"
            }
        }
    };
    output_mode::set_json_output(format == "json");
    let formatter = create_formatter(format, use_color);

    match cli.command {
        Commands::Init => {
            commands::init::execute()?;
        }
        Commands::Add {
            title,
            description,
            priority,
            depends_on,
            parent,
        } => {
            commands::add::execute(title, description, priority, depends_on, parent)?;
        }
        Commands::Show { id } => {
            commands::show::execute(&id, formatter.as_ref())?;
        }
        Commands::List {
            status,
            priority,
            sort,
        } => {
            commands::list::execute(status, priority, sort, formatter.as_ref())?;
        }
        Commands::Status { id, status } => {
            commands::status::execute(&id, &status)?;
        }
        Commands::Next => {
            commands::next::execute(formatter.as_ref())?;
        }
        Commands::Remove { id } => {
            commands::remove::execute(&id)?;
        }
        Commands::Report { output } => {
            commands::report::execute(output.as_deref())?;
        }
        Commands::Check => {
            commands::check::execute()?;
        }
        Commands::Expand { id } => {
            commands::expand::execute(&id)?;
        }
        Commands::ParsePrd { path } => {
            commands::parse_prd::execute(&path)?;
        }
        Commands::Generate { id, output_dir } => {
            commands::generate::execute(&id, output_dir.as_deref())?;
        }
        Commands::Mcp {
            read_only,
            log_file,
            log_level,
        } => {
            commands::mcp::execute(read_only, log_file, log_level)?;
        }
    }

    Ok(())
}
