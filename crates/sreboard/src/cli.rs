//! Clap derive structures for the `sreboard` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. Kept
//! free of workspace types so `build.rs` can include it for man pages.

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// sreboard -- operate a two-region SRE backend from the terminal
#[derive(Debug, Parser)]
#[command(
    name = "sreboard",
    version,
    about = "Query and exercise a two-region SRE backend",
    long_about = "Command-line companion to the sreboard dashboard.\n\n\
        Every backend command passes the same login gate as the dashboard,\n\
        then runs against the active region's base URL.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Region to target (overrides config)
    #[arg(long, short = 'r', env = "SREBOARD_REGION", global = true, value_enum)]
    pub region: Option<RegionArg>,

    /// Base URL for region1
    #[arg(long, env = "SREBOARD_API_REGION1", global = true)]
    pub region1_url: Option<String>,

    /// Base URL for region2
    #[arg(long, env = "SREBOARD_API_REGION2", global = true)]
    pub region2_url: Option<String>,

    /// Login username
    #[arg(long, short = 'u', env = "SREBOARD_USERNAME", global = true)]
    pub username: Option<String>,

    /// Login password
    #[arg(long, env = "SREBOARD_PASSWORD", global = true, hide_env = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "SREBOARD_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides config)
    #[arg(long, global = true)]
    pub timeout: Option<u64>,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RegionArg {
    Region1,
    Region2,
}

#[derive(Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain `key: value` lines (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PresetArg {
    /// Safety incidents in 2024
    Safety,
    /// Drill operations and hard hat requirements
    HardHats,
    /// Most frequent devices producing HTTP 400
    #[value(name = "error-400")]
    Error400,
    /// Economic and social sustainability statements
    Sustainability,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the status snapshot for the active region
    #[command(alias = "st")]
    Status(StatusArgs),

    /// Backend health (cache connectivity included)
    Health,

    /// Backend metrics counters
    Metrics,

    /// Service banner
    Info,

    /// Deployed application version
    Version,

    /// Active users
    Users,

    /// Active devices
    #[command(alias = "dev")]
    Devices,

    /// Devices in warning or critical state
    Alerts,

    /// Log diagnostics
    Logs(LogsArgs),

    /// Trigger simulations
    #[command(alias = "sim")]
    Simulate(SimulateArgs),

    /// Regional failover
    Failover(FailoverArgs),

    /// Site image search
    #[command(alias = "img")]
    Images(ImagesArgs),

    /// Ask the diagnostics assistant a question
    Ask(AskArgs),

    /// Manage the config file
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Per-command arguments ────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Keep polling and print each snapshot until interrupted
    #[arg(long, short = 'w')]
    pub watch: bool,

    /// Seconds between polls in watch mode (overrides config)
    #[arg(long, requires = "watch")]
    pub interval: Option<u64>,
}

#[derive(Debug, Args)]
pub struct LogsArgs {
    #[command(subcommand)]
    pub command: LogsCommand,
}

#[derive(Debug, Subcommand)]
pub enum LogsCommand {
    /// Aggregate log statistics
    Stats,

    /// Log summary
    Summary,

    /// Source IPs most often producing an HTTP error code
    Errors {
        /// HTTP status code, e.g. 400
        code: u16,

        /// Number of sources to return
        #[arg(long, default_value_t = 10)]
        top: u32,
    },

    /// Full-text log search
    Search {
        /// Search terms
        query: String,

        /// Maximum number of hits
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
}

#[derive(Debug, Args)]
pub struct SimulateArgs {
    #[command(subcommand)]
    pub command: SimulateCommand,
}

#[derive(Debug, Subcommand)]
pub enum SimulateCommand {
    /// Simulate a high-traffic event
    Traffic,
}

#[derive(Debug, Args)]
pub struct FailoverArgs {
    #[command(subcommand)]
    pub command: FailoverCommand,
}

#[derive(Debug, Subcommand)]
pub enum FailoverCommand {
    /// Simulate a failover away from the active region
    Simulate,

    /// Current failover state
    Status,

    /// Restore the active region after a simulated failover
    Restore,
}

#[derive(Debug, Args)]
pub struct ImagesArgs {
    #[command(subcommand)]
    pub command: ImagesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ImagesCommand {
    /// Semantic search over site imagery
    Search {
        /// Search terms
        #[arg(num_args = 0..)]
        query: Vec<String>,

        /// Number of results
        #[arg(long, default_value_t = 5)]
        top_k: u32,
    },

    /// List indexed images
    List,
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// Question text
    #[arg(num_args = 1.., required_unless_present = "preset", conflicts_with = "preset")]
    pub question: Vec<String>,

    /// Ask one of the canned questions instead
    #[arg(long, short = 'p', value_enum)]
    pub preset: Option<PresetArg>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Interactive setup wizard
    Init,

    /// Show the effective configuration (passwords masked)
    Show,

    /// Print the config file path
    Path,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
