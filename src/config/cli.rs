use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "vessel-tracker")]
#[command(about = "Reports where the tracked vessel is, using public vessel tracking sites")]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults are used when it does not exist)
    #[arg(short, long, default_value = "tracker.toml")]
    pub config: String,

    /// Query only this source (cruisemapper, vesselfinder_api, vesselfinder_html, marinetraffic)
    #[arg(long)]
    pub only: Option<String>,

    /// Print the canonical status as JSON instead of the status card
    #[arg(long)]
    pub json: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
