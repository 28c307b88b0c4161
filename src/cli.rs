use clap::{Args, Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::proxy::{DEFAULT_BIND, YOUTUBE_API_BASE};

#[derive(Parser, Debug)]
#[command(name = "trending")]
#[command(about = "Trending YouTube videos by country and category", long_about = None)]
pub struct Cli {
    /// Base URL of the trending proxy (default: http://127.0.0.1:3000)
    #[arg(long, value_name = "URL")]
    pub proxy: Option<String>,

    /// Two-letter region code to start with (default: TN)
    #[arg(short, long, value_name = "CODE")]
    pub region: Option<String>,

    /// Category id to start with (default: all categories)
    #[arg(short, long, value_name = "ID")]
    pub category: Option<String>,

    /// Theme name
    #[arg(short, long)]
    pub theme: Option<String>,

    /// Force dark mode (overrides auto-detection)
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Force light mode (overrides auto-detection)
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Custom config directory (default: ~/.config/trending)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose logging (prints log path, sets DEBUG level)
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP proxy in front of the YouTube Data API
    Serve(ServeArgs),
    /// List built-in themes
    Themes,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// YouTube Data API key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Base URL of the YouTube Data API
    #[arg(long, value_name = "URL", default_value = YOUTUBE_API_BASE)]
    pub upstream: String,
}
