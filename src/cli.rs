use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "triviatui", version, about = "Terminal client for a trivia question service")]
pub struct Cli {
    /// Base URL of the trivia service [default: http://127.0.0.1:5000]
    #[arg(long, value_name = "url")]
    pub base_url: Option<String>,

    /// Request timeout in seconds, 0 disables it [default: 30]
    #[arg(long, value_name = "secs")]
    pub timeout: Option<u64>,

    /// Config file [default: <config dir>/triviatui/config.yaml]
    #[arg(long, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "path")]
    pub log_file: Option<PathBuf>,

    /// Print the category list and exit
    #[arg(long, conflicts_with = "print_page")]
    pub categories: bool,

    /// Print one page of questions and exit
    #[arg(long, value_name = "n", value_parser = clap::value_parser!(u32).range(1..))]
    pub print_page: Option<u32>,
}
