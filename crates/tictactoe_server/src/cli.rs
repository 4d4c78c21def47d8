//! Command-line interface for tictactoe_server.

use clap::Parser;
use std::path::PathBuf;
use tictactoe_server::{ServerConfig, WinRule};

/// Tic-tac-toe game server
#[derive(Parser, Debug)]
#[command(name = "tictactoe_server")]
#[command(about = "Hosts a single tic-tac-toe game over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it does not exist)
    #[arg(short, long, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Host to bind to
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Board size of the initial game
    #[arg(long)]
    pub board_size: Option<usize>,

    /// Win rule for every game
    #[arg(long, value_enum)]
    pub win_rule: Option<WinRule>,
}

impl Cli {
    /// Applies command-line overrides on top of the file config.
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = &self.host {
            config = config.with_host(host.as_str());
        }
        if let Some(port) = self.port {
            config = config.with_port(port);
        }
        if let Some(size) = self.board_size {
            config = config.with_board_size(size);
        }
        if let Some(rule) = self.win_rule {
            config = config.with_win_rule(rule);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_replace_file_values() {
        let cli = Cli::parse_from([
            "tictactoe_server",
            "--port",
            "9999",
            "--win-rule",
            "full-line",
        ]);
        let config = cli.apply(ServerConfig::default());

        assert_eq!(*config.port(), 9999);
        assert_eq!(*config.win_rule(), WinRule::FullLine);
        assert_eq!(config.host(), "127.0.0.1");
    }

    #[test]
    fn test_no_flags_keeps_config() {
        let cli = Cli::parse_from(["tictactoe_server"]);
        assert_eq!(cli.config, PathBuf::from("tictactoe.toml"));
        assert_eq!(cli.apply(ServerConfig::default()), ServerConfig::default());
    }
}
