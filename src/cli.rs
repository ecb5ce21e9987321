//! CLI argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// `pomochat` - chat panel with a pomodoro timer and a task list
///
/// Type messages, start a timer with `/pomodoro [work] [break]` and keep
/// tasks next to the conversation. Nothing is sent anywhere.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pomochat", version, about, long_about = None)]
pub struct Args {
    /// Name shown next to your messages (defaults to $USER).
    #[arg(short, long, env = "POMOCHAT_USERNAME")]
    pub username: Option<String>,

    /// Config file path (default: .pomochat/config.json).
    #[arg(short, long, env = "POMOCHAT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log file path (default: .pomochat/pomochat.log).
    #[arg(long, env = "POMOCHAT_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Open the task panel on start.
    #[arg(short, long)]
    pub tasks: bool,
}

/// Name used when neither the CLI, the config file nor `$USER` provide one.
pub const FALLBACK_USERNAME: &str = "me";

/// Picks the display name: CLI flag, then config file, then `$USER`.
#[must_use]
pub fn resolve_username(cli: Option<&str>, config: Option<&str>) -> String {
    [cli, config]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(String::from)
        .or_else(|| std::env::var("USER").ok().filter(|u| !u.is_empty()))
        .unwrap_or_else(|| FALLBACK_USERNAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn parses_all_flags() {
        let args = Args::parse_from([
            "pomochat",
            "--username",
            "joao",
            "--config",
            "/tmp/c.json",
            "--log-file",
            "/tmp/p.log",
            "--tasks",
        ]);
        assert_eq!(args.username.as_deref(), Some("joao"));
        assert_eq!(args.config, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(args.log_file, Some(PathBuf::from("/tmp/p.log")));
        assert!(args.tasks);
    }

    #[test]
    #[serial]
    fn defaults_when_no_flags() {
        let args = Args::parse_from(["pomochat"]);
        assert!(!args.tasks);
        assert_eq!(args.config, None);
    }

    #[test]
    #[serial]
    fn username_falls_back_to_env() {
        // SAFETY: serialized with the other env-reading tests.
        unsafe { std::env::set_var("POMOCHAT_USERNAME", "from-env") };
        let args = Args::parse_from(["pomochat"]);
        unsafe { std::env::remove_var("POMOCHAT_USERNAME") };
        assert_eq!(args.username.as_deref(), Some("from-env"));
    }

    #[test]
    #[serial]
    fn flag_wins_over_env() {
        unsafe { std::env::set_var("POMOCHAT_USERNAME", "from-env") };
        let args = Args::parse_from(["pomochat", "-u", "flag"]);
        unsafe { std::env::remove_var("POMOCHAT_USERNAME") };
        assert_eq!(args.username.as_deref(), Some("flag"));
    }

    #[test]
    #[serial]
    fn resolve_username_precedence() {
        assert_eq!(resolve_username(Some("cli"), Some("cfg")), "cli");
        assert_eq!(resolve_username(None, Some("cfg")), "cfg");
        assert_eq!(resolve_username(Some("  "), Some("cfg")), "cfg");
    }

    #[test]
    #[serial]
    fn resolve_username_uses_user_env_last() {
        let saved = std::env::var("USER").ok();
        unsafe { std::env::set_var("USER", "shell-user") };
        assert_eq!(resolve_username(None, None), "shell-user");
        unsafe { std::env::remove_var("USER") };
        assert_eq!(resolve_username(None, None), FALLBACK_USERNAME);
        if let Some(user) = saved {
            unsafe { std::env::set_var("USER", user) };
        }
    }
}
