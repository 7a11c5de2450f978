//! git-safety-guard - PreToolUse hook that blocks destructive git and rm commands
//!
//! # Usage
//!
//! ```bash
//! # As a Claude Code hook (reads JSON from stdin, writes JSON to stdout on deny)
//! echo '{"tool_name":"Bash","tool_input":{"command":"git reset --hard"}}' | git-safety-guard
//! ```

use std::env;
use std::io::{self, Read, Write};
use std::path::Path;

use git_safety_guard::{audit::AuditLogger, config::Config, hook};

/// Print version information
fn print_version() {
    println!("git-safety-guard {}", env!("CARGO_PKG_VERSION"));
}

/// Print help message
fn print_help() {
    println!(
        r#"git-safety-guard - Blocks destructive git and rm commands before execution

USAGE:
    git-safety-guard [OPTIONS]

OPTIONS:
    -h, --help              Print this help message
    -v, --version           Print version information
    -c, --config PATH       Path to config file

USAGE AS HOOK:
    Configure in ~/.claude/settings.json:
    {{
      "hooks": {{
        "PreToolUse": [{{
          "matcher": "Bash",
          "hooks": [{{"type": "command", "command": "~/.claude/hooks/git-safety-guard"}}]
        }}]
      }}
    }}
"#
    );
}

/// Parse command line arguments
struct Args {
    help: bool,
    version: bool,
    config_path: Option<String>,
}

impl Args {
    fn parse() -> Self {
        let args: Vec<String> = env::args().collect();
        let mut result = Args {
            help: false,
            version: false,
            config_path: None,
        };

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "-h" | "--help" => result.help = true,
                "-v" | "--version" => result.version = true,
                "-c" | "--config" => {
                    if i + 1 < args.len() {
                        i += 1;
                        result.config_path = Some(args[i].clone());
                    }
                }
                arg if arg.starts_with("--config=") => {
                    let path = arg.trim_start_matches("--config=");
                    result.config_path = Some(path.to_string());
                }
                _ => {}
            }
            i += 1;
        }

        result
    }
}

fn main() {
    let args = Args::parse();

    if args.help {
        print_help();
        return;
    }

    if args.version {
        print_version();
        return;
    }

    let config = if let Some(ref path) = args.config_path {
        Config::load_from(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load config from {}: {}", path, e);
            Config::default()
        })
    } else {
        Config::load()
    };

    // An unreadable stdin is treated like an empty request
    let mut raw = Vec::new();
    if io::stdin().lock().read_to_end(&mut raw).is_err() {
        raw.clear();
    }

    let response = hook::handle(&raw);

    if let Some(ref output) = response.output {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        let _ = writeln!(handle, "{}", output.to_json());
        let _ = handle.flush();
    }

    let mut logger = AuditLogger::new(config.audit_path().as_deref());
    if let Err(e) = logger.log_response(&response) {
        eprintln!("Warning: Failed to write audit log: {}", e);
    }

    std::process::exit(response.exit_code());
}
