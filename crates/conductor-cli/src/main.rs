//! Conductor command line.
//!
//! `conductor generate` builds an event from a template, encodes it, and
//! prints the deep link + raw token for the external QR renderer.
//! `conductor serve` publishes the installable mobile package over the LAN.

#![deny(unsafe_code)]

mod report;
mod templates;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::TimeDelta;
use clap::{Args, Parser, Subcommand};

use conductor_core::EventTemplate;
use conductor_server::{PackageInfo, ServerConfig};

#[derive(Debug, Parser)]
#[command(
    name = "conductor",
    about = "Generate and distribute Conductor event codes",
    version
)]
struct Cli {
    /// Log filter (overridden by RUST_LOG).
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build an event from a template and print its encoded form.
    Generate(GenerateArgs),
    /// Serve the installable package over the local network.
    Serve(ServeArgs),
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Built-in template name (see --list-templates).
    #[arg(long, default_value = "inaugural", conflicts_with = "template_file")]
    template: String,

    /// JSON template file to build from instead of a built-in.
    #[arg(long)]
    template_file: Option<PathBuf>,

    /// Minutes from now until the event starts.
    #[arg(long, default_value_t = 2)]
    start_minutes: i64,

    /// Print only the encoded token (for piping to a code renderer).
    #[arg(long, default_value_t = false)]
    token_only: bool,

    /// List the built-in templates and exit.
    #[arg(long, default_value_t = false)]
    list_templates: bool,
}

#[derive(Debug, Args)]
struct ServeArgs {
    /// Path to the installable package (defaults to the app build outputs).
    #[arg(long)]
    package: Option<PathBuf>,

    /// Port to listen on.
    #[arg(long, default_value_t = 8888)]
    port: u16,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    conductor_core::logging::init_subscriber(&cli.log_level);
    match cli.command {
        Command::Generate(args) => run_generate(&args),
        Command::Serve(args) => run_serve(&args),
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    if args.list_templates {
        for name in templates::NAMES {
            if let Some(template) = templates::builtin(name) {
                println!("  {name:<12} {}", template.title);
            }
        }
        return Ok(());
    }

    let template = load_template(args)?;
    let offset = TimeDelta::try_minutes(args.start_minutes).context("start offset out of range")?;
    let event = conductor_core::build(&template, offset).context("template failed validation")?;
    let token = conductor_codec::encode(&event).context("failed to encode event")?;

    if args.token_only {
        println!("{token}");
    } else {
        report::print_generate_report(&event, &token, args.start_minutes);
    }
    Ok(())
}

fn load_template(args: &GenerateArgs) -> Result<EventTemplate> {
    match &args.template_file {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read template file {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse template file {}", path.display()))
        }
        None => templates::builtin(&args.template).with_context(|| {
            format!(
                "unknown template `{}` (try --list-templates)",
                args.template
            )
        }),
    }
}

fn run_serve(args: &ServeArgs) -> Result<()> {
    let package = PackageInfo::resolve(args.package.as_deref())?;
    let config = ServerConfig {
        package_path: Some(package.path.clone()),
        port: args.port,
    };
    report::print_serve_banner(
        &config.lan_url(),
        &package.download_name,
        package.size_mb(),
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime
        .block_on(conductor_server::run(config))
        .context("distribution server failed")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn generate_args(template: &str) -> GenerateArgs {
        GenerateArgs {
            template: template.to_owned(),
            template_file: None,
            start_minutes: 2,
            token_only: false,
            list_templates: false,
        }
    }

    #[test]
    fn cli_parses_generate_defaults() {
        let cli = Cli::parse_from(["conductor", "generate"]);
        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.template, "inaugural");
                assert_eq!(args.start_minutes, 2);
                assert!(!args.token_only);
            }
            Command::Serve(_) => panic!("expected generate"),
        }
    }

    #[test]
    fn cli_parses_serve_overrides() {
        let cli = Cli::parse_from(["conductor", "serve", "--port", "9000"]);
        match cli.command {
            Command::Serve(args) => assert_eq!(args.port, 9000),
            Command::Generate(_) => panic!("expected serve"),
        }
    }

    #[test]
    fn load_template_resolves_builtin() {
        let template = load_template(&generate_args("smoke")).unwrap();
        assert_eq!(template.title, "Test Flash Mob");
    }

    #[test]
    fn load_template_rejects_unknown_builtin() {
        let err = load_template(&generate_args("marathon")).unwrap_err();
        assert!(err.to_string().contains("marathon"));
    }

    #[test]
    fn load_template_reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(
            br#"{
                "title": "Custom",
                "timezone": "UTC",
                "actions": [{"relativeTime": 0, "action": "Start"}]
            }"#,
        )
        .unwrap();

        let mut args = generate_args("inaugural");
        args.template_file = Some(path);
        let template = load_template(&args).unwrap();
        assert_eq!(template.title, "Custom");
        assert_eq!(template.actions.len(), 1);
    }
}
