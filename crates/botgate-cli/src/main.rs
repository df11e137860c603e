//! CLI entry point for botgate.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `botgate-app` crate.

use std::io::Write;

use anyhow::Context;
use botgate_app::{
    CheckInput, ExplainOutput, render_github, render_text, resolve_secret, run_check,
    run_explain, run_inspect, serialize_report, verdict_exit_code, write_report,
};
use botgate_settings::{Overrides, PolicyInputs, ResolvedConfig};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "botgate", version, about = "Publish gate for bot projects")]
struct Cli {
    /// Project folder (contains the project file and the `.bot` manifest).
    #[arg(long, default_value = ".")]
    project_dir: Utf8PathBuf,

    /// Path to botgate config TOML, relative to the project folder.
    #[arg(long, default_value = "botgate.toml")]
    config: Utf8PathBuf,

    /// Override profile (default|publish).
    #[arg(long)]
    profile: Option<String>,

    /// Override the project file glob (default `*.csproj`).
    #[arg(long)]
    project_file_glob: Option<String>,

    /// Override the manifest glob (default `*.bot`).
    #[arg(long)]
    manifest_glob: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Failure message on stderr, nothing on pass.
    #[default]
    Text,
    /// The JSON report on stdout.
    Json,
    /// A GitHub Actions `::error` annotation on stdout.
    Github,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the project folder against the publish policy.
    Check {
        /// Reject whitespace in the project file name ("true" to enable).
        #[arg(long, value_name = "BOOL")]
        forbid_spaces_in_project_name: Option<String>,

        /// Require exactly one manifest file ("true" to enable).
        #[arg(long, value_name = "BOOL")]
        require_manifest_file: Option<String>,

        /// Comma-separated endpoint names that must be declared.
        #[arg(long, value_name = "NAMES")]
        require_endpoints: Option<String>,

        /// Comma-separated endpoint names that must not be declared.
        #[arg(long, value_name = "NAMES")]
        forbid_endpoints: Option<String>,

        /// Require a subscription key on the NLU service ("true" to enable).
        #[arg(long, value_name = "BOOL")]
        require_nlu_key: Option<String>,

        /// Require a subscription key on the QA service ("true" to enable).
        #[arg(long, value_name = "BOOL")]
        require_qa_key: Option<String>,

        /// Secret for encrypted manifests (falls back to `secret_env`).
        #[arg(long)]
        secret: Option<String>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Also write the JSON report to this path.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Load the manifest and print a summary of its services.
    Inspect {
        /// Secret for encrypted manifests (falls back to `secret_env`).
        #[arg(long)]
        secret: Option<String>,
    },

    /// Explain a rule_id or code with remediation guidance.
    Explain {
        /// The rule_id (e.g., "endpoints.forbidden") or code (e.g., "nlu_key_missing") to explain.
        identifier: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.cmd {
        Commands::Check {
            ref forbid_spaces_in_project_name,
            ref require_manifest_file,
            ref require_endpoints,
            ref forbid_endpoints,
            ref require_nlu_key,
            ref require_qa_key,
            ref secret,
            format,
            ref report_out,
        } => {
            let switches = PolicyInputs {
                forbid_spaces_in_project_name: forbid_spaces_in_project_name.clone(),
                require_manifest_file: require_manifest_file.clone(),
                require_endpoints: require_endpoints.clone(),
                forbid_endpoints: forbid_endpoints.clone(),
                require_nlu_key: require_nlu_key.clone(),
                require_qa_key: require_qa_key.clone(),
            };
            cmd_check(&cli, switches, secret.clone(), format, report_out.as_deref())
        }
        Commands::Inspect { ref secret } => cmd_inspect(&cli, secret.clone()),
        Commands::Explain { ref identifier } => cmd_explain(identifier),
    }
}

fn init_logging(verbose: u8) {
    let log_level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();
}

fn overrides(cli: &Cli, switches: PolicyInputs) -> Overrides {
    Overrides {
        profile: cli.profile.clone(),
        switches,
        project_file_glob: cli.project_file_glob.clone(),
        manifest_glob: cli.manifest_glob.clone(),
    }
}

/// Missing config file is allowed (defaults apply); an unreadable one is not.
fn read_config_text(cli: &Cli) -> anyhow::Result<String> {
    let path = cli.project_dir.join(&cli.config);
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(err).with_context(|| format!("read config: {path}")),
    }
}

fn cmd_check(
    cli: &Cli,
    switches: PolicyInputs,
    secret: Option<String>,
    format: OutputFormat,
    report_out: Option<&Utf8Path>,
) -> anyhow::Result<()> {
    let result = (|| -> anyhow::Result<i32> {
        let cfg_text = read_config_text(cli)?;

        let output = run_check(CheckInput {
            project_dir: &cli.project_dir,
            config_text: &cfg_text,
            overrides: overrides(cli, switches),
            secret,
        })?;

        if let Some(path) = report_out {
            write_report(path, &output.report).context("write report json")?;
        }

        info!(
            verdict = ?output.report.verdict,
            rule = output.result.rule_id().unwrap_or(""),
            "check finished"
        );

        if !output.result.passed {
            eprintln!("{}", render_text(&output.report));
        }

        let mut stdout = std::io::stdout().lock();
        match format {
            OutputFormat::Text => {}
            OutputFormat::Json => {
                let bytes = serialize_report(&output.report)?;
                stdout.write_all(&bytes).context("write report to stdout")?;
            }
            OutputFormat::Github => {
                for line in render_github(&output.report) {
                    writeln!(stdout, "{line}").context("write annotation")?;
                }
            }
        }

        Ok(verdict_exit_code(output.report.verdict))
    })();

    match result {
        Ok(0) => Ok(()),
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("botgate error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn cmd_inspect(cli: &Cli, secret: Option<String>) -> anyhow::Result<()> {
    let cfg_text = read_config_text(cli)?;
    let cfg = if cfg_text.trim().is_empty() {
        botgate_settings::BotgateConfigV1::default()
    } else {
        botgate_settings::parse_config_toml(&cfg_text).context("parse config")?
    };
    let resolved: ResolvedConfig =
        botgate_settings::resolve_config(cfg, overrides(cli, PolicyInputs::default()))
            .context("resolve config")?;
    let secret = resolve_secret(secret, resolved.secret_env.as_deref());

    match run_inspect(&cli.project_dir, &resolved.manifest_glob, secret.as_deref()) {
        Ok(manifest) => {
            print!("{}", botgate_app::format_inspect(&manifest));
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    }
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", botgate_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_rule_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                botgate_app::format_not_found(&identifier, available_rule_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
