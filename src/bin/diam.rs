//! Diam CLI binary.
//!
//! Runs the capabilities-exchange application check against AVPs given
//! as JSON, and inspects the application dictionary.
//!
//! # Commands
//!
//! - `negotiate` - Check a CER/CEA's application AVPs against the dictionary
//! - `apps` - List dictionary applications

use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use diam::{CapabilityApplications, Config, Dictionary, Role, VERSION};
use serde_json::json;

#[derive(Parser)]
#[command(name = "diam")]
#[command(version = VERSION)]
#[command(about = "Diameter capabilities-exchange application negotiation", long_about = None)]
struct Cli {
    /// Config file (default: <config dir>/diam/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level when RUST_LOG is unset
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Negotiate applications advertised in a CER/CEA
    Negotiate {
        /// JSON input: AVP array or application lists (or - for stdin)
        input: Option<String>,

        /// Input file path
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Local role: server (checking a CER) or client (checking a CEA)
        #[arg(short, long)]
        role: Option<String>,

        #[command(flatten)]
        dictionary: DictionaryArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List dictionary applications
    Apps {
        #[command(flatten)]
        dictionary: DictionaryArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(clap::Args)]
struct DictionaryArgs {
    /// Dictionary file with additional applications
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Do not load the embedded base applications
    #[arg(long)]
    no_base: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = load_config(cli.config)?;

    match cli.command {
        Commands::Negotiate {
            input,
            file,
            role,
            dictionary,
            json,
        } => cmd_negotiate(config, input, file, role, dictionary, json),

        Commands::Apps { dictionary, json } => cmd_apps(config, dictionary, json),
    }
}

/// File (explicit or default location), then environment
fn load_config(path: Option<PathBuf>) -> anyhow::Result<Config> {
    let file = match path {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default()?,
    };
    Ok(file.with_env()?)
}

fn build_dictionary(mut config: Config, args: DictionaryArgs) -> anyhow::Result<Dictionary> {
    if let Some(path) = args.dictionary {
        config.dictionary.path = Some(path);
    }
    if args.no_base {
        config.dictionary.include_base = false;
    }
    Ok(Dictionary::from_config(&config.dictionary)?)
}

fn cmd_negotiate(
    config: Config,
    input: Option<String>,
    file: Option<PathBuf>,
    role: Option<String>,
    dictionary: DictionaryArgs,
    json: bool,
) -> anyhow::Result<()> {
    let role = match role {
        Some(role) => Role::from_str(&role)
            .map_err(|_| anyhow::anyhow!("Invalid role: {}. Use: server, client", role))?,
        None => config.negotiation.role,
    };
    let dict = build_dictionary(config, dictionary)?;

    let content = read_input(input, file)?;
    let apps = CapabilityApplications::from_json(&content)?;

    match apps.parse(&dict, role) {
        Ok(negotiated) => {
            tracing::info!("Negotiated {} application(s) as {}", negotiated.len(), role);
            if json {
                let out = json!({
                    "result": "accept",
                    "role": role,
                    "application_ids": negotiated.ids(),
                    "relay": negotiated.is_relay(),
                    "ignored": negotiated.ignored(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("ACCEPT ({role})");
                for id in negotiated.ids() {
                    match dict.get(*id) {
                        Some(app) => println!("  {:>10}  {}", id, app.name),
                        None => println!("  {:>10}  Relay", id),
                    }
                }
                if negotiated.ignored() > 0 {
                    println!("  ({} unknown application id(s) ignored)", negotiated.ignored());
                }
            }
            Ok(())
        },
        Err(err) => {
            tracing::info!("Negotiation failed as {}: {}", role, err);
            if json {
                let out = json!({
                    "result": "reject",
                    "role": role,
                    "error": err.to_string(),
                    "result_code": err.result_code(),
                    "failed_avp": err.failed_avp(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("REJECT ({role}): {err}");
                println!("  Result-Code: {}", err.result_code());
                if let Some(avp) = err.failed_avp() {
                    println!("  Failed-AVP:  {avp}");
                }
            }
            std::process::exit(1);
        },
    }
}

fn cmd_apps(config: Config, dictionary: DictionaryArgs, json: bool) -> anyhow::Result<()> {
    let dict = build_dictionary(config, dictionary)?;
    let apps = dict.applications();

    if json {
        println!("{}", serde_json::to_string_pretty(&apps)?);
        return Ok(());
    }

    println!("{:>10}  {:<5}  NAME", "ID", "TYPE");
    for app in apps {
        let app_type = app.app_type.map_or("-", |t| t.as_str());
        println!("{:>10}  {:<5}  {}", app.id, app_type, app.name);
    }
    Ok(())
}

fn read_input(input: Option<String>, file: Option<PathBuf>) -> anyhow::Result<String> {
    if let Some(path) = file {
        Ok(std::fs::read_to_string(path)?)
    } else if let Some(s) = input {
        if s == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        } else {
            Ok(s)
        }
    } else {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    }
}
