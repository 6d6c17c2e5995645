//! Inspection CLI for the funapi message type table.
//!
//! ```bash
//! msgtable list
//! msgtable lookup 16 3 -1
//! msgtable multicast 8
//! msgtable shape pbuf_echo
//! ```

use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use tracing::{debug, info};

use fun_message_table::fields;
use fun_message_table::funapi::shapes::FieldLabel;
use fun_message_table::logger::{self, LogFormat, LogLevel};
use fun_message_table::*;

const CONFIG_FILE: &str = "msgtable.toml";
const DEFAULT_SOURCE: &str = "default";

/// Funapi message type table
#[derive(Parser, Debug)]
#[command(name = "msgtable")]
#[command(about = "Inspect the funapi message type table")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Print every message type and multicast message type
    List,

    /// Resolve message type tags
    Lookup {
        #[arg(required = true, allow_negative_numbers = true)]
        tags: Vec<i32>,
    },

    /// Resolve multicast message type tags
    Multicast {
        #[arg(required = true, allow_negative_numbers = true)]
        tags: Vec<i32>,
    },

    /// Print the shape of a message type, by name
    Shape { name: String },
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::Lookup { .. } => "lookup",
            Command::Multicast { .. } => "multicast",
            Command::Shape { .. } => "shape",
        }
    }
}

// Configuration structures
#[derive(Debug, Deserialize, Clone, Default)]
struct Config {
    #[serde(default)]
    strict: bool,
    #[serde(default)]
    tracing: TracingConfig,
}

#[derive(Debug, Deserialize, Clone)]
struct TracingConfig {
    #[serde(default = "default_format")]
    format: String,
    #[serde(default = "default_level")]
    level: String,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            level: default_level(),
        }
    }
}

fn default_format() -> String {
    "compact".to_string()
}

fn default_level() -> String {
    "warn".to_string()
}

/// Load configuration from `path`, returning it with the source actually used.
fn load_config(path: &str) -> (Config, &str) {
    match fs::read_to_string(path) {
        Ok(contents) => match parse_config(&contents) {
            Ok(config) => (config, path),
            Err(e) => {
                eprintln!("Failed to parse {}: {}", path, e);
                eprintln!("Using default configuration");
                (Config::default(), DEFAULT_SOURCE)
            }
        },
        Err(_) => {
            eprintln!("{} not found, using default configuration", path);
            (Config::default(), DEFAULT_SOURCE)
        }
    }
}

fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

fn list() {
    println!("message types:");
    for msg_type in MessageType::ALL {
        println!(
            "  {:>3}  {:<18} {}",
            msg_type.tag(),
            msg_type.name(),
            msg_type.shape().full_name()
        );
    }
    println!("multicast message types:");
    for msg_type in MulticastMessageType::ALL {
        println!("  {:>3}  {}", msg_type.tag(), msg_type.name());
    }
}

fn lookup(tags: &[i32], strict: bool) -> color_eyre::Result<()> {
    for &tag in tags {
        match resolve(tag) {
            Ok(resolved) => {
                println!("{}\t{}\t{}", tag, resolved.name, resolved.shape.full_name())
            }
            Err(e) if strict => return Err(e.into()),
            Err(_) => println!("{}\t{}\t", tag, message_type_name_of(tag)),
        }
    }
    Ok(())
}

fn lookup_multicast(tags: &[i32], strict: bool) -> color_eyre::Result<()> {
    for &tag in tags {
        match resolve_multicast(tag) {
            Ok(multicast_type) => println!("{}\t{}", tag, multicast_type.name()),
            Err(e) if strict => return Err(e.into()),
            Err(_) => println!("{}\t{}", tag, multicast_message_type_name_of(tag)),
        }
    }
    Ok(())
}

fn shape(name: &str) -> color_eyre::Result<()> {
    let msg_type: MessageType = name.parse()?;
    let shape = msg_type.shape();
    println!("{} ({})", shape.full_name(), msg_type);
    if shape.fields.is_empty() {
        println!("  fields: opaque");
    }
    for field in shape.fields {
        let label = match field.label {
            FieldLabel::Required => "required",
            FieldLabel::Optional => "optional",
        };
        println!("  {} {:?} {} = {}", label, field.kind, field.name, field.number);
    }
    if let Some(ext) = shape.extension {
        println!("  extends {} as {} = {}", ext.extendee, ext.name, ext.number);
    }
    Ok(())
}

fn run(command: &Command, strict: bool) -> color_eyre::Result<()> {
    match command {
        Command::List => {
            list();
            Ok(())
        }
        Command::Lookup { tags } => lookup(tags, strict),
        Command::Multicast { tags } => lookup_multicast(tags, strict),
        Command::Shape { name } => shape(name),
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let (config, source) = load_config(CONFIG_FILE);

    logger::init_logger(
        config.tracing.format.parse().unwrap_or(LogFormat::Compact),
        config.tracing.level.parse().unwrap_or(LogLevel::Warn),
    );

    info!(
        { fields::CONFIG_SOURCE } = source,
        strict = config.strict,
        tracing_format = config.tracing.format.as_str(),
        tracing_level = config.tracing.level.as_str(),
        "Configuration loaded"
    );
    debug!({ fields::COMMAND } = cli.command.name(), "Running command");

    let result = run(&cli.command, config.strict);
    if let Err(ref e) = result {
        debug!(
            { fields::COMMAND } = cli.command.name(),
            { fields::ERROR } = %e,
            "Command failed"
        );
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_negative_tags() {
        let cli = Cli::try_parse_from(["msgtable", "lookup", "16", "-1"]).unwrap();
        assert_eq!(cli.command, Command::Lookup { tags: vec![16, -1] });

        let cli = Cli::try_parse_from(["msgtable", "multicast", "8"]).unwrap();
        assert_eq!(cli.command, Command::Multicast { tags: vec![8] });

        let cli = Cli::try_parse_from(["msgtable", "shape", "pbuf_echo"]).unwrap();
        assert_eq!(
            cli.command,
            Command::Shape {
                name: "pbuf_echo".to_string()
            }
        );
    }

    #[test]
    fn test_cli_rejects_bad_usage() {
        assert!(Cli::try_parse_from(["msgtable"]).is_err());
        assert!(Cli::try_parse_from(["msgtable", "bogus"]).is_err());
        assert!(Cli::try_parse_from(["msgtable", "lookup"]).is_err());
        assert!(Cli::try_parse_from(["msgtable", "lookup", "echo"]).is_err());
        assert!(Cli::try_parse_from(["msgtable", "list", "16"]).is_err());
    }

    #[test]
    fn test_parse_config_defaults() {
        let config = parse_config("").unwrap();
        assert!(!config.strict);
        assert_eq!(config.tracing.format, "compact");
        assert_eq!(config.tracing.level, "warn");
    }

    #[test]
    fn test_parse_config() {
        let config = parse_config(
            r#"
strict = true

[tracing]
format = "json"
"#,
        )
        .unwrap();
        assert!(config.strict);
        assert_eq!(config.tracing.format, "json");
        assert_eq!(config.tracing.level, "warn");
    }

    #[test]
    fn test_sample_config_matches_defaults() {
        let config = parse_config(include_str!("../msgtable.toml")).unwrap();
        assert_eq!(config.strict, Config::default().strict);
        assert_eq!(config.tracing.format, default_format());
        assert_eq!(config.tracing.level, default_level());
    }

    #[test]
    fn test_parse_config_rejects_bad_types() {
        assert!(parse_config("strict = \"yes\"").is_err());
    }

    #[test]
    fn test_load_config_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("msgtable-missing-config.toml");
        let _ = fs::remove_file(&path);
        let path = path.to_string_lossy().into_owned();

        let (config, source) = load_config(&path);
        assert_eq!(source, DEFAULT_SOURCE);
        assert!(!config.strict);
        assert_eq!(config.tracing.level, "warn");
    }

    #[test]
    fn test_load_config_reports_file_source() {
        let path = std::env::temp_dir().join(format!("msgtable-{}.toml", std::process::id()));
        fs::write(&path, "strict = true\n").unwrap();
        let path_str = path.to_string_lossy().into_owned();

        let (config, source) = load_config(&path_str);
        assert_eq!(source, path_str);
        assert!(config.strict);

        fs::write(&path, "strict = [").unwrap();
        let (config, source) = load_config(&path_str);
        assert_eq!(source, DEFAULT_SOURCE);
        assert!(!config.strict);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_lookup_strict() {
        assert!(lookup(&[16, 3], false).is_ok());
        let err = lookup(&[16, 3], true).unwrap_err();
        assert_eq!(err.to_string(), "unknown message type: 3");
        assert!(lookup_multicast(&[9], true).is_ok());
        assert!(lookup_multicast(&[16], true).is_err());
    }

    #[test]
    fn test_shape_by_name() {
        assert!(shape("pbuf_echo").is_ok());
        assert!(shape("cs_ping").is_ok());
        assert!(shape("PbufEchoMessage").is_err());
    }
}
