//! `tally-tp`: runs the transaction processor for one family.

mod shutdown;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tally_processor::{ProcessorConfig, TransactionProcessor};
use tally_types::Family;
use tally_utils::LogFormat;

#[derive(Parser, Debug)]
#[command(name = "tally-tp", about = "Tally transaction processor", version)]
struct Cli {
    /// Family to serve: localVote, provinceVote, localDPT or provinceDPT.
    family: Option<String>,

    /// Validator endpoint, e.g. tcp://localhost:4004.
    endpoint: Option<String>,

    /// Path to a TOML configuration file. Flags override its values.
    #[arg(long, env = "TALLY_CONFIG")]
    config: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "TALLY_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format: "human" or "json".
    #[arg(long, env = "TALLY_LOG_FORMAT")]
    log_format: Option<String>,
}

impl Cli {
    /// Layer command-line values over the file configuration.
    fn merge(self, file: ProcessorConfig) -> ProcessorConfig {
        ProcessorConfig {
            family: self.family.or(file.family),
            endpoint: self.endpoint.or(file.endpoint),
            log_level: self.log_level.unwrap_or(file.log_level),
            log_format: self.log_format.unwrap_or(file.log_format),
        }
    }
}

const INCOMPLETE_ARGUMENTS: &str =
    "Incomplete arguments. Should be : tally-tp <family> tcp://host:4004";

/// What to serve, or the message to print before exiting with status 1.
fn target(config: &ProcessorConfig) -> Result<(Family, &str), String> {
    let (Some(family), Some(endpoint)) = (config.family.as_deref(), config.endpoint.as_deref())
    else {
        return Err(INCOMPLETE_ARGUMENTS.to_string());
    };
    let family = family.parse::<Family>().map_err(|err| err.to_string())?;
    Ok((family, endpoint))
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => ProcessorConfig::from_toml_file(path)?,
        None => ProcessorConfig::default(),
    };
    let config = cli.merge(file_config);

    let (family, endpoint) = match target(&config) {
        Ok(target) => target,
        Err(message) => {
            println!("{message}");
            return Ok(ExitCode::from(1));
        }
    };

    let format: LogFormat = config.log_format.parse()?;
    tally_utils::init_tracing_with(format, &config.log_level);

    let processor = TransactionProcessor::for_family(endpoint, family);
    for registration in processor.registrations() {
        tracing::info!(
            family = %registration.family,
            versions = ?registration.versions,
            namespaces = ?registration.namespaces,
            "registered handler"
        );
    }
    tracing::info!(endpoint = processor.endpoint(), "transaction processor ready");

    shutdown::wait_for_signal().await?;

    tracing::info!("transaction processor exited cleanly");
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments() {
        let cli = Cli::try_parse_from(["tally-tp", "localDPT", "tcp://validator:4004"]).unwrap();
        let config = cli.merge(ProcessorConfig::default());
        assert_eq!(config.family.as_deref(), Some("localDPT"));
        assert_eq!(config.endpoint.as_deref(), Some("tcp://validator:4004"));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn flags_override_file_values() {
        let file = ProcessorConfig::from_toml_str(
            "family = \"localVote\"\nendpoint = \"tcp://file:4004\"\nlog_level = \"debug\"\n",
        )
        .unwrap();
        let cli = Cli::try_parse_from(["tally-tp", "provinceDPT", "--log-format", "json"]).unwrap();
        let config = cli.merge(file);
        assert_eq!(config.family.as_deref(), Some("provinceDPT"));
        assert_eq!(config.endpoint.as_deref(), Some("tcp://file:4004"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn config_file_supplies_family() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tp.toml");
        std::fs::write(&path, "family = \"provinceVote\"\n").unwrap();
        let path_arg = path.to_string_lossy().into_owned();

        let cli = Cli::try_parse_from(["tally-tp", "--config", path_arg.as_str()]).unwrap();
        let file = ProcessorConfig::from_toml_file(cli.config.as_ref().unwrap()).unwrap();
        let config = cli.merge(file);
        assert_eq!(config.family.as_deref(), Some("provinceVote"));
        assert!(config.endpoint.is_none());
        assert_eq!(target(&config).unwrap_err(), INCOMPLETE_ARGUMENTS);
    }

    #[test]
    fn missing_endpoint_is_incomplete() {
        let cli = Cli::try_parse_from(["tally-tp", "localVote"]).unwrap();
        let config = cli.merge(ProcessorConfig::default());
        assert_eq!(target(&config).unwrap_err(), INCOMPLETE_ARGUMENTS);

        let cli = Cli::try_parse_from(["tally-tp"]).unwrap();
        let config = cli.merge(ProcessorConfig::default());
        assert_eq!(target(&config).unwrap_err(), INCOMPLETE_ARGUMENTS);
    }

    #[test]
    fn endpoint_from_config_file_completes_arguments() {
        let file = ProcessorConfig::from_toml_str("endpoint = \"tcp://file:4004\"\n").unwrap();
        let cli = Cli::try_parse_from(["tally-tp", "localDPT"]).unwrap();
        let config = cli.merge(file);
        assert_eq!(target(&config).unwrap(), (Family::LocalDpt, "tcp://file:4004"));
    }

    #[test]
    fn unknown_family_message() {
        let cli = Cli::try_parse_from(["tally-tp", "nationalVote", "tcp://localhost:4004"]).unwrap();
        let config = cli.merge(ProcessorConfig::default());
        assert_eq!(target(&config).unwrap_err(), "No such tp family : nationalVote");
    }
}
