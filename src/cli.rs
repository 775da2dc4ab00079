use std::path::PathBuf;

use clap::Parser;
use reqwest::Url;

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
pub struct Args {
    #[clap(flatten)]
    pub api: SolaxApiArgs,

    #[clap(flatten)]
    pub limits: RateLimitArgs,

    /// Snapshot of the latest reading, fully rewritten on every successful poll.
    #[clap(long, default_value = "/var/www/solax/solax_values.json", env = "OUTPUT_FILE_PATH")]
    pub output_path: PathBuf,

    /// Append-only journal of poll successes and failures.
    #[clap(long, default_value = "/var/log/solaxmonitor.log", env = "LOG_FILE_PATH")]
    pub log_path: PathBuf,
}

#[derive(Parser)]
pub struct SolaxApiArgs {
    /// Solax Cloud API token.
    #[clap(long = "token-id", env = "TOKEN_ID")]
    pub token_id: String,

    /// Inverter serial number.
    #[clap(long = "serial-number", alias = "sn", env = "SERIAL_NUMBER")]
    pub serial_number: String,

    /// Real-time info endpoint.
    #[clap(
        long = "api-url",
        default_value = "https://www.eu.solaxcloud.com:9443/proxy/api/getRealtimeInfo.do",
        env = "API_URL"
    )]
    pub url: Url,
}

/// Limits per the Solax API user guide.
#[derive(Copy, Clone, Parser)]
pub struct RateLimitArgs {
    #[clap(long, default_value = "10000", env = "MAX_CALLS_PER_DAY")]
    pub max_calls_per_day: u32,

    #[clap(
        long,
        default_value = "6",
        env = "MAX_CALLS_PER_MINUTE",
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub max_calls_per_minute: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_fail_parsing() {
        // No request can ever be issued when parsing refuses to produce the args.
        assert!(Args::try_parse_from(["solax-monitor"]).is_err());
    }

    #[test]
    fn a_single_credential_is_not_enough() {
        assert!(Args::try_parse_from(["solax-monitor", "--token-id", "token"]).is_err());
        assert!(Args::try_parse_from(["solax-monitor", "--serial-number", "serial"]).is_err());
    }

    #[test]
    fn both_credentials_parse_with_defaults() -> anyhow::Result<()> {
        let args = Args::try_parse_from([
            "solax-monitor",
            "--token-id",
            "token",
            "--serial-number",
            "serial",
        ])?;
        assert_eq!(args.api.token_id, "token");
        assert_eq!(args.api.serial_number, "serial");
        assert_eq!(args.limits.max_calls_per_day, 10000);
        assert_eq!(args.limits.max_calls_per_minute, 6);
        assert_eq!(args.output_path.to_str(), Some("/var/www/solax/solax_values.json"));
        assert_eq!(args.log_path.to_str(), Some("/var/log/solaxmonitor.log"));
        Ok(())
    }

    #[test]
    fn zero_calls_per_minute_is_rejected() {
        let result = Args::try_parse_from([
            "solax-monitor",
            "--token-id",
            "token",
            "--serial-number",
            "serial",
            "--max-calls-per-minute",
            "0",
        ]);
        assert!(result.is_err());
    }
}
