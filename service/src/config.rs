use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::fmt;
use std::str::FromStr;

/// Default plaintext port, matching the port the sample clients are documented against.
pub const DEFAULT_PORT: u16 = 5285;

#[derive(Clone, Debug, PartialEq)]
pub enum RustEnv {
    Development,
    Production,
    Staging,
}

#[derive(Debug, PartialEq, Eq)]
pub struct RustEnvParseError;

impl FromStr for RustEnv {
    type Err = RustEnvParseError;
    fn from_str(level: &str) -> Result<RustEnv, Self::Err> {
        match level.to_lowercase().as_str() {
            "development" => Ok(RustEnv::Development),
            "production" => Ok(RustEnv::Production),
            "staging" => Ok(RustEnv::Staging),
            _ => Err(RustEnvParseError),
        }
    }
}

impl fmt::Display for RustEnv {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RustEnv::Development => write!(f, "development"),
            RustEnv::Production => write!(f, "production"),
            RustEnv::Staging => write!(f, "staging"),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that are allowed to open an event stream.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:3000,https://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "127.0.0.1")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// The public HTTPS port plaintext requests get redirected to. When unset,
    /// requests are served without redirection.
    #[arg(long, env)]
    pub https_port: Option<u16>,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    /// Set the Rust runtime environment to use. The OpenAPI document is only
    /// served in development.
    #[arg(
    short,
    long,
    env,
    default_value_t = RustEnv::Development,
    value_parser = clap::builder::PossibleValuesParser::new([
        "DEVELOPMENT", "PRODUCTION", "STAGING",
        "development", "production", "staging"
    ])
        .map(|s| s.parse::<RustEnv>().unwrap()),
    )]
    pub runtime_env: RustEnv,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn interface(&self) -> &str {
        self.interface.as_deref().unwrap_or("127.0.0.1")
    }

    /// The `interface:port` pair the server binds to.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.interface(), self.port)
    }

    pub fn https_port(&self) -> Option<u16> {
        self.https_port
    }

    pub fn set_https_port(mut self, https_port: Option<u16>) -> Self {
        self.https_port = https_port;
        self
    }

    pub fn runtime_env(&self) -> RustEnv {
        self.runtime_env.clone()
    }

    pub fn set_runtime_env(mut self, runtime_env: RustEnv) -> Self {
        self.runtime_env = runtime_env;
        self
    }

    pub fn is_development(&self) -> bool {
        self.runtime_env() == RustEnv::Development
    }

    pub fn is_production(&self) -> bool {
        self.runtime_env() == RustEnv::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["weather_stream"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_rust_env_parses_case_insensitively() {
        assert_eq!("PRODUCTION".parse::<RustEnv>(), Ok(RustEnv::Production));
        assert_eq!("Staging".parse::<RustEnv>(), Ok(RustEnv::Staging));
        assert_eq!("development".parse::<RustEnv>(), Ok(RustEnv::Development));
        assert_eq!("qa".parse::<RustEnv>(), Err(RustEnvParseError));
    }

    #[test]
    fn test_rust_env_display_round_trips() {
        for env in [RustEnv::Development, RustEnv::Production, RustEnv::Staging] {
            assert_eq!(env.to_string().parse::<RustEnv>(), Ok(env));
        }
    }

    #[test]
    fn test_explicit_flags_override_defaults() {
        let config = parse(&[
            "--interface",
            "0.0.0.0",
            "--port",
            "8080",
            "--https-port",
            "8443",
            "--runtime-env",
            "PRODUCTION",
            "--log-level-filter",
            "DEBUG",
        ]);

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.https_port(), Some(8443));
        assert!(config.is_production());
        assert!(!config.is_development());
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let result = Config::try_parse_from(["weather_stream", "--log-level-filter", "LOUD"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_allowed_origins_are_comma_delimited() {
        let config = parse(&[
            "--allowed-origins",
            "https://a.example,https://b.example",
        ]);
        assert_eq!(
            config.allowed_origins,
            vec!["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }

    #[test]
    fn test_setters_replace_values() {
        let config = parse(&["--runtime-env", "development"])
            .set_runtime_env(RustEnv::Staging)
            .set_https_port(Some(443));
        assert_eq!(config.runtime_env(), RustEnv::Staging);
        assert_eq!(config.https_port(), Some(443));
    }
}
