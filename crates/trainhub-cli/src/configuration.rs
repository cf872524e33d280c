use anyhow::Context as _;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::path::Path;
use std::time::Duration;
use trainhub_client_core::AuthSettings;
use trainhub_shared::const_config::{
    assistant::ASSISTANT_RESPONSE_DELAY,
    auth::{AUTH_EXPIRY_SWEEP_INTERVAL, AUTH_LOGIN_LATENCY, AUTH_SESSION_LIFETIME},
};
use trainhub_time::Seconds;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Configuration {
    pub auth: AuthConfig,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AuthConfig {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub session_lifetime_secs: u64,
    /// How often an active session is re-validated
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub expiry_sweep_interval_secs: u64,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub login_latency_ms: u64,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct AssistantConfig {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub response_delay_ms: u64,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct LoggingConfig {
    /// Used when `RUST_LOG` is not set
    pub default_directive: String,
}

impl AuthConfig {
    pub fn to_settings(&self) -> AuthSettings {
        AuthSettings {
            session_lifetime: Seconds::new(self.session_lifetime_secs),
            expiry_sweep_interval: Seconds::new(self.expiry_sweep_interval_secs),
            login_latency: Duration::from_millis(self.login_latency_ms),
        }
    }
}

impl AssistantConfig {
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }
}

/// Loads the configuration from the `configuration` folder in the current
/// directory
pub fn get_configuration() -> anyhow::Result<Configuration> {
    let base_path = std::env::current_dir().context("failed to determine the current directory")?;
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)
        .context("failed to parse APP_ENVIRONMENT")?;
    get_configuration_from(&base_path.join("configuration"), environment)
}

/// Layers, lowest priority first: built in defaults, `base.toml`,
/// `<environment>.toml`, then `APP_` prefixed environment variables using `__`
/// as the separator (e.g. `APP_AUTH__LOGIN_LATENCY_MS=0`). Missing files are
/// skipped
pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> anyhow::Result<Configuration> {
    let environment_filename = format!("{}.toml", environment.as_str());
    let settings = config::Config::builder()
        .set_default(
            "auth.session_lifetime_secs",
            AUTH_SESSION_LIFETIME.as_u64(),
        )?
        .set_default(
            "auth.expiry_sweep_interval_secs",
            AUTH_EXPIRY_SWEEP_INTERVAL.as_u64(),
        )?
        .set_default("auth.login_latency_ms", millis(AUTH_LOGIN_LATENCY))?
        .set_default(
            "assistant.response_delay_ms",
            millis(ASSISTANT_RESPONSE_DELAY),
        )?
        .set_default("logging.default_directive", "info")?
        .add_source(config::File::from(configuration_directory.join("base.toml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()
        .context("failed to build configuration")?;

    settings
        .try_deserialize::<Configuration>()
        .context("failed to deserialize configuration")
}

fn millis(duration: Duration) -> u64 {
    duration.as_millis().try_into().unwrap_or(u64::MAX)
}

/// The possible runtime environment for our application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn defaults_used_without_files() {
        // Arrange
        let missing = Path::new("this/folder/does/not/exist");

        // Act
        let configuration = get_configuration_from(missing, Environment::Local).unwrap();

        // Assert
        assert_eq!(configuration.auth.to_settings(), AuthSettings::default());
        assert_eq!(
            configuration.assistant.response_delay(),
            ASSISTANT_RESPONSE_DELAY
        );
        assert_eq!(configuration.logging.default_directive, "info");
    }

    #[test]
    fn environment_file_overrides_base() {
        let folder = Path::new(env!("CARGO_MANIFEST_DIR")).join("configuration");
        let local = get_configuration_from(&folder, Environment::Local).unwrap();
        let production = get_configuration_from(&folder, Environment::Production).unwrap();
        assert_eq!(local.auth.login_latency_ms, 200);
        assert_eq!(production.auth.login_latency_ms, 800);
        assert_eq!(production.auth.session_lifetime_secs, 86_400);
        assert_eq!(production.logging.default_directive, "warn");
    }

    #[rstest]
    #[case("local", Ok(Environment::Local))]
    #[case("PRODUCTION", Ok(Environment::Production))]
    #[case("staging", Err(()))]
    fn parse_environment(#[case] input: &str, #[case] expected: Result<Environment, ()>) {
        let actual: Result<Environment, String> = input.to_string().try_into();
        assert_eq!(actual.map_err(|_| ()), expected);
    }
}
