use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub logging: LoggingSettings,
    pub output: OutputSettings,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub level: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

/// Defaults, then the optional `config/uptime` file, then `UPTIME__*` variables
/// (e.g. `UPTIME__OUTPUT__FORMAT=json`).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let settings = base_builder()?
        .add_source(config::File::with_name("config/uptime").required(false))
        .add_source(env_source())
        .build()?;

    Ok(settings.try_deserialize()?)
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix("UPTIME")
        .prefix_separator("__")
        .separator("__")
}

fn base_builder() -> anyhow::Result<config::ConfigBuilder<config::builder::DefaultState>> {
    Ok(config::Config::builder()
        .set_default("logging.level", "warn")?
        .set_default("output.format", "text")?)
}
