//! Конфигурация движка.

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Настройки движка и dev-бинарников.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Фиксированный seed для раздачи (воспроизводимые партии). `None` – системный RNG.
    pub rng_seed: Option<u64>,
    /// Уровень логирования: trace / debug / info / warn / error.
    pub log_level: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            log_level: "info".to_string(),
        }
    }
}

impl EngineConfig {
    /// Прочитать конфиг из JSON. Отсутствующие поля берутся по умолчанию.
    pub fn from_json_str(raw: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(raw)
            .map_err(|err| EngineError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(EngineError::InvalidConfig(format!(
                "unknown log_level: {}",
                self.log_level
            )));
        }
        Ok(())
    }

    /// Уровень для `tracing_subscriber`.
    pub fn tracing_level(&self) -> Result<tracing::Level, EngineError> {
        self.log_level.parse::<tracing::Level>().map_err(|_| {
            EngineError::InvalidConfig(format!("unknown log_level: {}", self.log_level))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_gives_defaults() {
        let config = EngineConfig::from_json_str("{}").expect("config should parse");
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let err = EngineConfig::from_json_str(r#"{"log_level":"loud"}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn reads_seed() {
        let config = EngineConfig::from_json_str(r#"{"rng_seed":7,"log_level":"DEBUG"}"#)
            .expect("config should parse");
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.tracing_level().unwrap(), tracing::Level::DEBUG);
    }
}
