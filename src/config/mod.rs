use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::Duration;
use dirs::home_dir;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    cache::{DataCache, DEFAULT_TTL_HOURS},
    category::{CategorySuggester, MAX_SUGGESTIONS},
    errors::{BeehiveError, Result},
    schedule::{HorizonPolicy, ScheduleCalculator, UpcomingConfig},
    time::Clock,
};

const DEFAULT_DIR_NAME: &str = ".beehive_core";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";
const HOME_ENV: &str = "BEEHIVE_CORE_HOME";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestionSettings {
    pub max_suggestions: usize,
}

impl Default for SuggestionSettings {
    fn default() -> Self {
        Self {
            max_suggestions: MAX_SUGGESTIONS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheSettings {
    pub default_ttl_secs: u64,
    pub upcoming_ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self {
            default_ttl_secs: (DEFAULT_TTL_HOURS * 3600) as u64,
            upcoming_ttl_secs: 30 * 60,
        }
    }
}

impl CacheSettings {
    pub fn default_ttl(&self) -> Duration {
        secs(self.default_ttl_secs)
    }

    pub fn upcoming_ttl(&self) -> Duration {
        secs(self.upcoming_ttl_secs)
    }
}

/// Largest TTL, in seconds, that fits a `Duration`.
pub const MAX_TTL_SECS: u64 = (i64::MAX / 1000) as u64;

fn secs(value: u64) -> Duration {
    i64::try_from(value)
        .ok()
        .and_then(Duration::try_seconds)
        .unwrap_or(Duration::MAX)
}

/// Tunables for suggestions, schedules, caching and the upcoming list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub suggestions: SuggestionSettings,
    pub schedule: HorizonPolicy,
    pub cache: CacheSettings,
    pub upcoming: UpcomingConfig,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.suggestions.max_suggestions == 0 {
            return Err(BeehiveError::Config(
                "suggestions.max_suggestions must be at least 1".into(),
            ));
        }
        if self.cache.default_ttl_secs == 0 || self.cache.upcoming_ttl_secs == 0 {
            return Err(BeehiveError::Config("cache TTLs must be positive".into()));
        }
        if self.cache.default_ttl_secs > MAX_TTL_SECS || self.cache.upcoming_ttl_secs > MAX_TTL_SECS
        {
            return Err(BeehiveError::Config(format!(
                "cache TTLs must not exceed {MAX_TTL_SECS} seconds"
            )));
        }
        if self.upcoming.limit == 0 {
            return Err(BeehiveError::Config(
                "upcoming.limit must be at least 1".into(),
            ));
        }
        Ok(())
    }

    pub fn suggester(&self) -> CategorySuggester {
        CategorySuggester::new(self.suggestions.max_suggestions)
    }

    pub fn calculator(&self) -> ScheduleCalculator {
        ScheduleCalculator::new(self.schedule)
    }

    pub fn build_cache(&self, clock: Arc<dyn Clock>) -> DataCache {
        DataCache::new(clock, self.cache.default_ttl())
    }
}

/// Returns the data directory, honouring `BEEHIVE_CORE_HOME` and defaulting
/// to `~/.beehive_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Reads the configuration; a missing file yields the defaults.
    pub fn load(&self) -> Result<Config> {
        if !self.path.exists() {
            debug!("no config at {}, using defaults", self.path.display());
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        config.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension(TMP_SUFFIX);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        info!("configuration saved to {}", self.path.display());
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
