//! Engine configuration.
//!
//! The engine itself is stateless; these options are passed explicitly to the
//! calls that need them. `EngineConfig::from_env` is a convenience for
//! binaries that want to pick the policy from the environment.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable selecting the cross-category fallback policy.
pub const FALLBACK_ENV_VAR: &str = "ALACENA_CROSS_CATEGORY_FALLBACK";

/// What to do when a volume↔weight conversion has no density for the
/// ingredient.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrossCategoryFallback {
    /// Assume the density of water (1 g/ml) and mark the result approximate.
    #[default]
    WaterDensity,
    /// Report the conversion as unsuccessful.
    Fail,
}

impl CrossCategoryFallback {
    pub fn as_str(&self) -> &'static str {
        match self {
            CrossCategoryFallback::WaterDensity => "water",
            CrossCategoryFallback::Fail => "fail",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "water" => Some(CrossCategoryFallback::WaterDensity),
            "fail" => Some(CrossCategoryFallback::Fail),
            _ => None,
        }
    }
}

/// Options for `conversion::convert_with`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    pub cross_category_fallback: CrossCategoryFallback,
}

impl ConversionOptions {
    /// Options that refuse to guess a density.
    pub fn strict() -> Self {
        Self {
            cross_category_fallback: CrossCategoryFallback::Fail,
        }
    }
}

/// Engine configuration loaded from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub conversion: ConversionOptions,
}

impl EngineConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `ALACENA_CROSS_CATEGORY_FALLBACK`: "water" (default) or "fail"
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cross_category_fallback = match lookup(FALLBACK_ENV_VAR) {
            Some(value) => CrossCategoryFallback::from_str(&value).ok_or_else(|| {
                ConfigError::InvalidValue {
                    var: FALLBACK_ENV_VAR.to_string(),
                    value,
                    expected: "water, fail",
                }
            })?,
            None => CrossCategoryFallback::default(),
        };

        Ok(Self {
            conversion: ConversionOptions {
                cross_category_fallback,
            },
        })
    }
}
