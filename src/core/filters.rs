use crate::domain::model::{Blueprint, Point};
use crate::domain::ports::BlueprintFilter;
use crate::utils::error::{RegistryError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default filter: returns the blueprint unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityFilter;

impl BlueprintFilter for IdentityFilter {
    fn apply(&self, bp: &Blueprint) -> Blueprint {
        bp.clone()
    }
}

/// Collapses each maximal run of equal consecutive points into its first
/// point. Non-consecutive duplicates are preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct RedundancyFilter;

impl BlueprintFilter for RedundancyFilter {
    fn apply(&self, bp: &Blueprint) -> Blueprint {
        let mut points: Vec<Point> = Vec::with_capacity(bp.points.len());
        for &p in &bp.points {
            if points.last() != Some(&p) {
                points.push(p);
            }
        }
        Blueprint::new(bp.author.clone(), bp.name.clone(), points)
    }
}

/// Keeps only the points at even sequence indices (0, 2, 4, ...), so the
/// result has ceil(n/2) points. Single-point sequences pass through.
#[derive(Debug, Clone, Copy, Default)]
pub struct UndersamplingFilter;

impl BlueprintFilter for UndersamplingFilter {
    fn apply(&self, bp: &Blueprint) -> Blueprint {
        let points = bp.points.iter().copied().step_by(2).collect();
        Blueprint::new(bp.author.clone(), bp.name.clone(), points)
    }
}

/// Startup-time selection of the active filter. One variant is chosen from
/// configuration and injected into the service; it never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    #[default]
    Identity,
    Redundancy,
    Undersampling,
}

impl FilterKind {
    pub const NAMES: [&'static str; 3] = ["identity", "redundancy", "undersampling"];

    pub fn build(self) -> Box<dyn BlueprintFilter> {
        match self {
            FilterKind::Identity => Box::new(IdentityFilter),
            FilterKind::Redundancy => Box::new(RedundancyFilter),
            FilterKind::Undersampling => Box::new(UndersamplingFilter),
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FilterKind::Identity => "identity",
            FilterKind::Redundancy => "redundancy",
            FilterKind::Undersampling => "undersampling",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for FilterKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "identity" => Ok(FilterKind::Identity),
            "redundancy" => Ok(FilterKind::Redundancy),
            "undersampling" => Ok(FilterKind::Undersampling),
            other => Err(RegistryError::InvalidConfigValue {
                field: "filter.kind".to_string(),
                value: other.to_string(),
                reason: format!("Unsupported filter. Valid filters: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}
