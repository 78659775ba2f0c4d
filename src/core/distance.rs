//! Distance resolution: location label → fixed kilometers.

use crate::config::{Config, DistanceRule};

/// Ordered substring-rule table with a fallback value.
///
/// The shipped default reproduces the reference policy: any label
/// containing "Brakel" (case-sensitive) is 18 km, everything else 50 km.
/// Additional locations are plain config entries, no code change needed.
pub struct DistanceTable {
    rules: Vec<DistanceRule>,
    default_km: i64,
}

impl DistanceTable {
    pub fn new(rules: Vec<DistanceRule>, default_km: i64) -> Self {
        Self { rules, default_km }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.distance_rules.clone(), cfg.default_distance_km)
    }

    /// First matching rule wins; substring match, case-sensitive.
    pub fn resolve(&self, location: &str) -> i64 {
        self.rules
            .iter()
            .find(|r| location.contains(&r.contains))
            .map(|r| r.km)
            .unwrap_or(self.default_km)
    }
}

impl Default for DistanceTable {
    fn default() -> Self {
        Self::new(
            vec![DistanceRule {
                contains: "Brakel".to_string(),
                km: 18,
            }],
            50,
        )
    }
}
