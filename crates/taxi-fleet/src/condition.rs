//! Qualitative taxi health tiers.

/// Health tier derived from the maintenance level.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Condition {
    #[default]
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Tier for a maintenance level expressed as a percentage of maximum.
    ///
    /// Boundaries are inclusive on the lower edge: 80 % is excellent,
    /// anything below drops to good.
    pub fn from_percent(percent: f64) -> Self {
        if percent >= 80.0 {
            Condition::Excellent
        } else if percent >= 60.0 {
            Condition::Good
        } else if percent >= 40.0 {
            Condition::Fair
        } else {
            Condition::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Condition::Excellent => "excellent",
            Condition::Good      => "good",
            Condition::Fair      => "fair",
            Condition::Poor      => "poor",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
