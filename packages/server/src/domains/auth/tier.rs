use serde::{Deserialize, Serialize};

/// Subscription tier of an identity, gating how many courses it may create.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Base tier: one lifetime course.
    Free,
    /// Paid tier: unlimited course creation.
    Starter,
}

impl Tier {
    /// Lifetime course limit for this tier. `None` means unlimited.
    pub fn course_limit(&self) -> Option<i64> {
        match self {
            Tier::Free => Some(1),
            Tier::Starter => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Starter => write!(f, "starter"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(Tier::Free),
            "starter" => Ok(Tier::Starter),
            _ => Err(anyhow::anyhow!("Invalid tier: {}", s)),
        }
    }
}
