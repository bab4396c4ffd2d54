// ── Regions ──
//
// Exactly two named deployments. The base URL is never stored on its own;
// it is always looked up from the region, so the two cannot drift apart.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use url::Url;

pub const DEFAULT_REGION1_URL: &str = "http://localhost:8000";
pub const DEFAULT_REGION2_URL: &str = "http://localhost:8100";

/// One of the two backend deployments.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Region {
    #[default]
    Region1,
    Region2,
}

impl Region {
    /// Wire identifier, as used in paths and failover payloads.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Human label for tabs and headers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Region1 => "Region 1",
            Self::Region2 => "Region 2",
        }
    }

    pub fn other(self) -> Self {
        match self {
            Self::Region1 => Self::Region2,
            Self::Region2 => Self::Region1,
        }
    }
}

/// Static region → base URL mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionEndpoints {
    pub region1: Url,
    pub region2: Url,
}

impl RegionEndpoints {
    pub fn new(region1: Url, region2: Url) -> Self {
        Self { region1, region2 }
    }

    pub fn base_url(&self, region: Region) -> &Url {
        match region {
            Region::Region1 => &self.region1,
            Region::Region2 => &self.region2,
        }
    }
}

impl Default for RegionEndpoints {
    // Both literals are valid absolute URLs.
    #[allow(clippy::unwrap_used)]
    fn default() -> Self {
        Self {
            region1: Url::parse(DEFAULT_REGION1_URL).unwrap(),
            region2: Url::parse(DEFAULT_REGION2_URL).unwrap(),
        }
    }
}
