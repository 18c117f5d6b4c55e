use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {raw:?}")]
pub struct ParseLabelError {
    kind: &'static str,
    raw: String,
}

impl ParseLabelError {
    pub(crate) fn new(kind: &'static str, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
        }
    }
}

/// Primary country of operation, chosen on the first onboarding sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Country {
    #[serde(rename = "Saudi Arabia")]
    SaudiArabia,
    #[serde(rename = "UAE")]
    Uae,
    #[serde(rename = "Qatar")]
    Qatar,
    #[serde(rename = "Other GCC")]
    OtherGcc,
    #[serde(rename = "International")]
    International,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::SaudiArabia,
        Country::Uae,
        Country::Qatar,
        Country::OtherGcc,
        Country::International,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Country::SaudiArabia => "Saudi Arabia",
            Country::Uae => "UAE",
            Country::Qatar => "Qatar",
            Country::OtherGcc => "Other GCC",
            Country::International => "International",
        }
    }
}

/// Industry sector, chosen on the second onboarding sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Industry {
    Banking,
    Healthcare,
    Government,
    Retail,
    Logistics,
    #[serde(rename = "Oil & Gas")]
    OilAndGas,
    #[serde(rename = "SaaS/Tech")]
    SaasTech,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Banking,
        Industry::Healthcare,
        Industry::Government,
        Industry::Retail,
        Industry::Logistics,
        Industry::OilAndGas,
        Industry::SaasTech,
        Industry::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Industry::Banking => "Banking",
            Industry::Healthcare => "Healthcare",
            Industry::Government => "Government",
            Industry::Retail => "Retail",
            Industry::Logistics => "Logistics",
            Industry::OilAndGas => "Oil & Gas",
            Industry::SaasTech => "SaaS/Tech",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| ParseLabelError::new("country", s))
    }
}

impl FromStr for Industry {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Industry::ALL
            .into_iter()
            .find(|i| i.label() == s.trim())
            .ok_or_else(|| ParseLabelError::new("industry", s))
    }
}
