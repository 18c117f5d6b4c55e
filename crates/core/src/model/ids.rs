use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a catalog question (e.g. `iso-27001-isms`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a new `QuestionId`
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying string value
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Compliance framework a question is grouped and scored under.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FrameworkId {
    #[serde(rename = "iso-27001")]
    Iso27001,
    #[serde(rename = "nca-ecc")]
    NcaEcc,
    #[serde(rename = "uae-ia-nesa")]
    UaeIaNesa,
    #[serde(rename = "pci-dss")]
    PciDss,
    #[serde(rename = "pdpl")]
    Pdpl,
    #[serde(rename = "sama")]
    Sama,
    #[serde(rename = "nist-csf")]
    NistCsf,
    #[serde(rename = "cis-controls")]
    CisControls,
    #[serde(rename = "gdpr")]
    Gdpr,
    #[serde(rename = "aramco-ccc")]
    AramcoCcc,
}

impl FrameworkId {
    /// Every framework, in catalog display order.
    pub const ALL: [FrameworkId; 10] = [
        FrameworkId::Iso27001,
        FrameworkId::NcaEcc,
        FrameworkId::UaeIaNesa,
        FrameworkId::PciDss,
        FrameworkId::Pdpl,
        FrameworkId::Sama,
        FrameworkId::NistCsf,
        FrameworkId::CisControls,
        FrameworkId::Gdpr,
        FrameworkId::AramcoCcc,
    ];

    /// Stable kebab-case identifier, as used in persisted documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            FrameworkId::Iso27001 => "iso-27001",
            FrameworkId::NcaEcc => "nca-ecc",
            FrameworkId::UaeIaNesa => "uae-ia-nesa",
            FrameworkId::PciDss => "pci-dss",
            FrameworkId::Pdpl => "pdpl",
            FrameworkId::Sama => "sama",
            FrameworkId::NistCsf => "nist-csf",
            FrameworkId::CisControls => "cis-controls",
            FrameworkId::Gdpr => "gdpr",
            FrameworkId::AramcoCcc => "aramco-ccc",
        }
    }

    /// Human-readable label (e.g. `ISO 27001`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FrameworkId::Iso27001 => "ISO 27001",
            FrameworkId::NcaEcc => "NCA ECC",
            FrameworkId::UaeIaNesa => "UAE IA/NESA",
            FrameworkId::PciDss => "PCI-DSS",
            FrameworkId::Pdpl => "PDPL",
            FrameworkId::Sama => "SAMA",
            FrameworkId::NistCsf => "NIST CSF",
            FrameworkId::CisControls => "CIS Controls",
            FrameworkId::Gdpr => "GDPR",
            FrameworkId::AramcoCcc => "Aramco CCC",
        }
    }
}

impl fmt::Debug for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuestionId({})", self.0)
    }
}

impl fmt::Debug for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameworkId({})", self.as_str())
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for FrameworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

/// Error type for parsing ID from string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError {
    kind: &'static str,
    raw: String,
}

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse {} from {:?}", self.kind, self.raw)
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for QuestionId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseIdError {
                kind: "QuestionId",
                raw: s.to_string(),
            });
        }
        Ok(QuestionId::new(trimmed))
    }
}

impl FromStr for FrameworkId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FrameworkId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ParseIdError {
                kind: "FrameworkId",
                raw: s.to_string(),
            })
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
