//! Static question bank and framework descriptors.
//!
//! The question catalog ships as an embedded JSON file and is parsed once on
//! first use. Nothing here is mutated at runtime.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{FrameworkId, QuestionId};

const BUILTIN_QUESTIONS: &str = include_str!("../data/questions.json");

static BUILTIN: LazyLock<QuestionBank> = LazyLock::new(|| {
    QuestionBank::from_json(BUILTIN_QUESTIONS).expect("embedded question catalog is valid")
});

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("question catalog is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("duplicate question id: {0}")]
    DuplicateId(QuestionId),

    #[error("question {0} has empty text")]
    EmptyText(QuestionId),
}

/// Control domain a question belongs to. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Governance & Risk Management")]
    Governance,
    #[serde(rename = "Access Control & Identity")]
    AccessControl,
    #[serde(rename = "Data Protection & Privacy")]
    DataProtection,
    #[serde(rename = "Monitoring & Incident Response")]
    Monitoring,
    #[serde(rename = "Vendor & Third-Party Security")]
    VendorSecurity,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Governance,
        Category::AccessControl,
        Category::DataProtection,
        Category::Monitoring,
        Category::VendorSecurity,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Governance => "Governance & Risk Management",
            Category::AccessControl => "Access Control & Identity",
            Category::DataProtection => "Data Protection & Privacy",
            Category::Monitoring => "Monitoring & Incident Response",
            Category::VendorSecurity => "Vendor & Third-Party Security",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub framework: FrameworkId,
    pub category: Category,
    pub text: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Deserialize)]
struct CatalogFile {
    questions: Vec<Question>,
}

/// Ordered, immutable list of questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

impl QuestionBank {
    /// The catalog compiled into the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog fails validation, which the test suite rules out.
    #[must_use]
    pub fn builtin() -> &'static QuestionBank {
        &BUILTIN
    }

    /// Parse a catalog of the form `{"questions": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` for malformed JSON, duplicate ids or blank question text.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::new(file.questions)
    }

    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateId` or `CatalogError::EmptyText`.
    pub fn new(questions: Vec<Question>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(questions.len());
        for question in &questions {
            if question.text.trim().is_empty() {
                return Err(CatalogError::EmptyText(question.id.clone()));
            }
            if !seen.insert(question.id.clone()) {
                return Err(CatalogError::DuplicateId(question.id.clone()));
            }
        }
        Ok(Self { questions })
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| &q.id == id)
    }

    /// Questions for one framework, in catalog order.
    pub fn for_framework(&self, framework: FrameworkId) -> impl Iterator<Item = &Question> + '_ {
        self.questions
            .iter()
            .filter(move |q| q.framework == framework)
    }
}

/// Onboarding descriptor for a framework. Display only; scoring ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameworkInfo {
    pub id: FrameworkId,
    pub name: &'static str,
    pub description: &'static str,
    pub complexity: &'static str,
    /// Inclusive (min, max) minutes to complete.
    pub estimated_minutes: (u16, u16),
    pub category: &'static str,
    pub relevance: &'static str,
}

impl FrameworkInfo {
    /// Display form of the time range, e.g. `15-20 min`.
    #[must_use]
    pub fn estimated_time(&self) -> String {
        let (min, max) = self.estimated_minutes;
        format!("{min}-{max} min")
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.relevance == "Critical"
    }
}

/// Onboarding groups, in display order.
pub const FRAMEWORK_GROUPS: [&str; 6] = [
    "National Standards",
    "International Standards",
    "Industry Specific",
    "Privacy Laws",
    "Financial Regulations",
    "Best Practices",
];

/// Frameworks bucketed by [`FRAMEWORK_GROUPS`]; empty groups are skipped.
#[must_use]
pub fn grouped_frameworks() -> Vec<(&'static str, Vec<&'static FrameworkInfo>)> {
    FRAMEWORK_GROUPS
        .into_iter()
        .filter_map(|group| {
            let members: Vec<_> = FRAMEWORKS.iter().filter(|f| f.category == group).collect();
            (!members.is_empty()).then_some((group, members))
        })
        .collect()
}

pub static FRAMEWORKS: [FrameworkInfo; 10] = [
    FrameworkInfo {
        id: FrameworkId::Iso27001,
        name: "ISO 27001",
        description: "International standard for information security management systems",
        complexity: "Medium",
        estimated_minutes: (15, 20),
        category: "International Standards",
        relevance: "High",
    },
    FrameworkInfo {
        id: FrameworkId::NcaEcc,
        name: "NCA ECC",
        description: "Saudi Arabia Essential Cybersecurity Controls - mandatory for government entities",
        complexity: "High",
        estimated_minutes: (20, 25),
        category: "National Standards",
        relevance: "Critical",
    },
    FrameworkInfo {
        id: FrameworkId::UaeIaNesa,
        name: "UAE IA/NESA",
        description: "UAE Information Assurance Standards for government and critical infrastructure",
        complexity: "High",
        estimated_minutes: (18, 22),
        category: "National Standards",
        relevance: "High",
    },
    FrameworkInfo {
        id: FrameworkId::PciDss,
        name: "PCI-DSS",
        description: "Payment Card Industry Data Security Standard for payment processing",
        complexity: "Medium",
        estimated_minutes: (12, 15),
        category: "Industry Specific",
        relevance: "High for Banking/Retail",
    },
    FrameworkInfo {
        id: FrameworkId::Pdpl,
        name: "PDPL",
        description: "Saudi Personal Data Protection Law for data privacy compliance",
        complexity: "Medium",
        estimated_minutes: (10, 12),
        category: "Privacy Laws",
        relevance: "High",
    },
    FrameworkInfo {
        id: FrameworkId::Sama,
        name: "SAMA",
        description: "Saudi Arabian Monetary Authority Cybersecurity Framework for financial sector",
        complexity: "High",
        estimated_minutes: (15, 18),
        category: "Financial Regulations",
        relevance: "Critical for Banking",
    },
    FrameworkInfo {
        id: FrameworkId::NistCsf,
        name: "NIST CSF",
        description: "US framework for improving critical infrastructure cybersecurity",
        complexity: "Medium",
        estimated_minutes: (12, 15),
        category: "International Standards",
        relevance: "High",
    },
    FrameworkInfo {
        id: FrameworkId::CisControls,
        name: "CIS Controls",
        description: "Prioritized set of actions for cyber defense",
        complexity: "Low",
        estimated_minutes: (8, 10),
        category: "Best Practices",
        relevance: "Medium",
    },
    FrameworkInfo {
        id: FrameworkId::Gdpr,
        name: "GDPR",
        description: "General Data Protection Regulation for EU data subjects",
        complexity: "High",
        estimated_minutes: (14, 17),
        category: "Privacy Laws",
        relevance: "Medium",
    },
    FrameworkInfo {
        id: FrameworkId::AramcoCcc,
        name: "Aramco CCC",
        description: "Saudi Aramco Cybersecurity Controls for third-party vendors and contractors",
        complexity: "High",
        estimated_minutes: (25, 30),
        category: "Industry Specific",
        relevance: "Critical for Oil & Gas",
    },
];

#[must_use]
pub fn framework_info(id: FrameworkId) -> &'static FrameworkInfo {
    // FRAMEWORKS is declared in FrameworkId::ALL order.
    &FRAMEWORKS[FrameworkId::ALL
        .iter()
        .position(|candidate| *candidate == id)
        .unwrap_or_default()]
}
