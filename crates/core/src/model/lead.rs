use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::profile::ParseLabelError;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is a valid regex"));

/// Primary security concern offered on the lead capture form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Concern {
    #[serde(rename = "Data breaches and leaks")]
    DataBreaches,
    #[serde(rename = "Compliance requirements")]
    Compliance,
    #[serde(rename = "Ransomware and malware")]
    Ransomware,
    #[serde(rename = "Insider threats")]
    InsiderThreats,
    #[serde(rename = "Third-party risks")]
    ThirdPartyRisks,
    #[serde(rename = "Cloud security")]
    CloudSecurity,
    #[serde(rename = "Identity and access management")]
    IdentityAccess,
    #[serde(rename = "Incident response capabilities")]
    IncidentResponse,
    Other,
}

impl Concern {
    pub const ALL: [Concern; 9] = [
        Concern::DataBreaches,
        Concern::Compliance,
        Concern::Ransomware,
        Concern::InsiderThreats,
        Concern::ThirdPartyRisks,
        Concern::CloudSecurity,
        Concern::IdentityAccess,
        Concern::IncidentResponse,
        Concern::Other,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Concern::DataBreaches => "Data breaches and leaks",
            Concern::Compliance => "Compliance requirements",
            Concern::Ransomware => "Ransomware and malware",
            Concern::InsiderThreats => "Insider threats",
            Concern::ThirdPartyRisks => "Third-party risks",
            Concern::CloudSecurity => "Cloud security",
            Concern::IdentityAccess => "Identity and access management",
            Concern::IncidentResponse => "Incident response capabilities",
            Concern::Other => "Other",
        }
    }
}

impl fmt::Display for Concern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Concern {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Concern::ALL
            .into_iter()
            .find(|c| c.label() == s.trim())
            .ok_or_else(|| ParseLabelError::new("concern", s))
    }
}

/// Contact details captured before the full report is released.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadData {
    pub name: String,
    pub company: String,
    pub email: String,
    pub concern: Option<Concern>,
}

/// Partial update merged into [`LeadData`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadPatch {
    pub name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub concern: Option<Option<Concern>>,
}

impl LeadPatch {
    /// Patch that overwrites every field.
    #[must_use]
    pub fn replace_all(data: LeadData) -> Self {
        Self {
            name: Some(data.name),
            company: Some(data.company),
            email: Some(data.email),
            concern: Some(data.concern),
        }
    }
}

impl LeadData {
    /// Shallow merge: each field present in the patch replaces the current value.
    #[must_use]
    pub fn merged(mut self, patch: LeadPatch) -> Self {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(company) = patch.company {
            self.company = company;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(concern) = patch.concern {
            self.concern = concern;
        }
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LeadField {
    Name,
    Company,
    Email,
}

impl LeadField {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            LeadField::Name => "name",
            LeadField::Company => "company",
            LeadField::Email => "email",
        }
    }
}

/// Field to message mapping produced by [`LeadForm::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<LeadField, &'static str>);

impl FieldErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: LeadField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    /// Drop the error for a field, e.g. once the user edits it again.
    pub fn clear(&mut self, field: LeadField) {
        self.0.remove(&field);
    }

    pub fn iter(&self) -> impl Iterator<Item = (LeadField, &'static str)> + '_ {
        self.0.iter().map(|(field, msg)| (*field, *msg))
    }

    fn insert(&mut self, field: LeadField, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {message}", field.key())?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

/// Raw form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub concern: Option<Concern>,
}

impl LeadForm {
    /// Check required fields and the email shape.
    ///
    /// # Errors
    ///
    /// Returns every failing field at once so the form can show them together.
    pub fn validate(&self) -> Result<LeadData, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.name.trim().is_empty() {
            errors.insert(LeadField::Name, "Name is required");
        }
        if self.company.trim().is_empty() {
            errors.insert(LeadField::Company, "Company name is required");
        }
        if self.email.trim().is_empty() {
            errors.insert(LeadField::Email, "Email is required");
        } else if !is_valid_email(&self.email) {
            errors.insert(LeadField::Email, "Please enter a valid email address");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(LeadData {
            name: self.name.clone(),
            company: self.company.clone(),
            email: self.email.clone(),
            concern: self.concern,
        })
    }
}

#[must_use]
pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> LeadForm {
        LeadForm {
            name: "Dana".into(),
            company: "Acme".into(),
            email: "dana@acme.io".into(),
            concern: Some(Concern::CloudSecurity),
        }
    }

    #[test]
    fn email_pattern_matches_reference_examples() {
        assert!(!is_valid_email("not-an-email"));
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("a@b"));
    }

    #[test]
    fn valid_form_produces_lead_data() {
        let data = filled_form().validate().unwrap();
        assert_eq!(data.company, "Acme");
        assert_eq!(data.concern, Some(Concern::CloudSecurity));
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let form = LeadForm {
            name: "  ".into(),
            ..LeadForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(LeadField::Name), Some("Name is required"));
        assert_eq!(errors.get(LeadField::Company), Some("Company name is required"));
        assert_eq!(errors.get(LeadField::Email), Some("Email is required"));
    }

    #[test]
    fn malformed_email_has_its_own_message() {
        let form = LeadForm {
            email: "not-an-email".into(),
            ..filled_form()
        };
        let mut errors = form.validate().unwrap_err();
        assert_eq!(
            errors.get(LeadField::Email),
            Some("Please enter a valid email address")
        );
        errors.clear(LeadField::Email);
        assert!(errors.is_empty());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let base = LeadData {
            name: "Old".into(),
            company: "Keep".into(),
            ..LeadData::default()
        };
        let merged = base.merged(LeadPatch {
            name: Some("New".into()),
            ..LeadPatch::default()
        });
        assert_eq!(merged.name, "New");
        assert_eq!(merged.company, "Keep");
    }
}
