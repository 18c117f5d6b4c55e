//! Score aggregation and benchmark comparison.
//!
//! Per-framework score: `round(100 * sum / (count * 4))` over the framework's
//! active questions, with unanswered questions counted as level 0. Frameworks
//! with no questions are left out of the score map rather than scored.

use std::collections::BTreeSet;

use crate::catalog::{Category, Question};
use crate::model::{AnswerMap, FrameworkId, MaturityLevel, ScoreMap};

/// Published industry reference percentages. Fixed configuration, not measured.
pub const BENCHMARKS: [(FrameworkId, u8); 10] = [
    (FrameworkId::Iso27001, 72),
    (FrameworkId::NcaEcc, 68),
    (FrameworkId::UaeIaNesa, 65),
    (FrameworkId::PciDss, 75),
    (FrameworkId::Pdpl, 70),
    (FrameworkId::Sama, 78),
    (FrameworkId::NistCsf, 73),
    (FrameworkId::CisControls, 69),
    (FrameworkId::Gdpr, 71),
    (FrameworkId::AramcoCcc, 82),
];

/// Weighting of the overall score per domain, in percent. Display only.
pub const DOMAIN_WEIGHTS: [(Category, u32); 5] = [
    (Category::Governance, 90),
    (Category::AccessControl, 80),
    (Category::DataProtection, 85),
    (Category::Monitoring, 70),
    (Category::VendorSecurity, 75),
];

#[must_use]
pub fn benchmark_map() -> ScoreMap {
    BENCHMARKS.into_iter().collect()
}

#[must_use]
pub fn benchmark_for(framework: FrameworkId) -> u8 {
    BENCHMARKS
        .iter()
        .find(|(id, _)| *id == framework)
        .map_or(0, |(_, value)| *value)
}

/// Integer `round(100 * numerator / denominator)` with halves rounded up.
fn round_percent(numerator: u64, denominator: u64) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let pct = (200 * numerator + denominator) / (2 * denominator);
    u8::try_from(pct.min(100)).unwrap_or(100)
}

/// Score every selected framework that has at least one active question.
#[must_use]
pub fn framework_scores(
    questions: &[&Question],
    selected: &BTreeSet<FrameworkId>,
    answers: &AnswerMap,
) -> ScoreMap {
    let max_level = u64::from(MaturityLevel::MAX.value());
    let mut scores = ScoreMap::new();

    for framework in selected {
        let (count, sum) = questions
            .iter()
            .filter(|q| q.framework == *framework)
            .fold((0_u64, 0_u64), |(count, sum), q| {
                let level = answers.get(&q.id).map_or(0, |level| level.value());
                (count + 1, sum + u64::from(level))
            });

        if count == 0 {
            continue;
        }
        scores.insert(*framework, round_percent(sum, count * max_level));
    }

    scores
}

/// Rounded mean of the per-framework scores; 0 when nothing was scored.
#[must_use]
pub fn overall_score(scores: &ScoreMap) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let total: u64 = scores.values().map(|v| u64::from(*v)).sum();
    let n = scores.len() as u64;
    let mean = (2 * total + n) / (2 * n);
    u8::try_from(mean.min(100)).unwrap_or(100)
}

/// Headline risk classification of the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    StrongPosture,
    ModerateRisk,
    HighRisk,
}

impl ScoreBand {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            71.. => ScoreBand::StrongPosture,
            41..=70 => ScoreBand::ModerateRisk,
            _ => ScoreBand::HighRisk,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ScoreBand::StrongPosture => "Strong Posture",
            ScoreBand::ModerateRisk => "Moderate Risk",
            ScoreBand::HighRisk => "High Risk",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaturityBadge {
    Advanced,
    Intermediate,
    Basic,
}

impl MaturityBadge {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => MaturityBadge::Advanced,
            60..=79 => MaturityBadge::Intermediate,
            _ => MaturityBadge::Basic,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            MaturityBadge::Advanced => "Advanced",
            MaturityBadge::Intermediate => "Intermediate",
            MaturityBadge::Basic => "Basic",
        }
    }
}

/// Plain-language reading of the overall score.
#[must_use]
pub fn interpretation(score: u8) -> &'static str {
    match score {
        80.. => {
            "Excellent! Your organization demonstrates strong cybersecurity practices. \
             Focus on maintaining and continuously improving your security posture."
        }
        60..=79 => {
            "Good progress! You have a solid foundation but there are opportunities for \
             improvement. Focus on addressing the gaps identified in this assessment."
        }
        _ => {
            "Your organization has significant cybersecurity gaps that need immediate \
             attention. We recommend prioritizing the quick wins identified in your roadmap."
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Standing {
    Ahead,
    OnPar,
    Behind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Outstanding,
    NeedsAttention,
}

/// One framework's score set against its benchmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub framework: FrameworkId,
    pub score: u8,
    pub benchmark: u8,
}

impl Comparison {
    #[must_use]
    pub fn difference(&self) -> i16 {
        i16::from(self.score) - i16::from(self.benchmark)
    }

    #[must_use]
    pub fn standing(&self) -> Standing {
        match self.difference() {
            5.. => Standing::Ahead,
            ..=-5 => Standing::Behind,
            _ => Standing::OnPar,
        }
    }

    #[must_use]
    pub fn highlight(&self) -> Option<Highlight> {
        match self.difference() {
            10.. => Some(Highlight::Outstanding),
            ..=-10 => Some(Highlight::NeedsAttention),
            _ => None,
        }
    }

    /// Badge text such as `+12 vs avg`, `-7 vs avg` or `±3 vs avg`.
    #[must_use]
    pub fn badge(&self) -> String {
        let diff = self.difference();
        match self.standing() {
            Standing::Ahead => format!("+{diff} vs avg"),
            Standing::Behind => format!("{diff} vs avg"),
            Standing::OnPar => format!("±{} vs avg", diff.abs()),
        }
    }
}

/// Pair every scored framework with its benchmark (0 when none is recorded).
#[must_use]
pub fn compare(scores: &ScoreMap, benchmarks: &ScoreMap) -> Vec<Comparison> {
    scores
        .iter()
        .map(|(framework, score)| Comparison {
            framework: *framework,
            score: *score,
            benchmark: benchmarks.get(framework).copied().unwrap_or(0),
        })
        .collect()
}

/// Per-domain figures for the results screen and report, derived from the overall score.
#[must_use]
pub fn domain_breakdown(overall: u8) -> Vec<(Category, u8)> {
    DOMAIN_WEIGHTS
        .into_iter()
        .map(|(category, weight)| {
            let scaled = (2 * u32::from(overall) * weight + 100) / 200;
            (category, u8::try_from(scaled).unwrap_or(100))
        })
        .collect()
}
