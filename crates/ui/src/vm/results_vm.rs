use assess_core::scoring::{
    Comparison, Highlight, MaturityBadge, ScoreBand, Standing, domain_breakdown, interpretation,
};
use services::AssessmentSession;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComparisonRowVm {
    pub name: &'static str,
    pub score: u8,
    pub benchmark: u8,
    pub badge: String,
    pub standing_class: &'static str,
    pub highlight: Option<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainRowVm {
    pub name: &'static str,
    pub score: u8,
    pub band_class: &'static str,
}

/// One column of the recommended roadmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoadmapPhase {
    pub title: &'static str,
    pub window: &'static str,
    pub actions: [&'static str; 3],
}

pub const ROADMAP: [RoadmapPhase; 4] = [
    RoadmapPhase {
        title: "Quick Wins",
        window: "0-3 months",
        actions: ["Implement MFA", "Security awareness training", "Document policies"],
    },
    RoadmapPhase {
        title: "Short Term",
        window: "3-6 months",
        actions: ["Penetration testing", "Data classification", "Vendor evaluation"],
    },
    RoadmapPhase {
        title: "Medium Term",
        window: "6-12 months",
        actions: ["SOC/SIEM deployment", "Gap assessments", "Incident response testing"],
    },
    RoadmapPhase {
        title: "Strategic",
        window: "12+ months",
        actions: ["ISO 27001 certification", "Privacy program", "Continuous improvement"],
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsVm {
    pub overall: u8,
    pub band: &'static str,
    pub band_class: &'static str,
    pub maturity: &'static str,
    pub interpretation: &'static str,
    pub rows: Vec<ComparisonRowVm>,
    pub domains: Vec<DomainRowVm>,
}

fn band_class(score: u8) -> &'static str {
    match ScoreBand::from_score(score) {
        ScoreBand::StrongPosture => "band-strong",
        ScoreBand::ModerateRisk => "band-moderate",
        ScoreBand::HighRisk => "band-high",
    }
}

fn map_row(comparison: &Comparison) -> ComparisonRowVm {
    let standing_class = match comparison.standing() {
        Standing::Ahead => "ahead",
        Standing::OnPar => "on-par",
        Standing::Behind => "behind",
    };
    let highlight = comparison.highlight().map(|h| match h {
        Highlight::Outstanding => "Outstanding",
        Highlight::NeedsAttention => "Needs attention",
    });
    ComparisonRowVm {
        name: comparison.framework.label(),
        score: comparison.score,
        benchmark: comparison.benchmark,
        badge: comparison.badge(),
        standing_class,
        highlight,
    }
}

#[must_use]
pub fn map_results(session: &AssessmentSession) -> ResultsVm {
    let overall = session.overall_score();
    let domains = domain_breakdown(overall)
        .into_iter()
        .map(|(category, score)| DomainRowVm {
            name: category.label(),
            score,
            band_class: band_class(score),
        })
        .collect();

    ResultsVm {
        overall,
        band: ScoreBand::from_score(overall).label(),
        band_class: band_class(overall),
        maturity: MaturityBadge::from_score(overall).label(),
        interpretation: interpretation(overall),
        rows: session.comparisons().iter().map(map_row).collect(),
        domains,
    }
}
