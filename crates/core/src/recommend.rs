use std::collections::BTreeSet;

use crate::model::{Country, FrameworkId, Industry};

/// Cross-industry frameworks every assessment starts from.
pub const BASELINE: [FrameworkId; 3] = [
    FrameworkId::Iso27001,
    FrameworkId::NistCsf,
    FrameworkId::CisControls,
];

/// Frameworks pre-selected for a country/industry pair.
///
/// The result only seeds the onboarding checklist; the user may still toggle
/// any framework before confirming.
#[must_use]
pub fn recommend_frameworks(
    country: Option<Country>,
    industry: Option<Industry>,
) -> BTreeSet<FrameworkId> {
    let mut set: BTreeSet<FrameworkId> = BASELINE.into_iter().collect();

    match country {
        Some(Country::SaudiArabia) => {
            set.extend([FrameworkId::NcaEcc, FrameworkId::Pdpl]);
            if industry == Some(Industry::Banking) {
                set.extend([FrameworkId::Sama, FrameworkId::PciDss]);
            }
        }
        Some(Country::Uae) => {
            set.insert(FrameworkId::UaeIaNesa);
        }
        _ => {}
    }

    if matches!(industry, Some(Industry::Banking | Industry::Retail)) {
        set.insert(FrameworkId::PciDss);
    }

    // Oil & Gas suppliers may work with Aramco regardless of country.
    if industry == Some(Industry::OilAndGas) {
        set.insert(FrameworkId::AramcoCcc);
    }

    if country == Some(Country::International) || industry == Some(Industry::SaasTech) {
        set.insert(FrameworkId::Gdpr);
    }

    set
}
