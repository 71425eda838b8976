//! Government scheme eligibility.
//!
//! Each catalog scheme declares an [`EligibilityRule`]: a conjunction of
//! independent predicates (ownership, land interval, land category, age
//! interval, organic practice, active loan). A scheme is eligible iff no
//! predicate fails. Ineligible schemes list every failed predicate, not just
//! the first, so the eligible and ineligible lists always partition the
//! catalog.

use krishi_types::{EligibilityReport, FarmerProfile, LandCategory, SchemeOutcome};
use tracing::debug;

use crate::error::{AdvisorError, validate_input};

const ALL_CATEGORIES: &[LandCategory] =
    &[LandCategory::Small, LandCategory::Marginal, LandCategory::Large];

/// Phrases for eligible schemes, picked by
/// `(id.len() + floor(landSize)) % 5` so the same profile always reads the
/// same way.
pub const ELIGIBLE_REASONS: [&str; 5] = [
    "You meet all eligibility criteria for this scheme.",
    "Based on your profile, you are highly qualified for this support.",
    "Your land size and farmer category align perfectly with this initiative.",
    "You are eligible for direct benefits under this government program.",
    "Criteria matched: Profile verified for agricultural subsidy.",
];

/// Machine-checkable eligibility predicates of one scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EligibilityRule {
    /// The farmer must own the land.
    pub ownership_required: bool,
    /// Smallest accepted landholding in hectares (inclusive).
    pub min_land: f64,
    /// Largest accepted landholding in hectares (inclusive).
    pub max_land: f64,
    /// Accepted land categories, in display order.
    pub categories: &'static [LandCategory],
    /// Accepted enrolment age interval, inclusive.
    pub age: Option<(u32, u32)>,
    /// The farm must be under organic practice.
    pub organic_required: bool,
    /// The farmer must hold an active crop loan.
    pub loan_required: bool,
}

impl EligibilityRule {
    const OPEN: Self = Self {
        ownership_required: true,
        min_land: 0.0,
        max_land: 1000.0,
        categories: ALL_CATEGORIES,
        age: None,
        organic_required: false,
        loan_required: false,
    };

    /// Explanation for every failed predicate, in declaration order.
    ///
    /// The age predicate is only evaluated when both the rule and the
    /// profile carry an age.
    pub fn failures(&self, profile: &FarmerProfile) -> Vec<String> {
        let mut failed = Vec::new();

        if self.ownership_required && !profile.land_ownership {
            failed.push("Requires land ownership".to_owned());
        }
        if profile.land_size < self.min_land {
            failed.push(format!("Requires minimum {} hectare land", self.min_land));
        }
        if profile.land_size > self.max_land {
            failed.push(format!("Maximum land size: {} hectares", self.max_land));
        }
        if !self.categories.contains(&profile.category()) {
            let names: Vec<&str> = self.categories.iter().map(|c| c.as_str()).collect();
            failed.push(format!("Only for {} farmers", names.join(", ")));
        }
        if let (Some((min_age, max_age)), Some(age)) = (self.age, profile.age) {
            if age < min_age {
                failed.push(format!("Minimum age: {min_age} years"));
            }
            if age > max_age {
                failed.push(format!("Maximum age: {max_age} years"));
            }
        }
        if self.organic_required && !profile.organic_farming {
            failed.push("Requires organic farming practice".to_owned());
        }
        if self.loan_required && !profile.loan_taken {
            failed.push("Requires an active crop loan".to_owned());
        }

        failed
    }
}

/// Immutable catalog entry for a government scheme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeDefinition {
    /// Stable key.
    pub id: &'static str,
    /// Full name.
    pub name: &'static str,
    /// What the scheme does.
    pub description: &'static str,
    /// Benefit summary.
    pub benefits: &'static str,
    /// Eligibility predicates.
    pub rule: EligibilityRule,
    /// Documents needed to apply.
    pub documents: &'static [&'static str],
    /// Application instructions.
    pub how_to_apply: &'static str,
    /// Scheme family.
    pub category: &'static str,
}

impl SchemeDefinition {
    fn outcome(&self, reason: String) -> SchemeOutcome {
        SchemeOutcome {
            id: self.id.to_owned(),
            name: self.name.to_owned(),
            description: self.description.to_owned(),
            benefits: self.benefits.to_owned(),
            documents: self.documents.iter().map(|d| (*d).to_owned()).collect(),
            how_to_apply: self.how_to_apply.to_owned(),
            category: self.category.to_owned(),
            reason,
        }
    }

    /// Pooled phrase shown when this scheme applies to a profile.
    pub fn eligible_reason(&self, profile: &FarmerProfile) -> &'static str {
        // Validated land sizes are non-negative; `as` saturates on overflow.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole_hectares = profile.land_size.floor() as usize;
        let index = self
            .id
            .len()
            .wrapping_add(whole_hectares)
            .checked_rem(ELIGIBLE_REASONS.len())
            .unwrap_or(0);
        ELIGIBLE_REASONS.get(index).copied().unwrap_or_default()
    }
}

static CATALOG: [SchemeDefinition; 10] = [
    SchemeDefinition {
        id: "pm-kisan",
        name: "PM-KISAN (Pradhan Mantri Kisan Samman Nidhi)",
        description: "Direct income support of ₹6000 per year in three equal installments to all landholding farmer families",
        benefits: "₹6000/year (₹2000 per installment, 3 times a year)",
        rule: EligibilityRule::OPEN,
        documents: &["Land records", "Aadhaar card", "Bank account details"],
        how_to_apply: "Apply online at pmkisan.gov.in or visit nearest Common Service Centre (CSC)",
        category: "Income Support",
    },
    SchemeDefinition {
        id: "fasal-bima",
        name: "Pradhan Mantri Fasal Bima Yojana (PMFBY)",
        description: "Crop insurance scheme providing financial support to farmers in case of crop loss",
        benefits: "Insurance coverage for crop loss due to natural calamities, pests, and diseases",
        rule: EligibilityRule::OPEN,
        documents: &["Land records", "Aadhaar card", "Bank account", "Crop sowing details"],
        how_to_apply: "Apply through banks, CSCs, or insurance company agents within crop sowing period",
        category: "Insurance",
    },
    SchemeDefinition {
        id: "kisan-credit",
        name: "Kisan Credit Card (KCC)",
        description: "Credit facility for farmers to meet crop production and related needs",
        benefits: "Easy credit access up to ₹3 lakh at concessional interest rates (4% interest for timely repayment)",
        rule: EligibilityRule {
            min_land: 0.5,
            ..EligibilityRule::OPEN
        },
        documents: &["Land documents", "Identity proof", "Address proof", "Passport photo"],
        how_to_apply: "Apply at nearest bank branch with required documents",
        category: "Credit",
    },
    SchemeDefinition {
        id: "soil-health",
        name: "Soil Health Card Scheme",
        description: "Free soil testing and health card to help farmers improve soil fertility",
        benefits: "Free soil testing and customized fertilizer recommendations",
        rule: EligibilityRule::OPEN,
        documents: &["Land records", "Farmer ID"],
        how_to_apply: "Contact district agriculture office or visit soilhealth.dac.gov.in",
        category: "Soil Management",
    },
    SchemeDefinition {
        id: "micro-irrigation",
        name: "Pradhan Mantri Krishi Sinchayee Yojana (PMKSY)",
        description: "Subsidy for micro-irrigation systems (drip, sprinkler) for water conservation",
        benefits: "Up to 55% subsidy for small/marginal farmers, 45% for others",
        rule: EligibilityRule {
            min_land: 0.5,
            ..EligibilityRule::OPEN
        },
        documents: &["Land documents", "Bank account", "Aadhaar", "Quotation for irrigation system"],
        how_to_apply: "Apply through state agriculture department or online portal",
        category: "Irrigation",
    },
    SchemeDefinition {
        id: "paramparagat-krishi",
        name: "Paramparagat Krishi Vikas Yojana (PKVY)",
        description: "Support for organic farming through cluster formation and certification",
        benefits: "₹50,000 per hectare for 3 years including organic inputs and certification",
        rule: EligibilityRule {
            min_land: 0.5,
            max_land: 50.0,
            organic_required: true,
            ..EligibilityRule::OPEN
        },
        documents: &["Land records", "Group formation certificate", "Aadhaar"],
        how_to_apply: "Form cluster of 50 farmers and apply through district agriculture office",
        category: "Organic Farming",
    },
    SchemeDefinition {
        id: "kisan-maan-dhan",
        name: "PM Kisan Maan Dhan Yojana",
        description: "Pension scheme for small and marginal farmers",
        benefits: "₹3000/month pension after 60 years of age",
        rule: EligibilityRule {
            max_land: 2.0,
            categories: &[LandCategory::Small, LandCategory::Marginal],
            age: Some((18, 40)),
            ..EligibilityRule::OPEN
        },
        documents: &["Aadhaar", "Bank account", "Land records"],
        how_to_apply: "Enroll through CSC or online at maandhan.in",
        category: "Pension",
    },
    SchemeDefinition {
        id: "gramin-bhandaran",
        name: "Gramin Bhandaran Yojana",
        description: "Subsidy for construction/renovation of rural godowns for crop storage",
        benefits: "Subsidy on bank loans for warehouse construction",
        rule: EligibilityRule {
            min_land: 2.0,
            ..EligibilityRule::OPEN
        },
        documents: &["Land documents", "Project report", "Bank account"],
        how_to_apply: "Apply through NABARD or commercial banks",
        category: "Infrastructure",
    },
    SchemeDefinition {
        id: "interest-subvention",
        name: "Interest Subvention Scheme",
        description: "Interest subsidy on crop loans",
        benefits: "2% interest subvention + 3% prompt repayment incentive (effective 4% interest)",
        rule: EligibilityRule {
            loan_required: true,
            ..EligibilityRule::OPEN
        },
        documents: &["Loan account details", "Land records"],
        how_to_apply: "Automatically applicable on crop loans from banks",
        category: "Credit",
    },
    SchemeDefinition {
        id: "national-beekeeping",
        name: "National Beekeeping & Honey Mission (NBHM)",
        description: "Support for beekeeping and honey production",
        benefits: "Subsidy on beekeeping equipment and training",
        rule: EligibilityRule {
            ownership_required: false,
            ..EligibilityRule::OPEN
        },
        documents: &["Aadhaar", "Bank account", "Training certificate"],
        how_to_apply: "Apply through state horticulture department",
        category: "Allied Activities",
    },
];

/// The read-only scheme catalog, in display order.
pub fn scheme_catalog() -> &'static [SchemeDefinition] {
    &CATALOG
}

/// Partition the catalog into schemes the farmer qualifies for and those
/// they do not, each with an explanation.
pub fn check_eligibility(profile: &FarmerProfile) -> Result<EligibilityReport, AdvisorError> {
    validate_input(profile, "FarmerProfile")?;

    let mut eligible = Vec::new();
    let mut ineligible = Vec::new();
    for scheme in scheme_catalog() {
        let failures = scheme.rule.failures(profile);
        if failures.is_empty() {
            eligible.push(scheme.outcome(scheme.eligible_reason(profile).to_owned()));
        } else {
            ineligible.push(scheme.outcome(failures.join(", ")));
        }
    }

    debug!(
        land_size = profile.land_size,
        category = profile.category().as_str(),
        eligible = eligible.len(),
        ineligible = ineligible.len(),
        "scheme eligibility checked"
    );

    Ok(EligibilityReport {
        land_category: profile.category(),
        eligible,
        ineligible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn farmer(land: f64, owns: bool) -> FarmerProfile {
        FarmerProfile {
            land_size: land,
            land_ownership: owns,
            age: None,
            organic_farming: false,
            loan_taken: false,
        }
    }

    fn report(profile: &FarmerProfile) -> EligibilityReport {
        check_eligibility(profile).unwrap_or_else(|e| panic!("valid profile: {e}"))
    }

    fn reason_for<'a>(outcomes: &'a [SchemeOutcome], id: &str) -> Option<&'a str> {
        outcomes
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.reason.as_str())
    }

    #[test]
    fn catalog_has_ten_unique_ids() {
        let mut ids: Vec<&str> = scheme_catalog().iter().map(|s| s.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn small_owner_without_extras() {
        let result = report(&farmer(1.5, true));
        assert_eq!(result.land_category, LandCategory::Small);
        let eligible: Vec<&str> = result.eligible.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            eligible,
            [
                "pm-kisan",
                "fasal-bima",
                "kisan-credit",
                "soil-health",
                "micro-irrigation",
                "kisan-maan-dhan",
                "national-beekeeping",
            ]
        );
        assert_eq!(
            reason_for(&result.ineligible, "paramparagat-krishi"),
            Some("Requires organic farming practice")
        );
        assert_eq!(
            reason_for(&result.ineligible, "gramin-bhandaran"),
            Some("Requires minimum 2 hectare land")
        );
        assert_eq!(
            reason_for(&result.ineligible, "interest-subvention"),
            Some("Requires an active crop loan")
        );
    }

    #[test]
    fn eligible_reason_index_is_deterministic() {
        // "pm-kisan" has 8 characters; floor(1.5) = 1; 9 % 5 = 4.
        let result = report(&farmer(1.5, true));
        assert_eq!(
            reason_for(&result.eligible, "pm-kisan"),
            Some("Criteria matched: Profile verified for agricultural subsidy.")
        );
        // "soil-health" has 11 characters; 12 % 5 = 2.
        assert_eq!(
            reason_for(&result.eligible, "soil-health"),
            Some("Your land size and farmer category align perfectly with this initiative.")
        );
    }

    #[test]
    fn every_failure_is_listed() {
        let mut profile = farmer(60.0, false);
        profile.age = Some(45);
        let result = report(&profile);
        assert_eq!(
            reason_for(&result.ineligible, "paramparagat-krishi"),
            Some("Requires land ownership, Maximum land size: 50 hectares, Requires organic farming practice")
        );
        assert_eq!(
            reason_for(&result.ineligible, "kisan-maan-dhan"),
            Some("Requires land ownership, Maximum land size: 2 hectares, Only for small, marginal farmers, Maximum age: 40 years")
        );
    }

    #[test]
    fn age_is_ignored_when_unknown() {
        let young = report(&farmer(0.8, true));
        assert!(young.eligible.iter().any(|s| s.id == "kisan-maan-dhan"));
        let mut profile = farmer(0.8, true);
        profile.age = Some(16);
        let result = report(&profile);
        assert_eq!(
            reason_for(&result.ineligible, "kisan-maan-dhan"),
            Some("Minimum age: 18 years")
        );
    }

    #[test]
    fn tenant_keeps_only_beekeeping() {
        let result = report(&farmer(3.0, false));
        assert_eq!(result.eligible.len(), 1);
        assert_eq!(result.eligible.first().map(|s| s.id.as_str()), Some("national-beekeeping"));
        assert_eq!(result.ineligible.len(), 9);
    }

    #[test]
    fn fractional_minimum_is_printed_as_is() {
        let result = report(&farmer(0.2, true));
        assert_eq!(
            reason_for(&result.ineligible, "kisan-credit"),
            Some("Requires minimum 0.5 hectare land")
        );
    }

    #[test]
    fn negative_land_is_rejected() {
        assert!(matches!(
            check_eligibility(&farmer(-1.0, true)),
            Err(AdvisorError::InvalidInput { record: "FarmerProfile", .. })
        ));
    }
}
