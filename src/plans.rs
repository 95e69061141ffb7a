//! Subscription plans and the catalog that owns the "Most Popular" slot.

use serde::Deserialize;
use thiserror::Error;

/// Paid tiers offered by the product.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Professional,
    Premium,
}

#[cfg(test)]
impl SubscriptionTier {
    pub const ALL: [SubscriptionTier; 3] = [
        SubscriptionTier::Free,
        SubscriptionTier::Professional,
        SubscriptionTier::Premium,
    ];
}

/// Plan price: a monthly amount in dollars, or a literal such as "Custom".
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Monthly(f64),
    Label(String),
}

impl Price {
    /// Large price text ("$9.99" or the literal).
    pub fn headline(&self) -> String {
        match self {
            Price::Monthly(amount) => format!("${amount}"),
            Price::Label(label) => label.clone(),
        }
    }

    /// Small print under a monthly price.
    pub fn billing_note(&self) -> Option<&'static str> {
        match self {
            Price::Monthly(_) => Some("/mo billed monthly"),
            Price::Label(_) => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PlanFeature {
    pub name: String,
    pub included: bool,
}

/// One subscription card.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Plan {
    pub tier: SubscriptionTier,
    pub name: String,
    pub price: Price,
    pub description: String,
    pub features: Vec<PlanFeature>,
    #[serde(default)]
    pub button_text: Option<String>,
}

impl Plan {
    /// Call to action on the card; "Subscribe" unless the plan names one.
    pub fn button_label(&self) -> &str {
        self.button_text.as_deref().unwrap_or("Subscribe")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("popular tier {0:?} has no plan in the catalog")]
    UnknownPopular(SubscriptionTier),
    #[error("tier {0:?} appears more than once")]
    DuplicateTier(SubscriptionTier),
}

/// Ordered plan set. At most one tier is marked popular, held in a single slot.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "CatalogSource")]
pub struct PlanCatalog {
    plans: Vec<Plan>,
    popular: Option<SubscriptionTier>,
}

#[derive(Deserialize)]
struct CatalogSource {
    plans: Vec<Plan>,
    popular: Option<SubscriptionTier>,
}

impl TryFrom<CatalogSource> for PlanCatalog {
    type Error = CatalogError;

    fn try_from(src: CatalogSource) -> Result<Self, Self::Error> {
        PlanCatalog::new(src.plans, src.popular)
    }
}

impl PlanCatalog {
    /// Build a catalog; each tier may appear once and the popular tier must exist.
    pub fn new(
        plans: Vec<Plan>,
        popular: Option<SubscriptionTier>,
    ) -> Result<Self, CatalogError> {
        for (i, plan) in plans.iter().enumerate() {
            if plans[..i].iter().any(|p| p.tier == plan.tier) {
                return Err(CatalogError::DuplicateTier(plan.tier));
            }
        }
        let mut catalog = Self {
            plans,
            popular: None,
        };
        catalog.set_popular(popular)?;
        Ok(catalog)
    }

    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn is_popular(&self, plan: &Plan) -> bool {
        self.popular == Some(plan.tier)
    }

    /// Move the popular marker; the previous holder loses it.
    pub fn set_popular(&mut self, tier: Option<SubscriptionTier>) -> Result<(), CatalogError> {
        if let Some(t) = tier
            && !self.plans.iter().any(|p| p.tier == t)
        {
            return Err(CatalogError::UnknownPopular(t));
        }
        self.popular = tier;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }

    /// The Free / Professional / Premium grid with Professional as popular.
    pub fn standard() -> Self {
        fn features(items: &[(&str, bool)]) -> Vec<PlanFeature> {
            items
                .iter()
                .map(|(name, included)| PlanFeature {
                    name: (*name).into(),
                    included: *included,
                })
                .collect()
        }

        let plans = vec![
            Plan {
                tier: SubscriptionTier::Free,
                name: "Free".into(),
                price: Price::Monthly(0.0),
                description: "Basic features for individuals just getting started".into(),
                features: features(&[
                    ("1 resume", true),
                    ("Basic resume templates", true),
                    ("Download as PDF", true),
                    ("Manual job application tracking", true),
                    ("AI resume analysis", false),
                    ("Automated job applications", false),
                    ("AI job matching", false),
                    ("Priority support", false),
                ]),
                button_text: Some("Start Free".into()),
            },
            Plan {
                tier: SubscriptionTier::Professional,
                name: "Professional".into(),
                price: Price::Monthly(9.99),
                description: "Everything you need for a successful job search".into(),
                features: features(&[
                    ("Unlimited resumes", true),
                    ("Premium resume templates", true),
                    ("Download in all formats", true),
                    ("Automated job tracking", true),
                    ("AI resume optimization", true),
                    ("Apply to 25 jobs/month", true),
                    ("AI job recommendations", true),
                    ("Standard support", true),
                ]),
                button_text: Some("Subscribe Now".into()),
            },
            Plan {
                tier: SubscriptionTier::Premium,
                name: "Premium".into(),
                price: Price::Monthly(19.99),
                description: "Advanced features for job seekers who want the best".into(),
                features: features(&[
                    ("Everything in Professional", true),
                    ("Unlimited job applications", true),
                    ("Advanced AI job matching", true),
                    ("Interview preparation", true),
                    ("Salary negotiation tools", true),
                    ("Career coaching session", true),
                    ("LinkedIn profile optimization", true),
                    ("Priority support 24/7", true),
                ]),
                button_text: Some("Go Premium".into()),
            },
        ];
        Self {
            plans,
            popular: Some(SubscriptionTier::Professional),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(tier: SubscriptionTier) -> Plan {
        Plan {
            tier,
            name: format!("{tier:?}"),
            price: Price::Label("Custom".into()),
            description: String::new(),
            features: vec![],
            button_text: None,
        }
    }

    #[test]
    fn test_standard_catalog_has_single_popular() {
        let catalog = PlanCatalog::standard();
        let popular: Vec<_> = catalog
            .plans()
            .iter()
            .filter(|p| catalog.is_popular(p))
            .collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].tier, SubscriptionTier::Professional);
    }

    #[test]
    fn test_set_popular_moves_marker() {
        let mut catalog = PlanCatalog::standard();
        catalog.set_popular(Some(SubscriptionTier::Premium)).unwrap();
        let count = catalog
            .plans()
            .iter()
            .filter(|p| catalog.is_popular(p))
            .count();
        assert_eq!(count, 1);
        assert!(catalog.is_popular(&catalog.plans()[2]));
    }

    #[test]
    fn test_unknown_popular_rejected() {
        let err = PlanCatalog::new(
            vec![plan(SubscriptionTier::Free)],
            Some(SubscriptionTier::Premium),
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::UnknownPopular(SubscriptionTier::Premium));
    }

    #[test]
    fn test_duplicate_tier_rejected() {
        let err = PlanCatalog::new(
            vec![plan(SubscriptionTier::Free), plan(SubscriptionTier::Free)],
            None,
        )
        .unwrap_err();
        assert_eq!(err, CatalogError::DuplicateTier(SubscriptionTier::Free));
    }

    #[test]
    fn test_price_text() {
        assert_eq!(Price::Monthly(9.99).headline(), "$9.99");
        assert_eq!(Price::Monthly(0.0).headline(), "$0");
        assert_eq!(Price::Label("Custom".into()).headline(), "Custom");
        assert_eq!(Price::Label("Custom".into()).billing_note(), None);
    }

    #[test]
    fn test_catalog_deserialize_validates() {
        let src = r#"
            popular = "premium"
            [[plans]]
            tier = "free"
            name = "Free"
            price = 0
            description = "d"
            features = []
        "#;
        assert!(toml::from_str::<PlanCatalog>(src).is_err());

        let ok = src.replace("popular = \"premium\"", "popular = \"free\"");
        let catalog: PlanCatalog = toml::from_str(&ok).unwrap();
        assert!(catalog.is_popular(&catalog.plans()[0]));
        assert_eq!(catalog.plans()[0].price, Price::Monthly(0.0));
        assert_eq!(catalog.plans()[0].button_text, None);
        assert_eq!(catalog.plans()[0].button_label(), "Subscribe");
    }
}
