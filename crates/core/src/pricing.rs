//! Pricing tables for studio and corporate engagements.
//!
//! Amounts are integer currency units: euros for `fr`, FCFA for `cm`. A
//! manual override always replaces the computed table price; negative
//! overrides are rejected.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::project::{CorporateDeliverables, CorporateEventType};

/// Countries the studio operates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    Fr,
    Cm,
}

// ---------------------------------------------------------------------------
// Studio packages
// ---------------------------------------------------------------------------

/// A studio session package with per-country pricing.
#[derive(Debug, Clone, Serialize)]
pub struct StudioPackage {
    pub id: &'static str,
    pub name: &'static str,
    pub duration_minutes: u32,
    pub photos: u32,
    pub print_included: bool,
    pub price_fr: i64,
    pub price_cm: i64,
}

impl StudioPackage {
    pub fn price(&self, country: Country) -> i64 {
        match country {
            Country::Fr => self.price_fr,
            Country::Cm => self.price_cm,
        }
    }
}

/// The three studio packages on offer.
pub const STUDIO_PACKAGES: &[StudioPackage] = &[
    StudioPackage {
        id: "basic",
        name: "Basic Studio",
        duration_minutes: 60,
        photos: 5,
        print_included: false,
        price_fr: 150,
        price_cm: 75_000,
    },
    StudioPackage {
        id: "standard",
        name: "Standard Studio",
        duration_minutes: 90,
        photos: 10,
        print_included: true,
        price_fr: 250,
        price_cm: 125_000,
    },
    StudioPackage {
        id: "premium",
        name: "Premium Studio",
        duration_minutes: 120,
        photos: 15,
        print_included: true,
        price_fr: 350,
        price_cm: 175_000,
    },
];

/// Look up a studio package by id.
pub fn studio_package(id: &str) -> Option<&'static StudioPackage> {
    STUDIO_PACKAGES.iter().find(|p| p.id == id)
}

/// Table price for a studio package in a country.
pub fn studio_price(package_id: &str, country: Country) -> Result<i64, CoreError> {
    studio_package(package_id)
        .map(|p| p.price(country))
        .ok_or_else(|| CoreError::NotFound {
            entity: "StudioPackage",
            id: package_id.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Corporate rates
// ---------------------------------------------------------------------------

/// Per-country amount pair `(fr, cm)`.
type Rate = (i64, i64);

/// Rates for one corporate event type: base price plus optional
/// deliverable add-ons.
#[derive(Debug, Clone, Copy)]
pub struct CorporateRates {
    pub base: Rate,
    pub streaming: Option<Rate>,
    pub video: Option<Rate>,
}

fn pick(rate: Rate, country: Country) -> i64 {
    match country {
        Country::Fr => rate.0,
        Country::Cm => rate.1,
    }
}

/// Rate table for a corporate event type.
///
/// `corporate_portrait` and `other` have no table entry; those engagements
/// are priced by explicit override only.
pub fn corporate_rates(event_type: CorporateEventType) -> Option<CorporateRates> {
    match event_type {
        CorporateEventType::Conference => Some(CorporateRates {
            base: (1_500, 750_000),
            streaming: Some((500, 250_000)),
            video: None,
        }),
        CorporateEventType::TeamBuilding => Some(CorporateRates {
            base: (1_200, 600_000),
            streaming: None,
            video: None,
        }),
        CorporateEventType::ProductLaunch => Some(CorporateRates {
            base: (2_000, 1_000_000),
            streaming: None,
            video: Some((800, 400_000)),
        }),
        CorporateEventType::CorporatePortrait | CorporateEventType::Other => None,
    }
}

/// Compute the table price for a corporate engagement: base rate plus the
/// add-ons matching the selected deliverables.
pub fn corporate_price(
    event_type: CorporateEventType,
    country: Country,
    deliverables: &CorporateDeliverables,
) -> Result<i64, CoreError> {
    let rates = corporate_rates(event_type).ok_or_else(|| {
        CoreError::Validation(format!(
            "no rate table for event type {event_type:?}; a price override is required"
        ))
    })?;

    let mut total = pick(rates.base, country);
    if deliverables.streaming {
        if let Some(rate) = rates.streaming {
            total += pick(rate, country);
        }
    }
    if deliverables.video {
        if let Some(rate) = rates.video {
            total += pick(rate, country);
        }
    }
    Ok(total)
}

// ---------------------------------------------------------------------------
// Overrides
// ---------------------------------------------------------------------------

/// Apply an optional manual override to a computed price.
///
/// An override replaces the computed amount, never adds to it. Negative
/// overrides are rejected; zero is a valid explicit price.
pub fn apply_override(computed: i64, override_price: Option<i64>) -> Result<i64, CoreError> {
    match override_price {
        Some(p) if p < 0 => Err(CoreError::Validation(format!(
            "price override must not be negative (got {p})"
        ))),
        Some(p) => Ok(p),
        None => Ok(computed),
    }
}
