#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Crime category taxonomy and incident record types.
//!
//! This crate defines the canonical crime categories used across the
//! dashboard. NIBRS offense descriptions from source exports are grouped
//! into eight top-level categories via keyword matching, so the charts
//! and filters work with a small fixed taxonomy instead of dozens of
//! source-specific offense strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Top-level crime category groupings.
///
/// Declaration order matters: [`CrimeCategory::from_description`] scans
/// categories in this order and the first keyword hit wins, so the more
/// specific groups come before the catch-alls.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CrimeCategory {
    /// Crimes against persons (homicide, assault, robbery, kidnapping)
    Violent,
    /// Sexual offenses and related crimes
    Sex,
    /// Crimes against property (burglary, theft, arson, vandalism)
    Property,
    /// Fraud, forgery, embezzlement, identity theft
    Fraud,
    /// Drug, alcohol, and impaired-driving offenses
    Drug,
    /// Public order and quality-of-life offenses
    PublicOrder,
    /// Weapons law violations
    Weapons,
    /// Non-criminal incidents and offenses not fitting other categories
    Other,
}

impl CrimeCategory {
    /// All variants in display (and matching-priority) order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Violent,
            Self::Sex,
            Self::Property,
            Self::Fraud,
            Self::Drug,
            Self::PublicOrder,
            Self::Weapons,
            Self::Other,
        ]
    }

    /// Human-readable label for UI display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Violent => "Violent Crimes",
            Self::Sex => "Sex Crimes",
            Self::Property => "Property Crimes",
            Self::Fraud => "Fraud / Financial Crimes",
            Self::Drug => "Drug & Alcohol Offenses",
            Self::PublicOrder => "Public Order Crimes",
            Self::Weapons => "Weapons Offenses",
            Self::Other => "Special / Other Incidents",
        }
    }

    /// NIBRS offense description keywords that map into this category.
    ///
    /// Matching is case-insensitive substring containment, so e.g.
    /// "Aggravated Assault" also catches "AGGRAVATED ASSAULT - GUN".
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Violent => &[
                "Murder",
                "Aggravated Assault",
                "Simple Assault",
                "Intimidation",
                "Kidnapping",
                "Robbery",
                "Affray",
                "Negligent Manslaughter",
                "Justifiable Homicide",
            ],
            Self::Sex => &[
                "Forcible Rape",
                "Forcible Sodomy",
                "Sexual Assault With Object",
                "Forcible Fondling",
                "Statutory Rape",
                "Incest",
                "Indecent Exposure",
                "Pornography/Obscene Material",
                "Prostitution",
                "Purchasing Prostitution",
                "Assisting Prostitution",
                "Human Trafficking, Commercial Sex Acts",
                "Human Trafficking, Involuntary Servitude",
                "Peeping Tom",
            ],
            Self::Property => &[
                "Burglary/B&E",
                "Arson",
                "Damage/Vandalism Of Property",
                "Theft From Building",
                "Theft From Motor Vehicle",
                "Theft of Motor Vehicle Parts from Vehicle",
                "Motor Vehicle Theft",
                "Purse-Snatching",
                "Pocket-Picking",
                "Shoplifting",
                "All Other Thefts",
                "Theft From Coin-Operated Machine Or Device",
                "Stolen Property Offenses",
            ],
            Self::Fraud => &[
                "Embezzlement",
                "False Pretenses/Swindle",
                "Credit Card/Teller Fraud",
                "Identity Theft",
                "Counterfeiting/Forgery",
                "Wire Fraud",
                "Hacking/Computer Invasion",
                "Welfare Fraud",
                "Worthless Check: Felony (over $2000)",
                "Bribery",
                "Extortion/Blackmail",
            ],
            Self::Drug => &[
                "Drug/Narcotic Violations",
                "Drug Equipment Violations",
                "Liquor Law Violations",
                "Driving Under The Influence",
                "Overdose",
            ],
            Self::PublicOrder => &[
                "Disorderly Conduct",
                "Trespass Of Real Property",
                "Curfew/Loitering/Vagrancy Violations",
                "Gambling Equipment Violations",
                "Assisting Gambling",
                "Betting/Wagering",
                "Family Offenses; Nonviolent",
            ],
            Self::Weapons => &["Weapon Law Violations"],
            Self::Other => &[
                "All Other Offenses",
                "Other Unlisted Non-Criminal",
                "Missing Person",
                "Suicide",
                "Sudden/Natural Death Investigation",
                "Public Accident",
                "Fire (Accidental/Non-Arson)",
                "Gas Leak",
                "Vehicle Recovery",
                "Animal Cruelty",
                "Dog Bite/Animal Control Incident",
            ],
        }
    }

    /// Classifies an offense description into a category.
    ///
    /// Scans categories in declaration order and returns the first one
    /// with a keyword contained (case-insensitively) in the description.
    /// Falls back to [`CrimeCategory::Other`] when nothing matches.
    #[must_use]
    pub fn from_description(description: &str) -> Self {
        let desc = description.to_uppercase();
        for category in Self::all() {
            for keyword in category.keywords() {
                if desc.contains(&keyword.to_uppercase()) {
                    return *category;
                }
            }
        }
        Self::Other
    }
}

/// A single crime incident as consumed by the dashboard.
///
/// Produced by ingestion from the source CSV export; coordinates and the
/// reported date are guaranteed present and parseable (rows failing those
/// checks are dropped upstream). `zip_code` may be absent in the source
/// data, in which case the spatial join fills it in when the point falls
/// inside a known ZIP boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Source record identifier (`OBJECTID`, or a synthetic row id).
    pub id: String,
    /// Date the incident was reported, UTC.
    pub date: DateTime<Utc>,
    /// Raw NIBRS offense description (e.g. "Burglary/B&E").
    pub offense: String,
    /// Derived top-level category.
    pub category: CrimeCategory,
    /// Longitude in decimal degrees (WGS84).
    pub longitude: f64,
    /// Latitude in decimal degrees (WGS84).
    pub latitude: f64,
    /// Street address or block description, possibly empty.
    pub address: String,
    /// ZIP code, either from the source data or resolved spatially.
    pub zip_code: Option<String>,
}

impl Incident {
    /// Whether this incident already carries a usable ZIP code.
    ///
    /// Empty strings count as absent so a blank source column never
    /// short-circuits the spatial join.
    #[must_use]
    pub fn has_zip_code(&self) -> bool {
        self.zip_code.as_deref().is_some_and(|zip| !zip.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorizes_exact_descriptions() {
        assert_eq!(
            CrimeCategory::from_description("Burglary/B&E"),
            CrimeCategory::Property
        );
        assert_eq!(
            CrimeCategory::from_description("Weapon Law Violations"),
            CrimeCategory::Weapons
        );
        assert_eq!(
            CrimeCategory::from_description("Driving Under The Influence"),
            CrimeCategory::Drug
        );
    }

    #[test]
    fn categorization_is_case_insensitive() {
        assert_eq!(
            CrimeCategory::from_description("AGGRAVATED ASSAULT"),
            CrimeCategory::Violent
        );
        assert_eq!(
            CrimeCategory::from_description("shoplifting"),
            CrimeCategory::Property
        );
    }

    #[test]
    fn matches_on_substring() {
        assert_eq!(
            CrimeCategory::from_description("Motor Vehicle Theft (Attempted)"),
            CrimeCategory::Property
        );
    }

    #[test]
    fn unknown_description_falls_back_to_other() {
        assert_eq!(
            CrimeCategory::from_description("Spontaneous Combustion"),
            CrimeCategory::Other
        );
        assert_eq!(CrimeCategory::from_description(""), CrimeCategory::Other);
    }

    #[test]
    fn first_matching_category_wins() {
        // "Robbery" (violent) is checked before the property keywords.
        assert_eq!(
            CrimeCategory::from_description("Robbery"),
            CrimeCategory::Violent
        );
    }

    #[test]
    fn empty_zip_counts_as_absent() {
        let incident = Incident {
            id: "1".to_string(),
            date: Utc::now(),
            offense: "Shoplifting".to_string(),
            category: CrimeCategory::Property,
            longitude: -80.8431,
            latitude: 35.2271,
            address: String::new(),
            zip_code: Some(String::new()),
        };
        assert!(!incident.has_zip_code());

        let with_zip = Incident {
            zip_code: Some("28202".to_string()),
            ..incident
        };
        assert!(with_zip.has_zip_code());
    }
}
