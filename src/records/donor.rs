// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Campaign donation records.
//!
//! Keys follow the public matching-funds export verbatim (`NAME`,
//! `MATCH-AMOUNT`, `DATE OF DONATION`, ...) so the JSON loads without a
//! translation step. Numbers may arrive as strings and text as numbers; the
//! [`lenient`](super::lenient) decoders absorb both.

use super::dates::parse_donor_date;
use super::lenient;
use crate::search::Searchable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five boroughs, keyed by the single-letter codes in `BOROUGHCD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Borough {
    Manhattan,
    Brooklyn,
    Queens,
    Bronx,
    StatenIsland,
}

impl Borough {
    pub const ALL: [Borough; 5] = [
        Borough::Manhattan,
        Borough::Brooklyn,
        Borough::Queens,
        Borough::Bronx,
        Borough::StatenIsland,
    ];

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "M" => Some(Borough::Manhattan),
            "K" => Some(Borough::Brooklyn),
            "Q" => Some(Borough::Queens),
            "X" => Some(Borough::Bronx),
            "R" => Some(Borough::StatenIsland),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Borough::Manhattan => "M",
            Borough::Brooklyn => "K",
            Borough::Queens => "Q",
            Borough::Bronx => "X",
            Borough::StatenIsland => "R",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Borough::Manhattan => "Manhattan",
            Borough::Brooklyn => "Brooklyn",
            Borough::Queens => "Queens",
            Borough::Bronx => "Bronx",
            Borough::StatenIsland => "Staten Island",
        }
    }
}

impl fmt::Display for Borough {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `PAY_METHOD` codes 1 through 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    Cash,
    Check,
    CreditCard,
    Electronic,
    MoneyOrder,
    Other,
    Unknown,
}

impl PaymentMethod {
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "1" => PaymentMethod::Cash,
            "2" => PaymentMethod::Check,
            "3" => PaymentMethod::CreditCard,
            "4" => PaymentMethod::Electronic,
            "5" => PaymentMethod::MoneyOrder,
            "6" => PaymentMethod::Other,
            _ => PaymentMethod::Unknown,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Check => "Check",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::Electronic => "Online/Electronic",
            PaymentMethod::MoneyOrder => "Money Order",
            PaymentMethod::Other => "Other",
            PaymentMethod::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One donation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    /// Position in the loaded file.
    #[serde(skip)]
    pub id: usize,
    #[serde(rename = "NAME", default, deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(rename = "CITY", default, deserialize_with = "lenient::string")]
    pub city: String,
    #[serde(rename = "STATE", default, deserialize_with = "lenient::string")]
    pub state: String,
    #[serde(rename = "ZIP", default, deserialize_with = "lenient::string")]
    pub zip: String,
    #[serde(rename = "EMPCITY", default, deserialize_with = "lenient::string")]
    pub emp_city: String,
    #[serde(rename = "EMPSTATE", default, deserialize_with = "lenient::string")]
    pub emp_state: String,
    #[serde(rename = "INTERMEDIARY_NAME", default, deserialize_with = "lenient::string")]
    pub intermediary_name: String,
    #[serde(rename = "DONATION", default, deserialize_with = "lenient::amount")]
    pub donation: f64,
    #[serde(rename = "MATCH-AMOUNT", default, deserialize_with = "lenient::amount")]
    pub match_amount: f64,
    #[serde(rename = "PREVIOUS DONATION", default, deserialize_with = "lenient::amount")]
    pub previous_donation: f64,
    #[serde(rename = "BOROUGHCD", default, deserialize_with = "lenient::string")]
    pub borough_code: String,
    #[serde(rename = "PAY_METHOD", default, deserialize_with = "lenient::string")]
    pub pay_method: String,
    #[serde(rename = "DATE OF DONATION", default, deserialize_with = "lenient::opt_string")]
    pub date_of_donation: Option<String>,
    /// `DATE OF DONATION`, parsed once at load.
    #[serde(skip)]
    pub donation_date: Option<NaiveDate>,
}

impl Donor {
    /// Field names a [`FieldSet`](crate::search::FieldSet) may refer to.
    pub const FIELDS: &'static [&'static str] = &[
        "NAME",
        "CITY",
        "STATE",
        "ZIP",
        "EMPCITY",
        "EMPSTATE",
        "INTERMEDIARY_NAME",
        "BOROUGHCD",
        "PAY_METHOD",
        "DATE OF DONATION",
    ];

    /// Stamp the load position and parse the donation date.
    pub fn prepared(mut self, id: usize) -> Self {
        self.id = id;
        self.donation_date = self.date_of_donation.as_deref().and_then(parse_donor_date);
        self
    }

    pub fn has_intermediary(&self) -> bool {
        !self.intermediary_name.trim().is_empty()
    }

    pub fn borough(&self) -> Option<Borough> {
        Borough::from_code(&self.borough_code)
    }

    pub fn payment_method(&self) -> PaymentMethod {
        PaymentMethod::from_code(&self.pay_method)
    }
}

impl Searchable for Donor {
    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "NAME" => Some(&self.name),
            "CITY" => Some(&self.city),
            "STATE" => Some(&self.state),
            "ZIP" => Some(&self.zip),
            "EMPCITY" => Some(&self.emp_city),
            "EMPSTATE" => Some(&self.emp_state),
            "INTERMEDIARY_NAME" => Some(&self.intermediary_name),
            "BOROUGHCD" => Some(&self.borough_code),
            "PAY_METHOD" => Some(&self.pay_method),
            "DATE OF DONATION" => self.date_of_donation.as_deref(),
            _ => None,
        }
    }
}
