// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two archives: posts and donations.
//!
//! Both are plain serde records that implement
//! [`Searchable`](crate::search::Searchable), so the search engine never
//! needs to know which archive it is looking at.

pub mod dates;
pub mod donor;
pub(crate) mod lenient;
pub mod post;

pub use dates::{parse_donor_date, parse_post_date};
pub use donor::{Borough, Donor, PaymentMethod};
pub use lenient::parse_leading_float;
pub use post::{Post, PostKind};
