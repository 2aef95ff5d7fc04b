// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility modules for string processing.
//!
//! Text normalization for accent-insensitive search and HTML escaping for
//! everything that ends up inside markup.

pub mod escape;
pub mod normalize;

pub use escape::escape_html;
pub use normalize::{normalize, NormalizedText};
