//! Product pricing: fixed prices, priced variations, and derived figures.
//!
//! All amounts use decimal arithmetic; floating point never touches a
//! price.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::types::language::LocalizedText;

/// One priced option of a multi-priced product (a size or scent choice).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variation {
    /// Display label for the option.
    pub name: LocalizedText,
    /// Price of this option.
    pub price: Decimal,
}

/// How a product is priced.
///
/// Serialized with a `type` tag (`"simple"` / `"variable"`) and flattened
/// into the product record, so catalog JSON reads naturally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Pricing {
    /// A single fixed price, optionally discounted off a reference price.
    Simple {
        /// Current unit price.
        price: Decimal,
        /// Pre-discount reference price, present when the product is on sale.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        original_price: Option<Decimal>,
        /// Absolute amount taken off `original_price`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        discount: Option<Decimal>,
    },
    /// A set of priced variations; the displayed price is their span.
    Variable {
        /// The priced options.
        variations: Vec<Variation>,
    },
}

/// Displayed price of a product: a point value or a min/max span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    /// Fixed price, with the pre-discount reference when the product is
    /// discounted.
    Fixed {
        price: Decimal,
        original: Option<Decimal>,
    },
    /// Span over the variation prices.
    Between { min: Decimal, max: Decimal },
}

impl Pricing {
    /// Unit price used when summing a collection: the fixed price for
    /// simple products, the cheapest variation for variable ones.
    ///
    /// A variable product with no variations contributes zero.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        match self {
            Self::Simple { price, .. } => *price,
            Self::Variable { variations } => variations
                .iter()
                .map(|v| v.price)
                .min()
                .unwrap_or(Decimal::ZERO),
        }
    }

    /// The price(s) a product card displays.
    ///
    /// The pre-discount reference accompanies a fixed price only when a
    /// discount is recorded alongside it.
    #[must_use]
    pub fn range(&self) -> PriceRange {
        match self {
            Self::Simple {
                price,
                original_price,
                discount,
            } => PriceRange::Fixed {
                price: *price,
                original: discount.and(*original_price),
            },
            Self::Variable { variations } => PriceRange::Between {
                min: variations
                    .iter()
                    .map(|v| v.price)
                    .min()
                    .unwrap_or(Decimal::ZERO),
                max: variations
                    .iter()
                    .map(|v| v.price)
                    .max()
                    .unwrap_or(Decimal::ZERO),
            },
        }
    }

    /// Percentage off the reference price, for the discount badge.
    ///
    /// Rounded to the nearest whole percent, halves away from zero. `None`
    /// for variable products, undiscounted products, and products whose
    /// reference price is missing or not positive.
    ///
    /// ```
    /// use rust_decimal::Decimal;
    /// use souq_core::Pricing;
    ///
    /// let pricing = Pricing::Simple {
    ///     price: Decimal::new(80, 0),
    ///     original_price: Some(Decimal::new(100, 0)),
    ///     discount: Some(Decimal::new(20, 0)),
    /// };
    /// assert_eq!(pricing.discount_percent(), Some(20));
    /// ```
    #[must_use]
    pub fn discount_percent(&self) -> Option<u32> {
        match self {
            Self::Simple {
                original_price: Some(original),
                discount: Some(discount),
                ..
            } if *original > Decimal::ZERO => (*discount / *original * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u32(),
            _ => None,
        }
    }
}
