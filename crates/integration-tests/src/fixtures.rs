//! Product fixtures shared by the test files.

use rust_decimal::Decimal;
use souq_core::{LocalizedText, Pricing, Product, ProductId, Variation};

/// A simple-priced product without a discount.
#[must_use]
pub fn simple(id: i64, price: Decimal) -> Product {
    Product {
        id: ProductId::new(id),
        name: LocalizedText::new(format!("منتج {id}"), format!("Product {id}")),
        image: format!("/images/{id}.jpg"),
        pricing: Pricing::Simple {
            price,
            original_price: None,
            discount: None,
        },
        is_featured: false,
        ai_suggested: false,
    }
}

/// A discounted simple-priced product.
#[must_use]
pub fn discounted(id: i64, price: Decimal, original: Decimal) -> Product {
    Product {
        pricing: Pricing::Simple {
            price,
            original_price: Some(original),
            discount: Some(original - price),
        },
        ..simple(id, price)
    }
}

/// A multi-priced product with one variation per price.
#[must_use]
pub fn variable(id: i64, prices: &[Decimal]) -> Product {
    Product {
        pricing: Pricing::Variable {
            variations: prices
                .iter()
                .enumerate()
                .map(|(i, &price)| Variation {
                    name: LocalizedText::new(format!("خيار {}", i + 1), format!("Option {}", i + 1)),
                    price,
                })
                .collect(),
        },
        ..simple(id, Decimal::ZERO)
    }
}
