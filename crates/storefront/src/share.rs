//! Share links for products.

use std::sync::LazyLock;

use souq_core::{Language, Product};
use url::Url;

/// WhatsApp share endpoint.
static SHARE_ENDPOINT: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://wa.me/").expect("valid share endpoint"));

/// Build a WhatsApp share link for `product`.
///
/// The message is the product name in the active language followed by the
/// product image URI, percent-encoded into the `text` parameter.
#[must_use]
pub fn whatsapp_share_url(product: &Product, language: Language) -> Url {
    let text = format!("{} - {}", product.name.get(language), product.image);
    let mut url = SHARE_ENDPOINT.clone();
    url.query_pairs_mut().append_pair("text", &text);
    url
}
