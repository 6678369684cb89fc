//! Checkout session creation against the site's two payment backends.
//!
//! Both backends take the cart lines, POST them as JSON to a server endpoint and get back a
//! URL to redirect the shopper to. Failures are reported to the caller verbatim; nothing is
//! retried.

use crate::{
    commerce::{cart::CartItem, mapping},
    config::CheckoutConfig,
    foundation::error::{MuxuError, MuxuResult},
    http::{HttpResponse, HttpTransport},
};

/// Where to send the shopper to pay.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CheckoutUrl(pub String);

impl CheckoutUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CheckoutUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait CheckoutBackend {
    fn name(&self) -> &'static str;

    fn create_session(&self, items: &[CartItem]) -> MuxuResult<CheckoutUrl>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutKind {
    /// Hosted storefront cart; accepts every catalog product.
    Hosted,
    /// Card processor; only products with a card product id.
    Card,
}

/// Backend of `kind` talking to the endpoint configured for it.
pub fn backend<'a, T: HttpTransport + 'a>(
    kind: CheckoutKind,
    config: &CheckoutConfig,
    transport: T,
) -> Box<dyn CheckoutBackend + 'a> {
    match kind {
        CheckoutKind::Hosted => Box::new(HostedCheckout::new(&config.hosted_endpoint, transport)),
        CheckoutKind::Card => Box::new(CardCheckout::new(&config.card_endpoint, transport)),
    }
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionBody {
    checkout_url: Option<String>,
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Interpret a checkout endpoint response.
///
/// Non-2xx: the body's `error` message, or `HTTP <status>`. 2xx: a non-empty `checkoutUrl`.
pub fn parse_checkout_response(resp: &HttpResponse) -> MuxuResult<CheckoutUrl> {
    if !resp.is_success() {
        let msg = serde_json::from_slice::<ErrorBody>(&resp.body)
            .ok()
            .and_then(|b| b.error)
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP {}", resp.status));
        return Err(MuxuError::checkout(msg));
    }
    let body: SessionBody = serde_json::from_slice(&resp.body)
        .map_err(|e| MuxuError::checkout(format!("malformed checkout response: {e}")))?;
    match body.checkout_url {
        Some(url) if !url.trim().is_empty() => Ok(CheckoutUrl(url)),
        _ => Err(MuxuError::checkout("no checkout URL returned")),
    }
}

fn ensure_not_empty(items: &[CartItem]) -> MuxuResult<()> {
    if items.is_empty() {
        return Err(MuxuError::checkout("cart items are required"));
    }
    Ok(())
}

fn post<T: HttpTransport, B: serde::Serialize>(
    transport: &T,
    endpoint: &str,
    body: &B,
) -> MuxuResult<CheckoutUrl> {
    let bytes = serde_json::to_vec(body).map_err(|e| MuxuError::serde(e.to_string()))?;
    let resp = transport.post_json(endpoint, &bytes)?;
    let url = parse_checkout_response(&resp);
    match &url {
        Ok(url) => tracing::info!(%url, "checkout session created"),
        Err(err) => tracing::warn!(%err, status = resp.status, "checkout session failed"),
    }
    url
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct HostedLine<'a> {
    product_id: &'a str,
    size: &'static str,
    quantity: u32,
}

#[derive(serde::Serialize)]
struct HostedRequest<'a> {
    items: Vec<HostedLine<'a>>,
}

/// Hosted storefront checkout. The server resolves variants itself.
pub struct HostedCheckout<T> {
    endpoint: String,
    transport: T,
}

impl<T: HttpTransport> HostedCheckout<T> {
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }
}

impl<T: HttpTransport> CheckoutBackend for HostedCheckout<T> {
    fn name(&self) -> &'static str {
        "hosted"
    }

    #[tracing::instrument(skip_all, fields(backend = "hosted", lines = items.len()))]
    fn create_session(&self, items: &[CartItem]) -> MuxuResult<CheckoutUrl> {
        ensure_not_empty(items)?;
        for item in items {
            if mapping::hosted_variant_id(&item.product_id, Some(item.size)).is_none() {
                tracing::warn!(
                    product_id = %item.product_id,
                    size = %item.size,
                    "no hosted variant mapped; the server will skip this line"
                );
            }
        }
        let req = HostedRequest {
            items: items
                .iter()
                .map(|i| HostedLine {
                    product_id: &i.product_id,
                    size: i.size.label(),
                    quantity: i.quantity.max(1),
                })
                .collect(),
        };
        post(&self.transport, &self.endpoint, &req)
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CardLine {
    stripe_product_id: &'static str,
    quantity: u32,
    #[serde(rename = "unit_amount")]
    unit_amount: u32,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct CardRequest {
    line_items: Vec<CardLine>,
}

/// Card-processor checkout priced per line from the cart.
pub struct CardCheckout<T> {
    endpoint: String,
    transport: T,
}

impl<T: HttpTransport> CardCheckout<T> {
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }
}

impl<T: HttpTransport> CheckoutBackend for CardCheckout<T> {
    fn name(&self) -> &'static str {
        "card"
    }

    #[tracing::instrument(skip_all, fields(backend = "card", lines = items.len()))]
    fn create_session(&self, items: &[CartItem]) -> MuxuResult<CheckoutUrl> {
        ensure_not_empty(items)?;
        let line_items = items
            .iter()
            .map(|i| {
                let id = mapping::card_product_id(&i.product_id, Some(i.size)).ok_or_else(|| {
                    MuxuError::checkout(format!(
                        "no card product configured for {} ({})",
                        i.product_id, i.size
                    ))
                })?;
                Ok(CardLine {
                    stripe_product_id: id,
                    quantity: i.quantity.max(1),
                    unit_amount: i.unit_price_cents,
                })
            })
            .collect::<MuxuResult<Vec<_>>>()?;
        post(&self.transport, &self.endpoint, &CardRequest { line_items })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/commerce/checkout.rs"]
mod tests;
