use axum_extra::extract::cookie::{Cookie, SignedCookieJar};
use std::collections::BTreeMap;

pub const CART_COOKIE: &str = "cart";

/// Per-session cart: product id → quantity. The only mutation is a +1
/// increment, so every present entry has quantity ≥ 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: BTreeMap<i64, u32>,
}

impl Cart {
    /// Reads the cart from the signed jar. Missing, tampered, or malformed
    /// cookies all yield the empty cart.
    pub fn from_jar(jar: &SignedCookieJar) -> Self {
        jar.get(CART_COOKIE)
            .map(|cookie| Self::decode(cookie.value()))
            .unwrap_or_default()
    }

    /// Cookie values cannot contain '"', ',' or ';' (RFC 6265), so entries
    /// are encoded as `id:qty` pairs joined by '|'. Pairs that fail to parse
    /// are dropped.
    pub fn decode(raw: &str) -> Self {
        let mut entries = BTreeMap::new();
        for pair in raw.split('|') {
            let Some((id, quantity)) = pair.split_once(':') else {
                continue;
            };
            let (Ok(id), Ok(quantity)) = (id.parse::<i64>(), quantity.parse::<u32>()) else {
                continue;
            };
            if quantity == 0 {
                continue;
            }
            entries.insert(id, quantity);
        }
        Self { entries }
    }

    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(id, quantity)| format!("{id}:{quantity}"))
            .collect::<Vec<_>>()
            .join("|")
    }

    pub fn add_one(&mut self, product_id: i64) {
        *self.entries.entry(product_id).or_insert(0) += 1;
    }

    pub fn quantity(&self, product_id: i64) -> u32 {
        self.entries.get(&product_id).copied().unwrap_or(0)
    }

    /// Entries in ascending product-id order.
    pub fn entries(&self) -> impl Iterator<Item = (i64, u32)> + '_ {
        self.entries.iter().map(|(&id, &quantity)| (id, quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_to(&self, jar: SignedCookieJar) -> SignedCookieJar {
        let mut cookie = Cookie::new(CART_COOKIE, self.encode());
        cookie.set_path("/");
        cookie.set_http_only(true);
        jar.add(cookie)
    }
}
