use crate::commerce::catalog::Size;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: String,
    pub size: Size,
    pub unit_price_cents: u32,
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total_cents(&self) -> u64 {
        u64::from(self.unit_price_cents) * u64::from(self.quantity)
    }
}

/// Shopping cart. Lines are keyed by `(product_id, size)` and kept in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, product_id: &str, size: Size) -> Option<usize> {
        self.items
            .iter()
            .position(|i| i.product_id == product_id && i.size == size)
    }

    /// Add one unit. An existing line keeps its original unit price.
    pub fn add(&mut self, product_id: &str, size: Size, unit_price_cents: u32) {
        self.add_quantity(product_id, size, unit_price_cents, 1);
    }

    /// Add `quantity` units to the line, creating it if needed. Zero is a no-op.
    pub fn add_quantity(
        &mut self,
        product_id: &str,
        size: Size,
        unit_price_cents: u32,
        quantity: u32,
    ) {
        if quantity == 0 {
            return;
        }
        match self.position(product_id, size) {
            Some(i) => {
                let line = &mut self.items[i];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartItem {
                product_id: product_id.to_owned(),
                size,
                unit_price_cents,
                quantity,
            }),
        }
        tracing::debug!(product_id, %size, quantity, "added to cart");
    }

    pub fn remove(&mut self, product_id: &str, size: Size) {
        self.items
            .retain(|i| !(i.product_id == product_id && i.size == size));
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn update_quantity(&mut self, product_id: &str, size: Size, quantity: i64) {
        if quantity <= 0 {
            self.remove(product_id, size);
            return;
        }
        if let Some(i) = self.position(product_id, size) {
            self.items[i].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn subtotal_cents(&self) -> u64 {
        self.items.iter().map(CartItem::line_total_cents).sum()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/commerce/cart.rs"]
mod tests;
