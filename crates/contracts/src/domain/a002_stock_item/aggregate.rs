use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// ID type for the stock catalog (server-assigned row id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockItemId(pub i64);

impl StockItemId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for StockItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(StockItemId::new)
            .map_err(|e| format!("Invalid stock item id: {}", e))
    }
}

/// One coffee bean in the catalog, as returned by `/stocks`.
/// `stock` counts whole bags and never goes negative.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockItem {
    pub id: StockItemId,
    pub name: String,
    pub origin: String,
    pub stock: u32,
    pub price: f64,
}

impl StockItem {
    /// Derived display state: zero stock renders as the sold-out marker,
    /// anything else as "{n} bags" (the pluralization is unconditional).
    pub fn stock_label(&self) -> String {
        if self.stock == 0 {
            "SOLD OUT".to_string()
        } else {
            format!("{} bags", self.stock)
        }
    }
}

/// Payload for creating or updating a stock item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StockItemDraft {
    pub name: String,
    pub origin: String,
    pub stock: u32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(stock: u32) -> StockItem {
        StockItem {
            id: StockItemId::new(1),
            name: "Arabica".to_string(),
            origin: "Brazil".to_string(),
            stock,
            price: 50000.0,
        }
    }

    #[test]
    fn zero_stock_is_sold_out() {
        assert_eq!(item(0).stock_label(), "SOLD OUT");
    }

    #[test]
    fn stock_label_pluralization_is_unconditional() {
        assert_eq!(item(1).stock_label(), "1 bags");
        assert_eq!(item(12).stock_label(), "12 bags");
    }
}
