use crate::domain::a002_stock_item::StockItemId;
use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// ID type for orders (server-assigned row id)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i64);

impl OrderId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for OrderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }
    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(OrderId::new)
            .map_err(|e| format!("Invalid order id: {}", e))
    }
}

/// Workflow status of an order.
///
/// The backend stores a plain string; values outside the three known
/// statuses are carried through in `Other` so a record with an
/// unrecognized status still renders instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    NotStarted,
    Pending,
    Finished,
    Other(String),
}

impl OrderStatus {
    /// The statuses offered in the order form, in display order
    pub const KNOWN: [OrderStatus; 3] = [
        OrderStatus::NotStarted,
        OrderStatus::Pending,
        OrderStatus::Finished,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::NotStarted => "NOT STARTED",
            OrderStatus::Pending => "PENDING",
            OrderStatus::Finished => "FINISHED",
            OrderStatus::Other(s) => s,
        }
    }

    /// Display color for the status cell; unrecognized statuses fall
    /// back to gray.
    pub fn color(&self) -> &'static str {
        match self {
            OrderStatus::NotStarted => "red",
            OrderStatus::Pending => "orange",
            OrderStatus::Finished => "green",
            OrderStatus::Other(_) => "gray",
        }
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "NOT STARTED" => OrderStatus::NotStarted,
            "PENDING" => OrderStatus::Pending,
            "FINISHED" => OrderStatus::Finished,
            _ => OrderStatus::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of an order as returned by the backend. `GET /orders` joins
/// the stock catalog and fills the display fields; mutation echoes carry
/// only `item_id` and `qty`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    pub item_id: StockItemId,
    pub qty: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// Order record as returned by `/orders`. `created_at` stays in the
/// backend's "YYYY-MM-DD HH:MM" form until a screen formats it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub order_id: OrderId,
    pub customer_name: String,
    pub created_at: String,
    pub status: OrderStatus,
    pub items: Vec<OrderLine>,
}

/// Line item as submitted to the backend
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct OrderLineInput {
    pub item_id: StockItemId,
    pub qty: u32,
}

/// Payload for creating or updating an order. The backend reads the
/// lines from `order_items` on writes but returns them as `items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderDraft {
    pub customer_name: String,
    pub created_at: String,
    pub status: OrderStatus,
    pub order_items: Vec<OrderLineInput>,
}

/// Render the line items as `"<name> (x<qty>)"` joined with ", ".
///
/// The join name from the fetch is preferred; lines patched in from a
/// mutation echo carry no name and are resolved against the stock
/// snapshot via `name_of`, falling back to "Unknown".
pub fn items_summary<F>(lines: &[OrderLine], name_of: F) -> String
where
    F: Fn(StockItemId) -> Option<String>,
{
    lines
        .iter()
        .map(|line| {
            let name = line
                .name
                .clone()
                .or_else(|| name_of(line.item_id))
                .unwrap_or_else(|| "Unknown".to_string());
            format!("{} (x{})", name, line.qty)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_color_mapping() {
        assert_eq!(OrderStatus::from("NOT STARTED".to_string()).color(), "red");
        assert_eq!(OrderStatus::from("PENDING".to_string()).color(), "orange");
        assert_eq!(OrderStatus::from("FINISHED".to_string()).color(), "green");
        assert_eq!(OrderStatus::from("CANCELLED".to_string()).color(), "gray");
    }

    #[test]
    fn unknown_status_round_trips() {
        let status = OrderStatus::from("ON HOLD".to_string());
        assert_eq!(status, OrderStatus::Other("ON HOLD".to_string()));
        assert_eq!(String::from(status), "ON HOLD");
    }

    #[test]
    fn status_serde_uses_wire_strings() {
        let json = serde_json::to_string(&OrderStatus::NotStarted).unwrap();
        assert_eq!(json, "\"NOT STARTED\"");
        let back: OrderStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(back, OrderStatus::Pending);
    }

    fn line(item_id: i64, qty: u32, name: Option<&str>) -> OrderLine {
        OrderLine {
            item_id: StockItemId::new(item_id),
            qty,
            name: name.map(String::from),
            origin: None,
            price: None,
        }
    }

    #[test]
    fn summary_prefers_joined_name() {
        let lines = vec![line(1, 2, Some("Arabica")), line(2, 1, Some("Robusta"))];
        let summary = items_summary(&lines, |_| Some("wrong".to_string()));
        assert_eq!(summary, "Arabica (x2), Robusta (x1)");
    }

    #[test]
    fn summary_falls_back_to_lookup_then_unknown() {
        let lines = vec![line(1, 3, None), line(9, 1, None)];
        let summary = items_summary(&lines, |id| {
            (id == StockItemId::new(1)).then(|| "Arabica".to_string())
        });
        assert_eq!(summary, "Arabica (x3), Unknown (x1)");
    }

    #[test]
    fn order_parses_join_shape_and_echo_shape() {
        let fetched = r#"{
            "order_id": 7,
            "customer_name": "Ben",
            "created_at": "2025-07-01 09:30",
            "status": "PENDING",
            "items": [
                {"item_id": 1, "name": "Arabica", "origin": "Brazil", "qty": 2, "price": 50000}
            ]
        }"#;
        let order: Order = serde_json::from_str(fetched).unwrap();
        assert_eq!(order.items[0].name.as_deref(), Some("Arabica"));

        let echoed = r#"{
            "order_id": 8,
            "customer_name": "Ana",
            "created_at": "2025-07-01 10:00",
            "status": "NOT STARTED",
            "items": [{"item_id": 1, "qty": 2}]
        }"#;
        let order: Order = serde_json::from_str(echoed).unwrap();
        assert_eq!(order.items[0].name, None);
        assert_eq!(order.items[0].qty, 2);
    }
}
