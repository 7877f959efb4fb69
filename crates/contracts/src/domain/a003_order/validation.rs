//! Pre-submission checks for the order form.
//!
//! The line check is a pure function over the row's current values plus
//! a lookup into the stock snapshot; it has no UI dependencies.

use super::aggregate::OrderLineInput;
use crate::domain::a002_stock_item::StockItemId;
use crate::shared::validation::FieldErrors;
use chrono::NaiveDateTime;

/// Validate one line row against the current stock snapshot.
///
/// `stock_of` resolves the remaining stock of the currently selected
/// item; the ceiling is re-checked whenever the selection changes, so a
/// quantity that was fine for one coffee can become invalid for another.
pub fn validate_line<F>(
    item_id: Option<StockItemId>,
    qty: &str,
    stock_of: F,
) -> Result<OrderLineInput, String>
where
    F: Fn(StockItemId) -> Option<u32>,
{
    let Some(item_id) = item_id else {
        return Err("Select a coffee".to_string());
    };

    let qty = qty.trim();
    if qty.is_empty() {
        return Err("Quantity required".to_string());
    }
    let qty: u32 = qty
        .parse()
        .map_err(|_| "Qty must be at least 1".to_string())?;
    if qty < 1 {
        return Err("Qty must be at least 1".to_string());
    }
    if let Some(stock) = stock_of(item_id) {
        if qty > stock {
            return Err(format!("Qty cannot exceed current stock ({})", stock));
        }
    }

    Ok(OrderLineInput { item_id, qty })
}

/// Validate the order header fields (everything except the line rows)
pub fn validate_order_head(
    customer_name: &str,
    created_at: &str,
    status: &str,
) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if customer_name.trim().is_empty() {
        errors.push(("customer_name", "Please input customer name!".to_string()));
    }
    if created_at.trim().is_empty() {
        errors.push(("created_at", "Please select date and time!".to_string()));
    } else if parse_order_datetime(created_at.trim()).is_none() {
        errors.push(("created_at", "Invalid date and time".to_string()));
    }
    if status.trim().is_empty() {
        errors.push(("status", "Please select status".to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Accepts both the `datetime-local` picker form ("YYYY-MM-DDTHH:MM")
/// and the backend's space-separated form ("YYYY-MM-DD HH:MM").
pub fn parse_order_datetime(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .ok()
        .or_else(|| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_of(id: StockItemId) -> Option<u32> {
        (id == StockItemId::new(1)).then_some(5)
    }

    #[test]
    fn qty_at_the_ceiling_passes() {
        let line = validate_line(Some(StockItemId::new(1)), "5", stock_of).unwrap();
        assert_eq!(line.qty, 5);
    }

    #[test]
    fn qty_above_the_ceiling_cites_the_stock() {
        let err = validate_line(Some(StockItemId::new(1)), "6", stock_of).unwrap_err();
        assert_eq!(err, "Qty cannot exceed current stock (5)");
    }

    #[test]
    fn qty_zero_or_blank_is_below_minimum() {
        assert_eq!(
            validate_line(Some(StockItemId::new(1)), "0", stock_of).unwrap_err(),
            "Qty must be at least 1"
        );
        assert_eq!(
            validate_line(Some(StockItemId::new(1)), "  ", stock_of).unwrap_err(),
            "Quantity required"
        );
    }

    #[test]
    fn missing_item_is_rejected_first() {
        assert_eq!(
            validate_line(None, "3", stock_of).unwrap_err(),
            "Select a coffee"
        );
    }

    #[test]
    fn unknown_item_skips_the_ceiling_check() {
        // The server is authoritative; an item missing from the local
        // snapshot cannot be range-checked client-side.
        let line = validate_line(Some(StockItemId::new(42)), "99", stock_of).unwrap();
        assert_eq!(line.qty, 99);
    }

    #[test]
    fn head_requires_all_fields() {
        let errors = validate_order_head("", "", "").unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec!["customer_name", "created_at", "status"]);
    }

    #[test]
    fn head_accepts_picker_datetime() {
        assert!(validate_order_head("Ben", "2025-07-01T09:30", "PENDING").is_ok());
        assert!(validate_order_head("Ben", "2025-07-01 09:30", "PENDING").is_ok());
        assert!(validate_order_head("Ben", "yesterday", "PENDING").is_err());
    }
}
