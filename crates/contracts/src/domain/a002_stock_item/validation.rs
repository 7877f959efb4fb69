//! Pre-submission checks for the stock form.
//!
//! The numeric fields arrive as free text from the form controls; parsing
//! them here is the fail-closed boundary. No range checks beyond what the
//! types enforce (stock cannot be negative because it parses as `u32`).

use super::aggregate::{StockItem, StockItemDraft};
use crate::shared::validation::FieldErrors;

/// Raw values as typed into the stock form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StockItemForm {
    pub name: String,
    pub origin: String,
    pub stock: String,
    pub price: String,
}

impl StockItemForm {
    /// Pre-populate the edit form from an existing record
    pub fn from_item(item: &StockItem) -> Self {
        Self {
            name: item.name.clone(),
            origin: item.origin.clone(),
            stock: item.stock.to_string(),
            price: item.price.to_string(),
        }
    }
}

/// Validate the form and produce the wire payload
pub fn parse_stock_form(form: &StockItemForm) -> Result<StockItemDraft, FieldErrors> {
    let mut errors = FieldErrors::new();

    if form.name.trim().is_empty() {
        errors.push(("name", "Coffee name is required".to_string()));
    }
    if form.origin.trim().is_empty() {
        errors.push(("origin", "Coffee origin is required".to_string()));
    }

    let stock = match form.stock.trim() {
        "" => {
            errors.push(("stock", "Stock is required".to_string()));
            None
        }
        raw => match raw.parse::<u32>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.push(("stock", "Stock must be a non-negative whole number".to_string()));
                None
            }
        },
    };

    let price = match form.price.trim() {
        "" => {
            errors.push(("price", "Price is required".to_string()));
            None
        }
        raw => match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                errors.push(("price", "Price must be a number".to_string()));
                None
            }
        },
    };

    match (stock, price) {
        (Some(stock), Some(price)) if errors.is_empty() => Ok(StockItemDraft {
            name: form.name.trim().to_string(),
            origin: form.origin.trim().to_string(),
            stock,
            price,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, origin: &str, stock: &str, price: &str) -> StockItemForm {
        StockItemForm {
            name: name.to_string(),
            origin: origin.to_string(),
            stock: stock.to_string(),
            price: price.to_string(),
        }
    }

    #[test]
    fn parses_complete_form() {
        let draft = parse_stock_form(&form("Arabica", "Brazil", "5", "50000")).unwrap();
        assert_eq!(draft.stock, 5);
        assert_eq!(draft.price, 50000.0);
    }

    #[test]
    fn rejects_negative_and_non_numeric_stock() {
        for bad in ["-1", "2.5", "five"] {
            let errors = parse_stock_form(&form("A", "B", bad, "10")).unwrap_err();
            assert_eq!(errors[0].0, "stock", "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn requires_every_field() {
        let errors = parse_stock_form(&form("", "", "", "")).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec!["name", "origin", "stock", "price"]);
    }
}
