pub mod aggregate;
pub mod validation;

pub use aggregate::{StockItem, StockItemDraft, StockItemId};
