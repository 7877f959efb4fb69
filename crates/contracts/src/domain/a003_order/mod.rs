pub mod aggregate;
pub mod validation;

pub use aggregate::{items_summary, Order, OrderDraft, OrderId, OrderLine, OrderLineInput, OrderStatus};
