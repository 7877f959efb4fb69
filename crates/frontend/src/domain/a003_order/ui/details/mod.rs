//! Order Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (save)
//! - view_model.rs: ViewModel with commands, line rows and validation
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::OrderDetails;
pub use view_model::{LineRow, OrderDetailsViewModel};
