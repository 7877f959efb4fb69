//! Screen registry - the single source of truth for mapping the active
//! screen to its component.

use crate::domain::a001_customer::ui::list::CustomerList;
use crate::domain::a002_stock_item::ui::list::StockItemList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;

/// Render the content for the active screen
pub fn render_screen(screen: Screen) -> AnyView {
    match screen {
        Screen::Orders => view! { <OrderList /> }.into_any(),
        Screen::Stock => view! { <StockItemList /> }.into_any(),
        Screen::Customers => view! { <CustomerList /> }.into_any(),
    }
}

#[component]
fn ActiveScreen() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Unmounting the previous screen here is what keeps the screens
    // mutually exclusive: each remount refetches its own collection.
    move || render_screen(ctx.active.get())
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <ActiveScreen /> }.into_any()
        />
    }
}
