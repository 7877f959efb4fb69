pub mod center;
pub mod global_context;
pub mod sidebar;
pub mod top_header;

use global_context::AppGlobalContext;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// |   (Left)  |         (Center)             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, C>(left: L, center: C) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    C: Fn() -> AnyView + 'static + Send,
{
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                // Sidebar visibility is controlled from the top header
                <aside
                    class="app-sidebar"
                    class:app-sidebar--collapsed=move || !ctx.nav_open.get()
                >
                    {left()}
                </aside>

                <main class="app-main">
                    <center::Center>
                        {center()}
                    </center::Center>
                </main>
            </div>
        </div>
    }
}
