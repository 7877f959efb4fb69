use crate::layout::global_context::{AppGlobalContext, Screen};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="main-nav-bar">
            <ul>
                {Screen::ALL.into_iter().map(|screen| {
                    view! {
                        <li
                            class:main-nav-bar__item--active=move || ctx.active.get() == screen
                            on:click=move |_| ctx.activate(screen)
                        >
                            {icon(screen.key())}
                            <span>{screen.title()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}
