use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <header class="top-header">
            <button
                class="button button--icon top-header__toggle"
                title="Toggle navigation"
                on:click=move |_| ctx.nav_open.update(|open| *open = !*open)
            >
                {icon("menu")}
            </button>
            <span class="top-header__brand">{"Bean & Brews ☕"}</span>
            <h1 class="top-header__title">{"Coffee Shop Resource Management"}</h1>
        </header>
    }
}
