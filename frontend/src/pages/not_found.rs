use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-16", "text-center")}>
            <h2 class={classes!("text-2xl", "font-semibold")}>{ t::TITLE }</h2>
            <p class={classes!("mt-2", "text-[var(--text-muted)]")}>{ t::MESSAGE }</p>
            <Link<Route>
                to={Route::Home}
                classes={classes!("mt-6", "inline-block", "text-[var(--primary)]", "underline")}
            >
                { t::BACK_HOME }
            </Link<Route>>
        </main>
    }
}
