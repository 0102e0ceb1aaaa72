use yew::prelude::*;

use crate::i18n::{
    current::{common, footer as t},
    fill_one,
};

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = js_sys::Date::new_0().get_full_year();

    html! {
        <footer class={classes!(
            "border-t",
            "border-[var(--border)]",
            "bg-[var(--surface)]",
            "py-6",
        )}>
            <div class={classes!(
                "mx-auto",
                "max-w-5xl",
                "px-4",
                "text-center",
                "text-sm",
                "text-[var(--text-muted)]",
            )}>
                <p class={classes!("font-medium", "text-[var(--text)]")}>{ common::TAGLINE }</p>
                <p class={classes!("mt-1")}>{ fill_one(t::COPYRIGHT, year) }</p>
                <p class={classes!("mt-1")}>{ t::DISCLAIMER }</p>
            </div>
        </footer>
    }
}
