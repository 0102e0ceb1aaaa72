use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    hooks::use_scroll_to_top,
    i18n::current::faq as t,
};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

/// One question row with its own expand/collapse flag.
#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let expanded = use_state(|| false);

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let chevron_class = classes!(
        "shrink-0",
        "text-[var(--text-muted)]",
        if *expanded { "rotate-180" } else { "rotate-0" }
    );

    html! {
        <li class={classes!("border-b", "border-[var(--border)]")}>
            <button
                type="button"
                class={classes!(
                    "flex",
                    "w-full",
                    "items-center",
                    "justify-between",
                    "gap-4",
                    "py-4",
                    "text-left",
                    "font-medium",
                    "hover:text-[var(--primary)]",
                )}
                onclick={on_toggle}
                aria-expanded={(*expanded).to_string()}
            >
                { props.question.clone() }
                <Icon name={IconName::ChevronDown} size={16} class={chevron_class} />
            </button>
            {
                if *expanded {
                    html! {
                        <p class={classes!("pb-4", "text-sm", "leading-relaxed", "text-[var(--text-muted)]")}>
                            { props.answer.clone() }
                        </p>
                    }
                } else {
                    html! {}
                }
            }
        </li>
    }
}

#[function_component(FaqPage)]
pub fn faq_page() -> Html {
    use_scroll_to_top();

    html! {
        <main class={classes!("mx-auto", "max-w-3xl", "px-4", "py-8")}>
            <h1 class={classes!("text-2xl", "font-semibold")}>{ t::TITLE }</h1>
            <p class={classes!("mt-2", "text-sm", "text-[var(--text-muted)]")}>{ t::INTRO }</p>
            <ul class={classes!("mt-6")}>
                { for t::ITEMS.iter().map(|(question, answer)| html! {
                    <FaqItem question={*question} answer={*answer} />
                }) }
            </ul>
        </main>
    }
}
