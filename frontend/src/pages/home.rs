use yew::prelude::*;

use crate::{
    components::{
        dropdown_menu::{
            use_dropdown_menu, DropdownMenu, DropdownMenuContent, DropdownMenuItem,
            DropdownMenuTrigger, MenuAlign,
        },
        icons::{Icon, IconName},
        product_card::ProductCard,
    },
    hooks::use_scroll_to_top,
    i18n::{current::home as t, fill_one},
    models::{sorted, SortOrder, CATALOG},
};

#[function_component(HomePage)]
pub fn home_page() -> Html {
    use_scroll_to_top();

    let sort_order = use_state(|| SortOrder::Featured);
    let sort_menu = use_dropdown_menu();

    let products = sorted(CATALOG, *sort_order);

    let sort_item = |order: SortOrder| {
        let sort_order = sort_order.clone();
        let on_activate = Callback::from(move |_: MouseEvent| sort_order.set(order));
        html! {
            <DropdownMenuItem menu={sort_menu.clone()} on_activate={on_activate}>
                { order.label() }
            </DropdownMenuItem>
        }
    };

    html! {
        <main class={classes!("mx-auto", "max-w-5xl", "px-4", "py-8")}>
            <div class={classes!("flex", "items-end", "justify-between", "gap-4")}>
                <div>
                    <h1 class={classes!("text-2xl", "font-semibold")}>
                        { t::HEADING }
                    </h1>
                    <p class={classes!("mt-1", "text-sm", "text-[var(--text-muted)]")}>
                        { fill_one(t::COUNT, products.len()) }
                    </p>
                </div>

                <DropdownMenu>
                    <DropdownMenuTrigger
                        menu={sort_menu.clone()}
                        class={classes!(
                            "flex",
                            "items-center",
                            "gap-1",
                            "rounded-md",
                            "border",
                            "border-[var(--border)]",
                            "px-3",
                            "py-2",
                            "text-sm",
                            "hover:bg-[var(--surface-alt)]",
                        )}
                    >
                        { format!("{}: {}", t::SORT_LABEL, sort_order.label()) }
                        <Icon name={IconName::ChevronDown} size={16} />
                    </DropdownMenuTrigger>
                    <DropdownMenuContent menu={sort_menu.clone()} align={MenuAlign::End}>
                        { sort_item(SortOrder::Featured) }
                        { sort_item(SortOrder::PriceLowHigh) }
                        { sort_item(SortOrder::PriceHighLow) }
                        { sort_item(SortOrder::Name) }
                        <DropdownMenuItem menu={sort_menu.clone()} disabled={true}>
                            { t::SORT_SOON }
                        </DropdownMenuItem>
                    </DropdownMenuContent>
                </DropdownMenu>
            </div>

            <div class={classes!(
                "mt-6",
                "grid",
                "grid-cols-1",
                "gap-5",
                "sm:grid-cols-2",
                "lg:grid-cols-3",
            )}>
                { for products.iter().map(|product| html! {
                    <ProductCard product={*product} />
                }) }
            </div>
        </main>
    }
}
