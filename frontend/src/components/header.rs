use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{
        avatar::{Avatar, AvatarFallback, AvatarImage},
        dropdown_menu::{
            use_dropdown_menu, DropdownMenu, DropdownMenuContent, DropdownMenuItem,
            DropdownMenuTrigger, MenuAlign,
        },
        icons::{Icon, IconName},
    },
    i18n::current::{common, header as t},
    router::Route,
    utils::{build_image_url, ImageTransform},
};

#[function_component(Header)]
pub fn header() -> Html {
    let navigator = use_navigator();
    let account_menu = use_dropdown_menu();

    let go_to_faq = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Faq);
            }
        })
    };

    let avatar_url =
        build_image_url(Some("site/concierge-portrait"), &ImageTransform::avatar());

    let nav_link_class = classes!(
        "text-sm",
        "font-medium",
        "text-[var(--text-muted)]",
        "transition-colors",
        "hover:text-[var(--text)]",
    );

    html! {
        <header class={classes!(
            "sticky",
            "top-0",
            "z-40",
            "border-b",
            "border-[var(--border)]",
            "bg-[var(--surface)]",
        )}>
            <div class={classes!(
                "mx-auto",
                "flex",
                "max-w-5xl",
                "items-center",
                "justify-between",
                "gap-6",
                "px-4",
                "py-3",
            )}>
                <Link<Route> to={Route::Home} classes={classes!("flex", "items-center", "gap-2")}>
                    <Icon name={IconName::Sparkles} size={20} />
                    <span class={classes!("font-semibold", "tracking-wide")}>
                        { common::BRAND }
                    </span>
                </Link<Route>>

                <nav class={classes!("flex", "items-center", "gap-5")}>
                    <Link<Route> to={Route::Home} classes={nav_link_class.clone()}>
                        { t::NAV_HOME }
                    </Link<Route>>
                    <Link<Route> to={Route::Faq} classes={nav_link_class}>
                        { t::NAV_FAQ }
                    </Link<Route>>

                    <DropdownMenu>
                        <DropdownMenuTrigger
                            menu={account_menu.clone()}
                            class={classes!("rounded-full")}
                        >
                            <Avatar>
                                <AvatarImage src={avatar_url} alt={t::ACCOUNT_MENU} />
                                <AvatarFallback>
                                    { t::ACCOUNT_INITIALS }
                                </AvatarFallback>
                            </Avatar>
                        </DropdownMenuTrigger>
                        <DropdownMenuContent
                            menu={account_menu.clone()}
                            align={MenuAlign::End}
                            side_offset={8}
                        >
                            <DropdownMenuItem menu={account_menu.clone()} on_activate={go_to_faq}>
                                <Icon name={IconName::User} size={16} class={classes!("mr-2")} />
                                { t::MENU_FAQ }
                            </DropdownMenuItem>
                            <DropdownMenuItem menu={account_menu.clone()} disabled={true}>
                                { t::MENU_ORDERS }
                            </DropdownMenuItem>
                            <DropdownMenuItem menu={account_menu.clone()} disabled={true}>
                                { t::MENU_WISHLIST }
                            </DropdownMenuItem>
                        </DropdownMenuContent>
                    </DropdownMenu>
                </nav>
            </div>
        </header>
    }
}
