use yew::prelude::*;

use crate::{
    models::Product,
    utils::{build_image_url, ImageTransform},
};

#[derive(Properties, PartialEq, Clone)]
pub struct ProductCardProps {
    pub product: Product,
}

#[function_component(ProductCard)]
pub fn product_card(props: &ProductCardProps) -> Html {
    let product = props.product;
    let image_loaded = use_state(|| false);

    let on_image_load = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };
    let on_image_error = {
        let image_loaded = image_loaded.clone();
        Callback::from(move |_: Event| image_loaded.set(true))
    };

    let public_id = (!product.image_id.is_empty()).then_some(product.image_id);
    let image_url = build_image_url(public_id, &ImageTransform::thumbnail());

    let image_class = classes!(
        "aspect-[4/5]",
        "w-full",
        "object-cover",
        "transition-opacity",
        "duration-500",
        if *image_loaded { "opacity-100" } else { "opacity-0" }
    );

    html! {
        <article class={classes!(
            "group",
            "overflow-hidden",
            "rounded-lg",
            "border",
            "border-[var(--border)]",
            "bg-[var(--surface)]",
        )}>
            <div class={classes!("relative", "overflow-hidden")}>
                {
                    if !*image_loaded {
                        html! {
                            <div class={classes!(
                                "absolute",
                                "inset-0",
                                "bg-gradient-to-br",
                                "from-[var(--surface-alt)]",
                                "to-[var(--surface)]",
                                "animate-pulse",
                                "pointer-events-none"
                            )} />
                        }
                    } else {
                        html! {}
                    }
                }
                <img
                    src={image_url}
                    alt={format!("{} bottle", product.name)}
                    class={image_class}
                    loading="lazy"
                    onload={on_image_load}
                    onerror={on_image_error}
                />
            </div>
            <div class={classes!("p-4")}>
                <p class={classes!("text-xs", "uppercase", "tracking-wide", "text-[var(--text-muted)]")}>
                    { product.house }
                </p>
                <h3 class={classes!("mt-1", "font-medium", "text-[var(--text)]")}>
                    { product.name }
                </h3>
                <p class={classes!("mt-1", "text-sm", "text-[var(--text-muted)]")}>
                    { product.notes }
                </p>
                <p class={classes!("mt-2", "text-sm", "font-semibold")}>
                    { product.price_label() }
                </p>
            </div>
        </article>
    }
}
