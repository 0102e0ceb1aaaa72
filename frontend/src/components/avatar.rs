use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    #[prop_or_default]
    pub children: Children,

    #[prop_or_default]
    pub class: Classes,
}

/// Round container for an [`AvatarImage`] plus an [`AvatarFallback`].
#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let container_class = classes!(
        "relative",
        "flex",
        "h-10",
        "w-10",
        "shrink-0",
        "overflow-hidden",
        "rounded-full",
        props.class.clone(),
    );

    html! {
        <span class={container_class}>
            { for props.children.iter() }
        </span>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AvatarImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,

    #[prop_or_default]
    pub class: Classes,
}

/// The picture itself. A failed load hides the element for the rest of the
/// mount (no retry), letting the sibling fallback show through.
#[function_component(AvatarImage)]
pub fn avatar_image(props: &AvatarImageProps) -> Html {
    let failed = use_state(|| false);

    let on_error = {
        let failed = failed.clone();
        Callback::from(move |_: Event| failed.set(true))
    };

    if *failed {
        return html! {};
    }

    html! {
        <img
            src={props.src.clone()}
            alt={props.alt.clone()}
            class={classes!("aspect-square", "h-full", "w-full", "object-cover", props.class.clone())}
            loading="lazy"
            onerror={on_error}
        />
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarFallbackProps {
    #[prop_or_default]
    pub children: Children,

    #[prop_or_default]
    pub class: Classes,
}

/// Shown behind the image; visible whenever the image is absent or hidden.
#[function_component(AvatarFallback)]
pub fn avatar_fallback(props: &AvatarFallbackProps) -> Html {
    let fallback_class = classes!(
        "absolute",
        "inset-0",
        "-z-10",
        "flex",
        "items-center",
        "justify-center",
        "rounded-full",
        "bg-[var(--surface-alt)]",
        "text-sm",
        "font-medium",
        "text-[var(--text-muted)]",
        props.class.clone(),
    );

    html! {
        <span class={fallback_class} aria-hidden="true">
            { for props.children.iter() }
        </span>
    }
}
