use yew::prelude::*;

/// Lucide icons - SVG path data from https://lucide.dev
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    ChevronDown,
    Sparkles,
    User,
}

impl IconName {
    /// SVG path data for the icon.
    pub fn path(&self) -> &'static str {
        match self {
            IconName::ChevronDown => "m6 9 6 6 6-6",
            IconName::Sparkles => {
                "M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 \
                 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 \
                 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 \
                 6.135a.5.5 0 0 1-.963 0z"
            },
            IconName::User => {
                "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2M16 7a4 4 0 1 1-8 0 4 4 0 0 1 8 0z"
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(24)]
    pub size: u32,

    #[prop_or_else(|| "currentColor".to_string())]
    pub color: String,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    let IconProps {
        name,
        size,
        color,
        class,
    } = props;

    let stroke_width = if *size <= 16 { 2.5 } else { 2.0 };

    html! {
        <svg
            class={classes!(
                "inline-flex",
                "items-center",
                "justify-center",
                "shrink-0",
                "transition-all",
                "duration-200",
                "ease-[var(--ease-spring)]",
                class.clone()
            )}
            width={size.to_string()}
            height={size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke={color.clone()}
            stroke-width={stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={name.path()} />
        </svg>
    }
}
