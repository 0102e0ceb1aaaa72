//! English copy for the storefront.

pub mod common {
    pub const BRAND: &str = "Maison Ambre";
    pub const TAGLINE: &str = "Perfumes composed in small batches";
}

pub mod header {
    pub const NAV_HOME: &str = "Shop";
    pub const NAV_FAQ: &str = "FAQ";
    pub const ACCOUNT_MENU: &str = "Account menu";
    pub const ACCOUNT_INITIALS: &str = "MA";
    pub const MENU_ORDERS: &str = "Order history";
    pub const MENU_WISHLIST: &str = "Wishlist (coming soon)";
    pub const MENU_FAQ: &str = "FAQ & help";
}

pub mod footer {
    pub const COPYRIGHT: &str = "© {} Maison Ambre. All fragrances bottled in Grasse.";
    pub const DISCLAIMER: &str = "Samples available for every scent.";
}

pub mod home {
    pub const HEADING: &str = "The collection";
    pub const COUNT: &str = "{} fragrances";
    pub const SORT_LABEL: &str = "Sort";
    pub const SORT_SOON: &str = "Best sellers (coming soon)";
}

pub mod faq {
    pub const TITLE: &str = "Frequently asked questions";
    pub const INTRO: &str =
        "Everything about ordering, shipping and caring for your perfume. Still stuck? Write to \
         hello@maison-ambre.example.";

    /// Question/answer pairs, rendered in order.
    pub const ITEMS: &[(&str, &str)] = &[
        (
            "How long does shipping take?",
            "Orders leave our atelier within two business days. Domestic delivery takes 2-4 days, \
             international delivery 7-14 days depending on customs.",
        ),
        (
            "Can I return an opened bottle?",
            "Unopened bottles can be returned within 30 days. Once a bottle is opened we cannot \
             take it back, which is why every order ships with a free 2 ml sample of the scent to \
             try first.",
        ),
        (
            "How should I store my perfume?",
            "Keep bottles away from direct sunlight and heat. A drawer or cupboard at room \
             temperature preserves a composition for years; bathrooms are the worst place for \
             them.",
        ),
        (
            "Are your fragrances vegan?",
            "All current compositions are vegan and cruelty-free. A few archived scents used \
             ethically sourced beeswax absolute; these are marked on their product pages.",
        ),
        (
            "Do you offer samples or discovery sets?",
            "Yes. A discovery set with 2 ml vials of the whole collection is available, and its \
             price is deducted from your first full bottle.",
        ),
    ];
}

pub mod not_found {
    pub const TITLE: &str = "404 - page not found";
    pub const MESSAGE: &str = "This scent has evaporated. The page you are looking for does not exist.";
    pub const BACK_HOME: &str = "Back to the collection";
}
