/// A catalog entry. The storefront ships with a static catalog; there is no
/// backend to fetch from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Product {
    pub name: &'static str,
    pub house: &'static str,
    /// Price in cents to keep ordering exact.
    pub price_cents: u32,
    /// CDN public id of the bottle shot; empty means "use the placeholder".
    pub image_id: &'static str,
    pub notes: &'static str,
}

impl Product {
    pub fn price_label(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}

/// Ordering applied to the catalog grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Featured,
    PriceLowHigh,
    PriceHighLow,
    Name,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::PriceLowHigh => "Price: low to high",
            SortOrder::PriceHighLow => "Price: high to low",
            SortOrder::Name => "Name",
        }
    }
}

/// Catalog in the given ordering. `Featured` keeps the curated order the
/// catalog is declared in; the others sort stably on top of it.
pub fn sorted(products: &[Product], order: SortOrder) -> Vec<Product> {
    let mut items = products.to_vec();
    match order {
        SortOrder::Featured => {},
        SortOrder::PriceLowHigh => items.sort_by_key(|product| product.price_cents),
        SortOrder::PriceHighLow => {
            items.sort_by_key(|product| std::cmp::Reverse(product.price_cents))
        },
        SortOrder::Name => items.sort_by_key(|product| product.name),
    }
    items
}

/// The curated house collection, in featured order.
pub const CATALOG: &[Product] = &[
    Product {
        name: "Ambre Nocturne",
        house: "Maison Ambre",
        price_cents: 18_500,
        image_id: "scents/ambre-nocturne",
        notes: "Amber, labdanum, vanilla bean",
    },
    Product {
        name: "Jardin de Minuit",
        house: "Maison Ambre",
        price_cents: 16_000,
        image_id: "scents/jardin-de-minuit",
        notes: "Night jasmine, fig leaf, vetiver",
    },
    Product {
        name: "Cuir Sauvage",
        house: "Atelier Brume",
        price_cents: 21_000,
        image_id: "scents/cuir-sauvage",
        notes: "Leather, birch tar, black pepper",
    },
    Product {
        name: "Eau de Verveine",
        house: "Atelier Brume",
        price_cents: 9_500,
        image_id: "scents/eau-de-verveine",
        notes: "Verbena, bergamot, white musk",
    },
    Product {
        name: "Bois d'Hiver",
        house: "Maison Ambre",
        price_cents: 14_500,
        image_id: "",
        notes: "Cedar, iris, smoked tea",
    },
    Product {
        name: "Rose Obscure",
        house: "Maison Ambre",
        price_cents: 17_500,
        image_id: "scents/rose-obscure",
        notes: "Damask rose, oud, saffron",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_keeps_declared_order() {
        let names: Vec<_> = sorted(CATALOG, SortOrder::Featured)
            .iter()
            .map(|product| product.name)
            .collect();
        let declared: Vec<_> = CATALOG.iter().map(|product| product.name).collect();
        assert_eq!(names, declared);
    }

    #[test]
    fn price_orders_are_monotonic() {
        let ascending = sorted(CATALOG, SortOrder::PriceLowHigh);
        assert!(ascending.windows(2).all(|pair| pair[0].price_cents <= pair[1].price_cents));

        let descending = sorted(CATALOG, SortOrder::PriceHighLow);
        assert!(descending.windows(2).all(|pair| pair[0].price_cents >= pair[1].price_cents));
    }

    #[test]
    fn name_order_is_alphabetical() {
        let by_name = sorted(CATALOG, SortOrder::Name);
        assert!(by_name.windows(2).all(|pair| pair[0].name <= pair[1].name));
    }

    #[test]
    fn sorting_never_drops_entries() {
        for order in [
            SortOrder::Featured,
            SortOrder::PriceLowHigh,
            SortOrder::PriceHighLow,
            SortOrder::Name,
        ] {
            assert_eq!(sorted(CATALOG, order).len(), CATALOG.len());
        }
    }

    #[test]
    fn price_label_formats_cents() {
        let product = Product {
            name: "x",
            house: "x",
            price_cents: 9_505,
            image_id: "",
            notes: "",
        };
        assert_eq!(product.price_label(), "$95.05");
    }
}
