/// Configuration for the storefront frontend.

/// Delivery base for hosted product imagery. Transform segments are inserted
/// between this base and the image public id.
pub const IMAGE_CDN_BASE: &str = "https://res.cloudinary.com/maison-ambre/image/upload";

/// Served when a product has no usable image public id.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://res.cloudinary.com/maison-ambre/image/upload/v1/site/bottle-placeholder";
