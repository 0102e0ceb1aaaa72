// Reusable components live here.

pub mod avatar;
pub mod dropdown_menu;
pub mod footer;
pub mod header;
pub mod icons;
pub mod product_card;
