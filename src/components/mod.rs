//! UI Components
//!
//! Leptos components of the products page.

mod products_page;
mod products_grid;
mod product_card;
mod product_form;
mod category_select;
mod dialog;
mod delete_confirm_button;

pub use products_page::ProductsPage;
pub use products_grid::ProductsGrid;
pub use product_card::ProductCard;
pub use product_form::ProductForm;
pub use category_select::CategorySelect;
pub use dialog::Dialog;
pub use delete_confirm_button::DeleteConfirmButton;
