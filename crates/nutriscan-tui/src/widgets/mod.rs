//! Custom widget components

mod details;
mod filter_bar;
mod footer;
mod header;
mod help;
mod message_panel;
mod product_list;

pub use details::ProductDetails;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use header::MainHeader;
pub use help::HelpOverlay;
pub use message_panel::{DatasetErrorPanel, NoMatchPanel};
pub use product_list::{truncate_to_width, ProductList};
