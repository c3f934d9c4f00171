pub mod args;
pub mod error;
pub mod model;
pub mod controller {
    pub mod browse;
    pub mod cache;
    pub mod catalog;
    pub mod filter;
}
pub mod view {
    pub mod badges;
    pub mod index;
    pub mod leagues;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::CatalogError;
pub use model::{Filters, League, Season};
