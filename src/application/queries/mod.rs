pub mod back_office;
pub mod storefront;

pub use back_office::BackOfficeQueryService;
pub use storefront::{ListProductsQuery, StorefrontQueryService};
