// src/presentation/http/controllers/mod.rs
pub mod admin_categories;
pub mod admin_content;
pub mod admin_products;
pub mod slugs;
pub mod storefront;

use serde::{Deserialize, Deserializer};

/// Keeps an explicit JSON `null` apart from a missing field.
pub(crate) fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
