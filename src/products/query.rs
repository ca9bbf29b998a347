//! Listing filters accepted by `GET /products`.

use serde::{Deserialize, Serialize};

use crate::products::types::Product;

/// Query-string filter. Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductQuery {
    /// Maximum number of products returned.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    /// Exact SKU match.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Case-insensitive substring of the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(code) = &self.code {
            if product.code != *code {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if !product.title.to_lowercase().contains(&title.to_lowercase()) {
                return false;
            }
        }
        true
    }

    /// Filter `products` in order, then truncate to `limit`.
    pub fn select<'a, I>(&self, products: I) -> Vec<Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products
            .into_iter()
            .filter(|p| self.matches(p))
            .take(self.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}
