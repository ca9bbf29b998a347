//! Response bodies.
//!
//! Every JSON reply carries a human-readable `message`; successful replies
//! add the product(s) under a route-specific key.

use serde::Serialize;

use crate::products::Product;

/// `{message}` alone, used for errors.
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// `GET /products`. `products` is omitted when nothing matched.
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<Product>>,
}

impl ProductList {
    pub fn new(products: Vec<Product>) -> Self {
        if products.is_empty() {
            Self {
                message: "No products found.",
                products: None,
            }
        } else {
            Self {
                message: "Products found",
                products: Some(products),
            }
        }
    }
}

/// `GET /products/{pid}` and `POST /products`.
#[derive(Debug, Serialize)]
pub struct ProductBody {
    pub message: &'static str,
    pub product: Product,
}

impl ProductBody {
    pub fn found(product: Product) -> Self {
        Self {
            message: "Product found.",
            product,
        }
    }

    pub fn added(product: Product) -> Self {
        Self {
            message: "Product added",
            product,
        }
    }
}

/// `DELETE /products/{pid}`.
#[derive(Debug, Serialize)]
pub struct ProductDeleted {
    pub message: &'static str,
    #[serde(rename = "productDeleted")]
    pub product_deleted: Product,
}

impl ProductDeleted {
    pub fn new(product: Product) -> Self {
        Self {
            message: "Product deleted successfully",
            product_deleted: product,
        }
    }
}

/// `PUT /products/{pid}`.
#[derive(Debug, Serialize)]
pub struct ProductUpdated {
    pub message: &'static str,
    #[serde(rename = "ProductUpdated")]
    pub product_updated: Product,
}

impl ProductUpdated {
    pub fn new(product: Product) -> Self {
        Self {
            message: "Product updated.",
            product_updated: product,
        }
    }
}
