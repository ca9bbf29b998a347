//! Product entity and the request shapes that create or modify it.

use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use thiserror::Error;

use crate::products::number;

/// Store-assigned product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

/// A path parameter that does not denote a product id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid product id")]
pub struct ParseProductIdError(pub String);

impl ProductId {
    /// Parse a raw path segment into an id.
    ///
    /// Surrounding whitespace is ignored and any finite, non-negative,
    /// integral decimal is accepted, so `"3"`, `" 3 "`, `"3.0"` and `"3e0"`
    /// all name product 3.
    pub fn parse(raw: &str) -> Result<Self, ParseProductIdError> {
        let trimmed = raw.trim();
        if let Ok(id) = trimmed.parse::<u64>() {
            return Ok(Self(id));
        }

        let invalid = || ParseProductIdError(raw.to_string());
        let value: f64 = trimmed.parse().map_err(|_| invalid())?;
        if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64 {
            Ok(Self(value as u64))
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    /// Kept exactly as the client sent it, so `2` echoes back as `2`.
    pub price: Number,
    /// Image URL or path.
    pub thumbnail: String,
    /// SKU.
    pub code: String,
    pub stock: u64,
}

/// Creation body as sent by the client, JSON or form-encoded. Every field
/// may be absent.
///
/// Unknown keys, including `id`, are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductDraft {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "number::price")]
    pub price: Option<Number>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "number::stock")]
    pub stock: Option<u64>,
}

impl ProductDraft {
    /// Presence check. Returns `None` when any field is missing or falsy:
    /// absent, `null`, an empty string, or the number zero.
    pub fn into_new_product(self) -> Option<NewProduct> {
        let price = self.price.filter(|p| p.as_f64() != Some(0.0))?;
        let stock = self.stock.filter(|s| *s != 0)?;

        Some(NewProduct {
            title: non_empty(self.title)?,
            description: non_empty(self.description)?,
            price,
            thumbnail: non_empty(self.thumbnail)?,
            code: non_empty(self.code)?,
            stock,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// A product that passed the presence check and awaits an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: Number,
    pub thumbnail: String,
    pub code: String,
    pub stock: u64,
}

impl NewProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            description: self.description,
            price: self.price,
            thumbnail: self.thumbnail,
            code: self.code,
            stock: self.stock,
        }
    }
}

/// Partial update. Absent fields are left untouched; `id` is never patched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "number::price")]
    pub price: Option<Number>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "number::stock")]
    pub stock: Option<u64>,
}

impl ProductPatch {
    /// A patch is valid when every provided string is non-empty and a
    /// provided price is finite and positive.
    pub fn is_valid(&self) -> bool {
        let strings = [&self.title, &self.description, &self.thumbnail, &self.code];
        if strings.iter().any(|s| s.as_deref() == Some("")) {
            return false;
        }
        match &self.price {
            Some(price) => price.as_f64().is_some_and(|p| p > 0.0),
            None => true,
        }
    }

    pub fn apply(&self, product: &mut Product) {
        if let Some(title) = &self.title {
            product.title = title.clone();
        }
        if let Some(description) = &self.description {
            product.description = description.clone();
        }
        if let Some(price) = &self.price {
            product.price = price.clone();
        }
        if let Some(thumbnail) = &self.thumbnail {
            product.thumbnail = thumbnail.clone();
        }
        if let Some(code) = &self.code {
            product.code = code.clone();
        }
        if let Some(stock) = self.stock {
            product.stock = stock;
        }
    }
}
