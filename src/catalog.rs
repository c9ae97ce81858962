//! Storefront Catalogs
//!
//! The static product and sticker documents the storefront browses. The
//! cart core never fetches or validates these; it only receives
//! already-shaped candidates built from them. Filtering and sorting here
//! mirror the shop page: category filter, inclusive price range, and
//! name/price sort orders.

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use crate::lines::CartCandidate;

/// Errors decoding a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Document was not valid catalog JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A catalog product record.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Catalog id.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Current price per unit.
    pub price: Decimal,

    /// Category id this product belongs to.
    pub category: String,

    /// Display image.
    pub image: String,

    /// Whether the product is featured on the home page.
    #[serde(default)]
    pub featured: bool,

    /// Available sizes; only present on detail records.
    #[serde(default)]
    pub sizes: Vec<String>,

    /// Available colors; only present on detail records.
    #[serde(default)]
    pub colors: Vec<String>,

    /// Long-form description; only present on detail records.
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// Build a cart candidate from this product with the selected variants,
    /// snapshotting name, price and image at add-time.
    pub fn candidate(&self, size: Option<String>, color: Option<String>) -> CartCandidate {
        CartCandidate {
            product_id: self.id,
            name: self.name.clone(),
            unit_price: self.price,
            image_url: self.image.clone(),
            size,
            color,
            customization: None,
        }
    }
}

/// A product category record.
#[derive(Debug, Clone, Deserialize)]
pub struct Category {
    /// Category id, referenced by [`Product::category`].
    pub id: String,

    /// Display name.
    pub name: String,

    /// Display image.
    pub image: String,
}

/// The static product document: products plus their categories.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductCatalog {
    /// All products, in document order.
    pub products: Vec<Product>,

    /// All product categories.
    pub categories: Vec<Category>,
}

impl ProductCatalog {
    /// Decode a product document from JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the document does not parse.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Look up a product by id.
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Products flagged for the home page.
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.featured)
            .collect()
    }

    /// Minimum and maximum product price, used to seed the price slider.
    /// `None` when the catalog is empty.
    pub fn price_bounds(&self) -> Option<(Decimal, Decimal)> {
        let prices = || self.products.iter().map(|product| product.price);

        Some((prices().min()?, prices().max()?))
    }
}

/// Sort orders for the shop page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// Alphabetical by name, the default.
    #[default]
    Name,

    /// Cheapest first.
    PriceLowToHigh,

    /// Most expensive first.
    PriceHighToLow,
}

/// Shop-page product selection: optional category, optional inclusive price
/// range, and a sort order.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Keep only products in this category; `None` keeps all.
    pub category: Option<String>,

    /// Keep only products priced within this inclusive range.
    pub price_range: Option<(Decimal, Decimal)>,

    /// Order of the filtered results.
    pub sort: SortBy,
}

impl ProductFilter {
    /// Apply the filter and sort to `products`.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut filtered: Vec<&Product> = products
            .iter()
            .filter(|product| {
                self.category
                    .as_ref()
                    .is_none_or(|category| &product.category == category)
            })
            .filter(|product| {
                self.price_range
                    .is_none_or(|(min, max)| product.price >= min && product.price <= max)
            })
            .collect();

        match self.sort {
            SortBy::Name => filtered.sort_by(|a, b| a.name.cmp(&b.name)),
            SortBy::PriceLowToHigh => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
            SortBy::PriceHighToLow => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
        }

        filtered
    }
}

/// A sticker record from the customizer library.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Sticker {
    /// Catalog id.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Sticker category id.
    pub category: String,

    /// Display image.
    pub image: String,

    /// Price added to a design per placement.
    pub price: Decimal,

    /// Short description.
    pub description: String,
}

/// A sticker category record.
#[derive(Debug, Clone, Deserialize)]
pub struct StickerCategory {
    /// Category id, referenced by [`Sticker::category`].
    pub id: String,

    /// Display name.
    pub name: String,

    /// Accent color used by the library UI.
    pub color: String,
}

/// The static sticker document: stickers plus their categories.
#[derive(Debug, Clone, Deserialize)]
pub struct StickerLibrary {
    /// All stickers, in document order.
    pub stickers: Vec<Sticker>,

    /// All sticker categories.
    pub categories: Vec<StickerCategory>,
}

impl StickerLibrary {
    /// Decode a sticker document from JSON.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the document does not parse.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Stickers in the given category; `None` keeps all.
    pub fn in_category(&self, category: Option<&str>) -> Vec<&Sticker> {
        self.stickers
            .iter()
            .filter(|sticker| category.is_none_or(|category| sticker.category == category))
            .collect()
    }
}
