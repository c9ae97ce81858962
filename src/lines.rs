//! Cart Lines
//!
//! The data model for purchasable cart entries: [`CartLine`], the
//! quantity-less [`CartCandidate`] descriptor passed to
//! [`Cart::add_item`](crate::cart::Cart::add_item), and the [`LineKey`]
//! identity tuple that decides whether two additions merge into one line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sticker position on the customizer canvas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal offset from the canvas origin.
    pub x: f64,

    /// Vertical offset from the canvas origin.
    pub y: f64,
}

/// One applied decoration on a customized item.
///
/// Purely descriptive: entries are snapshots taken when the design was added
/// to the cart and are never re-validated against the sticker catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StickerEntry {
    /// Catalog id of the sticker.
    #[serde(rename = "id")]
    pub sticker_id: i64,

    /// Sticker name, shown in the checkout summary.
    pub name: String,

    /// Sticker price at the time the design was built.
    pub price: Decimal,

    /// Where the sticker was placed on the garment.
    pub position: Position,
}

/// Customizer output attached to a one-off cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    /// Applied stickers, in placement order.
    pub stickers: Vec<StickerEntry>,
}

/// Identity of a cart line: two additions are the same line iff product id,
/// size and color all match (absent size/color matches absent).
///
/// Customization content is deliberately not part of the key; see DESIGN.md.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LineKey {
    /// Catalog id, or the synthesized id of a one-off customized item.
    pub product_id: i64,

    /// Selected size variant, if any.
    pub size: Option<String>,

    /// Selected color variant, if any.
    pub color: Option<String>,
}

impl LineKey {
    /// Key for a line with no size/color variant selected.
    pub fn bare(product_id: i64) -> Self {
        Self {
            product_id,
            size: None,
            color: None,
        }
    }
}

/// A line descriptor without a quantity, as handed over by the UI layer.
///
/// Display data (`name`, `unit_price`, `image_url`) is copied at add-time;
/// later catalog changes do not affect lines already in the cart. This layer
/// performs no validation of the content.
#[derive(Debug, Clone, PartialEq)]
pub struct CartCandidate {
    /// Catalog id, or a synthesized timestamp id for customized items.
    pub product_id: i64,

    /// Display name.
    pub name: String,

    /// Price per unit, snapshot at add-time.
    pub unit_price: Decimal,

    /// Display image.
    pub image_url: String,

    /// Selected size variant, if any.
    pub size: Option<String>,

    /// Selected color variant, if any.
    pub color: Option<String>,

    /// Customizer output, for one-off designs.
    pub customization: Option<Customization>,
}

impl CartCandidate {
    /// The identity key this candidate would merge under.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id,
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }
}

/// One purchasable entry in the cart.
///
/// Serialized field names match the persisted layout: `id`, `name`, `price`,
/// `image`, `quantity`, `size`, `color`, `customization`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog id, or a synthesized timestamp id for customized items.
    #[serde(rename = "id")]
    pub product_id: i64,

    /// Display name.
    pub name: String,

    /// Price per unit, snapshot at add-time.
    #[serde(rename = "price")]
    pub unit_price: Decimal,

    /// Display image.
    #[serde(rename = "image")]
    pub image_url: String,

    /// Units of this line; at least 1 while the line exists.
    pub quantity: u32,

    /// Selected size variant, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Selected color variant, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Customizer output, for one-off designs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<Customization>,
}

impl CartLine {
    /// The identity key of this line.
    pub fn key(&self) -> LineKey {
        LineKey {
            product_id: self.product_id,
            size: self.size.clone(),
            color: self.color.clone(),
        }
    }

    /// Whether this line is identified by `key`.
    pub fn matches(&self, key: &LineKey) -> bool {
        self.product_id == key.product_id && self.size == key.size && self.color == key.color
    }

    /// Price of the whole line: unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}

impl From<CartCandidate> for CartLine {
    /// A fresh line always starts at quantity 1.
    fn from(candidate: CartCandidate) -> Self {
        Self {
            product_id: candidate.product_id,
            name: candidate.name,
            unit_price: candidate.unit_price,
            image_url: candidate.image_url,
            quantity: 1,
            size: candidate.size,
            color: candidate.color,
            customization: candidate.customization,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn tee_candidate() -> CartCandidate {
        CartCandidate {
            product_id: 1,
            name: "Tee".to_string(),
            unit_price: Decimal::new(2000, 2),
            image_url: "x".to_string(),
            size: Some("M".to_string()),
            color: None,
            customization: None,
        }
    }

    #[test]
    fn candidate_becomes_line_with_quantity_one() {
        let line = CartLine::from(tee_candidate());

        assert_eq!(line.quantity, 1);
        assert_eq!(line.name, "Tee");
        assert_eq!(line.subtotal(), Decimal::new(2000, 2));
    }

    #[test]
    fn subtotal_scales_with_quantity() {
        let mut line = CartLine::from(tee_candidate());
        line.quantity = 3;

        assert_eq!(line.subtotal(), Decimal::new(6000, 2));
    }

    #[test]
    fn matches_requires_all_three_key_fields() {
        let line = CartLine::from(tee_candidate());

        assert!(line.matches(&tee_candidate().key()));
        assert!(!line.matches(&LineKey::bare(1)));
        assert!(!line.matches(&LineKey {
            product_id: 1,
            size: Some("L".to_string()),
            color: None,
        }));
        assert!(!line.matches(&LineKey {
            product_id: 2,
            size: Some("M".to_string()),
            color: None,
        }));
    }

    #[test]
    fn absent_variants_match_absent() {
        let mut candidate = tee_candidate();
        candidate.size = None;
        let line = CartLine::from(candidate);

        assert!(line.matches(&LineKey::bare(1)));
    }
}
