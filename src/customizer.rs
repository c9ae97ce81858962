//! T-Shirt Customizer
//!
//! Design state for the drag-and-place sticker canvas: stickers are placed
//! at a default spot, moved around, and removed; the design price is the
//! base garment price plus every placed sticker. A finished design converts
//! into a one-off [`CartCandidate`] carrying the placements as descriptive
//! customization data.

use std::time::{SystemTime, UNIX_EPOCH};

use rust_decimal::Decimal;

use crate::{
    catalog::Sticker,
    lines::{CartCandidate, Customization, Position, StickerEntry},
};

/// Base price of the customizable t-shirt.
pub const BASE_TSHIRT_PRICE: Decimal = Decimal::from_parts(2999, 0, 0, false, 2);

/// Where a freshly placed sticker lands on the canvas.
pub const DEFAULT_STICKER_POSITION: Position = Position { x: 150.0, y: 150.0 };

/// A synthesized product id for one-off items: milliseconds since the epoch.
pub fn timestamp_id() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}

/// One sticker placed on the design canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSticker {
    id: u64,
    sticker: Sticker,
    position: Position,
    scale: f64,
}

impl PlacedSticker {
    /// Placement id, unique within one design.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The placed sticker record.
    pub fn sticker(&self) -> &Sticker {
        &self.sticker
    }

    /// Current canvas position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Render scale of the placement.
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

/// An in-progress custom t-shirt design.
#[derive(Debug)]
pub struct TshirtDesign {
    size: String,
    color: String,
    placed: Vec<PlacedSticker>,
    next_placement: u64,
}

impl TshirtDesign {
    /// Start a design for the given garment variant.
    pub fn new(size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            size: size.into(),
            color: color.into(),
            placed: Vec::new(),
            next_placement: 0,
        }
    }

    /// Selected garment size.
    pub fn size(&self) -> &str {
        &self.size
    }

    /// Selected garment color.
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Change the garment variant without touching the placements.
    pub fn set_variant(&mut self, size: impl Into<String>, color: impl Into<String>) {
        self.size = size.into();
        self.color = color.into();
    }

    /// Place `sticker` at the default position and return its placement id.
    pub fn place_sticker(&mut self, sticker: Sticker) -> u64 {
        let id = self.next_placement;
        self.next_placement += 1;

        self.placed.push(PlacedSticker {
            id,
            sticker,
            position: DEFAULT_STICKER_POSITION,
            scale: 1.0,
        });

        id
    }

    /// Move the placement with the given id; a miss is a no-op.
    pub fn move_sticker(&mut self, id: u64, position: Position) {
        if let Some(placed) = self.placed.iter_mut().find(|placed| placed.id == id) {
            placed.position = position;
        }
    }

    /// Resize the placement with the given id; a miss is a no-op.
    pub fn scale_sticker(&mut self, id: u64, scale: f64) {
        if let Some(placed) = self.placed.iter_mut().find(|placed| placed.id == id) {
            placed.scale = scale;
        }
    }

    /// Remove the placement with the given id; a miss is a no-op.
    pub fn remove_sticker(&mut self, id: u64) {
        self.placed.retain(|placed| placed.id != id);
    }

    /// Placements in the order they were added.
    pub fn stickers(&self) -> &[PlacedSticker] {
        &self.placed
    }

    /// Design price: base garment price plus every placed sticker.
    pub fn total(&self) -> Decimal {
        BASE_TSHIRT_PRICE
            + self
                .placed
                .iter()
                .map(|placed| placed.sticker.price)
                .sum::<Decimal>()
    }

    /// Convert the design into a one-off cart candidate under `product_id`
    /// (normally a [`timestamp_id`]). Placements become descriptive
    /// [`Customization`] entries; the design itself is left untouched.
    pub fn candidate(&self, product_id: i64) -> CartCandidate {
        let count = self.placed.len();
        let plural = if count == 1 { "" } else { "s" };

        CartCandidate {
            product_id,
            name: format!("Custom T-Shirt with {count} sticker{plural}"),
            unit_price: self.total(),
            image_url: "/placeholder.svg".to_string(),
            size: Some(self.size.clone()),
            color: Some(self.color.clone()),
            customization: Some(Customization {
                stickers: self
                    .placed
                    .iter()
                    .map(|placed| StickerEntry {
                        sticker_id: placed.sticker.id,
                        name: placed.sticker.name.clone(),
                        price: placed.sticker.price,
                        position: placed.position,
                    })
                    .collect(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flame() -> Sticker {
        Sticker {
            id: 7,
            name: "Flame".to_string(),
            category: "fire".to_string(),
            image: "/flame.png".to_string(),
            price: Decimal::from(3),
            description: "A flame.".to_string(),
        }
    }

    fn skull() -> Sticker {
        Sticker {
            id: 9,
            name: "Skull".to_string(),
            category: "dark".to_string(),
            image: "/skull.png".to_string(),
            price: Decimal::new(450, 2),
            description: "A skull.".to_string(),
        }
    }

    #[test]
    fn bare_design_costs_the_base_price() {
        let design = TshirtDesign::new("M", "white");

        assert_eq!(design.total(), Decimal::new(2999, 2));
        assert!(design.stickers().is_empty());
    }

    #[test]
    fn placements_add_their_price_and_land_at_the_default_spot() {
        let mut design = TshirtDesign::new("M", "white");

        design.place_sticker(flame());
        design.place_sticker(skull());

        assert_eq!(design.total(), Decimal::new(3749, 2));
        assert_eq!(
            design.stickers().first().map(PlacedSticker::position),
            Some(DEFAULT_STICKER_POSITION)
        );
    }

    #[test]
    fn placements_get_distinct_ids_and_move_independently() {
        let mut design = TshirtDesign::new("M", "white");

        let first = design.place_sticker(flame());
        let second = design.place_sticker(flame());
        assert_ne!(first, second, "placement ids must be unique");

        design.move_sticker(second, Position { x: 10.0, y: 40.0 });

        let positions: Vec<_> = design
            .stickers()
            .iter()
            .map(PlacedSticker::position)
            .collect();
        assert_eq!(
            positions,
            [DEFAULT_STICKER_POSITION, Position { x: 10.0, y: 40.0 }]
        );
    }

    #[test]
    fn removing_a_placement_drops_its_price() {
        let mut design = TshirtDesign::new("M", "white");

        let id = design.place_sticker(skull());
        design.place_sticker(flame());
        design.remove_sticker(id);

        assert_eq!(design.stickers().len(), 1);
        assert_eq!(design.total(), BASE_TSHIRT_PRICE + Decimal::from(3));
    }

    #[test]
    fn resizing_a_placement_changes_only_its_scale() {
        let mut design = TshirtDesign::new("M", "white");
        design.place_sticker(flame());
        let second = design.place_sticker(skull());

        design.scale_sticker(second, 1.5);

        let scales: Vec<_> = design.stickers().iter().map(PlacedSticker::scale).collect();
        assert_eq!(scales, [1.0, 1.5]);
        assert_eq!(
            design.total(),
            Decimal::new(3749, 2),
            "resizing must not affect the price"
        );
    }

    #[test]
    fn moving_or_removing_a_missing_placement_is_a_noop() {
        let mut design = TshirtDesign::new("M", "white");
        design.place_sticker(flame());

        design.move_sticker(99, Position { x: 1.0, y: 2.0 });
        design.scale_sticker(99, 2.0);
        design.remove_sticker(99);

        assert_eq!(design.stickers().len(), 1);
        assert_eq!(
            design.stickers().first().map(PlacedSticker::position),
            Some(DEFAULT_STICKER_POSITION)
        );
        let scales: Vec<_> = design.stickers().iter().map(PlacedSticker::scale).collect();
        assert_eq!(scales, [1.0]);
    }

    #[test]
    fn candidate_carries_the_design_as_customization() {
        let mut design = TshirtDesign::new("L", "black");
        design.place_sticker(flame());
        let id = design.place_sticker(skull());
        design.move_sticker(id, Position { x: 80.0, y: 120.0 });

        let candidate = design.candidate(1_700_000_000_000);

        assert_eq!(candidate.product_id, 1_700_000_000_000);
        assert_eq!(candidate.name, "Custom T-Shirt with 2 stickers");
        assert_eq!(candidate.unit_price, Decimal::new(3749, 2));
        assert_eq!(candidate.size.as_deref(), Some("L"));
        assert_eq!(candidate.color.as_deref(), Some("black"));

        let customization = candidate.customization.as_ref();
        let stickers = customization.map(|c| c.stickers.as_slice()).unwrap_or(&[]);
        assert_eq!(stickers.len(), 2);
        assert_eq!(
            stickers.last().map(|entry| entry.position),
            Some(Position { x: 80.0, y: 120.0 })
        );
    }

    #[test]
    fn single_sticker_name_is_singular() {
        let mut design = TshirtDesign::new("M", "white");
        design.place_sticker(flame());

        assert_eq!(
            design.candidate(1).name,
            "Custom T-Shirt with 1 sticker"
        );
    }

    #[test]
    fn timestamp_ids_are_plausible_epoch_millis() {
        let id = timestamp_id();

        // 2020-01-01 in epoch milliseconds.
        assert!(id > 1_577_836_800_000, "unexpectedly small id: {id}");
    }
}
