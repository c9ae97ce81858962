//! OODD prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, cart_total},
    catalog::{
        CatalogError, Category, Product, ProductCatalog, ProductFilter, SortBy, Sticker,
        StickerCategory, StickerLibrary,
    },
    checkout::{ORDER_CONTACT, checkout_message, checkout_url, rupees},
    customizer::{
        BASE_TSHIRT_PRICE, DEFAULT_STICKER_POSITION, PlacedSticker, TshirtDesign, timestamp_id,
    },
    lines::{CartCandidate, CartLine, Customization, LineKey, Position, StickerEntry},
    notify::{CartNotice, CartNotifier, NoopNotifier, RecordingNotifier},
    persist::{CART_SCHEMA_VERSION, CartStorage, JsonFileStorage, MemoryStorage, StorageError},
};
