//! Cart Persistence
//!
//! The local key-value slot the cart saves itself into. The store writes its
//! lines (never the derived total, never the open/closed UI flag) after every
//! mutation, and reads them back once at construction time.
//!
//! Lines are wrapped in a versioned envelope so the layout can evolve without
//! silently corrupting saved carts. Carts written before the envelope existed
//! were a bare JSON array of lines; those still load.

use std::{
    cell::RefCell,
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lines::CartLine;

/// Current version of the persisted cart envelope.
pub const CART_SCHEMA_VERSION: u32 = 1;

/// Errors reading or writing the persisted cart.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying slot could not be read or written.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Stored payload was not valid cart JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Stored payload was written by an unknown schema version.
    #[error("unsupported cart schema version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Debug, Deserialize)]
struct PersistedCart {
    version: u32,
    lines: Vec<CartLine>,
}

#[derive(Debug, Serialize)]
struct PersistedCartRef<'a> {
    version: u32,
    lines: &'a [CartLine],
}

fn decode(raw: &str) -> Result<Vec<CartLine>, StorageError> {
    if let Ok(cart) = serde_json::from_str::<PersistedCart>(raw) {
        if cart.version == CART_SCHEMA_VERSION {
            return Ok(cart.lines);
        }
        return Err(StorageError::UnsupportedVersion(cart.version));
    }

    // Pre-envelope carts were stored as a bare array of lines.
    Ok(serde_json::from_str::<Vec<CartLine>>(raw)?)
}

fn encode(lines: &[CartLine]) -> Result<String, StorageError> {
    let envelope = PersistedCartRef {
        version: CART_SCHEMA_VERSION,
        lines,
    };

    Ok(serde_json::to_string(&envelope)?)
}

/// A slot the cart persists its lines into.
pub trait CartStorage {
    /// Read the saved lines, if any were ever saved.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot exists but cannot be read or
    /// decoded. The store treats this as "start empty", not as fatal.
    fn load(&self) -> Result<Option<Vec<CartLine>>, StorageError>;

    /// Replace the saved lines.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot cannot be written.
    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError>;
}

/// Cart storage backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Storage slot at the given file path. The file is created on first save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(error) => return Err(error.into()),
        };

        decode(&raw).map(Some)
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        fs::write(&self.path, encode(lines)?)?;

        Ok(())
    }
}

/// In-memory cart storage: one string slot, like a browser local-storage key.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: RefCell<Option<String>>,
}

impl MemoryStorage {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with a raw payload, useful for exercising the
    /// hydration paths with arbitrary (including malformed) content.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: RefCell::new(Some(raw.into())),
        }
    }

    /// The raw payload currently in the slot.
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> Result<Option<Vec<CartLine>>, StorageError> {
        match self.slot.borrow().as_deref() {
            Some(raw) => decode(raw).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, lines: &[CartLine]) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(encode(lines)?);

        Ok(())
    }
}
