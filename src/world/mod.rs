mod loader;
mod model;
mod validator;

pub use loader::{load_world_from_files, load_world_from_str};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Direction, Inventory, Item, ItemLocation, Room, World, canonical_key};
pub use validator::{ValidationError, validate_world};
