//! Instance store.
//!
//! Parses the flat integer token format of a movie shoot scheduling
//! instance into an immutable [`Instance`]:
//!
//! 1. `nb_actors nb_scenes nb_locations nb_precedences`
//! 2. `actor_cost` (one per actor)
//! 3. `location_cost` (one per location)
//! 4. `scene_duration` (one per scene)
//! 5. `scene_location` (one per scene)
//! 6. actor-major presence table, `nb_actors x nb_scenes` 0/1 flags
//! 7. `nb_precedences` pairs `scene_a scene_b`
//!
//! Parsing is positional only. Extra tokens after the last section are
//! ignored.

mod config;
mod reader;
mod types;

pub use config::LoadConfig;
pub use reader::{resolve_path, TokenReader};
pub use types::Instance;
