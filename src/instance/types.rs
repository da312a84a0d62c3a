//! The immutable scheduling instance.

use super::config::LoadConfig;
use super::reader::{resolve_path, TokenReader};
use crate::error::MssError;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// A movie shoot scheduling instance.
///
/// Built once from a token source and read-only afterwards. The derived
/// `actor_nb_worked_days` is computed at construction and never changes.
///
/// Precedence pairs are parsed and kept but no computation in this crate
/// consults them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawInstance", into = "RawInstance")
)]
pub struct Instance {
    nb_actors: usize,
    nb_scenes: usize,
    nb_locations: usize,
    nb_precedences: usize,
    actor_cost: Vec<i64>,
    location_cost: Vec<i64>,
    scene_duration: Vec<i64>,
    scene_location: Vec<usize>,
    is_actor_in_scene: Vec<Vec<u8>>,
    precedences: Vec<(usize, usize)>,
    actor_nb_worked_days: Vec<i64>,
}

impl Instance {
    /// Builds an instance from its parts, deriving the counts from the
    /// sequence lengths.
    ///
    /// `is_actor_in_scene` must hold one row per actor, each of length
    /// `scene_duration.len()`.
    pub fn from_parts(
        actor_cost: Vec<i64>,
        location_cost: Vec<i64>,
        scene_duration: Vec<i64>,
        scene_location: Vec<usize>,
        is_actor_in_scene: Vec<Vec<u8>>,
        precedences: Vec<(usize, usize)>,
    ) -> Result<Self, MssError> {
        let nb_scenes = scene_duration.len();
        if scene_location.len() != nb_scenes {
            return Err(MssError::InvalidInstance(format!(
                "{} scene locations for {nb_scenes} scenes",
                scene_location.len()
            )));
        }
        if is_actor_in_scene.len() != actor_cost.len() {
            return Err(MssError::InvalidInstance(format!(
                "{} presence rows for {} actors",
                is_actor_in_scene.len(),
                actor_cost.len()
            )));
        }
        if let Some(row) = is_actor_in_scene.iter().find(|r| r.len() != nb_scenes) {
            return Err(MssError::InvalidInstance(format!(
                "presence row of length {} for {nb_scenes} scenes",
                row.len()
            )));
        }

        Ok(Self::assemble(
            actor_cost,
            location_cost,
            scene_duration,
            scene_location,
            is_actor_in_scene,
            precedences,
        ))
    }

    /// Loads an instance file with the default [`LoadConfig`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MssError> {
        Self::from_file_with(path, &LoadConfig::default())
    }

    /// Loads an instance file.
    ///
    /// Relative paths are resolved against `config.base_dir`.
    pub fn from_file_with(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Self, MssError> {
        let path = resolve_path(path, &config.base_dir);
        let text = std::fs::read_to_string(&path).map_err(|source| MssError::Io {
            path: path.clone(),
            source,
        })?;
        let instance = Self::parse(&text)?;
        if config.validate {
            instance.validate()?;
        }

        debug!(
            path = %path.display(),
            nb_actors = instance.nb_actors,
            nb_scenes = instance.nb_scenes,
            nb_locations = instance.nb_locations,
            nb_precedences = instance.nb_precedences,
            "loaded movie shoot instance"
        );
        Ok(instance)
    }

    /// Parses an in-memory token stream.
    pub fn parse(text: &str) -> Result<Self, MssError> {
        let mut reader = TokenReader::new(text);

        let nb_actors = reader.next_count("nb_actors")?;
        let nb_scenes = reader.next_count("nb_scenes")?;
        let nb_locations = reader.next_count("nb_locations")?;
        let nb_precedences = reader.next_count("nb_precedences")?;

        let actor_cost = reader.take_i64(nb_actors, "actor_cost")?;
        let location_cost = reader.take_i64(nb_locations, "location_cost")?;
        let scene_duration = reader.take_i64(nb_scenes, "scene_duration")?;
        let scene_location = reader.take_counts(nb_scenes, "scene_location")?;

        let is_actor_in_scene = (0..nb_actors)
            .map(|_| {
                (0..nb_scenes)
                    .map(|_| reader.next_i64("is_actor_in_scene").map(presence_flag))
                    .collect::<Result<Vec<u8>, MssError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        let precedences = (0..nb_precedences)
            .map(|_| {
                let a = reader.next_count("precedences")?;
                let b = reader.next_count("precedences")?;
                Ok((a, b))
            })
            .collect::<Result<Vec<_>, MssError>>()?;

        Ok(Self::assemble(
            actor_cost,
            location_cost,
            scene_duration,
            scene_location,
            is_actor_in_scene,
            precedences,
        ))
    }

    fn assemble(
        actor_cost: Vec<i64>,
        location_cost: Vec<i64>,
        scene_duration: Vec<i64>,
        scene_location: Vec<usize>,
        is_actor_in_scene: Vec<Vec<u8>>,
        precedences: Vec<(usize, usize)>,
    ) -> Self {
        let actor_nb_worked_days: Vec<i64> = is_actor_in_scene
            .iter()
            .map(|row| {
                row.iter()
                    .zip(&scene_duration)
                    .filter(|&(&present, _)| present != 0)
                    .fold(0i64, |days, (_, &duration)| days.saturating_add(duration))
            })
            .collect();

        Self {
            nb_actors: actor_cost.len(),
            nb_scenes: scene_duration.len(),
            nb_locations: location_cost.len(),
            nb_precedences: precedences.len(),
            actor_cost,
            location_cost,
            scene_duration,
            scene_location,
            is_actor_in_scene,
            precedences,
            actor_nb_worked_days,
        }
    }

    /// Checks the value ranges the parser accepts silently.
    ///
    /// Location indices must lie in `0..nb_locations`, presence flags in
    /// `{0, 1}`, durations must be positive, costs non-negative, and
    /// precedence endpoints valid scene indices.
    pub fn validate(&self) -> Result<(), MssError> {
        if let Some((s, &loc)) = self
            .scene_location
            .iter()
            .enumerate()
            .find(|&(_, &loc)| loc >= self.nb_locations)
        {
            return Err(MssError::InvalidInstance(format!(
                "scene {s} has location {loc}, expected < {}",
                self.nb_locations
            )));
        }
        if let Some((s, &d)) = self
            .scene_duration
            .iter()
            .enumerate()
            .find(|&(_, &d)| d <= 0)
        {
            return Err(MssError::InvalidInstance(format!(
                "scene {s} has non-positive duration {d}"
            )));
        }
        if let Some(a) = self.actor_cost.iter().position(|&c| c < 0) {
            return Err(MssError::InvalidInstance(format!(
                "actor {a} has negative cost"
            )));
        }
        if let Some(l) = self.location_cost.iter().position(|&c| c < 0) {
            return Err(MssError::InvalidInstance(format!(
                "location {l} has negative cost"
            )));
        }
        for (a, row) in self.is_actor_in_scene.iter().enumerate() {
            if let Some(s) = row.iter().position(|&flag| flag > 1) {
                return Err(MssError::InvalidInstance(format!(
                    "presence flag of actor {a} in scene {s} is not 0 or 1"
                )));
            }
        }
        if let Some(&(a, b)) = self
            .precedences
            .iter()
            .find(|&&(a, b)| a >= self.nb_scenes || b >= self.nb_scenes)
        {
            return Err(MssError::InvalidInstance(format!(
                "precedence ({a}, {b}) references a scene outside 0..{}",
                self.nb_scenes
            )));
        }
        Ok(())
    }

    pub fn nb_actors(&self) -> usize {
        self.nb_actors
    }

    pub fn nb_scenes(&self) -> usize {
        self.nb_scenes
    }

    pub fn nb_locations(&self) -> usize {
        self.nb_locations
    }

    pub fn nb_precedences(&self) -> usize {
        self.nb_precedences
    }

    /// Daily wage per actor.
    pub fn actor_cost(&self) -> &[i64] {
        &self.actor_cost
    }

    /// Cost of each extra visit, per location.
    pub fn location_cost(&self) -> &[i64] {
        &self.location_cost
    }

    pub fn scene_duration(&self) -> &[i64] {
        &self.scene_duration
    }

    pub fn scene_location(&self) -> &[usize] {
        &self.scene_location
    }

    /// Whether `actor` appears in `scene`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn is_actor_in_scene(&self, actor: usize, scene: usize) -> bool {
        self.is_actor_in_scene[actor][scene] != 0
    }

    /// The presence row of one actor, indexed by scene.
    pub fn presence(&self, actor: usize) -> &[u8] {
        &self.is_actor_in_scene[actor]
    }

    /// Parsed `(scene_a, scene_b)` pairs. Not used by cost evaluation.
    pub fn precedences(&self) -> &[(usize, usize)] {
        &self.precedences
    }

    /// Total days each actor appears on screen, summed over their scenes.
    pub fn actor_nb_worked_days(&self) -> &[i64] {
        &self.actor_nb_worked_days
    }
}

/// Serialized form of an [`Instance`]: the parsed sequences only.
///
/// Counts and worked days are derived again through
/// [`Instance::from_parts`] on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawInstance {
    actor_cost: Vec<i64>,
    location_cost: Vec<i64>,
    scene_duration: Vec<i64>,
    scene_location: Vec<usize>,
    is_actor_in_scene: Vec<Vec<u8>>,
    precedences: Vec<(usize, usize)>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInstance> for Instance {
    type Error = MssError;

    fn try_from(raw: RawInstance) -> Result<Self, Self::Error> {
        Self::from_parts(
            raw.actor_cost,
            raw.location_cost,
            raw.scene_duration,
            raw.scene_location,
            raw.is_actor_in_scene,
            raw.precedences,
        )
    }
}

#[cfg(feature = "serde")]
impl From<Instance> for RawInstance {
    fn from(inst: Instance) -> Self {
        Self {
            actor_cost: inst.actor_cost,
            location_cost: inst.location_cost,
            scene_duration: inst.scene_duration,
            scene_location: inst.scene_location,
            is_actor_in_scene: inst.is_actor_in_scene,
            precedences: inst.precedences,
        }
    }
}

/// Any non-zero value marks presence. Values other than 0 and 1 are kept
/// as 2 so that [`Instance::validate`] can still report them.
fn presence_flag(raw: i64) -> u8 {
    match raw {
        0 => 0,
        1 => 1,
        _ => 2,
    }
}

impl FromStr for Instance {
    type Err = MssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
