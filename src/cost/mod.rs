//! Shooting-order cost evaluation.
//!
//! The cost of a candidate order is the sum of two parts:
//!
//! - **Location cost**: walking the order, each change of location counts
//!   as a visit. The first visit of a location is free; every later visit
//!   is charged that location's cost. Consecutive scenes at one location
//!   are a single visit.
//! - **Actor cost**: scenes are shot back to back from day 0. Each actor is
//!   paid from the first day of their first scene to the last day of their
//!   last scene. Days paid beyond the actor's own scene days are charged at
//!   the actor's daily wage.
//!
//! Candidates of the wrong length, or referencing scenes or locations that
//! do not exist, receive [`INFEASIBLE_COST`] instead of an error.

mod config;
mod evaluator;

pub use config::EvaluatorConfig;
pub use evaluator::{CostBreakdown, CostEvaluator, INFEASIBLE_COST};
