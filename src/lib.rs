//! Movie shoot scheduling: instance loading and shooting-order cost
//! evaluation.
//!
//! A movie is shot as a sequence of scenes. Each scene has a duration in
//! days and a filming location; each actor appears in some scenes and is
//! paid a daily wage from their first to their last shooting day. Given a
//! candidate order, this crate computes:
//!
//! - **Location cost**: every return to a location already left costs
//!   that location's visit cost.
//! - **Actor cost**: every day an actor is paid without being on set costs
//!   that actor's daily wage.
//!
//! # Modules
//!
//! - [`instance`]: parses the flat integer instance format into an
//!   immutable [`Instance`](instance::Instance).
//! - [`cost`]: the [`CostEvaluator`](cost::CostEvaluator).
//! - [`problem`]: the [`ShootProblem`](problem::ShootProblem) contract and
//!   its [`MovieShootProblem`](problem::MovieShootProblem) implementation,
//!   for plugging into search procedures.
//!
//! # Architecture
//!
//! This crate evaluates candidates. It performs no search, and the
//! precedence pairs of an instance are parsed but never enforced.

pub mod cost;
pub mod error;
pub mod instance;
pub mod problem;

pub use error::MssError;
