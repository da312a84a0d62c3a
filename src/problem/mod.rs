//! Problem wrapper.
//!
//! [`ShootProblem`] is the contract a search procedure consumes: random
//! candidates and their cost. [`MovieShootProblem`] implements it on top of
//! the instance store and the cost evaluator.

mod movie_shoot;
mod random;
mod types;

pub use movie_shoot::MovieShootProblem;
pub use random::{create_rng, random_permutation};
pub use types::ShootProblem;
