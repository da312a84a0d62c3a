//! The movie shoot scheduling problem.

use super::random::random_permutation;
use super::types::ShootProblem;
use crate::cost::{CostEvaluator, EvaluatorConfig};
use crate::error::MssError;
use crate::instance::{Instance, LoadConfig};
use rand::Rng;
use std::path::Path;

/// Movie shoot scheduling over an owned [`Instance`].
///
/// A solution is a shooting order: a sequence of scene indices, intended
/// to be a permutation of `0..nb_scenes`. Its cost is the location
/// revisit cost plus the actor idle-day cost.
///
/// # Examples
///
/// ```
/// use u_movieshoot::instance::Instance;
/// use u_movieshoot::problem::{create_rng, MovieShootProblem, ShootProblem};
///
/// let instance: Instance = "1 2 1 0  4  0  1 1  0 0  1 1".parse().unwrap();
/// let problem = MovieShootProblem::new(instance);
///
/// let order = problem.random_solution(&mut create_rng(42));
/// assert_eq!(order.len(), 2);
/// assert_eq!(problem.evaluate(&order), 0);
/// ```
#[derive(Debug, Clone)]
pub struct MovieShootProblem {
    instance: Instance,
    config: EvaluatorConfig,
}

impl MovieShootProblem {
    pub fn new(instance: Instance) -> Self {
        Self::with_config(instance, EvaluatorConfig::default())
    }

    pub fn with_config(instance: Instance, config: EvaluatorConfig) -> Self {
        Self { instance, config }
    }

    /// Loads the instance file at `path`.
    ///
    /// Relative paths resolve against the crate's install location.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, MssError> {
        Ok(Self::new(Instance::from_file(path)?))
    }

    pub fn from_file_with(path: impl AsRef<Path>, config: &LoadConfig) -> Result<Self, MssError> {
        Ok(Self::new(Instance::from_file_with(path, config)?))
    }

    pub fn instance(&self) -> &Instance {
        &self.instance
    }

    pub fn evaluator(&self) -> CostEvaluator<'_> {
        CostEvaluator::with_config(&self.instance, self.config)
    }
}

impl ShootProblem for MovieShootProblem {
    type Solution = Vec<usize>;

    fn random_solution<R: Rng>(&self, rng: &mut R) -> Vec<usize> {
        random_permutation(self.instance.nb_scenes(), rng)
    }

    fn evaluate(&self, order: &Vec<usize>) -> i64 {
        self.evaluator().evaluate(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::INFEASIBLE_COST;
    use crate::problem::create_rng;

    fn sample() -> MovieShootProblem {
        let text = "2 3 2 0  10 5  100 50  1 2 1  0 0 1  1 0 1  0 1 0";
        MovieShootProblem::new(text.parse().unwrap())
    }

    #[test]
    fn test_evaluate_sample() {
        let problem = sample();
        assert_eq!(problem.evaluate(&vec![0, 1, 2]), 20);
        assert_eq!(problem.evaluate(&vec![2, 0]), INFEASIBLE_COST);
    }

    #[test]
    fn test_random_solution_is_permutation() {
        let problem = sample();
        let mut rng = create_rng(3);
        for _ in 0..20 {
            let mut order = problem.random_solution(&mut rng);
            assert_ne!(problem.evaluate(&order), INFEASIBLE_COST);
            order.sort_unstable();
            assert_eq!(order, vec![0, 1, 2]);
        }
    }

    #[test]
    fn test_config_is_forwarded() {
        let problem = MovieShootProblem::with_config(
            sample().instance().clone(),
            EvaluatorConfig::default().with_check_permutation(true),
        );
        assert!(problem.evaluator().config().check_permutation);
        assert_eq!(problem.evaluate(&vec![0, 0, 2]), INFEASIBLE_COST);
    }

    #[test]
    fn test_from_file_missing() {
        assert!(matches!(
            MovieShootProblem::from_file("no/such/instance.txt"),
            Err(MssError::Io { .. })
        ));
    }
}
