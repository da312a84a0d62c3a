//! Core trait for shooting-order problems.

use rand::Rng;

/// Defines an optimization problem over shooting orders.
///
/// The wrapper exposes random candidate generation and cost evaluation,
/// the two operations a search procedure needs. Randomness is injected
/// so that callers control seeding.
///
/// # Minimization
///
/// Lower cost is better. Structurally invalid candidates evaluate to a
/// dominating sentinel rather than an error.
///
/// # Examples
///
/// ```
/// use rand::Rng;
/// use u_movieshoot::problem::ShootProblem;
///
/// struct Identity { n: usize }
///
/// impl ShootProblem for Identity {
///     type Solution = Vec<usize>;
///
///     fn random_solution<R: Rng>(&self, _rng: &mut R) -> Vec<usize> {
///         (0..self.n).collect()
///     }
///
///     fn evaluate(&self, order: &Vec<usize>) -> i64 {
///         order.iter().enumerate().filter(|&(i, &s)| i != s).count() as i64
///     }
/// }
/// ```
pub trait ShootProblem: Send + Sync {
    /// The candidate representation type.
    type Solution: Clone + Send;

    /// Creates a uniformly random candidate.
    fn random_solution<R: Rng>(&self, rng: &mut R) -> Self::Solution;

    /// Computes the cost of a candidate. Lower is better.
    fn evaluate(&self, solution: &Self::Solution) -> i64;
}
