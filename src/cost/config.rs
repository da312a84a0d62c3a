//! Cost evaluator configuration.

/// Configuration for [`CostEvaluator`](super::CostEvaluator).
///
/// # Examples
///
/// ```
/// use u_movieshoot::cost::EvaluatorConfig;
///
/// let config = EvaluatorConfig::default().with_check_permutation(true);
/// assert!(config.check_permutation);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EvaluatorConfig {
    /// Reject candidates that repeat a scene.
    ///
    /// Off by default: duplicated or missing scenes are evaluated as
    /// written, touching each listed scene once per occurrence.
    pub check_permutation: bool,

    /// Whether batch evaluation runs on rayon.
    ///
    /// Only effective with the `parallel` feature.
    pub parallel: bool,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            check_permutation: false,
            parallel: true,
        }
    }
}

impl EvaluatorConfig {
    /// Enables or disables rejecting candidates that repeat a scene.
    pub fn with_check_permutation(mut self, check: bool) -> Self {
        self.check_permutation = check;
        self
    }

    /// Enables or disables parallel batch evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
