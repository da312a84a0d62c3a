//! Location and actor cost computation.

use super::config::EvaluatorConfig;
use crate::instance::Instance;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::trace;

/// Cost returned for candidates that cannot be evaluated.
///
/// Dominates every real cost so that search procedures treat such
/// candidates as the worst possible.
pub const INFEASIBLE_COST: i64 = i64::MAX;

/// The two components of an order's cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CostBreakdown {
    /// Extra-visit charges over all locations.
    pub location: i64,
    /// Idle-day wages over all actors.
    pub actor: i64,
}

impl CostBreakdown {
    /// Sum of both components.
    ///
    /// Saturates one below [`INFEASIBLE_COST`], so a real cost never
    /// compares equal to the sentinel.
    pub fn total(&self) -> i64 {
        self.location
            .saturating_add(self.actor)
            .min(INFEASIBLE_COST - 1)
    }
}

/// Evaluates candidate shooting orders against an [`Instance`].
///
/// Holds no mutable state; scratch buffers are local to each call, so one
/// evaluator can be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct CostEvaluator<'a> {
    instance: &'a Instance,
    config: EvaluatorConfig,
}

impl<'a> CostEvaluator<'a> {
    pub fn new(instance: &'a Instance) -> Self {
        Self::with_config(instance, EvaluatorConfig::default())
    }

    pub fn with_config(instance: &'a Instance, config: EvaluatorConfig) -> Self {
        Self { instance, config }
    }

    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Total cost of `order`, or [`INFEASIBLE_COST`].
    ///
    /// The sentinel is returned when `order.len() != nb_scenes`, when a
    /// scene index or its location is out of range, and, if
    /// [`EvaluatorConfig::check_permutation`] is set, when a scene repeats.
    /// Otherwise duplicates and omissions are evaluated as written.
    pub fn evaluate(&self, order: &[usize]) -> i64 {
        match self.breakdown(order) {
            Some(cost) => {
                trace!(
                    location = cost.location,
                    actor = cost.actor,
                    "evaluated shooting order"
                );
                cost.total()
            }
            None => INFEASIBLE_COST,
        }
    }

    /// Both cost components of `order`, or `None` where [`evaluate`]
    /// would return the sentinel.
    ///
    /// [`evaluate`]: CostEvaluator::evaluate
    pub fn breakdown(&self, order: &[usize]) -> Option<CostBreakdown> {
        if !self.is_evaluable(order) {
            return None;
        }
        Some(CostBreakdown {
            location: self.location_cost(order),
            actor: self.actor_cost(order),
        })
    }

    /// Evaluates a batch of candidates, in parallel when enabled.
    pub fn evaluate_batch(&self, orders: &[Vec<usize>]) -> Vec<i64> {
        #[cfg(feature = "parallel")]
        if self.config.parallel {
            return orders.par_iter().map(|order| self.evaluate(order)).collect();
        }
        orders.iter().map(|order| self.evaluate(order)).collect()
    }

    fn is_evaluable(&self, order: &[usize]) -> bool {
        let inst = self.instance;
        if order.len() != inst.nb_scenes() {
            return false;
        }
        let in_range = order.iter().all(|&scene| {
            scene < inst.nb_scenes() && inst.scene_location()[scene] < inst.nb_locations()
        });
        if !in_range {
            return false;
        }
        if self.config.check_permutation {
            let mut seen = vec![false; inst.nb_scenes()];
            for &scene in order {
                if std::mem::replace(&mut seen[scene], true) {
                    return false;
                }
            }
        }
        true
    }

    /// Charges every visit to a location after the first one.
    ///
    /// A visit starts whenever the location differs from the previous
    /// scene's. Unvisited locations contribute nothing. Arithmetic
    /// saturates at the `i64` bounds.
    ///
    /// # Panics
    ///
    /// Panics if `order` references a scene or location out of range.
    pub fn location_cost(&self, order: &[usize]) -> i64 {
        let inst = self.instance;
        let mut visits = vec![0i64; inst.nb_locations()];
        let mut previous = None;

        for &scene in order {
            let location = inst.scene_location()[scene];
            if previous != Some(location) {
                visits[location] += 1;
                previous = Some(location);
            }
        }

        inst.location_cost()
            .iter()
            .zip(&visits)
            .map(|(&cost, &n)| cost.saturating_mul((n - 1).max(0)))
            .fold(0, i64::saturating_add)
    }

    /// Wages paid for days an actor waits between their scenes.
    ///
    /// Scenes occupy consecutive day blocks from day 0. An actor is paid
    /// from the start of their first scene to the end of their last one.
    /// An actor who appears in no scene keeps first and last day 0, and is
    /// therefore charged one day: exactly `actor_cost[a]`. Day counters and
    /// wages saturate at the `i64` bounds.
    ///
    /// # Panics
    ///
    /// Panics if `order` references a scene out of range.
    pub fn actor_cost(&self, order: &[usize]) -> i64 {
        let inst = self.instance;
        let nb_actors = inst.nb_actors();
        let mut first_day: Vec<Option<i64>> = vec![None; nb_actors];
        let mut last_day = vec![0i64; nb_actors];

        let mut start_day = 0i64;
        for &scene in order {
            let end_day = start_day
                .saturating_add(inst.scene_duration()[scene])
                .saturating_sub(1);
            for actor in 0..nb_actors {
                if inst.presence(actor)[scene] != 0 {
                    last_day[actor] = end_day;
                    first_day[actor].get_or_insert(start_day);
                }
            }
            start_day = end_day.saturating_add(1);
        }

        (0..nb_actors)
            .map(|a| {
                let paid_days = last_day[a]
                    .saturating_sub(first_day[a].unwrap_or(0))
                    .saturating_add(1);
                paid_days
                    .saturating_sub(inst.actor_nb_worked_days()[a])
                    .saturating_mul(inst.actor_cost()[a])
            })
            .fold(0, i64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2 actors (10, 5), 3 scenes (1, 2, 1 days), 2 locations (100, 50).
    /// Scenes 0 and 1 at location 0, scene 2 at location 1.
    /// Actor 0 in scenes {0, 2}, actor 1 in scene {1}.
    fn sample() -> Instance {
        Instance::from_parts(
            vec![10, 5],
            vec![100, 50],
            vec![1, 2, 1],
            vec![0, 0, 1],
            vec![vec![1, 0, 1], vec![0, 1, 0]],
            vec![],
        )
        .unwrap()
    }

    #[test]
    fn test_sample_order() {
        let inst = sample();
        let eval = CostEvaluator::new(&inst);
        assert_eq!(eval.location_cost(&[0, 1, 2]), 0);
        assert_eq!(eval.actor_cost(&[0, 1, 2]), 20);
        assert_eq!(eval.evaluate(&[0, 1, 2]), 20);
    }

    #[test]
    fn test_revisit_charged() {
        let inst = sample();
        let eval = CostEvaluator::new(&inst);
        // loc0, loc1, loc0: one extra visit of location 0
        assert_eq!(eval.location_cost(&[0, 2, 1]), 100);
        // actor 0: days 0..1, paid 2 = worked 2; actor 1: days 2..3, paid 2
        assert_eq!(eval.actor_cost(&[0, 2, 1]), 0);
        assert_eq!(eval.evaluate(&[0, 2, 1]), 100);
    }

    #[test]
    fn test_breakdown() {
        let inst = sample();
        let eval = CostEvaluator::new(&inst);
        let cost = eval.breakdown(&[2, 1, 0]).unwrap();
        // loc1 then loc0: one visit each
        assert_eq!(cost.location, 0);
        // actor 0: scene 2 day 0, scene 0 day 3 -> paid 4, worked 2
        assert_eq!(cost.actor, 20);
        assert_eq!(cost.total(), eval.evaluate(&[2, 1, 0]));
    }

    #[test]
    fn test_wrong_length_is_infeasible() {
        let inst = sample();
        let eval = CostEvaluator::new(&inst);
        assert_eq!(eval.evaluate(&[0, 1]), INFEASIBLE_COST);
        assert_eq!(eval.evaluate(&[0, 1, 2, 0]), INFEASIBLE_COST);
        assert_eq!(eval.evaluate(&[]), INFEASIBLE_COST);
        assert!(eval.breakdown(&[0]).is_none());
    }

    #[test]
    fn test_out_of_range_scene_is_infeasible() {
        let inst = sample();
        let eval = CostEvaluator::new(&inst);
        assert_eq!(eval.evaluate(&[0, 1, 3]), INFEASIBLE_COST);
    }

    #[test]
    fn test_out_of_range_location_is_infeasible() {
        let inst = Instance::from_parts(vec![1], vec![5], vec![1], vec![4], vec![vec![1]], vec![])
            .unwrap();
        let eval = CostEvaluator::new(&inst);
        assert_eq!(eval.evaluate(&[0]), INFEASIBLE_COST);
    }

    #[test]
    fn test_duplicates_evaluated_by_default() {
        let inst = sample();
        let eval = CostEvaluator::new(&inst);
        // scene 2 skipped, scene 0 shot twice: loc0 once, location cost 0.
        // actor 0: days 0 and 3 -> paid 4, worked 2 -> 20
        // actor 1: days 1..2 -> paid 2, worked 2 -> 0
        assert_eq!(eval.evaluate(&[0, 1, 0]), 20);
    }

    #[test]
    fn test_duplicates_rejected_when_checked() {
        let inst = sample();
        let eval = CostEvaluator::with_config(
            &inst,
            EvaluatorConfig::default().with_check_permutation(true),
        );
        assert_eq!(eval.evaluate(&[0, 1, 0]), INFEASIBLE_COST);
        assert_eq!(eval.evaluate(&[0, 1, 2]), 20);
    }

    #[test]
    fn test_absent_actor_charged_one_day() {
        let inst = Instance::from_parts(
            vec![7, 3],
            vec![0],
            vec![2, 3],
            vec![0, 0],
            vec![vec![1, 1], vec![0, 0]],
            vec![],
        )
        .unwrap();
        let eval = CostEvaluator::new(&inst);
        assert_eq!(eval.actor_cost(&[0, 1]), 3);
        assert_eq!(eval.actor_cost(&[1, 0]), 3);
    }

    #[test]
    fn test_unvisited_location_contributes_zero() {
        let inst = Instance::from_parts(
            vec![],
            vec![10, 999],
            vec![1, 1],
            vec![0, 0],
            vec![],
            vec![],
        )
        .unwrap();
        let eval = CostEvaluator::new(&inst);
        assert_eq!(eval.location_cost(&[0, 1]), 0);
    }

    #[test]
    fn test_empty_instance() {
        let inst = Instance::from_parts(vec![], vec![], vec![], vec![], vec![], vec![]).unwrap();
        let eval = CostEvaluator::new(&inst);
        assert_eq!(eval.evaluate(&[]), 0);
    }

    #[test]
    fn test_huge_wage_saturates_below_sentinel() {
        let wage = i64::MAX / 2 + 1;
        let inst = Instance::from_parts(
            vec![wage],
            vec![0],
            vec![1, 2, 1],
            vec![0, 0, 0],
            vec![vec![1, 0, 1]],
            vec![],
        )
        .unwrap();
        let eval = CostEvaluator::new(&inst);
        // paid 4 days, worked 2: 2 * wage overflows
        assert_eq!(eval.actor_cost(&[0, 1, 2]), i64::MAX);
        assert_eq!(eval.evaluate(&[0, 1, 2]), INFEASIBLE_COST - 1);
        assert_eq!(eval.actor_cost(&[0, 2, 1]), 0);
    }

    #[test]
    fn test_huge_location_cost_saturates() {
        let inst = Instance::from_parts(
            vec![],
            vec![i64::MAX, i64::MAX],
            vec![1; 4],
            vec![0, 1, 0, 1],
            vec![],
            vec![],
        )
        .unwrap();
        let eval = CostEvaluator::new(&inst);
        assert_eq!(eval.location_cost(&[0, 1, 2, 3]), i64::MAX);
        assert_eq!(eval.evaluate(&[0, 1, 2, 3]), INFEASIBLE_COST - 1);
    }

    #[test]
    fn test_huge_durations_do_not_panic() {
        let inst = Instance::from_parts(
            vec![1],
            vec![0],
            vec![i64::MAX, i64::MAX, 1],
            vec![0, 0, 0],
            vec![vec![1, 0, 1]],
            vec![],
        )
        .unwrap();
        let eval = CostEvaluator::new(&inst);
        assert!(eval.evaluate(&[0, 1, 2]) < INFEASIBLE_COST);
    }

    #[test]
    fn test_batch_matches_single() {
        let inst = sample();
        let orders = vec![vec![0, 1, 2], vec![0, 2, 1], vec![1], vec![2, 1, 0]];
        for parallel in [false, true] {
            let eval = CostEvaluator::with_config(
                &inst,
                EvaluatorConfig::default().with_parallel(parallel),
            );
            let costs = eval.evaluate_batch(&orders);
            let expected: Vec<i64> = orders.iter().map(|o| eval.evaluate(o)).collect();
            assert_eq!(costs, expected);
            assert_eq!(costs, vec![20, 100, INFEASIBLE_COST, 20]);
        }
    }
}
