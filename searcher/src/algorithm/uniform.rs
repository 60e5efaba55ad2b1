//! Uniform cost search

use super::astar::best_first;
use super::{Expansions, SearchAlgorithm, Strategy};
use crate::errors::Result;
use crate::traits::{NullHeuristic, SearchProblem};

/// Expand the state with the lowest accumulated path cost first.
///
/// Equal costs are expanded in the order they were discovered.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformCost;

impl<P> Strategy<P> for UniformCost
where
    P: SearchProblem,
{
    fn name(&self) -> &'static str {
        "uniform-cost"
    }

    fn search(
        &self,
        problem: &P,
        expansions: &mut Expansions<P::State>,
    ) -> Result<Vec<P::Action>> {
        best_first(problem, &NullHeuristic, expansions)
    }
}

/// Search algorithm which implements uniform cost search (Dijkstra's
/// algorithm, stopped at the first goal).
pub type UniformCostSearcher<'p, P> = SearchAlgorithm<'p, P, UniformCost>;

pub fn build<P>(problem: &P) -> UniformCostSearcher<'_, P>
where
    P: SearchProblem,
{
    SearchAlgorithm::new(problem, UniformCost)
}

/// Perform a uniform cost search.
///
/// Behaves like a breadth first search, but always expands the next
/// cheapest path even when step costs vary, so the path returned has the
/// lowest total cost of any path to a goal. Step costs must not be negative.
pub fn uniform_cost_search<P>(problem: &P) -> Vec<P::Action>
where
    P: SearchProblem,
{
    build(problem)
        .run()
        .map(|s| s.into_actions())
        .unwrap_or_default()
}
