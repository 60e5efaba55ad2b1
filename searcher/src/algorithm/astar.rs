//! A* search, and the cost-ordered search loop it shares with uniform cost search.

use std::collections::HashMap;

use num::Zero;

use super::trail::{PathId, Trail};
use super::{Expansions, SearchAlgorithm, Strategy};
use crate::errors::{Result, SearchError};
use crate::frontier::PriorityQueue;
use crate::traits::{Heuristic, SearchProblem, Successor};

/// Best-first search ordered by `cost so far + heuristic(state)`.
///
/// Each state's lowest known cost is recorded, and a successor is only
/// queued when it improves on that cost. A state may still sit in the
/// frontier several times; only its first (cheapest) pop is expanded.
pub(crate) fn best_first<P, H>(
    problem: &P,
    heuristic: &H,
    expansions: &mut Expansions<P::State>,
) -> Result<Vec<P::Action>>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    let start = problem.start();
    if problem.is_goal(&start) {
        return Ok(Vec::new());
    }

    let mut trail = Trail::new();
    let mut costs: HashMap<P::State, P::Cost> = HashMap::new();
    let mut frontier = PriorityQueue::new();

    costs.insert(start.clone(), P::Cost::zero());
    frontier.push((start, P::Cost::zero(), PathId::EMPTY), P::Cost::zero());

    while let Some((state, cost, path)) = frontier.pop() {
        if !expansions.visit(&state) {
            continue;
        }

        if problem.is_goal(&state) {
            return Ok(trail.actions(path));
        }

        for Successor {
            state: next,
            action,
            cost: step,
        } in expansions.expand(problem, &state, frontier.len())?
        {
            let next_cost = cost + step;
            if let Some(known) = costs.get(&next) {
                if *known <= next_cost {
                    continue;
                }
            }
            costs.insert(next.clone(), next_cost);

            let priority = next_cost + heuristic.estimate(&next, problem);
            let next_path = trail.extend(path, action);
            frontier.push((next, next_cost, next_path), priority);
        }
    }

    Err(SearchError::NoResultFound)
}

/// Expand the state with the lowest estimated total cost first.
#[derive(Debug, Default, Clone, Copy)]
pub struct AStar<H> {
    heuristic: H,
}

impl<H> AStar<H> {
    pub fn new(heuristic: H) -> Self {
        Self { heuristic }
    }
}

impl<P, H> Strategy<P> for AStar<H>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    fn name(&self) -> &'static str {
        "A*"
    }

    fn search(
        &self,
        problem: &P,
        expansions: &mut Expansions<P::State>,
    ) -> Result<Vec<P::Action>> {
        best_first(problem, &self.heuristic, expansions)
    }
}

pub type AStarSearcher<'p, P, H> = SearchAlgorithm<'p, P, AStar<H>>;

pub fn build<P, H>(problem: &P, heuristic: H) -> AStarSearcher<'_, P, H>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    SearchAlgorithm::new(problem, AStar::new(heuristic))
}

/// A* search.
///
/// `heuristic(state, problem)` estimates the remaining cost from `state` to
/// the nearest goal. Pass [crate::NullHeuristic] to search exactly as
/// uniform cost search does. The path found is the cheapest one only when
/// the heuristic never overestimates and is consistent; neither property
/// is checked here.
pub fn a_star_search<P, H>(problem: &P, heuristic: H) -> Vec<P::Action>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    build(problem, heuristic)
        .run()
        .map(|s| s.into_actions())
        .unwrap_or_default()
}
