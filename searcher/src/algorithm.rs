//! Provides the building blocks for search algorithms

use std::collections::HashSet;
use std::default::Default;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::{Duration, Instant};

use log::{debug, trace};

use crate::errors::{Result, SearchError};
use crate::traits::{SearchProblem, Successor};

pub mod astar;
pub mod basic;
mod trail;
pub mod uniform;

/// Knobs shared by every search algorithm.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Give up after expanding this many states.
    pub step_limit: Option<usize>,

    /// Give up once the search has run for this long.
    pub time_limit: Option<Duration>,

    /// Log a progress line every this many expansions.
    pub progress: Option<usize>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            step_limit: None,
            time_limit: None,
            progress: Some(10_000),
        }
    }
}

#[derive(Debug)]
struct StepLimit {
    current: usize,
    maximum: usize,
}

impl StepLimit {
    fn new(limit: usize) -> Self {
        Self {
            current: 0,
            maximum: limit,
        }
    }

    fn increment(&mut self) -> Result<()> {
        self.current += 1;

        if self.current > self.maximum {
            Err(SearchError::StepLimitExhausted(self.maximum))
        } else {
            Ok(())
        }
    }
}

#[derive(Debug)]
struct TimeLimit {
    started: Instant,
    maximum: Duration,
}

impl TimeLimit {
    fn new(limit: Duration) -> Self {
        Self {
            started: Instant::now(),
            maximum: limit,
        }
    }

    fn check(&self) -> Result<()> {
        let elapsed = self.started.elapsed();
        if elapsed > self.maximum {
            Err(SearchError::TimeLimitExhausted(elapsed))
        } else {
            Ok(())
        }
    }
}

/// Per-run bookkeeping: the visited set, expansion count and limits.
///
/// One of these is built for every call to [SearchAlgorithm::run] and
/// dropped when the search returns, so no state leaks between runs.
#[derive(Debug)]
pub struct Expansions<S> {
    visited: HashSet<S>,
    expanded: usize,
    steps: Option<StepLimit>,
    clock: Option<TimeLimit>,
    progress: Option<usize>,
}

impl<S> Expansions<S>
where
    S: Debug + Clone + Eq + Hash,
{
    pub(crate) fn new(options: &SearchOptions) -> Self {
        Self {
            visited: HashSet::new(),
            expanded: 0,
            steps: options.step_limit.map(StepLimit::new),
            clock: options.time_limit.map(TimeLimit::new),
            progress: options.progress.filter(|&n| n > 0),
        }
    }

    /// Number of states whose successors have been generated.
    pub fn count(&self) -> usize {
        self.expanded
    }

    pub(crate) fn is_visited(&self, state: &S) -> bool {
        self.visited.contains(state)
    }

    /// Mark a state as visited. Returns false if it already was.
    pub(crate) fn visit(&mut self, state: &S) -> bool {
        if self.visited.contains(state) {
            return false;
        }
        self.visited.insert(state.clone())
    }

    /// Generate the successors of `state`, charging the expansion
    /// against the configured limits.
    pub(crate) fn expand<P>(
        &mut self,
        problem: &P,
        state: &S,
        frontier: usize,
    ) -> Result<Vec<Successor<S, P::Action, P::Cost>>>
    where
        P: SearchProblem<State = S>,
    {
        if let Some(steps) = self.steps.as_mut() {
            steps.increment()?;
        }
        if let Some(clock) = self.clock.as_ref() {
            clock.check()?;
        }

        self.expanded += 1;
        if let Some(n) = self.progress {
            if self.expanded % n == 0 {
                debug!(
                    "E{} V{} Q{} at {:?}",
                    self.expanded,
                    self.visited.len(),
                    frontier,
                    state
                );
            }
        }

        let successors = problem.successors(state);
        trace!("expanding {:?}: {} successors", state, successors.len());
        Ok(successors)
    }
}

/// The order-defining half of a search algorithm.
///
/// Implementors run one complete search, using `expansions` for their
/// visited set and to generate successors.
pub trait Strategy<P>
where
    P: SearchProblem,
{
    fn name(&self) -> &'static str;

    /// Find a path to a goal, or fail with [SearchError::NoResultFound]
    /// once the frontier is exhausted.
    fn search(
        &self,
        problem: &P,
        expansions: &mut Expansions<P::State>,
    ) -> Result<Vec<P::Action>>;
}

/// The actions found by a successful search.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<A> {
    /// Actions leading from the start state to a goal, in order.
    pub actions: Vec<A>,

    /// Number of states expanded while searching.
    pub expanded: usize,
}

impl<A> Solution<A> {
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn into_actions(self) -> Vec<A> {
        self.actions
    }
}

/// Implementation of search, using a generic strategy.
///
/// Pairs a problem with a strategy (K) and the options which
/// bound how long the strategy may run.
#[derive(Debug)]
pub struct SearchAlgorithm<'p, P, K> {
    problem: &'p P,
    strategy: K,
    options: SearchOptions,
}

impl<'p, P, K> SearchAlgorithm<'p, P, K>
where
    P: SearchProblem,
    K: Strategy<P>,
{
    pub(crate) fn new(problem: &'p P, strategy: K) -> Self {
        SearchAlgorithm {
            problem,
            strategy,
            options: SearchOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SearchOptions) -> Self {
        self.options = options;
        self
    }

    /// Set a step limit for this search algorithm.
    ///
    /// When this many states have been expanded,
    /// the search algorithm will return an error.
    pub fn set_limit(&mut self, limit: usize) {
        self.options.step_limit = Some(limit);
    }

    pub fn set_time_limit(&mut self, limit: Duration) {
        self.options.time_limit = Some(limit);
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Run the search to completion.
    ///
    /// Unlike the plain search functions, this distinguishes a start state
    /// which is already a goal (`Ok` with no actions) from an unreachable
    /// goal ([SearchError::NoResultFound]).
    pub fn run(self) -> Result<Solution<P::Action>> {
        let mut expansions = Expansions::new(&self.options);
        debug!("{} search starting", self.strategy.name());

        match self.strategy.search(self.problem, &mut expansions) {
            Ok(actions) => {
                debug!(
                    "{} search found {} actions after {} expansions",
                    self.strategy.name(),
                    actions.len(),
                    expansions.count()
                );
                Ok(Solution {
                    actions,
                    expanded: expansions.count(),
                })
            }
            Err(error) => {
                debug!(
                    "{} search failed after {} expansions: {}",
                    self.strategy.name(),
                    expansions.count(),
                    error
                );
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::helpers::Graph;

    #[test]
    fn step_limit() {
        let mut limit = StepLimit::new(2);
        assert!(limit.increment().is_ok());
        assert!(limit.increment().is_ok());
        assert!(matches!(
            limit.increment(),
            Err(SearchError::StepLimitExhausted(2))
        ));
    }

    #[test]
    fn visit_is_once_only() {
        let mut expansions: Expansions<u8> = Expansions::new(&SearchOptions::default());
        assert!(!expansions.is_visited(&1));
        assert!(expansions.visit(&1));
        assert!(expansions.is_visited(&1));
        assert!(!expansions.visit(&1));
    }

    #[test]
    fn expand_counts_and_limits() {
        let graph = Graph::diamond();
        let options = SearchOptions {
            step_limit: Some(1),
            ..SearchOptions::default()
        };
        let mut expansions = Expansions::new(&options);

        let successors = expansions.expand(&graph, &"A", 0).unwrap();
        assert_eq!(successors.len(), 2);
        assert_eq!(expansions.count(), 1);

        assert!(matches!(
            expansions.expand(&graph, &"B", 0),
            Err(SearchError::StepLimitExhausted(1))
        ));
        assert_eq!(expansions.count(), 1);
    }

    #[test]
    fn time_limit() {
        let options = SearchOptions {
            time_limit: Some(Duration::from_secs(0)),
            ..SearchOptions::default()
        };
        let mut expansions = Expansions::new(&options);
        std::thread::sleep(Duration::from_millis(5));

        let graph = Graph::diamond();
        assert!(matches!(
            expansions.expand(&graph, &"A", 0),
            Err(SearchError::TimeLimitExhausted(_))
        ));
    }
}
