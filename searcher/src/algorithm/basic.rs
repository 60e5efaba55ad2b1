//! Uninformed searches, which ignore step costs entirely.

pub use bfs::{breadth_first_search, BreadthFirst, BreadthFirstSearcher};
pub use dfs::{depth_first_search, DepthFirst, DepthFirstSearcher};

pub mod bfs {
    use crate::algorithm::trail::{PathId, Trail};
    use crate::algorithm::{Expansions, SearchAlgorithm, Strategy};
    use crate::errors::{Result, SearchError};
    use crate::frontier::{Queue, SearchQueue};
    use crate::traits::SearchProblem;

    /// Expand the shallowest unexpanded state first.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BreadthFirst;

    impl<P> Strategy<P> for BreadthFirst
    where
        P: SearchProblem,
    {
        fn name(&self) -> &'static str {
            "breadth-first"
        }

        fn search(
            &self,
            problem: &P,
            expansions: &mut Expansions<P::State>,
        ) -> Result<Vec<P::Action>> {
            let start = problem.start();
            if problem.is_goal(&start) {
                return Ok(Vec::new());
            }

            let mut trail = Trail::new();
            let mut queue = Queue::new();
            queue.push((start, PathId::EMPTY));

            while let Some((state, path)) = queue.pop() {
                if !expansions.visit(&state) {
                    continue;
                }

                if problem.is_goal(&state) {
                    return Ok(trail.actions(path));
                }

                for successor in expansions.expand(problem, &state, queue.len())? {
                    if !expansions.is_visited(&successor.state) {
                        let next = trail.extend(path, successor.action);
                        queue.push((successor.state, next));
                    }
                }
            }

            Err(SearchError::NoResultFound)
        }
    }

    pub type BreadthFirstSearcher<'p, P> = SearchAlgorithm<'p, P, BreadthFirst>;

    pub fn build<P>(problem: &P) -> BreadthFirstSearcher<'_, P>
    where
        P: SearchProblem,
    {
        SearchAlgorithm::new(problem, BreadthFirst)
    }

    /// Breadth-first search, which finds the path with the fewest actions.
    ///
    /// Step costs are not examined. Returns an empty list when the start
    /// is a goal, and also when no goal can be reached.
    pub fn breadth_first_search<P>(problem: &P) -> Vec<P::Action>
    where
        P: SearchProblem,
    {
        build(problem)
            .run()
            .map(|s| s.into_actions())
            .unwrap_or_default()
    }
}

pub mod dfs {
    use crate::algorithm::trail::{PathId, Trail};
    use crate::algorithm::{Expansions, SearchAlgorithm, Strategy};
    use crate::errors::{Result, SearchError};
    use crate::frontier::{SearchQueue, Stack};
    use crate::traits::SearchProblem;

    /// Expand the deepest unexpanded state first.
    #[derive(Debug, Default, Clone, Copy)]
    pub struct DepthFirst;

    impl<P> Strategy<P> for DepthFirst
    where
        P: SearchProblem,
    {
        fn name(&self) -> &'static str {
            "depth-first"
        }

        fn search(
            &self,
            problem: &P,
            expansions: &mut Expansions<P::State>,
        ) -> Result<Vec<P::Action>> {
            let mut trail = Trail::new();
            let mut stack = Stack::new();
            stack.push((problem.start(), PathId::EMPTY));

            while let Some((state, path)) = stack.pop() {
                if problem.is_goal(&state) {
                    return Ok(trail.actions(path));
                }

                if !expansions.visit(&state) {
                    continue;
                }

                for successor in expansions.expand(problem, &state, stack.len())? {
                    if !expansions.is_visited(&successor.state) {
                        let next = trail.extend(path, successor.action);
                        stack.push((successor.state, next));
                    }
                }
            }

            Err(SearchError::NoResultFound)
        }
    }

    pub type DepthFirstSearcher<'p, P> = SearchAlgorithm<'p, P, DepthFirst>;

    pub fn build<P>(problem: &P) -> DepthFirstSearcher<'_, P>
    where
        P: SearchProblem,
    {
        SearchAlgorithm::new(problem, DepthFirst)
    }

    /// Depth-first graph search.
    ///
    /// Finds some path when one exists, but not necessarily a short or cheap
    /// one: the last successor listed by [SearchProblem::successors] is
    /// explored first.
    pub fn depth_first_search<P>(problem: &P) -> Vec<P::Action>
    where
        P: SearchProblem,
    {
        build(problem)
            .run()
            .map(|s| s.into_actions())
            .unwrap_or_default()
    }
}
