//! Generalized graph search algorithms.
//!
//! To use these search algorithms, implement the trait [SearchProblem],
//! which describes a start state, a goal test and how to expand a state
//! into its successors. Then call one of
//!
//! - [depth_first_search] (alias [dfs])
//! - [breadth_first_search] (alias [bfs])
//! - [uniform_cost_search] (alias [ucs])
//! - [a_star_search] (alias [astar]), with a [Heuristic]
//!
//! each of which returns the list of actions leading from the start to a
//! goal. An empty list means either that the start is already a goal or
//! that no goal can be reached. To tell those apart, or to bound the search
//! with [SearchOptions], use the builders in [algorithm], whose `run` method
//! returns a [SearchResult].

pub mod algorithm;
mod errors;
pub mod frontier;
mod traits;

#[cfg(test)]
mod helpers;

pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use traits::null_heuristic;
pub use traits::Cost;
pub use traits::Heuristic;
pub use traits::NullHeuristic;
pub use traits::SearchProblem;
pub use traits::Successor;

pub use algorithm::SearchAlgorithm;
pub use algorithm::SearchOptions;
pub use algorithm::Solution;
pub use algorithm::Strategy;

pub use algorithm::astar::a_star_search;
pub use algorithm::basic::breadth_first_search;
pub use algorithm::basic::depth_first_search;
pub use algorithm::uniform::uniform_cost_search;

pub use algorithm::astar::a_star_search as astar;
pub use algorithm::basic::breadth_first_search as bfs;
pub use algorithm::basic::depth_first_search as dfs;
pub use algorithm::uniform::uniform_cost_search as ucs;
