use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num::Zero;

/// Numeric path cost.
///
/// Anything which can be summed, compared and has a zero works. Floats are
/// permitted: incomparable values (NaN) are treated as equal by the frontier.
pub trait Cost: Debug + Copy + PartialOrd + Add<Output = Self> + Zero {}

impl<T> Cost for T where T: Debug + Copy + PartialOrd + Add<Output = T> + Zero {}

/// One legal transition out of a state, as produced by
/// [SearchProblem::successors].
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<S, A, C> {
    /// The state reached by taking `action`.
    pub state: S,
    pub action: A,
    /// Non-negative increment to the path cost.
    pub cost: C,
}

impl<S, A, C> Successor<S, A, C> {
    pub fn new(state: S, action: A, cost: C) -> Self {
        Self {
            state,
            action,
            cost,
        }
    }
}

impl<S, A, C> From<(S, A, C)> for Successor<S, A, C> {
    fn from((state, action, cost): (S, A, C)) -> Self {
        Successor::new(state, action, cost)
    }
}

/// Provides an interface for conducting searches.
///
/// A problem describes an implicit graph: a start state, a goal test and a
/// way to expand a state into its neighbors. The search algorithms only ever
/// hash and compare states, so any representation will do as long as equal
/// configurations compare (and hash) equal.
pub trait SearchProblem {
    type State: Debug + Clone + Eq + Hash;
    type Action: Debug + Clone;
    type Cost: Cost;

    /// The state the search begins from.
    fn start(&self) -> Self::State;

    /// Is this state an accepted terminal state?
    fn is_goal(&self, state: &Self::State) -> bool;

    /// States reachable from `state` by one legal action.
    ///
    /// The order of the returned successors decides the order in which
    /// ties are explored, and so which of several equally good paths
    /// is found.
    fn successors(
        &self,
        state: &Self::State,
    ) -> Vec<Successor<Self::State, Self::Action, Self::Cost>>;

    /// Total cost of following `actions` from the start state.
    ///
    /// Returns `None` when the sequence contains an illegal move. The search
    /// algorithms never call this; it exists to check their answers.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Self::Cost>;
}

/// An estimate of the remaining cost from a state to the nearest goal.
///
/// Used only by A*. The search does not verify that the estimate is
/// admissible or consistent, but the returned path is only guaranteed
/// to be optimal when it is.
pub trait Heuristic<P>
where
    P: SearchProblem,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &P) -> P::Cost,
{
    fn estimate(&self, state: &P::State, problem: &P) -> P::Cost {
        self(state, problem)
    }
}

/// The trivial heuristic, which estimates zero everywhere.
///
/// With this heuristic, A* explores exactly as uniform cost search does.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullHeuristic;

impl<P> Heuristic<P> for NullHeuristic
where
    P: SearchProblem,
{
    fn estimate(&self, _state: &P::State, _problem: &P) -> P::Cost {
        P::Cost::zero()
    }
}

/// Function form of [NullHeuristic].
pub fn null_heuristic<P>(_state: &P::State, _problem: &P) -> P::Cost
where
    P: SearchProblem,
{
    P::Cost::zero()
}
