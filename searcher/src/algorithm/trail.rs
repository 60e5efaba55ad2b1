//! Paths stored as backpointers into a shared arena.
//!
//! Frontier entries hold a [PathId] instead of a full action list. Extending
//! a path appends one step to the arena, so entries which share a prefix
//! share its storage, and no entry's path can change after it is queued.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PathId(Option<usize>);

impl PathId {
    /// The path with no actions.
    pub(crate) const EMPTY: PathId = PathId(None);
}

#[derive(Debug)]
struct Step<A> {
    parent: PathId,
    action: A,
}

#[derive(Debug)]
pub(crate) struct Trail<A> {
    steps: Vec<Step<A>>,
}

impl<A> Trail<A>
where
    A: Clone,
{
    pub(crate) fn new() -> Self {
        Trail { steps: Vec::new() }
    }

    /// The path `path + [action]`.
    pub(crate) fn extend(&mut self, path: PathId, action: A) -> PathId {
        self.steps.push(Step {
            parent: path,
            action,
        });
        PathId(Some(self.steps.len() - 1))
    }

    /// Actions along `path`, from the start state onwards.
    pub(crate) fn actions(&self, path: PathId) -> Vec<A> {
        let mut actions = Vec::new();
        let mut cursor = path;
        while let PathId(Some(index)) = cursor {
            let step = &self.steps[index];
            actions.push(step.action.clone());
            cursor = step.parent;
        }
        actions.reverse();
        actions
    }
}
