//! Small search problems shared by the unit tests.

use std::collections::{HashMap, HashSet, VecDeque};
use std::str::FromStr;

use crate::traits::{SearchProblem, Successor};

/// A directed graph with named nodes, given as an edge list.
///
/// Successors are produced in the order edges were added.
#[derive(Debug, Clone, Default)]
pub(crate) struct Graph {
    start: &'static str,
    goals: HashSet<&'static str>,
    edges: Vec<(&'static str, &'static str, u32)>,
}

impl Graph {
    pub(crate) fn new(start: &'static str) -> Self {
        Self {
            start,
            ..Self::default()
        }
    }

    pub(crate) fn goal(mut self, node: &'static str) -> Self {
        self.goals.insert(node);
        self
    }

    pub(crate) fn edge(mut self, from: &'static str, to: &'static str, cost: u32) -> Self {
        self.edges.push((from, to, cost));
        self
    }

    /// A→B (1), A→C (5), B→D (1), C→D (1), goal D.
    pub(crate) fn diamond() -> Self {
        Graph::new("A")
            .goal("D")
            .edge("A", "B", 1)
            .edge("A", "C", 5)
            .edge("B", "D", 1)
            .edge("C", "D", 1)
    }
}

impl SearchProblem for Graph {
    type State = &'static str;
    type Action = (&'static str, &'static str);
    type Cost = u32;

    fn start(&self) -> Self::State {
        self.start
    }

    fn is_goal(&self, state: &Self::State) -> bool {
        self.goals.contains(state)
    }

    fn successors(
        &self,
        state: &Self::State,
    ) -> Vec<Successor<Self::State, Self::Action, u32>> {
        self.edges
            .iter()
            .filter(|(from, _, _)| from == state)
            .map(|&(from, to, cost)| Successor::from((to, (from, to), cost)))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<u32> {
        let mut here = self.start;
        let mut total = 0;
        for &(from, to) in actions {
            if from != here {
                return None;
            }
            let (_, _, cost) = self.edges.iter().find(|e| e.0 == from && e.1 == to)?;
            total += cost;
            here = to;
        }
        Some(total)
    }
}

pub(crate) type Point = (i32, i32);

/// A 2D grid, parsed from text.
///
/// `#` is a wall, `.` costs 1 to enter, a digit costs that much to enter.
/// `S` marks the start and `G` the goals (both cost 1 to enter).
#[derive(Debug, Clone, Default)]
pub(crate) struct Grid {
    cells: HashMap<Point, u32>,
    start: Point,
    goals: HashSet<Point>,
}

impl FromStr for Grid {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Grid::default();
        let mut start = None;
        for (y, line) in s.lines().map(str::trim).filter(|l| !l.is_empty()).enumerate() {
            for (x, c) in line.chars().enumerate() {
                let point = (x as i32, y as i32);
                let cost = match c {
                    '#' => continue,
                    '.' => 1,
                    'S' => {
                        start = Some(point);
                        1
                    }
                    'G' => {
                        grid.goals.insert(point);
                        1
                    }
                    d if d.is_ascii_digit() => d.to_digit(10).unwrap(),
                    other => return Err(format!("Unexpected map character {:?}", other)),
                };
                grid.cells.insert(point, cost);
            }
        }
        grid.start = start.ok_or_else(|| "Map has no start".to_string())?;
        Ok(grid)
    }
}

const MOVES: [(char, Point); 4] = [('N', (0, -1)), ('S', (0, 1)), ('E', (1, 0)), ('W', (-1, 0))];

impl Grid {
    fn step(point: Point, action: char) -> Option<Point> {
        MOVES
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, (dx, dy))| (point.0 + dx, point.1 + dy))
    }
}

impl SearchProblem for Grid {
    type State = Point;
    type Action = char;
    type Cost = u32;

    fn start(&self) -> Point {
        self.start
    }

    fn is_goal(&self, state: &Point) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &Point) -> Vec<Successor<Point, char, u32>> {
        MOVES
            .iter()
            .filter_map(|&(action, (dx, dy))| {
                let next = (state.0 + dx, state.1 + dy);
                self.cells
                    .get(&next)
                    .map(|&cost| Successor::new(next, action, cost))
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[char]) -> Option<u32> {
        let mut here = self.start;
        let mut total = 0;
        for &action in actions {
            here = Grid::step(here, action)?;
            total += self.cells.get(&here)?;
        }
        Some(total)
    }
}

/// Manhattan distance to the nearest goal. Admissible and consistent,
/// since every cell costs at least one to enter.
pub(crate) fn manhattan(state: &Point, grid: &Grid) -> u32 {
    grid.goals
        .iter()
        .map(|g| ((g.0 - state.0).abs() + (g.1 - state.1).abs()) as u32)
        .min()
        .unwrap_or(0)
}

/// Follow `actions` from the start state, matching each one against the
/// successors of the current state.
pub(crate) fn follow<P>(problem: &P, actions: &[P::Action]) -> Option<P::State>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut here = problem.start();
    for action in actions {
        here = problem
            .successors(&here)
            .into_iter()
            .find(|s| &s.action == action)?
            .state;
    }
    Some(here)
}

/// Cheapest cost to any goal, by relaxing every edge until nothing changes.
pub(crate) fn cheapest<P>(problem: &P) -> Option<u32>
where
    P: SearchProblem<Cost = u32>,
{
    let mut best: HashMap<P::State, u32> = HashMap::new();
    best.insert(problem.start(), 0);

    let mut changed = true;
    while changed {
        changed = false;
        let known: Vec<(P::State, u32)> = best.iter().map(|(s, c)| (s.clone(), *c)).collect();
        for (state, cost) in known {
            for successor in problem.successors(&state) {
                let candidate = cost + successor.cost;
                let entry = best.entry(successor.state).or_insert(u32::MAX);
                if candidate < *entry {
                    *entry = candidate;
                    changed = true;
                }
            }
        }
    }

    best.into_iter()
        .filter(|(s, _)| problem.is_goal(s))
        .map(|(_, c)| c)
        .min()
}

/// Fewest actions needed to reach any goal.
pub(crate) fn fewest<P>(problem: &P) -> Option<usize>
where
    P: SearchProblem,
{
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(problem.start());
    queue.push_back((problem.start(), 0));

    while let Some((state, depth)) = queue.pop_front() {
        if problem.is_goal(&state) {
            return Some(depth);
        }
        for successor in problem.successors(&state) {
            if seen.insert(successor.state.clone()) {
                queue.push_back((successor.state, depth + 1));
            }
        }
    }
    None
}

/// A maze with a cheap detour around an expensive corridor.
pub(crate) const DETOUR: &str = "
    #########
    #S.999.G#
    #.#####.#
    #.......#
    #########
";

/// An open room, with many equally short paths.
pub(crate) const ROOM: &str = "
    #######
    #S....#
    #.....#
    #.....#
    #....G#
    #######
";

/// The start is walled off from the goal.
pub(crate) const SEALED: &str = "
    #######
    #S.#..#
    #..#.G#
    #######
";

/// A straight run to the goal, with a room behind the start which only
/// an uninformed search bothers to explore.
pub(crate) const FORK: &str = "
    #############
    #.....#.....#
    #.....S....G#
    #.....#.....#
    #############
";
