//! Containers which decide the order that discovered states are expanded in.

use std::cmp::{Eq, Ord, Ordering, PartialEq, PartialOrd};
use std::collections::{BinaryHeap, VecDeque};
use std::default::Default;

/// Trait used to implement unprioritized queues of frontier entries.
///
/// The uninformed searches are written against this trait, so swapping
/// a [Stack] for a [Queue] is all it takes to turn depth-first order into
/// breadth-first order.
pub trait SearchQueue {
    type Item;

    fn pop(&mut self) -> Option<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in, first-out container.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> SearchQueue for Stack<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.items.pop()
    }

    fn push(&mut self, item: Self::Item) {
        self.items.push(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in, first-out container.
#[derive(Debug)]
pub struct Queue<T> {
    queue: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            queue: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> SearchQueue for Queue<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.queue.pop_front()
    }

    fn push(&mut self, item: Self::Item) {
        self.queue.push_back(item);
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

/// Wrapper which sorts heap entries so that the lowest priority,
/// and then the earliest pushed, comes out of the max-heap first.
#[derive(Debug)]
struct Prioritized<T, P> {
    priority: P,
    order: u64,
    item: T,
}

impl<T, P> PartialEq for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P> Eq for Prioritized<T, P> where P: PartialOrd {}

impl<T, P> Ord for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .partial_cmp(&other.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| self.order.cmp(&other.order))
            .reverse()
    }
}

impl<T, P> PartialOrd for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue with stable ordering among equal priorities.
#[derive(Debug)]
pub struct PriorityQueue<T, P>
where
    P: PartialOrd,
{
    heap: BinaryHeap<Prioritized<T, P>>,
    counter: u64,
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: PartialOrd,
{
    fn default() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }
}

impl<T, P> PriorityQueue<T, P>
where
    P: PartialOrd,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T, priority: P) {
        let order = self.counter;
        self.counter += 1;
        self.heap.push(Prioritized {
            priority,
            order,
            item,
        });
    }

    /// Remove the entry with the lowest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|p| p.item)
    }

    /// The entry [PriorityQueue::pop] would return, with its priority.
    pub fn peek(&self) -> Option<(&T, &P)> {
        self.heap.peek().map(|p| (&p.item, &p.priority))
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P> PriorityQueue<T, P>
where
    T: PartialEq,
    P: PartialOrd,
{
    /// Push `item`, or lower its priority if it is already queued.
    ///
    /// An item already queued with an equal or lower priority is left alone.
    /// A lowered item keeps its original insertion order for tie-breaking.
    /// Returns whether the queue changed.
    pub fn update(&mut self, item: T, priority: P) -> bool {
        let mut entries = std::mem::take(&mut self.heap).into_vec();

        let changed = match entries.iter().position(|e| e.item == item) {
            Some(index) if entries[index].priority > priority => {
                entries[index].priority = priority;
                true
            }
            Some(_) => false,
            None => {
                let order = self.counter;
                self.counter += 1;
                entries.push(Prioritized {
                    priority,
                    order,
                    item,
                });
                true
            }
        };

        self.heap = BinaryHeap::from(entries);
        changed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn drain<Q: SearchQueue>(mut queue: Q) -> Vec<Q::Item> {
        let mut items = Vec::new();
        while let Some(item) = queue.pop() {
            items.push(item);
        }
        items
    }

    #[test]
    fn stack_is_lifo() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);
        assert_eq!(stack.len(), 3);
        assert_eq!(drain(stack), vec![3, 2, 1]);
    }

    #[test]
    fn queue_is_fifo() {
        let mut queue = Queue::new();
        assert!(queue.is_empty());
        queue.push('a');
        queue.push('b');
        queue.push('c');
        assert!(!queue.is_empty());
        assert_eq!(drain(queue), vec!['a', 'b', 'c']);
    }

    #[test]
    fn priority_queue_pops_lowest_first() {
        let mut pq = PriorityQueue::new();
        pq.push("ten", 10);
        pq.push("five", 5);
        pq.push("fifteen", 15);

        assert_eq!(pq.peek(), Some((&"five", &5)));
        assert_eq!(pq.pop(), Some("five"));
        assert_eq!(pq.pop(), Some("ten"));
        assert_eq!(pq.pop(), Some("fifteen"));
        assert_eq!(pq.pop(), None);
        assert!(pq.is_empty());
    }

    #[test]
    fn priority_queue_ties_are_stable() {
        let mut pq = PriorityQueue::new();
        for item in &["a", "b", "c", "d"] {
            pq.push(*item, 1.0);
        }
        pq.push("z", 0.5);

        let mut order = Vec::new();
        while let Some(item) = pq.pop() {
            order.push(item);
        }
        assert_eq!(order, vec!["z", "a", "b", "c", "d"]);
    }

    #[test]
    fn priority_queue_update() {
        let mut pq = PriorityQueue::new();
        pq.push('a', 4);
        pq.push('b', 3);

        // Worse or equal priorities are ignored.
        assert!(!pq.update('a', 7));
        assert!(!pq.update('b', 3));
        assert_eq!(pq.len(), 2);

        // A better priority reorders the queue without duplicating.
        assert!(pq.update('a', 1));
        assert_eq!(pq.len(), 2);

        // Unknown items are pushed.
        assert!(pq.update('c', 2));
        assert_eq!(pq.len(), 3);

        assert_eq!(pq.pop(), Some('a'));
        assert_eq!(pq.pop(), Some('c'));
        assert_eq!(pq.pop(), Some('b'));
    }
}
