//! Ordered flight index.
//!
//! An unbalanced binary search tree keyed by flight number. Nodes live in an
//! arena and refer to their children by position, so nodes never move once
//! inserted and no operation recurses:
//!
//! - Insertion descends from the root, strictly smaller keys to the left and
//!   strictly larger keys to the right. An existing key is left untouched.
//! - Search follows the same path and stops at the first match.
//! - Listing walks the tree in order with an explicit stack.
//!
//! Height is not bounded; sorted insertion degrades the tree to a list.

use std::cmp::Ordering;

use tracing::debug;

use crate::flight::{Flight, FlightNumber};

#[derive(Debug, Clone)]
struct Node {
    flight: Flight,
    left: Option<usize>,
    right: Option<usize>,
}

impl Node {
    fn new(flight: Flight) -> Self {
        Self {
            flight,
            left: None,
            right: None,
        }
    }
}

/// Binary search tree of flights keyed by flight number.
#[derive(Debug, Clone, Default)]
pub struct FlightIndex {
    root: Option<usize>,
    nodes: Vec<Node>,
}

impl FlightIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of flights in the index.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the index holds no flights.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a new flight unless one with the same number already exists.
    ///
    /// Returns `true` if the flight was added. An existing flight, along with
    /// its bookings, is never replaced or resized.
    pub fn insert(&mut self, number: FlightNumber, total_seats: usize) -> bool {
        let mut cursor = self.root;
        let mut parent = None;

        while let Some(id) = cursor {
            let node = &self.nodes[id];
            match number.cmp(&node.flight.number()) {
                Ordering::Less => {
                    parent = Some((id, Ordering::Less));
                    cursor = node.left;
                }
                Ordering::Greater => {
                    parent = Some((id, Ordering::Greater));
                    cursor = node.right;
                }
                Ordering::Equal => {
                    debug!(flight = number, "Flight already indexed, insert ignored");
                    return false;
                }
            }
        }

        let id = self.nodes.len();
        self.nodes.push(Node::new(Flight::new(number, total_seats)));

        match parent {
            None => self.root = Some(id),
            Some((parent, Ordering::Less)) => self.nodes[parent].left = Some(id),
            Some((parent, _)) => self.nodes[parent].right = Some(id),
        }

        debug!(flight = number, total_seats, "Flight indexed");
        true
    }

    /// Look up a flight by number.
    #[must_use]
    pub fn find(&self, number: FlightNumber) -> Option<&Flight> {
        self.locate(number).map(|id| &self.nodes[id].flight)
    }

    /// Look up a flight by number for modification.
    pub fn find_mut(&mut self, number: FlightNumber) -> Option<&mut Flight> {
        self.locate(number).map(|id| &mut self.nodes[id].flight)
    }

    /// Check whether a flight with this number is indexed.
    #[must_use]
    pub fn contains(&self, number: FlightNumber) -> bool {
        self.locate(number).is_some()
    }

    /// Iterate over flights in ascending flight-number order.
    ///
    /// Each call starts a fresh traversal.
    #[must_use]
    pub fn in_order(&self) -> InOrder<'_> {
        let mut iter = InOrder {
            index: self,
            stack: Vec::new(),
        };
        iter.push_left_spine(self.root);
        iter
    }

    /// Number of nodes on the longest root-to-leaf path.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();

        while let Some((id, level)) = stack.pop() {
            deepest = deepest.max(level);
            let node = &self.nodes[id];
            stack.extend(node.left.map(|child| (child, level + 1)));
            stack.extend(node.right.map(|child| (child, level + 1)));
        }

        deepest
    }

    /// Position of the node holding `number`, if any.
    fn locate(&self, number: FlightNumber) -> Option<usize> {
        let mut cursor = self.root;

        while let Some(id) = cursor {
            let node = &self.nodes[id];
            cursor = match number.cmp(&node.flight.number()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }

        None
    }
}

impl<'a> IntoIterator for &'a FlightIndex {
    type Item = &'a Flight;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

/// In-order traversal over a [`FlightIndex`].
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    index: &'a FlightIndex,
    stack: Vec<usize>,
}

impl InOrder<'_> {
    fn push_left_spine(&mut self, mut cursor: Option<usize>) {
        while let Some(id) = cursor {
            self.stack.push(id);
            cursor = self.index.nodes[id].left;
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Flight;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.index;
        let id = self.stack.pop()?;
        let node = &index.nodes[id];
        self.push_left_spine(node.right);
        Some(&node.flight)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.index.len()))
    }
}
