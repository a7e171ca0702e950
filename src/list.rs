//! Sorted doubly-linked list of quaternions.
//!
//! Nodes live in a `Vec` and link to each other by index. Removal swaps the
//! last node into the freed slot and patches its neighbours, so the arena
//! never holds holes.

use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::error::{QuatResult, QuaternionError};
use crate::hypercomplex::Quaternion;

/// Sort key of a [`QuaternionList`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ListOrdering {
    /// Lexicographic on `(scalar, i, j, k)`.
    #[default]
    Components,
    /// Ascending norm.
    Norm,
}

impl ListOrdering {
    /// True when `a` sorts strictly before `b`.
    pub fn precedes(self, a: &Quaternion, b: &Quaternion) -> bool {
        match self {
            ListOrdering::Components => a.to_list() < b.to_list(),
            ListOrdering::Norm => a.norm() < b.norm(),
        }
    }
}

impl FromStr for ListOrdering {
    type Err = QuaternionError;

    fn from_str(s: &str) -> QuatResult<Self> {
        match s {
            "alpha" | "components" => Ok(ListOrdering::Components),
            "norm" => Ok(ListOrdering::Norm),
            other => Err(QuaternionError::ArgumentType(format!(
                "ordering must be `alpha` or `norm`, got `{other}`"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
struct Node {
    value: Quaternion,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Clone, Debug, Default)]
pub struct QuaternionList {
    ordering: ListOrdering,
    nodes: Vec<Node>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl QuaternionList {
    pub fn new(ordering: ListOrdering) -> Self {
        QuaternionList {
            ordering,
            ..Default::default()
        }
    }

    pub fn ordering(&self) -> ListOrdering {
        self.ordering
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn head(&self) -> Option<&Quaternion> {
        self.head.map(|index| &self.nodes[index].value)
    }

    pub fn tail(&self) -> Option<&Quaternion> {
        self.tail.map(|index| &self.nodes[index].value)
    }

    /// Inserts before the first element that does not sort strictly before `value`.
    pub fn add(&mut self, value: impl Into<Quaternion>) {
        let value = value.into();

        let mut cursor = self.head;
        while let Some(index) = cursor {
            let node = &self.nodes[index];
            if !self.ordering.precedes(&node.value, &value) {
                break;
            }
            cursor = node.next;
        }

        let index = self.nodes.len();
        let prev = match cursor {
            Some(next) => self.nodes[next].prev,
            None => self.tail,
        };
        self.nodes.push(Node {
            value,
            prev,
            next: cursor,
        });

        match prev {
            Some(p) => self.nodes[p].next = Some(index),
            None => self.head = Some(index),
        }
        match cursor {
            Some(n) => self.nodes[n].prev = Some(index),
            None => self.tail = Some(index),
        }
        debug!(%value, ordering = ?self.ordering, len = self.len(), "added quaternion");
    }

    /// Removes the first element equal to `value`; false when there is none.
    pub fn remove(&mut self, value: impl Into<Quaternion>) -> bool {
        let value = value.into();
        let Some(index) = self.position(&value) else {
            return false;
        };

        let Node { prev, next, .. } = self.nodes[index];
        match prev {
            Some(p) => self.nodes[p].next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.nodes[n].prev = prev,
            None => self.tail = prev,
        }

        self.nodes.swap_remove(index);
        if index < self.nodes.len() {
            // the former last node now lives at `index`
            let Node { prev, next, .. } = self.nodes[index];
            match prev {
                Some(p) => self.nodes[p].next = Some(index),
                None => self.head = Some(index),
            }
            match next {
                Some(n) => self.nodes[n].prev = Some(index),
                None => self.tail = Some(index),
            }
        }
        debug!(%value, len = self.len(), "removed quaternion");
        true
    }

    pub fn contains(&self, value: &Quaternion) -> bool {
        self.position(value).is_some()
    }

    /// Elements in list order; `.rev()` walks back from the tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            nodes: &self.nodes,
            front: self.head,
            back: self.tail,
            remaining: self.nodes.len(),
        }
    }

    pub fn iter_rev(&self) -> core::iter::Rev<Iter<'_>> {
        self.iter().rev()
    }

    fn position(&self, value: &Quaternion) -> Option<usize> {
        let mut cursor = self.head;
        while let Some(index) = cursor {
            if self.nodes[index].value == *value {
                return Some(index);
            }
            cursor = self.nodes[index].next;
        }
        None
    }
}

pub struct Iter<'a> {
    nodes: &'a [Node],
    front: Option<usize>,
    back: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Quaternion;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.front?];
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a> DoubleEndedIterator for Iter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = &self.nodes[self.back?];
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<'a> ExactSizeIterator for Iter<'a> {}

impl<'a> IntoIterator for &'a QuaternionList {
    type Item = &'a Quaternion;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// One element per line, in list order.
impl fmt::Display for QuaternionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for q in self {
            fmt::Display::fmt(q, f)?;
            writeln!(f)?;
        }
        Ok(())
    }
}
