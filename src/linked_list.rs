//! Head-only singly linked list for the `linked-list` drill.
//!
//! Each node owns the next one through a `Box`, and there is no tail pointer,
//! so anything touching the back of the list traverses from the head. That
//! keeps `push_front`/`pop_front` O(1) and everything else O(n), matching the
//! classic exercise.

use anyhow::{bail, Result};
use std::fmt::{self, Display, Formatter};

struct Node {
    value: i64,
    next: Option<Box<Node>>,
}

/// Singly linked list of integers.
#[derive(Default)]
pub struct LinkedList {
    head: Option<Box<Node>>,
}

impl LinkedList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Insert at the head. O(1).
    pub fn push_front(&mut self, value: i64) {
        self.head = Some(Box::new(Node {
            value,
            next: self.head.take(),
        }));
    }

    /// Insert at the tail, traversing the whole list to reach it.
    pub fn push_back(&mut self, value: i64) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
    }

    /// Insert at a 0-based position. `pos == len` appends.
    ///
    /// # Errors
    ///
    /// Returns an error when `pos` is past the end of the list.
    pub fn insert_at(&mut self, pos: usize, value: i64) -> Result<()> {
        let mut cursor = &mut self.head;
        for _ in 0..pos {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => bail!("position {} is out of range", pos),
            }
        }
        *cursor = Some(Box::new(Node {
            value,
            next: cursor.take(),
        }));
        Ok(())
    }

    /// Remove the head node and return its value.
    pub fn pop_front(&mut self) -> Option<i64> {
        self.head.take().map(|node| {
            self.head = node.next;
            node.value
        })
    }

    /// Remove the tail node and return its value.
    pub fn pop_back(&mut self) -> Option<i64> {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.next.is_some()) {
            // The guard above guarantees the node exists.
            cursor = &mut cursor.as_mut().unwrap().next;
        }
        cursor.take().map(|node| node.value)
    }

    /// Remove the node at a 0-based position and return its value.
    ///
    /// # Errors
    ///
    /// Returns an error when `pos` does not name an existing node.
    pub fn remove_at(&mut self, pos: usize) -> Result<i64> {
        let mut cursor = &mut self.head;
        for _ in 0..pos {
            match cursor {
                Some(node) => cursor = &mut node.next,
                None => bail!("position {} is out of range", pos),
            }
        }
        match cursor.take() {
            Some(node) => {
                *cursor = node.next;
                Ok(node.value)
            }
            None => bail!("position {} is out of range", pos),
        }
    }

    /// First 0-based position holding `value`, if any.
    pub fn position(&self, value: i64) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Reverse the list in place with the usual three-pointer walk.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    /// Iterate the values front to back.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        let mut cursor = self.head.as_deref();
        std::iter::from_fn(move || {
            let node = cursor?;
            cursor = node.next.as_deref();
            Some(node.value)
        })
    }
}

impl Display for LinkedList {
    /// Renders `1 -> 2 -> 3 -> NULL`; an empty list is just `NULL`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for value in self.iter() {
            write!(f, "{} -> ", value)?;
        }
        write!(f, "NULL")
    }
}
