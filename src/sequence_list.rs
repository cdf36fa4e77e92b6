use crate::{
    errors::SequenceListError,
    node::{Link, Node},
};
use core::fmt;

/// A singly-linked sequence list with explicit emptiness/bounds checking.
#[derive(Debug)]
pub struct SequenceList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Default for SequenceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceList<T> {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Create a list holding a single value.
    pub fn with_value(value: T) -> Self {
        Self {
            head: Some(Box::new(Node::new(value))),
            len: 1,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// Is the list empty?
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Borrow the first value.
    ///
    /// Error if the list is empty.
    pub fn front(&self) -> Result<&T, SequenceListError> {
        match self.head.as_deref() {
            Some(node) => Ok(&node.value),
            None => Err(SequenceListError::EmptyCollection),
        }
    }

    /// Borrow the last value. O(n).
    ///
    /// Error if the list is empty.
    pub fn back(&self) -> Result<&T, SequenceListError> {
        let mut node = self
            .head
            .as_deref()
            .ok_or(SequenceListError::EmptyCollection)?;
        while let Some(next) = node.next.as_deref() {
            node = next;
        }
        Ok(&node.value)
    }

    /// Push a value to the front. O(1).
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// Push a value to the back. O(n).
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Remove and return the first value. O(1).
    ///
    /// Error if the list is empty.
    pub fn pop_front(&mut self) -> Result<T, SequenceListError> {
        let node = self
            .head
            .take()
            .ok_or(SequenceListError::EmptyCollection)?;
        self.head = node.next;
        self.len -= 1;
        Ok(node.value)
    }

    /// Remove and return the last value. O(n).
    ///
    /// Error if the list is empty. Removing the sole element clears the
    /// head link, leaving the list empty.
    pub fn pop_back(&mut self) -> Result<T, SequenceListError> {
        if self.head.is_none() {
            return Err(SequenceListError::EmptyCollection);
        }
        // Walk to the link that owns the last node; for a one-element
        // list that link is the head itself.
        let mut cursor = &mut self.head;
        for _ in 1..self.len {
            cursor = &mut cursor.as_mut().expect("len matches reachable nodes").next;
        }
        let node = cursor.take().expect("len matches reachable nodes");
        debug_assert!(node.next.is_none(), "tail node must have no successor");
        self.len -= 1;
        Ok(node.value)
    }

    /// Borrow the value at a zero-based `index`. O(n).
    ///
    /// Error if the list is empty or `index >= len`.
    pub fn value_at(&self, index: usize) -> Result<&T, SequenceListError> {
        if self.head.is_none() {
            return Err(SequenceListError::EmptyCollection);
        }
        if index >= self.len {
            return Err(SequenceListError::IndexOutOfRange);
        }
        let mut node = self.head.as_deref().expect("checked non-empty");
        for _ in 0..index {
            node = node.next.as_deref().expect("index checked against len");
        }
        Ok(&node.value)
    }

    /// Insert a value at a zero-based `index`, shifting later elements
    /// toward the back. `index == len` appends. O(n).
    ///
    /// Error if `index > len`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<(), SequenceListError> {
        if index > self.len {
            return Err(SequenceListError::IndexOutOfRange);
        }
        let mut cursor = &mut self.head;
        for _ in 0..index {
            cursor = &mut cursor.as_mut().expect("index checked against len").next;
        }
        let node = Box::new(Node {
            value,
            next: cursor.take(),
        });
        *cursor = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Remove the first element equal to `value`, front to back.
    /// Returns whether an element was removed; a miss leaves the list
    /// unchanged. O(n).
    ///
    /// Error if the list is empty.
    pub fn remove(&mut self, value: &T) -> Result<bool, SequenceListError>
    where
        T: PartialEq,
    {
        if self.head.is_none() {
            return Err(SequenceListError::EmptyCollection);
        }
        // Stop at the link owning the first match, or at the tail's
        // empty link on a miss. Matching the first node updates the
        // head link itself.
        let mut cursor = &mut self.head;
        while cursor.as_deref().map_or(false, |node| node.value != *value) {
            cursor = &mut cursor.as_mut().expect("loop guard saw a node").next;
        }
        match cursor.take() {
            Some(node) => {
                *cursor = node.next;
                self.len -= 1;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reverse the list in place. O(n) time, O(1) extra space.
    ///
    /// Error if the list is empty.
    pub fn reverse(&mut self) -> Result<(), SequenceListError> {
        if self.head.is_none() {
            return Err(SequenceListError::EmptyCollection);
        }
        let mut reversed: Link<T> = None;
        while let Some(mut node) = self.head.take() {
            self.head = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
        Ok(())
    }

    /// Remove every element. Drops nodes one link at a time so a long
    /// chain cannot recurse through nested `Box` drops.
    pub fn clear(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
        self.len = 0;
    }
}

impl<T> Drop for SequenceList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Renders `"v0->v1->...->vN"`; an empty list renders as `""`.
impl<T: fmt::Display> fmt::Display for SequenceList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut node = self.head.as_deref();
        let mut first = true;
        while let Some(n) = node {
            if !first {
                f.write_str("->")?;
            }
            write!(f, "{}", n.value)?;
            first = false;
            node = n.next.as_deref();
        }
        Ok(())
    }
}
