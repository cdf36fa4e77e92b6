/// Exclusive link to a successor node, or none at the tail.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    /// A detached node holding `value`.
    pub(crate) fn new(value: T) -> Self {
        Node { value, next: None }
    }
}
