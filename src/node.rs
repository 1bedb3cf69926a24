use std::cmp::Reverse;

/// A single vertex of the radix tree.
///
/// The `key` is the label of the edge pointing at this node; the full
/// pattern of an endpoint is the concatenation of the keys on the path
/// from the root. Keys are byte strings because edges are split at
/// arbitrary byte positions, which may fall inside a multi-byte
/// character.
#[derive(Debug)]
pub(crate) struct Node<T> {
    key: Vec<u8>,
    priority: usize,
    pub(crate) payload: Option<T>,
    pub(crate) placeholder: bool,
    pub(crate) children: Vec<Node<T>>,
}

impl<T> Node<T> {
    pub(crate) fn new(key: Vec<u8>, payload: Option<T>) -> Self {
        let priority = priority_of(&key);
        Node {
            key,
            priority,
            payload,
            placeholder: false,
            children: Vec::new(),
        }
    }

    /// The empty sentinel a fresh tree starts with, replaced wholesale
    /// by the first insertion.
    pub(crate) fn placeholder() -> Self {
        Node {
            key: Vec::new(),
            priority: 0,
            payload: None,
            placeholder: true,
            children: Vec::new(),
        }
    }

    pub(crate) fn key(&self) -> &[u8] {
        &self.key
    }

    pub(crate) fn priority(&self) -> usize {
        self.priority
    }

    /// Replaces the edge label. The priority is derived from the key,
    /// so it is recomputed here and nowhere else.
    pub(crate) fn set_key(&mut self, key: Vec<u8>) {
        self.priority = priority_of(&key);
        self.key = key;
    }

    /// Restores the sibling search order: descending priority, stable
    /// among equals.
    pub(crate) fn sort_children(&mut self) {
        self.children.sort_by_key(|child| Reverse(child.priority()));
    }
}

/// Sort weight of an edge label. Catch-all edges always lose, named
/// parameter edges beat only those, and plain edges rank by length so
/// longer (more specific) labels are tried first.
pub(crate) fn priority_of(key: &[u8]) -> usize {
    if key.contains(&b'*') {
        return 0;
    }
    if key.contains(&b':') {
        return 1;
    }
    key.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_ranks_keys() {
        assert_eq!(priority_of(b"products"), 8);
        assert_eq!(priority_of(b"/"), 1);
        assert_eq!(priority_of(b":id"), 1);
        assert_eq!(priority_of(b":id/edit"), 1);
        assert_eq!(priority_of(b"*filepath"), 0);
        assert_eq!(priority_of(b":id/*rest"), 0);
        assert_eq!(priority_of(b""), 0);
    }

    #[test]
    fn set_key_recomputes_priority() {
        let mut node: Node<()> = Node::new(b"articles".to_vec(), None);
        assert_eq!(node.priority(), 8);

        node.set_key(b":slug".to_vec());
        assert_eq!(node.priority(), 1);
    }

    #[test]
    fn children_sort_by_descending_priority() {
        let mut node: Node<()> = Node::new(b"/".to_vec(), None);
        node.children.push(Node::new(b"*rest".to_vec(), None));
        node.children.push(Node::new(b":id".to_vec(), None));
        node.children.push(Node::new(b"featured".to_vec(), None));
        node.sort_children();

        let keys: Vec<&[u8]> = node.children.iter().map(|child| child.key()).collect();
        assert_eq!(keys, [&b"featured"[..], &b":id"[..], &b"*rest"[..]]);
    }

    #[test]
    fn placeholder_is_empty() {
        let node: Node<()> = Node::placeholder();
        assert!(node.placeholder);
        assert!(node.key().is_empty());
        assert!(node.payload.is_none());
        assert!(node.children.is_empty());
        assert_eq!(node.priority(), 0);
    }
}
