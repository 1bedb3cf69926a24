use std::mem;

use crate::error::InsertError;
use crate::lookup::Lookup;
use crate::node::Node;

/// A radix tree mapping URL-style patterns to payloads of type `T`.
///
/// Patterns are registered up front with [`add`](Tree::add) and matched
/// against concrete paths with [`find`](Tree::find). The intended use
/// is build-once, read-many: one owner fills the tree during startup,
/// after which any number of concurrent readers may call `find`.
/// Lookups never mutate a node and each returns its own accumulator.
///
/// ```rust
/// use routrie::Tree;
///
/// # fn main() -> Result<(), routrie::InsertError> {
/// let mut tree = Tree::new();
/// tree.add("/about", 1)?;
/// tree.add("/about/:section", 2)?;
///
/// assert_eq!(tree.find("/about/shipping").payload(), Some(&2));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Tree<T> {
    root: Node<T>,
}

impl<T> Tree<T> {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Tree {
            root: Node::placeholder(),
        }
    }

    /// Registers `pattern` as an endpoint carrying `payload`.
    ///
    /// Fails with [`InsertError::Duplicate`] when the exact pattern is
    /// already registered, with [`InsertError::SharedKey`] when the
    /// pattern would place a named parameter with a different name at a
    /// position that already carries one, and with
    /// [`InsertError::EmptyPattern`] when `pattern` has no bytes. The
    /// tree is left unchanged on any error.
    pub fn add(&mut self, pattern: &str, payload: T) -> Result<(), InsertError> {
        if pattern.is_empty() {
            return Err(InsertError::EmptyPattern);
        }
        if self.root.placeholder {
            self.root = Node::new(pattern.as_bytes().to_vec(), Some(payload));
            return Ok(());
        }
        insert(&mut self.root, pattern.as_bytes(), pattern, payload)
    }

    /// Matches `path` against the registered patterns.
    ///
    /// Always returns a [`Lookup`]; check [`Lookup::found`] to learn
    /// whether an endpoint matched. At every branching point the most
    /// specific edge wins: literal edges are tried before named
    /// parameters, and named parameters before catch-alls. The walk
    /// never backtracks.
    pub fn find(&self, path: &str) -> Lookup<'_, T> {
        let mut lookup = Lookup::new();
        walk(&self.root, path.as_bytes(), &mut lookup, true);
        lookup
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn insert<T>(
    node: &mut Node<T>,
    pattern: &[u8],
    full: &str,
    payload: T,
) -> Result<(), InsertError> {
    // longest prefix shared by the node's key and the pattern, with
    // parameter names matched as whole units
    let shared = match shared_prefix(node.key(), pattern) {
        Ok(shared) => shared,
        Err(at) => return Err(InsertError::shared_key(&node.key()[at..], &pattern[at..])),
    };

    if shared == 0 || (shared < pattern.len() && shared >= node.key().len()) {
        // the pattern continues below this node: descend into the
        // child able to hold the remainder, or hang a new edge
        let remainder = &pattern[shared..];

        let mut target = None;
        for (index, child) in node.children.iter().enumerate() {
            if child.key().first() == Some(&b':') && remainder.first() == Some(&b':') {
                // a parameter at this position must keep a single name
                if !same_param_name(child.key(), remainder) {
                    return Err(InsertError::shared_key(child.key(), remainder));
                }
                target = Some(index);
                break;
            }
            if child.key().first() == remainder.first() {
                target = Some(index);
                break;
            }
        }

        match target {
            Some(index) => insert(&mut node.children[index], remainder, full, payload)?,
            None => node.children.push(Node::new(remainder.to_vec(), Some(payload))),
        }
        node.sort_children();
        Ok(())
    } else if shared == pattern.len() && shared == node.key().len() {
        // the pattern coincides with this node
        if node.payload.is_some() {
            return Err(InsertError::Duplicate {
                pattern: full.to_owned(),
            });
        }
        node.payload = Some(payload);
        Ok(())
    } else {
        // 0 < shared < key length: split the edge where the pattern
        // diverges; the new child inherits payload and children
        let suffix = node.key()[shared..].to_vec();
        let mut split = Node::new(suffix, node.payload.take());
        split.children = mem::take(&mut node.children);

        let prefix = node.key()[..shared].to_vec();
        node.set_key(prefix);
        node.children.push(split);

        if shared == pattern.len() {
            // the endpoint lives at the split point
            node.payload = Some(payload);
        } else {
            node.children
                .push(Node::new(pattern[shared..].to_vec(), Some(payload)));
        }
        node.sort_children();
        Ok(())
    }
}

// Walks `key` and `pattern` together and returns the length of their
// shared prefix. Two cursors sitting on `:` either advance past an
// identical parameter name or stop the walk: an edge is never split
// inside a parameter name. `Err` carries the position of a name
// disagreement.
fn shared_prefix(key: &[u8], pattern: &[u8]) -> Result<usize, usize> {
    let limit = key.len().min(pattern.len());
    let mut i = 0;

    while i < limit && key[i] == pattern[i] {
        if key[i] == b':' {
            let key_name = &key[i + 1..segment_end(key, i + 1)];
            let pattern_name = &pattern[i + 1..segment_end(pattern, i + 1)];
            if key_name != pattern_name {
                return Err(i);
            }
            i += 1 + key_name.len();
        } else {
            i += 1;
        }
    }

    Ok(i)
}

// Both arguments start with `:`. True when the parameter names (up to
// `/` or end) are identical.
fn same_param_name(a: &[u8], b: &[u8]) -> bool {
    a[1..segment_end(a, 1)] == b[1..segment_end(b, 1)]
}

// Index of the next `/` at or after `from`, or the end of `bytes`.
fn segment_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|&byte| byte == b'/')
        .map_or(bytes.len(), |n| from + n)
}

fn walk<'tree, T>(node: &'tree Node<T>, path: &[u8], lookup: &mut Lookup<'tree, T>, first: bool) {
    let key = node.key();

    // whole-path hit on the first node, skip the walk entirely
    if first && path == key && node.payload.is_some() {
        lookup.record(node, true);
        return;
    }

    let mut k = 0;
    let mut j = 0;

    // walk key and path together while they agree; `*` and `:` in the
    // key escape the byte-by-byte comparison
    while k < key.len()
        && j < path.len()
        && (key[k] == b'*' || key[k] == b':' || key[k] == path[j])
    {
        match key[k] {
            b'*' => {
                // the catch-all swallows the rest of the path
                lookup.capture(text(&key[k + 1..]), text(&path[j..]));
                lookup.record(node, true);
                return;
            }
            b':' => {
                // bind one path segment to the parameter name, then
                // keep walking; more of the key may follow
                let key_end = segment_end(key, k + 1);
                let path_end = segment_end(path, j);
                lookup.capture(text(&key[k + 1..key_end]), text(&path[j..path_end]));
                k = key_end;
                j = path_end;
            }
            _ => {
                k += 1;
                j += 1;
            }
        }
    }

    if j == path.len() && k == key.len() {
        // exact coverage; a hit only if this node is an endpoint
        if node.payload.is_some() {
            lookup.record(node, true);
        }
        return;
    }

    if j < path.len() {
        // the walk stopped inside the key: the path diverged from this
        // node's label, so neither tolerance nor children apply
        if k < key.len() {
            return;
        }

        // tolerate one dangling slash on the path side
        if !key.is_empty() && j + 1 == path.len() && path[j] == b'/' {
            lookup.record(node, true);
            return;
        }

        // descend into the first child able to continue the match;
        // children are in priority order and the walk never backtracks
        let remainder = &path[j..];
        for child in &node.children {
            match child.key().first() {
                Some(&b':') | Some(&b'*') => {}
                Some(&byte) if byte == remainder[0] => {}
                _ => continue,
            }
            lookup.record(node, false);
            walk(child, remainder, lookup, false);
            return;
        }
        return;
    }

    // the path ran out inside this node's key
    if k + 1 == key.len() && key[k] == b'/' {
        // the key carries one extra trailing slash
        lookup.record(node, true);
        return;
    }

    // an optional catch-all right behind the matched prefix binds the
    // empty string
    if key[k] == b'*' || (key[k] == b'/' && key.get(k + 1) == Some(&b'*')) {
        let star = if key[k] == b'*' { k } else { k + 1 };
        lookup.capture(text(&key[star + 1..]), String::new());
        lookup.record(node, true);
    }
}

fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
