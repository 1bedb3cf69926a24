use std::cell::OnceCell;

use crate::node::Node;
use crate::params::Params;

/// The outcome of [`Tree::find`](crate::Tree::find).
///
/// Accumulates the trail of nodes a lookup walked through, the payload
/// of the matched endpoint (if any), and the parameters captured along
/// the way. The borrow of the tree ends when the `Lookup` is dropped;
/// its parameters and reconstructed key are owned strings.
#[derive(Debug)]
pub struct Lookup<'tree, T> {
    trail: Vec<&'tree Node<T>>,
    payload: Option<&'tree T>,
    params: Params,
    key: OnceCell<String>,
}

impl<'tree, T> Lookup<'tree, T> {
    pub(crate) fn new() -> Self {
        Lookup {
            trail: Vec::new(),
            payload: None,
            params: Params::new(),
            key: OnceCell::new(),
        }
    }

    /// Appends `node` to the matched trail. With `take_payload`, a
    /// payload carried by the node becomes the lookup's payload,
    /// replacing any earlier one.
    pub(crate) fn record(&mut self, node: &'tree Node<T>, take_payload: bool) {
        if take_payload {
            if let Some(payload) = &node.payload {
                self.payload = Some(payload);
            }
        }
        self.trail.push(node);
    }

    pub(crate) fn capture(&mut self, name: String, value: String) {
        self.params.push(name, value);
    }

    /// Whether the lookup matched an endpoint.
    pub fn found(&self) -> bool {
        self.payload.is_some()
    }

    /// The payload of the matched endpoint.
    pub fn payload(&self) -> Option<&'tree T> {
        self.payload
    }

    /// The parameters captured while walking the tree.
    ///
    /// A failed lookup may leave captures from branches walked before
    /// the miss; gate on [`found`](Lookup::found) before trusting them.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// The pattern that matched, rebuilt from the keys of the walked
    /// trail. Built on first call and cached; empty when the lookup
    /// never left the starting gate.
    pub fn key(&self) -> &str {
        self.key.get_or_init(|| {
            let mut bytes = Vec::new();
            for node in &self.trail {
                bytes.extend_from_slice(node.key());
            }
            // a matched trail always concatenates back into the
            // original pattern; a partial one may end mid-character
            match String::from_utf8(bytes) {
                Ok(key) => key,
                Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(key: &str, payload: Option<&'static str>) -> Node<&'static str> {
        Node::new(key.as_bytes().to_vec(), payload)
    }

    #[test]
    fn empty_lookup() {
        let lookup: Lookup<'_, ()> = Lookup::new();
        assert!(!lookup.found());
        assert_eq!(lookup.payload(), None);
        assert_eq!(lookup.key(), "");
        assert!(lookup.params().is_empty());
    }

    #[test]
    fn key_joins_the_trail() {
        let a = node("/", Some("root"));
        let b = node("products", None);
        let c = node("/:id", Some("product"));

        let mut lookup = Lookup::new();
        lookup.record(&a, false);
        lookup.record(&b, false);
        lookup.record(&c, true);

        assert!(lookup.found());
        assert_eq!(lookup.payload(), Some(&"product"));
        assert_eq!(lookup.key(), "/products/:id");
    }

    #[test]
    fn record_without_payload_keeps_the_slot_empty() {
        let a = node("/", Some("root"));

        let mut lookup = Lookup::new();
        lookup.record(&a, false);

        assert!(!lookup.found());
        assert_eq!(lookup.payload(), None);
        assert_eq!(lookup.key(), "/");
    }

    #[test]
    fn later_payload_wins() {
        let a = node("/", Some("root"));
        let b = node("sub", Some("sub"));

        let mut lookup = Lookup::new();
        lookup.record(&a, true);
        lookup.record(&b, true);

        assert_eq!(lookup.payload(), Some(&"sub"));
    }

    #[test]
    fn payloadless_record_does_not_clobber() {
        let a = node("/", Some("root"));
        let b = node("sub", None);

        let mut lookup = Lookup::new();
        lookup.record(&a, true);
        lookup.record(&b, true);

        assert_eq!(lookup.payload(), Some(&"root"));
    }
}
