use std::mem;
use std::slice;

/// A single captured parameter: a name and the path segment it matched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Param {
    name: String,
    value: String,
}

// most patterns declare 1-3 placeholders, so keep those inline and
// avoid a heap allocation in the common case.
const SMALL: usize = 3;

/// The parameters captured by a lookup.
///
/// Behaves like a map from parameter name to captured value: binding a
/// name twice keeps only the latest value. Both names and values are
/// owned, so the list is independent of the path that was looked up.
///
/// ```rust
/// # fn main() -> Result<(), routrie::InsertError> {
/// let mut tree = routrie::Tree::new();
/// tree.add("/users/:id", ())?;
///
/// let lookup = tree.find("/users/978");
/// assert_eq!(lookup.params().get("id"), Some("978"));
///
/// for (name, value) in lookup.params().iter() {
///     println!("{}: {}", name, value);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Params {
    kind: ParamsKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ParamsKind {
    None,
    Small([Param; SMALL], usize),
    Large(Vec<Param>),
}

impl Params {
    pub(crate) fn new() -> Self {
        Params {
            kind: ParamsKind::None,
        }
    }

    fn slice(&self) -> &[Param] {
        match &self.kind {
            ParamsKind::None => &[],
            ParamsKind::Small(arr, len) => &arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }

    fn slice_mut(&mut self) -> &mut [Param] {
        match &mut self.kind {
            ParamsKind::None => &mut [],
            ParamsKind::Small(arr, len) => &mut arr[..*len],
            ParamsKind::Large(vec) => vec,
        }
    }

    /// Returns the value captured for `name`, if any.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        let name = name.as_ref();
        self.slice()
            .iter()
            .find(|param| param.name == name)
            .map(|param| param.value.as_str())
    }

    /// Returns an iterator over the captured name/value pairs.
    pub fn iter(&self) -> ParamsIter<'_> {
        ParamsIter {
            inner: self.slice().iter(),
        }
    }

    /// Returns the number of captured parameters.
    pub fn len(&self) -> usize {
        self.slice().len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.slice().is_empty()
    }

    /// Binds `name` to `value`, replacing an earlier capture of the
    /// same name.
    pub(crate) fn push(&mut self, name: String, value: String) {
        if let Some(param) = self.slice_mut().iter_mut().find(|param| param.name == name) {
            param.value = value;
            return;
        }

        #[cold]
        fn spill(arr: &mut [Param; SMALL], param: Param) -> Vec<Param> {
            let mut vec = Vec::with_capacity(SMALL + 1);
            vec.extend(arr.iter_mut().map(mem::take));
            vec.push(param);
            vec
        }

        let param = Param { name, value };
        match &mut self.kind {
            ParamsKind::None => {
                self.kind = ParamsKind::Small([param, Param::default(), Param::default()], 1);
            }
            ParamsKind::Small(arr, len) => {
                if *len == SMALL {
                    self.kind = ParamsKind::Large(spill(arr, param));
                    return;
                }
                arr[*len] = param;
                *len += 1;
            }
            ParamsKind::Large(vec) => vec.push(param),
        }
    }
}

/// An iterator over the name/value pairs of a lookup's [`Params`].
pub struct ParamsIter<'p> {
    inner: slice::Iter<'p, Param>,
}

impl<'p> Iterator for ParamsIter<'p> {
    type Item = (&'p str, &'p str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|param| (param.name.as_str(), param.value.as_str()))
    }
}

impl<'p> IntoIterator for &'p Params {
    type Item = (&'p str, &'p str);
    type IntoIter = ParamsIter<'p>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
