#![deny(rust_2018_idioms)]

//! Matches URL-style paths against registered patterns, with support
//! for named parameters and catch-all globs.
//!
//! ```rust
//! use routrie::Tree;
//!
//! # fn main() -> Result<(), routrie::InsertError> {
//! let mut tree = Tree::new();
//! tree.add("/", "home")?;
//! tree.add("/products/:id", "product")?;
//! tree.add("/static/*filepath", "assets")?;
//!
//! let lookup = tree.find("/products/1000");
//! assert!(lookup.found());
//! assert_eq!(lookup.payload(), Some(&"product"));
//! assert_eq!(lookup.key(), "/products/:id");
//! assert_eq!(lookup.params().get("id"), Some("1000"));
//! # Ok(())
//! # }
//! ```
//!
//! Patterns live in a [radix tree](https://en.wikipedia.org/wiki/Radix_tree):
//! edges carry byte strings of arbitrary length and nodes exist only
//! where patterns branch, so a lookup walks a single root-to-leaf
//! trail in time linear in the length of the path.
//!
//! ### Parameters
//!
//! A pattern may declare two kinds of placeholders:
//!
//! ```text
//! Syntax    Type
//! :name     named parameter
//! *name     catch-all parameter
//! ```
//!
//! Named parameters are dynamic path segments. They match anything up
//! to the next `/` or the end of the path:
//!
//! ```text
//! Pattern: /user/:user
//!
//!  /user/gordon              match: user = "gordon"
//!  /user/you                 match: user = "you"
//!  /user/gordon/profile      no match
//! ```
//!
//! Sibling patterns may not disagree on a parameter name: once
//! `/user/:user` is registered, adding `/user/:id` fails with
//! [`InsertError::SharedKey`]. Literal siblings are fine and win over
//! the parameter, so `/user/new` and `/user/:user` can coexist, with
//! `/user/new` answering its exact path.
//!
//! Catch-all parameters match the entire remaining path, even an empty
//! one, so they only make sense as the final segment of a pattern:
//!
//! ```text
//! Pattern: /src/*filepath
//!
//!  /src                      match: filepath = ""
//!  /src/somefile.rs          match: filepath = "somefile.rs"
//!  /src/subdir/somefile.rs   match: filepath = "subdir/somefile.rs"
//! ```
//!
//! ### Trailing slashes
//!
//! A single dangling `/` on either side is tolerated: with `/about`
//! registered, `find("/about/")` matches it, and with `/about/`
//! registered, `find("/about")` does.
//!
//! ### How branches are chosen
//!
//! The children of every node are kept sorted by a priority derived
//! from their edge label: catch-all edges rank lowest, named-parameter
//! edges just above them, and literal edges rank by length so the most
//! specific text is tried first.
//!
//! ```text
//! Priority   Key
//! 8          featured
//! 1          :id
//! 0          *rest
//! ```
//!
//! A lookup takes the first child able to continue the match and never
//! backtracks, which is what keeps the per-node work constant.

mod error;
mod lookup;
mod node;
mod params;
mod tree;

pub use error::InsertError;
pub use lookup::Lookup;
pub use params::{Params, ParamsIter};
pub use tree::Tree;
