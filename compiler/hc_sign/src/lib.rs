//! Hint signs: canonical identities for categories of hints.
//!
//! Every hint the engine can diagnose resolves to exactly one [`Sign`]. Signs
//! drive dispatch; they never carry the hint's arguments.
//!
//! # Architecture
//!
//! ```text
//! build_registry()
//!     └── SignRegistry
//!         ├── type tables      (module, qualname) -> Sign, for plain classes
//!         ├── prefix tables    "typing.List" -> Sign, 0-or-more / 1-or-more args
//!         ├── SignTrie         "typing_extensions" -> "Literal" -> Sign
//!         └── origin classes   Sign -> isinstanceable Class
//! ```
//!
//! The registry is built once, before any diagnosis, and is read-only
//! afterwards. Resolution is a pure function of the hint.

mod ignorable;
mod registry;
mod sets;
mod sign;
mod trie;
mod view;

pub use ignorable::is_hint_ignorable;
pub use registry::{build_registry, SignError, SignRegistry};
pub use sets::SignSets;
pub use sign::Sign;
pub use trie::{SignTrie, TrieNode};
pub use view::HintView;
