//! Runtime object model for hintcheck.
//!
//! The diagnosis engine reasons about objects of a gradually-typed host
//! language: classes with (possibly erased) generic bases, runtime values,
//! structural type hints, and the callables those hints decorate. This crate
//! models all of them explicitly so the engine never has to guess.
//!
//! # Identity
//!
//! - `Class` is identity-compared (`Arc` pointer equality), as in the host
//!   language. Two classes with the same name are still distinct classes.
//! - `Hint` and `Value` are cheap to clone; hints share subtrees via `Arc`.
//!
//! # Builtins
//!
//! [`builtins()`] returns the process-wide table of builtin and abstract
//! collection classes. It is built once and never mutated afterwards.

mod builtins;
mod class;
mod hint;
mod module;
mod validator;
mod value;

pub use builtins::{builtins, Builtins};
pub use class::{Class, ClassBuilder};
pub use hint::{Alias, Hint, HintArg};
pub use module::{Callable, Global, Module, RETURN_NAME};
pub use validator::{Is, IsAll, Validator};
pub use value::{Object, Value};
