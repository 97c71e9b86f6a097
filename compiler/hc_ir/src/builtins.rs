//! Builtin and abstract collection classes.
//!
//! The hierarchy mirrors the host language, including the virtual
//! registrations that make `list` a `MutableSequence` and `str` a `Sequence`.

use std::sync::OnceLock;

use crate::Class;

const BUILTINS: &str = "builtins";
const ABC: &str = "collections.abc";

/// Process-wide table of builtin classes.
pub struct Builtins {
    pub object: Class,
    pub type_: Class,
    pub none_type: Class,
    pub int: Class,
    pub bool_: Class,
    pub float: Class,
    pub str_: Class,
    pub bytes: Class,
    pub list: Class,
    pub tuple: Class,
    pub dict: Class,
    pub set: Class,
    pub frozenset: Class,

    // collections.abc
    pub iterable: Class,
    pub container: Class,
    pub sized: Class,
    pub collection: Class,
    pub sequence: Class,
    pub mutable_sequence: Class,
    pub abstract_set: Class,
    pub mutable_set: Class,
    pub mapping: Class,
    pub mutable_mapping: Class,
}

impl Builtins {
    fn new() -> Self {
        let object = Class::with_bases(BUILTINS, "object", &[]);

        let iterable = Class::with_bases(ABC, "Iterable", &[&object]);
        let container = Class::with_bases(ABC, "Container", &[&object]);
        let sized = Class::with_bases(ABC, "Sized", &[&object]);
        let collection = Class::with_bases(ABC, "Collection", &[&sized, &iterable, &container]);
        let sequence = Class::with_bases(ABC, "Sequence", &[&collection]);
        let mutable_sequence = Class::with_bases(ABC, "MutableSequence", &[&sequence]);
        let abstract_set = Class::with_bases(ABC, "Set", &[&collection]);
        let mutable_set = Class::with_bases(ABC, "MutableSet", &[&abstract_set]);
        let mapping = Class::with_bases(ABC, "Mapping", &[&collection]);
        let mutable_mapping = Class::with_bases(ABC, "MutableMapping", &[&mapping]);

        let int = Class::with_bases(BUILTINS, "int", &[&object]);
        Builtins {
            type_: Class::with_bases(BUILTINS, "type", &[&object]),
            none_type: Class::with_bases(BUILTINS, "NoneType", &[&object]),
            bool_: Class::with_bases(BUILTINS, "bool", &[&int]),
            int,
            float: Class::with_bases(BUILTINS, "float", &[&object]),
            str_: Class::with_bases(BUILTINS, "str", &[&sequence]),
            bytes: Class::with_bases(BUILTINS, "bytes", &[&sequence]),
            list: Class::with_bases(BUILTINS, "list", &[&mutable_sequence]),
            tuple: Class::with_bases(BUILTINS, "tuple", &[&sequence]),
            dict: Class::with_bases(BUILTINS, "dict", &[&mutable_mapping]),
            set: Class::with_bases(BUILTINS, "set", &[&mutable_set]),
            frozenset: Class::with_bases(BUILTINS, "frozenset", &[&abstract_set]),
            object,
            iterable,
            container,
            sized,
            collection,
            sequence,
            mutable_sequence,
            abstract_set,
            mutable_set,
            mapping,
            mutable_mapping,
        }
    }

    /// Builtin class named `name` (`int`, `NoneType`, ...).
    pub fn lookup(&self, name: &str) -> Option<&Class> {
        [
            &self.object,
            &self.type_,
            &self.none_type,
            &self.int,
            &self.bool_,
            &self.float,
            &self.str_,
            &self.bytes,
            &self.list,
            &self.tuple,
            &self.dict,
            &self.set,
            &self.frozenset,
        ]
        .into_iter()
        .find(|class| class.qualname() == name)
    }

    /// The abstract collection classes, in definition order.
    pub fn abstract_classes(&self) -> [&Class; 10] {
        [
            &self.iterable,
            &self.container,
            &self.sized,
            &self.collection,
            &self.sequence,
            &self.mutable_sequence,
            &self.abstract_set,
            &self.mutable_set,
            &self.mapping,
            &self.mutable_mapping,
        ]
    }
}

/// Get the builtins table, building it on first use.
pub fn builtins() -> &'static Builtins {
    static BUILTINS_TABLE: OnceLock<Builtins> = OnceLock::new();
    BUILTINS_TABLE.get_or_init(Builtins::new)
}
