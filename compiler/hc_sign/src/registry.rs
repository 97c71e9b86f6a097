//! Sign registry and resolver.

use hc_ir::{builtins, Alias, Class, Hint};
use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{Sign, SignTrie};

/// Programmer errors while building the registry.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum SignError {
    #[error("no hint sign is named '{0}'")]
    UnknownName(String),
    #[error("hint sign '{0}' registered twice")]
    Duplicate(String),
    #[error("sign trie path '{path}' collides with an existing entry")]
    TrieCollision { path: String },
}

/// Typing constructs valid bare or subscripted by any number of arguments.
const TYPING_ARGS_0_OR_MORE: &[(&str, Sign)] = &[
    ("Any", Sign::Any),
    ("Generic", Sign::Generic),
    ("Protocol", Sign::Generic),
    ("List", Sign::List),
    ("Sequence", Sign::Sequence),
    ("MutableSequence", Sign::MutableSequence),
    ("Tuple", Sign::Tuple),
    ("Dict", Sign::Dict),
    ("Mapping", Sign::Mapping),
    ("MutableMapping", Sign::MutableMapping),
    ("Set", Sign::Set),
    ("FrozenSet", Sign::FrozenSet),
    ("AbstractSet", Sign::AbstractSet),
    ("MutableSet", Sign::MutableSet),
    ("Iterable", Sign::Iterable),
    ("Collection", Sign::Collection),
    ("Container", Sign::Container),
    ("Type", Sign::Type),
];

/// Typing constructs only meaningful when subscripted.
const TYPING_ARGS_1_OR_MORE: &[(&str, Sign)] = &[
    ("Union", Sign::Union),
    ("Optional", Sign::Optional),
    ("Annotated", Sign::Annotated),
    ("Literal", Sign::Literal),
];

/// Builtin classes that subscript directly (`list[int]`).
const BUILTIN_SUBSCRIPTABLE: &[(&str, Sign)] = &[
    ("list", Sign::List),
    ("tuple", Sign::Tuple),
    ("dict", Sign::Dict),
    ("set", Sign::Set),
    ("frozenset", Sign::FrozenSet),
    ("type", Sign::Type),
];

/// Explicit (module, qualname) entries, applied over the reflective ones.
const TYPE_OVERRIDES: &[(&str, &str, Sign)] = &[
    ("builtins", "NoneType", Sign::NoneType),
    ("collections.abc", "Set", Sign::AbstractSet),
];

/// Vendor modules mirroring `typing`.
const VENDOR_TYPING_MODULES: &[&str] = &["typing_extensions", "hintcheck.typing"];

/// Lookup structures resolving hints to signs.
#[derive(Debug)]
pub struct SignRegistry {
    registered: FxHashMap<&'static str, Sign>,
    /// module -> qualname -> sign, for plain classes.
    type_signs: FxHashMap<String, FxHashMap<String, Sign>>,
    args_0_or_more: FxHashMap<String, Sign>,
    args_1_or_more: FxHashMap<String, Sign>,
    vendor_0_or_more: SignTrie,
    vendor_1_or_more: SignTrie,
    origins: FxHashMap<Sign, Class>,
}

/// Build the registry. Called once at startup.
pub fn build_registry() -> Result<SignRegistry, SignError> {
    let mut registry = SignRegistry {
        registered: FxHashMap::default(),
        type_signs: FxHashMap::default(),
        args_0_or_more: FxHashMap::default(),
        args_1_or_more: FxHashMap::default(),
        vendor_0_or_more: SignTrie::new(),
        vendor_1_or_more: SignTrie::new(),
        origins: FxHashMap::default(),
    };

    for sign in Sign::ALL {
        registry.register_sign(sign.name())?;
    }
    registry.populate_type_tables();
    registry.populate_prefix_tables();
    registry.populate_vendor_tries()?;
    registry.populate_origins();

    tracing::debug!(
        signs = registry.registered.len(),
        prefixes = registry.args_0_or_more.len() + registry.args_1_or_more.len(),
        "sign registry built"
    );
    Ok(registry)
}

impl SignRegistry {
    /// Record the sign called `name`.
    ///
    /// Unknown names and repeated registrations are programmer errors.
    pub fn register_sign(&mut self, name: &str) -> Result<Sign, SignError> {
        let sign = Sign::from_name(name).ok_or_else(|| SignError::UnknownName(name.to_owned()))?;
        if self.registered.insert(sign.name(), sign).is_some() {
            return Err(SignError::Duplicate(name.to_owned()));
        }
        Ok(sign)
    }

    pub fn is_registered(&self, sign: Sign) -> bool {
        self.registered.contains_key(sign.name())
    }

    fn populate_type_tables(&mut self) {
        // Reflective pass: abstract classes named after their sign.
        for class in builtins().abstract_classes() {
            if let Some(sign) = Sign::from_name(class.qualname()) {
                self.insert_type_sign(class.module(), class.qualname(), sign);
            }
        }
        for &(name, sign) in BUILTIN_SUBSCRIPTABLE {
            self.insert_type_sign("builtins", name, sign);
        }
        for &(module, qualname, sign) in TYPE_OVERRIDES {
            self.insert_type_sign(module, qualname, sign);
        }
    }

    fn insert_type_sign(&mut self, module: &str, qualname: &str, sign: Sign) {
        self.type_signs
            .entry(module.to_owned())
            .or_default()
            .insert(qualname.to_owned(), sign);
    }

    fn populate_prefix_tables(&mut self) {
        for &(name, sign) in TYPING_ARGS_0_OR_MORE {
            self.args_0_or_more.insert(format!("typing.{name}"), sign);
        }
        for &(name, sign) in TYPING_ARGS_1_OR_MORE {
            self.args_1_or_more.insert(format!("typing.{name}"), sign);
        }
        for class in builtins().abstract_classes() {
            if let Some(sign) = self.type_sign(class.module(), class.qualname()) {
                self.args_0_or_more
                    .insert(format!("{}.{}", class.module(), class.qualname()), sign);
            }
        }
        for &(name, sign) in BUILTIN_SUBSCRIPTABLE {
            self.args_0_or_more.insert(name.to_owned(), sign);
        }
    }

    fn populate_vendor_tries(&mut self) -> Result<(), SignError> {
        for vendor in VENDOR_TYPING_MODULES {
            for &(name, sign) in TYPING_ARGS_0_OR_MORE {
                self.vendor_0_or_more.insert(&format!("{vendor}.{name}"), sign)?;
            }
            for &(name, sign) in TYPING_ARGS_1_OR_MORE {
                self.vendor_1_or_more.insert(&format!("{vendor}.{name}"), sign)?;
            }
        }
        Ok(())
    }

    fn populate_origins(&mut self) {
        let b = builtins();
        let origins = [
            (Sign::NoneType, &b.none_type),
            (Sign::Type, &b.type_),
            (Sign::List, &b.list),
            (Sign::Sequence, &b.sequence),
            (Sign::MutableSequence, &b.mutable_sequence),
            (Sign::Tuple, &b.tuple),
            (Sign::Dict, &b.dict),
            (Sign::Mapping, &b.mapping),
            (Sign::MutableMapping, &b.mutable_mapping),
            (Sign::Set, &b.set),
            (Sign::FrozenSet, &b.frozenset),
            (Sign::AbstractSet, &b.abstract_set),
            (Sign::MutableSet, &b.mutable_set),
            (Sign::Iterable, &b.iterable),
            (Sign::Collection, &b.collection),
            (Sign::Container, &b.container),
        ];
        for (sign, class) in origins {
            self.origins.insert(sign, class.clone());
        }
    }

    /// Sign registered for a plain class, if any.
    pub fn type_sign(&self, module: &str, qualname: &str) -> Option<Sign> {
        self.type_signs.get(module)?.get(qualname).copied()
    }

    /// Isinstanceable class behind an origin-typed sign.
    pub fn origin_class(&self, sign: Sign) -> Option<&Class> {
        self.origins.get(&sign)
    }

    /// Resolve `hint` to its sign, or `None` if it is not recognised.
    pub fn resolve_sign(&self, hint: &Hint) -> Option<Sign> {
        match hint {
            Hint::None => Some(Sign::NoneType),
            Hint::NoReturn => Some(Sign::NoReturn),
            Hint::ForwardRef(_) => Some(Sign::ForwardRef),
            Hint::Class(class) => Some(self.resolve_class(class)),
            Hint::Alias(alias) => self.resolve_alias(alias),
        }
    }

    fn resolve_class(&self, class: &Class) -> Sign {
        if class.is_generic() {
            return Sign::Generic;
        }
        self.type_sign(class.module(), class.qualname())
            .unwrap_or(Sign::Class)
    }

    fn resolve_alias(&self, alias: &Alias) -> Option<Sign> {
        if alias.origin.as_ref().is_some_and(Class::is_generic) {
            return Some(Sign::Generic);
        }
        if let Some(sign) = self
            .args_0_or_more
            .get(&alias.path)
            .copied()
            .or_else(|| self.vendor_0_or_more.get(&alias.path))
        {
            return Some(sign);
        }
        let has_args = alias.args.as_ref().is_some_and(|args| !args.is_empty());
        if !has_args {
            return None;
        }
        self.args_1_or_more
            .get(&alias.path)
            .copied()
            .or_else(|| self.vendor_1_or_more.get(&alias.path))
    }
}
