//! Runtime classes.
//!
//! A class knows its defining module, its qualified name, its direct bases,
//! and the hints it was declared to subclass (`orig_bases`). The latter
//! survive only as metadata: a generic like `class Pair(List[int], Generic[T])`
//! has the runtime base `list`, while `List[int]` and `Generic[T]` are its
//! unerased pseudo-superclasses.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{builtins, Hint};

/// Identity-compared handle to a runtime class.
#[derive(Clone)]
pub struct Class(Arc<ClassData>);

struct ClassData {
    module: String,
    qualname: String,
    bases: Vec<Class>,
    orig_bases: Vec<Hint>,
}

/// Builder for user-defined classes.
///
/// A class built without explicit bases subclasses `object`.
#[must_use]
pub struct ClassBuilder {
    module: String,
    qualname: String,
    bases: Vec<Class>,
    orig_bases: Vec<Hint>,
}

impl ClassBuilder {
    /// Add a direct runtime base.
    pub fn base(mut self, base: &Class) -> Self {
        self.bases.push(base.clone());
        self
    }

    /// Add a declared pseudo-superclass (erased from the runtime hierarchy).
    pub fn orig_base(mut self, hint: Hint) -> Self {
        self.orig_bases.push(hint);
        self
    }

    pub fn build(self) -> Class {
        let bases = if self.bases.is_empty() {
            vec![builtins().object.clone()]
        } else {
            self.bases
        };
        Class(Arc::new(ClassData {
            module: self.module,
            qualname: self.qualname,
            bases,
            orig_bases: self.orig_bases,
        }))
    }
}

impl Class {
    /// Start building a class defined in `module` under `qualname`.
    pub fn builder(module: impl Into<String>, qualname: impl Into<String>) -> ClassBuilder {
        ClassBuilder {
            module: module.into(),
            qualname: qualname.into(),
            bases: Vec::new(),
            orig_bases: Vec::new(),
        }
    }

    /// Shorthand for a plain class subclassing only `object`.
    pub fn new(module: impl Into<String>, qualname: impl Into<String>) -> Self {
        Self::builder(module, qualname).build()
    }

    /// Create a class with exactly the given bases, bypassing the implicit
    /// `object` base. Only the builtins table uses this.
    pub(crate) fn with_bases(module: &str, qualname: &str, bases: &[&Class]) -> Self {
        Class(Arc::new(ClassData {
            module: module.to_owned(),
            qualname: qualname.to_owned(),
            bases: bases.iter().map(|&base| base.clone()).collect(),
            orig_bases: Vec::new(),
        }))
    }

    pub fn module(&self) -> &str {
        &self.0.module
    }

    pub fn qualname(&self) -> &str {
        &self.0.qualname
    }

    /// Unqualified name (last segment of the qualified name).
    pub fn name(&self) -> &str {
        self.0
            .qualname
            .rsplit('.')
            .next()
            .unwrap_or(&self.0.qualname)
    }

    pub fn bases(&self) -> &[Class] {
        &self.0.bases
    }

    /// Declared pseudo-superclasses, in declaration order.
    pub fn orig_bases(&self) -> &[Hint] {
        &self.0.orig_bases
    }

    /// A user generic declares at least one pseudo-superclass.
    pub fn is_generic(&self) -> bool {
        !self.0.orig_bases.is_empty()
    }

    pub fn is_builtin(&self) -> bool {
        self.0.module == "builtins"
    }

    /// Name used in messages: bare for builtins, module-qualified otherwise.
    pub fn display_name(&self) -> String {
        if self.is_builtin() {
            self.0.qualname.clone()
        } else {
            format!("{}.{}", self.0.module, self.0.qualname)
        }
    }

    /// Host-style class representation, e.g. `<class 'int'>`.
    pub fn repr(&self) -> String {
        format!("<class '{}'>", self.display_name())
    }

    /// Whether `self` is `other` or transitively derives from it.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self == other || self.0.bases.iter().any(|base| base.is_subclass_of(other))
    }

    /// Method resolution order.
    ///
    /// Depth-first, left-to-right over the bases, keeping the last occurrence
    /// of each class so shared ancestors (`object`) come after every class
    /// deriving from them.
    pub fn mro(&self) -> Vec<Class> {
        let mut walk = Vec::new();
        self.collect_depth_first(&mut walk);

        let mut mro: Vec<Class> = Vec::with_capacity(walk.len());
        for (i, class) in walk.iter().enumerate() {
            if !walk[i + 1..].contains(class) {
                mro.push(class.clone());
            }
        }
        mro
    }

    fn collect_depth_first(&self, out: &mut Vec<Class>) {
        out.push(self.clone());
        for base in &self.0.bases {
            base.collect_depth_first(out);
        }
    }
}

impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Class {}

impl Hash for Class {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Arc::as_ptr(&self.0), state);
    }
}

impl fmt::Debug for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Class({}.{})", self.0.module, self.0.qualname)
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}
