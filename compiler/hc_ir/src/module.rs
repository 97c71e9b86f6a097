//! Module namespaces and decorated callables.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::{Class, Hint};

/// Pith name designating a callable's return value.
pub const RETURN_NAME: &str = "return";

/// A value bound in a module namespace.
#[derive(Clone, Debug)]
pub enum Global {
    Class(Class),
    Module(Arc<Module>),
}

/// A module namespace, used to resolve forward references.
#[derive(Clone, Debug, Default)]
pub struct Module {
    name: String,
    globals: FxHashMap<String, Global>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Module {
            name: name.into(),
            globals: FxHashMap::default(),
        }
    }

    /// Bind `class` under its unqualified name.
    #[must_use]
    pub fn with_class(mut self, class: &Class) -> Self {
        self.globals
            .insert(class.name().to_owned(), Global::Class(class.clone()));
        self
    }

    /// Bind `module` under `alias` (as `import x as alias` would).
    #[must_use]
    pub fn with_module(mut self, alias: impl Into<String>, module: Arc<Module>) -> Self {
        self.globals.insert(alias.into(), Global::Module(module));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn get(&self, name: &str) -> Option<&Global> {
        self.globals.get(name)
    }

    /// Resolve a possibly dotted name (`np.ndarray`) through nested modules.
    pub fn lookup(&self, dotted: &str) -> Option<&Global> {
        let mut segments = dotted.split('.');
        let mut current = self.get(segments.next()?)?;
        for segment in segments {
            match current {
                Global::Module(module) => current = module.get(segment)?,
                Global::Class(_) => return None,
            }
        }
        Some(current)
    }
}

/// A callable whose parameters and return are annotated with hints.
#[derive(Clone, Debug)]
pub struct Callable {
    module: Arc<Module>,
    qualname: String,
    params: Vec<(String, Hint)>,
    returns: Option<Hint>,
}

impl Callable {
    pub fn new(module: Arc<Module>, qualname: impl Into<String>) -> Self {
        Callable {
            module,
            qualname: qualname.into(),
            params: Vec::new(),
            returns: None,
        }
    }

    /// Declare an annotated parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, hint: Hint) -> Self {
        self.params.push((name.into(), hint));
        self
    }

    /// Declare the return annotation.
    #[must_use]
    pub fn returns(mut self, hint: Hint) -> Self {
        self.returns = Some(hint);
        self
    }

    pub fn module(&self) -> &Module {
        &self.module
    }

    pub fn qualname(&self) -> &str {
        &self.qualname
    }

    /// Fully qualified name, e.g. `pkg.mod.Class.method`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.module.name(), self.qualname)
    }

    /// The hint annotating `pith_name` (`"return"` for the return value).
    pub fn hint_for(&self, pith_name: &str) -> Option<&Hint> {
        if pith_name == RETURN_NAME {
            return self.returns.as_ref();
        }
        self.params
            .iter()
            .find(|(name, _)| name == pith_name)
            .map(|(_, hint)| hint)
    }
}
