//! Variable declarations collected across every selected resource.

use std::fmt;

use hubql_core::VariableDecl;
use indexmap::IndexMap;

use crate::{Error, Result};

/// Declarations keyed by variable name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSet {
    decls: IndexMap<String, VariableDecl>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration. Returns `false` if the variable was already declared
    /// with the same type.
    ///
    /// Fails if the name is already declared with a different type.
    pub fn insert(&mut self, decl: &VariableDecl) -> Result<bool> {
        match self.decls.get(&decl.name) {
            Some(existing) if existing.ty == decl.ty => Ok(false),
            Some(existing) => Err(Error::ConflictingVariable {
                name: decl.name.clone(),
                first: existing.ty.clone(),
                second: decl.ty.clone(),
            }),
            None => {
                self.decls.insert(decl.name.clone(), decl.clone());
                Ok(true)
            }
        }
    }

    pub fn extend<'a>(&mut self, decls: impl IntoIterator<Item = &'a VariableDecl>) -> Result<()> {
        for decl in decls {
            self.insert(decl)?;
        }
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.decls.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &VariableDecl> {
        self.decls.values()
    }

    pub fn into_vec(self) -> Vec<VariableDecl> {
        self.decls.into_values().collect()
    }
}

/// `$a: A, $b: B`
impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, decl) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{decl}")?;
        }
        Ok(())
    }
}
