#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Resource metadata for hubql query compilation.
//!
//! A [`Registry`] maps each [`ResourceId`] to the [`ResourceMetadata`] needed
//! to select it: the variables it declares, the fragment text it renders, and
//! how it nests under or above other resources.
//!
//! Parent/child links are stored as identifiers, not references. The registry
//! is a flat arena keyed by id, which keeps it serializable and comparable.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub mod github;
mod registry;
mod validate;

#[cfg(test)]
mod lib_tests;
#[cfg(test)]
mod registry_tests;

pub use registry::{Registry, RegistryBuilder, RegistryConfig, build_registry};
pub use validate::RegistryError;

// ============================================================================
// Identifiers
// ============================================================================

/// Symbolic name of a fetchable resource type (`organization`, `teams`, ...).
///
/// Built-in ids are `const` and borrow their name; ids read at runtime own it.
/// Equality and hashing only look at the name.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(Cow<'static, str>);

impl ResourceId {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ResourceId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ResourceId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&ResourceId> for ResourceId {
    fn from(id: &ResourceId) -> Self {
        id.clone()
    }
}

impl AsRef<str> for ResourceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

// ============================================================================
// Variables
// ============================================================================

/// A GraphQL variable declaration, rendered as `$name: Type`.
///
/// Two declarations denote the same variable when their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VariableDecl {
    /// Name without the leading `$`.
    pub name: String,
    /// GraphQL input type, e.g. `String!`.
    #[serde(rename = "type")]
    pub ty: String,
}

impl VariableDecl {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
        }
    }
}

impl fmt::Display for VariableDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}: {}", self.name, self.ty)
    }
}

// ============================================================================
// Fragments
// ============================================================================

/// Selection text for one resource, with an optional slot for nested selections.
///
/// Rendering with an empty children string always yields a complete selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fragment {
    /// Selection that never embeds anything below itself.
    Leaf(String),
    /// Selection with nested selections spliced between `open` and `close`.
    Nested { open: String, close: String },
}

impl Fragment {
    pub fn leaf(text: impl Into<String>) -> Self {
        Fragment::Leaf(text.into())
    }

    pub fn nested(open: impl Into<String>, close: impl Into<String>) -> Self {
        Fragment::Nested {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Render this fragment around already-rendered `children`.
    ///
    /// `open` is expected to end at a line break and `close` to start a line,
    /// so non-empty `children` get a trailing newline. Leaf fragments drop
    /// `children`.
    pub fn render(&self, children: &str) -> String {
        match self {
            Fragment::Leaf(text) => text.clone(),
            Fragment::Nested { open, close } => {
                let mut out =
                    String::with_capacity(open.len() + children.len() + close.len() + 1);
                out.push_str(open);
                if !children.is_empty() {
                    out.push_str(children);
                    out.push('\n');
                }
                out.push_str(close);
                out
            }
        }
    }

    /// Whether rendering splices in nested selections.
    pub fn accepts_children(&self) -> bool {
        matches!(self, Fragment::Nested { .. })
    }
}

// ============================================================================
// Metadata
// ============================================================================

/// Everything the compiler needs to know about one resource type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceMetadata {
    /// Variables this selection requires, in declaration order.
    #[serde(default)]
    pub variables: Vec<VariableDecl>,
    pub fragment: Fragment,
    /// The only resource this one is reachable through, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ResourceId>,
    /// Resources this one can embed directly beneath itself, in render order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ResourceId>,
    /// Wire field name when it differs from the resource id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_field: Option<String>,
    /// Dotted path to this resource's data in a response, e.g. `repository.pullRequest`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_path: Option<String>,
}

impl ResourceMetadata {
    pub fn new(fragment: Fragment) -> Self {
        Self {
            variables: Vec::new(),
            fragment,
            parent: None,
            children: Vec::new(),
            alternate_field: None,
            response_path: None,
        }
    }

    pub fn variable(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.variables.push(VariableDecl::new(name, ty));
        self
    }

    pub fn parent(mut self, parent: ResourceId) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = ResourceId>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn alternate_field(mut self, field: impl Into<String>) -> Self {
        self.alternate_field = Some(field.into());
        self
    }

    pub fn response_path(mut self, path: impl Into<String>) -> Self {
        self.response_path = Some(path.into());
        self
    }

    /// Field name this resource appears under in a response.
    pub fn field_name<'a>(&'a self, id: &'a ResourceId) -> &'a str {
        self.alternate_field.as_deref().unwrap_or(id.as_str())
    }

    pub fn declares_child(&self, id: &ResourceId) -> bool {
        self.children.contains(id)
    }
}
