//! Resolution of requested resources into a render tree.
//!
//! Rules, applied to each requested id in order (the root excluded):
//! - a child whose parent is also requested is left to the parent, which
//!   embeds it only if it declares it as a child;
//! - a child requested without its parent is reached through the parent,
//!   unless that parent is the root, which already encloses everything;
//! - anything else is selected directly.
//!
//! Each selected resource embeds the requested ids among its declared
//! children, one level deep. Unregistered ids are dropped.

use std::fmt;

use hubql_core::{Registry, ResourceId, ResourceMetadata, VariableDecl};
use indexmap::IndexSet;

use crate::tree::{QueryNode, render_all};
use crate::variables::VariableSet;
use crate::{Error, Result};

/// Why a requested id is absent from a compiled document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkipReason {
    /// No registry entry.
    Unregistered,
    /// Registered, but no requested resource declares it as a child along
    /// the path it is reachable through.
    Unreachable,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Skipped {
    pub id: ResourceId,
    pub reason: SkipReason,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reason {
            SkipReason::Unregistered => write!(f, "`{}` (unregistered)", self.id),
            SkipReason::Unreachable => write!(f, "`{}` (unreachable)", self.id),
        }
    }
}

/// A rendered query document and what went into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    document: String,
    variables: Vec<VariableDecl>,
    resources: Vec<ResourceId>,
    skipped: Vec<Skipped>,
}

impl CompiledQuery {
    pub fn document(&self) -> &str {
        &self.document
    }

    pub fn into_document(self) -> String {
        self.document
    }

    /// Declarations in the document header, first-seen order.
    pub fn variables(&self) -> &[VariableDecl] {
        &self.variables
    }

    /// Every resource with a selection in the document, root first.
    ///
    /// Includes parents selected on behalf of a requested child.
    pub fn resources(&self) -> &[ResourceId] {
        &self.resources
    }

    /// Requested ids that were left out, in request order.
    pub fn skipped(&self) -> &[Skipped] {
        &self.skipped
    }
}

impl fmt::Display for CompiledQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.document)
    }
}

/// Compile `requested` under `root` and return the document text.
///
/// Lenient: unregistered and unreachable ids are left out silently.
/// Use [`QueryBuilder`] to inspect what was left out or to reject it.
pub fn compile<I>(registry: &Registry, root: &ResourceId, requested: I) -> Result<String>
where
    I: IntoIterator,
    I::Item: Into<ResourceId>,
{
    QueryBuilder::new(registry, root.clone())
        .request(requested)
        .build()
        .map(CompiledQuery::into_document)
}

/// Builder for one compile call.
///
/// ```ignore
/// let query = QueryBuilder::new(&registry, github::ORGANIZATION)
///     .request([github::ORGANIZATION_MEMBERS, github::TEAMS])
///     .build()?;
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder<'r> {
    registry: &'r Registry,
    root: ResourceId,
    requested: IndexSet<ResourceId>,
    strict: bool,
}

impl<'r> QueryBuilder<'r> {
    pub fn new(registry: &'r Registry, root: impl Into<ResourceId>) -> Self {
        Self {
            registry,
            root: root.into(),
            requested: IndexSet::new(),
            strict: false,
        }
    }

    /// Add ids to embed. Repeats keep their first position.
    pub fn request<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ResourceId>,
    {
        self.requested.extend(ids.into_iter().map(Into::into));
        self
    }

    /// Fail with [`Error::Unresolved`] instead of leaving ids out.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    pub fn build(self) -> Result<CompiledQuery> {
        let registry = self.registry;
        let root = &self.root;
        let root_entry = registry
            .get(root)
            .ok_or_else(|| Error::UnknownRoot(root.clone()))?;
        registry
            .parent_chain(root)
            .map_err(Error::CyclicParentChain)?;

        let requested: IndexSet<&ResourceId> =
            self.requested.iter().filter(|&id| id != root).collect();

        let mut variables = VariableSet::new();
        variables.extend(&root_entry.variables)?;

        let mut selected: IndexSet<&ResourceId> = IndexSet::new();
        let mut embedded: IndexSet<&ResourceId> = IndexSet::new();
        let mut selections = Vec::new();

        for &id in &requested {
            let Some(entry) = registry.get(id) else {
                tracing::trace!(resource = %id, "unregistered, left out");
                continue;
            };
            registry
                .parent_chain(id)
                .map_err(Error::CyclicParentChain)?;

            let Some((effective_id, effective)) = resolve(registry, root, &requested, id, entry)
            else {
                continue;
            };
            if !selected.insert(effective_id) {
                tracing::trace!(resource = %id, via = %effective_id, "already selected");
                continue;
            }
            variables.extend(&effective.variables)?;

            let mut children = Vec::new();
            let slots = if effective.fragment.accepts_children() {
                effective.children.as_slice()
            } else {
                &[]
            };
            for child in slots.iter().filter(|c| requested.contains(c)) {
                let Some(child_entry) = registry.get(child) else {
                    continue;
                };
                variables.extend(&child_entry.variables)?;
                children.push(QueryNode::leaf(&child_entry.fragment));
                embedded.insert(child);
            }
            tracing::trace!(
                resource = %id,
                via = %effective_id,
                children = children.len(),
                "selected"
            );
            selections.push(QueryNode::selection(&effective.fragment, children));
        }

        let skipped: Vec<Skipped> = requested
            .iter()
            .filter(|&&id| !selected.contains(id) && !embedded.contains(id))
            .map(|&id| Skipped {
                id: id.clone(),
                reason: if registry.contains(id) {
                    SkipReason::Unreachable
                } else {
                    SkipReason::Unregistered
                },
            })
            .collect();
        if self.strict && !skipped.is_empty() {
            return Err(Error::Unresolved(skipped));
        }

        let tree = [
            QueryNode::selection(&root_entry.fragment, selections),
            QueryNode::RateLimit,
        ];
        let body = render_all(&tree);
        let document = if variables.is_empty() {
            format!("query {{\n{body}\n}}")
        } else {
            format!("query ({variables}) {{\n{body}\n}}")
        };

        let resources: Vec<ResourceId> = std::iter::once(root)
            .chain(selected.iter().copied())
            .chain(embedded.iter().copied().filter(|id| !selected.contains(id)))
            .cloned()
            .collect();

        tracing::debug!(
            root = %root,
            selections = selected.len(),
            variables = variables.len(),
            skipped = skipped.len(),
            "compiled query"
        );

        Ok(CompiledQuery {
            document,
            variables: variables.into_vec(),
            resources,
            skipped,
        })
    }
}

/// The entry selected at top level on behalf of `id`, or `None` when `id`
/// is left to its requested parent.
///
/// A child of the root is always selected directly, even when the root itself
/// was requested, since the root is never a top-level selection.
fn resolve<'r>(
    registry: &'r Registry,
    root: &ResourceId,
    requested: &IndexSet<&ResourceId>,
    id: &'r ResourceId,
    entry: &'r ResourceMetadata,
) -> Option<(&'r ResourceId, &'r ResourceMetadata)> {
    let Some(parent) = &entry.parent else {
        return Some((id, entry));
    };
    if parent == root {
        return Some((id, entry));
    }
    if requested.contains(parent) {
        tracing::trace!(resource = %id, parent = %parent, "left to requested parent");
        return None;
    }
    let Some(parent_entry) = registry.get(parent) else {
        tracing::trace!(resource = %id, parent = %parent, "parent unregistered, left out");
        return None;
    };
    Some((parent, parent_entry))
}
