//! Structural checks for registries.
//!
//! A malformed registry is a programming error. Built-in registries are
//! checked by tests; registries loaded at runtime can be checked before use.

use indexmap::IndexSet;

use crate::{Registry, ResourceId};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("`{resource}` names unregistered parent `{parent}`")]
    UnknownParent {
        resource: ResourceId,
        parent: ResourceId,
    },

    #[error("`{resource}` names unregistered child `{child}`")]
    UnknownChild {
        resource: ResourceId,
        child: ResourceId,
    },

    #[error("`{resource}` declares children but its fragment has no slot for them")]
    LeafWithChildren { resource: ResourceId },

    #[error("cyclic parent chain: {}", format_chain(.0))]
    ParentCycle(Vec<ResourceId>),

    #[error("cyclic child links: {}", format_chain(.0))]
    ChildCycle(Vec<ResourceId>),
}

pub(crate) fn format_chain(chain: &[ResourceId]) -> String {
    chain
        .iter()
        .map(ResourceId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl Registry {
    /// Check that every link resolves, that only nested fragments declare
    /// children, and that neither parent nor child links cycle.
    ///
    /// Reports the first problem found, in registration order.
    pub fn validate(&self) -> Result<(), RegistryError> {
        for (id, entry) in self.iter() {
            if let Some(parent) = &entry.parent
                && !self.contains(parent)
            {
                return Err(RegistryError::UnknownParent {
                    resource: id.clone(),
                    parent: parent.clone(),
                });
            }
            if let Some(child) = entry.children.iter().find(|c| !self.contains(c)) {
                return Err(RegistryError::UnknownChild {
                    resource: id.clone(),
                    child: child.clone(),
                });
            }
            if !entry.children.is_empty() && !entry.fragment.accepts_children() {
                return Err(RegistryError::LeafWithChildren {
                    resource: id.clone(),
                });
            }
        }

        for id in self.ids() {
            self.parent_chain(id).map_err(RegistryError::ParentCycle)?;
        }

        let mut done = IndexSet::new();
        for id in self.ids() {
            let mut path = IndexSet::new();
            self.visit_children(id, &mut path, &mut done)
                .map_err(RegistryError::ChildCycle)?;
        }

        Ok(())
    }

    /// Ancestors of `id`, nearest first.
    ///
    /// Returns the offending chain, closed on the repeated id, if the parent
    /// links loop. Unregistered parents end the chain.
    pub fn parent_chain(&self, id: &ResourceId) -> Result<Vec<ResourceId>, Vec<ResourceId>> {
        let mut seen: IndexSet<&ResourceId> = IndexSet::new();
        seen.insert(id);

        let mut current = id;
        while let Some(parent) = self.get(current).and_then(|e| e.parent.as_ref()) {
            if !seen.insert(parent) {
                let mut cycle: Vec<ResourceId> = seen.into_iter().cloned().collect();
                cycle.push(parent.clone());
                return Err(cycle);
            }
            current = parent;
        }

        Ok(seen.into_iter().skip(1).cloned().collect())
    }

    fn visit_children<'a>(
        &'a self,
        id: &'a ResourceId,
        path: &mut IndexSet<&'a ResourceId>,
        done: &mut IndexSet<&'a ResourceId>,
    ) -> Result<(), Vec<ResourceId>> {
        if done.contains(id) {
            return Ok(());
        }
        if !path.insert(id) {
            let start = path.get_index_of(id).unwrap_or(0);
            let mut cycle: Vec<ResourceId> = path.iter().skip(start).map(|&c| c.clone()).collect();
            cycle.push(id.clone());
            return Err(cycle);
        }

        if let Some(entry) = self.get(id) {
            for child in &entry.children {
                self.visit_children(child, path, done)?;
            }
        }

        path.pop();
        done.insert(id);
        Ok(())
    }
}
