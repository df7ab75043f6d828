//! The registry: an immutable, id-keyed table of resource metadata.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::{ResourceId, ResourceMetadata, github};

pub const DEFAULT_PAGE_LIMIT: u32 = 100;
pub const DEFAULT_NESTED_PAGE_LIMIT: u32 = 25;

/// Page sizes baked into fragment text when a registry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Page size for ordinary connections.
    pub page_limit: u32,
    /// Page size for search connections whose nodes embed further connections.
    pub nested_page_limit: u32,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            nested_page_limit: DEFAULT_NESTED_PAGE_LIMIT,
        }
    }
}

impl RegistryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn page_limit(mut self, value: u32) -> Self {
        self.page_limit = value;
        self
    }

    pub fn nested_page_limit(mut self, value: u32) -> Self {
        self.nested_page_limit = value;
        self
    }
}

/// Resource metadata keyed by id.
///
/// Never mutated after construction, so one registry can serve any number
/// of concurrent compilations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registry {
    page_limit: u32,
    nested_page_limit: u32,
    entries: IndexMap<ResourceId, ResourceMetadata>,
}

/// Build the built-in GitHub registry with the given page sizes.
pub fn build_registry(page_limit: u32, nested_page_limit: u32) -> Registry {
    Registry::github(
        &RegistryConfig::new()
            .page_limit(page_limit)
            .nested_page_limit(nested_page_limit),
    )
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    pub fn github(config: &RegistryConfig) -> Self {
        github::registry(config)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[inline]
    pub fn get(&self, id: &ResourceId) -> Option<&ResourceMetadata> {
        self.entries.get(id)
    }

    #[inline]
    pub fn contains(&self, id: &ResourceId) -> bool {
        self.entries.contains_key(id)
    }

    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceId, &ResourceMetadata)> {
        self.entries.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ResourceId> {
        self.entries.keys()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn page_limit(&self) -> u32 {
        self.page_limit
    }

    pub fn nested_page_limit(&self) -> u32 {
        self.nested_page_limit
    }
}

/// Assembles a [`Registry`]. Later registrations of the same id replace earlier ones.
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    config: RegistryConfig,
    entries: IndexMap<ResourceId, ResourceMetadata>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self {
            config: RegistryConfig::default(),
            entries: IndexMap::new(),
        }
    }
}

impl RegistryBuilder {
    /// Record the page sizes the fragments were written with.
    pub fn config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn resource(mut self, id: impl Into<ResourceId>, metadata: ResourceMetadata) -> Self {
        self.entries.insert(id.into(), metadata);
        self
    }

    pub fn build(self) -> Registry {
        Registry {
            page_limit: self.config.page_limit,
            nested_page_limit: self.config.nested_page_limit,
            entries: self.entries,
        }
    }
}
