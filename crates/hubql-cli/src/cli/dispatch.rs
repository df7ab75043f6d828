//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::compile::CompileArgs;
use crate::commands::config_loader::RegistryArgs;
use crate::commands::resources::ResourcesArgs;

pub struct CompileParams {
    pub root: String,
    pub resources: Vec<String>,
    pub strict: bool,
    pub variables_only: bool,
    pub registry: RegistryParams,
    pub verbose: u8,
}

impl CompileParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            root: m
                .get_one::<String>("root")
                .cloned()
                .expect("root is required"),
            resources: m
                .get_many::<String>("resources")
                .map(|values| values.filter(|v| !v.is_empty()).cloned().collect())
                .unwrap_or_default(),
            strict: m.get_flag("strict"),
            variables_only: m.get_flag("variables"),
            registry: RegistryParams::from_matches(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CompileParams> for CompileArgs {
    fn from(p: CompileParams) -> Self {
        Self {
            root: p.root,
            resources: p.resources,
            strict: p.strict,
            variables_only: p.variables_only,
            registry: p.registry.into(),
        }
    }
}

pub struct ResourcesParams {
    pub json: bool,
    pub registry: RegistryParams,
    pub verbose: u8,
}

impl ResourcesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            json: m.get_flag("json"),
            registry: RegistryParams::from_matches(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<ResourcesParams> for ResourcesArgs {
    fn from(p: ResourcesParams) -> Self {
        Self {
            json: p.json,
            registry: p.registry.into(),
        }
    }
}

pub struct RegistryParams {
    pub config: Option<PathBuf>,
    pub page_limit: Option<u32>,
    pub nested_page_limit: Option<u32>,
}

impl RegistryParams {
    fn from_matches(m: &ArgMatches) -> Self {
        Self {
            config: m.get_one::<PathBuf>("config").cloned(),
            page_limit: m.get_one::<u32>("page_limit").copied(),
            nested_page_limit: m.get_one::<u32>("nested_page_limit").copied(),
        }
    }
}

impl From<RegistryParams> for RegistryArgs {
    fn from(p: RegistryParams) -> Self {
        Self {
            config: p.config,
            page_limit: p.page_limit,
            nested_page_limit: p.nested_page_limit,
        }
    }
}
