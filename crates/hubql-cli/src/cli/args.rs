//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! by every command that needs it.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Root resource the document starts from (positional).
pub fn root_arg() -> Arg {
    Arg::new("root")
        .value_name("ROOT")
        .required(true)
        .help("Root resource, e.g. organization")
}

/// Resources to embed under the root (positional, repeatable).
pub fn resources_arg() -> Arg {
    Arg::new("resources")
        .value_name("RESOURCE")
        .num_args(0..)
        .action(ArgAction::Append)
        .value_delimiter(',')
        .help("Resources to embed (space or comma separated)")
}

/// Registry config file (--config).
pub fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("JSON file with pageLimit / nestedPageLimit")
}

/// Page size override (--page-limit).
pub fn page_limit_arg() -> Arg {
    Arg::new("page_limit")
        .long("page-limit")
        .value_name("N")
        .value_parser(value_parser!(u32).range(1..))
        .help("Page size for connections [default: 100]")
}

/// Nested page size override (--nested-page-limit).
pub fn nested_page_limit_arg() -> Arg {
    Arg::new("nested_page_limit")
        .long("nested-page-limit")
        .value_name("N")
        .value_parser(value_parser!(u32).range(1..))
        .help("Page size for pull request and issue searches [default: 25]")
}

/// Fail on resources left out of the document (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Fail if a requested resource cannot be placed in the document")
}

/// Print only variable declarations (--variables).
pub fn variables_arg() -> Arg {
    Arg::new("variables")
        .long("variables")
        .action(ArgAction::SetTrue)
        .help("Print the variable declarations instead of the document")
}

/// Dump the registry as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the registry as JSON")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
