//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("hubql")
        .about("Compile GitHub resource requests into a single GraphQL query")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(compile_command())
        .subcommand(resources_command())
}

/// Registry sizing flags shared by every command.
fn with_registry_args(cmd: Command) -> Command {
    cmd.arg(config_arg())
        .arg(page_limit_arg())
        .arg(nested_page_limit_arg())
        .arg(verbose_arg())
}

/// Compile a query document.
pub fn compile_command() -> Command {
    let cmd = Command::new("compile")
        .about("Compile a query document for a root and the resources to embed")
        .override_usage(
            "\
  hubql compile <ROOT> [RESOURCE]...
  hubql compile <ROOT> <RESOURCE>,<RESOURCE> --strict",
        )
        .after_help(
            r#"EXAMPLES:
  hubql compile organization membersWithRole teams members
  hubql compile organization teamRepositories --page-limit 50
  hubql compile pullRequests commits,reviews,labels --nested-page-limit 10
  hubql compile organization repositories --variables"#,
        )
        .arg(root_arg())
        .arg(resources_arg())
        .arg(strict_arg())
        .arg(variables_arg());

    with_registry_args(cmd)
}

/// List registered resources.
pub fn resources_command() -> Command {
    let cmd = Command::new("resources")
        .about("List registered resources and how they nest")
        .after_help(
            r#"EXAMPLES:
  hubql resources
  hubql resources --json --page-limit 50"#,
        )
        .arg(json_arg());

    with_registry_args(cmd)
}
