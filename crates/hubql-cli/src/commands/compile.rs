use hubql_compiler::QueryBuilder;
use hubql_core::Registry;

use super::config_loader::{RegistryArgs, load_registry};

pub struct CompileArgs {
    pub root: String,
    pub resources: Vec<String>,
    pub strict: bool,
    pub variables_only: bool,
    pub registry: RegistryArgs,
}

pub fn run(args: CompileArgs) {
    let registry = match load_registry(&args.registry) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match output(&args, &registry) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

/// The text `compile` prints for `args`.
pub fn output(args: &CompileArgs, registry: &Registry) -> hubql_compiler::Result<String> {
    let query = QueryBuilder::new(registry, args.root.as_str())
        .request(args.resources.iter().map(String::as_str))
        .strict(args.strict)
        .build()?;

    for skipped in query.skipped() {
        tracing::warn!(resource = %skipped.id, reason = ?skipped.reason, "left out of document");
    }

    if args.variables_only {
        let lines: Vec<String> = query.variables().iter().map(ToString::to_string).collect();
        return Ok(lines.join("\n"));
    }
    Ok(query.into_document())
}
