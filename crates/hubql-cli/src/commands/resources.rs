use hubql_core::Registry;

use super::config_loader::{RegistryArgs, load_registry};

pub struct ResourcesArgs {
    pub json: bool,
    pub registry: RegistryArgs,
}

pub fn run(args: ResourcesArgs) {
    let registry = match load_registry(&args.registry) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        match registry.to_json_pretty() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", listing(&registry));
    }
}

/// One block per resource, in registration order.
pub fn listing(registry: &Registry) -> String {
    let mut out = String::new();
    for (id, entry) in registry.iter() {
        out.push_str(id.as_str());
        let field = entry.field_name(id);
        if field != id.as_str() {
            out.push_str(&format!(" (field: {field})"));
        }
        out.push('\n');

        if !entry.variables.is_empty() {
            let vars: Vec<String> = entry.variables.iter().map(ToString::to_string).collect();
            out.push_str(&format!("  variables: {}\n", vars.join(", ")));
        }
        if let Some(parent) = &entry.parent {
            out.push_str(&format!("  parent: {parent}\n"));
        }
        if !entry.children.is_empty() {
            let children: Vec<&str> = entry.children.iter().map(|c| c.as_str()).collect();
            out.push_str(&format!("  children: {}\n", children.join(", ")));
        }
        if let Some(path) = &entry.response_path {
            out.push_str(&format!("  response path: {path}\n"));
        }
    }
    out
}
