mod cli;
mod commands;
mod logging;

use cli::{CompileParams, ResourcesParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("compile", m)) => {
            let params = CompileParams::from_matches(m);
            logging::init(params.verbose);
            commands::compile::run(params.into());
        }
        Some(("resources", m)) => {
            let params = ResourcesParams::from_matches(m);
            logging::init(params.verbose);
            commands::resources::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
