//! Command dispatch and handler modules.

mod pom;
mod properties;
mod repository;
mod resolve;
mod signing;
mod test_plan;

use miette::Result;

use crate::cli::{Cli, Command};

/// Route a parsed CLI invocation to the appropriate command handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let global = cli.global;
    match cli.command {
        Command::Resolve {
            json,
            reveal,
            project,
            filter,
            strict,
        } => resolve::exec(&global, json, reveal, project.as_deref(), &filter, strict),
        Command::Repository { json, reveal } => repository::exec(&global, json, reveal),
        Command::Signing { require } => signing::exec(&global, require),
        Command::TestPlan { filter, json } => test_plan::exec(&global, &filter, json),
        Command::Properties { reveal } => properties::exec(&global, reveal),
        Command::Pom => pom::exec(&global),
    }
}
