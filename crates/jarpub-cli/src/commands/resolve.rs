use miette::Result;

use jarpub_resolver::report::PlanReport;
use jarpub_resolver::resolver::Requirement;
use jarpub_resolver::signing::FileKeySource;
use jarpub_util::progress::status;

use crate::cli::GlobalArgs;
use crate::context;

pub fn exec(
    global: &GlobalArgs,
    json: bool,
    reveal: bool,
    project: Option<&str>,
    filter: &[String],
    strict: bool,
) -> Result<()> {
    let mut resolver = context::load(global)?;
    if let Some(name) = project {
        resolver = resolver.with_project(name);
    }

    if strict {
        resolver.require(Requirement::Publishing)?;
        resolver.require(Requirement::Signing)?;
    }

    let plan = resolver.resolve_all(&FileKeySource, filter)?;
    let report = PlanReport::new(&plan, reveal);
    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render_text());
    }

    status("Resolved", &plan.project);
    Ok(())
}
