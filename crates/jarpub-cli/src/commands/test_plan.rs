use miette::Result;

use jarpub_util::errors::JarpubError;

use crate::cli::GlobalArgs;
use crate::context;

pub fn exec(global: &GlobalArgs, filter: &[String], json: bool) -> Result<()> {
    let resolver = context::load(global)?;
    let test = resolver.test_execution(filter)?;

    if json {
        let out = serde_json::to_string_pretty(&test).map_err(|e| JarpubError::Generic {
            message: format!("Failed to serialize test plan: {e}"),
        })?;
        println!("{out}");
        return Ok(());
    }

    println!("jvm: {}", test.jvm);
    println!("host: {}", resolver.host().os_name);
    for pattern in &test.filter.include {
        println!("include: {pattern}");
    }
    for pattern in &test.filter.exclude {
        println!("exclude: {pattern}");
    }
    let events: Vec<String> = test
        .logging
        .events
        .iter()
        .map(|e| e.to_string())
        .collect();
    println!("events: {}", events.join(", "));
    Ok(())
}
