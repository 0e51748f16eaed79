use miette::Result;

use jarpub_resolver::report::RepositoryReport;
use jarpub_util::errors::JarpubError;
use jarpub_util::progress::status_warn;

use crate::cli::GlobalArgs;
use crate::context;

pub fn exec(global: &GlobalArgs, json: bool, reveal: bool) -> Result<()> {
    let resolver = context::load(global)?;
    let publish = resolver
        .repository()
        .map(|r| RepositoryReport::new(&r, reveal));
    let dependency = resolver
        .dependency_repository()
        .map(|r| RepositoryReport::new(&r, reveal));

    if json {
        let value = serde_json::json!({
            "publish-repository": publish,
            "dependency-repository": dependency,
        });
        let out = serde_json::to_string_pretty(&value).map_err(|e| JarpubError::Generic {
            message: format!("Failed to serialize repositories: {e}"),
        })?;
        println!("{out}");
        return Ok(());
    }

    match publish {
        Some(ref r) => {
            println!("publish: {} {}", r.name, r.url);
            println!("  {}: {}", r.header_name, r.header_value);
        }
        None => {
            println!("publish: not configured");
            status_warn(
                "Warning",
                "Can not publish to GitLab: gitlabUrl or gitlabPublishToken not set.",
            );
        }
    }
    match dependency {
        Some(ref r) => {
            println!("dependencies: {} {}", r.name, r.url);
            println!("  {}: {}", r.header_name, r.header_value);
        }
        None => println!("dependencies: not configured"),
    }
    Ok(())
}
