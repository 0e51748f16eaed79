use miette::Result;

use crate::cli::GlobalArgs;
use crate::context;

pub fn exec(global: &GlobalArgs) -> Result<()> {
    let resolver = context::load(global)?;
    println!("{}", resolver.settings().pom.to_xml()?);
    Ok(())
}
