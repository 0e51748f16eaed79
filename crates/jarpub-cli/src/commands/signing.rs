use miette::Result;

use jarpub_resolver::resolver::Requirement;
use jarpub_resolver::signing::FileKeySource;
use jarpub_util::progress::{status, status_info};

use crate::cli::GlobalArgs;
use crate::context;

pub fn exec(global: &GlobalArgs, require: bool) -> Result<()> {
    let resolver = context::load(global)?;
    if require {
        resolver.require(Requirement::Signing)?;
    }

    let Some(request) = resolver.signing_request() else {
        let missing = resolver.missing(Requirement::Signing);
        println!("Signing disabled (missing {})", missing.join(", "));
        status_info(
            "Unsigned",
            &format!(
                "Signing information missing/incomplete for {}",
                resolver.project()
            ),
        );
        return Ok(());
    };

    let signing = request.load(&FileKeySource)?;
    println!("Signing with key {}", signing.key_id);
    println!("  key file:   {}", signing.key_file.display());
    println!("  key sha256: {}", signing.key_digest());
    status("Loaded", &format!("signing key {}", signing.key_id));
    Ok(())
}
