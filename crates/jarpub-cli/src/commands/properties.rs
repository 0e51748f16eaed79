use miette::Result;

use jarpub_core::keys::KNOWN_KEYS;
use jarpub_resolver::MASK;

use crate::cli::GlobalArgs;
use crate::context;

pub fn exec(global: &GlobalArgs, reveal: bool) -> Result<()> {
    let resolver = context::load(global)?;
    let config = resolver.config();

    let set = KNOWN_KEYS.iter().filter(|k| config.contains(k.name)).count();
    println!("Properties ({set} of {} set):", KNOWN_KEYS.len());
    if let Some(path) = context::properties_path(global) {
        println!("  properties file: {}", path.display());
    }

    for key in KNOWN_KEYS {
        match (config.get(key.name), config.source(key.name)) {
            (Some(value), Some(source)) => {
                let shown = if key.secret && !reveal { MASK } else { value };
                println!("  {} = {} ({source})", key.name, shown);
            }
            _ => println!("  {} not set ({})", key.name, key.purpose),
        }
    }
    Ok(())
}
