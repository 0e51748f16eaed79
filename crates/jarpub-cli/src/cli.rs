//! CLI argument definitions for jarpub.
//!
//! Uses `clap` derive macros to define the command surface. Each command
//! corresponds to a handler in the [`super::commands`] module.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "jarpub",
    version,
    about = "Resolve publishing, signing and test settings for a JVM library build",
    long_about = "jarpub reads Gradle project properties and environment variables and \
                  decides where artifacts are published, whether they are signed, and which \
                  JVM and test subset the test run uses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Set a project property (repeatable)
    #[arg(short = 'P', long = "property", value_name = "KEY=VALUE", global = true)]
    pub properties: Vec<String>,

    /// Properties file to read instead of the build's gradle.properties
    #[arg(long, value_name = "FILE", global = true)]
    pub properties_file: Option<PathBuf>,

    /// Settings file to read instead of the build's jarpub.toml
    #[arg(long, value_name = "FILE", global = true)]
    pub settings: Option<PathBuf>,

    /// Operating system name to resolve for, in JVM `os.name` form
    #[arg(long, value_name = "NAME", env = "JARPUB_OS_NAME", global = true)]
    pub os_name: Option<String>,

    /// Ignore environment variables and the user's gradle.properties
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve everything and print the plan
    Resolve {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Show tokens and passphrases instead of masking them
        #[arg(long)]
        reveal: bool,
        /// Project name used in messages (defaults to the build directory name)
        #[arg(long)]
        project: Option<String>,
        /// Only run tests matching this pattern (repeatable)
        #[arg(short, long)]
        filter: Vec<String>,
        /// Fail if publishing or signing is not fully configured
        #[arg(long)]
        strict: bool,
    },

    /// Show the publish and dependency repositories
    Repository {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Show tokens instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Check the signing configuration and load the key
    Signing {
        /// Fail if signing is not configured
        #[arg(long)]
        require: bool,
    },

    /// Show the JVM and test filter for the test run
    TestPlan {
        /// Only run tests matching this pattern (repeatable)
        #[arg(short, long)]
        filter: Vec<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List known properties and where they are set
    Properties {
        /// Show secret values instead of masking them
        #[arg(long)]
        reveal: bool,
    },

    /// Print the shared POM metadata as XML
    Pom,
}

pub fn parse() -> Cli {
    Cli::parse()
}
