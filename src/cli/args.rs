// src/cli/args.rs
use crate::visibility::Tier;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "memberscope",
    version,
    about = "Visibility-tiered type and method listings for compiled module metadata"
)]
pub struct Cli {
    /// Optional tier (Public|Protected|Private) followed by module paths,
    /// each allowing one `*` wildcard
    #[arg(value_name = "TIER|MODULE")]
    pub args: Vec<String>,

    /// Render the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Per-path progress diagnostics on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Splits the raw positionals into the tier and the module patterns.
    /// A first token that names no tier is itself the first pattern and the
    /// tier defaults to Public.
    #[must_use]
    pub fn tier_and_patterns(&self) -> (Tier, &[String]) {
        match self.args.split_first() {
            Some((first, rest)) => match Tier::parse(first) {
                Some(tier) => (tier, rest),
                None => (Tier::Public, &self.args[..]),
            },
            None => (Tier::Public, &[]),
        }
    }
}
