use clap::Args;

/// Flags shared by every binary in this family, flattened into each
/// binary's own parser.
#[derive(Debug, Clone, Args)]
pub struct GlobalFlags {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
