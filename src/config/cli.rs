use crate::domain::ports::ConfigProvider;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "prompt-install")]
#[command(about = "Install Bee/Learn prompt files into the Codex prompts directory")]
pub struct CliConfig {
    /// Destination directory (default: $CODEX_HOME/prompts or ~/.codex/prompts)
    #[arg(long)]
    pub target: Option<String>,

    /// Overwrite files that already exist in the destination
    #[arg(long)]
    pub force: bool,

    /// Show what would be copied without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Source directory (default: the prompts directory shipped with this tool)
    #[arg(long)]
    pub source: Option<String>,

    /// Path to a TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn force(&self) -> bool {
        self.force
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}
