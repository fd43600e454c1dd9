//! CLI Argument Parsing
//!
//! Global flags are accepted before or after the subcommand.

use std::path::PathBuf;

use asmforge::config::ColorMode;
use asmforge::BuildMode;
use clap::{Parser, Subcommand};

/// asmforge - build orchestrator for modular assembly source trees
#[derive(Parser, Debug)]
#[command(name = "asmforge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project root directory [default: nearest directory with asmforge.toml, else .]
    #[arg(long, global = true)]
    pub project: Option<PathBuf>,

    /// Build mode (overrides BUILD_MODE and the config file)
    #[arg(long, global = true, value_enum)]
    pub mode: Option<BuildMode>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    /// Configuration file (default: <project>/asmforge.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate headers, assemble and link
    Build,

    /// Clean, then build
    Rebuild,

    /// Regenerate the aggregate headers under include/auto/
    GenerateHeaders,

    /// Build with debug symbols into build/obj-debug/ and build/<name>_debug
    DebugBuild,

    /// Compile and run the C tests under tests/
    RunTests {
        /// Keep going after a failing test
        #[arg(long)]
        continue_on_failure: bool,
    },

    /// Disassemble the binary (Intel syntax) into build/<name>.disasm
    Disassemble {
        /// Disassemble the debug binary instead
        #[arg(long)]
        debug: bool,
    },

    /// Extract the .text section to build/<name>.bin and build/<name>.hex
    ExtractShellcode,

    /// Report size and null bytes of the extracted .text section
    AnalyzeBinary,

    /// List discovered sources per category
    ListSources,

    /// Print the effective configuration
    ShowConfig,

    /// Create the directory layout
    SetupLayout,

    /// Remove build artifacts, generated headers and test binaries
    Clean,

    /// Clean, then remove build/ and include/auto/ themselves
    FullClean {
        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },
}

impl Commands {
    /// Name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Build => "build",
            Commands::Rebuild => "rebuild",
            Commands::GenerateHeaders => "generate-headers",
            Commands::DebugBuild => "debug-build",
            Commands::RunTests { .. } => "run-tests",
            Commands::Disassemble { .. } => "disassemble",
            Commands::ExtractShellcode => "extract-shellcode",
            Commands::AnalyzeBinary => "analyze-binary",
            Commands::ListSources => "list-sources",
            Commands::ShowConfig => "show-config",
            Commands::SetupLayout => "setup-layout",
            Commands::Clean => "clean",
            Commands::FullClean { .. } => "full-clean",
        }
    }

    /// Commands that write to the tree hold the build lock.
    pub fn needs_lock(&self) -> bool {
        matches!(
            self,
            Commands::Build
                | Commands::Rebuild
                | Commands::GenerateHeaders
                | Commands::DebugBuild
                | Commands::Disassemble { .. }
                | Commands::ExtractShellcode
                | Commands::AnalyzeBinary
                | Commands::Clean
                | Commands::FullClean { .. }
        )
    }
}
