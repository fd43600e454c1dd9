//! Binary inspection use cases
//!
//! Disassembly, `.text` extraction to raw/escaped shellcode and null-byte
//! analysis. All three wrap `objdump` / `objcopy` around an already built
//! binary.

use std::path::{Path, PathBuf};

use crate::domain::ports::{FileSystem, ToolCommand, ToolRunner};
use crate::domain::services::{analyze_bytes, escape_hex, ByteAnalysis};
use crate::error::{ForgeError, ForgeResult};

use super::project::Project;

/// Written disassembly
#[derive(Debug, Clone)]
pub struct Disassembly {
    pub binary: PathBuf,
    pub output: PathBuf,
    pub text: String,
}

/// Extracted `.text` section
#[derive(Debug, Clone)]
pub struct Shellcode {
    pub binary: PathBuf,
    pub raw: PathBuf,
    pub hex: PathBuf,
    pub bytes: Vec<u8>,
    /// `\xNN` escaped form, as written to `hex`
    pub escaped: String,
}

impl Shellcode {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Null-byte report over the extracted shellcode
#[derive(Debug, Clone)]
pub struct BinaryAnalysis {
    pub shellcode: Shellcode,
    pub bytes: ByteAnalysis,
}

impl BinaryAnalysis {
    pub fn verdict(&self) -> &'static str {
        if self.bytes.is_null_free() {
            "clean"
        } else {
            "contains nulls"
        }
    }
}

pub struct AnalysisUseCase<FS, TR>
where
    FS: FileSystem,
    TR: ToolRunner,
{
    fs: FS,
    runner: TR,
}

impl<FS, TR> AnalysisUseCase<FS, TR>
where
    FS: FileSystem,
    TR: ToolRunner,
{
    pub fn new(fs: FS, runner: TR) -> Self {
        Self { fs, runner }
    }

    /// `objdump -d -M intel <binary>`, saved next to the binary.
    pub fn disassemble(&self, project: &Project, debug: bool) -> ForgeResult<Disassembly> {
        let binary = if debug {
            project.paths.debug_binary()
        } else {
            project.paths.binary()
        };
        self.require_binary(&binary)?;

        let command = ToolCommand::new(&project.config.toolchain.objdump)
            .args(["-d", "-M", "intel"])
            .path_arg(&binary);
        let output = self.runner.run_checked(&command)?;

        let target = project.paths.disassembly();
        self.fs.write(&target, &output.stdout)?;
        Ok(Disassembly {
            binary,
            output: target,
            text: output.stdout_lossy(),
        })
    }

    /// `objcopy -O binary -j .text`, plus the escaped `.hex` rendering.
    pub fn extract_shellcode(&self, project: &Project) -> ForgeResult<Shellcode> {
        let binary = project.paths.binary();
        self.require_binary(&binary)?;

        let raw = project.paths.shellcode_bin();
        let command = ToolCommand::new(&project.config.toolchain.objcopy)
            .args(["-O", "binary", "-j", ".text"])
            .path_arg(&binary)
            .path_arg(&raw);
        self.runner.run_checked(&command)?;

        let bytes = self.fs.read(&raw)?;
        let escaped = escape_hex(&bytes);
        let hex = project.paths.shellcode_hex();
        self.fs.write(&hex, format!("{}\n", escaped).as_bytes())?;

        tracing::debug!(bytes = bytes.len(), path = %raw.display(), "extracted .text");
        Ok(Shellcode {
            binary,
            raw,
            hex,
            bytes,
            escaped,
        })
    }

    pub fn analyze(&self, project: &Project) -> ForgeResult<BinaryAnalysis> {
        let shellcode = self.extract_shellcode(project)?;
        let bytes = analyze_bytes(&shellcode.bytes);
        Ok(BinaryAnalysis { shellcode, bytes })
    }

    fn require_binary(&self, binary: &Path) -> ForgeResult<()> {
        if self.fs.exists(binary) {
            Ok(())
        } else {
            Err(ForgeError::io(
                binary,
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "binary not built yet; run `asmforge build` first",
                ),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::ports::ToolOutput;
    use crate::test_support::MockFs;
    use std::cell::RefCell;

    /// Plays objcopy/objdump against the in-memory file system.
    struct FakeBinutils<'a> {
        fs: &'a MockFs,
        text: &'a [u8],
        calls: RefCell<Vec<String>>,
    }

    impl ToolRunner for FakeBinutils<'_> {
        fn run(&self, command: &ToolCommand) -> ForgeResult<ToolOutput> {
            self.calls.borrow_mut().push(command.to_string());
            if command.program == "objcopy" {
                let out = command.args.last().unwrap();
                self.fs.write(Path::new(out), self.text).unwrap();
                return Ok(ToolOutput::success());
            }
            Ok(ToolOutput {
                code: Some(0),
                stdout: b"0000000000401000 <_start>:\n".to_vec(),
                stderr: Vec::new(),
            })
        }
    }

    fn project() -> Project {
        Project::new("/p", Config::default())
    }

    #[test]
    fn extract_writes_raw_and_escaped_forms() {
        let fs = MockFs::new().with_file("/p/build/payload", "ELF");
        let tools = FakeBinutils {
            fs: &fs,
            text: &[0x48, 0x31, 0xc0],
            calls: RefCell::new(Vec::new()),
        };
        let use_case = AnalysisUseCase::new(&fs, &tools);

        let shellcode = use_case.extract_shellcode(&project()).unwrap();

        assert_eq!(shellcode.len(), 3);
        assert_eq!(shellcode.escaped, "\\x48\\x31\\xc0");
        assert_eq!(
            fs.contents("/p/build/payload.hex").as_deref(),
            Some("\\x48\\x31\\xc0\n")
        );
        assert_eq!(
            tools.calls.borrow()[0],
            "objcopy -O binary -j .text /p/build/payload /p/build/payload.bin"
        );
    }

    #[test]
    fn analyze_reports_null_offsets() {
        let fs = MockFs::new().with_file("/p/build/payload", "ELF");
        let tools = FakeBinutils {
            fs: &fs,
            text: &[0xb8, 0x00, 0x00, 0x01],
            calls: RefCell::new(Vec::new()),
        };
        let use_case = AnalysisUseCase::new(&fs, &tools);

        let analysis = use_case.analyze(&project()).unwrap();

        assert_eq!(analysis.bytes.null_offsets, vec![1, 2]);
        assert_eq!(analysis.verdict(), "contains nulls");
    }

    #[test]
    fn disassemble_saves_listing() {
        let fs = MockFs::new().with_file("/p/build/payload", "ELF");
        let tools = FakeBinutils {
            fs: &fs,
            text: &[],
            calls: RefCell::new(Vec::new()),
        };
        let use_case = AnalysisUseCase::new(&fs, &tools);

        let listing = use_case.disassemble(&project(), false).unwrap();

        assert!(listing.text.contains("<_start>"));
        assert!(fs.contents("/p/build/payload.disasm").is_some());
        assert_eq!(
            tools.calls.borrow()[0],
            "objdump -d -M intel /p/build/payload"
        );
    }

    #[test]
    fn missing_binary_is_reported_before_running_tools() {
        let fs = MockFs::new();
        let tools = FakeBinutils {
            fs: &fs,
            text: &[],
            calls: RefCell::new(Vec::new()),
        };
        let use_case = AnalysisUseCase::new(&fs, &tools);

        let err = use_case.disassemble(&project(), true).unwrap_err();
        assert!(err.to_string().contains("payload_debug"), "{err}");
        assert!(tools.calls.borrow().is_empty());
    }
}
