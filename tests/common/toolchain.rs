//! Fake toolchain
//!
//! Small `sh` scripts standing in for the assembler, linker, C compiler,
//! objcopy and objdump. They honour `-o`, write recognisable outputs and
//! fail on marker text in their inputs (`BROKEN` for the assembler,
//! `COMPILE_ERROR` for the compiler, `return 1` makes a failing test).

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::TestEnv;

const ASSEMBLER: &str = r#"#!/bin/sh
out=""
src=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    -I|-f|-F) shift 2 ;;
    *) src="$1"; shift ;;
  esac
done
if grep -q BROKEN "$src"; then
  echo "$src:2: error: parser: instruction expected" >&2
  exit 1
fi
mkdir -p "$(dirname "$out")"
echo "object of $src" > "$out"
"#;

const LINKER: &str = r#"#!/bin/sh
all="$*"
out=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    *) shift ;;
  esac
done
mkdir -p "$(dirname "$out")"
echo "$all" > "$out"
"#;

const COMPILER: &str = r#"#!/bin/sh
out=""
src=""
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift 2 ;;
    -I) shift 2 ;;
    *) src="$1"; shift ;;
  esac
done
if grep -q COMPILE_ERROR "$src"; then
  echo "$src:1: error: expected ';'" >&2
  exit 1
fi
code=0
if grep -q "return 1" "$src"; then
  code=1
fi
printf '#!/bin/sh\necho "ran %s"\nexit %s\n' "$(basename "$out")" "$code" > "$out"
chmod +x "$out"
"#;

const OBJCOPY: &str = r#"#!/bin/sh
for last; do :; done
printf '\110\061\300\000\303' > "$last"
"#;

const OBJDUMP: &str = r#"#!/bin/sh
echo "0000000000401000 <_start>:"
echo "  401000:	48 31 c0             	xor    rax,rax"
"#;

/// Directory holding the fake tools; keep it alive for the whole test.
pub struct FakeToolchain {
    dir: TempDir,
}

impl FakeToolchain {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("create toolchain dir");
        for (name, script) in [
            ("as", ASSEMBLER),
            ("ld", LINKER),
            ("cc", COMPILER),
            ("objcopy", OBJCOPY),
            ("objdump", OBJDUMP),
        ] {
            write_script(&dir.path().join(name), script);
        }
        Self { dir }
    }

    pub fn tool(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Point the toolchain environment variables at the fake tools.
    pub fn install(&self, env: TestEnv) -> TestEnv {
        env.with_env("AS", self.tool("as"))
            .with_env("LD", self.tool("ld"))
            .with_env("CC", self.tool("cc"))
            .with_env("OBJCOPY", self.tool("objcopy"))
            .with_env("OBJDUMP", self.tool("objdump"))
    }
}

fn write_script(path: &Path, script: &str) {
    std::fs::write(path, script).expect("write script");
    let mut perms = std::fs::metadata(path).expect("stat script").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms).expect("chmod script");
}
