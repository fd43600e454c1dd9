//! Source fixtures

pub const ENTRY_SOURCE: &str = r#"BITS 64
%ifndef SEPARATE_BUILD
%include "auto/network.inc"
%include "auto/utils.inc"
%endif

section .text
global _start
_start:
    xor rax, rax
"#;

pub const MODULE_SOURCE: &str = "section .text\nhelper:\n    ret\n";

/// Recognised by the fake assembler as a syntax error.
pub const BROKEN_SOURCE: &str = "section .text\n    BROKEN\n";

pub const PASSING_TEST: &str = "int main(void) { return 0; }\n";

/// Recognised by the fake compiler: the produced binary exits 1.
pub const FAILING_TEST: &str = "int main(void) { return 1; }\n";
