//! clean and full-clean

mod common;

use common::*;

fn built_tree() -> TestEnv {
    let env = TestEnv::new();
    env.write_file("src/main.asm", ENTRY_SOURCE);
    env.write_file("build/payload", "ELF");
    env.write_file("build/obj/main.o", "obj");
    env.write_file("build/obj/network/scan.o", "obj");
    env.write_file("include/auto/network.inc", "; generated");
    env.write_file("include/auto/.gitignore", "*\n");
    env.write_file("include/syscalls.inc", "; hand written");
    env.write_file("tests/network/t1.c", PASSING_TEST);
    env.write_file("tests/network/t1", "binary");
    env
}

#[test]
fn clean_empties_build_but_keeps_directories() {
    let env = built_tree();

    let result = env.run(&["clean"]);
    assert!(result.success, "{}", result.combined_output());

    assert!(env.exists("build"));
    assert!(!env.exists("build/payload"));
    assert!(!env.exists("build/obj"));
    assert!(!env.exists("include/auto/network.inc"));
    assert!(env.exists("include/auto"));
    assert!(!env.exists("tests/network/t1"));

    assert!(env.exists("tests/network/t1.c"));
    assert!(env.exists("include/syscalls.inc"));
    assert!(env.exists("src/main.asm"));
}

#[test]
fn clean_reports_counts_as_json() {
    let env = built_tree();

    let result = env.run(&["clean", "--json"]);
    assert!(result.success, "{}", result.combined_output());

    let complete = result.last_json();
    assert_eq!(complete["command"], "clean");
    assert_eq!(complete["manifests"], 1);
    assert_eq!(complete["test_binaries"], 1);
    assert!(complete["directories"].as_array().unwrap().is_empty());
}

#[test]
fn clean_on_empty_project_is_a_no_op() {
    let env = TestEnv::new();

    let result = env.run(&["clean"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(result.stdout.contains("Nothing to clean"), "{}", result.stdout);
}

#[test]
fn full_clean_with_yes_removes_directories() {
    let env = built_tree();

    let result = env.run(&["full-clean", "--yes"]);
    assert!(result.success, "{}", result.combined_output());

    assert!(!env.exists("build"));
    assert!(!env.exists("include/auto"));
    assert!(env.exists("include/syscalls.inc"));
    assert!(env.exists("src/main.asm"));
}

#[test]
fn full_clean_without_terminal_proceeds() {
    let env = built_tree();

    let result = env.run(&["full-clean"]);
    assert!(result.success, "{}", result.combined_output());
    assert!(!env.exists("build"));
}

#[test]
fn clean_leaves_lock_file_free() {
    let env = built_tree();

    assert!(env.run(&["clean"]).success);
    // a second mutating command must be able to take the lock again
    assert!(env.run(&["clean"]).success);
}
