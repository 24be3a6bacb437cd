//! End-to-end pipeline tests over a temporary source tree.

use camino::Utf8PathBuf;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use tsfix_engine::{FileDisposition, WriteOptions, process_file, rewrite_text, select_sources};
use tsfix_rules::builtin_rules;

fn create_temp_tree(files: &[(&str, &str)]) -> TempDir {
    let td = tempfile::tempdir().expect("tempdir");
    for (rel, contents) in files {
        let path = td.path().join(rel);
        fs::create_dir_all(path.parent().expect("parent")).unwrap();
        fs::write(&path, contents).unwrap();
    }
    td
}

fn utf8_root(td: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(td.path().to_path_buf()).expect("utf8 tempdir")
}

#[test]
fn selector_concatenates_tsx_group_before_ts_group() {
    let temp = create_temp_tree(&[
        ("src/pages/Login.tsx", ""),
        ("src/utils/api.ts", ""),
        ("src/App.tsx", ""),
        ("src/notes.txt", ""),
    ]);
    let root = utf8_root(&temp).join("src");

    let files = select_sources(&root).expect("select");
    assert_eq!(files.len(), 3);

    let exts: Vec<_> = files.iter().map(|p| p.extension().unwrap()).collect();
    let first_ts = exts.iter().position(|e| *e == "ts").expect("a ts file");
    assert!(
        exts[..first_ts].iter().all(|e| *e == "tsx"),
        "tsx group must come before the ts group: {exts:?}"
    );
}

#[test]
fn change_gate_writes_only_on_difference() {
    let temp = create_temp_tree(&[
        ("src/auth.ts", "const user = await api.login(creds);\n"),
        ("src/clean.ts", "const total = rows.length;\n"),
    ]);
    let root = utf8_root(&temp);
    let rules = builtin_rules().expect("catalog");
    let opts = WriteOptions::default();

    let fixed = process_file(&root.join("src/auth.ts"), &rules, &opts).expect("process");
    assert_eq!(fixed.disposition, FileDisposition::Fixed);
    assert_eq!(
        fs::read_to_string(temp.path().join("src/auth.ts")).unwrap(),
        "const user = await authService.login(creds);\n"
    );

    let clean = process_file(&root.join("src/clean.ts"), &rules, &opts).expect("process");
    assert_eq!(clean.disposition, FileDisposition::Unchanged);
    assert_eq!(
        fs::read_to_string(temp.path().join("src/clean.ts")).unwrap(),
        "const total = rows.length;\n"
    );
}

#[test]
fn dry_run_renders_a_patch_and_leaves_the_file_alone() {
    let contents = "const user = await api.login(creds);\n";
    let temp = create_temp_tree(&[("src/auth.ts", contents)]);
    let root = utf8_root(&temp);
    let rules = builtin_rules().expect("catalog");

    let outcome = process_file(
        &root.join("src/auth.ts"),
        &rules,
        &WriteOptions { dry_run: true },
    )
    .expect("process");

    assert_eq!(outcome.disposition, FileDisposition::Fixed);
    let patch = outcome.patch.expect("patch in dry run");
    assert!(patch.contains("-const user = await api.login(creds);"));
    assert!(patch.contains("+const user = await authService.login(creds);"));
    assert_eq!(
        fs::read_to_string(temp.path().join("src/auth.ts")).unwrap(),
        contents
    );
}

#[test]
fn missing_file_is_a_read_error_not_a_panic() {
    let temp = create_temp_tree(&[]);
    let root = utf8_root(&temp);
    let rules = builtin_rules().expect("catalog");

    let err = process_file(&root.join("src/gone.ts"), &rules, &WriteOptions::default())
        .expect_err("missing file");
    assert!(err.to_string().contains("read"));
    assert!(err.to_string().contains("gone.ts"));
}

#[test]
fn invalid_utf8_is_a_read_error_scoped_to_the_file() {
    let temp = create_temp_tree(&[]);
    fs::create_dir_all(temp.path().join("src")).unwrap();
    fs::write(temp.path().join("src/bad.ts"), [0xff, 0xfe, 0x80]).unwrap();
    let root = utf8_root(&temp);
    let rules = builtin_rules().expect("catalog");

    let err = process_file(&root.join("src/bad.ts"), &rules, &WriteOptions::default())
        .expect_err("invalid utf8");
    assert!(err.to_string().contains("bad.ts"));
}

#[test]
fn catalog_order_is_load_bearing() {
    let rules = builtin_rules().expect("catalog");
    let mut reversed = builtin_rules().expect("catalog");
    reversed.reverse();

    // icon-names uppercases the bare token, then member-names undoes it in
    // member position; with the order flipped the member fix never fires.
    let input = "theme.settings";
    assert_eq!(rewrite_text(&rules, input), "theme.settings");
    assert_eq!(rewrite_text(&reversed, input), "theme.SettingsIcon");
    assert_ne!(rewrite_text(&rules, input), rewrite_text(&reversed, input));
}

#[test]
fn composed_pipeline_is_idempotent() {
    let rules = builtin_rules().expect("catalog");
    let input = "import { Typography } from '@mui/material';\n\
                 import { Chart, title } from 'chart.js';\n\
                 import Create from 'ExperimentCreate';\n\
                 export { default as Foo } from './Foo';\n\
                 export { default as Foo } from './Foo';\n\
                 const user = await api.login(creds);\n\
                 const rows = data.map(row => row.id);\n\
                 const el = <div sx={{mb: 2}} textAlign=\"center\" gap={4}>ok</div>;\n\
                 const v = profile.EmailIcon;\n";

    let once = rewrite_text(&rules, input);
    let twice = rewrite_text(&rules, &once);
    assert_eq!(once, twice);
}

#[test]
fn box_scenario_rewrites_element_and_amends_import() {
    let rules = builtin_rules().expect("catalog");
    let input = "import { Typography } from '@mui/material';\n\
                 const P = () => <div sx={{color:'red'}}>x</div>;\n";
    let out = rewrite_text(&rules, input);
    assert!(out.contains("import { Typography, Box } from '@mui/material';"));
    assert!(out.contains("<Box sx={{color:'red'}}>"));
}

#[test]
fn duplicate_reexport_scenario_collapses_to_one_line() {
    let rules = builtin_rules().expect("catalog");
    let input = "export { default as Foo } from './Foo';\n\
                 export { default as Foo } from './Foo';\n";
    assert_eq!(
        rewrite_text(&rules, input),
        "export { default as Foo } from './Foo';\n"
    );
}
