use clap::Parser as _;
use rstest::*;
use segline::{BaseArgs, CliError};
use serde_json::{Value, json};
use std::{fs, path::PathBuf};
use tempfile::TempDir;

const SCRIPT: &str = r#"[
    { "op": "add", "from": 10, "to": 30, "amount": 1 },
    { "op": "add", "from": 20, "to": 40, "amount": 1 },
    { "op": "add", "from": 10, "to": 40, "amount": -1 },
    { "op": "set", "from": 10, "to": 30, "amount": 400 }
]"#;

struct Workdir {
    dir: TempDir,
}

impl Workdir {
    fn file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    fn output(&self) -> PathBuf {
        self.dir.path().join("out.json")
    }

    // Runs the CLI with `args`, writing to the output file, and returns what it wrote
    fn run(&self, args: &[&str]) -> anyhow::Result<String> {
        let output = self.output();
        let mut argv = vec!["segline"];
        argv.extend_from_slice(args);
        argv.extend_from_slice(&["-o", output.to_str().unwrap()]);
        BaseArgs::try_parse_from(argv)?.evaluate()?;
        Ok(fs::read_to_string(output)?)
    }
}

#[fixture]
fn workdir() -> Workdir {
    Workdir {
        dir: TempDir::new().unwrap(),
    }
}

#[rstest]
fn replay_writes_final_state(workdir: Workdir) {
    let input = workdir.file("ops.json", SCRIPT);
    let out = workdir.run(&["replay", input.to_str().unwrap()]).unwrap();

    // pretty-printed by default
    assert!(out.contains('\n') && out.ends_with("]\n"));
    assert_eq!(
        serde_json::from_str::<Value>(&out).unwrap(),
        json!([[10.0, 400], [30.0, 0]])
    );
}

#[rstest]
fn replay_snapshots_compact(workdir: Workdir) {
    let input = workdir.file("ops.json", SCRIPT);
    let out = workdir
        .run(&["--compact", "replay", "--snapshots", input.to_str().unwrap()])
        .unwrap();

    assert_eq!(
        out,
        concat!(
            "[[[10.0,1],[30.0,0]],",
            "[[10.0,1],[20.0,2],[30.0,1],[40.0,0]],",
            "[[20.0,1],[30.0,0]],",
            "[[10.0,400],[30.0,0]]]\n",
        )
    );
}

#[rstest]
fn replay_rejects_bad_script(workdir: Workdir) {
    let input = workdir.file("ops.json", r#"[{ "op": "scale", "from": 0, "to": 1 }]"#);
    assert!(workdir.run(&["replay", input.to_str().unwrap()]).is_err());
}

#[rstest]
fn eval_samples_points(workdir: Workdir) {
    let input = workdir.file("line.json", "[[10, 1], [20, 2], [30, 1], [40, 0]]");
    let out = workdir
        .run(&[
            "eval",
            input.to_str().unwrap(),
            "--at",
            "25",
            "--at",
            "-5",
            "--compact",
        ])
        .unwrap();

    assert_eq!(
        out,
        "[{\"at\":25.0,\"intensity\":2},{\"at\":-5.0,\"intensity\":0}]\n"
    );
}

#[rstest]
fn eval_rejects_non_canonical_input(workdir: Workdir) {
    let input = workdir.file("line.json", "[[10, 1], [20, 1]]");
    assert!(workdir.run(&["eval", input.to_str().unwrap(), "--at", "0"]).is_err());
}

#[rstest]
fn check_reports_canonical_list(workdir: Workdir) {
    let input = workdir.file("line.json", "[[10, 400], [30, 0]]");
    let out = workdir.run(&["check", input.to_str().unwrap()]).unwrap();

    assert_eq!(
        serde_json::from_str::<Value>(&out).unwrap(),
        json!({ "breakpoints": 2, "span": [10.0, 30.0] })
    );
}

#[rstest]
#[case::leading_zero("[[10, 0]]", 0)]
#[case::repeated("[[10, 1], [20, 2], [30, 2]]", 2)]
fn check_fails_on_redundant_breakpoint(
    workdir: Workdir,
    #[case] raw: &str,
    #[case] index: usize,
) {
    let input = workdir.file("line.json", raw);
    let err = workdir.run(&["check", input.to_str().unwrap()]).unwrap_err();

    match err.downcast_ref::<CliError>() {
        Some(CliError::NotCanonical(e)) => {
            assert_eq!(*e, segline_core::IntensityLineError::Redundant { index })
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!workdir.output().exists());
}

#[rstest]
fn missing_input_is_an_error(workdir: Workdir) {
    let missing = workdir.dir.path().join("nope.json");
    let err = workdir
        .run(&["replay", missing.to_str().unwrap()])
        .unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}
