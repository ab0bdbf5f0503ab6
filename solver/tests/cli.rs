use std::process::{Command, Output};

fn solver(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_solver"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run solver")
}

#[test]
fn bad_thread_count_exits_one() {
    for threads in ["0", "150"] {
        let output = solver(&[threads, "12", "1000"]);

        assert_eq!(output.status.code(), Some(1), "threads {threads}");
        assert!(output.stdout.is_empty(), "threads {threads}");

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("invalid thread count"), "{stderr}");
        assert!(stderr.contains("Usage:"), "{stderr}");
    }
}

#[test]
fn unparsable_challenge_exits_one() {
    let output = solver(&["4", "70000"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn prints_one_line_per_challenge() {
    let output = solver(&["4", "12", "1000", "--space", "16"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    for (line, challenge) in lines.iter().zip(["12", "1000"]) {
        let fields: Vec<_> = line.split(' ').collect();
        assert_eq!(fields.len(), 9);
        assert_eq!(fields[0], challenge);
    }
}
