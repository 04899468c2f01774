#[cfg(test)]
mod render_output_tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    use std::fs;
    use tempfile::TempDir;

    const BLUE: &str = "\x1b[38;2;91;206;250m";
    const PINK: &str = "\x1b[38;2;255;105;180m";
    const WHITE: &str = "\x1b[38;2;255;255;255m";
    const RESET: &str = "\x1b[0m";

    /// Runs the binary with an empty configuration directory. Stdout is a
    /// pipe, so the terminal size falls back to 80x24.
    fn transflag(config_dir: &TempDir) -> Command {
        let mut cmd = Command::cargo_bin("transflag").unwrap();
        cmd.env("TRANSFLAG_CONFIG_DIR", config_dir.path())
            .env_remove("RUST_LOG");
        cmd
    }

    fn stdout_lines(cmd: &mut Command) -> Vec<String> {
        let output = cmd.assert().success().get_output().stdout.clone();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_tiny_plain() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args(["tiny", "--format", "plain"]));
        assert_eq!(lines, vec!["█".repeat(20); 5]);
    }

    #[test]
    fn test_default_ansi() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(&mut transflag(&dir));

        assert_eq!(lines.len(), 12);
        let fill = "█".repeat(39);
        // allocate(12) = [3, 2, 2, 2, 3]
        let colors = [
            BLUE, BLUE, BLUE, PINK, PINK, WHITE, WHITE, PINK, PINK, BLUE, BLUE, BLUE,
        ];
        for (line, color) in lines.iter().zip(colors) {
            assert_eq!(line, &format!("{}{}{}", color, fill, RESET));
        }
    }

    #[test]
    fn test_border() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args([
            "tiny",
            "-f",
            "plain",
            "-c",
            "#",
            "--border-char",
            "+",
        ]));

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "+".repeat(22));
        assert_eq!(lines[6], "+".repeat(22));
        for line in &lines[1..6] {
            assert_eq!(line, &format!("+{}+", "#".repeat(20)));
        }
    }

    #[test]
    fn test_message() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args([
            "-f", "plain", "-c", "#", "-m", "hello",
        ]));

        assert_eq!(lines.len(), 12);
        assert_eq!(
            lines[6],
            format!("{}hello{}", "#".repeat(17), "#".repeat(17))
        );
        assert_eq!(lines.iter().filter(|line| line.contains("hello")).count(), 1);
    }

    #[test]
    fn test_vertical() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args(["tiny", "--vertical", "-f", "plain"]));
        assert_eq!(lines, vec!["█".repeat(20); 5]);
    }

    #[test]
    fn test_center_uses_fallback_terminal_width() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args(["tiny", "-C", "-f", "plain", "-c", "#"]));
        // (80 - 20) / 2
        for line in lines {
            assert_eq!(line, format!("{}{}", " ".repeat(30), "#".repeat(20)));
        }
    }

    #[test]
    fn test_explicit_dimensions() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args([
            "big", "-w", "7", "-he", "6", "-f", "plain", "-c", "#",
        ]));
        assert_eq!(lines, vec!["#".repeat(7); 6]);
    }

    #[test]
    fn test_invalid_dimensions_fall_back_to_preset() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args([
            "tiny", "--width", "-5", "--height", "abc", "-f", "plain",
        ]));
        assert_eq!(lines, vec!["█".repeat(20); 5]);
    }

    #[test]
    fn test_last_preset_wins_and_unknown_is_ignored() {
        let dir = TempDir::new().unwrap();
        transflag(&dir)
            .args(["big", "sparkly", "tiny", "-f", "plain"])
            .assert()
            .success()
            .stdout(predicate::eq(format!("{}\n", "█".repeat(20)).repeat(5)))
            .stderr(predicate::str::contains("sparkly"));
    }

    #[test]
    fn test_date() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args([
            "tiny", "-f", "plain", "-c", "#", "--date", "%Y",
        ]));
        assert_eq!(lines.len(), 5);
        assert!(predicate::str::is_match(r"^#{16}\d{4}$")
            .unwrap()
            .eval(&lines[0]));
        assert_eq!(lines[1], "#".repeat(20));
    }

    #[test]
    fn test_json() {
        let dir = TempDir::new().unwrap();
        let output = transflag(&dir)
            .args(["tiny", "--format", "json"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let lines = value.as_array().unwrap();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0]["indent"], 0);
        assert_eq!(lines[0]["segments"][0]["text"], "█".repeat(20));
        assert_eq!(
            lines[2]["segments"][0]["color"],
            serde_json::json!({ "rgb": [255, 255, 255] })
        );
    }

    #[test]
    fn test_huge_declined() {
        let dir = TempDir::new().unwrap();
        transflag(&dir)
            .arg("huge")
            .write_stdin("n\n")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "your terminal (height: 24) might be too small for the flag (height: 34).",
            ))
            .stdout(predicate::str::contains("proceed anyway? [y/N] "))
            .stdout(predicate::str::contains("operation cancelled."))
            .stdout(predicate::str::contains("█").not());
    }

    #[test]
    fn test_huge_declined_on_empty_input() {
        let dir = TempDir::new().unwrap();
        transflag(&dir)
            .arg("huge")
            .assert()
            .success()
            .stdout(predicate::str::contains("operation cancelled."));
    }

    #[test]
    fn test_huge_confirmed() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args(["huge", "-f", "plain"]).write_stdin("y\n"));
        // the first row follows the prompt on the same line, as nothing echoes the answer
        let fill = "█".repeat(80);
        let flag: Vec<&String> = lines.iter().filter(|line| line.contains('█')).collect();
        assert_eq!(flag.len(), 34);
        assert!(flag[0].starts_with("proceed anyway? [y/N] "));
        assert!(flag.iter().all(|line| line.ends_with(&fill)));
    }

    #[test]
    fn test_huge_with_yes_skips_prompt() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args(["huge", "--yes", "-f", "plain"]));
        assert_eq!(lines, vec!["█".repeat(80); 34]);
    }

    #[test]
    fn test_huge_with_height_skips_prompt() {
        let dir = TempDir::new().unwrap();
        let lines = stdout_lines(transflag(&dir).args(["huge", "-H", "40", "-f", "plain"]));
        assert_eq!(lines.len(), 40);
    }

    #[test]
    fn test_configuration_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.yml"),
            "preset: tiny\nformat: plain\nfill_char: '#'\n",
        )
        .unwrap();

        let lines = stdout_lines(&mut transflag(&dir));
        assert_eq!(lines, vec!["#".repeat(20); 5]);
    }

    #[test]
    fn test_flags_override_configuration() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("config.yml"),
            "preset: tiny\nformat: plain\nfill_char: '#'\n",
        )
        .unwrap();

        let lines = stdout_lines(transflag(&dir).args(["-c", "=", "-w", "4"]));
        assert_eq!(lines, vec!["=".repeat(4); 5]);
    }

    #[test]
    fn test_configuration_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.yml");
        fs::write(&path, "format: plain\nborder: true\nborder_char: '-'\n").unwrap();

        let lines = stdout_lines(transflag(&dir).args(["tiny", "--config"]).arg(&path));
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "-".repeat(22));
    }

    #[test]
    fn test_malformed_configuration() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.yml"), "preset: [tiny\n").unwrap();

        transflag(&dir)
            .assert()
            .code(78)
            .stderr(predicate::str::starts_with("ERROR: Configuration error"));
    }

    #[test]
    fn test_missing_configuration_flag_file() {
        let dir = TempDir::new().unwrap();
        transflag(&dir)
            .args(["--config"])
            .arg(dir.path().join("nope.yml"))
            .assert()
            .code(78);
    }
}
