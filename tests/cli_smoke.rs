//! End-to-end checks of the command-line wrapper

use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cooldown_trader"))
        .args(args)
        .env_remove("COOLDOWN_TRADER__SETTINGS__LOG_LEVEL")
        .env_remove("COOLDOWN_TRADER__SETTINGS__LOG_JSON")
        .output()
        .expect("failed to launch cooldown_trader")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_prints_profit() {
    let output = run_cli(&["1,2,3,0,2", "1", "0"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "3\n");
}

#[test]
fn cli_prints_normalized_decimals() {
    let output = run_cli(&["0.10,0.35,0.20,0.55", "1", "0.05"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "0.4\n");
}

#[test]
fn cli_accepts_empty_price_list() {
    let output = run_cli(&["", "2", "1"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "0\n");
}

#[test]
fn cli_malformed_prices_exit_2() {
    for prices in ["1,abc,3", "1,-2,3", "1,NaN"] {
        let output = run_cli(&[prices, "1", "0"]);
        assert_eq!(output.status.code(), Some(2), "prices {:?}", prices);
        assert!(stdout(&output).is_empty());

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert_eq!(stderr.lines().count(), 1, "stderr: {}", stderr);
        assert!(stderr.contains("index 1"), "stderr: {}", stderr);
    }
}

#[test]
fn cli_configuration_errors_exit_3() {
    for (cooldown, fee) in [("-1", "0"), ("x", "0"), ("1", "-2"), ("1", "fee")] {
        let output = run_cli(&["1,2,3", cooldown, fee]);
        assert_eq!(
            output.status.code(),
            Some(3),
            "cooldown {:?} fee {:?}",
            cooldown,
            fee
        );
        assert!(stdout(&output).is_empty());
    }
}

#[test]
fn cli_configuration_error_wins_over_bad_prices() {
    for (prices, cooldown, fee) in [("1,abc", "-1", "0"), ("1,-5", "1", "-2")] {
        let output = run_cli(&[prices, cooldown, fee]);
        assert_eq!(output.status.code(), Some(3), "args {:?}", (prices, cooldown, fee));

        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Configuration error"), "stderr: {}", stderr);
    }
}

#[test]
fn cli_usage_error_is_distinct_from_malformed_prices() {
    let output = run_cli(&["1,2"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn cli_help_exits_0() {
    let output = run_cli(&["--help"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("PRICES"));
}

#[test]
fn cli_missing_config_file_exit_3() {
    let output = run_cli(&["1,2", "0", "0", "--config", "/no/such/cooldown_trader.toml"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_plan_prints_json_schedule() {
    let output = run_cli(&["1,3,2,8,4,9", "0", "2", "--plan"]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("8"));

    let plan: serde_json::Value =
        serde_json::from_str(lines.next().expect("plan line")).expect("plan is JSON");
    let trips = plan["round_trips"].as_array().expect("round_trips array");
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[0]["buy"]["side"], "BUY");
    assert_eq!(trips[0]["buy"]["index"], 0);
    assert_eq!(trips[0]["sell"]["index"], 3);
    assert_eq!(trips[1]["buy"]["index"], 4);
}
