use assert_cmd::Command;
use predicates::prelude::*;

fn lmst() -> Command {
    let mut cmd = Command::cargo_bin("lmst").unwrap();
    cmd.env("TZ", "UTC0").env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_lmst_for_a_given_time() {
    lmst()
        .args(["0.0", "2000-01-01T12:00"])
        .assert()
        .success()
        .stdout("18:41:50\n");
}

#[test]
fn accepts_west_longitudes() {
    lmst()
        .args(["-71.25", "2024-06-21T03:30"])
        .assert()
        .success()
        .stdout("16:44:18\n");
}

#[test]
fn honours_the_process_time_zone() {
    // 14:00 at UTC+2 is the J2000.0 instant. POSIX TZ signs are inverted.
    Command::cargo_bin("lmst")
        .unwrap()
        .env("TZ", "XXX-2")
        .args(["0", "2000-01-01T14:00"])
        .assert()
        .success()
        .stdout("18:41:50\n");
}

#[test]
fn current_time_prints_one_line() {
    lmst()
        .arg("12.5")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d{2}:\d{2}:\d{2}\n$").unwrap());
}

#[test]
fn missing_arguments_print_usage() {
    lmst()
        .assert()
        .code(255)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn too_many_arguments_print_usage() {
    lmst()
        .args(["1", "2000-01-01T00:00", "extra"])
        .assert()
        .code(255)
        .stdout("")
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn bad_longitude_fails_without_output() {
    lmst()
        .arg("east")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid longitude"));
}

#[test]
fn bad_timestamp_fails_without_output() {
    lmst()
        .args(["10", "2000/01/01 12:00"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("invalid observation time"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    lmst()
        .args(["-v", "0", "2000-01-01T12:00"])
        .assert()
        .success()
        .stdout("18:41:50\n")
        .stderr(predicate::str::contains("greenwich mean sidereal time"));
}

#[test]
fn rust_log_alone_enables_debug_output() {
    lmst()
        .env("RUST_LOG", "debug")
        .args(["0", "2000-01-01T12:00"])
        .assert()
        .success()
        .stdout("18:41:50\n")
        .stderr(predicate::str::contains("greenwich mean sidereal time"));
}

#[test]
fn quiet_by_default() {
    lmst()
        .args(["0", "2000-01-01T12:00"])
        .assert()
        .success()
        .stderr("");
}

#[test]
fn repeated_fall_back_hour_uses_the_earlier_instant() {
    // 01:30 EDT is 05:30Z; the repeated 01:30 EST is 06:30Z.
    let new_york = Command::cargo_bin("lmst")
        .unwrap()
        .env("TZ", "America/New_York")
        .env_remove("RUST_LOG")
        .args(["0", "2024-11-03T01:30"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    lmst()
        .args(["0", "2024-11-03T05:30"])
        .assert()
        .success()
        .stdout(String::from_utf8(new_york).unwrap())
        .stdout("08:21:53\n");
}

#[test]
fn spring_forward_gap_is_rejected() {
    Command::cargo_bin("lmst")
        .unwrap()
        .env("TZ", "America/New_York")
        .env_remove("RUST_LOG")
        .args(["0", "2024-03-10T02:30"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("does not exist"));
}
