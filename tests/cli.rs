use assert_cmd::Command;
use predicates::prelude::*;

fn ulid_uuid() -> Command {
    Command::cargo_bin("ulid_uuid").unwrap()
}

#[test]
fn no_parameter_fails_with_usage_message() {
    ulid_uuid()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Please give one Parameter to convert!"));
}

#[test]
fn help_shows_usage_line() {
    ulid_uuid()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("ulid_uuid [-hn] [UUID|GUID|ULID]"));
}

#[test]
fn ulid_converts_with_newline() {
    ulid_uuid()
        .arg("08A1YW3WAH8SNTQVYGDB2EP69T")
        .assert()
        .success()
        .stdout("08507dc1-f151-466b-abef-d06ac4eb193a\n");
}

#[test]
fn ulid_converts_without_newline() {
    ulid_uuid()
        .args(["-n", "08A1YW3WAH8SNTQVYGDB2EP69T"])
        .assert()
        .success()
        .stdout("08507dc1-f151-466b-abef-d06ac4eb193a");
}

#[test]
fn uuid_and_guid_convert_to_ulid() {
    ulid_uuid()
        .arg("cfa45f5d-9c38-4772-b39a-036a0b9f8d30")
        .assert()
        .success()
        .stdout("6FMHFNV71R8XSB76G3D85SZ39G\n");

    ulid_uuid()
        .arg("CFA45F5D9C384772B39A036A0B9F8D30")
        .assert()
        .success()
        .stdout("6FMHFNV71R8XSB76G3D85SZ39G\n");
}

#[test]
fn out_of_range_ulid_fails() {
    ulid_uuid()
        .arg("F8A1YW3WAH8SNTQVYGDB2EP69T")
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("not valid ULID|UUID|GUID"));
}

#[test]
fn malformed_uuid_fails() {
    ulid_uuid()
        .arg("cfa45f5k-9c38-4772-!39a-036a0b9f8d30")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not valid ULID|UUID|GUID"));
}

#[test]
fn reads_identifier_from_stdin() {
    ulid_uuid()
        .arg("-")
        .write_stdin("cfa45f5d-9c38-4772-b39a-036a0b9f8d30\n")
        .assert()
        .success()
        .stdout("6FMHFNV71R8XSB76G3D85SZ39G\n");
}

#[test]
fn lenient_accepts_urn_and_braces() {
    ulid_uuid()
        .args(["--lenient", "urn:uuid:cfa45f5d-9c38-4772-b39a-036a0b9f8d30"])
        .assert()
        .success()
        .stdout("6FMHFNV71R8XSB76G3D85SZ39G\n");

    ulid_uuid()
        .args(["-l", "{cfa45f5d-9c38-4772-b39a-036a0b9f8d30}"])
        .assert()
        .success()
        .stdout("6FMHFNV71R8XSB76G3D85SZ39G\n");

    ulid_uuid()
        .arg("{cfa45f5d-9c38-4772-b39a-036a0b9f8d30}")
        .assert()
        .code(1);
}

#[test]
fn json_output_describes_conversion() {
    let output = ulid_uuid()
        .args(["--json", "08A1YW3WAH8SNTQVYGDB2EP69T"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["schema_version"], 1);
    assert_eq!(value["kind"], "ulid");
    assert_eq!(value["input"], "08A1YW3WAH8SNTQVYGDB2EP69T");
    assert_eq!(value["output"], "08507dc1-f151-466b-abef-d06ac4eb193a");
}
