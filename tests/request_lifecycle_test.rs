use predicates::str::contains;
use std::path::Path;
use tempfile::tempdir;

fn desk_cmd(tmp: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("lingodesk");
    cmd.current_dir(tmp)
        .env("LINGODESK_HOME", tmp.join("deskhome"))
        .env("LINGODESK_CONFIG_PATH", tmp.join("no-config.toml"));
    cmd
}

fn register(tmp: &Path, name: &str, email: &str, password: &str, role: &str) {
    desk_cmd(tmp)
        .args([
            "register",
            "--name",
            name,
            "--email",
            email,
            "--password",
            password,
            "--role",
            role,
        ])
        .assert()
        .success();
}

fn login(tmp: &Path, email: &str, password: &str) {
    desk_cmd(tmp)
        .args(["login", "--email", email, "--password", password])
        .assert()
        .success();
}

fn submitted_id(stdout: &[u8]) -> u64 {
    let text = String::from_utf8_lossy(stdout);
    text.lines()
        .find_map(|line| {
            line.strip_prefix("request ")?
                .split_whitespace()
                .next()?
                .parse()
                .ok()
        })
        .expect("submit output names the new request id")
}

#[test]
fn upload_complete_deliver_download_flow() {
    let tmp = tempdir().expect("tempdir");
    register(tmp.path(), "Cleo", "c@x.com", "pw1", "client");
    register(tmp.path(), "Ahmed", "a@x.com", "pw2", "admin");

    login(tmp.path(), "c@x.com", "pw1");
    let assert = desk_cmd(tmp.path())
        .args([
            "submit",
            "--from",
            "en",
            "--to",
            "fr",
            "--tat",
            "24",
            "--file-name",
            "contract.docx",
            "--file-url",
            "https://cdn.example.com/contract.docx",
        ])
        .assert()
        .success()
        .stdout(contains("status Uploaded"));
    let id = submitted_id(&assert.get_output().stdout);

    desk_cmd(tmp.path())
        .args(["files"])
        .assert()
        .success()
        .stdout(contains("Uploaded: 1 | In Progress: 0 | Completed: 0"));

    // Not ready yet: download is gated on Completed.
    desk_cmd(tmp.path())
        .args(["download", "--id", &id.to_string()])
        .assert()
        .failure()
        .stderr(contains("not ready for download"));

    login(tmp.path(), "a@x.com", "pw2");
    desk_cmd(tmp.path())
        .args([
            "set-status",
            "--email",
            "c@x.com",
            "--id",
            &id.to_string(),
            "--status",
            "completed",
        ])
        .assert()
        .success();

    desk_cmd(tmp.path())
        .args([
            "deliver",
            "--email",
            "c@x.com",
            "--request-id",
            &id.to_string(),
            "--name",
            "contract.fr.docx",
            "--url",
            "https://cdn.example.com/contract.fr.docx",
        ])
        .assert()
        .success()
        .stdout(contains("delivered"));

    desk_cmd(tmp.path())
        .args(["notify", "--email", "c@x.com", "--id", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("Your Translated File is Ready!"))
        .stdout(contains("contract.docx"));

    login(tmp.path(), "c@x.com", "pw1");
    desk_cmd(tmp.path())
        .args(["download", "--id", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("contract.fr.docx"))
        .stdout(contains("https://cdn.example.com/contract.fr.docx"));

    // Withdrawal is only offered while Uploaded; the command refuses now.
    desk_cmd(tmp.path())
        .args(["remove", "--id", &id.to_string()])
        .assert()
        .failure()
        .stderr(contains("can no longer be removed"));
}

#[test]
fn uploaded_request_can_be_withdrawn() {
    let tmp = tempdir().expect("tempdir");
    register(tmp.path(), "Cleo", "c@x.com", "pw1", "client");
    login(tmp.path(), "c@x.com", "pw1");

    let assert = desk_cmd(tmp.path())
        .args([
            "submit",
            "--from",
            "en",
            "--to",
            "de",
            "--file-name",
            "memo.pdf",
        ])
        .assert()
        .success();
    let id = submitted_id(&assert.get_output().stdout);

    desk_cmd(tmp.path())
        .args(["remove", "--id", &id.to_string()])
        .assert()
        .success()
        .stdout(contains("removed"));

    desk_cmd(tmp.path())
        .args(["files"])
        .assert()
        .success()
        .stdout(contains("Uploaded: 0 | In Progress: 0 | Completed: 0"));
}

#[test]
fn revise_keeps_id_and_status() {
    let tmp = tempdir().expect("tempdir");
    register(tmp.path(), "Cleo", "c@x.com", "pw1", "client");
    login(tmp.path(), "c@x.com", "pw1");

    let assert = desk_cmd(tmp.path())
        .args([
            "submit",
            "--from",
            "en",
            "--to",
            "fr",
            "--file-name",
            "memo.pdf",
        ])
        .assert()
        .success();
    let id = submitted_id(&assert.get_output().stdout);

    desk_cmd(tmp.path())
        .args(["revise", "--id", &id.to_string(), "--to", "de"])
        .assert()
        .success()
        .stdout(contains("revised"));

    desk_cmd(tmp.path())
        .args(["files"])
        .assert()
        .success()
        .stdout(contains(format!("{id} | en -> de")))
        .stdout(contains("Uploaded: 1"));
}

#[test]
fn strict_transitions_refuse_regressions() {
    let tmp = tempdir().expect("tempdir");
    register(tmp.path(), "Cleo", "c@x.com", "pw1", "client");
    register(tmp.path(), "Ahmed", "a@x.com", "pw2", "admin");
    login(tmp.path(), "c@x.com", "pw1");

    let assert = desk_cmd(tmp.path())
        .args([
            "submit",
            "--from",
            "en",
            "--to",
            "fr",
            "--file-name",
            "memo.pdf",
        ])
        .assert()
        .success();
    let id = submitted_id(&assert.get_output().stdout);

    login(tmp.path(), "a@x.com", "pw2");
    desk_cmd(tmp.path())
        .env("LINGODESK_STRICT_TRANSITIONS", "1")
        .args([
            "set-status",
            "--email",
            "c@x.com",
            "--id",
            &id.to_string(),
            "--status",
            "completed",
        ])
        .assert()
        .success();

    desk_cmd(tmp.path())
        .env("LINGODESK_STRICT_TRANSITIONS", "1")
        .args([
            "set-status",
            "--email",
            "c@x.com",
            "--id",
            &id.to_string(),
            "--status",
            "uploaded",
        ])
        .assert()
        .failure()
        .stderr(contains("cannot move backwards"));

    // Without the strict toggle the raw setter accepts the same regression.
    desk_cmd(tmp.path())
        .args([
            "set-status",
            "--email",
            "c@x.com",
            "--id",
            &id.to_string(),
            "--status",
            "uploaded",
        ])
        .assert()
        .success();
}
