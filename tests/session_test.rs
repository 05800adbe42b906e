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

#[test]
fn duplicate_registration_is_refused() {
    let tmp = tempdir().expect("tempdir");

    desk_cmd(tmp.path())
        .args([
            "register",
            "--name",
            "Cleo",
            "--email",
            "c@x.com",
            "--password",
            "pw1",
        ])
        .assert()
        .success();

    desk_cmd(tmp.path())
        .args([
            "register",
            "--name",
            "Imposter",
            "--email",
            "c@x.com",
            "--password",
            "pw2",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn login_requires_the_exact_credential_pair() {
    let tmp = tempdir().expect("tempdir");

    desk_cmd(tmp.path())
        .args([
            "register",
            "--name",
            "Cleo",
            "--email",
            "c@x.com",
            "--password",
            "pw1",
        ])
        .assert()
        .success();

    desk_cmd(tmp.path())
        .args(["login", "--email", "c@x.com", "--password", "nope"])
        .assert()
        .failure()
        .stderr(contains("invalid credentials"));

    desk_cmd(tmp.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("not signed in"));

    desk_cmd(tmp.path())
        .args(["login", "--email", "c@x.com", "--password", "pw1"])
        .assert()
        .success()
        .stdout(contains("signed in as c@x.com (client)"));

    desk_cmd(tmp.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("Cleo <c@x.com> (client)"));
}

#[test]
fn logout_can_be_repeated() {
    let tmp = tempdir().expect("tempdir");

    desk_cmd(tmp.path())
        .args([
            "register",
            "--name",
            "Cleo",
            "--email",
            "c@x.com",
            "--password",
            "pw1",
        ])
        .assert()
        .success();
    desk_cmd(tmp.path())
        .args(["login", "--email", "c@x.com", "--password", "pw1"])
        .assert()
        .success();

    desk_cmd(tmp.path()).args(["logout"]).assert().success();
    desk_cmd(tmp.path()).args(["logout"]).assert().success();

    desk_cmd(tmp.path())
        .args(["whoami"])
        .assert()
        .success()
        .stdout(contains("not signed in"));
}
