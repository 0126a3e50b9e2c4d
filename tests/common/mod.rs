use assert_cmd::Command;

pub fn ogp_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ogp").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
