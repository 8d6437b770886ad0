//
//  jenkins-cli
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Tests of the `jk` binary.

use assert_cmd::Command;
use mockito::{Matcher, Server};
use predicates::prelude::*;
use tempfile::TempDir;

/// A `jk` command isolated from the user's configuration and environment.
fn jk(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("jk").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("JENKINS_URL")
        .env_remove("JENKINS_USER")
        .env_remove("JENKINS_TOKEN")
        .env_remove("JK_DEBUG");
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    jk(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Jenkins"))
        .stdout(predicate::str::contains("job"))
        .stdout(predicate::str::contains("queue"));
}

#[test]
fn version_prints_crate_version() {
    let home = TempDir::new().unwrap();
    jk(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("jk version {}", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn missing_server_fails() {
    let home = TempDir::new().unwrap();
    jk(&home)
        .args(["job", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No Jenkins server configured"));
}

#[test]
fn bad_build_param_is_usage_error() {
    let home = TempDir::new().unwrap();
    jk(&home)
        .args(["job", "build", "core", "-p", "BRANCH"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[test]
fn config_set_then_get() {
    let home = TempDir::new().unwrap();
    jk(&home)
        .args(["config", "set", "server.url", "http://ci.local:8080"])
        .assert()
        .success();
    jk(&home)
        .args(["config", "get", "server.url"])
        .assert()
        .success()
        .stdout("http://ci.local:8080\n");
}

#[test]
fn config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    jk(&home)
        .args(["config", "set", "editor", "vim"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn job_list_as_json() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/api/json")
        .match_header("authorization", "Basic Ym9iOnQwa2Vu")
        .with_status(200)
        .with_body(r#"{"jobs":[{"name":"core","url":"http://ci/job/core/","color":"blue"}]}"#)
        .create();

    jk(&home)
        .args(["--json", "job", "list"])
        .env("JENKINS_URL", server.url())
        .env("JENKINS_USER", "bob")
        .env("JENKINS_TOKEN", "t0ken")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "core""#));
}

#[test]
fn job_build_with_params() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    let trigger = server
        .mock("POST", "/job/core/buildWithParameters")
        .match_query(Matcher::UrlEncoded("BRANCH".into(), "main".into()))
        .with_status(201)
        .with_header("location", "/queue/item/5/")
        .create();
    server
        .mock("GET", "/queue/item/5/api/json")
        .with_status(200)
        .with_body(r#"{"id":5,"task":{"name":"core"}}"#)
        .create();

    jk(&home)
        .args(["--server", &server.url(), "--json", "job", "build", "core", "-p", "BRANCH=main"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""id": 5"#));
    trigger.assert();
}

#[test]
fn missing_job_exits_not_found() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    server.mock("GET", "/job/nope/api/json").with_status(404).create();

    jk(&home)
        .args(["--server", &server.url(), "job", "view", "nope"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("404"));
}

const GIT_PROJECT: &str = r#"<?xml version='1.1' encoding='UTF-8'?>
<project>
  <scm class="hudson.plugins.git.GitSCM" plugin="git@5.2.0">
    <userRemoteConfigs>
      <hudson.plugins.git.UserRemoteConfig>
        <url>https://git.example.com/core.git</url>
      </hudson.plugins.git.UserRemoteConfig>
    </userRemoteConfigs>
  </scm>
  <builders>
    <hudson.tasks.Maven>
      <targets>clean install</targets>
    </hudson.tasks.Maven>
  </builders>
  <buildWrappers/>
</project>
"#;

#[test]
fn job_update_sends_file_unchanged() {
    let home = TempDir::new().unwrap();
    let file = home.path().join("config.xml");
    std::fs::write(&file, GIT_PROJECT).unwrap();

    let mut server = Server::new();
    let update = server
        .mock("POST", "/job/core/config.xml")
        .match_header("content-type", "application/xml")
        .match_body(Matcher::Exact(GIT_PROJECT.to_string()))
        .with_status(200)
        .create();

    jk(&home)
        .args(["--server", &server.url(), "job", "update", "core", "-f"])
        .arg(&file)
        .assert()
        .success();
    update.assert();
}

#[test]
fn job_config_prints_server_document() {
    let home = TempDir::new().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", "/job/core/config.xml")
        .with_status(200)
        .with_body(GIT_PROJECT)
        .create();

    jk(&home)
        .args(["--server", &server.url(), "job", "config", "core"])
        .assert()
        .success()
        .stdout(GIT_PROJECT);
}
