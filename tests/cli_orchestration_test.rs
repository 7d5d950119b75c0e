// tests/cli_orchestration_test.rs
use scm_version::boundary::BoundaryWarning;
use scm_version::cli::{run_workflow, WorkflowArgs};
use scm_version::config::Config;
use scm_version::git::MockRepository;
use scm_version::{BumpOperation, ScmVersionError};
use std::fs;
use tempfile::TempDir;

fn repo_at(version: &str) -> MockRepository {
    let mut repo = MockRepository::new();
    repo.add_tag(version);
    repo
}

#[test]
fn test_current_only() {
    let repo = repo_at("9.8.7");
    let args = WorkflowArgs {
        current: true,
        patch: true,
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default()).unwrap();
    assert_eq!(result.current.to_string(), "9.8.7");
    assert_eq!(result.updated, None);
    assert_eq!(repo.fetched_remotes(), vec!["origin".to_string()]);
}

#[test]
fn test_patch_without_write() {
    let repo = repo_at("9.8.7");
    let args = WorkflowArgs {
        patch: true,
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default()).unwrap();
    assert_eq!(result.updated.unwrap().to_string(), "9.8.8");
    assert_eq!(result.operation, Some(BumpOperation::Patch));
    assert_eq!(result.tag, None);
    assert!(repo.created_tags().is_empty());
}

#[test]
fn test_minor_beats_patch() {
    let repo = repo_at("9.8.7");
    let args = WorkflowArgs {
        minor: true,
        patch: true,
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default()).unwrap();
    assert_eq!(result.updated.unwrap().to_string(), "9.9.0");
}

#[test]
fn test_major_with_write() {
    let repo = repo_at("9.8.7");
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("VERSION");
    let args = WorkflowArgs {
        major: true,
        minor: true,
        patch: true,
        write: true,
        file: file.clone(),
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default()).unwrap();
    assert_eq!(result.updated.unwrap().to_string(), "10.0.0");
    assert_eq!(fs::read_to_string(&file).unwrap(), "10.0.0");
    assert_eq!(result.tag.as_deref(), Some("10.0.0"));
    assert!(result.pushed);
    assert_eq!(
        repo.created_tags(),
        vec![("10.0.0".to_string(), "Version 10.0.0".to_string())]
    );
    assert_eq!(
        repo.pushed_tags(),
        vec![("origin".to_string(), "10.0.0".to_string())]
    );
}

#[test]
fn test_write_with_prefix_and_no_push() {
    let mut repo = MockRepository::new();
    repo.add_tag("v1.2.3");
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("VERSION");

    let mut config = Config::default();
    config.tags.prefix = "v".to_string();
    config.behavior.push = false;

    let args = WorkflowArgs {
        pre: Some("rc".to_string()),
        write: true,
        file: file.clone(),
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &config).unwrap();
    assert_eq!(fs::read_to_string(&file).unwrap(), "1.2.4-rc");
    assert_eq!(result.tag.as_deref(), Some("v1.2.4-rc"));
    assert!(!result.pushed);
    assert!(repo.pushed_tags().is_empty());
}

#[test]
fn test_auto_uses_markers() {
    let mut repo = repo_at("2.3.4");
    repo.set_commits_since("2.3.4", ["add export #minor", "fix crash"]);
    let args = WorkflowArgs {
        auto: true,
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default()).unwrap();
    assert_eq!(result.updated.unwrap().to_string(), "2.4.0");
}

#[test]
fn test_auto_scans_from_resolved_prefixed_tag() {
    let mut repo = MockRepository::new();
    repo.add_tag("v2.3.4");
    repo.set_commits_since("v2.3.4", ["drop legacy api #major"]);
    let mut config = Config::default();
    config.tags.prefix = "v".to_string();
    let args = WorkflowArgs {
        auto: true,
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &config).unwrap();
    assert_eq!(result.updated.unwrap().to_string(), "3.0.0");
}

#[test]
fn test_auto_defaults_to_patch() {
    let mut repo = repo_at("2.3.4");
    repo.set_commits_since("2.3.4", ["fix crash"]);
    let args = WorkflowArgs {
        auto: true,
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default()).unwrap();
    assert_eq!(result.updated.unwrap().to_string(), "2.3.5");
}

#[test]
fn test_auto_without_tags_warns_and_patches() {
    let repo = MockRepository::new();
    let args = WorkflowArgs {
        auto: true,
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default()).unwrap();
    assert_eq!(result.updated.unwrap().to_string(), "0.0.1");
    assert!(result
        .warnings
        .contains(&BoundaryWarning::NoBaselineTag {
            version: "0.0.0".to_string()
        }));
}

#[test]
fn test_nothing_selected_is_no_op() {
    let repo = repo_at("1.0.0");
    let result = run_workflow(&WorkflowArgs::default(), &repo, &Config::default());
    assert!(matches!(result, Err(ScmVersionError::NoOp { .. })));
}

#[test]
fn test_build_only_change_is_no_op() {
    for tag in ["1.0.0", "1.0.0+ci.1", "1.0.0+ci.0"] {
        let repo = repo_at(tag);
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("VERSION");
        let args = WorkflowArgs {
            build: Some("ci.1".to_string()),
            write: true,
            file: file.clone(),
            ..WorkflowArgs::default()
        };

        let result = run_workflow(&args, &repo, &Config::default());
        assert!(
            matches!(result, Err(ScmVersionError::NoOp { .. })),
            "build on {}",
            tag
        );
        assert!(!file.exists());
        assert!(repo.created_tags().is_empty());
    }
}

#[test]
fn test_build_on_new_prerelease_is_not_no_op() {
    let repo = repo_at("1.0.0");
    let args = WorkflowArgs {
        pre: Some("rc".to_string()),
        build: Some("ci.1".to_string()),
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default()).unwrap();
    assert_eq!(result.updated.unwrap().to_string(), "1.0.1-rc");
}

#[test]
fn test_invalid_prerelease_aborts() {
    let repo = repo_at("1.0.0");
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("VERSION");
    let args = WorkflowArgs {
        pre: Some("xray.zulu".to_string()),
        write: true,
        file: file.clone(),
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &Config::default());
    assert!(matches!(result, Err(ScmVersionError::UnsupportedFormat(_))));
    assert!(!file.exists());
    assert!(repo.created_tags().is_empty());
}

#[test]
fn test_fetch_failure_aborts() {
    for current in [true, false] {
        let mut repo = repo_at("1.0.0");
        repo.fail_fetch();
        let args = WorkflowArgs {
            current,
            patch: true,
            ..WorkflowArgs::default()
        };

        let result = run_workflow(&args, &repo, &Config::default());
        match result {
            Err(ScmVersionError::Repository(msg)) => assert!(msg.contains("origin"), "{}", msg),
            other => panic!("Expected repository error, got {:?}", other),
        }
        assert!(repo.created_tags().is_empty());
    }
}

#[test]
fn test_fetch_uses_configured_remote() {
    let repo = repo_at("1.0.0");
    let mut config = Config::default();
    config.tags.remote = "upstream".to_string();
    let args = WorkflowArgs {
        current: true,
        ..WorkflowArgs::default()
    };

    run_workflow(&args, &repo, &config).unwrap();
    assert_eq!(repo.fetched_remotes(), vec!["upstream".to_string()]);
}

#[test]
fn test_fetch_disabled_in_config() {
    let mut repo = repo_at("1.0.0");
    repo.fail_fetch();
    let mut config = Config::default();
    config.behavior.fetch = false;
    let args = WorkflowArgs {
        current: true,
        ..WorkflowArgs::default()
    };

    let result = run_workflow(&args, &repo, &config).unwrap();
    assert_eq!(result.current.to_string(), "1.0.0");
}

#[test]
fn test_fetch_can_be_disabled() {
    let repo = repo_at("1.0.0");
    let args = WorkflowArgs {
        current: true,
        fetch: false,
        ..WorkflowArgs::default()
    };

    run_workflow(&args, &repo, &Config::default()).unwrap();
    assert!(repo.fetched_remotes().is_empty());
}
