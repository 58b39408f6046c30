use super::*;
use crate::config::{self, Codebase, ProjectDefinition};
use crate::operation::OperationError;
use crate::output::BufferSink;
use crate::subprocess::MockExecutor;

fn project(yaml: &str) -> ProjectDefinition {
    config::load(yaml.as_bytes()).unwrap()
}

fn runner(executor: &MockExecutor) -> ProjectRunner<MockExecutor, BufferSink> {
    ProjectRunner::new(executor.clone(), BufferSink::new())
}

const GO_PROJECT: &str = r#"
name: TestProject
codebase:
  language: go
  build:
    steps:
      - echo 'Building project...'
      - go build -o testapp
  test:
    steps:
      - go test ./...
tasks:
  lint:
    fail_fast: true
    steps:
      - cmd: golangci-lint
        args: run
"#;

#[test]
fn test_default_install_for_go() {
    let codebase = Codebase {
        language: Some("Go".into()),
        ..Codebase::default()
    };
    let install = default_install(&codebase).unwrap();
    assert_eq!(install.steps[0].identifier(), "go mod tidy");
}

#[test]
fn test_default_install_for_python_uses_dependencies() {
    let codebase = Codebase {
        language: Some("python".into()),
        dependencies: Some("requirements-dev.txt".into()),
        ..Codebase::default()
    };
    let install = default_install(&codebase).unwrap();
    assert_eq!(
        install.steps[0].identifier(),
        "pip install -r requirements-dev.txt"
    );
}

#[test]
fn test_default_install_errors() {
    let missing = Codebase::default();
    assert!(matches!(
        default_install(&missing),
        Err(ProjectError::MissingLanguage)
    ));

    let cobol = Codebase {
        language: Some("cobol".into()),
        ..Codebase::default()
    };
    let err = default_install(&cobol).unwrap_err();
    assert_eq!(err.to_string(), "unsupported codebase language: cobol");

    let python = Codebase {
        language: Some("python".into()),
        ..Codebase::default()
    };
    assert!(matches!(
        default_install(&python),
        Err(ProjectError::MissingDependencies(_))
    ));
}

#[test]
fn test_declared_install_wins_over_language_default() {
    let project = project(
        r#"
codebase:
  language: go
  install:
    steps: [ "go mod download" ]
"#,
    );
    let install = default_install(project.codebase.as_ref().unwrap()).unwrap();
    assert_eq!(install.steps[0].identifier(), "go mod download");
}

#[tokio::test]
async fn test_build_installs_then_builds() {
    let project = project(GO_PROJECT);
    let executor = MockExecutor::new();
    let mut runner = runner(&executor);

    let report = runner
        .build(&project, BuildOptions::default())
        .await
        .unwrap();

    assert_eq!(report.steps, 2);
    assert_eq!(
        executor.calls(),
        vec![
            "go mod tidy",
            "echo 'Building project...'",
            "go build -o testapp"
        ]
    );
}

#[tokio::test]
async fn test_build_can_skip_install() {
    let project = project(GO_PROJECT);
    let executor = MockExecutor::new();
    let mut runner = runner(&executor);

    runner
        .build(&project, BuildOptions { no_install: true })
        .await
        .unwrap();

    assert!(!executor.verify_called("go mod tidy", 1));
    assert_eq!(executor.call_count(), 2);
}

#[tokio::test]
async fn test_failed_install_stops_build() {
    let project = project(GO_PROJECT);
    let executor = MockExecutor::new();
    executor.expect_step("go mod tidy").returns_exit_code(1).finish();
    let mut runner = runner(&executor);

    let err = runner
        .build(&project, BuildOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ProjectError::Install(_)));
    assert_eq!(executor.calls(), vec!["go mod tidy"]);
}

#[tokio::test]
async fn test_build_without_codebase() {
    let project = project("tasks: {}");
    let executor = MockExecutor::new();
    let err = runner(&executor)
        .build(&project, BuildOptions::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProjectError::MissingCodebase));
}

#[tokio::test]
async fn test_test_runs_test_operation() {
    let project = project(GO_PROJECT);
    let executor = MockExecutor::new();
    executor.expect_step("go test ./...").returns_exit_code(1).finish();

    let err = runner(&executor).test(&project).await.unwrap_err();

    assert!(matches!(err, ProjectError::Test(_)));
    assert_eq!(
        err.operation_error().unwrap().failed_steps(),
        vec!["go test ./..."]
    );
}

#[tokio::test]
async fn test_run_task_by_name() {
    let project = project(GO_PROJECT);
    let executor = MockExecutor::new();
    let mut runner = runner(&executor);

    let report = runner.run_task(&project, "lint").await.unwrap();

    assert_eq!(report.steps, 1);
    assert_eq!(executor.calls(), vec!["golangci-lint run"]);
    assert_eq!(runner.sink().progress_lines(), vec!["[1] golangci-lint run"]);
}

#[tokio::test]
async fn test_run_task_failure_keeps_operation_error() {
    let project = project(GO_PROJECT);
    let executor = MockExecutor::new();
    executor
        .expect_step("golangci-lint run")
        .returns_exit_code(3)
        .finish();

    let err = runner(&executor)
        .run_task(&project, "lint")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "task 'lint' failed");
    assert!(matches!(
        err.operation_error(),
        Some(OperationError::StepFailed { exit_code: 3, .. })
    ));
}

#[tokio::test]
async fn test_unknown_task_lists_available() {
    let project = project(GO_PROJECT);
    let executor = MockExecutor::new();

    let err = runner(&executor)
        .run_task(&project, "deploy")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "unknown task 'deploy' (available: lint)");
    assert_eq!(executor.call_count(), 0);
}
