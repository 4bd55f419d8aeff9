//! Tests for the check-linear status report

use commit_gates::core::models::CredentialSource;
use commit_gates::core::services::IssueRefEnforcer;

use crate::common::workspace::Workspace;

fn enforcer(ws: &Workspace) -> IssueRefEnforcer {
    IssueRefEnforcer::new(ws.issue_config(), ws.path()).unwrap()
}

#[test]
fn credential_from_environment() {
    let ws = Workspace::new();
    let status = enforcer(&ws).tracker_status(|var| {
        assert_eq!(var, "LINEAR_API_KEY");
        Some("lin_api_123".to_string())
    });
    assert_eq!(status.credential, CredentialSource::Environment);
}

#[test]
fn credential_from_env_file() {
    let ws = Workspace::new();
    let env_file = ws.write("home/.clawdbot/.env", "OTHER=1\nLINEAR_API_KEY=lin_api_123\n");

    let status = enforcer(&ws).tracker_status(|_| None);
    assert_eq!(status.credential, CredentialSource::EnvFile { path: env_file });
    assert!(status.credential.is_configured());
}

#[test]
fn env_file_without_variable_is_missing() {
    let ws = Workspace::new();
    ws.write("home/.clawdbot/.env", "OPENAI_API_KEY=x\n");

    let status = enforcer(&ws).tracker_status(|_| None);
    assert_eq!(status.credential, CredentialSource::Missing);
    assert!(!status.credential.is_configured());
}

#[test]
fn no_task_suggests_creating_one() {
    let ws = Workspace::new();
    let status = enforcer(&ws).tracker_status(|_| None);

    assert_eq!(status.active_task, None);
    assert!(status.next_command.contains("create-issue.sh"));
}

#[test]
fn active_task_suggests_update() {
    let ws = Workspace::new();
    ws.write("marker.txt", "ROM-8");

    let status = enforcer(&ws).tracker_status(|_| None);
    assert_eq!(status.active_task.as_deref(), Some("ROM-8"));
    assert!(status.next_command.contains("update-issue.sh ROM-8 --state 'Done'"));
}

#[test]
fn status_never_carries_the_secret() {
    let ws = Workspace::new();
    let status = enforcer(&ws).tracker_status(|_| Some("lin_api_secret".to_string()));
    let json = serde_json::to_string(&status).unwrap();
    assert!(!json.contains("lin_api_secret"));
    assert!(json.contains("\"source\":\"environment\""));
}
