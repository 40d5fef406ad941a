use super::*;
use crate::net::latency::Immediate;

#[test]
fn every_template_has_a_script() {
    for template in TEMPLATES {
        let script = script_for(template.command);
        assert_ne!(script, SCRIPT_NOT_FOUND, "{} has no body", template.command);
        assert!(script.contains("def lambda_handler(event, context):"));
    }
}

#[test]
fn unknown_command_yields_placeholder() {
    assert_eq!(script_for("rotate IAM keys"), SCRIPT_NOT_FOUND);
}

#[test]
fn lookup_is_exact_match() {
    assert_eq!(script_for("Remove S3 Duplicates"), SCRIPT_NOT_FOUND);
    assert_eq!(script_for(" remove S3 duplicates"), SCRIPT_NOT_FOUND);
}

#[test]
fn cloudwatch_script_reads_retention_days() {
    assert!(script_for("cleanup CloudWatch logs").contains("retention_days = event.get('retention_days', 30)"));
}

#[test]
fn template_categories() {
    let categories: Vec<_> = TEMPLATES.iter().map(|t| t.category).collect();
    assert_eq!(categories, vec!["Storage", "Compute", "Monitoring"]);
}

#[tokio::test]
async fn generate_script_returns_template_after_latency() {
    let script = generate_script(&Immediate, "auto-tag EC2 with owner").await;
    assert!(script.contains("ec2.create_tags("));
}

#[tokio::test]
async fn generate_script_unknown_command() {
    assert_eq!(generate_script(&Immediate, "").await, SCRIPT_NOT_FOUND);
}

#[test]
fn can_generate_requires_command_and_idle() {
    let mut state = ScriptHelperState::default();
    assert!(!state.can_generate());
    state.command = "remove S3 duplicates".to_owned();
    assert!(state.can_generate());
    state.generating = true;
    assert!(!state.can_generate());
}
