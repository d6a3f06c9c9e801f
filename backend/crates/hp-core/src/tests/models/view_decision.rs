use crate::{Identity, LoginRequest, ViewDecision, ViewId};

use std::sync::Arc;

fn identity() -> Arc<Identity> {
    Arc::new(Identity::try_from(LoginRequest::new("1", "Dr. Smith", "s@x.com", "doctor")).unwrap())
}

#[test]
fn given_render_decision_when_inspected_then_exposes_view_and_identity() {
    let identity = identity();
    let decision = ViewDecision::Render(ViewId::DoctorDashboard, identity.clone());

    assert_eq!(decision.view(), Some(ViewId::DoctorDashboard));
    assert_eq!(decision.identity(), Some(&identity));
    assert!(!decision.is_login());
}

#[test]
fn given_login_and_redirect_when_inspected_then_have_no_view() {
    assert!(ViewDecision::ShowLogin.is_login());
    assert_eq!(ViewDecision::ShowLogin.view(), None);
    assert_eq!(ViewDecision::Redirect("/".into()).view(), None);
    assert!(ViewDecision::Redirect("/".into()).identity().is_none());
}

#[test]
fn test_view_decision_display() {
    assert_eq!(ViewDecision::ShowLogin.to_string(), "login");
    assert_eq!(ViewDecision::Redirect("/".into()).to_string(), "redirect /");
    assert_eq!(
        ViewDecision::Render(ViewId::Chat, identity()).to_string(),
        "render chat as Dr. Smith (doctor)"
    );
}
