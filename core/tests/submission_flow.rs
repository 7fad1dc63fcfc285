use roadwatch_core::{
    FormError, FormSnapshot, Outcome, Phase, RequestToken, SubmissionSession,
};

fn valid_snapshot() -> FormSnapshot {
    FormSnapshot {
        has_image: true,
        latitude: "12.9".to_string(),
        longitude: "77.6".to_string(),
    }
}

fn start(session: &mut SubmissionSession) -> RequestToken {
    let (token, _) = session.submit(&valid_snapshot()).expect("valid snapshot");
    token
}

#[test]
fn valid_submit_enters_analyzing() {
    let mut session = SubmissionSession::new();
    assert_eq!(session.phase(), Phase::Idle);
    let (token, submission) = session.submit(&valid_snapshot()).unwrap();
    assert_eq!(session.phase(), Phase::Analyzing { token });
    assert_eq!(submission.latitude, "12.9");
    assert_eq!(submission.longitude, "77.6");
}

#[test]
fn missing_image_keeps_idle() {
    let mut session = SubmissionSession::new();
    let snapshot = FormSnapshot {
        has_image: false,
        ..valid_snapshot()
    };
    let err = session.submit(&snapshot).unwrap_err();
    assert_eq!(err, FormError::MissingImage);
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn resolve_moves_to_resolved() {
    let mut session = SubmissionSession::new();
    let token = start(&mut session);
    assert!(session.resolve(token, Outcome::CleanRoad));
    assert_eq!(
        session.phase(),
        Phase::Resolved {
            outcome: Outcome::CleanRoad
        }
    );
}

#[test]
fn stale_completion_is_ignored() {
    let mut session = SubmissionSession::new();
    let first = start(&mut session);
    let second = start(&mut session);
    assert!(second > first);

    assert!(!session.resolve(first, Outcome::GarbageDetected));
    assert_eq!(session.phase(), Phase::Analyzing { token: second });

    assert!(session.resolve(second, Outcome::CleanRoad));
    assert!(!session.resolve(second, Outcome::GarbageDetected));
    assert_eq!(
        session.phase(),
        Phase::Resolved {
            outcome: Outcome::CleanRoad
        }
    );
}

#[test]
fn rejected_submit_keeps_pending_request() {
    let mut session = SubmissionSession::new();
    let token = start(&mut session);
    let snapshot = FormSnapshot {
        latitude: String::new(),
        ..valid_snapshot()
    };
    assert_eq!(
        session.submit(&snapshot).unwrap_err(),
        FormError::MissingCoordinates
    );
    assert_eq!(session.pending(), Some(token));
    assert!(session.resolve(token, Outcome::GarbageDetected));
}

#[test]
fn rejected_submit_after_result_returns_to_idle() {
    let mut session = SubmissionSession::new();
    let token = start(&mut session);
    session.resolve(token, Outcome::CleanRoad);
    let snapshot = FormSnapshot {
        has_image: false,
        ..valid_snapshot()
    };
    assert!(session.submit(&snapshot).is_err());
    assert_eq!(session.phase(), Phase::Idle);
}
