//! Behavior of the correction-status classifier through the public crate API.

use homestay_workflow::workflows::{
    correction_required_statuses, is_correction_required_status, WorkflowStatus,
    CORRECTION_REQUIRED_STATUSES,
};

#[test]
fn fixed_statuses_require_correction() {
    for status in [
        "sent_back_for_corrections",
        "reverted_to_applicant",
        "reverted_by_dtdo",
        "objection_raised",
    ] {
        assert!(is_correction_required_status(Some(status)), "{status}");
    }
}

#[test]
fn absent_and_empty_statuses_do_not_require_correction() {
    assert!(!is_correction_required_status(None));
    assert!(!is_correction_required_status(Some("")));
}

#[test]
fn matching_is_exact() {
    for status in [
        "approved",
        "pending_review",
        "finalized",
        "Sent_Back_For_Corrections",
        " objection_raised",
        "reverted_by",
    ] {
        assert!(!is_correction_required_status(Some(status)), "{status}");
    }
}

#[test]
fn scenario_outcomes() {
    assert!(is_correction_required_status(Some("objection_raised")));
    assert!(!is_correction_required_status(Some("finalized")));
    assert!(!is_correction_required_status(None));
}

#[test]
fn list_is_the_single_source_for_typed_statuses() {
    assert_eq!(correction_required_statuses(), &CORRECTION_REQUIRED_STATUSES[..]);
    let flagged: Vec<bool> = CORRECTION_REQUIRED_STATUSES
        .iter()
        .map(|status| WorkflowStatus::from(*status).is_correction_required())
        .collect();
    assert_eq!(flagged, vec![true; 4]);
}

#[test]
fn classification_is_stable_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|index| {
            std::thread::spawn(move || {
                let status = if index % 2 == 0 {
                    "reverted_to_applicant"
                } else {
                    "under_inspection"
                };
                (index, is_correction_required_status(Some(status)))
            })
        })
        .collect();

    for handle in handles {
        let (index, flagged) = handle.join().expect("thread completes");
        assert_eq!(flagged, index % 2 == 0);
    }
}
