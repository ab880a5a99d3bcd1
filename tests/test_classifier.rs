//! Unit tests for the canonical status classifier.

use nasiya_sdk::status::{is_completed, Category};

// ---------------------------------------------------------------------------
// Exact sets
// ---------------------------------------------------------------------------

#[test]
fn approved_exact_values() {
    for raw in ["APPROVED", "CONFIRMED", "FINISHED", "COMPLETED", "ACTIVE"] {
        assert_eq!(Category::classify(Some(raw)), Category::Approved, "{raw}");
    }
}

#[test]
fn rejected_exact_values() {
    for raw in [
        "REJECTED",
        "CANCELLED",
        "CANCELED",
        "CANCELED_BY_SCORING",
        "CANCELED_BY_CLIENT",
        "CANCELED_BY_DAILY",
    ] {
        assert_eq!(Category::classify(Some(raw)), Category::Rejected, "{raw}");
    }
}

#[test]
fn pending_exact_values() {
    for raw in [
        "CREATED",
        "ADDED_DETAIL",
        "WAITING_SCORING",
        "ADDED_PRODUCT",
        "WAITING_BANK_UPDATE",
        "WAITING_BANK_CONFIRM",
        "PENDING",
        "IN_PROGRESS",
        "NEW",
    ] {
        assert_eq!(Category::classify(Some(raw)), Category::Pending, "{raw}");
    }
}

#[test]
fn limit_exact_value() {
    assert_eq!(Category::classify(Some("LIMIT")), Category::Limit);
}

// ---------------------------------------------------------------------------
// Case and whitespace tolerance
// ---------------------------------------------------------------------------

#[test]
fn classification_is_case_insensitive() {
    assert_eq!(Category::classify(Some("confirmed")), Category::Approved);
    assert_eq!(Category::classify(Some("Rejected")), Category::Rejected);
    assert_eq!(Category::classify(Some("  limit  ")), Category::Limit);
}

// ---------------------------------------------------------------------------
// Substring fallback and precedence
// ---------------------------------------------------------------------------

#[test]
fn unknown_canceled_variant_is_rejected() {
    assert_eq!(
        Category::classify(Some("CANCELED_BY_OPERATOR")),
        Category::Rejected
    );
    assert_eq!(
        Category::classify(Some("AUTO_CANCELLED")),
        Category::Rejected
    );
}

#[test]
fn unknown_limit_variant_is_limit() {
    assert_eq!(Category::classify(Some("DAILY_LIMIT")), Category::Limit);
}

#[test]
fn rejected_substring_wins_over_limit_substring() {
    // A value containing both buckets exactly once, as Rejected.
    assert_eq!(
        Category::classify(Some("CANCELED_BY_LIMIT")),
        Category::Rejected
    );
}

#[test]
fn waiting_scoring_is_pending_despite_scoring_substring() {
    // Exact rules win over the SCORING substring fallback.
    assert_eq!(
        Category::classify(Some("WAITING_SCORING")),
        Category::Pending
    );
    // ...but an unknown SCORING value falls to Rejected.
    assert_eq!(
        Category::classify(Some("SCORING_DENIED")),
        Category::Rejected
    );
}

// ---------------------------------------------------------------------------
// Fail-open policy
// ---------------------------------------------------------------------------

#[test]
fn unknown_null_and_empty_fall_open_to_pending() {
    assert_eq!(Category::classify(Some("SOMETHING_ELSE")), Category::Pending);
    assert_eq!(Category::classify(Some("")), Category::Pending);
    assert_eq!(Category::classify(None), Category::Pending);
}

// ---------------------------------------------------------------------------
// Totality / partition
// ---------------------------------------------------------------------------

#[test]
fn every_status_maps_to_exactly_one_category() {
    let corpus = [
        Some("CONFIRMED"),
        Some("ACTIVE"),
        Some("CREATED"),
        Some("WAITING_SCORING"),
        Some("CANCELED_BY_CLIENT"),
        Some("CANCELED_BY_LIMIT"),
        Some("LIMIT"),
        Some("DAILY_LIMIT"),
        Some("TOTALLY_UNKNOWN"),
        Some(""),
        None,
    ];

    let mut counts = [0usize; 4];
    for raw in corpus {
        match Category::classify(raw) {
            Category::Approved => counts[0] += 1,
            Category::Pending => counts[1] += 1,
            Category::Rejected => counts[2] += 1,
            Category::Limit => counts[3] += 1,
        }
    }
    assert_eq!(counts.iter().sum::<usize>(), corpus.len());
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

#[test]
fn is_completed_distinguishes_terminal_approved() {
    assert!(is_completed(Some("FINISHED")));
    assert!(is_completed(Some("completed")));
    assert!(!is_completed(Some("CONFIRMED")));
    assert!(!is_completed(Some("ACTIVE")));
    assert!(!is_completed(None));
}

#[test]
fn labels_are_the_uzbek_display_strings() {
    assert_eq!(Category::Approved.label(), "Tasdiqlangan");
    assert_eq!(Category::Rejected.label(), "Rad etilgan");
    assert_eq!(Category::all().len(), 4);
}
