use crate::workflows::eligibility::documents::{DocumentCheck, SubmittedDocument};

fn standard_check() -> DocumentCheck {
    DocumentCheck::new(
        ["emirates_id", "bank_statement", "utility_bill"]
            .into_iter()
            .map(str::to_string),
    )
}

#[test]
fn complete_valid_submission_passes() {
    let review = standard_check().review(&[
        SubmittedDocument::valid("emirates_id"),
        SubmittedDocument::valid("bank_statement"),
        SubmittedDocument::valid("utility_bill"),
    ]);

    assert!(review.passed());
    assert!(review.missing_documents.is_empty());
    assert!(review.invalid_documents.is_empty());
}

#[test]
fn missing_set_is_exact_difference_sorted() {
    let review = standard_check().review(&[SubmittedDocument::valid("utility_bill")]);

    assert!(!review.passed());
    assert_eq!(
        review.missing_documents,
        vec!["bank_statement".to_string(), "emirates_id".to_string()]
    );
}

#[test]
fn extra_submissions_do_not_affect_the_gate() {
    let review = standard_check().review(&[
        SubmittedDocument::valid("emirates_id"),
        SubmittedDocument::valid("bank_statement"),
        SubmittedDocument::valid("utility_bill"),
        SubmittedDocument::valid("trade_license"),
    ]);

    assert!(review.passed());
}

#[test]
fn invalid_document_fails_even_when_all_types_present() {
    let review = standard_check().review(&[
        SubmittedDocument::valid("emirates_id"),
        SubmittedDocument::invalid("bank_statement"),
        SubmittedDocument::valid("utility_bill"),
    ]);

    assert!(!review.passed());
    assert!(review.missing_documents.is_empty());
    assert_eq!(review.invalid_documents, vec!["bank_statement".to_string()]);
}

#[test]
fn invalid_duplicate_types_are_reported_once() {
    let review = standard_check().review(&[
        SubmittedDocument::valid("emirates_id"),
        SubmittedDocument::valid("bank_statement"),
        SubmittedDocument::invalid("utility_bill"),
        SubmittedDocument::invalid("utility_bill"),
    ]);

    assert_eq!(review.invalid_documents, vec!["utility_bill".to_string()]);
}

#[test]
fn empty_submission_reports_every_required_type() {
    let review = standard_check().review(&[]);

    assert_eq!(review.missing_documents.len(), 3);
    assert!(!review.passed());
}
