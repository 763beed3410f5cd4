use pretty_assertions::assert_eq;
use vernan_core_contact_contracts::{FormController, FormSnapshot};
use vernan_extern_contracts::contact::MockContactApiService;
use vernan_models::{field::FieldName, status::SubmissionStatus};

use crate::tests::make_sut;

#[test]
fn untouched_field_is_not_validated() {
    // Arrange
    let sut = make_sut(MockContactApiService::new(), FormSnapshot::default());

    // Act
    for field in FieldName::ALL {
        sut.on_field_change(field, "x".into());
    }

    // Assert
    let snapshot = sut.snapshot();
    assert!(!snapshot.errors.has_errors());
    for field in FieldName::ALL {
        assert_eq!(snapshot.values.get(field), "x");
        assert_eq!(snapshot.errors.get(field), "");
    }
}

#[test]
fn touched_field_error_is_cleared() {
    // Arrange
    let sut = make_sut(MockContactApiService::new(), FormSnapshot::default());
    sut.on_field_change(FieldName::Name, "A".into());
    sut.on_field_blur(FieldName::Name, "A".into());
    assert_eq!(
        sut.snapshot().errors.get(FieldName::Name),
        "Name must be between 2 and 100 characters"
    );

    // Act
    sut.on_field_change(FieldName::Name, "Al".into());

    // Assert
    let snapshot = sut.snapshot();
    assert_eq!(snapshot.values.name, "Al");
    assert_eq!(snapshot.errors.get(FieldName::Name), "");
}

#[test]
fn touched_field_error_is_shown() {
    // Arrange
    let sut = make_sut(MockContactApiService::new(), FormSnapshot::default());
    sut.on_field_change(FieldName::Message, "Hello World!".into());
    sut.on_field_blur(FieldName::Message, "Hello World!".into());

    // Act
    sut.on_field_change(FieldName::Message, String::new());

    // Assert
    assert_eq!(
        sut.snapshot().errors.get(FieldName::Message),
        "Message is required"
    );
}

#[test]
fn only_changed_field_is_revalidated() {
    // Arrange
    let sut = make_sut(MockContactApiService::new(), FormSnapshot::default());
    sut.on_field_blur(FieldName::Name, String::new());
    sut.on_field_blur(FieldName::Email, String::new());

    // Act
    sut.on_field_change(FieldName::Name, "Max".into());

    // Assert
    let snapshot = sut.snapshot();
    assert_eq!(snapshot.errors.get(FieldName::Name), "");
    assert_eq!(snapshot.errors.get(FieldName::Email), "Email is required");
}

#[test]
fn terminal_status_is_reset() {
    for status in [
        SubmissionStatus::Succeeded("Form Submitted".into()),
        SubmissionStatus::Failed("Duplicate entry".into()),
    ] {
        // Arrange
        let sut = make_sut(
            MockContactApiService::new(),
            FormSnapshot {
                status,
                ..Default::default()
            },
        );

        // Act
        sut.on_field_change(FieldName::Phone, "+49".into());

        // Assert
        assert_eq!(sut.snapshot().status, SubmissionStatus::Idle);
    }
}

#[test]
fn submitting_status_is_kept() {
    // Arrange
    let sut = make_sut(
        MockContactApiService::new(),
        FormSnapshot {
            status: SubmissionStatus::Submitting,
            ..Default::default()
        },
    );

    // Act
    sut.on_field_change(FieldName::Phone, "+49".into());

    // Assert
    assert_eq!(sut.snapshot().status, SubmissionStatus::Submitting);
}
