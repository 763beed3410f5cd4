use std::future::Future;

use vernan_models::{
    field::FieldName,
    form::{ErrorMap, FormState, TouchedSet},
    status::SubmissionStatus,
};

/// State machine behind the contact form.
///
/// A presentation layer forwards input events to the controller and renders
/// the [`FormSnapshot`] it returns. None of the operations fail; problems are
/// reported through [`FormSnapshot::errors`] and [`FormSnapshot::status`].
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormController: Send + Sync + 'static {
    /// Return a copy of the current form state for rendering.
    fn snapshot(&self) -> FormSnapshot;

    /// Update the value of a field.
    ///
    /// Clears a displayed success or failure banner. The field is only
    /// revalidated if it has been touched before.
    fn on_field_change(&self, field: FieldName, value: String);

    /// Mark a field as touched and validate its current value.
    fn on_field_blur(&self, field: FieldName, value: String);

    /// Validate all fields and, if they are valid, send the form.
    ///
    /// Does nothing while another submission is in flight.
    fn submit(&self) -> impl Future<Output = ()> + Send;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormSnapshot {
    pub values: FormState,
    pub errors: ErrorMap,
    pub touched: TouchedSet,
    pub status: SubmissionStatus,
}

#[cfg(feature = "mock")]
impl MockFormController {
    pub fn with_snapshot(mut self, snapshot: FormSnapshot) -> Self {
        self.expect_snapshot().return_const(snapshot);
        self
    }
}
