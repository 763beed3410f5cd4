use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};
use vernan_core_contact_contracts::{FormController, FormSnapshot};
use vernan_extern_contracts::contact::{ContactApiResponse, ContactApiService};
use vernan_models::{
    contact::ContactRequest, field::FieldName, form::TouchedSet, status::SubmissionStatus,
};

pub use validation::{rule, validate, validate_all, ValidationRule};

pub mod validation;

#[cfg(test)]
mod tests;

pub const INVALID_FORM_MESSAGE: &str = "Please fix the errors above before submitting";
pub const SUBMITTED_MESSAGE: &str = "Form Submitted";
pub const REJECTED_MESSAGE: &str = "Submission failed. Please try again.";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Network error. Please check your connection and try again.";

#[derive(Debug, Clone)]
pub struct FormControllerImpl<ContactApi> {
    contact_api: ContactApi,
    state: Arc<State>,
}

#[derive(Debug, Default)]
struct State {
    form: Mutex<FormSnapshot>,
}

impl State {
    fn lock(&self) -> MutexGuard<'_, FormSnapshot> {
        // Every update leaves the snapshot consistent, so a poisoned lock is
        // still safe to use.
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<ContactApi> FormControllerImpl<ContactApi> {
    pub fn new(contact_api: ContactApi) -> Self {
        Self {
            contact_api,
            state: Default::default(),
        }
    }
}

impl<ContactApi> FormController for FormControllerImpl<ContactApi>
where
    ContactApi: ContactApiService,
{
    fn snapshot(&self) -> FormSnapshot {
        self.state.lock().clone()
    }

    fn on_field_change(&self, field: FieldName, value: String) {
        let mut form = self.state.lock();

        if form.status.is_terminal() {
            form.status = SubmissionStatus::Idle;
        }

        if form.touched.contains(field) {
            let error = validate(field, &value);
            form.errors.set(field, error);
        }

        form.values.set(field, value);
    }

    fn on_field_blur(&self, field: FieldName, value: String) {
        let mut form = self.state.lock();
        form.touched.insert(field);
        form.errors.set(field, validate(field, &value));
    }

    async fn submit(&self) {
        let request = {
            let mut form = self.state.lock();

            if form.status.is_submitting() {
                debug!("contact form submission already in flight, ignoring submit");
                return;
            }

            form.touched = TouchedSet::all();
            form.errors = validate_all(&form.values);

            if form.errors.has_errors() {
                debug!(errors = ?form.errors, "contact form is invalid, not submitting");
                form.status = SubmissionStatus::Failed(INVALID_FORM_MESSAGE.into());
                return;
            }

            form.status = SubmissionStatus::Submitting;
            ContactRequest::from(form.values.clone())
        };

        let in_flight = InFlight {
            state: &self.state,
            settled: false,
        };

        match self.contact_api.submit(request).await {
            Ok(ContactApiResponse::Accepted) => {
                info!("contact form submitted");
                in_flight.settle(|form| {
                    *form = FormSnapshot {
                        status: SubmissionStatus::Succeeded(SUBMITTED_MESSAGE.into()),
                        ..Default::default()
                    };
                });
            }
            Ok(ContactApiResponse::Rejected { message }) => {
                warn!(?message, "contact form was rejected");
                let message = message.unwrap_or_else(|| REJECTED_MESSAGE.into());
                in_flight.settle(|form| form.status = SubmissionStatus::Failed(message));
            }
            Err(err) => {
                warn!("Failed to submit contact form: {err:#}");
                in_flight.settle(|form| {
                    form.status = SubmissionStatus::Failed(NETWORK_ERROR_MESSAGE.into());
                });
            }
        }
    }
}

/// Moves the status out of [`SubmissionStatus::Submitting`] when dropped
/// without being settled, e.g. if the request future panics or is dropped.
struct InFlight<'a> {
    state: &'a State,
    settled: bool,
}

impl InFlight<'_> {
    fn settle(mut self, update: impl FnOnce(&mut FormSnapshot)) {
        update(&mut self.state.lock());
        self.settled = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("contact form submission was aborted");
            self.state.lock().status = SubmissionStatus::Failed(NETWORK_ERROR_MESSAGE.into());
        }
    }
}
