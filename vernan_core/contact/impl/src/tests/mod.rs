use std::sync::{Arc, Mutex};

use vernan_core_contact_contracts::FormSnapshot;
use vernan_extern_contracts::contact::MockContactApiService;
use vernan_models::form::FormState;

use crate::{FormControllerImpl, State};

mod change;

type Sut = FormControllerImpl<MockContactApiService>;

fn make_sut(contact_api: MockContactApiService, snapshot: FormSnapshot) -> Sut {
    FormControllerImpl {
        contact_api,
        state: Arc::new(State {
            form: Mutex::new(snapshot),
        }),
    }
}

fn filled(values: &FormState) -> FormSnapshot {
    FormSnapshot {
        values: values.clone(),
        ..Default::default()
    }
}
