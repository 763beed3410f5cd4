use std::sync::LazyLock;

use vernan_models::{contact::ContactRequest, form::FormState};

pub static FOO: LazyLock<FormState> = LazyLock::new(|| FormState {
    name: "Max Mustermann".into(),
    email: "max.mustermann@example.de".into(),
    phone: "+4915112345678".into(),
    message: "Hello World! I would like to talk about a project.".into(),
});

pub static BAR: LazyLock<FormState> = LazyLock::new(|| FormState {
    name: "Erika Musterfrau".into(),
    email: "erika@example.com".into(),
    phone: "01761234567".into(),
    message: "Please call me back regarding the quote.".into(),
});

/// Every field fails a different rule.
pub static INVALID: LazyLock<FormState> = LazyLock::new(|| FormState {
    name: "A".into(),
    email: "not-an-email".into(),
    phone: "123".into(),
    message: "short".into(),
});

pub static FOO_REQUEST: LazyLock<ContactRequest> = LazyLock::new(|| FOO.clone().into());

pub static BAR_REQUEST: LazyLock<ContactRequest> = LazyLock::new(|| BAR.clone().into());
