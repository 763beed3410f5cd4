use vernan_config::Config;
use vernan_core_contact_impl::FormControllerImpl;
use vernan_extern_impl::contact::{ContactApiServiceConfig, ContactApiServiceImpl};

pub type ContactApi = ContactApiServiceImpl;
pub type Form = FormControllerImpl<ContactApi>;

/// Creates a fresh contact form session talking to the configured endpoint.
pub fn form_controller(config: &Config) -> anyhow::Result<Form> {
    let contact_api_config = ContactApiServiceConfig::new(config.contact.endpoint_override.clone());
    tracing::debug!(endpoint = %contact_api_config.endpoint(), "using contact endpoint");

    let contact_api = ContactApiServiceImpl::new(contact_api_config)?;
    Ok(FormControllerImpl::new(contact_api))
}
