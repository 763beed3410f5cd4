use anyhow::bail;
use vernan_core_contact_impl::validate;
use vernan_models::field::FieldName;

/// Checks a single value against the rules of `field`.
pub fn validate_value(field: FieldName, value: &str) -> anyhow::Result<()> {
    let error = validate(field, value);
    if !error.is_empty() {
        bail!(error);
    }
    println!("{} is valid", field.title());
    Ok(())
}
