use std::io::{self, Write};

use anyhow::ensure;
use clap::Args;
use vernan_config::Config;
use vernan_core_contact_contracts::FormController;
use vernan_models::{form::FormState, status::SubmissionStatus};

use crate::{environment, render::render};

#[derive(Debug, Args)]
pub struct SubmitArgs {
    /// Full name of the sender
    #[arg(long, default_value = "")]
    name: String,
    /// Email address of the sender
    #[arg(long, default_value = "")]
    email: String,
    /// Phone number, 7 to 15 digits with an optional + prefix
    #[arg(long, default_value = "")]
    phone: String,
    /// The message to send
    #[arg(long, default_value = "")]
    message: String,
}

impl From<SubmitArgs> for FormState {
    fn from(value: SubmitArgs) -> Self {
        Self {
            name: value.name,
            email: value.email,
            phone: value.phone,
            message: value.message,
        }
    }
}

impl SubmitArgs {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let controller = environment::form_controller(&config)?;
        run(&controller, self.into(), &mut io::stdout().lock()).await
    }
}

/// Fills in every field as if the user typed and left it, then submits.
pub async fn run(
    controller: &impl FormController,
    values: FormState,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for (field, value) in values.iter() {
        controller.on_field_change(field, value.into());
        controller.on_field_blur(field, value.into());
    }

    controller.submit().await;
    render(controller, out)?;

    ensure!(
        matches!(controller.snapshot().status, SubmissionStatus::Succeeded(_)),
        "Failed to submit contact form"
    );

    Ok(())
}
