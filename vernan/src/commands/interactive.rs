use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use vernan_config::Config;
use vernan_core_contact_contracts::FormController;
use vernan_models::{field::FieldName, status::SubmissionStatus};

use crate::{environment, render::render};

pub async fn interactive(config: Config) -> anyhow::Result<()> {
    let controller = environment::form_controller(&config)?;
    run(&controller, &mut io::stdin().lock(), &mut io::stdout().lock()).await
}

/// Prompts for each field until it is valid, then submits the form. After a
/// failed submission the user may retry with the same input.
pub async fn run(
    controller: &impl FormController,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for field in FieldName::ALL {
        prompt_field(controller, field, input, out)?;
    }

    loop {
        writeln!(out, "Sending Your Message...")?;
        controller.submit().await;
        render(controller, out)?;

        if !matches!(controller.snapshot().status, SubmissionStatus::Failed(_)) {
            return Ok(());
        }

        write!(out, "Try again? [y/N] ")?;
        out.flush()?;
        if !read_line(input)?.trim().eq_ignore_ascii_case("y") {
            bail!("Failed to submit contact form");
        }
    }
}

fn prompt_field(
    controller: &impl FormController,
    field: FieldName,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    loop {
        write!(out, "{} ({}): ", field.label(), field.placeholder())?;
        out.flush()?;

        let value = read_line(input)?;
        controller.on_field_change(field, value.clone());
        controller.on_field_blur(field, value);

        let snapshot = controller.snapshot();
        let error = snapshot.errors.get(field);
        if error.is_empty() {
            return Ok(());
        }
        writeln!(out, "  {error}")?;
    }
}

fn read_line(input: &mut impl BufRead) -> anyhow::Result<String> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    if read == 0 {
        bail!("Unexpected end of input");
    }
    Ok(line.trim_end_matches(['\r', '\n']).into())
}
