use std::io::{self, Write};

use vernan_core_contact_contracts::FormController;
use vernan_models::status::SubmissionStatus;

/// Writes the status banner and the visible field errors of the form.
pub fn render(controller: &impl FormController, out: &mut impl Write) -> io::Result<()> {
    let snapshot = controller.snapshot();

    match &snapshot.status {
        SubmissionStatus::Idle => {}
        SubmissionStatus::Submitting => writeln!(out, "Sending Your Message...")?,
        SubmissionStatus::Succeeded(message) => writeln!(out, "Success! {message}")?,
        SubmissionStatus::Failed(message) => writeln!(out, "Error: {message}")?,
    }

    for (field, error) in snapshot.errors.errors() {
        writeln!(out, "  {}: {error}", field.label())?;
    }

    Ok(())
}
