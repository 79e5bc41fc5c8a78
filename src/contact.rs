//! Contact form handling. Submissions are validated and logged; nothing is
//! stored or forwarded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIRMATION_MESSAGE: &str = "Merci pour votre message ! Nous vous répondrons bientôt.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("Le champ « {0} » est obligatoire.")]
    Required(&'static str),
    #[error("L'adresse email n'est pas valide.")]
    InvalidEmail,
    #[error("Le message ne doit pas dépasser {max} caractères.")]
    MessageTooLong { max: usize },
}

/// Where a rendered form currently stands: `Empty -> Filled -> Submitted`,
/// and back to an empty form after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Filled(ContactForm),
    Invalid {
        form: ContactForm,
        errors: Vec<ContactError>,
    },
    /// A successful submission; the form is shown empty again.
    Submitted,
}

impl FormState {
    pub fn form(&self) -> ContactForm {
        match self {
            FormState::Filled(form) | FormState::Invalid { form, .. } => form.clone(),
            FormState::Empty | FormState::Submitted => ContactForm::default(),
        }
    }

    pub fn errors(&self) -> &[ContactError] {
        match self {
            FormState::Invalid { errors, .. } => errors,
            _ => &[],
        }
    }

    pub fn confirmation(&self) -> Option<&'static str> {
        matches!(self, FormState::Submitted).then_some(CONFIRMATION_MESSAGE)
    }

    /// Validates the current values. Valid submissions are logged and reset
    /// the form; invalid ones keep the trimmed values alongside the errors.
    pub fn submit(self, max_message_len: usize) -> FormState {
        let form = self.form().trimmed();
        match form.validate(max_message_len) {
            Ok(()) => {
                tracing::info!(
                    name = %form.name,
                    email = %form.email,
                    subject = %form.subject,
                    message_len = form.message.chars().count(),
                    "contact form submitted"
                );
                FormState::Submitted
            }
            Err(errors) => {
                tracing::debug!(errors = errors.len(), "contact form rejected");
                FormState::Invalid { form, errors }
            }
        }
    }
}

impl From<ContactForm> for FormState {
    fn from(form: ContactForm) -> Self {
        if form.is_empty() {
            FormState::Empty
        } else {
            FormState::Filled(form)
        }
    }
}

impl ContactForm {
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        [&self.name, &self.email, &self.subject, &self.message]
            .iter()
            .all(|field| field.trim().is_empty())
    }

    /// Checks every field and returns all problems at once.
    pub fn validate(&self, max_message_len: usize) -> Result<(), Vec<ContactError>> {
        let mut errors = Vec::new();

        for (label, value) in [
            ("Nom complet", &self.name),
            ("Email", &self.email),
            ("Sujet", &self.subject),
            ("Message", &self.message),
        ] {
            if value.is_empty() {
                errors.push(ContactError::Required(label));
            }
        }

        if !self.email.is_empty() && !is_valid_email(&self.email) {
            errors.push(ContactError::InvalidEmail);
        }

        if self.message.chars().count() > max_message_len {
            errors.push(ContactError::MessageTooLong {
                max: max_message_len,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') || email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut labels = domain.split('.');
    let has_dot = domain.contains('.');
    has_dot && labels.all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "  Jeanne Martin ".to_string(),
            email: "jeanne@example.fr".to_string(),
            subject: "Projet".to_string(),
            message: "Bonjour, j'ai un projet.".to_string(),
        }
    }

    #[test]
    fn valid_submission_resets_the_form() {
        let state = FormState::from(filled()).submit(5000);
        assert_eq!(state, FormState::Submitted);
        assert_eq!(state.form(), ContactForm::default());
        assert_eq!(state.confirmation(), Some(CONFIRMATION_MESSAGE));
    }

    #[test]
    fn invalid_submission_keeps_trimmed_values() {
        let mut form = filled();
        form.email = "jeanne.example.fr".to_string();
        let state = FormState::from(form).submit(5000);
        assert_eq!(state.errors(), &[ContactError::InvalidEmail]);
        assert_eq!(state.form().name, "Jeanne Martin");
        assert!(state.confirmation().is_none());
    }

    #[test]
    fn blank_fields_are_required() {
        let form = ContactForm {
            subject: "   ".to_string(),
            ..filled()
        };
        let errors = form.trimmed().validate(5000).expect_err("should fail");
        assert_eq!(errors, vec![ContactError::Required("Sujet")]);
        assert_eq!(errors[0].to_string(), "Le champ « Sujet » est obligatoire.");
    }

    #[test]
    fn message_length_is_counted_in_characters() {
        let form = ContactForm {
            message: "é".repeat(10),
            ..filled()
        };
        assert!(form.validate(10).is_ok());
        assert_eq!(
            form.validate(9).expect_err("too long"),
            vec![ContactError::MessageTooLong { max: 9 }]
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@b..co"));
        assert!(!is_valid_email("a@@b.co"));
        assert!(!is_valid_email("a b@c.fr"));
    }

    #[test]
    fn blank_submission_starts_empty_and_fails_every_field() {
        let blank = ContactForm {
            name: "  ".to_string(),
            ..ContactForm::default()
        };
        let state = FormState::from(blank);
        assert_eq!(state, FormState::Empty);
        assert_eq!(state.clone().submit(5000).errors().len(), 4);
        assert_eq!(FormState::from(filled()), FormState::Filled(filled()));
    }
}
