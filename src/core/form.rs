use crate::domain::model::ContactMessage;
use crate::domain::ports::ContactForm;
use crate::utils::error::{FolioError, Result};
use crate::utils::validation::Validate;

/// Plain contact-form state: three text fields that can be cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

impl ContactForm for ContactFields {
    fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Same checks a browser applies to `required` / `type="email"` inputs.
impl Validate for ContactFields {
    fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(FolioError::InvalidInputError {
                    field: field.to_string(),
                    reason: "This field is required".to_string(),
                });
            }
        }

        let email = self.email.trim();
        let well_formed = email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && !domain.is_empty());
        if !well_formed {
            return Err(FolioError::InvalidInputError {
                field: "email".to_string(),
                reason: "Email address must look like name@domain".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_clears_all_fields() {
        let mut form = ContactFields::new("Ada", "ada@example.com", "Hi");
        assert_eq!(form.to_message().name, "Ada");
        form.reset();
        assert!(form.is_empty());
    }

    #[test]
    fn test_validate() {
        assert!(ContactFields::new("Ada", "ada@example.com", "Hi")
            .validate()
            .is_ok());
        assert!(ContactFields::new("", "ada@example.com", "Hi")
            .validate()
            .is_err());
        assert!(matches!(
            ContactFields::new("Ada", "ada.example.com", "Hi").validate(),
            Err(FolioError::InvalidInputError { ref field, .. }) if field == "email"
        ));
        assert!(ContactFields::new("Ada", "ada@example.com", "  ")
            .validate()
            .is_err());
    }
}
