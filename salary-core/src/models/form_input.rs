use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// The four editable fields of the calculator form, in validation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Company,
    Position,
    Ctc,
    Location,
}

impl FormField {
    /// Fields in the order [`FormInput::validate`] checks them.
    pub const ORDER: [FormField; 4] = [
        FormField::Company,
        FormField::Position,
        FormField::Ctc,
        FormField::Location,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Company => "company",
            Self::Position => "position",
            Self::Ctc => "ctc",
            Self::Location => "location",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Company => "Company Name",
            Self::Position => "Job Role/Position",
            Self::Ctc => "Annual CTC",
            Self::Location => "Work Location",
        }
    }

    /// Example input shown as a hint.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Company => "e.g., TCS, Amazon, Google",
            Self::Position => "e.g., SDE 1, Associate, Analyst",
            Self::Ctc => "e.g., 15,00,000 or 15 LPA",
            Self::Location => "e.g., Bangalore, Mumbai, Delhi",
        }
    }
}

/// A blocking validation failure for the first empty field.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter a company name")]
    MissingCompany,

    #[error("Please enter a job role/position")]
    MissingPosition,

    #[error("Please enter Annual CTC")]
    MissingCtc,

    #[error("Please enter work location")]
    MissingLocation,
}

impl ValidationError {
    pub fn field(&self) -> FormField {
        match self {
            Self::MissingCompany => FormField::Company,
            Self::MissingPosition => FormField::Position,
            Self::MissingCtc => FormField::Ctc,
            Self::MissingLocation => FormField::Location,
        }
    }

    fn for_field(field: FormField) -> Self {
        match field {
            FormField::Company => Self::MissingCompany,
            FormField::Position => Self::MissingPosition,
            FormField::Ctc => Self::MissingCtc,
            FormField::Location => Self::MissingLocation,
        }
    }
}

/// Raw text of the calculator form as the user typed it.
///
/// Values are kept untrimmed; trimming happens in [`FormInput::validate`].
/// CTC is free text ("15,00,000", "18 LPA", ...) and is never parsed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub company: String,
    pub position: String,
    pub ctc: String,
    pub location: String,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current raw value of `field`.
    pub fn get(
        &self,
        field: FormField,
    ) -> &str {
        match field {
            FormField::Company => &self.company,
            FormField::Position => &self.position,
            FormField::Ctc => &self.ctc,
            FormField::Location => &self.location,
        }
    }

    /// Applies a single edit. Other fields are left untouched.
    pub fn set(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        let slot = match field {
            FormField::Company => &mut self.company,
            FormField::Position => &mut self.position,
            FormField::Ctc => &mut self.ctc,
            FormField::Location => &mut self.location,
        };
        *slot = value.into();
    }

    /// Checks fields in [`FormField::ORDER`] and stops at the first blank one.
    ///
    /// On success returns the trimmed request body.
    pub fn validate(&self) -> Result<SalaryRequest, ValidationError> {
        if let Some(field) = FormField::ORDER
            .into_iter()
            .find(|field| self.get(*field).trim().is_empty())
        {
            return Err(ValidationError::for_field(field));
        }

        Ok(SalaryRequest {
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            ctc: self.ctc.trim().to_string(),
            location: self.location.trim().to_string(),
        })
    }
}

/// Body of `POST /api/salary`. All values are already trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalaryRequest {
    pub company: String,
    pub position: String,
    pub ctc: String,
    pub location: String,
}

impl fmt::Display for SalaryRequest {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} / {}",
            self.company, self.position, self.ctc, self.location
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> FormInput {
        FormInput {
            company: "Acme".to_string(),
            position: "SDE1".to_string(),
            ctc: "15,00,000".to_string(),
            location: "Bangalore".to_string(),
        }
    }

    // =========================================================================
    // validate ordering
    // =========================================================================

    #[test]
    fn each_empty_field_reports_its_own_message() {
        let cases = [
            (FormField::Company, "Please enter a company name"),
            (FormField::Position, "Please enter a job role/position"),
            (FormField::Ctc, "Please enter Annual CTC"),
            (FormField::Location, "Please enter work location"),
        ];

        for (field, message) in cases {
            let mut form = filled();
            form.set(field, "");

            let err = form.validate().unwrap_err();

            assert_eq!(err.field(), field);
            assert_eq!(err.to_string(), message);
        }
    }

    #[test]
    fn first_empty_field_wins_over_later_ones() {
        let mut form = filled();
        form.set(FormField::Position, "");
        form.set(FormField::Location, "");

        assert_eq!(form.validate(), Err(ValidationError::MissingPosition));
    }

    #[test]
    fn all_empty_reports_company() {
        assert_eq!(
            FormInput::new().validate(),
            Err(ValidationError::MissingCompany)
        );
    }

    #[test]
    fn whitespace_only_is_treated_as_empty() {
        for field in FormField::ORDER {
            let mut blank = filled();
            blank.set(field, "");
            let mut spaces = filled();
            spaces.set(field, " \t \n ");

            assert_eq!(blank.validate(), spaces.validate());
        }
    }

    // =========================================================================
    // trimming and edits
    // =========================================================================

    #[test]
    fn validate_trims_every_value() {
        let form = FormInput {
            company: "  Acme ".to_string(),
            position: "\tSDE1".to_string(),
            ctc: " 18 LPA ".to_string(),
            location: "Pune\n".to_string(),
        };

        let request = form.validate().unwrap();

        assert_eq!(
            request,
            SalaryRequest {
                company: "Acme".to_string(),
                position: "SDE1".to_string(),
                ctc: "18 LPA".to_string(),
                location: "Pune".to_string(),
            }
        );
    }

    #[test]
    fn ctc_is_forwarded_verbatim() {
        let request = filled().validate().unwrap();

        assert_eq!(request.ctc, "15,00,000");
    }

    #[test]
    fn set_does_not_touch_other_fields() {
        let mut form = filled();
        form.set(FormField::Ctc, "20 LPA");

        assert_eq!(form.company, "Acme");
        assert_eq!(form.position, "SDE1");
        assert_eq!(form.ctc, "20 LPA");
        assert_eq!(form.location, "Bangalore");
    }

    #[test]
    fn field_names_match_the_request_keys() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();

        for field in FormField::ORDER {
            assert_eq!(json[field.as_str()], form_value(&filled(), field));
        }
    }

    fn form_value(
        form: &FormInput,
        field: FormField,
    ) -> serde_json::Value {
        serde_json::Value::String(form.get(field).trim().to_string())
    }

    #[test]
    fn request_serializes_with_wire_field_names() {
        let json = serde_json::to_value(filled().validate().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "company": "Acme",
                "position": "SDE1",
                "ctc": "15,00,000",
                "location": "Bangalore",
            })
        );
    }
}
