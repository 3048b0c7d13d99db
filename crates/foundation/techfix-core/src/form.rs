//! Booking form state

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// How soon the customer needs the device back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    #[default]
    Normal,
    Urgent,
    Emergency,
}

impl Urgency {
    pub const ALL: [Urgency; 3] = [Urgency::Normal, Urgency::Urgent, Urgency::Emergency];

    /// Form value
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Normal => "normal",
            Urgency::Urgent => "urgent",
            Urgency::Emergency => "emergency",
        }
    }

    /// Option text shown in the select
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Normal => "Normal (3-5 days)",
            Urgency::Urgent => "Urgent (1-2 days)",
            Urgency::Emergency => "Emergency (Same day)",
        }
    }
}

impl FromStr for Urgency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "normal" => Ok(Urgency::Normal),
            "urgent" => Ok(Urgency::Urgent),
            "emergency" => Ok(Urgency::Emergency),
            other => Err(Error::UnknownUrgency(other.to_string())),
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The inputs of the booking form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Phone,
    Device,
    Issue,
    Urgency,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Email,
        FormField::Phone,
        FormField::Device,
        FormField::Issue,
        FormField::Urgency,
    ];

    /// The `name` attribute of the input
    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Device => "device",
            FormField::Issue => "issue",
            FormField::Urgency => "urgency",
        }
    }
}

impl FromStr for FormField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        FormField::ALL
            .into_iter()
            .find(|f| f.as_str() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Live values of the booking form.
///
/// Deserializes straight from a urlencoded submit body; missing inputs fall
/// back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub device: String,
    pub issue: String,
    pub urgency: Urgency,
}

impl FormState {
    /// Overwrite one field.
    ///
    /// Only `urgency` can reject a value, since it is an enum.
    pub fn update_field(&mut self, field: FormField, value: &str) -> Result<()> {
        match field {
            FormField::Name => self.name = value.to_string(),
            FormField::Email => self.email = value.to_string(),
            FormField::Phone => self.phone = value.to_string(),
            FormField::Device => self.device = value.to_string(),
            FormField::Issue => self.issue = value.to_string(),
            FormField::Urgency => self.urgency = value.parse()?,
        }
        Ok(())
    }

    /// Current value of a field as it goes into the input
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Device => &self.device,
            FormField::Issue => &self.issue,
            FormField::Urgency => self.urgency.as_str(),
        }
    }

    /// Back to empty strings and normal urgency
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = FormState::default();
        for field in FormField::ALL {
            if field == FormField::Urgency {
                assert_eq!(form.value(field), "normal");
            } else {
                assert_eq!(form.value(field), "");
            }
        }
    }

    #[test]
    fn test_update_field_writes_only_that_field() {
        let mut form = FormState::default();
        form.update_field(FormField::Device, "Pixel 7").unwrap();

        assert_eq!(form.device, "Pixel 7");
        assert_eq!(
            form,
            FormState {
                device: "Pixel 7".into(),
                ..FormState::default()
            }
        );
    }

    #[test]
    fn test_update_urgency() {
        let mut form = FormState::default();
        form.update_field(FormField::Urgency, "emergency").unwrap();
        assert_eq!(form.urgency, Urgency::Emergency);

        let err = form.update_field(FormField::Urgency, "tomorrow").unwrap_err();
        assert_eq!(err, Error::UnknownUrgency("tomorrow".into()));
        assert_eq!(form.urgency, Urgency::Emergency);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>().unwrap(), field);
        }
        assert_eq!(
            "price".parse::<FormField>().unwrap_err(),
            Error::UnknownField("price".into())
        );
    }

    #[test]
    fn test_reset() {
        let mut form = FormState {
            name: "Ana Lee".into(),
            email: "a@x.com".into(),
            phone: "555-0000".into(),
            device: "Pixel 7".into(),
            issue: "No charging".into(),
            urgency: Urgency::Urgent,
        };
        form.reset();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_urgency_labels() {
        let labels: Vec<&str> = Urgency::ALL.iter().map(|u| u.label()).collect();
        assert_eq!(
            labels,
            vec!["Normal (3-5 days)", "Urgent (1-2 days)", "Emergency (Same day)"]
        );
    }
}
