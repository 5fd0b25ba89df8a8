use rust_decimal::Decimal;
use serde::Serialize;
use std::str::FromStr;

/// Text fields collected from a multipart form. Used directly as the
/// partial update set; `into_create` turns it into a complete creation
/// payload. Unknown field names are ignored, matching the permissive
/// intake of the form.
#[derive(Debug, Default, Clone)]
pub struct EmployeeForm {
    pub code: Option<String>,
    pub contractor_name: Option<String>,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub category: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub cost: Option<Decimal>,
    pub status: Option<String>,
    pub image: Option<String>,
}

impl EmployeeForm {
    pub fn set_text_field(&mut self, name: &str, value: String) {
        match name {
            "code" => self.code = Some(value),
            "contractor_name" => self.contractor_name = Some(value),
            "company" => self.company = Some(value),
            "email" => self.email = Some(value),
            "phone" => self.phone = Some(value),
            "category" => self.category = Some(value),
            "start_date" => self.start_date = Some(value),
            "end_date" => self.end_date = Some(value),
            "cost" => self.cost = Decimal::from_str(&value).ok(),
            "status" => self.status = Some(value),
            _ => {}
        }
    }

    /// All mandatory fields must be present; `status` and `image` stay
    /// optional.
    pub fn into_create(self) -> Option<NewEmployee> {
        Some(NewEmployee {
            code: self.code?,
            contractor_name: self.contractor_name?,
            company: self.company?,
            email: self.email?,
            phone: self.phone?,
            category: self.category?,
            start_date: self.start_date?,
            end_date: self.end_date?,
            cost: self.cost?,
            status: self.status,
            image: self.image,
        })
    }
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub code: String,
    pub contractor_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub start_date: String,
    pub end_date: String,
    pub cost: Decimal,
    pub status: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteOutcome {
    pub deleted_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateOutcome {
    pub matched_count: u64,
    pub modified_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> EmployeeForm {
        let mut form = EmployeeForm::default();
        for (name, value) in [
            ("code", "C-100"),
            ("contractor_name", "Dana Smith"),
            ("company", "Acme Corp"),
            ("email", "dana@acme.example"),
            ("phone", "555-0100"),
            ("category", "Engineering"),
            ("start_date", "2026-01-01"),
            ("end_date", "2026-12-31"),
            ("cost", "1500"),
        ] {
            form.set_text_field(name, value.to_string());
        }
        form
    }

    #[test]
    fn complete_form_builds_creation_payload() {
        let payload = filled_form().into_create().expect("complete form");
        assert_eq!(payload.code, "C-100");
        assert_eq!(payload.cost, Decimal::from_str("1500").unwrap());
        assert!(payload.status.is_none());
        assert!(payload.image.is_none());
    }

    #[test]
    fn missing_mandatory_field_rejects_creation() {
        let mut form = filled_form();
        form.phone = None;
        assert!(form.into_create().is_none());
    }

    #[test]
    fn unparseable_cost_rejects_creation() {
        let mut form = filled_form();
        form.set_text_field("cost", "not-a-number".to_string());
        assert!(form.into_create().is_none());
    }

    #[test]
    fn unknown_field_is_ignored() {
        let mut form = filled_form();
        form.set_text_field("salary", "9000".to_string());
        let payload = form.into_create().expect("complete form");
        assert_eq!(payload.cost, Decimal::from_str("1500").unwrap());
    }
}
