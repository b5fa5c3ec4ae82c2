//! Field rules for the order and custom design forms.

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]{7,15}$").expect("valid phone regex"));

// Minimum lengths are in UTF-16 code units, like the browser's `value.length`.
pub const CUSTOM_DESCRIPTION_MIN_CHARS: usize = 10;
pub const NAME_MIN_CHARS: usize = 2;

pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn is_phone(value: &str) -> bool {
    PHONE_RE.is_match(value)
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OrderField {
    Name,
    Email,
    Phone,
}

impl OrderField {
    pub const ALL: [OrderField; 3] = [OrderField::Name, OrderField::Email, OrderField::Phone];

    /// Label text shown above the input, without the required marker.
    pub fn label(self) -> &'static str {
        match self {
            OrderField::Name => "Full Name",
            OrderField::Email => "Email Address",
            OrderField::Phone => "Phone Number",
        }
    }

    pub fn required_message(self) -> String {
        format!("Please enter your {}", self.label().to_lowercase())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CustomField {
    Name,
    Contact,
    JewelleryType,
    Description,
}

/// Per-field error text. A field without an entry shows no error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F> {
    errors: Vec<(F, String)>,
    valid: bool,
}

impl<F: Copy + PartialEq> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: Vec::new(),
            valid: true,
        }
    }
}

impl<F: Copy + PartialEq> FieldErrors<F> {
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, message)| message.as_str())
    }

    pub fn set(&mut self, field: F, message: impl Into<String>) {
        self.clear(field);
        self.errors.push((field, message.into()));
        self.valid = false;
    }

    /// Marks the form invalid without showing text, for controls that rely
    /// on the browser's own validation bubble.
    pub fn mark_invalid(&mut self) {
        self.valid = false;
    }

    pub fn clear(&mut self, field: F) {
        self.errors.retain(|(f, _)| *f != field);
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Input handler: a shown error goes away as soon as the field has content.
    pub fn clear_if_filled(&mut self, field: F, value: &str) {
        if !is_blank(value) {
            self.clear(field);
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderInput {
    pub item_name: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl OrderInput {
    pub fn value(&self, field: OrderField) -> &str {
        match field {
            OrderField::Name => &self.name,
            OrderField::Email => &self.email,
            OrderField::Phone => &self.phone,
        }
    }
}

pub fn validate_order(input: &OrderInput) -> FieldErrors<OrderField> {
    let mut errors = FieldErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.set(OrderField::Name, OrderField::Name.required_message());
    } else if name.encode_utf16().count() < NAME_MIN_CHARS {
        errors.set(OrderField::Name, "Name must be at least 2 characters");
    }

    if is_blank(&input.email) {
        errors.set(OrderField::Email, OrderField::Email.required_message());
    } else if !is_email(&input.email) {
        errors.set(OrderField::Email, "Please enter a valid email address");
    }

    if is_blank(&input.phone) {
        errors.set(OrderField::Phone, OrderField::Phone.required_message());
    } else if !is_phone(&input.phone) {
        errors.set(OrderField::Phone, "Please enter a valid phone number");
    }

    errors
}

/// Blur check: only presence is verified, pattern errors wait for submit.
pub fn check_order_field_on_blur(errors: &mut FieldErrors<OrderField>, field: OrderField, value: &str) {
    if is_blank(value) {
        errors.set(field, field.required_message());
    } else {
        errors.clear(field);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CustomInput {
    pub name: String,
    pub contact: String,
    pub jewellery_type: String,
    pub budget: String,
    pub description: String,
}

pub fn validate_custom(input: &CustomInput) -> FieldErrors<CustomField> {
    let mut errors = FieldErrors::default();

    if is_blank(&input.name) {
        errors.set(CustomField::Name, "Please enter your name");
    }

    if is_blank(&input.contact) {
        errors.set(CustomField::Contact, "Please enter your phone or email");
    } else if !is_email(&input.contact) && !is_phone(&input.contact) {
        errors.set(CustomField::Contact, "Please enter a valid phone or email");
    }

    if input.jewellery_type.is_empty() {
        errors.mark_invalid();
    }

    let description = input.description.trim();
    if description.is_empty() {
        errors.set(CustomField::Description, "Please describe your design idea");
    } else if description.encode_utf16().count() < CUSTOM_DESCRIPTION_MIN_CHARS {
        errors.set(
            CustomField::Description,
            "Please provide more detail (min 10 characters)",
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(name: &str, email: &str, phone: &str) -> OrderInput {
        OrderInput {
            item_name: "Kundan Necklace".to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn empty_order_shows_every_required_error() {
        let errors = validate_order(&order("", "  ", ""));
        assert!(!errors.is_valid());
        assert_eq!(errors.get(OrderField::Name), Some("Please enter your full name"));
        assert_eq!(errors.get(OrderField::Email), Some("Please enter your email address"));
        assert_eq!(errors.get(OrderField::Phone), Some("Please enter your phone number"));
    }

    #[test]
    fn valid_order_passes() {
        let errors = validate_order(&order("Priya Kapoor", "priya@example.in", "+91 98765 43210"));
        assert!(errors.is_valid());
        assert!(errors.is_empty());
    }

    #[test]
    fn order_pattern_errors() {
        let errors = validate_order(&order(" P ", "priya@example", "12ab"));
        assert_eq!(errors.get(OrderField::Name), Some("Name must be at least 2 characters"));
        assert_eq!(errors.get(OrderField::Email), Some("Please enter a valid email address"));
        assert_eq!(errors.get(OrderField::Phone), Some("Please enter a valid phone number"));
    }

    #[test]
    fn email_is_matched_untrimmed() {
        let errors = validate_order(&order("Priya", " priya@example.in", "9876543210"));
        assert_eq!(errors.get(OrderField::Email), Some("Please enter a valid email address"));
        assert_eq!(errors.get(OrderField::Phone), None);
    }

    #[test]
    fn phone_shape() {
        assert!(is_phone("(022) 555-0199"));
        assert!(is_phone("1234567"));
        assert!(!is_phone("123456"));
        assert!(!is_phone("1234567890123456"));
        assert!(!is_phone("٣٣٣٣٣٣٣٣"));
    }

    #[test]
    fn blur_only_checks_presence() {
        let mut errors = FieldErrors::default();
        check_order_field_on_blur(&mut errors, OrderField::Email, "");
        assert_eq!(errors.get(OrderField::Email), Some("Please enter your email address"));
        check_order_field_on_blur(&mut errors, OrderField::Email, "not-an-email");
        assert_eq!(errors.get(OrderField::Email), None);
    }

    #[test]
    fn typing_clears_shown_error() {
        let mut errors = validate_order(&order("", "", ""));
        errors.clear_if_filled(OrderField::Name, "   ");
        assert!(errors.get(OrderField::Name).is_some());
        errors.clear_if_filled(OrderField::Name, "A");
        assert!(errors.get(OrderField::Name).is_none());
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn custom_form_rules() {
        let errors = validate_custom(&CustomInput::default());
        assert!(!errors.is_valid());
        assert_eq!(errors.get(CustomField::Name), Some("Please enter your name"));
        assert_eq!(errors.get(CustomField::Contact), Some("Please enter your phone or email"));
        assert_eq!(errors.get(CustomField::JewelleryType), None);
        assert_eq!(
            errors.get(CustomField::Description),
            Some("Please describe your design idea")
        );

        let errors = validate_custom(&CustomInput {
            name: "Meera".to_string(),
            contact: "meera at home".to_string(),
            jewellery_type: "ring".to_string(),
            budget: String::new(),
            description: "gold ring".to_string(),
        });
        assert_eq!(errors.get(CustomField::Contact), Some("Please enter a valid phone or email"));
        assert_eq!(
            errors.get(CustomField::Description),
            Some("Please provide more detail (min 10 characters)")
        );
    }

    #[test]
    fn custom_contact_accepts_phone_or_email() {
        for contact in ["meera@example.com", "98765 43210"] {
            let errors = validate_custom(&CustomInput {
                name: "Meera".to_string(),
                contact: contact.to_string(),
                jewellery_type: "ring".to_string(),
                budget: String::new(),
                description: "Temple style ring with rubies".to_string(),
            });
            assert!(errors.is_valid(), "{contact} should be accepted");
        }
    }

    #[test]
    fn missing_type_is_silent_but_invalid() {
        let errors = validate_custom(&CustomInput {
            name: "Meera".to_string(),
            contact: "meera@example.com".to_string(),
            jewellery_type: String::new(),
            budget: String::new(),
            description: "Temple style ring with rubies".to_string(),
        });
        assert!(!errors.is_valid());
        assert!(errors.is_empty());
    }

    #[test]
    fn lengths_count_utf16_units() {
        let errors = validate_order(&order("\u{1D49C}", "priya@example.in", "9876543210"));
        assert_eq!(errors.get(OrderField::Name), None);

        let errors = validate_custom(&CustomInput {
            name: "Meera".to_string(),
            contact: "meera@example.com".to_string(),
            jewellery_type: "ring".to_string(),
            budget: String::new(),
            description: "\u{1F48D}\u{1F48D}\u{1F48D}\u{1F48D}\u{1F48D}".to_string(),
        });
        assert_eq!(errors.get(CustomField::Description), None);
    }
}
