//! Checkout form model and field validation.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Contact, payment and billing-address details entered at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutForm {
    pub email: String,
    pub full_name: String,
    pub card_number: String,
    pub expiry_date: String,
    pub cvv: String,
    pub billing_address: String,
    pub city: String,
    pub zip_code: String,
    pub country: String,
}

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    FullName,
    CardNumber,
    ExpiryDate,
    Cvv,
    BillingAddress,
    City,
    ZipCode,
    Country,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Email,
        Field::FullName,
        Field::CardNumber,
        Field::ExpiryDate,
        Field::Cvv,
        Field::BillingAddress,
        Field::City,
        Field::ZipCode,
        Field::Country,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::FullName => "full_name",
            Field::CardNumber => "card_number",
            Field::ExpiryDate => "expiry_date",
            Field::Cvv => "cvv",
            Field::BillingAddress => "billing_address",
            Field::City => "city",
            Field::ZipCode => "zip_code",
            Field::Country => "country",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            Field::Email => "Email is required",
            Field::FullName => "Full name is required",
            Field::CardNumber => "Card number is required",
            Field::ExpiryDate => "Expiry date is required",
            Field::Cvv => "CVV is required",
            Field::BillingAddress => "Billing address is required",
            Field::City => "City is required",
            Field::ZipCode => "ZIP code is required",
            Field::Country => "Country is required",
        }
    }
}

impl core::fmt::Display for Field {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CheckoutForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::FullName => &self.full_name,
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
            Field::BillingAddress => &self.billing_address,
            Field::City => &self.city,
            Field::ZipCode => &self.zip_code,
            Field::Country => &self.country,
        }
    }

    /// Last four digits of the card, for receipts and logs.
    pub fn card_last4(&self) -> String {
        let digits: Vec<char> = self.card_number.chars().filter(char::is_ascii_digit).collect();
        digits[digits.len().saturating_sub(4)..].iter().collect()
    }
}

/// Per-field error messages (at most one per field).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Drop a field's error (the user started editing it).
    pub fn clear(&mut self, field: Field) -> Option<String> {
        self.0.remove(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl core::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validate every field; returns all failures at once.
///
/// Blank (whitespace-only) values count as missing. Each field reports its
/// first failing rule only.
pub fn validate(form: &CheckoutForm) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for field in Field::ALL {
        let value = form.value(field);
        if value.trim().is_empty() {
            errors.insert(field, field.required_message());
            continue;
        }
        if let Some(message) = format_error(field, value) {
            errors.insert(field, message);
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn format_error(field: Field, value: &str) -> Option<&'static str> {
    match field {
        Field::Email if !looks_like_email(value) => Some("Email is invalid"),
        Field::CardNumber if !is_card_number(value) => Some("Card number must be 16 digits"),
        Field::ExpiryDate if !is_expiry(value) => Some("Format: MM/YY"),
        Field::Cvv if !is_cvv(value) => Some("CVV must be 3-4 digits"),
        _ => None,
    }
}

/// `something@something.something`, each part free of whitespace.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));
static CARD_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{16}$").expect("card number pattern compiles"));
static EXPIRY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("expiry pattern compiles"));
static CVV_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{3,4}$").expect("cvv pattern compiles"));

fn looks_like_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

// Spaces between digit groups are allowed.
fn is_card_number(value: &str) -> bool {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    CARD_NUMBER_RE.is_match(&digits)
}

fn is_expiry(value: &str) -> bool {
    EXPIRY_RE.is_match(value)
}

fn is_cvv(value: &str) -> bool {
    CVV_RE.is_match(value)
}
