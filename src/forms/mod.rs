//! Input checks for the add/edit item form.
//!
//! The tree engine stores whatever it is given; these rules only gate what the
//! form is allowed to submit.

use regex::Regex;
use std::sync::LazyLock;

/// Host-style link, optional scheme: `https://shop.example.com/promo`, `example.pl`.
static URL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$").ok()
});

/// Site-relative path such as `/about/team`.
static PATH_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^/[\w./-]*$").ok());

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    LabelRequired,
    #[error("Please enter a valid URL")]
    UrlMalformed,
}

/// Validated form values, ready to become an `Intent`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub label: String,
    pub url: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub label: Option<FieldError>,
    pub url: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.url.is_none()
    }
}

pub fn is_valid_url(url: &str) -> bool {
    [&*URL_PATTERN, &*PATH_PATTERN]
        .into_iter()
        .flatten()
        .any(|re| re.is_match(url))
}

/// Trim both inputs; an empty URL means "no link".
pub fn validate_item(label: &str, url: &str) -> Result<ItemFields, FormErrors> {
    let label = label.trim();
    let url = url.trim();

    let errors = FormErrors {
        label: label.is_empty().then_some(FieldError::LabelRequired),
        url: (!url.is_empty() && !is_valid_url(url)).then_some(FieldError::UrlMalformed),
    };
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(ItemFields {
        label: label.to_string(),
        url: (!url.is_empty()).then(|| url.to_string()),
    })
}
