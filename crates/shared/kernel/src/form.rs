//! Lead form validation.
//!
//! Validation is a pure function over the submitted values; [`LeadForms`]
//! applies the verdict to the document. Field values never reach the logs.

use crate::page::Page;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use vitrine_domain::config::{FormRules, SiteConfig};

// local@domain.tld, no whitespace and a single `@`.
static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

/// Raw field values of one submission. `None` marks a missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadSubmission {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Per-field validity of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verdict {
    pub name: bool,
    pub email: bool,
    pub phone: bool,
}

impl Verdict {
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.name && self.email && self.phone
    }
}

/// Length in UTF-16 code units, the unit browsers report for `value.length`.
fn input_len(value: &str) -> usize {
    value.trim().encode_utf16().count()
}

#[must_use]
pub fn valid_name(value: &str, rules: &FormRules) -> bool {
    input_len(value) >= rules.name_min_len
}

#[must_use]
pub fn valid_email(value: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(value.trim()))
}

#[must_use]
pub fn valid_phone(value: &str, rules: &FormRules) -> bool {
    input_len(value) >= rules.phone_min_len
}

/// Missing fields are invalid.
#[must_use]
pub fn validate(submission: &LeadSubmission, rules: &FormRules) -> Verdict {
    Verdict {
        name: submission.name.as_deref().is_some_and(|v| valid_name(v, rules)),
        email: submission.email.as_deref().is_some_and(valid_email),
        phone: submission.phone.as_deref().is_some_and(|v| valid_phone(v, rules)),
    }
}

/// Every `form[data-lead-form]` on the page.
#[derive(Debug, Clone)]
pub struct LeadForms<N> {
    forms: Vec<N>,
}

impl<N> Default for LeadForms<N> {
    fn default() -> Self {
        Self { forms: Vec::new() }
    }
}

impl<N: Clone + PartialEq> LeadForms<N> {
    pub fn bind<P: Page<Node = N>>(page: &P, selector: &str) -> Self {
        Self { forms: page.query_all(selector) }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    #[must_use]
    pub fn owns(&self, form: &N) -> bool {
        self.forms.contains(form)
    }

    /// Validates `form`, marks invalid fields and resets it when everything passes.
    pub fn submit<P: Page<Node = N>>(&self, page: &P, form: &N, config: &SiteConfig) -> Verdict {
        let selectors = &config.selectors;
        let invalid = &config.classes.invalid;

        let name = page.query_within(form, &selectors.lead_name);
        let email = page.query_within(form, &selectors.lead_email);
        let phone = page.query_within(form, &selectors.lead_phone);

        let submission = LeadSubmission {
            name: name.as_ref().map(|n| page.input_value(n)),
            email: email.as_ref().map(|n| page.input_value(n)),
            phone: phone.as_ref().map(|n| page.input_value(n)),
        };
        let verdict = validate(&submission, &config.form);

        for field in [&name, &email, &phone].into_iter().flatten() {
            page.remove_class(field, invalid);
        }
        for (field, ok) in [(&name, verdict.name), (&email, verdict.email), (&phone, verdict.phone)] {
            if let Some(field) = field
                && !ok
            {
                page.add_class(field, invalid);
            }
        }

        debug!(name = verdict.name, email = verdict.email, phone = verdict.phone, "Lead form checked");

        if verdict.is_valid() {
            page.reset_form(form);
        }
        verdict
    }
}
