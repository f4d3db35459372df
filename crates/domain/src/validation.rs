//! Validation contract with full-violation reporting.
//!
//! Behaviour methods evaluate an ordered set of named rules against candidate
//! state before committing a mutation. Every failing rule is collected, not
//! just the first, and the whole set is returned as one [`ValidationFailure`].
//! Human-readable text comes from an injected [`MessageCatalog`] so locale is
//! not baked into the core.

use thiserror::Error;

/// A named validation rule.
///
/// Callers distinguish malformed input from illegal state transitions by
/// inspecting the rule, not the error type: there is a single error taxonomy
/// for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// The field must be present and non-blank.
    Required,

    /// The field exceeds its maximum length.
    MaxLength { max: usize },

    /// The amount must be strictly greater than zero.
    GreaterThanZero,

    /// The listing must be in the named status.
    StatusMustBe { expected: &'static str },

    /// The listing is not available for sale.
    NotForSale,

    /// The listing cannot be deleted from its current status.
    NotDeletable { current: &'static str },

    /// The aggregate has already been created.
    AlreadyCreated,

    /// The listing has not been created yet.
    NotFound,
}

/// A single broken rule: which field, which rule, and the rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The field (or pseudo-field, e.g. "status") the rule applies to.
    pub field: &'static str,

    /// The rule that failed.
    pub rule: Rule,

    /// Human-readable message rendered by the catalog.
    pub message: String,
}

/// The complete set of rules broken by one behaviour call.
///
/// The aggregate is left untouched whenever this is returned: no event is
/// raised and no field changes.
#[derive(Debug, Clone, Error)]
pub struct ValidationFailure {
    violations: Vec<Violation>,
}

impl ValidationFailure {
    /// Creates a failure from a non-empty violation list.
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty());
        Self { violations }
    }

    /// Returns every broken rule.
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns true if any violation is on the given field.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }

    /// Returns the number of broken rules.
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Always false: a failure carries at least one violation.
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed: ")?;
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", violation.message)?;
        }
        Ok(())
    }
}

/// Strategy for rendering violation messages.
///
/// Injected into the aggregate's behaviour methods so the message language
/// is a configuration concern, not part of the domain contract.
pub trait MessageCatalog: Send + Sync {
    /// Renders the message for a broken rule on a field.
    fn render(&self, field: &str, rule: &Rule) -> String;
}

/// Default English message catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn render(&self, field: &str, rule: &Rule) -> String {
        match rule {
            Rule::Required => format!("required field: {field}"),
            Rule::MaxLength { max } => format!("{field} may have at most {max} characters"),
            Rule::GreaterThanZero => format!("{field} must be greater than zero"),
            Rule::StatusMustBe { expected } => format!("listing must be {expected}"),
            Rule::NotForSale => "listing is no longer available for sale".to_string(),
            Rule::NotDeletable { current } => {
                format!("listing cannot be deleted while {current}")
            }
            Rule::AlreadyCreated => "listing already exists".to_string(),
            Rule::NotFound => "listing does not exist".to_string(),
        }
    }
}

/// Builder that accumulates violations across chained checks.
///
/// Every check records a violation when its predicate fails and returns the
/// builder, so all broken rules are gathered before the terminal [`check`]
/// converts them into a single failure value.
///
/// [`check`]: Contract::check
pub struct Contract<'a> {
    catalog: &'a dyn MessageCatalog,
    violations: Vec<Violation>,
}

impl<'a> Contract<'a> {
    /// Starts a new contract rendering messages through the given catalog.
    pub fn new(catalog: &'a dyn MessageCatalog) -> Self {
        Self {
            catalog,
            violations: Vec::new(),
        }
    }

    fn record(mut self, field: &'static str, rule: Rule) -> Self {
        let message = self.catalog.render(field, &rule);
        self.violations.push(Violation {
            field,
            rule,
            message,
        });
        self
    }

    /// Requires the predicate to hold; records `rule` otherwise.
    pub fn is_true(self, field: &'static str, ok: bool, rule: Rule) -> Self {
        if ok { self } else { self.record(field, rule) }
    }

    /// Requires a value to be present.
    pub fn require(self, field: &'static str, present: bool) -> Self {
        self.is_true(field, present, Rule::Required)
    }

    /// Requires a non-blank string.
    pub fn not_blank(self, field: &'static str, value: &str) -> Self {
        self.is_true(field, !value.trim().is_empty(), Rule::Required)
    }

    /// Requires the string to be at most `max` characters long.
    pub fn max_len(self, field: &'static str, value: &str, max: usize) -> Self {
        self.is_true(field, value.chars().count() <= max, Rule::MaxLength { max })
    }

    /// Requires a strictly positive amount (in cents).
    pub fn greater_than_zero(self, field: &'static str, cents: i64) -> Self {
        self.is_true(field, cents > 0, Rule::GreaterThanZero)
    }

    /// Terminal check: Ok when no rule failed, otherwise the full set.
    pub fn check(self) -> Result<(), ValidationFailure> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure::new(self.violations))
        }
    }
}
