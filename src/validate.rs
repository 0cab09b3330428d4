//! Form Validation
//!
//! Each editor has a statically declared rule table (field -> constraint)
//! evaluated by a pure function into field-level errors. Validation runs
//! before any request is issued; a failing form never reaches the store.
//!
//! Numeric inputs arrive as raw text from the input element and are
//! parsed here, so a malformed number is a field error, not a panic.

/// One failed field with its user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Constraint on a single field.
#[derive(Clone, Copy, Debug)]
pub enum Constraint {
    /// Text at least this many characters (after trimming)
    MinLen(usize),
    /// Text non-empty
    Required,
    /// Raw text parses to a number >= the bound
    MinNumber(f64),
}

/// One row of a rule table.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub constraint: Constraint,
    pub message: &'static str,
}

/// Evaluate a rule table against a field lookup.
pub fn check(rules: &[FieldRule], value_of: impl Fn(&str) -> String) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for rule in rules {
        let value = value_of(rule.field);
        let value = value.trim();
        let failed = match rule.constraint {
            Constraint::MinLen(min) => value.chars().count() < min,
            Constraint::Required => value.is_empty(),
            Constraint::MinNumber(min) => match value.parse::<f64>() {
                Ok(n) => n < min,
                Err(_) => {
                    errors.push(FieldError {
                        field: rule.field,
                        message: format!("{} must be a number.", field_label(rule.field)),
                    });
                    continue;
                }
            },
        };
        if failed {
            errors.push(FieldError {
                field: rule.field,
                message: rule.message.to_string(),
            });
        }
    }
    errors
}

fn field_label(field: &str) -> String {
    let mut label = field.replace('_', " ");
    if let Some(first) = label.get_mut(..1) {
        first.make_ascii_uppercase();
    }
    label
}

/// First error message for one field, for inline display under the input.
pub fn error_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

// ========================
// Rule tables
// ========================

pub const TASK_RULES: &[FieldRule] = &[FieldRule {
    field: "title",
    constraint: Constraint::MinLen(2),
    message: "Task title must be at least 2 characters.",
}];

pub const CONTENT_RULES: &[FieldRule] = &[FieldRule {
    field: "title",
    constraint: Constraint::MinLen(2),
    message: "Title must be at least 2 characters.",
}];

pub const EVENT_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        constraint: Constraint::MinLen(2),
        message: "Event name must be at least 2 characters.",
    },
    FieldRule {
        field: "location",
        constraint: Constraint::MinLen(2),
        message: "Location must be at least 2 characters.",
    },
    FieldRule {
        field: "budget_total",
        constraint: Constraint::MinNumber(1.0),
        message: "Budget must be at least 1.",
    },
];

pub const BUDGET_RULES: &[FieldRule] = &[
    FieldRule {
        field: "description",
        constraint: Constraint::MinLen(2),
        message: "Description must be at least 2 characters.",
    },
    FieldRule {
        field: "category",
        constraint: Constraint::Required,
        message: "Category is required.",
    },
    FieldRule {
        field: "estimated_cost",
        constraint: Constraint::MinNumber(0.0),
        message: "Cost cannot be negative.",
    },
    FieldRule {
        field: "actual_cost",
        constraint: Constraint::MinNumber(0.0),
        message: "Cost cannot be negative.",
    },
];

pub const INVENTORY_RULES: &[FieldRule] = &[
    FieldRule {
        field: "name",
        constraint: Constraint::MinLen(2),
        message: "Item name must be at least 2 characters.",
    },
    FieldRule {
        field: "quantity",
        constraint: Constraint::MinNumber(1.0),
        message: "Quantity must be at least 1.",
    },
];

pub const BUG_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        constraint: Constraint::MinLen(2),
        message: "Issue title must be at least 2 characters.",
    },
    FieldRule {
        field: "reported_by",
        constraint: Constraint::Required,
        message: "Reporter is required.",
    },
    FieldRule {
        field: "description",
        constraint: Constraint::MinLen(10),
        message: "Please provide a detailed description.",
    },
];

pub const MEETING_RULES: &[FieldRule] = &[
    FieldRule {
        field: "title",
        constraint: Constraint::MinLen(2),
        message: "Meeting title must be at least 2 characters.",
    },
    FieldRule {
        field: "date",
        constraint: Constraint::Required,
        message: "Date is required.",
    },
    FieldRule {
        field: "location",
        constraint: Constraint::Required,
        message: "Location is required.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&'static str, &str)]) -> impl Fn(&str) -> String {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |field| map.get(field).cloned().unwrap_or_default()
    }

    #[test]
    fn one_character_task_title_is_rejected() {
        let errors = check(TASK_RULES, lookup(&[("title", "a")]));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "title");
        assert_eq!(errors[0].message, "Task title must be at least 2 characters.");
    }

    #[test]
    fn two_character_task_title_passes() {
        let errors = check(TASK_RULES, lookup(&[("title", "ab")]));
        assert!(errors.is_empty());
    }

    #[test]
    fn whitespace_does_not_satisfy_min_len() {
        let errors = check(TASK_RULES, lookup(&[("title", "  a  ")]));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn negative_costs_are_rejected() {
        let errors = check(
            BUDGET_RULES,
            lookup(&[
                ("description", "Stage rental"),
                ("category", "logistics"),
                ("estimated_cost", "-5"),
                ("actual_cost", "0"),
            ]),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "estimated_cost");
        assert_eq!(errors[0].message, "Cost cannot be negative.");
    }

    #[test]
    fn non_numeric_cost_is_a_field_error_not_a_panic() {
        let errors = check(
            BUDGET_RULES,
            lookup(&[
                ("description", "Stage rental"),
                ("category", "logistics"),
                ("estimated_cost", "lots"),
                ("actual_cost", "0"),
            ]),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "estimated_cost");
        assert_eq!(errors[0].message, "Estimated cost must be a number.");
    }

    #[test]
    fn bug_report_needs_a_detailed_description() {
        let errors = check(
            BUG_RULES,
            lookup(&[("title", "Crash"), ("reported_by", "Ali"), ("description", "broken")]),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "description");
    }

    #[test]
    fn event_rules_collect_every_failing_field() {
        let errors = check(
            EVENT_RULES,
            lookup(&[("name", "X"), ("location", ""), ("budget_total", "0")]),
        );
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "location", "budget_total"]);
    }

    #[test]
    fn error_for_finds_the_matching_field() {
        let errors = check(INVENTORY_RULES, lookup(&[("name", "Speakers"), ("quantity", "0")]));
        assert!(error_for(&errors, "name").is_none());
        assert_eq!(error_for(&errors, "quantity"), Some("Quantity must be at least 1."));
    }
}
