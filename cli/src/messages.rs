//! English messages for failure diagnoses.

use arithmetic_explain::{Complaint, Diagnosis, Location, NumLiteral};

/// Human-readable explanation of a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Explanation {
    /// Short summary, e.g. "Cannot evaluate `3 +`".
    pub summary: String,
    /// Where the failure has occurred.
    pub location: String,
    /// Why the failure has occurred.
    pub complaint: Option<String>,
    /// "Did you mean" example.
    pub fix: Option<String>,
}

impl Explanation {
    pub fn new<T: NumLiteral>(diagnosis: &Diagnosis<'_, '_, T>, suggest_fix: bool) -> Self {
        Self {
            summary: format!("Cannot evaluate `{}`", diagnosis.input().trim()),
            location: describe_location(diagnosis.location()),
            complaint: diagnosis.complaint().map(describe_complaint),
            fix: if suggest_fix {
                diagnosis.suggested_fix().map(describe_fix)
            } else {
                None
            },
        }
    }
}

pub fn describe_location(location: Location<'_>) -> String {
    match location {
        Location::Empty => "The expression is empty.".to_owned(),
        Location::Start {
            token,
            is_legal: true,
        } => format!("The expression cannot start with `{token}`."),
        Location::Start {
            token,
            is_legal: false,
        } => format!("The expression starts with `{token}`, which is not a recognized symbol."),
        Location::UnexpectedEnd { consumed } => {
            format!("The expression ends unexpectedly after `{consumed}`.")
        }
        Location::Trailing {
            consumed,
            token,
            is_legal: true,
        } => format!("The expression makes sense as far as `{consumed}`, but then has `{token}`."),
        Location::Trailing {
            consumed,
            token,
            is_legal: false,
        } => format!(
            "The expression makes sense as far as `{consumed}`, but then has `{token}`, \
             which is not a recognized symbol."
        ),
    }
}

pub fn describe_complaint(complaint: Complaint<'_>) -> String {
    match complaint {
        Complaint::Incomplete => {
            "The rest of the input cannot be combined with the part before it.".to_owned()
        }
        Complaint::ExpectedValue => {
            "A number, a variable or an opening parenthesis was expected.".to_owned()
        }
        Complaint::ExpectedValueToFollow => {
            "A number, a variable or an opening parenthesis was expected to follow.".to_owned()
        }
        Complaint::Expected { token } => format!("`{token}` was expected here."),
        Complaint::UnknownVariable { name } => format!("Variable `{name}` is not defined."),
    }
}

fn describe_fix(fix: &str) -> String {
    format!("Did you mean `{fix}`?")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use arithmetic_explain::{evaluate, Environment};

    use super::*;

    fn explain(input: &str) -> Explanation {
        let env = Environment::new().with_var("x", 1.0_f64);
        let failure = evaluate(input, &env).unwrap_err();
        Explanation::new(&failure.explain(&env), true)
    }

    #[test]
    fn explaining_empty_input() {
        let explanation = explain("  ");
        assert_eq!(explanation.summary, "Cannot evaluate ``");
        assert_eq!(explanation.location, "The expression is empty.");
        assert_eq!(
            explanation.complaint.unwrap(),
            "A number, a variable or an opening parenthesis was expected."
        );
        assert_eq!(explanation.fix, None);
    }

    #[test]
    fn explaining_dangling_operator() {
        let explanation = explain("3 +");
        assert_eq!(
            explanation.location,
            "The expression ends unexpectedly after `3 +`."
        );
        assert_eq!(
            explanation.complaint.unwrap(),
            "A number, a variable or an opening parenthesis was expected to follow."
        );
        assert_eq!(explanation.fix.unwrap(), "Did you mean `3`?");
    }

    #[test]
    fn explaining_bad_start() {
        let explanation = explain("* 3");
        assert_eq!(explanation.location, "The expression cannot start with `*`.");

        let explanation = explain("# 3");
        assert_eq!(
            explanation.location,
            "The expression starts with `#`, which is not a recognized symbol."
        );
    }

    #[test]
    fn explaining_trailing_tokens() {
        let explanation = explain("3 4");
        assert_eq!(
            explanation.location,
            "The expression makes sense as far as `3`, but then has `4`."
        );
        assert_matches!(explanation.complaint, Some(s) if s.starts_with("The rest"));
        assert_eq!(explanation.fix.unwrap(), "Did you mean `3 * 4`?");

        let explanation = explain("3 $");
        assert!(explanation.location.ends_with("which is not a recognized symbol."));
        assert_eq!(explanation.complaint, None);
    }

    #[test]
    fn explaining_missing_paren_and_unknown_variable() {
        let explanation = explain("(x + 1");
        assert_eq!(explanation.complaint.unwrap(), "`)` was expected here.");
        assert_eq!(explanation.fix.unwrap(), "Did you mean `(x + 1)`?");

        let explanation = explain("2 * y");
        assert_eq!(explanation.complaint.unwrap(), "Variable `y` is not defined.");
        assert_eq!(explanation.fix.unwrap(), "Did you mean `2 * x`?");
    }

    #[test]
    fn fixes_can_be_disabled() {
        let env = Environment::new().with_var("x", 1.0_f64);
        let failure = evaluate("3 4", &env).unwrap_err();
        let explanation = Explanation::new(&failure.explain(&env), false);
        assert_eq!(explanation.fix, None);
    }
}
