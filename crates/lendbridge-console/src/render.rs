/*
[INPUT]:  API results (success values, rendered failures, loan sequences)
[OUTPUT]: Output surface text/error flag and loan list content
[POS]:    Render layer - the two shared display surfaces
[UPDATE]: When display formats or empty-state handling change
*/

use lendbridge_adapter::{LoanRecord, LoanValue};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

pub const CURRENCY_SYMBOL: &str = "₹";
pub const EMPTY_LOANS_MESSAGE: &str = "No active loans found";

/// Shared output surface showing the last API result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputSurface {
    text: String,
    is_error: bool,
}

impl OutputSurface {
    /// Replace the surface with an indented rendering of `value`.
    pub fn render(&mut self, value: &Value, is_error: bool) {
        self.text = serde_json::to_string_pretty(value)
            .unwrap_or_else(|err| format!("unrenderable response: {err}"));
        self.is_error = is_error;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_error(&self) -> bool {
        self.is_error
    }
}

/// Display-ready summary of one loan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanSummary {
    pub title: String,
    pub amount: String,
    pub rate: String,
    pub installment: String,
}

impl LoanSummary {
    pub fn from_record(record: &LoanRecord) -> Self {
        Self {
            title: format!("Loan #{}", record.loan_id),
            amount: format!("{CURRENCY_SYMBOL}{}", amount_text(&record.loan_amount)),
            rate: format!("{}% Rate", record.interest_rate),
            installment: format!(
                "{CURRENCY_SYMBOL}{}/mo",
                amount_text(&record.monthly_installment)
            ),
        }
    }

    /// The two display lines of the summary block.
    pub fn lines(&self) -> [String; 2] {
        [
            format!("{} • {}", self.title, self.amount),
            format!("{} • {}", self.rate, self.installment),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListContent {
    #[default]
    Blank,
    Empty,
    Loans(Vec<LoanSummary>),
}

/// Dedicated surface for list-shaped results.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListSurface {
    content: ListContent,
}

impl ListSurface {
    pub fn content(&self) -> &ListContent {
        &self.content
    }

    /// Plain-text rendering of the surface, one line per entry.
    pub fn lines(&self) -> Vec<String> {
        match &self.content {
            ListContent::Blank => Vec::new(),
            ListContent::Empty => vec![EMPTY_LOANS_MESSAGE.to_string()],
            ListContent::Loans(loans) => loans.iter().flat_map(LoanSummary::lines).collect(),
        }
    }
}

/// Render a loan-list result. `None` means the call failed and its error is
/// already on the output surface, so the list is left as it was.
///
/// Each record is rendered on its own; entries that are not records are
/// skipped. When nothing renders the list is cleared.
pub fn render_loans(surface: &mut ListSurface, loans: Option<&Value>) {
    let Some(loans) = loans else {
        return;
    };

    surface.content = match loans {
        Value::Array(items) if items.is_empty() => ListContent::Empty,
        Value::Array(items) => {
            let summaries: Vec<LoanSummary> = items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| match LoanRecord::deserialize(item) {
                    Ok(record) => Some(LoanSummary::from_record(&record)),
                    Err(err) => {
                        tracing::warn!(index, error = %err, "skipping undecodable loan entry");
                        None
                    }
                })
                .collect();
            if summaries.is_empty() {
                ListContent::Blank
            } else {
                ListContent::Loans(summaries)
            }
        }
        _ => ListContent::Empty,
    };
}

fn amount_text(value: &LoanValue) -> String {
    match value.as_decimal() {
        Some(amount) => format_grouped(amount),
        None => value.to_string(),
    }
}

/// Thousands-grouped rendering of `value`, keeping its fractional digits.
pub fn format_grouped(value: Decimal) -> String {
    let plain = value.normalize().to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in integer.chars().enumerate() {
        if index > 0 && (integer.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(Decimal::new(50000, 0), "50,000")]
    #[case(Decimal::new(4200, 0), "4,200")]
    #[case(Decimal::new(999, 0), "999")]
    #[case(Decimal::new(1234567, 0), "1,234,567")]
    #[case(Decimal::new(123456789, 3), "123,456.789")]
    #[case(Decimal::new(1110573, 2), "11,105.73")]
    #[case(Decimal::new(250000, 2), "2,500")]
    #[case(Decimal::new(-1500000, 0), "-1,500,000")]
    #[case(Decimal::ZERO, "0")]
    fn groups_integer_digits(#[case] value: Decimal, #[case] expected: &str) {
        assert_eq!(format_grouped(value), expected);
    }

    #[test]
    fn output_render_overwrites_previous_content() {
        let mut output = OutputSurface::default();
        output.render(&json!({ "error": "invalid" }), true);
        assert!(output.is_error());

        output.render(&json!({ "id": 1 }), false);
        assert_eq!(output.text(), "{\n  \"id\": 1\n}");
        assert!(!output.is_error());
    }

    #[test]
    fn output_render_is_idempotent() {
        let value = json!({ "customer_id": 3, "approval": true });
        let mut once = OutputSurface::default();
        once.render(&value, false);
        let mut twice = once.clone();
        twice.render(&value, false);
        assert_eq!(once, twice);
    }

    #[test]
    fn absent_result_leaves_list_untouched() {
        let mut list = ListSurface::default();
        render_loans(&mut list, Some(&json!([])));
        render_loans(&mut list, None);
        assert_eq!(list.content(), &ListContent::Empty);
    }

    #[test]
    fn empty_sequence_renders_placeholder() {
        let mut list = ListSurface::default();
        render_loans(&mut list, Some(&json!([])));
        assert_eq!(list.lines(), vec![EMPTY_LOANS_MESSAGE.to_string()]);
    }

    #[test]
    fn non_sequence_success_renders_placeholder() {
        let mut list = ListSurface::default();
        render_loans(&mut list, Some(&json!({ "message": "ok" })));
        assert_eq!(list.content(), &ListContent::Empty);
    }

    #[test]
    fn one_record_renders_one_summary_block() {
        let mut list = ListSurface::default();
        render_loans(
            &mut list,
            Some(&json!([{
                "loan_id": 1,
                "loan_amount": 50000,
                "interest_rate": 8.5,
                "monthly_installment": 4200
            }])),
        );

        let ListContent::Loans(loans) = list.content() else {
            panic!("expected loans");
        };
        assert_eq!(
            loans,
            &vec![LoanSummary {
                title: "Loan #1".to_string(),
                amount: "₹50,000".to_string(),
                rate: "8.5% Rate".to_string(),
                installment: "₹4,200/mo".to_string(),
            }]
        );
        assert_eq!(
            list.lines(),
            vec!["Loan #1 • ₹50,000".to_string(), "8.5% Rate • ₹4,200/mo".to_string()]
        );
    }

    #[test]
    fn records_keep_received_order_and_replace_prior_content() {
        let mut list = ListSurface::default();
        render_loans(&mut list, Some(&json!([])));
        render_loans(
            &mut list,
            Some(&json!([
                { "loan_id": 9, "loan_amount": 1000, "interest_rate": 10, "monthly_installment": 88 },
                { "loan_id": 4, "loan_amount": 2000, "interest_rate": 11, "monthly_installment": 177 }
            ])),
        );

        let ListContent::Loans(loans) = list.content() else {
            panic!("expected loans");
        };
        let titles: Vec<&str> = loans.iter().map(|loan| loan.title.as_str()).collect();
        assert_eq!(titles, vec!["Loan #9", "Loan #4"]);
    }

    #[test]
    fn mixed_identifier_types_all_render() {
        let mut list = ListSurface::default();
        render_loans(
            &mut list,
            Some(&json!([
                { "loan_id": "L-7", "loan_amount": 1000, "interest_rate": 10, "monthly_installment": 88 },
                { "loan_id": 8, "loan_amount": 2000, "interest_rate": 11.25, "monthly_installment": 177 }
            ])),
        );

        assert_eq!(
            list.lines(),
            vec![
                "Loan #L-7 • ₹1,000".to_string(),
                "10% Rate • ₹88/mo".to_string(),
                "Loan #8 • ₹2,000".to_string(),
                "11.25% Rate • ₹177/mo".to_string(),
            ]
        );
    }

    #[test]
    fn non_numeric_fields_render_as_received() {
        let mut list = ListSurface::default();
        render_loans(
            &mut list,
            Some(&json!([{ "loan_id": 2, "loan_amount": "pending", "interest_rate": "n/a" }])),
        );

        assert_eq!(
            list.lines(),
            vec![
                "Loan #2 • ₹pending".to_string(),
                "n/a% Rate • ₹null/mo".to_string(),
            ]
        );
    }

    #[test]
    fn entries_that_are_not_records_are_skipped() {
        let mut list = ListSurface::default();
        render_loans(
            &mut list,
            Some(&json!([
                "junk",
                { "loan_id": 5, "loan_amount": 300, "interest_rate": 9, "monthly_installment": 30 }
            ])),
        );

        let ListContent::Loans(loans) = list.content() else {
            panic!("expected loans");
        };
        assert_eq!(loans.len(), 1);
        assert_eq!(loans[0].title, "Loan #5");
    }

    #[test]
    fn list_with_no_records_is_cleared() {
        let mut list = ListSurface::default();
        render_loans(&mut list, Some(&json!([])));
        render_loans(&mut list, Some(&json!([1, "two"])));
        assert_eq!(list.content(), &ListContent::Blank);
    }
}
