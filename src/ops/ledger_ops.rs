use chrono::{DateTime, Datelike, Local};

use crate::model::{ExpenseEntry, ExpenseForm};

/// Why a submitted expense form was not recorded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("description is empty")]
    EmptyDescription,
    #[error("amount {0:?} is not a number")]
    InvalidAmount(String),
    #[error("amount {0:?} is too large to add to the total")]
    TotalOverflow(String),
}

/// Session-only expense list, newest first
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<ExpenseEntry>,
    /// Disambiguates ids created within the same millisecond
    seq: u64,
    /// Recorded when the form's payer is blank
    default_payer: String,
}

impl Ledger {
    pub fn new(default_payer: impl Into<String>) -> Self {
        Ledger {
            default_payer: default_payer.into(),
            ..Self::default()
        }
    }

    /// Entries in display order (most recent first)
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validate the form and record a new entry at the front of the list.
    ///
    /// On rejection nothing changes, including the form. On success the
    /// form's description and amount are cleared and the payer is kept; a
    /// blank payer is replaced by the default one, in the entry and the form.
    pub fn add_entry(
        &mut self,
        form: &mut ExpenseForm,
        now: DateTime<Local>,
    ) -> Result<&ExpenseEntry, Rejection> {
        let description = form.description.trim();
        if description.is_empty() {
            return Err(Rejection::EmptyDescription);
        }
        let amount = parse_amount(&form.amount)?;
        if !(self.total() + amount).is_finite() {
            return Err(Rejection::TotalOverflow(form.amount.clone()));
        }
        if form.payer.trim().is_empty() {
            form.payer = self.default_payer.clone();
        }

        self.seq += 1;
        let entry = ExpenseEntry {
            id: format!("{}-{}", now.timestamp_millis(), self.seq),
            description: description.to_string(),
            amount,
            payer: form.payer.clone(),
            created_date: format!("{}/{}", now.month(), now.day()),
        };
        tracing::info!(id = %entry.id, amount, "expense recorded");

        self.entries.insert(0, entry);
        form.reset_after_submit();
        Ok(&self.entries[0])
    }

    /// Remove the entry with this id. Unknown ids are ignored.
    pub fn remove_entry(&mut self, id: &str) -> Option<ExpenseEntry> {
        let idx = self.entries.iter().position(|e| e.id == id)?;
        let removed = self.entries.remove(idx);
        tracing::info!(id = %removed.id, "expense removed");
        Some(removed)
    }

    /// Sum of all amounts, recomputed on every call
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Subtotal per payer, in order of first appearance in the list
    pub fn totals_by_payer(&self) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> = Vec::new();
        for entry in &self.entries {
            match totals.iter_mut().find(|(payer, _)| *payer == entry.payer) {
                Some((_, sum)) => *sum += entry.amount,
                None => totals.push((entry.payer.clone(), entry.amount)),
            }
        }
        totals
    }
}

/// Parse an amount as typed. Any finite number is accepted, including zero
/// and negatives; thousands separators are allowed.
pub fn parse_amount(text: &str) -> Result<f64, Rejection> {
    let cleaned: String = text.trim().chars().filter(|c| *c != ',').collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Rejection::InvalidAmount(text.to_string())),
    }
}

/// Format an amount for display: grouped integer part, up to two decimals
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }
    let fixed = format!("{:.2}", amount.abs());
    let (digits, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let decimals = decimals.trim_end_matches('0');

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let mut out = String::new();
    if amount < 0.0 && fixed != "0.00" {
        out.push('-');
    }
    out.push_str(&grouped);
    if !decimals.is_empty() {
        out.push('.');
        out.push_str(decimals);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 25, 12, 0, 0).unwrap()
    }

    fn form(description: &str, amount: &str) -> ExpenseForm {
        let mut f = ExpenseForm::new("Ami");
        f.description = description.into();
        f.amount = amount.into();
        f
    }

    #[test]
    fn add_prepends_and_grows_total() {
        let mut ledger = Ledger::new("Ami");
        ledger.add_entry(&mut form("Coffee", "450"), now()).unwrap();
        let before = ledger.total();

        let mut f = form("Taxi", "1200");
        let entry = ledger.add_entry(&mut f, now()).unwrap().clone();

        assert_eq!(entry.amount, 1200.0);
        assert_eq!(entry.description, "Taxi");
        assert_eq!(entry.payer, "Ami");
        assert_eq!(entry.created_date, "1/25");
        assert_eq!(ledger.entries()[0], entry);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), before + 1200.0);
    }

    #[test]
    fn successful_add_clears_text_but_keeps_payer() {
        let mut ledger = Ledger::new("Ami");
        let mut f = form("Taxi", "1200");
        f.payer = "Ken".into();
        ledger.add_entry(&mut f, now()).unwrap();
        assert_eq!(f.description, "");
        assert_eq!(f.amount, "");
        assert_eq!(f.payer, "Ken");
    }

    #[test]
    fn empty_description_is_rejected() {
        let mut ledger = Ledger::new("Ami");
        ledger.add_entry(&mut form("Coffee", "450"), now()).unwrap();
        let total = ledger.total();

        let mut f = form("", "500");
        assert_eq!(
            ledger.add_entry(&mut f, now()),
            Err(Rejection::EmptyDescription)
        );
        let mut blank = form("   ", "500");
        assert!(ledger.add_entry(&mut blank, now()).is_err());

        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), total);
        // Form keeps what was typed
        assert_eq!(f.amount, "500");
        assert_eq!(blank.description, "   ");
    }

    #[test]
    fn unparseable_amount_is_rejected() {
        let mut ledger = Ledger::new("Ami");
        for bad in ["", "abc", "12abc", "inf", "NaN"] {
            let mut f = form("Snacks", bad);
            assert_eq!(
                ledger.add_entry(&mut f, now()),
                Err(Rejection::InvalidAmount(bad.to_string()))
            );
            assert_eq!(f.description, "Snacks");
        }
        assert!(ledger.is_empty());
    }

    #[test]
    fn zero_and_negative_amounts_are_accepted() {
        let mut ledger = Ledger::new("Ami");
        ledger.add_entry(&mut form("Free sample", "0"), now()).unwrap();
        ledger.add_entry(&mut form("Refund", "-300"), now()).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.total(), -300.0);
    }

    #[test]
    fn ids_are_unique_within_the_same_instant() {
        let mut ledger = Ledger::new("Ami");
        for _ in 0..5 {
            ledger.add_entry(&mut form("Gum", "100"), now()).unwrap();
        }
        let mut ids: Vec<&str> = ledger.entries().iter().map(|e| e.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn remove_existing_entry_reduces_total_by_its_amount() {
        let mut ledger = Ledger::new("Ami");
        ledger.add_entry(&mut form("Taxi", "1200"), now()).unwrap();
        ledger.add_entry(&mut form("Lunch", "3400"), now()).unwrap();
        let total = ledger.total();
        let id = ledger.entries()[1].id.clone();

        let removed = ledger.remove_entry(&id).unwrap();
        assert_eq!(removed.description, "Taxi");
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), total - 1200.0);
    }

    #[test]
    fn remove_unknown_id_changes_nothing() {
        let mut ledger = Ledger::new("Ami");
        ledger.add_entry(&mut form("Taxi", "1200"), now()).unwrap();
        assert!(ledger.remove_entry("missing").is_none());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.total(), 1200.0);
    }

    #[test]
    fn totals_by_payer_groups_in_first_seen_order() {
        let mut ledger = Ledger::new("Ami");
        let mut f = form("Taxi", "1200");
        ledger.add_entry(&mut f, now()).unwrap();
        f.payer = "Ken".into();
        f.description = "Lunch".into();
        f.amount = "800".into();
        ledger.add_entry(&mut f, now()).unwrap();
        f.payer = "Ami".into();
        f.description = "Gum".into();
        f.amount = "100".into();
        ledger.add_entry(&mut f, now()).unwrap();

        assert_eq!(
            ledger.totals_by_payer(),
            vec![("Ami".to_string(), 1300.0), ("Ken".to_string(), 800.0)]
        );
    }

    #[test]
    fn blank_payer_falls_back_to_default() {
        let mut ledger = Ledger::new("純純");
        let mut f = ExpenseForm::new("純純");
        f.description = "Taxi".into();
        f.amount = "1200".into();
        f.payer = "  ".into();
        let entry = ledger.add_entry(&mut f, now()).unwrap().clone();
        assert_eq!(entry.payer, "純純");
        assert_eq!(f.payer, "純純");
        assert_eq!(ledger.totals_by_payer(), vec![("純純".to_string(), 1200.0)]);
    }

    #[test]
    fn description_is_stored_trimmed() {
        let mut ledger = Ledger::new("Ami");
        let entry = ledger.add_entry(&mut form("  Taxi ", "1200"), now()).unwrap();
        assert_eq!(entry.description, "Taxi");
    }

    #[test]
    fn amount_overflowing_the_total_is_rejected() {
        let mut ledger = Ledger::new("Ami");
        ledger.add_entry(&mut form("Yacht", "1e308"), now()).unwrap();
        let mut f = form("Another yacht", "1e308");
        assert_eq!(
            ledger.add_entry(&mut f, now()),
            Err(Rejection::TotalOverflow("1e308".to_string()))
        );
        assert_eq!(ledger.len(), 1);
        assert!(ledger.total().is_finite());
        assert_eq!(f.amount, "1e308");
    }

    #[test]
    fn parse_amount_accepts_separators_and_whitespace() {
        assert_eq!(parse_amount(" 35,370 "), Ok(35370.0));
        assert_eq!(parse_amount("12.5"), Ok(12.5));
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(1200.0), "1,200");
        assert_eq!(format_amount(35370.0), "35,370");
        assert_eq!(format_amount(1234567.0), "1,234,567");
        assert_eq!(format_amount(-300.0), "-300");
        assert_eq!(format_amount(12.5), "12.5");
        assert_eq!(format_amount(0.25), "0.25");
        assert_eq!(format_amount(-0.001), "0");
    }

    #[test]
    fn format_amount_handles_large_values() {
        assert_eq!(format_amount(1e20), "100,000,000,000,000,000,000");
        assert_eq!(format_amount(-2.5e19), "-25,000,000,000,000,000,000");
        let huge = format_amount(1e300);
        assert!(huge.starts_with("1,000,"));
        assert_eq!(huge.matches(',').count(), 100);
        assert_eq!(format_amount(f64::INFINITY), "inf");
    }
}
