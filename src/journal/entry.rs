use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Opaque account identifier as supplied by the upstream chart of
/// accounts. Never validated here; it only serves as a grouping key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Which side of the books a line moves.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Debit,
    Credit,
}

/// One debit or credit movement against one account within an entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalLine {
    pub account_id: AccountId,
    /// Denormalized display name, used for report grouping and for
    /// lexical classification.
    pub account_name: String,
    pub side: Side,
    /// Non-negative by convention. Missing or malformed amounts decode to
    /// zero so a single bad line cannot abort a recompute.
    #[serde(default, deserialize_with = "lenient_amount")]
    pub amount: f64,
}

impl JournalLine {
    pub fn new(
        account_id: impl Into<String>,
        account_name: impl Into<String>,
        side: Side,
        amount: f64,
    ) -> Self {
        Self {
            account_id: AccountId::new(account_id),
            account_name: account_name.into(),
            side,
            amount,
        }
    }

    /// The line's amount when it sits on the debit side, zero otherwise.
    pub fn debit(&self) -> f64 {
        match self.side {
            Side::Debit => self.amount,
            Side::Credit => 0.0,
        }
    }

    /// The line's amount when it sits on the credit side, zero otherwise.
    pub fn credit(&self) -> f64 {
        match self.side {
            Side::Debit => 0.0,
            Side::Credit => self.amount,
        }
    }
}

/// An atomic, dated financial transaction composed of debit/credit lines.
/// Immutable once created; there is no update path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    #[serde(default)]
    pub lines: Vec<JournalLine>,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, description: impl Into<String>, lines: Vec<JournalLine>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
            lines,
        }
    }
}

/// Payload for creating an entry; the gateway assigns the identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJournalEntry {
    pub date: NaiveDate,
    pub description: String,
    pub lines: Vec<JournalLine>,
}

impl NewJournalEntry {
    pub fn new(date: NaiveDate, description: impl Into<String>, lines: Vec<JournalLine>) -> Self {
        Self {
            date,
            description: description.into(),
            lines,
        }
    }

    pub fn into_entry(self) -> JournalEntry {
        JournalEntry::new(self.date, self.description, self.lines)
    }
}

const BALANCE_TOLERANCE: f64 = 1e-9;

/// Advisory double-entry check: total debits equal total credits within
/// the entry. Reports aggregate unbalanced entries without complaint;
/// callers who care run this themselves before creating an entry.
pub fn is_balanced(entry: &JournalEntry) -> bool {
    let (debits, credits) = entry
        .lines
        .iter()
        .fold((0.0_f64, 0.0_f64), |(debits, credits), line| {
            (debits + line.debit(), credits + line.credit())
        });
    (debits - credits).abs() < BALANCE_TOLERANCE
}

fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAmount {
        Number(f64),
        Text(String),
        Null,
    }

    Ok(match RawAmount::deserialize(deserializer) {
        Ok(RawAmount::Number(value)) if value.is_finite() => value,
        Ok(RawAmount::Number(_)) => 0.0,
        Ok(RawAmount::Text(value)) => value.trim().parse().unwrap_or(0.0),
        Ok(RawAmount::Null) => 0.0,
        Err(_) => 0.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn balanced_entry_passes_advisory_check() {
        let entry = JournalEntry::new(
            date(),
            "Cash sale",
            vec![
                JournalLine::new("1000", "Cash", Side::Debit, 100.0),
                JournalLine::new("4000", "Sales Revenue", Side::Credit, 100.0),
            ],
        );
        assert!(is_balanced(&entry));
    }

    #[test]
    fn unbalanced_entry_fails_advisory_check_but_is_not_rejected() {
        let entry = JournalEntry::new(
            date(),
            "Fat-fingered",
            vec![
                JournalLine::new("1000", "Cash", Side::Debit, 100.0),
                JournalLine::new("4000", "Sales Revenue", Side::Credit, 90.0),
            ],
        );
        assert!(!is_balanced(&entry));
    }

    #[test]
    fn side_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Side::Debit).unwrap(), "\"debit\"");
        assert_eq!(serde_json::to_string(&Side::Credit).unwrap(), "\"credit\"");
    }

    #[test]
    fn malformed_amounts_decode_to_zero() {
        let json = r#"[
            {"account_id": "1", "account_name": "Cash", "side": "debit", "amount": 12.5},
            {"account_id": "2", "account_name": "Cash", "side": "debit", "amount": "7.25"},
            {"account_id": "3", "account_name": "Cash", "side": "debit", "amount": "oops"},
            {"account_id": "4", "account_name": "Cash", "side": "debit", "amount": null},
            {"account_id": "5", "account_name": "Cash", "side": "debit"}
        ]"#;
        let lines: Vec<JournalLine> = serde_json::from_str(json).unwrap();
        let amounts: Vec<f64> = lines.iter().map(|line| line.amount).collect();
        assert_eq!(amounts, vec![12.5, 7.25, 0.0, 0.0, 0.0]);
    }
}
