use serde::{Deserialize, Serialize};

/// Fixed category set. Unknown or missing category text in persisted data
/// decodes to `Other` rather than rejecting the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Housing,
    Transport,
    Utilities,
    Entertainment,
    Health,
    Shopping,
    #[serde(other)]
    Other,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Food,
        Category::Housing,
        Category::Transport,
        Category::Utilities,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Housing => "Housing",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Health => "Health",
            Category::Shopping => "Shopping",
            Category::Other => "Other",
        }
    }

    /// Parse a user-supplied name, case-insensitively. Empty or unrecognized
    /// input folds into `Other`.
    pub fn parse(name: &str) -> Category {
        let name = name.trim().to_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.label().to_lowercase() == name)
            .unwrap_or(Category::Other)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Income,
    Expense,
}

impl TxKind {
    pub fn label(&self) -> &'static str {
        match self {
            TxKind::Income => "income",
            TxKind::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A committed ledger entry. Never mutated in place — edits replace the
/// record wholesale, deletes remove it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub description: String,
    pub category: Category,
    /// Always positive; `kind` carries the sign.
    pub amount: f64,
    pub kind: TxKind,
    /// ISO date, YYYY-MM-DD.
    pub date: String,
}

/// Round to 2 decimal places, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_known_and_unknown() {
        assert_eq!(Category::parse("Food"), Category::Food);
        assert_eq!(Category::parse("  health "), Category::Health);
        assert_eq!(Category::parse("groceries"), Category::Other);
        assert_eq!(Category::parse(""), Category::Other);
    }

    #[test]
    fn test_unknown_category_decodes_to_other() {
        let json = r#"{"id":"a","description":"x","category":"yachts","amount":1.0,"kind":"expense","date":"2024-01-01"}"#;
        let tx: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(tx.category, Category::Other);
    }

    #[test]
    fn test_unknown_kind_is_a_decode_error() {
        let json = r#"{"id":"a","description":"x","category":"food","amount":1.0,"kind":"transfer","date":"2024-01-01"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_transaction_roundtrips_through_json() {
        let tx = Transaction {
            id: "t1".into(),
            description: "Coffee".into(),
            category: Category::Food,
            amount: 3.5,
            kind: TxKind::Expense,
            date: "2024-01-01".into(),
        };
        let json = serde_json::to_string(&tx).unwrap();
        let back: Transaction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tx);
    }

    #[test]
    fn test_round_cents_half_away_from_zero() {
        // 0.125 is exact in binary, so the .5 case is genuinely exercised
        assert_eq!(round_cents(0.125), 0.13);
        assert_eq!(round_cents(-0.125), -0.13);
        assert_eq!(round_cents(3.14159), 3.14);
        assert_eq!(round_cents(10.0), 10.0);
    }
}
