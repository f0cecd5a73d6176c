use crate::models::{round_cents, Category, Transaction, TxKind};

// ---------------------------------------------------------------------------
// Totals
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub income: f64,
    pub expenses: f64,
    pub balance: f64,
}

/// Sum the list into income, expenses, and their difference. Rounding is
/// applied to the final sums, not per item.
pub fn totals(transactions: &[Transaction]) -> Totals {
    let mut income = 0.0;
    let mut expenses = 0.0;
    for tx in transactions {
        match tx.kind {
            TxKind::Income => income += tx.amount,
            TxKind::Expense => expenses += tx.amount,
        }
    }
    Totals {
        income: round_cents(income),
        expenses: round_cents(expenses),
        balance: round_cents(income - expenses),
    }
}

// ---------------------------------------------------------------------------
// Category breakdown
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: f64,
}

/// Per-category expense totals, largest first. Income entries are excluded
/// entirely. Ties keep first-encountered order (stable sort), so the result
/// is deterministic for a given list. Empty input gives an empty vec.
pub fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut groups: Vec<CategoryTotal> = Vec::new();
    for tx in transactions {
        if tx.kind != TxKind::Expense {
            continue;
        }
        match groups.iter_mut().find(|g| g.category == tx.category) {
            Some(group) => group.total += tx.amount,
            None => groups.push(CategoryTotal {
                category: tx.category,
                total: tx.amount,
            }),
        }
    }
    for group in &mut groups {
        group.total = round_cents(group.total);
    }
    groups.sort_by(|a, b| b.total.total_cmp(&a.total));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(description: &str, category: Category, amount: f64, kind: TxKind) -> Transaction {
        Transaction {
            id: crate::ids::new_id(),
            description: description.to_string(),
            category,
            amount,
            kind,
            date: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_totals_empty_list_is_all_zero() {
        let t = totals(&[]);
        assert_eq!(t.income, 0.0);
        assert_eq!(t.expenses, 0.0);
        assert_eq!(t.balance, 0.0);
    }

    #[test]
    fn test_totals_single_expense() {
        let list = vec![tx("Coffee", Category::Food, 3.5, TxKind::Expense)];
        let t = totals(&list);
        assert_eq!(t.income, 0.0);
        assert_eq!(t.expenses, 3.5);
        assert_eq!(t.balance, -3.5);
    }

    #[test]
    fn test_totals_mixed_income_and_expense() {
        let list = vec![
            tx("Paycheck", Category::Other, 100.0, TxKind::Income),
            tx("Groceries", Category::Food, 40.0, TxKind::Expense),
        ];
        let t = totals(&list);
        assert_eq!(t.income, 100.0);
        assert_eq!(t.expenses, 40.0);
        assert_eq!(t.balance, 60.0);
    }

    #[test]
    fn test_totals_balance_consistency() {
        let list = vec![
            tx("a", Category::Food, 12.34, TxKind::Expense),
            tx("b", Category::Housing, 56.78, TxKind::Expense),
            tx("c", Category::Other, 90.12, TxKind::Income),
            tx("d", Category::Other, 3.45, TxKind::Income),
        ];
        let t = totals(&list);
        assert_eq!(t.balance, round_cents(t.income - t.expenses));
    }

    #[test]
    fn test_totals_rounds_final_sum() {
        // Each item carries sub-cent noise; rounding happens once at the end.
        let list = vec![
            tx("a", Category::Food, 0.111, TxKind::Expense),
            tx("b", Category::Food, 0.111, TxKind::Expense),
            tx("c", Category::Food, 0.111, TxKind::Expense),
        ];
        assert_eq!(totals(&list).expenses, 0.33);
    }

    #[test]
    fn test_breakdown_empty_list() {
        assert!(category_breakdown(&[]).is_empty());
    }

    #[test]
    fn test_breakdown_excludes_income() {
        let list = vec![
            tx("Refund", Category::Food, 100.0, TxKind::Income),
            tx("Groceries", Category::Food, 40.0, TxKind::Expense),
        ];
        let groups = category_breakdown(&list);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].category, Category::Food);
        assert_eq!(groups[0].total, 40.0);
    }

    #[test]
    fn test_breakdown_only_income_yields_empty() {
        let list = vec![tx("Paycheck", Category::Other, 500.0, TxKind::Income)];
        assert!(category_breakdown(&list).is_empty());
    }

    #[test]
    fn test_breakdown_groups_and_sorts_descending() {
        let list = vec![
            tx("Bus", Category::Transport, 10.0, TxKind::Expense),
            tx("Rent", Category::Housing, 800.0, TxKind::Expense),
            tx("Groceries", Category::Food, 30.0, TxKind::Expense),
            tx("Takeaway", Category::Food, 20.0, TxKind::Expense),
        ];
        let groups = category_breakdown(&list);
        let pairs: Vec<(Category, f64)> =
            groups.iter().map(|g| (g.category, g.total)).collect();
        assert_eq!(
            pairs,
            vec![
                (Category::Housing, 800.0),
                (Category::Food, 50.0),
                (Category::Transport, 10.0),
            ]
        );
    }

    #[test]
    fn test_breakdown_tie_keeps_first_encountered_order() {
        let list = vec![
            tx("Bus", Category::Transport, 25.0, TxKind::Expense),
            tx("Groceries", Category::Food, 25.0, TxKind::Expense),
        ];
        let groups = category_breakdown(&list);
        assert_eq!(groups[0].category, Category::Transport);
        assert_eq!(groups[1].category, Category::Food);
    }
}
