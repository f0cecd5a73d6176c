use crate::error::{PennyError, Result};
use crate::fmt::money;
use crate::form::Draft;
use crate::ids::new_id;
use crate::models::{Category, TxKind};
use crate::settings::get_data_dir;
use crate::storage::FileStore;
use crate::store::Store;

/// Non-interactive add. Goes through the same draft validation as the
/// dashboard form.
pub fn run(
    description: &str,
    amount: &str,
    category: Option<&str>,
    kind: Option<&str>,
    date: Option<&str>,
) -> Result<()> {
    let kind = match kind {
        None => TxKind::Expense,
        Some("income") => TxKind::Income,
        Some("expense") => TxKind::Expense,
        Some(other) => {
            return Err(PennyError::Other(format!(
                "Unknown kind '{other}' (expected income or expense)"
            )))
        }
    };

    let mut draft = Draft {
        description: description.to_string(),
        category: category.map(Category::parse).unwrap_or(Category::ALL[0]),
        amount: amount.to_string(),
        kind,
        date: date.unwrap_or_default().to_string(),
    };

    let tx = draft
        .submit(new_id())
        .map_err(|e| PennyError::Other(e.to_string()))?;

    let mut store = Store::open(FileStore::new(get_data_dir()));
    let summary = format!(
        "{} {} ({}, {})",
        tx.description,
        money(tx.amount),
        tx.category,
        tx.kind
    );
    store.add(tx);
    println!("Recorded: {summary}");
    Ok(())
}
