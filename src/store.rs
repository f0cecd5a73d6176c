use chrono::{Duration, Local};

use crate::ids::new_id;
use crate::models::{Category, Transaction, TxKind};
use crate::storage::Storage;

/// Namespace key for the persisted transaction list.
pub const LEDGER_KEY: &str = "ledger";

/// The in-memory transaction list, newest first. Every mutation writes the
/// whole list back through the storage collaborator; a failed write is
/// logged and otherwise ignored — the in-memory list stays authoritative
/// for the running session.
pub struct Store<S: Storage> {
    storage: S,
    transactions: Vec<Transaction>,
}

impl<S: Storage> Store<S> {
    /// Load the persisted list, falling back to the seed set when the data
    /// is absent or malformed. Never fails.
    pub fn open(storage: S) -> Self {
        let transactions = storage
            .load(LEDGER_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(seed_transactions);
        Self {
            storage,
            transactions,
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Prepend a transaction. The caller supplies a fully built record with
    /// a fresh id and validated fields (see `form::Draft::submit`).
    pub fn add(&mut self, tx: Transaction) {
        self.transactions.insert(0, tx);
        self.persist();
    }

    /// Remove by id. Returns whether anything was removed; an unknown id is
    /// not an error. Destructive — callers confirm with the user first.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|tx| tx.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    /// Drop every transaction. Same confirmation expectation as `remove`.
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.persist();
    }

    /// Write the current list through storage. Used directly by `init` so a
    /// first run leaves a ledger file on disk.
    pub fn flush(&self) -> crate::error::Result<()> {
        let raw = serde_json::to_string_pretty(&self.transactions)?;
        self.storage.save(LEDGER_KEY, &raw)
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            eprintln!("Warning: could not save ledger: {e}");
        }
    }
}

fn days_ago(days: i64) -> String {
    (Local::now().date_naive() - Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// Example transactions shown on first run (and whenever the persisted data
/// cannot be read), so the ledger never starts as a blank screen.
pub fn seed_transactions() -> Vec<Transaction> {
    let rows: &[(&str, Category, f64, TxKind, i64)] = &[
        ("Grocery run", Category::Food, 54.20, TxKind::Expense, 1),
        ("Bus pass", Category::Transport, 25.00, TxKind::Expense, 2),
        ("Electric bill", Category::Utilities, 61.75, TxKind::Expense, 4),
        ("Cinema tickets", Category::Entertainment, 24.00, TxKind::Expense, 6),
        ("Monthly salary", Category::Other, 2400.00, TxKind::Income, 7),
        ("Rent", Category::Housing, 850.00, TxKind::Expense, 7),
    ];
    rows.iter()
        .map(|&(description, category, amount, kind, age)| Transaction {
            id: new_id(),
            description: description.to_string(),
            category,
            amount,
            kind,
            date: days_ago(age),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::test_support::MemStore;

    fn tx(id: &str, amount: f64) -> Transaction {
        Transaction {
            id: id.to_string(),
            description: format!("txn {id}"),
            category: Category::Food,
            amount,
            kind: TxKind::Expense,
            date: "2024-03-01".to_string(),
        }
    }

    #[test]
    fn test_open_empty_storage_yields_seeds() {
        let store = Store::open(MemStore::default());
        assert_eq!(store.transactions().len(), seed_transactions().len());
    }

    #[test]
    fn test_open_malformed_data_yields_seeds_not_empty() {
        let mem = MemStore::default();
        mem.entries
            .borrow_mut()
            .insert(LEDGER_KEY.to_string(), "{not json".to_string());
        let store = Store::open(mem);
        assert!(!store.transactions().is_empty());
        assert_eq!(store.transactions().len(), seed_transactions().len());
    }

    #[test]
    fn test_open_restores_persisted_list() {
        let mem = MemStore::default();
        let list = vec![tx("a", 5.0), tx("b", 7.5)];
        mem.entries.borrow_mut().insert(
            LEDGER_KEY.to_string(),
            serde_json::to_string(&list).unwrap(),
        );
        let store = Store::open(mem);
        assert_eq!(store.transactions(), list.as_slice());
    }

    #[test]
    fn test_add_prepends_and_persists() {
        let mut store = Store::open(MemStore::default());
        store.clear();
        store.add(tx("first", 1.0));
        store.add(tx("second", 2.0));
        assert_eq!(store.transactions()[0].id, "second");
        assert_eq!(store.transactions()[1].id, "first");

        let saved = store.storage.load(LEDGER_KEY).unwrap();
        let decoded: Vec<Transaction> = serde_json::from_str(&saved).unwrap();
        assert_eq!(decoded, store.transactions);
    }

    #[test]
    fn test_add_then_remove_roundtrips() {
        let mut store = Store::open(MemStore::default());
        let original = store.transactions().to_vec();
        store.add(tx("tmp", 9.99));
        assert!(store.remove("tmp"));
        assert_eq!(store.transactions(), original.as_slice());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = Store::open(MemStore::default());
        let before = store.transactions().to_vec();
        assert!(!store.remove("no-such-id"));
        assert_eq!(store.transactions(), before.as_slice());
    }

    #[test]
    fn test_clear_empties_list() {
        let mut store = Store::open(MemStore::default());
        store.clear();
        assert!(store.transactions().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_memory_authoritative() {
        let mem = MemStore {
            fail_saves: true,
            ..MemStore::default()
        };
        let mut store = Store::open(mem);
        store.clear();
        store.add(tx("kept", 3.0));
        assert_eq!(store.transactions().len(), 1);
        assert!(store.storage.load(LEDGER_KEY).is_none());
    }
}
