use crate::cli::confirm;
use crate::error::Result;
use crate::fmt::money;
use crate::settings::get_data_dir;
use crate::storage::FileStore;
use crate::store::Store;

pub fn remove(id: &str, yes: bool) -> Result<()> {
    let mut store = Store::open(FileStore::new(get_data_dir()));

    let Some(tx) = store.transactions().iter().find(|tx| tx.id == id) else {
        println!("No transaction with id {id}");
        return Ok(());
    };

    if !yes {
        let prompt = format!("Delete '{}' ({})?", tx.description, money(tx.amount));
        if !confirm(&prompt)? {
            println!("Kept.");
            return Ok(());
        }
    }

    store.remove(id);
    println!("Deleted {id}");
    Ok(())
}

pub fn clear(yes: bool) -> Result<()> {
    let mut store = Store::open(FileStore::new(get_data_dir()));
    let count = store.transactions().len();

    if count == 0 {
        println!("Ledger is already empty.");
        return Ok(());
    }

    if !yes {
        let noun = if count == 1 { "transaction" } else { "transactions" };
        if !confirm(&format!("Delete all {count} {noun}?"))? {
            println!("Kept.");
            return Ok(());
        }
    }

    store.clear();
    println!("Cleared {count} transactions.");
    Ok(())
}
