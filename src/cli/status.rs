use crate::error::Result;
use crate::fmt::money;
use crate::ledger::totals;
use crate::settings::get_data_dir;
use crate::storage::FileStore;
use crate::store::{Store, LEDGER_KEY};

pub fn run() -> Result<()> {
    let data_dir = get_data_dir();
    let files = FileStore::new(data_dir.clone());
    let ledger_path = files.path_for(LEDGER_KEY);

    println!("Data dir: {}", data_dir.display());
    println!("Ledger:   {}", ledger_path.display());
    if !ledger_path.exists() {
        println!("          (not written yet — seeds shown until first change)");
    }

    let store = Store::open(files);
    let t = totals(store.transactions());
    println!();
    println!("Transactions: {}", store.transactions().len());
    println!("Balance:      {}", money(t.balance));
    Ok(())
}
