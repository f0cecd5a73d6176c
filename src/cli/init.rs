use std::path::PathBuf;

use crate::error::Result;
use crate::settings::{load_settings, save_settings, Settings};
use crate::storage::FileStore;
use crate::store::{Store, LEDGER_KEY};

/// Point Penny at a data directory and make sure a ledger exists there.
pub fn run(data_dir: Option<String>) -> Result<()> {
    let settings = match data_dir {
        Some(dir) => Settings { data_dir: dir },
        None => load_settings(),
    };
    save_settings(&settings)?;

    let files = FileStore::new(PathBuf::from(&settings.data_dir));
    let ledger_path = files.path_for(LEDGER_KEY);
    let store = Store::open(files);
    store.flush()?;

    println!("Data dir: {}", settings.data_dir);
    println!(
        "Ledger:   {} ({} transactions)",
        ledger_path.display(),
        store.transactions().len()
    );
    Ok(())
}
