use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::models::TxKind;
use crate::settings::get_data_dir;
use crate::storage::FileStore;
use crate::store::Store;

pub fn run() -> Result<()> {
    let store = Store::open(FileStore::new(get_data_dir()));
    let transactions = store.transactions();

    if transactions.is_empty() {
        println!("No transactions. Record one with `penny add`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Date", "Description", "Category", "Amount", "Id"]);
    for tx in transactions {
        let amount = match tx.kind {
            TxKind::Income => money(tx.amount).green().to_string(),
            TxKind::Expense => format!("-{}", money(tx.amount)).red().to_string(),
        };
        table.add_row(vec![
            Cell::new(&tx.date),
            Cell::new(&tx.description),
            Cell::new(tx.category),
            Cell::new(amount),
            Cell::new(&tx.id),
        ]);
    }
    println!("Transactions ({})\n{table}", transactions.len());
    Ok(())
}
