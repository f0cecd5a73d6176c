use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::ledger::{category_breakdown, totals};
use crate::settings::get_data_dir;
use crate::storage::FileStore;
use crate::store::Store;

pub fn run() -> Result<()> {
    let store = Store::open(FileStore::new(get_data_dir()));
    let transactions = store.transactions();

    let t = totals(transactions);
    println!("Income:   {}", money(t.income).green());
    println!("Expenses: {}", money(t.expenses).red());
    let balance = if t.balance < 0.0 {
        money(t.balance).red()
    } else {
        money(t.balance).green()
    };
    println!("Balance:  {balance}");

    let breakdown = category_breakdown(transactions);
    if breakdown.is_empty() {
        println!("\nNo expenses recorded yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Category", "Spent", "Share"]);
    for group in &breakdown {
        let share = if t.expenses > 0.0 {
            group.total / t.expenses * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(group.category),
            Cell::new(money(group.total)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{share:.0}%")).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("\nExpenses by category\n{table}");
    Ok(())
}
