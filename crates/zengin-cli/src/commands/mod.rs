use anyhow::Result;
use serde::Serialize;
use zengin_core::{Bank, Branch};

pub mod config;
pub mod lookup;
pub mod search;
pub mod stats;

/// How query results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Text,
    Json,
}

/// A bank without its branches, for listings.
#[derive(Debug, Serialize)]
pub struct BankSummary<'a> {
    pub code: &'a str,
    pub name: &'a str,
    pub kana: &'a str,
    pub hira: &'a str,
    pub roma: &'a str,
    pub branches: usize,
}

impl<'a> From<&'a Bank> for BankSummary<'a> {
    fn from(bank: &'a Bank) -> Self {
        Self {
            code: &bank.code,
            name: &bank.name,
            kana: &bank.kana,
            hira: &bank.hira,
            roma: &bank.roma,
            branches: bank.branches.len(),
        }
    }
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Multi-line detail view of a bank.
pub fn render_bank(bank: &Bank) -> String {
    format!(
        "Code:     {}\nName:     {}\nKana:     {}\nHira:     {}\nRoma:     {}\nBranches: {}",
        bank.code,
        bank.name,
        bank.kana,
        bank.hira,
        bank.roma,
        bank.branches.len()
    )
}

/// Multi-line detail view of a branch and its bank.
pub fn render_branch(branch: &Branch) -> String {
    let bank_name = branch
        .bank()
        .map(|bank| bank.name.clone())
        .unwrap_or_default();

    format!(
        "Bank:     {} {}\nCode:     {}\nName:     {}\nKana:     {}\nHira:     {}\nRoma:     {}",
        branch.bank_code(),
        bank_name,
        branch.code,
        branch.name,
        branch.kana,
        branch.hira,
        branch.roma
    )
}

/// One-line listing entry for a bank.
pub fn bank_row(bank: &Bank) -> String {
    format!("{}  {} ({})", bank.code, bank.name, bank.roma)
}

/// One-line listing entry for a branch.
pub fn branch_row(branch: &Branch) -> String {
    format!("{}  {} ({})", branch.code, branch.name, branch.roma)
}
