use anyhow::Result;
use zengin_core::Catalog;

use super::{bank_row, branch_row, print_json, render_bank, render_branch, BankSummary, Output};

pub fn show_bank(catalog: &Catalog, code: &str, output: Output) -> Result<()> {
    let bank = catalog.get_bank(code)?;

    match output {
        Output::Json => print_json(&*bank)?,
        Output::Text => println!("{}", render_bank(&bank)),
    }

    Ok(())
}

pub fn show_branch(
    catalog: &Catalog,
    bank_code: &str,
    branch_code: &str,
    output: Output,
) -> Result<()> {
    let branch = catalog.get_branch(bank_code, branch_code)?;

    match output {
        Output::Json => print_json(branch)?,
        Output::Text => println!("{}", render_branch(branch)),
    }

    Ok(())
}

pub fn list_banks(catalog: &Catalog, output: Output) -> Result<()> {
    match output {
        Output::Json => {
            let summaries: Vec<BankSummary<'_>> =
                catalog.banks().map(|bank| BankSummary::from(&**bank)).collect();
            print_json(&summaries)?;
        }
        Output::Text => {
            for bank in catalog.banks() {
                println!("{}", bank_row(bank));
            }
            println!("\n{} banks", catalog.len());
        }
    }

    Ok(())
}

pub fn list_branches(catalog: &Catalog, bank_code: &str, output: Output) -> Result<()> {
    let branches = catalog.get_all_branches(bank_code)?;

    match output {
        Output::Json => print_json(branches)?,
        Output::Text => {
            if branches.is_empty() {
                println!("No branch data for bank {}", bank_code);
                return Ok(());
            }
            for branch in branches.values() {
                println!("{}", branch_row(branch));
            }
            println!("\n{} branches", branches.len());
        }
    }

    Ok(())
}
