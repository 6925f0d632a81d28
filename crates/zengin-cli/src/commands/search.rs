use anyhow::{Context, Result};
use zengin_core::Catalog;

use super::{bank_row, branch_row, print_json, BankSummary, Output};

pub fn search_banks(catalog: &Catalog, pattern: &str, output: Output) -> Result<()> {
    let mut banks = catalog
        .find_banks_by_name(pattern)
        .with_context(|| format!("Bank search for {:?} failed", pattern))?;
    banks.sort_by(|a, b| a.code.cmp(&b.code));
    log::debug!("{} banks match {:?}", banks.len(), pattern);

    match output {
        Output::Json => {
            let summaries: Vec<BankSummary<'_>> =
                banks.iter().map(|bank| BankSummary::from(&**bank)).collect();
            print_json(&summaries)?;
        }
        Output::Text => {
            for bank in &banks {
                println!("{}", bank_row(bank));
            }
            println!("\n{} banks match {:?}", banks.len(), pattern);
        }
    }

    Ok(())
}

pub fn search_branches(
    catalog: &Catalog,
    bank_code: &str,
    pattern: &str,
    output: Output,
) -> Result<()> {
    let mut branches = catalog
        .find_branches_by_name(bank_code, pattern)
        .with_context(|| format!("Branch search for {:?} in bank {} failed", pattern, bank_code))?;
    branches.sort_by(|a, b| a.code.cmp(&b.code));

    match output {
        Output::Json => print_json(&branches)?,
        Output::Text => {
            for branch in &branches {
                println!("{}", branch_row(branch));
            }
            println!(
                "\n{} branches of bank {} match {:?}",
                branches.len(),
                bank_code,
                pattern
            );
        }
    }

    Ok(())
}
