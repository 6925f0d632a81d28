use anyhow::Result;
use serde::Serialize;
use zengin_core::Catalog;

use super::{print_json, Output};

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Stats {
    pub banks: usize,
    pub branches: usize,
    pub banks_without_branches: usize,
}

impl Stats {
    pub fn collect(catalog: &Catalog) -> Self {
        Self {
            banks: catalog.len(),
            branches: catalog.branch_count(),
            banks_without_branches: catalog.banks().filter(|bank| !bank.has_branches()).count(),
        }
    }
}

pub fn show_stats(catalog: &Catalog, output: Output) -> Result<()> {
    let stats = Stats::collect(catalog);

    match output {
        Output::Json => print_json(&stats)?,
        Output::Text => {
            println!("\nZengin Catalog\n");
            println!("  Banks:                  {}", stats.banks);
            println!("  Branches:               {}", stats.branches);
            println!("  Banks without branches: {}", stats.banks_without_branches);
        }
    }

    Ok(())
}
