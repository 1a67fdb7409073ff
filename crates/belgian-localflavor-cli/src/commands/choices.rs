//! Province and region listing.

use belgian_localflavor::{ProvinceSelect, RegionSelect};

use crate::output;

/// Which choice table to list.
#[derive(Debug, Clone, Copy)]
pub enum Table {
    Provinces,
    Regions,
}

pub fn run(table: Table, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let choices = match table {
        Table::Provinces => ProvinceSelect::default().choices(),
        Table::Regions => RegionSelect::default().choices(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(choices)?);
    } else {
        for choice in choices {
            println!("{}", output::format_choice_row(choice));
        }
    }
    Ok(())
}
