//! Postal code command implementation.

use belgian_localflavor::{Field, PostalCodeField};

pub fn run(value: String) -> Result<(), Box<dyn std::error::Error>> {
    let field = PostalCodeField::default();
    let code = field
        .clean(value.as_str().into())?
        .ok_or("Postal code is required")?;

    let province = code.province().map(|c| c.label).unwrap_or("?");
    println!("{}\t{}\t{}", code, code.province_code(), province);
    Ok(())
}
