//! Receipt

use std::io;

use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::basket::Basket;

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error
    #[error("failed to write receipt: {0}")]
    Io(#[from] io::Error),
}

impl Basket<'_> {
    /// Render the basket as a receipt table followed by the total.
    ///
    /// # Errors
    ///
    /// Returns an error if the receipt cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["SKU", "Item", "Qty", "Price"]);

        for line in self.products() {
            builder.push_record([
                line.sku.clone(),
                line.name.clone(),
                line.quantity.to_string(),
                line.price.to_string(),
            ]);
        }

        for bonus in self.bonus() {
            builder.push_record([
                bonus.sku.clone(),
                format!("{} (bonus)", bonus.name),
                bonus.quantity.to_string(),
                "FREE".to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(2..4), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " \x1b[1mTotal:\x1b[0m {}", self.total())?;
        writeln!(out)?;

        Ok(())
    }
}
