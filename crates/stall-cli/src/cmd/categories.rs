//! `stall categories` — list the derived category filter options.

use crate::output::{OutputMode, render};
use serde::Serialize;
use stall_core::storefront::Storefront;
use stall_core::view::capitalize;
use std::io::Write;

/// One selectable category option.
#[derive(Debug, Serialize)]
pub struct CategoryOption {
    /// Option value as used by `list --category` and the view filter.
    pub value: String,
    /// Display label with the first character capitalized.
    pub label: String,
}

/// Execute `stall categories`.
///
/// The first option is always the `all` sentinel, followed by the
/// distinct product categories in first-seen order.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_categories(output: OutputMode, front: &Storefront) -> anyhow::Result<()> {
    let options: Vec<CategoryOption> = front
        .catalog()
        .category_options()
        .into_iter()
        .map(|value| CategoryOption {
            label: capitalize(&value),
            value,
        })
        .collect();

    render(output, &options, |options, w| {
        for option in options {
            writeln!(w, "{}", option.label)?;
        }
        Ok(())
    })
}
