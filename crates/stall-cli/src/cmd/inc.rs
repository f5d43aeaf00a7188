//! `stall inc` — increment an existing cart entry.

use crate::cmd::{CartSummary, write_summary};
use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use stall_core::action::{Action, Outcome};
use stall_core::error::ErrorCode;
use stall_core::storefront::Storefront;

#[derive(Args, Debug)]
pub struct IncArgs {
    /// Product id whose cart entry to increment.
    pub id: String,
}

/// Execute `stall inc <id>`.
///
/// Incrementing requires an existing entry; anything else is a warned
/// no-op with a zero exit code.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_inc(args: &IncArgs, output: OutputMode, front: &mut Storefront) -> anyhow::Result<()> {
    if front.apply(&Action::Increment(args.id.clone())) == Outcome::Ignored {
        render_error(
            output,
            &CliError::from_code(
                ErrorCode::ProductNotFound,
                format!("no cart entry for '{}'; cart unchanged", args.id),
            ),
        )?;
        return Ok(());
    }

    let summary = CartSummary::for_product(front, &args.id);
    render(output, &summary, |summary, w| write_summary(w, summary))
}
