//! `stall dec` — decrement a cart entry, removing it at zero.

use crate::cmd::{CartSummary, write_summary};
use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use stall_core::action::{Action, Outcome};
use stall_core::error::ErrorCode;
use stall_core::storefront::Storefront;

#[derive(Args, Debug)]
pub struct DecArgs {
    /// Product id whose cart entry to decrement.
    pub id: String,
}

/// Execute `stall dec <id>`.
///
/// Decrementing an absent entry is a warned no-op with a zero exit code;
/// decrementing an entry at quantity one removes it entirely.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_dec(args: &DecArgs, output: OutputMode, front: &mut Storefront) -> anyhow::Result<()> {
    if front.apply(&Action::Decrement(args.id.clone())) == Outcome::Ignored {
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
