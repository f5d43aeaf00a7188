//! `stall add` — add one unit of a product to the cart.

use crate::cmd::{CartSummary, write_summary};
use crate::output::{CliError, OutputMode, render, render_error};
use clap::Args;
use stall_core::action::{Action, Outcome};
use stall_core::error::ErrorCode;
use stall_core::storefront::Storefront;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Product id to add.
    pub id: String,
}

/// Execute `stall add <id>`.
///
/// An unknown product id is a warned no-op, not a failure: the exit code
/// stays zero and the cart is untouched.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_add(args: &AddArgs, output: OutputMode, front: &mut Storefront) -> anyhow::Result<()> {
    if front.apply(&Action::Add(args.id.clone())) == Outcome::Ignored {
        render_error(
            output,
            &CliError::from_code(
                ErrorCode::ProductNotFound,
                format!("product '{}' not found; cart unchanged", args.id),
            ),
        )?;
        return Ok(());
    }

    let summary = CartSummary::for_product(front, &args.id);
    render(output, &summary, |summary, w| write_summary(w, summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_args_take_a_positional_id() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: AddArgs,
        }
        let w = Wrapper::parse_from(["test", "p1"]);
        assert_eq!(w.args.id, "p1");
    }
}
