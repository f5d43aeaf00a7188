//! `stall contact` — validate and "send" a contact message.
//!
//! Delivery is simulated: validation runs locally and the status is
//! reported, exactly like the storefront's contact form.

use crate::output::{CliError, OutputMode, render_error, render_success};
use clap::Args;
use stall_core::contact::ContactForm;

#[derive(Args, Debug)]
pub struct ContactArgs {
    /// Sender name.
    #[arg(long)]
    pub name: String,

    /// Sender email address.
    #[arg(long)]
    pub email: String,

    /// Message body.
    #[arg(long)]
    pub message: String,
}

/// Execute `stall contact`.
///
/// # Errors
///
/// Returns an error when a required field is empty after trimming, or if
/// output rendering fails.
pub fn run_contact(args: &ContactArgs, output: OutputMode) -> anyhow::Result<()> {
    let mut form = ContactForm::new(&args.name, &args.email, &args.message);
    let status = form.submit();

    if status.is_success() {
        render_success(output, status.message())
    } else {
        render_error(output, &CliError::new(status.message()))?;
        anyhow::bail!("contact validation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_args_require_all_three_flags() {
        use clap::Parser;

        #[derive(Parser)]
        struct Wrapper {
            #[command(flatten)]
            args: ContactArgs,
        }
        assert!(Wrapper::try_parse_from(["test", "--name", "Ada"]).is_err());

        let w = Wrapper::parse_from([
            "test",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "Hello",
        ]);
        assert_eq!(w.args.name, "Ada");
        assert_eq!(w.args.message, "Hello");
    }
}
