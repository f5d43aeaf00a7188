//! `stall list` — list catalog products through the view filter.

use crate::output::{OutputMode, Renderable, render_list};
use clap::Args;
use stall_core::render::ProductCard;
use stall_core::storefront::Storefront;
use std::io::{self, Write};

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Filter by category label (e.g. "Audio"); omit for all categories.
    #[arg(short, long)]
    pub category: Option<String>,

    /// Case-insensitive substring match on product titles.
    #[arg(short, long)]
    pub query: Option<String>,
}

impl Renderable for ProductCard {
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{:<4} {:<24} {:<12} {:>8}",
            self.id, self.title, self.category, self.price
        )?;
        if let Some(image) = &self.image {
            writeln!(w, "     {image}")?;
        }
        Ok(())
    }

    fn render_json(&self, w: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(w, self).map_err(io::Error::from)
    }

    fn render_table(&self, w: &mut dyn Write) -> io::Result<()> {
        writeln!(
            w,
            "{}  {}  {}  {}  {}",
            self.id,
            self.title,
            self.category,
            self.price,
            self.image.as_deref().unwrap_or("-")
        )
    }

    fn table_headers() -> &'static [&'static str] {
        &["id", "title", "category", "price", "image"]
    }
}

/// Execute `stall list`.
///
/// One-shot output has no viewport to observe, so every image placeholder
/// takes the immediate-load fallback.
///
/// # Errors
///
/// Returns an error if output rendering fails.
pub fn run_list(args: &ListArgs, output: OutputMode, front: &mut Storefront) -> anyhow::Result<()> {
    if let Some(category) = &args.category {
        front.set_category(category);
    }
    if let Some(query) = &args.query {
        front.set_query(query);
    }
    front.load_all_images();

    let cards = front.cards();
    render_list(&cards, output)?;
    Ok(())
}
