// ABOUTME: `defaults` command: prints the configuration a freshly opened wizard starts with

use anyhow::Result;

use super::OutputFormat;
use crate::models::CrawlData;
use crate::wizard::{review_sections, ReviewItem};

pub fn execute(format: OutputFormat) -> Result<()> {
    let data = CrawlData::default();
    match format {
        OutputFormat::Json => println!("{}", render_json(&data)?),
        OutputFormat::Text => print!("{}", render_text(&data)),
    }
    Ok(())
}

pub fn render_json(data: &CrawlData) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Same grouping as the review step
pub fn render_text(data: &CrawlData) -> String {
    let mut out = String::new();
    for section in review_sections(data) {
        out.push_str(&format!("{}\n", section.title));
        out.push_str(&format!("{}\n", "-".repeat(section.title.len())));
        for item in &section.items {
            match item {
                ReviewItem::Heading(heading) => out.push_str(&format!("  [{heading}]\n")),
                ReviewItem::Field { label, value } => {
                    out.push_str(&format!("  {label}: {value}\n"));
                }
                ReviewItem::List { label, items } => {
                    out.push_str(&format!("  {label}:\n"));
                    for entry in items {
                        out.push_str(&format!("    - {entry}\n"));
                    }
                }
            }
        }
        out.push('\n');
    }
    out
}
