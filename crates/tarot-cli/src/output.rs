//! Printing bot replies to the terminal.

use std::path::Path;

use colored::Colorize;
use tarot_bot::{Attachment, Embed, Reply};

/// Print replies in order; attachments are written into `out` when given.
pub fn print_replies(replies: &[Reply], out: Option<&Path>) -> Result<(), String> {
    for reply in replies {
        if let Some(content) = &reply.content {
            println!("{}\n", content.yellow());
        }
        if let Some(embed) = &reply.embed {
            print_embed(embed);
        }
        for attachment in &reply.attachments {
            save_attachment(attachment, out)?;
        }
    }
    Ok(())
}

fn print_embed(embed: &Embed) {
    let (r, g, b) = embed.accent.components();
    println!("{}", embed.title.bold().truecolor(r, g, b));
    if let Some(description) = &embed.description {
        println!("{}", description.trim_end());
    }
    for field in &embed.fields {
        println!();
        println!("  {}", field.title.bold());
        for line in field.body.lines() {
            println!("    {line}");
        }
    }
    if let Some(footer) = &embed.footer {
        println!();
        println!("  {}", footer.dimmed());
    }
    println!();
}

fn save_attachment(attachment: &Attachment, out: Option<&Path>) -> Result<(), String> {
    let Some(dir) = out else {
        println!(
            "  [{}: {} bytes, use --out to save]",
            attachment.filename,
            attachment.data.len()
        );
        return Ok(());
    };

    std::fs::create_dir_all(dir)
        .map_err(|e| format!("cannot create {}: {e}", dir.display()))?;
    let path = dir.join(&attachment.filename);
    std::fs::write(&path, &attachment.data)
        .map_err(|e| format!("cannot write {}: {e}", path.display()))?;
    println!("  {} {}", "Saved".green(), path.display());
    Ok(())
}
