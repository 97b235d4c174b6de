use crate::app::{AppContext, Result};
use crate::domain::SourceType;
use crate::filter::{self, SourceFilter, View};
use crate::library::ToggleOutcome;
use crate::scrape::DataSource;

pub fn feed(
    ctx: &AppContext,
    query: &str,
    source: Option<SourceType>,
    saved_only: bool,
) -> Result<()> {
    let items = ctx.store.items()?;
    let view = if saved_only { View::Saved } else { View::Feed };
    let source = match source {
        Some(s) => SourceFilter::Only(s),
        None => SourceFilter::All,
    };

    let visible = filter::visible(&items, view, query, source);
    if visible.is_empty() {
        println!("No items");
        return Ok(());
    }

    for item in visible {
        let marker = if item.is_saved { "*" } else { " " };
        println!(
            "{} {} {} [{}] {}",
            marker,
            item.short_id(),
            item.timestamp.format("%Y-%m-%d"),
            item.source_name,
            item.title
        );
    }

    Ok(())
}

pub async fn scrape(ctx: &AppContext) -> Result<()> {
    println!("Triggering scrape workflow...");

    let outcome = ctx.orchestrator.trigger_scrape().await;
    let added = ctx.store.merge_scraped(outcome.items)?;

    match outcome.data_source {
        DataSource::Live => println!("Scrape complete: {} new items (live)", added),
        DataSource::Fallback => {
            println!("Scrape complete: {} new items (fallback data)", added);
            if let Some(reason) = outcome.degraded_reason {
                eprintln!("  degraded: {}", reason);
            }
        }
    }

    Ok(())
}

pub fn show(ctx: &AppContext, id: &str) -> Result<()> {
    let item = ctx.store.resolve_prefix(id)?;

    let marker = if item.is_saved { "* " } else { "" };
    println!("{}{}", marker, item.title);
    println!(
        "  {} ({}) - {}",
        item.source_name,
        item.source,
        item.timestamp.format("%Y-%m-%d %H:%M")
    );
    println!("  {}", item.url);
    if !item.tags.is_empty() {
        println!("  tags: {}", item.tags.join(", "));
    }
    println!("\n{}", item.full_content);

    Ok(())
}

pub async fn toggle(ctx: &AppContext, id: &str, save: bool) -> Result<()> {
    let item = ctx.store.resolve_prefix(id)?;
    if item.is_saved == save {
        println!(
            "'{}' is already {}",
            item.title,
            if save { "saved" } else { "unsaved" }
        );
        return Ok(());
    }

    match ctx.library.toggle_saved(&item.id).await? {
        ToggleOutcome::Committed(item) => {
            if item.is_saved {
                println!("Saved '{}'", item.title);
            } else {
                println!("Removed '{}' from saved", item.title);
            }
        }
        ToggleOutcome::RolledBack { item, reason } => {
            println!("Could not update '{}', reverted: {}", item.title, reason);
        }
    }

    Ok(())
}

pub async fn hooks(ctx: &AppContext, id: &str) -> Result<()> {
    let item = ctx.store.resolve_prefix(id)?;
    println!("Generating hooks for '{}'...", item.title);

    let hooks = ctx.hooks.generate(&item).await?;
    for hook in hooks {
        println!("\n[{}]\n{}", hook.platform, hook.text);
    }

    Ok(())
}

pub fn open(ctx: &AppContext, id: &str) -> Result<()> {
    let item = ctx.store.resolve_prefix(id)?;

    if item.url == "#" {
        println!("'{}' has no external URL", item.title);
        return Ok(());
    }

    open::that(&item.url)?;
    println!("Opened {}", item.url);
    Ok(())
}
