//! One function per subcommand, plus the text renderers they share.

use std::fmt::Write as _;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing::info;

use outfitvote_composer::{DayPlan, OutfitComposer};
use outfitvote_core::config::OutfitConfig;
use outfitvote_core::models::{
    parse_outfits, ClothingId, Day, ImageBlob, Notification, Outfit, VoteDirection,
};
use outfitvote_results::{summarize, ResultsSummary};
use outfitvote_workflow::{MemoryClipboard, Step, Workflow};

/// A tiny PNG header, enough to pass upload validation.
const SAMPLE_PNG: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1a, b'\n'];

/// Run the whole wizard over seeded data, voting with `votes` in order.
pub async fn demo(config: OutfitConfig, votes: &[VoteDirection]) -> anyhow::Result<()> {
    let config = OutfitConfig {
        seed_mock_data: true,
        ..config
    };
    let clipboard = Arc::new(MemoryClipboard::new());
    let mut wf = Workflow::new(config, clipboard);

    print_step(wf.step());
    let trousers = ImageBlob::new("trousers.png", "image/png", SAMPLE_PNG.to_vec());
    let result = wf.upload("Linen trousers", Some(trousers)).await;
    flush(&mut wf);
    result?;
    println!("  closet now holds {} items", wf.closet().len());

    advance(&mut wf)?;
    let day = Day::today();
    wf.start_draft(day)?;
    let picks: Vec<ClothingId> = wf
        .closet()
        .items()
        .iter()
        .rev()
        .take(2)
        .map(|item| item.id.clone())
        .collect();
    for id in &picks {
        wf.toggle(id)?;
    }
    let result = wf.save_outfit().await;
    flush(&mut wf);
    let outfit = result?;
    println!("  planned {:?} for {}", outfit.name, outfit.day);

    advance(&mut wf)?;
    for direction in votes {
        let Some(session) = wf.session() else { break };
        let (Some(progress), Some(current)) = (session.progress(), session.current()) else {
            break;
        };
        println!("  {progress}: {} -> {direction}", current.name);
        let result = wf.cast_vote(*direction);
        flush(&mut wf);
        result?;
    }

    let result = wf.share();
    flush(&mut wf);
    let link = result?;
    println!("  share link: {link}");

    advance(&mut wf)?;
    if let Some(summary) = wf.results() {
        print!("{}", render_summary(summary));
    }
    info!(event = "demo_finished", "demo finished");
    Ok(())
}

/// Rank the outfits stored in a JSON file.
pub fn rank(path: &Path, json: bool) -> anyhow::Result<()> {
    let outfits = read_outfits(path)?;
    let summary = summarize(&outfits);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render_summary(&summary));
    }
    Ok(())
}

/// Print the week plan of the mock outfits.
pub fn plan(config: &OutfitConfig) -> anyhow::Result<()> {
    let composer = OutfitComposer::seeded(config.composer.default_name_prefix.clone());
    print!("{}", render_plan(&composer.week_plan()));
    Ok(())
}

pub fn print_config(config: &OutfitConfig) -> anyhow::Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Read a JSON array of outfits. A missing `votes` field counts as zero.
pub fn read_outfits(path: &Path) -> anyhow::Result<Vec<Outfit>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_outfits(&content).with_context(|| format!("parsing {}", path.display()))
}

pub fn render_summary(summary: &ResultsSummary) -> String {
    let mut out = String::new();
    if summary.is_empty() {
        out.push_str("no outfits to rank\n");
        return out;
    }
    for entry in &summary.ranking {
        let _ = writeln!(
            out,
            "{:>2}. {:<24} {:>4} votes  ({})",
            entry.position, entry.outfit.name, entry.outfit.votes, entry.outfit.day
        );
    }
    if let Some(top) = summary.top() {
        let _ = writeln!(out, "Favourite: {}", top.name);
    }
    let _ = writeln!(out, "Total votes: {}", summary.total_votes);
    out
}

pub fn render_plan(plan: &[DayPlan]) -> String {
    let mut out = String::new();
    for entry in plan {
        match &entry.current {
            Some(outfit) if entry.outfit_count > 1 => {
                let _ = writeln!(
                    out,
                    "{:<10} {} (+{} earlier)",
                    entry.day,
                    outfit.name,
                    entry.outfit_count - 1
                );
            }
            Some(outfit) => {
                let _ = writeln!(out, "{:<10} {}", entry.day, outfit.name);
            }
            None => {
                let _ = writeln!(out, "{:<10} -", entry.day);
            }
        }
    }
    out
}

fn advance(wf: &mut Workflow) -> anyhow::Result<()> {
    let result = wf.go_next();
    flush(wf);
    print_step(result?);
    Ok(())
}

fn print_step(step: Step) {
    match step.label() {
        Some(label) => println!("{label}: {}", step.title()),
        None => println!("{}", step.title()),
    }
}

fn flush(wf: &mut Workflow) {
    for notification in wf.drain_notifications() {
        print_notification(&notification);
    }
}

fn print_notification(notification: &Notification) {
    let marker = if notification.is_error() { "!" } else { "*" };
    println!("  {marker} {}", notification.message);
}
