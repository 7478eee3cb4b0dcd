use anyhow::Context;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use glyphtrace::config::Config;
use glyphtrace::glyphs::GlyphCatalog;
use glyphtrace::replay::Trace;
use glyphtrace::score::CompletionState;
use glyphtrace::session::TraceSession;

#[derive(Parser, Debug)]
#[command(name = "glyphtrace")]
#[command(version, about = "Kana tracing practice with pressure-sensitive pen input")]
struct Cli {
    /// List available glyphs and exit
    #[arg(long, short = 'l', action = ArgAction::SetTrue)]
    list: bool,

    /// Replay a recorded pointer trace (JSON) through the session
    #[arg(long, short = 'r', value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Glyph index to practice
    #[arg(long, short = 'g', value_name = "INDEX", default_value_t = 0)]
    glyph: usize,

    /// Use the katakana catalog instead of hiragana
    #[arg(long, short = 'k', action = ArgAction::SetTrue)]
    katakana: bool,

    /// Tick interval in milliseconds used when replaying
    #[arg(long, value_name = "MS", default_value_t = 16)]
    tick_ms: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("glyphtrace {}", env!("CARGO_PKG_VERSION"));

    let catalog = if cli.katakana {
        GlyphCatalog::katakana()
    } else {
        GlyphCatalog::hiragana()
    };

    if cli.list {
        println!("Glyphs in the {} catalog:", catalog.name());
        for id in 0..catalog.len() {
            if let Some(target) = catalog.target(id) {
                println!("  {id:>3}  {}  ({})", target.glyph, target.romaji);
            }
        }
        return Ok(());
    }

    if let Some(path) = &cli.replay {
        let config = Config::load()?;
        let tick_ms = cli.tick_ms.max(1);

        let trace = Trace::load(path)
            .with_context(|| format!("Failed to load trace from {}", path.display()))?;
        log::info!(
            "Replaying {} samples over {}ms",
            trace.samples().len(),
            trace.end_ms()
        );

        let mut session = TraceSession::new(&config, catalog);
        if cli.glyph != 0 {
            session.change_glyph(cli.glyph);
        }
        match session.current_target() {
            Some(target) => println!("Tracing {} ({})", target.glyph, target.romaji),
            None => println!(
                "Glyph index {} is not in the catalog; drawing without scoring",
                cli.glyph
            ),
        }

        let end_tick = trace.end_ms() / tick_ms;
        let mut samples = trace.samples().iter().peekable();
        for tick in 0..=end_tick {
            let deadline = (tick + 1) * tick_ms;
            let mut batch = Vec::new();
            while let Some(sample) = samples.next_if(|s| s.timestamp_ms() < deadline) {
                batch.push(sample.to_pointer());
            }

            let report = session.tick(&batch, deadline);
            if let Some(event) = report.completed {
                println!(
                    "Completed! Glyph {} covered {:.1}% of its guide",
                    event.glyph_id,
                    event.coverage * 100.0
                );
            }
        }

        // One quiet tick past the timeout closes any stroke the trace left
        // open.
        let report = session.tick(
            &[],
            (end_tick + 1) * tick_ms + config.pen.timeout_ms,
        );

        println!(
            "Coverage: {:.1}% across {} stroke(s)",
            report.coverage * 100.0,
            session.stroke_count()
        );
        if session.completion_state() != CompletionState::Completed {
            println!("Not completed (threshold {:.0}%)", config.completion.threshold * 100.0);
        }
        if !session.pen_seen() {
            println!("No pen samples in this trace; only a pen can draw ink");
        }
    } else {
        println!("glyphtrace: kana tracing practice with pressure-sensitive pen input");
        println!();
        println!("Usage:");
        println!("  glyphtrace --list              List glyphs in the hiragana catalog");
        println!("  glyphtrace --list --katakana   List glyphs in the katakana catalog");
        println!("  glyphtrace --replay FILE       Replay a recorded pointer trace");
        println!("  glyphtrace --help              Show help");
        println!();
        println!("Replay traces are JSON arrays of pointer samples:");
        println!(r#"  [{{"device": "pen", "t": 0, "x": 100.0, "y": 120.0, "pressure": 0.6}}, ...]"#);
    }

    Ok(())
}
