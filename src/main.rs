//! splitpane - Terminal Screen-Region Layout Engine
//!
//! Demo binary: a status bar over a side-by-side list and detail panel, redrawn on a fixed tick.

use anyhow::{Context, Result};
use clap::{value_parser, Arg, Command};
use ratatui::crossterm::event::KeyCode;
use ratatui::style::{Color, Modifier, Style};
use splitpane::config::parse_key;
use splitpane::{
    painter, DriveConfig, DriveLoop, InputEvent, Painter, Region, ScreenHost, SplitSpec,
    TerminalHost,
};
use std::time::Duration;

const ITEMS: &[&str] = &[
    "layout/region.rs",
    "layout/split.rs",
    "render/dispatch.rs",
    "render/surface.rs",
    "render/terminal.rs",
    "app/drive.rs",
    "app/actions.rs",
    "config.rs",
];

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("splitpane")
        .version(splitpane::VERSION)
        .about("A terminal screen-region layout engine demo")
        .long_about(
            "splitpane splits the terminal into a tree of regions and redraws every leaf on a \
             fixed tick. PageUp/PageDown change the tick; the exit key (Delete by default) \
             or Ctrl+C quits.",
        )
        .arg(
            Arg::new("tick-ms")
                .long("tick-ms")
                .help("Initial tick interval in milliseconds")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("exit-key")
                .long("exit-key")
                .help("Key that stops the loop (e.g. q, esc, delete, f10)"),
        )
        .arg(
            Arg::new("status-lines")
                .long("status-lines")
                .help("Height of the status bar")
                .default_value("1")
                .value_parser(value_parser!(u16)),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a TOML configuration file"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file instead of stderr"),
        )
        .get_matches();

    init_logging(matches.get_one::<String>("log-file"))?;

    let mut config = load_config(matches.get_one::<String>("config"))?;
    if let Some(ms) = matches.get_one::<u64>("tick-ms") {
        config = config.with_tick(Duration::from_millis(*ms));
    }
    if let Some(name) = matches.get_one::<String>("exit-key") {
        config = config.with_exit_key(parse_key(name)?);
    }
    let config = config.validate()?;
    let status_lines = matches
        .get_one::<u16>("status-lines")
        .copied()
        .unwrap_or(1);

    let host = TerminalHost::new();
    let bounds = host.bounds().context("cannot read terminal size")?;
    let root = build_layout(Region::new(bounds), status_lines)?;

    let drive = DriveLoop::new(host, root, &config);
    let drive = drive.spawn().await??;
    log::info!(
        "exited after {} iterations at {:?} per tick",
        drive.state().iterations(),
        drive.state().tick()
    );

    Ok(())
}

fn init_logging(log_file: Option<&String>) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    if let Some(path) = log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("cannot create log file {path}"))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
        if std::env::var_os("RUST_LOG").is_none() {
            builder.filter_level(log::LevelFilter::Info);
        }
    }
    builder.init();
    Ok(())
}

#[cfg(feature = "config")]
fn load_config(path: Option<&String>) -> Result<DriveConfig> {
    use std::path::Path;

    match path {
        Some(path) => Ok(DriveConfig::load(Path::new(path))?),
        None => match DriveConfig::default_path() {
            Some(default) if default.exists() => Ok(DriveConfig::load(&default)?),
            _ => Ok(DriveConfig::default()),
        },
    }
}

#[cfg(not(feature = "config"))]
fn load_config(path: Option<&String>) -> Result<DriveConfig> {
    if let Some(path) = path {
        anyhow::bail!("cannot read {path}: built without the `config` feature");
    }
    Ok(DriveConfig::default())
}

/// Status bar on top, list on the left, details on the right.
fn build_layout(mut root: Region, status_lines: u16) -> Result<Region> {
    let (_, body) = root.split(
        SplitSpec::stacked()
            .primary(status_lines)
            .first_painter(status_bar()),
    )?;
    body.split(SplitSpec::side_by_side().painters(item_list(), details()))?;
    Ok(root)
}

fn status_bar() -> Box<dyn Painter> {
    let style = Style::default().fg(Color::White).bg(Color::Green);
    painter(move |pane, event| {
        let blank = " ".repeat(usize::from(pane.width()));
        for row in 0..pane.height() {
            pane.write_styled(row, 0, &blank, style);
        }
        pane.write_styled(0, 1, "splitpane", style.add_modifier(Modifier::BOLD));
        let key = match event {
            InputEvent::NoInput => String::from("-"),
            InputEvent::Key(key) => format!("{:?}", key.code),
        };
        pane.write_styled(0, 12, &format!("PgUp/PgDn tick  last key: {key}"), style);
        Ok(())
    })
}

fn item_list() -> Box<dyn Painter> {
    let mut selected = 0usize;
    painter(move |pane, event| {
        match event.code() {
            Some(KeyCode::Up) => selected = selected.saturating_sub(1),
            Some(KeyCode::Down) => selected = (selected + 1).min(ITEMS.len() - 1),
            _ => {}
        }
        pane.write_styled(0, 1, "Files", Style::default().add_modifier(Modifier::UNDERLINED));
        for (index, item) in ITEMS.iter().enumerate() {
            let style = if index == selected {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let row = u16::try_from(index + 2).unwrap_or(u16::MAX);
            pane.write_styled(row, 2, item, style);
        }
        Ok(())
    })
}

fn details() -> Box<dyn Painter> {
    let mut frames = 0u64;
    painter(move |pane, _| {
        frames += 1;
        let area = pane.area();
        pane.write(1, 1, &format!("Region: {area}"));
        pane.write(2, 1, &format!("Cells:  {}", u32::from(area.width) * u32::from(area.height)));
        pane.write(3, 1, &format!("Frames: {frames}"));
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!splitpane::VERSION.is_empty());
    }

    #[test]
    fn demo_layout_tiles_the_screen() {
        let screen = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let root = build_layout(Region::new(screen), 1).unwrap();
        assert_eq!(
            root.leaf_bounds(),
            vec![
                Rect {
                    x: 0,
                    y: 0,
                    width: 80,
                    height: 1
                },
                Rect {
                    x: 0,
                    y: 1,
                    width: 40,
                    height: 23
                },
                Rect {
                    x: 40,
                    y: 1,
                    width: 40,
                    height: 23
                },
            ]
        );
    }

    #[test]
    fn oversized_status_bar_is_rejected() {
        let screen = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        assert!(build_layout(Region::new(screen), 30).is_err());
    }
}
