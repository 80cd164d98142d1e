//! Interactive terminal demo for the dropdown widget.
//!
//! Usage: `dropkit-demo [config.json]`. Without an argument the config is
//! read from the platform config directory, falling back to a built-in list.
//! Ctrl+C or Ctrl+Q quits.

mod paths;
mod render;

use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style::Print};
use dropkit::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

use crate::render::{Line, render};

/// Rows above the widget used for the status text.
const HEADER_ROWS: u16 = 2;

#[derive(Debug, Error)]
enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Terminal error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), DemoError> {
    init_logging()?;
    let config = load_config()?;

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    with_terminal(
        || execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, cursor::Hide),
        || event_loop(&mut stdout, config),
        || {
            let left = execute!(
                io::stdout(),
                cursor::Show,
                DisableMouseCapture,
                LeaveAlternateScreen
            );
            let raw = terminal::disable_raw_mode();
            left.and(raw)
        },
    )
}

/// Run `body` inside the terminal set up by `enter`. `leave` runs even when
/// `enter` or `body` fails; the first error wins.
fn with_terminal<T>(
    enter: impl FnOnce() -> io::Result<()>,
    body: impl FnOnce() -> Result<T, DemoError>,
    leave: impl FnOnce() -> io::Result<()>,
) -> Result<T, DemoError> {
    let result = enter().map_err(DemoError::from).and_then(|()| body());
    let restored = leave();
    let value = result?;
    restored?;
    Ok(value)
}

fn init_logging() -> Result<(), DemoError> {
    let path = match paths::log_file() {
        Some(path) => {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir)?;
            }
            path
        }
        None => PathBuf::from("dropkit-demo.log"),
    };
    let log_file = File::create(&path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;
    log::info!("Logging to {}", path.display());
    Ok(())
}

fn load_config() -> Result<DropdownConfig, DemoError> {
    if let Some(path) = std::env::args().nth(1) {
        log::info!("Loading config from {}", path);
        return Ok(DropdownConfig::load(path)?);
    }
    match paths::config_file() {
        Some(path) if path.exists() => {
            log::info!("Loading config from {}", path.display());
            Ok(DropdownConfig::load(path)?)
        }
        _ => Ok(default_config()),
    }
}

fn default_config() -> DropdownConfig {
    let fruits = [
        ("Apple", "apple"),
        ("Banana", "banana"),
        ("Cherry", "cherry"),
        ("Date", "date"),
        ("Elderberry", "elderberry"),
        ("Fig", "fig"),
        ("Grape", "grape"),
    ];
    DropdownConfig::new()
        .options(
            fruits
                .iter()
                .map(|(label, value)| DropdownOption::new(*label, *value)),
        )
        .placeholder("Pick some fruit")
        .multi_select()
        .max_selections(3)
        .searchable()
        .clearable()
}

fn event_loop(stdout: &mut io::Stdout, config: DropdownConfig) -> Result<(), DemoError> {
    // The demo is the dropdown's owner: changes land here and are fed back.
    let pending: Rc<RefCell<Option<SelectionValue>>> = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&pending);
    let mut dropdown = Dropdown::new(
        config,
        Box::new(move |value| *sink.borrow_mut() = Some(value)),
    );

    let mut lines = draw(stdout, &dropdown)?;
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q')) {
                    break;
                }
                dropdown.handle_key(Key::from(key.code), Modifiers::from(key.modifiers));
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let target = mouse
                    .row
                    .checked_sub(HEADER_ROWS)
                    .and_then(|row| lines.get(usize::from(row)))
                    .and_then(|line| line.target_at(usize::from(mouse.column)));
                dropdown.handle_click(target);
            }
            _ => {}
        }

        if let Some(value) = pending.borrow_mut().take() {
            dropdown.set_value(value);
        }
        lines = draw(stdout, &dropdown)?;
    }

    log::info!("Final selection: {:?}", dropdown.value());
    Ok(())
}

fn draw(stdout: &mut io::Stdout, dropdown: &Dropdown) -> io::Result<Vec<Line>> {
    let lines = render(&dropdown.view());

    queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    queue!(
        stdout,
        Print("dropkit demo - arrows, Enter, Space, Esc, type to search. Ctrl+Q quits.")
    )?;
    for (row, line) in (HEADER_ROWS..).zip(&lines) {
        queue!(stdout, cursor::MoveTo(0, row), Print(line.text()))?;
    }
    stdout.flush()?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_terminal_restored_when_setup_fails() {
        let ran_body = Cell::new(false);
        let restored = Cell::new(false);

        let result: Result<(), DemoError> = with_terminal(
            || Err(io::Error::other("no alternate screen")),
            || {
                ran_body.set(true);
                Ok(())
            },
            || {
                restored.set(true);
                Ok(())
            },
        );

        assert!(matches!(result, Err(DemoError::Io(_))));
        assert!(!ran_body.get());
        assert!(restored.get());
    }

    #[test]
    fn test_terminal_restored_after_body_error() {
        let restored = Cell::new(false);

        let result: Result<(), DemoError> = with_terminal(
            || Ok(()),
            || Err(DemoError::Config(ConfigError::ZeroMaxSelections)),
            || {
                restored.set(true);
                Err(io::Error::other("leave failed"))
            },
        );

        assert!(matches!(result, Err(DemoError::Config(_))));
        assert!(restored.get());
    }
}
