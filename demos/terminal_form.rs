//! Terminal Form - The card form running in a terminal
//!
//! This demo wires everything together:
//! - crossterm keys → FormHost → form events
//! - Reactive validation graph
//! - ChannelSink → DisplayState → crossterm drawing
//!
//! Tab/Shift+Tab moves between fields, Enter submits, Esc quits.
//! Set RUST_LOG=debug to get pipeline logs on stderr.
//!
//! Run with: cargo run --example terminal_form

use std::error::Error;
use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{read, Event};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use tracing_subscriber::EnvFilter;

use spark_card_form::host::to_crossterm_color;
use spark_card_form::{
    CardForm, ChannelSink, DisplayState, FieldId, FormConfig, FormHost, HostAction,
};

fn main() -> Result<(), Box<dyn Error>> {
    if std::env::var_os("RUST_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .init();
    }

    let theme = FormConfig::from_env().resolve_theme()?;
    let form = CardForm::new(theme);

    let (sink, rx) = ChannelSink::new();
    let handle = form.mount(sink);

    let mut host = FormHost::new();
    host.focus_next(&form);

    let mut out = io::stdout();
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen, Hide)?;

    let result = run(&mut out, &form, &mut host, &rx);

    execute!(out, Show, LeaveAlternateScreen)?;
    disable_raw_mode()?;
    handle.unmount();

    if let Some(message) = result? {
        println!("{message}");
    }
    Ok(())
}

fn run(
    out: &mut Stdout,
    form: &CardForm,
    host: &mut FormHost,
    rx: &std::sync::mpsc::Receiver<spark_card_form::DisplayUpdate>,
) -> io::Result<Option<String>> {
    let mut display = DisplayState::default();
    let mut status = String::from("Tab: next field  Enter: submit  Esc: quit");

    loop {
        display.drain(rx);
        draw(out, host, &display, &status)?;

        let Event::Key(key) = read()? else {
            continue;
        };

        match host.handle_key(form, key) {
            HostAction::Quit => return Ok(None),
            HostAction::Submit => match form.submit() {
                Ok(submission) => {
                    host.clear_focus(form);
                    return Ok(Some(format!("Submitted {submission:?}")));
                }
                Err(err) => status = err.to_string().lines().next().unwrap_or_default().to_string(),
            },
            HostAction::Continue => {}
        }
    }
}

fn draw(out: &mut Stdout, host: &FormHost, display: &DisplayState, status: &str) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(2, 1))?;
    queue!(out, SetAttribute(Attribute::Bold), Print("Card details"), SetAttribute(Attribute::Reset))?;

    for (row, field) in FieldId::ALL.into_iter().enumerate() {
        let y = 3 + row as u16 * 2;
        let marker = if host.focused() == Some(field) { ">" } else { " " };
        queue!(
            out,
            MoveTo(2, y),
            Print(format!("{marker} {:<20}", field.label())),
            SetForegroundColor(to_crossterm_color(display.field_color(field))),
            Print(host.text(field)),
            ResetColor,
        )?;
    }

    queue!(out, MoveTo(4, 10), Print(format!("Card type: {}", display.card_type_label)))?;

    let button = if display.submit_enabled {
        SetAttribute(Attribute::Bold)
    } else {
        SetAttribute(Attribute::Dim)
    };
    queue!(out, MoveTo(4, 12), button, Print("[ Submit ]"), SetAttribute(Attribute::Reset))?;

    for (i, line) in display.error_text.lines().enumerate() {
        queue!(out, MoveTo(4, 14 + i as u16), Print(line))?;
    }

    queue!(out, MoveTo(2, 19), SetAttribute(Attribute::Dim), Print(status), SetAttribute(Attribute::Reset))?;
    out.flush()
}
