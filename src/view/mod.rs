//! Terminal front end (impure shell).
//!
//! Renders the core state with ratatui and feeds crossterm key, mouse and
//! resize events back into it. The app owns the store and the panel and
//! listens to both through their observer lists; notifications are forwarded
//! into a channel and applied once per loop iteration.

mod console_view;
mod demo;
pub mod layout;
mod pull_up_bar;
mod styles;

pub use console_view::{ConsoleScroll, ConsoleView};
pub use demo::DemoContent;
pub use layout::{compute_layout, hit_test, HitTarget, PanelLayout};
pub use pull_up_bar::PullUpBar;
pub use styles::{ColorConfig, ConsoleStyles};

use crate::console::{ConsoleHandle, ConsoleInbox};
use crate::model::Severity;
use crate::state::{MessageStore, PanelEvent, PanelState, StoreEvent};
use crossterm::{
    event::{
        self, Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, widgets::Clear, Terminal};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Tick for draining background messages and pulsing the unread hint.
const TICK_INTERVAL: Duration = Duration::from_millis(500);

/// Rows scrolled per wheel notch or page key.
const SCROLL_STEP: usize = 3;

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Notification forwarded from the core to the event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
enum UiSignal {
    Store(StoreEvent),
    Panel(PanelEvent),
}

/// Startup options for the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewOptions {
    /// Prefix messages with their time.
    pub show_timestamps: bool,
    /// Color scheme switch.
    pub colors: ColorConfig,
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    store: MessageStore,
    panel: PanelState,
    console: ConsoleHandle,
    inbox: ConsoleInbox,
    signals: Receiver<UiSignal>,
    scroll: ConsoleScroll,
    styles: ConsoleStyles,
    show_timestamps: bool,
    /// Unread hint blink state, toggled on timer ticks
    pulse_on: bool,
    /// Messages sent from the demo keys
    counter: u64,
    /// Pointer row of the last applied drag movement
    drag_row: Option<u16>,
    /// Regions of the last drawn frame (for mouse hit-testing)
    last_layout: Option<PanelLayout>,
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Wire the core into a terminal.
    ///
    /// Subscribes to store and panel notifications and reports the terminal
    /// height to the panel.
    pub fn new(
        terminal: Terminal<B>,
        mut store: MessageStore,
        mut panel: PanelState,
        console: ConsoleHandle,
        inbox: ConsoleInbox,
        options: ViewOptions,
    ) -> Result<Self, TuiError> {
        let (sender, signals) = mpsc::channel();

        let store_sender = sender.clone();
        store.subscribe(move |event| {
            let _ = store_sender.send(UiSignal::Store(*event));
        });
        panel.subscribe(move |event| {
            let _ = sender.send(UiSignal::Panel(*event));
        });

        let size = terminal.size()?;
        panel.set_screen_height(f64::from(size.height));

        Ok(Self {
            terminal,
            store,
            panel,
            console,
            inbox,
            signals,
            scroll: ConsoleScroll::default(),
            styles: ConsoleStyles::with_color_config(options.colors),
            show_timestamps: options.show_timestamps,
            pulse_on: false,
            counter: 0,
            drag_row: None,
            last_layout: None,
        })
    }

    /// Run the main event loop
    ///
    /// Returns when user quits (q or Ctrl+C)
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.console
            .log_with(Severity::Debug, || format!("help! {} printed from Log", 7 * 6));
        self.sync();
        self.draw()?;

        loop {
            if event::poll(TICK_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.handle_key(key) {
                            return Ok(());
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    Event::Resize(width, height) => self.handle_resize(width, height),
                    _ => {}
                }
            } else {
                self.tick();
            }

            self.sync();
            self.draw()?;
        }
    }

    /// Handle a single keyboard event
    ///
    /// Returns true if app should quit
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('i') => {
                let n = self.next_count();
                self.console.log_with(Severity::Info, || {
                    format!("Log {n}. Press s to see time of log")
                });
            }
            KeyCode::Char('t') => {
                let n = self.next_count();
                self.console.log_with(Severity::Trace, || {
                    format!("Tracing counter.{n} (press s to see time of trace)")
                });
            }
            KeyCode::Char('d') => {
                let n = self.next_count();
                self.console.log_with(Severity::Debug, || {
                    format!("Debugger's Log. Stardate 4523.3{n}")
                });
            }
            KeyCode::Char(' ') => self.panel.tap(),
            KeyCode::Char('+') | KeyCode::Char('k') => self.keyboard_drag(-1.0),
            KeyCode::Char('-') | KeyCode::Char('j') => self.keyboard_drag(1.0),
            KeyCode::Char('s') => self.show_timestamps = !self.show_timestamps,
            KeyCode::PageUp | KeyCode::Up => self.scroll.scroll_up(SCROLL_STEP, &self.store),
            KeyCode::PageDown | KeyCode::Down => self.scroll.scroll_down(SCROLL_STEP),
            KeyCode::End => self.scroll.to_bottom(),
            _ => {}
        }

        false
    }

    /// Handle a single mouse event
    ///
    /// Handle click taps the panel, a press on the bar starts a drag, and the
    /// wheel scrolls the list while the pointer is over it.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let target = self
            .last_layout
            .map(|layout| hit_test(&layout, mouse.column, mouse.row))
            .unwrap_or(HitTarget::Content);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => match target {
                HitTarget::Handle => self.panel.tap(),
                HitTarget::Bar => {
                    self.panel.drag_begin();
                    self.drag_row = Some(mouse.row);
                }
                HitTarget::Console | HitTarget::Content => {}
            },
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(last) = self.drag_row {
                    let delta = f64::from(mouse.row) - f64::from(last);
                    self.panel.drag_update(delta);
                    self.drag_row = Some(mouse.row);
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.drag_row.take().is_some() {
                    self.panel.drag_end();
                }
            }
            MouseEventKind::ScrollUp if target == HitTarget::Console => {
                self.scroll.scroll_up(SCROLL_STEP, &self.store);
            }
            MouseEventKind::ScrollDown if target == HitTarget::Console => {
                self.scroll.scroll_down(SCROLL_STEP);
            }
            _ => {}
        }
    }

    /// Handle a terminal resize event
    fn handle_resize(&mut self, width: u16, height: u16) {
        debug!("Handling resize to {}x{}", width, height);
        self.panel.set_screen_height(f64::from(height));
    }

    /// One-row resize driven from the keyboard, as a complete drag gesture.
    fn keyboard_drag(&mut self, delta: f64) {
        self.panel.drag_begin();
        self.panel.drag_update(delta);
        self.panel.drag_end();
    }

    /// Timer tick: blink the unread hint while the panel is closed.
    fn tick(&mut self) {
        self.pulse_on = !self.panel.is_open() && self.store.has_unread() && !self.pulse_on;
    }

    fn next_count(&mut self) -> u64 {
        self.counter += 1;
        self.counter
    }

    /// Pull pending messages into the store and react to notifications.
    fn sync(&mut self) {
        let drained = self.inbox.drain_into(&mut self.store);
        if drained > 0 {
            debug!(drained, "moved console messages into store");
        }

        while let Ok(signal) = self.signals.try_recv() {
            match signal {
                UiSignal::Store(StoreEvent::Appended(id)) => self.scroll.follow(id),
                UiSignal::Panel(
                    PanelEvent::Opened { .. }
                    | PanelEvent::Closed
                    | PanelEvent::DragPhaseChanged(_),
                ) => self.scroll.to_bottom(),
                UiSignal::Panel(PanelEvent::Resized { .. }) => {}
            }
        }

        if self.panel.is_open() {
            self.store.mark_read();
            self.pulse_on = false;
        }
    }

    /// Render the current frame
    fn draw(&mut self) -> Result<(), TuiError> {
        let size = self.terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);
        let layout = compute_layout(area, &self.panel);
        self.last_layout = Some(layout);

        let bottom_index = self.scroll.bottom_index(&self.store);
        let hint = (self.pulse_on && self.store.has_unread()).then(|| self.store.unread_count());

        self.terminal.draw(|frame| {
            frame.render_widget(DemoContent::new(self.counter), layout.content);

            if layout.console.height > 0 {
                frame.render_widget(Clear, layout.console);
                frame.render_widget(
                    ConsoleView::new(
                        self.store.entries(),
                        bottom_index,
                        self.show_timestamps,
                        &self.styles,
                    ),
                    layout.console,
                );
            }

            frame.render_widget(Clear, layout.bar);
            let mut bar = PullUpBar::new(
                layout.handle,
                self.panel.is_open(),
                self.panel.is_dragging(),
                &self.styles,
            );
            if let Some(unread) = hint {
                bar = bar.unread_hint(unread);
            }
            frame.render_widget(bar, layout.bar);
        })?;

        Ok(())
    }
}

/// Initialize and run the TUI application
///
/// Handles terminal setup, runs the event loop, and restores the terminal on
/// exit, including when the loop fails.
///
/// Note: Logging must be initialized by caller before calling this function.
pub fn run(
    store: MessageStore,
    panel: PanelState,
    console: ConsoleHandle,
    inbox: ConsoleInbox,
    options: ViewOptions,
) -> Result<(), TuiError> {
    let terminal = setup_terminal()?;
    let result = TuiApp::new(terminal, store, panel, console, inbox, options)
        .and_then(|mut app| app.run());

    restore_terminal()?;

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(crossterm::event::EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Restore terminal to normal state
///
/// Disables raw mode, mouse capture, and leaves alternate screen
fn restore_terminal() -> Result<(), TuiError> {
    disable_raw_mode()?;
    io::stdout().execute(crossterm::event::DisableMouseCapture)?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
