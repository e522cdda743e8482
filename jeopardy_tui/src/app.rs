use std::time::Duration;

use jeopardy_client::{BoardController, LoadedBoard, TriviaSource};
use ratatui::crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tracing::{debug, trace};

use crate::terminal::Tui;
use crate::view::{draw, Screen, ScreenLayout};

const FRAME_DURATION: Duration = Duration::from_millis(16);

/// The UI loop. Input is handled on this thread one event at a time;
/// only the loads run on the tokio runtime.
pub struct App<S> {
    controller: BoardController<S, Screen>,
    runtime: Handle,
    loaded_tx: UnboundedSender<LoadedBoard>,
    loaded_rx: UnboundedReceiver<LoadedBoard>,
}

impl<S: TriviaSource + 'static> App<S> {
    pub fn new(controller: BoardController<S, Screen>, runtime: Handle) -> Self {
        let (loaded_tx, loaded_rx) = unbounded_channel();
        Self {
            controller,
            runtime,
            loaded_tx,
            loaded_rx,
        }
    }

    pub fn run(&mut self, terminal: &mut Tui) -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| draw(frame, self.controller.presenter()))?;

            while let Ok(loaded) = self.loaded_rx.try_recv() {
                // Failures have already been shown by the controller.
                if let Ok(outcome) = self.controller.finish_start(loaded) {
                    debug!(?outcome, "Load finished");
                }
            }

            if event::poll(FRAME_DURATION)? {
                let should_quit = match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    Event::Mouse(mouse) => {
                        self.handle_mouse(mouse, terminal.size()?);
                        false
                    }
                    _ => false,
                };
                if should_quit {
                    return Ok(());
                }
            }
        }
    }

    /// Starts a game; its board arrives later through the channel.
    fn start(&mut self) {
        let ticket = self.controller.begin_start();
        let load = self.controller.load(ticket);
        let loaded_tx = self.loaded_tx.clone();
        self.runtime.spawn(async move {
            // The receiver only goes away when the app quits.
            let _ = loaded_tx.send(load.await);
        });
    }

    fn reveal_selected(&mut self) {
        if let Some((col, row)) = self.controller.presenter().selected() {
            self.controller.click(col, row);
        }
    }

    // Returns whether to quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        trace!(code = ?key.code, "Key pressed");
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('s') | KeyCode::Char('r') => self.start(),
            KeyCode::Enter | KeyCode::Char(' ') => self.reveal_selected(),
            KeyCode::Left | KeyCode::Char('h') => self.controller.presenter_mut().move_cursor(-1, 0),
            KeyCode::Right | KeyCode::Char('l') => self.controller.presenter_mut().move_cursor(1, 0),
            KeyCode::Up | KeyCode::Char('k') => self.controller.presenter_mut().move_cursor(0, -1),
            KeyCode::Down | KeyCode::Char('j') => self.controller.presenter_mut().move_cursor(0, 1),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: ratatui::layout::Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let screen = self.controller.presenter();
        let layout = ScreenLayout::new(area, screen.columns(), screen.rows());
        if let Some((col, row)) = layout.cell_at(mouse.column, mouse.row) {
            self.controller.presenter_mut().select(col, row);
            self.controller.click(col, row);
        } else if mouse.row < layout.status.y + layout.status.height {
            // The status bar doubles as the start button.
            self.start();
        }
    }
}
