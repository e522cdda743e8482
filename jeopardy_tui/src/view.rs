use jeopardy::{Board, CellStyle};
use jeopardy_client::{error_chain, Presenter, StartError};
use ratatui::{prelude::*, widgets::*};

const STATUS_HEIGHT: u16 = 3;
const TITLE_HEIGHT: u16 = 4;

struct CellView {
    text: String,
    style: CellStyle,
}

/// Everything the terminal shows, kept up to date by the controller.
#[derive(Default)]
pub struct Screen {
    titles: Vec<String>,
    // Indexed by column, then row
    cells: Vec<Vec<CellView>>,
    loading: bool,
    started: bool,
    error: Option<String>,
    cursor: (usize, usize),
}

impl Screen {
    pub fn columns(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// The label of the start button.
    pub fn start_label(&self) -> &'static str {
        if self.loading {
            "loading..."
        } else if self.started {
            "restart"
        } else {
            "start"
        }
    }

    /// The cell under the cursor, if a board is shown.
    pub fn selected(&self) -> Option<(usize, usize)> {
        (self.rows() > 0).then_some(self.cursor)
    }

    pub fn move_cursor(&mut self, d_col: isize, d_row: isize) {
        if self.rows() == 0 {
            return;
        }
        let clamp = |value: usize, delta: isize, len: usize| {
            value.saturating_add_signed(delta).min(len - 1)
        };
        self.cursor = (
            clamp(self.cursor.0, d_col, self.columns()),
            clamp(self.cursor.1, d_row, self.rows()),
        );
    }

    pub fn select(&mut self, col: usize, row: usize) {
        if col < self.columns() && row < self.rows() {
            self.cursor = (col, row);
        }
    }
}

impl Presenter for Screen {
    fn show_loading(&mut self) {
        self.titles.clear();
        self.cells.clear();
        self.error = None;
        self.loading = true;
        self.started = true;
    }

    fn hide_loading(&mut self) {
        self.loading = false;
    }

    fn render_board(&mut self, board: &Board) {
        self.titles = board.titles().map(str::to_uppercase).collect();
        self.cells = board
            .categories()
            .iter()
            .map(|category| {
                category
                    .clues()
                    .iter()
                    .map(|clue| CellView {
                        text: clue.display().to_string(),
                        style: CellStyle::for_state(clue.reveal()),
                    })
                    .collect()
            })
            .collect();
        self.cursor = (0, 0);
    }

    fn render_cell_update(&mut self, col: usize, row: usize, text: &str, style: CellStyle) {
        if let Some(cell) = self.cells.get_mut(col).and_then(|column| column.get_mut(row)) {
            cell.text = text.to_string();
            cell.style = style;
        }
    }

    fn show_error(&mut self, err: &StartError) {
        self.error = Some(error_chain(err));
    }
}

/// Where each part of the screen goes.
pub struct ScreenLayout {
    pub status: Rect,
    pub titles: Vec<Rect>,
    // Indexed by column, then row
    pub cells: Vec<Vec<Rect>>,
}

impl ScreenLayout {
    pub fn new(area: Rect, columns: usize, rows: usize) -> Self {
        let main_layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(STATUS_HEIGHT),
                Constraint::Length(TITLE_HEIGHT),
                Constraint::Min(0),
            ],
        )
        .split(area);
        let split_columns = |area: Rect| {
            Layout::new(
                Direction::Horizontal,
                vec![Constraint::Ratio(1, columns.max(1) as u32); columns],
            )
            .split(area)
        };

        let titles = split_columns(main_layout[1]).to_vec();
        let cells = split_columns(main_layout[2])
            .iter()
            .map(|&column_area| {
                Layout::new(
                    Direction::Vertical,
                    vec![Constraint::Ratio(1, rows.max(1) as u32); rows],
                )
                .split(column_area)
                .to_vec()
            })
            .collect();

        Self {
            status: main_layout[0],
            titles,
            cells,
        }
    }

    /// Finds the cell containing a terminal position.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        self.cells.iter().enumerate().find_map(|(col, column)| {
            column
                .iter()
                .position(|r| x >= r.x && x < r.x + r.width && y >= r.y && y < r.y + r.height)
                .map(|row| (col, row))
        })
    }
}

struct StatusWidget<'a> {
    screen: &'a Screen,
}

impl Widget for StatusWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                format!(" [s] {} ", self.screen.start_label()),
                Style::new().bold().reversed(),
            ),
            Span::raw("  "),
        ];
        if let Some(err) = &self.screen.error {
            spans.push(Span::styled(err.as_str(), Style::new().fg(Color::Red)));
        } else if self.screen.loading {
            spans.push(Span::raw("Fetching categories…"));
        } else if self.screen.rows() > 0 {
            spans.push(Span::raw("←↑↓→ move · enter reveal · q quit"));
        } else {
            spans.push(Span::raw("Press s to start a game · q quit"));
        }
        Paragraph::new(Line::from(spans))
            .block(Block::new().borders(Borders::BOTTOM))
            .render(area, buf);
    }
}

pub fn draw(frame: &mut Frame, screen: &Screen) {
    let layout = ScreenLayout::new(frame.size(), screen.columns(), screen.rows());
    frame.render_widget(StatusWidget { screen }, layout.status);

    for (title, &area) in screen.titles.iter().zip(&layout.titles) {
        let block = Block::new()
            .border_type(BorderType::Double)
            .borders(Borders::all());
        frame.render_widget(
            Paragraph::new(title.as_str())
                .bold()
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );
    }

    for (col, column) in screen.cells.iter().enumerate() {
        for (row, cell) in column.iter().enumerate() {
            let mut block = Block::new()
                .border_type(BorderType::Rounded)
                .borders(Borders::all());
            if screen.selected() == Some((col, row)) {
                block = block.border_style(Style::new().fg(Color::Yellow).bold());
            }
            let style = match cell.style {
                CellStyle::Answered => Style::new().bg(Color::Green).fg(Color::Black),
                CellStyle::Unanswered => Style::new(),
            };
            frame.render_widget(
                Paragraph::new(cell.text.as_str())
                    .style(style)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(block),
                layout.cells[col][row],
            );
        }
    }
}
