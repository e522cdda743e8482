use std::future::Future;
use std::sync::Arc;

use jeopardy::{select_ids, Board, Transition};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::{assemble_all, error_chain, GameConfig, Presenter, StartError, TriviaSource};

/// Handed out by [`BoardController::begin_start()`], needed to load the board.
#[derive(Clone, Debug)]
pub struct StartTicket {
    generation: u64,
    seed: u64,
    config: GameConfig,
}

impl StartTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// The result of [`load_board()`], tagged with the start attempt it belongs to.
#[derive(Debug)]
pub struct LoadedBoard {
    generation: u64,
    result: Result<Board, StartError>,
}

impl LoadedBoard {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// The board is shown and accepts clicks.
    Ready,
    /// A newer start superseded this one; its result was dropped.
    Stale,
}

/// Runs games: loads boards, shows them and handles clicks on clues.
///
/// Starting a game is split in three so that input can still be handled
/// while the network is busy:
/// 1. [`begin_start()`](Self::begin_start) tears down the previous game and
///    shows the loading state,
/// 2. [`load()`](Self::load) returns a future doing all fetches, which does not
///    borrow the controller and may run on another task,
/// 3. [`finish_start()`](Self::finish_start) commits the board, unless another
///    start began in the meantime.
///
/// [`start()`](Self::start) does all three in a row.
pub struct BoardController<S, P> {
    source: Arc<S>,
    presenter: P,
    config: GameConfig,
    rng: StdRng,
    generation: u64,
    loading: bool,
    // Clicks are only handled while this is `Some`.
    board: Option<Board>,
}

impl<S: TriviaSource + 'static, P: Presenter> BoardController<S, P> {
    pub fn new(source: Arc<S>, presenter: P, config: GameConfig, rng: StdRng) -> Self {
        Self {
            source,
            presenter,
            config,
            rng,
            generation: 0,
            loading: false,
            board: None,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The board of the current game, if one is ready.
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Discards the current game and shows the loading state.
    ///
    /// Any load still in flight from an earlier call becomes stale.
    pub fn begin_start(&mut self) -> StartTicket {
        self.generation += 1;
        if self.board.take().is_some() {
            debug!(generation = self.generation, "Discarded previous board");
        }
        self.loading = true;
        self.presenter.show_loading();
        info!(generation = self.generation, "Starting game");
        StartTicket {
            generation: self.generation,
            seed: self.rng.gen(),
            config: self.config.clone(),
        }
    }

    /// A future that loads the board for `ticket`.
    pub fn load(&self, ticket: StartTicket) -> impl Future<Output = LoadedBoard> + Send + 'static {
        load_shared(Arc::clone(&self.source), ticket)
    }

    /// Commits a loaded board, or shows why loading failed.
    ///
    /// Results of superseded starts are dropped without touching the view.
    pub fn finish_start(&mut self, loaded: LoadedBoard) -> Result<StartOutcome, StartError> {
        if loaded.generation != self.generation {
            debug!(
                stale = loaded.generation,
                current = self.generation,
                "Dropping result of superseded start"
            );
            return Ok(StartOutcome::Stale);
        }
        self.loading = false;
        match loaded.result {
            Ok(board) => {
                info!(
                    generation = self.generation,
                    columns = board.columns(),
                    rows = board.row_count(),
                    "Board ready"
                );
                self.presenter.render_board(&board);
                self.board = Some(board);
                self.presenter.hide_loading();
                Ok(StartOutcome::Ready)
            }
            Err(err) => {
                warn!(generation = self.generation, "Start failed: {}", error_chain(&err));
                self.presenter.hide_loading();
                self.presenter.show_error(&err);
                Err(err)
            }
        }
    }

    /// Starts a game and waits until it is ready or failed.
    pub async fn start(&mut self) -> Result<(), StartError> {
        let ticket = self.begin_start();
        let loaded = self.load(ticket).await;
        self.finish_start(loaded).map(|_| ())
    }

    /// Handles a click on the cell at `(col, row)`.
    ///
    /// Does nothing and returns `None` while no board is ready or if there
    /// is no such cell. Only a cell whose state changed is redrawn.
    pub fn click(&mut self, col: usize, row: usize) -> Option<Transition<'_>> {
        let board = self.board.as_mut()?;
        let transition = board.advance_reveal(col, row)?;
        if transition.changed {
            debug!(col, row, state = ?transition.state, "Revealed clue");
            self.presenter
                .render_cell_update(col, row, transition.display, transition.style);
        }
        Some(transition)
    }
}

/// Fetches the pool, picks categories, assembles them and builds the board.
pub async fn load_board<S: TriviaSource + ?Sized>(source: &S, ticket: StartTicket) -> LoadedBoard {
    LoadedBoard {
        generation: ticket.generation,
        result: build_board(source, &ticket).await,
    }
}

async fn load_shared<S: TriviaSource + ?Sized>(source: Arc<S>, ticket: StartTicket) -> LoadedBoard {
    load_board(source.as_ref(), ticket).await
}

async fn build_board<S: TriviaSource + ?Sized>(
    source: &S,
    ticket: &StartTicket,
) -> Result<Board, StartError> {
    let pool = source.list_categories(ticket.config.pool_size).await?;
    debug!(pool_size = pool.len(), "Fetched category pool");

    let ids = {
        let mut rng = StdRng::seed_from_u64(ticket.seed);
        select_ids(&pool, ticket.config.num_categories, &mut rng)?
    };
    debug!(?ids, "Selected categories");

    let categories = assemble_all(source, &ids).await?;
    let board = Board::new(categories)?;
    debug!("New board:\n{}", board);
    Ok(board)
}
