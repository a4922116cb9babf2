//! Game state module - the controller that owns one game session.
//!
//! Ties together board, pieces, RNG, and scoring. The controller owns the
//! active and next piece, every timer (gravity, level-up, held-key
//! repeat), and the pause/game-over flags. All engine mutation flows
//! through `handle_key_down`, `handle_key_up`, and `tick`; presentation
//! code only reads snapshots.

use crate::board::Board;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scoring::line_clear_score;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use crate::types::{
    GameAction, HeldDir, PieceKind, BASE_FALL_MS, FALL_STEP_MS, KEY_REPEAT_DELAY_MS,
    KEY_REPEAT_INTERVAL_MS, LEVEL_UP_MS, MIN_FALL_MS,
};

/// Auto-repeat state for one held movement key.
///
/// A press fires its movement once immediately (outside this struct);
/// holding past the repeat delay re-fires it at the repeat interval.
#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    held: bool,
    /// Time accumulated since the press, saturating at the repeat delay
    delay_ms: u32,
    /// Time accumulated toward the next repeat once the delay elapsed
    repeat_ms: u32,
}

impl HeldKey {
    fn press(&mut self) {
        *self = Self {
            held: true,
            ..Self::default()
        };
    }

    fn release(&mut self) {
        *self = Self::default();
    }

    /// Advance timers and return how many repeats fire this tick.
    ///
    /// The first repeat fires on the tick that crosses the delay; the
    /// leftover time already counts toward the interval cadence.
    fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.held {
            return 0;
        }
        let mut fires = 0;
        if self.delay_ms < KEY_REPEAT_DELAY_MS {
            self.delay_ms += elapsed_ms;
            if self.delay_ms < KEY_REPEAT_DELAY_MS {
                return 0;
            }
            fires += 1;
            self.repeat_ms = self.delay_ms - KEY_REPEAT_DELAY_MS;
            self.delay_ms = KEY_REPEAT_DELAY_MS;
        } else {
            self.repeat_ms += elapsed_ms;
        }
        while self.repeat_ms >= KEY_REPEAT_INTERVAL_MS {
            self.repeat_ms -= KEY_REPEAT_INTERVAL_MS;
            fires += 1;
        }
        fires
    }
}

/// Complete state of one game session
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current: Option<Piece>,
    next: PieceKind,
    rng: SimpleRng,
    score: u32,
    /// Session maximum of `score`; survives `reset`
    high_score: u32,
    level: u32,
    /// Gravity threshold; shrinks with level, floored at `MIN_FALL_MS`
    fall_interval_ms: u32,
    fall_timer_ms: u32,
    level_timer_ms: u32,
    held_left: HeldKey,
    held_right: HeldKey,
    held_down: HeldKey,
    paused: bool,
    game_over: bool,
    started: bool,
}

impl GameState {
    /// Create a new session with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = rng.next_piece();

        Self {
            board: Board::new(),
            current: None,
            next,
            rng,
            score: 0,
            high_score: 0,
            level: 1,
            fall_interval_ms: BASE_FALL_MS,
            fall_timer_ms: 0,
            level_timer_ms: 0,
            held_left: HeldKey::default(),
            held_right: HeldKey::default(),
            held_down: HeldKey::default(),
            paused: false,
            game_over: false,
            started: false,
        }
    }

    /// Start the session and spawn the first piece
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.spawn_piece();
    }

    /// Re-initialize the run state for a fresh game.
    ///
    /// Rebuilds the session from the RNG's current state, so the piece
    /// sequence continues rather than replaying. The session high score
    /// carries over. This is the external reset that ends a `GameOver`.
    pub fn reset(&mut self) {
        let high_score = self.high_score;
        *self = Self::new(self.rng.seed());
        self.high_score = high_score;
        self.started = true;
        self.spawn_piece();
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Current gravity threshold in milliseconds
    pub fn fall_interval_ms(&self) -> u32 {
        self.fall_interval_ms
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// The pre-rolled next piece kind, for preview rendering
    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    /// Handle a one-shot key press.
    ///
    /// Each physical press takes effect exactly once here; auto-repeat
    /// for held movement keys is produced by `tick`. Returns whether the
    /// press changed anything.
    pub fn handle_key_down(&mut self, action: GameAction) -> bool {
        if self.game_over {
            return false;
        }

        match action {
            GameAction::Pause => {
                self.paused = !self.paused;
                true
            }
            _ if self.paused => false,
            GameAction::MoveLeft => {
                self.held_left.press();
                self.try_shift(-1, 0)
            }
            GameAction::MoveRight => {
                self.held_right.press();
                self.try_shift(1, 0)
            }
            GameAction::SoftDrop => {
                self.held_down.press();
                // One-shot soft drop never locks; it just reverts on the
                // floor. Only the held repeat and gravity lock pieces.
                self.try_shift(0, 1)
            }
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Handle a key release: clears the held flag and its repeat timers.
    ///
    /// Honored in every state so a release during pause or game over
    /// cannot leave a key stuck held.
    pub fn handle_key_up(&mut self, dir: HeldDir) {
        match dir {
            HeldDir::Left => self.held_left.release(),
            HeldDir::Right => self.held_right.release(),
            HeldDir::Down => self.held_down.release(),
        }
    }

    /// Advance the session by `elapsed_ms` of real time.
    ///
    /// Call exactly once per frame. Runs held-key auto-repeat, gravity,
    /// and the level-up clock, in that order. Does nothing while paused,
    /// after game over, or before `start`.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.paused || self.game_over || !self.started {
            return;
        }

        self.fall_timer_ms += elapsed_ms;
        self.level_timer_ms += elapsed_ms;

        let lefts = self.held_left.advance(elapsed_ms);
        let rights = self.held_right.advance(elapsed_ms);
        let downs = self.held_down.advance(elapsed_ms);

        for _ in 0..lefts {
            self.try_shift(-1, 0);
        }
        for _ in 0..rights {
            self.try_shift(1, 0);
        }
        for _ in 0..downs {
            // A held soft drop that hits the floor locks, like gravity.
            if !self.try_shift(0, 1) {
                self.lock_current();
                self.held_down.release();
                break;
            }
        }
        if self.game_over {
            return;
        }

        if self.fall_timer_ms >= self.fall_interval_ms {
            self.fall_timer_ms = 0;
            if !self.try_shift(0, 1) {
                self.lock_current();
            }
        }
        if self.game_over {
            return;
        }

        if self.level_timer_ms >= LEVEL_UP_MS {
            self.level_timer_ms = 0;
            // Level and speed move together; both stop at the floor.
            if self.fall_interval_ms > MIN_FALL_MS {
                self.fall_interval_ms -= FALL_STEP_MS;
                self.level += 1;
            }
        }
    }

    /// Shift the active piece, reverting if the board rejects the result
    fn try_shift(&mut self, dx: i8, dy: i8) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };

        piece.shift(dx, dy);
        if self.board.is_valid_position(piece) {
            true
        } else {
            piece.shift(-dx, -dy);
            false
        }
    }

    /// Rotate the active piece, reverting if the board rejects the result
    fn try_rotate(&mut self) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };

        piece.rotate();
        if self.board.is_valid_position(piece) {
            true
        } else {
            piece.rotate_back();
            false
        }
    }

    /// Drop the active piece to the floor and lock it immediately
    fn hard_drop(&mut self) -> bool {
        let Some(piece) = self.current.as_mut() else {
            return false;
        };

        self.board.instant_drop(piece);
        self.lock_current();
        true
    }

    /// Lock the active piece, clear full rows, score, and respawn
    fn lock_current(&mut self) {
        let Some(piece) = self.current.take() else {
            return;
        };

        self.board.lock(&piece);

        let cleared = self.board.clear_full_rows().len();
        if cleared > 0 {
            self.score += line_clear_score(cleared);
            if self.score > self.high_score {
                self.high_score = self.score;
            }
        }

        self.spawn_piece();
    }

    /// Spawn the pending next piece and pre-roll a new one.
    ///
    /// Checked against the board before the first player input: a blocked
    /// spawn ends the session without locking or drawing the piece.
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::new(self.next);
        self.next = self.rng.next_piece();

        if !self.board.is_valid_position(&piece) {
            self.game_over = true;
            self.current = None;
            return false;
        }

        self.current = Some(piece);
        true
    }

    /// Fill a reusable snapshot with the current frame's state
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_rows(&mut out.board);
        out.current = self.current.map(PieceSnapshot::from);
        out.next = self.next;
        out.score = self.score;
        out.high_score = self.high_score;
        out.level = self.level;
        out.paused = self.paused;
        out.game_over = self.game_over;
    }

    /// Take a fresh snapshot of the current frame's state
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
