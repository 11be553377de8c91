//! Application state definitions

use std::time::{Duration, Instant};

use rand::Rng;
use ratatui::layout::{Position, Rect};
use tokio::sync::mpsc;

use super::effects::{
    ANSWER_BURST, Confetti, PERFECT_REFILL, REFILL_EVERY, RESULT_SHOWER, cell_to_field,
};
use crate::bank::{LoadError, OPTION_COUNT, Question};
use crate::quiz::{AdvanceTicket, QuizError, QuizState, Session};

/// Which screen is currently displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Question,
    Result,
}

/// Retrieval status of the question bank
#[derive(Debug, Default)]
pub enum BankStatus {
    #[default]
    Loading,
    Ready(Vec<Question>),
    Failed(LoadError),
}

impl BankStatus {
    /// Questions available to start a quiz with
    pub fn questions(&self) -> &[Question] {
        match self {
            BankStatus::Ready(questions) => questions,
            _ => &[],
        }
    }
}

/// Clickable regions recorded by the renderer on the last frame
#[derive(Debug, Clone, Default)]
pub struct HitRegions {
    /// Whole drawing area, used to place confetti
    pub frame: Rect,
    /// Option cards of the current question, A through D
    pub options: Vec<Rect>,
    /// Start button on the start screen
    pub start: Option<Rect>,
    /// Restart button on the result screen
    pub restart: Option<Rect>,
    /// Retry button on the load error overlay
    pub retry: Option<Rect>,
}

impl HitRegions {
    /// Index of the option card under a cell, if any
    pub fn option_at(&self, column: u16, row: u16) -> Option<usize> {
        self.options.iter().position(|area| area.contains(Position::new(column, row)))
    }
}

/// State for the start screen title animation
#[derive(Debug, Clone)]
pub struct TitleAnimation {
    /// When the animation started
    pub start_time: Instant,

    /// Current animation frame (50ms per frame)
    pub current_frame: usize,
}

impl Default for TitleAnimation {
    fn default() -> Self {
        Self { start_time: Instant::now(), current_frame: 0 }
    }
}

impl TitleAnimation {
    /// Frame timing constants
    pub const MS_PER_FRAME: u128 = 50;
    pub const TITLE_END_FRAME: usize = 20;
    pub const SUBTITLE_END_FRAME: usize = 30;

    /// Advance the animation based on elapsed time
    pub fn tick(&mut self) {
        let elapsed_ms = self.start_time.elapsed().as_millis();
        self.current_frame = (elapsed_ms / Self::MS_PER_FRAME) as usize;
    }

    /// Restart from the first frame
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// How many characters of a title of `len` characters to show
    pub fn title_chars(&self, len: usize) -> usize {
        if self.current_frame >= Self::TITLE_END_FRAME {
            len
        } else {
            len * self.current_frame / Self::TITLE_END_FRAME
        }
    }

    /// Whether the subtitle and start button are visible
    pub fn show_subtitle(&self) -> bool {
        self.current_frame >= Self::SUBTITLE_END_FRAME
    }
}

/// Full application state
#[derive(Debug)]
pub struct AppState {
    /// Current quiz playthrough
    pub session: Session,

    /// Retrieval status of the question bank
    pub bank: BankStatus,

    /// Option highlighted for keyboard selection
    pub highlighted: usize,

    /// Confetti currently on screen
    pub confetti: Confetti,

    /// Start screen animation
    pub title: TitleAnimation,

    /// Regions recorded by the last draw
    pub regions: HitRegions,

    /// Status message to display, if any
    pub message: Option<String>,

    /// Whether message is an error
    pub is_error: bool,

    /// Frames drawn since launch
    pub frame_count: u64,
}

impl AppState {
    /// Create state whose session delivers advances on `advance_tx`
    pub fn new(advance_tx: mpsc::UnboundedSender<AdvanceTicket>, advance_delay: Duration) -> Self {
        Self {
            session: Session::new(advance_tx, advance_delay),
            bank: BankStatus::Loading,
            highlighted: 0,
            confetti: Confetti::default(),
            title: TitleAnimation::default(),
            regions: HitRegions::default(),
            message: None,
            is_error: false,
            frame_count: 0,
        }
    }

    /// Screen matching the session state
    pub fn screen(&self) -> Screen {
        match self.session.state() {
            QuizState::NotStarted => Screen::Start,
            QuizState::InProgress => Screen::Question,
            QuizState::Finished => Screen::Result,
        }
    }

    /// Record the outcome of a bank retrieval
    pub fn bank_loaded(&mut self, result: Result<Vec<Question>, LoadError>) {
        match result {
            Ok(questions) => {
                tracing::info!(count = questions.len(), "Question bank ready");
                self.clear_message();
                self.bank = BankStatus::Ready(questions);
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load question bank");
                self.bank = BankStatus::Failed(err);
            }
        }
    }

    /// Mark the bank as being retrieved again
    pub fn begin_reload(&mut self) {
        self.bank = BankStatus::Loading;
        self.clear_message();
    }

    /// Try to start a quiz; blocked with a message when no questions are loaded
    pub fn start_quiz(&mut self) {
        match self.session.start(self.bank.questions()) {
            Ok(()) => {
                self.highlighted = 0;
                self.confetti.clear();
                self.clear_message();
            }
            Err(QuizError::EmptyBank) => {
                let hint = match self.bank {
                    BankStatus::Loading => "Still loading the question bank, try again shortly",
                    _ => "No questions available. Check the bank file and press r to retry",
                };
                self.set_error(hint);
            }
        }
    }

    /// Answer the current question with option `index`
    ///
    /// Confetti bursts from the option card whether or not it was right.
    pub fn answer<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R, confetti: bool) {
        if self.session.submit_answer(index).is_none() {
            return;
        }
        self.highlighted = index;

        if confetti {
            let frame = self.regions.frame;
            let (x, y) = self
                .regions
                .options
                .get(index)
                .map(|card| cell_to_field(frame, card.x + card.width / 2, card.y + card.height / 2))
                .unwrap_or((50.0, 50.0));
            self.confetti.burst(x, y, ANSWER_BURST, rng);
        }
    }

    /// Apply a deferred advance delivered by the session timer
    pub fn apply_advance<R: Rng + ?Sized>(
        &mut self,
        ticket: AdvanceTicket,
        rng: &mut R,
        confetti: bool,
    ) {
        if !self.session.advance(ticket) {
            return;
        }
        self.highlighted = 0;

        if confetti && self.session.celebrates() {
            self.confetti.shower(RESULT_SHOWER, rng);
        }
    }

    /// Leave the result (or an abandoned quiz) for the start screen
    pub fn restart(&mut self) {
        self.session.restart();
        self.confetti.clear();
        self.highlighted = 0;
        self.title.reset();
        self.clear_message();
    }

    /// Move the keyboard highlight up or down
    pub fn move_highlight(&mut self, down: bool) {
        if self.session.is_locked() {
            return;
        }
        self.highlighted = if down {
            (self.highlighted + 1) % OPTION_COUNT
        } else {
            (self.highlighted + OPTION_COUNT - 1) % OPTION_COUNT
        };
    }

    /// Per-frame update of animations
    pub fn tick<R: Rng + ?Sized>(&mut self, speed: f32, rng: &mut R) {
        self.frame_count = self.frame_count.wrapping_add(1);
        self.title.tick();

        if speed <= 0.0 {
            return;
        }
        self.confetti.tick(speed);

        // A perfect score keeps the confetti coming
        let perfect = self.session.state() == QuizState::Finished
            && self.session.score() == self.session.max_score();
        if perfect && self.frame_count % REFILL_EVERY == 0 {
            self.confetti.shower(PERFECT_REFILL, rng);
        }
    }

    /// Set an error message
    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
        self.is_error = true;
    }

    /// Clear the message
    pub fn clear_message(&mut self) {
        self.message = None;
        self.is_error = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::parse;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const BANK: &str = "question,optionA,optionB,optionC,optionD,answer\n\
                        Q1,a,b,c,d,A\nQ2,a,b,c,d,B\nQ3,a,b,c,d,C\n\
                        Q4,a,b,c,d,D\nQ5,a,b,c,d,A\nQ6,a,b,c,d,B\n";

    fn state() -> (AppState, mpsc::UnboundedReceiver<AdvanceTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (AppState::new(tx, Duration::from_millis(800)), rx)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn start_is_blocked_while_loading() {
        let (mut state, _rx) = state();
        state.start_quiz();

        assert_eq!(state.screen(), Screen::Start);
        assert!(state.is_error);
        assert!(state.message.as_deref().unwrap().contains("loading"));
    }

    #[test]
    fn start_is_blocked_for_empty_bank() {
        let (mut state, _rx) = state();
        state.bank_loaded(Ok(parse("question,answer\n,\n")));
        state.start_quiz();

        assert_eq!(state.screen(), Screen::Start);
        assert!(state.is_error);
    }

    #[test]
    fn failed_load_keeps_start_blocked() {
        let (mut state, _rx) = state();
        state.bank_loaded(Err(LoadError::Http { status: 404, reason: "Not Found".into() }));
        assert!(matches!(state.bank, BankStatus::Failed(_)));

        state.start_quiz();
        assert_eq!(state.screen(), Screen::Start);
    }

    #[test]
    fn loaded_bank_starts_quiz() {
        let (mut state, _rx) = state();
        state.bank_loaded(Ok(parse(BANK)));
        state.start_quiz();

        assert_eq!(state.screen(), Screen::Question);
        assert_eq!(state.session.total_questions(), 5);
        assert!(state.message.is_none());
    }

    #[test]
    fn highlight_wraps_around() {
        let (mut state, _rx) = state();
        state.move_highlight(false);
        assert_eq!(state.highlighted, 3);
        state.move_highlight(true);
        assert_eq!(state.highlighted, 0);
    }

    #[test]
    fn option_hit_testing() {
        let regions = HitRegions {
            options: vec![Rect::new(2, 5, 40, 3), Rect::new(2, 9, 40, 3)],
            ..HitRegions::default()
        };
        assert_eq!(regions.option_at(10, 6), Some(0));
        assert_eq!(regions.option_at(41, 11), Some(1));
        assert_eq!(regions.option_at(10, 8), None);
        assert_eq!(regions.option_at(42, 6), None);
    }

    #[test]
    fn title_types_in() {
        let mut title = TitleAnimation::default();
        assert_eq!(title.title_chars(10), 0);
        title.current_frame = TitleAnimation::TITLE_END_FRAME / 2;
        assert_eq!(title.title_chars(10), 5);
        title.current_frame = TitleAnimation::SUBTITLE_END_FRAME;
        assert_eq!(title.title_chars(10), 10);
        assert!(title.show_subtitle());
    }

    #[tokio::test(start_paused = true)]
    async fn answering_bursts_confetti_and_locks() {
        let (mut state, mut rx) = state();
        state.bank_loaded(Ok(parse(BANK)));
        state.start_quiz();

        state.answer(2, &mut rng(), true);
        assert!(state.session.is_locked());
        assert_eq!(state.confetti.particles().len(), ANSWER_BURST);

        // A second click during the delay changes nothing
        state.answer(1, &mut rng(), true);
        assert_eq!(state.confetti.particles().len(), ANSWER_BURST);
        assert_eq!(state.highlighted, 2);

        let ticket = rx.recv().await.unwrap();
        state.apply_advance(ticket, &mut rng(), true);
        assert_eq!(state.session.current_index(), 1);
        assert!(!state.session.is_locked());
    }

    #[tokio::test(start_paused = true)]
    async fn perfect_result_showers_confetti() {
        let (mut state, mut rx) = state();
        state.bank_loaded(Ok(parse(BANK)));
        state.start_quiz();

        while state.screen() == Screen::Question {
            let correct = state.session.current_question().unwrap().correct_index().unwrap();
            state.answer(correct, &mut rng(), false);
            let ticket = rx.recv().await.unwrap();
            state.apply_advance(ticket, &mut rng(), true);
        }

        assert_eq!(state.screen(), Screen::Result);
        assert_eq!(state.session.score(), 100);
        assert_eq!(state.confetti.particles().len(), RESULT_SHOWER);

        state.restart();
        assert_eq!(state.screen(), Screen::Start);
        assert!(state.confetti.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn restart_mid_delay_discards_advance() {
        let (mut state, mut rx) = state();
        state.bank_loaded(Ok(parse(BANK)));
        state.start_quiz();
        state.answer(0, &mut rng(), false);

        state.restart();
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(state.screen(), Screen::Start);
    }
}
