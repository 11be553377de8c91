//! Quiz session state machine
//!
//! A [`Session`] samples up to [`SESSION_SIZE`] questions from a bank, plays
//! them in a shuffled order and scores [`POINTS_PER_QUESTION`] per correct
//! answer. After each answer the session locks until its deferred advance
//! fires: a cancellable timer task that delivers an [`AdvanceTicket`] on a
//! channel, which the owner hands back to [`Session::advance`].

pub mod error;
pub mod verdict;

pub use error::QuizError;
pub use verdict::Verdict;

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::bank::{Label, Question};

/// Maximum number of questions in one session
pub const SESSION_SIZE: usize = 5;

/// Points awarded for each correct answer
pub const POINTS_PER_QUESTION: u32 = 20;

/// Delay between an answer and the next question
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(800);

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuizState {
    #[default]
    NotStarted,
    InProgress,
    Finished,
}

/// Identifies one scheduled advance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket(u64);

/// Outcome of an accepted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answered {
    /// Label of the chosen option
    pub label: Label,
    /// Whether it matched the question's answer
    pub correct: bool,
    /// Ticket the deferred advance will deliver
    pub ticket: AdvanceTicket,
}

/// The advance currently waiting to fire
#[derive(Debug)]
struct PendingAdvance {
    ticket: AdvanceTicket,
    cancel: CancellationToken,
}

/// One playthrough of the quiz
#[derive(Debug)]
pub struct Session {
    state: QuizState,

    /// Questions sampled from the bank
    pool: Vec<Question>,

    /// The pool reshuffled into play order
    sequence: Vec<Question>,

    current_index: usize,
    score: u32,
    correct_count: usize,

    /// Option chosen for the current question, while locked
    selected: Option<Label>,

    /// At most one advance is pending; its presence is the answer lock
    pending: Option<PendingAdvance>,
    next_ticket: u64,

    delay: Duration,
    advance_tx: mpsc::UnboundedSender<AdvanceTicket>,
}

impl Session {
    /// Create a session that delivers deferred advances on `advance_tx`
    pub fn new(advance_tx: mpsc::UnboundedSender<AdvanceTicket>, delay: Duration) -> Self {
        Self {
            state: QuizState::NotStarted,
            pool: Vec::new(),
            sequence: Vec::new(),
            current_index: 0,
            score: 0,
            correct_count: 0,
            selected: None,
            pending: None,
            next_ticket: 0,
            delay,
            advance_tx,
        }
    }

    /// Start a new playthrough sampled from `bank`
    pub fn start(&mut self, bank: &[Question]) -> Result<(), QuizError> {
        self.start_with_rng(bank, &mut rand::thread_rng())
    }

    /// Start a new playthrough using the given random source
    pub fn start_with_rng<R: Rng + ?Sized>(
        &mut self,
        bank: &[Question],
        rng: &mut R,
    ) -> Result<(), QuizError> {
        if bank.is_empty() {
            return Err(QuizError::EmptyBank);
        }

        self.reset();

        let mut pool = bank.to_vec();
        pool.shuffle(rng);
        pool.truncate(SESSION_SIZE);

        let mut sequence = pool.clone();
        sequence.shuffle(rng);

        self.pool = pool;
        self.sequence = sequence;
        self.state = QuizState::InProgress;

        tracing::info!(questions = self.sequence.len(), bank = bank.len(), "Quiz started");
        Ok(())
    }

    /// Submit an answer for the current question
    ///
    /// Ignored (returns `None`) unless a question is awaiting an answer and
    /// `option_index` names one of the four options.
    pub fn submit_answer(&mut self, option_index: usize) -> Option<Answered> {
        if self.state != QuizState::InProgress || self.is_locked() {
            return None;
        }
        let label = Label::from_index(option_index)?;
        let question = self.sequence.get(self.current_index)?;

        let correct = question.is_correct(option_index);
        if correct {
            self.score += POINTS_PER_QUESTION;
            self.correct_count += 1;
        }
        self.selected = Some(label);

        let ticket = self.schedule_advance();
        tracing::debug!(
            question = self.current_index,
            %label,
            correct,
            score = self.score,
            "Answer locked"
        );

        Some(Answered { label, correct, ticket })
    }

    /// Apply a deferred advance delivered by the timer
    ///
    /// Tickets from cancelled or already applied advances are ignored.
    /// Returns whether the session moved on.
    pub fn advance(&mut self, ticket: AdvanceTicket) -> bool {
        match &self.pending {
            Some(pending) if pending.ticket == ticket => {}
            _ => {
                tracing::trace!(?ticket, "Ignoring stale advance");
                return false;
            }
        }

        self.pending = None;
        self.selected = None;
        self.current_index += 1;

        if self.current_index >= self.sequence.len() {
            self.state = QuizState::Finished;
            tracing::info!(score = self.score, max = self.max_score(), "Quiz finished");
        }
        true
    }

    /// Abandon the session and return to the not-started state
    pub fn restart(&mut self) {
        self.reset();
        self.pool.clear();
        self.sequence.clear();
        self.state = QuizState::NotStarted;
    }

    /// The question awaiting (or locked on) an answer
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress => self.sequence.get(self.current_index),
            _ => None,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    /// Zero-based position in the play order
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Number of questions in this playthrough
    pub fn total_questions(&self) -> usize {
        self.sequence.len()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Highest reachable score for this playthrough
    pub fn max_score(&self) -> u32 {
        self.sequence.len() as u32 * POINTS_PER_QUESTION
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    /// Whether an answer is locked in and waiting for the advance
    pub fn is_locked(&self) -> bool {
        self.pending.is_some()
    }

    /// The option chosen for the current question, while locked
    pub fn selected(&self) -> Option<Label> {
        self.selected
    }

    /// Questions sampled for this playthrough, before reordering
    pub fn pool(&self) -> &[Question] {
        &self.pool
    }

    /// Result screen verdict, once finished
    pub fn verdict(&self) -> Option<Verdict> {
        (self.state == QuizState::Finished)
            .then(|| Verdict::for_score(self.score, self.max_score()))
    }

    /// Whether the result deserves a confetti shower (80% or better)
    pub fn celebrates(&self) -> bool {
        self.state == QuizState::Finished && self.score * 5 >= self.max_score() * 4
    }

    /// Clear progress and cancel any pending advance
    fn reset(&mut self) {
        self.cancel_pending();
        self.current_index = 0;
        self.score = 0;
        self.correct_count = 0;
        self.selected = None;
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel.cancel();
            tracing::debug!(ticket = ?pending.ticket, "Cancelled pending advance");
        }
    }

    /// Spawn the timer that will deliver the next advance
    fn schedule_advance(&mut self) -> AdvanceTicket {
        let ticket = AdvanceTicket(self.next_ticket);
        self.next_ticket += 1;

        let cancel = CancellationToken::new();
        let token = cancel.clone();
        let tx = self.advance_tx.clone();
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // The receiver is gone only when the app is shutting down
                    let _ = tx.send(ticket);
                }
            }
        });

        self.pending = Some(PendingAdvance { ticket, cancel });
        ticket
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn bank(size: usize) -> Vec<Question> {
        (0..size)
            .map(|i| Question {
                prompt: format!("Question {i}"),
                options: ["w", "x", "y", "z"].map(String::from),
                answer: Label::ALL[i % 4].as_str().to_string(),
                feedback: String::new(),
            })
            .collect()
    }

    fn session() -> (Session, mpsc::UnboundedReceiver<AdvanceTicket>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Session::new(tx, DEFAULT_ADVANCE_DELAY), rx)
    }

    fn correct_option(session: &Session) -> usize {
        session.current_question().and_then(Question::correct_index).unwrap()
    }

    fn wrong_option(session: &Session) -> usize {
        (correct_option(session) + 1) % 4
    }

    /// Wait for the deferred advance and apply it
    async fn fire(session: &mut Session, rx: &mut mpsc::UnboundedReceiver<AdvanceTicket>) {
        let ticket = rx.recv().await.unwrap();
        assert!(session.advance(ticket));
    }

    #[test]
    fn new_session_is_not_started() {
        let (session, _rx) = session();
        assert_eq!(session.state(), QuizState::NotStarted);
        assert!(session.current_question().is_none());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn empty_bank_blocks_start() {
        let (mut session, _rx) = session();
        assert_eq!(session.start(&[]), Err(QuizError::EmptyBank));
        assert_eq!(session.state(), QuizState::NotStarted);
    }

    #[test]
    fn large_bank_samples_five_distinct_questions() {
        let (mut session, _rx) = session();
        let bank = bank(12);

        for seed in 0..20 {
            session.start_with_rng(&bank, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(session.total_questions(), SESSION_SIZE);

            let prompts: HashSet<&str> =
                session.sequence.iter().map(|q| q.prompt.as_str()).collect();
            assert_eq!(prompts.len(), SESSION_SIZE);
        }
    }

    #[test]
    fn small_bank_uses_every_question() {
        let (mut session, _rx) = session();
        let bank = bank(3);
        session.start(&bank).unwrap();

        assert_eq!(session.total_questions(), 3);
        assert_eq!(session.max_score(), 60);
        let mut prompts: Vec<&str> = session.sequence.iter().map(|q| q.prompt.as_str()).collect();
        prompts.sort();
        assert_eq!(prompts, vec!["Question 0", "Question 1", "Question 2"]);
    }

    #[test]
    fn sequence_is_a_reordering_of_the_pool() {
        let (mut session, _rx) = session();
        session.start_with_rng(&bank(9), &mut StdRng::seed_from_u64(7)).unwrap();

        let mut pool: Vec<&str> = session.pool().iter().map(|q| q.prompt.as_str()).collect();
        let mut sequence: Vec<&str> = session.sequence.iter().map(|q| q.prompt.as_str()).collect();
        pool.sort();
        sequence.sort();
        assert_eq!(pool, sequence);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let (mut session, _rx) = session();
        session.start(&bank(6)).unwrap();

        assert_eq!(session.submit_answer(4), None);
        assert!(!session.is_locked());
    }

    #[test]
    fn answers_before_start_are_ignored() {
        let (mut session, _rx) = session();
        assert_eq!(session.submit_answer(0), None);
        assert_eq!(session.score(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn second_answer_while_locked_scores_nothing() {
        let (mut session, mut rx) = session();
        session.start(&bank(6)).unwrap();

        let correct = correct_option(&session);
        let first = session.submit_answer(correct).unwrap();
        assert!(first.correct);
        assert!(session.is_locked());
        assert_eq!(session.selected(), Label::from_index(correct));

        assert_eq!(session.submit_answer(correct), None);
        assert_eq!(session.submit_answer(wrong_option(&session)), None);
        assert_eq!(session.score(), POINTS_PER_QUESTION);

        fire(&mut session, &mut rx).await;
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_locked());
        assert_eq!(session.selected(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn advance_waits_for_the_delay() {
        let (mut session, mut rx) = session();
        session.start(&bank(6)).unwrap();
        session.submit_answer(0).unwrap();

        tokio::time::sleep(DEFAULT_ADVANCE_DELAY / 2).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(session.current_index(), 0);

        tokio::time::sleep(DEFAULT_ADVANCE_DELAY).await;
        let ticket = rx.try_recv().unwrap();
        assert!(session.advance(ticket));
    }

    #[tokio::test(start_paused = true)]
    async fn all_correct_scores_one_hundred() {
        let (mut session, mut rx) = session();
        session.start(&bank(6)).unwrap();

        for answered in 1..=SESSION_SIZE {
            let outcome = session.submit_answer(correct_option(&session)).unwrap();
            assert!(outcome.correct);
            assert_eq!(session.score(), POINTS_PER_QUESTION * answered as u32);
            fire(&mut session, &mut rx).await;
        }

        assert_eq!(session.state(), QuizState::Finished);
        assert_eq!(session.score(), 100);
        assert_eq!(session.correct_count(), 5);
        assert!(session.current_question().is_none());
        assert_eq!(session.verdict(), Some(Verdict::Perfect));
        assert!(session.celebrates());
    }

    #[tokio::test(start_paused = true)]
    async fn all_wrong_scores_zero() {
        let (mut session, mut rx) = session();
        session.start(&bank(6)).unwrap();

        for _ in 0..SESSION_SIZE {
            let outcome = session.submit_answer(wrong_option(&session)).unwrap();
            assert!(!outcome.correct);
            fire(&mut session, &mut rx).await;
        }

        assert_eq!(session.state(), QuizState::Finished);
        assert_eq!(session.score(), 0);
        assert_eq!(session.verdict(), Some(Verdict::Blindfolded));
        assert!(!session.celebrates());
    }

    #[tokio::test(start_paused = true)]
    async fn score_tracks_correct_count() {
        let (mut session, mut rx) = session();
        session.start(&bank(8)).unwrap();

        // Alternate right and wrong answers
        for i in 0..SESSION_SIZE {
            let option =
                if i % 2 == 0 { correct_option(&session) } else { wrong_option(&session) };
            session.submit_answer(option).unwrap();
            assert_eq!(session.score(), POINTS_PER_QUESTION * session.correct_count() as u32);
            fire(&mut session, &mut rx).await;
        }

        assert_eq!(session.score(), 60);
        assert_eq!(session.verdict(), Some(Verdict::Steady));
    }

    #[tokio::test(start_paused = true)]
    async fn short_bank_finishes_after_last_question() {
        let (mut session, mut rx) = session();
        session.start(&bank(2)).unwrap();

        session.submit_answer(correct_option(&session)).unwrap();
        fire(&mut session, &mut rx).await;
        assert_eq!(session.state(), QuizState::InProgress);

        session.submit_answer(correct_option(&session)).unwrap();
        fire(&mut session, &mut rx).await;
        assert_eq!(session.state(), QuizState::Finished);
        assert_eq!(session.current_index(), session.total_questions());
        assert!(session.current_question().is_none());
        assert_eq!(session.submit_answer(0), None);
    }

    #[tokio::test(start_paused = true)]
    async fn restart_cancels_pending_advance() {
        let (mut session, mut rx) = session();
        session.start(&bank(6)).unwrap();
        session.submit_answer(0).unwrap();

        session.restart();
        assert_eq!(session.state(), QuizState::NotStarted);
        assert_eq!(session.total_questions(), 0);
        assert!(!session.is_locked());

        tokio::time::sleep(DEFAULT_ADVANCE_DELAY * 2).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn stale_ticket_is_ignored_after_restart() {
        let (mut session, mut rx) = session();
        session.start(&bank(6)).unwrap();
        session.submit_answer(0).unwrap();
        let stale = rx.recv().await.unwrap();

        session.restart();
        session.start(&bank(6)).unwrap();

        assert!(!session.advance(stale));
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.state(), QuizState::InProgress);
    }

    #[tokio::test(start_paused = true)]
    async fn ticket_applies_only_once() {
        let (mut session, mut rx) = session();
        session.start(&bank(6)).unwrap();
        session.submit_answer(0).unwrap();

        let ticket = rx.recv().await.unwrap();
        assert!(session.advance(ticket));
        assert!(!session.advance(ticket));
        assert_eq!(session.current_index(), 1);
    }
}
