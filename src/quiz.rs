//! Quiz session state. Questions are dealt in a seeded shuffle so a session
//! can be replayed; there is no clock here, only the per-question limits.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;

use crate::catalog::Question;
use crate::error::QuizError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum QuizState {
    InProgress { index: usize },
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub obtained: u32,
    pub total: u32,
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
}

#[derive(Debug, Clone)]
pub struct QuizSession<'a> {
    questions: Vec<&'a Question>,
    answers: Vec<Option<usize>>,
    state: QuizState,
}

impl<'a> QuizSession<'a> {
    pub fn new(questions: &[&'a Question], seed: u64) -> Self {
        Self::deal(questions, seed, usize::MAX)
    }

    /// Shuffles `questions` with `seed` and keeps the first `limit`.
    pub fn deal(questions: &[&'a Question], seed: u64, limit: usize) -> Self {
        let mut deck = questions.to_vec();
        let mut rng = StdRng::seed_from_u64(seed);
        deck.shuffle(&mut rng);
        deck.truncate(limit);

        let state = if deck.is_empty() {
            QuizState::Finished
        } else {
            QuizState::InProgress { index: 0 }
        };
        QuizSession {
            answers: vec![None; deck.len()],
            questions: deck,
            state,
        }
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[&'a Question] {
        &self.questions
    }

    pub fn current(&self) -> Option<&'a Question> {
        match self.state {
            QuizState::InProgress { index } => self.questions.get(index).copied(),
            QuizState::Finished => None,
        }
    }

    /// Records `option` for the current question. Each question can be
    /// answered once.
    pub fn answer(&mut self, option: usize) -> Result<Outcome, QuizError> {
        let QuizState::InProgress { index } = self.state else {
            return Err(QuizError::Finished);
        };
        let question = self.questions[index];
        if option >= question.options.len() {
            return Err(QuizError::OptionOutOfRange(option));
        }
        if self.answers[index].is_some() {
            return Err(QuizError::AlreadyAnswered(question.id.clone()));
        }
        self.answers[index] = Some(option);
        Ok(if question.is_correct(option) {
            Outcome::Correct
        } else {
            Outcome::Incorrect
        })
    }

    /// Moves to the next question, finishing after the last one.
    pub fn next(&mut self) -> QuizState {
        if let QuizState::InProgress { index } = self.state {
            self.state = if index + 1 < self.questions.len() {
                QuizState::InProgress { index: index + 1 }
            } else {
                QuizState::Finished
            };
        }
        self.state
    }

    /// Leaves the current question unanswered.
    pub fn skip(&mut self) -> QuizState {
        self.next()
    }

    pub fn finish(&mut self) {
        self.state = QuizState::Finished;
    }

    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for (question, answer) in self.questions.iter().zip(&self.answers) {
            score.total += question.marks;
            match answer {
                Some(option) if question.is_correct(*option) => {
                    score.correct += 1;
                    score.obtained += question.marks;
                }
                Some(_) => score.incorrect += 1,
                None => score.unanswered += 1,
            }
        }
        score
    }

    /// Seconds allowed for the whole session.
    pub fn total_time_limit(&self) -> u32 {
        self.questions.iter().map(|q| q.time_limit).sum()
    }
}
