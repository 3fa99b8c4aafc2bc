use crate::types::{Status, Step};

use tracing::{debug, info};

/// Hook run every time the learner advances past a word.
pub trait AdvanceFeedback {
    fn on_advance(&mut self, word: &str, score: u32);
}

pub struct Silent;

impl AdvanceFeedback for Silent {
    fn on_advance(&mut self, _word: &str, _score: u32) {}
}

pub struct LogFeedback;

impl AdvanceFeedback for LogFeedback {
    fn on_advance(&mut self, word: &str, score: u32) {
        info!(word, score, "word advanced");
    }
}

pub struct Game {
    words: Vec<String>,
    index: usize,
    score: u32,
    sounding: bool,
    feedback: Box<dyn AdvanceFeedback>,
}

impl Game {
    pub fn new(words: Vec<String>) -> Self {
        Self {
            words,
            index: 0,
            score: 0,
            sounding: true,
            feedback: Box::new(Silent),
        }
    }

    pub fn with_feedback(mut self, feedback: Box<dyn AdvanceFeedback>) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn sounding(&self) -> bool {
        self.sounding
    }

    pub fn status(&self) -> Status {
        if self.index >= self.words.len() {
            Status::Complete
        } else {
            Status::Playing
        }
    }

    /// `None` once the list is exhausted.
    pub fn current_word(&self) -> Option<&str> {
        self.words.get(self.index).map(String::as_str)
    }

    /// First press on a word clears the cue, the second scores and moves on.
    pub fn press_advance(&mut self) -> Step {
        if self.status() == Status::Complete {
            return Step::Ignored;
        }

        if self.sounding {
            self.sounding = false;
            debug!(index = self.index, "cue cleared");

            return Step::CueCleared;
        }

        let finished = self.index;
        self.score += 1;
        self.index += 1;
        self.sounding = true;
        self.feedback.on_advance(&self.words[finished], self.score);

        match self.status() {
            Status::Complete => {
                info!(score = self.score, "word list complete");
                Step::Completed
            }
            Status::Playing => Step::Advanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    struct Counting(Rc<Cell<u32>>);

    impl AdvanceFeedback for Counting {
        fn on_advance(&mut self, _word: &str, _score: u32) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn starts_playing_with_cue_on() {
        let game = Game::new(words(&["cat"]));

        assert_eq!(game.status(), Status::Playing);
        assert_eq!(game.index(), 0);
        assert_eq!(game.score(), 0);
        assert!(game.sounding());
        assert_eq!(game.current_word(), Some("cat"));
    }

    #[test]
    fn cat_dog_scenario() {
        let mut game = Game::new(words(&["cat", "dog"]));

        assert_eq!(game.press_advance(), Step::CueCleared);
        assert_eq!(game.press_advance(), Step::Advanced);
        assert_eq!(game.score(), 1);
        assert_eq!(game.index(), 1);
        assert_eq!(game.current_word(), Some("dog"));
        assert!(game.sounding());

        assert_eq!(game.press_advance(), Step::CueCleared);
        assert_eq!(game.press_advance(), Step::Completed);
        assert_eq!(game.score(), 2);
        assert_eq!(game.status(), Status::Complete);
        assert_eq!(game.current_word(), None);
    }

    #[test]
    fn two_presses_per_word_completes_any_list() {
        for n in 1..=6 {
            let list: Vec<String> = (0..n).map(|i| format!("w{i}")).collect();
            let mut game = Game::new(list);

            for _ in 0..2 * n {
                game.press_advance();
            }

            assert_eq!(game.score(), n as u32);
            assert_eq!(game.status(), Status::Complete);
        }
    }

    #[test]
    fn odd_presses_only_flip_the_cue() {
        let mut game = Game::new(words(&["one", "two"]));

        game.press_advance();
        assert_eq!(game.index(), 0);
        assert!(!game.sounding());

        game.press_advance();
        game.press_advance();
        assert_eq!(game.index(), 1);
        assert!(!game.sounding());
    }

    #[test]
    fn complete_ignores_further_presses() {
        let mut game = Game::new(words(&["a"]));
        game.press_advance();
        game.press_advance();

        for _ in 0..5 {
            assert_eq!(game.press_advance(), Step::Ignored);
        }
        assert_eq!(game.score(), 1);
        assert_eq!(game.index(), 1);
    }

    #[test]
    fn index_and_score_never_decrease() {
        let mut game = Game::new(words(&["a", "", "bc"]));
        let (mut last_index, mut last_score) = (0, 0);

        for _ in 0..10 {
            game.press_advance();
            assert!(game.index() >= last_index);
            assert!(game.score() >= last_score);
            last_index = game.index();
            last_score = game.score();
        }
    }

    #[test]
    fn empty_list_is_already_complete() {
        let mut game = Game::new(Vec::new());

        assert_eq!(game.status(), Status::Complete);
        assert_eq!(game.press_advance(), Step::Ignored);
    }

    #[test]
    fn feedback_fires_once_per_advance() {
        let count = Rc::new(Cell::new(0));
        let mut game =
            Game::new(words(&["cat", "dog"])).with_feedback(Box::new(Counting(count.clone())));

        game.press_advance();
        assert_eq!(count.get(), 0);
        game.press_advance();
        assert_eq!(count.get(), 1);
        game.press_advance();
        game.press_advance();
        game.press_advance();
        assert_eq!(count.get(), 2);
    }
}
