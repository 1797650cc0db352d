//! Rotating hero tagline.

use crate::error::{ContentError, Result};

pub const DEFAULT_ROTATE_INTERVAL_MS: u32 = 3_000;
pub const DEFAULT_FADE_MS: u32 = 300;
pub const FADE_OUT_CLASS: &str = "fade-out";

pub const DEFAULT_TAGLINES: [&str; 6] = [
    "Data Science & Analytics",
    "Artificial Intelligence & Machine Learning",
    "Data Visualization & Storytelling",
    "ETL & Data Engineering",
    "Predictive Modeling & Insights",
    "AI-driven Product Prototyping",
];

/// Ordered, non-empty list of taglines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaglineSequence(Vec<String>);

impl TaglineSequence {
    pub fn new<I, T>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(ContentError::EmptyTaglines);
        }

        Ok(Self(entries))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }
}

impl Default for TaglineSequence {
    fn default() -> Self {
        Self(DEFAULT_TAGLINES.iter().map(|entry| entry.to_string()).collect())
    }
}

/// Two-phase rotation: fade out, then swap text and fade back in.
#[derive(Clone, Debug)]
pub struct TaglineRotator {
    sequence: TaglineSequence,
    index: usize,
    fading: bool,
}

impl TaglineRotator {
    pub fn new(sequence: TaglineSequence) -> Self {
        Self {
            sequence,
            index: 0,
            fading: false,
        }
    }

    pub fn current(&self) -> &str {
        self.sequence.get(self.index)
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn begin_fade(&mut self) {
        self.fading = true;
    }

    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.sequence.len();
        self.fading = false;
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_is_rejected() {
        assert_eq!(
            TaglineSequence::new(Vec::<String>::new()),
            Err(ContentError::EmptyTaglines)
        );
    }

    #[test]
    fn starts_on_first_entry() {
        let rotator = TaglineRotator::new(TaglineSequence::default());

        assert_eq!(rotator.current(), DEFAULT_TAGLINES[0]);
        assert!(!rotator.is_fading());
    }

    #[test]
    fn text_after_k_ticks_wraps_modulo_length() {
        let sequence = TaglineSequence::new(["a", "b", "c"]).expect("non-empty");
        let mut rotator = TaglineRotator::new(sequence.clone());

        for tick in 1..=10 {
            rotator.begin_fade();
            assert!(rotator.is_fading());
            let shown = rotator.advance().to_string();

            assert_eq!(shown, sequence.get(tick % sequence.len()));
            assert!(!rotator.is_fading());
        }
        assert_eq!(rotator.index(), 10 % 3);
    }

    #[test]
    fn fade_alone_keeps_current_text() {
        let mut rotator = TaglineRotator::new(TaglineSequence::new(["a", "b"]).expect("non-empty"));

        rotator.begin_fade();
        rotator.begin_fade();
        assert_eq!(rotator.current(), "a");
        assert_eq!(rotator.index(), 0);

        assert_eq!(rotator.advance(), "b");
        assert_eq!(rotator.index(), 1);
    }

    #[test]
    fn single_entry_list_keeps_showing_it() {
        let mut rotator = TaglineRotator::new(TaglineSequence::new(["only"]).expect("non-empty"));

        rotator.begin_fade();
        assert_eq!(rotator.advance(), "only");
    }
}
