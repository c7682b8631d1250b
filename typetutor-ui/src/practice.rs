/// Target text and what the user has typed so far.
#[derive(Debug, Default)]
pub struct Practice {
    pub target: String,
    pub typed: String,
}

impl Practice {
    /// Replaces the target and clears the typed text.
    pub fn reset(&mut self, target: String) {
        self.target = target;
        self.typed.clear();
    }

    /// Number of leading characters typed correctly.
    pub fn correct_chars(&self) -> usize {
        self.target
            .chars()
            .zip(self.typed.chars())
            .take_while(|(expected, got)| expected == got)
            .count()
    }

    pub fn total_chars(&self) -> usize {
        self.target.chars().count()
    }

    pub fn is_complete(&self) -> bool {
        !self.target.is_empty() && self.typed == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_correct_prefix() {
        let mut practice = Practice::default();
        practice.reset("the then".to_owned());
        practice.typed = "the tx".to_owned();
        assert_eq!(practice.correct_chars(), 5);
        assert!(!practice.is_complete());

        practice.typed = "the then".to_owned();
        assert!(practice.is_complete());
    }

    #[test]
    fn reset_clears_input() {
        let mut practice = Practice::default();
        practice.typed = "old".to_owned();
        practice.reset("new".to_owned());
        assert!(practice.typed.is_empty());
        assert_eq!(practice.total_chars(), 3);
    }
}
