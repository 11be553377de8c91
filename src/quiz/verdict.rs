//! Result screen verdicts

/// Message tier for a finished session, keyed by score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    Sharp,
    Steady,
    Casual,
    Lucky,
    Blindfolded,
}

impl Verdict {
    /// Pick the verdict for `score` out of `max_score`
    pub fn for_score(score: u32, max_score: u32) -> Self {
        if max_score == 0 {
            return Verdict::Blindfolded;
        }
        match score * 100 / max_score {
            100.. => Verdict::Perfect,
            80..=99 => Verdict::Sharp,
            60..=79 => Verdict::Steady,
            40..=59 => Verdict::Casual,
            1..=39 => Verdict::Lucky,
            0 => Verdict::Blindfolded,
        }
    }

    /// Line shown under the score
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Perfect => "Flawless! You beat 99.99% of players. Careful reading pays off.",
            Verdict::Sharp => "Great job! You beat 79.99% of players. Sharp mind.",
            Verdict::Steady => "Solidly average. Perfectly respectable.",
            Verdict::Casual => "You beat 39.99% of players. You learn at your own pace.",
            Verdict::Lucky => "You beat 19.99% of players. A mix of luck and skill, keep going!",
            Verdict::Blindfolded => {
                "Zero? Were you answering with your eyes closed? Have a wonderful day :)"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_five_question_scores() {
        assert_eq!(Verdict::for_score(100, 100), Verdict::Perfect);
        assert_eq!(Verdict::for_score(80, 100), Verdict::Sharp);
        assert_eq!(Verdict::for_score(60, 100), Verdict::Steady);
        assert_eq!(Verdict::for_score(40, 100), Verdict::Casual);
        assert_eq!(Verdict::for_score(20, 100), Verdict::Lucky);
        assert_eq!(Verdict::for_score(0, 100), Verdict::Blindfolded);
    }

    #[test]
    fn short_sessions_scale_by_percentage() {
        // Two-question bank: max 40
        assert_eq!(Verdict::for_score(40, 40), Verdict::Perfect);
        assert_eq!(Verdict::for_score(20, 40), Verdict::Casual);
    }

    #[test]
    fn every_verdict_has_a_message() {
        for score in [0, 20, 40, 60, 80, 100] {
            assert!(!Verdict::for_score(score, 100).message().is_empty());
        }
    }
}
