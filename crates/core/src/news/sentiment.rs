use super::news_model::Sentiment;

pub const POSITIVE_WORDS: [&str; 11] = [
    "growth", "surge", "rally", "gain", "profit", "bullish", "strong", "rise", "high", "up",
    "increase",
];

pub const NEGATIVE_WORDS: [&str; 10] = [
    "loss", "drop", "fall", "decline", "bearish", "weak", "down", "crash", "decrease", "low",
];

/// Counts each listed word at most once, by substring, in the lower-cased
/// text. The side with more hits wins; a tie is neutral.
pub fn analyze_sentiment(text: &str) -> Sentiment {
    let lowered = text.to_lowercase();
    let hits = |words: &[&str]| words.iter().filter(|w| lowered.contains(*w)).count();

    let positive = hits(&POSITIVE_WORDS);
    let negative = hits(&NEGATIVE_WORDS);

    if positive > negative {
        Sentiment::Positive
    } else if negative > positive {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority_wins() {
        assert_eq!(analyze_sentiment("Bitcoin rally continues"), Sentiment::Positive);
        assert_eq!(analyze_sentiment("Market CRASH deepens"), Sentiment::Negative);
        assert_eq!(analyze_sentiment("Regulators meet on Tuesday"), Sentiment::Neutral);
    }

    #[test]
    fn test_tie_is_neutral() {
        assert_eq!(analyze_sentiment("gain then loss"), Sentiment::Neutral);
    }

    #[test]
    fn test_each_word_counts_once() {
        // two hits of "drop" still count as one against "gain" and "profit"
        assert_eq!(analyze_sentiment("drop drop gain profit"), Sentiment::Positive);
    }

    #[test]
    fn test_matches_inside_other_words() {
        // "upgrade" contains "up"; "slowdown" contains both "low" and "down"
        assert_eq!(analyze_sentiment("Network upgrade"), Sentiment::Positive);
        assert_eq!(analyze_sentiment("Economic slowdown"), Sentiment::Negative);
    }
}
