use crate::tag::{Hue, MoodTag, StyleTag, TagSet, ThemeTag};

/// The static keyword table mapping token phrases to style tags.
///
/// Multi-token phrases must appear here in addition to any hyphenated
/// single-token spelling ("retro-gaming" arrives as one token, "retro
/// gaming" as two). Matching is greedy longest-match, so "hunter green"
/// consumes its span before the bare "green" entry can fire.
const KEYWORDS: &[(&[&str], StyleTag)] = &[
    // Theme families
    (&["bauhaus"], StyleTag::Theme(ThemeTag::Bauhaus)),
    (&["modern"], StyleTag::Theme(ThemeTag::ModernTech)),
    (&["tech-forward"], StyleTag::Theme(ThemeTag::ModernTech)),
    (&["tech", "forward"], StyleTag::Theme(ThemeTag::ModernTech)),
    (&["futuristic"], StyleTag::Theme(ThemeTag::ModernTech)),
    (&["sleek"], StyleTag::Theme(ThemeTag::ModernTech)),
    (&["glassy"], StyleTag::Theme(ThemeTag::Glassy)),
    (&["glass"], StyleTag::Theme(ThemeTag::Glassy)),
    (&["reflective"], StyleTag::Theme(ThemeTag::Glassy)),
    (&["translucent"], StyleTag::Theme(ThemeTag::Glassy)),
    (&["frosted"], StyleTag::Theme(ThemeTag::Glassy)),
    (&["retro-gaming"], StyleTag::Theme(ThemeTag::RetroGaming)),
    (&["retro", "gaming"], StyleTag::Theme(ThemeTag::RetroGaming)),
    (&["retro"], StyleTag::Theme(ThemeTag::RetroGaming)),
    (&["gaming"], StyleTag::Theme(ThemeTag::RetroGaming)),
    (&["arcade"], StyleTag::Theme(ThemeTag::RetroGaming)),
    (&["8-bit"], StyleTag::Theme(ThemeTag::RetroGaming)),
    (&["pixel"], StyleTag::Theme(ThemeTag::RetroGaming)),
    (&["christmas"], StyleTag::Theme(ThemeTag::Festive)),
    (&["xmas"], StyleTag::Theme(ThemeTag::Festive)),
    (&["festive"], StyleTag::Theme(ThemeTag::Festive)),
    (&["holiday"], StyleTag::Theme(ThemeTag::Festive)),
    // Moods
    (&["minimalist"], StyleTag::Mood(MoodTag::Minimalist)),
    (&["minimal"], StyleTag::Mood(MoodTag::Minimalist)),
    (&["clean"], StyleTag::Mood(MoodTag::Minimalist)),
    (&["simple"], StyleTag::Mood(MoodTag::Minimalist)),
    (&["playful"], StyleTag::Mood(MoodTag::Playful)),
    (&["fun"], StyleTag::Mood(MoodTag::Playful)),
    (&["friendly"], StyleTag::Mood(MoodTag::Playful)),
    (&["elegant"], StyleTag::Mood(MoodTag::Elegant)),
    (&["luxurious"], StyleTag::Mood(MoodTag::Elegant)),
    (&["classy"], StyleTag::Mood(MoodTag::Elegant)),
    (&["dark"], StyleTag::Mood(MoodTag::Dark)),
    (&["moody"], StyleTag::Mood(MoodTag::Dark)),
    (&["midnight"], StyleTag::Mood(MoodTag::Dark)),
    // Explicit hues
    (&["red"], StyleTag::Hue(Hue::Red)),
    (&["crimson"], StyleTag::Hue(Hue::Crimson)),
    (&["orange"], StyleTag::Hue(Hue::Orange)),
    (&["gold"], StyleTag::Hue(Hue::Gold)),
    (&["golden"], StyleTag::Hue(Hue::Gold)),
    (&["yellow"], StyleTag::Hue(Hue::Yellow)),
    (&["hunter", "green"], StyleTag::Hue(Hue::HunterGreen)),
    (&["hunter-green"], StyleTag::Hue(Hue::HunterGreen)),
    (&["forest", "green"], StyleTag::Hue(Hue::ForestGreen)),
    (&["forest-green"], StyleTag::Hue(Hue::ForestGreen)),
    (&["green"], StyleTag::Hue(Hue::Green)),
    (&["teal"], StyleTag::Hue(Hue::Teal)),
    (&["navy", "blue"], StyleTag::Hue(Hue::Navy)),
    (&["navy"], StyleTag::Hue(Hue::Navy)),
    (&["blue"], StyleTag::Hue(Hue::Blue)),
    (&["purple"], StyleTag::Hue(Hue::Purple)),
    (&["violet"], StyleTag::Hue(Hue::Purple)),
    (&["pink"], StyleTag::Hue(Hue::Pink)),
    (&["brown"], StyleTag::Hue(Hue::Brown)),
    (&["black"], StyleTag::Hue(Hue::Black)),
    (&["white"], StyleTag::Hue(Hue::White)),
    (&["gray"], StyleTag::Hue(Hue::Gray)),
    (&["grey"], StyleTag::Hue(Hue::Gray)),
];

/// Classify a prompt into a set of style tags.
///
/// Lowercases and tokenizes the prompt, then scans left to right against
/// the keyword table. At each position the longest matching phrase wins
/// and consumes its span; unmatched tokens are skipped. Tags are recorded
/// in detection order, which downstream tie-breaking depends on.
///
/// Total over all inputs: unmatched or empty prompts yield an empty set.
pub fn classify(prompt: &str) -> TagSet {
    let tokens = tokenize(prompt);
    let mut tags = TagSet::new();

    let mut i = 0;
    while i < tokens.len() {
        match longest_match(&tokens, i) {
            Some((len, tag)) => {
                tags.insert(tag);
                i += len;
            }
            None => i += 1,
        }
    }

    tags
}

/// Find the longest keyword phrase starting at `start`, if any.
/// Returns the number of tokens consumed and the matched tag.
fn longest_match(tokens: &[String], start: usize) -> Option<(usize, StyleTag)> {
    let mut best: Option<(usize, StyleTag)> = None;

    for (phrase, tag) in KEYWORDS {
        let len = phrase.len();
        if start + len > tokens.len() {
            continue;
        }
        if phrase
            .iter()
            .zip(&tokens[start..start + len])
            .all(|(word, token)| *word == token.as_str())
        {
            match best {
                Some((best_len, _)) if best_len >= len => {}
                _ => best = Some((len, *tag)),
            }
        }
    }

    best
}

/// Split a prompt into lowercase word tokens.
///
/// A token is a run of alphanumeric characters; hyphens are kept when
/// surrounded by alphanumerics so compound words like "retro-gaming" and
/// "8-bit" stay whole. Everything else is a separator.
fn tokenize(prompt: &str) -> Vec<String> {
    let chars: Vec<char> = prompt.to_lowercase().chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let keep_hyphen = c == '-'
            && !current.is_empty()
            && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());

        if c.is_alphanumeric() || keep_hyphen {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper: classify and return tags in detection order.
    fn tags(prompt: &str) -> Vec<StyleTag> {
        classify(prompt).iter().copied().collect()
    }

    // =========================================================================
    // Tokenization
    // =========================================================================

    #[test]
    fn test_tokenize_lowercases() {
        assert_eq!(tokenize("Make It GLASSY"), vec!["make", "it", "glassy"]);
    }

    #[test]
    fn test_tokenize_keeps_internal_hyphens() {
        assert_eq!(tokenize("retro-gaming 8-bit"), vec!["retro-gaming", "8-bit"]);
    }

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("modern, friendly, and tech-forward!"),
            vec!["modern", "friendly", "and", "tech-forward"]
        );
    }

    #[test]
    fn test_tokenize_leading_hyphen_is_separator() {
        assert_eq!(tokenize("-retro"), vec!["retro"]);
    }

    #[test]
    fn test_tokenize_trailing_hyphen_dropped() {
        assert_eq!(tokenize("retro-"), vec!["retro"]);
    }

    #[test]
    fn test_tokenize_collapses_whitespace() {
        assert_eq!(tokenize("  hunter   green  "), vec!["hunter", "green"]);
    }

    #[test]
    fn test_tokenize_empty() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   \t\n"), Vec::<String>::new());
    }

    // =========================================================================
    // Single-tag detection
    // =========================================================================

    #[test]
    fn test_bauhaus() {
        assert_eq!(
            tags("Make it appear with Bauhaus aesthetics"),
            vec![StyleTag::Theme(ThemeTag::Bauhaus)]
        );
    }

    #[test]
    fn test_glassy_synonyms() {
        for prompt in ["glassy", "reflective", "translucent", "like frosted glass"] {
            assert!(
                classify(prompt).contains(&StyleTag::Theme(ThemeTag::Glassy)),
                "{prompt:?} should classify as glassy"
            );
        }
    }

    #[test]
    fn test_retro_gaming_scenario() {
        // The canonical suggestion prompt yields exactly one tag.
        assert_eq!(
            tags("Give everything a retro-gaming flair"),
            vec![StyleTag::Theme(ThemeTag::RetroGaming)]
        );
    }

    #[test]
    fn test_christmas_is_festive() {
        assert_eq!(
            tags("Make it feel like Christmas"),
            vec![StyleTag::Theme(ThemeTag::Festive)]
        );
    }

    #[test]
    fn test_explicit_hue() {
        assert_eq!(tags("a teal look"), vec![StyleTag::Hue(Hue::Teal)]);
    }

    #[test]
    fn test_mood_words() {
        assert_eq!(tags("keep it minimal"), vec![StyleTag::Mood(MoodTag::Minimalist)]);
        assert_eq!(tags("something elegant"), vec![StyleTag::Mood(MoodTag::Elegant)]);
    }

    // =========================================================================
    // Longest-match priority
    // =========================================================================

    #[test]
    fn test_hunter_green_consumes_green() {
        let set = classify("I want it as a hunter green theme");
        assert_eq!(
            set.iter().copied().collect::<Vec<_>>(),
            vec![StyleTag::Hue(Hue::HunterGreen)]
        );
        assert!(!set.contains(&StyleTag::Hue(Hue::Green)));
    }

    #[test]
    fn test_hyphenated_hunter_green() {
        assert_eq!(tags("hunter-green please"), vec![StyleTag::Hue(Hue::HunterGreen)]);
    }

    #[test]
    fn test_retro_gaming_is_one_tag_not_three() {
        assert_eq!(tags("retro gaming"), vec![StyleTag::Theme(ThemeTag::RetroGaming)]);
        assert_eq!(tags("retro-gaming"), vec![StyleTag::Theme(ThemeTag::RetroGaming)]);
    }

    #[test]
    fn test_navy_blue_is_navy() {
        let set = classify("navy blue header");
        assert_eq!(set.first_hue(), Some(Hue::Navy));
        assert!(!set.contains(&StyleTag::Hue(Hue::Blue)));
    }

    #[test]
    fn test_bare_green_after_consumed_phrase() {
        // "green" appearing again outside the phrase span still matches.
        let set = classify("hunter green with green buttons");
        let expected: Vec<StyleTag> =
            vec![StyleTag::Hue(Hue::HunterGreen), StyleTag::Hue(Hue::Green)];
        assert_eq!(set.iter().copied().collect::<Vec<_>>(), expected);
    }

    // =========================================================================
    // Multiple tags and detection order
    // =========================================================================

    #[test]
    fn test_detection_order_left_to_right() {
        assert_eq!(
            tags("a dark glassy purple dashboard"),
            vec![
                StyleTag::Mood(MoodTag::Dark),
                StyleTag::Theme(ThemeTag::Glassy),
                StyleTag::Hue(Hue::Purple),
            ]
        );
    }

    #[test]
    fn test_conflicting_hues_keep_both_in_order() {
        // The resolver picks the first; the classifier just records order.
        assert_eq!(
            tags("hunter green but also crimson"),
            vec![StyleTag::Hue(Hue::HunterGreen), StyleTag::Hue(Hue::Crimson)]
        );
    }

    #[test]
    fn test_repeated_keyword_dedupes() {
        assert_eq!(tags("retro retro retro"), vec![StyleTag::Theme(ThemeTag::RetroGaming)]);
    }

    #[test]
    fn test_modern_friendly_tech_forward() {
        // The original suggestion prompt: one theme, one mood.
        assert_eq!(
            tags("Update the site to feel modern, friendly, and tech-forward"),
            vec![
                StyleTag::Theme(ThemeTag::ModernTech),
                StyleTag::Mood(MoodTag::Playful),
            ]
        );
    }

    // =========================================================================
    // Monotonicity
    // =========================================================================

    #[test]
    fn test_adding_unrelated_words_preserves_tags() {
        let base = classify("glassy");
        let extended = classify("glassy and also quite wonderful overall");
        for tag in base.iter() {
            assert!(extended.contains(tag), "lost {tag} after appending noise");
        }
    }

    #[test]
    fn test_adding_matching_word_preserves_tags() {
        let base = classify("christmas");
        let extended = classify("christmas in hunter green");
        for tag in base.iter() {
            assert!(extended.contains(tag));
        }
    }

    // =========================================================================
    // Totality
    // =========================================================================

    #[test]
    fn test_empty_prompt_is_empty_set() {
        assert!(classify("").is_empty());
        assert!(classify("   ").is_empty());
    }

    #[test]
    fn test_gibberish_is_empty_set() {
        assert!(classify("asdkjasdasd").is_empty());
    }

    #[test]
    fn test_unicode_prompt_does_not_panic() {
        let set = classify("让它看起来像圣诞节 🎄 christmas");
        assert!(set.contains(&StyleTag::Theme(ThemeTag::Festive)));
    }

    #[test]
    fn test_very_long_prompt() {
        let long = "blah ".repeat(10_000) + "retro";
        assert_eq!(tags(&long), vec![StyleTag::Theme(ThemeTag::RetroGaming)]);
    }

    #[test]
    fn test_keyword_inside_longer_word_does_not_match() {
        // "fundamental" contains "fun" but is a different token.
        assert!(classify("fundamental redesign").is_empty());
        // "darkness" is not "dark".
        assert!(classify("darkness").is_empty());
    }

    // =========================================================================
    // Determinism
    // =========================================================================

    #[test]
    fn test_classify_is_deterministic() {
        let prompt = "a dark festive hunter green arcade look";
        assert_eq!(classify(prompt), classify(prompt));
    }
}
