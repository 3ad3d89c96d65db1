use crate::models::{ContentFormat, LengthPreference};

/// Canonical section titles for a (format, length) pair.
///
/// Short skeletons have 3 sections, Medium 5 and Long 7. The last section of
/// every skeleton is the closing ask.
pub fn skeleton(format: ContentFormat, length: LengthPreference) -> &'static [&'static str] {
    use ContentFormat::*;
    use LengthPreference::*;

    match (format, length) {
        (Article, Short) => &["Hook", "Core Argument", "Call to Action"],
        (Article, Medium) => &[
            "Hook",
            "Context",
            "Core Argument",
            "Proof Points",
            "Call to Action",
        ],
        (Article, Long) => &[
            "Hook",
            "Context",
            "The Shift",
            "Core Argument",
            "Proof Points",
            "Objections Answered",
            "Call to Action",
        ],

        (Newsletter, Short) => &["Opening Note", "Featured Insight", "Next Step"],
        (Newsletter, Medium) => &[
            "Opening Note",
            "What's Changing",
            "Featured Insight",
            "Field Notes",
            "Next Step",
        ],
        (Newsletter, Long) => &[
            "Opening Note",
            "What's Changing",
            "Featured Insight",
            "Field Notes",
            "Quick Wins",
            "Community Spotlight",
            "Next Step",
        ],

        (SocialThread, Short) => &["Hook Post", "Key Insight", "Closing Post"],
        (SocialThread, Medium) => &[
            "Hook Post",
            "The Problem",
            "Key Insight",
            "Proof Post",
            "Closing Post",
        ],
        (SocialThread, Long) => &[
            "Hook Post",
            "The Problem",
            "Why Now",
            "Key Insight",
            "Proof Post",
            "Practical Tip",
            "Closing Post",
        ],

        (LandingPage, Short) => &["Hero", "Value Proposition", "Conversion Block"],
        (LandingPage, Medium) => &[
            "Hero",
            "Problem",
            "Value Proposition",
            "Social Proof",
            "Conversion Block",
        ],
        (LandingPage, Long) => &[
            "Hero",
            "Problem",
            "Value Proposition",
            "How It Works",
            "Social Proof",
            "FAQ",
            "Conversion Block",
        ],

        (VideoScript, Short) => &["Cold Open", "Main Beat", "Outro"],
        (VideoScript, Medium) => &[
            "Cold Open",
            "Setup",
            "Main Beat",
            "Proof Moment",
            "Outro",
        ],
        (VideoScript, Long) => &[
            "Cold Open",
            "Setup",
            "Tension",
            "Main Beat",
            "Proof Moment",
            "Recap",
            "Outro",
        ],

        (EmailSequence, Short) => &["Email 1: Spark", "Email 2: Value", "Email 3: Ask"],
        (EmailSequence, Medium) => &[
            "Email 1: Spark",
            "Email 2: Problem",
            "Email 3: Value",
            "Email 4: Proof",
            "Email 5: Ask",
        ],
        (EmailSequence, Long) => &[
            "Email 1: Spark",
            "Email 2: Problem",
            "Email 3: Story",
            "Email 4: Value",
            "Email 5: Proof",
            "Email 6: Objections",
            "Email 7: Ask",
        ],
    }
}

/// Number of sections a (format, length) pair produces
pub fn section_count(format: ContentFormat, length: LengthPreference) -> usize {
    skeleton(format, length).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_counts_follow_length() {
        for format in ContentFormat::ALL {
            assert_eq!(section_count(format, LengthPreference::Short), 3);
            assert_eq!(section_count(format, LengthPreference::Medium), 5);
            assert_eq!(section_count(format, LengthPreference::Long), 7);
        }
    }

    #[test]
    fn test_article_medium_skeleton() {
        assert_eq!(
            skeleton(ContentFormat::Article, LengthPreference::Medium),
            &["Hook", "Context", "Core Argument", "Proof Points", "Call to Action"]
        );
    }

    #[test]
    fn test_titles_unique_within_skeleton() {
        for format in ContentFormat::ALL {
            for length in LengthPreference::ALL {
                let titles = skeleton(format, length);
                for (i, title) in titles.iter().enumerate() {
                    assert!(!titles[i + 1..].contains(title), "{format}/{length}: {title}");
                }
            }
        }
    }
}
