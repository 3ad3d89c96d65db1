use crate::text::slugify;

/// Broad family a distribution channel belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Character-limited social feeds (Twitter/X, Threads, Instagram, ...)
    ShortSocial,
    /// Professional networks (LinkedIn, Facebook)
    Professional,
    Email,
    /// Blogs and other long-form publishing surfaces
    LongForm,
    Video,
    /// Anything the caller typed in that we do not recognise
    Custom,
}

/// Conventions for one channel family
#[derive(Debug)]
pub struct ChannelProfile {
    /// Framing appended after the channel name in the artifact title
    pub title_suffix: &'static str,
    /// Cap on the angle part of the title, if the channel favours short titles
    pub title_max_chars: Option<usize>,
    /// Purpose line; `{brand}` and `{audience}` are filled in
    pub purpose: &'static str,
    /// Hashtags appended to the body
    pub hashtags: usize,
}

static SHORT_SOCIAL: ChannelProfile = ChannelProfile {
    title_suffix: "Quick Take",
    title_max_chars: Some(60),
    purpose: "Scroll-stopping hook that drives {audience} to act",
    hashtags: 3,
};

static PROFESSIONAL: ChannelProfile = ChannelProfile {
    title_suffix: "Insight Post",
    title_max_chars: Some(90),
    purpose: "Thought-leadership post positioning {brand} with {audience}",
    hashtags: 2,
};

static EMAIL: ChannelProfile = ChannelProfile {
    title_suffix: "Email Feature",
    title_max_chars: None,
    purpose: "Inbox-ready feature that nurtures {audience} toward the next step",
    hashtags: 0,
};

static LONG_FORM: ChannelProfile = ChannelProfile {
    title_suffix: "Feature Story",
    title_max_chars: None,
    purpose: "Long-form excerpt that builds search visibility for {brand}",
    hashtags: 0,
};

static VIDEO: ChannelProfile = ChannelProfile {
    title_suffix: "Video Script",
    title_max_chars: Some(70),
    purpose: "Beat-by-beat script that brings the {brand} story to {audience}",
    hashtags: 0,
};

static CUSTOM: ChannelProfile = ChannelProfile {
    title_suffix: "Adaptation",
    title_max_chars: None,
    purpose: "Adapted excerpt of the core story for {audience}",
    hashtags: 0,
};

impl ChannelKind {
    /// Classify a free-form channel name. Matching ignores case and punctuation.
    pub fn classify(channel: &str) -> Self {
        match slugify(channel).as_str() {
            "twitter" | "x" | "twitter-x" | "x-twitter" | "threads" | "bluesky" | "mastodon"
            | "instagram" | "tiktok" => Self::ShortSocial,
            "linkedin" | "facebook" => Self::Professional,
            "email" | "e-mail" | "newsletter" | "email-newsletter" => Self::Email,
            "blog" | "website" | "medium" | "substack" => Self::LongForm,
            "youtube" | "youtube-shorts" | "vimeo" | "video" | "webinar" => Self::Video,
            _ => Self::Custom,
        }
    }

    pub fn profile(self) -> &'static ChannelProfile {
        match self {
            Self::ShortSocial => &SHORT_SOCIAL,
            Self::Professional => &PROFESSIONAL,
            Self::Email => &EMAIL,
            Self::LongForm => &LONG_FORM,
            Self::Video => &VIDEO,
            Self::Custom => &CUSTOM,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_default_channels() {
        assert_eq!(ChannelKind::classify("LinkedIn"), ChannelKind::Professional);
        assert_eq!(ChannelKind::classify("Email"), ChannelKind::Email);
        assert_eq!(ChannelKind::classify("Blog"), ChannelKind::LongForm);
        assert_eq!(ChannelKind::classify("Twitter/X"), ChannelKind::ShortSocial);
        assert_eq!(ChannelKind::classify("YouTube"), ChannelKind::Video);
    }

    #[test]
    fn test_classify_custom_channel() {
        assert_eq!(ChannelKind::classify("Partner Portal"), ChannelKind::Custom);
        assert_eq!(ChannelKind::classify("  tiktok "), ChannelKind::ShortSocial);
    }
}
