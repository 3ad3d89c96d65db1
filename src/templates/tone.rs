use crate::models::ContentTone;

/// Phrasing templates for one tone.
///
/// Placeholders are filled by [`super::fill`]. Templates in the same array
/// differ in their fixed text, so they stay distinct after substitution.
#[derive(Debug)]
pub struct ToneProfile {
    /// What the package should let the audience do, after "help them"
    pub mission_outcome: &'static str,
    /// Audience insight seen through this tone
    pub insight_lens: &'static str,
    /// Single-sentence creative angle; `{keyword}` carries the focus phrase
    pub angle: &'static str,
    /// Headlines for long-form formats
    pub headlines: [&'static str; 4],
    /// Headlines for social threads and video scripts
    pub punchy_headlines: [&'static str; 4],
    /// Sentences that carry one keyword into a draft paragraph
    pub keyword_lines: [&'static str; 3],
    /// Filler sentences that give paragraphs the tone's voice
    pub voice: [&'static str; 5],
    /// Closing paragraph lead-in to the call to action
    pub closing: &'static str,
    pub cta_direct: &'static str,
    pub cta_curiosity: &'static str,
    pub cta_urgency: &'static str,
}

static INSPIRATIONAL: ToneProfile = ToneProfile {
    mission_outcome: "see what becomes possible and rally their teams around it",
    insight_lens: "{audience} respond to a vision of what {objective} could unlock for their teams.",
    angle: "Show how {brand} turns {keyword} into a story {audience} can rally behind.",
    headlines: [
        "Reimagine {objective} with {brand}",
        "The Future of {keyword} Starts Here",
        "How {audience} Are Leading with {keyword}",
        "From Vision to Launch: {brand} on {objective}",
    ],
    punchy_headlines: [
        "Dream Bigger with {brand}",
        "{keyword}, Reimagined",
        "Your Next Chapter Starts Now",
        "Lead the Shift",
    ],
    keyword_lines: [
        "Imagine what {keyword} makes possible for {audience}.",
        "The next chapter begins with {keyword}.",
        "Every bold launch is built on {keyword}.",
    ],
    voice: [
        "The teams that win are the ones that dare to tell a bigger story.",
        "{brand} exists to help {audience} lead that change.",
        "Momentum builds when every launch points toward the same horizon.",
        "This is the moment to move from shipping features to shaping a movement.",
        "What feels ambitious today becomes the new standard tomorrow.",
    ],
    closing: "The next chapter is yours to write.",
    cta_direct: "{cta} with {brand}.",
    cta_curiosity: "Wondering what {objective} could become for your team? {cta}.",
    cta_urgency: "Your moment is now: {cta} while this season's momentum is building.",
};

static INFORMATIVE: ToneProfile = ToneProfile {
    mission_outcome: "make confident, well-informed decisions",
    insight_lens: "{audience} want clear, evidence-backed guidance on {objective} before they commit.",
    angle: "Give {audience} a practical, evidence-led guide to {keyword} from {brand}.",
    headlines: [
        "A Practical Guide to {objective}",
        "What {audience} Should Know About {keyword}",
        "{brand} Explains {keyword}",
        "The Essentials of {objective}, Step by Step",
    ],
    punchy_headlines: [
        "{keyword}, Explained",
        "{brand}: The Quick Guide",
        "5 Facts About {keyword}",
        "Know This Before You Launch",
    ],
    keyword_lines: [
        "Start with {keyword}: it shapes every decision that follows.",
        "Research consistently points to {keyword} as a deciding factor.",
        "Here is how {keyword} works in practice.",
    ],
    voice: [
        "The data tells a consistent story.",
        "{brand} has distilled the process into clear, repeatable steps.",
        "Each step builds on the one before it.",
        "Teams that document their approach see more predictable results.",
        "The goal is clarity, not complexity.",
    ],
    closing: "You now have the essentials.",
    cta_direct: "{cta} to put these steps into practice.",
    cta_curiosity: "Want to see how {objective} works for teams like yours? {cta}.",
    cta_urgency: "Planning starts now: {cta} before your next launch cycle.",
};

static PLAYFUL: ToneProfile = ToneProfile {
    mission_outcome: "actually enjoy the journey",
    insight_lens: "{audience} are tired of dry playbooks and love ideas that make {objective} fun.",
    angle: "Let {brand} make {keyword} the most fun part of {audience}'s week.",
    headlines: [
        "Who Said {objective} Can't Be Fun?",
        "{brand}'s Delightfully Simple Take on {keyword}",
        "{keyword}, But Make It Fun",
        "The Unboring Guide for {audience}",
    ],
    punchy_headlines: [
        "Plot Twist: {keyword}",
        "{brand} Says Hi",
        "Okay, This Is Fun",
        "Spoiler: It Works",
    ],
    keyword_lines: [
        "Enter {keyword}, the unexpected hero of this story.",
        "Think of {keyword} as your secret sauce.",
        "Yes, {keyword} can be delightful.",
    ],
    voice: [
        "Spoiler alert: it is easier than it looks.",
        "{brand} brings the snacks and the strategy.",
        "Nobody ever regretted making work a little more fun.",
        "Here is where things get interesting.",
        "Pro tip: celebrate the small wins too.",
    ],
    closing: "Ready for the fun part?",
    cta_direct: "{cta} and bring your best ideas.",
    cta_curiosity: "Psst, want to see what {objective} looks like with a little flair? {cta}.",
    cta_urgency: "Go on: {cta} before the good slots disappear.",
};

static AUTHORITATIVE: ToneProfile = ToneProfile {
    mission_outcome: "act on proven expertise",
    insight_lens: "{audience} trust partners with a proven track record in {objective}.",
    angle: "Establish {brand} as the definitive authority on {keyword} for {audience}.",
    headlines: [
        "The Definitive Playbook for {objective}",
        "Why {keyword} Separates Leaders from Followers",
        "{brand} on What Actually Works in {objective}",
        "Lessons from the Front Lines of {keyword}",
    ],
    punchy_headlines: [
        "The {keyword} Standard",
        "{brand}: Proven Playbook",
        "What Leaders Do Differently",
        "Expertise, Applied",
    ],
    keyword_lines: [
        "Leaders treat {keyword} as a discipline, not an afterthought.",
        "Proven programs are built on {keyword}.",
        "The benchmark the best teams hold themselves to is {keyword}.",
    ],
    voice: [
        "{brand} has guided teams through this exact challenge.",
        "The pattern is clear across every successful program.",
        "Experience shows the fundamentals matter most.",
        "Rigor at this stage prevents costly rework later.",
        "This is the standard high-performing teams hold themselves to.",
    ],
    closing: "The path forward is clear.",
    cta_direct: "{cta} with {brand}'s specialists.",
    cta_curiosity: "See how leading teams approach {objective}: {cta}.",
    cta_urgency: "Act decisively: {cta} this quarter.",
};

static BOLD: ToneProfile = ToneProfile {
    mission_outcome: "break from the status quo",
    insight_lens: "{audience} are ready to challenge the old way of doing {objective}.",
    angle: "{brand} makes {keyword} the unfair advantage {audience} cannot ignore.",
    headlines: [
        "Stop Playing Safe with {objective}",
        "{keyword} Is Your Unfair Advantage",
        "{brand} Breaks the {objective} Playbook",
        "The Status Quo Is Failing {audience}",
    ],
    punchy_headlines: [
        "Break the Mold",
        "{keyword}. No Excuses.",
        "{brand} Goes First",
        "Stop Waiting",
    ],
    keyword_lines: [
        "Most teams are afraid to pull the lever called {keyword}.",
        "Double down on {keyword}.",
        "Make {keyword} impossible to ignore.",
    ],
    voice: [
        "Playing it safe is the riskiest move left.",
        "{brand} is built for teams that refuse to blend in.",
        "The old playbook is out of moves.",
        "Own the narrative before someone else does.",
        "Half-measures will not cut it.",
    ],
    closing: "No more waiting.",
    cta_direct: "{cta}. Start now.",
    cta_curiosity: "Think {objective} has to look like everyone else's? {cta}.",
    cta_urgency: "The window is closing: {cta} today.",
};

static EMPATHETIC: ToneProfile = ToneProfile {
    mission_outcome: "feel understood and supported at every step",
    insight_lens: "{audience} often feel stretched thin and want a partner who understands the pressure of {objective}.",
    angle: "Meet {audience} where they are and show how {brand} makes {keyword} feel manageable.",
    headlines: [
        "You Don't Have to Navigate {objective} Alone",
        "A Kinder Approach to {keyword}",
        "{brand} Understands What {audience} Are Facing",
        "Making {objective} Feel Manageable Again",
    ],
    punchy_headlines: [
        "We Hear You",
        "{keyword}, Made Easier",
        "{brand} Has Your Back",
        "One Step at a Time",
    ],
    keyword_lines: [
        "Remember that {keyword} does not have to feel overwhelming.",
        "We have seen how much {keyword} matters to teams like yours.",
        "Let {keyword} take some weight off your shoulders.",
    ],
    voice: [
        "It is okay to feel stretched thin right now.",
        "{brand} is here to make the load lighter.",
        "Small, steady steps add up to real progress.",
        "You are not the only team facing this.",
        "Progress should feel sustainable, not exhausting.",
    ],
    closing: "We are here when you are ready.",
    cta_direct: "{cta} and let us help.",
    cta_curiosity: "Wondering how other teams eased the pressure of {objective}? {cta}.",
    cta_urgency: "Do not carry it alone any longer: {cta} this week.",
};

/// Templates for a tone
pub fn tone_profile(tone: ContentTone) -> &'static ToneProfile {
    match tone {
        ContentTone::Inspirational => &INSPIRATIONAL,
        ContentTone::Informative => &INFORMATIVE,
        ContentTone::Playful => &PLAYFUL,
        ContentTone::Authoritative => &AUTHORITATIVE,
        ContentTone::Bold => &BOLD,
        ContentTone::Empathetic => &EMPATHETIC,
    }
}
