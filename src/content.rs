// src/content.rs
// Canned copy for the page. Everything here is compile-time data.

pub const CONTACT_MAILTO: &str = "mailto:hello@example.com";
pub const CREATE_MAILTO: &str = "mailto:hello@example.com?subject=Let's%20create%20something";
pub const SCHEDULING_URL: &str = "https://cal.com/";
pub const SOCIAL_URL: &str = "https://linkedin.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub label: &'static str,
    pub detail: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallToAction {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentProfile {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlights: [Highlight; 3],
    pub cta: CallToAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversationStarter {
    pub heading: &'static str,
    pub body: &'static str,
}

/// Title uses an ASCII apostrophe so the selector label reads "Let's dream something new".
pub const CREATOR: ContentProfile = ContentProfile {
    title: "Let's dream something new.",
    subtitle: "Exploring ideas, shaping stories, and building delightful experiences from the first hello.",
    highlights: [
        Highlight {
            label: "Idea sketching",
            detail: "Quickly map concepts into shareable visuals and wireframes.",
        },
        Highlight {
            label: "Narrative design",
            detail: "Craft messages that feel like a friendly conversation.",
        },
        Highlight {
            label: "Mood boards",
            detail: "Translate keywords and feelings into cohesive creative direction.",
        },
    ],
    cta: CallToAction { label: "Share an idea", href: CREATE_MAILTO },
};

pub const BUILDER: ContentProfile = ContentProfile {
    title: "Ready to roll up our sleeves.",
    subtitle: "From accessible interfaces to production-ready deployments, momentum starts here.",
    highlights: [
        Highlight {
            label: "Design systems",
            detail: "Document reusable components that stay consistent at scale.",
        },
        Highlight {
            label: "Rapid prototyping",
            detail: "Iterate in the browser with modern tooling and tight feedback loops.",
        },
        Highlight {
            label: "Ship to Vercel",
            detail: "Set up previews, observability, and confident production releases.",
        },
    ],
    cta: CallToAction { label: "Start a build", href: SCHEDULING_URL },
};

pub const LISTENER: ContentProfile = ContentProfile {
    title: "It all begins with listening.",
    subtitle: "Clarify goals, understand constraints, and uncover the story behind the simple word “Hi”.",
    highlights: [
        Highlight {
            label: "Discovery sessions",
            detail: "Structured chats that surface what matters most to you.",
        },
        Highlight {
            label: "Team alignment",
            detail: "Translate insights into a roadmap everyone can rally behind.",
        },
        Highlight {
            label: "Guided next steps",
            detail: "Summaries, timelines, and lightweight documentation\u{2014}done for you.",
        },
    ],
    cta: CallToAction { label: "Book a chat", href: SCHEDULING_URL },
};

// Display order matters.
pub const CONVERSATION_STARTERS: [ConversationStarter; 3] = [
    ConversationStarter {
        heading: "Something playful",
        body: "What's the smallest idea that would still make today feel like a win?",
    },
    ConversationStarter {
        heading: "Something ambitious",
        body: "If time wasn't a factor, what would this project grow into?",
    },
    ConversationStarter {
        heading: "Something practical",
        body: "What's blocking progress right now\u{2014}and how can we unblock it fast?",
    },
];

/// Selector button text: the title up to (not including) its first period.
pub fn button_label(title: &str) -> &str {
    title.split('.').next().unwrap_or(title)
}

pub fn footer_text(year: u32) -> String {
    format!("© {year} Hi there.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_stops_at_first_period() {
        assert_eq!(button_label("Let's dream something new."), "Let's dream something new");
        assert_eq!(button_label("One. Two."), "One");
        assert_eq!(button_label("No period here"), "No period here");
        assert_eq!(button_label(".leading"), "");
    }

    #[test]
    fn starters_keep_declared_order() {
        let headings: Vec<_> = CONVERSATION_STARTERS.iter().map(|s| s.heading).collect();
        assert_eq!(
            headings,
            ["Something playful", "Something ambitious", "Something practical"]
        );
    }

    #[test]
    fn creator_cta_carries_subject_unencoded_by_us() {
        assert!(CREATOR.cta.href.starts_with("mailto:hello@example.com"));
        assert!(CREATOR.cta.href.contains("subject=Let's%20create%20something"));
    }

    #[test]
    fn every_profile_has_distinct_highlights() {
        for p in [CREATOR, BUILDER, LISTENER] {
            let [a, b, c] = p.highlights;
            assert!(a.label != b.label && b.label != c.label && a.label != c.label);
            assert!(p.title.ends_with('.'));
        }
    }

    #[test]
    fn copy_matches_the_page_text() {
        assert_eq!(
            LISTENER.highlights[2].detail,
            "Summaries, timelines, and lightweight documentation\u{2014}done for you."
        );
        let bodies: Vec<_> = CONVERSATION_STARTERS.iter().map(|s| s.body).collect();
        assert_eq!(
            bodies,
            [
                "What's the smallest idea that would still make today feel like a win?",
                "If time wasn't a factor, what would this project grow into?",
                "What's blocking progress right now\u{2014}and how can we unblock it fast?",
            ]
        );
        let details: Vec<_> = [CREATOR, BUILDER]
            .iter()
            .flat_map(|p| p.highlights.iter().map(|h| h.detail))
            .collect();
        assert_eq!(
            details,
            [
                "Quickly map concepts into shareable visuals and wireframes.",
                "Craft messages that feel like a friendly conversation.",
                "Translate keywords and feelings into cohesive creative direction.",
                "Document reusable components that stay consistent at scale.",
                "Iterate in the browser with modern tooling and tight feedback loops.",
                "Set up previews, observability, and confident production releases.",
            ]
        );
    }

    #[test]
    fn footer_has_year() {
        assert_eq!(footer_text(2026), "© 2026 Hi there.");
    }
}
