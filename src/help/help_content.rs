pub struct HelpSection {
    pub title: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

pub const HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        title: "GLOBAL",
        entries: &[
            ("F1 or ?", "Toggle this help (? outside text inputs)"),
            ("Tab", "Next pane (Search / Browse / Review)"),
            ("Shift+Tab", "Previous pane"),
            ("Ctrl+R", "Reset to the search screen"),
            ("Ctrl+S", "Cycle source (default / yelp / amazon)"),
            ("Esc", "Reset when an item is selected, else quit"),
            ("Ctrl+C", "Quit"),
        ],
    },
    HelpSection {
        title: "SEARCH",
        entries: &[
            ("Type", "Search as you type"),
            ("Enter", "Search now, even for short queries"),
            ("Down", "Move into the result list"),
        ],
    },
    HelpSection {
        title: "BROWSE",
        entries: &[
            ("↑/↓ or k/j", "Move selection"),
            ("Home/End", "First / last entry"),
            ("Enter", "Show the summary for the entry"),
        ],
    },
    HelpSection {
        title: "REVIEW",
        entries: &[
            ("Type", "Write a review for the selected item"),
            ("Enter", "Submit the review for sentiment prediction"),
        ],
    },
];

pub const HELP_FOOTER: &str = "Esc, F1 or ? to close | j/k to scroll";

/// Lines the popup needs: headers, entries and a blank line between sections
pub fn content_lines() -> usize {
    HELP_SECTIONS
        .iter()
        .map(|s| s.entries.len() + 2)
        .sum::<usize>()
        .saturating_sub(1)
}
