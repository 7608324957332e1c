use ratatui::style::Color;

/// Closed set of metrics shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricKind {
    Emails,
    WhatsApp,
    Searches,
    Data,
    Tweets,
    Songs,
    Phones,
    Coffee,
    Babies,
    Sites,
}

/// Card color for each theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricColor {
    pub day: Color,
    pub night: Color,
}

impl MetricColor {
    pub fn for_mode(self, is_dark_mode: bool) -> Color {
        if is_dark_mode {
            self.night
        } else {
            self.day
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MetricDefinition {
    pub kind: MetricKind,
    pub id: &'static str,
    pub label: &'static str,
    pub rate_per_second: f64,
    pub icon: &'static str,
    pub color: MetricColor,
    pub trivia: &'static str,
}

impl MetricKind {
    pub const ALL: [MetricKind; 10] = [
        MetricKind::Emails,
        MetricKind::WhatsApp,
        MetricKind::Searches,
        MetricKind::Data,
        MetricKind::Tweets,
        MetricKind::Songs,
        MetricKind::Phones,
        MetricKind::Coffee,
        MetricKind::Babies,
        MetricKind::Sites,
    ];

    pub fn definition(self) -> &'static MetricDefinition {
        &METRICS[self.index()]
    }

    /// Position of this kind in `METRICS`
    pub fn index(self) -> usize {
        match self {
            MetricKind::Emails => 0,
            MetricKind::WhatsApp => 1,
            MetricKind::Searches => 2,
            MetricKind::Data => 3,
            MetricKind::Tweets => 4,
            MetricKind::Songs => 5,
            MetricKind::Phones => 6,
            MetricKind::Coffee => 7,
            MetricKind::Babies => 8,
            MetricKind::Sites => 9,
        }
    }
}

const fn color(day: (u8, u8, u8), night: (u8, u8, u8)) -> MetricColor {
    MetricColor {
        day: Color::Rgb(day.0, day.1, day.2),
        night: Color::Rgb(night.0, night.1, night.2),
    }
}

/// Static rate table, in display order.
///
/// Estimates derived from Worldometer, Internet Live Stats and 2025 digital
/// reports. Rates are chosen so the daily totals line up with "today"
/// counters that reset at local midnight.
pub static METRICS: [MetricDefinition; 10] = [
    MetricDefinition {
        kind: MetricKind::Emails,
        id: "emails",
        label: "Emails Sent Today",
        // ~330 billion per day
        rate_per_second: 3_819_444.0,
        icon: "✉",
        color: color((8, 145, 178), (34, 211, 238)),
        trivia: "Did you know? Approximately 45% of all emails sent daily are spam, yet email remains the primary communication channel for 4 billion users worldwide.",
    },
    MetricDefinition {
        kind: MetricKind::WhatsApp,
        id: "whatsapp",
        label: "WhatsApp Messages Sent",
        // ~140 billion per day
        rate_per_second: 1_620_370.0,
        icon: "☏",
        color: color((5, 150, 105), (52, 211, 153)),
        trivia: "The average user checks WhatsApp more than 23 times per day, contributing to a global volume that could fill 50 Libraries of Congress every second.",
    },
    MetricDefinition {
        kind: MetricKind::Searches,
        id: "searches",
        label: "Google Searches Today",
        // ~9 billion per day
        rate_per_second: 104_166.0,
        icon: "⌕",
        color: color((225, 29, 72), (251, 113, 133)),
        trivia: "15% of all searches seen by Google every day have never been searched before, showing humanity's endless curiosity.",
    },
    MetricDefinition {
        kind: MetricKind::Data,
        id: "data",
        label: "Internet Traffic (GB) Today",
        rate_per_second: 182_500.0,
        icon: "≋",
        color: color((13, 148, 136), (94, 234, 212)),
        trivia: "By 2025, it's estimated that 463 exabytes of data will be created each day globally. That's the equivalent of 212 million DVDs per day.",
    },
    MetricDefinition {
        kind: MetricKind::Tweets,
        id: "tweets",
        label: "Tweets Sent Today",
        // ~800 million per day
        rate_per_second: 9_259.0,
        icon: "✦",
        color: color((2, 132, 199), (56, 189, 248)),
        trivia: "The Library of Congress archived every public tweet from 2006 to 2017, creating one of the largest records of human conversation in history.",
    },
    MetricDefinition {
        kind: MetricKind::Songs,
        id: "songs",
        label: "Songs Streamed Today",
        rate_per_second: 40_509.0,
        icon: "♫",
        color: color((124, 58, 237), (167, 139, 250)),
        trivia: "Streaming now accounts for over 84% of US music industry revenue, with the average listener streaming 961 hours of music per year.",
    },
    MetricDefinition {
        kind: MetricKind::Phones,
        id: "phones",
        label: "Cellular Phones Sold Today",
        // ~5.6 million per day
        rate_per_second: 65.0,
        icon: "☎",
        color: color((79, 70, 229), (129, 140, 248)),
        trivia: "There are now more mobile devices on Earth than there are people, with the average replacement cycle for a smartphone being roughly 2.5 years.",
    },
    MetricDefinition {
        kind: MetricKind::Coffee,
        id: "coffee",
        label: "Cups of Coffee Consumed",
        rate_per_second: 26_041.0,
        icon: "♨",
        color: color((217, 119, 6), (252, 211, 77)),
        trivia: "Finland consumes the most coffee per capita, but globally, we drink enough coffee daily to fill 300 Olympic-sized swimming pools.",
    },
    MetricDefinition {
        kind: MetricKind::Babies,
        id: "babies",
        label: "Babies Born Today",
        // ~367,000 per day
        rate_per_second: 4.25,
        icon: "✿",
        color: color((202, 138, 4), (253, 224, 71)),
        trivia: "About 250 babies are born every minute. That's a new classroom of kindergarteners entering the world every 5 seconds.",
    },
    MetricDefinition {
        kind: MetricKind::Sites,
        id: "sites",
        label: "New Websites Created",
        // ~252,000 per day
        rate_per_second: 3.0,
        icon: "◍",
        color: color((2, 132, 199), (125, 211, 252)),
        trivia: "While over 250,000 new websites are created daily, less than 20% of the 1.1 billion websites on the internet are actually active.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn table_order_matches_kind_index() {
        for kind in MetricKind::ALL {
            assert_eq!(kind.definition().kind, kind);
        }
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = METRICS.iter().map(|m| m.id).collect();
        assert_eq!(ids.len(), METRICS.len());
    }

    #[test]
    fn rates_are_non_negative_and_finite() {
        for m in &METRICS {
            assert!(m.rate_per_second.is_finite());
            assert!(m.rate_per_second >= 0.0, "{} has negative rate", m.id);
        }
    }

    #[test]
    fn color_follows_theme() {
        let c = MetricKind::Emails.definition().color;
        assert_eq!(c.for_mode(true), Color::Rgb(34, 211, 238));
        assert_eq!(c.for_mode(false), Color::Rgb(8, 145, 178));
    }
}
