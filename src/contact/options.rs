//! Static option catalog shared by validation and rendering

use serde::Serialize;

/// A selectable option with a stable id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

impl OptionEntry {
    const fn new(id: &'static str, label: &'static str, description: &'static str) -> Self {
        Self {
            id,
            label,
            description,
        }
    }
}

/// Kinds of work a visitor can ask about
pub const PROJECT_TYPES: &[OptionEntry] = &[
    OptionEntry::new(
        "legal",
        "Legal Consultation",
        "Contract review, compliance and legal advice",
    ),
    OptionEntry::new(
        "legaltech",
        "LegalTech Development",
        "Software for legal teams and workflows",
    ),
    OptionEntry::new(
        "creative",
        "Creative Design",
        "Illustration, artwork and visual identity",
    ),
    OptionEntry::new(
        "consultation",
        "Strategy Consultation",
        "Product and business strategy sessions",
    ),
    OptionEntry::new(
        "partnership",
        "Partnership",
        "Long-term collaboration or joint ventures",
    ),
    OptionEntry::new("other", "Other", "Anything that does not fit above"),
];

pub const BUDGET_RANGES: &[OptionEntry] = &[
    OptionEntry::new("under-5k", "Under $5k", "Small engagements and quick fixes"),
    OptionEntry::new("5k-15k", "$5k - $15k", "Focused projects of a few weeks"),
    OptionEntry::new("15k-50k", "$15k - $50k", "Multi-month projects"),
    OptionEntry::new("50k-plus", "$50k+", "Large or ongoing engagements"),
    OptionEntry::new("not-sure", "Not sure yet", "Budget to be discussed"),
];

pub const TIMELINES: &[OptionEntry] = &[
    OptionEntry::new("asap", "As soon as possible", "Work should start immediately"),
    OptionEntry::new("1-month", "Within a month", "Start in the next few weeks"),
    OptionEntry::new("1-3-months", "1 - 3 months", "Planned for the coming quarter"),
    OptionEntry::new("3-6-months", "3 - 6 months", "Longer-term planning"),
    OptionEntry::new("flexible", "Flexible", "No fixed deadline"),
];

pub const PRIORITIES: &[OptionEntry] = &[
    OptionEntry::new("low", "Low", "No rush"),
    OptionEntry::new("medium", "Medium", "Normal response time"),
    OptionEntry::new("high", "High", "Time-sensitive request"),
];

/// Look up an option by id
pub fn find_option(table: &'static [OptionEntry], id: &str) -> Option<&'static OptionEntry> {
    table.iter().find(|entry| entry.id == id)
}

/// Label for an option id, if the id belongs to the table
pub fn label_for(table: &'static [OptionEntry], id: &str) -> Option<&'static str> {
    find_option(table, id).map(|entry| entry.label)
}

/// Step through a table with a leading "not set" slot.
///
/// An unknown or empty `current` is treated as the unset slot, so the
/// first forward step always lands on the first entry.
pub fn cycle_option(table: &'static [OptionEntry], current: &str, forward: bool) -> &'static str {
    let slots = table.len() + 1;
    let index = table
        .iter()
        .position(|entry| entry.id == current)
        .map_or(0, |pos| pos + 1);

    let next = if forward {
        (index + 1) % slots
    } else {
        (index + slots - 1) % slots
    };

    match next {
        0 => "",
        n => table[n - 1].id,
    }
}
