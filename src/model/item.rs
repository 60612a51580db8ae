/// One record in the fixed cosmic-event catalog.
///
/// The catalog is compiled in; nothing is created, mutated, or
/// destroyed at runtime, so everything borrows `'static` text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CosmicEvent {
    pub id: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub category: EventCategory,
    pub significance: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Eclipse,
    PlanetaryAlignment,
    MeteorShower,
}

impl EventCategory {
    /// Display label shown on the card badge.
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Eclipse => "Eclipse",
            EventCategory::PlanetaryAlignment => "Planetary Alignment",
            EventCategory::MeteorShower => "Meteor Shower",
        }
    }

    /// Single-glyph marker used where a badge doesn't fit.
    pub fn glyph(self) -> &'static str {
        match self {
            EventCategory::Eclipse => "◐",
            EventCategory::PlanetaryAlignment => "✶",
            EventCategory::MeteorShower => "☄",
        }
    }
}

/// A static "Did you know?" card shown under the event list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriviaCard {
    pub fact: &'static str,
    pub context: &'static str,
}
