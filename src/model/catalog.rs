use chrono::{Datelike, NaiveDate};

use crate::model::item::{CosmicEvent, EventCategory, TriviaCard};

/// The complete event catalog. Order matters: the selector returns
/// slices and explicit permutations of this array.
pub static EVENTS: [CosmicEvent; 3] = [
    CosmicEvent {
        id: 1,
        title: "Total Solar Eclipse Over the Pacific",
        description: "A magnificent total solar eclipse swept across the Pacific Ocean, \
                      casting its shadow over remote islands and creating a spectacular \
                      celestial display.",
        category: EventCategory::Eclipse,
        significance: "Witnessed by astronomical expeditions and local communities",
    },
    CosmicEvent {
        id: 2,
        title: "Mars-Jupiter Conjunction",
        description: "Mars and Jupiter appeared in close conjunction in the constellation \
                      Gemini, creating a rare planetary dance visible to the naked eye.",
        category: EventCategory::PlanetaryAlignment,
        significance: "Visible across the Northern Hemisphere for 3 hours",
    },
    CosmicEvent {
        id: 3,
        title: "Perseid Meteor Shower Peak",
        description: "The annual Perseid meteor shower reached its peak intensity, with up \
                      to 60 meteors per hour streaking across the night sky.",
        category: EventCategory::MeteorShower,
        significance: "Best viewing conditions in rural areas after midnight",
    },
];

/// Static cards for the "Did you know?" section.
pub static TRIVIA: [TriviaCard; 3] = [
    TriviaCard {
        fact: "On this date, Voyager 1 was traveling at 17 kilometers per second through \
               interstellar space.",
        context: "Space Exploration",
    },
    TriviaCard {
        fact: "The Sun completed approximately 0.04% of its 25-day rotation period on this \
               day.",
        context: "Solar Activity",
    },
    TriviaCard {
        fact: "Light from the nearest star, Proxima Centauri, took 4.24 years to reach \
               Earth on this date.",
        context: "Stellar Distance",
    },
];

/// Selects the events shown for a date.
///
/// Only the calendar month participates: June gets the first two
/// records, August gets the third then the first, every other month
/// gets the whole catalog in order. Day and year are ignored.
pub fn events_for(date: NaiveDate) -> Vec<&'static CosmicEvent> {
    match date.month() {
        6 => EVENTS.iter().take(2).collect(),
        8 => vec![&EVENTS[2], &EVENTS[0]],
        _ => EVENTS.iter().collect(),
    }
}
