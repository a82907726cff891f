//! Headphones catalog and filtering.
//!
//! The catalog is a fixed in-memory dataset; filtering is a pure function
//! over it, so tool calls have no failure path and no side effects.

use super::models::{Activity, Filter, FindHeadphonesInput, Headphone, PriceBracket, Style};

/// The full headphones catalog.
pub const HEADPHONES: [Headphone; 6] = [
    Headphone {
        id: "arc-commuter",
        name: "ArcSound Metro ANC",
        price_bracket: PriceBracket::Budget,
        activity: Activity::Commuting,
        style: Style::OverEar,
        price: "$99",
        description: "Lightweight ANC cans with USB-C fast charging and 28-hour battery life.",
        cta_url: "https://example.com/arcsound-metro",
        image_url: None,
    },
    Headphone {
        id: "pulse-lite",
        name: "Pulse Lite Sport",
        price_bracket: PriceBracket::Budget,
        activity: Activity::Fitness,
        style: Style::InEar,
        price: "$79",
        description: "IPX7 buds with secure wing tips and an energetic EQ for cardio workouts.",
        cta_url: "https://example.com/pulse-lite",
        image_url: None,
    },
    Headphone {
        id: "soniq-pro",
        name: "Soniq Pro Studio",
        price_bracket: PriceBracket::Premium,
        activity: Activity::Studio,
        style: Style::OverEar,
        price: "$349",
        description: "Closed-back studio monitors tuned for accurate mixing and long sessions.",
        cta_url: "https://example.com/soniq-pro",
        image_url: None,
    },
    Headphone {
        id: "lumen-air",
        name: "Lumen Air Max",
        price_bracket: PriceBracket::Premium,
        activity: Activity::Commuting,
        style: Style::InEar,
        price: "$279",
        description: "Adaptive transparency with wind reduction for commuters on busy streets.",
        cta_url: "https://example.com/lumen-air",
        image_url: None,
    },
    Headphone {
        id: "nova-gx",
        name: "Nova GX Wireless",
        price_bracket: PriceBracket::Midrange,
        activity: Activity::Gaming,
        style: Style::OverEar,
        price: "$179",
        description: "Low-latency 2.4GHz wireless with spatial audio tuned for FPS titles.",
        cta_url: "https://example.com/nova-gx",
        image_url: None,
    },
    Headphone {
        id: "auris-flow",
        name: "Auris Flow",
        price_bracket: PriceBracket::Midrange,
        activity: Activity::Fitness,
        style: Style::OnEar,
        price: "$149",
        description: "Sweat-resistant on-ears with breathable pads and multipoint Bluetooth.",
        cta_url: "https://example.com/auris-flow",
        image_url: None,
    },
];

/// Filters the catalog against the given input criteria.
pub fn filter_headphones(input: &FindHeadphonesInput) -> Vec<Headphone> {
    HEADPHONES
        .iter()
        .filter(|h| {
            matches(&input.price_bracket, &h.price_bracket)
                && matches(&input.activity, &h.activity)
                && matches(&input.style, &h.style)
        })
        .cloned()
        .collect()
}

/// An absent filter places no constraint on its dimension.
fn matches<T: PartialEq>(filter: &Option<Filter<T>>, value: &T) -> bool {
    filter.as_ref().map_or(true, |f| f.matches(value))
}
