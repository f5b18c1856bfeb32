/// ANSI colour helpers for terminal output.
use crate::models::zone::ZoneId;
use ansi_term::Colour;

/// Cheapest zones in green, edge of radius in yellow, out of area in red.
pub fn colour_for_zone(id: ZoneId) -> Colour {
    match id {
        ZoneId::A => Colour::Green,
        ZoneId::B => Colour::Cyan,
        ZoneId::C => Colour::Yellow,
        ZoneId::OutOfArea => Colour::Red,
    }
}

pub fn paint_zone(id: ZoneId, text: &str) -> String {
    colour_for_zone(id).bold().paint(text).to_string()
}
