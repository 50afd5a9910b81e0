//! Profile-specific theme helpers for consistent styling across pages.

use crate::domain::Profile;

/// Root class that sets `--accent` for everything below it.
pub fn accent(profile: Profile) -> &'static str {
    match profile {
        Profile::None => "accent-none",
        Profile::Solo => "accent-solo",
        Profile::Team => "accent-team",
        Profile::Employee => "accent-employee",
    }
}

pub fn tagline(profile: Profile) -> &'static str {
    match profile {
        Profile::None => "Calculá el precio real de lo que vendés.",
        Profile::Solo => "Tu tiempo también cuesta.",
        Profile::Team => "Sueldos, cargas y costos del equipo.",
        Profile::Employee => "¿Te pagan lo que corresponde?",
    }
}

pub fn chip(active: bool) -> &'static str {
    if active {
        "chip active"
    } else {
        "chip"
    }
}

pub fn nav_button(active: bool) -> &'static str {
    if active {
        "btn btn-primary"
    } else {
        "btn btn-ghost"
    }
}
