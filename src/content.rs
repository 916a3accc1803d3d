//! Static per-phase content: display glyphs, descriptions, practice
//! recommendations, and the reading-favorability table.
//!
//! All tables are `'static` data resolved by a match on [`MoonPhase`]; they
//! are baked into the binary and never rebuilt per call.

use crate::models::MoonPhase;

/// Static profile of a phase: glyph, texts, and practice recommendations.
#[derive(Debug, Clone, Copy)]
pub struct PhaseProfile {
    pub emoji: &'static str,
    pub description: &'static str,
    pub energy: &'static str,
    pub tarot: &'static str,
    pub general: &'static [&'static str],
}

/// Static favorability entry: verdict plus explanatory texts.
#[derive(Debug, Clone, Copy)]
pub struct FavorabilityEntry {
    pub is_favorable: bool,
    pub reason: &'static str,
    pub recommendation: &'static str,
}

/// Profile for a phase.
pub fn profile(phase: MoonPhase) -> &'static PhaseProfile {
    match phase {
        MoonPhase::NewMoon => &PhaseProfile {
            emoji: "🌑",
            description: "The Moon is invisible, standing between Earth and Sun. A blank page: the cycle begins anew.",
            energy: "Beginnings, intention, quiet potential",
            tarot: "Ask the cards about new beginnings; lay a spread for intentions you want to carry through the coming cycle.",
            general: &[
                "Set intentions for the month ahead",
                "Start journals, plans, and projects",
                "Rest and let ideas take root",
            ],
        },
        MoonPhase::WaxingCrescent => &PhaseProfile {
            emoji: "🌒",
            description: "A first sliver of light returns. Intentions set at the new moon begin to sprout.",
            energy: "Hope, momentum, first steps",
            tarot: "Draw a card each morning asking what small step feeds your intention today.",
            general: &[
                "Take the first concrete step on a plan",
                "Gather resources and allies",
                "Keep commitments small and steady",
            ],
        },
        MoonPhase::FirstQuarter => &PhaseProfile {
            emoji: "🌓",
            description: "Half lit and climbing. Obstacles surface and ask to be worked through.",
            energy: "Decision, friction, perseverance",
            tarot: "Use a two-card crossing spread: the obstacle in your path and the strength that answers it.",
            general: &[
                "Make the decision you have been postponing",
                "Push through resistance rather than around it",
                "Revise plans with what you have learned",
            ],
        },
        MoonPhase::WaxingGibbous => &PhaseProfile {
            emoji: "🌔",
            description: "Nearly full, the light swells. Efforts refine themselves toward completion.",
            energy: "Refinement, patience, trust",
            tarot: "Ask the cards what still needs adjusting before your intention ripens; fine-tune rather than restart.",
            general: &[
                "Polish details and finish preparations",
                "Practice patience with slow results",
                "Stay the course; avoid drastic changes",
            ],
        },
        MoonPhase::FullMoon => &PhaseProfile {
            emoji: "🌕",
            description: "The disk is fully lit. Culmination: what was seeded becomes visible, emotions run high.",
            energy: "Culmination, clarity, heightened intuition",
            tarot: "The classic night for readings: lay a full spread, charge your deck in the moonlight, ask the big questions.",
            general: &[
                "Celebrate and acknowledge what came to fruition",
                "Release what no longer serves you",
                "Channel strong emotions into creative work",
            ],
        },
        MoonPhase::WaningGibbous => &PhaseProfile {
            emoji: "🌖",
            description: "The light recedes from fullness. Time to share the harvest and give thanks.",
            energy: "Gratitude, sharing, integration",
            tarot: "Ask the cards what lesson of this cycle wants to be told; read for others and share insight freely.",
            general: &[
                "Share results and teach what you learned",
                "Express gratitude deliberately",
                "Begin tying up loose ends",
            ],
        },
        MoonPhase::LastQuarter => &PhaseProfile {
            emoji: "🌗",
            description: "Half lit and sinking. The cycle turns inward; release outweighs pursuit.",
            energy: "Release, forgiveness, clearing",
            tarot: "Keep spreads minimal; a single card on what to let go of is enough tonight.",
            general: &[
                "Let go of habits and clutter",
                "Forgive and close old accounts",
                "Avoid launching anything new",
            ],
        },
        MoonPhase::WaningCrescent => &PhaseProfile {
            emoji: "🌘",
            description: "The last sliver before darkness. Rest, reflection, and surrender before the next seed.",
            energy: "Rest, surrender, deep intuition",
            tarot: "Favor quiet, reflective draws; dream journaling with a nightly card suits this phase.",
            general: &[
                "Rest more than usual",
                "Reflect on the cycle just passed",
                "Clear space for what comes next",
            ],
        },
    }
}

/// Favorability entry for a phase.
pub fn favorability(phase: MoonPhase) -> &'static FavorabilityEntry {
    match phase {
        MoonPhase::NewMoon => &FavorabilityEntry {
            is_favorable: true,
            reason: "The new moon opens the cycle; questions about beginnings land on fertile ground.",
            recommendation: "Read for intentions and fresh starts tonight.",
        },
        MoonPhase::WaxingCrescent => &FavorabilityEntry {
            is_favorable: true,
            reason: "Growing light supports growing questions; the deck speaks clearly about momentum.",
            recommendation: "Ask about next steps and early progress.",
        },
        MoonPhase::FirstQuarter => &FavorabilityEntry {
            is_favorable: true,
            reason: "Tension phases sharpen the cards; readings about obstacles are unusually direct.",
            recommendation: "Focus the reading on a single decision.",
        },
        MoonPhase::WaxingGibbous => &FavorabilityEntry {
            is_favorable: true,
            reason: "Near-full light favors clarity; good conditions for detailed spreads.",
            recommendation: "Refine earlier readings rather than opening new questions.",
        },
        MoonPhase::FullMoon => &FavorabilityEntry {
            is_favorable: true,
            reason: "The full moon is the traditional peak for divination; intuition runs highest now.",
            recommendation: "An excellent night for a full-scale reading.",
        },
        MoonPhase::WaningGibbous => &FavorabilityEntry {
            is_favorable: false,
            reason: "The receding light turns the cards inward; answers come muted and retrospective.",
            recommendation: "If you must read, ask about lessons, not plans.",
        },
        MoonPhase::LastQuarter => &FavorabilityEntry {
            is_favorable: false,
            reason: "The least favorable phase for readings: the cycle is closing and forward questions mislead.",
            recommendation: "Postpone the reading; cleanse your deck instead.",
        },
        MoonPhase::WaningCrescent => &FavorabilityEntry {
            is_favorable: false,
            reason: "The dark of the moon favors rest over inquiry; readings tend toward silence.",
            recommendation: "Wait for the new moon to ask again.",
        },
    }
}
