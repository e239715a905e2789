// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! The editable fielding strategy and its scalar attributes

use std::fmt;
use std::num::NonZeroU32;

use super::marker::{Marker, default_markers};

// ============================================================================
// CHOICE TYPES
// ============================================================================

/// Which side the batsman bats from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BattingHand {
    #[default]
    Right,
    Left,
}

impl BattingHand {
    pub const ALL: [Self; 2] = [Self::Right, Self::Left];

    pub fn label(self) -> &'static str {
        match self {
            Self::Right => "Right-Handed",
            Self::Left => "Left-Handed",
        }
    }
}

/// Bowling arm and style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BowlerType {
    #[default]
    RightArmFast,
    RightArmMedium,
    RightArmOffBreak,
    RightArmLegBreak,
    LeftArmFast,
    LeftArmMedium,
    LeftArmOrthodox,
    LeftArmChinaman,
}

impl BowlerType {
    pub const ALL: [Self; 8] = [
        Self::RightArmFast,
        Self::RightArmMedium,
        Self::RightArmOffBreak,
        Self::RightArmLegBreak,
        Self::LeftArmFast,
        Self::LeftArmMedium,
        Self::LeftArmOrthodox,
        Self::LeftArmChinaman,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::RightArmFast => "Right-Arm Fast",
            Self::RightArmMedium => "Right-Arm Medium",
            Self::RightArmOffBreak => "Right-Arm Spin (Off-break)",
            Self::RightArmLegBreak => "Right-Arm Spin (Leg-break)",
            Self::LeftArmFast => "Left-Arm Fast",
            Self::LeftArmMedium => "Left-Arm Medium",
            Self::LeftArmOrthodox => "Left-Arm Spin (Orthodox)",
            Self::LeftArmChinaman => "Left-Arm Spin (Chinaman)",
        }
    }
}

/// Overall tactical intent of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FieldStyle {
    Attacking,
    Defensive,
    #[default]
    Standard,
}

impl FieldStyle {
    pub const ALL: [Self; 3] = [Self::Attacking, Self::Defensive, Self::Standard];

    pub fn label(self) -> &'static str {
        match self {
            Self::Attacking => "Attacking",
            Self::Defensive => "Defensive",
            Self::Standard => "Standard",
        }
    }
}

/// Match format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchFormat {
    Test,
    Odi,
    #[default]
    T20,
    Custom,
}

impl MatchFormat {
    pub const ALL: [Self; 4] = [Self::Test, Self::Odi, Self::T20, Self::Custom];

    pub fn label(self) -> &'static str {
        match self {
            Self::Test => "Test Match",
            Self::Odi => "ODI (50 Overs)",
            Self::T20 => "T20 (20 Overs)",
            Self::Custom => "Custom",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.label())
                }
            }
        )*
    };
}

display_via_label!(BattingHand, BowlerType, FieldStyle, MatchFormat);

// ============================================================================
// STRATEGY
// ============================================================================

/// Complete editable model of one fielding layout
#[derive(Debug, Clone, PartialEq)]
pub struct Strategy {
    pub placement_name: String,
    pub team_name: String,
    pub batsman_hand: BattingHand,
    pub bowler_type: BowlerType,
    pub wicketkeeper_name: String,
    pub bowler_name: String,
    pub field_style: FieldStyle,
    pub match_format: MatchFormat,
    /// Only meaningful while `match_format` is `Custom`
    pub custom_overs: Option<NonZeroU32>,
    pub scenario_notes: String,
    pub fielders: Vec<Marker>,
}

impl Strategy {
    /// Marker with the given id
    pub fn fielder(&self, id: super::MarkerId) -> Option<&Marker> {
        self.fielders.iter().find(|m| m.id == id)
    }

    /// Format line for the info overlay
    ///
    /// Custom formats with a count render as `"<N> Overs (Custom)"`,
    /// everything else renders the format label.
    pub fn match_info(&self) -> String {
        match (self.match_format, self.custom_overs) {
            (MatchFormat::Custom, Some(overs)) => format!("{overs} Overs (Custom)"),
            (format, _) => format.label().to_string(),
        }
    }

    /// True when the notes contain anything besides whitespace
    pub fn has_notes(&self) -> bool {
        !self.scenario_notes.trim().is_empty()
    }

    /// Number of newline-delimited lines in the notes
    pub fn notes_line_count(&self) -> usize {
        self.scenario_notes.split('\n').count()
    }

    /// Overlay title, falling back when the placement is unnamed
    pub fn placement_display_name(&self) -> &str {
        non_empty_or(&self.placement_name, "Unnamed Strategy")
    }

    pub fn team_display_name(&self) -> &str {
        non_empty_or(&self.team_name, "N/A")
    }

    pub fn wicketkeeper_display_name(&self) -> &str {
        non_empty_or(&self.wicketkeeper_name, "WK")
    }

    pub fn bowler_display_name(&self) -> &str {
        non_empty_or(&self.bowler_name, "Bowler")
    }
}

impl Default for Strategy {
    fn default() -> Self {
        Self {
            placement_name: "My Cricket Strategy".to_string(),
            team_name: "My Team".to_string(),
            batsman_hand: BattingHand::default(),
            bowler_type: BowlerType::default(),
            wicketkeeper_name: "WK".to_string(),
            bowler_name: "Bowler".to_string(),
            field_style: FieldStyle::default(),
            match_format: MatchFormat::default(),
            custom_overs: None,
            scenario_notes: "Notes for this field placement...".to_string(),
            fielders: default_markers(),
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// A replacement value for one scalar strategy attribute
#[derive(Debug, Clone, PartialEq)]
pub enum StrategyField {
    PlacementName(String),
    TeamName(String),
    BatsmanHand(BattingHand),
    BowlerType(BowlerType),
    WicketkeeperName(String),
    BowlerName(String),
    FieldStyle(FieldStyle),
    MatchFormat(MatchFormat),
    CustomOvers(Option<NonZeroU32>),
    ScenarioNotes(String),
}

impl StrategyField {
    /// Write this value into `strategy`
    pub(crate) fn apply(self, strategy: &mut Strategy) {
        match self {
            Self::PlacementName(v) => strategy.placement_name = v,
            Self::TeamName(v) => strategy.team_name = v,
            Self::BatsmanHand(v) => strategy.batsman_hand = v,
            Self::BowlerType(v) => strategy.bowler_type = v,
            Self::WicketkeeperName(v) => strategy.wicketkeeper_name = v,
            Self::BowlerName(v) => strategy.bowler_name = v,
            Self::FieldStyle(v) => strategy.field_style = v,
            Self::MatchFormat(v) => {
                strategy.match_format = v;
                if v != MatchFormat::Custom {
                    strategy.custom_overs = None;
                }
            }
            Self::CustomOvers(v) => strategy.custom_overs = v,
            Self::ScenarioNotes(v) => strategy.scenario_notes = v,
        }
    }
}
