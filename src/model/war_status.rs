//! War status shown in the name of the war-status channel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarStatus {
    FullWar,
    Skirmishes,
    NoFighting,
    FarmMana,
}

impl WarStatus {
    pub const ALL: [WarStatus; 4] = [
        WarStatus::FullWar,
        WarStatus::Skirmishes,
        WarStatus::NoFighting,
        WarStatus::FarmMana,
    ];

    /// Channel name encoding this status.
    pub fn channel_name(self) -> &'static str {
        match self {
            WarStatus::FullWar => "〘🔴〙war-status-fullwar",
            WarStatus::Skirmishes => "〘🟡〙war-status-skirmishes",
            WarStatus::NoFighting => "〘🟢〙war-status-no-fighting",
            WarStatus::FarmMana => "〘🔵〙war-status-farm-mana",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            WarStatus::FullWar => "🔴",
            WarStatus::Skirmishes => "🟡",
            WarStatus::NoFighting => "🟢",
            WarStatus::FarmMana => "🔵",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WarStatus::FullWar => "FULL WAR",
            WarStatus::Skirmishes => "Skirmishes",
            WarStatus::NoFighting => "No Fighting",
            WarStatus::FarmMana => "Farm Mana",
        }
    }

    /// Chat command that selects this status.
    pub fn command(self) -> &'static str {
        match self {
            WarStatus::FullWar => "warred",
            WarStatus::Skirmishes => "waryellow",
            WarStatus::NoFighting => "wargreen",
            WarStatus::FarmMana => "warmana",
        }
    }

    pub fn from_command(command: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.command() == command)
    }

    /// Status selected by a reaction emoji on the status message.
    pub fn from_emoji(emoji: &str) -> Option<Self> {
        // Some clients append a variation selector
        let emoji = emoji.trim_end_matches('\u{fe0f}');
        Self::ALL.into_iter().find(|status| status.emoji() == emoji)
    }
}
