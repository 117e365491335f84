// src/spotlight.rs
use crate::content::{button_label, ContentProfile, BUILDER, CREATOR, LISTENER};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpotlightKey {
    Creator,
    Builder,
    #[default]
    Listener,
}

impl SpotlightKey {
    /// Selector order.
    pub const ALL: [SpotlightKey; 3] = [Self::Creator, Self::Builder, Self::Listener];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Creator => "creator",
            Self::Builder => "builder",
            Self::Listener => "listener",
        }
    }

    pub fn profile(self) -> &'static ContentProfile {
        match self {
            Self::Creator => &CREATOR,
            Self::Builder => &BUILDER,
            Self::Listener => &LISTENER,
        }
    }

    pub fn button_label(self) -> &'static str {
        button_label(self.profile().title)
    }
}

/// Which spotlight is on screen. Lives for one page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    active: SpotlightKey,
}

impl Selection {
    pub fn active(&self) -> SpotlightKey {
        self.active
    }

    pub fn select(&mut self, key: SpotlightKey) {
        self.active = key;
    }

    pub fn is_active(&self, key: SpotlightKey) -> bool {
        self.active == key
    }

    pub fn active_profile(&self) -> &'static ContentProfile {
        self.active.profile()
    }
}
