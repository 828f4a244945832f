pub const FADE_IN_ANIMATION: &str = "fadeInUp 0.6s ease-out";
pub const FADE_OUT_ANIMATION: &str = "fadeOut 0.3s ease-out";
pub const FADE_OUT_MS: u32 = 300;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        match value {
            "all" => Self::All,
            other => Self::Category(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Category(category) => category,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(selected) => selected == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ItemPhase {
    #[default]
    Shown,
    FadingOut,
    Hidden,
}

impl ItemPhase {
    /// Phase after the active filter changes; a fade-out in progress is
    /// cancelled when the item matches again.
    pub fn on_filter(self, matches: bool) -> Self {
        match (self, matches) {
            (_, true) => Self::Shown,
            (Self::Hidden, false) => Self::Hidden,
            (_, false) => Self::FadingOut,
        }
    }

    /// Phase once the fade-out timer has elapsed.
    pub fn on_fade_elapsed(self) -> Self {
        match self {
            Self::FadingOut => Self::Hidden,
            other => other,
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Shown | Self::FadingOut => "block",
        }
    }

    pub fn animation(self) -> Option<&'static str> {
        match self {
            Self::Shown => Some(FADE_IN_ANIMATION),
            Self::FadingOut => Some(FADE_OUT_ANIMATION),
            Self::Hidden => None,
        }
    }

    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Hidden)
    }
}
