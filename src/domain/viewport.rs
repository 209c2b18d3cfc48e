/// Narrow/wide classification of the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    #[default]
    Wide,
    Narrow,
}

impl ViewportClass {
    /// Narrow when the width is strictly below the breakpoint.
    pub fn classify(width: u16, narrow_breakpoint: u16) -> Self {
        if width < narrow_breakpoint {
            Self::Narrow
        } else {
            Self::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        self == Self::Narrow
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Narrow => "narrow",
        }
    }
}
