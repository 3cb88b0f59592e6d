//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Emoji` - the emoji used by the section headings
//! - `IconMode::Unicode` - narrow symbols for terminals without emoji fonts

use nutriscan_app::config::IconMode;
use nutriscan_core::InsightKind;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    pub fn app(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "🍎",
            IconMode::Unicode => "\u{25c6}", // ◆
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "🔍",
            IconMode::Unicode => "/",
        }
    }

    pub fn product(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📦",
            IconMode::Unicode => "\u{25a0}", // ■
        }
    }

    pub fn ingredients(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📝",
            IconMode::Unicode => "\u{2261}", // ≡
        }
    }

    pub fn additives(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "🧪",
            IconMode::Unicode => "+",
        }
    }

    pub fn analysis(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📊",
            IconMode::Unicode => "#",
        }
    }

    pub fn assessment(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "📖",
            IconMode::Unicode => "\u{00a7}", // §
        }
    }

    pub fn insights(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "💡",
            IconMode::Unicode => "*",
        }
    }

    pub fn error(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "❌",
            IconMode::Unicode => "\u{2717}", // ✗
        }
    }

    pub fn warning(&self) -> &'static str {
        match self.mode {
            IconMode::Emoji => "⚠️",
            IconMode::Unicode => "\u{26a0}", // ⚠
        }
    }

    /// Disclosure marker for collapsible sections
    pub fn disclosure(&self, expanded: bool) -> &'static str {
        if expanded {
            "\u{25be}" // ▾
        } else {
            "\u{25b8}" // ▸
        }
    }

    /// Marker in front of an insight line
    pub fn insight(&self, kind: InsightKind) -> &'static str {
        match self.mode {
            IconMode::Emoji => kind.marker(),
            IconMode::Unicode => match kind {
                InsightKind::Positive => "\u{2713}", // ✓
                InsightKind::Warning => "!",
                InsightKind::Info => "i",
            },
        }
    }
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}
