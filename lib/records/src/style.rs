//! Icon and color selection per record kind.

use crate::record::RecordKind;

/// Icons available to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Person,
    Business,
    Money,
    Storage,
    Table,
    Article,
    Folder,
}

impl Icon {
    /// CSS class selecting the icon.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Person => "icon-person",
            Self::Business => "icon-business",
            Self::Money => "icon-money",
            Self::Storage => "icon-storage",
            Self::Table => "icon-table",
            Self::Article => "icon-article",
            Self::Folder => "icon-folder",
        }
    }

    /// Text glyph rendered inside the icon element.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Person => "\u{1F464}",
            Self::Business => "\u{1F3E2}",
            Self::Money => "$",
            Self::Storage => "\u{1F5C4}",
            Self::Table => "\u{25A6}",
            Self::Article => "\u{1F4C4}",
            Self::Folder => "\u{1F4C1}",
        }
    }
}

/// Palette tones shared by icons and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Secondary,
    Success,
    Info,
    Warning,
    Action,
    Default,
}

impl Tone {
    /// CSS class applying the tone.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Primary => "tone-primary",
            Self::Secondary => "tone-secondary",
            Self::Success => "tone-success",
            Self::Info => "tone-info",
            Self::Warning => "tone-warning",
            Self::Action => "tone-action",
            Self::Default => "tone-default",
        }
    }
}

/// How a record kind is drawn: its icon, the icon's tone, and the tone of
/// the type badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeStyle {
    pub icon: Icon,
    pub icon_tone: Tone,
    pub badge_tone: Tone,
}

impl TypeStyle {
    /// Style for unrecognized kinds.
    pub const DEFAULT: TypeStyle = TypeStyle::new(Icon::Folder, Tone::Action, Tone::Default);

    const fn new(icon: Icon, icon_tone: Tone, badge_tone: Tone) -> Self {
        Self {
            icon,
            icon_tone,
            badge_tone,
        }
    }

    /// Looks up the style for a record kind.
    #[must_use]
    pub fn for_kind(kind: &RecordKind) -> Self {
        match kind {
            RecordKind::Contact => Self::new(Icon::Person, Tone::Primary, Tone::Primary),
            RecordKind::Company => Self::new(Icon::Business, Tone::Secondary, Tone::Secondary),
            RecordKind::Deal => Self::new(Icon::Money, Tone::Success, Tone::Success),
            RecordKind::ObjectType => Self::new(Icon::Folder, Tone::Action, Tone::Default),
            RecordKind::Base => Self::new(Icon::Storage, Tone::Primary, Tone::Primary),
            RecordKind::Table => Self::new(Icon::Table, Tone::Secondary, Tone::Secondary),
            RecordKind::Database => Self::new(Icon::Storage, Tone::Info, Tone::Info),
            RecordKind::Page => Self::new(Icon::Article, Tone::Warning, Tone::Warning),
            RecordKind::Other(_) => Self::DEFAULT,
        }
    }

    /// Classes for the icon element.
    #[must_use]
    pub fn icon_classes(&self) -> String {
        format!(
            "icon {} {}",
            self.icon.css_class(),
            self.icon_tone.css_class()
        )
    }

    /// Classes for the type badge element.
    #[must_use]
    pub fn badge_classes(&self) -> String {
        format!("chip chip-outlined {}", self.badge_tone.css_class())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hubspot_styles() {
        let contact = RecordKind::Contact.style();
        assert_eq!(contact.icon, Icon::Person);
        assert_eq!(contact.badge_tone, Tone::Primary);

        let deal = RecordKind::Deal.style();
        assert_eq!(deal.icon, Icon::Money);
        assert_eq!(deal.icon_tone, Tone::Success);

        let object_type = RecordKind::ObjectType.style();
        assert_eq!(object_type.icon, Icon::Folder);
        assert_eq!(object_type.badge_tone, Tone::Default);
    }

    #[test]
    fn storage_icon_differs_in_tone_by_integration() {
        let base = RecordKind::Base.style();
        let database = RecordKind::Database.style();
        assert_eq!(base.icon, Icon::Storage);
        assert_eq!(database.icon, Icon::Storage);
        assert_eq!(base.icon_tone, Tone::Primary);
        assert_eq!(database.icon_tone, Tone::Info);
    }

    #[test]
    fn unrecognized_kinds_use_default() {
        assert_eq!(
            RecordKind::Other("workspace".to_string()).style(),
            TypeStyle::DEFAULT
        );
        assert_eq!(RecordKind::default().style(), TypeStyle::DEFAULT);
    }

    #[test]
    fn classes() {
        let page = RecordKind::Page.style();
        assert_eq!(page.icon_classes(), "icon icon-article tone-warning");
        assert_eq!(page.badge_classes(), "chip chip-outlined tone-warning");
    }
}
