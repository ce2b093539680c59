use strum_macros::AsRefStr;

/// A transient, user-facing message.
///
/// The feed emits these for load failures and favorite toggles; delivery is
/// fire-and-forget and never blocks the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// Anything that can deliver a [`Notice`] to the user.
pub trait NotificationSink {
    fn notify(&self, notice: Notice);
}
