//! Alert banner
//!
//! Style is a fixed lookup on the variant. Visibility belongs to the caller:
//! the alert only offers a close affordance that invokes the caller's
//! callback, it never hides itself.

use dealdesk_domain::impl_domain_status_conversions;

/// Severity of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlertVariant {
    Error,
    Warning,
    Success,
    Info,
}

impl_domain_status_conversions!(AlertVariant {
    Error => "error",
    Warning => "warning",
    Success => "success",
    Info => "info",
});

/// Leading icon of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertIcon {
    XCircle,
    AlertTriangle,
    CheckCircle,
    Info,
}

/// Visual treatment for one variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertStyle {
    pub background: &'static str,
    pub border: &'static str,
    pub icon_color: &'static str,
    pub title_color: &'static str,
    pub message_color: &'static str,
    pub icon: AlertIcon,
}

pub const fn alert_style(variant: AlertVariant) -> AlertStyle {
    match variant {
        AlertVariant::Error => AlertStyle {
            background: "bg-red-50",
            border: "border-red-500",
            icon_color: "text-red-500",
            title_color: "text-red-800",
            message_color: "text-red-700",
            icon: AlertIcon::XCircle,
        },
        AlertVariant::Warning => AlertStyle {
            background: "bg-amber-50",
            border: "border-amber-500",
            icon_color: "text-amber-500",
            title_color: "text-amber-800",
            message_color: "text-amber-700",
            icon: AlertIcon::AlertTriangle,
        },
        AlertVariant::Success => AlertStyle {
            background: "bg-green-50",
            border: "border-green-500",
            icon_color: "text-green-500",
            title_color: "text-green-800",
            message_color: "text-green-700",
            icon: AlertIcon::CheckCircle,
        },
        AlertVariant::Info => AlertStyle {
            background: "bg-blue-50",
            border: "border-blue-500",
            icon_color: "text-blue-500",
            title_color: "text-blue-800",
            message_color: "text-blue-700",
            icon: AlertIcon::Info,
        },
    }
}

type CloseCallback<'a> = Box<dyn FnMut() + Send + 'a>;

/// Alert props
pub struct Alert<'a> {
    variant: AlertVariant,
    title: Option<String>,
    message: String,
    on_close: Option<CloseCallback<'a>>,
}

/// Rendered alert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertView<'a> {
    pub role: &'static str,
    pub style: AlertStyle,
    pub title: Option<&'a str>,
    pub message: &'a str,
    pub close_button: bool,
}

impl<'a> Alert<'a> {
    pub fn new(variant: AlertVariant, message: impl Into<String>) -> Self {
        Self { variant, title: None, message: message.into(), on_close: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Error, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Warning, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(AlertVariant::Info, message)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Make the alert dismissible. The callback runs on every close click.
    #[must_use]
    pub fn on_close(mut self, callback: impl FnMut() + Send + 'a) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub const fn variant(&self) -> AlertVariant {
        self.variant
    }

    pub const fn is_dismissible(&self) -> bool {
        self.on_close.is_some()
    }

    /// Activate the close affordance. Returns `false` when there is none.
    pub fn close(&mut self) -> bool {
        match self.on_close.as_mut() {
            Some(callback) => {
                callback();
                true
            }
            None => false,
        }
    }

    pub fn render(&self) -> AlertView<'_> {
        AlertView {
            role: "alert",
            style: alert_style(self.variant),
            title: self.title.as_deref(),
            message: &self.message,
            close_button: self.is_dismissible(),
        }
    }
}

impl std::fmt::Debug for Alert<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Alert")
            .field("variant", &self.variant)
            .field("title", &self.title)
            .field("message", &self.message)
            .field("dismissible", &self.is_dismissible())
            .finish()
    }
}
