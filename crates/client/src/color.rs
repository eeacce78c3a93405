use site_content_core::theme::StyleVariables;
use site_content_core::{default_theme, SiteEvent, ThemeApplier};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Page background a component sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundVariant {
    #[default]
    Primary,
    Secondary,
}

impl BackgroundVariant {
    pub fn variable(self) -> &'static str {
        match self {
            BackgroundVariant::Primary => "--color-bg-app",
            BackgroundVariant::Secondary => "--color-bg-secondary",
        }
    }

    pub fn default_value(self) -> &'static str {
        let colors = &default_theme().colors;
        match self {
            BackgroundVariant::Primary => &colors.bg_app,
            BackgroundVariant::Secondary => &colors.bg_secondary,
        }
    }
}

fn read(styles: &StyleVariables, variable: &str, default: &str) -> String {
    styles
        .get(variable)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Live value of a single style variable.
///
/// Reads the variable when mounted and again after every `ThemeUpdated`
/// broadcast. Falls back to `default` while the variable is unset.
pub struct ThemeColorHandle {
    value: watch::Receiver<String>,
    listener: JoinHandle<()>,
}

impl ThemeColorHandle {
    /// Must be called inside a Tokio runtime.
    pub fn mount(applier: &ThemeApplier, variable: &str, default: &str) -> Self {
        // Subscribe before the first read so no update falls in between.
        let mut events = applier.bus().subscribe();
        let styles = applier.styles().clone();
        let variable = variable.to_string();
        let default = default.to_string();

        let (sender, value) = watch::channel(read(&styles, &variable, &default));
        let listener = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(SiteEvent::ThemeUpdated(_)) | Err(RecvError::Lagged(_)) => {
                        let next = read(&styles, &variable, &default);
                        sender.send_if_modified(|current| {
                            if *current == next {
                                return false;
                            }
                            *current = next;
                            true
                        });
                    }
                    Ok(_) => {}
                    Err(RecvError::Closed) => break,
                }
            }
        });

        Self { value, listener }
    }

    /// The app or secondary background color.
    pub fn background(applier: &ThemeApplier, variant: BackgroundVariant) -> Self {
        Self::mount(applier, variant.variable(), variant.default_value())
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone()
    }

    /// Notified when the value changes.
    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.value.clone()
    }
}

impl Drop for ThemeColorHandle {
    fn drop(&mut self) {
        self.listener.abort();
    }
}
