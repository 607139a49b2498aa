//! Map plugin that keeps a host map's labels in the chosen language.
//!
//! The plugin attaches to a [`MapHost`], listens for the host's style-load
//! event, and on every load rewrites the freshly loaded style for the
//! active language and pushes it back to the host.

use tracing::{info, warn};

use crate::rewrite::{LanguageError, LanguageOptions, StyleLocalizer, resolve_initial_language};
use crate::types::{StyleDocument, SupportedLanguages};

/// Events a plugin subscribes to on its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostEvent {
    /// The host finished loading a style document.
    StyleLoad,
}

/// The map runtime a [`MapLanguage`] plugin is attached to.
pub trait MapHost {
    /// The currently active style document.
    fn style(&self) -> StyleDocument;

    /// Replace the active style document.
    fn set_style(&mut self, style: StyleDocument);

    /// Start delivering `event` to the plugin.
    fn subscribe(&mut self, event: HostEvent);

    /// Stop delivering `event` to the plugin.
    fn unsubscribe(&mut self, event: HostEvent);

    /// Languages the host environment prefers, most preferred first.
    fn preferred_languages(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Opaque placeholder handed to the host on attach.
///
/// The plugin renders no controls; hosts only need something to mount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlContainer {
    class_name: &'static str,
}

impl ControlContainer {
    fn new() -> Self {
        Self {
            class_name: "maplang-control",
        }
    }

    pub fn class_name(&self) -> &str {
        self.class_name
    }
}

/// State carried between host callbacks.
///
/// `style` is the last document received from the host, before any
/// rewriting, so that a later language change starts from the original
/// labels. `language` is the last language successfully applied. Both are
/// written only by the owning [`MapLanguage`].
#[derive(Debug, Clone, Default)]
pub struct LanguageSession {
    style: Option<StyleDocument>,
    language: Option<String>,
}

impl LanguageSession {
    pub fn style(&self) -> Option<&StyleDocument> {
        self.style.as_ref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }
}

/// A plugin that localizes the labels of a host map.
///
/// # Example
///
/// ```
/// use maplang::{HostEvent, LanguageOptions, MapHost, MapLanguage, StyleDocument};
///
/// #[derive(Default)]
/// struct Host {
///     style: StyleDocument,
/// }
///
/// impl MapHost for Host {
///     fn style(&self) -> StyleDocument {
///         self.style.clone()
///     }
///     fn set_style(&mut self, style: StyleDocument) {
///         self.style = style;
///     }
///     fn subscribe(&mut self, _event: HostEvent) {}
///     fn unsubscribe(&mut self, _event: HostEvent) {}
/// }
///
/// let options = LanguageOptions::builder().default_language("de").build();
/// let mut plugin = MapLanguage::new(options).unwrap();
/// plugin.on_add(Host::default());
/// plugin.handle_event(HostEvent::StyleLoad).unwrap();
/// assert_eq!(plugin.current_language(), Some("de"));
/// ```
pub struct MapLanguage<H: MapHost> {
    localizer: StyleLocalizer,
    session: LanguageSession,
    host: Option<H>,
}

impl<H: MapHost> MapLanguage<H> {
    /// Create a detached plugin, rejecting inconsistent options.
    pub fn new(options: LanguageOptions) -> Result<Self, LanguageError> {
        Ok(Self {
            localizer: StyleLocalizer::new(options)?,
            session: LanguageSession::default(),
            host: None,
        })
    }

    pub fn supported_languages(&self) -> &SupportedLanguages {
        self.localizer.supported_languages()
    }

    /// The last language successfully applied.
    pub fn current_language(&self) -> Option<&str> {
        self.session.language()
    }

    pub fn session(&self) -> &LanguageSession {
        &self.session
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    /// Attach to `host` and subscribe to its style-load event.
    pub fn on_add(&mut self, mut host: H) -> ControlContainer {
        host.subscribe(HostEvent::StyleLoad);
        self.host = Some(host);
        ControlContainer::new()
    }

    /// Unsubscribe and release the host handle.
    ///
    /// Returns `None` if the plugin was not attached.
    pub fn on_remove(&mut self) -> Option<H> {
        let mut host = self.host.take()?;
        host.unsubscribe(HostEvent::StyleLoad);
        Some(host)
    }

    /// Handle an event delivered by the host.
    pub fn handle_event(&mut self, event: HostEvent) -> Result<(), LanguageError> {
        match event {
            HostEvent::StyleLoad => self.on_style_load(),
        }
    }

    /// Rewrite the loaded style for `language` and push it to the host.
    ///
    /// On error the host style and the session are left unchanged.
    pub fn set_language(&mut self, language: &str) -> Result<(), LanguageError> {
        self.localizer.check_supported(language)?;
        let style = self
            .session
            .style
            .as_ref()
            .ok_or(LanguageError::StyleNotLoaded)?;
        let host = self.host.as_mut().ok_or(LanguageError::Detached)?;

        let localized = self.localizer.localize(style, language)?;
        host.set_style(localized);
        self.session.language = Some(language.to_string());
        info!(language, "applied map language");
        Ok(())
    }

    fn on_style_load(&mut self) -> Result<(), LanguageError> {
        let host = self.host.as_ref().ok_or(LanguageError::Detached)?;
        let style = host.style();
        let preferred = host.preferred_languages();
        self.session.style = Some(style);

        let language = resolve_initial_language(
            self.session.language(),
            self.localizer.options().default_language.as_deref(),
            &preferred,
            self.localizer.supported_languages(),
        );
        match language {
            Some(language) => self.set_language(&language),
            None => {
                warn!(
                    ?preferred,
                    "no supported language resolved, leaving labels unchanged"
                );
                Ok(())
            }
        }
    }
}
