//! Application model for the demo binary.
//!
//! Wraps a [`Counter`] with quit handling and a help footer. The host
//! application constructs and mounts the widget explicitly; there is no
//! global registry of any kind.

use runloop::{Cmd, KeyMsg, KeyType, Message, Model, quit};
use tint::Theme;

use crate::config::Config;
use crate::counter::Counter;
use crate::i18n::{Localizer, SUPPORTED_LOCALES};

/// Key hints shown under the widget.
const HELP: &str = "←/→ focus · enter activate · +/-/r · q quit";

/// The demo application: one mounted counter widget.
pub struct App {
    counter: Counter,
    theme: Theme,
}

impl App {
    /// Build the app from resolved configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let theme = config.resolve_theme();

        let localizer = match &config.locales_dir {
            Some(dir) => Localizer::new(dir, SUPPORTED_LOCALES),
            None => Localizer::new("locales", SUPPORTED_LOCALES),
        };

        let mut counter = Counter::with_localizer(localizer)
            .with_bounds(config.min, config.max)
            .with_count(config.count)
            .with_theme(theme.clone())
            .with_locale(&config.locale)
            .with_animations(config.animations);
        if let Some(seed) = config.seed {
            counter = counter.with_seed(seed);
        }

        Self { counter, theme }
    }

    /// The mounted widget.
    #[must_use]
    pub fn counter(&self) -> &Counter {
        &self.counter
    }
}

impl Model for App {
    fn init(&self) -> Option<Cmd> {
        self.counter.init()
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let quit_requested = key.key_type == KeyType::Esc || key.char() == Some('q');
            if quit_requested {
                return Some(quit());
            }
        }
        self.counter.update(msg)
    }

    fn view(&self) -> String {
        let mut out = self.counter.view();
        out.push_str("\n\n");
        out.push_str(&self.theme.muted_style().render(HELP));
        out
    }
}
