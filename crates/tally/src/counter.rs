//! The counter widget.
//!
//! `Counter` holds an integer count bounded by an inclusive `[min, max]`
//! range and renders it with three controls: decrement, reset, and
//! increment. Controls at their bound render disabled and their
//! activation is a silent no-op; there is no boundary error of any kind.
//!
//! The count captured at first render becomes the *baseline*, and reset
//! always restores it. When the count transitions to the celebration
//! trigger value the widget lazily constructs its confetti effect and
//! signals it to start on the next message-loop pass.
//!
//! # Example
//!
//! ```rust
//! use tally::counter::{Counter, CounterMsg};
//!
//! let mut counter = Counter::new();
//! counter.update_msg(CounterMsg::Increase);
//! assert_eq!(counter.count(), 1);
//! ```

use confetti::Confetti;
use runloop::{Cmd, FirstRenderMsg, KeyMsg, KeyType, Message, Model};
use tint::Theme;
use tracing::debug;

use crate::i18n::{DEFAULT_LOCALE, Localizer, SUPPORTED_LOCALES};

/// Default inclusive lower bound.
pub const DEFAULT_MIN: i64 = -15;

/// Default inclusive upper bound.
pub const DEFAULT_MAX: i64 = 15;

/// The count value that fires the celebration effect.
///
/// Configured independently of `max`; with `max` below it the trigger is
/// simply unreachable.
pub const CELEBRATION_TRIGGER: i64 = 21;

/// Default base directory for locale resources.
const LOCALES_DIR: &str = "locales";

/// Celebration overlay viewport, in cells.
const EFFECT_WIDTH: usize = 40;
const EFFECT_HEIGHT: usize = 10;

/// Visual styling state, derived from the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleState {
    /// The count sits strictly inside its bounds.
    Normal,
    /// The count is pinned at min or max.
    Boundary,
}

/// The widget's three controls, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The `-1` button.
    Decrement,
    /// The `Reset` button.
    Reset,
    /// The `+1` button.
    Increment,
}

impl Control {
    /// All controls in display order.
    pub const fn all() -> [Self; 3] {
        [Self::Decrement, Self::Reset, Self::Increment]
    }

    /// The control's fixed label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Decrement => "-1",
            Self::Reset => "Reset",
            Self::Increment => "+1",
        }
    }

    /// The control to the right, wrapping.
    pub const fn next(self) -> Self {
        match self {
            Self::Decrement => Self::Reset,
            Self::Reset => Self::Increment,
            Self::Increment => Self::Decrement,
        }
    }

    /// The control to the left, wrapping.
    pub const fn prev(self) -> Self {
        match self {
            Self::Decrement => Self::Increment,
            Self::Reset => Self::Decrement,
            Self::Increment => Self::Reset,
        }
    }
}

/// Control activation messages.
#[derive(Debug, Clone, Copy)]
pub enum CounterMsg {
    /// Increment the count, bounded by max.
    Increase,
    /// Decrement the count, bounded by min.
    Decrease,
    /// Restore the baseline count.
    Reset,
}

impl CounterMsg {
    /// Convert to a runloop message.
    #[must_use]
    pub fn into_message(self) -> Message {
        Message::new(self)
    }
}

/// A bounded counter widget.
pub struct Counter {
    count: i64,
    min: i64,
    max: i64,
    /// Count at first render; `None` until the first render happens.
    baseline: Option<i64>,
    title: String,
    locale: String,
    localizer: Localizer,
    focus: Control,
    theme: Theme,
    animations: bool,
    seed: Option<u64>,
    /// Constructed lazily on the first celebration trigger.
    effect: Option<Confetti>,
    celebrations: u64,
}

impl Default for Counter {
    fn default() -> Self {
        Self::new()
    }
}

impl Counter {
    /// Creates a counter with default bounds and registers it with the
    /// localization provider for the shipped locales.
    #[must_use]
    pub fn new() -> Self {
        Self::with_localizer(Localizer::new(LOCALES_DIR, SUPPORTED_LOCALES))
    }

    /// Creates a counter registered with a specific localization provider.
    #[must_use]
    pub fn with_localizer(mut localizer: Localizer) -> Self {
        let title = localizer.strings(DEFAULT_LOCALE).title.clone();
        Self {
            count: 0,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            baseline: None,
            title,
            locale: DEFAULT_LOCALE.to_string(),
            localizer,
            focus: Control::Increment,
            theme: Theme::dark(),
            animations: true,
            seed: None,
            effect: None,
            celebrations: 0,
        }
    }

    /// Sets the inclusive bounds. Not validated; `min > max` leaves both
    /// movement controls disabled.
    #[must_use]
    pub fn with_bounds(mut self, min: i64, max: i64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    /// Sets the initial count. Not clamped.
    #[must_use]
    pub fn with_count(mut self, count: i64) -> Self {
        self.count = count;
        self
    }

    /// Sets the theme the widget draws its tokens from.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Sets the active locale.
    #[must_use]
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.set_locale(locale);
        self
    }

    /// Enables or disables the celebration animation.
    #[must_use]
    pub fn with_animations(mut self, animations: bool) -> Self {
        self.animations = animations;
        self
    }

    /// Seeds the celebration effect for reproducible bursts.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    // ------------------------------------------------------------------
    // Attributes
    // ------------------------------------------------------------------

    /// The current count.
    #[must_use]
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The inclusive lower bound.
    #[must_use]
    pub fn min(&self) -> i64 {
        self.min
    }

    /// The inclusive upper bound.
    #[must_use]
    pub fn max(&self) -> i64 {
        self.max
    }

    /// Sets the count verbatim; reflected without clamping.
    pub fn set_count(&mut self, count: i64) {
        self.count = count;
    }

    /// Sets the lower bound verbatim; not validated.
    pub fn set_min(&mut self, min: i64) {
        self.min = min;
    }

    /// Sets the upper bound verbatim; not validated.
    pub fn set_max(&mut self, max: i64) {
        self.max = max;
    }

    /// The baseline captured at first render, if rendering has happened.
    #[must_use]
    pub fn baseline(&self) -> Option<i64> {
        self.baseline
    }

    /// The localized title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The active locale code.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Switches the active locale; the localization provider supplies the
    /// new title.
    pub fn set_locale(&mut self, locale: &str) {
        self.locale = locale.to_string();
        self.title = self.localizer.strings(locale).title.clone();
    }

    /// The currently focused control.
    #[must_use]
    pub fn focused(&self) -> Control {
        self.focus
    }

    /// How many times the celebration effect has been invoked.
    #[must_use]
    pub fn celebrations(&self) -> u64 {
        self.celebrations
    }

    /// Whether the celebration effect is currently animating.
    #[must_use]
    pub fn celebration_active(&self) -> bool {
        self.effect.as_ref().is_some_and(Confetti::is_active)
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    /// The styling state: boundary exactly when pinned at min or max.
    #[must_use]
    pub fn style_state(&self) -> StyleState {
        if self.count == self.min || self.count == self.max {
            StyleState::Boundary
        } else {
            StyleState::Normal
        }
    }

    /// Whether the count is pinned at the upper bound.
    #[must_use]
    pub fn is_at_max(&self) -> bool {
        self.count >= self.max
    }

    /// Whether the count is pinned at the lower bound.
    #[must_use]
    pub fn is_at_min(&self) -> bool {
        self.count <= self.min
    }

    /// Whether a control is currently enabled.
    #[must_use]
    pub fn control_enabled(&self, control: Control) -> bool {
        match control {
            Control::Decrement => self.count > self.min,
            Control::Reset => true,
            Control::Increment => self.count < self.max,
        }
    }

    // ------------------------------------------------------------------
    // Operations
    // ------------------------------------------------------------------

    /// Increments the count unless it is at max. No-op at the boundary.
    pub fn increase(&mut self) {
        if self.count < self.max {
            self.count += 1;
        }
    }

    /// Decrements the count unless it is at min. No-op at the boundary.
    pub fn decrease(&mut self) {
        if self.count > self.min {
            self.count -= 1;
        }
    }

    /// Restores the count captured at first render.
    ///
    /// Before the first render this is a no-op. A baseline outside
    /// `[min, max]` is restored verbatim; the inconsistency predates the
    /// widget and is flagged, not corrected.
    pub fn reset(&mut self) {
        let target = self.baseline.unwrap_or(self.count);
        if target < self.min || target > self.max {
            debug!(
                baseline = target,
                min = self.min,
                max = self.max,
                "resetting to out-of-range baseline"
            );
        }
        self.count = target;
    }

    /// Applies a control message and returns any follow-up command.
    ///
    /// This is the host-facing equivalent of a button press; keyboard
    /// handling funnels into the same path.
    pub fn update_msg(&mut self, msg: CounterMsg) -> Option<Cmd> {
        let old = self.count;
        match msg {
            CounterMsg::Increase => self.increase(),
            CounterMsg::Decrease => self.decrease(),
            CounterMsg::Reset => self.reset(),
        }
        self.after_count_change(old)
    }

    /// Records the first render, capturing the baseline exactly once.
    fn on_first_render(&mut self) {
        if self.baseline.is_some() {
            return;
        }
        self.baseline = Some(self.count);
        if self.count < self.min || self.count > self.max {
            debug!(
                count = self.count,
                min = self.min,
                max = self.max,
                "baseline captured outside bounds"
            );
        }
    }

    /// Celebration check after an operation; fires only on a transition
    /// onto the trigger value.
    fn after_count_change(&mut self, old: i64) -> Option<Cmd> {
        if self.count == old || self.count != CELEBRATION_TRIGGER {
            return None;
        }

        self.celebrations += 1;
        debug!(count = self.count, "celebration trigger reached");

        if self.effect.is_none() {
            self.effect = Some(self.build_effect());
        }
        // Deferred one pass so the triggering render completes first.
        self.effect.as_ref().map(Confetti::pop_cmd)
    }

    fn build_effect(&self) -> Confetti {
        let palette = vec![
            self.theme.primary.clone(),
            self.theme.pinned.clone(),
            self.theme.focus.clone(),
        ];
        let mut effect = Confetti::new(EFFECT_WIDTH, EFFECT_HEIGHT).with_palette(palette);
        if let Some(seed) = self.seed {
            effect = effect.with_seed(seed);
        }
        if !self.animations {
            effect = effect.disabled();
        }
        effect
    }

    fn handle_key(&mut self, key: &KeyMsg) -> Option<Cmd> {
        match key.key_type {
            KeyType::Left => {
                self.focus = self.focus.prev();
                None
            }
            KeyType::Right | KeyType::Tab => {
                self.focus = self.focus.next();
                None
            }
            KeyType::Enter | KeyType::Space => {
                let msg = match self.focus {
                    Control::Decrement => CounterMsg::Decrease,
                    Control::Reset => CounterMsg::Reset,
                    Control::Increment => CounterMsg::Increase,
                };
                self.update_msg(msg)
            }
            KeyType::Runes => match key.char() {
                Some('+' | '=') => self.update_msg(CounterMsg::Increase),
                Some('-' | '_') => self.update_msg(CounterMsg::Decrease),
                Some('r' | '0') => self.update_msg(CounterMsg::Reset),
                _ => None,
            },
            _ => None,
        }
    }

    fn button(&self, control: Control) -> String {
        let style = if !self.control_enabled(control) {
            self.theme.muted_style().faint()
        } else if self.focus == control {
            self.theme.focus_style().bold()
        } else {
            self.theme.text_style()
        };
        style.render(&format!("[ {} ]", control.label()))
    }
}

impl Model for Counter {
    fn init(&self) -> Option<Cmd> {
        Some(Cmd::new(|| Message::new(FirstRenderMsg)))
    }

    fn update(&mut self, msg: Message) -> Option<Cmd> {
        if msg.is::<FirstRenderMsg>() {
            self.on_first_render();
            return None;
        }

        if let Some(counter_msg) = msg.downcast_ref::<CounterMsg>() {
            return self.update_msg(*counter_msg);
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            let key = key.clone();
            return self.handle_key(&key);
        }

        // Anything else may belong to the celebration effect.
        if let Some(effect) = self.effect.as_mut() {
            return effect.update(&msg);
        }
        None
    }

    fn view(&self) -> String {
        let mut out = String::new();

        let overlay = self.effect.as_ref().map(Confetti::view).unwrap_or_default();
        if !overlay.is_empty() {
            out.push_str(&overlay);
            out.push('\n');
        }

        // The button row is the widest element; title and count center
        // over its measured width.
        let buttons: Vec<String> = Control::all()
            .into_iter()
            .map(|c| self.button(c))
            .collect();
        let row = buttons.join(" ");
        let row_width = tint::width(&row);

        let title_style = self
            .theme
            .text_style()
            .bold()
            .background(self.theme.accent.clone())
            .padding_horizontal(1);
        out.push_str(&tint::center(&title_style.render(&self.title), row_width));
        out.push_str("\n\n");

        let count_style = match self.style_state() {
            StyleState::Boundary => self.theme.pinned_style(),
            StyleState::Normal => self.theme.primary_style(),
        };
        out.push_str(&tint::center(
            &count_style.bold().render(&self.count.to_string()),
            row_width,
        ));
        out.push_str("\n\n");

        out.push_str(&row);

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runloop::Simulator;

    fn rendered(counter: Counter) -> Counter {
        let mut counter = counter;
        counter.update(Message::new(FirstRenderMsg));
        counter
    }

    #[test]
    fn defaults_match_contract() {
        let counter = Counter::new();
        assert_eq!(counter.count(), 0);
        assert_eq!(counter.min(), DEFAULT_MIN);
        assert_eq!(counter.max(), DEFAULT_MAX);
        assert_eq!(counter.baseline(), None);
    }

    #[test]
    fn increase_stops_at_max() {
        let mut counter = rendered(Counter::new().with_bounds(-1, 2));
        for _ in 0..5 {
            counter.increase();
        }
        assert_eq!(counter.count(), 2);
        assert!(counter.is_at_max());
        assert_eq!(counter.style_state(), StyleState::Boundary);
    }

    #[test]
    fn decrease_stops_at_min() {
        let mut counter = rendered(Counter::new().with_bounds(-2, 2));
        for _ in 0..5 {
            counter.decrease();
        }
        assert_eq!(counter.count(), -2);
        assert!(counter.is_at_min());
        assert!(!counter.control_enabled(Control::Decrement));
    }

    #[test]
    fn reset_restores_first_render_count_not_zero() {
        let mut counter = rendered(Counter::new().with_count(5));
        counter.increase();
        counter.increase();
        counter.reset();
        assert_eq!(counter.count(), 5);
    }

    #[test]
    fn baseline_is_captured_once() {
        let mut counter = Counter::new().with_count(3);
        counter.update(Message::new(FirstRenderMsg));
        assert_eq!(counter.baseline(), Some(3));

        counter.increase();
        counter.update(Message::new(FirstRenderMsg));
        assert_eq!(counter.baseline(), Some(3));
    }

    #[test]
    fn out_of_range_baseline_is_restored_verbatim() {
        // Host sets an out-of-range count before first render; the
        // inconsistency is preserved, not repaired.
        let mut counter = rendered(Counter::new().with_count(99));
        counter.reset();
        assert_eq!(counter.count(), 99);
    }

    #[test]
    fn style_state_is_boundary_exactly_at_bounds() {
        let mut counter = rendered(Counter::new().with_bounds(-2, 2));
        assert_eq!(counter.style_state(), StyleState::Normal);
        counter.set_count(2);
        assert_eq!(counter.style_state(), StyleState::Boundary);
        counter.set_count(-2);
        assert_eq!(counter.style_state(), StyleState::Boundary);
        counter.set_count(1);
        assert_eq!(counter.style_state(), StyleState::Normal);
    }

    #[test]
    fn controls_disable_at_bounds() {
        let mut counter = rendered(Counter::new());
        counter.set_count(DEFAULT_MAX);
        assert!(!counter.control_enabled(Control::Increment));
        assert!(counter.control_enabled(Control::Decrement));
        assert!(counter.control_enabled(Control::Reset));
    }

    #[test]
    fn inverted_bounds_disable_both_movement_controls() {
        // min > max is not validated; both movement controls freeze.
        let counter = rendered(Counter::new().with_bounds(5, -5).with_count(0));
        assert!(!counter.control_enabled(Control::Increment));
        assert!(!counter.control_enabled(Control::Decrement));
        assert!(counter.control_enabled(Control::Reset));
    }

    #[test]
    fn celebration_fires_on_transition_to_trigger() {
        let mut counter = rendered(Counter::new().with_bounds(0, 25).with_count(20).with_seed(1));
        let cmd = counter.update_msg(CounterMsg::Increase);
        assert!(cmd.is_some());
        assert_eq!(counter.celebrations(), 1);
    }

    #[test]
    fn celebration_does_not_refire_without_transition() {
        let mut counter =
            rendered(Counter::new().with_bounds(0, CELEBRATION_TRIGGER).with_count(20).with_seed(1));
        assert!(counter.update_msg(CounterMsg::Increase).is_some());

        // Pinned at max == trigger: further increases are no-ops and must
        // not retrigger.
        assert!(counter.update_msg(CounterMsg::Increase).is_none());
        assert_eq!(counter.celebrations(), 1);
    }

    #[test]
    fn celebration_refires_on_each_transition() {
        let mut counter = rendered(Counter::new().with_bounds(0, 25).with_count(20).with_seed(1));
        counter.update_msg(CounterMsg::Increase);
        counter.update_msg(CounterMsg::Increase);
        counter.update_msg(CounterMsg::Decrease);
        assert_eq!(counter.celebrations(), 2);
    }

    #[test]
    fn celebration_unreachable_when_max_below_trigger() {
        let mut counter = rendered(Counter::new());
        for _ in 0..40 {
            counter.update_msg(CounterMsg::Increase);
        }
        assert_eq!(counter.count(), DEFAULT_MAX);
        assert_eq!(counter.celebrations(), 0);
    }

    #[test]
    fn effect_is_constructed_lazily_and_once() {
        let mut counter = rendered(Counter::new().with_bounds(0, 25).with_count(20).with_seed(1));
        assert!(counter.effect.is_none());

        counter.update_msg(CounterMsg::Increase);
        let first_id = counter.effect.as_ref().map(Confetti::id).unwrap();

        counter.update_msg(CounterMsg::Decrease);
        counter.update_msg(CounterMsg::Increase);
        let second_id = counter.effect.as_ref().map(Confetti::id).unwrap();
        assert_eq!(first_id, second_id);
    }

    #[test]
    fn celebration_start_is_deferred_one_pass() {
        let mut counter = rendered(Counter::new().with_bounds(0, 25).with_count(20).with_seed(1));
        let cmd = counter.update_msg(CounterMsg::Increase).unwrap();

        // The effect has not started when the triggering update returns.
        assert!(!counter.celebration_active());

        // Delivering the deferred message on the next pass starts it.
        let start = cmd.execute().unwrap();
        counter.update(start);
        assert!(counter.celebration_active());
    }

    #[test]
    fn disabled_animations_leave_celebration_inert() {
        let mut counter = rendered(
            Counter::new()
                .with_bounds(0, 25)
                .with_count(20)
                .with_animations(false),
        );
        let cmd = counter.update_msg(CounterMsg::Increase).unwrap();
        let start = cmd.execute().unwrap();
        counter.update(start);
        assert!(!counter.celebration_active());
    }

    #[test]
    fn focus_moves_and_wraps() {
        let mut counter = rendered(Counter::new());
        assert_eq!(counter.focused(), Control::Increment);

        counter.update(Message::new(KeyMsg::from_type(KeyType::Right)));
        assert_eq!(counter.focused(), Control::Decrement);

        counter.update(Message::new(KeyMsg::from_type(KeyType::Left)));
        assert_eq!(counter.focused(), Control::Increment);
    }

    #[test]
    fn enter_activates_focused_control() {
        let mut counter = rendered(Counter::new());
        counter.update(Message::new(KeyMsg::from_type(KeyType::Enter)));
        assert_eq!(counter.count(), 1);
    }

    #[test]
    fn activating_disabled_control_is_a_noop() {
        let mut counter = rendered(Counter::new().with_count(DEFAULT_MAX));
        counter.update(Message::new(KeyMsg::from_type(KeyType::Enter)));
        assert_eq!(counter.count(), DEFAULT_MAX);
    }

    #[test]
    fn shortcut_keys_drive_operations() {
        let mut counter = rendered(Counter::new());
        counter.update(Message::new(KeyMsg::from_char('+')));
        counter.update(Message::new(KeyMsg::from_char('+')));
        counter.update(Message::new(KeyMsg::from_char('-')));
        assert_eq!(counter.count(), 1);

        counter.update(Message::new(KeyMsg::from_char('r')));
        assert_eq!(counter.count(), 0);
    }

    #[test]
    fn set_locale_updates_title() {
        let mut counter = Counter::new();
        assert_eq!(counter.title(), "Counter");

        counter.set_locale("es");
        assert_eq!(counter.title(), "Contador");
        assert_eq!(counter.locale(), "es");

        counter.set_locale("en");
        assert_eq!(counter.title(), "Counter");
    }

    #[test]
    fn view_shows_count_title_and_buttons() {
        let counter = rendered(Counter::new().with_count(7));
        let view = counter.view();
        assert!(view.contains('7'));
        assert!(view.contains("Counter"));
        assert!(view.contains("-1"));
        assert!(view.contains("Reset"));
        assert!(view.contains("+1"));
    }

    #[test]
    fn title_and_count_center_over_the_button_row() {
        let counter = rendered(Counter::new().with_count(7));
        let view = counter.view();
        let lines: Vec<&str> = view.lines().collect();

        // title, blank, count, blank, buttons
        assert_eq!(lines.len(), 5);
        let row_width = tint::width(lines[4]);
        assert_eq!(tint::width(lines[0]), row_width);
        assert_eq!(tint::width(lines[2]), row_width);
    }

    #[test]
    fn simulator_captures_baseline_before_input() {
        let mut sim = Simulator::new(Counter::new().with_count(4));
        sim.send(CounterMsg::Increase.into_message());
        sim.run_until_idle();

        assert_eq!(sim.model().baseline(), Some(4));
        assert_eq!(sim.model().count(), 5);
    }
}
