//! The confetti burst model.
//!
//! `Confetti` is an Elm-style effect component. A host signals it to start
//! by delivering a [`PopMsg`] (usually via [`Confetti::pop_cmd`], which
//! defers the signal by one message-loop pass so the triggering render
//! completes first). While active it schedules its own [`FrameMsg`] ticks,
//! advances and culls particles, and rearms itself once the field is
//! empty. Hosts never track completion.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use runloop::{Cmd, Message, defer, tick};
use tint::{Color, Style};
use tracing::debug;

use crate::particle::{CELL_GRAVITY, Particle, Vec2, fps};

/// Frames per second for the burst animation.
const FPS: u32 = 30;

/// Particles spawned per burst.
const BURST_SIZE: usize = 48;

/// Glyphs particles are drawn with.
const GLYPHS: &[char] = &['●', '▲', '■', '◆', '✶', '*'];

/// Global ID counter for confetti instances.
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// Message signaling the effect to start a burst.
#[derive(Debug, Clone, Copy)]
pub struct PopMsg {
    /// The confetti instance ID.
    pub id: u64,
}

/// Message indicating an animation frame should occur.
#[derive(Debug, Clone, Copy)]
pub struct FrameMsg {
    /// The confetti instance ID.
    pub id: u64,
    /// Tag for message ordering.
    tag: u64,
}

/// Default particle colors, used when the host supplies no palette.
fn default_palette() -> Vec<Color> {
    vec![
        Color::new("#7571F9"),
        Color::new("#EE6FF8"),
        Color::new("#FFD23F"),
        Color::new("#5AE8A5"),
        Color::new("#FF6B6B"),
    ]
}

/// Celebratory particle burst effect.
///
/// # Example
///
/// ```rust
/// use confetti::Confetti;
///
/// let effect = Confetti::new(40, 12).with_seed(7);
/// assert!(!effect.is_active());
/// ```
#[derive(Debug, Clone)]
pub struct Confetti {
    id: u64,
    tag: u64,
    width: usize,
    height: usize,
    enabled: bool,
    seed: Option<u64>,
    bursts: u64,
    palette: Vec<Color>,
    particles: Vec<Particle>,
}

impl Confetti {
    /// Creates an effect covering a `width` x `height` cell viewport.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            id: next_id(),
            tag: 0,
            width,
            height,
            enabled: true,
            seed: None,
            bursts: 0,
            palette: default_palette(),
            particles: Vec::new(),
        }
    }

    /// Seeds burst generation for reproducible animations.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replaces the particle color palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        if !palette.is_empty() {
            self.palette = palette;
        }
        self
    }

    /// Disables the effect; pop signals become inert.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Returns the effect's unique ID.
    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns whether a burst is currently animating.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.particles.is_empty()
    }

    /// Command delivering this effect's start signal on the next
    /// message-loop pass, after the current render completes.
    #[must_use]
    pub fn pop_cmd(&self) -> Cmd {
        let id = self.id;
        defer(move || Message::new(PopMsg { id }))
    }

    /// Updates the effect state.
    ///
    /// Returns the next frame command while a burst is animating.
    pub fn update(&mut self, msg: &Message) -> Option<Cmd> {
        if let Some(pop) = msg.downcast_ref::<PopMsg>() {
            if pop.id != self.id {
                return None;
            }
            if !self.enabled {
                debug!(id = self.id, "pop signal ignored, effect disabled");
                return None;
            }
            self.spawn_burst();
            return Some(self.frame_cmd());
        }

        if let Some(frame) = msg.downcast_ref::<FrameMsg>() {
            if frame.id != self.id || frame.tag != self.tag {
                return None;
            }

            let dt = fps(FPS);
            let height = self.height as f64;
            let width = self.width as f64;
            for p in &mut self.particles {
                p.step(dt, CELL_GRAVITY);
            }
            self.particles
                .retain(|p| p.pos.y <= height && p.pos.x >= 0.0 && p.pos.x < width);

            self.tag = self.tag.wrapping_add(1);
            if self.particles.is_empty() {
                // Burst finished; the effect has rearmed itself.
                debug!(id = self.id, "burst complete");
                return None;
            }
            return Some(self.frame_cmd());
        }

        None
    }

    /// Renders the particle field as a `height`-line cell grid.
    ///
    /// Returns an empty string while idle, so hosts can overlay the
    /// effect unconditionally.
    #[must_use]
    pub fn view(&self) -> String {
        if self.particles.is_empty() {
            return String::new();
        }

        let mut grid: Vec<Vec<Option<(char, &Color)>>> =
            vec![vec![None; self.width]; self.height];
        for p in &self.particles {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let (x, y) = (p.pos.x.round() as i64, p.pos.y.round() as i64);
            if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
                grid[y as usize][x as usize] = Some((p.glyph, &p.color));
            }
        }

        let mut out = String::with_capacity(self.height * (self.width + 1));
        for (i, row) in grid.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for cell in row {
                match cell {
                    Some((glyph, color)) => {
                        let styled =
                            Style::new().foreground((*color).clone()).render(&glyph.to_string());
                        out.push_str(&styled);
                    }
                    None => out.push(' '),
                }
            }
        }
        out
    }

    fn frame_cmd(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        tick(Duration::from_secs_f64(fps(FPS)), move || {
            Message::new(FrameMsg { id, tag })
        })
    }

    /// Spawns a burst of particles launched upward from the bottom center.
    fn spawn_burst(&mut self) {
        let mut rng = match self.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed.wrapping_add(self.bursts)),
            None => Pcg64Mcg::seed_from_u64(rand::rng().random()),
        };
        self.bursts = self.bursts.wrapping_add(1);

        let origin = Vec2::new(self.width as f64 / 2.0, self.height as f64 - 1.0);
        for _ in 0..BURST_SIZE {
            let vel = Vec2::new(rng.random_range(-9.0..9.0), rng.random_range(-16.0..-6.0));
            let glyph = GLYPHS[rng.random_range(0..GLYPHS.len())];
            let color = self.palette[rng.random_range(0..self.palette.len())].clone();
            self.particles.push(Particle::new(origin, vel, glyph, color));
        }
        debug!(id = self.id, particles = self.particles.len(), "burst spawned");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pop(effect: &Confetti) -> Message {
        Message::new(PopMsg { id: effect.id() })
    }

    fn frame(effect: &Confetti) -> Message {
        Message::new(FrameMsg {
            id: effect.id(),
            tag: effect.tag,
        })
    }

    #[test]
    fn pop_starts_a_burst() {
        let mut effect = Confetti::new(40, 12).with_seed(1);
        assert!(!effect.is_active());

        let cmd = effect.update(&pop(&effect));
        assert!(cmd.is_some());
        assert!(effect.is_active());
    }

    #[test]
    fn pop_for_other_instance_is_ignored() {
        let mut effect = Confetti::new(40, 12).with_seed(1);
        let other = Message::new(PopMsg { id: effect.id() + 999 });
        assert!(effect.update(&other).is_none());
        assert!(!effect.is_active());
    }

    #[test]
    fn disabled_effect_ignores_pop() {
        let mut effect = Confetti::new(40, 12).with_seed(1).disabled();
        assert!(effect.update(&pop(&effect)).is_none());
        assert!(!effect.is_active());
    }

    #[test]
    fn stale_frame_tags_are_rejected() {
        let mut effect = Confetti::new(40, 12).with_seed(1);
        effect.update(&pop(&effect));

        let stale = Message::new(FrameMsg {
            id: effect.id(),
            tag: effect.tag.wrapping_add(5),
        });
        assert!(effect.update(&stale).is_none());
    }

    #[test]
    fn burst_eventually_rearms() {
        let mut effect = Confetti::new(40, 12).with_seed(1);
        effect.update(&pop(&effect));

        // Gravity pulls everything below the viewport within a few
        // hundred frames; the effect must go idle again by itself.
        for _ in 0..10_000 {
            if !effect.is_active() {
                break;
            }
            effect.update(&frame(&effect));
        }
        assert!(!effect.is_active());

        // And it can pop again.
        effect.update(&pop(&effect));
        assert!(effect.is_active());
    }

    #[test]
    fn seeded_bursts_are_reproducible() {
        let mut a = Confetti::new(40, 12).with_seed(42);
        let mut b = Confetti::new(40, 12).with_seed(42);
        a.update(&pop(&a));
        b.update(&pop(&b));
        assert_eq!(a.view(), b.view());
    }

    #[test]
    fn idle_view_is_empty() {
        let effect = Confetti::new(40, 12);
        assert_eq!(effect.view(), "");
    }

    #[test]
    fn active_view_has_viewport_height() {
        let mut effect = Confetti::new(40, 12).with_seed(3);
        effect.update(&pop(&effect));
        assert_eq!(effect.view().lines().count(), 12);
    }

    #[test]
    fn pop_cmd_defers_the_start_signal() {
        let effect = Confetti::new(40, 12);
        let msg = effect.pop_cmd().execute().unwrap();
        let pop = msg.downcast::<PopMsg>().unwrap();
        assert_eq!(pop.id, effect.id());
    }
}
