//! Decorative effects: cursor follower, hover lift, typewriter text and sparkle
//! particles.

pub const CURSOR_SIZE_PX: f64 = 20.0;
pub const INTERACTIVE_SELECTOR: &str = ".btn, .portfolio-item, .skill-tag, .award-item, .contact-item";
pub const LIFT_TRANSFORM: &str = "translateY(-5px) scale(1.02)";
pub const REST_TRANSFORM: &str = "translateY(0) scale(1)";

pub const TYPEWRITER_TICK_MS: u32 = 100;

pub const SPARKLE_LIFETIME_MS: f64 = 3_000.0;
pub const SPARKLE_INITIAL_COUNT: usize = 50;
pub const SPARKLE_INITIAL_SPACING_MS: f64 = 100.0;
pub const SPARKLE_RESPAWN_MIN_MS: f64 = 1_000.0;
pub const SPARKLE_RESPAWN_JITTER_MS: f64 = 2_000.0;
pub const SPARKLE_MAX_CONCURRENT: usize = 60;
pub const SPARKLE_TICK_MS: u32 = 100;

/// Pointer follower; `None` position until the first pointer move.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    position: Option<(f64, f64)>,
    over_interactive: bool,
}

impl Cursor {
    pub fn move_to(&mut self, client_x: f64, client_y: f64) {
        let half = CURSOR_SIZE_PX / 2.0;
        self.position = Some((client_x - half, client_y - half));
    }

    pub fn set_over_interactive(&mut self, over: bool) {
        self.over_interactive = over;
    }

    pub fn position(&self) -> Option<(f64, f64)> {
        self.position
    }

    pub fn transform(&self) -> &'static str {
        if self.over_interactive {
            "scale(2)"
        } else {
            "scale(1)"
        }
    }
}

/// Attribute carrying the hover lift. Components never render it, so
/// re-renders of a hovered element leave it in place.
pub const LIFT_ATTRIBUTE: &str = "data-lift";

pub fn lift_state(hovered: bool) -> &'static str {
    if hovered {
        "up"
    } else {
        "rest"
    }
}

/// Stylesheet rules mapping each [`lift_state`] to its transform.
pub fn lift_rules() -> String {
    format!(
        "[{LIFT_ATTRIBUTE}=\"{}\"] {{ transform: {LIFT_TRANSFORM}; }}\n\
         [{LIFT_ATTRIBUTE}=\"{}\"] {{ transform: {REST_TRANSFORM}; }}\n",
        lift_state(true),
        lift_state(false),
    )
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    chars: Vec<char>,
    ticks: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            ticks: 0,
        }
    }

    /// Reveals the next character. Returns `false` once the tick past the
    /// end of the text has run, after which the interval should stop.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        self.ticks <= self.chars.len()
    }

    pub fn shown(&self) -> String {
        self.chars.iter().take(self.ticks).collect()
    }

    #[cfg(test)]
    fn is_done(&self) -> bool {
        self.ticks > self.chars.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sparkle {
    pub id: u64,
    pub left_percent: f64,
    pub top_percent: f64,
    pub born_at: f64,
}

impl Sparkle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%;",
            self.left_percent, self.top_percent
        )
    }
}

/// Self-replenishing particle field with a concurrency cap and a stop switch.
///
/// `random` sources passed in must yield values in `[0, 1)`.
#[derive(Clone, Debug, PartialEq)]
pub struct SparkleField {
    particles: Vec<Sparkle>,
    pending: Vec<f64>,
    next_id: u64,
    max_concurrent: usize,
    stopped: bool,
}

impl Default for SparkleField {
    fn default() -> Self {
        Self::new(SPARKLE_MAX_CONCURRENT)
    }
}

impl SparkleField {
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            particles: Vec::new(),
            pending: Vec::new(),
            next_id: 0,
            max_concurrent,
            stopped: false,
        }
    }

    /// Schedules the initial staggered burst.
    pub fn start(&mut self, now: f64) {
        if self.stopped {
            return;
        }
        #[allow(clippy::cast_precision_loss)]
        self.pending.extend(
            (0..SPARKLE_INITIAL_COUNT).map(|i| now + i as f64 * SPARKLE_INITIAL_SPACING_MS),
        );
    }

    pub fn stop(&mut self) {
        self.stopped = true;
        self.pending.clear();
        self.particles.clear();
    }

    /// Drops expired particles and runs every spawn that is due.
    pub fn advance(&mut self, now: f64, random: &mut impl FnMut() -> f64) {
        self.particles
            .retain(|sparkle| now - sparkle.born_at < SPARKLE_LIFETIME_MS);
        if self.stopped {
            return;
        }

        let (due, later): (Vec<f64>, Vec<f64>) = self.pending.iter().partition(|at| **at <= now);
        self.pending = later;

        for _ in due {
            if self.particles.len() < self.max_concurrent {
                let sparkle = Sparkle {
                    id: self.next_id,
                    left_percent: random() * 100.0,
                    top_percent: random() * 100.0,
                    born_at: now,
                };
                self.next_id += 1;
                self.particles.push(sparkle);
            }
            self.pending
                .push(now + SPARKLE_RESPAWN_MIN_MS + random() * SPARKLE_RESPAWN_JITTER_MS);
        }
    }

    pub fn particles(&self) -> &[Sparkle] {
        &self.particles
    }

    #[cfg(test)]
    fn pending_spawns(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_random(value: f64) -> impl FnMut() -> f64 {
        move || value
    }

    #[test]
    fn cursor_appears_on_first_move_centered_on_pointer() {
        let mut cursor = Cursor::default();
        assert_eq!(cursor.position(), None);

        cursor.move_to(110.0, 60.0);
        assert_eq!(cursor.position(), Some((100.0, 50.0)));
    }

    #[test]
    fn cursor_scales_over_interactive_elements() {
        let mut cursor = Cursor::default();
        cursor.set_over_interactive(true);
        assert_eq!(cursor.transform(), "scale(2)");
        cursor.set_over_interactive(false);
        assert_eq!(cursor.transform(), "scale(1)");
    }

    #[test]
    fn hover_lift_rules_key_off_the_lift_attribute() {
        let rules = lift_rules();
        assert!(rules.contains(&format!(
            "[data-lift=\"up\"] {{ transform: {LIFT_TRANSFORM}; }}"
        )));
        assert!(rules.contains(&format!(
            "[data-lift=\"rest\"] {{ transform: {REST_TRANSFORM}; }}"
        )));
        assert!(!rules.contains("style"));
        assert_ne!(lift_state(true), lift_state(false));
    }

    #[test]
    fn typewriter_reveals_one_char_per_tick_then_stops() {
        let mut typewriter = Typewriter::new("Genius");
        let mut ticks = 0;
        while typewriter.tick() {
            ticks += 1;
            assert_eq!(typewriter.shown().chars().count(), ticks);
        }
        assert_eq!(ticks, 6);
        assert!(typewriter.is_done());
        assert_eq!(typewriter.shown(), "Genius");
    }

    #[test]
    fn typewriter_handles_multibyte_text() {
        let mut typewriter = Typewriter::new("Stark™");
        while typewriter.tick() {}
        assert_eq!(typewriter.shown(), "Stark™");
    }

    #[test]
    fn initial_burst_is_staggered() {
        let mut field = SparkleField::default();
        let mut random = fixed_random(0.5);
        field.start(0.0);

        field.advance(0.0, &mut random);
        assert_eq!(field.particles().len(), 1);

        field.advance(950.0, &mut random);
        assert_eq!(field.particles().len(), 10);
    }

    #[test]
    fn sparkles_expire_after_lifetime() {
        let mut field = SparkleField::default();
        let mut random = fixed_random(0.25);
        field.start(0.0);
        field.advance(0.0, &mut random);
        let first = field.particles()[0];
        assert_eq!(first.left_percent, 25.0);

        field.advance(2_999.0, &mut random);
        assert!(field.particles().iter().any(|s| s.id == first.id));
        field.advance(3_000.0, &mut random);
        assert!(field.particles().iter().all(|s| s.id != first.id));
    }

    #[test]
    fn every_spawn_schedules_a_replacement() {
        let mut field = SparkleField::default();
        let mut random = fixed_random(0.0);
        field.start(0.0);
        field.advance(0.0, &mut random);

        assert_eq!(field.pending_spawns(), SPARKLE_INITIAL_COUNT);
        field.advance(1_000.0, &mut random);
        assert!(field.particles().len() > 1);
    }

    #[test]
    fn population_never_exceeds_cap_over_long_runs() {
        let mut field = SparkleField::new(5);
        let mut random = fixed_random(0.0);
        field.start(0.0);

        let mut now = 0.0;
        while now < 60_000.0 {
            field.advance(now, &mut random);
            assert!(field.particles().len() <= 5);
            now += 100.0;
        }
        assert!(field.pending_spawns() <= SPARKLE_INITIAL_COUNT);
    }

    #[test]
    fn stop_halts_the_loop() {
        let mut field = SparkleField::default();
        let mut random = fixed_random(0.5);
        field.start(0.0);
        field.advance(500.0, &mut random);
        field.stop();

        field.advance(10_000.0, &mut random);
        assert!(field.particles().is_empty());
        assert_eq!(field.pending_spawns(), 0);
        field.start(10_000.0);
        assert_eq!(field.pending_spawns(), 0);
    }
}
