//! One-shot reveal state, the stat counter and the skill-bar fill.

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEALED_CLASS: &str = "fade-in";
pub const FLOATING_CLASS: &str = "floating";

pub const COUNTER_STEPS: f64 = 50.0;
pub const COUNTER_TICK_MS: u32 = 40;

pub const SKILL_THRESHOLD: f64 = 0.5;
pub const SKILL_ROOT_MARGIN: &str = "0px";
pub const SKILL_FILL_DELAY_MS: u32 = 200;

/// Latch that fires at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OneShot {
    fired: bool,
}

impl OneShot {
    /// Returns `true` only on the first call.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CounterTarget {
    pub value: u64,
    pub suffix: String,
    pub original: String,
}

impl CounterTarget {
    /// Splits displayed text into its digits and everything else:
    /// `"250+"` becomes `250` with suffix `"+"`. Text without digits (or with
    /// more digits than fit a `u64`) yields `None`.
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        let suffix: String = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        let value = digits.parse::<u64>().ok()?;
        Some(Self {
            value,
            suffix,
            original: text.to_string(),
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: CounterTarget,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: CounterTarget) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let increment = target.value as f64 / COUNTER_STEPS;
        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    /// Advances one tick and returns the text to display. The finishing tick
    /// hands back the original text verbatim.
    pub fn tick(&mut self) -> String {
        #[allow(clippy::cast_precision_loss)]
        let goal = self.target.value as f64;
        self.current += self.increment;
        if self.current >= goal {
            self.current = goal;
            self.finished = true;
        }
        self.text()
    }

    pub fn value(&self) -> u64 {
        if self.finished {
            return self.target.value;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let floored = self.current.floor() as u64;
        floored.min(self.target.value)
    }

    pub fn text(&self) -> String {
        if self.finished {
            return self.target.original.clone();
        }
        format!("{}{}", self.value(), self.target.suffix)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

/// Skill-bar fill: the captured width is collapsed on first reveal and
/// restored after a short delay so the CSS transition plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SkillFill {
    #[default]
    Pending,
    Collapsed,
    Filled,
}

impl SkillFill {
    pub fn on_reveal(self) -> Self {
        match self {
            Self::Pending => Self::Collapsed,
            other => other,
        }
    }

    pub fn on_delay_elapsed(self) -> Self {
        match self {
            Self::Collapsed => Self::Filled,
            other => other,
        }
    }

    pub fn width(self, target_percent: u8) -> String {
        match self {
            Self::Collapsed => "0%".to_string(),
            Self::Pending | Self::Filled => format!("{target_percent}%"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(text: &str) -> Vec<String> {
        let target = CounterTarget::parse(text).expect("counter text has digits");
        let mut animation = CounterAnimation::new(target);
        let mut frames = Vec::new();
        while !animation.is_finished() {
            frames.push(animation.tick());
            assert!(frames.len() <= 60, "counter must stop");
        }
        frames
    }

    #[test]
    fn one_shot_fires_once() {
        let mut latch = OneShot::default();
        assert!(latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn parse_splits_digits_and_suffix() {
        let target = CounterTarget::parse("250+").expect("parse");
        assert_eq!(target.value, 250);
        assert_eq!(target.suffix, "+");
    }

    #[test]
    fn parse_without_digits_is_rejected() {
        assert_eq!(CounterTarget::parse("∞"), None);
    }

    #[test]
    fn final_frame_equals_original_text() {
        for text in ["250+", "15", "99%", "7 yrs", "1000K", "007+", "9007199254740993+"] {
            let frames = run_to_end(text);
            assert_eq!(frames.last().map(String::as_str), Some(text));
        }
    }

    #[test]
    fn frames_are_non_decreasing_and_bounded() {
        let target = CounterTarget::parse("137+").expect("parse");
        let mut animation = CounterAnimation::new(target);
        let mut previous = 0;
        while !animation.is_finished() {
            animation.tick();
            let value = animation.value();
            assert!(value >= previous);
            assert!(value <= 137);
            previous = value;
        }
        assert_eq!(previous, 137);
    }

    #[test]
    fn values_beyond_f64_precision_finish_exactly() {
        let target = CounterTarget::parse("9007199254740993+").expect("parse");
        let mut animation = CounterAnimation::new(target);
        while !animation.is_finished() {
            animation.tick();
        }
        assert_eq!(animation.value(), 9_007_199_254_740_993);
    }

    #[test]
    fn counter_finishes_in_fifty_ticks() {
        assert_eq!(run_to_end("500").len(), 50);
    }

    #[test]
    fn zero_target_finishes_on_first_tick() {
        assert_eq!(run_to_end("0+"), vec!["0+".to_string()]);
    }

    #[test]
    fn skill_fill_collapses_then_restores_width() {
        let fill = SkillFill::default();
        assert_eq!(fill.width(90), "90%");

        let fill = fill.on_reveal();
        assert_eq!(fill.width(90), "0%");

        let fill = fill.on_delay_elapsed();
        assert_eq!(fill.width(90), "90%");
        assert_eq!(fill.on_reveal(), SkillFill::Filled);
    }
}
