use crate::theme::Theme;

pub const SPY_POINT_OFFSET: f64 = 100.0;
pub const SCROLL_TARGET_OFFSET: f64 = 80.0;
pub const NAVBAR_BACKGROUND_THRESHOLD: f64 = 50.0;
pub const NAVBAR_SHADOW_THRESHOLD: f64 = 100.0;
pub const PARALLAX_FACTOR: f64 = 0.5;

/// Vertical extent of a page section, half-open: `[top, top + height)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// Index of the navigation link whose section contains `scroll_y + 100`.
///
/// Links whose target section is missing are passed as `None` and skipped.
/// When regions overlap the last match in document order wins.
pub fn active_section(scroll_y: f64, sections: &[Option<SectionBounds>]) -> Option<usize> {
    let spy_point = scroll_y + SPY_POINT_OFFSET;
    sections
        .iter()
        .enumerate()
        .filter_map(|(index, bounds)| bounds.filter(|b| b.contains(spy_point)).map(|_| index))
        .last()
}

pub fn scroll_target(section_top: f64) -> f64 {
    section_top - SCROLL_TARGET_OFFSET
}

pub fn navbar_background(scroll_y: f64, theme: Theme) -> &'static str {
    let scrolled = scroll_y > NAVBAR_BACKGROUND_THRESHOLD;
    match (theme, scrolled) {
        (Theme::Light, true) => "rgba(255, 255, 255, 0.98)",
        (Theme::Light, false) => "rgba(255, 255, 255, 0.95)",
        (Theme::Dark, true) => "rgba(26, 26, 26, 0.98)",
        (Theme::Dark, false) => "rgba(26, 26, 26, 0.95)",
    }
}

pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > NAVBAR_SHADOW_THRESHOLD {
        "0 2px 20px var(--shadow-color)"
    } else {
        "none"
    }
}

pub fn parallax_transform(scroll_y: f64) -> String {
    format!("translateY({}px)", scroll_y * PARALLAX_FACTOR)
}

/// Strips the leading `#` of an in-page link target.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Vec<Option<SectionBounds>> {
        vec![
            Some(SectionBounds { top: 0.0, height: 600.0 }),
            Some(SectionBounds { top: 600.0, height: 800.0 }),
            None,
            Some(SectionBounds { top: 1400.0, height: 500.0 }),
        ]
    }

    #[test]
    fn spy_point_is_offset_by_one_hundred_pixels() {
        assert_eq!(active_section(0.0, &layout()), Some(0));
        assert_eq!(active_section(499.0, &layout()), Some(0));
        assert_eq!(active_section(500.0, &layout()), Some(1));
    }

    #[test]
    fn section_bottom_is_exclusive() {
        assert_eq!(active_section(1299.0, &layout()), Some(1));
        assert_eq!(active_section(1300.0, &layout()), Some(3));
    }

    #[test]
    fn no_section_matches_past_the_end() {
        assert_eq!(active_section(1800.0, &layout()), None);
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let sections = vec![
            Some(SectionBounds { top: 0.0, height: 1000.0 }),
            Some(SectionBounds { top: 200.0, height: 300.0 }),
        ];
        assert_eq!(active_section(150.0, &sections), Some(1));
        assert_eq!(active_section(500.0, &sections), Some(0));
    }

    #[test]
    fn scroll_target_leaves_room_for_the_navbar() {
        assert_eq!(scroll_target(600.0), 520.0);
    }

    #[test]
    fn navbar_background_depends_on_threshold_and_theme() {
        assert_eq!(navbar_background(50.0, Theme::Light), "rgba(255, 255, 255, 0.95)");
        assert_eq!(navbar_background(51.0, Theme::Light), "rgba(255, 255, 255, 0.98)");
        assert_eq!(navbar_background(10.0, Theme::Dark), "rgba(26, 26, 26, 0.95)");
        assert_eq!(navbar_background(300.0, Theme::Dark), "rgba(26, 26, 26, 0.98)");
    }

    #[test]
    fn navbar_shadow_appears_past_one_hundred_pixels() {
        assert_eq!(navbar_shadow(100.0), "none");
        assert_eq!(navbar_shadow(101.0), "0 2px 20px var(--shadow-color)");
    }

    #[test]
    fn parallax_moves_at_half_speed() {
        assert_eq!(parallax_transform(300.0), "translateY(150px)");
    }

    #[test]
    fn fragment_id_requires_hash_prefix() {
        assert_eq!(fragment_id("#about"), Some("about"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id("/resume.pdf"), None);
    }
}
