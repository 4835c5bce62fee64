/// Offset added to `scrollY` before testing section bounds, so a section
/// becomes active slightly before its top reaches the viewport edge.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
const PAGE_BOTTOM_TOLERANCE: f64 = 2.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Journey,
    Projects,
    Skills,
    Certifications,
    Contact,
}

impl Section {
    /// Declaration order; the scroll spy breaks ties by this order.
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::About,
        Section::Journey,
        Section::Projects,
        Section::Skills,
        Section::Certifications,
        Section::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Journey => "journey",
            Self::Projects => "projects",
            Self::Skills => "skills",
            Self::Certifications => "certifications",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Journey => "Journey",
            Self::Projects => "Projects",
            Self::Skills => "Skills",
            Self::Certifications => "Certifications",
            Self::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn last() -> Self {
        Self::ALL[Self::ALL.len() - 1]
    }
}

/// Vertical extent of a rendered section, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open on the bottom edge, so a zero-height section never matches.
    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Scroll metrics of the document element at the time of a scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn at_page_bottom(&self) -> bool {
        self.scroll_height > self.client_height
            && self.scroll_top + self.client_height >= self.scroll_height - PAGE_BOTTOM_TOLERANCE
    }
}

/// Percentage of the page already scrolled, in `[0, 100]`. Content that does
/// not overflow the viewport reports 0.
pub fn scroll_progress(metrics: &ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if !(scrollable > 0.0) || !metrics.scroll_top.is_finite() {
        return 0.0;
    }

    (metrics.scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// First section, in the order given, whose bounds contain
/// `scroll_y + ACTIVE_SECTION_OFFSET`; `previous` when none does.
pub fn active_section(
    bounds: &[(Section, SectionBounds)],
    scroll_y: f64,
    previous: Section,
) -> Section {
    let probe = scroll_y + ACTIVE_SECTION_OFFSET;

    bounds
        .iter()
        .find(|(_, section_bounds)| section_bounds.contains(probe))
        .map(|(section, _)| *section)
        .unwrap_or(previous)
}

/// Scroll-spy result including the page-bottom rule: once the reader hits the
/// bottom of the document the last section is highlighted, since short
/// trailing sections can never reach the probe line.
pub fn spy(
    bounds: &[(Section, SectionBounds)],
    metrics: &ScrollMetrics,
    previous: Section,
) -> Section {
    if metrics.at_page_bottom() {
        return Section::last();
    }

    active_section(bounds, metrics.scroll_top, previous)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: &[f64]) -> Vec<(Section, SectionBounds)> {
        let mut top = 0.0;
        Section::ALL
            .iter()
            .zip(heights)
            .map(|(section, height)| {
                let entry = (*section, SectionBounds::new(top, *height));
                top += height;
                entry
            })
            .collect()
    }

    #[test]
    fn progress_is_zero_without_overflow() {
        let metrics = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
        };

        let progress = scroll_progress(&metrics);
        assert!(!progress.is_nan());
        assert_eq!(progress, 0.0);
    }

    #[test]
    fn progress_is_zero_when_viewport_exceeds_content() {
        let metrics = ScrollMetrics {
            scroll_top: 10.0,
            scroll_height: 600.0,
            client_height: 800.0,
        };

        assert_eq!(scroll_progress(&metrics), 0.0);
    }

    #[test]
    fn progress_scales_and_clamps() {
        let halfway = ScrollMetrics {
            scroll_top: 500.0,
            scroll_height: 1800.0,
            client_height: 800.0,
        };
        assert_eq!(scroll_progress(&halfway), 50.0);

        let overscrolled = ScrollMetrics {
            scroll_top: 1200.0,
            ..halfway
        };
        assert_eq!(scroll_progress(&overscrolled), 100.0);

        let bounced = ScrollMetrics {
            scroll_top: -40.0,
            ..halfway
        };
        assert_eq!(scroll_progress(&bounced), 0.0);
    }

    #[test]
    fn active_section_uses_probe_offset() {
        let bounds = stacked(&[600.0, 400.0, 400.0, 800.0, 500.0, 300.0, 300.0]);

        assert_eq!(active_section(&bounds, 0.0, Section::Home), Section::Home);
        assert_eq!(active_section(&bounds, 499.0, Section::Home), Section::Home);
        assert_eq!(active_section(&bounds, 500.0, Section::Home), Section::About);
        assert_eq!(active_section(&bounds, 1350.0, Section::Home), Section::Projects);
    }

    #[test]
    fn overlapping_sections_resolve_to_first_declared() {
        let bounds = vec![
            (Section::Home, SectionBounds::new(0.0, 1000.0)),
            (Section::About, SectionBounds::new(200.0, 1000.0)),
            (Section::Journey, SectionBounds::new(200.0, 0.0)),
        ];

        assert_eq!(active_section(&bounds, 300.0, Section::Contact), Section::Home);
        assert_eq!(active_section(&bounds, 1000.0, Section::Contact), Section::About);
    }

    #[test]
    fn zero_height_section_never_activates() {
        let bounds = vec![
            (Section::Journey, SectionBounds::new(100.0, 0.0)),
            (Section::Projects, SectionBounds::new(100.0, 400.0)),
        ];

        assert_eq!(active_section(&bounds, 0.0, Section::Home), Section::Projects);
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let bounds = vec![(Section::Home, SectionBounds::new(0.0, 300.0))];

        assert_eq!(active_section(&bounds, 900.0, Section::Skills), Section::Skills);
        assert_eq!(active_section(&[], 0.0, Section::About), Section::About);
    }

    #[test]
    fn page_bottom_activates_last_section() {
        let bounds = stacked(&[600.0, 400.0, 400.0, 800.0, 500.0, 300.0, 100.0]);
        let metrics = ScrollMetrics {
            scroll_top: 2300.0,
            scroll_height: 3100.0,
            client_height: 800.0,
        };

        assert_eq!(active_section(&bounds, metrics.scroll_top, Section::Home), Section::Skills);
        assert_eq!(spy(&bounds, &metrics, Section::Home), Section::Contact);
    }

    #[test]
    fn short_page_is_never_at_bottom() {
        let metrics = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 700.0,
            client_height: 800.0,
        };

        assert!(!metrics.at_page_bottom());
        assert_eq!(spy(&[], &metrics, Section::Home), Section::Home);
    }

    #[test]
    fn anchors_match_section_ids() {
        let ids: Vec<_> = Section::ALL.iter().map(|section| section.id()).collect();
        assert_eq!(
            ids,
            ["home", "about", "journey", "projects", "skills", "certifications", "contact"]
        );
        assert_eq!(Section::Skills.href(), "#skills");
        assert_eq!(Section::last(), Section::Contact);
    }
}
