//! Scroll-spy navigation state.
//!
//! `ScrollSpy` is a plain state machine over the active section id. Scroll
//! events and nav clicks are explicit transitions (`on_scroll`, `navigate`)
//! so they can be driven from tests with a fake `SectionLayout`. The browser
//! wiring lives in `use_scroll_spy` and `ScrollSpyContext`.

use std::cell::Cell;
use std::rc::Rc;

use leptos::ev;
use leptos::prelude::*;
use log::{debug, warn};

use crate::browser::{self, DomLayout};
use crate::error::PortfolioError;

/// One navigable block of the page. `id` doubles as the anchor (`#id`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub order: u32,
}

/// Navigation model of the page, in display order.
pub const SECTIONS: &[Section] = &[
    Section { id: "home", label: "Home", icon: "\u{1F464}", order: 0 },
    Section { id: "about", label: "About", icon: "\u{1F464}", order: 1 },
    Section { id: "skills", label: "Skills", icon: "\u{2328}", order: 2 },
    Section { id: "education", label: "Education", icon: "\u{1F393}", order: 3 },
    Section { id: "certifications", label: "Certifications", icon: "\u{1F3C5}", order: 4 },
    Section { id: "experience", label: "Experience", icon: "\u{1F4BC}", order: 5 },
];

/// Look up a section by id, accepting a leading `#` as found in URL fragments.
pub fn find_section(id: &str) -> Option<&'static Section> {
    let id = id.strip_prefix('#').unwrap_or(id);
    SECTIONS.iter().find(|s| s.id == id)
}

/// Where each section's top edge currently sits, in document pixels.
pub trait SectionLayout {
    fn top_of(&self, id: &str) -> Option<f64>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSpy {
    sections: Vec<Section>,
    active: usize,
    nav_offset: f64,
    attached: bool,
}

impl ScrollSpy {
    /// Sections are ordered by `order`; the first one starts active.
    ///
    /// Panics if `sections` is empty: the page always has a navigation model.
    pub fn new(sections: &[Section], nav_offset: f64) -> Self {
        assert!(!sections.is_empty(), "scroll-spy needs at least one section");
        let mut sections = sections.to_vec();
        sections.sort_by_key(|s| s.order);
        Self {
            sections,
            active: 0,
            nav_offset,
            attached: true,
        }
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active(&self) -> &'static str {
        self.sections[self.active].id
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Stop reacting to scroll events. Called when the page unmounts.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Index of the last section (in display order) whose top is at or above
    /// `scroll_y + nav_offset`. Falls back to the first section.
    pub fn resolve(&self, scroll_y: f64, layout: &impl SectionLayout) -> usize {
        let scroll_position = scroll_y + self.nav_offset;
        self.sections
            .iter()
            .enumerate()
            .rev()
            .find(|(_, section)| {
                layout
                    .top_of(section.id)
                    .is_some_and(|top| top <= scroll_position)
            })
            .map_or(0, |(idx, _)| idx)
    }

    /// Scroll transition. Returns true when the active section changed.
    pub fn on_scroll(&mut self, scroll_y: f64, layout: &impl SectionLayout) -> bool {
        if !self.attached {
            return false;
        }
        let next = self.resolve(scroll_y, layout);
        if next == self.active {
            return false;
        }
        debug!(
            "Scroll-spy: {} -> {} at y={}",
            self.active(),
            self.sections[next].id,
            scroll_y
        );
        self.active = next;
        true
    }

    /// Click transition: activate `id` immediately and return the anchor to
    /// scroll to.
    pub fn navigate(&mut self, id: &str) -> Result<&'static str, PortfolioError> {
        let idx = self
            .sections
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| PortfolioError::UnknownSection(id.to_string()))?;
        self.active = idx;
        Ok(self.sections[idx].id)
    }
}

/// Scroll-spy state plus the mobile drawer flag, shared through context.
#[derive(Clone, Copy)]
pub struct ScrollSpyContext {
    pub spy: RwSignal<ScrollSpy>,
    pub menu_open: RwSignal<bool>,
}

impl ScrollSpyContext {
    pub fn new(spy: ScrollSpy) -> Self {
        Self {
            spy: RwSignal::new(spy),
            menu_open: RwSignal::new(false),
        }
    }

    /// Memoized active id, so unchanged scroll frames do not re-render the nav.
    pub fn active(&self) -> Memo<&'static str> {
        let spy = self.spy;
        Memo::new(move |_| spy.with(|s| s.active()))
    }

    /// Nav click: set active, close the drawer, smooth-scroll to the anchor.
    pub fn navigate_to(&self, id: &str) {
        let target = self.spy.try_update(|s| s.navigate(id));
        self.menu_open.set(false);
        match target {
            Some(Ok(target)) => {
                if let Err(e) = browser::scroll_to_section(target) {
                    warn!("Navigation skipped: {}", e);
                }
            }
            Some(Err(e)) => warn!("Navigation ignored: {}", e),
            None => {}
        }
    }
}

/// Attach the window scroll listener for the lifetime of the current owner.
///
/// Recomputation is coalesced to one per animation frame. On cleanup the
/// listener is removed and the spy detached.
pub fn use_scroll_spy(spy: RwSignal<ScrollSpy>) {
    let frame_pending = Rc::new(Cell::new(false));

    let handle = window_event_listener(ev::scroll, move |_| {
        if frame_pending.replace(true) {
            return;
        }
        let frame_pending = Rc::clone(&frame_pending);
        request_animation_frame(move || {
            frame_pending.set(false);
            if !spy.try_with_untracked(|s| s.is_attached()).unwrap_or(false) {
                return;
            }
            let scroll_y = browser::scroll_y();
            spy.try_update(|s| s.on_scroll(scroll_y, &DomLayout));
        });
    });

    on_cleanup(move || {
        handle.remove();
        spy.try_update(|s| s.detach());
        debug!("Scroll-spy listener removed");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLayout(Vec<(&'static str, f64)>);

    impl SectionLayout for FixedLayout {
        fn top_of(&self, id: &str) -> Option<f64> {
            self.0.iter().find(|(s, _)| *s == id).map(|(_, top)| *top)
        }
    }

    fn three_sections() -> Vec<Section> {
        SECTIONS[..3].to_vec()
    }

    fn page_layout() -> FixedLayout {
        FixedLayout(vec![
            ("home", 0.0),
            ("about", 800.0),
            ("skills", 1600.0),
            ("education", 2400.0),
            ("certifications", 3200.0),
            ("experience", 4000.0),
        ])
    }

    #[test]
    fn test_default_active_is_first_section() {
        let spy = ScrollSpy::new(SECTIONS, 100.0);
        assert_eq!(spy.active(), "home");

        let mut spy = spy;
        assert!(!spy.on_scroll(0.0, &page_layout()));
        assert_eq!(spy.active(), "home");
    }

    #[test]
    fn test_scroll_past_section_top_activates_it() {
        let mut spy = ScrollSpy::new(&three_sections(), 100.0);
        let layout = FixedLayout(vec![("home", 0.0), ("about", 800.0), ("skills", 1600.0)]);

        assert!(spy.on_scroll(850.0, &layout));
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn test_nav_offset_counts_toward_threshold() {
        let mut spy = ScrollSpy::new(&three_sections(), 100.0);
        let layout = FixedLayout(vec![("home", 0.0), ("about", 800.0), ("skills", 1600.0)]);

        spy.on_scroll(699.0, &layout);
        assert_eq!(spy.active(), "home");
        spy.on_scroll(700.0, &layout);
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn test_forward_scroll_follows_display_order() {
        let mut spy = ScrollSpy::new(SECTIONS, 100.0);
        let layout = page_layout();
        let order: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();

        let mut seen = vec![spy.active()];
        let mut y = 0.0;
        while y <= 4500.0 {
            spy.on_scroll(y, &layout);
            if seen.last() != Some(&spy.active()) {
                seen.push(spy.active());
            }
            y += 50.0;
        }

        assert_eq!(seen, order);
    }

    #[test]
    fn test_unmounted_sections_are_skipped() {
        let mut spy = ScrollSpy::new(SECTIONS, 100.0);
        let layout = FixedLayout(vec![("home", 0.0), ("skills", 1600.0)]);

        spy.on_scroll(5000.0, &layout);
        assert_eq!(spy.active(), "skills");
    }

    #[test]
    fn test_nothing_qualifies_falls_back_to_first() {
        let mut spy = ScrollSpy::new(SECTIONS, 100.0);
        spy.navigate("skills").unwrap();

        let layout = FixedLayout(vec![("home", 500.0), ("about", 900.0)]);
        assert!(spy.on_scroll(0.0, &layout));
        assert_eq!(spy.active(), "home");
    }

    #[test]
    fn test_navigate_sets_active_immediately() {
        let mut spy = ScrollSpy::new(SECTIONS, 100.0);
        spy.on_scroll(1650.0, &page_layout());
        assert_eq!(spy.active(), "skills");

        let target = spy.navigate("education").unwrap();
        assert_eq!(target, "education");
        assert_eq!(spy.active(), "education");
    }

    #[test]
    fn test_navigate_unknown_section_keeps_state() {
        let mut spy = ScrollSpy::new(SECTIONS, 100.0);
        spy.navigate("about").unwrap();

        let err = spy.navigate("contact").unwrap_err();
        assert!(matches!(err, PortfolioError::UnknownSection(ref id) if id == "contact"));
        assert_eq!(spy.active(), "about");
    }

    #[test]
    fn test_detached_spy_ignores_scroll() {
        let mut spy = ScrollSpy::new(SECTIONS, 100.0);
        spy.detach();

        assert!(!spy.is_attached());
        assert!(!spy.on_scroll(4000.0, &page_layout()));
        assert_eq!(spy.active(), "home");
    }

    #[test]
    fn test_sections_sorted_by_order() {
        let mut reversed = SECTIONS.to_vec();
        reversed.reverse();
        let spy = ScrollSpy::new(&reversed, 0.0);

        assert_eq!(spy.sections(), SECTIONS);
        assert_eq!(spy.active(), "home");
    }

    #[test]
    fn test_find_section_accepts_fragment() {
        assert_eq!(find_section("#skills").map(|s| s.label), Some("Skills"));
        assert_eq!(find_section("education").map(|s| s.order), Some(3));
        assert!(find_section("#personal").is_none());
    }

    #[test]
    fn test_section_ids_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }
}
