//! Slide deck navigation.
//!
//! Wheel, keyboard and touch input is arbitrated here: when the active slide
//! overflows its viewport the browser is allowed to scroll it, and only input
//! arriving at the top or bottom edge moves to another slide.

use log::debug;

use crate::config::{
    EDGE_SCROLLS_TO_ADVANCE, EDGE_TOLERANCE_PX, MIN_SWIPE_PX, OVERFLOW_TOLERANCE_PX,
};

/// Scroll geometry of the active slide, read from the DOM on every event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SlideMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl SlideMetrics {
    pub fn has_overflow(&self) -> bool {
        self.scroll_height > self.client_height + OVERFLOW_TOLERANCE_PX
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top <= EDGE_TOLERANCE_PX
    }

    pub fn at_bottom(&self) -> bool {
        self.scroll_top + self.client_height >= self.scroll_height - EDGE_TOLERANCE_PX
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WheelOutcome {
    pub prevent_default: bool,
    pub transition: Option<Transition>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not ours, leave the event alone.
    Ignore,
    /// Let the browser scroll the overflowing slide.
    Scroll,
    /// Default prevented; the deck moved if `transition` is set.
    Navigate(Option<Transition>),
    CloseModal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    current: usize,
    total: usize,
    animating: bool,
    edge_scrolls: u32,
}

impl Deck {
    pub fn new(total: usize) -> Self {
        Self {
            current: 0,
            total,
            animating: false,
            edge_scrolls: 0,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn edge_scrolls(&self) -> u32 {
        self.edge_scrolls
    }

    pub fn go_to(&mut self, index: usize) -> Option<Transition> {
        if index == self.current || self.animating || index >= self.total {
            return None;
        }
        let transition = Transition {
            from: self.current,
            to: index,
        };
        self.animating = true;
        self.edge_scrolls = 0;
        self.current = index;
        debug!("deck: slide {} -> {}", transition.from, transition.to);
        Some(transition)
    }

    pub fn next(&mut self) -> Option<Transition> {
        if self.current + 1 < self.total {
            self.go_to(self.current + 1)
        } else {
            None
        }
    }

    pub fn prev(&mut self) -> Option<Transition> {
        if self.current > 0 {
            self.go_to(self.current - 1)
        } else {
            None
        }
    }

    pub fn finish_animation(&mut self) {
        self.animating = false;
    }

    pub fn wheel(&mut self, delta_y: f64, metrics: SlideMetrics, modal_open: bool) -> WheelOutcome {
        if modal_open {
            return WheelOutcome::default();
        }

        if metrics.has_overflow() {
            let down = delta_y > 0.0;
            let up = delta_y < 0.0;
            let at_edge = (down && metrics.at_bottom()) || (up && metrics.at_top());
            if !at_edge {
                self.edge_scrolls = 0;
                return WheelOutcome::default();
            }

            self.edge_scrolls += 1;
            debug!("deck: edge scroll {}/{}", self.edge_scrolls, EDGE_SCROLLS_TO_ADVANCE);
            if self.edge_scrolls < EDGE_SCROLLS_TO_ADVANCE {
                return WheelOutcome::default();
            }
            self.edge_scrolls = 0;
            let transition = if down { self.next() } else { self.prev() };
            return WheelOutcome {
                prevent_default: true,
                transition,
            };
        }

        self.edge_scrolls = 0;
        let transition = if delta_y > 0.0 { self.next() } else { self.prev() };
        WheelOutcome {
            prevent_default: true,
            transition,
        }
    }

    pub fn key(&mut self, key: &str, metrics: SlideMetrics, modal_open: bool) -> KeyOutcome {
        if modal_open && key != "Escape" {
            return KeyOutcome::Ignore;
        }

        let overflow = metrics.has_overflow();
        match key {
            "ArrowDown" if overflow && !metrics.at_bottom() => KeyOutcome::Scroll,
            "ArrowUp" if overflow && !metrics.at_top() => KeyOutcome::Scroll,
            "ArrowDown" | "ArrowRight" => KeyOutcome::Navigate(self.next()),
            "ArrowUp" | "ArrowLeft" => KeyOutcome::Navigate(self.prev()),
            "Escape" => KeyOutcome::CloseModal,
            _ => KeyOutcome::Ignore,
        }
    }

    /// Vertical swipe from `start_y` to `end_y` (screen coordinates).
    pub fn swipe(
        &mut self,
        start_y: f64,
        end_y: f64,
        metrics: SlideMetrics,
        modal_open: bool,
    ) -> Option<Transition> {
        if modal_open {
            return None;
        }
        let diff = start_y - end_y;
        if diff.abs() < MIN_SWIPE_PX {
            return None;
        }
        if metrics.has_overflow() {
            if diff > 0.0 && !metrics.at_bottom() {
                return None;
            }
            if diff < 0.0 && !metrics.at_top() {
                return None;
            }
        }
        if diff > 0.0 {
            self.next()
        } else {
            self.prev()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fits() -> SlideMetrics {
        SlideMetrics {
            scroll_top: 0.0,
            client_height: 800.0,
            scroll_height: 800.0,
        }
    }

    fn tall(scroll_top: f64) -> SlideMetrics {
        SlideMetrics {
            scroll_top,
            client_height: 800.0,
            scroll_height: 2000.0,
        }
    }

    #[test]
    fn metrics_tolerances() {
        let barely = SlideMetrics {
            scroll_top: 0.0,
            client_height: 800.0,
            scroll_height: 810.0,
        };
        assert!(!barely.has_overflow());
        assert!(tall(0.0).has_overflow());
        assert!(tall(5.0).at_top());
        assert!(!tall(6.0).at_top());
        assert!(tall(1195.0).at_bottom());
        assert!(!tall(1190.0).at_bottom());
    }

    #[test]
    fn go_to_rejects_same_out_of_range_and_while_animating() {
        let mut deck = Deck::new(4);
        assert_eq!(deck.go_to(0), None);
        assert_eq!(deck.go_to(4), None);
        assert_eq!(deck.go_to(2), Some(Transition { from: 0, to: 2 }));
        assert!(deck.is_animating());
        assert_eq!(deck.go_to(3), None);
        deck.finish_animation();
        assert_eq!(deck.go_to(3), Some(Transition { from: 2, to: 3 }));
    }

    #[test]
    fn next_and_prev_stop_at_the_ends() {
        let mut deck = Deck::new(2);
        assert_eq!(deck.prev(), None);
        assert!(deck.next().is_some());
        deck.finish_animation();
        assert_eq!(deck.next(), None);
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn wheel_without_overflow_navigates_immediately() {
        let mut deck = Deck::new(3);
        let outcome = deck.wheel(40.0, fits(), false);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.transition, Some(Transition { from: 0, to: 1 }));

        deck.finish_animation();
        let outcome = deck.wheel(-40.0, fits(), false);
        assert_eq!(outcome.transition, Some(Transition { from: 1, to: 0 }));
    }

    #[test]
    fn wheel_while_animating_still_prevents_default() {
        let mut deck = Deck::new(3);
        deck.wheel(40.0, fits(), false);
        let outcome = deck.wheel(40.0, fits(), false);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.transition, None);
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn wheel_inside_overflowing_slide_scrolls_in_place() {
        let mut deck = Deck::new(3);
        let outcome = deck.wheel(40.0, tall(300.0), false);
        assert_eq!(outcome, WheelOutcome::default());
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn three_edge_scrolls_advance() {
        let mut deck = Deck::new(3);
        let bottom = tall(1200.0);
        assert_eq!(deck.wheel(40.0, bottom, false), WheelOutcome::default());
        assert_eq!(deck.wheel(40.0, bottom, false), WheelOutcome::default());
        assert_eq!(deck.edge_scrolls(), 2);
        let outcome = deck.wheel(40.0, bottom, false);
        assert!(outcome.prevent_default);
        assert_eq!(outcome.transition, Some(Transition { from: 0, to: 1 }));
        assert_eq!(deck.edge_scrolls(), 0);
    }

    #[test]
    fn scrolling_away_from_edge_resets_counter() {
        let mut deck = Deck::new(3);
        deck.go_to(1);
        deck.finish_animation();
        deck.wheel(-40.0, tall(0.0), false);
        deck.wheel(-40.0, tall(0.0), false);
        deck.wheel(40.0, tall(0.0), false);
        assert_eq!(deck.edge_scrolls(), 0);
        deck.wheel(-40.0, tall(0.0), false);
        deck.wheel(-40.0, tall(0.0), false);
        assert_eq!(deck.current(), 1);
        let outcome = deck.wheel(-40.0, tall(0.0), false);
        assert_eq!(outcome.transition, Some(Transition { from: 1, to: 0 }));
    }

    #[test]
    fn modal_blocks_wheel_and_swipe() {
        let mut deck = Deck::new(3);
        assert_eq!(deck.wheel(40.0, fits(), true), WheelOutcome::default());
        assert_eq!(deck.swipe(400.0, 100.0, fits(), true), None);
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn keyboard_arrows() {
        let mut deck = Deck::new(3);
        assert_eq!(
            deck.key("ArrowRight", fits(), false),
            KeyOutcome::Navigate(Some(Transition { from: 0, to: 1 }))
        );
        deck.finish_animation();
        assert_eq!(
            deck.key("ArrowLeft", fits(), false),
            KeyOutcome::Navigate(Some(Transition { from: 1, to: 0 }))
        );
        deck.finish_animation();
        assert_eq!(deck.key("ArrowUp", fits(), false), KeyOutcome::Navigate(None));
        assert_eq!(deck.key("Enter", fits(), false), KeyOutcome::Ignore);
    }

    #[test]
    fn vertical_arrows_scroll_overflowing_slide_until_edge() {
        let mut deck = Deck::new(3);
        assert_eq!(deck.key("ArrowDown", tall(100.0), false), KeyOutcome::Scroll);
        assert_eq!(
            deck.key("ArrowDown", tall(1200.0), false),
            KeyOutcome::Navigate(Some(Transition { from: 0, to: 1 }))
        );
        deck.finish_animation();
        assert_eq!(deck.key("ArrowUp", tall(100.0), false), KeyOutcome::Scroll);
        // horizontal arrows ignore overflow
        assert_eq!(
            deck.key("ArrowLeft", tall(100.0), false),
            KeyOutcome::Navigate(Some(Transition { from: 1, to: 0 }))
        );
    }

    #[test]
    fn modal_only_lets_escape_through() {
        let mut deck = Deck::new(3);
        assert_eq!(deck.key("ArrowRight", fits(), true), KeyOutcome::Ignore);
        assert_eq!(deck.key("Escape", fits(), true), KeyOutcome::CloseModal);
        assert_eq!(deck.current(), 0);
    }

    #[test]
    fn short_swipes_are_ignored() {
        let mut deck = Deck::new(3);
        assert_eq!(deck.swipe(300.0, 260.0, fits(), false), None);
        assert_eq!(
            deck.swipe(300.0, 200.0, fits(), false),
            Some(Transition { from: 0, to: 1 })
        );
    }

    #[test]
    fn swipe_respects_overflow_edges() {
        let mut deck = Deck::new(3);
        assert_eq!(deck.swipe(400.0, 100.0, tall(200.0), false), None);
        assert_eq!(
            deck.swipe(400.0, 100.0, tall(1200.0), false),
            Some(Transition { from: 0, to: 1 })
        );
        deck.finish_animation();
        assert_eq!(deck.swipe(100.0, 400.0, tall(200.0), false), None);
        assert_eq!(
            deck.swipe(100.0, 400.0, tall(0.0), false),
            Some(Transition { from: 1, to: 0 })
        );
    }
}
