#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use flick_core::config::ScrollConfig;
use flick_core::events::{EventKind, ScrollEvent};
use flick_core::geometry::{Extent, Point};
use flick_scroll::{ElementId, ExtensionRegistry, MeasureSource, Scroller};

/// Measurement source backed by shared cells so tests can change the
/// geometry under a live controller
pub struct MockMeasure {
    pub viewport: Rc<RefCell<Extent>>,
    pub content: Rc<RefCell<Option<Extent>>>,
}

impl MockMeasure {
    pub fn new(viewport: Extent, content: Extent) -> Self {
        Self {
            viewport: Rc::new(RefCell::new(viewport)),
            content: Rc::new(RefCell::new(Some(content))),
        }
    }

    /// 300x300 viewport over 300x900 content: vertical-only scrolling,
    /// 600px of range
    pub fn tall() -> Self {
        Self::new(Extent::new(300.0, 300.0), Extent::new(300.0, 900.0))
    }

    /// 300x300 viewport over 500x900 content: both axes scrollable
    pub fn both_axes() -> Self {
        Self::new(Extent::new(300.0, 300.0), Extent::new(500.0, 900.0))
    }
}

impl MeasureSource for MockMeasure {
    fn viewport(&self) -> Extent {
        *self.viewport.borrow()
    }

    fn content(&self) -> Option<Extent> {
        *self.content.borrow()
    }

    fn element_position(&self, element: ElementId) -> Option<Point> {
        (element == ElementId(1)).then(|| Point::new(100.0, 400.0))
    }
}

pub fn scroller_with(measure: MockMeasure, config: ScrollConfig) -> Scroller {
    let registry = ExtensionRegistry::new();
    Scroller::new(Box::new(measure), config, &registry).unwrap()
}

/// Attach an unfiltered recorder and return the shared log
pub fn record(scroller: &mut Scroller) -> Rc<RefCell<Vec<ScrollEvent>>> {
    let events: Rc<RefCell<Vec<ScrollEvent>>> = Rc::default();
    let log = events.clone();
    scroller.on(None, move |event| log.borrow_mut().push(*event));
    events
}

pub fn kinds(events: &[ScrollEvent]) -> Vec<EventKind> {
    events.iter().map(ScrollEvent::kind).collect()
}

pub fn count_kind(events: &[ScrollEvent], kind: EventKind) -> usize {
    events.iter().filter(|event| event.kind() == kind).count()
}

/// Run the frame clock in 16ms steps until the controller goes idle;
/// returns the time of the final frame
pub fn drive(scroller: &mut Scroller, mut now: f64) -> f64 {
    for _ in 0..10_000 {
        now += 16.0;
        if !scroller.tick(now) {
            return now;
        }
    }
    panic!("controller never went idle");
}
