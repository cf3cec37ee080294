use crate::*;

use alloc::vec;
use alloc::vec::Vec;
use core::cell::{Cell, RefCell};

#[derive(Clone, Debug)]
struct FakeNode {
    parent: Option<usize>,
    is_element: bool,
    connected: bool,
    rect: BoundingBox,
    metrics: ScrollMetrics,
    overflow: Overflow,
}

impl FakeNode {
    fn element(parent: Option<usize>) -> Self {
        Self {
            parent,
            is_element: true,
            connected: true,
            rect: BoundingBox::default(),
            metrics: ScrollMetrics::default(),
            overflow: Overflow::Visible,
        }
    }
}

struct FakeObserver;

impl MutationObserver for FakeObserver {
    fn disconnect(&mut self) {}
}

/// Node 0 is the document element.
struct FakeDocument {
    nodes: RefCell<Vec<FakeNode>>,
    has_root: bool,
    viewport_height: f64,
    scroll_calls: RefCell<Vec<(usize, ScrollToOptions)>>,
    reject_scroll: Cell<bool>,
}

impl FakeDocument {
    fn new(viewport_height: f64) -> Self {
        Self {
            nodes: RefCell::new(vec![FakeNode::element(None)]),
            has_root: true,
            viewport_height,
            scroll_calls: RefCell::new(Vec::new()),
            reject_scroll: Cell::new(false),
        }
    }

    fn add(&self, node: FakeNode) -> usize {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(node);
        nodes.len() - 1
    }

    fn add_child(&self, parent: usize) -> usize {
        self.add(FakeNode::element(Some(parent)))
    }

    fn make_scrollable(&self, id: usize, overflow: Overflow, scroll_top: f64) {
        let mut nodes = self.nodes.borrow_mut();
        nodes[id].overflow = overflow;
        nodes[id].metrics = ScrollMetrics {
            scroll_top,
            scroll_height: 2000.0,
            client_height: 500.0,
            scroll_width: 300.0,
            client_width: 300.0,
        };
    }

    fn set_rect(&self, id: usize, rect: BoundingBox) {
        self.nodes.borrow_mut()[id].rect = rect;
    }

    fn set_connected(&self, id: usize, connected: bool) {
        self.nodes.borrow_mut()[id].connected = connected;
    }

    fn scroll_calls(&self) -> Vec<(usize, ScrollToOptions)> {
        self.scroll_calls.borrow().clone()
    }
}

impl Host for FakeDocument {
    type Node = usize;
    type Observer = FakeObserver;

    fn parent_element(&self, node: &usize) -> Option<usize> {
        let nodes = self.nodes.borrow();
        let parent = nodes[*node].parent?;
        nodes[parent].is_element.then_some(parent)
    }

    fn document_element(&self) -> Option<usize> {
        self.has_root.then_some(0)
    }

    fn is_connected(&self, node: &usize) -> bool {
        self.nodes.borrow()[*node].connected
    }

    fn bounding_client_rect(&self, node: &usize) -> BoundingBox {
        self.nodes.borrow()[*node].rect
    }

    fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    fn scroll_metrics(&self, node: &usize) -> ScrollMetrics {
        self.nodes.borrow()[*node].metrics
    }

    fn computed_overflow(&self, node: &usize) -> Overflow {
        self.nodes.borrow()[*node].overflow
    }

    fn scroll_to(&self, node: &usize, options: ScrollToOptions) -> Result<(), ScrollError> {
        if self.reject_scroll.get() {
            return Err(ScrollError::Unsupported);
        }
        self.scroll_calls.borrow_mut().push((*node, options));
        Ok(())
    }

    fn observe(
        &self,
        _node: &usize,
        _options: ObserveOptions,
    ) -> Result<FakeObserver, ObserveError> {
        Ok(FakeObserver)
    }
}

#[test]
fn bottom_edge_inside_safe_zone_has_no_intent() {
    for offset in [0.0, 20.0, 150.0] {
        for bottom in [-50.0, 0.0, 400.0, 800.0 - offset] {
            let bbox = BoundingBox::vertical(bottom - 40.0, bottom);
            assert_eq!(evaluate(Edge::Bottom, offset, bbox, 800.0), None);
        }
    }
}

#[test]
fn bottom_edge_violation_is_relative_to_scroll_top() {
    for offset in [0.0, 20.0, 150.0] {
        for bottom in [800.0 - offset + 0.5, 900.0, 5000.0] {
            let bbox = BoundingBox::vertical(bottom - 40.0, bottom);
            let intent = evaluate(Edge::Bottom, offset, bbox, 800.0).unwrap();
            assert_eq!(intent.edge, Edge::Bottom);
            assert_eq!(intent.target, ScrollTarget::Relative(bottom));
            for scroll_top in [0.0, 100.0, 2500.0] {
                assert_eq!(intent.resolve(scroll_top), scroll_top + bottom);
            }
        }
    }
}

#[test]
fn top_edge_violation_is_absolute() {
    for offset in [1.0, 50.0, 300.0] {
        for top in [-200.0, 0.0, offset - 0.5] {
            let bbox = BoundingBox::vertical(top, top + 10.0);
            let intent = evaluate(Edge::Top, offset, bbox, 800.0).unwrap();
            assert_eq!(intent.target, ScrollTarget::Absolute(top));
            for scroll_top in [0.0, 100.0, 2500.0] {
                assert_eq!(intent.resolve(scroll_top), top);
            }
        }
    }
}

#[test]
fn top_edge_at_or_below_offset_has_no_intent() {
    let bbox = BoundingBox::vertical(50.0, 900.0);
    assert_eq!(evaluate(Edge::Top, 50.0, bbox, 800.0), None);
    // The bottom edge does not matter when tracking the top.
    assert_eq!(evaluate(Edge::Top, 0.0, bbox, 800.0), None);
}

#[test]
fn evaluate_target_matches_documented_scenarios() {
    let bottom = BoundingBox::vertical(700.0, 810.0);
    assert_eq!(
        evaluate_target(Edge::Bottom, 20.0, bottom, 800.0, 100.0),
        Some(910.0)
    );

    let top = BoundingBox::vertical(10.0, 60.0);
    assert_eq!(evaluate_target(Edge::Top, 50.0, top, 800.0, 100.0), Some(10.0));
}

#[test]
fn resolver_falls_back_to_document_root_without_overflowing_ancestor() {
    let doc = FakeDocument::new(800.0);
    let body = doc.add_child(0);
    let wrapper = doc.add_child(body);
    let tracked = doc.add_child(wrapper);

    assert_eq!(find_scrollable_parent(&doc, &tracked), Some(0));
}

#[test]
fn resolver_returns_overflowing_parent_with_hidden_overflow() {
    let doc = FakeDocument::new(800.0);
    let body = doc.add_child(0);
    let list = doc.add_child(body);
    let tracked = doc.add_child(list);
    doc.make_scrollable(list, Overflow::Hidden, 0.0);
    doc.make_scrollable(body, Overflow::Auto, 0.0);

    assert_eq!(find_scrollable_parent(&doc, &tracked), Some(list));
}

#[test]
fn resolver_skips_overflowing_ancestors_with_visible_overflow() {
    let doc = FakeDocument::new(800.0);
    let body = doc.add_child(0);
    let outer = doc.add_child(body);
    let inner = doc.add_child(outer);
    let tracked = doc.add_child(inner);
    doc.make_scrollable(inner, Overflow::Visible, 0.0);
    doc.make_scrollable(outer, Overflow::Scroll, 0.0);

    assert_eq!(find_scrollable_parent(&doc, &tracked), Some(outer));
}

#[test]
fn resolver_ignores_non_overflowing_scroll_containers() {
    let doc = FakeDocument::new(800.0);
    let body = doc.add_child(0);
    let list = doc.add_child(body);
    let tracked = doc.add_child(list);
    doc.nodes.borrow_mut()[list].overflow = Overflow::Auto;

    assert_eq!(find_scrollable_parent(&doc, &tracked), Some(0));
}

#[test]
fn resolver_detects_horizontal_overflow() {
    let doc = FakeDocument::new(800.0);
    let strip = doc.add_child(0);
    let tracked = doc.add_child(strip);
    {
        let mut nodes = doc.nodes.borrow_mut();
        nodes[strip].overflow = Overflow::Auto;
        nodes[strip].metrics = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 100.0,
            client_height: 100.0,
            scroll_width: 900.0,
            client_width: 300.0,
        };
    }

    assert_eq!(find_scrollable_parent(&doc, &tracked), Some(strip));
}

#[test]
fn resolver_returns_root_for_orphans_and_non_element_parents() {
    let doc = FakeDocument::new(800.0);
    let orphan = doc.add(FakeNode::element(None));
    assert_eq!(find_scrollable_parent(&doc, &orphan), Some(0));

    let mut fragment = FakeNode::element(None);
    fragment.is_element = false;
    let fragment = doc.add(fragment);
    let child = doc.add_child(fragment);
    doc.make_scrollable(fragment, Overflow::Auto, 0.0);
    assert_eq!(find_scrollable_parent(&doc, &child), Some(0));
}

#[test]
fn resolver_returns_root_even_when_root_does_not_overflow() {
    let doc = FakeDocument::new(800.0);
    let tracked = doc.add_child(0);
    assert_eq!(doc.computed_overflow(&0), Overflow::Visible);
    assert_eq!(find_scrollable_parent(&doc, &tracked), Some(0));
}

#[test]
fn resolver_without_document_root_yields_none() {
    let mut doc = FakeDocument::new(800.0);
    doc.has_root = false;
    let tracked = doc.add_child(0);
    assert_eq!(find_scrollable_parent(&doc, &tracked), None);
}

#[test]
fn overflow_parses_css_keywords() {
    assert_eq!("visible".parse::<Overflow>(), Ok(Overflow::Visible));
    assert_eq!(" Hidden ".parse::<Overflow>(), Ok(Overflow::Hidden));
    assert_eq!("AUTO".parse::<Overflow>(), Ok(Overflow::Auto));
    assert_eq!("clip".parse::<Overflow>(), Ok(Overflow::Clip));
    assert_eq!("visible visible".parse::<Overflow>(), Ok(Overflow::Visible));
    assert_eq!("visible scroll".parse::<Overflow>(), Ok(Overflow::Scroll));
    assert_eq!("hidden auto".parse::<Overflow>(), Ok(Overflow::Hidden));
    assert_eq!("".parse::<Overflow>(), Err(ParseOverflowError));
    assert_eq!("overlay".parse::<Overflow>(), Err(ParseOverflowError));
    assert_eq!("auto auto auto".parse::<Overflow>(), Err(ParseOverflowError));
}

#[test]
fn throttle_admits_one_call_per_window_for_a_burst() {
    let mut t = Throttle::new(DEFAULT_THROTTLE_MS);
    let mut fired = 0;
    for i in 0..1000u64 {
        if t.call(i * 50 / 1000) {
            fired += 1;
        }
    }
    assert_eq!(fired, 1);
    assert!(t.is_throttled(299));
    assert!(!t.is_throttled(300));
}

#[test]
fn throttle_fires_once_per_full_window_under_continuous_load() {
    let mut t = Throttle::new(300);
    let mut fired_at = Vec::new();
    // A record every 10ms for just under one second.
    for now_ms in (0..1000u64).step_by(10) {
        if t.call(now_ms) {
            fired_at.push(now_ms);
        }
    }
    assert_eq!(fired_at, vec![0, 300, 600, 900]);
}

#[test]
fn throttle_without_trailing_drops_suppressed_calls() {
    let mut t = Throttle::new(300);
    assert!(t.call(0));
    assert!(!t.call(100));
    assert!(!t.has_pending_trailing());
    assert!(!t.poll(1000));
}

#[test]
fn throttle_trailing_fires_after_window_and_opens_new_window() {
    let mut t = Throttle::new(300).with_trailing(true);
    assert!(t.call(0));
    assert!(!t.call(10));
    assert!(!t.call(20));
    assert_eq!(t.trailing_deadline_ms(), Some(300));

    assert!(!t.poll(299));
    assert!(t.poll(300));
    assert!(!t.poll(301));

    // The trailing fire opened a window at 300.
    assert!(!t.call(450));
    assert!(t.poll(600));
    assert!(t.call(900));
}

#[test]
fn throttle_call_after_window_supersedes_trailing() {
    let mut t = Throttle::new(300).with_trailing(true);
    assert!(t.call(0));
    assert!(!t.call(100));
    assert!(t.call(400));
    assert!(!t.has_pending_trailing());
    assert!(!t.poll(700));
}

#[test]
fn throttle_reset_clears_window_and_trailing() {
    let mut t = Throttle::new(300).with_trailing(true);
    assert!(t.call(0));
    assert!(!t.call(10));
    t.reset();
    assert!(!t.has_pending_trailing());
    assert!(!t.poll(1000));
    assert!(t.call(20));
}

#[test]
fn throttle_window_is_at_least_one_ms() {
    let mut t = Throttle::new(0);
    assert_eq!(t.window_ms(), 1);
    assert!(t.call(5));
    assert!(!t.call(5));
    assert!(t.call(6));
}

#[test]
fn track_config_validation() {
    assert_eq!(TrackConfig::<usize>::bottom(20.0).validate(), Ok(()));
    assert_eq!(TrackConfig::<usize>::top(0.0).validate(), Ok(()));
    assert_eq!(
        TrackConfig::<usize>::top(-1.0).validate(),
        Err(ConfigError::NegativeOffset(-1.0))
    );
    assert_eq!(
        TrackConfig::<usize>::top(f64::NAN).validate(),
        Err(ConfigError::NonFiniteOffset)
    );
    assert_eq!(
        TrackConfig::<usize>::top(f64::INFINITY).validate(),
        Err(ConfigError::NonFiniteOffset)
    );
    assert_eq!(
        TrackConfig::<usize>::top(0.0).with_throttle_ms(0).validate(),
        Err(ConfigError::ZeroThrottleWindow)
    );
}

#[test]
fn track_config_defaults() {
    let config = TrackConfig::<usize>::new(Edge::Bottom, 20.0);
    assert_eq!(config.throttle_ms, 300);
    assert!(!config.trailing);
    assert_eq!(config.behavior, ScrollBehavior::Smooth);
    assert_eq!(config.observe, ObserveOptions::default());
    assert!(config.observe.subtree);
    assert!(config.scrollable.is_none());
}

#[test]
fn observe_options_filter_kinds() {
    let opts = ObserveOptions {
        attributes: false,
        ..ObserveOptions::default()
    };
    assert!(opts.accepts(MutationKind::ChildList));
    assert!(opts.accepts(MutationKind::CharacterData));
    assert!(!opts.accepts(MutationKind::Attributes));
}

#[test]
fn reconciler_scrolls_resolved_ancestor_to_bottom_target() {
    let doc = FakeDocument::new(800.0);
    let body = doc.add_child(0);
    let log = doc.add_child(body);
    let tracked = doc.add_child(log);
    doc.make_scrollable(log, Overflow::Auto, 100.0);
    doc.set_rect(tracked, BoundingBox::vertical(700.0, 810.0));

    let r = Reconciler::new(TrackConfig::bottom(20.0));
    let outcome = r.reconcile(&doc, &tracked);
    assert_eq!(outcome.scrolled_to(), Some(910.0));
    assert_eq!(
        doc.scroll_calls(),
        vec![(
            log,
            ScrollToOptions {
                top: 910.0,
                behavior: ScrollBehavior::Smooth
            }
        )]
    );
}

#[test]
fn reconciler_uses_absolute_target_for_top_edge() {
    let doc = FakeDocument::new(800.0);
    let log = doc.add_child(0);
    let tracked = doc.add_child(log);
    doc.make_scrollable(log, Overflow::Scroll, 400.0);
    doc.set_rect(tracked, BoundingBox::vertical(10.0, 90.0));

    let r = Reconciler::new(TrackConfig::top(50.0));
    assert_eq!(r.reconcile(&doc, &tracked).scrolled_to(), Some(10.0));
    assert_eq!(doc.scroll_calls()[0].0, log);
}

#[test]
fn reconciler_prefers_pinned_scrollable() {
    let doc = FakeDocument::new(800.0);
    let pinned = doc.add_child(0);
    let log = doc.add_child(0);
    let tracked = doc.add_child(log);
    doc.make_scrollable(log, Overflow::Auto, 0.0);
    doc.set_rect(tracked, BoundingBox::vertical(750.0, 900.0));

    let r = Reconciler::new(
        TrackConfig::bottom(0.0)
            .with_scrollable(Some(pinned))
            .with_behavior(ScrollBehavior::Instant),
    );
    assert_eq!(r.scrollable_for(&doc, &tracked), Some(pinned));
    assert_eq!(r.reconcile(&doc, &tracked).scrolled_to(), Some(900.0));
    assert_eq!(
        doc.scroll_calls(),
        vec![(
            pinned,
            ScrollToOptions {
                top: 900.0,
                behavior: ScrollBehavior::Instant
            }
        )]
    );
}

#[test]
fn reconciler_in_bounds_issues_no_scroll() {
    let doc = FakeDocument::new(800.0);
    let tracked = doc.add_child(0);
    doc.set_rect(tracked, BoundingBox::vertical(100.0, 780.0));

    let r = Reconciler::new(TrackConfig::bottom(20.0));
    assert_eq!(r.reconcile(&doc, &tracked), Reconcile::InBounds);
    assert!(doc.scroll_calls().is_empty());
}

#[test]
fn reconciler_is_idempotent_once_layout_settles() {
    let doc = FakeDocument::new(800.0);
    let tracked = doc.add_child(0);
    doc.set_rect(tracked, BoundingBox::vertical(700.0, 850.0));

    let r = Reconciler::new(TrackConfig::bottom(0.0));
    assert!(r.reconcile(&doc, &tracked).scrolled_to().is_some());

    // The host scrolled the content back into the viewport.
    doc.set_rect(tracked, BoundingBox::vertical(600.0, 750.0));
    for _ in 0..3 {
        assert_eq!(r.reconcile(&doc, &tracked), Reconcile::InBounds);
    }
    assert_eq!(doc.scroll_calls().len(), 1);
}

#[test]
fn reconciler_skips_detached_node() {
    let doc = FakeDocument::new(800.0);
    let tracked = doc.add_child(0);
    doc.set_rect(tracked, BoundingBox::vertical(700.0, 900.0));
    doc.set_connected(tracked, false);

    let r = Reconciler::new(TrackConfig::bottom(0.0));
    assert_eq!(
        r.reconcile(&doc, &tracked),
        Reconcile::Skipped(SkipReason::NodeDetached)
    );
    assert!(doc.scroll_calls().is_empty());
}

#[test]
fn reconciler_skips_without_any_scrollable() {
    let mut doc = FakeDocument::new(800.0);
    doc.has_root = false;
    let tracked = doc.add_child(0);
    doc.set_rect(tracked, BoundingBox::vertical(700.0, 900.0));

    let r = Reconciler::new(TrackConfig::bottom(0.0));
    assert_eq!(
        r.reconcile(&doc, &tracked),
        Reconcile::Skipped(SkipReason::NoScrollableAncestor)
    );
}

#[test]
fn reconciler_swallows_scroll_failures() {
    let doc = FakeDocument::new(800.0);
    let tracked = doc.add_child(0);
    doc.set_rect(tracked, BoundingBox::vertical(0.0, 900.0));
    doc.reject_scroll.set(true);

    let r = Reconciler::new(TrackConfig::bottom(0.0));
    match r.reconcile(&doc, &tracked) {
        Reconcile::ScrollFailed { target, error, .. } => {
            assert_eq!(target, 900.0);
            assert_eq!(error, ScrollError::Unsupported);
        }
        other => panic!("expected ScrollFailed, got {other:?}"),
    }
}
