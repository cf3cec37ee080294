use std::cell::{Cell, RefCell};

use stay_visible::{
    BoundingBox, Host, MutationObserver, MutationRecord, ObserveError, ObserveOptions, Overflow,
    ScrollError, ScrollMetrics, ScrollToOptions, TrackConfig,
};
use stay_visible_adapter::attach;

const ROOT: usize = 0;
const LOG: usize = 1;
const LAST_MESSAGE: usize = 2;

struct NoopObserver;

impl MutationObserver for NoopObserver {
    fn disconnect(&mut self) {}
}

/// A chat log whose last message grows by 40px per appended line.
struct ChatHost {
    lines: Cell<u32>,
    scroll_top: Cell<f64>,
    scrolls: RefCell<Vec<f64>>,
}

impl ChatHost {
    fn last_message_bottom(&self) -> f64 {
        100.0 + self.lines.get() as f64 * 40.0 - self.scroll_top.get()
    }
}

impl Host for ChatHost {
    type Node = usize;
    type Observer = NoopObserver;

    fn parent_element(&self, node: &usize) -> Option<usize> {
        match *node {
            LAST_MESSAGE => Some(LOG),
            LOG => Some(ROOT),
            _ => None,
        }
    }

    fn document_element(&self) -> Option<usize> {
        Some(ROOT)
    }

    fn is_connected(&self, _node: &usize) -> bool {
        true
    }

    fn bounding_client_rect(&self, _node: &usize) -> BoundingBox {
        let bottom = self.last_message_bottom();
        BoundingBox::vertical(bottom - 40.0, bottom)
    }

    fn viewport_height(&self) -> f64 {
        600.0
    }

    fn scroll_metrics(&self, node: &usize) -> ScrollMetrics {
        match *node {
            LOG => ScrollMetrics {
                scroll_top: self.scroll_top.get(),
                scroll_height: 100.0 + self.lines.get() as f64 * 40.0,
                client_height: 600.0,
                scroll_width: 320.0,
                client_width: 320.0,
            },
            _ => ScrollMetrics::default(),
        }
    }

    fn computed_overflow(&self, node: &usize) -> Overflow {
        if *node == LOG {
            Overflow::Auto
        } else {
            Overflow::Visible
        }
    }

    fn scroll_to(&self, _node: &usize, options: ScrollToOptions) -> Result<(), ScrollError> {
        // Clamp like a browser would, then land the smooth scroll immediately.
        let max = (self.lines.get() as f64 * 40.0 + 100.0 - 600.0).max(0.0);
        self.scroll_top.set(options.top.clamp(0.0, max));
        self.scrolls.borrow_mut().push(options.top);
        Ok(())
    }

    fn observe(
        &self,
        _node: &usize,
        _options: ObserveOptions,
    ) -> Result<NoopObserver, ObserveError> {
        Ok(NoopObserver)
    }
}

fn main() {
    // Example: a host framework mounts the last message, then streams tokens into it.
    //
    // The host would:
    // - call `attach` from its mount hook
    // - forward each observer batch to `on_mutations`
    // - call `detach` from its unmount hook
    let host = ChatHost {
        lines: Cell::new(1),
        scroll_top: Cell::new(0.0),
        scrolls: RefCell::new(Vec::new()),
    };

    let mut attachment = attach(&host, Some(LAST_MESSAGE), TrackConfig::bottom(24.0))
        .expect("last message is mounted");

    for now_ms in (0..3_000u64).step_by(50) {
        host.lines.set(host.lines.get() + 1);
        let batch = [MutationRecord::child_list(), MutationRecord::character_data()];
        let ticks = attachment.on_mutations(&host, &batch, now_ms);
        if ticks > 0 {
            println!(
                "t={now_ms}ms lines={} outcome={:?} scroll_top={}",
                host.lines.get(),
                attachment.last_outcome(),
                host.scroll_top.get()
            );
        }
    }

    attachment.detach();
    println!(
        "detached: scrolls={} stats={:?}",
        host.scrolls.borrow().len(),
        attachment.stats()
    );
}
