use stay_visible::{BoundingBox, Edge, Throttle, evaluate, evaluate_target};

fn main() {
    // Example: the pure decisions behind a follow-the-bottom chat log.
    //
    // The bottom edge resolves relative to the container's scroll offset, the top edge to an
    // absolute offset.
    let viewport_height = 800.0;

    let last_message = BoundingBox::vertical(700.0, 810.0);
    let intent = evaluate(Edge::Bottom, 20.0, last_message, viewport_height);
    println!("bottom intent={intent:?}");
    println!(
        "bottom target with scroll_top=100: {:?}",
        evaluate_target(Edge::Bottom, 20.0, last_message, viewport_height, 100.0)
    );

    let banner = BoundingBox::vertical(10.0, 60.0);
    println!(
        "top target: {:?}",
        evaluate_target(Edge::Top, 50.0, banner, viewport_height, 100.0)
    );

    // A 300ms gate under a stream of mutations every 40ms.
    let mut gate = Throttle::new(300);
    let fired: Vec<u64> = (0..1_000u64)
        .step_by(40)
        .filter(|&now_ms| gate.call(now_ms))
        .collect();
    println!("throttle fired at {fired:?}");
}
