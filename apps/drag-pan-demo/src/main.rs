use anyhow::Context;
use mapgesture_animation::EasingCurve;
use mapgesture_map::{InertiaOptions, MapHandlers, SimpleCamera};
use mapgesture_testing::{EventClock, MouseScript, TouchScript};

const FRAME_MS: u64 = 16;

fn main() -> anyhow::Result<()> {
    #[cfg(feature = "logging")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format_timestamp_millis()
        .init();

    let easing = EasingCurve::try_new(0.0, 0.0, 0.3, 1.0).context("pan easing")?;
    let options = InertiaOptions::builder()
        .linearity(0.3)
        .easing(easing)
        .build()
        .context("inertia options")?;

    let clock = EventClock::new();
    let mut map = MapHandlers::new(SimpleCamera::new());
    map.drag_pan_mut().enable(options);

    println!("=== Drag-to-pan demo ===");
    println!("Mouse flick: 150px right over 90ms, then release");
    for event in MouseScript::new(clock)
        .drag((400.0, 300.0), (550.0, 300.0), 0, 6, 15)
        .release(550.0, 300.0, 90)
        .build()
    {
        map.handle_input(event);
    }
    let end_ms = run_frames(&mut map, &clock, 90);

    println!();
    println!("Two-finger touch pan, one finger lifts early");
    let start_ms = end_ms + 200;
    for event in TouchScript::new(clock)
        .start(&[(1, 100.0, 100.0), (2, 200.0, 100.0)], start_ms)
        .move_to(&[(1, 100.0, 140.0), (2, 200.0, 140.0)], start_ms + 20)
        .end(&[(2, 200.0, 140.0)], start_ms + 30)
        .move_to(&[(1, 100.0, 200.0)], start_ms + 50)
        .move_to(&[(1, 100.0, 260.0)], start_ms + 70)
        .end(&[(1, 100.0, 260.0)], start_ms + 70)
        .build()
    {
        map.handle_input(event);
    }
    run_frames(&mut map, &clock, start_ms + 70);

    map.drag_pan_mut().disable();
    println!();
    println!(
        "drag pan enabled={} active={}",
        map.drag_pan().is_enabled(),
        map.drag_pan().is_active()
    );
    Ok(())
}

/// Drives the camera's inertial pan frame by frame, returning the last frame time.
fn run_frames(map: &mut MapHandlers<SimpleCamera>, clock: &EventClock, from_ms: u64) -> u64 {
    let mut now = from_ms;
    println!("  released at offset {:?}", map.camera().offset());
    while map.camera_mut().advance(clock.at(now)) {
        log::trace!("frame {now}ms offset {:?}", map.camera().offset());
        now += FRAME_MS;
    }
    println!("  came to rest at {:?} after {}ms", map.camera().offset(), now - from_ms);
    now
}
