//! Drag-to-pan for pointing devices.

use mapgesture_animation::InertiaOptions;
use mapgesture_graphics::Rect;

use crate::gestures::drag::{DragEvent, DragSession, GestureState};
use crate::gestures::GestureAdapter;
use crate::input::{MouseButton, MouseEvent, MouseEventKind};
use crate::pan_target::PanTarget;

/// Pans the map while the primary button is held and the pointer moves.
///
/// Lifecycle:
/// - `Down(Primary)` inside the surface starts a drag
/// - `Move` pans by the pointer delta and records a motion sample
/// - `Up(Primary)`, `Leave` or `Blur` ends it and projects inertia
#[derive(Debug, Default)]
pub struct MousePanHandler {
    options: Option<InertiaOptions>,
    state: GestureState,
    surface: Option<Rect>,
}

impl MousePanHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts drag starts to presses inside `bounds`.
    pub fn set_surface_bounds(&mut self, bounds: Option<Rect>) {
        self.surface = bounds;
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Feeds one event through the state machine, forwarding pan output to
    /// `target`.
    pub fn handle_event(
        &mut self,
        event: &MouseEvent,
        target: &mut dyn PanTarget,
    ) -> Option<DragEvent> {
        let options = self.options?;

        match event.kind {
            MouseEventKind::Down(button) => {
                if self.state.is_dragging() {
                    log::trace!("mouse pan: {button:?} pressed mid-drag, extending drag");
                    return None;
                }
                if button != MouseButton::Primary {
                    return None;
                }
                if self.surface.is_some_and(|s| !s.contains(event.position)) {
                    return None;
                }
                log::debug!("mouse pan: drag started at {:?}", event.position);
                target.stop_inertia();
                self.state = GestureState::Dragging(DragSession::begin(
                    options,
                    event.position,
                    event.timestamp,
                ));
                Some(DragEvent::Start {
                    position: event.position,
                })
            }
            MouseEventKind::Move => {
                let Some(session) = self.state.session_mut() else {
                    log::trace!("mouse pan: ignoring move while idle");
                    return None;
                };
                let delta = session.move_to(event.position, event.timestamp);
                target.pan_by(delta);
                Some(DragEvent::Move { delta })
            }
            MouseEventKind::Up(MouseButton::Primary) | MouseEventKind::Leave => {
                let Some(mut session) = self.state.take_session() else {
                    log::trace!("mouse pan: ignoring {:?} while idle", event.kind);
                    return None;
                };
                // The release position counts as the last move when it differs.
                if event.position != session.anchor() {
                    let delta = session.move_to(event.position, event.timestamp);
                    target.pan_by(delta);
                }
                Some(Self::release(session, event, target))
            }
            MouseEventKind::Blur => {
                let session = self.state.take_session()?;
                Some(Self::release(session, event, target))
            }
            MouseEventKind::Up(_) => None,
        }
    }

    fn release(
        session: DragSession,
        event: &MouseEvent,
        target: &mut dyn PanTarget,
    ) -> DragEvent {
        let inertia = session.finish(event.timestamp);
        log::debug!("mouse pan: drag ended ({:?}), inertia={}", event.kind, inertia.is_some());
        if let Some(pan) = inertia {
            target.ease_pan_by(pan);
        }
        DragEvent::End { inertia }
    }
}

impl GestureAdapter for MousePanHandler {
    fn enable(&mut self, options: InertiaOptions) {
        self.options = Some(options);
    }

    fn disable(&mut self) {
        self.options = None;
        if self.state.take_session().is_some() {
            log::debug!("mouse pan: disabled mid-drag, dropping samples");
        }
    }

    fn is_enabled(&self) -> bool {
        self.options.is_some()
    }

    fn is_active(&self) -> bool {
        self.state.is_dragging()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapgesture_animation::InertialPan;
    use mapgesture_graphics::{Point, Vector};
    use web_time::{Duration, Instant};

    #[derive(Default)]
    struct Recorder {
        pans: Vec<Vector>,
        eases: Vec<InertialPan>,
        stops: usize,
    }

    impl PanTarget for Recorder {
        fn pan_by(&mut self, delta: Vector) {
            self.pans.push(delta);
        }

        fn ease_pan_by(&mut self, pan: InertialPan) {
            self.eases.push(pan);
        }

        fn stop_inertia(&mut self) {
            self.stops += 1;
        }
    }

    fn ms(base: Instant, ms: u64) -> Instant {
        base + Duration::from_millis(ms)
    }

    fn enabled() -> MousePanHandler {
        let mut handler = MousePanHandler::new();
        handler.enable(InertiaOptions::default());
        handler
    }

    #[test]
    fn starts_disabled_and_idle() {
        let handler = MousePanHandler::new();
        assert!(!handler.is_enabled());
        assert!(!handler.is_active());
    }

    #[test]
    fn disabled_handler_ignores_events() {
        let base = Instant::now();
        let mut handler = MousePanHandler::new();
        let mut camera = Recorder::default();

        let event = MouseEvent::down(MouseButton::Primary, Point::ZERO, base);
        assert_eq!(handler.handle_event(&event, &mut camera), None);
        assert!(!handler.is_active());
    }

    #[test]
    fn primary_press_starts_drag() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        let result = handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::new(5.0, 5.0), base),
            &mut camera,
        );

        assert_eq!(
            result,
            Some(DragEvent::Start {
                position: Point::new(5.0, 5.0)
            })
        );
        assert!(handler.is_active());
        assert_eq!(camera.stops, 1);
    }

    #[test]
    fn secondary_press_does_not_start_drag() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Secondary, Point::ZERO, base),
            &mut camera,
        );

        assert!(!handler.is_active());
    }

    #[test]
    fn press_outside_surface_is_ignored() {
        let base = Instant::now();
        let mut handler = enabled();
        handler.set_surface_bounds(Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::new(150.0, 10.0), base),
            &mut camera,
        );
        assert!(!handler.is_active());

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::new(50.0, 10.0), base),
            &mut camera,
        );
        assert!(handler.is_active());
    }

    #[test]
    fn second_press_extends_drag() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, base),
            &mut camera,
        );
        let second = handler.handle_event(
            &MouseEvent::down(MouseButton::Secondary, Point::ZERO, ms(base, 5)),
            &mut camera,
        );

        assert_eq!(second, None);
        assert!(handler.is_active());
        assert_eq!(camera.stops, 1);

        // Releasing the extra button does not end the drag.
        handler.handle_event(
            &MouseEvent::up(MouseButton::Secondary, Point::ZERO, ms(base, 10)),
            &mut camera,
        );
        assert!(handler.is_active());
    }

    #[test]
    fn moves_emit_deltas() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::new(10.0, 10.0), base),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::moved(Point::new(15.0, 8.0), ms(base, 16)),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::moved(Point::new(25.0, 8.0), ms(base, 32)),
            &mut camera,
        );

        assert_eq!(camera.pans, vec![Vector::new(5.0, -2.0), Vector::new(10.0, 0.0)]);
        match handler.state() {
            GestureState::Dragging(session) => assert_eq!(session.sample_count(), 3),
            GestureState::Idle => panic!("expected an active drag"),
        }
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        let result = handler.handle_event(&MouseEvent::moved(Point::new(1.0, 1.0), base), &mut camera);

        assert_eq!(result, None);
        assert!(camera.pans.is_empty());
    }

    #[test]
    fn release_projects_inertia() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, base),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::moved(Point::new(100.0, 0.0), ms(base, 100)),
            &mut camera,
        );
        let end = handler.handle_event(
            &MouseEvent::up(MouseButton::Primary, Point::new(100.0, 0.0), ms(base, 100)),
            &mut camera,
        );

        assert!(!handler.is_active());
        assert_eq!(camera.eases.len(), 1);
        let pan = camera.eases[0];
        assert!((pan.duration_secs - 0.4).abs() < 1e-3);
        assert!((pan.displacement.x - 200.0).abs() < 0.1);
        assert_eq!(end, Some(DragEvent::End { inertia: Some(pan) }));
    }

    #[test]
    fn release_after_resting_has_no_inertia() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, base),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::moved(Point::new(100.0, 0.0), ms(base, 100)),
            &mut camera,
        );
        let end = handler.handle_event(
            &MouseEvent::up(MouseButton::Primary, Point::new(100.0, 0.0), ms(base, 900)),
            &mut camera,
        );

        assert_eq!(end, Some(DragEvent::End { inertia: None }));
        assert!(camera.eases.is_empty());
    }

    #[test]
    fn click_without_motion_has_no_inertia() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::new(3.0, 3.0), base),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::up(MouseButton::Primary, Point::new(3.0, 3.0), ms(base, 20)),
            &mut camera,
        );

        assert!(!handler.is_active());
        assert!(camera.pans.is_empty());
        assert!(camera.eases.is_empty());
    }

    #[test]
    fn leave_and_blur_end_the_drag() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, base),
            &mut camera,
        );
        handler.handle_event(&MouseEvent::leave(Point::new(40.0, 0.0), ms(base, 20)), &mut camera);
        assert!(!handler.is_active());
        assert_eq!(camera.pans, vec![Vector::new(40.0, 0.0)]);

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, ms(base, 100)),
            &mut camera,
        );
        let end = handler.handle_event(&MouseEvent::blur(ms(base, 120)), &mut camera);
        assert!(!handler.is_active());
        assert_eq!(end, Some(DragEvent::End { inertia: None }));
    }

    #[test]
    fn late_events_after_release_are_ignored() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, base),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::up(MouseButton::Primary, Point::ZERO, ms(base, 10)),
            &mut camera,
        );
        let stray_move = handler.handle_event(
            &MouseEvent::moved(Point::new(50.0, 0.0), ms(base, 12)),
            &mut camera,
        );
        let stray_up = handler.handle_event(
            &MouseEvent::up(MouseButton::Primary, Point::ZERO, ms(base, 14)),
            &mut camera,
        );

        assert_eq!(stray_move, None);
        assert_eq!(stray_up, None);
        assert!(camera.pans.is_empty());
    }

    #[test]
    fn disable_mid_drag_cancels_without_inertia() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, base),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::moved(Point::new(100.0, 0.0), ms(base, 50)),
            &mut camera,
        );
        handler.disable();

        assert!(!handler.is_active());
        assert!(!handler.is_enabled());

        handler.enable(InertiaOptions::default());
        let end = handler.handle_event(
            &MouseEvent::up(MouseButton::Primary, Point::new(100.0, 0.0), ms(base, 60)),
            &mut camera,
        );
        assert_eq!(end, None);
        assert!(camera.eases.is_empty());
    }

    #[test]
    fn reenable_mid_drag_keeps_snapshot() {
        let base = Instant::now();
        let mut handler = enabled();
        let mut camera = Recorder::default();

        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, base),
            &mut camera,
        );
        handler.enable(InertiaOptions::default().with_deceleration(5000.0));
        match handler.state() {
            GestureState::Dragging(session) => {
                assert_eq!(session.options().deceleration, 2500.0)
            }
            GestureState::Idle => panic!("expected an active drag"),
        }
        handler.handle_event(
            &MouseEvent::moved(Point::new(100.0, 0.0), ms(base, 100)),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::up(MouseButton::Primary, Point::new(100.0, 0.0), ms(base, 100)),
            &mut camera,
        );
        assert!((camera.eases[0].duration_secs - 0.4).abs() < 1e-3);

        // The next drag picks up the new deceleration.
        handler.handle_event(
            &MouseEvent::down(MouseButton::Primary, Point::ZERO, ms(base, 200)),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::moved(Point::new(100.0, 0.0), ms(base, 300)),
            &mut camera,
        );
        handler.handle_event(
            &MouseEvent::up(MouseButton::Primary, Point::new(100.0, 0.0), ms(base, 300)),
            &mut camera,
        );
        assert!((camera.eases[1].duration_secs - 0.2).abs() < 1e-3);
    }
}
