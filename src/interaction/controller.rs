//! Pointer and drag-and-drop state machines

use tracing::{debug, trace};

use super::gesture::{DragEvent, DragSession, EditMode, Gesture, PointerEvent};
use super::hit::{HitTarget, HitZones, WindowControl};
use crate::geometry::{ScreenPoint, ScreenRect, ScreenSize};
use crate::registry::{RegistryEvent, WindowRegistry};
use crate::source::InputSource;
use crate::wall::WallLayout;

/// Translates pointer and drag events into registry operations
///
/// Owns the only gesture state in the editor. The registry is touched once
/// per event at most, so interrupting a gesture at any point leaves it
/// consistent.
#[derive(Debug, Clone, Default)]
pub struct InteractionController {
    mode: EditMode,
    gesture: Gesture,
    drag: Option<DragSession>,
    zones: HitZones,

    /// Input given to rubber-band windows
    active_input: InputSource,
}

impl InteractionController {
    /// Create a controller with the given chrome sizes
    pub fn new(zones: HitZones) -> Self {
        Self {
            zones,
            ..Self::default()
        }
    }

    /// Current editing mode
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Switch editing mode; an in-flight selection is dropped
    pub fn set_mode(&mut self, mode: EditMode) {
        if matches!(self.gesture, Gesture::Selecting { .. }) {
            self.gesture = Gesture::Idle;
        }
        self.mode = mode;
    }

    /// Input used for rubber-band creation
    pub fn active_input(&self) -> InputSource {
        self.active_input
    }

    /// Choose the input used for rubber-band creation
    pub fn set_active_input(&mut self, input: InputSource) {
        self.active_input = input;
    }

    /// Current gesture
    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    /// Current input drag, if any
    pub fn drag_session(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Chrome sizes used for hit testing
    pub fn zones(&self) -> &HitZones {
        &self.zones
    }

    /// Drop any in-flight gesture and drag session
    pub fn reset(&mut self) {
        self.gesture = Gesture::Idle;
        self.drag = None;
    }

    /// Feed one pointer event
    pub fn handle_pointer(
        &mut self,
        event: PointerEvent,
        registry: &mut WindowRegistry,
        layout: &WallLayout,
    ) -> Option<RegistryEvent> {
        match event {
            PointerEvent::Down(point) => self.pointer_down(point, registry, layout),
            PointerEvent::Move(point) => self.pointer_move(point, registry),
            PointerEvent::Up(point) => self.pointer_up(point, registry),
            PointerEvent::Leave => {
                if !self.gesture.is_idle() {
                    debug!("Gesture interrupted: {:?}", self.gesture);
                }
                self.gesture = Gesture::Idle;
                None
            }
        }
    }

    /// Feed one drag-and-drop event
    ///
    /// A drop on a window reassigns its input. A drop on an empty output
    /// creates a window covering that output, unless the output's screen rect
    /// is at or below the creation minimum, in which case the drop is ignored.
    pub fn handle_drag(
        &mut self,
        event: DragEvent,
        registry: &mut WindowRegistry,
        layout: &WallLayout,
    ) -> Option<RegistryEvent> {
        match event {
            DragEvent::Start(input) => {
                trace!("Dragging {}", input);
                self.drag = Some(DragSession {
                    input,
                    highlighted: None,
                });
                None
            }
            DragEvent::Over(point) => {
                let space = *registry.space();
                let session = self.drag.as_mut()?;
                session.highlighted = layout.output_at(point, &space).map(|o| o.index);
                None
            }
            DragEvent::Drop(point) => {
                let session = self.drag.take()?;
                Self::drop_input(session.input, point, registry, layout)
            }
            DragEvent::End => {
                self.drag = None;
                None
            }
        }
    }

    fn pointer_down(
        &mut self,
        point: ScreenPoint,
        registry: &mut WindowRegistry,
        layout: &WallLayout,
    ) -> Option<RegistryEvent> {
        // A press without a matching release starts over
        self.gesture = Gesture::Idle;

        match self.zones.hit_test(registry, point) {
            HitTarget::Control(id, WindowControl::Close) => registry.remove(id),
            HitTarget::Control(id, WindowControl::Maximize) => {
                registry.maximize_to_outputs(id, layout.outputs())
            }
            HitTarget::ResizeHandle(id) => {
                self.gesture = Gesture::Resizing { id };
                None
            }
            HitTarget::Body(id) => {
                let origin = registry.get(id)?.screen_rect.origin();
                self.gesture = Gesture::Dragging {
                    id,
                    offset: ScreenPoint::new(point.x - origin.x, point.y - origin.y),
                };
                None
            }
            HitTarget::Empty => {
                if self.mode == EditMode::Create {
                    self.gesture = Gesture::Selecting {
                        origin: point,
                        current: point,
                    };
                }
                None
            }
        }
    }

    fn pointer_move(
        &mut self,
        point: ScreenPoint,
        registry: &mut WindowRegistry,
    ) -> Option<RegistryEvent> {
        match &mut self.gesture {
            Gesture::Idle => None,
            Gesture::Selecting { current, .. } => {
                *current = point;
                None
            }
            Gesture::Dragging { id, offset } => {
                let origin = ScreenPoint::new(point.x - offset.x, point.y - offset.y);
                registry.move_to(*id, origin)
            }
            Gesture::Resizing { id } => {
                let origin = registry.get(*id)?.screen_rect.origin();
                let size = ScreenSize::new(point.x - origin.x, point.y - origin.y);
                registry.resize(*id, size)
            }
        }
    }

    fn pointer_up(
        &mut self,
        point: ScreenPoint,
        registry: &mut WindowRegistry,
    ) -> Option<RegistryEvent> {
        let gesture = std::mem::take(&mut self.gesture);
        let Gesture::Selecting { origin, .. } = gesture else {
            return None;
        };

        let band = ScreenRect::from_corners(origin, point);
        match registry.create(band, self.active_input) {
            Ok(entry) => Some(RegistryEvent::Created(entry)),
            Err(e) => {
                trace!("Selection discarded: {}", e);
                None
            }
        }
    }

    fn drop_input(
        input: InputSource,
        point: ScreenPoint,
        registry: &mut WindowRegistry,
        layout: &WallLayout,
    ) -> Option<RegistryEvent> {
        if let Some(id) = registry.window_at(point).map(|w| w.id) {
            return registry.reassign_input(id, input);
        }

        let space = *registry.space();
        let output = layout.output_at(point, &space)?;
        let rect = output.screen_rect(&space)?;

        match registry.create(rect, input) {
            Ok(entry) => {
                debug!("{} dropped on output {}", input, output.index);
                Some(RegistryEvent::Created(entry))
            }
            Err(e) => {
                trace!("Drop on output {} ignored: {}", output.index, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{CoordinateSpace, VirtualRect};
    use crate::registry::WindowLimits;
    use crate::wall::{Resolution, WallConfig};

    struct Fixture {
        controller: InteractionController,
        registry: WindowRegistry,
        layout: WallLayout,
    }

    impl Fixture {
        fn new() -> Self {
            let layout = WallLayout::new(WallConfig::new(Resolution::Uhd, 2, 2)).unwrap();
            let space = CoordinateSpace::new(ScreenSize::new(768.0, 432.0), layout.canvas());
            Self {
                controller: InteractionController::default(),
                registry: WindowRegistry::new(space, WindowLimits::default()),
                layout,
            }
        }

        fn pointer(&mut self, event: PointerEvent) -> Option<RegistryEvent> {
            self.controller
                .handle_pointer(event, &mut self.registry, &self.layout)
        }

        fn drag(&mut self, event: DragEvent) -> Option<RegistryEvent> {
            self.controller
                .handle_drag(event, &mut self.registry, &self.layout)
        }

        fn band(&mut self, from: (f64, f64), to: (f64, f64)) -> Option<RegistryEvent> {
            self.pointer(PointerEvent::Down(ScreenPoint::new(from.0, from.1)));
            self.pointer(PointerEvent::Move(ScreenPoint::new(to.0, to.1)));
            self.pointer(PointerEvent::Up(ScreenPoint::new(to.0, to.1)))
        }
    }

    // =========================================================================
    // Rubber band
    // =========================================================================

    #[test]
    fn test_rubber_band_creates_window() {
        let mut fx = Fixture::new();
        let event = fx.band((10.0, 10.0), (80.0, 80.0)).unwrap();

        let RegistryEvent::Created(entry) = event else {
            panic!("expected Created, got {:?}", event);
        };
        assert_eq!(entry.virtual_rect, VirtualRect::new(100, 100, 700, 700));
        assert_eq!(entry.input, InputSource::Input1);
        assert!(fx.controller.gesture().is_idle());
    }

    #[test]
    fn test_rubber_band_normalizes_direction() {
        let mut fx = Fixture::new();
        fx.controller.set_active_input(InputSource::Input6);
        fx.band((300.0, 200.0), (200.0, 100.0)).unwrap();

        let entry = fx.registry.windows()[0];
        assert_eq!(entry.screen_rect, ScreenRect::new(200.0, 100.0, 100.0, 100.0));
        assert_eq!(entry.input, InputSource::Input6);
    }

    #[test]
    fn test_small_band_discarded_silently() {
        let mut fx = Fixture::new();
        assert!(fx.band((10.0, 10.0), (60.0, 200.0)).is_none());
        assert!(fx.registry.is_empty());
        assert!(fx.controller.gesture().is_idle());
    }

    #[test]
    fn test_selection_preview_tracks_pointer() {
        let mut fx = Fixture::new();
        fx.pointer(PointerEvent::Down(ScreenPoint::new(50.0, 50.0)));
        fx.pointer(PointerEvent::Move(ScreenPoint::new(20.0, 90.0)));

        assert_eq!(
            fx.controller.gesture().selection_rect(),
            Some(ScreenRect::new(20.0, 50.0, 30.0, 40.0))
        );
    }

    #[test]
    fn test_select_mode_disables_creation() {
        let mut fx = Fixture::new();
        fx.controller.set_mode(EditMode::Select);

        assert!(fx.band((10.0, 10.0), (200.0, 200.0)).is_none());
        assert!(fx.registry.is_empty());
    }

    #[test]
    fn test_leave_discards_selection() {
        let mut fx = Fixture::new();
        fx.pointer(PointerEvent::Down(ScreenPoint::new(10.0, 10.0)));
        fx.pointer(PointerEvent::Move(ScreenPoint::new(200.0, 200.0)));
        fx.pointer(PointerEvent::Leave);

        assert!(fx.pointer(PointerEvent::Up(ScreenPoint::new(200.0, 200.0))).is_none());
        assert!(fx.registry.is_empty());
    }

    // =========================================================================
    // Drag / resize / controls
    // =========================================================================

    #[test]
    fn test_drag_moves_window_by_offset() {
        let mut fx = Fixture::new();
        fx.band((100.0, 100.0), (300.0, 250.0)).unwrap();
        let id = fx.registry.windows()[0].id;

        fx.pointer(PointerEvent::Down(ScreenPoint::new(150.0, 200.0)));
        assert_eq!(fx.controller.gesture().target(), Some(id));

        fx.pointer(PointerEvent::Move(ScreenPoint::new(160.0, 210.0))).unwrap();
        fx.pointer(PointerEvent::Up(ScreenPoint::new(160.0, 210.0)));

        let rect = fx.registry.get(id).unwrap().screen_rect;
        assert_eq!((rect.x, rect.y), (110.0, 110.0));
        assert!(fx.controller.gesture().is_idle());
    }

    #[test]
    fn test_resize_from_handle() {
        let mut fx = Fixture::new();
        fx.band((100.0, 100.0), (300.0, 250.0)).unwrap();
        let id = fx.registry.windows()[0].id;

        fx.pointer(PointerEvent::Down(ScreenPoint::new(298.0, 248.0)));
        assert_eq!(fx.controller.gesture(), &Gesture::Resizing { id });

        fx.pointer(PointerEvent::Move(ScreenPoint::new(400.0, 300.0))).unwrap();
        let rect = fx.registry.get(id).unwrap().screen_rect;
        assert_eq!((rect.width, rect.height), (300.0, 200.0));

        // Below the resize minimum: previous size kept
        assert!(fx.pointer(PointerEvent::Move(ScreenPoint::new(200.0, 150.0))).is_none());
        assert_eq!(fx.registry.get(id).unwrap().screen_rect.width, 300.0);
    }

    #[test]
    fn test_header_controls() {
        let mut fx = Fixture::new();
        fx.band((20.0, 20.0), (100.0, 100.0)).unwrap();
        let id = fx.registry.windows()[0].id;

        let event = fx.pointer(PointerEvent::Down(ScreenPoint::new(70.0, 25.0))).unwrap();
        assert!(matches!(event, RegistryEvent::Maximized { .. }));
        fx.pointer(PointerEvent::Up(ScreenPoint::new(70.0, 25.0)));
        assert_eq!(
            fx.registry.get(id).unwrap().virtual_rect,
            VirtualRect::new(0, 0, 1920, 1080)
        );

        // Maximized to 0,0,192,108: close button spans x 172..192
        let event = fx.pointer(PointerEvent::Down(ScreenPoint::new(185.0, 5.0))).unwrap();
        assert_eq!(
            event,
            RegistryEvent::Removed {
                id,
                input: InputSource::Input1
            }
        );
        assert!(fx.controller.gesture().is_idle());
    }

    #[test]
    fn test_drag_of_removed_window_is_noop() {
        let mut fx = Fixture::new();
        fx.band((100.0, 100.0), (300.0, 250.0)).unwrap();
        let id = fx.registry.windows()[0].id;

        fx.pointer(PointerEvent::Down(ScreenPoint::new(150.0, 200.0)));
        fx.registry.remove(id).unwrap();

        assert!(fx.pointer(PointerEvent::Move(ScreenPoint::new(170.0, 220.0))).is_none());
    }

    // =========================================================================
    // Drag and drop
    // =========================================================================

    #[test]
    fn test_drop_on_empty_output_creates_full_output_window() {
        let mut fx = Fixture::new();
        fx.drag(DragEvent::Start(InputSource::Input3));
        fx.drag(DragEvent::Over(ScreenPoint::new(500.0, 300.0)));
        assert_eq!(fx.controller.drag_session().unwrap().highlighted, Some(4));

        let event = fx.drag(DragEvent::Drop(ScreenPoint::new(500.0, 300.0))).unwrap();
        let RegistryEvent::Created(entry) = event else {
            panic!("expected Created, got {:?}", event);
        };
        assert_eq!(entry.input, InputSource::Input3);
        assert_eq!(entry.virtual_rect, VirtualRect::new(3840, 2160, 3840, 2160));
        assert!(fx.controller.drag_session().is_none());
    }

    #[test]
    fn test_drop_on_window_reassigns() {
        let mut fx = Fixture::new();
        fx.band((100.0, 100.0), (300.0, 250.0)).unwrap();
        let before = fx.registry.windows()[0];

        fx.drag(DragEvent::Start(InputSource::Input5));
        let event = fx.drag(DragEvent::Drop(ScreenPoint::new(200.0, 200.0))).unwrap();

        assert!(matches!(event, RegistryEvent::InputReassigned { .. }));
        let after = fx.registry.windows()[0];
        assert_eq!(after.input, InputSource::Input5);
        assert_eq!(after.screen_rect, before.screen_rect);
        assert_eq!(fx.registry.count_for(InputSource::Input1), 0);
        assert_eq!(fx.registry.count_for(InputSource::Input5), 1);
    }

    #[test]
    fn test_drop_on_undersized_output_ignored() {
        // 4k 2x4 on 320x90: each output is 80x45 on screen
        let layout = WallLayout::new(WallConfig::new(Resolution::Uhd, 2, 4)).unwrap();
        let space = CoordinateSpace::new(ScreenSize::new(320.0, 90.0), layout.canvas());
        let mut fx = Fixture {
            controller: InteractionController::default(),
            registry: WindowRegistry::new(space, WindowLimits::default()),
            layout,
        };

        fx.drag(DragEvent::Start(InputSource::Input2));
        fx.drag(DragEvent::Over(ScreenPoint::new(100.0, 20.0)));
        assert_eq!(fx.controller.drag_session().unwrap().highlighted, Some(2));

        assert!(fx.drag(DragEvent::Drop(ScreenPoint::new(100.0, 20.0))).is_none());
        assert!(fx.registry.is_empty());
        assert!(fx.controller.drag_session().is_none());
    }

    #[test]
    fn test_drop_without_session_ignored() {
        let mut fx = Fixture::new();
        fx.drag(DragEvent::Start(InputSource::Input2));
        fx.drag(DragEvent::End);

        assert!(fx.drag(DragEvent::Drop(ScreenPoint::new(100.0, 100.0))).is_none());
        assert!(fx.registry.is_empty());
    }
}
