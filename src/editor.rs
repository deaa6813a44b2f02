//! Wall Editor
//!
//! Facade owning the wall layout, the window registry and the interaction
//! controller, plus the host-facing state around them: rendering surface
//! size, pending configuration, active view and the outgoing event queue.
//!
//! # Event flow
//!
//! ```text
//! host input ──▶ WallEditor ──▶ InteractionController ──▶ WindowRegistry
//!                    │                                         │
//!                    └──────────── EditorEvent queue ◀─────────┘
//!                                        │
//!                                        ▼
//!                          host drains + reads RenderSnapshot
//! ```
//!
//! # Configuration changes
//!
//! Applying a wall configuration rescales in two steps: first against the
//! new canvas with virtual rects authoritative, then against the refitted
//! surface. Windows that no longer fit the canvas keep their virtual rect.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{EditorError, Result};
use crate::geometry::{aspect_fit, CoordinateSpace, ScreenRect, ScreenSize, VirtualCanvas};
use crate::interaction::{DragEvent, EditMode, HitZones, InteractionController, PointerEvent};
use crate::registry::{
    RegistryEvent, RescaleTrigger, WindowEntry, WindowId, WindowLimits, WindowRegistry,
};
use crate::settings::{SettingsStore, WallSettings};
use crate::source::InputSource;
use crate::view::RenderSnapshot;
use crate::wall::{CanvasChange, WallConfig, WallLayout};

/// Host view (tab)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum View {
    /// Canvas with windows
    #[default]
    VideoWall,
    /// Wall configuration form
    SystemSettings,
}

/// Capability to edit settings, granted by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsAccess {
    /// Settings view and staging refused
    #[default]
    Locked,
    /// Settings may be edited
    Unlocked,
}

/// Notification for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EditorEvent {
    /// Window collection changed
    Registry(RegistryEvent),

    /// New wall configuration is active
    WallConfigured {
        /// Applied configuration
        config: WallConfig,
        /// Canvas before the change
        old_canvas: VirtualCanvas,
        /// Canvas now in effect
        new_canvas: VirtualCanvas,
    },

    /// Rendering surface resized
    SurfaceResized {
        /// Surface before
        old: ScreenSize,
        /// Surface now in effect
        new: ScreenSize,
    },

    /// Canvas must be repainted
    Redraw,
}

/// Tunables for a [`WallEditor`]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EditorOptions {
    /// Window size thresholds
    pub limits: WindowLimits,
    /// Window chrome sizes
    pub zones: HitZones,
    /// Padding subtracted from each side of the container before fitting
    pub padding: f64,
}

/// Video wall editor
#[derive(Debug, Clone)]
pub struct WallEditor {
    layout: WallLayout,
    registry: WindowRegistry,
    controller: InteractionController,

    /// Configuration being edited in the settings view
    pending: WallConfig,

    container: Option<ScreenSize>,
    padding: f64,

    view: View,
    access: SettingsAccess,

    events: VecDeque<EditorEvent>,
}

impl WallEditor {
    /// Create an editor for `config`
    ///
    /// The surface has no area until [`WallEditor::set_container_size`] or
    /// [`WallEditor::set_surface_size`] is called.
    ///
    /// # Errors
    ///
    /// Returns error if `config` is not a valid wall
    pub fn new(config: WallConfig, options: EditorOptions) -> Result<Self> {
        Ok(Self::with_layout(WallLayout::new(config)?, options))
    }

    /// Create an editor from saved settings
    ///
    /// Absent or invalid settings fall back to a 4k 1×1 wall.
    pub fn from_store(store: &dyn SettingsStore, options: EditorOptions) -> Self {
        let config = store.load().map(WallConfig::from).unwrap_or_default();

        let layout = match WallLayout::new(config) {
            Ok(layout) => layout,
            Err(e) => {
                warn!("Saved wall configuration ignored: {}", e);
                WallLayout::default()
            }
        };

        Self::with_layout(layout, options)
    }

    fn with_layout(layout: WallLayout, options: EditorOptions) -> Self {
        let space = CoordinateSpace::new(ScreenSize::default(), layout.canvas());

        Self {
            registry: WindowRegistry::new(space, options.limits),
            controller: InteractionController::new(options.zones),
            pending: *layout.config(),
            container: None,
            padding: options.padding.max(0.0),
            view: View::default(),
            access: SettingsAccess::default(),
            events: VecDeque::new(),
            layout,
        }
    }

    // =========================================================================
    // Wall configuration
    // =========================================================================

    /// Active configuration
    pub fn config(&self) -> &WallConfig {
        self.layout.config()
    }

    /// Configuration staged in the settings view
    pub fn pending(&self) -> &WallConfig {
        &self.pending
    }

    /// Active configuration in persisted form
    pub fn settings(&self) -> WallSettings {
        (*self.layout.config()).into()
    }

    /// Persist the active configuration
    pub fn save_settings(&self, store: &mut dyn SettingsStore) {
        store.save(&self.settings());
    }

    /// Stage a configuration for the next apply
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::SettingsLocked`] without the settings capability
    pub fn stage_config(&mut self, config: WallConfig) -> Result<()> {
        if self.access != SettingsAccess::Unlocked {
            return Err(EditorError::SettingsLocked);
        }
        self.pending = config;
        Ok(())
    }

    /// Apply the staged configuration
    ///
    /// # Errors
    ///
    /// See [`WallEditor::apply_config`]
    pub fn apply_pending(&mut self) -> Result<CanvasChange> {
        self.apply_config(self.pending)
    }

    /// Make `config` the active wall
    ///
    /// On rejection nothing changes and the staged configuration reverts to
    /// the active one.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Wall`] when the grid is invalid or too large
    pub fn apply_config(&mut self, config: WallConfig) -> Result<CanvasChange> {
        let change = match self.layout.apply(config) {
            Ok(change) => change,
            Err(e) => {
                self.pending = *self.layout.config();
                return Err(e.into());
            }
        };
        self.pending = config;

        self.events.push_back(EditorEvent::WallConfigured {
            config,
            old_canvas: change.old,
            new_canvas: change.new,
        });

        let trigger = RescaleTrigger::Resolution {
            old: change.old,
            new: change.new,
        };
        if let Some(event) = self.registry.rescale_all(trigger) {
            self.events.push_back(EditorEvent::Registry(event));
        }

        self.refit_surface();
        self.request_redraw();

        Ok(change)
    }

    // =========================================================================
    // Surface
    // =========================================================================

    /// Current coordinate space
    pub fn space(&self) -> &CoordinateSpace {
        self.registry.space()
    }

    /// Container the surface is fitted into changed size
    ///
    /// The surface becomes the largest rectangle with the canvas aspect
    /// ratio that fits inside the container minus padding.
    pub fn set_container_size(&mut self, container: ScreenSize) {
        self.container = Some(container);
        self.refit_surface();
        self.request_redraw();
    }

    /// Use a surface size measured by the host directly
    pub fn set_surface_size(&mut self, surface: ScreenSize) {
        self.container = None;
        self.resize_surface(surface);
        self.request_redraw();
    }

    fn refit_surface(&mut self) {
        let Some(container) = self.container else {
            return;
        };

        let inner = ScreenSize::new(
            container.width - 2.0 * self.padding,
            container.height - 2.0 * self.padding,
        );
        let surface = aspect_fit(self.layout.canvas(), inner).unwrap_or_default();
        self.resize_surface(surface);
    }

    fn resize_surface(&mut self, surface: ScreenSize) {
        let old = self.registry.space().surface;
        if old == surface {
            return;
        }

        debug!(
            "Surface {:.1}x{:.1} -> {:.1}x{:.1}",
            old.width, old.height, surface.width, surface.height
        );

        self.events
            .push_back(EditorEvent::SurfaceResized { old, new: surface });
        let trigger = RescaleTrigger::Surface { old, new: surface };
        if let Some(event) = self.registry.rescale_all(trigger) {
            self.events.push_back(EditorEvent::Registry(event));
        }
    }

    // =========================================================================
    // Views
    // =========================================================================

    /// Active view
    pub fn view(&self) -> View {
        self.view
    }

    /// Current settings capability
    pub fn access(&self) -> SettingsAccess {
        self.access
    }

    /// Switch views
    ///
    /// Entering the video wall refits the surface and repaints. Entering the
    /// settings view applies the staged configuration without repainting. An
    /// unlocked capability stays unlocked for the rest of the session.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::SettingsLocked`] when entering the settings view
    /// without the capability; the active view is unchanged
    pub fn activate_view(&mut self, view: View, access: SettingsAccess) -> Result<()> {
        if access == SettingsAccess::Unlocked {
            self.access = SettingsAccess::Unlocked;
        }

        if view == View::SystemSettings && self.access != SettingsAccess::Unlocked {
            return Err(EditorError::SettingsLocked);
        }

        self.controller.reset();
        self.view = view;
        info!("Activated {:?} view", view);

        match view {
            View::VideoWall => {
                self.refit_surface();
                self.request_redraw();
            }
            View::SystemSettings => {
                if let Err(e) = self.apply_pending() {
                    warn!("Staged configuration not applied: {}", e);
                }
            }
        }

        Ok(())
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Current editing mode
    pub fn mode(&self) -> EditMode {
        self.controller.mode()
    }

    /// Switch editing mode
    pub fn set_mode(&mut self, mode: EditMode) {
        let had_selection = self.controller.gesture().selection_rect().is_some();
        self.controller.set_mode(mode);
        if had_selection {
            self.request_redraw();
        }
    }

    /// Input given to windows drawn with the rubber band
    pub fn set_active_input(&mut self, input: InputSource) {
        self.controller.set_active_input(input);
    }

    /// Feed a pointer event from the surface
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<RegistryEvent> {
        let before = self.overlay_state();
        let result = self
            .controller
            .handle_pointer(event, &mut self.registry, &self.layout);
        self.after_interaction(before, result)
    }

    /// Feed a drag-and-drop event from the surface
    pub fn handle_drag(&mut self, event: DragEvent) -> Option<RegistryEvent> {
        let before = self.overlay_state();
        let result = self
            .controller
            .handle_drag(event, &mut self.registry, &self.layout);
        self.after_interaction(before, result)
    }

    fn overlay_state(&self) -> (Option<ScreenRect>, Option<u32>) {
        (
            self.controller.gesture().selection_rect(),
            self.controller.drag_session().and_then(|s| s.highlighted),
        )
    }

    fn after_interaction(
        &mut self,
        before: (Option<ScreenRect>, Option<u32>),
        result: Option<RegistryEvent>,
    ) -> Option<RegistryEvent> {
        if let Some(event) = &result {
            self.events.push_back(EditorEvent::Registry(event.clone()));
        }
        if result.is_some() || self.overlay_state() != before {
            self.request_redraw();
        }
        result
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Close every window
    pub fn clear_all(&mut self) -> RegistryEvent {
        self.controller.reset();
        let event = self.registry.clear();
        self.events.push_back(EditorEvent::Registry(event.clone()));
        self.request_redraw();
        event
    }

    /// Window by id
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Registry`] when the window no longer exists
    pub fn window(&self, id: WindowId) -> Result<&WindowEntry> {
        Ok(self.registry.entry(id)?)
    }

    /// All windows in creation order
    pub fn windows(&self) -> &[WindowEntry] {
        self.registry.windows()
    }

    /// Number of windows
    pub fn window_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of windows showing `input`
    pub fn count_for(&self, input: InputSource) -> usize {
        self.registry.count_for(input)
    }

    /// Wall layout
    pub fn layout(&self) -> &WallLayout {
        &self.layout
    }

    /// Window registry
    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// Everything needed to draw the canvas
    pub fn render_snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(&self.layout, &self.registry, &self.controller)
    }

    /// Take queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        self.events.drain(..).collect()
    }

    fn request_redraw(&mut self) {
        if self.view != View::VideoWall {
            return;
        }
        if self.events.back() != Some(&EditorEvent::Redraw) {
            self.events.push_back(EditorEvent::Redraw);
        }
    }
}
