//! Render contract
//!
//! Plain data the presentation layer reads after draining editor events.
//! Nothing here holds a reference into the editor, so a snapshot can be
//! serialized or handed to another thread freely.

use serde::{Deserialize, Serialize};

use crate::geometry::{ScreenRect, ScreenSize, VirtualCanvas, VirtualRect};
use crate::interaction::{EditMode, InteractionController};
use crate::registry::{WindowEntry, WindowId, WindowRegistry};
use crate::source::{InputSource, Rgba};
use crate::wall::WallLayout;

/// One window as drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowView {
    /// Window id
    pub id: WindowId,
    /// Display number
    pub ordinal: usize,
    /// Assigned input
    pub input: InputSource,
    /// Fill color
    pub color: Rgba,
    /// Placement on the surface
    pub screen_rect: ScreenRect,
    /// Placement on the wall
    pub virtual_rect: VirtualRect,
}

impl WindowView {
    fn from_entry(entry: &WindowEntry) -> Self {
        Self {
            id: entry.id,
            ordinal: entry.ordinal,
            input: entry.input,
            color: entry.input.color(),
            screen_rect: entry.screen_rect,
            virtual_rect: entry.virtual_rect,
        }
    }

    /// Header title
    pub fn title(&self) -> String {
        format!("Window {}", self.ordinal)
    }

    /// Position and size readout in wall pixels
    pub fn info_lines(&self) -> [String; 2] {
        let v = &self.virtual_rect;
        [
            format!("Pos: {}, {}", v.x, v.y),
            format!("Size: {}×{}", v.width, v.height),
        ]
    }
}

/// One output as drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutputView {
    /// 1-based output index
    pub index: u32,
    /// Placement on the surface
    pub screen_rect: ScreenRect,
    /// Under an input badge being dragged
    pub highlighted: bool,
}

/// Input palette entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputBadge {
    /// Input
    pub input: InputSource,
    /// Swatch color
    pub color: Rgba,
    /// Windows showing this input
    pub windows: usize,
}

/// Everything needed to draw the editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    /// Surface size
    pub surface: ScreenSize,
    /// Wall canvas
    pub canvas: VirtualCanvas,
    /// Outputs, row-major
    pub outputs: Vec<OutputView>,
    /// Windows, bottom to top
    pub windows: Vec<WindowView>,
    /// Input palette with per-input counts
    pub inputs: Vec<InputBadge>,
    /// Rubber band in progress
    pub selection: Option<ScreenRect>,
    /// Current editing mode
    pub mode: EditMode,
}

impl RenderSnapshot {
    /// Capture the current editor state
    pub fn capture(
        layout: &WallLayout,
        registry: &WindowRegistry,
        controller: &InteractionController,
    ) -> Self {
        let space = registry.space();
        let highlighted = controller.drag_session().and_then(|s| s.highlighted);

        let outputs = layout
            .outputs()
            .filter_map(|output| {
                Some(OutputView {
                    index: output.index,
                    screen_rect: output.screen_rect(space)?,
                    highlighted: highlighted == Some(output.index),
                })
            })
            .collect();

        let inputs = InputSource::ALL
            .iter()
            .map(|&input| InputBadge {
                input,
                color: input.color(),
                windows: registry.count_for(input),
            })
            .collect();

        Self {
            surface: space.surface,
            canvas: space.canvas,
            outputs,
            windows: registry.windows().iter().map(WindowView::from_entry).collect(),
            inputs,
            selection: controller.gesture().selection_rect(),
            mode: controller.mode(),
        }
    }

    /// Number of windows (the window counter readout)
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CoordinateSpace;
    use crate::registry::WindowLimits;
    use crate::wall::{Resolution, WallConfig};

    #[test]
    fn test_snapshot_contents() {
        let layout = WallLayout::new(WallConfig::new(Resolution::Uhd, 1, 2)).unwrap();
        let space = CoordinateSpace::new(ScreenSize::new(768.0, 216.0), layout.canvas());
        let mut registry = WindowRegistry::new(space, WindowLimits::default());
        registry
            .create(ScreenRect::new(10.0, 10.0, 70.0, 70.0), InputSource::Input2)
            .unwrap();

        let snapshot = RenderSnapshot::capture(&layout, &registry, &InteractionController::default());

        assert_eq!(snapshot.outputs.len(), 2);
        assert_eq!(snapshot.outputs[1].screen_rect, ScreenRect::new(384.0, 0.0, 384.0, 216.0));
        assert!(snapshot.outputs.iter().all(|o| !o.highlighted));
        assert_eq!(snapshot.window_count(), 1);
        assert_eq!(snapshot.windows[0].title(), "Window 1");
        assert_eq!(snapshot.windows[0].color.to_css(), "rgba(231,135,58,0.4)");
        assert_eq!(
            snapshot.windows[0].info_lines(),
            ["Pos: 100, 100".to_string(), "Size: 700×700".to_string()]
        );
        assert_eq!(snapshot.inputs.len(), 8);
        assert_eq!(snapshot.inputs[1].windows, 1);
        assert_eq!(snapshot.mode, EditMode::Create);
    }

    #[test]
    fn test_snapshot_serializes() {
        let layout = WallLayout::default();
        let space = CoordinateSpace::new(ScreenSize::new(384.0, 216.0), layout.canvas());
        let registry = WindowRegistry::new(space, WindowLimits::default());
        let snapshot = RenderSnapshot::capture(&layout, &registry, &InteractionController::default());

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["canvas"]["total_width"], 3840);
        assert_eq!(json["mode"], "create");
    }
}
