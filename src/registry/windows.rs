//! Window collection and its mutations

use std::collections::HashMap;

use tracing::{debug, info, trace};

use super::events::{RegistryEvent, RescaleTrigger};
use super::window::{WindowEntry, WindowId};
use super::{RegistryError, Result, WindowLimits};
use crate::geometry::{CoordinateSpace, ScreenPoint, ScreenRect, ScreenSize};
use crate::source::InputSource;
use crate::wall::Output;

/// Authoritative window collection
///
/// Holds the coordinate space the screen rects are expressed in. The space
/// only changes through [`WindowRegistry::rescale_all`] so cached screen
/// geometry can never silently go stale.
#[derive(Debug, Clone)]
pub struct WindowRegistry {
    /// Entries in creation order
    windows: Vec<WindowEntry>,

    /// Window ids per assigned input
    by_input: HashMap<InputSource, Vec<WindowId>>,

    space: CoordinateSpace,
    limits: WindowLimits,
    next_id: u64,
}

impl WindowRegistry {
    /// Create an empty registry anchored on `space`
    pub fn new(space: CoordinateSpace, limits: WindowLimits) -> Self {
        Self {
            windows: Vec::new(),
            by_input: HashMap::new(),
            space,
            limits,
            next_id: 1,
        }
    }

    /// Coordinate space the screen rects are expressed in
    pub fn space(&self) -> &CoordinateSpace {
        &self.space
    }

    /// Size thresholds
    pub fn limits(&self) -> &WindowLimits {
        &self.limits
    }

    /// Create a window from a screen rectangle
    ///
    /// # Errors
    ///
    /// - [`RegistryError::TooSmall`] unless the rect exceeds the creation minimum
    /// - [`RegistryError::DegenerateSurface`] while the surface has no area
    pub fn create(&mut self, screen_rect: ScreenRect, input: InputSource) -> Result<WindowEntry> {
        let limits = self.limits;
        if screen_rect.width <= limits.min_create_width
            || screen_rect.height <= limits.min_create_height
        {
            return Err(RegistryError::TooSmall {
                width: screen_rect.width,
                height: screen_rect.height,
                min_width: limits.min_create_width,
                min_height: limits.min_create_height,
            });
        }

        let virtual_rect = self
            .space
            .rect_to_virtual(&screen_rect)
            .ok_or(RegistryError::DegenerateSurface)?;

        let id = WindowId(self.next_id);
        self.next_id += 1;

        self.windows.push(WindowEntry {
            id,
            input,
            screen_rect,
            virtual_rect,
            ordinal: 0,
        });
        self.by_input.entry(input).or_default().push(id);
        self.renumber();

        let entry = self.windows[self.windows.len() - 1];
        info!(
            "Created {} ({}) at virtual {}x{}+{}+{}",
            entry.title(),
            input,
            virtual_rect.width,
            virtual_rect.height,
            virtual_rect.x,
            virtual_rect.y
        );

        Ok(entry)
    }

    /// Move a window so its top-left corner lands on `origin`
    ///
    /// The origin is clamped so the window stays inside the surface.
    pub fn move_to(&mut self, id: WindowId, origin: ScreenPoint) -> Option<RegistryEvent> {
        let space = self.space;
        if space.is_degenerate() {
            return None;
        }

        let entry = self.entry_mut(id)?;
        let rect = entry.screen_rect;
        let x = origin.x.min(space.surface.width - rect.width).max(0.0);
        let y = origin.y.min(space.surface.height - rect.height).max(0.0);

        let screen_rect = ScreenRect::new(x, y, rect.width, rect.height);
        let virtual_rect = space.rect_to_virtual(&screen_rect)?;
        entry.screen_rect = screen_rect;
        entry.virtual_rect = virtual_rect;

        trace!("Moved {} to ({:.1}, {:.1})", id, x, y);
        Some(RegistryEvent::Moved {
            id,
            screen_rect,
            virtual_rect,
        })
    }

    /// Resize a window, keeping its origin
    ///
    /// The size is clamped so the right and bottom edges stay inside the
    /// surface. Results at or below the resize minimum are ignored.
    pub fn resize(&mut self, id: WindowId, size: ScreenSize) -> Option<RegistryEvent> {
        let space = self.space;
        let limits = self.limits;
        if space.is_degenerate() {
            return None;
        }

        let entry = self.entry_mut(id)?;
        let rect = entry.screen_rect;
        let width = size.width.min(space.surface.width - rect.x);
        let height = size.height.min(space.surface.height - rect.y);

        if width <= limits.min_resize_width || height <= limits.min_resize_height {
            trace!("Ignoring resize of {} to {:.1}x{:.1}", id, width, height);
            return None;
        }

        let screen_rect = ScreenRect::new(rect.x, rect.y, width, height);
        let virtual_rect = space.rect_to_virtual(&screen_rect)?;
        entry.screen_rect = screen_rect;
        entry.virtual_rect = virtual_rect;

        trace!("Resized {} to {:.1}x{:.1}", id, width, height);
        Some(RegistryEvent::Resized {
            id,
            screen_rect,
            virtual_rect,
        })
    }

    /// Snap a window to the output quadrants it overlaps
    ///
    /// Each output is split 2×2; the window takes the bounding box of every
    /// quadrant it overlaps with positive area. Quadrants that only share an
    /// edge are skipped, so maximizing twice is stable. No quadrant hit means
    /// no change.
    pub fn maximize_to_outputs<I>(&mut self, id: WindowId, outputs: I) -> Option<RegistryEvent>
    where
        I: IntoIterator<Item = Output>,
    {
        let space = self.space;
        if space.is_degenerate() {
            return None;
        }

        let entry = self.entry_mut(id)?;
        let window = entry.screen_rect;

        let mut hits = 0usize;
        let mut bounds: Option<ScreenRect> = None;
        for quadrant in outputs
            .into_iter()
            .filter_map(|output| output.screen_rect(&space))
            .flat_map(|rect| rect.quadrants())
            .filter(|quadrant| quadrant.overlaps(&window))
        {
            hits += 1;
            bounds = Some(match bounds {
                Some(acc) => acc.union(&quadrant),
                None => quadrant,
            });
        }

        let screen_rect = bounds?;
        let virtual_rect = space.rect_to_virtual(&screen_rect)?;
        entry.screen_rect = screen_rect;
        entry.virtual_rect = virtual_rect;

        debug!("Maximized {} over {} quadrant(s)", id, hits);
        Some(RegistryEvent::Maximized {
            id,
            screen_rect,
            virtual_rect,
            quadrants: hits,
        })
    }

    /// Show a different input in a window; geometry is unchanged
    pub fn reassign_input(&mut self, id: WindowId, input: InputSource) -> Option<RegistryEvent> {
        let entry = self.entry_mut(id)?;
        let from = entry.input;
        if from == input {
            return None;
        }
        entry.input = input;

        self.unindex(from, id);
        self.by_input.entry(input).or_default().push(id);

        debug!("{} switched from {} to {}", id, from, input);
        Some(RegistryEvent::InputReassigned { id, from, to: input })
    }

    /// Close a window
    pub fn remove(&mut self, id: WindowId) -> Option<RegistryEvent> {
        let pos = self.windows.iter().position(|w| w.id == id)?;
        let entry = self.windows.remove(pos);
        self.unindex(entry.input, id);
        self.renumber();

        info!("Closed {} ({})", entry.title(), entry.input);
        Some(RegistryEvent::Removed {
            id,
            input: entry.input,
        })
    }

    /// Close every window
    pub fn clear(&mut self) -> RegistryEvent {
        let removed = self.windows.len();
        self.windows.clear();
        self.by_input.clear();

        info!("Cleared {} window(s)", removed);
        RegistryEvent::Cleared { removed }
    }

    /// Re-derive cached geometry after the canvas or surface changed
    ///
    /// - [`RescaleTrigger::Resolution`]: virtual rects stay as they are and
    ///   screen rects are recomputed against the new canvas.
    /// - [`RescaleTrigger::Surface`]: screen rects are recomputed for the new
    ///   surface size, then virtual rects are re-derived from them.
    ///
    /// The new space is recorded even when it is degenerate; geometry is then
    /// left alone until a later trigger brings a usable space. Applying the
    /// same trigger twice gives the same geometry as applying it once.
    pub fn rescale_all(&mut self, trigger: RescaleTrigger) -> Option<RegistryEvent> {
        match trigger {
            RescaleTrigger::Resolution { new, .. } => self.space.canvas = new,
            RescaleTrigger::Surface { new, .. } => self.space.surface = new,
        }

        let space = self.space;
        if space.is_degenerate() {
            debug!("Deferring rescale: surface or canvas has no area");
            return None;
        }

        for entry in &mut self.windows {
            let Some(screen_rect) = space.rect_to_screen(&entry.virtual_rect) else {
                continue;
            };
            entry.screen_rect = screen_rect;

            if let RescaleTrigger::Surface { .. } = trigger {
                if let Some(virtual_rect) = space.rect_to_virtual(&screen_rect) {
                    entry.virtual_rect = virtual_rect;
                }
            }
        }

        debug!(
            "Rescaled {} window(s) ({:?}) to surface {:.1}x{:.1}",
            self.windows.len(),
            trigger.authority(),
            space.surface.width,
            space.surface.height
        );

        Some(RegistryEvent::Rescaled {
            trigger,
            windows: self.windows.len(),
        })
    }

    /// Window by id
    pub fn get(&self, id: WindowId) -> Option<&WindowEntry> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Window by id, as an error when missing
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownWindow`] when the id is not present
    pub fn entry(&self, id: WindowId) -> Result<&WindowEntry> {
        self.get(id).ok_or(RegistryError::UnknownWindow(id))
    }

    /// All windows in creation order
    pub fn windows(&self) -> &[WindowEntry] {
        &self.windows
    }

    /// Number of windows
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// True when no windows exist
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Number of windows showing `input`
    pub fn count_for(&self, input: InputSource) -> usize {
        self.by_input.get(&input).map_or(0, Vec::len)
    }

    /// Windows showing `input`, in assignment order
    pub fn windows_for(&self, input: InputSource) -> impl Iterator<Item = &WindowEntry> + '_ {
        self.by_input
            .get(&input)
            .into_iter()
            .flatten()
            .filter_map(|id| self.get(*id))
    }

    /// Topmost window whose screen rect contains `point`
    ///
    /// Later windows are drawn above earlier ones.
    pub fn window_at(&self, point: ScreenPoint) -> Option<&WindowEntry> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.screen_rect.contains(point))
    }

    fn entry_mut(&mut self, id: WindowId) -> Option<&mut WindowEntry> {
        let found = self.windows.iter_mut().find(|w| w.id == id);
        if found.is_none() {
            trace!("Ignoring operation on unknown {}", id);
        }
        found
    }

    fn unindex(&mut self, input: InputSource, id: WindowId) {
        if let Some(ids) = self.by_input.get_mut(&input) {
            ids.retain(|w| *w != id);
            if ids.is_empty() {
                self.by_input.remove(&input);
            }
        }
    }

    fn renumber(&mut self) {
        for (i, entry) in self.windows.iter_mut().enumerate() {
            entry.ordinal = i + 1;
        }
    }
}
