//! Tab selector: a row of tab headers with an animated indicator.
//!
//! Selecting a tab rewinds a singular animation and plays it `In`. While it
//! runs, each frame exposes:
//! - a ripple growing out of the click point, clipped to the selected tab
//! - the indicator bar sliding from the previous tab to the selected one
//! - label alphas cross-fading between the two tabs

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use mist_anim::{AnimationManager, AnimationSettings, Direction, Point, Rect};
use mist_config::{MistConfig, TabSelectorConfig};
use tracing::debug;

use crate::text::{FixedWidthMeasure, TextMeasure};
use crate::{ControlError, MaterialControl, MouseState, Result};

/// Ripple scale relative to the selected tab width at full progress.
const RIPPLE_SCALE: f64 = 1.75;
/// Ripple alpha at zero progress.
const RIPPLE_MAX_ALPHA: f64 = 51.0;
/// Alpha lost by the ripple over the full animation.
const RIPPLE_FADE: f64 = 50.0;

/// Click feedback circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ripple {
    pub center: Point,
    pub diameter: i32,
    pub alpha: u8,
    /// Painting must be clipped to this rect.
    pub clip: Rect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLabel {
    /// Upper-cased label text.
    pub text: String,
    pub rect: Rect,
    pub alpha: u8,
}

/// Everything needed to paint one frame of the selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabFrame {
    pub ripple: Option<Ripple>,
    pub labels: Vec<TabLabel>,
    pub indicator: Option<Rect>,
}

pub struct TabSelector<M = FixedWidthMeasure> {
    config: TabSelectorConfig,
    measure: M,
    labels: Vec<String>,
    selected: Option<usize>,
    previous: Option<usize>,
    tab_rects: Vec<Rect>,
    animation: AnimationManager,
    redraw: Rc<Cell<bool>>,
    depth: i32,
    mouse_state: MouseState,
}

impl TabSelector<FixedWidthMeasure> {
    /// Selector measuring labels with the configured fixed advance.
    pub fn new(config: TabSelectorConfig) -> Self {
        let measure = FixedWidthMeasure::new(config.char_advance);
        Self::with_measure(config, AnimationSettings::default(), measure)
    }

    /// Selector built from the full configuration: animation defaults from
    /// `[animation]`, increment and easing from `[tab_selector]`.
    pub fn from_config(config: &MistConfig) -> Self {
        let measure = FixedWidthMeasure::new(config.tab_selector.char_advance);
        Self::with_measure(config.tab_selector.clone(), config.animation.clone(), measure)
    }
}

impl<M: TextMeasure> TabSelector<M> {
    pub fn with_measure(config: TabSelectorConfig, settings: AnimationSettings, measure: M) -> Self {
        let settings = AnimationSettings {
            increment: config.increment,
            easing: config.easing,
            ..settings
        };
        let mut animation = AnimationManager::with_settings(true, settings);

        let redraw = Rc::new(Cell::new(false));
        let flag = Rc::clone(&redraw);
        animation.on_progress(move |_| flag.set(true));

        Self {
            config,
            measure,
            labels: Vec::new(),
            selected: None,
            previous: None,
            tab_rects: Vec::new(),
            animation,
            redraw,
            depth: 0,
            mouse_state: MouseState::Out,
        }
    }

    // ========================================================================
    // Tabs
    // ========================================================================

    /// Replace the tab list. The first tab becomes selected with no
    /// animation.
    pub fn set_tabs<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self.selected = if self.labels.is_empty() { None } else { Some(0) };
        self.previous = self.selected;
        self.update_tab_rects();
        self.redraw.set(true);
    }

    pub fn add_tab(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
        if self.selected.is_none() {
            self.selected = Some(0);
            self.previous = self.selected;
        }
        self.update_tab_rects();
        self.redraw.set(true);
    }

    pub fn tab_count(&self) -> usize {
        self.labels.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }

    pub fn tab_rects(&self) -> &[Rect] {
        &self.tab_rects
    }

    /// Select a tab, animating from the current one.
    ///
    /// Returns `Ok(false)` when `index` is already selected.
    pub fn select(&mut self, index: usize) -> Result<bool> {
        self.select_from(index, None)
    }

    fn select_from(&mut self, index: usize, source: Option<Point>) -> Result<bool> {
        if index >= self.labels.len() {
            return Err(ControlError::TabOutOfRange {
                index,
                count: self.labels.len(),
            });
        }
        if self.selected == Some(index) {
            return Ok(false);
        }

        self.previous = self.selected;
        self.selected = Some(index);
        self.animation.set_progress(0.0)?;
        self.animation
            .start_new_animation(Direction::In, source, Vec::new());
        self.redraw.set(true);

        debug!(from = ?self.previous, to = index, "tab selected");
        Ok(true)
    }

    /// Handle a released click: select the tab under `point` and grow the
    /// ripple from there. Returns the selected tab if one was hit.
    pub fn mouse_up(&mut self, point: Point) -> Result<Option<usize>> {
        if self.tab_rects.len() != self.labels.len() {
            self.update_tab_rects();
        }

        let hit = self.tab_rects.iter().position(|rect| rect.contains(point));
        if let Some(index) = hit {
            self.select_from(index, Some(point))?;
        }
        Ok(hit)
    }

    /// Recompute tab header rects from label widths.
    pub fn update_tab_rects(&mut self) {
        let padding = self.config.header_padding * 2;
        let height = self.config.height;
        let mut x = self.config.form_padding;

        self.tab_rects = self
            .labels
            .iter()
            .map(|label| {
                let rect = Rect::new(x, 0, padding + self.measure.measure(label), height);
                x = rect.right();
                rect
            })
            .collect();
    }

    // ========================================================================
    // Animation
    // ========================================================================

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Forward host frame time to the selection animation.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.animation.advance(elapsed)
    }

    pub fn tick(&mut self) {
        self.animation.tick();
    }

    /// Eased progress of the selection animation.
    pub fn progress(&self) -> Result<f64> {
        Ok(self.animation.progress()?)
    }

    pub fn animation(&self) -> &AnimationManager {
        &self.animation
    }

    /// Return and clear the pending-redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        self.redraw.replace(false)
    }

    // ========================================================================
    // Frame
    // ========================================================================

    /// Geometry for the current frame.
    pub fn frame(&mut self) -> Result<TabFrame> {
        let Some(selected) = self.selected else {
            return Ok(TabFrame::default());
        };

        let animating = self.animation.is_animating();
        if !animating || self.tab_rects.len() != self.labels.len() {
            self.update_tab_rects();
        }

        let progress = self.animation.progress()?;
        let active = self.tab_rects[selected];

        let ripple = if animating {
            Some(Ripple {
                center: self.animation.source()?,
                diameter: (progress * active.width as f64 * RIPPLE_SCALE) as i32,
                alpha: to_alpha(RIPPLE_MAX_ALPHA - progress * RIPPLE_FADE),
                clip: active,
            })
        } else {
            None
        };

        let labels = self
            .labels
            .iter()
            .zip(&self.tab_rects)
            .enumerate()
            .map(|(index, (label, rect))| TabLabel {
                text: label.to_uppercase(),
                rect: *rect,
                alpha: self.label_alpha(index, progress, animating),
            })
            .collect();

        let from = self.tab_rects[self.previous.unwrap_or(selected)];
        let indicator_height = self.config.indicator_height;
        let indicator = Rect::new(
            from.x + ((active.x - from.x) as f64 * progress) as i32,
            active.bottom() - indicator_height,
            from.width + ((active.width - from.width) as f64 * progress) as i32,
            indicator_height,
        );

        Ok(TabFrame {
            ripple,
            labels,
            indicator: Some(indicator),
        })
    }

    fn label_alpha(&self, index: usize, progress: f64, animating: bool) -> u8 {
        let primary = self.config.primary_text_alpha as f64;
        let secondary = self.config.secondary_text_alpha as f64;
        let span = ((primary - secondary) * progress).trunc();

        if Some(index) == self.selected && !animating {
            return self.config.primary_text_alpha;
        }
        if Some(index) != self.previous && Some(index) != self.selected {
            return self.config.secondary_text_alpha;
        }
        if Some(index) == self.previous {
            return to_alpha(primary - span);
        }
        to_alpha(secondary + span)
    }
}

impl<M> MaterialControl for TabSelector<M> {
    fn depth(&self) -> i32 {
        self.depth
    }

    fn set_depth(&mut self, depth: i32) {
        self.depth = depth;
    }

    fn mouse_state(&self) -> MouseState {
        self.mouse_state
    }

    fn set_mouse_state(&mut self, state: MouseState) {
        self.mouse_state = state;
    }
}

fn to_alpha(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}
