// Copyright 2026 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::{Affine, Point, Rect};
use log::{debug, trace};
use zoomable_gesture::{GestureEvent, GestureSource, TransformDelta};
use zoomable_view::geometry::{
    post_rotate_about, post_scale_about, post_translate, scale_factor, uniform_scale,
};
use zoomable_view::{BoundsError, Constraints, ImageMapper, ScaleLimits};

use crate::animation::ZoomAnimation;
use crate::callbacks::{AnimationScheduler, TransformListener};
use crate::config::{FeatureFlags, ZoomConfig};

/// Outcome of [`ZoomableController::on_animation_tick`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationStep {
    /// No animation is running.
    Idle,
    /// A frame was produced; another tick is wanted after `next_tick_in_ms`.
    Running {
        /// Zoom of the frame, after constraints.
        scale: f64,
        /// Delay until the next frame.
        next_tick_in_ms: u64,
    },
    /// The final frame was produced and committed.
    Finished {
        /// Committed zoom, after constraints.
        scale: f64,
    },
    /// The animation was cancelled by a user gesture since the last tick.
    Yielded,
}

/// Who currently writes the active transform.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Session {
    Idle,
    Gesturing {
        working: Affine,
    },
    Animating {
        working: Affine,
        animation: ZoomAnimation,
    },
}

/// Turns gesture events into a constrained zoom transform for one image.
///
/// The controller keeps a committed *base* transform plus, while a gesture or
/// animation is in progress, a *working* transform derived from it. The
/// working transform is what [`ZoomableController::transform`] returns and
/// what the listener receives; it is committed into the base when the
/// gesture or animation completes.
///
/// Gestures and animations are mutually exclusive. The first update of a
/// gesture cancels a running animation, keeping the last animated frame as
/// the new base, and an animation cannot start while a gesture is active.
///
/// A new controller is disabled; hosts enable it once the image and view
/// bounds are known.
pub struct ZoomableController<S: GestureSource> {
    source: S,
    enabled: bool,
    config: ZoomConfig,
    image_bounds: Rect,
    view_bounds: Rect,
    base: Affine,
    session: Session,
    // An animation was cancelled by a gesture and no tick has observed it yet.
    yielded: bool,
    listener: Option<Box<dyn TransformListener>>,
    scheduler: Option<Box<dyn AnimationScheduler>>,
    scratch: Vec<GestureEvent>,
}

impl<S: GestureSource> fmt::Debug for ZoomableController<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomableController")
            .field("enabled", &self.enabled)
            .field("config", &self.config)
            .field("image_bounds", &self.image_bounds)
            .field("view_bounds", &self.view_bounds)
            .field("base", &self.base)
            .field("session", &self.session)
            .field("has_listener", &self.listener.is_some())
            .field("has_scheduler", &self.scheduler.is_some())
            .finish_non_exhaustive()
    }
}

impl<S: GestureSource> ZoomableController<S> {
    /// Creates a disabled controller with the default configuration.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_config(source, ZoomConfig::default())
    }

    /// Creates a disabled controller with `config`.
    #[must_use]
    pub fn with_config(source: S, config: ZoomConfig) -> Self {
        Self {
            source,
            enabled: false,
            config,
            image_bounds: Rect::ZERO,
            view_bounds: Rect::ZERO,
            base: Affine::IDENTITY,
            session: Session::Idle,
            yielded: false,
            listener: None,
            scheduler: None,
            scratch: Vec::new(),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Returns the gesture source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the gesture source mutably.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Installs the transform listener, replacing any previous one.
    pub fn set_listener(&mut self, listener: impl TransformListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the transform listener.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Installs the animation scheduler, replacing any previous one.
    pub fn set_scheduler(&mut self, scheduler: impl AnimationScheduler + 'static) {
        self.scheduler = Some(Box::new(scheduler));
    }

    /// Removes the animation scheduler. Animations then advance only when the
    /// host calls [`ZoomableController::on_animation_tick`] on its own.
    pub fn clear_scheduler(&mut self) {
        self.scheduler = None;
    }

    /// Resets both transforms to identity and drops any gesture or animation.
    pub fn reset(&mut self) {
        self.source.reset();
        self.base = Affine::IDENTITY;
        self.session = Session::Idle;
        self.yielded = false;
    }

    /// Enables or disables the controller.
    ///
    /// Disabling resets the transform; re‑enabling starts from identity.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.reset();
        }
    }

    /// Returns whether the controller is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Returns the enabled gesture components.
    #[must_use]
    pub fn features(&self) -> FeatureFlags {
        self.config.features
    }

    /// Sets whether two‑pointer rotation is applied.
    pub fn set_rotation_enabled(&mut self, enabled: bool) {
        self.config.features.rotation = enabled;
    }

    /// Returns whether rotation is applied.
    #[must_use]
    pub fn is_rotation_enabled(&self) -> bool {
        self.config.features.rotation
    }

    /// Sets whether pinch scaling and programmatic zooms are applied.
    pub fn set_scale_enabled(&mut self, enabled: bool) {
        self.config.features.scale = enabled;
    }

    /// Returns whether scaling is applied.
    #[must_use]
    pub fn is_scale_enabled(&self) -> bool {
        self.config.features.scale
    }

    /// Sets whether panning is applied.
    pub fn set_translation_enabled(&mut self, enabled: bool) {
        self.config.features.translation = enabled;
    }

    /// Returns whether panning is applied.
    #[must_use]
    pub fn is_translation_enabled(&self) -> bool {
        self.config.features.translation
    }

    /// Sets the scale limits. Values are swapped if `min > max`.
    ///
    /// Takes effect with the next gesture update or animation frame.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        self.config.limits = ScaleLimits::new(min, max);
    }

    /// Returns the scale limits.
    #[must_use]
    pub fn scale_limits(&self) -> ScaleLimits {
        self.config.limits
    }

    /// Sets the untransformed image rectangle inside the view.
    pub fn set_image_bounds(&mut self, bounds: Rect) {
        self.image_bounds = bounds;
    }

    /// Returns the untransformed image rectangle.
    #[must_use]
    pub fn image_bounds(&self) -> Rect {
        self.image_bounds
    }

    /// Sets the view rectangle.
    pub fn set_view_bounds(&mut self, bounds: Rect) {
        self.view_bounds = bounds;
    }

    /// Returns the view rectangle.
    #[must_use]
    pub fn view_bounds(&self) -> Rect {
        self.view_bounds
    }

    /// Reports image or view bounds without area.
    ///
    /// Gesture handling does not require this check; with degenerate bounds it
    /// produces a visually wrong transform rather than failing.
    pub fn validate_bounds(&self) -> Result<(), BoundsError> {
        self.constraints().validate()
    }

    /// Returns the active transform.
    #[must_use]
    pub fn transform(&self) -> Affine {
        match self.session {
            Session::Idle => self.base,
            Session::Gesturing { working } | Session::Animating { working, .. } => working,
        }
    }

    /// Returns the committed transform.
    #[must_use]
    pub fn base_transform(&self) -> Affine {
        self.base
    }

    /// Returns the horizontal scale factor of the active transform.
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        scale_factor(self.transform())
    }

    /// Returns the rotation‑independent zoom of the active transform.
    ///
    /// Equal to [`ZoomableController::scale_factor`] while rotation is off.
    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        uniform_scale(self.transform())
    }

    /// Returns `true` while a gesture owns the transform.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        matches!(self.session, Session::Gesturing { .. })
    }

    /// Returns `true` while a zoom animation owns the transform.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.session, Session::Animating { .. })
    }

    /// Returns the running animation, if any.
    #[must_use]
    pub fn animation(&self) -> Option<&ZoomAnimation> {
        match &self.session {
            Session::Animating { animation, .. } => Some(animation),
            _ => None,
        }
    }

    /// Maps a view point into image‑relative coordinates.
    #[must_use]
    pub fn map_view_to_image(&self, view_pt: Point) -> Point {
        self.mapper().to_image_relative(self.transform(), view_pt)
    }

    /// Maps an image‑relative point into view coordinates.
    #[must_use]
    pub fn map_image_to_view(&self, image_pt: Point) -> Point {
        self.mapper().to_view(self.transform(), image_pt)
    }

    /// Maps view points into image‑relative coordinates, in place.
    pub fn map_view_to_image_points(&self, points: &mut [Point]) {
        self.mapper()
            .to_image_relative_in_place(self.transform(), points);
    }

    /// Maps image‑relative points into view coordinates, in place.
    pub fn map_image_to_view_points(&self, points: &mut [Point]) {
        self.mapper().to_view_in_place(self.transform(), points);
    }

    /// Checked variant of [`ZoomableController::map_view_to_image`].
    pub fn try_map_view_to_image(&self, view_pt: Point) -> Result<Point, BoundsError> {
        self.mapper()
            .try_to_image_relative(self.transform(), view_pt)
    }

    /// Checked variant of [`ZoomableController::map_image_to_view`].
    pub fn try_map_image_to_view(&self, image_pt: Point) -> Result<Point, BoundsError> {
        self.mapper().try_to_view(self.transform(), image_pt)
    }

    /// Feeds a raw input event to the gesture source.
    ///
    /// Returns `false` without touching any state while disabled; otherwise
    /// dispatches the gesture events the source produced and returns whether
    /// the source consumed the event.
    pub fn on_touch_event(&mut self, event: &S::Event) -> bool {
        if !self.enabled {
            return false;
        }
        let mut events = core::mem::take(&mut self.scratch);
        events.clear();
        let handled = self.source.on_touch_event(event, &mut events);
        for gesture in events.drain(..) {
            self.handle_gesture(gesture);
        }
        self.scratch = events;
        handled
    }

    /// Dispatches one gesture event.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Begin => self.on_gesture_begin(),
            GestureEvent::Update(delta) => self.on_gesture_update(delta),
            GestureEvent::End => self.on_gesture_end(),
        }
    }

    /// A gesture started.
    ///
    /// Takes ownership of the transform when idle. A running animation keeps
    /// going until the gesture actually moves.
    pub fn on_gesture_begin(&mut self) {
        if !self.enabled {
            return;
        }
        match self.session {
            Session::Idle => {
                debug!("gesture begin");
                self.session = Session::Gesturing { working: self.base };
            }
            Session::Gesturing { .. } => {}
            Session::Animating { .. } => trace!("gesture begin during zoom animation"),
        }
    }

    /// Applies a cumulative gesture delta on top of the committed transform.
    pub fn on_gesture_update(&mut self, delta: TransformDelta) {
        if !self.enabled {
            return;
        }
        self.enter_gesture();

        let features = self.config.features;
        let constraints = self.constraints();
        let pivot = delta.pivot;
        let mut working = self.base;
        if features.rotation && delta.rotation.is_finite() {
            working = post_rotate_about(working, delta.rotation, pivot);
        }
        // A zero scale (fingers pinched together) cannot be undone by the
        // minimum-scale correction.
        if features.scale && is_valid_scale(delta.scale) {
            working = post_scale_about(working, delta.scale, pivot);
        }
        let (limited, scale_correction) = constraints.limit_scale(working, pivot);
        working = limited;
        if features.translation {
            working = post_translate(working, delta.translation);
        }
        let (limited, translation_correction) = constraints.limit_translation(working);
        working = limited;

        if let Some(factor) = scale_correction {
            trace!("gesture scale corrected by {factor}");
        }
        if let Some(offset) = translation_correction {
            trace!("gesture translation corrected by {offset:?}");
            // The source measures the next delta from here; rebase to match.
            self.base = working;
            self.source.restart_gesture();
        }

        self.session = Session::Gesturing { working };
        self.notify(working);
    }

    /// A gesture ended: commits the working transform.
    pub fn on_gesture_end(&mut self) {
        if let Session::Gesturing { working } = self.session {
            debug!("gesture end at scale {}", scale_factor(working));
            self.base = working;
            self.session = Session::Idle;
        }
    }

    /// Starts animating the scale to `target_scale` about `view_pivot`.
    ///
    /// The animation starts from the current scale and replaces any running
    /// animation. Returns `false` and does nothing while disabled, while scaling
    /// is disabled, while a gesture is active, or when `target_scale` is not a
    /// positive finite number.
    pub fn zoom_to_view_point(&mut self, target_scale: f64, view_pivot: Point, now_ms: u64) -> bool {
        if !self.enabled || !self.config.features.scale {
            return false;
        }
        if !is_valid_scale(target_scale) {
            debug!("zoom to {target_scale} rejected: not a positive finite scale");
            return false;
        }
        // Frames below the minimum would be corrected anyway.
        let target_scale = target_scale.max(self.config.limits.min);
        match self.session {
            Session::Gesturing { .. } => {
                debug!("zoom to {target_scale} rejected: gesture in progress");
                return false;
            }
            Session::Animating { working, .. } => {
                debug!("zoom animation replaced");
                self.base = working;
            }
            Session::Idle => {}
        }

        let start_scale = uniform_scale(self.base);
        let animation =
            ZoomAnimation::new(start_scale, target_scale, view_pivot, now_ms, &self.config);
        debug!(
            "zoom animation {start_scale} -> {target_scale} about ({}, {})",
            view_pivot.x, view_pivot.y
        );
        self.session = Session::Animating {
            working: self.base,
            animation,
        };
        self.yielded = false;
        self.request_tick(animation.tick_ms());
        true
    }

    /// Advances the running animation to `now_ms`.
    ///
    /// Hosts call this when a tick requested through the
    /// [`AnimationScheduler`] fires, or from their own frame loop.
    pub fn on_animation_tick(&mut self, now_ms: u64) -> AnimationStep {
        let Session::Animating { mut animation, .. } = self.session else {
            if core::mem::take(&mut self.yielded) {
                return AnimationStep::Yielded;
            }
            return AnimationStep::Idle;
        };

        let scale = animation.advance(now_ms);
        let working = self.animated_transform(scale, animation.pivot());
        let constrained_scale = uniform_scale(working);
        trace!("zoom frame: scale {scale}, constrained {constrained_scale}");

        if animation.is_complete(now_ms) {
            debug!("zoom animation finished at scale {constrained_scale}");
            self.base = working;
            self.session = Session::Idle;
            self.notify(working);
            AnimationStep::Finished {
                scale: constrained_scale,
            }
        } else {
            self.session = Session::Animating { working, animation };
            self.notify(working);
            let next_tick_in_ms = animation.tick_ms();
            self.request_tick(next_tick_in_ms);
            AnimationStep::Running {
                scale: constrained_scale,
                next_tick_in_ms,
            }
        }
    }

    fn enter_gesture(&mut self) {
        match self.session {
            Session::Gesturing { .. } => {}
            Session::Animating { working, .. } => {
                debug!("zoom animation cancelled by gesture");
                self.base = working;
                self.yielded = true;
                self.session = Session::Gesturing { working };
            }
            Session::Idle => {
                debug!("gesture begin");
                self.session = Session::Gesturing { working: self.base };
            }
        }
    }

    fn animated_transform(&self, scale: f64, pivot: Point) -> Affine {
        let base_scale = uniform_scale(self.base);
        let factor = if is_valid_scale(base_scale) {
            scale / base_scale
        } else {
            scale
        };
        let constraints = self.constraints();
        constraints
            .apply(post_scale_about(self.base, factor, pivot), pivot)
            .transform
    }

    fn constraints(&self) -> Constraints {
        Constraints::new(self.config.limits, self.image_bounds, self.view_bounds)
    }

    fn mapper(&self) -> ImageMapper {
        ImageMapper::new(self.image_bounds)
    }

    fn notify(&mut self, transform: Affine) {
        if let Some(listener) = self.listener.as_mut() {
            listener.on_transform_changed(transform);
        }
    }

    fn request_tick(&mut self, after_ms: u64) {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.request_tick(after_ms);
        }
    }
}

fn is_valid_scale(scale: f64) -> bool {
    scale.is_finite() && scale > 0.0
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::RefCell;

    use kurbo::{Affine, Point, Rect, Vec2};
    use zoomable_gesture::{GestureEvent, GestureSource, TransformDelta};
    use zoomable_view::geometry::map_rect;

    use super::{AnimationStep, ZoomableController};

    /// Gesture source that replays scripted gesture events and counts restarts.
    #[derive(Debug, Default)]
    struct Scripted {
        restarts: usize,
        resets: usize,
    }

    impl GestureSource for Scripted {
        type Event = Vec<GestureEvent>;

        fn on_touch_event(&mut self, event: &Self::Event, out: &mut Vec<GestureEvent>) -> bool {
            out.extend_from_slice(event);
            true
        }

        fn restart_gesture(&mut self) {
            self.restarts += 1;
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    const IMAGE: Rect = Rect::new(0.0, 0.0, 100.0, 200.0);
    const VIEW: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn controller() -> ZoomableController<Scripted> {
        let mut c = ZoomableController::new(Scripted::default());
        c.set_image_bounds(IMAGE);
        c.set_view_bounds(VIEW);
        c.set_enabled(true);
        c
    }

    fn recorder(c: &mut ZoomableController<Scripted>) -> Rc<RefCell<Vec<Affine>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        c.set_listener(move |t: Affine| sink.borrow_mut().push(t));
        seen
    }

    #[test]
    fn new_controller_is_disabled_identity() {
        let c = ZoomableController::new(Scripted::default());
        assert!(!c.is_enabled());
        assert_eq!(c.transform(), Affine::IDENTITY);
        assert_eq!(c.scale_factor(), 1.0);
    }

    #[test]
    fn pinch_scales_about_pivot_and_keeps_image_in_bounds() {
        let mut c = controller();
        let seen = recorder(&mut c);
        c.on_gesture_begin();
        c.on_gesture_update(TransformDelta::scale_about(2.0, Point::new(50.0, 50.0)));
        assert!((c.scale_factor() - 2.0).abs() < 1e-12);
        let mapped = map_rect(c.transform(), IMAGE);
        assert!(mapped.y0 <= 0.0 && mapped.y0 >= -300.0);
        assert!(mapped.x0 <= 0.0 && mapped.x0 >= -100.0);
        assert_eq!(seen.borrow().len(), 1);
        // Nothing is committed until the gesture ends.
        assert_eq!(c.base_transform(), Affine::IDENTITY);
        c.on_gesture_end();
        assert_eq!(c.base_transform(), c.transform());
        assert!(!c.is_gesture_active());
    }

    #[test]
    fn updates_are_cumulative_from_the_base() {
        let mut c = controller();
        let pivot = Point::new(50.0, 50.0);
        c.on_gesture_update(TransformDelta::scale_about(1.5, pivot));
        c.on_gesture_update(TransformDelta::scale_about(2.0, pivot));
        assert!((c.scale_factor() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn shrinking_is_clamped_to_min_scale() {
        let mut c = controller();
        c.on_gesture_update(TransformDelta::scale_about(0.3, Point::new(10.0, 90.0)));
        assert!((c.scale_factor() - 1.0).abs() < 1e-9);
        c.on_gesture_end();
        c.on_gesture_update(TransformDelta::scale_about(0.5, Point::new(70.0, 20.0)));
        assert!(c.scale_factor() >= 1.0 - 1e-9);
    }

    #[test]
    fn translation_correction_rebases_and_restarts_source() {
        let mut c = controller();
        // Drag the unzoomed image right: x is clamped back to 0.
        c.on_gesture_update(TransformDelta::translate(Vec2::new(40.0, 0.0)));
        assert_eq!(c.source().restarts, 1);
        let mapped = map_rect(c.transform(), IMAGE);
        assert!(mapped.x0.abs() < 1e-9);
        // The restarted source reports deltas from the corrected position.
        c.on_gesture_update(TransformDelta::translate(Vec2::new(0.0, -30.0)));
        let mapped = map_rect(c.transform(), IMAGE);
        assert!((mapped.y0 + 30.0).abs() < 1e-9);
        assert!(mapped.x0.abs() < 1e-9);
    }

    #[test]
    fn in_bounds_pan_does_not_restart_source() {
        let mut c = controller();
        c.on_gesture_update(TransformDelta::translate(Vec2::new(0.0, -50.0)));
        assert_eq!(c.source().restarts, 0);
        assert_eq!(c.transform(), Affine::translate(Vec2::new(0.0, -50.0)));
    }

    #[test]
    fn disabled_features_are_skipped() {
        let mut c = controller();
        c.set_scale_enabled(false);
        c.set_translation_enabled(false);
        c.on_gesture_update(TransformDelta {
            scale: 2.0,
            rotation: 1.0,
            pivot: Point::new(50.0, 50.0),
            translation: Vec2::new(0.0, -20.0),
        });
        assert_eq!(c.transform(), Affine::IDENTITY);
    }

    #[test]
    fn rotation_is_applied_when_enabled() {
        let mut c = controller();
        c.set_rotation_enabled(true);
        c.set_image_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
        c.on_gesture_update(TransformDelta {
            rotation: core::f64::consts::FRAC_PI_4,
            scale: 2.0,
            ..TransformDelta::scale_about(1.0, Point::new(50.0, 50.0))
        });
        let [a, b, ..] = c.transform().as_coeffs();
        assert!((a - b).abs() < 1e-9, "45 degree rotation has equal a and b");
    }

    #[test]
    fn disabled_controller_ignores_input() {
        let mut c = controller();
        c.set_enabled(false);
        let handled = c.on_touch_event(&alloc::vec![
            GestureEvent::Begin,
            GestureEvent::Update(TransformDelta::scale_about(2.0, Point::ZERO)),
        ]);
        assert!(!handled);
        c.on_gesture_update(TransformDelta::scale_about(2.0, Point::ZERO));
        assert_eq!(c.transform(), Affine::IDENTITY);
        assert!(!c.zoom_to_view_point(3.0, Point::ZERO, 0));
    }

    #[test]
    fn disabling_resets_to_identity() {
        let mut c = controller();
        c.on_gesture_update(TransformDelta::scale_about(2.0, Point::new(50.0, 50.0)));
        c.on_gesture_end();
        assert!(c.scale_factor() > 1.0);
        c.set_enabled(false);
        assert_eq!(c.transform(), Affine::IDENTITY);
        assert_eq!(c.scale_factor(), 1.0);
        assert_eq!(c.source().resets, 1);
        c.set_enabled(true);
        assert_eq!(c.transform(), Affine::IDENTITY);
    }

    #[test]
    fn touch_events_dispatch_through_the_source() {
        let mut c = controller();
        let handled = c.on_touch_event(&alloc::vec![
            GestureEvent::Begin,
            GestureEvent::Update(TransformDelta::scale_about(2.0, Point::new(50.0, 50.0))),
            GestureEvent::End,
        ]);
        assert!(handled);
        assert!((c.base_transform().as_coeffs()[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn animation_reaches_target_and_commits() {
        let mut c = controller();
        let ticks = Rc::new(RefCell::new(Vec::new()));
        let sink = ticks.clone();
        c.set_scheduler(move |after: u64| sink.borrow_mut().push(after));

        assert!(c.zoom_to_view_point(3.0, Point::new(50.0, 50.0), 0));
        assert!(c.is_animating());
        assert_eq!(ticks.borrow().as_slice(), &[40]);

        let mut now = 0;
        let mut frames = 0;
        let last = loop {
            now += 40;
            match c.on_animation_tick(now) {
                AnimationStep::Running { .. } => frames += 1,
                step => break step,
            }
        };
        let AnimationStep::Finished { scale } = last else {
            panic!("expected the animation to finish, got {last:?}");
        };
        assert!((scale - 3.0).abs() <= 0.01);
        assert!((c.base_transform().as_coeffs()[0] - 3.0).abs() <= 0.01);
        assert!(!c.is_animating());
        assert_eq!(c.on_animation_tick(now + 40), AnimationStep::Idle);
        // One request at start plus one per running frame.
        assert_eq!(ticks.borrow().len(), frames + 1);
    }

    #[test]
    fn animation_frames_respect_constraints() {
        let mut c = controller();
        c.on_gesture_update(TransformDelta::scale_about(2.0, Point::new(50.0, 50.0)));
        c.on_gesture_end();
        assert!(c.zoom_to_view_point(0.01, Point::new(90.0, 10.0), 1_000));
        for now in (1_040..=1_520).step_by(40) {
            c.on_animation_tick(now);
            assert!(c.scale_factor() >= 1.0 - 1e-9);
            let mapped = map_rect(c.transform(), IMAGE);
            assert!(mapped.x0 <= 1e-9 && mapped.x0 >= VIEW.width() - mapped.width() - 1e-9);
            assert!(mapped.y0 <= 1e-9 && mapped.y0 >= VIEW.height() - mapped.height() - 1e-9);
        }
        assert!((c.scale_factor() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn gesture_update_cancels_animation() {
        let mut c = controller();
        let seen = recorder(&mut c);
        assert!(c.zoom_to_view_point(3.0, Point::new(50.0, 50.0), 0));
        c.on_animation_tick(200);
        let frame = c.transform();
        assert!(c.scale_factor() > 1.0);

        // A begin alone does not stop the animation.
        c.on_gesture_begin();
        assert!(c.is_animating());

        c.on_gesture_update(TransformDelta::IDENTITY);
        assert!(c.is_gesture_active());
        assert_eq!(c.base_transform(), frame);
        assert_eq!(c.transform(), frame);

        let notified = seen.borrow().len();
        assert_eq!(c.on_animation_tick(240), AnimationStep::Yielded);
        assert_eq!(c.on_animation_tick(280), AnimationStep::Idle);
        assert_eq!(seen.borrow().len(), notified);
    }

    #[test]
    fn zoom_rejects_zero_and_nan_targets() {
        let mut c = controller();
        let pivot = Point::new(50.0, 50.0);
        assert!(!c.zoom_to_view_point(0.0, pivot, 0));
        assert!(!c.zoom_to_view_point(f64::NAN, pivot, 0));
        assert!(!c.zoom_to_view_point(-2.0, pivot, 0));
        assert!(!c.is_animating());
        assert_eq!(c.on_animation_tick(1_000), AnimationStep::Idle);
        assert_eq!(c.transform(), Affine::IDENTITY);

        // The controller still zooms normally afterwards.
        assert!(c.zoom_to_view_point(3.0, pivot, 1_000));
        assert!(matches!(c.on_animation_tick(2_000), AnimationStep::Finished { .. }));
        assert!((c.scale_factor() - 3.0).abs() < 1e-9);
        let rel = c.map_view_to_image(pivot);
        assert!(rel.x.is_finite() && rel.y.is_finite());
    }

    #[test]
    fn tiny_target_settles_at_min_scale() {
        let mut c = controller();
        c.set_scale_limits(0.5, 3.0);
        assert!(c.zoom_to_view_point(0.001, Point::new(50.0, 50.0), 0));
        assert_eq!(c.animation().map(|a| a.target_scale()), Some(0.5));
        c.on_animation_tick(500);
        assert!((c.zoom_scale() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn rotated_pinch_is_held_to_min_scale() {
        let mut c = controller();
        c.set_rotation_enabled(true);
        c.set_image_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
        let pivot = Point::new(50.0, 50.0);
        c.on_gesture_update(TransformDelta {
            rotation: 2.0 * core::f64::consts::FRAC_PI_3,
            ..TransformDelta::scale_about(0.3, pivot)
        });
        assert!(c.scale_factor() < 0.0);
        assert!((c.zoom_scale() - 1.0).abs() < 1e-9);
        let mapped = map_rect(c.transform(), Rect::new(0.0, 0.0, 100.0, 100.0));
        assert!(mapped.width() >= 100.0 - 1e-9 && mapped.height() >= 100.0 - 1e-9);
    }

    #[test]
    fn collapsed_pinch_keeps_a_usable_transform() {
        let mut c = controller();
        c.on_gesture_update(TransformDelta::scale_about(0.0, Point::new(50.0, 50.0)));
        c.on_gesture_end();
        assert!((c.scale_factor() - 1.0).abs() < 1e-9);
        c.on_gesture_update(TransformDelta::scale_about(2.0, Point::new(50.0, 50.0)));
        assert!((c.scale_factor() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn zoom_is_rejected_during_gesture() {
        let mut c = controller();
        c.on_gesture_begin();
        assert!(!c.zoom_to_view_point(3.0, Point::ZERO, 0));
        assert!(c.is_gesture_active());
    }

    #[test]
    fn zoom_is_rejected_when_scaling_disabled() {
        let mut c = controller();
        c.set_scale_enabled(false);
        assert!(!c.zoom_to_view_point(3.0, Point::ZERO, 0));
        assert!(!c.is_animating());
    }

    #[test]
    fn new_zoom_replaces_running_animation() {
        let mut c = controller();
        let pivot = Point::new(50.0, 50.0);
        c.zoom_to_view_point(3.0, pivot, 0);
        c.on_animation_tick(250);
        let mid = c.scale_factor();
        assert!(mid > 1.0 && mid < 3.0);

        assert!(c.zoom_to_view_point(1.0, pivot, 250));
        let anim = c.animation().copied().unwrap();
        assert!((anim.start_scale() - mid).abs() < 1e-9);
        assert!((c.base_transform().as_coeffs()[0] - mid).abs() < 1e-9);

        assert!(matches!(c.on_animation_tick(750), AnimationStep::Finished { .. }));
        assert!((c.scale_factor() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn mapping_roundtrips_through_active_transform() {
        let mut c = controller();
        c.on_gesture_update(TransformDelta {
            translation: Vec2::new(-20.0, -60.0),
            ..TransformDelta::scale_about(2.5, Point::new(30.0, 70.0))
        });
        let p = Point::new(12.0, 87.0);
        let back = c.map_image_to_view(c.map_view_to_image(p));
        assert!((back.x - p.x).abs() < 1e-9 && (back.y - p.y).abs() < 1e-9);

        let mut points = [p, Point::new(99.0, 1.0)];
        c.map_view_to_image_points(&mut points);
        assert_eq!(points[0], c.map_view_to_image(p));
        c.map_image_to_view_points(&mut points);
        assert!((points[1].x - 99.0).abs() < 1e-9);
    }

    #[test]
    fn bounds_validation_reports_degenerate_rects() {
        let mut c = controller();
        assert_eq!(c.validate_bounds(), Ok(()));
        c.set_image_bounds(Rect::new(0.0, 0.0, 0.0, 100.0));
        assert_eq!(
            c.validate_bounds(),
            Err(zoomable_view::BoundsError::DegenerateImage)
        );
        assert!(c.try_map_view_to_image(Point::ZERO).is_err());
    }
}
