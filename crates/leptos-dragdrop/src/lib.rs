//! Leptos DragDrop Utilities
//!
//! Simple pointer drag-and-drop for Leptos using mouse and touch events.
//! Both input paths feed one state machine, [`DragState`], so they end in
//! identical drops. A movement threshold distinguishes click from drag.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Pointer position in client coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn moved_beyond_threshold(&self, other: Point) -> bool {
        (self.x - other.x).abs() > DRAG_THRESHOLD_PX || (self.y - other.y).abs() > DRAG_THRESHOLD_PX
    }
}

/// Drag interaction state, generic over the payload `P` being carried and
/// the drop target `T` it can land on.
///
/// `Idle → Pending → Dragging → Idle`. A release while hovering a target
/// yields the drop; any other release or cancel yields nothing.
#[derive(Clone, Debug, PartialEq)]
pub enum DragState<P, T> {
    Idle,
    /// Pressed, but not yet moved past the threshold
    Pending { payload: P, origin: Point },
    Dragging { payload: P, over: Option<T> },
}

impl<P, T> Default for DragState<P, T> {
    fn default() -> Self {
        DragState::Idle
    }
}

impl<P: Clone, T: Copy + PartialEq> DragState<P, T> {
    /// Pointer pressed on a draggable source
    pub fn press(&mut self, payload: P, at: Point) {
        *self = DragState::Pending { payload, origin: at };
    }

    /// Pointer moved. Returns true when this move started the drag.
    pub fn move_to(&mut self, at: Point) -> bool {
        if let DragState::Pending { payload, origin } = self {
            if origin.moved_beyond_threshold(at) {
                *self = DragState::Dragging { payload: payload.clone(), over: None };
                return true;
            }
        }
        false
    }

    /// Pointer entered a drop target (ignored unless dragging)
    pub fn enter(&mut self, target: T) {
        self.hover(Some(target));
    }

    /// Pointer left the current drop target
    pub fn leave(&mut self) {
        self.hover(None);
    }

    /// Set the hovered target directly, as hit-testing does for touch input
    pub fn hover(&mut self, target: Option<T>) {
        if let DragState::Dragging { over, .. } = self {
            *over = target;
        }
    }

    /// Pointer released. Returns the payload and target when a drop happened.
    pub fn release(&mut self) -> Option<(P, T)> {
        match std::mem::take(self) {
            DragState::Dragging { payload, over: Some(target) } => Some((payload, target)),
            _ => None,
        }
    }

    pub fn cancel(&mut self) {
        *self = DragState::Idle;
    }

    /// Abort the current interaction if its payload matches. Returns true
    /// when something was cancelled.
    pub fn cancel_if(&mut self, matches: impl Fn(&P) -> bool) -> bool {
        match self.payload() {
            Some(payload) if matches(payload) => {
                self.cancel();
                true
            }
            _ => false,
        }
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            DragState::Idle => None,
            DragState::Pending { payload, .. } | DragState::Dragging { payload, .. } => Some(payload),
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn over(&self) -> Option<T> {
        match self {
            DragState::Dragging { over, .. } => *over,
            _ => None,
        }
    }
}

/// DnD state signals
pub struct DndSignals<P, T> {
    pub state: RwSignal<DragState<P, T>>,
    /// True for a short moment after a drag ends, so the trailing click
    /// can be ignored
    pub drag_just_ended: RwSignal<bool>,
}

impl<P: 'static, T: 'static> Clone for DndSignals<P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: 'static, T: 'static> Copy for DndSignals<P, T> {}

impl<P, T> DndSignals<P, T>
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    /// Is `target` the currently hovered drop target? (tracked)
    pub fn is_over(&self, target: T) -> bool {
        self.state.with(|s| s.over() == Some(target))
    }

    /// Is any drag in progress? (tracked)
    pub fn is_dragging(&self) -> bool {
        self.state.with(DragState::is_dragging)
    }

    /// Does the active drag carry a payload matching `pred`? (tracked)
    pub fn is_dragging_where(&self, pred: impl Fn(&P) -> bool) -> bool {
        self.state.with(|s| s.is_dragging() && s.payload().is_some_and(|p| pred(p)))
    }

    /// Cancel an in-progress interaction whose payload matches
    pub fn cancel_if(&self, pred: impl Fn(&P) -> bool) -> bool {
        let mut cancelled = false;
        self.state.update(|s| cancelled = s.cancel_if(&pred));
        cancelled
    }
}

pub fn create_dnd_signals<P, T>() -> DndSignals<P, T>
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    DndSignals {
        state: RwSignal::new(DragState::Idle),
        drag_just_ended: RwSignal::new(false),
    }
}

/// Mark the drag as ended and clear the flag after 100ms
fn mark_drag_ended<P, T>(dnd: &DndSignals<P, T>)
where
    P: Send + Sync + 'static,
    T: Send + Sync + 'static,
{
    dnd.drag_just_ended.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended;
        let cb = Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Finish the interaction, returning the drop if there was one
fn finish<P, T>(dnd: &DndSignals<P, T>) -> Option<(P, T)>
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    if dnd.state.with_untracked(|s| s.payload().is_none()) {
        return None;
    }
    let was_dragging = dnd.state.with_untracked(DragState::is_dragging);
    let mut dropped = None;
    dnd.state.update(|s| dropped = s.release());
    if was_dragging {
        mark_drag_ended(dnd);
    }
    dropped
}

/// Ignore presses that start on form controls inside a draggable
fn is_control(target: Option<web_sys::EventTarget>) -> bool {
    target.is_some_and(|t| {
        t.dyn_ref::<web_sys::HtmlInputElement>().is_some()
            || t.dyn_ref::<web_sys::HtmlButtonElement>().is_some()
    })
}

/// Create mousedown handler for a draggable source.
/// Records a pending drag with its start position.
pub fn make_on_mousedown<P, T>(dnd: DndSignals<P, T>, payload: P) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || is_control(ev.target()) {
            return;
        }
        // Keep the browser from starting a text selection
        ev.prevent_default();
        let at = Point::new(ev.client_x(), ev.client_y());
        dnd.state.update(|s| s.press(payload.clone(), at));
    }
}

/// Create touchstart handler for a draggable source
pub fn make_on_touchstart<P, T>(dnd: DndSignals<P, T>, payload: P) -> impl Fn(web_sys::TouchEvent) + Clone + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::TouchEvent| {
        if is_control(ev.target()) {
            return;
        }
        let Some(touch) = ev.touches().get(0) else { return };
        let at = Point::new(touch.client_x(), touch.client_y());
        dnd.state.update(|s| s.press(payload.clone(), at));
    }
}

/// Create mouseenter handler for a drop target
pub fn make_on_zone_mouseenter<P, T>(dnd: DndSignals<P, T>, target: T) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.state.with_untracked(DragState::is_dragging) {
            dnd.state.update(|s| s.enter(target));
        }
    }
}

/// Create mouseleave handler for a drop target
pub fn make_on_mouseleave<P, T>(dnd: DndSignals<P, T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.state.with_untracked(DragState::is_dragging) {
            dnd.state.update(|s| s.leave());
        }
    }
}

fn add_document_listener<E>(event: &str, passive: bool, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(passive);
        let _ = doc.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        );
    }
    closure.forget();
}

/// Bind global mousemove/mouseup handlers for drag start and drop detection
pub fn bind_global_mouseup<P, T, F>(dnd: DndSignals<P, T>, on_drop: F)
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
    F: Fn(P, T) + 'static,
{
    add_document_listener("mousemove", true, move |ev: web_sys::MouseEvent| {
        let pending = dnd.state.with_untracked(|s| matches!(s, DragState::Pending { .. }));
        if pending {
            let at = Point::new(ev.client_x(), ev.client_y());
            dnd.state.update(|s| {
                s.move_to(at);
            });
        }
    });

    add_document_listener("mouseup", true, move |_ev: web_sys::MouseEvent| {
        if let Some((payload, target)) = finish(&dnd) {
            on_drop(payload, target);
        }
    });
}

/// Bind global touch handlers. Touch has no enter/leave, so the target under
/// the finger is found by hit-testing and mapped through `resolve`.
pub fn bind_global_touch<P, T, R, F>(dnd: DndSignals<P, T>, resolve: R, on_drop: F)
where
    P: Clone + Send + Sync + 'static,
    T: Copy + PartialEq + Send + Sync + 'static,
    R: Fn(&web_sys::Element) -> Option<T> + Clone + 'static,
    F: Fn(P, T) + 'static,
{
    let target_at = move |resolve: &R, at: Point| -> Option<T> {
        web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.element_from_point(at.x as f32, at.y as f32))
            .and_then(|el| resolve(&el))
    };

    let resolve_move = resolve.clone();
    add_document_listener("touchmove", false, move |ev: web_sys::TouchEvent| {
        if dnd.state.with_untracked(|s| s.payload().is_none()) {
            return;
        }
        let Some(touch) = ev.touches().get(0) else { return };
        let at = Point::new(touch.client_x(), touch.client_y());
        dnd.state.update(|s| {
            s.move_to(at);
        });
        if dnd.state.with_untracked(DragState::is_dragging) {
            // Keep the page from scrolling under the finger
            ev.prevent_default();
            let over = target_at(&resolve_move, at);
            dnd.state.update(|s| s.hover(over));
        }
    });

    add_document_listener("touchend", false, move |ev: web_sys::TouchEvent| {
        if dnd.state.with_untracked(|s| s.payload().is_none()) {
            return;
        }
        if let Some(touch) = ev.changed_touches().get(0) {
            let at = Point::new(touch.client_x(), touch.client_y());
            if dnd.state.with_untracked(DragState::is_dragging) {
                let over = target_at(&resolve, at);
                dnd.state.update(|s| s.hover(over));
            }
        }
        if let Some((payload, target)) = finish(&dnd) {
            ev.prevent_default();
            on_drop(payload, target);
        }
    });

    add_document_listener("touchcancel", true, move |_ev: web_sys::TouchEvent| {
        dnd.state.update(|s| s.cancel());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    type State = DragState<&'static str, u8>;

    fn dragging(payload: &'static str) -> State {
        let mut state = State::default();
        state.press(payload, Point::new(10, 10));
        assert!(state.move_to(Point::new(30, 10)));
        state
    }

    #[test]
    fn test_small_moves_stay_pending() {
        let mut state = State::default();
        state.press("apple", Point::new(0, 0));
        assert!(!state.move_to(Point::new(5, -5)));
        assert!(!state.is_dragging());
        assert_eq!(state.payload(), Some(&"apple"));
    }

    #[test]
    fn test_click_without_drag_drops_nothing() {
        let mut state = State::default();
        state.press("apple", Point::new(0, 0));
        state.enter(3);
        assert_eq!(state.release(), None);
        assert_eq!(state, State::Idle);
    }

    #[test]
    fn test_drop_on_hovered_target() {
        let mut state = dragging("apple");
        state.enter(2);
        assert_eq!(state.over(), Some(2));
        assert_eq!(state.release(), Some(("apple", 2)));
        assert_eq!(state, State::Idle);
    }

    #[test]
    fn test_release_outside_targets_is_noop() {
        let mut state = dragging("apple");
        state.enter(2);
        state.leave();
        assert_eq!(state.release(), None);
        assert_eq!(state, State::Idle);
    }

    #[test]
    fn test_last_entered_target_wins() {
        let mut state = dragging("apple");
        state.enter(1);
        state.enter(4);
        assert_eq!(state.release(), Some(("apple", 4)));
    }

    #[test]
    fn test_hover_matches_enter() {
        let mut by_mouse = dragging("apple");
        by_mouse.enter(5);
        let mut by_touch = dragging("apple");
        by_touch.hover(Some(5));
        assert_eq!(by_mouse.release(), by_touch.release());
    }

    #[test]
    fn test_enter_while_idle_is_ignored() {
        let mut state = State::default();
        state.enter(1);
        assert_eq!(state, State::Idle);
    }

    #[test]
    fn test_cancel_if_matching_payload() {
        let mut state = dragging("apple");
        assert!(!state.cancel_if(|p| *p == "bread"));
        assert!(state.is_dragging());
        assert!(state.cancel_if(|p| *p == "apple"));
        assert_eq!(state, State::Idle);
        assert!(!state.cancel_if(|_| true));
    }

    #[test]
    fn test_cancel_pending() {
        let mut state = State::default();
        state.press("apple", Point::new(0, 0));
        assert!(state.cancel_if(|_| true));
        state.enter(1);
        assert_eq!(state.release(), None);
    }
}
