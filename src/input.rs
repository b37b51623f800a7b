//! Mouse drag interaction.
//!
//! A press picks a target and starts a drag; moves are routed to that target until the button is
//! released.

use crate::light::LightMover;

/// What a drag acts upon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragTarget {
  /// The view itself: rotation, or translation with shift.
  Camera,
  /// A light being repositioned.
  Light(LightMover),
}

/// Drag state machine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragState {
  Idle,
  Dragging(DragTarget),
}

impl Default for DragState {
  fn default() -> Self {
    DragState::Idle
  }
}

impl DragState {
  /// Mouse went down on `target`.
  ///
  /// A press while already dragging replaces the target.
  pub fn press(&mut self, target: DragTarget) {
    *self = DragState::Dragging(target);
  }

  /// Mouse went up; returns the target that was being dragged, if any.
  pub fn release(&mut self) -> Option<DragTarget> {
    match std::mem::replace(self, DragState::Idle) {
      DragState::Dragging(target) => Some(target),
      DragState::Idle => None,
    }
  }

  /// The target cursor moves should be routed to.
  pub fn target(&self) -> Option<DragTarget> {
    match *self {
      DragState::Dragging(target) => Some(target),
      DragState::Idle => None,
    }
  }

  pub fn is_dragging(&self) -> bool {
    self.target().is_some()
  }
}

/// Whether a wheel offset spins forward (away from the user).
pub fn wheel_forward(offset: f64) -> bool {
  offset > 0.
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn press_then_release() {
    let mut state = DragState::default();
    assert!(!state.is_dragging());

    state.press(DragTarget::Camera);
    assert_eq!(state.target(), Some(DragTarget::Camera));

    assert_eq!(state.release(), Some(DragTarget::Camera));
    assert_eq!(state, DragState::Idle);
    assert_eq!(state.release(), None);
  }
}
