//! Polled input state and binding registry.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use twinstick_core::enums::{AxisBinding, InputAction, InputEvent};
use twinstick_controller::host::InputBinder;

/// Current axis values plus the bindings the controller registered.
///
/// Unbound axes read as zero and unbound actions are dropped.
#[derive(Debug, Default)]
pub struct InputState {
    axes: HashMap<AxisBinding, f32>,
    bound_axes: HashSet<AxisBinding>,
    bound_actions: HashSet<(InputAction, InputEvent)>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an axis value, clamped to [-1, 1]. Non-finite values read as zero.
    pub fn set_axis(&mut self, binding: AxisBinding, value: f32) {
        let value = if value.is_finite() {
            value.clamp(-1.0, 1.0)
        } else {
            0.0
        };
        self.axes.insert(binding, value);
    }

    pub fn axis(&self, binding: AxisBinding) -> f32 {
        if !self.bound_axes.contains(&binding) {
            return 0.0;
        }
        self.axes.get(&binding).copied().unwrap_or(0.0)
    }

    pub fn is_action_bound(&self, action: InputAction, event: InputEvent) -> bool {
        self.bound_actions.contains(&(action, event))
    }

    /// Forget all bindings (axis values are kept).
    pub fn clear_bindings(&mut self) {
        self.bound_axes.clear();
        self.bound_actions.clear();
    }
}

impl InputBinder for InputState {
    fn bind_axis(&mut self, binding: AxisBinding) {
        debug!(axis = binding.name(), "axis bound");
        self.bound_axes.insert(binding);
    }

    fn bind_action(&mut self, action: InputAction, event: InputEvent) {
        debug!(action = action.name(), ?event, "action bound");
        self.bound_actions.insert((action, event));
    }
}
