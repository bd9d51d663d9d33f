/*!
 * Container Configuration
 *
 * Construction-time settings shared by every synchronized container
 */

/// Label used when no explicit one is configured
pub const DEFAULT_LABEL: &str = "container";

/// Container configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerConfig {
    /// Name attached to every tracing event emitted by the instance
    pub label: &'static str,
    /// Elements to reserve up front (honored by array and queue only)
    pub initial_capacity: usize,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL,
            initial_capacity: 0,
        }
    }
}

impl ContainerConfig {
    /// Configuration with a tracing label and no reservation
    pub const fn named(label: &'static str) -> Self {
        Self {
            label,
            initial_capacity: 0,
        }
    }

    /// Set the reservation hint
    pub const fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    /// Set the tracing label
    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }
}
