// View-state management module.
// Owns the stepper, tab groups, model scrollers, and live content subtrees.

pub mod console;
pub mod content;
pub mod scroller;
pub mod stepper;
pub mod tabs;

pub use console::{Console, ConsoleLevel, ConsoleMessage};
pub use content::{LiveBlock, LoadingState, MetricRow, Rendered, ResourceSlot};
pub use scroller::{ModelScroller, ScrollerContent};
pub use stepper::{NavControls, Stepper};
pub use tabs::TabGroup;
