//! View-state models for the presentation components
//!
//! Each model owns the state a component keeps between interactions and
//! renders to plain data. Nothing here draws anything.

pub mod alert;
pub mod badge;
pub mod header;
pub mod tabs;
pub mod tooltip;
pub mod workflow_progress;

pub use alert::{alert_style, Alert, AlertIcon, AlertStyle, AlertVariant, AlertView};
pub use badge::{status_badge_style, BadgeStyle, StatusBadge, NEUTRAL_BADGE};
pub use header::HeaderState;
pub use tabs::{Tab, TabContent, TabLabel, TabsState, TabsView};
pub use tooltip::{Placement, PointerEvent, Tooltip, TooltipView};
pub use workflow_progress::{
    render_workflow, stage_style, ProgressStage, StageIcon, StageMarker, StageProgress,
    StageStyle, WorkflowProgressView,
};
