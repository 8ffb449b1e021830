//! Workflow progress tracker
//!
//! A horizontal row of stage markers. Each marker is styled by its own
//! status, and the connector leading into it takes the colour of the stage
//! before it, so only a completed stage "fills" the line after it.

use dealdesk_domain::constants::WORKFLOW_EMPTY_PLACEHOLDER;
use dealdesk_domain::impl_domain_status_conversions;
use serde::{Deserialize, Serialize};

use super::tooltip::{Placement, Tooltip};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StageProgress {
    Completed,
    Current,
    Delayed,
    #[default]
    Pending,
}

impl_domain_status_conversions!(StageProgress {
    Completed => "completed",
    Current => "current",
    Delayed => "delayed",
    Pending => "pending",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageIcon {
    Check,
    PulseDot,
    AlertCircle,
    Clock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageStyle {
    pub border: &'static str,
    pub background: &'static str,
    pub text: &'static str,
    pub icon: StageIcon,
    /// Colour of the connector drawn after this stage.
    pub line: &'static str,
}

pub const fn stage_style(progress: StageProgress) -> StageStyle {
    match progress {
        StageProgress::Completed => StageStyle {
            border: "border-violet-500",
            background: "bg-violet-500",
            text: "text-white",
            icon: StageIcon::Check,
            line: "bg-violet-500",
        },
        StageProgress::Current => StageStyle {
            border: "border-violet-500 animate-pulse-border",
            background: "bg-white",
            text: "text-violet-500",
            icon: StageIcon::PulseDot,
            line: "bg-slate-200",
        },
        StageProgress::Delayed => StageStyle {
            border: "border-amber-500",
            background: "bg-white",
            text: "text-amber-500",
            icon: StageIcon::AlertCircle,
            line: "bg-slate-200",
        },
        StageProgress::Pending => StageStyle {
            border: "border-slate-300",
            background: "bg-white",
            text: "text-slate-400",
            icon: StageIcon::Clock,
            line: "bg-slate-200",
        },
    }
}

/// One stage of a deal's workflow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStage {
    pub id: String,
    pub name: String,
    pub status: StageProgress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProgressStage {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: StageProgress) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            approved_by: None,
            approved_at: None,
            expected_date: None,
            notes: None,
        }
    }

    /// Lines shown in the marker's tooltip.
    pub fn tooltip_lines(&self) -> Vec<String> {
        let mut lines = vec![self.name.clone()];
        if self.status == StageProgress::Completed {
            if let Some(by) = &self.approved_by {
                let on = self.approved_at.as_deref().unwrap_or_default();
                lines.push(format!("By: {by} on {on}"));
            }
        }
        if matches!(self.status, StageProgress::Pending | StageProgress::Delayed) {
            if let Some(expected) = &self.expected_date {
                lines.push(format!("Expected: {expected}"));
            }
        }
        if self.status == StageProgress::Delayed {
            lines.push("This stage is delayed.".to_string());
        }
        if let Some(notes) = &self.notes {
            lines.push(notes.clone());
        }
        lines
    }

    /// Caption under the marker, if any.
    pub fn caption(&self) -> Option<String> {
        match (&self.status, &self.approved_at, &self.expected_date) {
            (StageProgress::Completed, Some(at), _) => Some(format!("Completed: {at}")),
            (_, _, Some(expected)) => Some(format!("Exp: {expected}")),
            (StageProgress::Current, _, _) => Some("In Progress".to_string()),
            _ => None,
        }
    }
}

/// Rendered marker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageMarker<'a> {
    pub stage: &'a ProgressStage,
    pub style: StageStyle,
    /// Connector into this marker; `None` for the first stage.
    pub incoming_line: Option<&'static str>,
    pub caption: Option<String>,
    pub delayed_flag: bool,
    pub tooltip: Tooltip<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowProgressView<'a> {
    Empty(&'static str),
    Stages(Vec<StageMarker<'a>>),
}

pub fn render_workflow(stages: &[ProgressStage]) -> WorkflowProgressView<'_> {
    if stages.is_empty() {
        return WorkflowProgressView::Empty(WORKFLOW_EMPTY_PLACEHOLDER);
    }

    let markers = stages
        .iter()
        .enumerate()
        .map(|(index, stage)| StageMarker {
            stage,
            style: stage_style(stage.status),
            incoming_line: index
                .checked_sub(1)
                .map(|previous| stage_style(stages[previous].status).line),
            caption: stage.caption(),
            delayed_flag: stage.status == StageProgress::Delayed,
            tooltip: Tooltip::new(Some(stage.tooltip_lines())).with_placement(Placement::Top),
        })
        .collect();

    WorkflowProgressView::Stages(markers)
}
