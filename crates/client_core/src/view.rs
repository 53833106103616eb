use std::fmt;

use async_trait::async_trait;
use shared::domain::{Employee, EmployeeId};

use crate::controller::{EditBuffer, UiMode};

pub const EMPLOYEE_COLUMNS: [&str; 5] = ["ID", "Name", "Position", "Department", "Email"];

/// One rendered table row. `emp_id` is what the row's actions report back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub emp_id: EmployeeId,
    pub cells: [String; 5],
}

impl EmployeeRow {
    pub fn edit_action(&self) -> RowAction {
        RowAction::Edit(self.emp_id)
    }

    pub fn delete_action(&self) -> RowAction {
        RowAction::Delete(self.emp_id)
    }
}

impl From<&Employee> for EmployeeRow {
    fn from(employee: &Employee) -> Self {
        Self {
            emp_id: employee.emp_id,
            cells: [
                employee.emp_id.to_string(),
                employee.emp_name.clone(),
                employee.position.clone(),
                employee.department.clone(),
                employee.email.clone(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit(EmployeeId),
    Delete(EmployeeId),
}

impl RowAction {
    pub fn emp_id(self) -> EmployeeId {
        match self {
            Self::Edit(emp_id) | Self::Delete(emp_id) => emp_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Failure,
            message: message.into(),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.kind == NotificationKind::Failure
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Rendering surface driven by [`crate::EmployeeListController`].
#[async_trait]
pub trait EmployeeView: Send + Sync {
    /// Replaces every rendered row.
    fn render_rows(&self, rows: Vec<EmployeeRow>);
    /// Shows the form (with the buffer's contents) in `Editing`, the table in `Viewing`.
    fn show_mode(&self, mode: UiMode, buffer: &EditBuffer);
    fn notify(&self, notification: Notification);
    /// Asks the user to confirm a destructive action.
    async fn confirm(&self, prompt: &str) -> bool;
}
