//! Backend commands queued from UI to backend worker.

use client_core::RowAction;
use shared::domain::{EmployeeFields, EmployeeId};

#[derive(Debug)]
pub enum BackendCommand {
    RefreshList,
    BeginEdit { emp_id: EmployeeId },
    DeleteRecord { emp_id: EmployeeId },
    SaveRecord { form_values: EmployeeFields },
    BeginCreate,
    CancelEdit,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RefreshList => "refresh_list",
            Self::BeginEdit { .. } => "begin_edit",
            Self::DeleteRecord { .. } => "delete_record",
            Self::SaveRecord { .. } => "save_record",
            Self::BeginCreate => "begin_create",
            Self::CancelEdit => "cancel_edit",
        }
    }
}

impl From<RowAction> for BackendCommand {
    fn from(action: RowAction) -> Self {
        match action {
            RowAction::Edit(emp_id) => Self::BeginEdit { emp_id },
            RowAction::Delete(emp_id) => Self::DeleteRecord { emp_id },
        }
    }
}
