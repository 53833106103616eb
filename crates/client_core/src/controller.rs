use shared::domain::{EmployeeFields, EmployeeId};
use tracing::{debug, error, info, warn};

use crate::{
    view::{EmployeeRow, EmployeeView, Notification, RowAction},
    ClientResult, EmployeeApi,
};

pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this employee?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Viewing,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditTarget {
    #[default]
    NewRecord,
    ExistingRecord(EmployeeId),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditBuffer {
    pub target: EditTarget,
    pub fields: EmployeeFields,
}

impl EditBuffer {
    pub fn existing(emp_id: EmployeeId, fields: EmployeeFields) -> Self {
        Self {
            target: EditTarget::ExistingRecord(emp_id),
            fields,
        }
    }

    pub fn emp_id(&self) -> Option<EmployeeId> {
        match self.target {
            EditTarget::NewRecord => None,
            EditTarget::ExistingRecord(emp_id) => Some(emp_id),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Keeps the rendered employee table in step with the server and routes
/// form edits back to it. Every successful mutation is followed by a full
/// re-fetch; nothing is cached between renders.
pub struct EmployeeListController<A, V> {
    api: A,
    view: V,
    mode: UiMode,
    buffer: EditBuffer,
}

impl<A: EmployeeApi, V: EmployeeView> EmployeeListController<A, V> {
    pub fn new(api: A, view: V) -> Self {
        Self {
            api,
            view,
            mode: UiMode::Viewing,
            buffer: EditBuffer::default(),
        }
    }

    pub fn mode(&self) -> UiMode {
        self.mode
    }

    pub fn buffer(&self) -> &EditBuffer {
        &self.buffer
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub async fn refresh_list(&mut self) {
        match self.api.list_employees().await {
            Ok(employees) => {
                debug!(count = employees.len(), "rendering employee list");
                let rows = employees.iter().map(EmployeeRow::from).collect();
                self.view.render_rows(rows);
            }
            Err(err) => {
                error!("Error fetching employees: {err}");
                self.view.notify(Notification::failure(format!(
                    "Failed to fetch employees: {err}"
                )));
            }
        }
    }

    pub async fn begin_edit(&mut self, emp_id: EmployeeId) {
        match self.api.fetch_employee(emp_id).await {
            Ok(employee) => {
                if self.mode == UiMode::Editing {
                    debug!(emp_id = emp_id.0, "replacing in-progress edit");
                }
                self.buffer = EditBuffer::existing(employee.emp_id, employee.fields());
                self.enter(UiMode::Editing);
            }
            Err(err) => {
                error!(emp_id = emp_id.0, "Error fetching employee for editing: {err}");
                self.view.notify(Notification::failure(format!(
                    "Failed to fetch employee for editing: {err}"
                )));
            }
        }
    }

    pub async fn delete_record(&mut self, emp_id: EmployeeId) {
        if !self.view.confirm(DELETE_CONFIRM_PROMPT).await {
            debug!(emp_id = emp_id.0, "delete declined");
            return;
        }

        match self.api.delete_employee(emp_id).await {
            Ok(()) => {
                info!(emp_id = emp_id.0, "employee deleted");
                self.view
                    .notify(Notification::success("Employee deleted successfully!"));
                self.refresh_list().await;
            }
            Err(err) => {
                error!(emp_id = emp_id.0, "Error deleting employee: {err}");
                self.view.notify(Notification::failure(format!(
                    "Failed to delete employee: {err}"
                )));
            }
        }
    }

    pub async fn save_record(&mut self, form_values: EmployeeFields) {
        if self.mode != UiMode::Editing {
            warn!("save requested while no form is open; ignoring");
            return;
        }

        self.buffer.fields = form_values;
        match self.submit_buffer().await {
            Ok(()) => {
                self.view
                    .notify(Notification::success("Employee saved successfully!"));
                self.refresh_list().await;
                self.buffer.clear();
                self.enter(UiMode::Viewing);
            }
            Err(err) => {
                error!("Error saving employee: {err}");
                self.view.notify(Notification::failure(format!(
                    "Failed to save employee: {}",
                    err.with_detail()
                )));
            }
        }
    }

    pub fn begin_create(&mut self) {
        self.buffer.clear();
        self.enter(UiMode::Editing);
    }

    pub fn cancel_edit(&mut self) {
        self.buffer.clear();
        self.enter(UiMode::Viewing);
    }

    pub async fn handle_row_action(&mut self, action: RowAction) {
        match action {
            RowAction::Edit(emp_id) => self.begin_edit(emp_id).await,
            RowAction::Delete(emp_id) => self.delete_record(emp_id).await,
        }
    }

    async fn submit_buffer(&self) -> ClientResult<()> {
        match self.buffer.target {
            EditTarget::ExistingRecord(emp_id) => {
                self.api
                    .update_employee(emp_id, &self.buffer.fields)
                    .await?;
                info!(emp_id = emp_id.0, "employee updated");
            }
            EditTarget::NewRecord => {
                self.api.create_employee(&self.buffer.fields).await?;
                info!("employee created");
            }
        }
        Ok(())
    }

    fn enter(&mut self, mode: UiMode) {
        self.mode = mode;
        self.view.show_mode(mode, &self.buffer);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
