use std::time::Duration;

use client_core::{
    view::EMPLOYEE_COLUMNS, EditBuffer, EditTarget, EmployeeRow, Notification, NotificationKind,
    RowAction, UiMode,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use tokio::sync::oneshot;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiError, UiErrorCategory, UiErrorContext, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;

struct PendingConfirm {
    prompt: String,
    reply: oneshot::Sender<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StatusBanner {
    message: String,
}

pub struct EmployeeAdminApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    server_url: String,
    rows: Vec<EmployeeRow>,
    mode: UiMode,
    form: EditBuffer,
    status: String,
    status_banner: Option<StatusBanner>,
    alert: Option<Notification>,
    pending_confirm: Option<PendingConfirm>,
}

impl EmployeeAdminApp {
    pub fn new(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        server_url: impl Into<String>,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            server_url: server_url.into(),
            rows: Vec::new(),
            mode: UiMode::Viewing,
            form: EditBuffer::default(),
            status: "Loading employees...".to_string(),
            status_banner: None,
            alert: None,
            pending_confirm: None,
        }
    }

    fn dispatch(&mut self, cmd: BackendCommand) {
        if !dispatch_backend_command(&self.cmd_tx, cmd, &mut self.status) {
            let err = UiError::from_message(UiErrorContext::General, self.status.clone());
            self.show_error(err);
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::RowsRendered(rows) => {
                    self.status = format!("{} employee(s) loaded", rows.len());
                    self.rows = rows;
                }
                UiEvent::ModeChanged { mode, buffer } => {
                    self.mode = mode;
                    self.form = buffer;
                }
                UiEvent::Notify(notification) => {
                    self.status_banner = match notification.kind {
                        NotificationKind::Failure => Some(StatusBanner {
                            message: notification.message.clone(),
                        }),
                        NotificationKind::Success => None,
                    };
                    self.status = notification.message.clone();
                    self.alert = Some(notification);
                }
                UiEvent::ConfirmRequested { prompt, reply } => {
                    if let Some(previous) = self
                        .pending_confirm
                        .replace(PendingConfirm { prompt, reply })
                    {
                        let _ = previous.reply.send(false);
                    }
                }
                UiEvent::Error(err) => self.show_error(err),
            }
        }
    }

    fn show_error(&mut self, err: UiError) {
        tracing::error!(context = ?err.context(), "{}", err.message());
        self.status = format!("{} error: {}", err_label(err.category()), err.message());
        if err.context() == UiErrorContext::BackendStartup
            || err.category() == UiErrorCategory::Transport
        {
            self.status_banner = Some(StatusBanner {
                message: self.status.clone(),
            });
        }
    }

    fn answer_confirm(&mut self, confirmed: bool) {
        if let Some(pending) = self.pending_confirm.take() {
            let _ = pending.reply.send(confirmed);
        }
    }

    fn modal_open(&self) -> bool {
        self.pending_confirm.is_some() || self.alert.is_some()
    }

    fn show_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.heading("Employee Management");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let enabled = !self.modal_open();
                    if ui
                        .add_enabled(enabled, egui::Button::new("Refresh"))
                        .clicked()
                    {
                        self.dispatch(BackendCommand::RefreshList);
                    }
                    if ui
                        .add_enabled(
                            enabled && self.mode == UiMode::Viewing,
                            egui::Button::new("Add Employee"),
                        )
                        .clicked()
                    {
                        self.dispatch(BackendCommand::BeginCreate);
                    }
                });
            });
            ui.add_space(4.0);
        });
    }

    fn show_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some(banner) = &self.status_banner {
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, banner.message.as_str());
                    ui.separator();
                }
                ui.label(self.status.as_str());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(self.server_url.as_str());
                });
            });
        });
    }

    fn show_employee_table(&mut self, ui: &mut egui::Ui) {
        if self.rows.is_empty() {
            ui.weak("No employees to show.");
            return;
        }

        let mut action: Option<RowAction> = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("employee_table")
                    .striped(true)
                    .num_columns(EMPLOYEE_COLUMNS.len() + 1)
                    .spacing([18.0, 6.0])
                    .show(ui, |ui| {
                        for column in EMPLOYEE_COLUMNS {
                            ui.strong(column);
                        }
                        ui.strong("Actions");
                        ui.end_row();

                        for row in &self.rows {
                            for cell in &row.cells {
                                ui.label(cell.as_str());
                            }
                            ui.horizontal(|ui| {
                                if ui.button("Edit").clicked() {
                                    action = Some(row.edit_action());
                                }
                                if ui.button("Delete").clicked() {
                                    action = Some(row.delete_action());
                                }
                            });
                            ui.end_row();
                        }
                    });
            });

        if let Some(action) = action {
            self.dispatch(action.into());
        }
    }

    fn show_edit_form(&mut self, ui: &mut egui::Ui) {
        let heading = match self.form.target {
            EditTarget::NewRecord => "Add Employee".to_string(),
            EditTarget::ExistingRecord(emp_id) => format!("Edit Employee #{emp_id}"),
        };
        ui.heading(heading);
        ui.add_space(8.0);

        let fields = &mut self.form.fields;
        egui::Grid::new("employee_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                form_field(ui, "emp_name_input", "Name", &mut fields.emp_name);
                form_field(ui, "position_input", "Position", &mut fields.position);
                form_field(ui, "department_input", "Department", &mut fields.department);
                form_field(ui, "email_input", "Email", &mut fields.email);
            });

        ui.add_space(12.0);
        let can_save = !self.form.fields.emp_name.trim().is_empty();
        let mut save = false;
        let mut cancel = false;
        ui.horizontal(|ui| {
            save = ui
                .add_enabled(can_save, egui::Button::new("Save"))
                .on_disabled_hover_text("Name is required")
                .clicked();
            cancel = ui.button("Cancel").clicked();
        });

        if save {
            let form_values = self.form.fields.clone();
            self.dispatch(BackendCommand::SaveRecord { form_values });
        } else if cancel {
            self.dispatch(BackendCommand::CancelEdit);
        }
    }

    fn show_confirm_dialog(&mut self, ctx: &egui::Context) {
        let Some(pending) = &self.pending_confirm else {
            return;
        };

        let mut answer = None;
        egui::Window::new("Confirm")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(pending.prompt.as_str());
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Delete").clicked() {
                        answer = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        answer = Some(false);
                    }
                });
            });

        if let Some(confirmed) = answer {
            self.answer_confirm(confirmed);
        }
    }

    fn show_alert(&mut self, ctx: &egui::Context) {
        if self.pending_confirm.is_some() {
            return;
        }
        let Some(alert) = &self.alert else {
            return;
        };

        let title = match alert.kind {
            NotificationKind::Success => "Done",
            NotificationKind::Failure => "Error",
        };
        let mut dismissed = false;
        egui::Window::new(title)
            .id(egui::Id::new("notification_window"))
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                let color = match alert.kind {
                    NotificationKind::Success => ui.visuals().text_color(),
                    NotificationKind::Failure => ui.visuals().error_fg_color,
                };
                ui.colored_label(color, alert.message.as_str());
                ui.add_space(8.0);
                dismissed = ui.button("OK").clicked();
            });

        if dismissed {
            self.alert = None;
        }
    }
}

fn form_field(ui: &mut egui::Ui, id: &'static str, label: &str, value: &mut String) {
    ui.label(label);
    ui.add(
        egui::TextEdit::singleline(value)
            .id_salt(id)
            .desired_width(320.0),
    );
    ui.end_row();
}

impl eframe::App for EmployeeAdminApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        self.show_toolbar(ctx);
        self.show_status_bar(ctx);
        let enabled = !self.modal_open();
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| match self.mode {
                UiMode::Viewing => self.show_employee_table(ui),
                UiMode::Editing => self.show_edit_form(ui),
            });
        });
        self.show_confirm_dialog(ctx);
        self.show_alert(ctx);

        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
