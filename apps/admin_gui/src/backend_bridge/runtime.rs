//! Runtime bridge between UI command queue and backend event intake.

use std::thread;

use client_core::{EmployeeApi, EmployeeListController, EmployeeView, HttpEmployeeApi};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::{commands::BackendCommand, view::ChannelView};
use crate::config::Settings;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    settings: Settings,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        runtime.block_on(async move {
            let api = match HttpEmployeeApi::with_timeout(
                &settings.server_url,
                settings.request_timeout(),
            ) {
                Ok(api) => api,
                Err(err) => {
                    let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                        UiErrorContext::BackendStartup,
                        format!("backend worker startup failure: {err}"),
                    )));
                    tracing::error!(
                        server_url = %settings.server_url,
                        "failed to build employee api client: {err}"
                    );
                    return;
                }
            };
            tracing::info!(
                collection = %api.endpoints().collection(),
                "backend worker ready"
            );
            let _ = ui_tx.try_send(UiEvent::Info(format!(
                "Connected to {}",
                api.endpoints().collection()
            )));

            let mut controller = EmployeeListController::new(api, ChannelView::new(ui_tx));
            controller.refresh_list().await;

            while let Ok(cmd) = cmd_rx.recv() {
                handle_command(&mut controller, cmd).await;
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    })
}

pub async fn handle_command<A, V>(
    controller: &mut EmployeeListController<A, V>,
    cmd: BackendCommand,
) where
    A: EmployeeApi,
    V: EmployeeView,
{
    tracing::debug!(command = cmd.name(), "handling backend command");
    match cmd {
        BackendCommand::RefreshList => controller.refresh_list().await,
        BackendCommand::BeginEdit { emp_id } => controller.begin_edit(emp_id).await,
        BackendCommand::DeleteRecord { emp_id } => controller.delete_record(emp_id).await,
        BackendCommand::SaveRecord { form_values } => controller.save_record(form_values).await,
        BackendCommand::BeginCreate => controller.begin_create(),
        BackendCommand::CancelEdit => controller.cancel_edit(),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use client_core::{ClientError, ClientResult, EditTarget, StatusCode, UiMode};
    use crossbeam_channel::bounded;
    use shared::domain::{Employee, EmployeeFields, EmployeeId};

    use super::*;

    #[derive(Default)]
    struct ScriptedApi {
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn log(&self, call: impl Into<String>) {
            self.calls.lock().expect("calls lock").push(call.into());
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().expect("calls lock").clone()
        }
    }

    #[async_trait]
    impl EmployeeApi for ScriptedApi {
        async fn list_employees(&self) -> ClientResult<Vec<Employee>> {
            self.log("list");
            Ok(vec![Employee {
                emp_id: EmployeeId(3),
                emp_name: "Cara".to_string(),
                position: "Eng".to_string(),
                department: "R&D".to_string(),
                email: "c@x.com".to_string(),
            }])
        }

        async fn fetch_employee(&self, emp_id: EmployeeId) -> ClientResult<Employee> {
            self.log(format!("fetch {emp_id}"));
            Err(ClientError::Server {
                status: StatusCode::NOT_FOUND,
                detail: None,
            })
        }

        async fn create_employee(&self, fields: &EmployeeFields) -> ClientResult<()> {
            self.log(format!("create {}", fields.emp_name));
            Ok(())
        }

        async fn update_employee(
            &self,
            emp_id: EmployeeId,
            fields: &EmployeeFields,
        ) -> ClientResult<()> {
            self.log(format!("update {emp_id} {}", fields.emp_name));
            Ok(())
        }

        async fn delete_employee(&self, emp_id: EmployeeId) -> ClientResult<()> {
            self.log(format!("delete {emp_id}"));
            Ok(())
        }
    }

    #[tokio::test]
    async fn commands_drive_the_controller() {
        let (ui_tx, ui_rx) = bounded(64);
        let mut controller =
            EmployeeListController::new(ScriptedApi::default(), ChannelView::new(ui_tx));

        handle_command(&mut controller, BackendCommand::BeginCreate).await;
        assert_eq!(controller.mode(), UiMode::Editing);
        assert_eq!(controller.buffer().target, EditTarget::NewRecord);

        handle_command(
            &mut controller,
            BackendCommand::SaveRecord {
                form_values: EmployeeFields {
                    emp_name: "Dana".to_string(),
                    ..EmployeeFields::default()
                },
            },
        )
        .await;
        handle_command(
            &mut controller,
            BackendCommand::BeginEdit {
                emp_id: EmployeeId(8),
            },
        )
        .await;

        assert_eq!(controller.mode(), UiMode::Viewing);
        assert_eq!(
            controller.api().calls(),
            vec!["create Dana", "list", "fetch 8"]
        );

        let events: Vec<UiEvent> = ui_rx.try_iter().collect();
        assert!(events
            .iter()
            .any(|event| matches!(event, UiEvent::RowsRendered(rows) if rows.len() == 1)));
        assert!(events.iter().any(|event| matches!(
            event,
            UiEvent::Notify(n) if n.message == "Failed to fetch employee for editing: HTTP error! status: 404"
        )));
    }
}
