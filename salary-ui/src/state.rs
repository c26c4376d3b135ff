//! Application state for the calculator front end.
//!
//! Holds the form being edited and the controller that owns the request
//! lifecycle. Nothing here outlives the process.

use salary_core::{FormField, FormInput, RequestController, RequestState, SalaryService};

#[derive(Debug, Default)]
pub struct AppState {
    form: FormInput,
    controller: RequestController,
}

impl AppState {
    pub fn new(form: FormInput) -> Self {
        Self {
            form,
            controller: RequestController::new(),
        }
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    /// Applies one edit event to the form.
    pub fn edit(
        &mut self,
        field: FormField,
        value: impl Into<String>,
    ) {
        self.form.set(field, value);
    }

    pub fn request_state(&self) -> &RequestState {
        self.controller.state()
    }

    /// The submit control is disabled while a request is in flight.
    pub fn submit_enabled(&self) -> bool {
        !self.controller.is_loading()
    }

    pub async fn submit(
        &mut self,
        service: &dyn SalaryService,
    ) -> &RequestState {
        self.controller.submit(service, &self.form).await
    }
}
