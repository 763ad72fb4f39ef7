//! Application Context
//!
//! Shared state provided via Leptos Context API: the project refetch trigger
//! and the error slot behind the root banner.

use leptos::prelude::*;

use crate::error::ApiError;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Counter that schedules a full project refetch - read
    pub refetch_trigger: ReadSignal<u32>,
    set_refetch_trigger: WriteSignal<u32>,
    /// Error slot behind the root banner - read
    pub app_error: ReadSignal<Option<ApiError>>,
    set_app_error: WriteSignal<Option<ApiError>>,
}

impl AppContext {
    pub fn new(
        refetch_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        app_error: (ReadSignal<Option<ApiError>>, WriteSignal<Option<ApiError>>),
    ) -> Self {
        Self {
            refetch_trigger: refetch_trigger.0,
            set_refetch_trigger: refetch_trigger.1,
            app_error: app_error.0,
            set_app_error: app_error.1,
        }
    }

    /// Schedule a refetch of the full project collection
    pub fn refetch_projects(&self) {
        self.set_refetch_trigger.update(|v| *v += 1);
    }

    /// Forward a failed call to the root banner
    pub fn report(&self, error: ApiError) {
        log::error!("[API] {error}");
        self.set_app_error.set(Some(error));
    }

    /// Reset the banner; runs on navigation and at the start of each refetch,
    /// whether or not the underlying condition resolved
    pub fn clear_error(&self) {
        self.set_app_error.set(None);
    }
}
