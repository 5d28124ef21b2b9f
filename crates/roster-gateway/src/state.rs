use std::sync::Arc;

use roster_core::EmployeeDirectory;

#[derive(Clone)]
pub struct AppState {
    directory: Arc<dyn EmployeeDirectory>,
}

impl AppState {
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &dyn EmployeeDirectory {
        self.directory.as_ref()
    }
}
