pub mod catalog_screen;
pub mod logs_screen;

use crate::state::LogsState;

#[derive(Debug, Clone)]
pub enum Screen {
    Categories,
    Products,
    Logs(LogsState),
}
