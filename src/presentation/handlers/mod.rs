mod health;
mod providers;
mod results;
mod transcribe;
mod upload;

use serde::Serialize;

pub use health::health_handler;
pub use providers::providers_handler;
pub use results::{delete_results_handler, results_handler};
pub use transcribe::transcribe_handler;
pub use upload::upload_handler;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
