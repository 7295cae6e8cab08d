use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "OrderChat -- ", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "OrderChat -- ", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "OrderChat -- ", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "OrderChat -- ", "{}", message);
    }
}
