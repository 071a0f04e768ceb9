use gloo_console::error;
use gloo_utils::window;
use workout_logger_lib::ports::Notifier;

pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn alert(&mut self, message: &str) {
        if let Err(err) = window().alert_with_message(message) {
            error!("Failed to show alert", err);
        }
    }
}
