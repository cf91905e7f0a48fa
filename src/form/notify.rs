/// Surface for the one-line notifications the form shows after each call.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Prints each notification on its own stdout line. Logs go to stderr, so stdout
/// only ever carries notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Collects notifications in order.
impl Notifier for Vec<String> {
    fn notify(&mut self, message: &str) {
        self.push(message.to_string());
    }
}
