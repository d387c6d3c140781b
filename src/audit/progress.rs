/// Progress sink for long audits.
///
/// `is_cancelled` is polled once per scene boundary; there is no way to
/// cancel halfway through a scene.
pub trait ProgressBar {
    fn initialize(&mut self, title: &str, message: &str, total_steps: usize);
    fn advance(&mut self, label: &str);
    fn clear(&mut self);

    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Reports progress through the `log` facade.
#[derive(Debug, Default)]
pub struct LogProgressBar {
    title: String,
    current: usize,
    total: usize,
}

impl LogProgressBar {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }
}

impl ProgressBar for LogProgressBar {
    fn initialize(&mut self, title: &str, message: &str, total_steps: usize) {
        self.title = title.to_string();
        self.current = 0;
        self.total = total_steps;
        log::info!("{title}: {message} ({total_steps} steps)");
    }

    fn advance(&mut self, label: &str) {
        self.current += 1;
        log::info!("[{}/{}] {}: {label}", self.current, self.total, self.title);
    }

    fn clear(&mut self) {
        log::debug!("{} finished after {} steps", self.title, self.current);
        self.current = 0;
        self.total = 0;
    }
}
