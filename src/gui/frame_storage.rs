use crate::KeyValueStore;

/// Persistent storage provided by `eframe`.
pub struct FrameStorage<'a>(pub &'a mut dyn eframe::Storage);

impl KeyValueStore for FrameStorage<'_> {
    fn get_string(&self, key: &str) -> Option<String> {
        self.0.get_string(key)
    }

    fn set_string(&mut self, key: &str, value: String) {
        self.0.set_string(key, value);
    }

    fn flush(&mut self) {
        self.0.flush();
    }
}
