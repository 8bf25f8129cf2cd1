/// Text container a roll marker is written into
pub trait Output {
    /// Replace the whole text, last write wins
    fn write(&self, text: &str);
}

impl<T: Output + ?Sized> Output for &T {
    fn write(&self, text: &str) {
        (**self).write(text)
    }
}
