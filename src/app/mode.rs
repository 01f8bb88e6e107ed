#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Quit,
}
