#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PushPriority {
    Normal,
    High,
}

impl PushPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            PushPriority::Normal => "normal",
            PushPriority::High => "high",
        }
    }
}
