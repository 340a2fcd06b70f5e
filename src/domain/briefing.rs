#[derive(Debug, Clone, PartialEq)]
pub struct Briefing {
    pub transcript: String,
    pub summary: String,
}
