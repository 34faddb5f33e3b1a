/// User-editable duration and name that seed the next session.
///
/// Fields are committed through the clamping setters, so a stored value is
/// always inside its documented range and `total_seconds` cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 25,
            seconds: 0,
            name: String::new(),
        }
    }
}

impl SessionConfig {
    /// Total configured duration in seconds
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Commit an hours value, clamped to 0..=23
    pub fn set_hours(&mut self, value: i64) {
        self.hours = value.clamp(0, 23) as u32;
    }

    /// Commit a minutes value, clamped to 0..=59
    pub fn set_minutes(&mut self, value: i64) {
        self.minutes = value.clamp(0, 59) as u32;
    }

    /// Commit a seconds value, clamped to 0..=59
    pub fn set_seconds(&mut self, value: i64) {
        self.seconds = value.clamp(0, 59) as u32;
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Archive name with the blank fallback applied
    pub fn display_name(&self) -> String {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            "Untitled Session".to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Restore the 25-minute defaults and clear the name
    pub fn reset_defaults(&mut self) {
        *self = Self::default();
    }

    /// Parse a numeric form buffer. Anything unparseable commits as 0.
    pub fn parse_numeric(raw: &str) -> i64 {
        raw.trim().parse().unwrap_or(0)
    }
}
