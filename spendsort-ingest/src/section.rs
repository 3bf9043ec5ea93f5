//! Section tracking for multi-account statements.
//!
//! Statements list several accounts one after another. Only lines between
//! the start marker of the target account and the marker of the following
//! account are transaction candidates.

/// Start/end markers, already whitespace-free and uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMarkers {
    pub start: &'static str,
    pub end: &'static str,
}

/// OCCU "Pacific Checking #0040", ended by the "Pacific Savings" block.
pub const PACIFIC_CHECKING: SectionMarkers = SectionMarkers {
    start: "PACIFICCHECKING#0040",
    end: "PACIFICSAVINGS",
};

/// Drop all whitespace and uppercase, so "Pacific Checking #0040" and
/// "PACIFIC  CHECKING#0040" compare equal.
pub fn normalize_marker_line(line: &str) -> String {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Two-state scanner: inside or outside the target section.
#[derive(Debug, Clone)]
pub struct SectionFilter {
    markers: SectionMarkers,
    in_section: bool,
}

impl SectionFilter {
    pub fn new(markers: SectionMarkers) -> Self {
        Self {
            markers,
            in_section: false,
        }
    }

    pub fn in_section(&self) -> bool {
        self.in_section
    }

    /// Feed one line and return whether the scanner is inside the section
    /// after seeing it. The start marker wins if a line carries both.
    pub fn observe(&mut self, line: &str) -> bool {
        let normalized = normalize_marker_line(line);
        if normalized.contains(self.markers.start) {
            if !self.in_section {
                log::info!("entered section {}", self.markers.start);
            }
            self.in_section = true;
        } else if normalized.contains(self.markers.end) {
            if self.in_section {
                log::info!("left section {} at {}", self.markers.start, self.markers.end);
            }
            self.in_section = false;
        }
        self.in_section
    }
}

impl Default for SectionFilter {
    fn default() -> Self {
        Self::new(PACIFIC_CHECKING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_marker_line() {
        assert_eq!(normalize_marker_line("Pacific Checking #0040"), "PACIFICCHECKING#0040");
        assert_eq!(normalize_marker_line("  pacific\tsavings  "), "PACIFICSAVINGS");
        assert_eq!(normalize_marker_line(""), "");
    }

    #[test]
    fn test_filter_tracks_section() {
        let lines = [
            "noise",
            "PACIFIC CHECKING #0040",
            "01/02/24  Coffee Shop  3.50",
            "PACIFIC SAVINGS",
            "01/03/24  Groceries  40.00",
        ];
        let mut filter = SectionFilter::default();
        let states: Vec<bool> = lines.iter().map(|l| filter.observe(l)).collect();
        assert_eq!(states, vec![false, true, true, false, false]);
    }

    #[test]
    fn test_last_marker_wins() {
        let mut filter = SectionFilter::default();
        assert!(filter.observe("Pacific Checking #0040"));
        assert!(filter.observe("Pacific Checking #0040 (continued)"));
        assert!(!filter.observe("Pacific Savings #0010"));
        assert!(!filter.observe("Pacific Savings"));
        assert!(filter.observe("PACIFICCHECKING#0040"));
        assert!(filter.in_section());
    }

    #[test]
    fn test_other_account_number_does_not_start() {
        let mut filter = SectionFilter::default();
        assert!(!filter.observe("Pacific Checking #0041"));
        assert!(!filter.observe("01/02/24  Coffee  3.50"));
    }

    #[test]
    fn test_blank_line_keeps_state() {
        let mut filter = SectionFilter::default();
        filter.observe("Pacific Checking #0040");
        assert!(filter.observe(""));
        assert!(filter.observe("   "));
    }
}
