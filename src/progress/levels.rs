//! Level system
//!
//! Levels are a pure function of points: every 500 points is one level,
//! starting at level 1.

/// Points needed per level
pub const POINTS_PER_LEVEL: u32 = 500;

/// Level for a point total: `floor(points / 500) + 1`
pub fn level_for_points(points: u32) -> u32 {
    points / POINTS_PER_LEVEL + 1
}

/// Progress within the current level, for display
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub level: u32,
    /// Points earned since reaching the current level
    pub points_into_level: u32,
    /// Points still missing for the next level
    pub points_to_next: u32,
}

impl LevelProgress {
    pub fn new(points: u32) -> Self {
        let level = level_for_points(points);
        let points_into_level = points % POINTS_PER_LEVEL;
        Self {
            level,
            points_into_level,
            points_to_next: POINTS_PER_LEVEL - points_into_level,
        }
    }

    /// Progress to the next level (0.0 - 1.0)
    pub fn fraction(&self) -> f32 {
        self.points_into_level as f32 / POINTS_PER_LEVEL as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_points() {
        assert_eq!(level_for_points(0), 1);
        assert_eq!(level_for_points(499), 1);
        assert_eq!(level_for_points(500), 2);
        assert_eq!(level_for_points(1499), 3);
        assert_eq!(level_for_points(1500), 4);
    }

    #[test]
    fn test_level_progress() {
        let progress = LevelProgress::new(625);
        assert_eq!(progress.level, 2);
        assert_eq!(progress.points_into_level, 125);
        assert_eq!(progress.points_to_next, 375);
        assert!((progress.fraction() - 0.25).abs() < 0.001);

        let fresh = LevelProgress::new(0);
        assert_eq!(fresh.points_to_next, POINTS_PER_LEVEL);
        assert_eq!(fresh.fraction(), 0.0);
    }
}
