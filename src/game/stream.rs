//! Platform Stream
//!
//! Platforms are kept oldest-first: the front is the lowest platform (next to
//! fall off the bottom), the back is the newest and highest. At most one
//! platform is spawned and one retired per frame.

use std::collections::VecDeque;
use rand::Rng;
use crate::tuning::Tuning;
use super::platform::Platform;
use super::rect::Rect;

/// What stream maintenance did this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Maintenance {
    pub spawned: bool,
    pub retired: bool,
}

pub struct PlatformStream {
    platforms: VecDeque<Platform>,
    screen_width: f32,
    screen_height: f32,
    platform_width: f32,
    platform_height: f32,
    scroll_speed: f32,
    gap_min: f32,
    gap_max: f32,
}

impl PlatformStream {
    /// Create a stream seeded with one platform whose top edge is at `first_top`
    pub fn new(tuning: &Tuning, first_x: f32, first_top: f32) -> Self {
        let mut stream = Self {
            platforms: VecDeque::new(),
            screen_width: tuning.screen_width,
            screen_height: tuning.screen_height,
            platform_width: tuning.platform_width,
            platform_height: tuning.platform_height,
            scroll_speed: tuning.scroll_speed,
            gap_min: tuning.spawn_gap_min,
            gap_max: tuning.spawn_gap_max,
        };
        stream.push(first_x, first_top);
        stream
    }

    fn push(&mut self, x: f32, top: f32) {
        let rect = Rect::new(x, top, self.platform_width, self.platform_height);
        self.platforms.push_back(Platform::new(rect, self.scroll_speed));
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    /// Lowest (oldest) platform
    pub fn oldest(&self) -> Option<&Platform> {
        self.platforms.front()
    }

    /// Highest (newest) platform
    pub fn newest(&self) -> Option<&Platform> {
        self.platforms.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Platform> {
        self.platforms.iter_mut()
    }

    /// Append a platform above the newest one once it has scrolled into view.
    ///
    /// The new top edge is drawn from `[top - gap_max, top - gap_min]` and the
    /// left edge from `[0, screen_width - platform_width]`, both as whole pixels.
    /// Flooring keeps a sub-pixel gap from landing level with the current top.
    pub fn spawn_if_needed<R: Rng>(&mut self, rng: &mut R) -> bool {
        let Some(top) = self.newest().map(Platform::top) else { return false };
        if top <= 0.0 {
            return false;
        }

        let max_x = (self.screen_width - self.platform_width).floor() as i32;
        let x = rng.gen_range(0..=max_x.max(0)) as f32;

        let mut lowest = (top - self.gap_min).floor() as i32;
        if lowest as f32 >= top {
            lowest -= 1;
        }
        let highest = ((top - self.gap_max).floor() as i32).min(lowest);
        let new_top = rng.gen_range(highest..=lowest) as f32;

        self.push(x, new_top);
        true
    }

    /// Drop the oldest platform once its top edge is below the screen.
    /// The last remaining platform is never dropped.
    pub fn retire_if_needed(&mut self) -> bool {
        if self.platforms.len() <= 1 {
            return false;
        }
        match self.oldest() {
            Some(p) if p.top() > self.screen_height => {
                self.platforms.pop_front();
                true
            }
            _ => false,
        }
    }

    /// Spawn then retire
    pub fn maintain<R: Rng>(&mut self, rng: &mut R) -> Maintenance {
        Maintenance {
            spawned: self.spawn_if_needed(rng),
            retired: self.retire_if_needed(),
        }
    }

    /// Scroll every platform down one frame
    pub fn advance_all(&mut self) {
        for platform in self.platforms.iter_mut() {
            platform.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stream_with_top(top: f32) -> PlatformStream {
        PlatformStream::new(&Tuning::default(), 200.0, top)
    }

    #[test]
    fn test_spawns_above_newest() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stream = stream_with_top(650.0);

        assert!(stream.spawn_if_needed(&mut rng));
        assert_eq!(stream.len(), 2);

        let new = stream.newest().unwrap();
        assert!(new.top() >= 450.0 && new.top() <= 630.0, "top = {}", new.top());
        assert!(new.rect.x >= 0.0 && new.rect.x <= 400.0, "x = {}", new.rect.x);
        assert!(!new.collidable);
    }

    #[test]
    fn test_sub_pixel_gap_still_spawns_above() {
        let mut rng = StdRng::seed_from_u64(5);
        let tuning = Tuning { spawn_gap_min: 0.4, spawn_gap_max: 0.4, ..Tuning::default() };
        let mut stream = PlatformStream::new(&tuning, 200.0, 650.0);

        for _ in 0..5 {
            assert!(stream.spawn_if_needed(&mut rng));
        }
        let tops: Vec<f32> = stream.iter().map(Platform::top).collect();
        assert!(tops.windows(2).all(|w| w[1] < w[0]), "{:?}", tops);
    }

    #[test]
    fn test_no_spawn_while_newest_above_screen() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut stream = stream_with_top(0.0);
        assert!(!stream.spawn_if_needed(&mut rng));
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn test_retire_only_below_screen() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut stream = stream_with_top(800.0);
        stream.spawn_if_needed(&mut rng);
        assert!(!stream.retire_if_needed());

        stream.advance_all();
        assert!(stream.retire_if_needed());
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn test_last_platform_never_retired() {
        let mut stream = stream_with_top(900.0);
        assert!(!stream.retire_if_needed());
        assert_eq!(stream.len(), 1);
    }

    #[test]
    fn test_length_stays_bounded() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut stream = stream_with_top(650.0);

        for _ in 0..20_000 {
            stream.maintain(&mut rng);
            stream.advance_all();
            assert!(stream.len() >= 1);
            // Gaps are at least 20px over a ~1000px band
            assert!(stream.len() <= 60, "len = {}", stream.len());
        }
    }

    #[test]
    fn test_platforms_ordered_bottom_to_top() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut stream = stream_with_top(650.0);

        for _ in 0..2_000 {
            stream.maintain(&mut rng);
            stream.advance_all();
        }
        let tops: Vec<f32> = stream.iter().map(Platform::top).collect();
        assert!(tops.windows(2).all(|w| w[0] > w[1]), "{:?}", tops);
    }
}
