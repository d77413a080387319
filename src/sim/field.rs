//! The platform field
//!
//! Platforms are stored in creation order, which is also ascending height:
//! the front is always the lowest live platform and the back the highest.
//! Every query and the reclaim scan rely on that ordering instead of sorting.

use std::collections::{VecDeque, vec_deque};

use super::bounds::Bounds;
use super::collision::lands_on_any;
use super::platform::Platform;
use super::rng::RandomBias;
use crate::config::{GameConfig, GenerationStrategy};

/// Owns every live platform of a session
#[derive(Debug, Clone)]
pub struct PlatformField {
    platforms: VecDeque<Platform>,
    /// Next creation id
    next_id: u32,
}

impl Default for PlatformField {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformField {
    pub fn new() -> Self {
        Self {
            platforms: VecDeque::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }

    /// Platforms from lowest to highest
    pub fn iter(&self) -> vec_deque::Iter<'_, Platform> {
        self.platforms.iter()
    }

    pub fn iter_mut(&mut self) -> vec_deque::IterMut<'_, Platform> {
        self.platforms.iter_mut()
    }

    pub fn lowest(&self) -> Option<&Platform> {
        self.platforms.front()
    }

    pub fn highest(&self) -> Option<&Platform> {
        self.platforms.back()
    }

    /// Drop every platform (session restart)
    pub fn clear(&mut self) {
        self.platforms.clear();
    }

    fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Bottom for the next platform above the current highest one.
    ///
    /// The very first platform goes at the configured starting height. Every
    /// later one leaves a gap in `[0, max_gap]` above the highest top, skewed
    /// toward the full gap. A highest platform already below the stage counts
    /// as sitting on the stage floor, so the new one always lands on stage.
    fn next_bottom(&self, config: &GameConfig, rng: &mut RandomBias) -> f32 {
        match self.highest() {
            Some(highest) => {
                let top = highest.top().max(0.0);
                let ceiling = top + config.max_platform_gap;
                rng.biased(top, ceiling, ceiling, 1.0).clamp(top, ceiling)
            }
            None => config.platform_starting_bottom,
        }
    }

    fn random_left(config: &GameConfig, rng: &mut RandomBias) -> f32 {
        rng.uniform(0.0, config.stage_width - config.platform_width)
    }

    fn spawn(&mut self, config: &GameConfig, rng: &mut RandomBias) {
        let bottom = self.next_bottom(config, rng);
        let left = Self::random_left(config, rng);
        let id = self.allocate_id();
        self.platforms.push_back(Platform::new(
            id,
            left,
            bottom,
            config.platform_width,
            config.platform_height,
        ));
    }

    /// Fill the stage (and one gap above it) with platforms.
    ///
    /// Returns how many platforms were created.
    pub fn populate(&mut self, config: &GameConfig, rng: &mut RandomBias) -> usize {
        let before = self.platforms.len();

        if self.platforms.is_empty() {
            self.spawn(config, rng);
        }

        match config.generation {
            GenerationStrategy::Biased => {
                let ceiling = config.stage_height + config.max_platform_gap;
                while self.highest().is_some_and(|p| p.top() <= ceiling) {
                    self.spawn(config, rng);
                }
            }
            GenerationStrategy::Recycle { count } => {
                while self.platforms.len() < count {
                    self.spawn(config, rng);
                }
            }
        }

        let created = self.platforms.len() - before;
        if created > 0 {
            log::debug!(
                "Created {} platforms ({} live, highest top {:?})",
                created,
                self.platforms.len(),
                self.highest().map(Platform::top)
            );
        }
        created
    }

    /// Shift every platform down by `amount`
    pub fn advance(&mut self, amount: f32) {
        for platform in &mut self.platforms {
            platform.advance(amount);
        }
    }

    /// Remove (or recycle) platforms whose top has dropped below the stage.
    ///
    /// Scans forward from the lowest platform and stops at the first one still
    /// on stage. Returns how many platforms were reclaimed.
    pub fn reclaim_below_stage(&mut self, config: &GameConfig, rng: &mut RandomBias) -> usize {
        let mut reclaimed = 0;

        match config.generation {
            GenerationStrategy::Biased => {
                while self.lowest().is_some_and(Platform::is_below_stage) {
                    self.platforms.pop_front();
                    reclaimed += 1;
                }
            }
            GenerationStrategy::Recycle { .. } => {
                // Each recycled platform lands on stage above the highest one,
                // so a full rotation is the most a single pass can need
                for _ in 0..self.platforms.len() {
                    if !self.lowest().is_some_and(Platform::is_below_stage) {
                        break;
                    }
                    let bottom = self.next_bottom(config, rng);
                    let left = Self::random_left(config, rng);
                    let id = self.allocate_id();
                    if let Some(mut platform) = self.platforms.pop_front() {
                        platform.relocate(id, left, bottom);
                        self.platforms.push_back(platform);
                        reclaimed += 1;
                    }
                }
            }
        }

        if reclaimed > 0 {
            log::debug!(
                "Reclaimed {} platforms below stage ({} live)",
                reclaimed,
                self.platforms.len()
            );
        }
        reclaimed
    }

    /// Per-tick update; the field only moves while the stage advances
    pub fn update(&mut self, advancing: bool, config: &GameConfig, rng: &mut RandomBias) {
        if !advancing {
            return;
        }
        // Platforms scroll at the jump speed so they stay in step with the jumper
        self.advance(config.jump_speed);
        self.populate(config, rng);
        self.reclaim_below_stage(config, rng);
    }

    /// Check whether an actor's feet rest on any platform
    pub fn landing_check(&self, actor: &Bounds) -> bool {
        lands_on_any(actor, &self.platforms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Slack for float drift after many scroll steps
    const EPSILON: f32 = 1e-3;

    fn populated(seed: u64, config: &GameConfig) -> (PlatformField, RandomBias) {
        let mut field = PlatformField::new();
        let mut rng = RandomBias::new(seed);
        field.populate(config, &mut rng);
        (field, rng)
    }

    fn assert_gaps_bounded(field: &PlatformField, max_gap: f32) {
        let platforms: Vec<_> = field.iter().collect();
        for pair in platforms.windows(2) {
            let gap = pair[1].bottom() - pair[0].top();
            assert!(gap >= -EPSILON, "platforms overlap: gap {gap}");
            assert!(gap <= max_gap + EPSILON, "gap {gap} exceeds {max_gap}");
        }
    }

    #[test]
    fn test_empty_field_queries() {
        let field = PlatformField::new();
        assert!(field.is_empty());
        assert!(field.lowest().is_none());
        assert!(field.highest().is_none());
        assert!(!field.landing_check(&Bounds::new(0.0, 0.0, 60.0, 85.0)));
    }

    #[test]
    fn test_populate_seeds_first_platform_at_start() {
        let config = GameConfig::default();
        let (field, _) = populated(1, &config);
        let lowest = field.lowest().unwrap();
        assert_eq!(lowest.bottom(), config.platform_starting_bottom);
        assert_eq!(lowest.id, 1);
    }

    #[test]
    fn test_populate_fills_past_stage() {
        let config = GameConfig::default();
        let (field, _) = populated(2, &config);
        let highest = field.highest().unwrap();
        assert!(highest.top() > config.stage_height + config.max_platform_gap);
        assert!(field.len() > 2);
        assert_gaps_bounded(&field, config.max_platform_gap);
    }

    #[test]
    fn test_populate_is_idempotent_when_full() {
        let config = GameConfig::default();
        let (mut field, mut rng) = populated(3, &config);
        let len = field.len();
        assert_eq!(field.populate(&config, &mut rng), 0);
        assert_eq!(field.len(), len);
    }

    #[test]
    fn test_creation_order_is_height_order() {
        let config = GameConfig::default();
        let (field, _) = populated(4, &config);
        let platforms: Vec<_> = field.iter().collect();
        for pair in platforms.windows(2) {
            assert!(pair[0].id < pair[1].id);
            assert!(pair[0].bottom() < pair[1].bottom());
        }
    }

    #[test]
    fn test_platforms_fit_on_stage() {
        let config = GameConfig::default();
        let (field, _) = populated(5, &config);
        for p in field.iter() {
            assert!(p.left() >= 0.0);
            assert!(p.bounds.right() <= config.stage_width);
        }
    }

    #[test]
    fn test_update_does_nothing_when_not_advancing() {
        let config = GameConfig::default();
        let (mut field, mut rng) = populated(6, &config);
        let bottoms: Vec<f32> = field.iter().map(Platform::bottom).collect();
        field.update(false, &config, &mut rng);
        let after: Vec<f32> = field.iter().map(Platform::bottom).collect();
        assert_eq!(bottoms, after);
    }

    #[test]
    fn test_update_advances_at_jump_speed() {
        let config = GameConfig::default();
        let (mut field, mut rng) = populated(7, &config);
        let first = field.lowest().unwrap().bottom();
        field.update(true, &config, &mut rng);
        assert_eq!(field.lowest().unwrap().bottom(), first - config.jump_speed);
    }

    #[test]
    fn test_reclaim_stops_at_first_on_stage() {
        let config = GameConfig::default();
        let (mut field, mut rng) = populated(8, &config);
        // Push only the first platform off stage
        let drop = field.lowest().unwrap().top() + 1.0;
        field.advance(drop);
        let below = field.iter().filter(|p| p.is_below_stage()).count();
        let len = field.len();

        let reclaimed = field.reclaim_below_stage(&config, &mut rng);
        assert_eq!(reclaimed, below);
        assert_eq!(field.len(), len - below);
        assert!(field.iter().all(|p| !p.is_below_stage()));
    }

    #[test]
    fn test_long_scroll_keeps_field_bounded() {
        let config = GameConfig::default();
        let (mut field, mut rng) = populated(9, &config);
        for _ in 0..5000 {
            field.update(true, &config, &mut rng);
            assert!(field.iter().all(|p| !p.is_below_stage()));
            assert!(field.highest().unwrap().top() > config.stage_height);
        }
        assert_gaps_bounded(&field, config.max_platform_gap);
        assert!(field.len() < 20);
    }

    #[test]
    fn test_recycle_keeps_count() {
        let config =
            GameConfig::default().with_generation(GenerationStrategy::Recycle { count: 5 });
        let (mut field, mut rng) = populated(10, &config);
        assert_eq!(field.len(), 5);
        assert_eq!(field.lowest().unwrap().bottom(), config.platform_starting_bottom);

        let mut recycled = 0;
        for _ in 0..2000 {
            field.advance(config.jump_speed);
            recycled += field.reclaim_below_stage(&config, &mut rng);
            assert_eq!(field.len(), 5);
            assert!(field.iter().all(|p| !p.is_below_stage()));
            assert_gaps_bounded(&field, config.max_platform_gap);
        }
        assert!(recycled > 0);
    }

    #[test]
    fn test_recycle_single_platform_returns_on_stage() {
        let config =
            GameConfig::default().with_generation(GenerationStrategy::Recycle { count: 1 });
        let (mut field, mut rng) = populated(12, &config);
        let id = field.lowest().unwrap().id;

        field.advance(300.0);
        assert_eq!(field.reclaim_below_stage(&config, &mut rng), 1);
        assert_eq!(field.len(), 1);
        let platform = field.lowest().unwrap();
        assert!(!platform.is_below_stage());
        assert!(platform.id > id);
        assert!(platform.bottom() <= config.max_platform_gap);
    }

    #[test]
    fn test_clear_keeps_ids_monotonic() {
        let config = GameConfig::default();
        let (mut field, mut rng) = populated(11, &config);
        let last_id = field.highest().unwrap().id;
        field.clear();
        assert!(field.is_empty());
        field.populate(&config, &mut rng);
        assert!(field.lowest().unwrap().id > last_id);
    }

    proptest! {
        #[test]
        fn prop_gaps_never_exceed_max(seed in any::<u64>(), ticks in 0usize..400) {
            let config = GameConfig::default();
            let (mut field, mut rng) = populated(seed, &config);
            for _ in 0..ticks {
                field.update(true, &config, &mut rng);
            }
            let platforms: Vec<_> = field.iter().collect();
            for pair in platforms.windows(2) {
                let gap = pair[1].bottom() - pair[0].top();
                prop_assert!(gap >= -EPSILON && gap <= config.max_platform_gap + EPSILON);
            }
        }

        #[test]
        fn prop_reclaim_removes_exactly_off_stage(seed in any::<u64>(), drop in 0.0f32..900.0) {
            let config = GameConfig::default();
            let (mut field, mut rng) = populated(seed, &config);
            field.advance(drop);
            let on_stage: Vec<u32> = field
                .iter()
                .filter(|p| !p.is_below_stage())
                .map(|p| p.id)
                .collect();
            field.reclaim_below_stage(&config, &mut rng);
            let remaining: Vec<u32> = field.iter().map(|p| p.id).collect();
            prop_assert_eq!(remaining, on_stage);
        }

        #[test]
        fn prop_recycle_leaves_nothing_below_stage(
            seed in any::<u64>(),
            count in 1usize..8,
            drop in 0.0f32..2000.0,
        ) {
            let config =
                GameConfig::default().with_generation(GenerationStrategy::Recycle { count });
            let (mut field, mut rng) = populated(seed, &config);
            field.advance(drop);
            field.reclaim_below_stage(&config, &mut rng);
            prop_assert_eq!(field.len(), count);
            prop_assert!(field.iter().all(|p| !p.is_below_stage()));
            let ids: Vec<u32> = field.iter().map(|p| p.id).collect();
            prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
