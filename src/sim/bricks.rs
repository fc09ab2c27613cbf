//! Brick-field collision resolver
//!
//! One pass per playing tick, in creation (row-major) order. The pass counts
//! live bricks before anything is destroyed, so clearing the last brick is
//! only reported as a win on the following tick.

use super::state::{Ball, Brick};

/// Result of one resolver pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrickScan {
    /// Live bricks counted before this pass destroyed anything
    pub remaining: usize,
    /// Index of the brick destroyed this pass, if any
    pub destroyed: Option<usize>,
}

impl BrickScan {
    /// No live bricks were left when the pass started
    pub fn cleared(&self) -> bool {
        self.remaining == 0
    }
}

/// Destroy at most one brick the ball overlaps and bounce the ball off it.
pub fn resolve_bricks(bricks: &mut [Brick], ball: &mut Ball) -> BrickScan {
    let ball_rect = ball.rect();
    let mut remaining = 0;
    let mut destroyed = None;

    for (index, brick) in bricks.iter_mut().enumerate() {
        if brick.hit {
            continue;
        }
        remaining += 1;

        if destroyed.is_some() || !ball_rect.overlaps(&brick.rect) {
            continue;
        }

        brick.hit = true;
        destroyed = Some(index);
        bounce_off(ball, brick);
        log::debug!("Brick {} destroyed (tier {})", index, brick.tier.0);
    }

    BrickScan { remaining, destroyed }
}

/// Bounce along the axis with the shallower penetration
fn bounce_off(ball: &mut Ball, brick: &Brick) {
    let ball_rect = ball.rect();
    let overlap = ball_rect.penetration2(&brick.rect);
    let delta = ball_rect.center2() - brick.rect.center2();

    if overlap.x < overlap.y {
        // Side hit
        ball.set_horizontal(delta.x < 0);
    } else {
        ball.set_vertical(delta.y < 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{BrickField, BrickTier};

    fn field() -> Vec<Brick> {
        BrickField::standard().iter().copied().collect()
    }

    #[test]
    fn test_no_overlap_counts_all() {
        let mut bricks = field();
        let mut ball = Ball::default();
        let scan = resolve_bricks(&mut bricks, &mut ball);
        assert_eq!(scan, BrickScan { remaining: 40, destroyed: None });
        assert!(bricks.iter().all(|b| !b.hit));
    }

    #[test]
    fn test_hit_from_below_flips_down() {
        let mut bricks = vec![Brick::new(100, 100, BrickTier(0))];
        // Ball just under the brick, overlapping its bottom edge by 2px
        let mut ball = Ball::at(150, 128);
        ball.set_vertical(true);
        let scan = resolve_bricks(&mut bricks, &mut ball);
        assert_eq!(scan.destroyed, Some(0));
        assert!(bricks[0].hit);
        assert!(ball.moving_down);
        // Horizontal direction untouched
        assert!(ball.moving_right);
    }

    #[test]
    fn test_hit_from_side_flips_horizontal() {
        let mut bricks = vec![Brick::new(100, 100, BrickTier(0))];
        // Ball at the brick's left edge, vertically centered on it
        let mut ball = Ball::at(87, 107);
        ball.set_horizontal(false);
        ball.set_vertical(true);
        resolve_bricks(&mut bricks, &mut ball);
        assert!(bricks[0].hit);
        assert!(ball.moving_left);
        // Vertical direction untouched
        assert!(ball.moving_up);
    }

    #[test]
    fn test_equal_depth_bounces_vertically() {
        // Bottom-right corner placement where both doubled depths are equal
        let mut bricks = vec![Brick::new(100, 100, BrickTier(0))];
        let mut ball = Ball::at(100 + 125 - 5, 100 + 30 - 5);
        ball.set_vertical(true);
        resolve_bricks(&mut bricks, &mut ball);
        // overlap x = 140 - |2*220+15 - (200+125)| = 140 - 130 = 10
        // overlap y = 45 - |2*125+15 - (200+30)| = 45 - 35 = 10
        assert!(ball.moving_down);
    }

    #[test]
    fn test_only_first_overlapping_brick_destroyed() {
        let mut bricks = vec![
            Brick::new(100, 100, BrickTier(0)),
            Brick::new(225, 100, BrickTier(0)),
        ];
        // Straddles the shared edge at x = 225
        let mut ball = Ball::at(218, 125);
        let scan = resolve_bricks(&mut bricks, &mut ball);
        assert_eq!(scan.destroyed, Some(0));
        assert_eq!(scan.remaining, 2);
        assert!(bricks[0].hit);
        assert!(!bricks[1].hit);
    }

    #[test]
    fn test_hit_bricks_are_skipped() {
        let mut bricks = vec![Brick::new(100, 100, BrickTier(0))];
        bricks[0].hit = true;
        let mut ball = Ball::at(150, 110);
        let before = ball;
        let scan = resolve_bricks(&mut bricks, &mut ball);
        assert_eq!(scan, BrickScan { remaining: 0, destroyed: None });
        assert!(scan.cleared());
        assert_eq!(ball, before);
    }

    #[test]
    fn test_last_brick_win_is_delayed() {
        let mut bricks = vec![Brick::new(100, 100, BrickTier(0))];
        let mut ball = Ball::at(150, 128);
        let scan = resolve_bricks(&mut bricks, &mut ball);
        assert_eq!(scan.remaining, 1);
        assert!(!scan.cleared());
        let scan = resolve_bricks(&mut bricks, &mut ball);
        assert!(scan.cleared());
    }
}
