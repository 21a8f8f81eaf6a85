use std::time::Duration;

use crate::games::SessionRng;
use super::settings::GameSettings;
use super::snake::Snake;
use super::types::{Direction, FieldSize, Point};

/// Random probes before falling back to sampling from the free cells directly.
const FOOD_SAMPLING_ATTEMPTS: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Moved,
    Ate { score: u32 },
    Collided { at: Point },
}

#[derive(Clone, Debug)]
pub struct SnakeGameState {
    pub snake: Snake,
    pub direction: Direction,
    pub food: Option<Point>,
    pub score: u32,
    pub tick_interval: Duration,
    settings: GameSettings,
}

impl SnakeGameState {
    pub fn new(settings: GameSettings, rng: &mut SessionRng) -> Self {
        let snake = Snake::new(settings.start_position());
        let food = place_food(&settings.field_size(), &snake, rng);

        Self {
            snake,
            direction: settings.start_direction,
            food,
            score: 0,
            tick_interval: settings.initial_tick_interval(),
            settings,
        }
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn field_size(&self) -> FieldSize {
        self.settings.field_size()
    }

    /// Cells per second at the current tick interval.
    pub fn speed(&self) -> u32 {
        let millis = self.tick_interval.as_millis().max(1) as f64;
        (1000.0 / millis).round() as u32
    }

    /// Turns the snake unless the turn would put the head straight onto the neck.
    /// Returns whether the direction was accepted.
    pub fn change_direction(&mut self, direction: Direction) -> bool {
        if let Some(neck) = self.snake.neck()
            && self.field_size().step(self.snake.head(), direction) == neck
        {
            return false;
        }

        self.direction = direction;
        true
    }

    pub fn tick(&mut self, rng: &mut SessionRng) -> TickOutcome {
        let field_size = self.field_size();
        let next_head = field_size.step(self.snake.head(), self.direction);

        if self.snake.contains(&next_head) {
            return TickOutcome::Collided { at: next_head };
        }

        self.snake.push_head(next_head);

        if self.food == Some(next_head) {
            self.score += 1;
            self.food = place_food(&field_size, &self.snake, rng);
            self.tick_interval = self
                .tick_interval
                .saturating_sub(self.settings.tick_decrement())
                .max(self.settings.min_tick_interval());
            return TickOutcome::Ate { score: self.score };
        }

        self.snake.pop_tail();
        TickOutcome::Moved
    }
}

fn place_food(field_size: &FieldSize, snake: &Snake, rng: &mut SessionRng) -> Option<Point> {
    if snake.len() >= field_size.cell_count() {
        return None;
    }

    for _ in 0..FOOD_SAMPLING_ATTEMPTS {
        let pos = Point::new(
            rng.random_range(0..field_size.width),
            rng.random_range(0..field_size.height),
        );
        if !snake.contains(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Point> = field_size.cells().filter(|p| !snake.contains(p)).collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.random_range(0..free.len())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_state(segments: &[Point], direction: Direction, food: Option<Point>) -> SnakeGameState {
        let settings = GameSettings::default();
        SnakeGameState {
            snake: Snake::from_segments(segments),
            direction,
            food,
            score: 0,
            tick_interval: settings.initial_tick_interval(),
            settings,
        }
    }

    #[test]
    fn test_new_state_has_food_off_the_snake() {
        let mut rng = SessionRng::new(1);

        let state = SnakeGameState::new(GameSettings::default(), &mut rng);

        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Point::new(9, 9));
        assert_eq!(state.direction, Direction::Right);
        let food = state.food.unwrap();
        assert!(!state.snake.contains(&food));
    }

    #[test]
    fn test_change_direction_rejected_only_towards_neck() {
        let body = [Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)];

        for direction in Direction::ALL {
            let mut state = create_state(&body, Direction::Right, None);
            let head = state.snake.head();
            let lands_on_neck = state.field_size().step(head, direction) == Point::new(4, 5);

            let accepted = state.change_direction(direction);

            assert_eq!(accepted, !lands_on_neck, "direction {:?}", direction);
            if lands_on_neck {
                assert_eq!(state.direction, Direction::Right);
            } else {
                assert_eq!(state.direction, direction);
            }
        }
    }

    #[test]
    fn test_change_direction_uses_neck_not_last_direction() {
        let body = [Point::new(5, 5), Point::new(4, 5)];
        let mut state = create_state(&body, Direction::Right, None);

        assert!(state.change_direction(Direction::Up));
        assert!(!state.change_direction(Direction::Left));
        assert_eq!(state.direction, Direction::Up);
    }

    #[test]
    fn test_change_direction_checks_neck_across_the_edge() {
        let body = [Point::new(0, 5), Point::new(19, 5)];
        let mut state = create_state(&body, Direction::Right, None);

        assert!(!state.change_direction(Direction::Left));
    }

    #[test]
    fn test_single_segment_accepts_reverse() {
        let mut state = create_state(&[Point::new(5, 5)], Direction::Right, None);

        assert!(state.change_direction(Direction::Left));
        assert_eq!(state.direction, Direction::Left);
    }

    #[test]
    fn test_single_segment_never_collides() {
        let mut rng = SessionRng::new(3);
        let mut state = create_state(&[Point::new(9, 9)], Direction::Right, None);

        for i in 0..200 {
            state.change_direction(Direction::ALL[i % 4]);
            let outcome = state.tick(&mut rng);
            assert_eq!(outcome, TickOutcome::Moved);
            assert_eq!(state.snake.len(), 1);
        }
    }

    #[test]
    fn test_tick_drops_tail_without_growth() {
        let mut rng = SessionRng::new(4);
        let body = [Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)];
        let mut state = create_state(&body, Direction::Right, Some(Point::new(0, 0)));

        let outcome = state.tick(&mut rng);

        assert_eq!(outcome, TickOutcome::Moved);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Point::new(6, 5));
        assert_eq!(state.snake.tail(), Point::new(4, 5));
        assert!(!state.snake.contains(&Point::new(3, 5)));
    }

    #[test]
    fn test_repeated_ticks_preserve_length() {
        let mut rng = SessionRng::new(5);
        let body = [Point::new(5, 5), Point::new(4, 5), Point::new(3, 5)];
        let mut state = create_state(&body, Direction::Down, None);

        for _ in 0..50 {
            let tail_before = state.snake.tail();
            assert_eq!(state.tick(&mut rng), TickOutcome::Moved);
            assert_eq!(state.snake.len(), 3);
            assert!(!state.snake.contains(&tail_before) || state.snake.head() == tail_before);
        }
    }

    #[test]
    fn test_eating_grows_by_one_and_replaces_food() {
        let mut rng = SessionRng::new(6);
        let body = [Point::new(5, 5), Point::new(4, 5)];
        let mut state = create_state(&body, Direction::Right, Some(Point::new(6, 5)));

        let outcome = state.tick(&mut rng);

        assert_eq!(outcome, TickOutcome::Ate { score: 1 });
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 3);
        assert_eq!(state.snake.head(), Point::new(6, 5));
        let food = state.food.unwrap();
        assert!(!state.snake.contains(&food));
    }

    #[test]
    fn test_eating_speeds_up_until_minimum() {
        let mut rng = SessionRng::new(7);
        let mut state = create_state(&[Point::new(0, 0)], Direction::Right, Some(Point::new(1, 0)));
        let settings = state.settings().clone();

        state.tick(&mut rng);
        assert_eq!(
            state.tick_interval,
            settings.initial_tick_interval() - settings.tick_decrement()
        );

        state.tick_interval = settings.min_tick_interval() + Duration::from_millis(1);
        state.food = Some(Point::new(2, 0));
        state.tick(&mut rng);

        assert_eq!(state.tick_interval, settings.min_tick_interval());
    }

    #[test]
    fn test_head_wraps_at_max_x() {
        let mut rng = SessionRng::new(8);
        let mut state = create_state(&[Point::new(19, 3)], Direction::Right, None);

        state.tick(&mut rng);

        assert_eq!(state.snake.head(), Point::new(0, 3));
    }

    #[test]
    fn test_collision_leaves_body_untouched() {
        let mut rng = SessionRng::new(9);
        let body = [
            Point::new(5, 5),
            Point::new(5, 6),
            Point::new(6, 6),
            Point::new(6, 5),
            Point::new(7, 5),
        ];
        let mut state = create_state(&body, Direction::Right, None);

        let outcome = state.tick(&mut rng);

        assert_eq!(outcome, TickOutcome::Collided { at: Point::new(6, 5) });
        assert_eq!(state.snake.len(), 5);
        assert_eq!(state.snake.head(), Point::new(5, 5));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_moving_onto_tail_is_a_collision() {
        let mut rng = SessionRng::new(10);
        let body = [
            Point::new(5, 5),
            Point::new(5, 6),
            Point::new(6, 6),
            Point::new(6, 5),
        ];
        let mut state = create_state(&body, Direction::Right, None);

        assert_eq!(state.tick(&mut rng), TickOutcome::Collided { at: Point::new(6, 5) });
    }

    #[test]
    fn test_food_fills_last_free_cell() {
        let mut rng = SessionRng::new(11);
        let field = FieldSize::new(5, 5);
        let free_cell = Point::new(2, 3);
        let segments: Vec<Point> = field.cells().filter(|p| *p != free_cell).collect();
        let snake = Snake::from_segments(&segments);

        assert_eq!(place_food(&field, &snake, &mut rng), Some(free_cell));
    }

    #[test]
    fn test_full_board_has_no_food() {
        let mut rng = SessionRng::new(12);
        let field = FieldSize::new(5, 5);
        let segments: Vec<Point> = field.cells().collect();
        let snake = Snake::from_segments(&segments);

        assert_eq!(place_food(&field, &snake, &mut rng), None);
    }

    #[test]
    fn test_speed_is_rounded_cells_per_second() {
        let mut state = create_state(&[Point::new(0, 0)], Direction::Right, None);

        assert_eq!(state.speed(), 8);
        state.tick_interval = Duration::from_millis(40);
        assert_eq!(state.speed(), 25);
    }
}
