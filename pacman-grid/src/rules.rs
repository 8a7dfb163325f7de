/// The numbers behind a game. Every field is public so drivers can tweak single values starting
/// from [GridRules::default()]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRules {
    /// How many of its own moves a ghost stays scared after Pacman eats a capsule
    pub scared_time: u32,
    /// Added for every piece of food Pacman eats
    pub food_score: f64,
    /// Added when Pacman eats a scared ghost
    pub ghost_eaten_score: f64,
    /// Added when the last piece of food is eaten
    pub win_score: f64,
    /// Subtracted when an unscared ghost catches Pacman
    pub lose_penalty: f64,
    /// Subtracted for every move Pacman makes, standing still included
    pub time_penalty: f64,
}

impl Default for GridRules {
    fn default() -> Self {
        Self {
            scared_time: 40,
            food_score: 10.0,
            ghost_eaten_score: 200.0,
            win_score: 500.0,
            lose_penalty: 500.0,
            time_penalty: 1.0,
        }
    }
}
