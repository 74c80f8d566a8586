pub mod child_layout;
pub mod components;
pub mod fractal_error;
pub mod fractal_settings;
pub mod generator_plugin;
pub mod seeded_or_not;
