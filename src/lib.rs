//! Food scanner backend: upload tickets, image → nutrition pipeline, result
//! lookup, and a diet-plan chatbot hook. Each feature ships as its own
//! Lambda binary under `src/bin`.

pub mod app;
pub mod config;
pub mod dialog;
pub mod error;
pub mod nutritionix;
pub mod results;
pub mod scanner;
pub mod state;
pub mod storage;
pub mod telemetry;
pub mod uploads;
pub mod vision;
