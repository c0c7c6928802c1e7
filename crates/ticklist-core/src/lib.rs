pub mod config;
pub mod controller;
pub mod ids;
pub mod list;
pub mod row;
pub mod screen;
pub mod task;

pub use config::ScreenConfig;
pub use controller::{Prompt, PromptChoice, PromptKind, ScreenController, ScreenSnapshot, SubscriptionId};
pub use ids::{Clock, IdMinter, ManualClock, SystemClock};
pub use screen::{ScreenEvent, ScreenState};
pub use task::{TaskId, TaskRecord};
