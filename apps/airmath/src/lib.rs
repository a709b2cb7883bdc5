pub mod error;
pub mod presenter;
pub mod queue;
pub mod runner;
pub mod script;

// Re-export the core crates under their functional names.
pub use am_app as app;
pub use am_canvas as canvas;
pub use am_gesture as gesture;
pub use am_math as math;
pub use am_ocr as ocr;
pub use am_platform as platform;
pub use am_settings as settings;

pub use error::AppError;
pub use presenter::{ConsolePresenter, Presenter};
pub use queue::FrameQueue;
pub use runner::{Pipeline, Runner};
