use std::time::{Duration, Instant};

use airmath::AppError;
use airmath::presenter::ConsolePresenter;
use airmath::runner::{Pipeline, Runner};
use airmath::script::{self, ScriptedPose, SyntheticSource};
use am_ocr::{EngineRecognizer, OcrConfig, models_exist};
use am_settings::ConfigManager;

/// Headless demo run: a scripted hand writes a stroke, hovers, then makes a
/// fist to trigger the solve pipeline. With OCR models installed the stroke is
/// recognized for real; without them a canned expression stands in.
fn main() -> Result<(), AppError> {
    let config = ConfigManager::new();
    let settings = config.get();

    let mut steps = Vec::new();
    // Hold Write, then drag the fingertip across the canvas.
    for i in 0..30 {
        let x = 0.2 + 0.02 * i as f32;
        steps.push(Some(script::write_pose(x, 0.5)));
    }
    // Hover away, then hold a fist to solve.
    steps.push(None);
    for _ in 0..10 {
        steps.push(Some(script::solve_pose()));
    }

    let pose = ScriptedPose::new(steps);
    let source = SyntheticSource::new(settings.frame_width, settings.frame_height);
    let mut presenter = ConsolePresenter::default();

    let ocr_config = OcrConfig::new(settings.models_dir.clone(), settings.ocr_language.clone());
    let mut runner = Runner::start(Box::new(source), &settings);
    let deadline = Instant::now() + Duration::from_secs(3);

    if models_exist(&ocr_config) {
        let recognizer = EngineRecognizer::new(&ocr_config)?;
        let mut pipeline = Pipeline::new(pose, recognizer, &settings);
        runner.run_until(&mut pipeline, &mut presenter, deadline);
    } else {
        eprintln!(
            "OCR models not found under '{}', replaying a canned expression",
            settings.models_dir
        );
        let recognizer = script::FixedRecognizer::new("x+2=5");
        let mut pipeline = Pipeline::new(pose, recognizer, &settings);
        runner.run_until(&mut pipeline, &mut presenter, deadline);
    }

    runner.shutdown();
    Ok(())
}
