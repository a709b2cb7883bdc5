use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use am_app::{Action, Effect, SessionModel};
use am_canvas::{Canvas, Point};
use am_gesture::{GestureClassifier, GestureStabilizer};
use am_math::{ExpressionSolver, SolveOutcome, normalize_expression};
use am_ocr::{RecognizedText, TextRecognizer, prepare_for_ocr};
use am_platform::{Frame, FrameSource, PoseEstimator};
use am_settings::Settings;

use crate::presenter::Presenter;
use crate::queue::FrameQueue;

/// The per-tick processing chain: pose → classify → stabilize → session.
///
/// Everything in here runs synchronously inside one tick, including the solve
/// pipeline when a Solve event fires; the canvas has a single writer and needs
/// no locking.
pub struct Pipeline<P, R> {
    pose: P,
    recognizer: R,
    classifier: GestureClassifier,
    stabilizer: GestureStabilizer,
    solver: ExpressionSolver,
    session: SessionModel,
    frame_width: u32,
    frame_height: u32,
}

impl<P: PoseEstimator, R: TextRecognizer> Pipeline<P, R> {
    pub fn new(pose: P, recognizer: R, settings: &Settings) -> Self {
        Self {
            pose,
            recognizer,
            classifier: GestureClassifier::new(),
            stabilizer: GestureStabilizer::with_params(
                settings.stability_frames,
                Duration::from_millis(settings.gesture_cooldown_ms),
            ),
            solver: ExpressionSolver::new(),
            session: SessionModel::new(Canvas::with_style(
                settings.frame_width,
                settings.frame_height,
                settings.stroke_thickness,
                settings.erase_radius,
            )),
            frame_width: settings.frame_width,
            frame_height: settings.frame_height,
        }
    }

    pub fn session(&self) -> &SessionModel {
        &self.session
    }

    /// Feed a user-control action (operation selector, clear button) through
    /// the same reducer the gesture path uses.
    pub fn apply(&mut self, action: Action) {
        let effects = self.session.reduce(action);
        self.handle_effects(effects);
    }

    /// Process one frame: slow layer (stabilized events), then fast layer
    /// (per-frame fingertip coupling).
    pub fn process_frame(&mut self, frame: &Frame, now: Instant) {
        let landmarks = self.pose.detect(frame);

        let raw = self.classifier.classify(landmarks.as_ref());
        if let Some(event) = self.stabilizer.update(raw, now) {
            let effects = self.session.reduce(Action::Stabilized(event.gesture));
            self.handle_effects(effects);
        }

        let fingertip = landmarks.map(|hand| {
            let tip = hand.fingertip();
            Point::from_normalized(tip.x, tip.y, self.frame_width, self.frame_height)
        });
        self.session.reduce(Action::Frame { fingertip });
    }

    fn handle_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::RecognizeCanvas => self.run_solve(),
            }
        }
    }

    /// OCR → normalize → solve, synchronously, feeding the outcome back into
    /// the session. Failures never escape: an empty recognition aborts without
    /// touching the display, and engine errors become an `Error: ...` report.
    fn run_solve(&mut self) {
        if self.session.canvas().is_blank() {
            self.session.reduce(Action::RecognitionEmpty);
            return;
        }

        let image = prepare_for_ocr(self.session.canvas());
        let spans = match self.recognizer.recognize(&image) {
            Ok(spans) => spans,
            Err(err) => {
                self.session.reduce(Action::SolveCompleted {
                    expression: String::new(),
                    outcome: SolveOutcome::Failed {
                        message: format!("could not process: {err}"),
                    },
                });
                return;
            }
        };

        match RecognizedText::from_spans(&spans) {
            RecognizedText::Empty => {
                self.session.reduce(Action::RecognitionEmpty);
            }
            RecognizedText::Text(raw) => {
                let expression = normalize_expression(&raw);
                if expression.is_empty() {
                    self.session.reduce(Action::RecognitionEmpty);
                    return;
                }
                let outcome = self.solver.solve(&expression, self.session.operation());
                self.session.reduce(Action::SolveCompleted {
                    expression,
                    outcome,
                });
            }
        }
    }
}

/// Owns the acquisition thread and the processing tick loop.
pub struct Runner {
    queue: Arc<FrameQueue>,
    running: Arc<AtomicBool>,
    capture: Option<JoinHandle<()>>,
    tick_interval: Duration,
}

impl Runner {
    /// Spawn the acquisition flow over the given source.
    ///
    /// The capture thread pushes every successfully read frame into the
    /// bounded queue; failed reads are skipped without backoff.
    pub fn start(mut source: Box<dyn FrameSource>, settings: &Settings) -> Self {
        let queue = Arc::new(FrameQueue::new());
        let running = Arc::new(AtomicBool::new(true));

        let capture = {
            let queue = Arc::clone(&queue);
            let running = Arc::clone(&running);
            thread::spawn(move || {
                while running.load(Ordering::Relaxed) {
                    match source.read() {
                        Some(frame) => queue.push(frame),
                        None => thread::sleep(Duration::from_millis(1)),
                    }
                }
            })
        };

        let fps = settings.target_fps.max(1);
        Self {
            queue,
            running,
            capture: Some(capture),
            tick_interval: Duration::from_millis((1000 / fps) as u64),
        }
    }

    /// One processing tick: take at most one frame; no frame means a no-op.
    pub fn tick<P: PoseEstimator, R: TextRecognizer>(
        &self,
        pipeline: &mut Pipeline<P, R>,
        presenter: &mut dyn Presenter,
    ) {
        if let Some(frame) = self.queue.try_pop() {
            pipeline.process_frame(&frame, Instant::now());
            presenter.present(pipeline.session());
        }
    }

    /// Run the tick loop until the deadline passes or `stop` is called.
    pub fn run_until<P: PoseEstimator, R: TextRecognizer>(
        &self,
        pipeline: &mut Pipeline<P, R>,
        presenter: &mut dyn Presenter,
        deadline: Instant,
    ) {
        while self.running.load(Ordering::Relaxed) && Instant::now() < deadline {
            let tick_start = Instant::now();
            self.tick(pipeline, presenter);
            let elapsed = tick_start.elapsed();
            if elapsed < self.tick_interval {
                thread::sleep(self.tick_interval - elapsed);
            }
        }
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Relaxed);
    }

    /// Signal the running flag and join the acquisition thread before the
    /// source (and with it the camera) is released.
    pub fn shutdown(&mut self) {
        self.stop();
        if let Some(handle) = self.capture.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Runner {
    fn drop(&mut self) {
        self.shutdown();
    }
}
