use am_app::SessionModel;
use am_app::display::{mode_line, writing_line};

/// Read-only display sink for the session state.
///
/// Widget layout and rendering live outside the core; the presenter receives
/// the three read-only values a UI shows (mode, writing status, latest
/// result).
pub trait Presenter {
    fn present(&mut self, session: &SessionModel);
}

/// Console presenter: prints status lines when they change.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    last_status: String,
    last_report: String,
}

impl Presenter for ConsolePresenter {
    fn present(&mut self, session: &SessionModel) {
        let status = format!(
            "{} | {}",
            mode_line(session.mode()),
            writing_line(session.is_writing())
        );
        if status != self.last_status {
            println!("{status}");
            self.last_status = status;
        }

        if let Some(report) = session.report() {
            let report = report.to_string();
            if report != self.last_report {
                println!("{report}");
                self.last_report = report;
            }
        }
    }
}
