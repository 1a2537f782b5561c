/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, network, console).
pub mod document_reader;
pub mod language_repository;
pub mod output_presenter;
pub mod progress_reporter;

pub use document_reader::DocumentReader;
pub use language_repository::LanguageRepository;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
